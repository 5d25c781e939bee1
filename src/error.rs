use std::{io, path::PathBuf};

use thiserror::Error;

/// Error type for loading and reporting employee records.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The employees file is not where we expect it to be.
    #[error("file '{}' does not exist", path.display())]
    NotFound { path: PathBuf },

    /// The file exists, but reading it failed part way through.
    #[error("{0}")]
    Read(#[from] csv::Error),

    /// Writing a report block failed.
    #[error("failed to write report: {0}")]
    Output(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, ReportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_mentions_path() {
        let err = ReportError::NotFound {
            path: PathBuf::from("/nowhere/employees.dat"),
        };
        assert_eq!(
            err.to_string(),
            "file '/nowhere/employees.dat' does not exist"
        );
    }

    #[test]
    fn read_error_shows_underlying_message() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let err = ReportError::Read(csv::Error::from(io_err));
        assert_eq!(err.to_string(), "access denied");
    }
}
