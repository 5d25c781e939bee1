use std::fmt;

// the tool always reads the same file sitting next to the binary; there is
// no flag to point it elsewhere, so a different input means a different
// deployment, not a different invocation
pub const EMPLOYEES_FILE_NAME: &str = "employees.dat";

pub const BY_ID_HEADER: &str = "Processing by employee number...";
pub const BY_FAMILY_NAME_HEADER: &str = "Processing by last (family) Name...";

/// Lines containing this character anywhere are comments.
const COMMENT_MARKER: char = '#';

/// Single employee line, e.g. `42,Ann Baker`.
///
/// We keep the line verbatim and derive the sort keys on demand, since the
/// reports print the records exactly as they appeared in the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    line: String,
}

impl Record {
    pub fn new(line: impl Into<String>) -> Self {
        Self { line: line.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.line
    }

    /// Employee identifier: everything before the first comma.
    ///
    /// Compared as text, and so `"10"` goes before `"2"`.
    pub fn id(&self) -> &str {
        self.line.split(',').next().unwrap_or_default()
    }

    /// Family name: the second token when splitting on a single space.
    ///
    /// For `"4,Jo Van Dyke"` this is `"Van"`, not `"Van Dyke"`. A line
    /// without any space has no such token, in which case we hand out an
    /// empty key.
    pub fn family_name(&self) -> &str {
        self.line.split(' ').nth(1).unwrap_or_default()
    }

    pub fn is_comment(line: &str) -> bool {
        line.contains(COMMENT_MARKER)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.line)
    }
}

impl From<&str> for Record {
    fn from(line: &str) -> Self {
        Self::new(line)
    }
}
