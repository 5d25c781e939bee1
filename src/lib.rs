#[macro_use]
extern crate log;

use std::{
    fs::File,
    io::{BufReader, Read, Write},
    path::{Path, PathBuf},
};

mod domain;
mod error;

pub use domain::{BY_FAMILY_NAME_HEADER, BY_ID_HEADER, EMPLOYEES_FILE_NAME, Record};
pub use error::{ReportError, Result};

/// Printed after every report block.
///
/// This is a line holding a single space rather than an empty one, which is
/// what the reports have always looked like, and we keep it byte-for-byte.
const BLOCK_SEPARATOR: &str = " ";

/// Location of the employees file: next to the running executable.
///
/// If the executable path cannot be determined, we fall back to a path
/// relative to the current working directory.
pub fn employees_path() -> PathBuf {
    match std::env::current_exe() {
        Ok(exe) => exe
            .parent()
            .map(|dir| dir.join(EMPLOYEES_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(EMPLOYEES_FILE_NAME)),
        Err(err) => {
            warn!("could not locate the executable ({err}), using working directory");
            PathBuf::from(EMPLOYEES_FILE_NAME)
        }
    }
}

/// Read employee records from the `reader`, one per line, in file order.
///
/// Any line containing `#` is a comment and gets dropped. Every other line is
/// kept verbatim, whitespace included. Empty lines carry no record and are
/// skipped, while lines holding only whitespace are kept.
///
/// We let the csv reader do the line handling, but with quoting disabled
/// it is nothing more than a comma splitter, and so joining the fields back
/// with commas gives us the original line.
pub fn load<R>(reader: R) -> Result<Vec<Record>>
where
    R: Read,
{
    let mut records = Vec::new();
    let mut comments = 0usize;
    for result in csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::None)
        .from_reader(reader)
        .into_byte_records()
    {
        let fields = result?;
        let joined = fields.iter().collect::<Vec<_>>().join(&b","[..]);
        let line = String::from_utf8_lossy(&joined);
        if Record::is_comment(&line) {
            comments += 1;
            continue;
        }
        records.push(Record::new(line));
    }
    debug!("loaded {} records, skipped {} comment lines", records.len(), comments);
    Ok(records)
}

/// Load the records stored at `path`.
///
/// Fails with [`ReportError::NotFound`] before touching the file if it is not
/// there. The file is closed before this returns, whatever the outcome.
pub fn load_file(path: &Path) -> Result<Vec<Record>> {
    if !path.is_file() {
        return Err(ReportError::NotFound {
            path: path.to_path_buf(),
        });
    }
    debug!("reading employees from {}", path.display());
    let file = File::open(path).map_err(csv::Error::from)?;
    load(BufReader::new(file))
}

/// Records ordered by employee ID, compared as text.
pub fn sort_by_id(records: &[Record]) -> Vec<Record> {
    let mut sorted = records.to_vec();
    // stable, so equal IDs keep their file order
    sorted.sort_by(|a, b| a.id().cmp(b.id()));
    sorted
}

/// Records ordered by family name, see [`Record::family_name`].
pub fn sort_by_family_name(records: &[Record]) -> Vec<Record> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| a.family_name().cmp(b.family_name()));
    sorted
}

/// Write `header`, then each record on its own line, then the block separator.
pub fn display<W>(writer: &mut W, header: &str, records: &[Record]) -> Result<()>
where
    W: Write,
{
    writeln!(writer, "{header}")?;
    for record in records {
        writeln!(writer, "{record}")?;
    }
    writeln!(writer, "{BLOCK_SEPARATOR}")?;
    Ok(())
}

/// Print both reports for the already loaded `records`: by ID, then by
/// family name.
pub fn report<W>(records: &[Record], mut writer: W) -> Result<()>
where
    W: Write,
{
    let by_id = sort_by_id(records);
    let by_family_name = sort_by_family_name(records);

    display(&mut writer, BY_ID_HEADER, &by_id)?;
    display(&mut writer, BY_FAMILY_NAME_HEADER, &by_family_name)?;
    writer.flush()?;
    Ok(())
}

/// Process the employee lines contained in the `reader` and write both
/// reports to the `writer`.
pub fn process<R, W>(reader: R, writer: W) -> Result<()>
where
    R: Read,
    W: Write,
{
    let records = load(reader)?;
    report(&records, writer)
}

/// Same as [`process`], but reading from the file at `path`.
pub fn run<W>(path: &Path, writer: W) -> Result<()>
where
    W: Write,
{
    let records = load_file(path)?;
    report(&records, writer)
}
