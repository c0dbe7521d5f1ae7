//! Report file writing
//!
//! Each report is written next to its final location under a hidden
//! `.partial` name and renamed once fully flushed, so a report that exists
//! under its final name is always complete.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use super::PathRecord;
use crate::core::config::{
    LONG_REPORT_PREFIX, PARTIAL_SUFFIX, REPORT_EXTENSION, SHORT_REPORT_PREFIX, TIMESTAMP_FORMAT,
};
use crate::error::{CheckError, Result};

/// Locations of the two written reports
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub long: PathBuf,
    pub short: PathBuf,
}

/// Local time formatted for output file names (`YYYYMMDD_HHMMSS`)
pub fn timestamp() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// `<prefix>_<timestamp>.<extension>`
pub fn output_file_name(prefix: &str, timestamp: &str, extension: &str) -> String {
    format!("{prefix}_{timestamp}.{extension}")
}

/// Writes both reports into `destination` using the current local time
pub fn report(long: &[PathRecord], short: &[PathRecord], destination: &Path) -> Result<ReportPaths> {
    write_reports(long, short, destination, &timestamp())
}

/// Writes `long_filenames_<ts>.txt` and `short_filenames_<ts>.txt`
///
/// Either both files end up in place or neither does.
pub fn write_reports(
    long: &[PathRecord],
    short: &[PathRecord],
    destination: &Path,
    timestamp: &str,
) -> Result<ReportPaths> {
    let long_path = destination.join(output_file_name(LONG_REPORT_PREFIX, timestamp, REPORT_EXTENSION));
    let short_path =
        destination.join(output_file_name(SHORT_REPORT_PREFIX, timestamp, REPORT_EXTENSION));

    write_report_file(&long_path, long)?;
    if let Err(e) = write_report_file(&short_path, short) {
        if let Err(cleanup) = fs::remove_file(&long_path) {
            log::warn!("Report: could not remove {long_path:?} after failure: {cleanup}");
        }
        return Err(e);
    }

    log::debug!(
        "Report: wrote {} long paths to {long_path:?} and {} short paths to {short_path:?}",
        long.len(),
        short.len()
    );
    Ok(ReportPaths {
        long: long_path,
        short: short_path,
    })
}

/// Writes one path per line, UTF-8, every line terminated by `\n`
pub fn write_report_file(path: &Path, records: &[PathRecord]) -> Result<()> {
    let partial = partial_path(path);

    let written = write_lines(&partial, records).and_then(|()| fs::rename(&partial, path));
    if let Err(source) = written {
        let _ = fs::remove_file(&partial);
        return Err(CheckError::WriteFailure {
            path: path.to_path_buf(),
            source,
        });
    }
    Ok(())
}

fn write_lines(path: &Path, records: &[PathRecord]) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for record in records {
        writer.write_all(record.text.as_bytes())?;
        writer.write_all(b"\n")?;
    }
    let file = writer.into_inner().map_err(|e| e.into_error())?;
    file.sync_all()
}

/// Hidden sibling used while a file is being written
pub(crate) fn partial_path(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{file_name}.{PARTIAL_SUFFIX}"))
}
