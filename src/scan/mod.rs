//! Path length checking
//!
//! The whole check is a single linear pass:
//! validate → enumerate → classify → report → archive (optional).
//! Nothing survives between runs except the files written into the root.

pub mod archive;
pub mod classify;
pub mod report;
pub mod walker;

use std::path::{Path, PathBuf};

use crate::core::config::{ARCHIVE_EXTENSION, LONG_REPORT_PREFIX};
use crate::core::{CancelFlag, CheckStatistics, ProgressSink, DEFAULT_LENGTH_LIMIT};
use crate::error::{CheckError, Result};
use crate::utils::char_len;

pub use archive::archive;
pub use classify::{classify, classify_with_progress};
pub use report::{report, ReportPaths};
pub use walker::{enumerate, enumerate_cancellable};

/// A file path as it appeared under traversal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathRecord {
    /// Filesystem path, root prefix included
    pub path: PathBuf,
    /// Text form written to reports and measured against the limit
    pub text: String,
    /// Character count of `text`
    pub length: usize,
}

impl PathRecord {
    pub fn new(path: PathBuf) -> Self {
        let text = path.to_string_lossy().into_owned();
        let length = char_len(&text);
        Self { path, text, length }
    }

    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let length = char_len(&text);
        Self {
            path: PathBuf::from(&text),
            text,
            length,
        }
    }
}

/// Long and short paths, partitioning every enumerated file exactly once
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    pub long: Vec<PathRecord>,
    pub short: Vec<PathRecord>,
}

impl Classification {
    fn place(&mut self, record: PathRecord, limit: usize) {
        if record.length > limit {
            self.long.push(record);
        } else {
            self.short.push(record);
        }
    }

    pub fn len(&self) -> usize {
        self.long.len() + self.short.len()
    }

    pub fn is_empty(&self) -> bool {
        self.long.is_empty() && self.short.is_empty()
    }
}

/// Parameters for one check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOptions {
    pub root: Option<PathBuf>,
    pub length_limit: i64,
    pub archive: bool,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            root: None,
            length_limit: DEFAULT_LENGTH_LIMIT,
            archive: true,
        }
    }
}

impl CheckOptions {
    pub fn new(root: impl Into<PathBuf>, length_limit: i64) -> Self {
        Self {
            root: Some(root.into()),
            length_limit,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_archive(mut self, archive: bool) -> Self {
        self.archive = archive;
        self
    }

    /// Checks the options before any filesystem work
    ///
    /// The folder is checked before the limit, then the folder's existence.
    pub fn validate(&self) -> Result<(PathBuf, usize)> {
        let root = match &self.root {
            Some(root) if !root.as_os_str().is_empty() => root.clone(),
            _ => return Err(CheckError::NoFolderSelected),
        };
        if self.length_limit <= 0 {
            return Err(CheckError::InvalidLimit(self.length_limit));
        }
        if !root.is_dir() {
            return Err(CheckError::RootNotFound(root));
        }
        let limit = usize::try_from(self.length_limit).unwrap_or(usize::MAX);
        Ok((root, limit))
    }
}

/// Everything a completed check produced
#[derive(Debug, Clone)]
pub struct CheckReport {
    pub root: PathBuf,
    pub limit: usize,
    pub reports: ReportPaths,
    pub archive: Option<PathBuf>,
    pub classification: Classification,
    pub statistics: CheckStatistics,
}

#[derive(Debug, Clone)]
pub enum CheckOutcome {
    /// The root contained no files; nothing was written
    NoFiles,
    Completed(Box<CheckReport>),
}

/// Runs a full check
///
/// Progress is reported through `sink` while classifying, and `cancel` is
/// honoured between paths during enumeration and classification, before the
/// reports are written and between archive members. One timestamp is shared
/// by the reports and the archive of a run.
pub fn run_check(
    options: &CheckOptions,
    sink: &dyn ProgressSink,
    cancel: &CancelFlag,
) -> Result<CheckOutcome> {
    let (root, limit) = options.validate()?;
    log::debug!(
        "Check: root={root:?} limit={limit} archive={}",
        options.archive
    );

    let paths = enumerate_cancellable(&root, cancel)?;
    if paths.is_empty() {
        log::debug!("Check: no files under {root:?}");
        return Ok(CheckOutcome::NoFiles);
    }

    let classification = classify_with_progress(paths, limit, sink, cancel)?;
    if cancel.is_cancelled() {
        return Err(CheckError::Cancelled);
    }
    let timestamp = report::timestamp();
    let reports = report::write_reports(
        &classification.long,
        &classification.short,
        &root,
        &timestamp,
    )?;

    let archive = if options.archive && !classification.long.is_empty() {
        let zip_path = archive_path(&root, &timestamp);
        if let Err(e) = archive::archive(&classification.long, &root, &zip_path, cancel) {
            log::warn!(
                "Reports were written to {:?} and {:?} before archiving failed",
                reports.long,
                reports.short
            );
            return Err(e);
        }
        Some(zip_path)
    } else {
        None
    };

    let statistics = CheckStatistics::from_classification(&classification, limit);
    Ok(CheckOutcome::Completed(Box::new(CheckReport {
        root,
        limit,
        reports,
        archive,
        classification,
        statistics,
    })))
}

/// `<root>/long_filenames_<timestamp>.zip`
pub fn archive_path(root: &Path, timestamp: &str) -> PathBuf {
    root.join(report::output_file_name(
        LONG_REPORT_PREFIX,
        timestamp,
        ARCHIVE_EXTENSION,
    ))
}
