//! Recursive file enumeration

use ignore::WalkBuilder;
use std::io;
use std::path::{Path, PathBuf};

use super::PathRecord;
use crate::core::CancelFlag;
use crate::error::{CheckError, Result};

/// Enumerates every file under `root`
///
/// See [`enumerate_cancellable`].
pub fn enumerate(root: &Path) -> Result<Vec<PathRecord>> {
    enumerate_cancellable(root, &CancelFlag::new())
}

/// Enumerates every file under `root`, checking `cancel` once per entry
///
/// Directories are descended into but never reported. No ignore rules or
/// hidden-file filters apply, and symbolic links are not followed: a link to a
/// directory is skipped, any other link is reported as a file. The first
/// traversal error aborts the walk, so callers never see a partial listing.
pub fn enumerate_cancellable(root: &Path, cancel: &CancelFlag) -> Result<Vec<PathRecord>> {
    log::debug!("Walker: enumerating files under {root:?}");

    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .build();

    let mut records = Vec::new();
    for entry_result in walker {
        if cancel.is_cancelled() {
            return Err(CheckError::Cancelled);
        }

        let entry = entry_result.map_err(classify_walk_error)?;
        let Some(file_type) = entry.file_type() else {
            continue;
        };
        if file_type.is_dir() {
            continue;
        }
        if file_type.is_symlink() && entry.path().is_dir() {
            log::trace!("Walker: skipping directory link {:?}", entry.path());
            continue;
        }

        log::trace!("Walker: found {:?}", entry.path());
        records.push(PathRecord::new(entry.into_path()));
    }

    log::debug!("Walker: found {} files under {root:?}", records.len());
    Ok(records)
}

/// Maps a walk error onto the error kinds callers act on
fn classify_walk_error(err: ignore::Error) -> CheckError {
    let is_permission = err
        .io_error()
        .is_some_and(|io_err| io_err.kind() == io::ErrorKind::PermissionDenied);

    if is_permission {
        let location = error_path(&err)
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "the selected folder".to_string());
        log::debug!("Walker: permission denied at {location}");
        CheckError::PermissionDenied(location)
    } else {
        CheckError::Traversal(err)
    }
}

fn error_path(err: &ignore::Error) -> Option<PathBuf> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path.clone()),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            error_path(err)
        }
        _ => None,
    }
}
