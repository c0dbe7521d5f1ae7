//! Partitioning paths into long and short

use super::{Classification, PathRecord};
use crate::core::{CancelFlag, ProgressEvent, ProgressSink};
use crate::error::{CheckError, Result};

/// Splits `paths` around `limit`
///
/// A path whose character count is strictly greater than `limit` is long,
/// every other path is short. Input order is preserved within each side and
/// no path is dropped.
pub fn classify<I>(paths: I, limit: usize) -> Classification
where
    I: IntoIterator<Item = PathRecord>,
{
    let mut classification = Classification::default();
    for record in paths {
        classification.place(record, limit);
    }
    classification
}

/// Same as [`classify`], emitting a [`ProgressEvent`] after every path
///
/// `cancel` is checked before each path; a tripped flag discards the partial
/// result and returns [`CheckError::Cancelled`].
pub fn classify_with_progress(
    paths: Vec<PathRecord>,
    limit: usize,
    sink: &dyn ProgressSink,
    cancel: &CancelFlag,
) -> Result<Classification> {
    let total = paths.len();
    let mut classification = Classification::default();

    for (index, record) in paths.into_iter().enumerate() {
        if cancel.is_cancelled() {
            log::debug!("Classifier: cancelled after {index} of {total} paths");
            return Err(CheckError::Cancelled);
        }

        log::trace!("Classifier: {} ({} chars)", record.text, record.length);
        classification.place(record, limit);
        sink.on_progress(ProgressEvent {
            processed: index + 1,
            total,
        });
    }

    log::debug!(
        "Classifier: {} long, {} short at limit {limit}",
        classification.long.len(),
        classification.short.len()
    );
    Ok(classification)
}
