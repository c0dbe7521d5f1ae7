//! Progress events, cancellation and the terminal progress bar
//!
//! The classifier never talks to the terminal directly. It emits a
//! [`ProgressEvent`] after every path through a [`ProgressSink`], and the
//! front end decides how to render it.

use anyhow::Result;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::config::{PROGRESS_CHARS, PROGRESS_PREFIX, PROGRESS_TEMPLATE};

/// Snapshot emitted after each path has been classified
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressEvent {
    /// Paths classified so far, including the one that triggered this event
    pub processed: usize,
    /// Total number of paths in this run
    pub total: usize,
}

/// Receiver of progress events
pub trait ProgressSink {
    fn on_progress(&self, event: ProgressEvent);
}

impl<F> ProgressSink for F
where
    F: Fn(ProgressEvent),
{
    fn on_progress(&self, event: ProgressEvent) {
        self(event)
    }
}

/// Sink that drops every event
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn on_progress(&self, _event: ProgressEvent) {}
}

/// Renders progress events on an `indicatif` bar
///
/// The bar is sized and drawn to stderr on the first event, so nothing shows
/// while files are still being enumerated.
pub struct TerminalProgress {
    bar: ProgressBar,
    revealed: AtomicBool,
}

impl TerminalProgress {
    pub fn new(bar: ProgressBar) -> Self {
        Self {
            bar,
            revealed: AtomicBool::new(false),
        }
    }
}

impl ProgressSink for TerminalProgress {
    fn on_progress(&self, event: ProgressEvent) {
        if !self.revealed.swap(true, Ordering::Relaxed) {
            self.bar.set_length(event.total as u64);
            self.bar.set_draw_target(ProgressDrawTarget::stderr());
        }
        self.bar.set_position(event.processed as u64);
    }
}

/// Shared flag checked once per processed entry
///
/// Cloning shares the underlying flag, so the Ctrl-C listener and the
/// blocking scan observe the same state.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Creates a progress bar style configuration
/// Returns a ProgressStyle configured with the application's visual styling
pub(crate) fn create_progress_style() -> Result<ProgressStyle> {
    Ok(ProgressStyle::default_bar()
        .template(PROGRESS_TEMPLATE)?
        .progress_chars(PROGRESS_CHARS))
}

/// Creates the determinate bar used while classifying
///
/// The bar starts hidden; [`TerminalProgress`] reveals it on the first event.
pub(crate) fn create_progress_bar(total: u64) -> Result<ProgressBar> {
    let pb = ProgressBar::with_draw_target(Some(total), ProgressDrawTarget::hidden());
    pb.set_style(create_progress_style()?);
    pb.set_prefix(PROGRESS_PREFIX);
    Ok(pb)
}
