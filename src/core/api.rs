//! Public API for the core module.
//!
//! This module provides the stable public API for core functionality including:
//! - Progress events, sinks and cancellation
//! - Persisted settings
//! - Statistics tracking
//! - Configuration constants
//!
//! Internal implementation details are not exposed through this API.

// Core types
pub use super::progress::{CancelFlag, NoProgress, ProgressEvent, ProgressSink, TerminalProgress};
pub use super::settings::{settings_path, Settings};
pub use super::stats::CheckStatistics;

// Configuration
pub use super::config::{CONFIG_DIR_ENV, DEFAULT_LENGTH_LIMIT};

// User-facing messages
pub use super::config::{NO_FILES_MESSAGE, SCANNING_MESSAGE};

// Terminal utilities (re-exported from utils)
pub use crate::utils::{set_terminal_title, set_terminal_title_and_flush};

// Internal helpers for command modules
pub(crate) use super::progress::create_progress_bar;
