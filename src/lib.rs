//! # longpaths
//!
//! `longpaths` finds files whose full path is longer than a chosen limit.
//! It powers the `longpaths` CLI tool.
//!
//! ## Core Features
//!
//! - **Classification**: every file under a root is either long (path length
//!   strictly greater than the limit) or short, never both, never neither.
//! - **Reports**: `long_filenames_<ts>.txt` and `short_filenames_<ts>.txt`,
//!   one path per line, written atomically into the root.
//! - **Archiving**: optional deflate zip of the long files, stored under their
//!   root-relative names.
//! - **Progress**: a progress event per classified path, decoupled from any
//!   particular display, plus per-path cancellation.
//!
//! ## Example
//!
//! ```rust,no_run
//! use longpaths::core::{CancelFlag, NoProgress};
//! use longpaths::scan::{run_check, CheckOptions, CheckOutcome};
//!
//! let options = CheckOptions::new("/some/folder", 200).with_archive(false);
//! match run_check(&options, &NoProgress, &CancelFlag::new()) {
//!     Ok(CheckOutcome::Completed(report)) => {
//!         println!("{} long paths", report.classification.long.len());
//!     }
//!     Ok(CheckOutcome::NoFiles) => println!("no files found"),
//!     Err(e) => eprintln!("{e}"),
//! }
//! ```

pub mod commands;
pub mod core;
pub mod error;
pub mod scan;
pub mod utils;

pub use error::CheckError;
