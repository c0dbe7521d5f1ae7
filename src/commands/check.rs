//! Path length check command implementation
//!
//! Loads the persisted limit, runs the check on a blocking thread while a
//! progress bar tracks classification, prints the summary, and remembers the
//! limit that was used for the next run.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use crate::core::config::{DONE_TITLE, RUNNING_TITLE, SEPARATOR_WIDTH};
use crate::core::{
    create_progress_bar, set_terminal_title, set_terminal_title_and_flush, CancelFlag, Settings,
    TerminalProgress, NO_FILES_MESSAGE, SCANNING_MESSAGE,
};
use crate::scan::{run_check, CheckOptions, CheckOutcome, CheckReport};

/// Arguments for `longpaths check`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckArgs {
    pub root: Option<PathBuf>,
    /// Overrides the persisted limit when set
    pub limit: Option<i64>,
    pub archive: bool,
}

impl CheckArgs {
    /// Fills in the limit from the persisted settings
    pub fn into_options(self, settings: &Settings) -> CheckOptions {
        CheckOptions {
            root: self.root,
            length_limit: self.limit.unwrap_or(settings.length_limit),
            archive: self.archive,
        }
    }
}

/// Handles the check command
pub async fn handle_check_command(args: CheckArgs) -> Result<()> {
    set_terminal_title(RUNNING_TITLE);

    let settings = Settings::load();
    let options = args.into_options(&settings);

    if let Err(e) = options.validate() {
        set_terminal_title_and_flush(DONE_TITLE);
        return Err(e.into());
    }

    println!();
    print!("{SCANNING_MESSAGE}");
    // Flush stdout - ignore errors as this is non-critical
    let _ = std::io::stdout().flush();

    let cancel = CancelFlag::new();
    let listener_flag = cancel.clone();
    let ctrl_c = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            listener_flag.cancel();
        }
    });

    let progress_bar = create_progress_bar(0)?;
    let start_time = std::time::Instant::now();
    let task_options = options.clone();
    let task_bar = progress_bar.clone();
    let outcome = tokio::task::spawn_blocking(move || {
        let progress = TerminalProgress::new(task_bar);
        run_check(&task_options, &progress, &cancel)
    })
    .await
    .context("Check task failed to complete")?;

    ctrl_c.abort();
    progress_bar.finish_and_clear();
    remember_limit(&settings, options.length_limit);

    let result = match outcome {
        Ok(CheckOutcome::NoFiles) => {
            println!("\r{NO_FILES_MESSAGE}");
            Ok(())
        }
        Ok(CheckOutcome::Completed(report)) => {
            println!("\r{}", format_results(&report, start_time.elapsed()));
            Ok(())
        }
        Err(e) => {
            println!();
            Err(e.into())
        }
    };

    set_terminal_title_and_flush(DONE_TITLE);
    result
}

/// Persists the limit of this run if it differs from the stored one
fn remember_limit(settings: &Settings, length_limit: i64) {
    if settings.length_limit == length_limit {
        return;
    }
    let updated = Settings { length_limit };
    if let Err(e) = updated.save() {
        log::warn!("Could not save settings: {e:#}");
    }
}

/// Builds the text printed after a completed check
pub fn format_results(report: &CheckReport, duration: Duration) -> String {
    let separator = "━".repeat(SEPARATOR_WIDTH);
    let mut lines = vec![
        report.statistics.generate_summary(duration),
        String::new(),
        separator.clone(),
        report.statistics.generate_detailed_summary(),
        separator,
        String::new(),
        "📄 Results saved to:".to_string(),
        format!("   {}", report.reports.long.display()),
        format!("   {}", report.reports.short.display()),
    ];
    if let Some(archive) = &report.archive {
        lines.push("📦 Files zipped to:".to_string());
        lines.push(format!("   {}", archive.display()));
    }
    lines.join("\n")
}
