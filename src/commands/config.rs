//! Settings command implementation
//!
//! Shows, updates or resets the persisted default length limit.

use anyhow::{Context, Result};
use std::path::Path;

use crate::core::{settings_path, Settings, DEFAULT_LENGTH_LIMIT};
use crate::error::CheckError;

/// Arguments for `longpaths config`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigArgs {
    pub limit: Option<i64>,
    pub reset: bool,
}

/// What a config invocation did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigAction {
    Shown { stored: bool },
    Updated,
    Reset,
}

/// Applies `args` to the settings file at `path`
///
/// `--reset` takes precedence over `--limit`. A non-positive limit is
/// rejected and the file is left untouched.
pub fn apply_config(args: &ConfigArgs, path: &Path) -> Result<(Settings, ConfigAction)> {
    if args.reset {
        let settings = Settings::default();
        settings.save_to(path)?;
        return Ok((settings, ConfigAction::Reset));
    }

    if let Some(limit) = args.limit {
        if limit <= 0 {
            return Err(CheckError::InvalidLimit(limit).into());
        }
        let settings = Settings {
            length_limit: limit,
        };
        settings.save_to(path)?;
        return Ok((settings, ConfigAction::Updated));
    }

    Ok((
        Settings::load_from(path),
        ConfigAction::Shown {
            stored: path.exists(),
        },
    ))
}

/// Handles the config command
pub fn handle_config_command(args: ConfigArgs) -> Result<()> {
    let path = settings_path().context("Could not determine config directory")?;
    let (settings, action) = apply_config(&args, &path)?;

    match action {
        ConfigAction::Shown { stored } => {
            println!("\n⚙️  Settings file: {}", path.display());
            let note = if stored { "" } else { " (default)" };
            println!("   Length limit: {}{note}\n", settings.length_limit);
        }
        ConfigAction::Updated => {
            println!("\n✅ Length limit set to {}\n", settings.length_limit);
        }
        ConfigAction::Reset => {
            println!("\n✅ Length limit reset to {DEFAULT_LENGTH_LIMIT}\n");
        }
    }
    Ok(())
}
