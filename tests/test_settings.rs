use anyhow::Result;
use std::fs;
use tempfile::TempDir;

use longpaths::core::{settings_path, Settings, CONFIG_DIR_ENV, DEFAULT_LENGTH_LIMIT};

mod common;
use common::lock_test;

/// Points the settings location at a scratch folder for the duration of a test
struct ConfigDirGuard {
    _temp_dir: TempDir,
}

impl ConfigDirGuard {
    fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        std::env::set_var(CONFIG_DIR_ENV, temp_dir.path());
        Ok(Self {
            _temp_dir: temp_dir,
        })
    }
}

impl Drop for ConfigDirGuard {
    fn drop(&mut self) {
        std::env::remove_var(CONFIG_DIR_ENV);
    }
}

#[test]
fn test_env_var_overrides_settings_location() -> Result<()> {
    let _lock = lock_test();
    let _guard = ConfigDirGuard::new()?;

    let path = settings_path().expect("settings path should resolve");
    let dir = std::env::var_os(CONFIG_DIR_ENV).expect("env var set by guard");
    assert!(path.starts_with(dir));
    assert_eq!(path.file_name().and_then(|n| n.to_str()), Some("settings.json"));
    Ok(())
}

#[test]
fn test_first_run_uses_default_limit() -> Result<()> {
    let _lock = lock_test();
    let _guard = ConfigDirGuard::new()?;

    assert_eq!(Settings::load().length_limit, DEFAULT_LENGTH_LIMIT);
    Ok(())
}

#[test]
fn test_saved_limit_survives_reload() -> Result<()> {
    let _lock = lock_test();
    let _guard = ConfigDirGuard::new()?;

    Settings { length_limit: 128 }.save()?;

    assert_eq!(Settings::load().length_limit, 128);
    Ok(())
}

#[test]
fn test_corrupt_settings_fall_back_to_default() -> Result<()> {
    let _lock = lock_test();
    let _guard = ConfigDirGuard::new()?;
    let path = settings_path().expect("settings path should resolve");
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, "{ not json")?;

    assert_eq!(Settings::load(), Settings::default());
    Ok(())
}
