//! Configuration constants and settings

// Length limit
//
// The limit is compared against the character count of each file path as it
// appears under traversal (root prefix included).
pub const DEFAULT_LENGTH_LIMIT: i64 = 200;

// Settings persistence
pub const APP_DIR_NAME: &str = "longpaths";
pub const SETTINGS_FILE_NAME: &str = "settings.json";
pub const CONFIG_DIR_ENV: &str = "LONGPATHS_CONFIG_DIR";

// Output file naming
pub const LONG_REPORT_PREFIX: &str = "long_filenames";
pub const SHORT_REPORT_PREFIX: &str = "short_filenames";
pub const REPORT_EXTENSION: &str = "txt";
pub const ARCHIVE_EXTENSION: &str = "zip";
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";
pub const PARTIAL_SUFFIX: &str = "partial";

// Progress bar configuration
pub const PROGRESS_CHARS: &str = "##-";
pub const PROGRESS_TEMPLATE: &str = "{prefix:.bold} [{bar:40}] {pos}/{len} files checked";
pub const PROGRESS_PREFIX: &str = "🔍 checking";

// UI Constants
pub const SCANNING_MESSAGE: &str = "🔍 Scanning for files...";
pub const NO_FILES_MESSAGE: &str = "No files found in the selected folder.";
pub const RUNNING_TITLE: &str = "🚀 longpaths";
pub const DONE_TITLE: &str = "✅ longpaths";

// Display formatting constants
pub const PATH_DISPLAY_WIDTH: usize = 60;
pub const LONG_PATHS_DISPLAY_LIMIT: usize = 10;
pub const SEPARATOR_WIDTH: usize = 70;
