//! Statistics tracking for a path length check

use crate::core::config::{LONG_PATHS_DISPLAY_LIMIT, PATH_DISPLAY_WIDTH};
use crate::scan::Classification;
use crate::utils::shorten_path;
use std::time::Duration;

/// Statistics for a single check run
#[derive(Debug, Clone, Default)]
pub struct CheckStatistics {
    pub total_files: usize,
    pub long_files: usize,
    pub short_files: usize,
    pub limit: usize,
    pub longest: Option<(String, usize)>, // (path, length)
    pub long_paths: Vec<(String, usize)>, // (path, length), capped for display
}

impl CheckStatistics {
    /// Creates a new statistics tracker with all counters initialized to zero
    #[must_use]
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            ..Self::default()
        }
    }

    /// Builds statistics from a finished classification
    #[must_use]
    pub fn from_classification(classification: &Classification, limit: usize) -> Self {
        let mut stats = Self::new(limit);
        for record in classification.long.iter().chain(classification.short.iter()) {
            stats.update(&record.text, record.length, record.length > limit);
        }
        stats
    }

    /// Records one classified path
    pub fn update(&mut self, path: &str, length: usize, is_long: bool) {
        self.total_files += 1;
        if is_long {
            self.long_files += 1;
            if self.long_paths.len() < LONG_PATHS_DISPLAY_LIMIT {
                self.long_paths.push((path.to_string(), length));
            }
        } else {
            self.short_files += 1;
        }

        let is_longest = self
            .longest
            .as_ref()
            .map_or(true, |(_, longest)| length > *longest);
        if is_longest {
            self.longest = Some((path.to_string(), length));
        }
    }

    /// Generates a one-line summary of the run
    #[must_use]
    pub fn generate_summary(&self, duration: Duration) -> String {
        let duration_secs = duration.as_secs_f64();
        let file_word = if self.total_files == 1 { "file" } else { "files" };
        format!(
            "✅ Completed in {:.1}s • {} {} • {} long • {} short",
            duration_secs, self.total_files, file_word, self.long_files, self.short_files
        )
    }

    /// Generates the detailed listing of long paths
    ///
    /// Returns a single line when nothing exceeded the limit.
    #[must_use]
    pub fn generate_detailed_summary(&self) -> String {
        if self.long_files == 0 {
            return format!(
                "🟢 No paths longer than {} characters were found.",
                self.limit
            );
        }

        let mut lines = Vec::new();
        lines.push(format!(
            "🔴 LONG PATHS ({}) over {} characters",
            self.long_files, self.limit
        ));

        let hidden = self.long_files.saturating_sub(self.long_paths.len());
        for (i, (path, length)) in self.long_paths.iter().enumerate() {
            let is_last = i == self.long_paths.len() - 1 && hidden == 0;
            let tree_char = if is_last { "└─" } else { "├─" };
            let short_path = shorten_path(path, PATH_DISPLAY_WIDTH);
            lines.push(format!(
                "   {} {:width$} # {} chars",
                tree_char,
                short_path,
                length,
                width = PATH_DISPLAY_WIDTH
            ));
        }
        if hidden > 0 {
            lines.push(format!("   └─ ... and {hidden} more (see report)"));
        }

        if let Some((path, length)) = &self.longest {
            lines.push(String::new());
            lines.push(format!(
                "📏 Longest: {} chars  {}",
                length,
                shorten_path(path, PATH_DISPLAY_WIDTH)
            ));
        }

        lines.join("\n")
    }
}
