//! File system utilities

/// Shortens long paths for display
///
/// Lengths are counted in characters so multi-byte names are never split.
pub fn shorten_path(path: &str, max_length: usize) -> String {
    if path.chars().count() <= max_length {
        return path.to_string();
    }

    let separator = if path.contains('/') { '/' } else { '\\' };
    let components: Vec<&str> = path.split(separator).filter(|s| !s.is_empty()).collect();
    if components.len() <= 2 {
        // Too few components to shorten meaningfully
        return path.to_string();
    }

    // Keep last 2 components with ellipsis prefix
    format!(
        "...{sep}{}{sep}{}",
        components[components.len() - 2],
        components[components.len() - 1],
        sep = separator
    )
}

/// Converts a character count into the same unit the classifier compares
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}
