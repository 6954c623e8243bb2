/*!
 * Utility functions for gvexport
 */

use std::io;
use std::path::Path;

use walkdir::WalkDir;

use crate::scanner::is_substvar_file;

/// Count variable documents for progress tracking
pub fn count_files(dir: &Path) -> io::Result<u64> {
    let mut count = 0;

    for entry in WalkDir::new(dir).into_iter().filter_map(Result::ok) {
        if entry.file_type().is_file() && is_substvar_file(entry.path()) {
            count += 1;
        }
    }

    Ok(count)
}

/// Truncate a string for display, keeping the tail behind a `...` marker
///
/// The kept tail always starts on a character boundary, so names with
/// multi-byte characters never split mid-character.
pub fn truncate_tail(text: &str, max_len: usize) -> String {
    if text.len() <= max_len {
        return text.to_string();
    }

    let mut start = text.len().saturating_sub(max_len.saturating_sub(3));
    while !text.is_char_boundary(start) {
        start += 1;
    }
    format!("...{}", &text[start..])
}
