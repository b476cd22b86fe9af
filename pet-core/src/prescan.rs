//! Two-pass text file sizing.
//!
//! Before a text file is read for real, it is scanned once byte by byte to find
//! how many lines it holds and how long the longest one is. The loaders use
//! these numbers to size their line buffers exactly instead of guessing a
//! maximum line length.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Line statistics gathered by [`read_file_line_counts`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineCounts {
    /// Number of lines, including a final line without a terminator
    pub line_count: usize,
    /// Length of the longest line plus one for its terminator
    pub max_line_length: usize,
}

/// Count the lines of a file and find the longest one.
///
/// A final line that has no trailing `\n` is still counted if it contains any
/// character other than a space or a tab.
///
/// # Errors
///
/// Returns the underlying I/O error if the file cannot be opened or read.
pub fn read_file_line_counts(path: impl AsRef<Path>) -> std::io::Result<LineCounts> {
    let file = File::open(path.as_ref())?;
    scan_lines(BufReader::new(file))
}

fn scan_lines(reader: impl Read) -> std::io::Result<LineCounts> {
    let mut counts = LineCounts::default();
    let mut current_line_length = 0;
    let mut seen_non_whitespace = false;

    for byte in reader.bytes() {
        match byte? {
            b'\n' => {
                counts.line_count += 1;
                counts.max_line_length = counts.max_line_length.max(current_line_length);
                current_line_length = 0;
                seen_non_whitespace = false;
            }
            c => {
                if c != b' ' && c != b'\t' {
                    seen_non_whitespace = true;
                }
                current_line_length += 1;
            }
        }
    }

    // Unterminated last line
    if seen_non_whitespace {
        counts.line_count += 1;
    }
    counts.max_line_length += 1;
    Ok(counts)
}
