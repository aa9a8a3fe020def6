use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::{EnEntry, RuEntry};

#[derive(Debug, Error)]
pub enum InputError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// An English line with no delimiter, so no comment field. The run
    /// aborts rather than guessing which field the line was meant to be.
    #[error("line {line} has no '{delimiter}' between text and comment: {content:?}")]
    MissingDelimiter {
        line: usize,
        delimiter: char,
        content: String,
    },
}

/// Read a whole file into lines, preserving input order. The file is
/// closed when the reader goes out of scope, on success or failure.
pub fn read_lines(path: &Path) -> Result<Vec<String>, InputError> {
    let io_err = |source| InputError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(io_err)?;
    let reader = BufReader::new(file);

    let mut lines = Vec::new();
    for line in reader.lines() {
        lines.push(line.map_err(io_err)?);
    }
    Ok(lines)
}

/// One Russian entry per line, the whole line as text.
pub fn parse_russian(lines: Vec<String>) -> Vec<RuEntry> {
    lines.into_iter().map(RuEntry::new).collect()
}

/// One English entry per line, split at the first delimiter into text
/// and comment. Further delimiters stay inside the comment. A line
/// with no delimiter at all aborts the run.
pub fn parse_english(lines: Vec<String>, delimiter: char) -> Result<Vec<EnEntry>, InputError> {
    let mut entries = Vec::with_capacity(lines.len());

    for (n, line) in lines.into_iter().enumerate() {
        match line.split_once(delimiter) {
            Some((text, comment)) => {
                entries.push(EnEntry::new(text.to_string(), comment.to_string()));
            }
            None => {
                return Err(InputError::MissingDelimiter {
                    line: n + 1,
                    delimiter,
                    content: line,
                });
            }
        }
    }

    Ok(entries)
}
