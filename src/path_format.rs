use crate::format::StatusFormat;
use crate::message::Record;
use crate::writer::Label;
use crate::StatusError;
use log::debug;
use std::cmp::Ordering;
use std::path::MAIN_SEPARATOR;

/// Line width assumed when none (or zero) is configured.
pub const DEFAULT_MAX_WIDTH: usize = 79;

const ELLIPSIS: &str = "...";

/// Renders `"(<count>): <path>"` lines that never run past `max_width` columns,
/// counting the writer's label. Long paths lose the middle of their directory
/// part first so the file name stays visible:
///
/// ```text
/// (12): /home/user.../report.txt
/// ```
///
/// When even the file name does not fit, the path is cut off at the width limit.
#[derive(Debug, Clone)]
pub struct PathFormat {
    max_width: usize,
    separator: char,
}

impl Default for PathFormat {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_WIDTH)
    }
}

impl PathFormat {
    pub fn new(max_width: usize) -> Self {
        Self {
            max_width: coerce_width(max_width),
            separator: MAIN_SEPARATOR,
        }
    }

    /// Splits paths on `separator` instead of the platform's.
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    pub fn max_width(&self) -> usize {
        self.max_width
    }

    /// Zero falls back to [DEFAULT_MAX_WIDTH].
    pub fn set_max_width(&mut self, width: usize) {
        self.max_width = coerce_width(width);
    }

    pub fn render(&self, count: u64, path: &str, label: Label) -> String {
        let prefix = format!("({count}): ");
        let msg_len = label.width().unwrap_or(0) + prefix.chars().count();
        let total_len = msg_len + path.chars().count();

        let segment = match total_len.cmp(&self.max_width) {
            Ordering::Greater => self.shorten(path, msg_len),
            Ordering::Less => path.to_owned(),
            // An exact fit prints no path at all. Existing output depends on it.
            Ordering::Equal => String::new(),
        };
        prefix + &segment
    }

    fn shorten(&self, path: &str, msg_len: usize) -> String {
        let (head, tail) = split_path(path, self.separator);
        let reserved = msg_len + ELLIPSIS.len() + 1 + tail.chars().count();
        match self.max_width.checked_sub(reserved).filter(|budget| *budget > 0) {
            Some(budget) => {
                debug!("eliding directory of {path:?} to {budget} chars");
                format!(
                    "{}{ELLIPSIS}{}{tail}",
                    take_chars(head, budget),
                    self.separator
                )
            }
            None => {
                let keep = self.max_width.saturating_sub(msg_len);
                debug!("file name of {path:?} does not fit, cutting at {keep} chars");
                take_chars(path, keep).to_owned()
            }
        }
    }
}

impl StatusFormat for PathFormat {
    fn format(&self, record: &Record, label: Label) -> Result<String, StatusError> {
        let count = record.count()?;
        let path = record.text()?;
        Ok(self.render(count, path, label))
    }
}

fn coerce_width(width: usize) -> usize {
    if width < 1 {
        DEFAULT_MAX_WIDTH
    } else {
        width
    }
}

/// Splits into (directory, file name) at the last separator. Trailing separators
/// are dropped from the directory unless it is nothing but separators.
fn split_path(path: &str, separator: char) -> (&str, &str) {
    match path.rfind(separator) {
        Some(index) => {
            let split_at = index + separator.len_utf8();
            let (head, tail) = path.split_at(split_at);
            let trimmed = head.trim_end_matches(separator);
            if trimmed.is_empty() {
                (head, tail)
            } else {
                (trimmed, tail)
            }
        }
        None => ("", path),
    }
}

/// The first `count` characters of `s`.
fn take_chars(s: &str, count: usize) -> &str {
    match s.char_indices().nth(count) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}
