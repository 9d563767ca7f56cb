/*
Single-line status output for terminals.

Erasing is done with backspace, space, backspace runs rather than cursor escape
codes, so anything that understands a bare backspace can show the status line.
That only works for text without newlines or wide characters, and only when the
writer is the sole thing printing to the terminal while a status is up.

    StatusWriter
        owns the width bookkeeping (last write, optional label)
        formats records through a StatusFormat picked at construction
    PlainFormat
        record text as is
    PathFormat
        "(count): path", path shortened to fit the line
*/
mod error;
mod format;
mod message;
mod path_format;
mod writer;

#[cfg(test)]
mod test_terminal;
#[cfg(test)]
mod vte_actions;

pub use error::StatusError;
pub use format::{PlainFormat, StatusFormat};
pub use message::{Field, Message, Record, COUNT_KEY, TEXT_KEY};
pub use path_format::{PathFormat, DEFAULT_MAX_WIDTH};
pub use writer::{Label, StatusWriter};
