use crate::message::Record;
use crate::writer::Label;
use crate::StatusError;

/// Turns a structured [Record] into the line a [StatusWriter](crate::StatusWriter)
/// prints. The writer hands over its current [Label] so a formatter can size its
/// output around whatever is already on the line.
pub trait StatusFormat {
    fn format(&self, record: &Record, label: Label) -> Result<String, StatusError>;
}

/// Prints the record's text field verbatim.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainFormat;

impl StatusFormat for PlainFormat {
    fn format(&self, record: &Record, _label: Label) -> Result<String, StatusError> {
        record.text().map(str::to_owned)
    }
}
