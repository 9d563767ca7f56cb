use crate::StatusError;
use std::collections::BTreeMap;

/// Key holding the message text of a [Record].
pub const TEXT_KEY: &str = "text";
/// Key holding the sequence number of a [Record].
pub const COUNT_KEY: &str = "count";

/// A single value stored in a [Record].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
    Text(String),
    Count(u64),
}

impl From<&str> for Field {
    fn from(value: &str) -> Self {
        Field::Text(value.to_owned())
    }
}

impl From<String> for Field {
    fn from(value: String) -> Self {
        Field::Text(value)
    }
}

impl From<u64> for Field {
    fn from(value: u64) -> Self {
        Field::Count(value)
    }
}

/// A structured status message. Formatters pick the fields they need out of it;
/// by convention every record carries [TEXT_KEY] and [COUNT_KEY], but nothing
/// stops a formatter from asking for more.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: BTreeMap<String, Field>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a record with the two conventional fields filled in.
    pub fn with_text(text: impl Into<String>, count: u64) -> Self {
        let mut record = Self::new();
        record
            .set(TEXT_KEY, text.into())
            .set(COUNT_KEY, count);
        record
    }

    pub fn set(&mut self, key: &str, value: impl Into<Field>) -> &mut Self {
        self.fields.insert(key.to_owned(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Field> {
        self.fields.get(key)
    }

    pub fn text(&self) -> Result<&str, StatusError> {
        match self.get(TEXT_KEY) {
            Some(Field::Text(text)) => Ok(text),
            Some(_) => Err(StatusError::wrong_kind(TEXT_KEY, "expected text")),
            None => Err(StatusError::missing_field(TEXT_KEY)),
        }
    }

    pub fn count(&self) -> Result<u64, StatusError> {
        match self.get(COUNT_KEY) {
            Some(Field::Count(count)) => Ok(*count),
            Some(_) => Err(StatusError::wrong_kind(COUNT_KEY, "expected a count")),
            None => Err(StatusError::missing_field(COUNT_KEY)),
        }
    }
}

/// What [StatusWriter::write](crate::StatusWriter::write) accepts: raw text, which is
/// emitted as is, or a [Record], which goes through the writer's formatter first.
#[derive(Debug, Clone, Copy)]
pub enum Message<'m> {
    Text(&'m str),
    Record(&'m Record),
}

impl<'m> From<&'m str> for Message<'m> {
    fn from(text: &'m str) -> Self {
        Message::Text(text)
    }
}

impl<'m> From<&'m String> for Message<'m> {
    fn from(text: &'m String) -> Self {
        Message::Text(text)
    }
}

impl<'m> From<&'m Record> for Message<'m> {
    fn from(record: &'m Record) -> Self {
        Message::Record(record)
    }
}
