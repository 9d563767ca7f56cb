use crate::format::{PlainFormat, StatusFormat};
use crate::message::Message;
use crate::StatusError;
use crossterm::tty::IsTty;
use log::{debug, trace};
use std::io::Write;

const BACKSPACE: u8 = 0x08;
const SPACE: u8 = b' ';

/// Whether a label is on screen ahead of the status text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Label {
    #[default]
    None,
    /// A label this many characters wide is displayed and survives flushes.
    Active(usize),
}

impl Label {
    pub fn width(self) -> Option<usize> {
        match self {
            Label::None => None,
            Label::Active(width) => Some(width),
        }
    }
}

/// Prints a status line that can be wiped and rewritten in place, using only
/// backspaces and spaces.
///
/// A label may be shown in front of the status text; [flush](Self::flush) only
/// erases what the last [write](Self::write) printed, so the label stays put.
pub struct StatusWriter<'a, W: Write, F = PlainFormat> {
    output: &'a mut W,
    format: F,
    last_width: usize,
    label: Label,
}

impl<'a, W: Write + IsTty> StatusWriter<'a, W, PlainFormat> {
    pub fn new(output: &'a mut W) -> Result<Self, StatusError> {
        Self::with_format(output, PlainFormat)
    }
}

impl<'a, W: Write + IsTty, F: StatusFormat> StatusWriter<'a, W, F> {
    /// Fails with [StatusError::InvalidStream] unless `output` is a terminal.
    pub fn with_format(output: &'a mut W, format: F) -> Result<Self, StatusError> {
        if !W::is_tty(output) {
            return Err(StatusError::InvalidStream);
        }
        Ok(Self {
            output,
            format,
            last_width: 0,
            label: Label::None,
        })
    }
}

impl<'a, W: Write, F: StatusFormat> StatusWriter<'a, W, F> {
    /// Prints `message`, formatting records first. With `auto_flush` the text is
    /// erased again right away.
    ///
    /// A record the formatter rejects leaves the writer untouched.
    pub fn write<'m>(
        &mut self,
        message: impl Into<Message<'m>>,
        auto_flush: bool,
    ) -> Result<(), StatusError> {
        let line = match message.into() {
            Message::Text(text) => text.to_owned(),
            Message::Record(record) => self.format.format(record, self.label)?,
        };

        self.output.write_all(line.as_bytes())?;
        self.last_width = line.chars().count();
        trace!("wrote {} chars", self.last_width);

        if auto_flush {
            self.flush()?;
        }
        Ok(())
    }

    /// Erases the text printed by the last [write](Self::write).
    pub fn flush(&mut self) -> Result<(), StatusError> {
        self.flush_width(self.last_width)
    }

    /// Erases `width` characters to the left of the cursor and leaves the cursor
    /// where they started. Does not change [last_width](Self::last_width).
    pub fn flush_width(&mut self, width: usize) -> Result<(), StatusError> {
        self.output.flush()?;
        trace!("erasing {width} chars");

        let mut erase = Vec::with_capacity(width * 3);
        erase.resize(width, BACKSPACE);
        erase.resize(width * 2, SPACE);
        erase.resize(width * 3, BACKSPACE);
        self.output.write_all(&erase)?;
        Ok(())
    }

    pub fn last_width(&self) -> usize {
        self.last_width
    }

    pub fn label_state(&self) -> Label {
        self.label
    }

    pub fn label_width(&self) -> Option<usize> {
        self.label.width()
    }

    /// Toggles the label. With none showing, `text` becomes the label. With one
    /// showing, the old label is erased, `text` is printed in its place, and the
    /// writer goes back to having no label.
    pub fn label(&mut self, text: &str) -> Result<(), StatusError> {
        match self.label {
            Label::None => {
                self.output.write_all(text.as_bytes())?;
                self.label = Label::Active(text.chars().count());
            }
            Label::Active(width) => {
                self.flush_width(width)?;
                self.output.write_all(text.as_bytes())?;
                self.label = Label::None;
            }
        }
        debug!("label is now {:?}", self.label);
        Ok(())
    }

    /// Forgets all width bookkeeping without touching the stream, e.g. after
    /// something else has written to the terminal.
    pub fn reset(&mut self) {
        self.last_width = 0;
        self.label = Label::None;
        debug!("status writer reset");
    }

    pub fn formatter(&self) -> &F {
        &self.format
    }

    pub fn formatter_mut(&mut self) -> &mut F {
        &mut self.format
    }
}
