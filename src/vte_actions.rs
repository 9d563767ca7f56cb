use crate::vte_actions::VteAction::{Backspace, CarriageReturn, LineFeed, Text};
use vte::{Params, Parser, Perform};

/// What a terminal would do with the bytes a status writer emits. Only the
/// handful of actions status output can produce are recognised.
#[derive(Debug, PartialEq, Eq)]
pub enum VteAction {
    Text(char),
    Backspace,
    LineFeed,
    CarriageReturn,
    /// Any escape sequence. Status output should never contain one.
    Escape,
}

/// A wrapper over [Parser] and [Perform] which takes bytes in and returns the
/// actions they decode to.
pub struct VteActionParser {
    parser: Parser,
}

impl VteActionParser {
    pub fn new() -> Self {
        Self {
            parser: Parser::new(),
        }
    }

    pub fn parse_bytes(&mut self, bytes: &[u8]) -> Vec<VteAction> {
        let mut performer = Performer::new();
        for byte in bytes {
            self.parser.advance(&mut performer, *byte)
        }
        performer.actions
    }
}

struct Performer {
    actions: Vec<VteAction>,
}

impl Performer {
    fn new() -> Self {
        Self {
            actions: Vec::new(),
        }
    }
}

impl Perform for Performer {
    fn print(&mut self, c: char) {
        self.actions.push(Text(c))
    }

    fn execute(&mut self, byte: u8) {
        let action = match byte {
            8 => Backspace,
            10 => LineFeed,
            13 => CarriageReturn,
            _ => return,
        };
        self.actions.push(action);
    }

    fn csi_dispatch(&mut self, _params: &Params, _intermediates: &[u8], _ignore: bool, _c: char) {
        self.actions.push(VteAction::Escape);
    }

    fn esc_dispatch(&mut self, _intermediates: &[u8], _ignore: bool, _byte: u8) {
        self.actions.push(VteAction::Escape);
    }
}

#[cfg(test)]
mod test {
    use crate::path_format::PathFormat;
    use crate::test_terminal::TestTerminal;
    use crate::vte_actions::{VteAction, VteActionParser};
    use crate::{Record, StatusWriter};

    #[test]
    fn decodes_erase_sequences() {
        let actions = VteActionParser::new().parse_bytes(b"ab\x08 \x08\n");
        assert_eq!(
            actions,
            vec![
                VteAction::Text('a'),
                VteAction::Text('b'),
                VteAction::Backspace,
                VteAction::Text(' '),
                VteAction::Backspace,
                VteAction::LineFeed,
            ]
        );
    }

    #[test]
    fn flags_escape_sequences() {
        let actions = VteActionParser::new().parse_bytes(b"\x1b[2K");
        assert_eq!(actions, vec![VteAction::Escape]);
    }

    // A whole session must erase with three control bytes per character and never
    // fall back on cursor escape codes.
    #[test]
    fn sessions_use_only_backspaces_and_spaces() {
        let mut output = TestTerminal::new();
        let mut written = 0;
        {
            let mut status =
                StatusWriter::with_format(&mut output, PathFormat::new(30).with_separator('/'))
                    .unwrap();
            status.label("Scanning ").unwrap();
            for count in 1..=20 {
                let path = format!("/srv/data/{}/file{count}.bin", "deep".repeat(count as usize));
                status.write(&Record::with_text(path, count), false).unwrap();
                written += status.last_width();
                status.flush().unwrap();
            }
        }

        let actions = VteActionParser::new().parse_bytes(&output.bytes);
        assert!(!actions.contains(&VteAction::Escape));
        let backspaces = actions
            .iter()
            .filter(|a| **a == VteAction::Backspace)
            .count();
        let blanks = actions
            .iter()
            .filter(|a| **a == VteAction::Text(' '))
            .count();
        assert_eq!(backspaces, 2 * written);
        // Labels and paths carry a few spaces of their own.
        assert!(blanks >= written);
    }
}
