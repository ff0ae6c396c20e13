use super::{find_line_end, CharSource};
use crate::error::Result;

/// Character source over an in-memory string
#[derive(Debug, Clone)]
pub struct StrSource<'a> {
    /// Full input text
    text: &'a str,
    /// Byte offset of the next unread character
    pos: usize,
}

impl<'a> StrSource<'a> {
    /// Creates a source positioned at the start of `text`
    pub fn new(text: &'a str) -> Self {
        StrSource { text, pos: 0 }
    }

    /// Text not consumed yet
    pub fn remaining(&self) -> &'a str {
        &self.text[self.pos..]
    }

    /// Whether every character has been consumed
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.text.len()
    }
}

impl<'a> From<&'a str> for StrSource<'a> {
    fn from(text: &'a str) -> Self {
        StrSource::new(text)
    }
}

impl CharSource for StrSource<'_> {
    fn peek_char(&mut self) -> Result<Option<char>> {
        Ok(self.remaining().chars().next())
    }

    fn next_char(&mut self) -> Result<Option<char>> {
        let c = self.remaining().chars().next();
        if let Some(c) = c {
            self.pos += c.len_utf8();
        }
        Ok(c)
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        if self.is_at_end() {
            return Ok(None);
        }

        let rest = self.remaining();
        let line = match find_line_end(rest) {
            Some((len, consumed)) => {
                self.pos += consumed;
                &rest[..len]
            }
            None => {
                self.pos = self.text.len();
                rest
            }
        };
        Ok(Some(line.to_string()))
    }

    fn read_to_end(&mut self) -> Result<String> {
        let rest = self.remaining().to_string();
        self.pos = self.text.len();
        Ok(rest)
    }
}
