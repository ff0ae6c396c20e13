use std::io::BufRead;

use super::{find_line_end, CharSource};
use crate::error::Result;

/// Character source over any buffered reader
///
/// Input is decoded one physical line at a time, so lookahead never blocks
/// past the end of the line being scanned. That matters for interactive
/// input such as a locked stdin. Invalid UTF-8 surfaces as
/// [`Error::Io`](crate::Error::Io).
#[derive(Debug)]
pub struct ReaderSource<R> {
    reader: R,
    /// Current decoded line, including its `'\n'` if it had one
    buffer: String,
    /// Byte offset of the next unread character in `buffer`
    pos: usize,
    /// Set once the reader reported end of stream
    exhausted: bool,
}

impl<R: BufRead> ReaderSource<R> {
    /// Wraps a buffered reader
    pub fn new(reader: R) -> Self {
        ReaderSource {
            reader,
            buffer: String::new(),
            pos: 0,
            exhausted: false,
        }
    }

    /// Shared access to the wrapped reader
    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    /// Returns the wrapped reader, dropping any decoded but unread text
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Makes sure `buffer[pos..]` is non-empty. Returns false at end of stream.
    fn fill(&mut self) -> Result<bool> {
        if self.pos < self.buffer.len() {
            return Ok(true);
        }
        if self.exhausted {
            return Ok(false);
        }

        self.buffer.clear();
        self.pos = 0;
        if self.reader.read_line(&mut self.buffer)? == 0 {
            self.exhausted = true;
            return Ok(false);
        }
        Ok(true)
    }

    fn pending(&self) -> &str {
        &self.buffer[self.pos..]
    }
}

impl<R: BufRead> CharSource for ReaderSource<R> {
    fn peek_char(&mut self) -> Result<Option<char>> {
        if !self.fill()? {
            return Ok(None);
        }
        Ok(self.pending().chars().next())
    }

    fn next_char(&mut self) -> Result<Option<char>> {
        let c = self.peek_char()?;
        if let Some(c) = c {
            self.pos += c.len_utf8();
        }
        Ok(c)
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        if !self.fill()? {
            return Ok(None);
        }

        // The buffer always ends at a '\n' or at end of stream, so a
        // terminator is never split across two fills.
        let pending = self.pending();
        let (line, consumed) = match find_line_end(pending) {
            Some((len, consumed)) => (pending[..len].to_string(), consumed),
            None => (pending.to_string(), pending.len()),
        };
        self.pos += consumed;
        Ok(Some(line))
    }

    fn read_to_end(&mut self) -> Result<String> {
        // Buffered text stays put until the reader has delivered the rest
        let mut tail = String::new();
        if !self.exhausted {
            self.reader.read_to_string(&mut tail)?;
            self.exhausted = true;
        }

        let mut rest = self.pending().to_string();
        rest.push_str(&tail);
        self.buffer.clear();
        self.pos = 0;
        Ok(rest)
    }
}
