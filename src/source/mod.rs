//! Character sources for the scanner
//!
//! A [`CharSource`] is a forward-only stream of already-decoded characters
//! with one character of lookahead and line-oriented reads. The scanner never
//! rewinds a source, opens it, or closes it.

mod reader_source;
mod str_source;

pub use reader_source::ReaderSource;
pub use str_source::StrSource;

use crate::error::Result;

/// Forward-only character stream consumed by [`Scanner`](crate::Scanner)
pub trait CharSource {
    /// Returns the next character without consuming it, `None` at end of stream
    fn peek_char(&mut self) -> Result<Option<char>>;

    /// Consumes and returns the next character, `None` at end of stream
    fn next_char(&mut self) -> Result<Option<char>>;

    /// Reads up to and excluding the next line terminator
    ///
    /// The terminator (`"\n"`, `"\r\n"` or a lone `"\r"`) is consumed. Returns
    /// the remainder when no terminator is left, and `None` only when the
    /// stream was already exhausted.
    fn read_line(&mut self) -> Result<Option<String>>;

    /// Reads everything from the current position to the end of the stream
    fn read_to_end(&mut self) -> Result<String>;
}

impl<S: CharSource + ?Sized> CharSource for &mut S {
    fn peek_char(&mut self) -> Result<Option<char>> {
        (**self).peek_char()
    }

    fn next_char(&mut self) -> Result<Option<char>> {
        (**self).next_char()
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        (**self).read_line()
    }

    fn read_to_end(&mut self) -> Result<String> {
        (**self).read_to_end()
    }
}

/// Locates the first line terminator in `text`.
///
/// Returns `(line_len, consumed)` where `consumed` includes the terminator,
/// or `None` when `text` holds no terminator.
pub(crate) fn find_line_end(text: &str) -> Option<(usize, usize)> {
    let end = text.find(&['\n', '\r'][..])?;
    let terminator = if text[end..].starts_with("\r\n") { 2 } else { 1 };
    Some((end, end + terminator))
}
