use std::fmt;
use std::io::BufRead;
use std::str::FromStr;

use super::config::ScannerConfig;
use crate::error::{Error, Result};
use crate::source::{CharSource, ReaderSource, StrSource};

/// Whitespace-delimited scanner over a character source
///
/// The scanner holds no position of its own: every read advances the
/// source's cursor, and consumed characters (skipped whitespace included)
/// are never re-read.
pub struct Scanner<S> {
    /// Character source, owned or borrowed via `&mut`
    source: S,
    /// Block delimiters
    config: ScannerConfig,
}

impl<'a> Scanner<StrSource<'a>> {
    /// Creates a scanner over an in-memory string
    pub fn from_text(text: &'a str) -> Self {
        Scanner::new(StrSource::new(text))
    }
}

impl<R: BufRead> Scanner<ReaderSource<R>> {
    /// Creates a scanner over a buffered reader (file, locked stdin, cursor)
    pub fn from_reader(reader: R) -> Self {
        Scanner::new(ReaderSource::new(reader))
    }
}

impl<S: CharSource> Scanner<S> {
    /// Creates a scanner with the default whitespace set
    pub fn new(source: S) -> Self {
        Scanner {
            source,
            config: ScannerConfig::default(),
        }
    }

    /// Creates a scanner with a custom configuration
    pub fn with_config(source: S, config: ScannerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Scanner { source, config })
    }

    /// Active configuration
    pub fn config(&self) -> &ScannerConfig {
        &self.config
    }

    /// Direct access to the source, e.g. to interleave custom reads
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Gives the source back
    pub fn into_inner(self) -> S {
        self.source
    }

    /// Reads one raw character, `None` at end of stream
    pub fn read_char(&mut self) -> Result<Option<char>> {
        self.source.next_char()
    }

    /// Reads one block of non-whitespace characters
    ///
    /// Leading whitespace is skipped and the whitespace character ending the
    /// block is consumed. Returns `None` only when nothing at all was left to
    /// consume; whitespace followed by end of stream yields `Some("")`.
    pub fn read_block(&mut self) -> Result<Option<String>> {
        let mut skipped = 0usize;
        while let Some(c) = self.source.peek_char()? {
            if !self.config.is_whitespace(c) {
                break;
            }
            self.source.next_char()?;
            skipped += 1;
        }

        let mut block = String::new();
        while let Some(c) = self.source.next_char()? {
            if self.config.is_whitespace(c) {
                break;
            }
            block.push(c);
        }

        if skipped == 0 && block.is_empty() {
            tracing::trace!("no block left in source");
            return Ok(None);
        }

        tracing::trace!(skipped, len = block.len(), "read block");
        Ok(Some(block))
    }

    /// Reads the rest of the current line, `None` when the source is exhausted
    pub fn read_line(&mut self) -> Result<Option<String>> {
        self.source.read_line()
    }

    /// Reads everything left in the source
    pub fn read_to_end(&mut self) -> Result<String> {
        self.source.read_to_end()
    }

    /// Reads one block and parses it as `T`
    ///
    /// An exhausted source is parsed as the empty token, which most types
    /// reject.
    ///
    /// # Errors
    ///
    /// [`Error::Parse`] if the block is not a valid `T`.
    pub fn read<T>(&mut self) -> Result<T>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        self.read_with(str::parse::<T>)
    }

    /// Reads one block and converts it with `parse`
    ///
    /// Any formatting context the conversion needs (decimal separator, date
    /// layout) belongs in the closure; the scanner never looks at it.
    pub fn read_with<T, E, F>(&mut self, parse: F) -> Result<T>
    where
        F: FnOnce(&str) -> std::result::Result<T, E>,
        E: fmt::Display,
    {
        let token = self.read_block()?.unwrap_or_default();
        parse(&token).map_err(|e| Error::parse::<T>(token, e))
    }

    /// Reads one block and parses it as `T`, `Ok(None)` if it is malformed
    ///
    /// Only a source failure produces `Err`.
    pub fn try_read<T: FromStr>(&mut self) -> Result<Option<T>> {
        self.try_read_with(str::parse::<T>)
    }

    /// Like [`try_read`](Self::try_read) with an explicit conversion
    pub fn try_read_with<T, E, F>(&mut self, parse: F) -> Result<Option<T>>
    where
        F: FnOnce(&str) -> std::result::Result<T, E>,
    {
        let token = self.read_block()?.unwrap_or_default();
        match parse(&token) {
            Ok(value) => Ok(Some(value)),
            Err(_) => {
                tracing::debug!(token = %token, "try_read rejected token");
                Ok(None)
            }
        }
    }
}

impl<S: fmt::Debug> fmt::Debug for Scanner<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scanner")
            .field("source", &self.source)
            .field("whitespace", &self.config.whitespace)
            .finish()
    }
}
