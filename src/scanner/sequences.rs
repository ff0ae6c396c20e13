//! Lazy sequences over a scanner
//!
//! Each iterator mutably borrows its [`Scanner`], so the borrow checker
//! guarantees only one sequence advances the shared cursor at a time. Nothing
//! is read until `next()` is called, which lets `take(n)` stop exactly after
//! the `n`-th element. After yielding an `Err`, every iterator here is fused.

use std::fmt;
use std::iter::FusedIterator;
use std::str::FromStr;

use super::text_scanner::Scanner;
use crate::error::{Error, Result};
use crate::source::CharSource;

/// What a value sequence does with a token it cannot parse
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OnError<T> {
    /// Yield a parse error and end the sequence
    Fail,
    /// Drop the token and move on
    Skip,
    /// Yield this value in place of the token
    Default(T),
}

/// Fail-or-skip policy that never has to produce a `T`
///
/// Used by [`Scanner::read_values`], so any `FromStr` type can be scanned,
/// including types that are not `Clone`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Malformed {
    /// Yield a parse error and end the sequence
    Fail,
    /// Drop the token and move on
    Skip,
}

impl Malformed {
    /// `Skip` when `skip_on_errors` is set, otherwise `Fail`
    pub fn skip_if(skip_on_errors: bool) -> Self {
        if skip_on_errors {
            Malformed::Skip
        } else {
            Malformed::Fail
        }
    }
}

/// Decides, token by token, what to do after a parse failure
pub trait ErrorPolicy<T> {
    /// Called once per token that failed to parse
    fn on_malformed(&mut self) -> OnError<T>;
}

impl<T> ErrorPolicy<T> for Malformed {
    fn on_malformed(&mut self) -> OnError<T> {
        match self {
            Malformed::Fail => OnError::Fail,
            Malformed::Skip => OnError::Skip,
        }
    }
}

// Every malformed token gets its own copy of the default
impl<T: Clone> ErrorPolicy<T> for OnError<T> {
    fn on_malformed(&mut self) -> OnError<T> {
        self.clone()
    }
}

/// Parse function used by the `FromStr`-based sequence readers
pub type FromStrFn<T> = fn(&str) -> std::result::Result<T, <T as FromStr>::Err>;

/// Typed values parsed from successive blocks
///
/// Empty blocks (whitespace left at the end of the input) are skipped
/// without counting as a parse attempt.
pub struct Values<'s, S, F, P> {
    scanner: &'s mut Scanner<S>,
    parse: F,
    policy: P,
    finished: bool,
}

impl<S, T, E, F, P> Iterator for Values<'_, S, F, P>
where
    S: CharSource,
    E: fmt::Display,
    F: FnMut(&str) -> std::result::Result<T, E>,
    P: ErrorPolicy<T>,
{
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            let token = match self.scanner.read_block() {
                Ok(Some(token)) => token,
                Ok(None) => {
                    self.finished = true;
                    return None;
                }
                Err(e) => {
                    tracing::warn!(error = %e, "value sequence stopped by source error");
                    self.finished = true;
                    return Some(Err(e));
                }
            };

            if token.is_empty() {
                continue;
            }

            let reason = match (self.parse)(&token) {
                Ok(value) => return Some(Ok(value)),
                Err(reason) => reason,
            };

            match self.policy.on_malformed() {
                OnError::Fail => {
                    tracing::debug!(token = %token, "value sequence stopped on malformed token");
                    self.finished = true;
                    return Some(Err(Error::parse::<T>(token, reason)));
                }
                OnError::Skip => {
                    tracing::debug!(token = %token, "skipping malformed token");
                }
                OnError::Default(value) => {
                    tracing::debug!(token = %token, "substituting default for malformed token");
                    return Some(Ok(value));
                }
            }
        }
    }
}

impl<S, T, E, F, P> FusedIterator for Values<'_, S, F, P>
where
    S: CharSource,
    E: fmt::Display,
    F: FnMut(&str) -> std::result::Result<T, E>,
    P: ErrorPolicy<T>,
{
}

/// Raw blocks, empty ones included
pub struct Blocks<'s, S> {
    scanner: &'s mut Scanner<S>,
    finished: bool,
}

impl<S: CharSource> Iterator for Blocks<'_, S> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let item = self.scanner.read_block().transpose();
        if !matches!(item, Some(Ok(_))) {
            self.finished = true;
        }
        item
    }
}

impl<S: CharSource> FusedIterator for Blocks<'_, S> {}

/// Lines without their terminators
pub struct Lines<'s, S> {
    scanner: &'s mut Scanner<S>,
    finished: bool,
}

impl<S: CharSource> Iterator for Lines<'_, S> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let item = self.scanner.read_line().transpose();
        match &item {
            Some(Ok(line)) => tracing::trace!(len = line.len(), "read line"),
            Some(Err(e)) => {
                tracing::warn!(error = %e, "line sequence stopped by source error");
                self.finished = true;
            }
            None => self.finished = true,
        }
        item
    }
}

impl<S: CharSource> FusedIterator for Lines<'_, S> {}

impl<S: CharSource> Scanner<S> {
    /// Values of type `T`, one per non-empty block
    ///
    /// With `skip_on_errors` malformed tokens are dropped; without it the
    /// first malformed token yields an [`Error::Parse`] and ends the sequence.
    ///
    /// ```
    /// use text_scanner::Scanner;
    ///
    /// let mut scanner = Scanner::from_text("1 2 x 4");
    /// let values: Vec<i32> = scanner
    ///     .read_values(true)
    ///     .collect::<Result<_, _>>()
    ///     .unwrap();
    /// assert_eq!(values, vec![1, 2, 4]);
    /// ```
    pub fn read_values<T>(
        &mut self,
        skip_on_errors: bool,
    ) -> Values<'_, S, FromStrFn<T>, Malformed>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        let parse: FromStrFn<T> = str::parse::<T>;
        self.read_values_with(Malformed::skip_if(skip_on_errors), parse)
    }

    /// Values of type `T`, with `default` standing in for malformed tokens
    ///
    /// ```
    /// use text_scanner::Scanner;
    ///
    /// let mut scanner = Scanner::from_text("1 2 x 4");
    /// let values: Vec<i32> = scanner.read_values_or(-1).map(Result::unwrap).collect();
    /// assert_eq!(values, vec![1, 2, -1, 4]);
    /// ```
    pub fn read_values_or<T>(&mut self, default: T) -> Values<'_, S, FromStrFn<T>, OnError<T>>
    where
        T: FromStr + Clone,
        T::Err: fmt::Display,
    {
        let parse: FromStrFn<T> = str::parse::<T>;
        self.read_values_with(OnError::Default(default), parse)
    }

    /// Values converted with an explicit parse function under `policy`
    ///
    /// `policy` is either a [`Malformed`] or an [`OnError`]; only the latter
    /// needs `T: Clone`.
    pub fn read_values_with<T, E, F, P>(&mut self, policy: P, parse: F) -> Values<'_, S, F, P>
    where
        F: FnMut(&str) -> std::result::Result<T, E>,
        P: ErrorPolicy<T>,
    {
        Values {
            scanner: self,
            parse,
            policy,
            finished: false,
        }
    }

    /// Every block until the source is exhausted
    ///
    /// Unlike the value readers this keeps empty blocks, for callers building
    /// their own token pipelines.
    pub fn read_blocks(&mut self) -> Blocks<'_, S> {
        Blocks {
            scanner: self,
            finished: false,
        }
    }

    /// Every remaining line
    pub fn read_lines(&mut self) -> Lines<'_, S> {
        Lines {
            scanner: self,
            finished: false,
        }
    }
}
