//! # text-scanner - Whitespace-Delimited Input Scanning
//!
//! A small `scanf`/`cin`-style reader for Rust. It splits any character
//! source into **blocks** (maximal runs of non-whitespace characters), lines
//! and typed values, and hands them out on demand as lazy iterators.
//!
//! ## Features
//!
//! - **Any source** - in-memory strings, files, locked stdin, or your own [`CharSource`]
//! - **Typed reads** - anything implementing [`FromStr`](std::str::FromStr), or an explicit parse closure
//! - **Error policies** - fail, skip, or substitute a default for malformed tokens
//! - **Lazy sequences** - `take(n)` never reads past the `n`-th value
//! - **Never rewinds** - every read leaves the source right after what it consumed
//!
//! ## Quick Start
//!
//! ```rust
//! use text_scanner::Scanner;
//!
//! # fn main() -> text_scanner::Result<()> {
//! let input = "3\n10 20 30\n";
//! let mut scanner = Scanner::from_text(input);
//!
//! let count: usize = scanner.read()?;
//! let values = scanner
//!     .read_values::<i64>(false)
//!     .take(count)
//!     .collect::<text_scanner::Result<Vec<_>>>()?;
//!
//! assert_eq!(values.iter().sum::<i64>(), 60);
//! # Ok(())
//! # }
//! ```
//!
//! ### Reading From a File or Stdin
//!
//! ```rust,no_run
//! use std::fs::File;
//! use std::io::BufReader;
//! use text_scanner::Scanner;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let file = File::open("numbers.txt")?;
//! let mut scanner = Scanner::from_reader(BufReader::new(file));
//! for line in scanner.read_lines() {
//!     println!("{}", line?);
//! }
//!
//! let stdin = std::io::stdin();
//! let mut scanner = Scanner::from_reader(stdin.lock());
//! let n: u32 = scanner.read()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Blocks and End of Input
//!
//! [`Scanner::read_block`] distinguishes "nothing left" from "only whitespace
//! left":
//!
//! ```rust
//! use text_scanner::Scanner;
//!
//! let mut empty = Scanner::from_text("");
//! assert_eq!(empty.read_block().unwrap(), None);
//!
//! let mut blank = Scanner::from_text("   ");
//! assert_eq!(blank.read_block().unwrap(), Some(String::new()));
//! ```
//!
//! ## Error Policies
//!
//! ```rust
//! use text_scanner::{Malformed, Scanner};
//!
//! // Skip malformed tokens
//! let mut scanner = Scanner::from_text("1 2 x 4");
//! let skipped: Vec<i32> = scanner.read_values(true).map(Result::unwrap).collect();
//! assert_eq!(skipped, vec![1, 2, 4]);
//!
//! // Substitute a default
//! let mut scanner = Scanner::from_text("1 2 x 4");
//! let defaulted: Vec<i32> = scanner.read_values_or(0).map(Result::unwrap).collect();
//! assert_eq!(defaulted, vec![1, 2, 0, 4]);
//!
//! // Fail on the first malformed token
//! let mut scanner = Scanner::from_text("1 2 x 4");
//! let strict: Result<Vec<i32>, _> = scanner.read_values(false).collect();
//! assert!(strict.is_err());
//!
//! // Explicit parse function with a caller-owned convention
//! let mut scanner = Scanner::from_text("1,5 oops 2,25");
//! let decimal_comma = |s: &str| s.replace(',', ".").parse::<f64>();
//! let parsed: Vec<f64> = scanner
//!     .read_values_with(Malformed::Skip, decimal_comma)
//!     .map(Result::unwrap)
//!     .collect();
//! assert_eq!(parsed, vec![1.5, 2.25]);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! CharSource → Scanner::read_block → read / try_read → Values / Blocks / Lines
//! ```
//!
//! - [`CharSource`] - peekable character stream with line reads
//! - [`Scanner`] - block extraction and typed reads
//! - [`Values`], [`Blocks`], [`Lines`] - lazy sequences
//! - [`Malformed`], [`OnError`] - what a value sequence does with a bad token
//! - [`ScannerConfig`] - whitespace set, loadable from JSON
//! - [`Error`] - parse, I/O and configuration failures
//!
//! ## Logging
//!
//! Block and line extraction emit `tracing` events at `trace` level; absorbed
//! parse failures are logged at `debug`. No subscriber is installed by the
//! library.
//!
//! ## License
//!
//! Licensed under the [MIT License](https://opensource.org/licenses/MIT).

/// Version of the scanner crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod scanner;
pub mod source;

// Re-export main types
pub use error::{Error, Result};
pub use scanner::{
    Blocks, ErrorPolicy, FromStrFn, Lines, Malformed, OnError, Scanner, ScannerConfig, Values,
    DEFAULT_WHITESPACE,
};
pub use source::{CharSource, ReaderSource, StrSource};

/// Scanner over an in-memory string
pub type TextScanner<'a> = Scanner<StrSource<'a>>;

/// Scanner over a buffered reader
pub type ReaderScanner<R> = Scanner<ReaderSource<R>>;
