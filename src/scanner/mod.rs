//! Block, line and typed-value extraction
//!
//! Splits a character source on whitespace into blocks and layers typed
//! reads and lazy sequences on top.

mod config;
mod sequences;
mod text_scanner;

pub use config::{ScannerConfig, DEFAULT_WHITESPACE};
pub use sequences::{Blocks, ErrorPolicy, FromStrFn, Lines, Malformed, OnError, Values};
pub use text_scanner::Scanner;
