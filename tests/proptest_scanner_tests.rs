//! Property-based tests for block, line and value extraction
//!
//! These tests use proptest to generate random inputs and verify that:
//! 1. Blocks partition the non-whitespace characters of the input
//! 2. String and reader sources scan identically
//! 3. The error policies agree with a direct token-by-token parse

use std::io::Cursor;

use proptest::prelude::*;
use text_scanner::{Scanner, StrSource, DEFAULT_WHITESPACE};

// =============================================================================
// STRATEGY GENERATORS
// =============================================================================

/// Text dense in whitespace, including NUL and bare carriage returns
fn whitespace_heavy_text() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[a-c0-9 \t\n\r\x00\-]{0,80}").unwrap()
}

/// Arbitrary printable text, non-ASCII included
fn any_text() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[\x00-\x7F\x{a0}-\x{3ff}]{0,120}").unwrap()
}

/// Either a well-formed integer or a junk word
fn int_or_junk() -> impl Strategy<Value = String> {
    prop_oneof![
        (-10_000i64..10_000i64).prop_map(|n| n.to_string()),
        "[a-z]{1,6}".prop_map(|s| s),
    ]
}

/// A run of one or more whitespace characters
fn separator() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[ \t\n\r]{1,3}").unwrap()
}

fn tokens_with_separators() -> impl Strategy<Value = (Vec<String>, String)> {
    prop::collection::vec((int_or_junk(), separator()), 0..30).prop_map(|pairs| {
        let tokens: Vec<String> = pairs.iter().map(|(t, _)| t.clone()).collect();
        let text: String = pairs.iter().map(|(t, s)| format!("{}{}", t, s)).collect();
        (tokens, text)
    })
}

fn collect_blocks(text: &str) -> Vec<String> {
    let mut scanner = Scanner::from_text(text);
    scanner
        .read_blocks()
        .collect::<text_scanner::Result<_>>()
        .unwrap()
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    /// Concatenated blocks reproduce every non-whitespace character in order
    #[test]
    fn blocks_preserve_non_whitespace(source in whitespace_heavy_text()) {
        let expected: String = source
            .chars()
            .filter(|c| !DEFAULT_WHITESPACE.contains(c))
            .collect();
        let joined: String = collect_blocks(&source).concat();
        prop_assert_eq!(joined, expected);
    }

    /// No block ever contains a whitespace character
    #[test]
    fn blocks_contain_no_whitespace(source in any_text()) {
        for block in collect_blocks(&source) {
            prop_assert!(!block.chars().any(|c| DEFAULT_WHITESPACE.contains(&c)));
        }
    }

    /// Only the final block can be empty
    #[test]
    fn only_last_block_may_be_empty(source in whitespace_heavy_text()) {
        let blocks = collect_blocks(&source);
        if let Some((_, init)) = blocks.split_last() {
            prop_assert!(init.iter().all(|b| !b.is_empty()));
        }
    }

    /// String and reader sources produce the same blocks and lines
    #[test]
    fn sources_agree(source in any_text()) {
        let mut from_str = Scanner::new(StrSource::new(&source));
        let mut from_reader = Scanner::from_reader(Cursor::new(source.as_bytes()));

        let str_blocks: Vec<String> = from_str.read_blocks().map(Result::unwrap).collect();
        let reader_blocks: Vec<String> = from_reader.read_blocks().map(Result::unwrap).collect();
        prop_assert_eq!(str_blocks, reader_blocks);

        let mut from_str = Scanner::new(StrSource::new(&source));
        let mut from_reader = Scanner::from_reader(Cursor::new(source.as_bytes()));

        let str_lines: Vec<String> = from_str.read_lines().map(Result::unwrap).collect();
        let reader_lines: Vec<String> = from_reader.read_lines().map(Result::unwrap).collect();
        prop_assert_eq!(str_lines, reader_lines);
    }

    /// Newline-terminated records come back verbatim
    #[test]
    fn lines_round_trip(lines in prop::collection::vec("[a-z \t]{0,12}", 0..10)) {
        let text: String = lines.iter().map(|l| format!("{}\n", l)).collect();
        let mut scanner = Scanner::from_text(&text);
        let actual: Vec<String> = scanner.read_lines().map(Result::unwrap).collect();
        prop_assert_eq!(actual, lines);
    }

    /// Skip policy yields exactly the well-formed tokens
    #[test]
    fn skip_policy_matches_filter((tokens, text) in tokens_with_separators()) {
        let expected: Vec<i64> = tokens.iter().filter_map(|t| t.parse().ok()).collect();
        let mut scanner = Scanner::from_text(&text);
        let actual: Vec<i64> = scanner.read_values(true).map(Result::unwrap).collect();
        prop_assert_eq!(actual, expected);
    }

    /// Default policy yields one value per token
    #[test]
    fn default_policy_matches_map((tokens, text) in tokens_with_separators()) {
        let expected: Vec<i64> = tokens.iter().map(|t| t.parse().unwrap_or(i64::MIN)).collect();
        let mut scanner = Scanner::from_text(&text);
        let actual: Vec<i64> = scanner.read_values_or(i64::MIN).map(Result::unwrap).collect();
        prop_assert_eq!(actual, expected);
    }

    /// Strict policy yields the well-formed prefix, then one error, then nothing
    #[test]
    fn fail_policy_stops_at_first_junk((tokens, text) in tokens_with_separators()) {
        let prefix: Vec<i64> = tokens.iter().map_while(|t| t.parse().ok()).collect();
        let has_junk = prefix.len() < tokens.len();

        let mut scanner = Scanner::from_text(&text);
        let mut values = scanner.read_values::<i64>(false);
        for expected in &prefix {
            prop_assert_eq!(values.next().unwrap().unwrap(), *expected);
        }
        if has_junk {
            prop_assert!(values.next().unwrap().is_err());
        }
        prop_assert!(values.next().is_none());
    }
}
