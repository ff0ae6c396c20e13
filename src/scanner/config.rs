use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Characters that separate blocks unless configured otherwise
pub const DEFAULT_WHITESPACE: [char; 5] = [' ', '\t', '\n', '\r', '\0'];

/// Scanner configuration
///
/// Loadable from JSON, e.g. `{"whitespace": [" ", ",", "\n"]}`. Missing
/// fields fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScannerConfig {
    /// Characters skipped between blocks and terminating a block
    pub whitespace: Vec<char>,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        ScannerConfig {
            whitespace: DEFAULT_WHITESPACE.to_vec(),
        }
    }
}

impl ScannerConfig {
    /// Replaces the whitespace set
    pub fn with_whitespace(mut self, whitespace: impl IntoIterator<Item = char>) -> Self {
        self.whitespace = whitespace.into_iter().collect();
        self
    }

    /// Parses and validates a JSON configuration
    pub fn from_json(json: &str) -> Result<Self> {
        let config: ScannerConfig = serde_json::from_str(json)
            .map_err(|e| Error::config(format!("invalid scanner config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes the configuration to JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Rejects configurations the scanner cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.whitespace.is_empty() {
            return Err(Error::config("whitespace set must not be empty"));
        }
        Ok(())
    }

    pub(crate) fn is_whitespace(&self, c: char) -> bool {
        self.whitespace.contains(&c)
    }
}
