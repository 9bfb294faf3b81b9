use serde::{Deserialize, Serialize};
use crate::error::Result;

/// Fallback tags used when a word is missing from the lexicon.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TaggerConfig {
    /// Tag for unknown words longer than one character.
    pub default_tag: String,
    /// Appended to an unknown single-character word to form its tag.
    pub unknown_marker: String,
}

impl Default for TaggerConfig {
    fn default() -> Self {
        Self {
            default_tag: "NN".to_string(),
            unknown_marker: "^".to_string(),
        }
    }
}

impl TaggerConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
