use serde::{Deserialize, Serialize};
use std::fmt;

/// A word exactly as it was given to the tagger, paired with its final tag.
///
/// The tag is empty for empty tokens (runs of spaces in a sentence) and
/// ends in the unknown marker for single characters missing from the lexicon.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaggedWord {
    pub word: String,
    pub tag: String,
}

impl TaggedWord {
    pub fn new(word: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            tag: tag.into(),
        }
    }
}

impl fmt::Display for TaggedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.word, self.tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(TaggedWord::new("dogs", "NNS").to_string(), "dogs/NNS");
        assert_eq!(TaggedWord::new("", "").to_string(), "/");
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&TaggedWord::new("ran", "VBD")).unwrap();
        assert_eq!(json, r#"{"word":"ran","tag":"VBD"}"#);
    }
}
