use crate::config::TaggerConfig;
use crate::lexicon::Lexicon;
use crate::rules;
use crate::token::TaggedWord;

/// Rule-based part-of-speech tagger over an owned lexicon.
///
/// Tagging takes `&self` and keeps no state between calls, so one instance
/// can be shared by reference across threads.
#[derive(Debug, Clone)]
pub struct Tagger {
    lexicon: Lexicon,
    config: TaggerConfig,
}

impl Tagger {
    pub fn new(lexicon: Lexicon) -> Self {
        Self::with_config(lexicon, TaggerConfig::default())
    }

    pub fn with_config(lexicon: Lexicon, config: TaggerConfig) -> Self {
        Self { lexicon, config }
    }

    pub fn from_corpus(corpus: &str) -> Self {
        Self::new(Lexicon::build(corpus))
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn config(&self) -> &TaggerConfig {
        &self.config
    }

    pub fn contains_word(&self, word: &str) -> bool {
        self.lexicon.contains_word(word)
    }

    /// Tags a sentence split on single spaces.
    ///
    /// Runs of spaces produce empty tokens, which come back with an empty tag
    /// so the output lines up with `sentence.split(' ')`.
    pub fn tag(&self, sentence: &str) -> Vec<TaggedWord> {
        if sentence.is_empty() {
            return Vec::new();
        }
        let words: Vec<&str> = sentence.split(' ').collect();
        self.tag_words(&words)
    }

    /// Tags pre-split words, returning one entry per input word in order.
    pub fn tag_words<S: AsRef<str>>(&self, words: &[S]) -> Vec<TaggedWord> {
        if words.is_empty() {
            return Vec::new();
        }

        let base_tags: Vec<String> = words
            .iter()
            .map(|word| rules::base_tag(word.as_ref(), &self.lexicon, &self.config))
            .collect();
        let tags = rules::transform(words, &base_tags);

        words
            .iter()
            .zip(tags)
            .map(|(word, tag)| TaggedWord::new(word.as_ref(), tag))
            .collect()
    }
}
