//! Lexicon-based tag guesses and the contextual rules that correct them.

use tracing::trace;
use crate::config::TaggerConfig;
use crate::lexicon::Lexicon;
use crate::normalize;

/// The lexicon's first-choice tag for one token, before any context is applied.
///
/// Empty tokens, and words the lexicon knows without any recorded tag, get the
/// empty tag. Unknown words fall back to the configured defaults.
pub fn base_tag(word: &str, lexicon: &Lexicon, config: &TaggerConfig) -> String {
    if word.is_empty() {
        return String::new();
    }
    let stripped = normalize::strip(word);
    if stripped.is_empty() {
        return String::new();
    }
    match lexicon.lookup(stripped) {
        Some(tags) => tags.first().cloned().unwrap_or_default(),
        None if stripped.chars().count() == 1 => format!("{}{}", stripped, config.unknown_marker),
        None => config.default_tag.clone(),
    }
}

/// Runs the transformation rules left to right over the sentence.
///
/// `base_tags` is never modified: the determiner check always looks at the
/// previous token's base tag, while the returned vector holds the final tags.
pub fn transform<S: AsRef<str>>(words: &[S], base_tags: &[String]) -> Vec<String> {
    debug_assert_eq!(words.len(), base_tags.len());

    words
        .iter()
        .zip(base_tags)
        .enumerate()
        .map(|(i, (word, base))| {
            let word = word.as_ref();
            let mut tag = base.clone();

            let rewrite = |tag: &mut String, new: &str, rule: &str| {
                trace!(position = i, word, from = %tag, to = new, rule, "rule fired");
                *tag = new.to_string();
            };

            if i > 0
                && base_tags[i - 1] == "DT"
                && matches!(tag.as_str(), "VBD" | "VBP" | "VB")
            {
                rewrite(&mut tag, "NN", "verb after determiner");
            }

            if tag.starts_with('N') && word.parse::<f64>().is_ok() {
                rewrite(&mut tag, "CD", "number");
            } else if tag.starts_with('N') && word.ends_with("ed") {
                rewrite(&mut tag, "VBN", "past participle");
            }

            if word.ends_with("ly") {
                rewrite(&mut tag, "RB", "adverb");
            } else if tag.starts_with("NN") && word.ends_with("al") {
                rewrite(&mut tag, "JJ", "adjective");
            } else if tag.starts_with("NN") && i > 0 && words[i - 1].as_ref() == "would" {
                rewrite(&mut tag, "VB", "verb after would");
            } else if tag == "NN" && word.ends_with('s') {
                rewrite(&mut tag, "NNS", "plural");
            }

            if tag.starts_with("NN") && word.ends_with("ing") {
                rewrite(&mut tag, "VBG", "gerund");
            }

            tag
        })
        .collect()
}
