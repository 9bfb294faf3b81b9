use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::debug;
use crate::error::{Error, Result};

/// Word form to candidate tags, most likely tag first.
///
/// Built once from a corpus with one entry per line:
///
/// ```text
/// <word> <tag1> [<tag2> ...]
/// ```
///
/// The table is never mutated after construction, so a shared reference can
/// be read from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: HashMap<String, Vec<String>>,
}

impl Lexicon {
    pub fn build(corpus: &str) -> Self {
        let mut entries = HashMap::new();
        let mut skipped = 0usize;

        for line in corpus.lines() {
            let mut fields = line
                .trim_end_matches('\r')
                .split(' ')
                .filter(|field| !field.is_empty());

            let Some(word) = fields.next() else {
                if !line.is_empty() {
                    skipped += 1;
                }
                continue;
            };
            // Duplicate words: the later line replaces the earlier one.
            let tags: Vec<String> = fields.map(str::to_string).collect();
            entries.insert(word.to_string(), tags);
        }

        debug!(entries = entries.len(), skipped, "built lexicon");
        Self { entries }
    }

    /// Reads a corpus file and builds the lexicon from its contents.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let corpus = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = corpus.len(), "read lexicon corpus");
        Ok(Self::build(&corpus))
    }

    /// Candidate tags for `word`, trying the exact form before the lowercased one.
    ///
    /// `Some(&[])` means the word is known but has no recorded tags.
    pub fn lookup(&self, word: &str) -> Option<&[String]> {
        self.entries
            .get(word)
            .or_else(|| self.entries.get(&word.to_lowercase()))
            .map(Vec::as_slice)
    }

    pub fn contains_word(&self, word: &str) -> bool {
        self.lookup(word).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_and_lookup() {
        let lexicon = Lexicon::build("the DT\nran VBD VB\n");
        assert_eq!(lexicon.len(), 2);
        assert_eq!(lexicon.lookup("the"), Some(&["DT".to_string()][..]));
        assert_eq!(
            lexicon.lookup("ran").unwrap(),
            &["VBD".to_string(), "VB".to_string()]
        );
        assert!(lexicon.lookup("walked").is_none());
    }

    #[test]
    fn test_lowercase_fallback() {
        let lexicon = Lexicon::build("dog NN\n");
        assert_eq!(lexicon.lookup("Dog").unwrap()[0], "NN");
        assert_eq!(lexicon.lookup("DOG").unwrap()[0], "NN");
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let lexicon = Lexicon::build("Dog NNP\n");
        assert_eq!(lexicon.lookup("Dog").unwrap()[0], "NNP");
        assert!(lexicon.lookup("dog").is_none());
        assert!(!lexicon.contains_word("dog"));
    }

    #[test]
    fn test_word_without_tags() {
        let lexicon = Lexicon::build("orphan\n");
        assert_eq!(lexicon.lookup("orphan"), Some(&[][..]));
        assert!(lexicon.contains_word("orphan"));
    }

    #[test]
    fn test_last_duplicate_wins() {
        let lexicon = Lexicon::build("run VB\nrun NN VBP\n");
        assert_eq!(lexicon.len(), 1);
        assert_eq!(
            lexicon.lookup("run").unwrap(),
            &["NN".to_string(), "VBP".to_string()]
        );
    }

    #[test]
    fn test_blank_and_padded_lines() {
        let lexicon = Lexicon::build("\n   \nthe  DT\r\n\ncat NN");
        assert_eq!(lexicon.len(), 2);
        assert_eq!(lexicon.lookup("the").unwrap(), &["DT".to_string()]);
        assert_eq!(lexicon.lookup("cat").unwrap(), &["NN".to_string()]);
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = Lexicon::from_path("/nonexistent/lexicon.txt").unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_from_path_reads_corpus() {
        let path = std::env::temp_dir().join(format!("rule-tagger-lexicon-{}.txt", std::process::id()));
        fs::write(&path, "quickly RB\nslow JJ\n").unwrap();
        let lexicon = Lexicon::from_path(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(lexicon.len(), 2);
        assert!(lexicon.contains_word("Quickly"));
    }
}
