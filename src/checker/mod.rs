pub mod dictionary;
pub mod suggestions;
pub mod tokenizer;

use crate::error::SpellcheckError;
use crate::{Config, Dataset, Misspelling, ScanReport};
use dictionary::Dictionary;
use rayon::prelude::*;
use regex::Regex;
use std::collections::{BTreeMap, HashSet};
use std::fs;

/// The spellchecking capability: one long-lived dictionary plus the user's
/// custom vocabulary, constructed once and shared by scan and resolve.
pub struct SpellChecker {
    dictionary: Dictionary,
    vocabulary: HashSet<String>,
    ignore_patterns: Vec<Regex>,
    max_suggestions: usize,
}

impl SpellChecker {
    pub fn new(config: &Config) -> Result<Self, SpellcheckError> {
        let dictionary = Dictionary::load(&config.language)
            .map_err(|e| SpellcheckError::DictionaryUnavailable(e.to_string()))?;

        let mut checker = Self::with_dictionary(dictionary);
        checker.max_suggestions = config.max_suggestions;

        // Custom vocabulary merges into the known set before any scan
        if let Some(vocab_path) = &config.vocabulary {
            if vocab_path.exists() {
                let content = fs::read_to_string(vocab_path).map_err(|e| {
                    SpellcheckError::DictionaryUnavailable(format!(
                        "failed to read vocabulary {}: {}",
                        vocab_path.display(),
                        e
                    ))
                })?;
                checker.add_vocabulary(content.lines());
            }
        }

        for pattern in &config.ignore_patterns {
            match Regex::new(pattern) {
                Ok(re) => checker.ignore_patterns.push(re),
                Err(e) => eprintln!("Warning: Invalid regex pattern '{}': {}", pattern, e),
            }
        }

        Ok(checker)
    }

    /// Build a checker around an existing dictionary, with no vocabulary
    /// and no ignore rules.
    pub fn with_dictionary(dictionary: Dictionary) -> Self {
        Self {
            dictionary,
            vocabulary: HashSet::new(),
            ignore_patterns: Vec::new(),
            max_suggestions: 5,
        }
    }

    /// Merge words into the known set. Blank lines and `#` comments are
    /// skipped so vocabulary files can be annotated.
    pub fn add_vocabulary<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            let word = word.as_ref().trim();
            if !word.is_empty() && !word.starts_with('#') {
                self.vocabulary.insert(word.to_lowercase());
            }
        }
    }

    /// Whether the dictionary or vocabulary knows this word. Detection is
    /// case-insensitive; `Teh` and `teh` are equally unknown.
    pub fn is_known(&self, word: &str) -> bool {
        let lower = word.to_lowercase();
        self.vocabulary.contains(&lower) || self.dictionary.contains(&lower)
    }

    /// Ranked replacement candidates for a word; may be empty.
    pub fn candidates(&self, word: &str) -> Vec<String> {
        suggestions::generate(&word.to_lowercase(), &self.dictionary, self.max_suggestions)
    }

    /// The single best correction for a word, if one exists.
    pub fn best_correction(&self, word: &str) -> Option<String> {
        suggestions::best(&word.to_lowercase(), &self.dictionary)
    }

    /// Scan every text cell and report each distinct unknown word once,
    /// in lexicographic order, with its suggestion set. The input is never
    /// mutated.
    pub fn scan(&self, dataset: &Dataset) -> ScanReport {
        let flagged: BTreeMap<String, usize> = dataset
            .columns()
            .par_iter()
            .map(|column| {
                let mut local: BTreeMap<String, usize> = BTreeMap::new();
                for cell in &column.cells {
                    let Some(text) = cell.as_text() else { continue };
                    if tokenizer::looks_structured(text) {
                        continue;
                    }

                    let mut seen_in_cell = HashSet::new();
                    for token in tokenizer::spell_candidates(text) {
                        if self.should_ignore(token) || self.is_known(token) {
                            continue;
                        }
                        if seen_in_cell.insert(token.to_string()) {
                            *local.entry(token.to_string()).or_insert(0) += 1;
                        }
                    }
                }
                local
            })
            .reduce(BTreeMap::new, |mut merged, local| {
                for (word, count) in local {
                    *merged.entry(word).or_insert(0) += count;
                }
                merged
            });

        let misspellings = flagged
            .into_iter()
            .map(|(word, occurrences)| {
                let suggestions = self.candidates(&word);
                Misspelling {
                    word,
                    suggestions,
                    occurrences,
                }
            })
            .collect();

        ScanReport { misspellings }
    }

    fn should_ignore(&self, word: &str) -> bool {
        // Single characters are never worth flagging
        if word.chars().count() <= 1 {
            return true;
        }

        self.ignore_patterns.iter().any(|re| re.is_match(word))
    }
}
