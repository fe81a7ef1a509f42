pub mod checker;
pub mod cli;
pub mod config;
pub mod correct;
pub mod dataset;
pub mod dict;
pub mod error;

pub use checker::SpellChecker;
pub use config::Config;
pub use correct::{CorrectionDecision, CorrectionMapping};
pub use dataset::{Cell, Column, Dataset};

/// Outcome of scanning one dataset: every distinct misspelled word,
/// lexicographically ordered, with its suggestion set.
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    pub misspellings: Vec<Misspelling>,
}

impl ScanReport {
    pub fn is_clean(&self) -> bool {
        self.misspellings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.misspellings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.misspellings.is_empty()
    }

    /// Look up a flagged word by its exact spelling.
    pub fn get(&self, word: &str) -> Option<&Misspelling> {
        self.misspellings.iter().find(|m| m.word == word)
    }
}

/// One distinct misspelled word found during a scan.
#[derive(Debug, Clone)]
pub struct Misspelling {
    pub word: String,
    pub suggestions: Vec<String>,
    /// How many cells contain the word at least once.
    pub occurrences: usize,
}
