pub mod substitute;

pub use substitute::apply;

use crate::checker::SpellChecker;
use crate::error::CorrectionError;
use crate::ScanReport;
use std::collections::BTreeMap;

/// What the user decided for one flagged word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorrectionDecision {
    /// Leave the word unchanged.
    Skip,
    /// Use the dictionary's best correction.
    Auto,
    /// A replacement of the user's choosing; need not come from the
    /// suggestion set.
    Explicit(String),
}

/// Resolve one decision into a replacement, or `None` for "leave as-is".
/// Pure over its inputs plus the dictionary capability.
pub fn resolve(
    word: &str,
    decision: &CorrectionDecision,
    speller: &SpellChecker,
) -> Option<String> {
    match decision {
        CorrectionDecision::Skip => None,
        CorrectionDecision::Auto => speller.best_correction(word),
        CorrectionDecision::Explicit(replacement) => {
            let trimmed = replacement.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
    }
}

/// Collects decisions for every flagged word of one scan, then freezes
/// into the mapping the substitution engine consumes. A word without a
/// decision blocks freezing; it is never silently skipped.
#[derive(Debug, Default)]
pub struct CorrectionPlan {
    pending: Vec<String>,
    resolved: BTreeMap<String, Option<String>>,
    warnings: Vec<String>,
}

impl CorrectionPlan {
    pub fn new(report: &ScanReport) -> Self {
        Self {
            pending: report.misspellings.iter().map(|m| m.word.clone()).collect(),
            resolved: BTreeMap::new(),
            warnings: Vec::new(),
        }
    }

    /// Record a decision for a flagged word. Decisions for words the scan
    /// never flagged are ignored.
    pub fn decide(&mut self, word: &str, decision: CorrectionDecision, speller: &SpellChecker) {
        let Some(index) = self.pending.iter().position(|w| w == word) else {
            return;
        };
        self.pending.remove(index);

        let replacement = resolve(word, &decision, speller);
        if replacement.is_none() && decision == CorrectionDecision::Auto {
            self.warnings
                .push(format!("no suggestion available for '{}', left unchanged", word));
        }
        self.resolved.insert(word.to_string(), replacement);
    }

    /// Flagged words still awaiting a decision.
    pub fn unresolved(&self) -> &[String] {
        &self.pending
    }

    pub fn is_complete(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Freeze into the final mapping. Fails if any flagged word has no
    /// decision, naming every such word.
    pub fn freeze(self) -> Result<CorrectionMapping, CorrectionError> {
        if !self.pending.is_empty() {
            return Err(CorrectionError::IncompleteDecision {
                unresolved: self.pending,
            });
        }

        let entries = self
            .resolved
            .into_iter()
            .filter_map(|(word, replacement)| replacement.map(|r| (word, r)))
            .collect();

        Ok(CorrectionMapping { entries })
    }
}

/// Finalized original-word to replacement table. Keys are matched
/// case-sensitively, whole-word only, during substitution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorrectionMapping {
    entries: BTreeMap<String, String>,
}

impl CorrectionMapping {
    pub fn get(&self, word: &str) -> Option<&str> {
        self.entries.get(word).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for CorrectionMapping {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::dictionary::Dictionary;
    use crate::dataset::{Cell, Column};
    use crate::Dataset;

    fn speller() -> SpellChecker {
        let dictionary = Dictionary::from_words(["receive", "the", "cat"]).unwrap();
        SpellChecker::with_dictionary(dictionary)
    }

    fn report_for(text: &str) -> ScanReport {
        let dataset =
            Dataset::new(vec![Column::new("notes", vec![Cell::Text(text.into())])]).unwrap();
        speller().scan(&dataset)
    }

    #[test]
    fn test_skip_resolves_to_none() {
        assert_eq!(resolve("recieve", &CorrectionDecision::Skip, &speller()), None);
    }

    #[test]
    fn test_auto_resolves_to_best_correction() {
        assert_eq!(
            resolve("recieve", &CorrectionDecision::Auto, &speller()),
            Some("receive".to_string())
        );
    }

    #[test]
    fn test_explicit_is_trimmed() {
        assert_eq!(
            resolve(
                "recieve",
                &CorrectionDecision::Explicit("  receive ".into()),
                &speller()
            ),
            Some("receive".to_string())
        );
    }

    #[test]
    fn test_explicit_blank_behaves_as_skip() {
        assert_eq!(
            resolve("recieve", &CorrectionDecision::Explicit("   ".into()), &speller()),
            None
        );
    }

    #[test]
    fn test_freeze_requires_every_decision() {
        let report = report_for("recieve wrods");
        let mut plan = CorrectionPlan::new(&report);
        plan.decide("recieve", CorrectionDecision::Auto, &speller());

        match plan.freeze() {
            Err(CorrectionError::IncompleteDecision { unresolved }) => {
                assert_eq!(unresolved, vec!["wrods".to_string()]);
            }
            other => panic!("expected IncompleteDecision, got {:?}", other),
        }
    }

    #[test]
    fn test_freeze_excludes_skipped_words() {
        let report = report_for("recieve wrods");
        let speller = speller();
        let mut plan = CorrectionPlan::new(&report);
        plan.decide("recieve", CorrectionDecision::Auto, &speller);
        plan.decide("wrods", CorrectionDecision::Skip, &speller);

        let mapping = plan.freeze().unwrap();
        assert_eq!(mapping.len(), 1);
        assert_eq!(mapping.get("recieve"), Some("receive"));
        assert_eq!(mapping.get("wrods"), None);
    }

    #[test]
    fn test_auto_without_candidate_warns_and_skips() {
        let report = report_for("xqzzjy");
        let speller = speller();
        let mut plan = CorrectionPlan::new(&report);
        plan.decide("xqzzjy", CorrectionDecision::Auto, &speller);

        assert_eq!(plan.warnings().len(), 1);
        let mapping = plan.freeze().unwrap();
        assert!(mapping.is_empty());
    }

    #[test]
    fn test_decisions_for_unflagged_words_are_ignored() {
        let report = report_for("recieve");
        let speller = speller();
        let mut plan = CorrectionPlan::new(&report);
        plan.decide("nonsense", CorrectionDecision::Auto, &speller);
        plan.decide("recieve", CorrectionDecision::Skip, &speller);

        let mapping = plan.freeze().unwrap();
        assert!(mapping.is_empty());
    }
}
