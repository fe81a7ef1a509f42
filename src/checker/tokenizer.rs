use lazy_static::lazy_static;
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

lazy_static! {
    // dd/mm/yyyy and friends, anywhere in the cell
    static ref DATE_LIKE: Regex = Regex::new(r"\b\d{1,2}[/.-]\d{1,2}[/.-]\d{2,4}\b").unwrap();
}

/// Whether a text cell holds structured data (numbers, dates) rather than
/// prose. Structured cells are never scanned, so a correction pass cannot
/// touch them.
pub fn looks_structured(cell_text: &str) -> bool {
    let text = cell_text.trim();
    match text.chars().next() {
        None => false,
        // Covers plain numbers and leading-digit dates like 03/04/2024
        Some(c) if c.is_ascii_digit() => true,
        _ => text.parse::<f64>().is_ok() || DATE_LIKE.is_match(text),
    }
}

/// Tokens of a cell that qualify for spelling evaluation: whitespace-
/// separated and fully alphabetic. Anything with embedded digits or
/// punctuation is left alone.
pub fn spell_candidates(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
        .filter(|token| !token.is_empty() && token.chars().all(char::is_alphabetic))
}

/// Rewrite every maximal alphabetic run in `text` through `lookup`,
/// leaving separators and unmapped runs byte-identical. Matches are
/// whole-word by construction and replacement text is never re-scanned.
pub fn rewrite_words<F>(text: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let mut out = String::with_capacity(text.len());
    let mut word = String::new();

    for grapheme in text.graphemes(true) {
        let alphabetic = grapheme
            .chars()
            .next()
            .is_some_and(|c| c.is_alphabetic());

        if alphabetic {
            word.push_str(grapheme);
        } else {
            flush(&mut out, &mut word, &lookup);
            out.push_str(grapheme);
        }
    }
    flush(&mut out, &mut word, &lookup);

    out
}

fn flush<F>(out: &mut String, word: &mut String, lookup: &F)
where
    F: Fn(&str) -> Option<String>,
{
    if word.is_empty() {
        return;
    }
    match lookup(word) {
        Some(replacement) => out.push_str(&replacement),
        None => out.push_str(word),
    }
    word.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_cells() {
        assert!(looks_structured("42"));
        assert!(looks_structured("03/04/2024"));
        assert!(looks_structured("  19.99 "));
        assert!(looks_structured("-3.5"));
        assert!(looks_structured("4 cats"));
        assert!(looks_structured("invoiced on 03/04/2024"));
        assert!(!looks_structured("hello world"));
        assert!(!looks_structured(""));
        assert!(!looks_structured("   "));
    }

    #[test]
    fn test_spell_candidates() {
        let tokens: Vec<&str> = spell_candidates("teh cat, sat on x2 mats").collect();
        // "cat," has punctuation and "x2" has a digit; neither qualifies
        assert_eq!(tokens, vec!["teh", "sat", "on", "mats"]);
    }

    #[test]
    fn test_rewrite_replaces_whole_words_only() {
        let rewritten = rewrite_words("nov was a novel month", |w| {
            (w == "nov").then(|| "November".to_string())
        });
        assert_eq!(rewritten, "November was a novel month");
    }

    #[test]
    fn test_rewrite_preserves_separators() {
        let rewritten = rewrite_words("teh, teh... teh!", |w| {
            (w == "teh").then(|| "the".to_string())
        });
        assert_eq!(rewritten, "the, the... the!");
    }

    #[test]
    fn test_rewrite_without_matches_is_identity() {
        let text = "already clean — nothing to do (v2)";
        assert_eq!(rewrite_words(text, |_| None), text);
    }
}
