use crate::checker::dictionary::Dictionary;
use std::collections::BTreeSet;

/// Maximum edit distance a prefix neighbour may have to qualify.
const MAX_DISTANCE: usize = 2;

/// Generate spelling suggestions for a (lowercased) word, ranked by edit
/// distance and then alphabetically so the output is deterministic.
pub fn generate(word: &str, dictionary: &Dictionary, max_suggestions: usize) -> Vec<String> {
    let mut pool: BTreeSet<String> = BTreeSet::new();

    // Single-edit variants that are real words catch most typos cheaply.
    for candidate in single_edits(word) {
        if dictionary.contains(&candidate) {
            pool.insert(candidate);
        }
    }

    // Widen with dictionary neighbours that share a prefix.
    let prefix: String = word.chars().take(3).collect();
    if prefix.chars().count() == 3 {
        for candidate in dictionary.words_with_prefix(&prefix) {
            if edit_distance(word, &candidate) <= MAX_DISTANCE {
                pool.insert(candidate);
            }
        }
    }

    // Short or badly mangled words: retry with a two-character prefix.
    if pool.is_empty() {
        let prefix: String = word.chars().take(2).collect();
        if prefix.chars().count() == 2 {
            for candidate in dictionary.words_with_prefix(&prefix) {
                if edit_distance(word, &candidate) <= MAX_DISTANCE + 1 {
                    pool.insert(candidate);
                }
            }
        }
    }

    let mut ranked: Vec<String> = pool.into_iter().filter(|c| c != word).collect();
    ranked.sort_by_key(|c| (edit_distance(word, c), c.clone()));
    ranked.truncate(max_suggestions);
    ranked
}

/// The single best correction, if any candidate exists.
pub fn best(word: &str, dictionary: &Dictionary) -> Option<String> {
    generate(word, dictionary, 1).into_iter().next()
}

/// Levenshtein distance, two-row rolling table.
pub(crate) fn edit_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    if a_chars.is_empty() {
        return b_chars.len();
    }
    if b_chars.is_empty() {
        return a_chars.len();
    }

    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr = vec![0usize; b_chars.len() + 1];

    for (i, &a_char) in a_chars.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &b_char) in b_chars.iter().enumerate() {
            let cost = usize::from(a_char != b_char);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_chars.len()]
}

/// Every string one edit away: deletions, adjacent transpositions,
/// replacements and insertions over a-z.
fn single_edits(word: &str) -> Vec<String> {
    const LETTERS: &str = "abcdefghijklmnopqrstuvwxyz";
    let chars: Vec<char> = word.chars().collect();
    let mut edits = Vec::new();

    for i in 0..chars.len() {
        let mut deleted = chars.clone();
        deleted.remove(i);
        edits.push(deleted.into_iter().collect());
    }

    for i in 0..chars.len().saturating_sub(1) {
        let mut swapped = chars.clone();
        swapped.swap(i, i + 1);
        edits.push(swapped.into_iter().collect());
    }

    for i in 0..chars.len() {
        for letter in LETTERS.chars() {
            if chars[i] != letter {
                let mut replaced = chars.clone();
                replaced[i] = letter;
                edits.push(replaced.into_iter().collect());
            }
        }
    }

    for i in 0..=chars.len() {
        for letter in LETTERS.chars() {
            let mut inserted = chars.clone();
            inserted.insert(i, letter);
            edits.push(inserted.into_iter().collect());
        }
    }

    edits
}
