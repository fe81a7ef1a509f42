use anyhow::{Context, Result};
use fst::{Automaton, IntoStreamer, Set, SetBuilder, Streamer};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read};
use std::path::{Path, PathBuf};

/// FST-backed word set. Words are stored lowercase; lookups are expected
/// to be lowercased by the caller.
pub struct Dictionary {
    set: Set<Vec<u8>>,
}

impl Dictionary {
    /// Load the dictionary for a language, building a small embedded one
    /// on first use so the tool works before any download.
    pub fn load(language: &str) -> Result<Self> {
        let dict_path = Self::dictionary_path(language)?;

        if !dict_path.exists() {
            let words = embedded_wordlist(language);
            Self::build_to_path(&words, &dict_path)?;
        }

        Self::load_from_path(&dict_path)
    }

    /// Load a compiled dictionary from a specific path (useful for testing)
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open dictionary: {}", path.display()))?;

        let reader = BufReader::new(file);
        let set = Set::new(reader.bytes().collect::<Result<Vec<_>, _>>()?)
            .context("Failed to parse dictionary")?;

        Ok(Self { set })
    }

    /// Build an in-memory dictionary from a word list.
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut sorted: Vec<String> = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        sorted.sort();
        sorted.dedup();

        let mut builder = SetBuilder::memory();
        for word in &sorted {
            builder
                .insert(word.as_bytes())
                .context("Failed to insert word into dictionary")?;
        }

        let bytes = builder.into_inner().context("Failed to build dictionary")?;
        let set = Set::new(bytes).context("Failed to load built dictionary")?;
        Ok(Self { set })
    }

    /// Compile a word list to an FST file on disk.
    pub fn build_to_path(words: &[String], output_path: &Path) -> Result<()> {
        let mut sorted: Vec<String> = words
            .iter()
            .map(|w| w.trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        sorted.sort();
        sorted.dedup();

        let file = File::create(output_path)
            .with_context(|| format!("Failed to create dictionary: {}", output_path.display()))?;

        let writer = BufWriter::new(file);
        let mut builder = SetBuilder::new(writer).context("Failed to create FST builder")?;

        for word in sorted {
            builder
                .insert(word.as_bytes())
                .context("Failed to insert word into dictionary")?;
        }

        builder.finish().context("Failed to finalize dictionary")?;
        Ok(())
    }

    /// Check if a (lowercased) word exists in the dictionary
    pub fn contains(&self, word: &str) -> bool {
        self.set.contains(word.as_bytes())
    }

    /// All words sharing a prefix, in lexicographic order
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<String> {
        let mut results = Vec::new();
        let mut stream = self
            .set
            .search(fst::automaton::Str::new(prefix).starts_with())
            .into_stream();

        while let Some(key) = stream.next() {
            if let Ok(word) = String::from_utf8(key.to_vec()) {
                results.push(word);
            }
        }

        results
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    fn dictionary_path(language: &str) -> Result<PathBuf> {
        let data_dir = crate::config::Config::data_dir().context("Failed to get data directory")?;

        std::fs::create_dir_all(&data_dir).context("Failed to create data directory")?;

        Ok(data_dir.join(format!("{}.dict", language)))
    }
}

/// Minimal word set for bootstrapping before `sheetspell dict download`
/// has run. Common English plus the vocabulary of everyday spreadsheets;
/// other languages start from the same list until theirs is downloaded.
fn embedded_wordlist(_language: &str) -> Vec<String> {
    let mut words: Vec<&str> = vec![
        "the", "be", "to", "of", "and", "a", "in", "that", "have", "has", "had", "i", "it",
        "for", "not", "on", "with", "he", "as", "you", "do", "at", "this", "but", "his",
        "by", "from", "they", "we", "say", "her", "she", "or", "an", "will", "my", "one",
        "all", "would", "there", "their", "what", "so", "up", "out", "if", "about", "who",
        "get", "which", "go", "me", "when", "make", "can", "like", "time", "no", "just",
        "him", "know", "take", "people", "into", "year", "your", "good", "some", "could",
        "them", "see", "other", "than", "then", "now", "look", "only", "come", "its",
        "over", "think", "also", "back", "after", "use", "two", "how", "our", "work",
        "first", "well", "way", "even", "new", "want", "because", "any", "these", "give",
        "day", "most", "us", "is", "are", "was", "were", "been", "am", "cat", "sat", "mat",
        "receive", "month", "week",
    ];

    // Column headers and cell prose seen in everyday spreadsheets
    words.extend([
        "name", "date", "total", "amount", "invoice", "address", "city", "state",
        "country", "email", "phone", "product", "quantity", "price", "order",
        "customer", "status", "notes", "comment", "description", "category",
        "region", "sales", "revenue", "cost", "paid", "pending", "shipped",
        "delivered", "january", "february", "march", "april", "may", "june",
        "july", "august", "september", "october", "november", "december",
    ]);

    words.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_build_and_load_dictionary() {
        let dir = tempdir().unwrap();
        let dict_path = dir.path().join("test.dict");

        let words = vec!["hello".to_string(), "world".to_string(), "test".to_string()];

        Dictionary::build_to_path(&words, &dict_path).unwrap();

        let dict = Dictionary::load_from_path(&dict_path).unwrap();
        assert!(dict.contains("hello"));
        assert!(dict.contains("world"));
        assert!(!dict.contains("notfound"));
    }

    #[test]
    fn test_in_memory_dictionary() {
        let dict = Dictionary::from_words(["Receive", "cat", "cat", "  mat "]).unwrap();
        assert_eq!(dict.len(), 3);
        assert!(dict.contains("receive"));
        assert!(dict.contains("mat"));
        assert!(!dict.contains("Receive")); // storage is lowercase
    }

    #[test]
    fn test_prefix_search_is_ordered() {
        let dict = Dictionary::from_words(["recite", "receive", "record", "cat"]).unwrap();
        assert_eq!(
            dict.words_with_prefix("rec"),
            vec!["receive", "recite", "record"]
        );
    }
}
