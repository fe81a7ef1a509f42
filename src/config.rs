use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub language: String,
    /// Custom vocabulary file merged into the known set before scanning.
    pub vocabulary: Option<PathBuf>,
    pub ignore_patterns: Vec<String>,

    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,
}

fn default_max_suggestions() -> usize {
    5
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "en_US".to_string(),
            vocabulary: None,
            ignore_patterns: vec![
                r"^[A-Z0-9_]{2,}$".to_string(),      // ALL_CAPS codes
                r"https?://\S+".to_string(),         // URLs
                r"\b[a-fA-F0-9]{32,}\b".to_string(), // Hashes
                r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}".to_string(), // Emails
            ],
            max_suggestions: 5,
        }
    }
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(
        language: String,
        vocabulary: Option<PathBuf>,
        cli_patterns: Vec<String>,
    ) -> Result<Self> {
        let mut config = Self::default();

        // Load global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global_config = Self::from_file(&global_path)?;
                config = config.merge(global_config);
            }
        }

        // Load local config (overrides global)
        let local_path = PathBuf::from(".sheetspell.toml");
        if local_path.exists() {
            let local_config = Self::from_file(&local_path)?;
            config = config.merge(local_config);
        }

        // Apply CLI overrides
        config.language = language;
        if let Some(vocab) = vocabulary {
            config.vocabulary = Some(vocab);
        }
        if !cli_patterns.is_empty() {
            config.ignore_patterns.extend(cli_patterns);
        }

        // Default vocabulary lives next to the global config
        if config.vocabulary.is_none() {
            config.vocabulary = Self::default_vocabulary_path();
        }

        // Ensure the vocabulary file exists so learned words have a home
        if let Some(path) = &config.vocabulary {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).context("Failed to create vocabulary directory")?;
            }
            if !path.exists() {
                fs::write(path, "").context("Failed to create vocabulary file")?;
            }
        }

        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn merge(mut self, other: Self) -> Self {
        // Merge logic: other's values override self's if they differ from defaults
        if other.language != "en_US" {
            self.language = other.language;
        }
        if other.vocabulary.is_some() {
            self.vocabulary = other.vocabulary;
        }
        if !other.ignore_patterns.is_empty() {
            self.ignore_patterns = other.ignore_patterns;
        }
        if other.max_suggestions != default_max_suggestions() {
            self.max_suggestions = other.max_suggestions;
        }
        self
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "sheetspell").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    pub fn default_vocabulary_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "sheetspell").map(|dirs| dirs.config_dir().join("vocabulary.txt"))
    }

    pub fn cache_dir() -> Option<PathBuf> {
        ProjectDirs::from("", "", "sheetspell").map(|dirs| dirs.cache_dir().to_path_buf())
    }

    pub fn data_dir() -> Option<PathBuf> {
        ProjectDirs::from("", "", "sheetspell").map(|dirs| dirs.data_dir().to_path_buf())
    }
}
