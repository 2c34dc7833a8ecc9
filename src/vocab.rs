use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::ConfigError;

pub const EMBEDDED_VOCAB: &str = include_str!("resources/vocab.txt");

/// The word list the game validates candidates against. Built once at
/// startup and read-only afterwards, so it can be borrowed freely.
#[derive(Debug, Clone, Default)]
pub struct Vocab {
    words: Vec<String>,
    index: HashSet<String>,
}

impl Vocab {
    pub fn from_str_list(data: &str) -> Self {
        let mut vocab = Self::default();
        for line in data.lines() {
            vocab.insert(line);
        }
        vocab
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ConfigError::VocabUnreadable {
            path: path.display().to_string(),
            source,
        })?;
        let reader = BufReader::new(file);
        let mut vocab = Self::default();
        for line in reader.lines() {
            let line = line.map_err(|source| ConfigError::VocabUnreadable {
                path: path.display().to_string(),
                source,
            })?;
            vocab.insert(&line);
        }
        Ok(vocab)
    }

    // Keeps non-empty all-alphabetic entries, lowercased, first occurrence wins.
    fn insert(&mut self, line: &str) {
        let word = line.trim().to_lowercase();
        if !word.is_empty()
            && word.chars().all(|c| c.is_ascii_alphabetic())
            && self.index.insert(word.clone())
        {
            self.words.push(word);
        }
    }

    /// Case-insensitive membership test.
    pub fn has(&self, word: &str) -> bool {
        self.index.contains(&word.trim().to_lowercase())
    }

    /// All words in source order. The borrow keeps the store immutable.
    pub fn as_list(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
