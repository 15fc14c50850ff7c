//! Bidirectional word-to-antonym table.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::AntonymError;

/// Maps a word to a single antonym, in both directions.
///
/// Inserting `(a, b)` also inserts `(b, a)`. When a word is paired more than
/// once the last pairing wins, so a resource with contradictory lines
/// resolves by line order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AntonymTable {
    antonyms: HashMap<String, String>,
}

impl AntonymTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a tab-separated resource file.
    pub fn load(path: &Path) -> Result<Self, AntonymError> {
        let content = fs::read_to_string(path).map_err(|e| AntonymError::Load {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_tsv_str(&content)
    }

    /// Parse `word_csv<TAB>antonym_csv` lines.
    ///
    /// Every word on the left is paired with every word on the right. Blank
    /// lines are skipped and columns past the second are ignored.
    pub fn from_tsv_str(content: &str) -> Result<Self, AntonymError> {
        let mut table = Self::new();
        for (idx, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            let (words, rest) = line.split_once('\t').ok_or_else(|| AntonymError::Parse {
                line: idx + 1,
                message: format!("expected words<TAB>antonyms, found '{}'", line),
            })?;
            let antonyms = rest.split('\t').next().unwrap_or_default();

            let antonyms: Vec<&str> = split_group(antonyms).collect();
            for word in split_group(words) {
                for antonym in &antonyms {
                    table.insert_pair(word, antonym);
                }
            }
        }
        Ok(table)
    }

    /// Pair `word` and `antonym` both ways.
    pub fn insert_pair(&mut self, word: &str, antonym: &str) {
        self.antonyms.insert(word.to_string(), antonym.to_string());
        self.antonyms.insert(antonym.to_string(), word.to_string());
    }

    pub fn get(&self, word: &str) -> Option<&str> {
        self.antonyms.get(word).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.antonyms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.antonyms.is_empty()
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for AntonymTable {
    fn from_iter<T: IntoIterator<Item = (&'a str, &'a str)>>(iter: T) -> Self {
        let mut table = Self::new();
        for (word, antonym) in iter {
            table.insert_pair(word, antonym);
        }
        table
    }
}

fn split_group(group: &str) -> impl Iterator<Item = &str> {
    group.split(',').map(str::trim).filter(|word| !word.is_empty())
}
