//! Pipeline configuration loaded from TOML.
//!
//! Every field is optional:
//!
//! ```toml
//! use_antonyms = true
//! num_responses = 1
//! antonyms_path = "resources/antonyms.tsv"
//! relation_types = ["xIntent", "xNeed", "xAttr", "xWant", "xReact", "xEffect"]
//! excluded_sentiments = ["neutral"]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use sardonic::{RelationType, SentimentLabel};
use sardonic_expectation::{AntonymError, AntonymTable};
use serde::Deserialize;

use crate::ConfigError;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Generate antonym-based expectations as well as negations.
    pub use_antonyms: bool,
    /// Response groups generated per failed expectation.
    pub num_responses: usize,
    /// TSV antonym resource; no antonyms when unset.
    pub antonyms_path: Option<PathBuf>,
    /// Relations queried from the commonsense model.
    pub relation_types: Vec<RelationType>,
    /// Sentiment labels never reported by the ranking classifier.
    pub excluded_sentiments: Vec<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            use_antonyms: true,
            num_responses: 1,
            antonyms_path: None,
            relation_types: RelationType::WORKING_SET.to_vec(),
            excluded_sentiments: vec!["neutral".to_string()],
        }
    }
}

impl GeneratorConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::info!(
            target: "sardonic_generator",
            path = %path.display(),
            "loaded generator config"
        );
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// The configured antonym table, or an empty one.
    pub fn antonyms(&self) -> Result<AntonymTable, AntonymError> {
        match &self.antonyms_path {
            Some(path) => AntonymTable::load(path),
            None => Ok(AntonymTable::new()),
        }
    }

    pub fn excluded_labels(&self) -> Vec<SentimentLabel> {
        self.excluded_sentiments
            .iter()
            .map(|label| SentimentLabel::new(label.as_str()))
            .collect()
    }
}
