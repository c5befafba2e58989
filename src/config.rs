// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search configuration.
//!
//! Every field has a default, so an empty file (or no file) is valid:
//!
//! ```toml
//! max_results = 3
//! ngram_n = 3
//!
//! [bm25]
//! b = 0.75
//! k = 1.75
//!
//! [fuzzy]
//! max_ed = 2        # omit for ceil(len / 5) per term
//!
//! [logging]
//! default = "warn"
//!
//! [logging.modules]
//! index = "info"
//! ```

use crate::error::{IndexError, Result};
use crate::scoring::Bm25Params;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Smallest supported n-gram size.
pub const MIN_NGRAM_N: usize = 2;
/// Largest supported n-gram size.
pub const MAX_NGRAM_N: usize = 7;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Records per answer; 0 means unlimited at the CLI.
    #[serde(default = "default_max_results")]
    pub max_results: usize,

    #[serde(default = "default_ngram_n")]
    pub ngram_n: usize,

    #[serde(default)]
    pub bm25: Bm25Params,

    #[serde(default)]
    pub fuzzy: FuzzyConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FuzzyConfig {
    /// Fixed edit-distance tolerance for every term.
    #[serde(default)]
    pub max_ed: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Level for everything not listed in `modules`.
    #[serde(default = "default_log_level")]
    pub default: String,

    /// Per-module levels, keyed by module path below the crate root.
    #[serde(default)]
    pub modules: HashMap<String, String>,
}

fn default_max_results() -> usize {
    3
}

fn default_ngram_n() -> usize {
    3
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_results: default_max_results(),
            ngram_n: default_ngram_n(),
            bm25: Bm25Params::default(),
            fuzzy: FuzzyConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default: default_log_level(),
            modules: HashMap::new(),
        }
    }
}

impl SearchConfig {
    /// Load and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| IndexError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml(&text)
    }

    /// Parse and validate TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).map_err(|e| IndexError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(MIN_NGRAM_N..=MAX_NGRAM_N).contains(&self.ngram_n) {
            return Err(IndexError::Config(format!(
                "ngram_n must be in {}..={}, got {}",
                MIN_NGRAM_N, MAX_NGRAM_N, self.ngram_n
            )));
        }
        self.bm25.validate()
    }

    /// `max_results` with 0 read as unlimited.
    pub fn effective_max_results(&self) -> usize {
        if self.max_results == 0 {
            usize::MAX
        } else {
            self.max_results
        }
    }
}
