// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the siftdex command-line interface.
//!
//! Three subcommands: `search` answers queries over a CSV collection, `fuzzy`
//! runs the keyword-list approximate matching experiment, and `stats` reports
//! index sizes and build time. Flags override values from `--config`.

pub mod display;

use clap::{Parser, Subcommand};
use siftdex::config::{MAX_NGRAM_N, MIN_NGRAM_N};
use siftdex::SearchConfig;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "siftdex",
    about = "In-memory full-text search with BM25 ranking and fuzzy matching",
    version
)]
pub struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Index a `<url>\t<content>` file and answer queries
    ///
    /// With no queries on the command line, reads one query per line from
    /// stdin until EOF or a line containing only `q`.
    Search {
        /// Record collection, one `<url>\t<content>` line per record
        csv: PathBuf,

        /// Queries to answer
        queries: Vec<String>,

        /// Maximum records per answer (0 = unlimited)
        #[arg(short, long)]
        limit: Option<usize>,

        /// N-gram size for fuzzy matching
        #[arg(long, value_parser = ngram_size)]
        ngram_n: Option<usize>,

        /// BM25 length normalisation
        #[arg(long)]
        bm25_b: Option<f32>,

        /// BM25 term-frequency saturation
        #[arg(long)]
        bm25_k: Option<f32>,

        /// Expand every term to its fuzzy matches (wildcard terms always are)
        #[arg(long)]
        fuzzy: bool,

        /// Edit-distance tolerance for fuzzy terms (default: ceil(len / 5))
        #[arg(long)]
        max_ed: Option<usize>,

        /// Print answers as JSON
        #[arg(long)]
        json: bool,
    },

    /// Approximate matching experiment over a keyword list
    Fuzzy {
        /// Keyword list, one keyword per line
        keywords: PathBuf,

        /// Queries, one per line
        queries: PathBuf,

        /// N-gram size
        #[arg(long, value_parser = ngram_size)]
        ngram_n: Option<usize>,

        /// Edit-distance tolerance (default: ceil(len / 5))
        #[arg(long)]
        max_ed: Option<usize>,
    },

    /// Print index statistics for a collection
    Stats {
        /// Record collection, one `<url>\t<content>` line per record
        csv: PathBuf,
    },
}

fn ngram_size(s: &str) -> Result<usize, String> {
    let n: usize = s.parse().map_err(|e| format!("{}", e))?;
    if (MIN_NGRAM_N..=MAX_NGRAM_N).contains(&n) {
        Ok(n)
    } else {
        Err(format!(
            "n-gram size must be in {}..={}",
            MIN_NGRAM_N, MAX_NGRAM_N
        ))
    }
}

impl Commands {
    /// Fold command-line overrides into `config`.
    pub fn apply_overrides(&self, config: &mut SearchConfig) {
        match self {
            Commands::Search {
                limit,
                ngram_n,
                bm25_b,
                bm25_k,
                max_ed,
                ..
            } => {
                if let Some(limit) = limit {
                    config.max_results = *limit;
                }
                if let Some(n) = ngram_n {
                    config.ngram_n = *n;
                }
                if let Some(b) = bm25_b {
                    config.bm25.b = *b;
                }
                if let Some(k) = bm25_k {
                    config.bm25.k = *k;
                }
                if max_ed.is_some() {
                    config.fuzzy.max_ed = *max_ed;
                }
            }
            Commands::Fuzzy {
                ngram_n, max_ed, ..
            } => {
                if let Some(n) = ngram_n {
                    config.ngram_n = *n;
                }
                if max_ed.is_some() {
                    config.fuzzy.max_ed = *max_ed;
                }
            }
            Commands::Stats { .. } => {}
        }
    }
}
