// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! In-memory full-text search with BM25 ranking and n-gram fuzzy matching.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ tokenizer   │────▶│    index     │────▶│   scoring    │
//! │ (keyword    │     │ (records,    │     │ (BM25, once) │
//! │  spans)     │     │  postings)   │     └──────────────┘
//! └─────────────┘     └──────────────┘            │
//!                            │                    ▼
//!                            ▼             ┌──────────────┐
//!                     ┌──────────────┐     │    query     │
//!                     │    fuzzy     │────▶│ (intersect,  │
//!                     │ (n-grams,    │     │  rank)       │
//!                     │  edit dist.) │     └──────────────┘
//!                     └──────────────┘            │
//!                            │                    │
//!                            ▼                    ▼
//!                     ┌─────────────────────────────────┐
//!                     │     merge (k-way heap merge)    │
//!                     └─────────────────────────────────┘
//! ```
//!
//! | Module      | Role                                              |
//! |-------------|---------------------------------------------------|
//! | `tokenizer` | ASCII alphanumeric keyword extraction             |
//! | `index`     | records, keywords, posting lists, lifecycle       |
//! | `merge`     | intersect / union / merge over sorted lists       |
//! | `scoring`   | BM25 weights and top-k ranking                    |
//! | `fuzzy`     | n-gram index, edit distance, approximate matches  |
//! | `query`     | exact and fuzzy query answering                   |
//! | `contracts` | invariant checks                                  |
//!
//! # Usage
//!
//! ```
//! use siftdex::{Index, QueryProcessor, SearchConfig};
//!
//! let csv = "Tesla\tTesla worked for Edison.\nLamme\tLamme redesigned the motor.\n";
//! let index = Index::from_csv(csv, &SearchConfig::default()).unwrap();
//!
//! let answer = QueryProcessor::new(&index).answer("tesla edison", 3);
//! assert_eq!(answer.records_found, 1);
//! ```

pub mod config;
pub mod contracts;
pub mod error;
pub mod fuzzy;
pub mod index;
pub mod logging;
pub mod merge;
pub mod query;
pub mod scoring;
pub mod testing;
pub mod tokenizer;
pub mod types;

pub use config::{FuzzyConfig, LoggingConfig, SearchConfig};
pub use error::{IndexError, Result};
pub use fuzzy::{
    approximate_matches, bounded_edit_distance, edit_distance, ngrams, ngrams_for_parts,
    within_edit_distance, FuzzyMatch, FuzzyMatches, NGramIndex,
};
pub use index::{add_keywords, add_records_from_csv, Index};
pub use merge::{intersect, merge, union, Intersection, MergeKey, Union};
pub use query::{default_max_ed, term_tolerance, Answer, Expansion, QueryProcessor};
pub use scoring::{bm25_weight, rank, Bm25Params};
pub use tokenizer::{extract_keywords, split, tokenize, MIN_KEYWORD_SIZE, WHITESPACE, WILDCARD};
pub use types::{Item, Keyword, KeywordId, KeywordSpan, Phase, Record, RecordId};
