// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors that abort an index operation.
//!
//! Only malformed input and lifecycle misuse end up here. Unknown query terms,
//! empty intersections and fuzzy queries without candidates are ordinary empty
//! results, not errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IndexError {
    /// A CSV line did not have the `<url>\t<content>\n` shape.
    #[error("malformed CSV at line {line}: {reason}")]
    MalformedCsv { line: usize, reason: &'static str },

    /// The last line of a keyword list is missing its newline.
    #[error("malformed keyword list at line {line}: missing terminating newline")]
    MalformedKeywordList { line: usize },

    /// A mutating call arrived after scoring or n-gram construction.
    #[error("index is frozen; ingestion must finish before scoring or n-gram construction")]
    Frozen,

    /// BM25 scores overwrite raw term frequencies, so they can only be computed once.
    #[error("BM25 scores were already computed for this index")]
    ScoresAlreadyComputed,

    /// A posting list is out of record order at the phase boundary.
    #[error("posting list of keyword '{keyword}' is not sorted at position {position}")]
    UnsortedPostings { keyword: String, position: usize },

    #[error("n-gram index has not been built")]
    NGramsNotBuilt,

    #[error("invalid n-gram size {0}: must be at least 2")]
    InvalidNGramSize(usize),

    #[error("invalid BM25 parameters b={b}, k={k}: need 0 <= b <= 1 and k > 0")]
    InvalidBm25Params { b: f32, k: f32 },

    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, IndexError>;
