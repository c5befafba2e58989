// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of the index.
//!
//! Records hold the raw text, keywords hold the postings, and items tie the two
//! together: one item per (keyword, record) pair, listing every byte offset at
//! which the keyword occurs in that record.
//!
//! # Invariants
//!
//! - **Record**: ids are dense and sequential. Content only ever grows.
//! - **Keyword**: `name` is ASCII-lowercase. `items` is strictly ascending by
//!   `record_id` (checked when the index is frozen).
//! - **Item**: `positions` is strictly ascending and non-empty. `score` holds the
//!   raw term frequency until BM25 scoring replaces it.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// NEWTYPES: Type-safe identifiers
// =============================================================================

/// Type-safe record identifier.
///
/// Prevents accidentally passing a keyword id or a byte offset where a record
/// id is expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct RecordId(pub u32);

impl RecordId {
    /// Convert to usize for array indexing.
    #[inline]
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for RecordId {
    fn from(id: u32) -> Self {
        RecordId(id)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Type-safe keyword identifier.
///
/// Keyword ids are what the n-gram index stores, so they double as merge keys
/// for the union pass in fuzzy matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct KeywordId(pub u32);

impl KeywordId {
    /// Convert to usize for array indexing.
    #[inline]
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for KeywordId {
    fn from(id: u32) -> Self {
        KeywordId(id)
    }
}

impl fmt::Display for KeywordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// CORE TYPES
// =============================================================================

/// A record: the unit of retrieval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub url: String,
    /// Raw content, including the line terminator of every ingested line.
    pub content: String,
}

/// Position and size of a keyword candidate inside a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordSpan {
    /// Byte offset of the first character.
    pub pos: usize,
    /// Length in bytes.
    pub size: usize,
}

/// The occurrences of one keyword within one record.
///
/// `score` is overloaded across the index lifecycle: raw term frequency while
/// ingesting, BM25 weight once scores are computed, and the record's aggregate
/// score in ranked query output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub record_id: RecordId,
    /// Byte offsets of every occurrence, ascending.
    pub positions: Vec<usize>,
    /// Keyword length in bytes.
    pub size: usize,
    pub score: f32,
}

impl Item {
    pub fn new(record_id: RecordId, pos: usize, size: usize) -> Self {
        Self {
            record_id,
            positions: vec![pos],
            size,
            score: 1.0,
        }
    }

    /// Raw occurrence count. Independent of what `score` currently holds.
    pub fn term_frequency(&self) -> usize {
        self.positions.len()
    }
}

/// Items compare equal when they describe the same occurrences; the score is
/// lifecycle-dependent and deliberately ignored.
impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.record_id == other.record_id
            && self.positions == other.positions
            && self.size == other.size
    }
}

/// A keyword and its posting list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Keyword {
    pub id: KeywordId,
    /// Lowercased keyword text.
    pub name: String,
    /// Posting list, ascending by record id.
    pub items: Vec<Item>,
}

impl Keyword {
    pub fn new(id: KeywordId, name: String) -> Self {
        Self {
            id,
            name,
            items: Vec::new(),
        }
    }

    /// Number of distinct records containing this keyword.
    pub fn record_freq(&self) -> usize {
        self.items.len()
    }
}

impl AsRef<str> for Keyword {
    fn as_ref(&self) -> &str {
        &self.name
    }
}

/// Index lifecycle phase.
///
/// Ingestion mutates; the first scoring or n-gram pass freezes the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Ingesting,
    Frozen,
}
