// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The inverted index and its lifecycle.
//!
//! ```text
//!              add_record / extend_record / add_keyword / add_item
//!   Ingesting ────────────────────────────────────────────────────┐
//!       │                                                         │
//!       │ compute_scores | build_ngrams  (posting order verified) │
//!       ▼                                                         │
//!    Frozen ── items / approximate_matches / QueryProcessor ◄─────┘
//! ```
//!
//! # Invariants
//!
//! - `keyword_index[name] == id` iff `keywords[id].name == name`; names are
//!   ASCII-lowercase.
//! - `total_size` is the summed content length of all records, `num_items` the
//!   number of successful `add_item` calls.
//! - Once frozen, no record, keyword or item changes except through the
//!   one-time score rewrite.

mod ingest;

pub use ingest::{add_keywords, add_records_from_csv};

use crate::config::SearchConfig;
use crate::contracts::{check_item_within_record, verify_postings_sorted};
use crate::error::{IndexError, Result};
use crate::fuzzy::{self, FuzzyMatches, NGramIndex};
use crate::scoring::{self, Bm25Params};
use crate::types::{Item, Keyword, KeywordId, Phase, Record, RecordId};
use std::collections::HashMap;
use tracing::info;

/// In-memory inverted index over a record collection.
#[derive(Debug, Clone)]
pub struct Index {
    records: Vec<Record>,
    keywords: Vec<Keyword>,
    keyword_index: HashMap<String, KeywordId>,
    ngram_index: Option<NGramIndex>,
    num_items: usize,
    total_size: usize,
    phase: Phase,
    scored: bool,
}

impl Default for Index {
    fn default() -> Self {
        Self::new()
    }
}

impl Index {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            keywords: Vec::new(),
            keyword_index: HashMap::new(),
            ngram_index: None,
            num_items: 0,
            total_size: 0,
            phase: Phase::Ingesting,
            scored: false,
        }
    }

    /// Ingest a CSV collection, score it and build the n-gram index, using the
    /// BM25 parameters and `n` from `config`.
    pub fn from_csv(text: &str, config: &SearchConfig) -> Result<Self> {
        config.validate()?;
        let mut index = Self::new();
        add_records_from_csv(text, &mut index)?;
        index.compute_scores(config.bm25)?;
        index.build_ngrams(config.ngram_n)?;
        Ok(index)
    }

    // ========================================================================
    // INGESTION
    // ========================================================================

    /// Append a record and return its id.
    pub fn add_record(&mut self, url: &str, content: &str) -> Result<RecordId> {
        self.ensure_ingesting()?;
        let id = RecordId(self.records.len() as u32);
        self.records.push(Record {
            id,
            url: url.to_string(),
            content: content.to_string(),
        });
        self.total_size += content.len();
        Ok(id)
    }

    /// Append `content` to an existing record and return the record's previous
    /// content length, which is the offset of the new content.
    ///
    /// # Panics
    ///
    /// Panics if `record_id` is not a known record.
    pub fn extend_record(&mut self, record_id: RecordId, content: &str) -> Result<usize> {
        self.ensure_ingesting()?;
        let record = &mut self.records[record_id.as_usize()];
        let offset = record.content.len();
        record.content.push_str(content);
        self.total_size += content.len();
        Ok(offset)
    }

    /// Register a keyword (lowercased) and return its id.
    ///
    /// A keyword that already exists keeps its id.
    pub fn add_keyword(&mut self, keyword: &str) -> Result<KeywordId> {
        self.ensure_ingesting()?;
        let name = keyword.to_ascii_lowercase();
        if let Some(&id) = self.keyword_index.get(&name) {
            return Ok(id);
        }
        let id = KeywordId(self.keywords.len() as u32);
        self.keyword_index.insert(name.clone(), id);
        self.keywords.push(Keyword::new(id, name));
        Ok(id)
    }

    /// Record one occurrence of a keyword at byte `pos` of a record.
    ///
    /// Consecutive occurrences within the same record extend the keyword's last
    /// item and bump its raw term frequency. Returns the running item count.
    ///
    /// # Panics
    ///
    /// Panics if `keyword_id` is not a known keyword.
    pub fn add_item(
        &mut self,
        keyword_id: KeywordId,
        record_id: RecordId,
        pos: usize,
    ) -> Result<usize> {
        self.ensure_ingesting()?;
        let keyword = &mut self.keywords[keyword_id.as_usize()];
        match keyword.items.last_mut() {
            Some(last) if last.record_id == record_id => {
                last.positions.push(pos);
                last.score += 1.0;
            }
            _ => {
                let size = keyword.name.len();
                keyword.items.push(Item::new(record_id, pos, size));
            }
        }
        if let Some(item) = keyword.items.last() {
            check_item_within_record(item, &self.records);
        }
        self.num_items += 1;
        Ok(self.num_items)
    }

    fn ensure_ingesting(&self) -> Result<()> {
        match self.phase {
            Phase::Ingesting => Ok(()),
            Phase::Frozen => Err(IndexError::Frozen),
        }
    }

    /// Transition to `Frozen`, verifying posting order on the way.
    fn freeze(&mut self) -> Result<()> {
        if self.phase == Phase::Frozen {
            return Ok(());
        }
        verify_postings_sorted(&self.keywords)?;
        self.phase = Phase::Frozen;
        info!(
            records = self.records.len(),
            keywords = self.keywords.len(),
            items = self.num_items,
            total_size = self.total_size,
            "index frozen"
        );
        Ok(())
    }

    // ========================================================================
    // BATCH PASSES
    // ========================================================================

    /// Replace raw term frequencies with BM25 weights. Allowed once.
    pub fn compute_scores(&mut self, params: Bm25Params) -> Result<()> {
        params.validate()?;
        if self.scored {
            return Err(IndexError::ScoresAlreadyComputed);
        }
        self.freeze()?;
        scoring::compute_scores(&mut self.keywords, &self.records, self.total_size, params);
        self.scored = true;
        info!(b = params.b, k = params.k, "BM25 scores computed");
        Ok(())
    }

    /// Build (or rebuild) the n-gram index over all keywords.
    pub fn build_ngrams(&mut self, n: usize) -> Result<()> {
        if n < 2 {
            return Err(IndexError::InvalidNGramSize(n));
        }
        self.freeze()?;
        let ngram_index = NGramIndex::build(&self.keywords, n)?;
        info!(n, ngrams = ngram_index.len(), "n-gram index built");
        self.ngram_index = Some(ngram_index);
        Ok(())
    }

    // ========================================================================
    // LOOKUP
    // ========================================================================

    /// Case-insensitive keyword lookup.
    pub fn keyword_id(&self, keyword: &str) -> Option<KeywordId> {
        self.keyword_index.get(&keyword.to_ascii_lowercase()).copied()
    }

    /// Posting list of `keyword`; empty if the keyword is unknown.
    pub fn items(&self, keyword: &str) -> &[Item] {
        match self.keyword_id(keyword) {
            Some(id) => &self.keywords[id.as_usize()].items,
            None => &[],
        }
    }

    /// # Panics
    ///
    /// Panics if `id` is not a known keyword.
    pub fn keyword(&self, id: KeywordId) -> &Keyword {
        &self.keywords[id.as_usize()]
    }

    /// # Panics
    ///
    /// Panics if `id` is not a known record.
    pub fn record(&self, id: RecordId) -> &Record {
        &self.records[id.as_usize()]
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn keywords(&self) -> &[Keyword] {
        &self.keywords
    }

    /// Keywords within `max_ed` edits of `query`; see [`fuzzy::approximate_matches`].
    pub fn approximate_matches(&self, query: &str, max_ed: usize) -> Result<FuzzyMatches> {
        let ngram_index = self.ngram_index.as_ref().ok_or(IndexError::NGramsNotBuilt)?;
        Ok(fuzzy::approximate_matches(ngram_index, &self.keywords, query, max_ed))
    }

    pub fn ngram_index(&self) -> Option<&NGramIndex> {
        self.ngram_index.as_ref()
    }

    // ========================================================================
    // AGGREGATES
    // ========================================================================

    pub fn num_records(&self) -> usize {
        self.records.len()
    }

    pub fn num_keywords(&self) -> usize {
        self.keywords.len()
    }

    pub fn num_items(&self) -> usize {
        self.num_items
    }

    /// Summed content length of all records, in bytes.
    pub fn total_size(&self) -> usize {
        self.total_size
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_scored(&self) -> bool {
        self.scored
    }
}
