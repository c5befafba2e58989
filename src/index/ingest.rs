// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bulk ingestion from text.
//!
//! Record collections are tab-separated, one line per record:
//!
//! ```text
//!   <url>\t<content>\n
//! ```
//!
//! Consecutive lines with the same URL continue one record. The stored content
//! keeps each line's `\n`, so a continuation line's keywords are offset by the
//! full length of everything stored before it.
//!
//! The whole text is checked before the index is touched: a malformed line
//! fails ingestion with its 1-based line number and leaves the index as it was.

use super::Index;
use crate::error::{IndexError, Result};
use crate::tokenizer::tokenize;
use crate::types::RecordId;
use tracing::{debug, info};

/// One well-formed collection line.
struct CsvLine<'a> {
    url: &'a str,
    /// Content including the terminating `\n`.
    content: &'a str,
}

/// Split `text` into lines and check each one.
fn parse_csv(text: &str) -> Result<Vec<CsvLine<'_>>> {
    let mut lines = Vec::new();
    let mut pos = 0;

    while pos < text.len() {
        let line = lines.len() + 1;
        let rest = &text[pos..];
        let line_end = rest.find('\n').ok_or(IndexError::MalformedCsv {
            line,
            reason: "missing terminating newline",
        })?;
        let tab = rest[..line_end].find('\t').ok_or(IndexError::MalformedCsv {
            line,
            reason: "missing tab between url and content",
        })?;
        if tab == 0 {
            return Err(IndexError::MalformedCsv {
                line,
                reason: "empty url",
            });
        }
        lines.push(CsvLine {
            url: &rest[..tab],
            content: &rest[tab + 1..=line_end],
        });
        pos += line_end + 1;
    }

    Ok(lines)
}

/// Ingest every `<url>\t<content>\n` line of `text` into `index`.
///
/// Fails without changing `index` if any line is malformed or the index is
/// frozen.
pub fn add_records_from_csv(text: &str, index: &mut Index) -> Result<()> {
    let lines = parse_csv(text)?;
    let mut current: Option<(&str, RecordId)> = None;

    for &CsvLine { url, content } in &lines {
        let (record_id, offset) = match current {
            Some((prev_url, id)) if prev_url == url => (id, index.extend_record(id, content)?),
            _ => (index.add_record(url, content)?, 0),
        };
        current = Some((url, record_id));

        for span in tokenize(content) {
            let keyword = &content[span.pos..span.pos + span.size];
            let keyword_id = match index.keyword_id(keyword) {
                Some(id) => id,
                None => index.add_keyword(keyword)?,
            };
            index.add_item(keyword_id, record_id, span.pos + offset)?;
        }
    }

    info!(
        lines = lines.len(),
        records = index.num_records(),
        keywords = index.num_keywords(),
        items = index.num_items(),
        "ingested CSV"
    );
    Ok(())
}

/// Ingest a keyword list, one keyword per `\n`-terminated line.
///
/// Blank lines are skipped. Keywords already present keep their id. Returns the
/// number of new keywords.
pub fn add_keywords(text: &str, index: &mut Index) -> Result<usize> {
    if !text.is_empty() && !text.ends_with('\n') {
        let line = text.split('\n').count();
        return Err(IndexError::MalformedKeywordList { line });
    }

    let before = index.num_keywords();
    for keyword in text.lines() {
        let keyword = keyword.trim_end_matches('\r');
        if keyword.is_empty() {
            continue;
        }
        index.add_keyword(keyword)?;
    }

    let added = index.num_keywords() - before;
    debug!(added, total = index.num_keywords(), "ingested keyword list");
    Ok(added)
}
