// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Keyword extraction.
//!
//! A keyword is a maximal run of ASCII alphanumeric bytes that contains at
//! least one letter and is at least [`MIN_KEYWORD_SIZE`] bytes long. Everything
//! else, including every byte of a multi-byte UTF-8 sequence, separates runs.
//! Because keyword bytes are always ASCII, every span returned here is also a
//! valid `str` slice of the input.

use crate::types::KeywordSpan;

/// The minimum size for a valid keyword.
pub const MIN_KEYWORD_SIZE: usize = 2;

/// All whitespace characters, the default delimiters for query splitting.
pub const WHITESPACE: &str = "\n\r\t ";

/// Wildcard separating the parts of a fuzzy pattern.
pub const WILDCARD: &str = "*";

/// Find all keywords within `content[beg..end]`.
///
/// Returns their byte positions (relative to the start of `content`) and
/// sizes, in text order.
///
/// # Panics
///
/// Panics if `beg >= end` or `end > content.len()`.
pub fn extract_keywords(content: &str, beg: usize, end: usize) -> Vec<KeywordSpan> {
    assert!(
        beg < end && end <= content.len(),
        "keyword range {}..{} out of bounds for content of {} bytes",
        beg,
        end,
        content.len()
    );

    let bytes = content.as_bytes();
    let mut keywords = Vec::new();
    let mut pos = beg;

    while pos < end {
        if !bytes[pos].is_ascii_alphanumeric() {
            pos += 1;
            continue;
        }

        let key_beg = pos;
        let mut valid = false;
        while pos < end && bytes[pos].is_ascii_alphanumeric() {
            valid |= bytes[pos].is_ascii_alphabetic();
            pos += 1;
        }

        let size = pos - key_beg;
        if valid && size >= MIN_KEYWORD_SIZE {
            keywords.push(KeywordSpan { pos: key_beg, size });
        }
    }

    keywords
}

/// Extract keywords from the whole string. Empty input yields nothing.
pub fn tokenize(content: &str) -> Vec<KeywordSpan> {
    if content.is_empty() {
        return Vec::new();
    }
    extract_keywords(content, 0, content.len())
}

/// Split `content` at any of the characters in `delims`, dropping empty parts.
pub fn split<'a>(content: &'a str, delims: &str) -> Vec<&'a str> {
    content
        .split(|c: char| delims.contains(c))
        .filter(|part| !part.is_empty())
        .collect()
}
