// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Plain-text rendering of answers and statistics.
//!
//! Records print in answer order, best last, so the top hit sits right above
//! the prompt. Matched keywords in the snippet are wrapped in `[` `]`.

use serde::Serialize;
use siftdex::{Answer, Index, Item, RecordId};
use std::fmt::Write as _;
use std::time::Duration;

/// Snippet width in bytes, before brackets.
pub const SNIPPET_WIDTH: usize = 80;

/// Human-friendly duration: µs below a millisecond, ms below a second.
pub fn format_duration(d: Duration) -> String {
    let micros = d.as_micros();
    if micros < 1_000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1_000.0)
    } else {
        format!("{:.2}s", d.as_secs_f64())
    }
}

/// One record of an answer, with all of its matched items.
struct RecordHits<'a> {
    record_id: RecordId,
    score: f32,
    items: &'a [Item],
}

fn group_by_record(items: &[Item]) -> Vec<RecordHits<'_>> {
    let mut groups = Vec::new();
    let mut start = 0;
    for i in 1..=items.len() {
        if i == items.len() || items[i].record_id != items[start].record_id {
            groups.push(RecordHits {
                record_id: items[start].record_id,
                score: items[start].score,
                items: &items[start..i],
            });
            start = i;
        }
    }
    groups
}

fn floor_boundary(s: &str, mut i: usize) -> usize {
    while i > 0 && !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}

fn ceil_boundary(s: &str, mut i: usize) -> usize {
    while i < s.len() && !s.is_char_boundary(i) {
        i += 1;
    }
    i
}

/// A window of `content` around the first hit, hits bracketed, whitespace
/// collapsed to single spaces.
pub fn snippet(content: &str, items: &[Item]) -> String {
    let mut hits: Vec<(usize, usize)> = items
        .iter()
        .flat_map(|item| item.positions.iter().map(move |&p| (p, p + item.size)))
        .collect();
    hits.sort_unstable();

    let first = hits.first().map_or(0, |&(p, _)| p);
    let beg = floor_boundary(content, first.saturating_sub(SNIPPET_WIDTH / 4));
    let end = ceil_boundary(content, (beg + SNIPPET_WIDTH).min(content.len()));

    let mut out = String::with_capacity(end - beg + 8);
    if beg > 0 {
        out.push_str("...");
    }
    let mut cursor = beg;
    for (hit_beg, hit_end) in hits {
        if hit_beg < cursor || hit_end > end {
            continue;
        }
        out.push_str(&content[cursor..hit_beg]);
        out.push('[');
        out.push_str(&content[hit_beg..hit_end]);
        out.push(']');
        cursor = hit_end;
    }
    out.push_str(&content[cursor..end]);
    if end < content.len() {
        out.push_str("...");
    }
    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Render an answer for the terminal.
pub fn render_answer(index: &Index, query: &str, answer: &Answer) -> String {
    let mut out = String::new();
    for expansion in &answer.expansions {
        let words: Vec<&str> = expansion.matches.iter().map(|m| m.keyword.as_str()).collect();
        let _ = writeln!(out, "  {} → {}", expansion.term, words.join(", "));
    }

    let groups = group_by_record(&answer.items);
    let total = groups.len();
    for (i, group) in groups.iter().enumerate() {
        let record = index.record(group.record_id);
        let _ = writeln!(
            out,
            "{:>3}. {} (record {}, score {:.3})",
            total - i,
            record.url,
            group.record_id,
            group.score
        );
        let _ = writeln!(out, "     {}", snippet(&record.content, group.items));
    }

    let _ = writeln!(
        out,
        "\"{}\": {} of {} records in {}",
        query,
        total,
        answer.records_found,
        format_duration(answer.duration)
    );
    out
}

/// JSON shape of one answer.
#[derive(Serialize)]
pub struct JsonAnswer<'a> {
    pub query: &'a str,
    pub records_found: usize,
    pub duration_us: u64,
    pub results: Vec<JsonRecord<'a>>,
    pub expansions: &'a [siftdex::Expansion],
}

#[derive(Serialize)]
pub struct JsonRecord<'a> {
    pub record_id: RecordId,
    pub url: &'a str,
    pub score: f32,
    pub items: &'a [Item],
}

/// Build the JSON view of an answer. Results are listed best first.
pub fn json_answer<'a>(index: &'a Index, query: &'a str, answer: &'a Answer) -> JsonAnswer<'a> {
    let results = group_by_record(&answer.items)
        .into_iter()
        .rev()
        .map(|group| JsonRecord {
            record_id: group.record_id,
            url: &index.record(group.record_id).url,
            score: group.score,
            items: group.items,
        })
        .collect();
    JsonAnswer {
        query,
        records_found: answer.records_found,
        duration_us: answer.duration.as_micros() as u64,
        results,
        expansions: &answer.expansions,
    }
}
