// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit tests, integration tests, benches and
//! fuzz targets.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use crate::index::{add_records_from_csv, Index};
use crate::scoring::Bm25Params;
use crate::types::{Item, RecordId};

/// URLs of the fixture lines, in file order. The two `Weird` lines form one
/// record.
pub const FIXTURE_URLS: [&str; 8] = [
    "Jook_Walraven",
    "Nikola_Tesla1",
    "Nikola_Tesla2",
    "Benjamin_Lamme",
    "Thomas_Edison1",
    "Thomas_Edison2",
    "Weird",
    "Weird",
];

const FIXTURE_CONTENT: [&str; 8] = [
    "To keep the atomic hydrogen from forming hydrogen molecules, the atoms were \
     spin-polarized by a 7 tesla magnet.",
    "Legacy and honors The tesla (symbol T) â€“ compound derived SI unit of magnetic flux \
     density.",
    "Legacy and honors Google honoured Tesla on his birthday on 10 July 2009 by displaying a \
     doodle in the Google search home page, that showed the G as a tesla coil.",
    "After Nikola Tesla left Westinghouse, Lamme redesigned the induction motor, making it as \
     we know it today.",
    "Tesla once said that if Edison had to find a needle in a haystack he would take apart the \
     haystack one straw at a time.",
    "The details of what happened are not known but Tesla who had once worked for Edison quit \
     when he was promised a large bonus for solving a problem and then after being successful \
     was told the promise was a joke.",
    "ME73 37signals",
    "Roogla!44 mac",
];

/// The fixture collection as `<url>\t<content>\n` text.
pub fn fixture_csv() -> String {
    FIXTURE_URLS
        .iter()
        .zip(FIXTURE_CONTENT.iter())
        .map(|(url, content)| format!("{}\t{}\n", url, content))
        .collect()
}

/// The fixture ingested but not yet scored.
pub fn fixture_index() -> Index {
    let mut index = Index::new();
    add_records_from_csv(&fixture_csv(), &mut index).expect("fixture CSV is well-formed");
    index
}

/// The fixture scored with default BM25 parameters and 3-gram indexed.
pub fn frozen_fixture_index() -> Index {
    let mut index = fixture_index();
    index
        .compute_scores(Bm25Params::default())
        .expect("fixture postings are sorted");
    index.build_ngrams(3).expect("3 is a valid n-gram size");
    index
}

/// An item with the given occurrences, for comparing against posting lists.
pub fn item(record_id: u32, positions: &[usize], size: usize) -> Item {
    Item {
        record_id: RecordId(record_id),
        positions: positions.to_vec(),
        size,
        score: positions.len() as f32,
    }
}

/// Build a frozen index from `(url, content)` pairs, one line each.
pub fn index_from_lines(lines: &[(&str, &str)]) -> Index {
    let csv: String = lines
        .iter()
        .map(|(url, content)| format!("{}\t{}\n", url, content))
        .collect();
    let mut index = Index::new();
    add_records_from_csv(&csv, &mut index).expect("test CSV is well-formed");
    index
        .compute_scores(Bm25Params::default())
        .expect("test postings are sorted");
    index.build_ngrams(3).expect("3 is a valid n-gram size");
    index
}
