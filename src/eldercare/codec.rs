//! # Stored Line Format
//!
//! ```text
//! 1003
//! 1001|John Doe|68|4 Elm Rd|medication reminders|555-0101
//! 1002|Ana Ruiz|80|9 Pine Ave|transportation|555-0102
//! ```
//!
//! The first line is the issuance counter. Every other line is one record with
//! six `|`-separated fields in a fixed order. There is no escaping: values are
//! validated on input so they never contain the delimiter or a line break.
//!
//! Decoding is lenient. Lines that do not hold exactly six fields, carry a
//! non-numeric id or age, or repeat an id already seen are skipped and counted,
//! and the rest of the file still loads.

use crate::model::Record;
use crate::store::{RecordStore, ID_FLOOR};
use log::warn;
use std::collections::HashSet;
use std::fmt::Write;

pub const DELIMITER: char = '|';
const FIELD_COUNT: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    /// Counter to resume from, already reconciled against the loaded ids.
    pub next_id: u32,
    pub records: Vec<Record>,
    /// Number of non-blank record lines that were dropped.
    pub skipped: usize,
}

pub fn encode(store: &RecordStore) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", store.next_id());
    for r in store.list() {
        let _ = writeln!(
            out,
            "{id}{d}{name}{d}{age}{d}{address}{d}{need}{d}{contact}",
            id = r.id,
            name = r.name,
            age = r.age,
            address = r.address,
            need = r.need,
            contact = r.contact,
            d = DELIMITER,
        );
    }
    out
}

pub fn decode(input: &str) -> Decoded {
    let mut lines = input.lines();

    let stored = lines
        .next()
        .and_then(|line| line.trim().parse::<u32>().ok())
        .filter(|n| *n > 0)
        .unwrap_or(ID_FLOOR);

    let mut records = Vec::new();
    let mut seen = HashSet::new();
    let mut skipped = 0;

    // Line numbers are 1-based and the counter occupies line 1.
    for (idx, raw) in lines.enumerate() {
        let line = raw.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(line) {
            Some(record) if seen.insert(record.id) => records.push(record),
            Some(record) => {
                warn!("line {}: duplicate id {}, skipped", idx + 2, record.id);
                skipped += 1;
            }
            None => {
                warn!("line {}: malformed record, skipped", idx + 2);
                skipped += 1;
            }
        }
    }

    let after_highest = records
        .iter()
        .map(|r| r.id.saturating_add(1))
        .max()
        .unwrap_or(ID_FLOOR);

    Decoded {
        next_id: stored.max(after_highest).max(ID_FLOOR),
        records,
        skipped,
    }
}

fn parse_line(line: &str) -> Option<Record> {
    let parts: Vec<&str> = line.split(DELIMITER).collect();
    if parts.len() != FIELD_COUNT {
        return None;
    }
    Some(Record {
        id: parts[0].trim().parse().ok()?,
        name: parts[1].to_string(),
        age: parts[2].trim().parse().ok()?,
        address: parts[3].to_string(),
        need: parts[4].to_string(),
        contact: parts[5].to_string(),
    })
}
