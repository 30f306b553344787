//! Parsing of generative detector output
//!
//! The model is asked for `{"entities": [...]}` but often wraps it in prose
//! or code fences, or ignores the format and writes `- TYPE: value` lines.

use lazy_static::lazy_static;
use pii_core::RawSpan;
use regex::Regex;
use serde_json::Value;
use tracing::debug;

/// Confidence assigned to spans recovered from a line listing.
pub const LISTING_CONFIDENCE: f64 = 0.9;

lazy_static! {
    static ref LISTING_LINE: Regex = Regex::new(r"^-\s*([^:]+?)\s*:\s*(.+?)\s*$").unwrap();
}

/// Turn raw model output into candidate spans with byte offsets into `text`.
///
/// Tries the embedded JSON object first, then the line listing. Never fails;
/// unusable output yields an empty list.
pub fn parse_detector_output(raw: &str, text: &str) -> Vec<RawSpan> {
    match parse_json_block(raw, text) {
        Some(spans) => spans,
        None => {
            debug!("Detector output is not JSON, falling back to line listing");
            parse_listing(raw, text)
        }
    }
}

/// Parse the text between the first `{` and the last `}`.
///
/// `None` when there is no parseable object. An object without an
/// `entities` array yields no spans.
pub fn parse_json_block(raw: &str, text: &str) -> Option<Vec<RawSpan>> {
    let open = raw.find('{')?;
    let close = raw.rfind('}')?;
    if close <= open {
        return None;
    }

    let value: Value = serde_json::from_str(&raw[open..=close]).ok()?;
    let entries = match value.get("entities").and_then(Value::as_array) {
        Some(entries) => entries,
        None => return Some(Vec::new()),
    };

    let index = CharIndex::new(text);
    Some(
        entries
            .iter()
            .filter_map(|entry| entry_to_span(entry, &index))
            .collect(),
    )
}

fn entry_to_span(entry: &Value, index: &CharIndex) -> Option<RawSpan> {
    let mut span = RawSpan::from_value(entry)?;
    span.start = index.to_byte(span.start);
    span.end = index.to_byte(span.end);
    Some(span)
}

/// Parse `- TYPE: value` lines, anchoring each value at its first occurrence.
pub fn parse_listing(raw: &str, text: &str) -> Vec<RawSpan> {
    raw.lines()
        .filter_map(|line| LISTING_LINE.captures(line.trim()))
        .filter_map(|caps| {
            let kind = caps.get(1)?.as_str().trim().to_uppercase();
            let value = caps.get(2)?.as_str();
            let start = text.find(value)?;

            Some(
                RawSpan::new(kind, value, start as i64, (start + value.len()) as i64)
                    .with_confidence(LISTING_CONFIDENCE),
            )
        })
        .collect()
}

/// Maps char offsets (as a model counts them) to byte offsets.
struct CharIndex {
    boundaries: Vec<usize>,
}

impl CharIndex {
    fn new(text: &str) -> Self {
        let mut boundaries: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
        boundaries.push(text.len());
        Self { boundaries }
    }

    /// Offsets past the end map to -1 so validation rejects them.
    fn to_byte(&self, char_offset: i64) -> i64 {
        usize::try_from(char_offset)
            .ok()
            .and_then(|c| self.boundaries.get(c))
            .map(|&b| b as i64)
            .unwrap_or(-1)
    }
}
