//! Entity span models

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A candidate span as reported by a detector or a caller.
///
/// Nothing about a raw span is trusted: offsets may be negative, out of
/// range, or point at a different substring than `value`. Normalization
/// turns raw spans into [`EntitySpan`]s or drops them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSpan {
    #[serde(rename = "type", alias = "kind")]
    pub kind: String,
    pub value: String,
    pub start: i64,
    pub end: i64,
    #[serde(default)]
    pub confidence: f64,
}

impl RawSpan {
    pub fn new(kind: impl Into<String>, value: impl Into<String>, start: i64, end: i64) -> Self {
        Self {
            kind: kind.into(),
            value: value.into(),
            start,
            end,
            confidence: 0.0,
        }
    }

    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = confidence;
        self
    }

    /// Read one span from a loosely typed JSON entry.
    ///
    /// `None` when `type` (or `kind`), `value`, or an integer `start`/`end`
    /// is missing. A missing or non-numeric confidence reads as 0.
    pub fn from_value(entry: &Value) -> Option<Self> {
        let kind = entry
            .get("type")
            .or_else(|| entry.get("kind"))
            .and_then(Value::as_str)?;
        let value = entry.get("value").and_then(Value::as_str)?;
        let start = entry.get("start").and_then(Value::as_i64)?;
        let end = entry.get("end").and_then(Value::as_i64)?;
        let confidence = entry
            .get("confidence")
            .and_then(Value::as_f64)
            .unwrap_or(0.0);

        Some(Self::new(kind, value, start, end).with_confidence(confidence))
    }

    /// Convert every entry, returning the spans and how many entries were
    /// unreadable.
    pub fn from_values(entries: &[Value]) -> (Vec<Self>, usize) {
        let spans: Vec<Self> = entries.iter().filter_map(Self::from_value).collect();
        let malformed = entries.len() - spans.len();
        (spans, malformed)
    }
}

/// A validated span: `text[start..end] == value` holds for the text it was
/// checked against. Offsets are byte offsets on char boundaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntitySpan {
    #[serde(rename = "type", alias = "kind")]
    pub kind: String,
    pub value: String,
    pub start: usize,
    pub end: usize,
    pub confidence: f64,
}

impl EntitySpan {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Half-open interval intersection.
    pub fn overlaps(&self, other: &EntitySpan) -> bool {
        self.start < other.end && other.start < self.end
    }
}


/// One entry of the audit trail. Offsets refer to the original text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaskedEntity {
    #[serde(rename = "type", alias = "kind")]
    pub kind: String,
    pub original_value: String,
    pub masked_value: String,
    pub start: usize,
    pub end: usize,
    pub confidence: f64,
}
