//! Span validation and overlap resolution

use std::cmp::Ordering;
use std::collections::HashSet;

use pii_core::{EntitySpan, NormalizeReport, RawSpan};
use tracing::debug;

/// Validated, non-overlapping spans ordered by `start` ascending.
///
/// Only [`Normalizer::normalize`] constructs this, so a [`crate::Masker`]
/// never sees overlapping or out-of-range spans.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedSpans {
    spans: Vec<EntitySpan>,
}

impl NormalizedSpans {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn as_slice(&self) -> &[EntitySpan] {
        &self.spans
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EntitySpan> {
        self.spans.iter()
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }
}

enum Rejection {
    InvalidRange,
    ValueMismatch,
}

/// Turns raw detector output into a span set that is safe to apply.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    allowed_kinds: HashSet<String>,
}

impl Normalizer {
    /// Normalizer that keeps every kind
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep only the listed kinds. An empty list keeps every kind.
    pub fn with_allowed_kinds<I, S>(kinds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed_kinds: kinds.into_iter().map(Into::into).collect(),
        }
    }

    pub fn allows(&self, kind: &str) -> bool {
        self.allowed_kinds.is_empty() || self.allowed_kinds.contains(kind)
    }

    /// Validate, filter, sort, and de-overlap `spans` against `text`.
    ///
    /// Deterministic: the same input always yields the same survivors in the
    /// same order, independent of the order of `spans`.
    pub fn normalize(&self, text: &str, spans: &[RawSpan]) -> (NormalizedSpans, NormalizeReport) {
        let mut report = NormalizeReport::default();
        let mut valid = Vec::with_capacity(spans.len());

        for raw in spans {
            match validate(text, raw) {
                Ok(span) if self.allows(&span.kind) => valid.push(span),
                Ok(_) => report.kind_filtered += 1,
                Err(Rejection::InvalidRange) => report.invalid_range += 1,
                Err(Rejection::ValueMismatch) => report.value_mismatch += 1,
            }
        }

        valid.sort_by(precedence);

        // Kept spans are sorted and disjoint, so the last one has the largest end
        let mut kept: Vec<EntitySpan> = Vec::with_capacity(valid.len());
        for span in valid {
            match kept.last() {
                Some(last) if last.overlaps(&span) => report.overlap += 1,
                _ => kept.push(span),
            }
        }

        debug!(
            "Normalized {} spans: kept {}, dropped {} ({:?})",
            spans.len(),
            kept.len(),
            report.total(),
            report
        );

        (NormalizedSpans { spans: kept }, report)
    }
}

/// Start ascending, longer first, then kind and confidence to settle exact ties.
fn precedence(a: &EntitySpan, b: &EntitySpan) -> Ordering {
    a.start
        .cmp(&b.start)
        .then_with(|| b.len().cmp(&a.len()))
        .then_with(|| a.kind.cmp(&b.kind))
        .then_with(|| b.confidence.total_cmp(&a.confidence))
}

fn validate(text: &str, raw: &RawSpan) -> Result<EntitySpan, Rejection> {
    let start = usize::try_from(raw.start).map_err(|_| Rejection::InvalidRange)?;
    let end = usize::try_from(raw.end).map_err(|_| Rejection::InvalidRange)?;

    if start >= end || end > text.len() {
        return Err(Rejection::InvalidRange);
    }

    // `get` is None when an offset splits a multi-byte char
    let found = text.get(start..end).ok_or(Rejection::InvalidRange)?;
    if found != raw.value {
        return Err(Rejection::ValueMismatch);
    }

    Ok(EntitySpan {
        kind: raw.kind.clone(),
        value: raw.value.clone(),
        start,
        end,
        confidence: raw.confidence,
    })
}
