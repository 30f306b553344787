//! Right-to-left text rewriting

use std::collections::HashSet;

use pii_core::{EntitySpan, MaskedEntity, MaskingMode, MaskingResult};

use crate::normalizer::NormalizedSpans;
use crate::placeholder::{hash_token, placeholder_for, random_token};

/// Applies one masking mode to normalized spans.
///
/// Holds no state between calls; every [`Masker::apply`] is independent.
#[derive(Debug, Clone, Copy, Default)]
pub struct Masker {
    mode: MaskingMode,
}

impl Masker {
    pub fn new(mode: MaskingMode) -> Self {
        Self { mode }
    }

    /// Rewrite `text` and return it with the audit trail.
    ///
    /// Spans are visited by descending `start`. Because they are disjoint, a
    /// splice never moves the offsets of a span that is still pending.
    pub fn apply(&self, text: &str, spans: &NormalizedSpans) -> MaskingResult {
        let mut masked_text = text.to_string();
        let mut entities = Vec::with_capacity(spans.len());
        let mut issued = HashSet::new();

        for span in spans.iter().rev() {
            let replacement = self.replacement(span, &mut issued);
            masked_text.replace_range(span.start..span.end, &replacement);

            entities.push(MaskedEntity {
                kind: span.kind.clone(),
                original_value: span.value.clone(),
                masked_value: replacement,
                start: span.start,
                end: span.end,
                confidence: span.confidence,
            });
        }

        entities.reverse();

        MaskingResult {
            masked_text,
            entities,
        }
    }

    fn replacement(&self, span: &EntitySpan, issued: &mut HashSet<String>) -> String {
        match self.mode {
            MaskingMode::Replace => placeholder_for(&span.kind).to_string(),
            MaskingMode::Hash => hash_token(&span.value),
            MaskingMode::Tokenize => loop {
                let token = random_token();
                if issued.insert(token.clone()) {
                    break token;
                }
            },
        }
    }
}
