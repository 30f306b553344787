//! Entity masking engine
//!
//! Two phases, both pure:
//! - [`Normalizer`] validates raw spans against the text and resolves overlaps
//! - [`Masker`] rewrites the text right-to-left and builds the audit trail

pub mod audit;
pub mod masker;
pub mod normalizer;
pub mod placeholder;

pub use audit::{replay, restore};
pub use masker::Masker;
pub use normalizer::{NormalizedSpans, Normalizer};
pub use placeholder::{hash_token, placeholder_for, random_token};

use pii_core::{MaskingMode, MaskingOutcome, MaskingResult, RawSpan};

/// Mask `text` using untrusted `spans`.
///
/// An empty `allowed_kinds` keeps every kind. Malformed spans are dropped,
/// never reported as errors.
pub fn mask(
    text: &str,
    spans: &[RawSpan],
    mode: MaskingMode,
    allowed_kinds: &[String],
) -> MaskingResult {
    mask_detailed(text, spans, mode, allowed_kinds).result
}

/// Same as [`mask`], also returning what normalization dropped.
pub fn mask_detailed(
    text: &str,
    spans: &[RawSpan],
    mode: MaskingMode,
    allowed_kinds: &[String],
) -> MaskingOutcome {
    let normalizer = Normalizer::with_allowed_kinds(allowed_kinds.iter().cloned());
    let (normalized, dropped) = normalizer.normalize(text, spans);
    let result = Masker::new(mode).apply(text, &normalized);

    MaskingOutcome { result, dropped }
}

/// Parse `mode` first, so an unsupported mode fails before any processing.
pub fn mask_with_mode_name(
    text: &str,
    spans: &[RawSpan],
    mode: &str,
    allowed_kinds: &[String],
) -> pii_core::Result<MaskingOutcome> {
    let mode: MaskingMode = mode.parse()?;
    Ok(mask_detailed(text, spans, mode, allowed_kinds))
}
