use std::sync::Arc;
use std::time::Duration;

use pii_core::{MaskedEntity, MaskingMode, MaskingOutcome, NormalizeReport, RawSpan, Result};
use pii_detect::EntityDetector;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Detect-then-mask request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MaskRequest {
    pub text: String,
    /// `replace`, `hash` or `tokenize`; service default when absent
    #[serde(default)]
    pub masking_type: Option<String>,
    /// Kinds to mask; service default when empty
    #[serde(default)]
    pub entities: Vec<String>,
    /// Detector model override
    #[serde(default)]
    pub model: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaskResponse {
    pub original_text: String,
    pub masked_text: String,
    pub detected_entities: Vec<RawSpan>,
    pub masked_entities: Vec<MaskedEntity>,
    pub dropped: NormalizeReport,
    pub status: String,
    pub model_used: String,
}

/// Mask request with caller-supplied spans
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpanMaskRequest {
    pub text: String,
    /// Span entries as sent; unreadable ones count as `invalid_range`
    #[serde(default)]
    pub spans: Vec<serde_json::Value>,
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub allowed_kinds: Vec<String>,
}

/// Mode and kind filter used when a request leaves them out
#[derive(Debug, Clone, Default)]
pub struct MaskingDefaults {
    pub mode: MaskingMode,
    pub allowed_kinds: Vec<String>,
}

impl MaskingDefaults {
    fn mode(&self, requested: Option<&str>) -> Result<MaskingMode> {
        match requested {
            Some(name) => name.parse(),
            None => Ok(self.mode),
        }
    }

    fn kinds<'a>(&'a self, requested: &'a [String]) -> &'a [String] {
        if requested.is_empty() {
            &self.allowed_kinds
        } else {
            requested
        }
    }
}

/// Runs the detector and the masking engine for one request at a time.
///
/// Shares nothing mutable between requests; clone the `Arc` freely.
pub struct MaskingService {
    detector: Arc<dyn EntityDetector>,
    detect_timeout: Duration,
    defaults: MaskingDefaults,
}

impl MaskingService {
    pub fn new(detector: Arc<dyn EntityDetector>, detect_timeout: Duration) -> Self {
        Self {
            detector,
            detect_timeout,
            defaults: MaskingDefaults::default(),
        }
    }

    pub fn with_defaults(mut self, defaults: MaskingDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn default_model(&self) -> &str {
        self.detector.default_model()
    }

    /// Run the detector with a deadline.
    ///
    /// Failure or timeout yields no spans, so the text passes through unmasked
    /// rather than failing the request.
    pub async fn detect(&self, text: &str, model: Option<&str>) -> Vec<RawSpan> {
        match tokio::time::timeout(self.detect_timeout, self.detector.detect(text, model)).await {
            Ok(Ok(spans)) => spans,
            Ok(Err(e)) => {
                warn!("Entity detection failed, masking nothing: {:#}", e);
                Vec::new()
            }
            Err(_) => {
                warn!(
                    "Entity detection timed out after {:?}, masking nothing",
                    self.detect_timeout
                );
                Vec::new()
            }
        }
    }

    /// Detect entities in `request.text` and mask them.
    ///
    /// The only error is an unsupported masking mode, checked before the
    /// detector is called.
    pub async fn mask(&self, request: MaskRequest) -> Result<MaskResponse> {
        let mode = self.defaults.mode(request.masking_type.as_deref())?;
        let model_used = request
            .model
            .clone()
            .unwrap_or_else(|| self.detector.default_model().to_string());

        let detected = self.detect(&request.text, request.model.as_deref()).await;
        let kinds = self.defaults.kinds(&request.entities);
        let outcome = pii_mask::mask_detailed(&request.text, &detected, mode, kinds);

        info!(
            "Masked {} of {} detected entities ({} mode)",
            outcome.result.entities.len(),
            detected.len(),
            mode
        );

        Ok(MaskResponse {
            original_text: request.text,
            masked_text: outcome.result.masked_text,
            detected_entities: detected,
            masked_entities: outcome.result.entities,
            dropped: outcome.dropped,
            status: "success".to_string(),
            model_used,
        })
    }

    /// Mask with spans the caller already has; no detector involved.
    ///
    /// An entry that does not read as a span (say, a fractional offset) is
    /// dropped and counted like any other invalid range.
    pub fn mask_spans(&self, request: &SpanMaskRequest) -> Result<MaskingOutcome> {
        let mode = self.defaults.mode(request.mode.as_deref())?;
        let kinds = self.defaults.kinds(&request.allowed_kinds);

        let (spans, malformed) = RawSpan::from_values(&request.spans);
        if malformed > 0 {
            warn!("Dropped {} unreadable span entries", malformed);
        }

        let mut outcome = pii_mask::mask_detailed(&request.text, &spans, mode, kinds);
        outcome.dropped.invalid_range += malformed;
        Ok(outcome)
    }
}
