//! Detector trait

use async_trait::async_trait;
use pii_core::RawSpan;

/// Produces candidate spans for a text.
///
/// Implementations may fail or return approximate offsets; callers validate
/// everything they receive.
#[async_trait]
pub trait EntityDetector: Send + Sync {
    /// Detect candidate spans. `model` overrides the detector's default model
    /// when the backend has one.
    async fn detect(&self, text: &str, model: Option<&str>) -> anyhow::Result<Vec<RawSpan>>;

    /// Model used when no override is given
    fn default_model(&self) -> &str;
}

/// Detector that returns a fixed span list for every text.
#[derive(Debug, Clone, Default)]
pub struct StaticDetector {
    spans: Vec<RawSpan>,
}

impl StaticDetector {
    pub fn new(spans: Vec<RawSpan>) -> Self {
        Self { spans }
    }
}

#[async_trait]
impl EntityDetector for StaticDetector {
    async fn detect(&self, _text: &str, _model: Option<&str>) -> anyhow::Result<Vec<RawSpan>> {
        Ok(self.spans.clone())
    }

    fn default_model(&self) -> &str {
        "static"
    }
}
