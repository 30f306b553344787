use std::time::Duration;

use async_trait::async_trait;
use pii_core::{Error, RawSpan, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::detector::EntityDetector;
use crate::parse::parse_detector_output;
use crate::prompt::build_prompt;

/// Connection and sampling settings for [`OllamaDetector`]
#[derive(Debug, Clone)]
pub struct DetectorSettings {
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
    pub temperature: f32,
    pub top_p: f32,
}

impl Default for DetectorSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:11434".to_string(),
            model: "gemma3:27b".to_string(),
            timeout: Duration::from_secs(30),
            temperature: 0.1,
            top_p: 0.9,
        }
    }
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: String,
    stream: bool,
    options: GenerateOptions,
}

#[derive(Serialize)]
struct GenerateOptions {
    temperature: f32,
    top_p: f32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

/// Asks a generative model to list the sensitive entities in a text.
pub struct OllamaDetector {
    client: reqwest::Client,
    settings: DetectorSettings,
}

impl OllamaDetector {
    pub fn new(settings: DetectorSettings) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("pii/1.0 (entity detector)")
            .timeout(settings.timeout)
            .build()
            .map_err(|e| Error::Detector(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, settings })
    }

    fn endpoint(&self) -> String {
        format!("{}/api/generate", self.settings.base_url.trim_end_matches('/'))
    }

    /// Send the prompt and return the model's raw text output
    async fn generate(&self, text: &str, model: &str) -> anyhow::Result<String> {
        let request = GenerateRequest {
            model,
            prompt: build_prompt(text),
            stream: false,
            options: GenerateOptions {
                temperature: self.settings.temperature,
                top_p: self.settings.top_p,
            },
        };

        let response = self
            .client
            .post(self.endpoint())
            .json(&request)
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to reach detector: {}", e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Detector HTTP error {}: {}", status.as_u16(), body);
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to read detector response: {}", e))?;

        Ok(body.response)
    }
}

#[async_trait]
impl EntityDetector for OllamaDetector {
    async fn detect(&self, text: &str, model: Option<&str>) -> anyhow::Result<Vec<RawSpan>> {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        let model = model.unwrap_or(&self.settings.model);
        let output = self.generate(text, model).await?;
        debug!("Detector {} returned {} bytes", model, output.len());

        let spans = parse_detector_output(&output, text);
        debug!("Parsed {} candidate spans", spans.len());

        Ok(spans)
    }

    fn default_model(&self) -> &str {
        &self.settings.model
    }
}
