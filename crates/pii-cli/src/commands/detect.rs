use std::path::PathBuf;

use anyhow::Result;
use pii_config::Config;
use pii_detect::{EntityDetector, OllamaDetector};

pub async fn handle(
    config: &Config,
    text: Option<String>,
    file: Option<PathBuf>,
    model: Option<String>,
) -> Result<()> {
    let text = super::read_input(text, file)?;

    // Unlike `mask`, detector errors are reported, not absorbed
    let detector = OllamaDetector::new(super::detector_settings(config))?;
    let spans = detector.detect(&text, model.as_deref()).await?;

    println!("{}", serde_json::to_string_pretty(&spans)?);
    Ok(())
}
