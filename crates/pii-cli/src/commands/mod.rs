pub mod detect;
pub mod mask;
pub mod serve;
pub mod unmask;

use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use pii_config::Config;
use pii_detect::{DetectorSettings, OllamaDetector};
use pii_engine::{MaskingDefaults, MaskingService};

/// Text from the argument, a file, or stdin, in that order
pub fn read_input(text: Option<String>, file: Option<PathBuf>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }

    if let Some(path) = file {
        return std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()));
    }

    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

pub fn detector_settings(config: &Config) -> DetectorSettings {
    DetectorSettings {
        base_url: config.detector.base_url.clone(),
        model: config.detector.model.clone(),
        timeout: config.detector.timeout(),
        temperature: config.detector.temperature,
        top_p: config.detector.top_p,
    }
}

/// Masking service backed by the configured detector
pub fn build_service(config: &Config) -> Result<MaskingService> {
    let detector = OllamaDetector::new(detector_settings(config))?;

    let defaults = MaskingDefaults {
        mode: config.masking.mode,
        allowed_kinds: config.masking.allowed_kinds.clone(),
    };

    Ok(MaskingService::new(Arc::new(detector), config.detector.timeout()).with_defaults(defaults))
}

pub fn show_config(config: &Config) -> Result<()> {
    println!("Config file: {}", Config::config_path().display());
    println!();
    print!("{}", toml::to_string_pretty(config)?);
    Ok(())
}
