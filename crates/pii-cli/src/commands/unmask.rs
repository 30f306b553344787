use std::path::PathBuf;

use anyhow::{Context, Result};
use pii_core::MaskedEntity;
use serde_json::Value;

pub fn handle(file: Option<PathBuf>, audit: PathBuf) -> Result<()> {
    let content = std::fs::read_to_string(&audit)
        .with_context(|| format!("Failed to read {}", audit.display()))?;
    let audit: Value = serde_json::from_str(&content)?;

    let masked_text = match file {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => audit["masked_text"]
            .as_str()
            .ok_or_else(|| anyhow::anyhow!("No masked text given and none in the audit file"))?
            .to_string(),
    };

    let restored = restore_from_audit(&masked_text, &audit)?;
    print!("{}", restored);
    Ok(())
}

/// Restore using the `entities` (or service-style `masked_entities`) trail
pub fn restore_from_audit(masked_text: &str, audit: &Value) -> Result<String> {
    let trail = audit
        .get("entities")
        .or_else(|| audit.get("masked_entities"))
        .ok_or_else(|| anyhow::anyhow!("Audit file has no entities"))?;
    let entities: Vec<MaskedEntity> = serde_json::from_value(trail.clone())?;

    pii_mask::restore(masked_text, &entities)
        .ok_or_else(|| anyhow::anyhow!("Masked text does not match the audit trail"))
}
