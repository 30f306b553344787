use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use pii_config::Config;
use pii_core::{MaskingOutcome, MaskingResult};
use pii_engine::{MaskRequest, SpanMaskRequest};
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use crate::cli::OutputFormat;

/// Accepted shapes of a `--spans` file.
///
/// Entries stay untyped here; the service drops and counts the ones that
/// do not read as spans.
#[derive(Deserialize)]
#[serde(untagged)]
enum SpansFile {
    List(Vec<Value>),
    Wrapped { entities: Vec<Value> },
}

#[allow(clippy::too_many_arguments)]
pub async fn handle(
    config: &Config,
    text: Option<String>,
    file: Option<PathBuf>,
    spans: Option<PathBuf>,
    mode: Option<String>,
    kinds: Vec<String>,
    model: Option<String>,
    format: OutputFormat,
) -> Result<()> {
    let text = super::read_input(text, file)?;
    let service = super::build_service(config)?;

    let outcome = match spans {
        Some(path) => {
            let request = SpanMaskRequest {
                text,
                spans: load_spans(&path)?,
                mode,
                allowed_kinds: kinds,
            };
            service.mask_spans(&request)?
        }
        None => {
            let request = MaskRequest {
                text,
                masking_type: mode,
                entities: kinds,
                model,
            };
            let response = service.mask(request).await?;
            MaskingOutcome {
                result: MaskingResult {
                    masked_text: response.masked_text,
                    entities: response.masked_entities,
                },
                dropped: response.dropped,
            }
        }
    };

    if outcome.dropped.total() > 0 {
        info!("Dropped {} spans: {:?}", outcome.dropped.total(), outcome.dropped);
    }

    match format {
        OutputFormat::Text => print!("{}", outcome.result.masked_text),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outcome)?),
    }

    Ok(())
}

/// Read span entries from a JSON array or an `{"entities": [...]}` object
pub fn load_spans(path: &Path) -> Result<Vec<Value>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let parsed: SpansFile = serde_json::from_str(&content)
        .with_context(|| format!("Invalid spans file {}", path.display()))?;

    Ok(match parsed {
        SpansFile::List(spans) => spans,
        SpansFile::Wrapped { entities } => entities,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_spans_list_and_wrapped() {
        let dir = tempfile::tempdir().unwrap();

        let list = dir.path().join("list.json");
        std::fs::write(
            &list,
            r#"[{"type": "EMAIL", "value": "a@b.io", "start": 0, "end": 6}]"#,
        )
        .unwrap();
        let entries = load_spans(&list).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["type"], "EMAIL");

        let wrapped = dir.path().join("wrapped.json");
        std::fs::write(
            &wrapped,
            r#"{"entities": [{"type": "PHONE", "value": "555", "start": 1, "end": 4, "confidence": 0.5}]}"#,
        )
        .unwrap();
        let entries = load_spans(&wrapped).unwrap();
        assert_eq!(entries[0]["type"], "PHONE");
        assert_eq!(entries[0]["confidence"], 0.5);
    }

    #[test]
    fn test_unreadable_entry_is_counted_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spans.json");
        std::fs::write(
            &path,
            r#"[
                {"type": "PERSON", "value": "mail", "start": 1.5, "end": 4},
                {"type": "EMAIL", "value": "a@b.io", "start": 5, "end": 11}
            ]"#,
        )
        .unwrap();

        let config = Config::default();
        let service = crate::commands::build_service(&config).unwrap();
        let request = SpanMaskRequest {
            text: "mail a@b.io".to_string(),
            spans: load_spans(&path).unwrap(),
            mode: None,
            allowed_kinds: Vec::new(),
        };

        let outcome = service.mask_spans(&request).unwrap();
        assert_eq!(outcome.result.masked_text, "mail [EMAIL_MASKED]");
        assert_eq!(outcome.dropped.invalid_range, 1);
    }

    #[test]
    fn test_load_spans_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(load_spans(&path).is_err());
    }
}
