//! Audit trail replay and reversal

use pii_core::MaskedEntity;

/// Re-apply an audit trail to the original text.
///
/// Reproduces the masked text the engine returned. `None` if a record does
/// not match the original at its offsets or records overlap.
pub fn replay(original: &str, entities: &[MaskedEntity]) -> Option<String> {
    let ordered = ordered(entities)?;
    let mut text = original.to_string();

    for entity in ordered.iter().rev() {
        if text.get(entity.start..entity.end)? != entity.original_value {
            return None;
        }
        text.replace_range(entity.start..entity.end, &entity.masked_value);
    }

    Some(text)
}

/// Undo a masking using its audit trail.
///
/// Record offsets refer to the original text, so each record's position in
/// the masked text is shifted by the length change of every record before it.
/// `None` if the masked text does not carry the recorded tokens there.
pub fn restore(masked_text: &str, entities: &[MaskedEntity]) -> Option<String> {
    let ordered = ordered(entities)?;
    let mut restored = String::with_capacity(masked_text.len());
    let mut cursor = 0usize;
    let mut shift: isize = 0;

    for entity in ordered {
        let pos = entity.start.checked_add_signed(shift)?;
        let token_end = pos.checked_add(entity.masked_value.len())?;
        if pos < cursor || masked_text.get(pos..token_end)? != entity.masked_value {
            return None;
        }

        restored.push_str(&masked_text[cursor..pos]);
        restored.push_str(&entity.original_value);
        cursor = token_end;
        shift += entity.masked_value.len() as isize - (entity.end - entity.start) as isize;
    }

    restored.push_str(masked_text.get(cursor..)?);
    Some(restored)
}

/// Records sorted by start, or `None` if any is inverted or any two overlap.
fn ordered(entities: &[MaskedEntity]) -> Option<Vec<&MaskedEntity>> {
    if entities.iter().any(|e| e.end < e.start) {
        return None;
    }

    let mut ordered: Vec<&MaskedEntity> = entities.iter().collect();
    ordered.sort_by_key(|e| e.start);

    let disjoint = ordered
        .windows(2)
        .all(|pair| pair[0].end <= pair[1].start);
    disjoint.then_some(ordered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mask;
    use pii_core::{MaskingMode, RawSpan};

    fn sample() -> (&'static str, Vec<RawSpan>) {
        let text = "Ayşe Yılmaz, ayse@example.com, +90 555 000 00 00";
        let name = "Ayşe Yılmaz";
        let email_start = text.find("ayse@").unwrap();
        let phone_start = text.find("+90").unwrap();
        let spans = vec![
            RawSpan::new("PERSON", name, 0, name.len() as i64),
            RawSpan::new(
                "EMAIL",
                "ayse@example.com",
                email_start as i64,
                (email_start + 16) as i64,
            ),
            RawSpan::new(
                "PHONE",
                "+90 555 000 00 00",
                phone_start as i64,
                (phone_start + 17) as i64,
            ),
        ];
        (text, spans)
    }

    #[test]
    fn test_replay_reproduces_output() {
        let (text, spans) = sample();
        for mode in [MaskingMode::Replace, MaskingMode::Hash, MaskingMode::Tokenize] {
            let result = mask(text, &spans, mode, &[]);
            assert_eq!(result.entities.len(), 3);
            assert_eq!(replay(text, &result.entities).as_deref(), Some(result.masked_text.as_str()));
        }
    }

    #[test]
    fn test_restore_inverts_masking() {
        let (text, spans) = sample();
        for mode in [MaskingMode::Replace, MaskingMode::Hash, MaskingMode::Tokenize] {
            let result = mask(text, &spans, mode, &[]);
            assert_eq!(restore(&result.masked_text, &result.entities).as_deref(), Some(text));
        }
    }

    #[test]
    fn test_restore_rejects_foreign_text() {
        let (text, spans) = sample();
        let result = mask(text, &spans, MaskingMode::Replace, &[]);

        assert_eq!(restore("something else entirely", &result.entities), None);
    }

    #[test]
    fn test_replay_rejects_wrong_original() {
        let (text, spans) = sample();
        let result = mask(text, &spans, MaskingMode::Replace, &[]);

        assert_eq!(replay("Zeynep Kaya, other@example.com, +90 555 000 00 00", &result.entities), None);
    }

    #[test]
    fn test_inverted_record_rejected() {
        let inverted = MaskedEntity {
            kind: "PERSON".to_string(),
            original_value: "x".to_string(),
            masked_value: "[NAME_MASKED]".to_string(),
            start: 5,
            end: 2,
            confidence: 0.0,
        };

        assert_eq!(restore("hello[NAME_MASKED]", &[inverted.clone()]), None);
        assert_eq!(replay("hello world", &[inverted]), None);
    }

    #[test]
    fn test_empty_trail() {
        assert_eq!(replay("abc", &[]).as_deref(), Some("abc"));
        assert_eq!(restore("abc", &[]).as_deref(), Some("abc"));
    }
}
