use pii_core::{MaskingMode, RawSpan};
use pii_mask::placeholder::{HASH_TOKEN_LEN, TOKEN_HEX_LEN, TOKEN_PREFIX, placeholder_for};
use pii_mask::{Normalizer, mask, mask_detailed, replay, restore};
use proptest::prelude::*;

const KINDS: [&str; 4] = ["EMAIL", "PHONE", "PERSON", "HEALTH"];

fn any_mode() -> impl Strategy<Value = MaskingMode> {
    prop_oneof![
        Just(MaskingMode::Replace),
        Just(MaskingMode::Hash),
        Just(MaskingMode::Tokenize),
    ]
}

/// Text plus valid, disjoint spans cut out of it.
fn text_with_spans() -> impl Strategy<Value = (String, Vec<RawSpan>)> {
    "[a-z0-9 @.+-]{1,120}"
        .prop_flat_map(|text| {
            let len = text.len();
            (Just(text), proptest::collection::vec(0..=len, 0..12))
        })
        .prop_map(|(text, mut cuts)| {
            cuts.sort_unstable();
            cuts.dedup();
            let spans = cuts
                .chunks_exact(2)
                .enumerate()
                .map(|(i, pair)| {
                    RawSpan::new(
                        KINDS[i % KINDS.len()],
                        &text[pair[0]..pair[1]],
                        pair[0] as i64,
                        pair[1] as i64,
                    )
                })
                .collect();
            (text, spans)
        })
}

/// Text plus arbitrary, mostly-invalid spans.
fn text_with_noise() -> impl Strategy<Value = (String, Vec<RawSpan>)> {
    "[a-z ]{0,60}".prop_flat_map(|text| {
        let len = text.len() as i64;
        let span = (-2..=len + 2, -2..=len + 2, prop::bool::ANY).prop_map({
            let text = text.clone();
            move |(start, end, honest)| {
                let value = match (honest, text.get(start.max(0) as usize..end.max(0) as usize)) {
                    (true, Some(found)) => found.to_string(),
                    _ => "zzz".to_string(),
                };
                RawSpan::new("X", value, start, end)
            }
        });
        (Just(text), proptest::collection::vec(span, 0..16))
    })
}

proptest! {
    #[test]
    fn empty_span_list_is_identity(text in ".{0,200}", mode in any_mode()) {
        let result = mask(&text, &[], mode, &[]);
        prop_assert_eq!(result.masked_text, text);
        prop_assert!(result.entities.is_empty());
    }

    #[test]
    fn untouched_regions_are_preserved((text, spans) in text_with_spans(), mode in any_mode()) {
        let result = mask(&text, &spans, mode, &[]);
        prop_assert_eq!(result.entities.len(), spans.len());

        let mut expected = String::new();
        let mut cursor = 0;
        for entity in &result.entities {
            expected.push_str(&text[cursor..entity.start]);
            expected.push_str(&entity.masked_value);
            cursor = entity.end;

            let width = match mode {
                MaskingMode::Replace => placeholder_for(&entity.kind).len(),
                MaskingMode::Hash => HASH_TOKEN_LEN,
                MaskingMode::Tokenize => TOKEN_PREFIX.len() + TOKEN_HEX_LEN,
            };
            prop_assert_eq!(entity.masked_value.len(), width);
        }
        expected.push_str(&text[cursor..]);

        prop_assert_eq!(result.masked_text, expected);
    }

    #[test]
    fn audit_trail_replays_and_restores((text, spans) in text_with_spans(), mode in any_mode()) {
        let result = mask(&text, &spans, mode, &[]);

        let replayed = replay(&text, &result.entities);
        prop_assert_eq!(replayed.as_deref(), Some(result.masked_text.as_str()));

        let restored = restore(&result.masked_text, &result.entities);
        prop_assert_eq!(restored.as_deref(), Some(text.as_str()));
    }

    #[test]
    fn remasking_output_without_spans_is_stable((text, spans) in text_with_spans(), mode in any_mode()) {
        let first = mask(&text, &spans, mode, &[]);
        let second = mask(&first.masked_text, &[], mode, &[]);
        prop_assert_eq!(second.masked_text, first.masked_text);
    }

    #[test]
    fn normalization_is_deterministic_and_disjoint((text, spans) in text_with_noise()) {
        let normalizer = Normalizer::new();
        let (first, report) = normalizer.normalize(&text, &spans);
        let (second, _) = normalizer.normalize(&text, &spans);
        prop_assert_eq!(&first, &second);

        let mut reversed = spans.clone();
        reversed.reverse();
        let (third, _) = normalizer.normalize(&text, &reversed);
        prop_assert_eq!(&first, &third);

        prop_assert_eq!(first.len() + report.total(), spans.len());
        for pair in first.as_slice().windows(2) {
            prop_assert!(pair[0].end <= pair[1].start);
        }
        for span in first.iter() {
            prop_assert_eq!(&text[span.start..span.end], span.value.as_str());
        }
    }
}

#[test]
fn mismatched_value_leaves_text_unchanged() {
    let spans = vec![RawSpan::new("X", "abc", 0, 5)];
    let outcome = mask_detailed("hello world", &spans, MaskingMode::Replace, &[]);

    assert_eq!(outcome.result.masked_text, "hello world");
    assert!(outcome.result.entities.is_empty());
    assert_eq!(outcome.dropped.value_mismatch, 1);
}

#[test]
fn overlapping_spans_keep_exactly_one() {
    let text = "0123456789 tail";
    let spans = vec![
        RawSpan::new("A", "0123456789", 0, 10),
        RawSpan::new("B", "567", 5, 8),
    ];

    for _ in 0..2 {
        let result = mask(text, &spans, MaskingMode::Replace, &[]);
        assert_eq!(result.entities.len(), 1);
        assert_eq!(result.entities[0].kind, "A");
        assert_eq!(result.masked_text, "[MASKED] tail");
    }
}

#[test]
fn hash_tokens_match_for_repeated_values() {
    let text = "call 555-1234 or 555-1234";
    let spans = vec![
        RawSpan::new("PHONE", "555-1234", 5, 13),
        RawSpan::new("PHONE", "555-1234", 17, 25),
    ];

    let a = mask(text, &spans, MaskingMode::Hash, &[]);
    let b = mask(text, &spans, MaskingMode::Hash, &[]);

    assert_eq!(a.entities[0].masked_value, a.entities[1].masked_value);
    assert_eq!(a, b);
}

#[test]
fn concurrent_calls_are_independent() {
    let text = "mail a@b.io";
    let spans = vec![RawSpan::new("EMAIL", "a@b.io", 5, 11)];

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let spans = spans.clone();
            std::thread::spawn(move || mask(text, &spans, MaskingMode::Replace, &[]))
        })
        .collect();

    for handle in handles {
        let result = handle.join().unwrap();
        assert_eq!(result.masked_text, "mail [EMAIL_MASKED]");
    }
}
