//! Masking results and normalization accounting

use serde::{Deserialize, Serialize};

use crate::MaskedEntity;

/// Redacted text plus its audit trail, ordered by original `start` ascending.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MaskingResult {
    pub masked_text: String,
    pub entities: Vec<MaskedEntity>,
}

/// Counts of spans dropped during normalization, by reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NormalizeReport {
    /// Empty, negative, out-of-range, or not on a char boundary
    pub invalid_range: usize,
    /// `text[start..end]` differs from the claimed value
    pub value_mismatch: usize,
    /// Kind not in the allow-list
    pub kind_filtered: usize,
    /// Lost overlap resolution to an earlier or longer span
    pub overlap: usize,
}

impl NormalizeReport {
    pub fn total(&self) -> usize {
        self.invalid_range + self.value_mismatch + self.kind_filtered + self.overlap
    }
}

/// A masking result together with what normalization discarded.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MaskingOutcome {
    #[serde(flatten)]
    pub result: MaskingResult,
    pub dropped: NormalizeReport,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_total() {
        let report = NormalizeReport {
            invalid_range: 1,
            value_mismatch: 2,
            kind_filtered: 0,
            overlap: 3,
        };
        assert_eq!(report.total(), 6);
        assert_eq!(NormalizeReport::default().total(), 0);
    }

    #[test]
    fn test_outcome_flattens_result() {
        let outcome = MaskingOutcome {
            result: MaskingResult {
                masked_text: "hi".to_string(),
                entities: Vec::new(),
            },
            dropped: NormalizeReport::default(),
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["masked_text"], "hi");
        assert_eq!(json["dropped"]["overlap"], 0);
    }
}
