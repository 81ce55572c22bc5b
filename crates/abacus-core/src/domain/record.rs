use std::fmt;

use serde::{Deserialize, Serialize};

/// One logged calculation.
///
/// Records are immutable once created. `sequence` is the 1-based position in
/// the history at the time of insertion and is the record's only notion of
/// time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRecord {
    sequence: u64,
    expression: String,
    result: f64,
}

impl CalculationRecord {
    pub fn new(sequence: u64, expression: impl Into<String>, result: f64) -> Self {
        Self {
            sequence,
            expression: expression.into(),
            result,
        }
    }

    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn result(&self) -> f64 {
        self.result
    }
}

impl fmt::Display for CalculationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.expression, self.result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_joins_expression_and_result() {
        let record = CalculationRecord::new(1, "3 × 4", 12.0);
        assert_eq!(record.to_string(), "3 × 4 = 12");

        let record = CalculationRecord::new(2, "7 ÷ 2", 3.5);
        assert_eq!(record.to_string(), "7 ÷ 2 = 3.5");
    }

    #[test]
    fn serializes_all_fields() {
        let record = CalculationRecord::new(3, "2 + 3", 5.0);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"sequence":3,"expression":"2 + 3","result":5.0}"#);
    }
}
