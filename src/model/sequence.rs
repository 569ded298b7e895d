// Helpers for the numeric sequences the sort and search screens operate on

use crate::engine::errors::PreconditionError;

/// Parse user-entered slot values. Every slot must be filled and hold a finite number.
pub fn parse_custom_values<S: AsRef<str>>(slots: &[S]) -> Result<Vec<f64>, PreconditionError> {
    if slots.is_empty() || slots.iter().any(|s| s.as_ref().trim().is_empty()) {
        return Err(PreconditionError::IncompleteCustomValues);
    }

    slots
        .iter()
        .enumerate()
        .map(|(index, slot)| {
            let text = slot.as_ref().trim();
            match text.parse::<f64>() {
                Ok(value) if value.is_finite() => Ok(value),
                _ => Err(PreconditionError::InvalidCustomValue {
                    index,
                    text: text.to_string(),
                }),
            }
        })
        .collect()
}

/// Render a value without a trailing `.0` for whole numbers
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Join values for status lines and step descriptions: `[1, 2, 3]`
pub fn format_values(values: &[f64]) -> String {
    let parts: Vec<String> = values.iter().map(|v| format_value(*v)).collect();
    format!("[{}]", parts.join(", "))
}

pub fn is_sorted(values: &[f64]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}

/// Sort ascending; values are finite so `total_cmp` agrees with `<`
pub fn sort_ascending(values: &mut [f64]) {
    values.sort_by(|a, b| a.total_cmp(b));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_filled_slots() {
        let values = parse_custom_values(&["5", " 3 ", "4.5", "-1"]).unwrap();
        assert_eq!(values, vec![5.0, 3.0, 4.5, -1.0]);
    }

    #[test]
    fn rejects_empty_slot() {
        assert_eq!(
            parse_custom_values(&["5", "", "4"]),
            Err(PreconditionError::IncompleteCustomValues)
        );
        assert_eq!(
            parse_custom_values::<&str>(&[]),
            Err(PreconditionError::IncompleteCustomValues)
        );
    }

    #[test]
    fn rejects_non_numeric_and_non_finite() {
        assert_eq!(
            parse_custom_values(&["5", "abc"]),
            Err(PreconditionError::InvalidCustomValue {
                index: 1,
                text: "abc".to_string()
            })
        );
        assert!(parse_custom_values(&["NaN"]).is_err());
        assert!(parse_custom_values(&["inf"]).is_err());
    }

    #[test]
    fn formats_whole_and_fractional_values() {
        assert_eq!(format_value(42.0), "42");
        assert_eq!(format_value(-3.0), "-3");
        assert_eq!(format_value(2.5), "2.5");
        assert_eq!(format_values(&[1.0, 2.5]), "[1, 2.5]");
    }
}
