//! Typed cell values and their text coercion.

use chrono::NaiveDate;

/// A single cell in a dataset row.
///
/// Cells keep the type inferred at load time. Comparison always goes through
/// [`CellValue::as_comparable_text`], which gives every variant one canonical
/// textual form and maps missing values to `None` instead of a sentinel
/// string.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Text(String),
    Number(f64),
    Date(NaiveDate),
    Missing,
}

impl CellValue {
    /// Canonical text used for matching, or `None` for a missing cell.
    pub fn as_comparable_text(&self) -> Option<String> {
        match self {
            Self::Text(text) => Some(text.clone()),
            Self::Number(value) => Some(format_number(*value)),
            Self::Date(date) => Some(date.format("%Y-%m-%d").to_string()),
            Self::Missing => None,
        }
    }

    /// Text used when rendering or exporting; missing cells become empty.
    pub fn display_text(&self) -> String {
        self.as_comparable_text().unwrap_or_default()
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

/// Renders integral values without a trailing `.0` so that `150` loaded as a
/// number still matches the keyword `150` exactly.
fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_number_has_no_fraction() {
        assert_eq!(CellValue::Number(150.0).as_comparable_text().unwrap(), "150");
        assert_eq!(CellValue::Number(-3.0).as_comparable_text().unwrap(), "-3");
    }

    #[test]
    fn fractional_number_keeps_fraction() {
        assert_eq!(CellValue::Number(1.5).as_comparable_text().unwrap(), "1.5");
    }

    #[test]
    fn date_uses_iso_form() {
        let date = NaiveDate::from_ymd_opt(2024, 8, 8).unwrap();
        assert_eq!(
            CellValue::Date(date).as_comparable_text().unwrap(),
            "2024-08-08"
        );
    }

    #[test]
    fn missing_has_no_comparable_text() {
        assert_eq!(CellValue::Missing.as_comparable_text(), None);
        assert_eq!(CellValue::Missing.display_text(), "");
    }
}
