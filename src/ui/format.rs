use num_format::{Locale, ToFormattedString};

use crate::analytics::metrics::NOT_AVAILABLE;

/// Separator between crop and disease in `disease_name`.
const CROP_SEPARATOR: &str = "___";

/// Readable disease label: the part after the crop prefix, underscores as
/// spaces. `N/A` passes through untouched.
///
/// `"Tomato___Late_blight"` → `"Late blight"`
pub fn disease_label(raw: &str) -> String {
    if raw == NOT_AVAILABLE {
        return raw.to_string();
    }
    raw.rsplit(CROP_SEPARATOR)
        .next()
        .unwrap_or(raw)
        .replace('_', " ")
}

/// Integer with thousands separators (e.g. `9,855`).
pub fn format_count(n: usize) -> String {
    n.to_formatted_string(&Locale::en)
}

/// Percentage with one decimal (e.g. `42.9%`).
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_crop_prefix_and_underscores() {
        assert_eq!(disease_label("Tomato___Late_blight"), "Late blight");
        assert_eq!(
            disease_label("Corn_(maize)___Northern_Leaf_Blight"),
            "Northern Leaf Blight"
        );
        assert_eq!(disease_label("Powdery_mildew"), "Powdery mildew");
        assert_eq!(disease_label("N/A"), "N/A");
    }

    #[test]
    fn formats_counts_and_percentages() {
        assert_eq!(format_count(9855), "9,855");
        assert_eq!(format_count(0), "0");
        assert_eq!(format_percent(42.857), "42.9%");
        assert_eq!(format_percent(0.0), "0.0%");
    }
}
