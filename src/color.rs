use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::analytics::tier::Tier;
use crate::data::model::Status;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Severity colours
// ---------------------------------------------------------------------------

/// Bar fill for a severity tier.
pub fn severity_color(tier: Tier) -> Color32 {
    match tier {
        Tier::High => Color32::from_rgb(0xdc, 0x35, 0x45),
        Tier::Medium => Color32::from_rgb(0xfd, 0x7e, 0x14),
        Tier::Low => Color32::from_rgb(0xff, 0xc1, 0x07),
    }
}

/// `(text, background)` for the risk badge.
pub fn risk_badge_colors(tier: Tier) -> (Color32, Color32) {
    match tier {
        Tier::High => (
            Color32::from_rgb(0xe7, 0x4c, 0x3c),
            Color32::from_rgb(0xfd, 0xe8, 0xe8),
        ),
        Tier::Medium => (
            Color32::from_rgb(0xf3, 0x9c, 0x12),
            Color32::from_rgb(0xfe, 0xf5, 0xe7),
        ),
        Tier::Low => (
            Color32::from_rgb(0x27, 0xae, 0x60),
            Color32::from_rgb(0xe8, 0xf8, 0xf0),
        ),
    }
}

// ---------------------------------------------------------------------------
// Status colours
// ---------------------------------------------------------------------------

pub const HEALTHY_COLOR: Color32 = Color32::from_rgb(0x4c, 0xaf, 0x50);
pub const DISEASED_COLOR: Color32 = Color32::from_rgb(0xf4, 0x43, 0x36);

/// Maps statuses to colours: fixed green/red for the two known statuses,
/// generated hues for anything else.
#[derive(Debug, Clone)]
pub struct StatusPalette {
    mapping: BTreeMap<Status, Color32>,
    default_color: Color32,
}

impl StatusPalette {
    pub fn new(statuses: &[Status]) -> Self {
        let others: Vec<&Status> = statuses
            .iter()
            .filter(|s| matches!(s, Status::Other(_)))
            .collect();
        let generated = generate_palette(others.len());

        let mut mapping = BTreeMap::from([
            (Status::Healthy, HEALTHY_COLOR),
            (Status::Diseased, DISEASED_COLOR),
        ]);
        mapping.extend(others.into_iter().cloned().zip(generated));

        StatusPalette {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a given status.
    pub fn color_for(&self, status: &Status) -> Color32 {
        self.mapping
            .get(status)
            .copied()
            .unwrap_or(self.default_color)
    }
}

impl Default for StatusPalette {
    fn default() -> Self {
        Self::new(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_size() {
        assert!(generate_palette(0).is_empty());
        assert_eq!(generate_palette(3).len(), 3);
    }

    #[test]
    fn known_statuses_have_fixed_colours() {
        let palette = StatusPalette::new(&[Status::Diseased, Status::Healthy]);
        assert_eq!(palette.color_for(&Status::Healthy), HEALTHY_COLOR);
        assert_eq!(palette.color_for(&Status::Diseased), DISEASED_COLOR);
    }

    #[test]
    fn other_statuses_get_generated_colours() {
        let other = Status::Other("Unknown".to_string());
        let palette = StatusPalette::new(&[Status::Healthy, other.clone()]);
        assert_ne!(palette.color_for(&other), Color32::GRAY);

        let unseen = Status::Other("Wilted".to_string());
        assert_eq!(palette.color_for(&unseen), Color32::GRAY);
    }

    #[test]
    fn every_tier_has_a_distinct_bar_colour() {
        let colours = [Tier::Low, Tier::Medium, Tier::High].map(severity_color);
        assert_ne!(colours[0], colours[1]);
        assert_ne!(colours[1], colours[2]);
    }
}
