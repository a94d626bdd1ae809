use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Mix, Srgb};

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
            to_color32(Hsl::new(hue, 0.75, 0.55))
        })
        .collect()
}

/// Position `t` in `[0, 1]` on a light-to-dark red scale.
pub fn reds(t: f32) -> Color32 {
    let light = Hsl::new(0.0, 0.90, 0.85);
    let dark = Hsl::new(357.0, 0.85, 0.35);
    to_color32(light.mix(dark, t.clamp(0.0, 1.0)))
}

fn to_color32(hsl: Hsl) -> Color32 {
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

// ---------------------------------------------------------------------------
// Color mapping: content type → Color32
// ---------------------------------------------------------------------------

/// Brand colours for the two well-known types.
const FIXED: [(&str, Color32); 2] = [
    ("Movie", Color32::from_rgb(0xE5, 0x09, 0x14)),
    ("TV Show", Color32::from_rgb(0x00, 0x00, 0x00)),
];

/// Maps each content type to a series colour.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl ColorMap {
    /// Fixed colours where known, evenly spaced hues for the rest.
    pub fn new(kinds: &[String]) -> Self {
        let mut generated = generate_palette(kinds.len()).into_iter();
        let mapping = kinds
            .iter()
            .map(|kind| {
                let fallback = generated.next().unwrap_or(Color32::GRAY);
                let color = FIXED
                    .iter()
                    .find(|(name, _)| *name == kind.as_str())
                    .map(|(_, c)| *c)
                    .unwrap_or(fallback);
                (kind.clone(), color)
            })
            .collect();

        ColorMap {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a given type.
    pub fn color_for(&self, kind: &str) -> Color32 {
        self.mapping
            .get(kind)
            .copied()
            .unwrap_or(self.default_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_size() {
        assert!(generate_palette(0).is_empty());
        let colors = generate_palette(4);
        assert_eq!(colors.len(), 4);
        assert_ne!(colors[0], colors[2]);
    }

    #[test]
    fn known_types_use_brand_colours() {
        let kinds = vec!["Movie".to_string(), "TV Show".to_string(), "Special".to_string()];
        let map = ColorMap::new(&kinds);
        assert_eq!(map.color_for("Movie"), Color32::from_rgb(0xE5, 0x09, 0x14));
        assert_eq!(map.color_for("TV Show"), Color32::BLACK);
        assert_ne!(map.color_for("Special"), Color32::GRAY);
        assert_eq!(map.color_for("Podcast"), Color32::GRAY);
    }

    #[test]
    fn reds_darken_with_t() {
        let low = reds(0.0);
        let high = reds(1.0);
        let brightness = |c: Color32| c.r() as u32 + c.g() as u32 + c.b() as u32;
        assert!(brightness(low) > brightness(high));
    }
}
