use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::Species;

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
            to_color32(hsl)
        })
        .collect()
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
// Species colors – fixed assignment shared by every chart
// ---------------------------------------------------------------------------

/// Maps each species to a distinct colour.
#[derive(Debug, Clone)]
pub struct SpeciesColors {
    mapping: BTreeMap<Species, Color32>,
}

impl SpeciesColors {
    pub fn new() -> Self {
        let palette = generate_palette(Species::ALL.len());
        let mapping = Species::ALL.iter().copied().zip(palette).collect();
        SpeciesColors { mapping }
    }

    /// Colour for a species. Grey fallback keeps a render going even if the
    /// mapping were ever incomplete.
    pub fn color_for(&self, species: Species) -> Color32 {
        self.mapping.get(&species).copied().unwrap_or(Color32::GRAY)
    }

    /// Legend entries (species label → colour) for the side panel.
    pub fn legend_entries(&self) -> Vec<(&'static str, Color32)> {
        self.mapping
            .iter()
            .map(|(species, color)| (species.label(), *color))
            .collect()
    }
}

impl Default for SpeciesColors {
    fn default() -> Self {
        SpeciesColors::new()
    }
}

// ---------------------------------------------------------------------------
// Diverging ramp for the correlation heatmap
// ---------------------------------------------------------------------------

/// Blue–white–red ramp for a correlation coefficient in [-1, 1]: white at
/// zero, saturating toward blue for negative and red for positive values.
pub fn diverging_color(r: f64) -> Color32 {
    let r = if r.is_nan() { 0.0 } else { r.clamp(-1.0, 1.0) };
    let strength = r.abs() as f32;
    let hue = if r < 0.0 { 230.0 } else { 5.0 };
    let hsl = Hsl::new(hue, 0.85 * strength, 0.96 - 0.42 * strength);
    to_color32(hsl)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn palette_generates_distinct_colors() {
        let palette = generate_palette(3);
        assert_eq!(palette.len(), 3);
        assert_ne!(palette[0], palette[1]);
        assert_ne!(palette[1], palette[2]);
        assert_ne!(palette[0], palette[2]);
    }

    #[test]
    fn empty_palette_for_zero() {
        assert!(generate_palette(0).is_empty());
    }

    #[test]
    fn every_species_has_a_color() {
        let colors = SpeciesColors::new();
        assert_eq!(colors.legend_entries().len(), Species::ALL.len());
        assert_ne!(
            colors.color_for(Species::Setosa),
            colors.color_for(Species::Virginica)
        );
    }

    #[test]
    fn diverging_ramp_is_near_white_at_zero() {
        let zero = diverging_color(0.0);
        assert!(zero.r() > 230 && zero.g() > 230 && zero.b() > 230);
    }

    #[test]
    fn diverging_ramp_ends_are_warm_and_cool() {
        let pos = diverging_color(1.0);
        let neg = diverging_color(-1.0);
        assert!(pos.r() > pos.b());
        assert!(neg.b() > neg.r());
    }

    #[test]
    fn diverging_ramp_tolerates_nan() {
        // NaN coefficient (zero-variance column) renders as the neutral cell.
        assert_eq!(diverging_color(f64::NAN), diverging_color(0.0));
    }
}
