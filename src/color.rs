use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Per-curve colors
// ---------------------------------------------------------------------------

/// Generate `n` visually distinct colors using evenly spaced hues, one per
/// sweep curve. Curve order in the file fixes the color assignment.
pub fn curve_palette(n: usize) -> Vec<Color32> {
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n.max(1) as f32) * 360.0;
            let rgb: Srgb = Hsl::new(hue, 0.70, 0.50).into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_one_color_per_curve() {
        assert!(curve_palette(0).is_empty());
        assert_eq!(curve_palette(7).len(), 7);
    }

    #[test]
    fn adjacent_curves_get_distinct_colors() {
        let palette = curve_palette(7);
        for pair in palette.windows(2) {
            assert_ne!(pair[0], pair[1]);
        }
    }
}
