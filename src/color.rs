use eframe::egui::Color32;
use palette::{Mix, Srgb};

// ---------------------------------------------------------------------------
// "hot" colormap: black → red → yellow → white
// ---------------------------------------------------------------------------

/// Piecewise-linear stops of the `hot` scheme. Only one channel ramps
/// between neighbouring stops.
const HOT_STOPS: [(f32, [f32; 3]); 4] = [
    (0.0, [0.0, 0.0, 0.0]),
    (0.365079, [1.0, 0.0, 0.0]),
    (0.746032, [1.0, 1.0, 0.0]),
    (1.0, [1.0, 1.0, 1.0]),
];

/// Colour for a normalised value; `t` is clamped to `0.0..=1.0`.
pub fn hot(t: f64) -> Color32 {
    let t = (t as f32).clamp(0.0, 1.0);

    let upper = HOT_STOPS
        .iter()
        .position(|(pos, _)| t <= *pos)
        .unwrap_or(HOT_STOPS.len() - 1)
        .max(1);
    let (p0, c0) = HOT_STOPS[upper - 1];
    let (p1, c1) = HOT_STOPS[upper];

    let factor = (t - p0) / (p1 - p0);
    let rgb = Srgb::new(c0[0], c0[1], c0[2]).mix(Srgb::new(c1[0], c1[1], c1[2]), factor);
    to_color32(rgb)
}

fn to_color32(rgb: Srgb) -> Color32 {
    Color32::from_rgb(
        (rgb.red * 255.0).round() as u8,
        (rgb.green * 255.0).round() as u8,
        (rgb.blue * 255.0).round() as u8,
    )
}

/// `n` colours sampled evenly from the colormap, top (1.0) first. Used as a
/// one-pixel-wide colorbar texture.
pub fn gradient(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![hot(1.0)];
    }
    (0..n)
        .map(|i| hot(1.0 - i as f64 / (n - 1) as f64))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_points() {
        assert_eq!(hot(0.0), Color32::BLACK);
        assert_eq!(hot(1.0), Color32::WHITE);
        assert_eq!(hot(-5.0), Color32::BLACK);
        assert_eq!(hot(5.0), Color32::WHITE);
    }

    #[test]
    fn passes_through_red_and_yellow() {
        assert_eq!(hot(0.365079), Color32::from_rgb(255, 0, 0));
        assert_eq!(hot(0.746032), Color32::from_rgb(255, 255, 0));
    }

    #[test]
    fn one_channel_ramps_per_segment() {
        let c = hot(0.2);
        assert!(c.r() > 0 && c.r() < 255);
        assert_eq!((c.g(), c.b()), (0, 0));

        let c = hot(0.5);
        assert_eq!((c.r(), c.b()), (255, 0));
        assert!(c.g() > 0 && c.g() < 255);
    }

    #[test]
    fn brightness_is_monotonic() {
        let sum = |c: Color32| c.r() as u32 + c.g() as u32 + c.b() as u32;
        let samples: Vec<u32> = (0..=100).map(|i| sum(hot(i as f64 / 100.0))).collect();
        assert!(samples.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn gradient_runs_top_down() {
        let g = gradient(256);
        assert_eq!(g.len(), 256);
        assert_eq!(g[0], Color32::WHITE);
        assert_eq!(g[255], Color32::BLACK);
    }
}
