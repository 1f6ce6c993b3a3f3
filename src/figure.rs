use eframe::egui::{Color32, ColorImage, Vec2};

use crate::color;
use crate::data::model::{GlobalScale, Variant, VariantArray};

/// Logical pixels per panel edge (3-inch panels at 100 dpi).
pub const PANEL_SIZE: f32 = 300.0;
/// Share of the panel row's width given to the colorbar.
pub const COLORBAR_FRACTION: f32 = 0.046;
/// Share of the panel row's width left between panels and colorbar.
pub const COLORBAR_PAD: f32 = 0.04;
/// Gap between neighbouring panels.
pub const PANEL_GAP: f32 = 8.0;
/// Height reserved above each panel for its title.
pub const TITLE_HEIGHT: f32 = 22.0;

const MAX_TICKS: usize = 6;

// ---------------------------------------------------------------------------
// Render model
// ---------------------------------------------------------------------------

/// One heatmap panel, already coloured with the figure's scale.
#[derive(Clone)]
pub struct Panel {
    /// `Variant {position}` in render order.
    pub title: String,
    /// Name of the file the grid came from.
    pub source: String,
    /// Index embedded in the source file name.
    pub file_index: u64,
    pub rows: usize,
    pub cols: usize,
    /// Bounds this panel was normalised against.
    pub norm: GlobalScale,
    /// One pixel per cell, row 0 on top.
    pub image: ColorImage,
    array: VariantArray,
}

impl Panel {
    fn new(position: usize, variant: &Variant, norm: GlobalScale) -> Self {
        let array = &variant.array;

        let rgba: Vec<u8> = array
            .values()
            .iter()
            .flat_map(|&v| {
                norm.normalize(v)
                    .map(color::hot)
                    .unwrap_or(Color32::TRANSPARENT)
                    .to_array()
            })
            .collect();

        Panel {
            title: format!("Variant {position}"),
            source: variant.file.file_name(),
            file_index: variant.file.index,
            rows: array.rows(),
            cols: array.cols(),
            norm,
            image: ColorImage::from_rgba_unmultiplied([array.cols(), array.rows()], &rgba),
            array: array.clone(),
        }
    }

    /// Raw value of the cell at `(row, col)`.
    pub fn value(&self, row: usize, col: usize) -> Option<f64> {
        self.array.get(row, col)
    }

    /// Cell under a point in plot coordinates, where the grid spans
    /// `x ∈ [0, cols]` and `y ∈ [0, rows]` with row 0 at the top.
    pub fn cell_at(&self, x: f64, y: f64) -> Option<(usize, usize)> {
        if x < 0.0 || y < 0.0 || x >= self.cols as f64 || y >= self.rows as f64 {
            return None;
        }
        let col = x.floor() as usize;
        let row = self.rows - 1 - y.floor() as usize;
        Some((row, col))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Vertical,
}

/// The single legend shared by every panel.
#[derive(Debug, Clone)]
pub struct Colorbar {
    pub scale: GlobalScale,
    pub orientation: Orientation,
    pub fraction: f32,
    pub pad: f32,
    pub ticks: Vec<f64>,
}

/// Everything the window draws: a row of panels and one colorbar.
#[derive(Clone)]
pub struct Figure {
    pub panels: Vec<Panel>,
    pub colorbar: Colorbar,
}

impl Figure {
    /// Build one panel per variant, in order, all normalised to `scale`.
    pub fn new(variants: &[Variant], scale: GlobalScale) -> Self {
        let panels = variants
            .iter()
            .enumerate()
            .map(|(position, variant)| Panel::new(position, variant, scale))
            .collect();

        Figure {
            panels,
            colorbar: Colorbar {
                scale,
                orientation: Orientation::Vertical,
                fraction: COLORBAR_FRACTION,
                pad: COLORBAR_PAD,
                ticks: nice_ticks(scale.min, scale.max, MAX_TICKS),
            },
        }
    }

    /// Initial window size: one square panel per variant plus the colorbar.
    pub fn window_size(&self) -> Vec2 {
        let n = self.panels.len().max(1) as f32;
        let row = PANEL_SIZE * n + PANEL_GAP * (n - 1.0);
        let width = row / (1.0 - self.colorbar.fraction - self.colorbar.pad);
        // Room for the top and bottom bars and the colorbar labels.
        Vec2::new(width + 80.0, PANEL_SIZE + TITLE_HEIGHT + 80.0)
    }

    /// Split `width` between panels, pad and colorbar.
    pub fn layout(&self, width: f32) -> FigureLayout {
        let width = width.max(0.0);
        let colorbar_width = width * self.colorbar.fraction;
        let pad = width * self.colorbar.pad;

        let n = self.panels.len().max(1) as f32;
        let gaps = PANEL_GAP * (n - 1.0);
        let panel_width = ((width - colorbar_width - pad - gaps) / n).max(0.0);

        FigureLayout {
            panel_width,
            pad,
            colorbar_width,
        }
    }
}

/// Horizontal sizes for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FigureLayout {
    pub panel_width: f32,
    pub pad: f32,
    pub colorbar_width: f32,
}

// ---------------------------------------------------------------------------
// Colorbar ticks
// ---------------------------------------------------------------------------

/// Up to `max_ticks` round values (1, 2, 2.5 or 5 × 10^k steps) inside
/// `[min, max]`. A flat or non-finite range gets a single tick at `min`.
pub fn nice_ticks(min: f64, max: f64, max_ticks: usize) -> Vec<f64> {
    let range = max - min;
    if !(range.is_finite() && range > 0.0) || max_ticks < 2 {
        return vec![min];
    }

    let raw_step = range / (max_ticks - 1) as f64;
    let magnitude = 10f64.powf(raw_step.log10().floor());
    let step = [1.0, 2.0, 2.5, 5.0, 10.0]
        .iter()
        .map(|m| m * magnitude)
        .find(|s| range / s <= (max_ticks - 1) as f64)
        .unwrap_or(10.0 * magnitude);

    // Round away float noise such as 0.6000000000000001.
    let decimals = (-step.log10().floor()).max(0.0) + 1.0;
    let scale = 10f64.powf(decimals);
    // Subnormal ranges underflow the step or overflow the rounding scale.
    if !step.is_normal() || !scale.is_normal() {
        return vec![min, max];
    }

    let first = (min / step).ceil() as i64;
    let last = (max / step).floor() as i64;
    (first..=last)
        .map(|k| (k as f64 * step * scale).round() / scale)
        .collect()
}
