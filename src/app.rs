use eframe::egui::{self, ColorImage, TextureHandle, TextureOptions};

use crate::color;
use crate::state::AppState;
use crate::ui::panels;

/// Vertical resolution of the colorbar gradient texture.
const COLORBAR_STEPS: usize = 256;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct BrushVariantsApp {
    pub state: AppState,
    panel_textures: Vec<TextureHandle>,
    colorbar_texture: TextureHandle,
}

impl BrushVariantsApp {
    /// Upload one nearest-filtered texture per panel plus the colorbar
    /// gradient. Everything is static after this.
    pub fn new(cc: &eframe::CreationContext<'_>, state: AppState) -> Self {
        let ctx = &cc.egui_ctx;

        let panel_textures = state
            .figure
            .panels
            .iter()
            .enumerate()
            .map(|(i, panel)| {
                ctx.load_texture(
                    format!("variant_{i}"),
                    panel.image.clone(),
                    TextureOptions::NEAREST,
                )
            })
            .collect();

        let rgba: Vec<u8> = color::gradient(COLORBAR_STEPS)
            .into_iter()
            .flat_map(|c| c.to_array())
            .collect();
        let gradient = ColorImage::from_rgba_unmultiplied([1, COLORBAR_STEPS], &rgba);
        let colorbar_texture = ctx.load_texture("colorbar", gradient, TextureOptions::LINEAR);

        Self {
            state,
            panel_textures,
            colorbar_texture,
        }
    }
}

impl eframe::App for BrushVariantsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: summary ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Bottom panel: cursor readout ----
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            panels::status_bar(ui, &self.state);
        });

        // ---- Central panel: heatmaps + colorbar ----
        egui::CentralPanel::default().show(ctx, |ui| {
            panels::figure_row(
                ui,
                &mut self.state,
                &self.panel_textures,
                &self.colorbar_texture,
            );
        });
    }
}
