use eframe::egui::{RichText, TextureHandle, Ui, Vec2};

use crate::figure::{PANEL_GAP, TITLE_HEIGHT};
use crate::state::AppState;
use crate::ui::{colorbar, plot};

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the summary line above the figure.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.strong("Brush variants");
        ui.separator();
        ui.label(state.summary());
    });
}

// ---------------------------------------------------------------------------
// Status bar – cursor readout
// ---------------------------------------------------------------------------

pub fn status_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| match state.readout() {
        Some(text) => {
            ui.monospace(text);
        }
        None => {
            ui.weak("Hover a cell to read its value");
        }
    });
}

// ---------------------------------------------------------------------------
// Figure row – panels followed by one colorbar
// ---------------------------------------------------------------------------

/// Lay out every panel left to right with the shared colorbar at the end.
/// Updates `state.hover` with the cell under the pointer.
pub fn figure_row(
    ui: &mut Ui,
    state: &mut AppState,
    panel_textures: &[TextureHandle],
    colorbar_texture: &TextureHandle,
) {
    let available = ui.available_size();
    let layout = state
        .figure
        .layout(available.x - colorbar::LABEL_WIDTH);
    let side = layout
        .panel_width
        .min(available.y - TITLE_HEIGHT)
        .max(1.0);

    let mut hover = None;
    let figure = &state.figure;

    ui.horizontal_top(|ui: &mut Ui| {
        ui.spacing_mut().item_spacing.x = PANEL_GAP;

        for (position, (panel, texture)) in figure.panels.iter().zip(panel_textures).enumerate() {
            ui.allocate_ui(Vec2::new(layout.panel_width, side + TITLE_HEIGHT), |ui: &mut Ui| {
                ui.vertical_centered(|ui: &mut Ui| {
                    ui.label(RichText::new(&panel.title).strong());
                    let size = Vec2::new(layout.panel_width, side);
                    if let Some(cell) = plot::heatmap(ui, position, panel, texture, size) {
                        hover = Some(cell);
                    }
                });
            });
        }

        ui.add_space((layout.pad - PANEL_GAP).max(0.0));
        ui.vertical(|ui: &mut Ui| {
            ui.add_space(TITLE_HEIGHT);
            colorbar::colorbar(
                ui,
                &figure.colorbar,
                colorbar_texture,
                Vec2::new(layout.colorbar_width.max(4.0), side),
            );
        });
    });

    state.hover = hover;
}
