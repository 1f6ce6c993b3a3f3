use eframe::egui::{TextureHandle, Ui, Vec2};
use egui_plot::{Plot, PlotImage, PlotPoint};

use crate::figure::Panel;
use crate::state::CellReadout;

// ---------------------------------------------------------------------------
// Heatmap panel
// ---------------------------------------------------------------------------

/// Draw one panel's grid into a `size` area and return the cell under the
/// pointer, if any. Axes, grid and navigation are off; cells stay square.
pub fn heatmap(
    ui: &mut Ui,
    position: usize,
    panel: &Panel,
    texture: &TextureHandle,
    size: Vec2,
) -> Option<CellReadout> {
    let cols = panel.cols as f64;
    let rows = panel.rows as f64;

    let response = Plot::new(("heatmap", position))
        .width(size.x)
        .height(size.y)
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .show_background(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .allow_double_click_reset(false)
        .include_x(0.0)
        .include_x(cols)
        .include_y(0.0)
        .include_y(rows)
        .show(ui, |plot_ui| {
            plot_ui.image(PlotImage::new(
                texture.id(),
                PlotPoint::new(cols / 2.0, rows / 2.0),
                Vec2::new(cols as f32, rows as f32),
            ));

            let pointer = plot_ui.pointer_coordinate()?;
            let (row, col) = panel.cell_at(pointer.x, pointer.y)?;
            Some(CellReadout {
                panel: position,
                row,
                col,
                value: panel.value(row, col)?,
            })
        });

    let source = format!("{} (index {})", panel.source, panel.file_index);
    response.response.on_hover_text(source);
    response.inner
}
