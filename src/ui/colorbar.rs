use eframe::egui::{
    self, pos2, Align2, Color32, FontId, Rect, Sense, Stroke, StrokeKind, TextureHandle, Ui, Vec2,
};

use crate::figure::Colorbar;
use crate::state::format_value;

/// Room to the right of the bar for tick labels.
pub const LABEL_WIDTH: f32 = 56.0;
const TICK_LENGTH: f32 = 4.0;

/// Draw the vertical colorbar with its tick labels. `texture` is a
/// one-pixel-wide gradient with the maximum at the top.
pub fn colorbar(ui: &mut Ui, bar: &Colorbar, texture: &TextureHandle, size: Vec2) {
    let (rect, _) = ui.allocate_exact_size(size + Vec2::new(LABEL_WIDTH, 0.0), Sense::hover());
    let bar_rect = Rect::from_min_size(rect.min, size);

    let painter = ui.painter_at(rect);
    let uv = Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));
    painter.image(texture.id(), bar_rect, uv, Color32::WHITE);

    let text_color = ui.visuals().text_color();
    let stroke = Stroke::new(1.0, text_color);
    painter.rect_stroke(bar_rect, 0.0, stroke, StrokeKind::Inside);

    let scale = bar.scale;
    for &tick in &bar.ticks {
        // Flat scales put their only tick at the bottom, where value 0.0 maps.
        let t = scale.normalize(tick).unwrap_or(0.0) as f32;
        let y = egui::lerp(bar_rect.bottom()..=bar_rect.top(), t);
        let x = bar_rect.right();
        painter.line_segment([pos2(x, y), pos2(x + TICK_LENGTH, y)], stroke);
        painter.text(
            pos2(x + TICK_LENGTH + 2.0, y),
            Align2::LEFT_CENTER,
            format_value(tick),
            FontId::proportional(11.0),
            text_color,
        );
    }
}
