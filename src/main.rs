mod app;
mod color;
mod data;
mod figure;
mod state;
mod ui;

use std::path::Path;

use anyhow::Context;
use app::BrushVariantsApp;
use eframe::egui;
use figure::Figure;
use state::AppState;

/// Folder holding the `brush_variant_<N>.csv` grids, relative to the
/// working directory.
const DATA_FOLDER: &str = "array_thermalbrush";

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        log::error!("{e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let (variants, scale) = data::load_folder(Path::new(DATA_FOLDER))
        .with_context(|| format!("loading brush variants from {DATA_FOLDER}/"))?;

    let figure = Figure::new(&variants, scale);
    log::info!("Rendering {} panels", figure.panels.len());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(figure.window_size())
            .with_min_inner_size([300.0, 200.0]),
        ..Default::default()
    };

    let state = AppState::new(figure, DATA_FOLDER);

    // Blocks until the window is closed.
    eframe::run_native(
        "Brush Variants",
        options,
        Box::new(move |cc| Ok(Box::new(BrushVariantsApp::new(cc, state)))),
    )
    .map_err(display_error)
}

/// Keep the full debug form so nested causes survive into the log.
fn display_error(e: impl std::fmt::Debug) -> anyhow::Error {
    anyhow::anyhow!("display failed: {e:?}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_error_keeps_inner_cause() {
        let inner = std::io::Error::new(std::io::ErrorKind::Other, "no display server");
        let err = display_error(inner);
        let text = format!("{err:#}");
        assert!(text.starts_with("display failed: "), "{text}");
        assert!(text.contains("no display server"), "{text}");
    }
}
