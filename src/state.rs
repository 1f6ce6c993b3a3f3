use crate::figure::Figure;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Cell under the pointer, as shown in the status bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellReadout {
    pub panel: usize,
    pub row: usize,
    pub col: usize,
    pub value: f64,
}

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Everything to draw; built once before the window opens.
    pub figure: Figure,

    /// Folder the variants were read from, for the top bar.
    pub folder: String,

    /// Cell currently under the pointer (cleared every frame).
    pub hover: Option<CellReadout>,
}

impl AppState {
    pub fn new(figure: Figure, folder: impl Into<String>) -> Self {
        Self {
            figure,
            folder: folder.into(),
            hover: None,
        }
    }

    /// One-line summary for the top bar.
    pub fn summary(&self) -> String {
        let scale = self.figure.colorbar.scale;
        let n = self.figure.panels.len();
        format!(
            "{n} {} from {}/   scale [{}, {}]",
            if n == 1 { "variant" } else { "variants" },
            self.folder,
            format_value(scale.min),
            format_value(scale.max),
        )
    }

    /// Status bar text for the hovered cell, if any.
    pub fn readout(&self) -> Option<String> {
        let hover = self.hover?;
        let panel = self.figure.panels.get(hover.panel)?;
        Some(format!(
            "{}  [{}, {}] = {}",
            panel.title,
            hover.row,
            hover.col,
            format_value(hover.value)
        ))
    }
}

/// Compact number formatting shared by the status bar and colorbar labels.
pub fn format_value(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    let abs = v.abs();
    if !(1e-3..1e5).contains(&abs) {
        format!("{v:.3e}")
    } else {
        let s = format!("{v:.4}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{GlobalScale, Variant, VariantArray, VariantFile};
    use std::path::PathBuf;

    fn state() -> AppState {
        let variants = vec![Variant {
            file: VariantFile {
                index: 4,
                path: PathBuf::from("brush_variant_4.csv"),
            },
            array: VariantArray::from_rows(vec![vec![0.5, 2.0]]),
        }];
        let figure = Figure::new(&variants, GlobalScale { min: 0.5, max: 2.0 });
        AppState::new(figure, "array_thermalbrush")
    }

    #[test]
    fn summary_names_folder_and_scale() {
        assert_eq!(
            state().summary(),
            "1 variant from array_thermalbrush/   scale [0.5, 2]"
        );
    }

    #[test]
    fn summary_pluralizes_variant_count() {
        let variants: Vec<Variant> = (0..2)
            .map(|i| Variant {
                file: VariantFile {
                    index: i,
                    path: PathBuf::from(format!("brush_variant_{i}.csv")),
                },
                array: VariantArray::from_rows(vec![vec![i as f64]]),
            })
            .collect();
        let figure = Figure::new(&variants, GlobalScale { min: 0.0, max: 1.0 });
        let st = AppState::new(figure, "array_thermalbrush");
        assert!(st.summary().starts_with("2 variants from "), "{}", st.summary());
    }

    #[test]
    fn readout_uses_panel_title() {
        let mut st = state();
        assert_eq!(st.readout(), None);
        st.hover = Some(CellReadout {
            panel: 0,
            row: 0,
            col: 1,
            value: 2.0,
        });
        assert_eq!(st.readout().as_deref(), Some("Variant 0  [0, 1] = 2"));
    }

    #[test]
    fn format_value_is_compact() {
        assert_eq!(format_value(0.0), "0");
        assert_eq!(format_value(10.0), "10");
        assert_eq!(format_value(-1.25), "-1.25");
        assert_eq!(format_value(0.33333333), "0.3333");
        assert_eq!(format_value(123456.0), "1.235e5");
    }
}
