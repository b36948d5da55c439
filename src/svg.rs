//! Tiled SVG swatch rendering for visual palette inspection.

use crate::color::HexColor;

/// Layout of the swatch grid.
#[derive(Clone, Copy, Debug)]
pub struct SwatchLayout {
    /// Number of rows in the grid (at least 1).
    pub rows: usize,
    /// Side of each square tile, in pixels.
    pub tile_size: usize,
    /// Padding between tiles, in pixels.
    pub gap_size: usize,
    /// Border margin around the grid, in pixels.
    pub border_size: usize,
}

impl Default for SwatchLayout {
    fn default() -> Self {
        SwatchLayout { rows: 3, tile_size: 45, gap_size: 15, border_size: 15 }
    }
}

impl SwatchLayout {
    /// Canvas size for `n` colors.
    ///
    /// `n / rows` truncates, so the canvas of a color count not
    /// divisible by `rows` is sized for the shorter rows and the
    /// trailing tiles fall outside it.
    fn dimensions(&self, n: usize) -> (usize, usize) {
        let rows = self.rows.max(1);
        let tiles_per_row = n / rows;
        let width = tiles_per_row * self.tile_size
            + (tiles_per_row + 1) * self.gap_size
            + 2 * self.border_size;
        let height = rows * self.tile_size
            + (rows + 1) * self.gap_size
            + 2 * self.border_size;
        (width, height)
    }
}

/// Render `colors` as an SVG image of square tiles in row-major order.
/// The first color doubles as the full-canvas background fill.
pub fn swatch_svg(colors: &[HexColor], layout: &SwatchLayout) -> String {
    let rows = layout.rows.max(1);
    let (width, height) = layout.dimensions(colors.len());
    let mut svg = vec![
        r#"<?xml version="1.0" encoding="UTF-8" ?>"#.to_string(),
        format!(r#"<svg width="{width}" height="{height}" xmlns="http://www.w3.org/2000/svg">"#),
    ];
    if let Some(background) = colors.first() {
        svg.push(format!(
            r#"<rect x="0" y="0" width="{width}" height="{height}" style="fill:{background}" />"#
        ));
    }

    let tiles_per_row = colors.len() / rows;
    if tiles_per_row > 0 {
        let step = layout.tile_size + layout.gap_size;
        let origin = layout.border_size + layout.gap_size;
        for (index, color) in colors.iter().enumerate() {
            let x = origin + (index % tiles_per_row) * step;
            let y = origin + (index / tiles_per_row) * step;
            svg.push(format!(
                r#"<rect x="{x}" y="{y}" width="{t}" height="{t}" style="fill:{color}" />"#,
                t = layout.tile_size
            ));
        }
    }
    svg.push("</svg>".to_string());
    svg.join("\n")
}
