// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::palette::Palette;

/// Line width, in points, of edges and faces.
pub const LINE_WIDTH: f64 = 2.0;

/// Line width, in points, of vertex outlines.
pub const VERTEX_OUTLINE_WIDTH: f64 = 1.0;

/// Options for [`plot_cubical_complex_2d`](crate::plot_cubical_complex_2d).
///
/// Every field has a default, and deserialization fills in the defaults of
/// missing fields, so a JSON document only needs to name what it changes.
///
/// # Examples
///
/// ```rust
/// use chomp3rs_plot::PlotOptions;
///
/// let options = PlotOptions::from_json(r#"{"blowup": true, "plot_edges": false}"#).unwrap();
/// assert!(options.blowup);
/// assert!(!options.plot_edges);
/// assert_eq!(options.fig_width, 7.0);
/// assert_eq!(options.dpi, 300);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotOptions {
    /// Figure width in inches.
    pub fig_width: f64,
    /// Figure height in inches.
    pub fig_height: f64,
    /// Draw the 2-dimensional cells.
    pub plot_faces: bool,
    /// Draw the 1-dimensional cells.
    pub plot_edges: bool,
    /// Draw the 0-dimensional cells.
    pub plot_verts: bool,
    /// Map lattice coordinates with the blowup mapping, which alternates
    /// narrow and wide cells.
    pub blowup: bool,
    /// Show the axis frame, ticks and labels.
    pub plot_axis: bool,
    /// Show the axis labels when the axis is shown.
    pub axis_labels: bool,
    /// Label of the horizontal axis. A label wrapped in `$` is set in italics.
    pub xlabel: String,
    /// Label of the vertical axis. A label wrapped in `$` is set in italics.
    pub ylabel: String,
    /// Font size, in points, of the axis labels and tick labels.
    pub fontsize: f64,
    /// File to save the figure to. Files ending in `.png` are rasterized;
    /// anything else is written as SVG.
    pub fig_fname: Option<PathBuf>,
    /// Resolution of rasterized figures, in dots per inch.
    pub dpi: u32,
    /// Colors of the cells.
    pub palette: Palette,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            fig_width: 7.0,
            fig_height: 7.0,
            plot_faces: true,
            plot_edges: true,
            plot_verts: true,
            blowup: false,
            plot_axis: false,
            axis_labels: true,
            xlabel: "$x$".to_string(),
            ylabel: "$y$".to_string(),
            fontsize: 15.0,
            fig_fname: None,
            dpi: 300,
            palette: Palette::default(),
        }
    }
}

impl PlotOptions {
    /// Parse options from a JSON document. Missing fields take their default
    /// values.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Radius of vertex markers in data units. Markers are smaller in blowup
    /// mode, where the narrow cells are half a unit wide.
    #[must_use]
    pub fn vertex_radius(&self) -> f64 {
        if self.blowup { 0.08 } else { 0.1 }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn test_defaults() {
        let options = PlotOptions::default();
        assert_eq!((options.fig_width, options.fig_height), (7.0, 7.0));
        assert!(options.plot_faces && options.plot_edges && options.plot_verts);
        assert!(!options.blowup);
        assert!(!options.plot_axis);
        assert!(options.axis_labels);
        assert_eq!(options.xlabel, "$x$");
        assert_eq!(options.fontsize, 15.0);
        assert_eq!(options.fig_fname, None);
        assert_eq!(options.vertex_radius(), 0.1);
    }

    #[test]
    fn test_from_json() {
        let options = PlotOptions::from_json(
            r#"{"fig_fname": "out/grid.png", "dpi": 150, "blowup": true, "palette": {"vertices": {"fringe": "gray", "boundary": "orange", "interior": "green"}}}"#,
        )
        .unwrap();

        assert_eq!(options.fig_fname.as_deref(), Some(Path::new("out/grid.png")));
        assert_eq!(options.dpi, 150);
        assert_eq!(options.vertex_radius(), 0.08);
        assert_eq!(options.palette.vertices.interior, "green");
        assert_eq!(options.palette.edges, Palette::default().edges);
    }

    #[test]
    fn test_from_json_rejects_wrong_types() {
        assert!(PlotOptions::from_json(r#"{"dpi": "high"}"#).is_err());
    }
}
