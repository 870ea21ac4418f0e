// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The render pipeline: classify the cells of each enabled layer, build one
//! styled patch per cell and stack the layers onto a figure.

use std::error::Error;

use tracing::{debug, trace, warn};

use super::classify::{CellRole, classify};
use super::figure::{Figure, Patch, PatchCollection};
use super::geometry::{CoordinateMap, Point, cell_vertices};
use super::options::{LINE_WIDTH, PlotOptions, VERTEX_OUTLINE_WIDTH};
use super::palette::{Palette, RoleColors, VERTEX_OUTLINE};
use crate::ComplexLike;

/// A layer of the figure: the cells of one dimension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    /// The 2-dimensional cells.
    Faces,
    /// The 1-dimensional cells.
    Edges,
    /// The 0-dimensional cells.
    Vertices,
}

impl Layer {
    /// Layers in drawing order, bottom first.
    pub const DRAW_ORDER: [Layer; 3] = [Layer::Faces, Layer::Edges, Layer::Vertices];

    /// Dimension of the cells of the layer.
    #[must_use]
    pub fn dimension(self) -> u32 {
        match self {
            Self::Faces => 2,
            Self::Edges => 1,
            Self::Vertices => 0,
        }
    }

    /// Name of the layer, used to label its collection.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Faces => "faces",
            Self::Edges => "edges",
            Self::Vertices => "vertices",
        }
    }

    /// Check if the options enable drawing this layer.
    #[must_use]
    pub fn enabled(self, options: &PlotOptions) -> bool {
        match self {
            Self::Faces => options.plot_faces,
            Self::Edges => options.plot_edges,
            Self::Vertices => options.plot_verts,
        }
    }

    /// The palette entry of this layer.
    #[must_use]
    pub fn colors(self, palette: &Palette) -> &RoleColors {
        match self {
            Self::Faces => &palette.faces,
            Self::Edges => &palette.edges,
            Self::Vertices => &palette.vertices,
        }
    }

    /// Outline width of the layer's collection, in points.
    #[must_use]
    pub fn line_width(self) -> f64 {
        match self {
            Self::Vertices => VERTEX_OUTLINE_WIDTH,
            Self::Faces | Self::Edges => LINE_WIDTH,
        }
    }

    /// The patch drawn for a cell of this layer.
    ///
    /// Vertices are disks outlined in black, edges are two-point polygons
    /// filled and stroked in the role color, and faces are filled polygons
    /// without outline.
    #[must_use]
    pub fn patch<Cell>(self, cell: &RenderCell<Cell>, options: &PlotOptions) -> Patch {
        let color = self.colors(&options.palette).color(cell.role).to_string();
        match self {
            Self::Vertices => Patch::Circle {
                center: cell.vertices[0],
                radius: options.vertex_radius(),
                fill: color,
                stroke: Some(VERTEX_OUTLINE.to_string()),
            },
            Self::Edges => Patch::Polygon {
                points: cell.vertices.clone(),
                fill: color.clone(),
                stroke: Some(color),
            },
            Self::Faces => Patch::Polygon {
                points: cell.vertices.clone(),
                fill: color,
                stroke: None,
            },
        }
    }
}

/// A cell of the complex together with its role and its points in the plane.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderCell<Cell> {
    /// The cell.
    pub cell: Cell,
    /// Role of the cell.
    pub role: CellRole,
    /// Real coordinates of the vertices of the cell.
    pub vertices: Vec<Point>,
}

/// Classify and place every cell of `dimension`, in the order of
/// [`ComplexLike::cells`].
pub fn render_cells<C: ComplexLike>(
    complex: &C,
    dimension: u32,
    coordinate_map: CoordinateMap,
) -> Vec<RenderCell<C::Cell>> {
    complex
        .cells(dimension)
        .map(|cell| {
            let role = classify(complex, &cell);
            let vertices = cell_vertices(complex, &cell, coordinate_map);
            trace!("Classified cell {cell:?} as {role}");
            RenderCell {
                cell,
                role,
                vertices,
            }
        })
        .collect()
}

/// Build the patch collection of one layer.
pub fn build_collection<C: ComplexLike>(
    complex: &C,
    layer: Layer,
    options: &PlotOptions,
) -> PatchCollection {
    let cells = render_cells(complex, layer.dimension(), CoordinateMap::new(options.blowup));

    let count = |role: CellRole| cells.iter().filter(|cell| cell.role == role).count();
    debug!(
        "Rendering {} {}: {} fringe, {} boundary, {} interior",
        cells.len(),
        layer.name(),
        count(CellRole::Fringe),
        count(CellRole::Boundary),
        count(CellRole::Interior)
    );

    let patches = cells.iter().map(|cell| layer.patch(cell, options)).collect();
    PatchCollection::new(layer.name(), patches, layer.line_width())
}

/// Build the figure of a 2-dimensional complex without saving it.
///
/// # Panics
/// Panics if the complex is not 2-dimensional.
pub fn build_figure<C: ComplexLike>(complex: &C, options: &PlotOptions) -> Figure {
    assert_eq!(
        complex.dimension(),
        2,
        "Only 2-dimensional complexes can be plotted"
    );

    let mut figure = Figure::new(options.fig_width, options.fig_height);
    figure.axes.show_frame = options.plot_axis;
    figure.axes.fontsize = options.fontsize;
    if options.plot_axis && options.axis_labels {
        figure.axes.xlabel = Some(options.xlabel.clone());
        figure.axes.ylabel = Some(options.ylabel.clone());
    }

    let layers: Vec<Layer> = Layer::DRAW_ORDER
        .into_iter()
        .filter(|layer| layer.enabled(options))
        .collect();
    if layers.is_empty() {
        warn!("Faces, edges and vertices are all disabled; the figure will be empty");
    }
    for layer in layers {
        figure
            .axes
            .add_collection(build_collection(complex, layer, options));
    }
    figure
}

/// Plot a 2-dimensional complex, coloring each cell by its [`CellRole`], and
/// save the figure to `options.fig_fname` if it is set.
///
/// # Examples
///
/// ```rust
/// use chomp3rs_plot::{CubicalComplex, Orthant, PlotOptions, plot_cubical_complex_2d};
///
/// let complex = CubicalComplex::new(Orthant::from([0, 0]), Orthant::from([2, 2]));
/// let options = PlotOptions {
///     plot_faces: false,
///     plot_edges: false,
///     ..PlotOptions::default()
/// };
///
/// let figure = plot_cubical_complex_2d(&complex, &options).unwrap();
/// assert_eq!(figure.axes.collections.len(), 1);
/// assert_eq!(figure.axes.collections[0].patches.len(), 9);
/// ```
///
/// # Panics
/// Panics if the complex is not 2-dimensional.
pub fn plot_cubical_complex_2d<C: ComplexLike>(
    complex: &C,
    options: &PlotOptions,
) -> Result<Figure, Box<dyn Error>> {
    let figure = build_figure(complex, options);
    if let Some(path) = &options.fig_fname {
        figure.save(path, options.dpi)?;
    }
    Ok(figure)
}
