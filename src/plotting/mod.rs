// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

pub use classify::{CellRole, classify, is_boundary, is_fringe, star_touches_fringe};
pub use figure::{Axes, AxesLayout, Bounds, Figure, POINTS_PER_INCH, Patch, PatchCollection};
pub use geometry::{CELL_WIDTH, CoordinateMap, Point, cell_vertices};
pub use options::{LINE_WIDTH, PlotOptions, VERTEX_OUTLINE_WIDTH};
pub use palette::{Palette, RoleColors, VERTEX_OUTLINE};
pub use render::{
    Layer, RenderCell, build_collection, build_figure, plot_cubical_complex_2d, render_cells,
};
pub use svg::{SvgDocument, nice_ticks, render_svg};

mod classify;
mod figure;
mod geometry;
mod options;
mod palette;
mod raster;
mod render;
mod svg;
