// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `chomp3rs_plot` crate draws two-dimensional cell complexes, coloring
//! every cell by whether it lies in the fringe padding the complex, on the
//! boundary next to that padding, or in the interior.
//!
//! Complexes are read through the [`ComplexLike`] trait, implemented here by
//! the periodic [`CubicalComplex`] and the explicit [`CellComplex`]. Figures
//! are returned as [`Figure`] values and may be written as SVG or PNG files.
//!
//! ```rust
//! use chomp3rs_plot::{CubicalComplex, Orthant, PlotOptions, build_figure};
//!
//! let complex = CubicalComplex::new(Orthant::from([0, 0]), Orthant::from([4, 4]));
//! let figure = build_figure(&complex, &PlotOptions::default());
//!
//! assert_eq!(figure.axes.collections.len(), 3);
//! assert!(figure.to_svg().contains("<polygon"));
//! ```

#![warn(missing_docs)]

pub use crate::complexes::{
    CellComplex, CellRangeIterator, ComplexLike, Cube, CubeIterator, CubicalComplex, Orthant,
    OrthantIterator,
};
pub use crate::plotting::{
    Axes, AxesLayout, Bounds, CELL_WIDTH, CellRole, CoordinateMap, Figure, LINE_WIDTH, Layer,
    POINTS_PER_INCH, Palette, Patch, PatchCollection, PlotOptions, Point, RenderCell, RoleColors,
    SvgDocument, VERTEX_OUTLINE, VERTEX_OUTLINE_WIDTH, build_collection, build_figure,
    cell_vertices, classify, is_boundary, is_fringe, nice_ticks, plot_cubical_complex_2d,
    render_cells, render_svg, star_touches_fringe,
};

mod complexes;
mod plotting;
