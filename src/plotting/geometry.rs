// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Mapping of lattice coordinates to points in the plane, and the polygons
//! drawn for each cell.

use crate::ComplexLike;

/// Width of the narrow cells of the blowup mapping. Wide cells are twice as
/// wide.
pub const CELL_WIDTH: f64 = 0.5;

/// A point in the plane, in data units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Create a point.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// How lattice coordinates are mapped to real coordinates.
///
/// # Examples
///
/// ```rust
/// use chomp3rs_plot::CoordinateMap;
///
/// assert_eq!(CoordinateMap::Identity.real_coord(3), 3.0);
///
/// // Gaps alternate between 0.5 and 1.0
/// let blowup: Vec<f64> = (0..5).map(|k| CoordinateMap::Blowup.real_coord(k)).collect();
/// assert_eq!(blowup, vec![0.0, 0.5, 1.5, 2.0, 3.0]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CoordinateMap {
    /// Lattice coordinate `k` maps to `k`.
    Identity,
    /// Lattice coordinate `k` maps to `floor(3k / 2) * CELL_WIDTH`, so that
    /// consecutive gaps alternate between `CELL_WIDTH` and `2 * CELL_WIDTH`.
    Blowup,
}

impl CoordinateMap {
    /// Select the blowup mapping if `blowup` is set, the identity otherwise.
    #[must_use]
    pub fn new(blowup: bool) -> Self {
        if blowup { Self::Blowup } else { Self::Identity }
    }

    /// The real coordinate of lattice coordinate `k`.
    #[must_use]
    pub fn real_coord(self, k: i32) -> f64 {
        match self {
            Self::Identity => k as f64,
            Self::Blowup => (3 * k).div_euclid(2) as f64 * CELL_WIDTH,
        }
    }

    /// The point of the lattice position `(x, y)`.
    #[must_use]
    pub fn point(self, x: i32, y: i32) -> Point {
        Point::new(self.real_coord(x), self.real_coord(y))
    }
}

/// Real coordinates of the vertices of a cell of a 2-dimensional complex.
///
/// A vertex is a single point at its coordinates. An edge runs from its
/// coordinates one step along the axis of its shape. A square is the unit
/// square with least vertex at its coordinates, listed counterclockwise.
///
/// # Panics
/// Panics if the cell has dimension greater than 2.
pub fn cell_vertices<C: ComplexLike>(
    complex: &C,
    cell: &C::Cell,
    coordinate_map: CoordinateMap,
) -> Vec<Point> {
    let coords = complex.coordinates(cell);
    let (x, y) = (coords[0] as i32, coords[1] as i32);
    let base = coordinate_map.point(x, y);

    match complex.cell_dimension(cell) {
        0 => vec![base],
        1 => {
            let shape = complex.cell_shape(cell);
            let dx = (shape & 1) as i32;
            let dy = ((shape >> 1) & 1) as i32;
            vec![base, coordinate_map.point(x + dx, y + dy)]
        }
        2 => vec![
            base,
            coordinate_map.point(x + 1, y),
            coordinate_map.point(x + 1, y + 1),
            coordinate_map.point(x, y + 1),
        ],
        dimension => panic!("Cannot draw a {dimension}-dimensional cell in the plane"),
    }
}
