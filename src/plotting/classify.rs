// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Classification of cells by their position relative to the fringe.
//!
//! Every cell of a complex has exactly one [`CellRole`]:
//! - fringe cells are those the complex flags as right fringe;
//! - boundary cells are non-fringe cells touching the fringe. A vertex touches
//!   the fringe if its star contains a fringe cell; a higher-dimensional cell
//!   touches the fringe if the star of one of its boundary faces does;
//! - all other cells are interior.

use std::collections::HashSet;
use std::fmt;
use std::fmt::{Display, Formatter};

use crate::ComplexLike;

/// The topological role of a cell, which selects its color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellRole {
    /// Padding cell outside of the region of interest.
    Fringe,
    /// Non-fringe cell adjacent to the fringe.
    Boundary,
    /// Cell neither fringe nor adjacent to it.
    Interior,
}

impl Display for CellRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fringe => write!(f, "fringe"),
            Self::Boundary => write!(f, "boundary"),
            Self::Interior => write!(f, "interior"),
        }
    }
}

/// Check if a cell is a fringe cell.
pub fn is_fringe<C: ComplexLike>(complex: &C, cell: &C::Cell) -> bool {
    complex.rightfringe(cell)
}

/// Check if the star of a cell contains a fringe cell. The star includes the
/// cell itself.
pub fn star_touches_fringe<C: ComplexLike>(complex: &C, cell: &C::Cell) -> bool {
    complex
        .star(&HashSet::from([cell.clone()]))
        .iter()
        .any(|star_cell| complex.rightfringe(star_cell))
}

/// Check if a cell is a boundary cell.
///
/// Fringe cells are never boundary cells. A cell without boundary faces that
/// is not a vertex is not a boundary cell either.
pub fn is_boundary<C: ComplexLike>(complex: &C, cell: &C::Cell) -> bool {
    if is_fringe(complex, cell) {
        return false;
    }
    if complex.cell_dimension(cell) == 0 {
        return star_touches_fringe(complex, cell);
    }
    complex
        .boundary(&HashSet::from([cell.clone()]))
        .iter()
        .any(|face| star_touches_fringe(complex, face))
}

/// Classify a cell as fringe, boundary or interior.
pub fn classify<C: ComplexLike>(complex: &C, cell: &C::Cell) -> CellRole {
    if is_fringe(complex, cell) {
        CellRole::Fringe
    } else if is_boundary(complex, cell) {
        CellRole::Boundary
    } else {
        CellRole::Interior
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CellComplex, Cube, CubicalComplex, Orthant};

    fn grid(size: i16) -> CubicalComplex {
        CubicalComplex::new(Orthant::from([0, 0]), Orthant::from([size, size]))
    }

    #[test]
    fn test_vertex_roles_in_smallest_grid() {
        let complex = grid(2);

        assert_eq!(
            classify(&complex, &Cube::vertex(Orthant::from([1, 1]))),
            CellRole::Interior
        );
        for coords in [[0, 0], [0, 1], [1, 0]] {
            assert_eq!(
                classify(&complex, &Cube::vertex(Orthant::from(coords))),
                CellRole::Boundary
            );
        }
        for coords in [[2, 0], [2, 2], [1, 2]] {
            assert_eq!(
                classify(&complex, &Cube::vertex(Orthant::from(coords))),
                CellRole::Fringe
            );
        }
    }

    #[test]
    fn test_fringe_is_never_boundary() {
        let complex = grid(3);
        for cube in complex.cell_iter() {
            if is_fringe(&complex, &cube) {
                assert!(!is_boundary(&complex, &cube));
                assert_eq!(classify(&complex, &cube), CellRole::Fringe);
            }
        }
    }

    #[test]
    fn test_higher_cells_use_faces() {
        let complex = grid(4);

        // Both vertices of this edge are interior
        let interior_edge = Cube::from_extent(Orthant::from([1, 2]), &[true, false]);
        assert_eq!(classify(&complex, &interior_edge), CellRole::Interior);

        // The far vertex (3, 1) is interior, but (3, 0) touches the wrapped fringe
        let boundary_edge = Cube::from_extent(Orthant::from([3, 0]), &[false, true]);
        assert_eq!(classify(&complex, &boundary_edge), CellRole::Boundary);

        // Every edge of this square lies between two non-fringe squares
        let square = Cube::top_cube(Orthant::from([2, 2]));
        assert_eq!(classify(&complex, &square), CellRole::Interior);

        let corner = Cube::top_cube(Orthant::from([3, 3]));
        assert_eq!(classify(&complex, &corner), CellRole::Boundary);
    }

    #[test]
    fn test_empty_boundary_is_interior() {
        // An isolated edge with no faces
        let complex = CellComplex::new(
            vec![0, 1],
            vec![Orthant::from([5, 5]), Orthant::from([0, 0])],
            vec![0, 0b01],
            vec![true, false],
            vec![vec![], vec![]],
        );

        assert_eq!(classify(&complex, &1), CellRole::Interior);
        assert_eq!(classify(&complex, &0), CellRole::Fringe);
    }

    #[test]
    fn test_role_display() {
        assert_eq!(CellRole::Fringe.to_string(), "fringe");
        assert_eq!(CellRole::Boundary.to_string(), "boundary");
        assert_eq!(CellRole::Interior.to_string(), "interior");
    }
}
