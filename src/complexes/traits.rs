// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use super::cubical::Orthant;

/// Trait for read-only cell complexes embedded in an integer lattice.
///
/// A complex is a finite collection of cells of dimension `0..=dimension()`,
/// related by boundary and coboundary (codimension-1 faces and cofaces). Each
/// cell is located on the lattice by its coordinates, and edges additionally
/// carry a shape bitmask naming the axis they extend along. Cells flagged as
/// right fringe are padding around the region of interest.
///
/// Implementors provide the per-cell queries; the set-valued
/// [`ComplexLike::boundary`] and [`ComplexLike::star`] operators and the
/// per-dimension enumeration [`ComplexLike::cells`] are derived from them.
pub trait ComplexLike {
    /// Type of the cells in the complex.
    type Cell: Clone + Debug + Eq + Hash;
    /// Iterator type for traversing all cells in the complex.
    type CellIterator: Iterator<Item = Self::Cell>;

    /// Returns an iterator over all cells in the complex, in a stable order.
    fn cell_iter(&self) -> Self::CellIterator;
    /// Returns the dimension of the complex. This is the number of lattice
    /// axes the cells are embedded along.
    fn dimension(&self) -> u32;
    /// Returns the topological dimension of a specific cell.
    fn cell_dimension(&self, cell: &Self::Cell) -> u32;
    /// Returns the lattice coordinates of the base vertex of a cell.
    fn coordinates(&self, cell: &Self::Cell) -> Orthant;
    /// Returns the shape bitmask of a cell: bit `i` is set if and only if the
    /// cell extends along axis `i`.
    fn cell_shape(&self, cell: &Self::Cell) -> u32;
    /// Returns `true` if the cell is a right fringe (padding) cell.
    fn rightfringe(&self, cell: &Self::Cell) -> bool;
    /// Returns the codimension-1 faces of a cell.
    fn cell_boundary(&self, cell: &Self::Cell) -> Vec<Self::Cell>;
    /// Returns the codimension-1 cofaces of a cell.
    fn cell_coboundary(&self, cell: &Self::Cell) -> Vec<Self::Cell>;

    /// Returns an iterator over the cells of the given dimension, in the order
    /// of [`ComplexLike::cell_iter`].
    fn cells(&self, dimension: u32) -> impl Iterator<Item = Self::Cell> + '_ {
        self.cell_iter()
            .filter(move |cell| self.cell_dimension(cell) == dimension)
    }

    /// Returns the union of the codimension-1 faces of every cell in `cells`.
    fn boundary(&self, cells: &HashSet<Self::Cell>) -> HashSet<Self::Cell> {
        cells
            .iter()
            .flat_map(|cell| self.cell_boundary(cell))
            .collect()
    }

    /// Returns the star of `cells`: every cell having some cell of `cells` as
    /// a face, including the cells of `cells` themselves.
    fn star(&self, cells: &HashSet<Self::Cell>) -> HashSet<Self::Cell> {
        let mut star = cells.clone();
        let mut frontier: Vec<Self::Cell> = cells.iter().cloned().collect();
        while let Some(cell) = frontier.pop() {
            for coface in self.cell_coboundary(&cell) {
                if star.insert(coface.clone()) {
                    frontier.push(coface);
                }
            }
        }
        star
    }
}
