// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::collections::HashMap;

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize};

use crate::{ComplexLike, Orthant};

/// A simple concrete implementation of a cell complex with vector-based
/// storage.
///
/// `CellComplex` represents a finite cell complex where cells are identified by
/// `u32` indices. Each cell has its dimension, lattice coordinates, shape,
/// fringe flag, boundary, and coboundary explicitly stored in parallel vectors
/// for efficient access. The coboundaries are derived from the boundaries at
/// construction, so the two are always consistent.
///
/// Any other [`ComplexLike`] implementation can be snapshotted into a
/// `CellComplex` with [`CellComplex::from_complex`], which, together with the
/// serde implementations, allows complexes to be stored as JSON. Coboundaries
/// are not stored; deserialization checks the same requirements as
/// [`CellComplex::new`] and derives them again.
#[derive(Debug, Clone, Serialize)]
pub struct CellComplex {
    complex_dimension: u32,
    cell_dimensions: Vec<u32>,
    coordinates: Vec<Orthant>,
    shapes: Vec<u32>,
    fringe: Vec<bool>,
    boundaries: Vec<Vec<u32>>,
    #[serde(skip_serializing)]
    coboundaries: Vec<Vec<u32>>,
}

/// Serialized form of a [`CellComplex`].
#[derive(Deserialize)]
struct CellComplexData {
    complex_dimension: u32,
    cell_dimensions: Vec<u32>,
    coordinates: Vec<Orthant>,
    shapes: Vec<u32>,
    fringe: Vec<bool>,
    boundaries: Vec<Vec<u32>>,
}

impl<'de> Deserialize<'de> for CellComplex {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let data = CellComplexData::deserialize(deserializer)?;
        let mut complex = Self::try_new(
            data.cell_dimensions,
            data.coordinates,
            data.shapes,
            data.fringe,
            data.boundaries,
        )
        .map_err(D::Error::custom)?;

        if complex.cell_count() > 0 && complex.complex_dimension != data.complex_dimension {
            return Err(D::Error::custom(format!(
                "complex dimension {} does not match the cell coordinates of dimension {}",
                data.complex_dimension, complex.complex_dimension
            )));
        }
        complex.complex_dimension = data.complex_dimension;
        Ok(complex)
    }
}

/// Iterator over the cell indices `0..cell_count` of a [`CellComplex`].
pub struct CellRangeIterator {
    next: u32,
    end: u32,
}

impl Iterator for CellRangeIterator {
    type Item = u32;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next < self.end {
            let current = self.next;
            self.next += 1;
            Some(current)
        } else {
            None
        }
    }
}

impl CellComplex {
    /// Creates a new cell complex from the provided data vectors. Each vector
    /// must have the same length, which represents the number of cells in
    /// the complex, and every boundary entry must index a cell. The dimension
    /// of the complex is the ambient dimension of the coordinates, or 0 if
    /// there are no cells.
    ///
    /// # Panics
    /// Panics if the vectors have different lengths, if a boundary refers to a
    /// cell index out of range, or if the coordinates disagree on the ambient
    /// dimension.
    pub fn new(
        cell_dimensions: Vec<u32>,
        coordinates: Vec<Orthant>,
        shapes: Vec<u32>,
        fringe: Vec<bool>,
        boundaries: Vec<Vec<u32>>,
    ) -> Self {
        Self::try_new(cell_dimensions, coordinates, shapes, fringe, boundaries)
            .unwrap_or_else(|message| panic!("{message}"))
    }

    /// Check the cell data and derive the coboundaries, describing the first
    /// violated requirement on failure.
    fn try_new(
        cell_dimensions: Vec<u32>,
        coordinates: Vec<Orthant>,
        shapes: Vec<u32>,
        fringe: Vec<bool>,
        boundaries: Vec<Vec<u32>>,
    ) -> Result<Self, String> {
        let cell_count = cell_dimensions.len();
        if [coordinates.len(), shapes.len(), fringe.len(), boundaries.len()]
            .iter()
            .any(|len| *len != cell_count)
        {
            return Err("cell count mismatch".to_string());
        }

        let complex_dimension = coordinates
            .first()
            .map(Orthant::ambient_dimension)
            .unwrap_or_default();
        if coordinates
            .iter()
            .any(|coords| coords.ambient_dimension() != complex_dimension)
        {
            return Err("cell coordinates must share one ambient dimension".to_string());
        }

        let mut coboundaries = vec![Vec::new(); cell_count];
        for (cell, boundary) in boundaries.iter().enumerate() {
            for face in boundary {
                if *face as usize >= cell_count {
                    return Err(format!(
                        "boundary of cell {cell} refers to missing cell {face}"
                    ));
                }
                coboundaries[*face as usize].push(cell as u32);
            }
        }

        Ok(Self {
            complex_dimension,
            cell_dimensions,
            coordinates,
            shapes,
            fringe,
            boundaries,
            coboundaries,
        })
    }

    /// Snapshot any complex into explicit storage. Cells are numbered in the
    /// order of `complex.cell_iter()`, and the returned map sends each original
    /// cell to its index.
    pub fn from_complex<C>(complex: &C) -> (Self, HashMap<C::Cell, u32>)
    where
        C: ComplexLike,
    {
        let cells: Vec<C::Cell> = complex.cell_iter().collect();
        let index: HashMap<C::Cell, u32> = cells
            .iter()
            .enumerate()
            .map(|(i, cell)| (cell.clone(), i as u32))
            .collect();

        let boundaries = cells
            .iter()
            .map(|cell| {
                complex
                    .cell_boundary(cell)
                    .iter()
                    .map(|face| index[face])
                    .collect()
            })
            .collect();

        let mut snapshot = Self::new(
            cells.iter().map(|cell| complex.cell_dimension(cell)).collect(),
            cells.iter().map(|cell| complex.coordinates(cell)).collect(),
            cells.iter().map(|cell| complex.cell_shape(cell)).collect(),
            cells.iter().map(|cell| complex.rightfringe(cell)).collect(),
            boundaries,
        );
        snapshot.complex_dimension = complex.dimension();
        (snapshot, index)
    }

    /// The number of cells in the complex.
    pub fn cell_count(&self) -> u32 {
        self.cell_dimensions.len() as u32
    }
}

impl ComplexLike for CellComplex {
    type Cell = u32;
    type CellIterator = CellRangeIterator;

    fn cell_iter(&self) -> Self::CellIterator {
        CellRangeIterator {
            next: 0,
            end: self.cell_count(),
        }
    }

    fn dimension(&self) -> u32 {
        self.complex_dimension
    }

    fn cell_dimension(&self, cell: &u32) -> u32 {
        self.cell_dimensions[*cell as usize]
    }

    fn coordinates(&self, cell: &u32) -> Orthant {
        self.coordinates[*cell as usize].clone()
    }

    fn cell_shape(&self, cell: &u32) -> u32 {
        self.shapes[*cell as usize]
    }

    fn rightfringe(&self, cell: &u32) -> bool {
        self.fringe[*cell as usize]
    }

    fn cell_boundary(&self, cell: &u32) -> Vec<u32> {
        self.boundaries[*cell as usize].clone()
    }

    fn cell_coboundary(&self, cell: &u32) -> Vec<u32> {
        self.coboundaries[*cell as usize].clone()
    }
}
