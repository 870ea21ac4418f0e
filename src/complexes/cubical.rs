// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implementation of a toroidal cubical complex over a rectangular box of the
//! integer lattice. The complex is comprised of cubes in n-dimensional real
//! space with vertices on the integer lattice, with the last layer of cubes
//! along each axis serving as the right fringe.
//!
//! The key types are as follows:
//! - `Orthant`: The coordinates of a unit box of the lattice, which are also
//!   the coordinates of its least vertex.
//! - `Cube`: A cube defined by the orthant it is based in and its shape.
//! - `CubicalComplex`: A complex satisfying the `ComplexLike` trait with `Cube`
//!   instances as cells.
//!
//! ## Shapes
//!
//! Each orthant contains exactly one cube of every shape. The shape is a
//! bitmask over the axes: bit `i` is set if and only if the cube extends along
//! axis `i`. In 2D space based at `(1, 1)`:
//! - Vertex (shape `00`): the point `(1, 1)`
//! - Edge along the first axis (shape `01`): from `(1, 1)` to `(2, 1)`
//! - Edge along the second axis (shape `10`): from `(1, 1)` to `(1, 2)`
//! - Square (shape `11`): the unit square with least vertex `(1, 1)`
//!
//! ## Fringe
//!
//! The complex between minimum and maximum orthants `[m, M]` wraps around
//! along every axis; a cube based at `M[i]` along axis `i` which extends along
//! that axis has its far face at `m[i]`. Cubes based at `M[i]` along some axis
//! are the right fringe: padding which separates the right side of the region
//! of interest from its left side.
//!
//! # Examples
//!
//! ```rust
//! use std::collections::HashSet;
//!
//! use chomp3rs_plot::{ComplexLike, Cube, CubicalComplex, Orthant};
//!
//! // Two boxes in each direction, plus the fringe layer.
//! let complex = CubicalComplex::new(Orthant::from([0, 0]), Orthant::from([2, 2]));
//!
//! let edge = Cube::from_extent(Orthant::from([1, 1]), &[true, false]);
//! assert_eq!(
//!     complex.cell_boundary(&edge),
//!     vec![Cube::vertex(Orthant::from([1, 1])), Cube::vertex(Orthant::from([2, 1]))]
//! );
//! assert!(!complex.rightfringe(&edge));
//! assert!(complex.rightfringe(&Cube::vertex(Orthant::from([2, 1]))));
//!
//! let star = complex.star(&HashSet::from([Cube::vertex(Orthant::from([1, 1]))]));
//! assert_eq!(star.len(), 9); // the vertex, 4 edges and 4 squares
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::iter::{FromIterator, zip};
use std::ops::{Index, IndexMut};
use std::slice::Iter;

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{ComplexLike, CubeIterator};

/// An orthant names the unit box of the integer lattice whose least vertex has
/// the given coordinates. Each [`Cube`] is based in an `Orthant`, and the
/// coordinates of a cell are the coordinates of its base orthant.
///
/// The maximum ambient dimension of an `Orthant` (as well as that of [`Cube`]
/// and [`CubicalComplex`] instances) is 32. The interface is otherwise
/// similar to an array with size fixed after construction.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Orthant {
    dimension: usize,
    coordinates: [i16; 32],
}

impl Orthant {
    /// Create a new orthant with given coordinates.
    ///
    /// Panics if the length of `coordinates` exceeds 32, which is the maximum
    /// ambient dimension of `Orthant` instances.
    #[must_use]
    pub fn new(coordinates: Vec<i16>) -> Self {
        Self::from(coordinates.as_slice())
    }

    /// Create an orthant with all coordinates set to zero.
    #[must_use]
    pub fn zeros(dimension: usize) -> Self {
        assert!(
            dimension <= 32,
            "Cubical complex ambient dimension cannot exceed 32"
        );
        Self {
            dimension,
            coordinates: [0; 32],
        }
    }

    /// Get the dimension of this orthant.
    #[must_use]
    pub fn ambient_dimension(&self) -> u32 {
        self.dimension as u32
    }

    /// Get a reference to the coordinates as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[i16] {
        &self.coordinates[..self.dimension]
    }

    /// Create an iterator over the coordinates.
    pub fn iter(&self) -> Iter<'_, i16> {
        self.as_slice().iter()
    }

    /// Safely get a reference to the coordinate at the given index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&i16> {
        self.as_slice().get(index)
    }
}

impl Index<usize> for Orthant {
    type Output = i16;

    fn index(&self, index: usize) -> &Self::Output {
        &self.coordinates[index]
    }
}

impl IndexMut<usize> for Orthant {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.coordinates[index]
    }
}

impl FromIterator<i16> for Orthant {
    fn from_iter<T: IntoIterator<Item = i16>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl From<&[i16]> for Orthant {
    fn from(slice: &[i16]) -> Self {
        assert!(
            slice.len() <= 32,
            "Cubical complex ambient dimension cannot exceed 32"
        );
        let mut coordinates = [0; 32];
        coordinates[..slice.len()].copy_from_slice(slice);
        Self {
            dimension: slice.len(),
            coordinates,
        }
    }
}

impl<const N: usize> From<[i16; N]> for Orthant {
    fn from(array: [i16; N]) -> Self {
        Self::from(array.as_slice())
    }
}

impl Display for Orthant {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, coord) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", coord)?;
        }
        write!(f, ")")
    }
}

impl PartialOrd for Orthant {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Orthant {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl Serialize for Orthant {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.as_slice().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Orthant {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let coordinates = Vec::<i16>::deserialize(deserializer)?;
        if coordinates.len() > 32 {
            return Err(D::Error::custom(format!(
                "orthant has {} coordinates; the ambient dimension cannot exceed 32",
                coordinates.len()
            )));
        }
        Ok(Self::new(coordinates))
    }
}

/// A `Cube` instance represents a (hyper)cube of arbitrary topological
/// dimension (retrieved by the [`Cube::dimension`] method) in a
/// `n`-dimensional (retrieved by the [`Cube::ambient_dimension`] method)
/// cubical complex. Each cube is uniquely defined by the [`Orthant`] it is
/// based in and a shape bitmask naming the axes it extends along.
///
/// See the module-level documentation for detailed information about shapes
/// with examples.
///
/// # Examples
///
/// ```rust
/// use chomp3rs_plot::{Cube, Orthant};
///
/// // Create a vertex in 2D space at position (1,1)
/// let vertex = Cube::vertex(Orthant::from([1, 1]));
/// assert_eq!(vertex.dimension(), 0);
/// assert_eq!(vertex.shape(), 0b00);
///
/// // Create an edge starting at (1,1) along the second axis
/// let edge = Cube::from_extent(Orthant::from([1, 1]), &[false, true]);
/// assert_eq!(edge.dimension(), 1);
/// assert_eq!(edge.shape(), 0b10);
///
/// // Create a 2D square with base at (1,1)
/// let square = Cube::top_cube(Orthant::from([1, 1]));
/// assert_eq!(square.dimension(), 2);
/// assert_eq!(square.extent(), vec![true, true]);
/// ```
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cube {
    base_orthant: Orthant,
    shape: u32,
}

impl Cube {
    /// Create a new cube from a base orthant and a shape bitmask.
    #[must_use]
    pub fn new(base_orthant: Orthant, shape: u32) -> Self {
        #[cfg(debug_assertions)]
        {
            let dimension = base_orthant.ambient_dimension();
            if dimension < 32 && shape >> dimension != 0 {
                panic!(
                    "Cube shape {shape:#b} extends along axes beyond the ambient dimension {dimension}"
                );
            }
        }

        Self {
            base_orthant,
            shape,
        }
    }

    /// Create a cube from a base orthant and an extent bitstring, where
    /// `extent[i]` is `true` if the cube extends along axis `i`.
    #[must_use]
    pub fn from_extent(base_orthant: Orthant, extent: &[bool]) -> Self {
        #[cfg(debug_assertions)]
        {
            if base_orthant.ambient_dimension() != extent.len() as u32 {
                panic!("Base orthant dimension must match extent length");
            }
        }

        let shape = extent
            .iter()
            .enumerate()
            .filter(|(_, extends)| **extends)
            .fold(0, |shape, (axis, _)| shape | (1 << axis));
        Self::new(base_orthant, shape)
    }

    /// Create a vertex (0-dimensional) cube at the base orthant.
    #[must_use]
    pub fn vertex(base_orthant: Orthant) -> Self {
        Self {
            base_orthant,
            shape: 0,
        }
    }

    /// Create a top cube, which extends along every axis, from a base orthant.
    #[must_use]
    pub fn top_cube(base_orthant: Orthant) -> Self {
        let dimension = base_orthant.ambient_dimension();
        let shape = if dimension == 32 {
            u32::MAX
        } else {
            (1 << dimension) - 1
        };
        Self {
            base_orthant,
            shape,
        }
    }

    /// Get a reference to the base orthant.
    #[must_use]
    pub fn base(&self) -> &Orthant {
        &self.base_orthant
    }

    /// Get the shape bitmask.
    #[must_use]
    pub fn shape(&self) -> u32 {
        self.shape
    }

    /// Check whether the cube extends along `axis`.
    #[must_use]
    pub fn extends_along(&self, axis: usize) -> bool {
        axis < 32 && self.shape & (1 << axis) != 0
    }

    /// Calculate the extent as a bitstring showing which axes the cube extends
    /// along.
    #[must_use]
    pub fn extent(&self) -> Vec<bool> {
        (0..self.ambient_dimension() as usize)
            .map(|axis| self.extends_along(axis))
            .collect()
    }

    /// Calculate the topological dimension of the cube (number of axes with
    /// extent).
    #[must_use]
    pub fn dimension(&self) -> u32 {
        self.shape.count_ones()
    }

    /// Get the dimension of the ambient space this cube is embedded in.
    #[must_use]
    pub fn ambient_dimension(&self) -> u32 {
        self.base_orthant.ambient_dimension()
    }
}

impl Display for Cube {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Cube[base: {}, shape: ", self.base_orthant)?;
        for extends in self.extent().iter().rev() {
            write!(f, "{}", if *extends { "1" } else { "0" })?;
        }
        write!(f, "]")
    }
}

/// A `CubicalComplex` represents the cubical complex of a rectangular box of
/// orthants, identified periodically along every axis. The complex contains
/// every cube based in an orthant between the minimum and maximum orthants
/// (inclusive); cubes based on the maximum coordinate along any axis are the
/// right fringe.
///
/// See the module-level documentation for examples and further information
/// about this implementation of a cubical complex.
///
/// # Examples
///
/// ```rust
/// use chomp3rs_plot::{ComplexLike, Cube, CubicalComplex, Orthant};
///
/// let complex = CubicalComplex::new(Orthant::from([0, 0]), Orthant::from([2, 1]));
///
/// assert_eq!(complex.dimension(), 2);
/// assert_eq!(complex.boxes(), vec![3, 2]);
/// assert_eq!(complex.cells(0).count(), 6);
/// assert_eq!(complex.cells(1).count(), 12);
/// assert_eq!(complex.cells(2).count(), 6);
///
/// // The edge leaving the right fringe wraps to the left side.
/// let edge = Cube::from_extent(Orthant::from([2, 0]), &[true, false]);
/// assert!(complex.cell_boundary(&edge).contains(&Cube::vertex(Orthant::from([0, 0]))));
/// ```
#[derive(Clone, Debug, Serialize)]
pub struct CubicalComplex {
    minimum_orthant: Orthant,
    maximum_orthant: Orthant,
}

/// Serialized form of a [`CubicalComplex`].
#[derive(Deserialize)]
struct CubicalComplexData {
    minimum_orthant: Orthant,
    maximum_orthant: Orthant,
}

impl<'de> Deserialize<'de> for CubicalComplex {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let data = CubicalComplexData::deserialize(deserializer)?;
        Self::check_bounds(&data.minimum_orthant, &data.maximum_orthant)
            .map_err(D::Error::custom)?;

        Ok(Self {
            minimum_orthant: data.minimum_orthant,
            maximum_orthant: data.maximum_orthant,
        })
    }
}

impl CubicalComplex {
    /// Create a new cubical complex over the box of orthants between
    /// `minimum_orthant` and `maximum_orthant`, inclusive.
    ///
    /// # Panics
    /// Panics if the minimum and maximum orthants have different dimensions,
    /// or if any coordinate of the minimum orthant is greater than the
    /// corresponding coordinate of the maximum orthant.
    #[must_use]
    pub fn new(minimum_orthant: Orthant, maximum_orthant: Orthant) -> Self {
        if let Err(message) = Self::check_bounds(&minimum_orthant, &maximum_orthant) {
            panic!("{message}");
        }

        Self {
            minimum_orthant,
            maximum_orthant,
        }
    }

    fn check_bounds(
        minimum_orthant: &Orthant,
        maximum_orthant: &Orthant,
    ) -> Result<(), &'static str> {
        if minimum_orthant.ambient_dimension() != maximum_orthant.ambient_dimension() {
            return Err("Minimum and maximum orthants must have the same dimension");
        }

        if zip(minimum_orthant.iter(), maximum_orthant.iter())
            .any(|(min_coord, max_coord)| min_coord > max_coord)
        {
            return Err(
                "Each coordinate of the minimum orthant must be less than or equal to that of the maximum orthant",
            );
        }
        Ok(())
    }

    /// Get the minimum orthant of the rectangular region.
    #[must_use]
    pub fn minimum(&self) -> &Orthant {
        &self.minimum_orthant
    }

    /// Get the maximum orthant of the rectangular region.
    #[must_use]
    pub fn maximum(&self) -> &Orthant {
        &self.maximum_orthant
    }

    /// Get the number of orthants along each axis, fringe layer included.
    #[must_use]
    pub fn boxes(&self) -> Vec<i32> {
        zip(self.minimum_orthant.iter(), self.maximum_orthant.iter())
            .map(|(min_coord, max_coord)| *max_coord as i32 - *min_coord as i32 + 1)
            .collect()
    }

    /// Get the dimension of the ambient space this cubical complex is embedded
    /// in.
    #[must_use]
    pub fn ambient_dimension(&self) -> u32 {
        self.minimum_orthant.ambient_dimension()
    }

    /// Check if a cube is within the complex bounds.
    #[must_use]
    pub fn contains_cube(&self, cube: &Cube) -> bool {
        if cube.ambient_dimension() != self.ambient_dimension() {
            return false;
        }

        zip(
            cube.base().iter(),
            zip(self.minimum_orthant.iter(), self.maximum_orthant.iter()),
        )
        .all(|(coord, (min_coord, max_coord))| min_coord <= coord && coord <= max_coord)
    }

    /// The orthant one step from `orthant` along `axis` in direction `step`,
    /// wrapped periodically into the box.
    fn neighbor(&self, orthant: &Orthant, axis: usize, step: i32) -> Orthant {
        let minimum = self.minimum_orthant[axis] as i32;
        let length = self.maximum_orthant[axis] as i32 - minimum + 1;
        let mut neighbor = orthant.clone();
        neighbor[axis] =
            (minimum + (orthant[axis] as i32 + step - minimum).rem_euclid(length)) as i16;
        neighbor
    }
}

impl ComplexLike for CubicalComplex {
    type Cell = Cube;
    type CellIterator = CubeIterator;

    fn cell_iter(&self) -> Self::CellIterator {
        CubeIterator::new(self.minimum_orthant.clone(), self.maximum_orthant.clone())
    }

    fn dimension(&self) -> u32 {
        self.ambient_dimension()
    }

    fn cell_dimension(&self, cell: &Cube) -> u32 {
        cell.dimension()
    }

    fn coordinates(&self, cell: &Cube) -> Orthant {
        cell.base().clone()
    }

    fn cell_shape(&self, cell: &Cube) -> u32 {
        cell.shape()
    }

    fn rightfringe(&self, cell: &Cube) -> bool {
        zip(cell.base().iter(), self.maximum_orthant.iter())
            .any(|(coord, max_coord)| coord == max_coord)
    }

    fn cell_boundary(&self, cell: &Cube) -> Vec<Cube> {
        debug_assert!(
            self.contains_cube(cell),
            "Cube is not in the complex bounds"
        );

        let mut faces = Vec::with_capacity(2 * cell.dimension() as usize);
        for axis in 0..self.ambient_dimension() as usize {
            if !cell.extends_along(axis) {
                continue;
            }
            // Removing the extent along `axis` leaves the near and far faces
            let shape = cell.shape() & !(1 << axis);
            faces.push(Cube::new(cell.base().clone(), shape));

            let far_face = Cube::new(self.neighbor(cell.base(), axis, 1), shape);
            if !faces.contains(&far_face) {
                faces.push(far_face);
            }
        }
        faces
    }

    fn cell_coboundary(&self, cell: &Cube) -> Vec<Cube> {
        debug_assert!(
            self.contains_cube(cell),
            "Cube is not in the complex bounds"
        );

        let codimension = self.ambient_dimension() - cell.dimension();
        let mut cofaces = Vec::with_capacity(2 * codimension as usize);
        for axis in 0..self.ambient_dimension() as usize {
            if cell.extends_along(axis) {
                continue;
            }
            // The cell is the near face of the coface based with it and the
            // far face of the coface based one step back
            let shape = cell.shape() | (1 << axis);
            cofaces.push(Cube::new(cell.base().clone(), shape));

            let back_coface = Cube::new(self.neighbor(cell.base(), axis, -1), shape);
            if !cofaces.contains(&back_coface) {
                cofaces.push(back_coface);
            }
        }
        cofaces
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn grid_3x3() -> CubicalComplex {
        CubicalComplex::new(Orthant::from([0, 0]), Orthant::from([2, 2]))
    }

    #[test]
    fn test_orthant_creation_and_access() {
        let orthant = Orthant::new(vec![1, 2, 3]);
        assert_eq!(orthant.ambient_dimension(), 3);

        assert_eq!(orthant[0], 1);
        assert_eq!(orthant[2], 3);
        assert_eq!(orthant.as_slice(), &[1, 2, 3]);

        assert_eq!(orthant.get(1), Some(&2));
        assert_eq!(orthant.get(10), None);

        let zeros = Orthant::zeros(4);
        assert_eq!(zeros.as_slice(), &[0, 0, 0, 0]);

        let collected: Orthant = (0..4).collect();
        assert_eq!(collected.as_slice(), &[0, 1, 2, 3]);
    }

    #[test]
    #[should_panic(expected = "Cubical complex ambient dimension cannot exceed 32")]
    fn test_orthant_too_many_coordinates() {
        let _orthant = Orthant::new(vec![0; 33]);
    }

    #[test]
    fn test_orthant_serde() {
        let orthant = Orthant::from([-1, 4]);
        let json = serde_json::to_string(&orthant).unwrap();
        assert_eq!(json, "[-1,4]");
        assert_eq!(serde_json::from_str::<Orthant>(&json).unwrap(), orthant);

        let too_long = format!("{:?}", vec![0; 33]);
        assert!(serde_json::from_str::<Orthant>(&too_long).is_err());
    }

    #[test]
    fn test_cube_constructors() {
        let base = Orthant::from([1, 2, 3]);

        let vertex = Cube::vertex(base.clone());
        assert_eq!(vertex.dimension(), 0);
        assert_eq!(vertex.extent(), vec![false, false, false]);

        let top_cube = Cube::top_cube(base.clone());
        assert_eq!(top_cube.dimension(), 3);
        assert_eq!(top_cube.shape(), 0b111);

        let edge = Cube::from_extent(base.clone(), &[false, false, true]);
        assert_eq!(edge.dimension(), 1);
        assert_eq!(edge.shape(), 0b100);
        assert!(edge.extends_along(2));
        assert!(!edge.extends_along(0));
        assert_eq!(edge, Cube::new(base, 0b100));
    }

    #[test]
    #[should_panic(expected = "Base orthant dimension must match extent length")]
    fn test_from_extent_dimension_mismatch() {
        let _cube = Cube::from_extent(Orthant::from([1, 2]), &[true, false, true]);
    }

    #[test]
    #[should_panic(expected = "extends along axes beyond the ambient dimension")]
    fn test_cube_shape_out_of_range() {
        let _cube = Cube::new(Orthant::from([1, 2]), 0b100);
    }

    #[test]
    fn test_display_implementations() {
        assert_eq!(Orthant::from([-1, 0, 3]).to_string(), "(-1, 0, 3)");
        assert_eq!(Orthant::new(vec![]).to_string(), "()");

        let edge = Cube::from_extent(Orthant::from([1, 1]), &[true, false]);
        assert_eq!(edge.to_string(), "Cube[base: (1, 1), shape: 01]");

        let square = Cube::top_cube(Orthant::from([1, 1]));
        assert_eq!(square.to_string(), "Cube[base: (1, 1), shape: 11]");
    }

    #[test]
    #[should_panic(expected = "Minimum and maximum orthants must have the same dimension")]
    fn test_complex_dimension_mismatch() {
        let _complex = CubicalComplex::new(Orthant::from([0, 0]), Orthant::from([1, 1, 1]));
    }

    #[test]
    #[should_panic(expected = "less than or equal to that of the maximum orthant")]
    fn test_complex_inverted_bounds() {
        let _complex = CubicalComplex::new(Orthant::from([0, 3]), Orthant::from([1, 1]));
    }

    #[test]
    fn test_complex_serde() {
        let complex = grid_3x3();
        let json = serde_json::to_string(&complex).unwrap();
        assert_eq!(json, r#"{"minimum_orthant":[0,0],"maximum_orthant":[2,2]}"#);

        let restored: CubicalComplex = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.minimum(), complex.minimum());
        assert_eq!(restored.maximum(), complex.maximum());
    }

    #[test]
    fn test_complex_serde_rejects_invalid_bounds() {
        let inverted = r#"{"minimum_orthant":[0,2],"maximum_orthant":[1,1]}"#;
        let error = serde_json::from_str::<CubicalComplex>(inverted).unwrap_err();
        assert!(error.to_string().contains("less than or equal to"));

        let mismatched = r#"{"minimum_orthant":[0,0],"maximum_orthant":[1,1,1]}"#;
        assert!(serde_json::from_str::<CubicalComplex>(mismatched).is_err());
    }

    #[test]
    fn test_cell_counts() {
        let complex = grid_3x3();
        assert_eq!(complex.boxes(), vec![3, 3]);
        assert_eq!(complex.cell_iter().count(), 36);
        assert_eq!(complex.cells(0).count(), 9);
        assert_eq!(complex.cells(1).count(), 18);
        assert_eq!(complex.cells(2).count(), 9);
        assert!(complex.cells(1).all(|cube| cube.dimension() == 1));
    }

    #[test]
    fn test_contains_cube() {
        let complex = grid_3x3();
        assert!(complex.contains_cube(&Cube::top_cube(Orthant::from([2, 2]))));
        assert!(!complex.contains_cube(&Cube::vertex(Orthant::from([3, 0]))));
        assert!(!complex.contains_cube(&Cube::vertex(Orthant::from([0, 0, 0]))));
    }

    #[test]
    fn test_rightfringe() {
        let complex = grid_3x3();
        assert!(!complex.rightfringe(&Cube::vertex(Orthant::from([1, 1]))));
        assert!(!complex.rightfringe(&Cube::top_cube(Orthant::from([0, 1]))));
        assert!(complex.rightfringe(&Cube::vertex(Orthant::from([2, 0]))));
        assert!(complex.rightfringe(&Cube::from_extent(Orthant::from([0, 2]), &[true, false])));

        let fringe_count = complex.cell_iter().filter(|c| complex.rightfringe(c)).count();
        assert_eq!(fringe_count, 4 * 5);
    }

    #[test]
    fn test_boundary_wraps() {
        let complex = grid_3x3();

        let square = Cube::top_cube(Orthant::from([2, 1]));
        let faces: HashSet<Cube> = complex.cell_boundary(&square).into_iter().collect();
        let expected = HashSet::from([
            Cube::new(Orthant::from([2, 1]), 0b10),
            Cube::new(Orthant::from([0, 1]), 0b10),
            Cube::new(Orthant::from([2, 1]), 0b01),
            Cube::new(Orthant::from([2, 2]), 0b01),
        ]);
        assert_eq!(faces, expected);

        assert!(complex.cell_boundary(&Cube::vertex(Orthant::from([1, 1]))).is_empty());
    }

    #[test]
    fn test_coboundary_wraps() {
        let complex = grid_3x3();

        let vertex = Cube::vertex(Orthant::from([0, 0]));
        let cofaces: HashSet<Cube> = complex.cell_coboundary(&vertex).into_iter().collect();
        let expected = HashSet::from([
            Cube::new(Orthant::from([0, 0]), 0b01),
            Cube::new(Orthant::from([2, 0]), 0b01),
            Cube::new(Orthant::from([0, 0]), 0b10),
            Cube::new(Orthant::from([0, 2]), 0b10),
        ]);
        assert_eq!(cofaces, expected);

        assert!(complex.cell_coboundary(&Cube::top_cube(Orthant::from([1, 1]))).is_empty());
    }

    #[test]
    fn test_single_box_axis_deduplicates() {
        // One orthant along the second axis: both faces coincide
        let complex = CubicalComplex::new(Orthant::from([0, 0]), Orthant::from([1, 0]));
        let edge = Cube::from_extent(Orthant::from([0, 0]), &[false, true]);
        assert_eq!(complex.cell_boundary(&edge), vec![Cube::vertex(Orthant::from([0, 0]))]);
    }

    #[test]
    fn test_boundary_and_star_sets() {
        let complex = grid_3x3();

        let edge = Cube::from_extent(Orthant::from([1, 1]), &[false, true]);
        let boundary = complex.boundary(&HashSet::from([edge.clone()]));
        assert_eq!(
            boundary,
            HashSet::from([
                Cube::vertex(Orthant::from([1, 1])),
                Cube::vertex(Orthant::from([1, 2]))
            ])
        );

        let star = complex.star(&HashSet::from([edge.clone()]));
        assert_eq!(
            star,
            HashSet::from([
                edge,
                Cube::top_cube(Orthant::from([1, 1])),
                Cube::top_cube(Orthant::from([0, 1]))
            ])
        );
    }
}
