// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Iterators over the orthants and cubes of a rectangular box.

use super::cubical::{Cube, Orthant};

/// This iterator traverses all orthants within a specified bounding box between
/// the provided minimum and maximum orthants (inclusive). The iteration follows
/// lexicographic order starting from the minimum orthant.
///
/// # Examples
///
/// ```rust
/// use chomp3rs_plot::{Orthant, OrthantIterator};
///
/// let min = Orthant::from([0, 0]);
/// let max = Orthant::from([1, 1]);
/// let mut iter = OrthantIterator::new(min, max);
///
/// assert_eq!(iter.next().unwrap(), Orthant::from([0, 0]));
/// assert_eq!(iter.next().unwrap(), Orthant::from([0, 1]));
/// assert_eq!(iter.next().unwrap(), Orthant::from([1, 0]));
/// assert_eq!(iter.next().unwrap(), Orthant::from([1, 1]));
/// assert_eq!(iter.next(), None);
/// ```
pub struct OrthantIterator {
    next: Option<Orthant>,
    minimum: Orthant,
    maximum: Orthant,
}

impl OrthantIterator {
    /// Create a new orthant iterator for the given range.
    ///
    /// # Panics
    /// Panics if `minimum` and `maximum` have different ambient dimensions.
    #[must_use]
    pub fn new(minimum: Orthant, maximum: Orthant) -> Self {
        assert_eq!(
            minimum.ambient_dimension(),
            maximum.ambient_dimension(),
            "Minimum and maximum orthants must have the same ambient dimension"
        );

        Self {
            next: Some(minimum.clone()),
            minimum,
            maximum,
        }
    }
}

impl Iterator for OrthantIterator {
    type Item = Orthant;

    fn next(&mut self) -> Option<Self::Item> {
        let mut next = self.next.clone()?;
        for axis in (0..next.ambient_dimension() as usize).rev() {
            if next[axis] < self.maximum[axis] {
                next[axis] += 1;
                return self.next.replace(next);
            }
            next[axis] = self.minimum[axis];
        }
        self.next.take()
    }
}

/// Iterator over all cubes based in the orthants of a rectangular region of
/// n-dimensional space.
///
/// Base orthants are visited in lexicographic order; within each orthant the
/// cubes are produced in increasing order of their shape bitmask, so the
/// vertex comes first and the top cube last.
///
/// # Examples
///
/// ```rust
/// use chomp3rs_plot::{CubeIterator, Orthant};
///
/// let min = Orthant::from([0, 0]);
/// let max = Orthant::from([1, 1]);
///
/// // Generates 1 vertex, 2 edges, and 1 face for each of the 4 orthants.
/// let cubes: Vec<_> = CubeIterator::new(min, max).collect();
/// assert_eq!(cubes.len(), 16);
/// assert_eq!(cubes[0].shape(), 0b00);
/// assert_eq!(cubes[3].shape(), 0b11);
/// ```
pub struct CubeIterator {
    orthant_iter: OrthantIterator,
    current_base: Option<Orthant>,
    next_shape: u64,
    shape_count: u64,
}

impl CubeIterator {
    /// Create a new cube iterator for the given range of orthants.
    ///
    /// # Panics
    /// Panics if `minimum` and `maximum` have different ambient dimensions.
    #[must_use]
    pub fn new(minimum: Orthant, maximum: Orthant) -> Self {
        let shape_count = 1u64 << minimum.ambient_dimension();
        let mut orthant_iter = OrthantIterator::new(minimum, maximum);
        let current_base = orthant_iter.next();

        Self {
            orthant_iter,
            current_base,
            next_shape: 0,
            shape_count,
        }
    }
}

impl Iterator for CubeIterator {
    type Item = Cube;

    fn next(&mut self) -> Option<Self::Item> {
        let base = self.current_base.as_ref()?;
        let cube = Cube::new(base.clone(), self.next_shape as u32);

        self.next_shape += 1;
        if self.next_shape == self.shape_count {
            self.next_shape = 0;
            self.current_base = self.orthant_iter.next();
        }
        Some(cube)
    }
}
