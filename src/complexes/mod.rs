// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

pub use cell_complex::{CellComplex, CellRangeIterator};
pub use cubical::{Cube, CubicalComplex, Orthant};
pub use cubical_util::{CubeIterator, OrthantIterator};
pub use traits::ComplexLike;

mod cell_complex;
mod cubical;
mod cubical_util;
mod traits;
