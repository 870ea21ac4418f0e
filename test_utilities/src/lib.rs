pub use cell_complexes::two_square_strip;
pub use cubical_grids::{blocked_grid, torus_grid};

mod cell_complexes;
mod cubical_grids;
