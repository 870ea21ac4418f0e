use chomp3rs_plot::{CubicalComplex, Orthant};

/// A periodic grid of `width` by `height` boxes, plus the fringe layer along
/// the right and top sides.
pub fn torus_grid(width: i16, height: i16) -> CubicalComplex {
    CubicalComplex::new(Orthant::from([0, 0]), Orthant::from([width, height]))
}

/// A grid whose minimum is away from the origin, used to check that
/// coordinates are not assumed to start at zero.
pub fn blocked_grid(offset: i16, size: i16) -> CubicalComplex {
    CubicalComplex::new(
        Orthant::from([offset, -offset]),
        Orthant::from([offset + size, size - offset]),
    )
}
