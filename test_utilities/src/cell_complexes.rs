use chomp3rs_plot::{CellComplex, Orthant};

/// Two unit squares side by side, where the right square (minus the edge and
/// vertices it shares with the left one) is fringe.
///
/// Cells 0-5 are the vertices (0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1);
/// cells 6-9 the horizontal edges based at (0, 0), (1, 0), (0, 1), (1, 1);
/// cells 10-12 the vertical edges based at (0, 0), (1, 0), (2, 0); cells 13
/// and 14 the left and right squares.
pub fn two_square_strip() -> CellComplex {
    let coordinates = [
        [0, 0],
        [1, 0],
        [2, 0],
        [0, 1],
        [1, 1],
        [2, 1],
        [0, 0],
        [1, 0],
        [0, 1],
        [1, 1],
        [0, 0],
        [1, 0],
        [2, 0],
        [0, 0],
        [1, 0],
    ];
    let cell_dimensions = vec![0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 2, 2];
    let shapes = vec![0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 2, 2, 2, 3, 3];
    let fringe_cells = [2, 5, 7, 9, 12, 14];
    let boundaries = vec![
        vec![],
        vec![],
        vec![],
        vec![],
        vec![],
        vec![],
        vec![0, 1],
        vec![1, 2],
        vec![3, 4],
        vec![4, 5],
        vec![0, 3],
        vec![1, 4],
        vec![2, 5],
        vec![6, 8, 10, 11],
        vec![7, 9, 11, 12],
    ];

    CellComplex::new(
        cell_dimensions,
        coordinates.into_iter().map(Orthant::from).collect(),
        shapes,
        (0..15).map(|cell| fringe_cells.contains(&cell)).collect(),
        boundaries,
    )
}
