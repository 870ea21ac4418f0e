// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Executable for generating sample figures for visual inspection.
//!
//! This program plots a few sample complexes to SVG files in the
//! testing/figures directory, and stores the explicit sample complex as JSON
//! next to them. Set `RUST_LOG` to change the log level (default `info`).

use std::error::Error;
use std::fs;

use chomp3rs_plot::{ComplexLike, PlotOptions, plot_cubical_complex_2d};
use tracing::info;
use tracing_subscriber::EnvFilter;

const FIGURE_DIR: &str = "testing/figures";

fn plot_to_file<C>(complex: &C, name: &str, options: PlotOptions) -> Result<(), Box<dyn Error>>
where
    C: ComplexLike,
{
    let options = PlotOptions {
        fig_fname: Some(format!("{FIGURE_DIR}/{name}.svg").into()),
        ..options
    };
    plot_cubical_complex_2d(complex, &options)?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Ensures the directory exists and is empty
    if fs::exists(FIGURE_DIR)? {
        fs::remove_dir_all(FIGURE_DIR)?;
    }
    fs::create_dir_all(FIGURE_DIR)?;

    info!("Generating sample figures...");

    let grid = cubical_complex_generators::torus_grid();
    plot_to_file(&grid, "torus_grid", PlotOptions::default())?;
    plot_to_file(
        &grid,
        "torus_grid_blowup_axis",
        PlotOptions {
            blowup: true,
            plot_axis: true,
            ..PlotOptions::default()
        },
    )?;
    plot_to_file(
        &cubical_complex_generators::smallest_grid(),
        "smallest_grid_vertices",
        PlotOptions {
            plot_faces: false,
            plot_edges: false,
            ..PlotOptions::default()
        },
    )?;

    let strip = cell_complex_generators::two_square_strip();
    plot_to_file(
        &strip,
        "two_square_strip",
        PlotOptions {
            fig_width: 6.0,
            fig_height: 3.0,
            plot_axis: true,
            xlabel: "position".to_string(),
            ..PlotOptions::default()
        },
    )?;
    let json = serde_json::to_string_pretty(&strip)?;
    fs::write(format!("{FIGURE_DIR}/two_square_strip_complex.json"), json)?;

    info!("Sample figures written to {FIGURE_DIR}");
    Ok(())
}

/// Module containing generators for CellComplex samples
mod cell_complex_generators {
    use chomp3rs_plot::{CellComplex, Orthant};

    /// Two unit squares side by side; the right square is fringe except for
    /// the edge and vertices it shares with the left one.
    ///
    /// Mirrors `test_utilities::two_square_strip`, which the binary cannot
    /// depend on; keep the two in sync.
    pub fn two_square_strip() -> CellComplex {
        // Vertices 0-5, horizontal edges 6-9, vertical edges 10-12, squares 13-14
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
        let fringe_cells = [2, 5, 7, 9, 12, 14];

        CellComplex::new(
            vec![0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 2, 2],
            coordinates.into_iter().map(Orthant::from).collect(),
            vec![0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 2, 2, 2, 3, 3],
            (0..15).map(|cell| fringe_cells.contains(&cell)).collect(),
            boundaries,
        )
    }
}

/// Module containing generators for CubicalComplex samples
mod cubical_complex_generators {
    use chomp3rs_plot::{CubicalComplex, Orthant};

    /// 2x2 boxes plus the fringe layer.
    pub fn smallest_grid() -> CubicalComplex {
        CubicalComplex::new(Orthant::from([0, 0]), Orthant::from([2, 2]))
    }

    /// 6x4 boxes plus the fringe layer.
    pub fn torus_grid() -> CubicalComplex {
        CubicalComplex::new(Orthant::from([0, 0]), Orthant::from([6, 4]))
    }
}
