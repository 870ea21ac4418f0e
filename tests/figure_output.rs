use std::env;
use std::fs;
use std::path::PathBuf;

use chomp3rs_plot::{PlotOptions, build_figure, plot_cubical_complex_2d};
use test_utilities::{torus_grid, two_square_strip};

fn output_path(name: &str) -> PathBuf {
    let directory = env::temp_dir().join("chomp3rs_plot_tests");
    fs::create_dir_all(&directory).unwrap();
    directory.join(name)
}

#[test]
fn svg_has_one_element_per_patch() {
    let complex = torus_grid(4, 4);
    let svg = build_figure(&complex, &PlotOptions::default()).to_svg();

    // 25 faces and 50 edges are polygons, 25 vertices are circles
    assert_eq!(svg.matches("<polygon").count(), 75);
    assert_eq!(svg.matches("<circle").count(), 25);
    assert_eq!(svg.matches("fill=\"#add8e6\"").count(), 4);
    assert_eq!(svg.matches("fill=\"blue\"").count(), 12 + 9);

    // Faces, then edges, then vertices
    let faces = svg.find("id=\"faces\"").unwrap();
    let edges = svg.find("id=\"edges\"").unwrap();
    let vertices = svg.find("id=\"vertices\"").unwrap();
    assert!(faces < edges && edges < vertices);
}

#[test]
fn hidden_axis_has_no_text() {
    let svg = build_figure(&torus_grid(2, 2), &PlotOptions::default()).to_svg();
    assert!(!svg.contains("<text"));

    let options = PlotOptions {
        plot_axis: true,
        ..PlotOptions::default()
    };
    let svg = build_figure(&torus_grid(2, 2), &options).to_svg();
    assert!(svg.contains("<text"));
    assert!(svg.contains("font-style=\"italic\">x</text>"));
}

#[test]
fn plot_writes_svg_file() {
    let path = output_path("strip.svg");
    let options = PlotOptions {
        fig_fname: Some(path.clone()),
        plot_axis: true,
        ..PlotOptions::default()
    };

    let figure = plot_cubical_complex_2d(&two_square_strip(), &options).unwrap();
    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(written, figure.to_svg());
}

#[test]
fn plot_writes_png_file() {
    let path = output_path("grid.png");
    let options = PlotOptions {
        fig_fname: Some(path.clone()),
        fig_width: 2.0,
        fig_height: 2.0,
        dpi: 72,
        blowup: true,
        ..PlotOptions::default()
    };

    plot_cubical_complex_2d(&torus_grid(3, 3), &options).unwrap();
    let bytes = fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"\x89PNG\r\n\x1a\n"));
}

#[test]
fn save_into_missing_directory_fails() {
    let path = output_path("missing").join("nested").join("grid.svg");
    let options = PlotOptions {
        fig_fname: Some(path),
        ..PlotOptions::default()
    };

    assert!(plot_cubical_complex_2d(&torus_grid(2, 2), &options).is_err());
}
