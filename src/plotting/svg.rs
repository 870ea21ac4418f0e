// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! SVG output of figures.
//!
//! Documents are measured in points and cropped to the drawn content plus a
//! tenth of an inch of padding. Text extents are estimated from the font size,
//! since no font metrics are available here.

use super::figure::{AxesLayout, Bounds, Figure, Patch, union_all};
use super::geometry::Point;

const FONT_FAMILY: &str = "DejaVu Sans, Arial, sans-serif";
const FRAME_WIDTH: f64 = 0.8;
const TICK_LENGTH: f64 = 3.5;
const TICK_PAD: f64 = 3.5;
const LABEL_PAD: f64 = 4.0;
const TIGHT_PAD: f64 = 7.2;
const MAX_TICKS: usize = 9;

/// An SVG document with its size in points.
#[derive(Clone, Debug, PartialEq)]
pub struct SvgDocument {
    /// The document text.
    pub text: String,
    /// Width in points.
    pub width: f64,
    /// Height in points.
    pub height: f64,
}

/// Render a figure as an SVG document.
pub fn render_svg(figure: &Figure) -> SvgDocument {
    let layout = figure.layout();
    let axes = &figure.axes;
    let mut body = String::new();
    let mut extents = Vec::new();

    for collection in &axes.collections {
        body.push_str(&format!(
            "<g id=\"{}\" stroke-width=\"{}\">",
            escape_xml(&collection.label),
            fmt_num(collection.line_width)
        ));
        for patch in &collection.patches {
            let (element, extent) = patch_svg(patch, &layout, collection.line_width);
            body.push_str(&element);
            extents.push(extent);
        }
        body.push_str("</g>");
    }

    if axes.show_frame {
        let (frame_svg, frame_extent) = frame_svg(figure, &layout);
        body.push_str(&frame_svg);
        extents.push(frame_extent);
    }

    let (canvas_width, canvas_height) = figure.canvas_size();
    let view = union_all(extents)
        .map(|extent| extent.padded(TIGHT_PAD))
        .unwrap_or_else(|| Bounds::new(0.0, 0.0, canvas_width, canvas_height));

    let mut text = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}pt\" height=\"{h}pt\" viewBox=\"{x} {y} {w} {h}\">",
        x = fmt_num(view.min_x),
        y = fmt_num(view.min_y),
        w = fmt_num(view.width()),
        h = fmt_num(view.height()),
    );
    text.push_str(&format!(
        "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"white\"/>",
        fmt_num(view.min_x),
        fmt_num(view.min_y),
        fmt_num(view.width()),
        fmt_num(view.height())
    ));
    text.push_str(&body);
    text.push_str("</svg>");

    SvgDocument {
        text,
        width: view.width(),
        height: view.height(),
    }
}

fn paint(color: Option<&str>) -> String {
    color.map_or_else(|| "none".to_string(), escape_xml)
}

fn patch_svg(patch: &Patch, layout: &AxesLayout, line_width: f64) -> (String, Bounds) {
    let stroke_pad = if patch.stroke().is_some() {
        line_width / 2.0
    } else {
        0.0
    };
    match patch {
        Patch::Circle { center, radius, .. } => {
            let center = layout.to_canvas(*center);
            let radius = radius * layout.scale;
            let element = format!(
                "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\" stroke=\"{}\"/>",
                fmt_num(center.x),
                fmt_num(center.y),
                fmt_num(radius),
                paint(Some(patch.fill())),
                paint(patch.stroke())
            );
            (element, Bounds::around(center, radius + stroke_pad))
        }
        Patch::Polygon { points, .. } => {
            let canvas_points: Vec<Point> =
                points.iter().map(|point| layout.to_canvas(*point)).collect();
            let element = format!(
                "<polygon points=\"{}\" fill=\"{}\" stroke=\"{}\"/>",
                points_attribute(&canvas_points),
                paint(Some(patch.fill())),
                paint(patch.stroke())
            );
            let extent = union_all(
                canvas_points
                    .iter()
                    .map(|point| Bounds::around(*point, stroke_pad)),
            )
            .unwrap_or_else(|| Bounds::around(layout.to_canvas(Point::new(0.0, 0.0)), 0.0));
            (element, extent)
        }
    }
}

fn points_attribute(points: &[Point]) -> String {
    points
        .iter()
        .map(|point| format!("{},{}", fmt_num(point.x), fmt_num(point.y)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn frame_svg(figure: &Figure, layout: &AxesLayout) -> (String, Bounds) {
    let axes = &figure.axes;
    let frame = layout.frame;
    let fontsize = axes.fontsize;
    let mut svg = String::from("<g id=\"axis\">");
    let mut extent = frame.padded(FRAME_WIDTH / 2.0);

    svg.push_str(&format!(
        "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"none\" stroke=\"black\" stroke-width=\"{}\"/>",
        fmt_num(frame.min_x),
        fmt_num(frame.min_y),
        fmt_num(frame.width()),
        fmt_num(frame.height()),
        fmt_num(FRAME_WIDTH)
    ));

    // Ticks below the frame
    let x_label_top = frame.max_y + TICK_LENGTH + TICK_PAD;
    for tick in nice_ticks(layout.limits.min_x, layout.limits.max_x, MAX_TICKS) {
        let x = layout.to_canvas(Point::new(tick, 0.0)).x;
        let label = format_tick(tick);
        svg.push_str(&tick_line(x, frame.max_y, x, frame.max_y + TICK_LENGTH));
        svg.push_str(&text_svg(
            &label,
            x,
            x_label_top + fontsize * 0.8,
            fontsize,
            "middle",
            false,
            None,
        ));
        let half_width = text_width(&label, fontsize) / 2.0;
        extent = extent.union(Bounds::new(
            x - half_width,
            x_label_top,
            x + half_width,
            x_label_top + fontsize,
        ));
    }

    // Ticks left of the frame
    let y_label_right = frame.min_x - TICK_LENGTH - TICK_PAD;
    let mut widest_y_label: f64 = 0.0;
    for tick in nice_ticks(layout.limits.min_y, layout.limits.max_y, MAX_TICKS) {
        let y = layout.to_canvas(Point::new(0.0, tick)).y;
        let label = format_tick(tick);
        let width = text_width(&label, fontsize);
        widest_y_label = widest_y_label.max(width);
        svg.push_str(&tick_line(frame.min_x - TICK_LENGTH, y, frame.min_x, y));
        svg.push_str(&text_svg(
            &label,
            y_label_right,
            y + fontsize * 0.35,
            fontsize,
            "end",
            false,
            None,
        ));
        extent = extent.union(Bounds::new(
            y_label_right - width,
            y - fontsize / 2.0,
            y_label_right,
            y + fontsize / 2.0,
        ));
    }

    let center_x = (frame.min_x + frame.max_x) / 2.0;
    let center_y = (frame.min_y + frame.max_y) / 2.0;
    if let Some(xlabel) = &axes.xlabel {
        let (text, italic) = label_text(xlabel);
        let top = x_label_top + fontsize + LABEL_PAD;
        svg.push_str(&text_svg(
            &text,
            center_x,
            top + fontsize * 0.8,
            fontsize,
            "middle",
            italic,
            None,
        ));
        let half_width = text_width(&text, fontsize) / 2.0;
        extent = extent.union(Bounds::new(
            center_x - half_width,
            top,
            center_x + half_width,
            top + fontsize,
        ));
    }
    if let Some(ylabel) = &axes.ylabel {
        let (text, italic) = label_text(ylabel);
        let right = y_label_right - widest_y_label - LABEL_PAD;
        let baseline = right - fontsize * 0.2;
        svg.push_str(&text_svg(
            &text,
            baseline,
            center_y,
            fontsize,
            "middle",
            italic,
            Some(-90.0),
        ));
        let half_width = text_width(&text, fontsize) / 2.0;
        extent = extent.union(Bounds::new(
            right - fontsize,
            center_y - half_width,
            right,
            center_y + half_width,
        ));
    }

    svg.push_str("</g>");
    (svg, extent)
}

fn tick_line(x1: f64, y1: f64, x2: f64, y2: f64) -> String {
    format!(
        "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"black\" stroke-width=\"{}\"/>",
        fmt_num(x1),
        fmt_num(y1),
        fmt_num(x2),
        fmt_num(y2),
        fmt_num(FRAME_WIDTH)
    )
}

fn text_svg(
    text: &str,
    x: f64,
    y: f64,
    fontsize: f64,
    anchor: &str,
    italic: bool,
    rotation: Option<f64>,
) -> String {
    let style = if italic { " font-style=\"italic\"" } else { "" };
    let transform = rotation
        .map(|angle| {
            format!(
                " transform=\"rotate({} {} {})\"",
                fmt_num(angle),
                fmt_num(x),
                fmt_num(y)
            )
        })
        .unwrap_or_default();
    format!(
        "<text x=\"{}\" y=\"{}\" font-family=\"{FONT_FAMILY}\" font-size=\"{}\" text-anchor=\"{anchor}\"{style}{transform}>{}</text>",
        fmt_num(x),
        fmt_num(y),
        fmt_num(fontsize),
        escape_xml(text)
    )
}

/// Estimated width of `text` set at `fontsize`.
fn text_width(text: &str, fontsize: f64) -> f64 {
    0.6 * fontsize * text.chars().count() as f64
}

/// Strip the `$` delimiters of a math label, which is set in italics.
fn label_text(label: &str) -> (String, bool) {
    match label
        .strip_prefix('$')
        .and_then(|inner| inner.strip_suffix('$'))
    {
        Some(inner) => (inner.to_string(), true),
        None => (label.to_string(), false),
    }
}

/// Evenly spaced round values within `[low, high]`: multiples of a step of
/// 1, 2, 2.5 or 5 times a power of ten, choosing the smallest step that yields
/// at most `max_ticks` values.
pub fn nice_ticks(low: f64, high: f64, max_ticks: usize) -> Vec<f64> {
    let span = high - low;
    if !(span > 0.0 && span.is_finite()) || max_ticks == 0 {
        return Vec::new();
    }

    let magnitude = 10f64.powf((span / max_ticks as f64).log10().floor());
    for multiple in [1.0, 2.0, 2.5, 5.0, 10.0] {
        let step = multiple * magnitude;
        let first = (low / step).ceil() as i64;
        let last = (high / step).floor() as i64;
        if last - first + 1 <= max_ticks as i64 {
            return (first..=last).map(|i| i as f64 * step).collect();
        }
    }
    Vec::new()
}

/// Format a tick value, using a typographic minus sign.
fn format_tick(value: f64) -> String {
    let text = fmt_num(value);
    match text.strip_prefix('-') {
        Some(magnitude) => format!("\u{2212}{magnitude}"),
        None => text,
    }
}

/// Format a number with at most three decimals and no trailing zeros.
fn fmt_num(value: f64) -> String {
    let text = format!("{value:.3}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PatchCollection;

    fn vertex_figure(show_frame: bool) -> Figure {
        let mut figure = Figure::new(7.0, 7.0);
        figure.axes.show_frame = show_frame;
        figure.axes.fontsize = 15.0;
        figure.axes.add_collection(PatchCollection::new(
            "vertices",
            vec![
                Patch::Circle {
                    center: Point::new(0.0, 0.0),
                    radius: 0.1,
                    fill: "red".to_string(),
                    stroke: Some("black".to_string()),
                },
                Patch::Circle {
                    center: Point::new(2.0, 1.0),
                    radius: 0.1,
                    fill: "blue".to_string(),
                    stroke: Some("black".to_string()),
                },
            ],
            1.0,
        ));
        figure
    }

    #[test]
    fn test_fmt_num() {
        assert_eq!(fmt_num(1.0), "1");
        assert_eq!(fmt_num(0.5), "0.5");
        assert_eq!(fmt_num(2.125), "2.125");
        assert_eq!(fmt_num(-0.0001), "0");
        assert_eq!(fmt_num(-3.25), "-3.25");
        assert_eq!(fmt_num(0.30000000000000004), "0.3");
    }

    #[test]
    fn test_format_tick() {
        assert_eq!(format_tick(-1.5), "\u{2212}1.5");
        assert_eq!(format_tick(2.0), "2");
    }

    #[test]
    fn test_nice_ticks() {
        let quarters: Vec<f64> = (0..=8).map(|i| i as f64 * 0.25).collect();
        assert_eq!(nice_ticks(-0.1, 2.1, 9), quarters);
        assert_eq!(
            nice_ticks(0.0, 10.0, 9),
            vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]
        );
        assert!(nice_ticks(1.0, 1.0, 9).is_empty());
        for (low, high) in [(-3.7, 12.9), (0.01, 0.02), (-250.0, -1.0)] {
            let ticks = nice_ticks(low, high, 9);
            let tolerance = 1e-9 * (high - low);
            assert!(!ticks.is_empty() && ticks.len() <= 9);
            assert!(
                ticks
                    .iter()
                    .all(|tick| low - tolerance <= *tick && *tick <= high + tolerance)
            );
        }
    }

    #[test]
    fn test_label_text() {
        assert_eq!(label_text("$x$"), ("x".to_string(), true));
        assert_eq!(label_text("time"), ("time".to_string(), false));
        assert_eq!(label_text("$"), ("$".to_string(), false));
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a<b & \"c\""), "a&lt;b &amp; &quot;c&quot;");
    }

    #[test]
    fn test_hidden_frame_crops_to_patches() {
        let figure = vertex_figure(false);
        let document = render_svg(&figure);
        let layout = figure.layout();

        // Two unit-radius-0.1 circles 2 units apart, outline and padding added
        let expected_width = 2.2 * layout.scale + 1.0 + 2.0 * TIGHT_PAD;
        assert!((document.width - expected_width).abs() < 1e-9);
        assert_eq!(document.text.matches("<circle").count(), 2);
        assert!(!document.text.contains("<text"));
        assert!(!document.text.contains("id=\"axis\""));
    }

    #[test]
    fn test_frame_draws_ticks_and_labels() {
        let mut figure = vertex_figure(true);
        figure.axes.xlabel = Some("$x$".to_string());
        figure.axes.ylabel = Some("height & depth".to_string());
        let document = render_svg(&figure);

        assert!(document.text.contains("id=\"axis\""));
        assert!(document.text.contains("<line"));
        assert!(document.text.contains("font-style=\"italic\">x</text>"));
        assert!(document.text.contains("height &amp; depth"));
        assert!(document.text.contains("rotate(-90"));
        assert!(document.width > render_svg(&vertex_figure(false)).width);
    }

    #[test]
    fn test_empty_figure_uses_canvas() {
        let mut figure = Figure::new(2.0, 1.0);
        figure.axes.show_frame = false;
        let document = render_svg(&figure);

        assert_eq!((document.width, document.height), (144.0, 72.0));
        assert!(document.text.starts_with("<svg"));
        assert!(document.text.ends_with("</svg>"));
        assert!(!document.text.contains("<g"));
    }
}
