// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The scene produced by the renderer: a figure holding a single set of axes,
//! which in turn holds collections of styled patches in data coordinates.
//!
//! The layout follows the usual conventions of scientific plotting: the axes
//! occupy the subplot region of the figure (12.5% to 90% of its width, 11% to
//! 88% of its height), shrunk and centered so that one data unit has the same
//! length along both axes. View limits are the data limits with a 5% margin
//! on either side.

use std::error::Error;
use std::ffi::OsStr;
use std::fs;
use std::path::Path;

use tracing::info;

use super::geometry::Point;
use super::raster::write_png;
use super::svg::render_svg;

/// Number of points (the unit of the figure canvas) in an inch.
pub const POINTS_PER_INCH: f64 = 72.0;

const SUBPLOT_LEFT: f64 = 0.125;
const SUBPLOT_RIGHT: f64 = 0.9;
const SUBPLOT_BOTTOM: f64 = 0.11;
const SUBPLOT_TOP: f64 = 0.88;
const VIEW_MARGIN: f64 = 0.05;

/// An axis-aligned rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    /// Least horizontal coordinate.
    pub min_x: f64,
    /// Least vertical coordinate.
    pub min_y: f64,
    /// Greatest horizontal coordinate.
    pub max_x: f64,
    /// Greatest vertical coordinate.
    pub max_y: f64,
}

impl Bounds {
    /// Create bounds from their corners.
    #[must_use]
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// The square of half-width `radius` centered on `center`.
    #[must_use]
    pub fn around(center: Point, radius: f64) -> Self {
        Self::new(
            center.x - radius,
            center.y - radius,
            center.x + radius,
            center.y + radius,
        )
    }

    /// The smallest bounds containing both `self` and `other`.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self::new(
            self.min_x.min(other.min_x),
            self.min_y.min(other.min_y),
            self.max_x.max(other.max_x),
            self.max_y.max(other.max_y),
        )
    }

    /// Width of the bounds.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Height of the bounds.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Grow every side by `pad`.
    #[must_use]
    pub fn padded(self, pad: f64) -> Self {
        Self::new(
            self.min_x - pad,
            self.min_y - pad,
            self.max_x + pad,
            self.max_y + pad,
        )
    }

    /// Grow each axis by `fraction` of its length on both sides. An axis of
    /// zero length grows by half a unit on both sides instead.
    #[must_use]
    pub fn with_margins(self, fraction: f64) -> Self {
        let margin = |length: f64| {
            if length > 0.0 {
                fraction * length
            } else {
                0.5
            }
        };
        let (mx, my) = (margin(self.width()), margin(self.height()));
        Self::new(
            self.min_x - mx,
            self.min_y - my,
            self.max_x + mx,
            self.max_y + my,
        )
    }
}

/// Union of the bounds in `iter`, or `None` if it is empty.
pub(crate) fn union_all(iter: impl IntoIterator<Item = Bounds>) -> Option<Bounds> {
    iter.into_iter().reduce(Bounds::union)
}

/// A styled shape in data coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum Patch {
    /// A disk, used for vertices.
    Circle {
        /// Center of the disk.
        center: Point,
        /// Radius in data units.
        radius: f64,
        /// Fill color.
        fill: String,
        /// Outline color, or `None` for no outline.
        stroke: Option<String>,
    },
    /// A closed polygon, used for edges and faces.
    Polygon {
        /// Vertices of the polygon in drawing order.
        points: Vec<Point>,
        /// Fill color.
        fill: String,
        /// Outline color, or `None` for no outline.
        stroke: Option<String>,
    },
}

impl Patch {
    /// Bounds of the patch in data coordinates, ignoring line widths.
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        match self {
            Self::Circle { center, radius, .. } => Bounds::around(*center, *radius),
            Self::Polygon { points, .. } => {
                union_all(points.iter().map(|point| Bounds::around(*point, 0.0)))
                    .unwrap_or_else(|| Bounds::new(0.0, 0.0, 0.0, 0.0))
            }
        }
    }

    /// Fill color of the patch.
    #[must_use]
    pub fn fill(&self) -> &str {
        match self {
            Self::Circle { fill, .. } | Self::Polygon { fill, .. } => fill,
        }
    }

    /// Outline color of the patch, if it has an outline.
    #[must_use]
    pub fn stroke(&self) -> Option<&str> {
        match self {
            Self::Circle { stroke, .. } | Self::Polygon { stroke, .. } => stroke.as_deref(),
        }
    }
}

/// Patches drawn together with a common line width.
#[derive(Clone, Debug, PartialEq)]
pub struct PatchCollection {
    /// Name of the collection, used to group its patches in the output.
    pub label: String,
    /// Patches in drawing order.
    pub patches: Vec<Patch>,
    /// Outline width in points.
    pub line_width: f64,
}

impl PatchCollection {
    /// Create a collection.
    #[must_use]
    pub fn new(label: &str, patches: Vec<Patch>, line_width: f64) -> Self {
        Self {
            label: label.to_string(),
            patches,
            line_width,
        }
    }

    /// Bounds of all patches, or `None` if there are none.
    #[must_use]
    pub fn bounds(&self) -> Option<Bounds> {
        union_all(self.patches.iter().map(Patch::bounds))
    }
}

/// A set of axes with equal aspect ratio.
#[derive(Clone, Debug, PartialEq)]
pub struct Axes {
    /// Collections in drawing order: later collections are drawn on top.
    pub collections: Vec<PatchCollection>,
    /// Draw the frame, ticks and tick labels.
    pub show_frame: bool,
    /// Label below the horizontal axis, drawn only with the frame.
    pub xlabel: Option<String>,
    /// Label left of the vertical axis, drawn only with the frame.
    pub ylabel: Option<String>,
    /// Font size of labels and tick labels, in points.
    pub fontsize: f64,
}

impl Default for Axes {
    fn default() -> Self {
        Self {
            collections: Vec::new(),
            show_frame: true,
            xlabel: None,
            ylabel: None,
            fontsize: 10.0,
        }
    }
}

impl Axes {
    /// Add a collection on top of the existing ones.
    pub fn add_collection(&mut self, collection: PatchCollection) {
        self.collections.push(collection);
    }

    /// Bounds of all drawn data, or `None` if nothing is drawn.
    #[must_use]
    pub fn data_bounds(&self) -> Option<Bounds> {
        union_all(self.collections.iter().filter_map(PatchCollection::bounds))
    }

    /// The view limits: the data bounds with margins, or the unit square when
    /// there is no data.
    #[must_use]
    pub fn view_limits(&self) -> Bounds {
        self.data_bounds()
            .map(|bounds| bounds.with_margins(VIEW_MARGIN))
            .unwrap_or_else(|| Bounds::new(0.0, 0.0, 1.0, 1.0))
    }
}

/// Placement of the axes on the figure canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxesLayout {
    /// Axes frame in canvas coordinates (points, vertical axis pointing down).
    pub frame: Bounds,
    /// View limits in data coordinates.
    pub limits: Bounds,
    /// Points per data unit, equal along both axes.
    pub scale: f64,
}

impl AxesLayout {
    /// Canvas position of a point in data coordinates.
    #[must_use]
    pub fn to_canvas(&self, point: Point) -> Point {
        Point::new(
            self.frame.min_x + (point.x - self.limits.min_x) * self.scale,
            self.frame.min_y + (self.limits.max_y - point.y) * self.scale,
        )
    }
}

/// A figure of fixed size holding one set of axes.
///
/// # Examples
///
/// ```rust
/// use chomp3rs_plot::{Figure, Patch, PatchCollection, Point};
///
/// let mut figure = Figure::new(4.0, 3.0);
/// figure.axes.add_collection(PatchCollection::new(
///     "vertices",
///     vec![Patch::Circle {
///         center: Point::new(0.0, 0.0),
///         radius: 0.1,
///         fill: "blue".to_string(),
///         stroke: Some("black".to_string()),
///     }],
///     1.0,
/// ));
///
/// let svg = figure.to_svg();
/// assert!(svg.starts_with("<svg"));
/// assert!(svg.contains("<circle"));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Figure {
    /// Width in inches.
    pub width: f64,
    /// Height in inches.
    pub height: f64,
    /// The axes of the figure.
    pub axes: Axes,
}

impl Figure {
    /// Create an empty figure of the given size in inches.
    ///
    /// # Panics
    /// Panics if either dimension is not positive.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        assert!(
            width > 0.0 && height > 0.0,
            "Figure dimensions must be positive, got {width} x {height}"
        );
        Self {
            width,
            height,
            axes: Axes::default(),
        }
    }

    /// Canvas size in points.
    #[must_use]
    pub fn canvas_size(&self) -> (f64, f64) {
        (self.width * POINTS_PER_INCH, self.height * POINTS_PER_INCH)
    }

    /// Place the axes on the canvas.
    #[must_use]
    pub fn layout(&self) -> AxesLayout {
        let (canvas_width, canvas_height) = self.canvas_size();
        let region = Bounds::new(
            SUBPLOT_LEFT * canvas_width,
            (1.0 - SUBPLOT_TOP) * canvas_height,
            SUBPLOT_RIGHT * canvas_width,
            (1.0 - SUBPLOT_BOTTOM) * canvas_height,
        );

        let limits = self.axes.view_limits();
        let scale = (region.width() / limits.width()).min(region.height() / limits.height());
        let (frame_width, frame_height) = (limits.width() * scale, limits.height() * scale);
        let min_x = region.min_x + (region.width() - frame_width) / 2.0;
        let min_y = region.min_y + (region.height() - frame_height) / 2.0;

        AxesLayout {
            frame: Bounds::new(min_x, min_y, min_x + frame_width, min_y + frame_height),
            limits,
            scale,
        }
    }

    /// Render the figure as an SVG document, cropped to the drawn content.
    #[must_use]
    pub fn to_svg(&self) -> String {
        render_svg(self).text
    }

    /// Save the figure to `path`. A path with the `png` extension is
    /// rasterized at `dpi` dots per inch; any other path receives the SVG
    /// document.
    pub fn save(&self, path: &Path, dpi: u32) -> Result<(), Box<dyn Error>> {
        let document = render_svg(self);
        let is_png = path
            .extension()
            .and_then(OsStr::to_str)
            .is_some_and(|extension| extension.eq_ignore_ascii_case("png"));

        if is_png {
            write_png(&document, path, dpi)?;
        } else {
            fs::write(path, &document.text)?;
        }
        info!("Saved figure to {}", path.display());
        Ok(())
    }
}
