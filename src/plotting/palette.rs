// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Serialize};

use super::classify::CellRole;

/// Outline color of vertex markers, regardless of role.
pub const VERTEX_OUTLINE: &str = "black";

/// One color per [`CellRole`]. Colors are any SVG color: a name such as
/// `"darkred"` or a hex string such as `"#add8e6"`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleColors {
    /// Color of fringe cells.
    pub fringe: String,
    /// Color of boundary cells.
    pub boundary: String,
    /// Color of interior cells.
    pub interior: String,
}

impl RoleColors {
    /// Create role colors from string slices.
    #[must_use]
    pub fn new(fringe: &str, boundary: &str, interior: &str) -> Self {
        Self {
            fringe: fringe.to_string(),
            boundary: boundary.to_string(),
            interior: interior.to_string(),
        }
    }

    /// The color of a role.
    #[must_use]
    pub fn color(&self, role: CellRole) -> &str {
        match role {
            CellRole::Fringe => &self.fringe,
            CellRole::Boundary => &self.boundary,
            CellRole::Interior => &self.interior,
        }
    }
}

/// Colors for each kind of cell. Fringe cells are drawn in a neutral family,
/// boundary cells in a red family and interior cells in a blue family; faces
/// use light shades so that edges and vertices stay visible on top of them.
///
/// # Examples
///
/// ```rust
/// use chomp3rs_plot::{CellRole, Palette};
///
/// let palette = Palette::default();
/// assert_eq!(palette.edges.color(CellRole::Boundary), "darkred");
/// assert_eq!(palette.faces.color(CellRole::Interior), "#add8e6");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Fill colors of vertex markers.
    pub vertices: RoleColors,
    /// Fill and stroke colors of edges.
    pub edges: RoleColors,
    /// Fill colors of faces.
    pub faces: RoleColors,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            vertices: RoleColors::new("black", "red", "blue"),
            edges: RoleColors::new("black", "darkred", "blue"),
            faces: RoleColors::new("#d3d3d3", "#ffb6c1", "#add8e6"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_colors() {
        let palette = Palette::default();
        assert_eq!(palette.vertices.color(CellRole::Fringe), "black");
        assert_eq!(palette.vertices.color(CellRole::Boundary), "red");
        assert_eq!(palette.vertices.color(CellRole::Interior), "blue");
        assert_eq!(palette.faces.color(CellRole::Fringe), "#d3d3d3");
        assert_eq!(palette.faces.color(CellRole::Boundary), "#ffb6c1");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let palette: Palette = serde_json::from_str(
            r#"{"faces": {"fringe": "white", "boundary": "pink", "interior": "cyan"}}"#,
        )
        .unwrap();

        assert_eq!(palette.faces.color(CellRole::Interior), "cyan");
        assert_eq!(palette.vertices, Palette::default().vertices);
    }
}
