//! Scene definition files.
//!
//! A scene is a YAML document giving the surface dimensions and an ordered
//! list of shapes to draw:
//!
//! ```yaml
//! name: demo
//! width: 1024
//! height: 1024
//! shapes:
//!   - type: rectangle
//!     ll: { x: 300, y: 100 }
//!     ur: { x: 900, y: 600 }
//!     colour: red
//!   - type: circle
//!     center: { x: 500, y: 500 }
//!     radius: 200
//!     colour: green
//! ```
//!
//! Colours are palette names or `#RRGGBB` hex. A hex colour outside the
//! palette parses fine here and is rejected later by the draw-time palette
//! check - parsing and validation are separate gates.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{RastError, Result};
use crate::types::{palette, Circle, Colour, Point, Rectangle, Shape, Triangle};

/// A parsed scene definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneDef {
    /// Scene name; used for the output file name when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Surface width in pixels.
    pub width: usize,

    /// Surface height in pixels.
    pub height: usize,

    /// Shapes in draw order.
    #[serde(default)]
    pub shapes: Vec<ShapeDef>,
}

/// One shape entry in a scene file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ShapeDef {
    Rectangle {
        ll: Point,
        ur: Point,
        colour: String,
    },
    Circle {
        center: Point,
        radius: i32,
        colour: String,
    },
    Triangle {
        vertices: [Point; 3],
        colour: String,
    },
}

impl ShapeDef {
    /// The shape entry's colour reference, as written in the file.
    pub fn colour_ref(&self) -> &str {
        match self {
            ShapeDef::Rectangle { colour, .. }
            | ShapeDef::Circle { colour, .. }
            | ShapeDef::Triangle { colour, .. } => colour,
        }
    }

    /// The points the pre-draw bounds check will look at.
    ///
    /// Mirrors the draw-time rule: both rectangle corners, all three
    /// triangle vertices, the circle centre only.
    pub fn defining_points(&self) -> Vec<Point> {
        match *self {
            ShapeDef::Rectangle { ll, ur, .. } => vec![ll, ur],
            ShapeDef::Circle { center, .. } => vec![center],
            ShapeDef::Triangle { vertices, .. } => vertices.to_vec(),
        }
    }

    /// A short label for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            ShapeDef::Rectangle { .. } => "rectangle",
            ShapeDef::Circle { .. } => "circle",
            ShapeDef::Triangle { .. } => "triangle",
        }
    }

    /// Resolve this entry into a drawable shape.
    pub fn resolve(&self) -> Result<Shape> {
        let colour = resolve_colour(self.colour_ref())?;
        Ok(match *self {
            ShapeDef::Rectangle { ll, ur, .. } => Rectangle::new(ll, ur, colour).into(),
            ShapeDef::Circle { center, radius, .. } => Circle::new(center, radius, colour).into(),
            ShapeDef::Triangle { vertices, .. } => {
                Triangle::new(vertices[0], vertices[1], vertices[2], colour).into()
            }
        })
    }
}

impl SceneDef {
    /// Parse a scene from YAML text.
    pub fn from_yaml(text: &str) -> Result<Self> {
        serde_yaml::from_str(text).map_err(|e| RastError::Parse {
            message: format!("Invalid scene file: {}", e),
            help: Some("See `rast init` for a working example".to_string()),
        })
    }

    /// Load a scene from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| RastError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read scene: {}", e),
        })?;
        Self::from_yaml(&text)
    }

    /// Resolve every shape entry, in draw order.
    pub fn resolve_shapes(&self) -> Result<Vec<Shape>> {
        self.shapes.iter().map(ShapeDef::resolve).collect()
    }
}

/// Resolve a colour reference: a palette name, or `#RGB`/`#RRGGBB` hex.
pub fn resolve_colour(reference: &str) -> Result<Colour> {
    if let Some(colour) = palette::lookup(reference) {
        return Ok(colour);
    }
    if reference.starts_with('#') {
        return Colour::from_hex(reference);
    }
    Err(RastError::Parse {
        message: format!("Unknown colour name: {}", reference),
        help: Some("Use a palette name (see `rast palette`) or #RRGGBB hex".to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEMO: &str = "\
name: demo
width: 64
height: 48
shapes:
  - type: rectangle
    ll: { x: 2, y: 2 }
    ur: { x: 10, y: 8 }
    colour: red
  - type: circle
    center: { x: 30, y: 20 }
    radius: 6
    colour: green
  - type: triangle
    vertices:
      - { x: 40, y: 5 }
      - { x: 60, y: 10 }
      - { x: 50, y: 40 }
    colour: yellow
";

    #[test]
    fn test_parse_scene() {
        let scene = SceneDef::from_yaml(DEMO).unwrap();
        assert_eq!(scene.name.as_deref(), Some("demo"));
        assert_eq!(scene.width, 64);
        assert_eq!(scene.height, 48);
        assert_eq!(scene.shapes.len(), 3);
    }

    #[test]
    fn test_resolve_shapes() {
        let scene = SceneDef::from_yaml(DEMO).unwrap();
        let shapes = scene.resolve_shapes().unwrap();
        assert_eq!(shapes[0].kind(), "rectangle");
        assert_eq!(shapes[0].colour(), Colour::RED);
        assert_eq!(shapes[1].kind(), "circle");
        assert_eq!(shapes[2].kind(), "triangle");
        assert_eq!(shapes[2].colour(), Colour::YELLOW);
    }

    #[test]
    fn test_shapes_default_to_empty() {
        let scene = SceneDef::from_yaml("width: 8\nheight: 8\n").unwrap();
        assert!(scene.shapes.is_empty());
        assert!(scene.name.is_none());
    }

    #[test]
    fn test_resolve_colour_names_and_hex() {
        assert_eq!(resolve_colour("orange").unwrap(), Colour::rgb(255, 164, 0));
        assert_eq!(resolve_colour("#FF0000").unwrap(), Colour::RED);
        // Hex outside the palette still parses; the draw-time check is
        // what rejects it.
        assert_eq!(
            resolve_colour("#666666").unwrap(),
            Colour::rgb(102, 102, 102)
        );
        assert!(resolve_colour("grey").is_err());
        assert!(resolve_colour("").is_err());
    }

    #[test]
    fn test_parse_rejects_unknown_shape_type() {
        let result = SceneDef::from_yaml(
            "width: 8\nheight: 8\nshapes:\n  - type: hexagon\n    colour: red\n",
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_rejects_unknown_fields() {
        let result = SceneDef::from_yaml("width: 8\nheight: 8\ndepth: 8\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = SceneDef::load(Path::new("/nonexistent/scene.yaml")).unwrap_err();
        assert!(matches!(err, RastError::Io { .. }));
    }
}
