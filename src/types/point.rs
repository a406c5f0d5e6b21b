//! Integer point type.

use serde::{Deserialize, Serialize};

/// A point in surface coordinate space.
///
/// `x` is the column, `y` the row. A point carries no bounds of its own;
/// validity is relative to the surface it is drawn against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a new point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}
