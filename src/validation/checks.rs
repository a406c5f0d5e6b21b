//! Individual validation checks over a scene definition.

use crate::scene::{resolve_colour, SceneDef, ShapeDef};
use crate::types::palette;

use super::{Diagnostic, ValidationResult};

/// Surface dimensions must be positive.
pub(super) fn check_dimensions(scene: &SceneDef) -> ValidationResult {
    let mut result = ValidationResult::new();
    if scene.width == 0 || scene.height == 0 {
        result.push(Diagnostic::error(
            "rast::validate::empty-surface",
            format!("surface is {}x{}", scene.width, scene.height),
        ));
    }
    result
}

/// Every colour reference must resolve, and resolve into the palette.
pub(super) fn check_colours(scene: &SceneDef) -> ValidationResult {
    let mut result = ValidationResult::new();
    for (index, shape) in scene.shapes.iter().enumerate() {
        match resolve_colour(shape.colour_ref()) {
            Err(_) => {
                result.push(
                    Diagnostic::error(
                        "rast::validate::bad-colour-ref",
                        format!(
                            "shape {} ({}): unrecognized colour reference {:?}",
                            index,
                            shape.kind(),
                            shape.colour_ref()
                        ),
                    )
                    .with_help("use a palette name or #RRGGBB hex"),
                );
            }
            Ok(colour) if !palette::is_known(colour) => {
                result.push(
                    Diagnostic::error(
                        "rast::validate::colour-unknown",
                        format!(
                            "shape {} ({}): {} is not a palette colour and will be rejected",
                            index,
                            shape.kind(),
                            colour
                        ),
                    )
                    .with_help("run `rast palette` to list the recognized colours"),
                );
            }
            Ok(_) => {}
        }
    }
    result
}

/// Defining points must lie on the surface.
pub(super) fn check_bounds(scene: &SceneDef) -> ValidationResult {
    let mut result = ValidationResult::new();
    let (width, height) = (scene.width as i32, scene.height as i32);
    for (index, shape) in scene.shapes.iter().enumerate() {
        for p in shape.defining_points() {
            if p.x < 0 || p.x >= width || p.y < 0 || p.y >= height {
                result.push(Diagnostic::error(
                    "rast::validate::out-of-bounds",
                    format!(
                        "shape {} ({}): point ({}, {}) is outside the {}x{} surface",
                        index,
                        shape.kind(),
                        p.x,
                        p.y,
                        scene.width,
                        scene.height
                    ),
                ));
                break; // one report per shape is enough
            }
        }
    }
    result
}

/// Rectangle corners should satisfy ll <= ur; the fill does not re-sort them.
pub(super) fn check_rectangle_corners(scene: &SceneDef) -> ValidationResult {
    let mut result = ValidationResult::new();
    for (index, shape) in scene.shapes.iter().enumerate() {
        if let ShapeDef::Rectangle { ll, ur, .. } = shape {
            if ll.x > ur.x || ll.y > ur.y {
                result.push(
                    Diagnostic::warning(
                        "rast::validate::reversed-corners",
                        format!(
                            "shape {} (rectangle): ll ({}, {}) is not below-left of ur ({}, {})",
                            index, ll.x, ll.y, ur.x, ur.y
                        ),
                    )
                    .with_help("corners are not re-sorted; a reversed axis draws nothing"),
                );
            }
        }
    }
    result
}

/// Circle radii: negative is an error, spilling past the edge a warning.
pub(super) fn check_circles(scene: &SceneDef) -> ValidationResult {
    let mut result = ValidationResult::new();
    let (width, height) = (scene.width as i32, scene.height as i32);
    for (index, shape) in scene.shapes.iter().enumerate() {
        if let ShapeDef::Circle { center, radius, .. } = *shape {
            if radius < 0 {
                result.push(Diagnostic::error(
                    "rast::validate::negative-radius",
                    format!("shape {} (circle): radius {} is negative", index, radius),
                ));
            } else if center.x - radius < 0
                || center.x + radius >= width
                || center.y - radius < 0
                || center.y + radius >= height
            {
                result.push(
                    Diagnostic::warning(
                        "rast::validate::circle-clipped",
                        format!(
                            "shape {} (circle): radius {} extends past the surface edge",
                            index, radius
                        ),
                    )
                    .with_help("only the centre is bounds-checked; spilled pixels are dropped"),
                );
            }
        }
    }
    result
}
