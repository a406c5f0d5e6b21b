//! Shared pre-draw checks.

use crate::error::{RastError, Result};
use crate::surface::Surface;
use crate::types::{palette, Colour, Point};

/// Check that every point lies on the surface.
///
/// A point is out of bounds when either coordinate is negative or at least
/// the corresponding surface dimension. One bad point rejects the lot.
pub(crate) fn points_in_bounds(points: &[Point], surface: &Surface) -> Result<()> {
    let (width, height) = surface.dimensions();
    for p in points {
        if p.x < 0 || p.x >= width || p.y < 0 || p.y >= height {
            return Err(RastError::OutOfBounds);
        }
    }
    Ok(())
}

/// Check that a fill colour is one of the recognized palette entries.
pub(crate) fn colour_known(colour: Colour) -> Result<()> {
    if palette::is_known(colour) {
        Ok(())
    } else {
        Err(RastError::ColourUnknown)
    }
}
