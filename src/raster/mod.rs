//! Rasterization - the per-shape fill algorithms.
//!
//! Every shape implements [`Draw`]: run the shared pre-draw checks
//! (defining points in bounds, fill colour in the palette), then write the
//! shape's pixels directly into the surface. Checks run before any pixel is
//! touched, so a rejected shape leaves the surface exactly as it was.
//!
//! One asymmetry is deliberate: rectangles and triangles are validated
//! wholesale on their defining points, while a circle is validated on its
//! centre only - pixels the radius pushes past the surface edge are dropped
//! one by one during the fill rather than failing the shape.

pub(crate) mod checks;
mod circle;
mod rect;
mod triangle;

use crate::error::Result;
use crate::surface::Surface;
use crate::types::Shape;

/// A primitive that can rasterize itself onto a surface.
pub trait Draw {
    /// Fill this shape's pixels on the surface.
    ///
    /// Returns `OutOfBounds` or `ColourUnknown` without mutating the
    /// surface when a pre-draw check fails.
    fn draw(&self, surface: &mut Surface) -> Result<()>;
}

impl Draw for Shape {
    fn draw(&self, surface: &mut Surface) -> Result<()> {
        match self {
            Shape::Rectangle(r) => r.draw(surface),
            Shape::Circle(c) => c.draw(surface),
            Shape::Triangle(t) => t.draw(surface),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Circle, Colour, Point, Rectangle, Shape, Triangle};

    #[test]
    fn test_shape_dispatch() {
        let mut surface = Surface::new(20, 20);
        surface.clear();

        let shapes: Vec<Shape> = vec![
            Rectangle::new(Point::new(1, 1), Point::new(3, 3), Colour::RED).into(),
            Circle::new(Point::new(10, 10), 2, Colour::GREEN).into(),
            Triangle::new(
                Point::new(5, 15),
                Point::new(9, 15),
                Point::new(7, 18),
                Colour::BLUE,
            )
            .into(),
        ];

        for shape in &shapes {
            shape.draw(&mut surface).unwrap();
        }

        assert_eq!(surface.read_pixel(2, 2).unwrap(), Colour::RED);
        assert_eq!(surface.read_pixel(10, 10).unwrap(), Colour::GREEN);
        assert_eq!(surface.read_pixel(7, 15).unwrap(), Colour::BLUE);
    }
}
