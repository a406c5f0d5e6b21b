//! Circle fill.

use super::checks;
use super::Draw;
use crate::error::Result;
use crate::surface::Surface;
use crate::types::Circle;

impl Draw for Circle {
    /// Fill the disk of pixels within `radius` of the centre, by squared
    /// Euclidean distance (`dx*dx + dy*dy <= r*r`, inclusive).
    ///
    /// Only the centre is bounds-checked up front. The radius may extend
    /// past the surface edge; each write that lands outside fails
    /// individually and is dropped without aborting the fill.
    fn draw(&self, surface: &mut Surface) -> Result<()> {
        checks::points_in_bounds(&[self.center], surface)?;
        checks::colour_known(self.colour)?;

        let r = self.radius;
        for dy in -r..=r {
            for dx in -r..=r {
                if dx * dx + dy * dy <= r * r {
                    let _ = surface.write_pixel(self.center.x + dx, self.center.y + dy, self.colour);
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RastError;
    use crate::types::{Colour, Point};

    #[test]
    fn test_disk_membership() {
        let mut surface = Surface::new(21, 21);
        surface.clear();

        let circle = Circle::new(Point::new(10, 10), 5, Colour::GREEN);
        circle.draw(&mut surface).unwrap();

        for y in 0..21 {
            for x in 0..21 {
                let dx = x - 10;
                let dy = y - 10;
                let expected = if dx * dx + dy * dy <= 25 {
                    Colour::GREEN
                } else {
                    Colour::WHITE
                };
                assert_eq!(surface.read_pixel(x, y).unwrap(), expected, "at ({x},{y})");
            }
        }
    }

    #[test]
    fn test_radius_zero_paints_centre_only() {
        let mut surface = Surface::new(5, 5);
        surface.clear();

        let circle = Circle::new(Point::new(2, 2), 0, Colour::PURPLE);
        circle.draw(&mut surface).unwrap();

        assert_eq!(surface.read_pixel(2, 2).unwrap(), Colour::PURPLE);
        assert_eq!(surface.read_pixel(3, 2).unwrap(), Colour::WHITE);
        assert_eq!(surface.read_pixel(2, 1).unwrap(), Colour::WHITE);
    }

    #[test]
    fn test_spill_past_edge_is_clipped() {
        let mut surface = Surface::new(10, 10);
        surface.clear();

        // Centre near the corner, radius pushing well past the edge.
        // The draw still succeeds; off-surface pixels are dropped.
        let circle = Circle::new(Point::new(1, 1), 4, Colour::ORANGE);
        circle.draw(&mut surface).unwrap();

        assert_eq!(surface.read_pixel(0, 0).unwrap(), Colour::ORANGE);
        assert_eq!(surface.read_pixel(5, 1).unwrap(), Colour::ORANGE);
        // Outside the disk but on the surface
        assert_eq!(surface.read_pixel(5, 5).unwrap(), Colour::WHITE);
    }

    #[test]
    fn test_centre_out_of_bounds_rejected() {
        let mut surface = Surface::new(10, 10);
        surface.clear();
        let before = surface.clone();

        let circle = Circle::new(Point::new(-1, 5), 3, Colour::GREEN);
        assert!(matches!(
            circle.draw(&mut surface),
            Err(RastError::OutOfBounds)
        ));
        assert_eq!(surface, before);
    }

    #[test]
    fn test_unknown_colour_rejected() {
        let mut surface = Surface::new(10, 10);
        surface.clear();
        let before = surface.clone();

        let circle = Circle::new(Point::new(5, 5), 2, Colour::rgb(1, 2, 3));
        assert!(matches!(
            circle.draw(&mut surface),
            Err(RastError::ColourUnknown)
        ));
        assert_eq!(surface, before);
    }

    #[test]
    fn test_bounds_checked_before_colour() {
        let mut surface = Surface::new(10, 10);
        let circle = Circle::new(Point::new(50, 50), 2, Colour::rgb(1, 2, 3));
        assert!(matches!(
            circle.draw(&mut surface),
            Err(RastError::OutOfBounds)
        ));
    }
}
