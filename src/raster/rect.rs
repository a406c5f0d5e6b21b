//! Rectangle fill.

use super::checks;
use super::Draw;
use crate::error::Result;
use crate::surface::Surface;
use crate::types::Rectangle;

impl Draw for Rectangle {
    /// Fill every pixel from the lower-left corner to the upper-right,
    /// both inclusive.
    ///
    /// Both corners are checked before the first write. Corners are not
    /// re-sorted: a pair violating `ll <= ur` yields an empty range on the
    /// reversed axis and nothing is drawn there.
    fn draw(&self, surface: &mut Surface) -> Result<()> {
        checks::points_in_bounds(&[self.ll, self.ur], surface)?;
        checks::colour_known(self.colour)?;

        for y in self.ll.y..=self.ur.y {
            for x in self.ll.x..=self.ur.x {
                // Both corners passed the bounds check, so writes between
                // them cannot fail.
                let _ = surface.write_pixel(x, y, self.colour);
            }
        }

        Ok(())
    }
}
