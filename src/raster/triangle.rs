//! Triangle fill - scanline flat-fill over three interpolated edges.
//!
//! This is not a general polygon filler. It relies on the triangle being
//! convex: the two short edges are concatenated into one column sequence,
//! compared against the long edge once at the midpoint row, and that single
//! left/right assignment is used for every row.

use super::checks;
use super::Draw;
use crate::error::Result;
use crate::surface::Surface;
use crate::types::Triangle;

/// Linearly interpolate `b` as a function of `a` between (a0, b0) and
/// (a1, b1), producing one sample per integer step of `a`, endpoints
/// included.
///
/// Samples accumulate a constant step and truncate toward zero. When the
/// endpoints share an `a` value the span collapses to the single sample
/// `[b0]` rather than dividing by zero.
pub(crate) fn interpolate(a0: i32, b0: i32, a1: i32, b1: i32) -> Vec<i32> {
    if a0 == a1 {
        return vec![b0];
    }

    let step = f64::from(b1 - b0) / f64::from(a1 - a0);
    let mut b = f64::from(b0);

    let mut values = Vec::with_capacity((a1 - a0 + 1).max(0) as usize);
    for _ in a0..=a1 {
        values.push(b as i32);
        b += step;
    }
    values
}

impl Draw for Triangle {
    /// Scanline-fill the triangle.
    ///
    /// Vertices are sorted by row on a local copy (stable: vertices sharing
    /// a row keep their input order), so the caller's value is never
    /// reordered. The two short edges v0->v1 and v1->v2 are joined, dropping
    /// the duplicate sample at v1, and matched row-for-row against the long
    /// edge v0->v2. Whichever sequence is smaller at the midpoint row is the
    /// left boundary throughout; each row is filled from left to right
    /// boundary inclusive.
    fn draw(&self, surface: &mut Surface) -> Result<()> {
        checks::points_in_bounds(&self.vertices, surface)?;
        checks::colour_known(self.colour)?;

        let mut sorted = self.vertices;
        sorted.sort_by_key(|p| p.y);
        let [v0, v1, v2] = sorted;

        let mut short = interpolate(v0.y, v0.x, v1.y, v1.x);
        short.pop();
        short.extend(interpolate(v1.y, v1.x, v2.y, v2.x));

        let long = interpolate(v0.y, v0.x, v2.y, v2.x);

        let mid = short.len() / 2;
        let (left, right) = if long[mid] < short[mid] {
            (long, short)
        } else {
            (short, long)
        };

        for y in v0.y..=v2.y {
            let i = (y - v0.y) as usize;
            for x in left[i]..=right[i] {
                // Interpolated columns stay between the vertex columns, all
                // of which passed the bounds check.
                let _ = surface.write_pixel(x, y, self.colour);
            }
        }

        Ok(())
    }
}
