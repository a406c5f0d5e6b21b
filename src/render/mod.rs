//! Image output for rast.
//!
//! This module serializes a finished surface: plain-text PPM (the native
//! format) and PNG for viewers that do not read PPM.

mod png;
mod ppm;

pub use png::write_png;
pub use ppm::{encode_ppm, parse_ppm, write_ppm};
