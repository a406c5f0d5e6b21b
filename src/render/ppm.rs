//! Plain-text PPM (P3) output for surfaces.
//!
//! The format is a fixed line-by-line dump:
//!
//! ```text
//! P3
//! <width> <height>
//! 255
//! <R G B triplets for row 0, space-separated>
//! ...
//! ```
//!
//! Each data row lists every column's three channel values with a trailing
//! space before the newline, top row first. [`parse_ppm`] reads the same
//! format back, so encode/parse round-trips are exact.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::error::{RastError, Result};
use crate::surface::Surface;
use crate::types::Colour;

/// Maximum channel value emitted in the header.
const MAX_CHANNEL: u32 = 255;

/// Encode a surface as P3 text.
pub fn encode_ppm(surface: &Surface) -> String {
    let (width, height) = surface.dimensions();

    // "R G B " per pixel plus header; 12 bytes per pixel is a safe upper bound.
    let mut out = String::with_capacity(surface.width() * surface.height() * 12 + 32);
    let _ = writeln!(out, "P3\n{} {}\n{}", width, height, MAX_CHANNEL);

    for row in surface.rows() {
        for colour in row {
            let _ = write!(out, "{} {} {} ", colour.r, colour.g, colour.b);
        }
        out.push('\n');
    }

    out
}

/// Write a surface to a PPM file.
pub fn write_ppm(surface: &Surface, path: &Path) -> Result<()> {
    fs::write(path, encode_ppm(surface)).map_err(|e| RastError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PPM: {}", e),
    })
}

/// Parse P3 text back into a surface.
pub fn parse_ppm(text: &str) -> Result<Surface> {
    let mut tokens = text.split_whitespace();

    match tokens.next() {
        Some("P3") => {}
        other => {
            return Err(RastError::Parse {
                message: format!("Expected P3 magic, got {:?}", other.unwrap_or("")),
                help: Some("Only plain-text P3 images are supported".to_string()),
            })
        }
    }

    let width = parse_field(tokens.next(), "width")?;
    let height = parse_field(tokens.next(), "height")?;
    let max: u32 = parse_field(tokens.next(), "max channel value")?;
    if max != MAX_CHANNEL {
        return Err(RastError::Parse {
            message: format!("Unsupported max channel value: {}", max),
            help: Some(format!("Expected {}", MAX_CHANNEL)),
        });
    }

    let mut rows = Vec::with_capacity(height);
    for _ in 0..height {
        let mut row = Vec::with_capacity(width);
        for _ in 0..width {
            let r = parse_field(tokens.next(), "red channel")?;
            let g = parse_field(tokens.next(), "green channel")?;
            let b = parse_field(tokens.next(), "blue channel")?;
            row.push(Colour::rgb(r, g, b));
        }
        rows.push(row);
    }
    let surface = Surface::from_rows(rows);

    if tokens.next().is_some() {
        return Err(RastError::Parse {
            message: "Trailing data after pixel values".to_string(),
            help: None,
        });
    }

    Ok(surface)
}

/// Parse one whitespace-separated numeric field.
fn parse_field<T: std::str::FromStr>(token: Option<&str>, what: &str) -> Result<T> {
    let token = token.ok_or_else(|| RastError::Parse {
        message: format!("Unexpected end of input reading {}", what),
        help: None,
    })?;
    token.parse().map_err(|_| RastError::Parse {
        message: format!("Invalid {}: {}", what, token),
        help: None,
    })
}
