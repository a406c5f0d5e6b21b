//! Palette command implementation.
//!
//! Lists the nine recognized fill colours to stdout, as a text table or
//! JSON.

use clap::Args;

use crate::error::{RastError, Result};
use crate::types::palette::PALETTE;

/// List the recognized fill colours
#[derive(Args, Debug)]
pub struct PaletteArgs {
    /// Emit JSON instead of a text table
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: PaletteArgs) -> Result<()> {
    if args.json {
        let entries: Vec<serde_json::Value> = PALETTE
            .iter()
            .map(|&(name, colour)| {
                serde_json::json!({
                    "name": name,
                    "hex": colour.to_string(),
                    "r": colour.r,
                    "g": colour.g,
                    "b": colour.b,
                })
            })
            .collect();
        let text = serde_json::to_string_pretty(&entries).map_err(|e| RastError::Parse {
            message: format!("Failed to encode palette: {}", e),
            help: None,
        })?;
        println!("{}", text);
    } else {
        for (name, colour) in PALETTE {
            println!(
                "{:<8} {}  ({}, {}, {})",
                name, colour, colour.r, colour.g, colour.b
            );
        }
    }

    Ok(())
}
