pub mod completions;
pub mod init;
pub mod palette;
pub mod render;
pub mod validate;

use clap::{Parser, Subcommand};

/// rast - filled-shape rasterizer for PPM and PNG output
#[derive(Parser, Debug)]
#[command(name = "rast")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render scene files to images
    Render(render::RenderArgs),

    /// Check scene files without rendering
    Validate(validate::ValidateArgs),

    /// List the recognized fill colours
    Palette(palette::PaletteArgs),

    /// Write a starter scene file
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
