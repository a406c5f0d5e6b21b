//! Render command implementation.
//!
//! Loads scene files, draws their shapes onto a cleared surface, and
//! writes one image per scene. A shape that fails its pre-draw checks is
//! reported and skipped; the rest of the scene still renders, and the
//! image is written regardless.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};

use crate::error::{RastError, Result};
use crate::output::{display_path, plural, Printer};
use crate::raster::Draw;
use crate::render::{write_png, write_ppm};
use crate::scene::SceneDef;
use crate::surface::Surface;
use crate::validation::{print_diagnostics, validate_scene};

/// Output image format.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// Plain-text P3
    Ppm,
    /// PNG via the image crate
    Png,
}

impl Format {
    fn extension(self) -> &'static str {
        match self {
            Format::Ppm => "ppm",
            Format::Png => "png",
        }
    }
}

/// Render scene files to images
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Scene files to render
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output directory
    #[arg(long, short, default_value = "dist")]
    pub output: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "ppm")]
    pub format: Format,

    /// Integer scale factor for PNG output
    #[arg(long, default_value = "1")]
    pub scale: u32,

    /// Validate scenes first and stop on errors
    #[arg(long)]
    pub check: bool,
}

pub fn run(args: RenderArgs) -> Result<()> {
    let printer = Printer::new();

    if !args.output.exists() {
        fs::create_dir_all(&args.output).map_err(|e| RastError::Io {
            path: args.output.clone(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    let mut rendered = 0;
    for file in &args.files {
        render_scene(file, &args, &printer)?;
        rendered += 1;
    }

    printer.status("Finished", &plural(rendered, "scene", "scenes"));
    Ok(())
}

fn render_scene(file: &Path, args: &RenderArgs, printer: &Printer) -> Result<()> {
    let scene = SceneDef::load(file)?;
    let name = scene
        .name
        .clone()
        .unwrap_or_else(|| file_stem(file).to_string());

    printer.status(
        "Rendering",
        &format!("{} ({}x{})", name, scene.width, scene.height),
    );

    if args.check {
        let report = validate_scene(&scene);
        if !report.is_ok() {
            print_diagnostics(&report, printer);
        }
        if report.has_errors() {
            return Err(RastError::Validation {
                message: format!(
                    "{} failed validation with {}",
                    display_path(file),
                    plural(report.error_count(), "error", "errors")
                ),
                help: Some("fix the scene or drop --check to render what passes".to_string()),
            });
        }
    }

    let mut surface = Surface::new(scene.width, scene.height);
    surface.clear();

    for (index, def) in scene.shapes.iter().enumerate() {
        let shape = match def.resolve() {
            Ok(shape) => shape,
            Err(e) => {
                printer.warning(
                    "Skipping",
                    &format!("shape {} ({}): {}", index, def.kind(), e),
                );
                continue;
            }
        };
        if let Err(e) = shape.draw(&mut surface) {
            printer.warning(
                "Skipping",
                &format!("shape {} ({}): {}", index, shape.kind(), e),
            );
        }
    }

    let path = args
        .output
        .join(&name)
        .with_extension(args.format.extension());
    match args.format {
        Format::Ppm => write_ppm(&surface, &path)?,
        Format::Png => write_png(&surface, &path, args.scale)?,
    }
    printer.status("Writing", &display_path(&path));

    Ok(())
}

fn file_stem(path: &Path) -> &str {
    path.file_stem().and_then(|s| s.to_str()).unwrap_or("scene")
}
