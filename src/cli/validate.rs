//! Validate command implementation.
//!
//! Parses scene files and runs the validation checks without touching a
//! surface. Exits non-zero when any file has errors.

use std::path::PathBuf;

use clap::Args;

use crate::error::{RastError, Result};
use crate::output::{display_path, plural, Printer};
use crate::scene::SceneDef;
use crate::validation::{print_diagnostics, validate_scene};

/// Check scene files without rendering
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Scene files to validate
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

pub fn run(args: ValidateArgs) -> Result<()> {
    let printer = Printer::new();

    let mut errors = 0;
    let mut warnings = 0;

    for file in &args.files {
        printer.status("Checking", &display_path(file));
        let scene = SceneDef::load(file)?;
        let report = validate_scene(&scene);
        if !report.is_ok() {
            print_diagnostics(&report, &printer);
        }
        errors += report.error_count();
        warnings += report.warning_count();
    }

    if errors > 0 {
        return Err(RastError::Validation {
            message: format!(
                "{} and {} across {}",
                plural(errors, "error", "errors"),
                plural(warnings, "warning", "warnings"),
                plural(args.files.len(), "scene", "scenes")
            ),
            help: None,
        });
    }

    if warnings > 0 {
        printer.warning("Passed", &format!("with {}", plural(warnings, "warning", "warnings")));
    } else {
        printer.status("Passed", &plural(args.files.len(), "scene", "scenes"));
    }

    Ok(())
}
