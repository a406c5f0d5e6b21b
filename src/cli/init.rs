//! Init command implementation.
//!
//! Writes a starter scene file demonstrating all three shape types.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::error::{RastError, Result};
use crate::output::{display_path, Printer};

/// The starter scene: a red rectangle, a green circle, and a yellow
/// triangle on a 1024x1024 surface.
const STARTER_SCENE: &str = "\
name: demo
width: 1024
height: 1024
shapes:
  - type: rectangle
    ll: { x: 300, y: 100 }
    ur: { x: 900, y: 600 }
    colour: red
  - type: circle
    center: { x: 500, y: 500 }
    radius: 200
    colour: green
  - type: triangle
    vertices:
      - { x: 100, y: 100 }
      - { x: 300, y: 600 }
      - { x: 850, y: 859 }
    colour: yellow
";

/// Write a starter scene file
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Where to write the scene
    #[arg(default_value = "scene.yaml")]
    pub path: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs) -> Result<()> {
    let printer = Printer::new();

    if args.path.exists() && !args.force {
        return Err(RastError::Validation {
            message: format!("{} already exists", display_path(&args.path)),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    fs::write(&args.path, STARTER_SCENE).map_err(|e| RastError::Io {
        path: args.path.clone(),
        message: format!("Failed to write scene: {}", e),
    })?;

    printer.status("Created", &display_path(&args.path));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::SceneDef;
    use crate::validation::validate_scene;

    #[test]
    fn test_starter_scene_parses_clean() {
        let scene = SceneDef::from_yaml(STARTER_SCENE).unwrap();
        assert_eq!(scene.shapes.len(), 3);
        assert!(validate_scene(&scene).is_ok());
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scene.yaml");
        fs::write(&path, "existing").unwrap();

        let args = InitArgs {
            path: path.clone(),
            force: false,
        };
        assert!(run(args).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "existing");

        let args = InitArgs { path, force: true };
        run(args).unwrap();
    }
}
