use clap::Parser;
use miette::Result;
use rast::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render(args) => rast::cli::render::run(args)?,
        Commands::Validate(args) => rast::cli::validate::run(args)?,
        Commands::Palette(args) => rast::cli::palette::run(args)?,
        Commands::Init(args) => rast::cli::init::run(args)?,
        Commands::Completions(args) => rast::cli::completions::run(args)?,
    }

    Ok(())
}
