//! cabforge CLI - arcade cabinet template generator
//!
//! Builds one cabinet variant and writes it as a `.glb` file, or prints the
//! node summary of a variant as JSON.

use anyhow::{Context, Result};
use cabforge::{BuildOptions, Variant};
use clap::{Parser, Subcommand};
use log::info;
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(name = "cabforge")]
#[command(about = "Generate arcade cabinet templates as binary glTF", long_about = None)]
struct Cli {
    /// TOML file with tessellation options
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Stand-up cabinet
    Upright {
        /// Output file (default: /tmp/arcade_cabinet_template.glb)
        output: Option<PathBuf>,
    },
    /// Cocktail table
    Cocktail {
        /// Output file (default: /tmp/cocktail_cabinet_template.glb)
        output: Option<PathBuf>,
    },
    /// Sit-down driving cabinet
    Driving {
        /// Output file (default: /tmp/driving_cabinet_template.glb)
        output: Option<PathBuf>,
    },
    /// Light-gun cabinet
    #[command(alias = "light-gun")]
    Lightgun {
        /// Output file (default: /tmp/lightgun_cabinet_template.glb)
        output: Option<PathBuf>,
    },
    /// Print every node of a variant as JSON
    Parts {
        /// upright, cocktail, driving or lightgun
        variant: Variant,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    let options = load_options(cli.config.as_deref())?;

    match cli.command {
        Commands::Upright { output } => generate(Variant::Upright, output, &options),
        Commands::Cocktail { output } => generate(Variant::Cocktail, output, &options),
        Commands::Driving { output } => generate(Variant::Driving, output, &options),
        Commands::Lightgun { output } => generate(Variant::LightGun, output, &options),
        Commands::Parts { variant } => print_parts(variant, &options),
    }
}

fn load_options(path: Option<&Path>) -> Result<BuildOptions> {
    match path {
        Some(path) => BuildOptions::load(path)
            .with_context(|| format!("loading options from {}", path.display())),
        None => Ok(BuildOptions::default()),
    }
}

fn output_path(variant: Variant, output: Option<PathBuf>) -> PathBuf {
    output.unwrap_or_else(|| PathBuf::from(variant.default_output()))
}

fn generate(variant: Variant, output: Option<PathBuf>, options: &BuildOptions) -> Result<()> {
    let output = output_path(variant, output);
    let scene = cabforge::build(variant, options)
        .with_context(|| format!("building {variant} cabinet"))?;
    cabforge::write_glb(&scene, &output)
        .with_context(|| format!("writing {}", output.display()))?;
    info!("{variant} cabinet template saved to {}", output.display());
    Ok(())
}

fn print_parts(variant: Variant, options: &BuildOptions) -> Result<()> {
    let scene = cabforge::build(variant, options)?;
    let summary = cabforge::summarize(&scene)?;
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
