//! Stitch CLI - Command-line interface for the Stitch shader preprocessor

mod commands;
mod config;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use commands::{build, compose, init, modules, scan, stage};
use config::StitchConfig;
use env_logger::Env;
use std::path::{Path, PathBuf};
use stitch_core::ShaderStage;

#[derive(Parser)]
#[command(name = "stitch")]
#[command(about = "Expand `// @import` directives in GLSL shader sources", long_about = None)]
#[command(version)]
struct Cli {
    /// Use this config file instead of ~/.stitch/config.toml and ./stitch.toml
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new shader project
    Init {
        /// Project directory
        name: String,
    },

    /// List the import directives in a shader source
    Scan {
        /// Path to shader source
        file: String,

        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = parse_format)]
        format: String,
    },

    /// Expand the imports of a single shader source
    Compose {
        /// Path to shader source
        file: String,

        /// Directory of importable modules
        #[arg(long)]
        modules: Option<String>,

        /// Module file extension
        #[arg(long)]
        ext: Option<String>,

        /// Write the result here instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },

    /// List the modules available for import
    Modules {
        /// Directory of importable modules
        #[arg(long)]
        modules: Option<String>,

        /// Module file extension
        #[arg(long)]
        ext: Option<String>,
    },

    /// Load and compose a named shader stage from the shaders directory
    Stage {
        /// Shader name, without extension
        name: String,

        /// Stage to load (vertex or fragment)
        #[arg(long, value_parser = parse_stage)]
        stage: ShaderStage,

        /// Directory containing <name>.vert / <name>.frag
        #[arg(long)]
        shaders: Option<String>,

        /// Directory of importable modules
        #[arg(long)]
        modules: Option<String>,

        /// Module file extension
        #[arg(long)]
        ext: Option<String>,

        /// Write the result here instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Compose every shader stage in the shaders directory
    Build {
        /// Directory containing .vert / .frag sources
        #[arg(long)]
        shaders: Option<String>,

        /// Directory of importable modules
        #[arg(long)]
        modules: Option<String>,

        /// Module file extension
        #[arg(long)]
        ext: Option<String>,

        /// Output directory
        #[arg(long)]
        out: Option<String>,
    },
}

fn parse_stage(s: &str) -> Result<ShaderStage, String> {
    s.parse::<ShaderStage>().map_err(|e| e.to_string())
}

fn parse_format(s: &str) -> Result<String, String> {
    match s {
        "text" | "json" => Ok(s.to_string()),
        _ => Err(format!("unknown format '{}'; valid values: text, json", s)),
    }
}

/// A command-line path flag wins over the configured value
fn flag_or(flag: Option<String>, configured: PathBuf) -> PathBuf {
    flag.map(PathBuf::from).unwrap_or(configured)
}

fn load_config(path: Option<&str>) -> Result<StitchConfig> {
    match path {
        Some(path) => StitchConfig::load_from_file(Path::new(path))
            .with_context(|| format!("Failed to load config {}", path)),
        None => StitchConfig::load().context("Failed to load config"),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { name } => init::run(&name),
        Commands::Scan { file, format } => scan::run(&file, &format),
        Commands::Compose {
            file,
            modules,
            ext,
            output,
        } => {
            let config = load_config(cli.config.as_deref())?;
            compose::run(compose::ComposeArgs {
                file,
                modules_dir: flag_or(modules, config.modules_dir),
                extension: ext.unwrap_or(config.module_extension),
                output,
            })
        }
        Commands::Modules { modules, ext } => {
            let config = load_config(cli.config.as_deref())?;
            modules::run(
                &flag_or(modules, config.modules_dir),
                &ext.unwrap_or(config.module_extension),
            )
        }
        Commands::Stage {
            name,
            stage,
            shaders,
            modules,
            ext,
            output,
        } => {
            let config = load_config(cli.config.as_deref())?;
            stage::run(stage::StageArgs {
                name,
                stage,
                shaders_dir: flag_or(shaders, config.shaders_dir),
                modules_dir: flag_or(modules, config.modules_dir),
                extension: ext.unwrap_or(config.module_extension),
                output,
            })
        }
        Commands::Build {
            shaders,
            modules,
            ext,
            out,
        } => {
            let config = load_config(cli.config.as_deref())?;
            build::run(build::BuildArgs {
                shaders_dir: flag_or(shaders, config.shaders_dir),
                modules_dir: flag_or(modules, config.modules_dir),
                extension: ext.unwrap_or(config.module_extension),
                out_dir: flag_or(out, config.out_dir),
            })
            .map(|_| ())
        }
    }
}
