//! Named shader stage command

use super::{load_modules, write_output};
use anyhow::{Context, Result};
use std::path::PathBuf;
use stitch_core::ShaderStage;
use stitch_shader::ShaderLibrary;

pub struct StageArgs {
    pub name: String,
    pub stage: ShaderStage,
    pub shaders_dir: PathBuf,
    pub modules_dir: PathBuf,
    pub extension: String,
    pub output: Option<String>,
}

pub fn run(args: StageArgs) -> Result<()> {
    let registry = load_modules(&args.modules_dir, &args.extension)?;
    let library = ShaderLibrary::new(&args.shaders_dir, registry);

    let composed = library
        .load(&args.name, args.stage)
        .with_context(|| format!("Failed to load {} shader '{}'", args.stage, args.name))?;

    write_output(&composed, args.output.as_deref())
}
