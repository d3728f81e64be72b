//! Batch compose command

use super::load_modules;
use anyhow::{Context, Result};
use log::info;
use std::fs;
use std::path::PathBuf;
use stitch_shader::ShaderLibrary;

pub struct BuildArgs {
    pub shaders_dir: PathBuf,
    pub modules_dir: PathBuf,
    pub extension: String,
    pub out_dir: PathBuf,
}

/// Compose every stage source and write it under `out_dir` with the same
/// file name. Returns the written paths. Stops at the first failure.
pub fn run(args: BuildArgs) -> Result<Vec<PathBuf>> {
    if !args.shaders_dir.is_dir() {
        anyhow::bail!("Shaders directory not found: {}", args.shaders_dir.display());
    }

    let registry = load_modules(&args.modules_dir, &args.extension)?;
    let library = ShaderLibrary::new(&args.shaders_dir, registry);
    let stages = library.discover()?;

    if stages.is_empty() {
        println!("No .vert or .frag sources in {}", args.shaders_dir.display());
        return Ok(Vec::new());
    }

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("Failed to create {}", args.out_dir.display()))?;

    let mut written = Vec::with_capacity(stages.len());
    for (name, stage) in &stages {
        let source_path = library.stage_path(name, *stage);
        let composed = library
            .load(name, *stage)
            .with_context(|| format!("Failed to compose {}", source_path.display()))?;

        let Some(file_name) = source_path.file_name() else {
            continue;
        };
        let out_path = args.out_dir.join(file_name);
        fs::write(&out_path, composed)
            .with_context(|| format!("Failed to write {}", out_path.display()))?;

        println!("  {} -> {}", source_path.display(), out_path.display());
        written.push(out_path);
    }

    info!(
        "Built {} shader(s) with {} module(s)",
        written.len(),
        library.modules().len()
    );
    println!("Composed {} shader(s) into {}", written.len(), args.out_dir.display());

    Ok(written)
}
