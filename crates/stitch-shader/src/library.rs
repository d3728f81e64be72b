//! Shader library: loads stage sources from disk and composes them

use crate::composer::compose;
use crate::registry::ModuleRegistry;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};
use stitch_core::{Result, ShaderStage, StitchError};

/// A directory of `<name>.vert` / `<name>.frag` sources paired with the
/// modules they may import.
#[derive(Debug, Clone)]
pub struct ShaderLibrary {
    shaders_dir: PathBuf,
    modules: ModuleRegistry,
}

impl ShaderLibrary {
    pub fn new(shaders_dir: impl Into<PathBuf>, modules: ModuleRegistry) -> Self {
        Self {
            shaders_dir: shaders_dir.into(),
            modules,
        }
    }

    pub fn shaders_dir(&self) -> &Path {
        &self.shaders_dir
    }

    pub fn modules(&self) -> &ModuleRegistry {
        &self.modules
    }

    /// Path of the source file for `name` at `stage`
    pub fn stage_path(&self, name: &str, stage: ShaderStage) -> PathBuf {
        self.shaders_dir
            .join(format!("{}.{}", name, stage.extension()))
    }

    /// Read the `stage` source for `name` and expand its imports
    pub fn load(&self, name: &str, stage: ShaderStage) -> Result<String> {
        let path = self.stage_path(name, stage);
        if !path.is_file() {
            return Err(StitchError::ShaderNotFound(path.display().to_string()));
        }

        let source = fs::read_to_string(&path)?;
        let composed = compose(&source, &self.modules)?;
        info!("Composed {} shader '{}'", stage, name);
        Ok(composed)
    }

    pub fn vertex(&self, name: &str) -> Result<String> {
        self.load(name, ShaderStage::Vertex)
    }

    pub fn fragment(&self, name: &str) -> Result<String> {
        self.load(name, ShaderStage::Fragment)
    }

    /// List every stage source directly under the shaders directory,
    /// sorted by name and then stage.
    pub fn discover(&self) -> Result<Vec<(String, ShaderStage)>> {
        if !self.shaders_dir.is_dir() {
            return Err(StitchError::ShaderDirNotFound(
                self.shaders_dir.display().to_string(),
            ));
        }

        let mut found = Vec::new();
        for entry in fs::read_dir(&self.shaders_dir)? {
            let file_path = entry?.path();
            if !file_path.is_file() {
                continue;
            }

            let stage = file_path
                .extension()
                .and_then(|e| e.to_str())
                .and_then(ShaderStage::from_extension);
            let name = file_path.file_stem().and_then(|s| s.to_str());

            if let (Some(stage), Some(name)) = (stage, name) {
                found.push((name.to_string(), stage));
            }
        }

        found.sort();
        Ok(found)
    }
}
