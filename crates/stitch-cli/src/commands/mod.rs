//! CLI command implementations

pub mod build;
pub mod compose;
pub mod init;
pub mod modules;
pub mod scan;
pub mod stage;

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;
use stitch_shader::ModuleRegistry;

/// Load the module registry used by composing commands
pub(crate) fn load_modules(dir: &Path, extension: &str) -> Result<ModuleRegistry> {
    ModuleRegistry::load_from_directory(dir, extension)
        .with_context(|| format!("Failed to load modules from {}", dir.display()))
}

/// Write composed source to a file, or to stdout when no path is given
pub(crate) fn write_output(content: &str, output: Option<&str>) -> Result<()> {
    match output {
        Some(path) => {
            if let Some(parent) = Path::new(path).parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            fs::write(path, content).with_context(|| format!("Failed to write {}", path))?;
            println!("Wrote {}", path);
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
