//! Module listing command

use super::load_modules;
use anyhow::Result;
use std::path::Path;

pub fn run(modules_dir: &Path, extension: &str) -> Result<()> {
    let registry = load_modules(modules_dir, extension)?;

    if registry.is_empty() {
        println!("No *.{} modules in {}", extension, modules_dir.display());
        return Ok(());
    }

    println!("Modules in {}:", modules_dir.display());
    for name in registry.names() {
        let lines = registry.get(name).map(|c| c.lines().count()).unwrap_or(0);
        println!("  - {} ({} lines)", name, lines);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_lists_modules_directory() {
        let root = std::env::temp_dir().join(format!("stitch_modules_test_{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join("common.glsl"), "float a;\nfloat b;").unwrap();

        assert!(run(&root, "glsl").is_ok());
        assert!(run(&root, "inc").is_ok());

        fs::remove_dir_all(&root).ok();
    }

    #[test]
    fn test_missing_modules_directory() {
        let root = std::env::temp_dir().join(format!("stitch_modules_missing_{}", uuid::Uuid::new_v4()));
        let err = run(&root, "glsl").unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("Failed to load modules from"));
        assert!(message.contains("Module directory not found"));
    }
}
