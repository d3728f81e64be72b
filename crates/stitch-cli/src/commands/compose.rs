//! Single-file compose command

use super::{load_modules, write_output};
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

pub struct ComposeArgs {
    pub file: String,
    pub modules_dir: PathBuf,
    pub extension: String,
    pub output: Option<String>,
}

pub fn run(args: ComposeArgs) -> Result<()> {
    let source =
        fs::read_to_string(&args.file).with_context(|| format!("Failed to read {}", args.file))?;
    let registry = load_modules(&args.modules_dir, &args.extension)?;

    let composed = stitch_shader::compose(&source, &registry)
        .with_context(|| format!("Failed to compose {}", args.file))?;

    write_output(&composed, args.output.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_root() -> PathBuf {
        let root = std::env::temp_dir().join(format!("stitch_compose_test_{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(root.join("common")).unwrap();
        root
    }

    #[test]
    fn test_compose_writes_nested_output() {
        let root = temp_root();
        fs::write(root.join("common/common.glsl"), "X").unwrap();
        fs::write(root.join("hello.vert"), "#version 300 es\n// @import common.glsl\nvoid main() {}\n").unwrap();

        let output = root.join("dist/nested/hello.vert");
        run(ComposeArgs {
            file: root.join("hello.vert").to_str().unwrap().to_string(),
            modules_dir: root.join("common"),
            extension: "glsl".to_string(),
            output: Some(output.to_str().unwrap().to_string()),
        })
        .unwrap();

        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "#version 300 es\n// Begin import: common.glsl\nX\n// End import: common.glsl\nvoid main() {}\n"
        );

        fs::remove_dir_all(&root).ok();
    }

    #[test]
    fn test_compose_missing_import_writes_nothing() {
        let root = temp_root();
        fs::write(root.join("hello.frag"), "// @import lighting.glsl\nvoid main() {}").unwrap();

        let output = root.join("out/hello.frag");
        let err = run(ComposeArgs {
            file: root.join("hello.frag").to_str().unwrap().to_string(),
            modules_dir: root.join("common"),
            extension: "glsl".to_string(),
            output: Some(output.to_str().unwrap().to_string()),
        })
        .unwrap_err();

        let message = format!("{:#}", err);
        assert!(message.contains("Failed to compose"));
        assert!(message.contains("Imported file not found: lighting.glsl"));
        assert!(!output.exists());

        fs::remove_dir_all(&root).ok();
    }
}
