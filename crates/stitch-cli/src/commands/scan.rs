//! Import directive listing command

use anyhow::{Context, Result};
use std::fs;
use stitch_shader::{scan, ImportDirective};

pub fn run(file: &str, format: &str) -> Result<()> {
    let source = fs::read_to_string(file).with_context(|| format!("Failed to read {}", file))?;
    let imports = scan(&source);
    println!("{}", render(file, &imports, format)?);
    Ok(())
}

fn render(file: &str, imports: &[ImportDirective], format: &str) -> Result<String> {
    if format == "json" {
        return Ok(serde_json::to_string_pretty(imports)?);
    }

    if imports.is_empty() {
        return Ok(format!("No imports in {}", file));
    }

    let mut lines = vec![format!("Imports in {}:", file)];
    for import in imports {
        lines.push(format!("  line {:>4}  {}", import.start_line + 1, import.file_name));
    }
    Ok(lines.join("\n"))
}
