//! Project initialization command

use crate::config::PROJECT_CONFIG;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub fn run(name: &str) -> Result<()> {
    let project_dir = Path::new(name);

    if project_dir.exists() {
        anyhow::bail!("Directory '{}' already exists", name);
    }

    create_project(project_dir)
        .with_context(|| format!("Failed to create project '{}'", name))?;

    print_summary(name);
    Ok(())
}

/// Scaffold `project_dir`, removing it again if any file cannot be written
fn create_project(project_dir: &Path) -> Result<()> {
    let result = scaffold(project_dir);
    if result.is_err() {
        fs::remove_dir_all(project_dir).ok();
    }
    result
}

fn scaffold(project_dir: &Path) -> Result<()> {
    fs::create_dir_all(project_dir.join("shaders/common"))?;

    fs::write(
        project_dir.join(PROJECT_CONFIG),
        r#"[paths]
shaders_dir = "shaders"
modules_dir = "shaders/common"
out_dir = "dist/shaders"

[modules]
extension = "glsl"
"#,
    )?;

    fs::write(
        project_dir.join("shaders/common/common.glsl"),
        r#"vec3 getNormal() { return vec3(0.0, 1.0, 0.0); }
"#,
    )?;

    fs::write(
        project_dir.join("shaders/triangle.vert"),
        r#"#version 300 es
// @import common.glsl
in vec4 a_position;
out vec3 v_normal;

void main() {
  v_normal = getNormal();
  gl_Position = a_position;
}
"#,
    )?;

    fs::write(
        project_dir.join("shaders/triangle.frag"),
        r#"#version 300 es
precision highp float;

in vec3 v_normal;
out vec4 outColor;

void main() {
  outColor = vec4(v_normal * 0.5 + 0.5, 1.0);
}
"#,
    )?;

    Ok(())
}

fn print_summary(name: &str) {
    println!("Created shader project '{}'", name);
    println!();
    println!("  {}/", name);
    println!("    {}", PROJECT_CONFIG);
    println!("    shaders/");
    println!("      triangle.vert");
    println!("      triangle.frag");
    println!("      common/");
    println!("        common.glsl");
    println!();
    println!("Next steps:");
    println!("  cd {}", name);
    println!("  stitch stage triangle --stage vertex");
    println!("  stitch build");
}
