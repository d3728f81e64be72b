//! Source composition: splices imported modules into shader source

use crate::registry::ModuleSource;
use crate::scanner::scan;
use log::debug;
use stitch_core::{Result, StitchError};

/// Expand every `// @import` directive in `source` with its module text.
///
/// Each directive line is replaced by
///
/// ```text
/// // Begin import: <name>
/// <module content>
/// // End import: <name>
/// ```
///
/// All other lines are copied verbatim and in order. Imported content is not
/// re-scanned, so nested directives stay as literal text.
///
/// Source without directives is returned unchanged. The output keeps the
/// input's final line terminator: a trailing newline stays a single one and
/// no newline is added when the input had none.
///
/// Fails with [`StitchError::ImportNotFound`] on the first directive whose
/// module is absent from `modules`; nothing is returned in that case.
pub fn compose<M>(source: &str, modules: &M) -> Result<String>
where
    M: ModuleSource + ?Sized,
{
    let imports = scan(source);
    if imports.is_empty() {
        return Ok(source.to_string());
    }

    let lines: Vec<&str> = source.split('\n').collect();
    let mut composed = String::with_capacity(source.len());
    let mut cursor = 0;

    for import in &imports {
        while cursor < import.start_line {
            composed.push_str(lines[cursor]);
            composed.push('\n');
            cursor += 1;
        }

        let content = modules
            .module(&import.file_name)
            .ok_or_else(|| StitchError::ImportNotFound(import.file_name.clone()))?;

        debug!(
            "Splicing {} ({} bytes) at line {}",
            import.file_name,
            content.len(),
            import.start_line
        );

        composed.push_str("// Begin import: ");
        composed.push_str(&import.file_name);
        composed.push('\n');
        composed.push_str(content);
        composed.push('\n');
        composed.push_str("// End import: ");
        composed.push_str(&import.file_name);
        composed.push('\n');

        cursor = import.end_line + 1;
    }

    if cursor < lines.len() {
        composed.push_str(&lines[cursor..].join("\n"));
    } else {
        // The last directive was the final line and had no terminator
        composed.pop();
    }

    Ok(composed)
}
