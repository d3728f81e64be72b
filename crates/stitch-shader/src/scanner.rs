//! Import directive scanning

use serde::Serialize;

const COMMENT_PREFIX: &str = "//";
const IMPORT_TOKEN: &str = "@import";
const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Whitespace as far as the directive grammar is concerned. A byte order
/// mark counts too, so a BOM-prefixed first line still matches.
fn is_gap(c: char) -> bool {
    c.is_whitespace() || c == BYTE_ORDER_MARK
}

/// A `// @import <file>` directive found in shader source.
///
/// Line indices are zero-based. A directive currently spans a single line,
/// so `start_line == end_line`; the composer consumes the whole range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportDirective {
    pub file_name: String,
    pub start_line: usize,
    pub end_line: usize,
}

impl ImportDirective {
    /// Create a directive occupying exactly one line
    pub fn single_line(file_name: impl Into<String>, line: usize) -> Self {
        Self {
            file_name: file_name.into(),
            start_line: line,
            end_line: line,
        }
    }
}

/// Match a single line against the directive grammar.
///
/// The line is trimmed first, then must read `//`, optional whitespace,
/// `@import`, at least one whitespace character and a non-empty name.
/// Returns the trimmed module name.
pub fn parse_directive(line: &str) -> Option<&str> {
    let rest = line.trim_matches(is_gap).strip_prefix(COMMENT_PREFIX)?;
    let rest = rest.trim_start_matches(is_gap).strip_prefix(IMPORT_TOKEN)?;

    if !rest.starts_with(is_gap) {
        return None;
    }

    let name = rest.trim_matches(is_gap);
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

/// Find every import directive in `source`, in line order.
///
/// Lines are split on `\n` only; a trailing `\r` or a leading byte order
/// mark is removed by the trim in [`parse_directive`]. Repeated imports of
/// the same file are all reported.
pub fn scan(source: &str) -> Vec<ImportDirective> {
    source
        .split('\n')
        .enumerate()
        .filter_map(|(index, line)| {
            parse_directive(line).map(|name| ImportDirective::single_line(name, index))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_no_imports() {
        assert!(scan("#version 300 es").is_empty());
        assert!(scan("").is_empty());
    }

    #[test]
    fn test_scan_single_import() {
        let source = "#version 300 es
// @import common.glsl
void main() {
  gl_Position = vec4(0.0);
}";
        assert_eq!(
            scan(source),
            vec![ImportDirective::single_line("common.glsl", 1)]
        );
    }

    #[test]
    fn test_scan_multiple_imports() {
        let source = "#version 300 es
// @import common.glsl
// Some comment
// @import lighting.glsl
void main() {
  gl_Position = vec4(0.0);
}";
        let imports = scan(source);
        assert_eq!(
            imports,
            vec![
                ImportDirective {
                    file_name: "common.glsl".to_string(),
                    start_line: 1,
                    end_line: 1,
                },
                ImportDirective {
                    file_name: "lighting.glsl".to_string(),
                    start_line: 3,
                    end_line: 3,
                },
            ]
        );
    }

    #[test]
    fn test_scan_keeps_duplicates() {
        let source = "// @import noise.glsl\n// @import noise.glsl";
        let imports = scan(source);
        assert_eq!(imports.len(), 2);
        assert_eq!(imports[0].start_line, 0);
        assert_eq!(imports[1].start_line, 1);
    }

    #[test]
    fn test_directive_whitespace_variants() {
        assert_eq!(parse_directive("//@import a.glsl"), Some("a.glsl"));
        assert_eq!(parse_directive("   //   @import\ta.glsl   "), Some("a.glsl"));
        assert_eq!(parse_directive("// @import a.glsl\r"), Some("a.glsl"));
        assert_eq!(parse_directive("// @import  two words.glsl "), Some("two words.glsl"));
    }

    #[test]
    fn test_non_directives() {
        assert_eq!(parse_directive("// @import"), None);
        assert_eq!(parse_directive("// @import   "), None);
        assert_eq!(parse_directive("// @importa.glsl"), None);
        assert_eq!(parse_directive("// just a comment"), None);
        assert_eq!(parse_directive("/ @import a.glsl"), None);
        assert_eq!(parse_directive("# @import a.glsl"), None);
        assert_eq!(parse_directive("// see @import a.glsl"), None);
    }

    #[test]
    fn test_directive_must_start_the_line() {
        assert!(scan("foo // @import x.glsl").is_empty());
        assert!(scan("vec3 a; // @import x.glsl\n").is_empty());
    }

    #[test]
    fn test_byte_order_mark_before_directive() {
        assert_eq!(parse_directive("\u{FEFF}// @import common.glsl"), Some("common.glsl"));
        assert_eq!(parse_directive("//\u{FEFF}@import\u{FEFF}a.glsl"), Some("a.glsl"));

        let source = "\u{FEFF}// @import common.glsl\nvoid main() {}";
        assert_eq!(
            scan(source),
            vec![ImportDirective::single_line("common.glsl", 0)]
        );
    }

    #[test]
    fn test_crlf_line_numbers() {
        let source = "#version 300 es\r\n// @import common.glsl\r\nvoid main() {}\r\n";
        assert_eq!(
            scan(source),
            vec![ImportDirective::single_line("common.glsl", 1)]
        );
    }
}
