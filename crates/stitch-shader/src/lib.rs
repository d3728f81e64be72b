//! Stitch Shader - GLSL `@import` preprocessing
//!
//! Shader sources pull in shared modules with one-line directives:
//!
//! ```glsl
//! #version 300 es
//! // @import common.glsl
//! void main() { ... }
//! ```
//!
//! [`scan`] finds those directives and [`compose`] splices the named modules
//! in place, each wrapped in `// Begin import:` / `// End import:` markers.
//! Modules are looked up through [`ModuleSource`], which [`ModuleRegistry`]
//! and plain string maps implement. [`ShaderLibrary`] ties a directory of
//! `.vert`/`.frag` files to a registry.

mod composer;
mod library;
mod registry;
mod scanner;

pub use composer::compose;
pub use library::ShaderLibrary;
pub use registry::{ModuleRegistry, ModuleSource};
pub use scanner::{parse_directive, scan, ImportDirective};
