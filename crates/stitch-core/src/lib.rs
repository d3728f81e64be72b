//! Stitch Core - Foundational types for the Stitch shader preprocessor
//!
//! This crate provides the types that the other Stitch crates depend on:
//! - `ShaderStage` - Vertex/fragment stage identifiers
//! - Error types and Result alias

mod error;
mod stage;

pub use error::{Result, StitchError};
pub use stage::ShaderStage;
