//! Shader stage identifiers

use crate::error::StitchError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A programmable pipeline stage that a shader source file targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    pub const ALL: [ShaderStage; 2] = [ShaderStage::Vertex, ShaderStage::Fragment];

    /// File extension used for sources of this stage (without the dot)
    pub fn extension(&self) -> &'static str {
        match self {
            ShaderStage::Vertex => "vert",
            ShaderStage::Fragment => "frag",
        }
    }

    /// Look up the stage for a file extension, if it names one
    pub fn from_extension(ext: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|stage| stage.extension() == ext)
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => write!(f, "vertex"),
            ShaderStage::Fragment => write!(f, "fragment"),
        }
    }
}

impl FromStr for ShaderStage {
    type Err = StitchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "vertex" | "vert" => Ok(ShaderStage::Vertex),
            "fragment" | "frag" => Ok(ShaderStage::Fragment),
            _ => Err(StitchError::InvalidStage(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extensions() {
        assert_eq!(ShaderStage::Vertex.extension(), "vert");
        assert_eq!(ShaderStage::Fragment.extension(), "frag");
        assert_eq!(ShaderStage::from_extension("frag"), Some(ShaderStage::Fragment));
        assert_eq!(ShaderStage::from_extension("glsl"), None);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("vertex".parse::<ShaderStage>().unwrap(), ShaderStage::Vertex);
        assert_eq!("FRAG".parse::<ShaderStage>().unwrap(), ShaderStage::Fragment);
        assert!(matches!(
            "geometry".parse::<ShaderStage>(),
            Err(StitchError::InvalidStage(s)) if s == "geometry"
        ));
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for stage in ShaderStage::ALL {
            assert_eq!(stage.to_string().parse::<ShaderStage>().unwrap(), stage);
        }
    }
}
