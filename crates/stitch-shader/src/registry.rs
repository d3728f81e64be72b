//! Module registry for loading and looking up importable shader modules

use log::{debug, warn};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::hash::BuildHasher;
use std::path::Path;
use stitch_core::{Result, StitchError};

/// Lookup of module text by bare file name.
///
/// Keys match exactly and case-sensitively. Implementations must return the
/// same answer for the duration of a compose call.
pub trait ModuleSource {
    fn module(&self, name: &str) -> Option<&str>;
}

impl<S: BuildHasher> ModuleSource for HashMap<String, String, S> {
    fn module(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl ModuleSource for BTreeMap<String, String> {
    fn module(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

/// Registry that holds importable shader modules keyed by file name
#[derive(Debug, Clone, Default)]
pub struct ModuleRegistry {
    modules: HashMap<String, String>,
}

impl ModuleRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every `*.<extension>` file in a directory, keyed by file name
    pub fn load_from_directory<P: AsRef<Path>>(path: P, extension: &str) -> Result<Self> {
        let mut registry = Self::new();
        registry.load_directory(path, extension)?;
        Ok(registry)
    }

    /// Load modules from multiple directories, merging them in order.
    /// Later directories override earlier ones.
    pub fn load_from_directories(paths: &[impl AsRef<Path>], extension: &str) -> Result<Self> {
        let mut registry = Self::new();
        for path in paths {
            registry.load_directory(path, extension)?;
        }
        Ok(registry)
    }

    /// Load modules from a single directory into this registry (additive/override)
    pub fn load_directory<P: AsRef<Path>>(&mut self, path: P, extension: &str) -> Result<()> {
        let path = path.as_ref();
        if !path.is_dir() {
            return Err(StitchError::ModuleDirNotFound(path.display().to_string()));
        }

        let extension = extension.trim_start_matches('.');
        let mut loaded = 0;

        for entry in fs::read_dir(path)? {
            let entry = entry?;
            let file_path = entry.path();
            if !file_path.is_file() {
                continue;
            }
            if !file_path.extension().map(|e| e == extension).unwrap_or(false) {
                continue;
            }

            let Some(name) = file_path.file_name().and_then(|n| n.to_str()) else {
                warn!("Skipping module with non-UTF-8 name: {}", file_path.display());
                continue;
            };

            let content = fs::read_to_string(&file_path)?;
            debug!("Loaded module {} ({} bytes)", name, content.len());
            self.modules.insert(name.to_string(), content);
            loaded += 1;
        }

        debug!("Loaded {} module(s) from {}", loaded, path.display());
        Ok(())
    }

    /// Register a module directly, replacing any previous content
    pub fn insert(&mut self, name: impl Into<String>, content: impl Into<String>) {
        self.modules.insert(name.into(), content.into());
    }

    /// Get a module's content by file name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.modules.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.modules.contains_key(name)
    }

    /// List all module names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.modules.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.modules.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl ModuleSource for ModuleRegistry {
    fn module(&self, name: &str) -> Option<&str> {
        self.get(name)
    }
}

impl From<HashMap<String, String>> for ModuleRegistry {
    fn from(modules: HashMap<String, String>) -> Self {
        Self { modules }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ModuleRegistry {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            modules: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
