//! Where to look for the GLFW shared library

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::Config;

/// Environment variable naming an explicit library path
pub const LIBRARY_ENV_VAR: &str = "GLFW_LIBRARY";

/// Library lookup configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// File names to try, in order
    pub library_names: Vec<String>,
    /// Directories searched before falling back to the platform loader
    pub search_paths: Vec<PathBuf>,
    /// Whether `GLFW_LIBRARY` takes precedence over everything else
    pub honor_env_override: bool,
}

impl LoaderConfig {
    /// Platform default library names
    pub fn default_library_names() -> Vec<String> {
        let names: &[&str] = if cfg!(target_os = "windows") {
            &["glfw3.dll", "glfw.dll"]
        } else if cfg!(target_os = "macos") {
            &["libglfw.3.dylib", "libglfw.dylib"]
        } else {
            &["libglfw.so.3", "libglfw.so"]
        };
        names.iter().map(|name| (*name).to_string()).collect()
    }

    /// Add a directory to search
    #[must_use]
    pub fn with_search_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.search_paths.push(path.into());
        self
    }

    /// Every candidate the loader should attempt, in order
    ///
    /// `env_override` is the value of [`LIBRARY_ENV_VAR`], passed in so the
    /// ordering can be checked without touching the process environment.
    pub fn candidates(&self, env_override: Option<PathBuf>) -> Vec<PathBuf> {
        let mut candidates = Vec::new();

        if self.honor_env_override {
            candidates.extend(env_override);
        }

        for dir in &self.search_paths {
            for name in &self.library_names {
                candidates.push(dir.join(name));
            }
        }

        // Bare names go through the platform loader's own search path
        candidates.extend(self.library_names.iter().map(PathBuf::from));
        candidates
    }
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            library_names: Self::default_library_names(),
            search_paths: Vec::new(),
            honor_env_override: true,
        }
    }
}

impl Config for LoaderConfig {}
