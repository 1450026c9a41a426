//! Demo configuration

use std::time::Duration;

use glfw_ffi::config::{Config, LoaderConfig};
use glfw_ffi::{GlfwError, GlfwResult};
use serde::{Deserialize, Serialize};

/// Default location of the demo config file
pub const CONFIG_PATH: &str = "glfw_demo.toml";

/// Demo settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Where to find GLFW
    pub loader: LoaderConfig,
    /// The window to open
    pub window: WindowConfig,
}

/// Window settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Width in screen coordinates
    pub width: u32,
    /// Height in screen coordinates
    pub height: u32,
    /// Title bar text
    pub title: String,
    /// Close automatically after this many seconds
    pub run_seconds: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            title: "Hello World".to_string(),
            run_seconds: 3.0,
        }
    }
}

impl WindowConfig {
    /// How long to keep the window open; negative or NaN means close at once
    pub fn run_duration(&self) -> GlfwResult<Duration> {
        Duration::try_from_secs_f32(self.run_seconds.max(0.0)).map_err(|_| {
            GlfwError::InvalidArgument(format!("run_seconds {} is out of range", self.run_seconds))
        })
    }
}

impl Config for DemoConfig {}
