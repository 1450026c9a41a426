//! # glfw_ffi
//!
//! Bindings for a handful of GLFW entry points, loaded from the GLFW shared
//! library at runtime instead of linked at build time.
//!
//! ## Features
//!
//! - **Eager symbol resolution**: a missing entry point fails at load time, not first use
//! - **Typed wrappers**: handles instead of raw pointers, `Result` instead of sentinels
//! - **Native error reports**: `glfwGetError` output attached to failures when available
//! - **Configurable lookup**: library names and search paths from TOML or RON
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use glfw_ffi::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let glfw = GlfwLibrary::open(&LoaderConfig::default())?;
//!     glfw.init()?;
//!
//!     let window = glfw.create_window(640, 480, "Hello World", None, None)?;
//!     glfw.make_context_current(Some(window))?;
//!
//!     glfw.destroy_window(window)?;
//!     glfw.terminate();
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod config;
pub mod error;
pub mod ffi;
pub mod global;
pub mod handle;
pub mod library;
pub mod logging;

#[cfg(test)]
mod tests;

pub use error::{ErrorCode, ErrorReport, GlfwError, GlfwResult};
pub use handle::{Monitor, Window};
pub use library::{GlfwLibrary, GLFW_FALSE, GLFW_TRUE};

/// Common imports for binding users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError, LoaderConfig},
        ErrorCode, ErrorReport, GlfwError, GlfwLibrary, GlfwResult, Monitor, Window,
    };
}
