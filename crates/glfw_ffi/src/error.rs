//! Error types for the binding layer
//!
//! Every failure the binding can observe is surfaced as a [`GlfwError`]
//! variant. Loading problems (library or symbol missing) are kept apart
//! from call-time problems so callers can tell them apart.

use std::fmt;
use thiserror::Error;

use crate::config::ConfigError;

/// Error codes reported by `glfwGetError`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// GLFW has not been initialized
    NotInitialized,
    /// No context is current for this thread
    NoCurrentContext,
    /// One of the arguments to the function was an invalid enum value
    InvalidEnum,
    /// One of the arguments to the function was an invalid value
    InvalidValue,
    /// A memory allocation failed
    OutOfMemory,
    /// GLFW could not find support for the requested API on the system
    ApiUnavailable,
    /// The requested OpenGL or OpenGL ES version is not available
    VersionUnavailable,
    /// A platform-specific error occurred
    PlatformError,
    /// The requested format is not supported or available
    FormatUnavailable,
    /// The specified window does not have an OpenGL or OpenGL ES context
    NoWindowContext,
    /// A code this binding does not know about
    Unknown(i32),
}

impl ErrorCode {
    /// Map a raw GLFW error code; `0` (`GLFW_NO_ERROR`) yields `None`
    pub const fn from_raw(code: i32) -> Option<Self> {
        let code = match code {
            0 => return None,
            0x0001_0001 => Self::NotInitialized,
            0x0001_0002 => Self::NoCurrentContext,
            0x0001_0003 => Self::InvalidEnum,
            0x0001_0004 => Self::InvalidValue,
            0x0001_0005 => Self::OutOfMemory,
            0x0001_0006 => Self::ApiUnavailable,
            0x0001_0007 => Self::VersionUnavailable,
            0x0001_0008 => Self::PlatformError,
            0x0001_0009 => Self::FormatUnavailable,
            0x0001_000A => Self::NoWindowContext,
            other => Self::Unknown(other),
        };
        Some(code)
    }

    /// The raw value GLFW uses for this code
    pub const fn raw(self) -> i32 {
        match self {
            Self::NotInitialized => 0x0001_0001,
            Self::NoCurrentContext => 0x0001_0002,
            Self::InvalidEnum => 0x0001_0003,
            Self::InvalidValue => 0x0001_0004,
            Self::OutOfMemory => 0x0001_0005,
            Self::ApiUnavailable => 0x0001_0006,
            Self::VersionUnavailable => 0x0001_0007,
            Self::PlatformError => 0x0001_0008,
            Self::FormatUnavailable => 0x0001_0009,
            Self::NoWindowContext => 0x0001_000A,
            Self::Unknown(code) => code,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown(code) => write!(f, "unknown error {code:#x}"),
            other => write!(f, "{other:?} ({:#x})", other.raw()),
        }
    }
}

/// A native error pulled from `glfwGetError`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorReport {
    /// The error code
    pub code: ErrorCode,
    /// Human-readable description, if GLFW supplied one
    pub description: Option<String>,
}

impl fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.description {
            Some(description) => write!(f, "{}: {}", self.code, description),
            None => write!(f, "{}", self.code),
        }
    }
}

/// Binding layer errors
#[derive(Error, Debug)]
pub enum GlfwError {
    /// None of the candidate library names could be loaded
    #[error("GLFW library not found (tried {}): {source}", .candidates.join(", "))]
    LibraryNotFound {
        /// Every name or path that was attempted, in order
        candidates: Vec<String>,
        /// Loader error from the last attempt
        #[source]
        source: libloading::Error,
    },

    /// A required entry point is missing from the loaded library
    #[error("symbol `{symbol}` not found in {library}")]
    SymbolNotFound {
        /// Name of the missing symbol
        symbol: &'static str,
        /// Description of the library that was searched
        library: String,
    },

    /// The process-wide function table has not been bound yet
    #[error("GLFW library has not been loaded")]
    NotLoaded,

    /// A wrapper that requires `glfwInit` was called before it succeeded
    #[error("GLFW is not initialized")]
    NotInitialized,

    /// `glfwInit` reported failure
    #[error("GLFW initialization failed{}", report_suffix(.0))]
    InitializationFailed(Option<ErrorReport>),

    /// `glfwCreateWindow` returned a null window
    #[error("window creation failed{}", report_suffix(.0))]
    WindowCreationFailed(Option<ErrorReport>),

    /// A foreign call completed but GLFW reported an error for it
    #[error("{function} failed: {report}")]
    CallFailed {
        /// Name of the entry point that was called
        function: &'static str,
        /// What GLFW reported
        report: ErrorReport,
    },

    /// An argument could not be marshaled for the foreign call
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Loader configuration could not be read
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Result alias used throughout the crate
pub type GlfwResult<T> = Result<T, GlfwError>;

fn report_suffix(report: &Option<ErrorReport>) -> String {
    report
        .as_ref()
        .map(|report| format!(": {report}"))
        .unwrap_or_default()
}
