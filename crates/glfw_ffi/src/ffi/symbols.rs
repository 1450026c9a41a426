//! Symbol sources: where entry point addresses come from

use libloading::Library;
use std::ffi::{c_void, CStr};
use std::path::{Path, PathBuf};
use std::ptr::NonNull;

use crate::config::loader::{LoaderConfig, LIBRARY_ENV_VAR};
use crate::error::{GlfwError, GlfwResult};

/// Anything that can hand out entry point addresses by name
pub trait SymbolSource {
    /// Name used in logs and errors
    fn describe(&self) -> String;

    /// Address of `symbol`, or `None` when it is not exported
    fn address(&self, symbol: &CStr) -> Option<NonNull<c_void>>;
}

/// A GLFW shared library opened through the platform loader
pub struct NativeLibrary {
    library: Library,
    path: PathBuf,
}

impl NativeLibrary {
    /// Open the first candidate from `config` that loads
    pub fn open(config: &LoaderConfig) -> GlfwResult<Self> {
        let env_override = std::env::var_os(LIBRARY_ENV_VAR).map(PathBuf::from);
        let candidates = config.candidates(env_override);

        let mut last_error = None;
        for candidate in &candidates {
            match Self::open_path(candidate) {
                Ok(library) => return Ok(library),
                Err(e) => {
                    log::debug!("Could not load {}: {}", candidate.display(), e);
                    last_error = Some(e);
                }
            }
        }

        let source = last_error.unwrap_or(libloading::Error::DlOpenUnknown);
        Err(GlfwError::LibraryNotFound {
            candidates: candidates.iter().map(|c| c.display().to_string()).collect(),
            source,
        })
    }

    /// Open a library at an exact path or bare name
    pub fn open_path(path: &Path) -> Result<Self, libloading::Error> {
        // SAFETY: loading GLFW runs its platform initializers, which have no
        // preconditions beyond being a well-formed shared object.
        let library = unsafe { Library::new(path)? };
        log::info!("Loaded GLFW from {}", path.display());
        Ok(Self { library, path: path.to_path_buf() })
    }

    /// Path or name the library was loaded from
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SymbolSource for NativeLibrary {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn address(&self, symbol: &CStr) -> Option<NonNull<c_void>> {
        // SAFETY: the symbol is read as a plain address and never called here;
        // typing it is the function table's job.
        let symbol = unsafe { self.library.get::<*mut c_void>(symbol.to_bytes_with_nul()) }.ok()?;
        NonNull::new(*symbol)
    }
}
