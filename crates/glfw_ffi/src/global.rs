//! Process-wide binding and a procedural mirror of the GLFW calls
//!
//! [`load`] binds the library once; later calls hand back the same
//! instance. The free functions forward to it and fail with
//! [`GlfwError::NotLoaded`] until then.

use std::sync::OnceLock;

use crate::config::LoaderConfig;
use crate::error::{GlfwError, GlfwResult};
use crate::handle::{Monitor, Window};
use crate::library::GlfwLibrary;

static LIBRARY: OnceLock<GlfwLibrary> = OnceLock::new();

/// Bind the process-wide library, or return the one already bound
///
/// `config` is ignored once a library is bound; there is no rebinding.
pub fn load(config: &LoaderConfig) -> GlfwResult<&'static GlfwLibrary> {
    if let Some(library) = LIBRARY.get() {
        return Ok(library);
    }

    let opened = GlfwLibrary::open(config)?;
    match install(opened) {
        Ok(bound) => Ok(bound),
        // Lost a race with another thread; its library is the bound one
        Err(_unused) => library(),
    }
}

/// Bind a library built elsewhere, e.g. from a custom symbol source
///
/// If one is already bound, `library` is handed back untouched and the
/// bound one stays in place.
pub fn install(library: GlfwLibrary) -> Result<&'static GlfwLibrary, GlfwLibrary> {
    LIBRARY.set(library)?;
    Ok(LIBRARY.get().expect("library was bound by the set above"))
}

/// The process-wide library
pub fn library() -> GlfwResult<&'static GlfwLibrary> {
    LIBRARY.get().ok_or(GlfwError::NotLoaded)
}

/// [`GlfwLibrary::init`] on the process-wide library
pub fn init() -> GlfwResult<()> {
    library()?.init()
}

/// [`GlfwLibrary::terminate`] on the process-wide library
pub fn terminate() -> GlfwResult<()> {
    library()?.terminate();
    Ok(())
}

/// [`GlfwLibrary::create_window`] on the process-wide library
pub fn create_window(
    width: u32,
    height: u32,
    title: &str,
    monitor: Option<Monitor>,
    share: Option<Window>,
) -> GlfwResult<Window> {
    library()?.create_window(width, height, title, monitor, share)
}

/// [`GlfwLibrary::make_context_current`] on the process-wide library
pub fn make_context_current(window: Option<Window>) -> GlfwResult<()> {
    library()?.make_context_current(window)
}
