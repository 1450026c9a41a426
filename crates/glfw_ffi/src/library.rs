//! Typed wrappers around the bound GLFW entry points
//!
//! [`GlfwLibrary`] owns the loaded library and its resolved function table.
//! Each wrapper marshals its arguments, performs exactly one foreign call
//! for the entry point it names, and converts the raw result:
//!
//! - integer results follow C truthiness (`0` is false)
//! - a null window from `glfwCreateWindow` is an error, never a handle
//! - when `glfwGetError` is available its report is attached to the error
//!
//! Nothing is swallowed: every failure comes back as a [`GlfwError`].

use std::ffi::{c_char, c_int, CStr, CString};
use std::ptr;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::config::LoaderConfig;
use crate::error::{ErrorCode, ErrorReport, GlfwError, GlfwResult};
use crate::ffi::table::FunctionTable;
use crate::ffi::{NativeLibrary, SymbolSource};
use crate::handle::{Monitor, Window};

/// `GLFW_TRUE`
pub const GLFW_TRUE: c_int = 1;
/// `GLFW_FALSE`
pub const GLFW_FALSE: c_int = 0;

/// A loaded GLFW library with every entry point resolved
///
/// Resolution happens in the constructor, so a missing symbol is reported
/// before any wrapper can run. Calling the window and context wrappers
/// before [`init`](Self::init) succeeds is undefined in GLFW itself; here it
/// returns [`GlfwError::NotInitialized`] without making the call.
///
/// GLFW's state is shared by every binding over the same library, so the
/// initialized flag only reflects calls made through this instance.
/// Dropping a binding never terminates GLFW; call
/// [`terminate`](Self::terminate) explicitly.
pub struct GlfwLibrary {
    table: FunctionTable,
    initialized: AtomicBool,
    origin: String,
    // Keeps the code behind `table` mapped
    _source: Box<dyn SymbolSource + Send + Sync>,
}

impl GlfwLibrary {
    /// Load the shared library described by `config` and bind it
    pub fn open(config: &LoaderConfig) -> GlfwResult<Self> {
        Self::from_source(NativeLibrary::open(config)?)
    }

    /// Bind against any symbol source
    pub fn from_source<S>(source: S) -> GlfwResult<Self>
    where
        S: SymbolSource + Send + Sync + 'static,
    {
        let table = FunctionTable::resolve(&source)?;
        let origin = source.describe();
        log::info!(
            "GLFW bound from {} (error reporting {})",
            origin,
            if table.get_error.is_some() { "available" } else { "unavailable" }
        );

        Ok(Self {
            table,
            initialized: AtomicBool::new(false),
            origin,
            _source: Box::new(source),
        })
    }

    /// Where the bound symbols came from
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Whether `glfwInit` has succeeded and `glfwTerminate` has not run since
    pub fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::Acquire)
    }

    /// Whether the library exports `glfwGetError`
    pub fn has_error_reporting(&self) -> bool {
        self.table.get_error.is_some()
    }

    /// `glfwInit`
    pub fn init(&self) -> GlfwResult<()> {
        self.discard_stale_error();

        // SAFETY: glfwInit takes no arguments.
        let result = unsafe { (self.table.init)() };
        if result == GLFW_FALSE {
            let report = self.take_error();
            log::warn!("glfwInit returned GLFW_FALSE");
            return Err(GlfwError::InitializationFailed(report));
        }

        self.initialized.store(true, Ordering::Release);
        log::debug!("GLFW initialized");
        Ok(())
    }

    /// `glfwTerminate`
    ///
    /// Always forwarded: GLFW accepts it when uninitialized, so repeated
    /// calls are harmless. Every window handle is invalid afterwards.
    pub fn terminate(&self) {
        // SAFETY: glfwTerminate takes no arguments and tolerates being called
        // without a prior glfwInit.
        unsafe { (self.table.terminate)() };
        if self.initialized.swap(false, Ordering::AcqRel) {
            log::debug!("GLFW terminated");
        }
    }

    /// `glfwCreateWindow`
    ///
    /// `monitor` requests a full screen window; `share` names a window whose
    /// context objects the new context should share.
    pub fn create_window(
        &self,
        width: u32,
        height: u32,
        title: &str,
        monitor: Option<Monitor>,
        share: Option<Window>,
    ) -> GlfwResult<Window> {
        self.ensure_initialized()?;
        let width = dimension("width", width)?;
        let height = dimension("height", height)?;
        let title = CString::new(title).map_err(|e| {
            GlfwError::InvalidArgument(format!(
                "window title contains a NUL byte at offset {}",
                e.nul_position()
            ))
        })?;

        self.discard_stale_error();

        // SAFETY: `title` outlives the call, and the handles came from this
        // library (or are null, which GLFW accepts for both).
        let address = unsafe {
            (self.table.create_window)(
                width,
                height,
                title.as_ptr(),
                monitor.map_or(ptr::null_mut(), Monitor::as_ptr),
                share.map_or(ptr::null_mut(), Window::as_ptr),
            )
        };

        match Window::from_raw(address) {
            Some(window) => {
                log::debug!("Created {}x{} window {:?}", width, height, window);
                Ok(window)
            }
            None => {
                let report = self.take_error();
                log::warn!("glfwCreateWindow returned NULL");
                Err(GlfwError::WindowCreationFailed(report))
            }
        }
    }

    /// `glfwMakeContextCurrent`; `None` detaches the current context
    pub fn make_context_current(&self, window: Option<Window>) -> GlfwResult<()> {
        self.ensure_initialized()?;
        self.discard_stale_error();

        // SAFETY: the handle came from this library, or is null.
        unsafe { (self.table.make_context_current)(window.map_or(ptr::null_mut(), Window::as_ptr)) };
        self.check("glfwMakeContextCurrent")
    }

    /// `glfwDestroyWindow`
    ///
    /// The handle must not be used again.
    pub fn destroy_window(&self, window: Window) -> GlfwResult<()> {
        self.ensure_initialized()?;
        self.discard_stale_error();

        // SAFETY: the handle came from this library.
        unsafe { (self.table.destroy_window)(window.as_ptr()) };
        log::debug!("Destroyed window {:?}", window);
        self.check("glfwDestroyWindow")
    }

    /// `glfwGetPrimaryMonitor`; `Ok(None)` when no monitor is connected
    pub fn primary_monitor(&self) -> GlfwResult<Option<Monitor>> {
        self.ensure_initialized()?;
        self.discard_stale_error();

        // SAFETY: glfwGetPrimaryMonitor takes no arguments.
        let address = unsafe { (self.table.get_primary_monitor)() };
        self.check("glfwGetPrimaryMonitor")?;
        Ok(Monitor::from_raw(address))
    }

    /// `glfwWindowShouldClose`
    pub fn window_should_close(&self, window: Window) -> GlfwResult<bool> {
        self.ensure_initialized()?;
        self.discard_stale_error();

        // SAFETY: the handle came from this library.
        let result = unsafe { (self.table.window_should_close)(window.as_ptr()) };
        self.check("glfwWindowShouldClose")?;
        Ok(result != GLFW_FALSE)
    }

    /// `glfwPollEvents`
    pub fn poll_events(&self) -> GlfwResult<()> {
        self.ensure_initialized()?;
        self.discard_stale_error();

        // SAFETY: glfwPollEvents takes no arguments.
        unsafe { (self.table.poll_events)() };
        self.check("glfwPollEvents")
    }

    /// `glfwSwapBuffers`
    pub fn swap_buffers(&self, window: Window) -> GlfwResult<()> {
        self.ensure_initialized()?;
        self.discard_stale_error();

        // SAFETY: the handle came from this library.
        unsafe { (self.table.swap_buffers)(window.as_ptr()) };
        self.check("glfwSwapBuffers")
    }

    /// `glfwGetError`: pop the last error GLFW recorded for this thread
    ///
    /// Always `None` when the library predates `glfwGetError`.
    pub fn take_error(&self) -> Option<ErrorReport> {
        let get_error = self.table.get_error?;

        let mut description: *const c_char = ptr::null();
        // SAFETY: `description` is a valid out-pointer; GLFW may leave it null.
        let code = unsafe { get_error(&mut description) };
        let code = ErrorCode::from_raw(code)?;

        let description = (!description.is_null()).then(|| {
            // SAFETY: GLFW hands out a NUL-terminated string valid until the
            // next error; it is copied out immediately.
            unsafe { CStr::from_ptr(description) }.to_string_lossy().into_owned()
        });
        Some(ErrorReport { code, description })
    }

    fn ensure_initialized(&self) -> GlfwResult<()> {
        if self.is_initialized() {
            Ok(())
        } else {
            Err(GlfwError::NotInitialized)
        }
    }

    // Clear whatever an earlier call left behind so the next report belongs to this call
    fn discard_stale_error(&self) {
        if let Some(stale) = self.take_error() {
            log::debug!("Discarding stale GLFW error: {}", stale);
        }
    }

    fn check(&self, function: &'static str) -> GlfwResult<()> {
        match self.take_error() {
            Some(report) => {
                log::warn!("{} reported {}", function, report);
                Err(GlfwError::CallFailed { function, report })
            }
            None => Ok(()),
        }
    }
}

impl Drop for GlfwLibrary {
    fn drop(&mut self) {
        // Another binding may still be using the same GLFW state
        if self.is_initialized() {
            log::warn!("GLFW binding from {} dropped without terminate", self.origin);
        }
    }
}

fn dimension(name: &str, value: u32) -> GlfwResult<c_int> {
    if value == 0 {
        return Err(GlfwError::InvalidArgument(format!("window {name} must be positive")));
    }
    c_int::try_from(value)
        .map_err(|_| GlfwError::InvalidArgument(format!("window {name} {value} exceeds {}", c_int::MAX)))
}
