//! Resolved, typed entry points

use std::ffi::{c_char, c_int, c_void};
use std::ptr::NonNull;

use super::descriptor::{self, CallDescriptor};
use super::symbols::SymbolSource;
use crate::error::{GlfwError, GlfwResult};

pub(crate) type InitFn = unsafe extern "C" fn() -> c_int;
pub(crate) type TerminateFn = unsafe extern "C" fn();
pub(crate) type CreateWindowFn = unsafe extern "C" fn(
    width: c_int,
    height: c_int,
    title: *const c_char,
    monitor: *mut c_void,
    share: *mut c_void,
) -> *mut c_void;
pub(crate) type WindowFn = unsafe extern "C" fn(window: *mut c_void);
pub(crate) type GetPrimaryMonitorFn = unsafe extern "C" fn() -> *mut c_void;
pub(crate) type WindowShouldCloseFn = unsafe extern "C" fn(window: *mut c_void) -> c_int;
pub(crate) type PollEventsFn = unsafe extern "C" fn();
pub(crate) type GetErrorFn = unsafe extern "C" fn(description: *mut *const c_char) -> c_int;

/// Function pointers for every bound entry point
///
/// Built once by [`FunctionTable::resolve`]; immutable afterwards. The
/// pointers are only valid while the library they came from stays loaded.
#[derive(Clone, Copy)]
pub(crate) struct FunctionTable {
    pub init: InitFn,
    pub terminate: TerminateFn,
    pub create_window: CreateWindowFn,
    pub make_context_current: WindowFn,
    pub destroy_window: WindowFn,
    pub get_primary_monitor: GetPrimaryMonitorFn,
    pub window_should_close: WindowShouldCloseFn,
    pub poll_events: PollEventsFn,
    pub swap_buffers: WindowFn,
    pub get_error: Option<GetErrorFn>,
}

impl FunctionTable {
    /// Resolve every descriptor in [`descriptor::ALL`] against `source`
    ///
    /// Fails on the first missing required symbol.
    pub fn resolve(source: &dyn SymbolSource) -> GlfwResult<Self> {
        let library = source.describe();
        let lookup = |descriptor: &CallDescriptor| -> GlfwResult<Option<NonNull<c_void>>> {
            match source.address(descriptor.symbol) {
                Some(address) => {
                    log::debug!("Bound {} at {:p} from {}", descriptor, address, library);
                    Ok(Some(address))
                }
                None if descriptor.required => Err(GlfwError::SymbolNotFound {
                    symbol: descriptor.name(),
                    library: library.clone(),
                }),
                None => {
                    log::debug!("Optional symbol {} not exported by {}", descriptor.name(), library);
                    Ok(None)
                }
            }
        };
        let require = |descriptor: &CallDescriptor| -> GlfwResult<NonNull<c_void>> {
            lookup(descriptor)?.ok_or_else(|| GlfwError::SymbolNotFound {
                symbol: descriptor.name(),
                library: library.clone(),
            })
        };

        // SAFETY: each address is cast to the pointer type matching its
        // descriptor's C signature.
        unsafe {
            Ok(Self {
                init: cast(require(&descriptor::INIT)?),
                terminate: cast(require(&descriptor::TERMINATE)?),
                create_window: cast(require(&descriptor::CREATE_WINDOW)?),
                make_context_current: cast(require(&descriptor::MAKE_CONTEXT_CURRENT)?),
                destroy_window: cast(require(&descriptor::DESTROY_WINDOW)?),
                get_primary_monitor: cast(require(&descriptor::GET_PRIMARY_MONITOR)?),
                window_should_close: cast(require(&descriptor::WINDOW_SHOULD_CLOSE)?),
                poll_events: cast(require(&descriptor::POLL_EVENTS)?),
                swap_buffers: cast(require(&descriptor::SWAP_BUFFERS)?),
                get_error: lookup(&descriptor::GET_ERROR)?.map(|address| cast(address)),
            })
        }
    }
}

/// Reinterpret a symbol address as a function pointer
///
/// # Safety
/// `F` must be a function pointer type whose signature matches the symbol.
unsafe fn cast<F: Copy>(address: NonNull<c_void>) -> F {
    debug_assert_eq!(std::mem::size_of::<F>(), std::mem::size_of::<*mut c_void>());
    // SAFETY: function pointers and data pointers share a representation on
    // every platform libloading supports; the caller vouches for the signature.
    unsafe { std::mem::transmute_copy(&address.as_ptr()) }
}
