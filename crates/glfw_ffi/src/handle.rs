//! Opaque handles for GLFW-owned objects
//!
//! A handle is nothing more than the address GLFW gave back. The binding
//! never dereferences it, and it is not `Send`: GLFW objects belong to the
//! thread that created them.

use std::ffi::c_void;
use std::fmt;
use std::ptr::NonNull;

macro_rules! opaque_handle {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name(NonNull<c_void>);

        impl $name {
            pub(crate) fn from_raw(address: *mut c_void) -> Option<Self> {
                NonNull::new(address).map(Self)
            }

            /// The raw address, for passing to other native code
            pub fn as_ptr(self) -> *mut c_void {
                self.0.as_ptr()
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({:p})"), self.0)
            }
        }
    };
}

opaque_handle!(
    /// A `GLFWwindow*`
    ///
    /// Valid from a successful [`create_window`](crate::GlfwLibrary::create_window)
    /// until [`destroy_window`](crate::GlfwLibrary::destroy_window) or
    /// [`terminate`](crate::GlfwLibrary::terminate). Using it afterwards is
    /// undefined; the binding does not track this.
    Window
);

opaque_handle!(
    /// A `GLFWmonitor*`
    ///
    /// Monitors are owned by GLFW and have no release function. A handle
    /// stays valid until the monitor is disconnected or GLFW terminates.
    Monitor
);
