//! Foreign function plumbing
//!
//! - **`descriptor`**: static layout metadata for each entry point
//! - **`symbols`**: where addresses come from (the loaded shared library)
//! - **`table`**: addresses resolved into typed function pointers

pub mod descriptor;
pub mod symbols;
pub(crate) mod table;

pub use descriptor::{CType, CallDescriptor};
pub use symbols::{NativeLibrary, SymbolSource};
