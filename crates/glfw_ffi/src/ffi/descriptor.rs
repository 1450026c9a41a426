//! Static call descriptors
//!
//! One [`CallDescriptor`] per bound entry point. They are the single source
//! of truth for symbol names and C layouts; the function pointer types in
//! [`super::table`] must agree with them.

use std::ffi::CStr;
use std::fmt;

/// C-level layout of a parameter or return value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CType {
    /// No value (return position only)
    Void,
    /// `int`
    Int,
    /// Any pointer-sized opaque value
    Pointer,
}

impl CType {
    const fn c_name(self) -> &'static str {
        match self {
            Self::Void => "void",
            Self::Int => "int",
            Self::Pointer => "void*",
        }
    }
}

/// Layout metadata for one foreign function
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallDescriptor {
    /// Symbol name as exported by the library
    pub symbol: &'static CStr,
    /// Parameter layouts, in order
    pub params: &'static [CType],
    /// Return layout
    pub returns: CType,
    /// Whether resolution fails when the symbol is absent
    pub required: bool,
}

impl CallDescriptor {
    /// Symbol name without the trailing NUL
    pub fn name(&self) -> &'static str {
        // Every descriptor below is an ASCII literal
        self.symbol.to_str().unwrap_or("<non-utf8 symbol>")
    }
}

impl fmt::Display for CallDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}(", self.returns.c_name(), self.name())?;
        if self.params.is_empty() {
            f.write_str("void")?;
        }
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(param.c_name())?;
        }
        f.write_str(")")
    }
}

const fn required(symbol: &'static CStr, params: &'static [CType], returns: CType) -> CallDescriptor {
    CallDescriptor { symbol, params, returns, required: true }
}

/// `int glfwInit(void)`
pub const INIT: CallDescriptor = required(c"glfwInit", &[], CType::Int);

/// `void glfwTerminate(void)`
pub const TERMINATE: CallDescriptor = required(c"glfwTerminate", &[], CType::Void);

/// `GLFWwindow* glfwCreateWindow(int, int, const char*, GLFWmonitor*, GLFWwindow*)`
pub const CREATE_WINDOW: CallDescriptor = required(
    c"glfwCreateWindow",
    &[CType::Int, CType::Int, CType::Pointer, CType::Pointer, CType::Pointer],
    CType::Pointer,
);

/// `void glfwMakeContextCurrent(GLFWwindow*)`
pub const MAKE_CONTEXT_CURRENT: CallDescriptor =
    required(c"glfwMakeContextCurrent", &[CType::Pointer], CType::Void);

/// `void glfwDestroyWindow(GLFWwindow*)`
pub const DESTROY_WINDOW: CallDescriptor =
    required(c"glfwDestroyWindow", &[CType::Pointer], CType::Void);

/// `GLFWmonitor* glfwGetPrimaryMonitor(void)`
pub const GET_PRIMARY_MONITOR: CallDescriptor =
    required(c"glfwGetPrimaryMonitor", &[], CType::Pointer);

/// `int glfwWindowShouldClose(GLFWwindow*)`
pub const WINDOW_SHOULD_CLOSE: CallDescriptor =
    required(c"glfwWindowShouldClose", &[CType::Pointer], CType::Int);

/// `void glfwPollEvents(void)`
pub const POLL_EVENTS: CallDescriptor = required(c"glfwPollEvents", &[], CType::Void);

/// `void glfwSwapBuffers(GLFWwindow*)`
pub const SWAP_BUFFERS: CallDescriptor =
    required(c"glfwSwapBuffers", &[CType::Pointer], CType::Void);

/// `int glfwGetError(const char**)`, only present in GLFW 3.3 and later
pub const GET_ERROR: CallDescriptor = CallDescriptor {
    symbol: c"glfwGetError",
    params: &[CType::Pointer],
    returns: CType::Int,
    required: false,
};

/// Every descriptor the function table resolves, in resolution order
pub const ALL: &[CallDescriptor] = &[
    INIT,
    TERMINATE,
    CREATE_WINDOW,
    MAKE_CONTEXT_CURRENT,
    DESTROY_WINDOW,
    GET_PRIMARY_MONITOR,
    WINDOW_SHOULD_CLOSE,
    POLL_EVENTS,
    SWAP_BUFFERS,
    GET_ERROR,
];
