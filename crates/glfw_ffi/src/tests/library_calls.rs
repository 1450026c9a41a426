//! Wrapper behavior: marshaling, result conversion, error reports

use super::stub::{self, Call, RaisedError, StubSymbols, FIRST_WINDOW, PRIMARY_MONITOR};
use crate::error::ErrorCode;
use crate::{GlfwError, GlfwLibrary, GLFW_FALSE};

const PLATFORM_ERROR: i32 = 0x0001_0008;

fn initialized(symbols: StubSymbols) -> GlfwLibrary {
    let glfw = GlfwLibrary::from_source(symbols).unwrap();
    glfw.init().unwrap();
    stub::take_calls();
    glfw
}

#[test]
fn test_init_succeeds_when_library_reports_true() {
    let glfw = GlfwLibrary::from_source(StubSymbols::complete()).unwrap();

    assert!(glfw.init().is_ok());
    assert!(glfw.is_initialized());
    assert_eq!(stub::take_api_calls(), vec![Call::Init]);
}

#[test]
fn test_init_fails_when_library_reports_false() {
    let glfw = GlfwLibrary::from_source(StubSymbols::complete()).unwrap();
    stub::with_state(|state| {
        state.init_result = GLFW_FALSE;
        state.raise = Some(RaisedError {
            symbol: "glfwInit",
            code: PLATFORM_ERROR,
            description: c"X11: The DISPLAY environment variable is missing",
        });
    });

    match glfw.init() {
        Err(GlfwError::InitializationFailed(Some(report))) => {
            assert_eq!(report.code, ErrorCode::PlatformError);
            assert_eq!(
                report.description.as_deref(),
                Some("X11: The DISPLAY environment variable is missing")
            );
        }
        other => panic!("unexpected init result: {other:?}"),
    }
    assert!(!glfw.is_initialized());
}

#[test]
fn test_init_failure_without_error_reporting() {
    let glfw = GlfwLibrary::from_source(StubSymbols::legacy()).unwrap();
    stub::with_state(|state| state.init_result = GLFW_FALSE);

    assert!(matches!(glfw.init(), Err(GlfwError::InitializationFailed(None))));
}

#[test]
fn test_create_window_marshals_arguments() {
    let glfw = initialized(StubSymbols::complete());

    let window = glfw.create_window(640, 480, "Hello World", None, None).unwrap();

    assert_eq!(window.as_ptr() as usize, FIRST_WINDOW);
    assert_eq!(
        stub::take_api_calls(),
        vec![Call::CreateWindow {
            width: 640,
            height: 480,
            title: "Hello World".to_string(),
            monitor: 0,
            share: 0,
        }]
    );
}

#[test]
fn test_create_window_passes_monitor_and_share() {
    let glfw = initialized(StubSymbols::complete());

    let monitor = glfw.primary_monitor().unwrap().unwrap();
    let first = glfw.create_window(320, 240, "first", None, None).unwrap();
    let second = glfw.create_window(800, 600, "second", Some(monitor), Some(first)).unwrap();
    assert_ne!(first, second);

    let calls = stub::take_api_calls();
    assert_eq!(
        calls.last(),
        Some(&Call::CreateWindow {
            width: 800,
            height: 600,
            title: "second".to_string(),
            monitor: PRIMARY_MONITOR,
            share: FIRST_WINDOW,
        })
    );
}

#[test]
fn test_create_window_null_is_failure() {
    let glfw = initialized(StubSymbols::complete());
    stub::with_state(|state| {
        state.next_window = 0;
        state.raise = Some(RaisedError {
            symbol: "glfwCreateWindow",
            code: 0x0001_0006,
            description: c"WGL: The driver does not appear to support OpenGL",
        });
    });

    match glfw.create_window(640, 480, "Hello World", None, None) {
        Err(GlfwError::WindowCreationFailed(Some(report))) => {
            assert_eq!(report.code, ErrorCode::ApiUnavailable);
        }
        other => panic!("unexpected create result: {other:?}"),
    }
}

#[test]
fn test_create_window_rejects_bad_arguments_without_calling() {
    let glfw = initialized(StubSymbols::complete());

    assert!(matches!(
        glfw.create_window(0, 480, "zero width", None, None),
        Err(GlfwError::InvalidArgument(_))
    ));
    assert!(matches!(
        glfw.create_window(640, 480, "nul\0title", None, None),
        Err(GlfwError::InvalidArgument(_))
    ));
    assert!(stub::take_api_calls().is_empty());
}

#[test]
fn test_make_context_current_single_call() {
    let glfw = initialized(StubSymbols::legacy());
    let window = glfw.create_window(640, 480, "Hello World", None, None).unwrap();
    stub::take_calls();

    glfw.make_context_current(Some(window)).unwrap();

    assert_eq!(stub::take_calls(), vec![Call::MakeContextCurrent(FIRST_WINDOW)]);
}

#[test]
fn test_make_context_current_none_detaches() {
    let glfw = initialized(StubSymbols::complete());

    glfw.make_context_current(None).unwrap();

    assert_eq!(stub::take_api_calls(), vec![Call::MakeContextCurrent(0)]);
}

#[test]
fn test_call_failure_carries_report() {
    let glfw = initialized(StubSymbols::complete());
    let window = glfw.create_window(640, 480, "Hello World", None, None).unwrap();
    stub::with_state(|state| {
        state.raise = Some(RaisedError {
            symbol: "glfwMakeContextCurrent",
            code: 0x0001_000A,
            description: c"Cannot make current with a window that has no OpenGL or OpenGL ES context",
        });
    });

    match glfw.make_context_current(Some(window)) {
        Err(GlfwError::CallFailed { function, report }) => {
            assert_eq!(function, "glfwMakeContextCurrent");
            assert_eq!(report.code, ErrorCode::NoWindowContext);
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_stale_error_is_not_blamed_on_next_call() {
    let glfw = initialized(StubSymbols::complete());
    stub::with_state(|state| {
        state.pending_error = Some((PLATFORM_ERROR, c"left over from an earlier call"));
    });

    assert!(glfw.poll_events().is_ok());
}

#[test]
fn test_wrappers_require_init() {
    let glfw = GlfwLibrary::from_source(StubSymbols::complete()).unwrap();
    let window = crate::Window::from_raw(FIRST_WINDOW as *mut std::ffi::c_void).unwrap();

    assert!(matches!(
        glfw.create_window(640, 480, "Hello World", None, None),
        Err(GlfwError::NotInitialized)
    ));
    assert!(matches!(glfw.make_context_current(Some(window)), Err(GlfwError::NotInitialized)));
    assert!(matches!(glfw.primary_monitor(), Err(GlfwError::NotInitialized)));
    assert!(matches!(glfw.poll_events(), Err(GlfwError::NotInitialized)));
    assert!(matches!(glfw.destroy_window(window), Err(GlfwError::NotInitialized)));
    assert!(matches!(glfw.swap_buffers(window), Err(GlfwError::NotInitialized)));
    assert!(matches!(glfw.window_should_close(window), Err(GlfwError::NotInitialized)));
    assert!(stub::take_calls().is_empty());
}

#[test]
fn test_terminate_twice_is_harmless() {
    let glfw = initialized(StubSymbols::complete());

    glfw.terminate();
    glfw.terminate();

    assert!(!glfw.is_initialized());
    assert_eq!(stub::take_api_calls(), vec![Call::Terminate, Call::Terminate]);
}

#[test]
fn test_terminate_invalidates_init() {
    let glfw = initialized(StubSymbols::complete());
    glfw.terminate();

    assert!(matches!(
        glfw.create_window(640, 480, "after terminate", None, None),
        Err(GlfwError::NotInitialized)
    ));
}

#[test]
fn test_drop_leaves_glfw_running() {
    let glfw = initialized(StubSymbols::complete());
    drop(glfw);
    assert!(stub::take_api_calls().is_empty());
}

#[test]
fn test_dropping_one_binding_keeps_the_other_usable() {
    let first = initialized(StubSymbols::complete());
    let second = initialized(StubSymbols::complete());

    drop(second);
    assert!(stub::take_api_calls().is_empty());

    assert!(first.is_initialized());
    let window = first.create_window(640, 480, "Hello World", None, None).unwrap();
    assert_eq!(window.as_ptr() as usize, FIRST_WINDOW);
    assert!(!stub::take_api_calls().contains(&Call::Terminate));
}

#[test]
fn test_window_lifecycle() {
    let glfw = initialized(StubSymbols::complete());
    let window = glfw.create_window(640, 480, "Hello World", None, None).unwrap();

    assert!(!glfw.window_should_close(window).unwrap());
    stub::with_state(|state| state.should_close = 1);
    assert!(glfw.window_should_close(window).unwrap());

    glfw.swap_buffers(window).unwrap();
    glfw.destroy_window(window).unwrap();

    let calls = stub::take_api_calls();
    assert_eq!(
        &calls[1..],
        &[
            Call::WindowShouldClose(FIRST_WINDOW),
            Call::WindowShouldClose(FIRST_WINDOW),
            Call::SwapBuffers(FIRST_WINDOW),
            Call::DestroyWindow(FIRST_WINDOW),
        ]
    );
}

#[test]
fn test_window_should_close_reports_errors() {
    let glfw = initialized(StubSymbols::complete());
    let window = glfw.create_window(640, 480, "Hello World", None, None).unwrap();
    stub::with_state(|state| {
        state.raise = Some(RaisedError {
            symbol: "glfwWindowShouldClose",
            code: 0x0001_0001,
            description: c"The GLFW library is not initialized",
        });
    });

    match glfw.window_should_close(window) {
        Err(GlfwError::CallFailed { function, report }) => {
            assert_eq!(function, "glfwWindowShouldClose");
            assert_eq!(report.code, ErrorCode::NotInitialized);
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_no_primary_monitor() {
    let glfw = initialized(StubSymbols::complete());
    stub::with_state(|state| state.monitor = 0);

    assert_eq!(glfw.primary_monitor().unwrap(), None);
}
