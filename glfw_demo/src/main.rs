//! Opens a single window through the dynamically loaded GLFW bindings

mod config;

use std::time::{Duration, Instant};

use config::{DemoConfig, CONFIG_PATH};
use glfw_ffi::prelude::*;

struct DemoApp {
    config: DemoConfig,
}

impl DemoApp {
    const fn new(config: DemoConfig) -> Self {
        Self { config }
    }

    fn run(&self) -> GlfwResult<()> {
        let run_for = self.config.window.run_duration()?;
        let glfw = glfw_ffi::global::load(&self.config.loader)?;
        glfw.init()?;

        let result = self.show_window(glfw, run_for);
        glfw.terminate();
        result
    }

    fn show_window(&self, glfw: &GlfwLibrary, run_for: Duration) -> GlfwResult<()> {
        let settings = &self.config.window;
        let window = glfw.create_window(settings.width, settings.height, &settings.title, None, None)?;
        glfw.make_context_current(Some(window))?;
        log::info!("Opened {:?} ({}x{})", window, settings.width, settings.height);

        // Too far out to represent means run until the window is closed
        let deadline = Instant::now().checked_add(run_for);
        while !glfw.window_should_close(window)? && !deadline.is_some_and(|end| Instant::now() >= end) {
            glfw.swap_buffers(window)?;
            glfw.poll_events()?;
            std::thread::sleep(Duration::from_millis(16));
        }

        glfw.destroy_window(window)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    glfw_ffi::logging::init();

    log::info!("Starting GLFW demo");

    let config = DemoConfig::load_or_default(CONFIG_PATH)?;
    let app = DemoApp::new(config);

    match app.run() {
        Ok(()) => {
            log::info!("GLFW demo completed successfully");
            Ok(())
        }
        Err(e) => {
            log::error!("GLFW demo failed: {}", e);
            Err(e.into())
        }
    }
}
