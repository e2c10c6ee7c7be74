//! Bounce entry point
//!
//! Handles platform-specific initialization and starts the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::error_1(&format!("Failed to init logger: {}", e).into());
    }
    log::info!("Bounce starting...");

    if let Err(e) = bounce::platform::web::run() {
        log::error!("{}", e);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    env_logger::init();
    log::info!("Bounce (native) starting...");
    log::info!("Native mode runs headless - run with `trunk serve` for the canvas version");

    match native::run() {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            std::process::ExitCode::FAILURE
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::io::{self, Write};
    use std::time::{SystemTime, UNIX_EPOCH};

    use bounce::platform::ViewportSource;
    use bounce::platform::headless::{FixedRateDriver, TraceSurface};
    use bounce::sim::Simulation;
    use bounce::{Result, Settings};

    fn clock_seed() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default()
    }

    pub fn run() -> Result<()> {
        let settings = Settings::load()?;
        let viewport = ViewportSource::viewport(&settings)?;
        let seed = settings.seed_or(clock_seed());
        let mut sim = Simulation::new(viewport, seed);
        log::info!(
            "Viewport {}x{}, seed {}, ball r={} color {}",
            viewport.width,
            viewport.height,
            seed,
            sim.ball.radius,
            sim.ball.color
        );

        let driver = FixedRateDriver::from_settings(&settings);
        let mut surface = TraceSurface::default();
        let mut out = io::stdout().lock();

        log::info!("Rendering...");
        let drawn = driver.run(&mut sim, &mut surface, |sim| {
            if settings.trace {
                serde_json::to_writer(&mut out, sim)?;
                writeln!(out)?;
            }
            Ok(())
        })?;
        out.flush()?;

        log::info!(
            "Stopped after {} frames: pos ({}, {}) vel ({}, {}) color {}",
            drawn,
            sim.ball.pos.x,
            sim.ball.pos.y,
            sim.ball.vel.x,
            sim.ball.vel.y,
            sim.ball.color
        );
        Ok(())
    }
}
