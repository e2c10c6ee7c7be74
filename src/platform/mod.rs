//! Platform abstraction layer
//!
//! The simulation never talks to a window or canvas directly. Drivers hand it
//! a [`Surface`] to paint on and call [`render_frame`] once per refresh:
//! - `web`: canvas 2D + `requestAnimationFrame` (wasm32 only)
//! - `headless`: fixed-rate loop with a recording surface (native, tests)

pub mod headless;
#[cfg(target_arch = "wasm32")]
pub mod web;

use crate::error::Result;
use crate::sim::{Ball, Circle, Simulation, Viewport};

/// Something a frame can be painted on
pub trait Surface {
    /// Erase the previous frame
    fn clear(&mut self, viewport: Viewport) -> Result<()>;

    /// Paint a filled circle with a CSS color (`#RRGGBB`)
    fn fill_circle(&mut self, fill: &str, circle: Circle) -> Result<()>;
}

/// Reports the viewport size once at startup
pub trait ViewportSource {
    fn viewport(&self) -> Result<Viewport>;
}

/// Advance the simulation one frame and paint the result
pub fn render_frame(sim: &mut Simulation, surface: &mut impl Surface) -> Result<Ball> {
    let ball = *sim.advance();
    surface.clear(sim.viewport)?;
    surface.fill_circle(&ball.fill_style(), ball.circle())?;
    Ok(ball)
}
