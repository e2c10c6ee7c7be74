//! Bounce - a single color-cycling ball under gravity
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball state, per-frame step, color cycling)
//! - `platform`: Drawing surface / frame driver abstraction (canvas on web, headless native)
//! - `settings`: Driver settings
//! - `error`: Platform glue errors

pub mod error;
pub mod platform;
pub mod settings;
pub mod sim;

pub use error::{Error, Result};
pub use settings::Settings;

/// Simulation constants
pub mod consts {
    /// Added to `vel.y` every frame (pixels/frame²)
    pub const GRAVITY: i32 = 1;

    /// Packed color advance per frame
    pub const COLOR_SHIFT: u32 = 0b100;
    /// Packed color values wrap at this modulus
    pub const COLOR_MODULUS: u32 = 0xFFFFFF;

    /// Ball radius is viewport height divided by this
    pub const RADIUS_DIVISOR: i32 = 10;

    /// Inclusive range for each initial velocity component
    pub const INITIAL_SPEED_MIN: i32 = -5;
    pub const INITIAL_SPEED_MAX: i32 = 4;
}
