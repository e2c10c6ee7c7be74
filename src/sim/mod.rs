//! Deterministic simulation module
//!
//! All ball logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod color;
pub mod state;
pub mod tick;

pub use color::{Color, Rgba};
pub use state::{Ball, Boundary, Circle, Point, Simulation, Velocity, Viewport};
pub use tick::{breach, tick};
