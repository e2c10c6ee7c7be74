//! Simulation state
//!
//! Everything a driver needs to hold between frames lives here. All of it is
//! plain `Copy` data so a frame can be compared or logged as a snapshot.

use glam::IVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::color::Color;
use super::tick::tick;
use crate::consts::*;
use crate::error::{Error, Result};

/// Location in viewport pixels (origin top-left, y grows downward)
pub type Point = IVec2;

/// Per-frame displacement in pixels
pub type Velocity = IVec2;

/// Drawable area, fixed for the whole session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
}

impl Viewport {
    /// Both dimensions must be positive
    pub fn new(width: i32, height: i32) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(Error::EmptyViewport { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2, self.height / 2)
    }
}

/// Viewport edge a ball can cross
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Boundary {
    Top,
    Right,
    Bottom,
    Left,
}

impl Boundary {
    /// Order in which a frame checks for breaches
    pub const CHECK_ORDER: [Boundary; 4] = [
        Boundary::Left,
        Boundary::Right,
        Boundary::Top,
        Boundary::Bottom,
    ];
}

/// Filled circle to paint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Circle {
    pub center: Point,
    pub radius: i32,
}

/// The bouncing ball
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ball {
    pub radius: i32,
    pub pos: Point,
    pub vel: Velocity,
    pub color: Color,
}

impl Ball {
    /// Ball centered in `viewport`, sized to a tenth of its height, with a
    /// random velocity and color drawn from `rng`
    pub fn spawn(viewport: Viewport, rng: &mut impl Rng) -> Self {
        let vel = Velocity::new(
            rng.random_range(INITIAL_SPEED_MIN..=INITIAL_SPEED_MAX),
            rng.random_range(INITIAL_SPEED_MIN..=INITIAL_SPEED_MAX),
        );
        Self {
            radius: viewport.height / RADIUS_DIVISOR,
            pos: viewport.center(),
            vel,
            color: Color::random(rng),
        }
    }

    /// CSS fill style for the current color
    pub fn fill_style(&self) -> String {
        self.color.to_hex()
    }

    pub fn circle(&self) -> Circle {
        Circle {
            center: self.pos,
            radius: self.radius,
        }
    }
}

/// Current snapshot plus what produced it. Owned by exactly one driver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Simulation {
    /// Seed the ball was spawned from
    pub seed: u64,
    /// Frames advanced so far
    pub frame: u64,
    pub viewport: Viewport,
    pub ball: Ball,
}

impl Simulation {
    /// Spawn a ball from a seeded RNG so the whole run is reproducible
    pub fn new(viewport: Viewport, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        Self {
            seed,
            frame: 0,
            viewport,
            ball: Ball::spawn(viewport, &mut rng),
        }
    }

    /// Replace the snapshot with the next frame's
    pub fn advance(&mut self) -> &Ball {
        self.ball = tick(&self.ball, self.viewport);
        self.frame += 1;
        &self.ball
    }

    /// Advance `frames` times (headless use)
    pub fn run(&mut self, frames: u64) -> &Ball {
        for _ in 0..frames {
            self.advance();
        }
        &self.ball
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_rejects_empty() {
        assert!(Viewport::new(0, 100).is_err());
        assert!(Viewport::new(100, -1).is_err());
        assert!(Viewport::new(1, 1).is_ok());
    }

    #[test]
    fn test_spawn_geometry() {
        let viewport = Viewport::new(200, 300).unwrap();
        let ball = Ball::spawn(viewport, &mut Pcg32::seed_from_u64(1));
        assert_eq!(ball.radius, 30);
        assert_eq!(ball.pos, Point::new(100, 150));
    }

    #[test]
    fn test_spawn_floors_odd_sizes() {
        let viewport = Viewport::new(201, 319).unwrap();
        let ball = Ball::spawn(viewport, &mut Pcg32::seed_from_u64(1));
        assert_eq!(ball.radius, 31);
        assert_eq!(ball.pos, Point::new(100, 159));
    }

    #[test]
    fn test_spawn_velocity_range() {
        let viewport = Viewport::new(640, 480).unwrap();
        let mut rng = Pcg32::seed_from_u64(12345);
        let mut seen_min = false;
        let mut seen_max = false;
        for _ in 0..2000 {
            let ball = Ball::spawn(viewport, &mut rng);
            for c in [ball.vel.x, ball.vel.y] {
                assert!((INITIAL_SPEED_MIN..=INITIAL_SPEED_MAX).contains(&c));
                seen_min |= c == INITIAL_SPEED_MIN;
                seen_max |= c == INITIAL_SPEED_MAX;
            }
            assert!(ball.color.rgb() < COLOR_MODULUS);
        }
        assert!(seen_min && seen_max);
    }

    #[test]
    fn test_draw_geometry() {
        let ball = Ball {
            radius: 12,
            pos: Point::new(40, 60),
            vel: Velocity::ZERO,
            color: Color::new(0x00FF80),
        };
        assert_eq!(ball.fill_style(), "#00FF80");
        assert_eq!(
            ball.circle(),
            Circle {
                center: Point::new(40, 60),
                radius: 12
            }
        );
    }

    #[test]
    fn test_determinism() {
        // Same seed must give identical runs
        let viewport = Viewport::new(320, 240).unwrap();
        let mut a = Simulation::new(viewport, 99999);
        let mut b = Simulation::new(viewport, 99999);
        assert_eq!(a.ball, b.ball);

        a.run(500);
        b.run(500);
        assert_eq!(a.frame, 500);
        assert_eq!(a.ball, b.ball);
    }

    #[test]
    fn test_advance_replaces_snapshot() {
        let viewport = Viewport::new(320, 240).unwrap();
        let mut sim = Simulation::new(viewport, 3);
        let before = sim.ball;
        let after = *sim.advance();
        assert_eq!(after, tick(&before, viewport));
        assert_eq!(sim.frame, 1);
    }

    #[test]
    fn test_snapshot_json() {
        let viewport = Viewport::new(320, 240).unwrap();
        let sim = Simulation::new(viewport, 5);
        let json = serde_json::to_string(&sim).unwrap();
        let back: Simulation = serde_json::from_str(&json).unwrap();
        assert_eq!(back.ball, sim.ball);
        assert_eq!(back.viewport, sim.viewport);
    }
}
