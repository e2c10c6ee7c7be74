//! Headless driver
//!
//! Runs the animation without a display: a [`TraceSurface`] records what
//! would have been painted and a [`FixedRateDriver`] stands in for the
//! browser's refresh callback.

use std::thread;
use std::time::{Duration, Instant};

use super::{Surface, ViewportSource, render_frame};
use crate::Settings;
use crate::error::Result;
use crate::sim::{Circle, Simulation, Viewport};

/// One recorded draw operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCall {
    Clear(Viewport),
    FillCircle { fill: String, circle: Circle },
}

/// Surface that keeps the current frame's draw calls
#[derive(Debug, Default)]
pub struct TraceSurface {
    calls: Vec<DrawCall>,
    frames: u64,
}

impl TraceSurface {
    /// Draw calls since the last clear
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Number of frames started (clears seen)
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Surface for TraceSurface {
    fn clear(&mut self, viewport: Viewport) -> Result<()> {
        self.calls.clear();
        self.calls.push(DrawCall::Clear(viewport));
        self.frames += 1;
        Ok(())
    }

    fn fill_circle(&mut self, fill: &str, circle: Circle) -> Result<()> {
        log::trace!(
            "frame {}: fill {} circle ({}, {}) r={}",
            self.frames,
            fill,
            circle.center.x,
            circle.center.y,
            circle.radius
        );
        self.calls.push(DrawCall::FillCircle {
            fill: fill.to_owned(),
            circle,
        });
        Ok(())
    }
}

impl ViewportSource for Settings {
    fn viewport(&self) -> Result<Viewport> {
        Settings::viewport(self)
    }
}

/// Calls [`render_frame`] at a fixed rate
#[derive(Debug, Clone)]
pub struct FixedRateDriver {
    /// Time between frames (zero = as fast as possible)
    pub frame_interval: Duration,
    /// Frame limit (None = forever)
    pub frames: Option<u64>,
}

impl FixedRateDriver {
    pub fn new(frame_interval: Duration, frames: Option<u64>) -> Self {
        Self {
            frame_interval,
            frames,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.frame_interval(), settings.frames)
    }

    /// Drive the animation, calling `on_frame` after every painted frame.
    /// Returns the number of frames drawn.
    pub fn run<S, F>(&self, sim: &mut Simulation, surface: &mut S, mut on_frame: F) -> Result<u64>
    where
        S: Surface,
        F: FnMut(&Simulation) -> Result<()>,
    {
        let mut drawn = 0;
        let mut deadline = Instant::now();

        while self.frames.is_none_or(|limit| drawn < limit) {
            render_frame(sim, surface)?;
            on_frame(sim)?;
            drawn += 1;

            if !self.frame_interval.is_zero() {
                deadline += self.frame_interval;
                let now = Instant::now();
                if deadline > now {
                    thread::sleep(deadline - now);
                } else {
                    // Fell behind; don't try to catch up with a burst of frames
                    deadline = now;
                }
            }
        }

        Ok(drawn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_driver_stops_at_limit() {
        let viewport = Viewport::new(320, 240).unwrap();
        let mut sim = Simulation::new(viewport, 7);
        let mut surface = TraceSurface::default();
        let driver = FixedRateDriver::new(Duration::ZERO, Some(25));

        let mut seen = Vec::new();
        let drawn = driver
            .run(&mut sim, &mut surface, |sim| {
                seen.push(sim.frame);
                Ok(())
            })
            .unwrap();

        assert_eq!(drawn, 25);
        assert_eq!(sim.frame, 25);
        assert_eq!(surface.frames(), 25);
        assert_eq!(seen, (1..=25u64).collect::<Vec<_>>());
    }

    #[test]
    fn test_driver_matches_direct_stepping() {
        let viewport = Viewport::new(320, 240).unwrap();
        let mut driven = Simulation::new(viewport, 11);
        let mut direct = Simulation::new(viewport, 11);
        let driver = FixedRateDriver::new(Duration::ZERO, Some(100));

        driver
            .run(&mut driven, &mut TraceSurface::default(), |_| Ok(()))
            .unwrap();
        direct.run(100);

        assert_eq!(driven.ball, direct.ball);
    }

    #[test]
    fn test_on_frame_error_stops_driver() {
        let viewport = Viewport::new(320, 240).unwrap();
        let mut sim = Simulation::new(viewport, 7);
        let driver = FixedRateDriver::new(Duration::ZERO, None);

        let result = driver.run(&mut sim, &mut TraceSurface::default(), |sim| {
            if sim.frame == 3 {
                Err(Error::Js("stop".into()))
            } else {
                Ok(())
            }
        });

        assert!(matches!(result, Err(Error::Js(_))));
        assert_eq!(sim.frame, 3);
    }

    #[test]
    fn test_driver_paces_frames() {
        let viewport = Viewport::new(320, 240).unwrap();
        let mut sim = Simulation::new(viewport, 7);
        let driver = FixedRateDriver::new(Duration::from_millis(5), Some(4));

        let start = Instant::now();
        driver
            .run(&mut sim, &mut TraceSurface::default(), |_| Ok(()))
            .unwrap();
        assert!(start.elapsed() >= Duration::from_millis(20));
    }

    #[test]
    fn test_settings_as_viewport_source() {
        let settings = Settings {
            width: 800,
            height: 600,
            ..Default::default()
        };
        let viewport = ViewportSource::viewport(&settings).unwrap();
        assert_eq!(viewport, Viewport::new(800, 600).unwrap());
    }
}
