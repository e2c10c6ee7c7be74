//! Fixed timestep simulation tick
//!
//! One call advances the ball by one frame. The integration is explicit Euler
//! with an implicit unit time step, and bounces push the ball back by a full
//! radius instead of clamping to the wall. Both must stay bit-exact: seeded
//! runs are compared frame for frame.

use super::state::{Ball, Boundary, Viewport};
use crate::consts::*;

/// Advance the ball by one frame and resolve any boundary breaches
pub fn tick(ball: &Ball, viewport: Viewport) -> Ball {
    let mut next = ball.integrate();

    // Edges are independent: a corner hit bounces on both axes in one frame
    for boundary in Boundary::CHECK_ORDER {
        if breach(&next, viewport, boundary) {
            log::debug!(
                "bounce {:?} at ({}, {}) vel ({}, {})",
                boundary,
                next.pos.x,
                next.pos.y,
                next.vel.x,
                next.vel.y
            );
            next = next.bounce(boundary);
        }
    }

    next
}

/// Whether the ball's edge is past `boundary`
pub fn breach(ball: &Ball, viewport: Viewport, boundary: Boundary) -> bool {
    match boundary {
        Boundary::Left => ball.pos.x - ball.radius < 0,
        Boundary::Right => ball.pos.x + ball.radius > viewport.width,
        Boundary::Top => ball.pos.y - ball.radius < 0,
        Boundary::Bottom => ball.pos.y + ball.radius > viewport.height,
    }
}

impl Ball {
    /// Color shift, then position, then gravity. No collision handling.
    #[must_use]
    pub fn integrate(&self) -> Ball {
        let mut next = *self;
        next.color = next.color.shifted(COLOR_SHIFT);
        next.pos += next.vel;
        next.vel.y += GRAVITY;
        next
    }

    /// Reflect the velocity component normal to `boundary` and move the ball
    /// one radius back toward the interior
    #[must_use]
    pub fn bounce(&self, boundary: Boundary) -> Ball {
        let mut next = *self;
        match boundary {
            Boundary::Top => {
                next.vel.y = -next.vel.y;
                next.pos.y += next.radius;
            }
            Boundary::Right => {
                next.vel.x = -next.vel.x;
                next.pos.x -= next.radius;
            }
            Boundary::Bottom => {
                next.vel.y = -next.vel.y;
                next.pos.y -= next.radius;
            }
            Boundary::Left => {
                next.vel.x = -next.vel.x;
                next.pos.x += next.radius;
            }
        }
        next
    }
}
