//! Error types for the platform glue.
//!
//! The simulation itself can't fail. These cover what the host environment
//! can get wrong: an empty viewport, a missing canvas, unreadable settings or a closed stdout.

use std::fmt;

/// Errors raised while setting up or driving the animation.
#[derive(Debug)]
pub enum Error {
    /// Viewport has a zero or negative dimension.
    EmptyViewport { width: i32, height: i32 },
    /// A required DOM object (window, document, canvas, 2d context) is missing.
    Dom(&'static str),
    /// A JavaScript call threw.
    Js(String),
    /// Settings or a trace snapshot failed to (de)serialize.
    Json(serde_json::Error),
    /// Reading settings or writing trace output failed.
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyViewport { width, height } => {
                write!(f, "Viewport must be non-empty, got {}x{}", width, height)
            }
            Error::Dom(what) => write!(f, "Missing DOM object: {}", what),
            Error::Js(msg) => write!(f, "JavaScript error: {}", msg),
            Error::Json(e) => write!(f, "JSON error: {}", e),
            Error::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Json(e) => Some(e),
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
