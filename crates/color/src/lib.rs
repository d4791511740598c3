//! Color handling for ForgeworkLights.
//!
//! Provides the RGB color type shared by the theme database, the sync tool
//! and the UI previews, plus the gradient engine that expands a handful of
//! anchor colors into the fixed-length color list driven onto the LEDs.

mod error;
mod gradient;
mod rgb;

pub use error::ColorError;
pub use gradient::{gradient, interpolate, interpolate_with, Rounding};
pub use rgb::{is_hex_color, Rgb};

/// Gradient length used for LED themes stored in the database.
pub const LED_GRADIENT_LENGTH: usize = 14;
