//! paint_helpers - numeric helpers for painting tools
//!
//! Small, self-contained routines used by brush and color-picker code:
//! - RGB ↔ HSV conversion in integer and float domains ([`color`])
//! - approximate Gaussian sampling from an injected uniform source ([`gauss`])
//! - incremental bounding rectangles ([`rect`])
//!
//! Nothing here holds global state. Random sources, rectangles and colors all
//! belong to the caller.

pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod gauss;
pub mod random;
pub mod rect;

pub use color::{
    ChannelRange, ColorConverter, HsvFloat, HsvInt, RgbFloat, RgbInt, hsv_to_rgb_float,
    hsv_to_rgb_int, rgb_to_hsv_float, rgb_to_hsv_int,
};
pub use config::{CONFIG_VERSION, HelperConfig, RangePolicy};
pub use error::{HelperError, Result};
pub use gauss::{GaussianSampler, rand_gauss};
pub use random::{GRand, UniformSource};
pub use rect::Rect;
