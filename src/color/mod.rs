//! RGB ↔ HSV color conversion.
//!
//! Two numeric domains are supported:
//! - integer: RGB channels in [0, 255], hue in degrees [0, 360], saturation
//!   and value in [0, 255];
//! - float: every channel in [0, 1].
//!
//! Every integer output is rounded half up (`floor(x + 0.5)`). When two
//! channels tie for the maximum, the hue sector is chosen in the order red,
//! green, blue.
//!
//! The free functions and `From` impls clamp out-of-range input (see
//! [`ChannelRange`]). Use [`ColorConverter`] to pick
//! [`RangePolicy::Strict`](crate::RangePolicy::Strict) instead.

mod converter;
mod float;
mod int;
mod types;


pub use converter::ColorConverter;
pub use types::{ChannelRange, HsvFloat, HsvInt, RgbFloat, RgbInt};

/// Convert integer RGB to integer HSV.
///
/// # Arguments
/// * `rgb` - Channels in [0, 255]; clamped otherwise
///
/// # Returns
/// Hue in [0, 360], saturation and value in [0, 255]
pub fn rgb_to_hsv_int(rgb: RgbInt) -> HsvInt {
    int::rgb_to_hsv(rgb.clamped())
}

/// Convert integer HSV to integer RGB.
///
/// Hue 360 is treated as 0. Hue outside [0, 360] wraps around; saturation
/// and value are clamped into [0, 255].
pub fn hsv_to_rgb_int(hsv: HsvInt) -> RgbInt {
    int::hsv_to_rgb(hsv.clamped())
}

/// Convert float RGB to float HSV.
///
/// Colors whose chroma is at most
/// [`FLOAT_GREY_EPSILON`](crate::constants::FLOAT_GREY_EPSILON) are treated
/// as grey, with hue and saturation 0.
pub fn rgb_to_hsv_float(rgb: RgbFloat) -> HsvFloat {
    float::rgb_to_hsv(rgb.clamped())
}

/// Convert float HSV to float RGB. Hue 1.0 is treated as 0.0.
pub fn hsv_to_rgb_float(hsv: HsvFloat) -> RgbFloat {
    float::hsv_to_rgb(hsv.clamped())
}

impl From<RgbInt> for HsvInt {
    fn from(rgb: RgbInt) -> Self {
        rgb_to_hsv_int(rgb)
    }
}

impl From<HsvInt> for RgbInt {
    fn from(hsv: HsvInt) -> Self {
        hsv_to_rgb_int(hsv)
    }
}

impl From<RgbFloat> for HsvFloat {
    fn from(rgb: RgbFloat) -> Self {
        rgb_to_hsv_float(rgb)
    }
}

impl From<HsvFloat> for RgbFloat {
    fn from(hsv: HsvFloat) -> Self {
        hsv_to_rgb_float(hsv)
    }
}
