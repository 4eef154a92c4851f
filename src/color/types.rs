//! Named RGB and HSV value types for both numeric domains.

use serde::{Deserialize, Serialize};

use crate::constants::{CHANNEL_MAX, HUE_MAX};
use crate::error::{HelperError, Result};

/// Range handling shared by every color type.
///
/// `clamped` never fails and always produces an in-range value; `check`
/// reports the first channel that is out of range.
pub trait ChannelRange: Sized {
    /// Return a copy with every channel forced into its documented range.
    fn clamped(self) -> Self;

    /// Verify that every channel is within its documented range.
    fn check(&self) -> Result<()>;
}

/// Integer RGB, each channel in [0, 255].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RgbInt {
    pub r: i32,
    pub g: i32,
    pub b: i32,
}

/// Integer HSV: hue in [0, 360] (360 equals 0), saturation and value in [0, 255].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HsvInt {
    pub h: i32,
    pub s: i32,
    pub v: i32,
}

/// Float RGB, each channel in [0, 1].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RgbFloat {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

/// Float HSV, each channel in [0, 1]. Hue 1.0 equals 0.0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HsvFloat {
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

impl RgbInt {
    /// Build from red, green and blue channels.
    pub const fn new(r: i32, g: i32, b: i32) -> Self {
        Self { r, g, b }
    }

    /// Achromatic color with every channel set to `x`.
    pub const fn gray(x: i32) -> Self {
        Self { r: x, g: x, b: x }
    }
}

impl HsvInt {
    /// Build from hue in degrees, saturation and value.
    pub const fn new(h: i32, s: i32, v: i32) -> Self {
        Self { h, s, v }
    }
}

impl RgbFloat {
    /// Build from red, green and blue channels.
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Achromatic color with every channel set to `x`.
    pub const fn gray(x: f32) -> Self {
        Self { r: x, g: x, b: x }
    }
}

impl HsvFloat {
    /// Build from hue, saturation and value, each as a fraction.
    pub const fn new(h: f32, s: f32, v: f32) -> Self {
        Self { h, s, v }
    }
}

impl From<(i32, i32, i32)> for RgbInt {
    fn from((r, g, b): (i32, i32, i32)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<(i32, i32, i32)> for HsvInt {
    fn from((h, s, v): (i32, i32, i32)) -> Self {
        Self::new(h, s, v)
    }
}

impl From<(f32, f32, f32)> for RgbFloat {
    fn from((r, g, b): (f32, f32, f32)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<(f32, f32, f32)> for HsvFloat {
    fn from((h, s, v): (f32, f32, f32)) -> Self {
        Self::new(h, s, v)
    }
}

fn clamp_channel(x: i32) -> i32 {
    x.clamp(0, CHANNEL_MAX)
}

/// Hue is circular: anything outside [0, 360] wraps around.
fn wrap_hue(h: i32) -> i32 {
    if (0..=HUE_MAX).contains(&h) {
        h
    } else {
        h.rem_euclid(HUE_MAX)
    }
}

/// NaN maps to 0.
fn clamp_unit(x: f32) -> f32 {
    if x.is_nan() { 0.0 } else { x.clamp(0.0, 1.0) }
}

fn check_int(what: &str, value: i32, max: i32) -> Result<()> {
    if (0..=max).contains(&value) {
        Ok(())
    } else {
        Err(HelperError::out_of_range(what, value, 0, max))
    }
}

fn check_unit(what: &str, value: f32) -> Result<()> {
    if !value.is_finite() {
        Err(HelperError::not_finite(what))
    } else if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(HelperError::out_of_range(what, value, 0.0_f32, 1.0_f32))
    }
}

fn trace_clamp<T: std::fmt::Debug + PartialEq>(before: &T, after: &T) {
    if before != after {
        log::trace!("Clamped {:?} to {:?}", before, after);
    }
}

impl ChannelRange for RgbInt {
    fn clamped(self) -> Self {
        let out = Self::new(clamp_channel(self.r), clamp_channel(self.g), clamp_channel(self.b));
        trace_clamp(&self, &out);
        out
    }

    fn check(&self) -> Result<()> {
        check_int("red", self.r, CHANNEL_MAX)?;
        check_int("green", self.g, CHANNEL_MAX)?;
        check_int("blue", self.b, CHANNEL_MAX)
    }
}

impl ChannelRange for HsvInt {
    fn clamped(self) -> Self {
        let out = Self::new(wrap_hue(self.h), clamp_channel(self.s), clamp_channel(self.v));
        trace_clamp(&self, &out);
        out
    }

    fn check(&self) -> Result<()> {
        check_int("hue", self.h, HUE_MAX)?;
        check_int("saturation", self.s, CHANNEL_MAX)?;
        check_int("value", self.v, CHANNEL_MAX)
    }
}

impl ChannelRange for RgbFloat {
    fn clamped(self) -> Self {
        let out = Self::new(clamp_unit(self.r), clamp_unit(self.g), clamp_unit(self.b));
        trace_clamp(&self, &out);
        out
    }

    fn check(&self) -> Result<()> {
        check_unit("red", self.r)?;
        check_unit("green", self.g)?;
        check_unit("blue", self.b)
    }
}

impl ChannelRange for HsvFloat {
    fn clamped(self) -> Self {
        let out = Self::new(clamp_unit(self.h), clamp_unit(self.s), clamp_unit(self.v));
        trace_clamp(&self, &out);
        out
    }

    fn check(&self) -> Result<()> {
        check_unit("hue", self.h)?;
        check_unit("saturation", self.s)?;
        check_unit("value", self.v)
    }
}
