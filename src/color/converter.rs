//! Policy-aware conversion entry point.

use super::{ChannelRange, HsvFloat, HsvInt, RgbFloat, RgbInt, float, int};
use crate::config::{HelperConfig, RangePolicy};
use crate::error::Result;

/// Color converter that applies one [`RangePolicy`] to every conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColorConverter {
    policy: RangePolicy,
}

impl ColorConverter {
    /// Create a converter with the given range policy.
    pub fn new(policy: RangePolicy) -> Self {
        Self { policy }
    }

    /// Create a converter using the policy from a configuration.
    pub fn from_config(config: &HelperConfig) -> Self {
        Self::new(config.range_policy)
    }

    /// The range policy in effect.
    pub fn policy(&self) -> RangePolicy {
        self.policy
    }

    fn admit<T: ChannelRange>(&self, value: T) -> Result<T> {
        match self.policy {
            RangePolicy::Clamp => Ok(value.clamped()),
            RangePolicy::Strict => value.check().map(|()| value),
        }
    }

    /// Convert integer RGB to integer HSV.
    pub fn rgb_to_hsv_int(&self, rgb: RgbInt) -> Result<HsvInt> {
        Ok(int::rgb_to_hsv(self.admit(rgb)?))
    }

    /// Convert integer HSV to integer RGB.
    pub fn hsv_to_rgb_int(&self, hsv: HsvInt) -> Result<RgbInt> {
        Ok(int::hsv_to_rgb(self.admit(hsv)?))
    }

    /// Convert float RGB to float HSV.
    pub fn rgb_to_hsv_float(&self, rgb: RgbFloat) -> Result<HsvFloat> {
        Ok(float::rgb_to_hsv(self.admit(rgb)?))
    }

    /// Convert float HSV to float RGB.
    pub fn hsv_to_rgb_float(&self, hsv: HsvFloat) -> Result<RgbFloat> {
        Ok(float::hsv_to_rgb(self.admit(hsv)?))
    }
}
