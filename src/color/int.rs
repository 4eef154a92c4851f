//! Integer-domain conversions: 8-bit channels and a 360° hue.
//!
//! Both functions assume in-range input; range handling happens in the
//! public wrappers.

use super::{HsvInt, RgbInt};
use crate::constants::{CHANNEL_MAX, HUE_MAX, HUE_SECTOR_DEGREES};

const CHANNEL_SCALE: f64 = CHANNEL_MAX as f64;
const HUE_FULL: f64 = HUE_MAX as f64;

/// Round half up. Inputs here are never negative, so this matches
/// truncating `x + 0.5`.
pub(super) fn round_half_up(x: f64) -> i32 {
    (x + 0.5).floor() as i32
}

pub(super) fn rgb_to_hsv(rgb: RgbInt) -> HsvInt {
    let r = f64::from(rgb.r);
    let g = f64::from(rgb.g);
    let b = f64::from(rgb.b);

    let (v, min) = if r > g {
        (r.max(b), g.min(b))
    } else {
        (g.max(b), r.min(b))
    };
    let delta = v - min;

    let s = if v == 0.0 { 0.0 } else { delta / v };

    let h = if s == 0.0 {
        0.0
    } else {
        // Ties resolve red, then green, then blue.
        let mut h = if r == v {
            HUE_SECTOR_DEGREES * (g - b) / delta
        } else if g == v {
            2.0 * HUE_SECTOR_DEGREES + HUE_SECTOR_DEGREES * (b - r) / delta
        } else {
            4.0 * HUE_SECTOR_DEGREES + HUE_SECTOR_DEGREES * (r - g) / delta
        };

        if h < 0.0 {
            h += HUE_FULL;
        }
        if h > HUE_FULL {
            h -= HUE_FULL;
        }
        h
    };

    HsvInt {
        h: round_half_up(h),
        s: round_half_up(s * CHANNEL_SCALE),
        v: round_half_up(v),
    }
}

pub(super) fn hsv_to_rgb(hsv: HsvInt) -> RgbInt {
    if hsv.s == 0 {
        return RgbInt::gray(hsv.v);
    }

    let s = f64::from(hsv.s) / CHANNEL_SCALE;
    let v = f64::from(hsv.v) / CHANNEL_SCALE;

    let h = if hsv.h == HUE_MAX { 0.0 } else { f64::from(hsv.h) } / HUE_SECTOR_DEGREES;
    let sector = h.floor();
    let f = h - sector;

    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    let (r, g, b) = match sector as i32 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    RgbInt {
        r: round_half_up(r * CHANNEL_SCALE),
        g: round_half_up(g * CHANNEL_SCALE),
        b: round_half_up(b * CHANNEL_SCALE),
    }
}
