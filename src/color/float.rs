//! Float-domain conversions, every channel in [0, 1].

use super::{HsvFloat, RgbFloat};
use crate::constants::FLOAT_GREY_EPSILON;

pub(super) fn rgb_to_hsv(rgb: RgbFloat) -> HsvFloat {
    let RgbFloat { r, g, b } = rgb;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    if delta <= FLOAT_GREY_EPSILON {
        return HsvFloat { h: 0.0, s: 0.0, v: max };
    }

    let mut h = if r == max {
        let h = (g - b) / delta;
        if h < 0.0 { h + 6.0 } else { h }
    } else if g == max {
        2.0 + (b - r) / delta
    } else {
        4.0 + (r - g) / delta
    };
    h /= 6.0;

    HsvFloat {
        h,
        s: delta / max,
        v: max,
    }
}

pub(super) fn hsv_to_rgb(hsv: HsvFloat) -> RgbFloat {
    let HsvFloat { h, s, v } = hsv;

    if s == 0.0 {
        return RgbFloat::gray(v);
    }

    let h = if h >= 1.0 { 0.0 } else { h * 6.0 };
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

    RgbFloat { r, g, b }
}
