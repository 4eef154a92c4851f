//! Numeric constants shared by the conversion and sampling routines.

/// Largest value of an 8-bit color channel (also saturation and value).
pub const CHANNEL_MAX: i32 = 255;

/// Largest integer hue, in degrees. 360 is equivalent to 0.
pub const HUE_MAX: i32 = 360;

/// Width of one hue sector, in degrees.
pub const HUE_SECTOR_DEGREES: f64 = 60.0;

/// Chroma below this threshold is treated as grey by the float converter.
pub const FLOAT_GREY_EPSILON: f32 = 0.0001;

/// Number of uniform draws summed per Gaussian sample.
pub const GAUSS_DRAWS: usize = 4;

/// Exclusive upper bound of each uniform draw.
pub const GAUSS_RANGE_END: i32 = 0x7FFF;

/// Scale applied to the summed draws.
pub const GAUSS_SCALE: f64 = 5.28596089837e-5;

/// Offset subtracted after scaling.
pub const GAUSS_OFFSET: f64 = 3.46410161514;
