//! Incrementally grown integer bounding rectangles.

use serde::{Deserialize, Serialize};

use crate::error::{HelperError, Result};

/// Axis-aligned integer rectangle with an exclusive right/bottom edge.
///
/// A width of 0 marks the rectangle as empty. Non-empty rectangles grown
/// through [`Rect::include_point`] always have `w >= 1` and `h >= 1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

/// Grow one axis `[origin, origin + extent)` to cover `p`.
///
/// Returns `None` if any edge of the result does not fit in `i32`.
fn grow_axis(origin: i32, extent: i32, p: i32) -> Option<(i32, i32)> {
    let end = origin.checked_add(extent)?;
    let grown = if p < origin {
        (p, extent.checked_add(origin.checked_sub(p)?)?)
    } else if p >= end {
        (origin, p.checked_sub(origin)?.checked_add(1)?)
    } else {
        (origin, extent)
    };
    grown.0.checked_add(grown.1).map(|_| grown)
}

impl Rect {
    /// The empty rectangle.
    pub const EMPTY: Rect = Rect::new(0, 0, 0, 0);

    /// Build a rectangle from its top-left corner and size.
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// A 1x1 rectangle covering exactly `(x, y)`.
    pub const fn from_point(x: i32, y: i32) -> Self {
        Self::new(x, y, 1, 1)
    }

    /// Whether nothing has been included yet (zero width).
    pub fn is_empty(&self) -> bool {
        self.w == 0
    }

    /// Exclusive right edge.
    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.w)
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.h)
    }

    /// Check if a point lies inside this rectangle.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        !self.is_empty() && x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Make the rectangle empty again.
    pub fn reset(&mut self) {
        *self = Self::EMPTY;
    }

    /// Grow the rectangle to the smallest one covering both its current
    /// extent and `(x, y)`.
    ///
    /// An empty rectangle becomes the 1x1 rectangle at the point. Fails with
    /// [`HelperError::RectOverflow`] if an edge would not fit in `i32`; the
    /// rectangle is left untouched in that case.
    pub fn try_include_point(&mut self, x: i32, y: i32) -> Result<()> {
        let overflow = || HelperError::RectOverflow { x, y };

        if self.is_empty() {
            if x.checked_add(1).is_none() || y.checked_add(1).is_none() {
                return Err(overflow());
            }
            *self = Self::from_point(x, y);
            return Ok(());
        }

        let (nx, nw) = grow_axis(self.x, self.w, x).ok_or_else(overflow)?;
        let (ny, nh) = grow_axis(self.y, self.h, y).ok_or_else(overflow)?;
        *self = Self::new(nx, ny, nw, nh);
        Ok(())
    }

    /// Like [`Rect::try_include_point`], but logs and skips points that
    /// would overflow.
    pub fn include_point(&mut self, x: i32, y: i32) {
        if let Err(e) = self.try_include_point(x, y) {
            log::warn!("Rectangle {:?} not grown: {}", self, e);
        }
    }

    /// Grow the rectangle to cover `other` as well. Empty `other` is ignored.
    ///
    /// Fails with [`HelperError::RectOverflow`] if `other` itself extends
    /// past `i32`; the rectangle is left untouched in that case.
    pub fn try_include_rect(&mut self, other: &Rect) -> Result<()> {
        if other.is_empty() {
            return Ok(());
        }
        let far_x = other.x.checked_add(other.w).and_then(|r| r.checked_sub(1));
        let far_y = other.y.checked_add(other.h).and_then(|b| b.checked_sub(1));
        let (Some(far_x), Some(far_y)) = (far_x, far_y) else {
            return Err(HelperError::RectOverflow {
                x: other.x,
                y: other.y,
            });
        };

        let mut next = *self;
        next.try_include_point(other.x, other.y)?;
        next.try_include_point(far_x, far_y)?;
        *self = next;
        Ok(())
    }

    /// Like [`Rect::try_include_rect`], but logs and skips on overflow.
    pub fn include_rect(&mut self, other: &Rect) {
        if let Err(e) = self.try_include_rect(other) {
            log::warn!("Rectangle {:?} not grown by {:?}: {}", self, other, e);
        }
    }
}

impl Extend<(i32, i32)> for Rect {
    fn extend<T: IntoIterator<Item = (i32, i32)>>(&mut self, points: T) {
        for (x, y) in points {
            self.include_point(x, y);
        }
    }
}

impl FromIterator<(i32, i32)> for Rect {
    fn from_iter<T: IntoIterator<Item = (i32, i32)>>(points: T) -> Self {
        let mut rect = Rect::EMPTY;
        rect.extend(points);
        rect
    }
}
