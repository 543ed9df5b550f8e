use std::fmt;

/// Axis-aligned rectangle in the host's layout units (top-left origin).
///
/// Only `width` and `height` take part in radius computations; the position is kept so the
/// same value can be used to emit geometry.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// A rectangle with its top-left corner at `(x, y)`.
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A rectangle of the given size placed at the origin.
    #[inline]
    pub const fn from_size(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// The top-left corner.
    #[inline]
    pub fn min(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    /// The corner opposite to [`Rect::min`].
    #[inline]
    pub fn max(&self) -> (f32, f32) {
        (self.x + self.width, self.y + self.height)
    }

    /// The smaller of the two dimensions.
    #[inline]
    pub fn min_side(&self) -> f32 {
        self.width.min(self.height)
    }

    /// True when a side is zero or negative. Nothing is drawn for such a rectangle.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rect(x: {}, y: {}, w: {}, h: {})",
            self.x, self.y, self.width, self.height
        )
    }
}

impl From<Rect> for lyon::math::Box2D {
    fn from(rect: Rect) -> Self {
        let (min_x, min_y) = rect.min();
        let (max_x, max_y) = rect.max();
        lyon::math::Box2D::new(
            lyon::math::point(min_x, min_y),
            lyon::math::point(max_x, max_y),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Rect;

    #[test]
    fn max_corner_adds_size_to_origin() {
        let rect = Rect::new(10.0, 5.0, 100.0, 40.0);
        assert_eq!(rect.max(), (110.0, 45.0));
    }

    #[test]
    fn min_side_picks_smaller_dimension() {
        assert_eq!(Rect::from_size(100.0, 40.0).min_side(), 40.0);
        assert_eq!(Rect::from_size(30.0, 70.0).min_side(), 30.0);
    }

    #[test]
    fn zero_sized_rect_is_empty() {
        assert!(Rect::from_size(0.0, 10.0).is_empty());
        assert!(Rect::from_size(10.0, 0.0).is_empty());
        assert!(!Rect::from_size(1.0, 1.0).is_empty());
    }

    #[test]
    fn converts_into_lyon_box() {
        let b: lyon::math::Box2D = Rect::new(1.0, 2.0, 3.0, 4.0).into();
        assert_eq!(b.min, lyon::math::point(1.0, 2.0));
        assert_eq!(b.max, lyon::math::point(4.0, 6.0));
    }
}
