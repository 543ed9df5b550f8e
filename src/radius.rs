use crate::Rect;

/// The radii of each corner of a rectangle.
///
/// Components are stored clockwise from the top-left corner, which is the order the shape
/// shader reads them in.
///
/// # Examples
///
/// ```rust
/// use procedural_image::CornerRadii;
///
/// // Uniform radii
/// let uniform = CornerRadii::all(10.0);
///
/// // Custom radii
/// let custom = CornerRadii::new(5.0, 10.0, 15.0, 20.0);
/// assert_eq!(custom.to_array(), [5.0, 10.0, 15.0, 20.0]);
/// assert_eq!(uniform.top_left, uniform.bottom_left);
/// ```
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Default)]
pub struct CornerRadii {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadii {
    /// No rounding.
    pub const ZERO: Self = Self::all(0.0);

    /// Radii in clockwise order starting at the top-left corner.
    #[inline]
    pub const fn new(top_left: f32, top_right: f32, bottom_right: f32, bottom_left: f32) -> Self {
        Self {
            top_left,
            top_right,
            bottom_right,
            bottom_left,
        }
    }

    /// The same radius on all four corners.
    #[inline]
    pub const fn all(radius: f32) -> Self {
        Self::new(radius, radius, radius, radius)
    }

    /// The corners in clockwise order starting at the top-left.
    #[inline]
    pub fn to_array(&self) -> [f32; 4] {
        [
            self.top_left,
            self.top_right,
            self.bottom_right,
            self.bottom_left,
        ]
    }

    /// Multiplies every corner by `factor`.
    #[inline]
    pub fn scaled(&self, factor: f32) -> Self {
        Self::new(
            self.top_left * factor,
            self.top_right * factor,
            self.bottom_right * factor,
            self.bottom_left * factor,
        )
    }

    /// Scales the radii down so that they fit inside `rect`.
    ///
    /// Each component is first clamped to `[0, min(width, height)]`, with NaN treated as
    /// zero. The four radii are then shrunk by a common factor until, along every side, the
    /// two radii sharing that side sum to no more than its length. Radii that already fit
    /// are returned unchanged.
    ///
    /// The clamp keeps the side sums finite, so radii such as `f32::MAX` or infinity still
    /// fit a finite rectangle.
    pub fn fit_to(&self, rect: &Rect) -> Self {
        let limit = rect.min_side().max(0.0);
        let clamped = Self::from(self.to_array().map(|r| r.max(0.0).min(limit)));

        let sides = [
            (rect.width, clamped.top_left + clamped.top_right),
            (rect.width, clamped.bottom_right + clamped.bottom_left),
            (rect.height, clamped.top_left + clamped.bottom_left),
            (rect.height, clamped.top_right + clamped.bottom_right),
        ];

        let factor = sides
            .iter()
            .filter(|(_, sum)| *sum > 0.0)
            .map(|(length, sum)| length.max(0.0) / sum)
            .fold(1.0f32, f32::min);

        if factor < 1.0 {
            clamped.scaled(factor)
        } else {
            clamped
        }
    }
}

impl From<[f32; 4]> for CornerRadii {
    fn from(value: [f32; 4]) -> Self {
        Self::new(value[0], value[1], value[2], value[3])
    }
}

impl From<CornerRadii> for [f32; 4] {
    fn from(value: CornerRadii) -> Self {
        value.to_array()
    }
}

impl core::fmt::Display for CornerRadii {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "CornerRadii({}, {}, {}, {})",
            self.top_left, self.top_right, self.bottom_right, self.bottom_left
        )
    }
}

impl From<CornerRadii> for lyon::path::builder::BorderRadii {
    fn from(val: CornerRadii) -> Self {
        lyon::path::builder::BorderRadii {
            top_left: val.top_left,
            top_right: val.top_right,
            bottom_left: val.bottom_left,
            bottom_right: val.bottom_right,
        }
    }
}
