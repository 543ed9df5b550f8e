//! Normalized shape parameters handed to the shape shader.

use crate::CornerRadii;
use std::fmt;

/// The normalized geometry and appearance of a procedural image for one layout pass.
///
/// A `ShapeInfo` is built from raw, possibly negative, inputs and is immutable afterwards:
///
/// - `width` and `height` keep their magnitude.
/// - `fall_off_distance`, `border_width` and `pixel_size` are clamped to zero from below.
/// - `radius` is stored as given. Fitting the radii to the rectangle is the job of whoever
///   produced them, see [`CornerRadii::fit_to`].
///
/// Non-finite inputs are not rejected and flow through unchanged.
///
/// # Examples
///
/// ```rust
/// use procedural_image::{CornerRadii, ShapeInfo};
///
/// let info = ShapeInfo::new(-100.0, 40.0, -5.0, 2.0, CornerRadii::all(20.0), -1.0);
/// assert_eq!(info.width(), 100.0);
/// assert_eq!(info.fall_off_distance(), 0.0);
/// assert_eq!(info.border_width(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ShapeInfo {
    width: f32,
    height: f32,
    fall_off_distance: f32,
    radius: CornerRadii,
    border_width: f32,
    pixel_size: f32,
}

impl ShapeInfo {
    /// Normalizes raw layout parameters. See the type documentation for the rules.
    pub fn new(
        width: f32,
        height: f32,
        fall_off_distance: f32,
        pixel_size: f32,
        radius: CornerRadii,
        border_width: f32,
    ) -> Self {
        Self {
            width: width.abs(),
            height: height.abs(),
            fall_off_distance: clamp_non_negative(fall_off_distance),
            radius,
            border_width: clamp_non_negative(border_width),
            pixel_size: clamp_non_negative(pixel_size),
        }
    }

    /// Absolute width.
    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Absolute height.
    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Anti-aliasing width, never negative.
    #[inline]
    pub fn fall_off_distance(&self) -> f32 {
        self.fall_off_distance
    }

    /// Corner radii as given. They are not fitted to the size here.
    #[inline]
    pub fn radius(&self) -> CornerRadii {
        self.radius
    }

    /// Border thickness, never negative. Zero means solid.
    #[inline]
    pub fn border_width(&self) -> f32 {
        self.border_width
    }

    /// Size of one device pixel in layout units, never negative.
    #[inline]
    pub fn pixel_size(&self) -> f32 {
        self.pixel_size
    }

    /// True when no border is set and the shape is drawn filled.
    #[inline]
    pub fn is_solid(&self) -> bool {
        self.border_width == 0.0
    }
}

// NaN passes through; `f32::max` would replace it with 0.0.
#[inline(always)]
fn clamp_non_negative(value: f32) -> f32 {
    if value < 0.0 {
        0.0
    } else {
        value
    }
}

impl fmt::Display for ShapeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ShapeInfo(size: {}x{}, fall_off: {}, pixel_size: {}, radius: {}, border: {})",
            self.width,
            self.height,
            self.fall_off_distance,
            self.pixel_size,
            self.radius,
            self.border_width
        )
    }
}
