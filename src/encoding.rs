//! Packing of [`ShapeInfo`] into per-vertex attributes.
//!
//! The shape shader receives everything it needs through three extra vertex attributes, so
//! a procedural image can be batched with ordinary textured quads. Two corner radii share a
//! single float: each is quantized to 12 bits, which together exactly fill the 24-bit
//! mantissa of an `f32`.

use crate::ShapeInfo;

const UNIT_STEPS: f32 = 4095.0;
const FRACTION_SCALE: f32 = 4096.0;

/// Packs two values in `[0, 1]` into one float. Out of range inputs are clamped.
///
/// The integer part holds `a`, the fractional part holds `b`, each with a precision of
/// `1 / 4095`.
///
/// # Examples
///
/// ```rust
/// use procedural_image::{decode_unit_pair, encode_unit_pair};
///
/// let packed = encode_unit_pair(0.25, 1.0);
/// let (a, b) = decode_unit_pair(packed);
/// assert!((a - 0.25).abs() <= 1.0 / 4095.0);
/// assert_eq!(b, 1.0);
/// ```
#[inline]
pub fn encode_unit_pair(a: f32, b: f32) -> f32 {
    let a = (a.clamp(0.0, 1.0) * UNIT_STEPS).floor();
    let b = (b.clamp(0.0, 1.0) * UNIT_STEPS).floor();
    a + b / FRACTION_SCALE
}

/// Inverse of [`encode_unit_pair`].
#[inline]
pub fn decode_unit_pair(packed: f32) -> (f32, f32) {
    let a = packed.floor();
    let b = (packed - a) * FRACTION_SCALE;
    (a / UNIT_STEPS, b / UNIT_STEPS)
}

/// Shape parameters as the shader reads them from each vertex.
///
/// - `size`: width and height of the shape.
/// - `radii`: `[pack(top_left, top_right), pack(bottom_right, bottom_left)]`, every radius
///   divided by the shorter side.
/// - `style`: `[border, pixel_size, fall_off_distance]`. `border` is the border width
///   relative to the shorter side, or `1.0` for a solid fill.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ShapeVertexData {
    pub size: [f32; 2],
    pub radii: [f32; 2],
    pub style: [f32; 3],
}

impl ShapeVertexData {
    /// Encodes `info`. A shape with an empty side is encoded with zero radii and a solid
    /// fill.
    pub fn encode(info: &ShapeInfo) -> Self {
        let min_side = info.width().min(info.height());
        let style_tail = [info.pixel_size(), info.fall_off_distance()];

        if min_side <= 0.0 {
            return Self {
                size: [info.width(), info.height()],
                radii: [0.0, 0.0],
                style: [1.0, style_tail[0], style_tail[1]],
            };
        }

        let [top_left, top_right, bottom_right, bottom_left] =
            info.radius().to_array().map(|radius| radius / min_side);
        let border = if info.is_solid() {
            1.0
        } else {
            (info.border_width() / min_side).clamp(0.0, 1.0)
        };

        Self {
            size: [info.width(), info.height()],
            radii: [
                encode_unit_pair(top_left, top_right),
                encode_unit_pair(bottom_right, bottom_left),
            ],
            style: [border, style_tail[0], style_tail[1]],
        }
    }

    /// Recovers the corner radii in shape units, clockwise from the top-left corner.
    pub fn decode_radii(&self) -> [f32; 4] {
        let min_side = self.size[0].min(self.size[1]);
        let (top_left, top_right) = decode_unit_pair(self.radii[0]);
        let (bottom_right, bottom_left) = decode_unit_pair(self.radii[1]);
        [top_left, top_right, bottom_right, bottom_left].map(|radius| radius * min_side)
    }
}

impl From<&ShapeInfo> for ShapeVertexData {
    fn from(info: &ShapeInfo) -> Self {
        Self::encode(info)
    }
}
