use super::ShapeModifier;
use crate::{CornerRadii, Rect};

/// Rounds the shorter sides completely, producing a pill, or a circle for square rects.
///
/// The radius is half the smaller dimension on every corner. An empty dimension yields no
/// rounding. Negative dimensions are not checked and produce a negative radius.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RoundModifier;

impl RoundModifier {
    pub const ID: &'static str = "Round";
}

impl ShapeModifier for RoundModifier {
    fn id(&self) -> &'static str {
        Self::ID
    }

    #[inline]
    fn calculate_radius(&self, rect: &Rect) -> CornerRadii {
        CornerRadii::all(rect.width.min(rect.height) * 0.5)
    }
}
