use super::ShapeModifier;
use crate::{CornerRadii, Rect};

/// The same fixed radius on every corner, whatever the rectangle.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct UniformModifier {
    pub radius: f32,
}

impl UniformModifier {
    pub const ID: &'static str = "Uniform";

    /// Rounds all four corners with `radius`.
    pub fn new(radius: f32) -> Self {
        Self { radius }
    }
}

impl ShapeModifier for UniformModifier {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn calculate_radius(&self, _rect: &Rect) -> CornerRadii {
        CornerRadii::all(self.radius)
    }
}
