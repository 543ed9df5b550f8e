use super::ShapeModifier;
use crate::{CornerRadii, Rect};

/// Independent radius per corner.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FreeModifier {
    pub radius: CornerRadii,
}

impl FreeModifier {
    pub const ID: &'static str = "Free";

    /// Uses `radius` for every rectangle.
    pub fn new(radius: impl Into<CornerRadii>) -> Self {
        Self {
            radius: radius.into(),
        }
    }
}

impl ShapeModifier for FreeModifier {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn calculate_radius(&self, _rect: &Rect) -> CornerRadii {
        self.radius
    }
}
