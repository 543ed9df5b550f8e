use super::ShapeModifier;
use crate::{CornerRadii, Rect};

/// A side of a rectangle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Side {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
}

/// Rounds the two corners of a single side, leaving the opposite side square.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OnlyOneEdgeModifier {
    pub radius: f32,
    pub side: Side,
}

impl OnlyOneEdgeModifier {
    pub const ID: &'static str = "Only One Edge";

    /// Rounds the two corners of `side` with `radius`.
    pub fn new(radius: f32, side: Side) -> Self {
        Self { radius, side }
    }
}

impl ShapeModifier for OnlyOneEdgeModifier {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn calculate_radius(&self, _rect: &Rect) -> CornerRadii {
        let r = self.radius;
        match self.side {
            Side::Top => CornerRadii::new(r, r, 0.0, 0.0),
            Side::Right => CornerRadii::new(0.0, r, r, 0.0),
            Side::Bottom => CornerRadii::new(0.0, 0.0, r, r),
            Side::Left => CornerRadii::new(r, 0.0, 0.0, r),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{OnlyOneEdgeModifier, Side};
    use crate::{CornerRadii, Rect, ShapeModifier};

    #[test]
    fn rounds_only_the_corners_of_the_chosen_side() {
        let rect = Rect::from_size(80.0, 40.0);
        let cases = [
            (Side::Top, CornerRadii::new(6.0, 6.0, 0.0, 0.0)),
            (Side::Right, CornerRadii::new(0.0, 6.0, 6.0, 0.0)),
            (Side::Bottom, CornerRadii::new(0.0, 0.0, 6.0, 6.0)),
            (Side::Left, CornerRadii::new(6.0, 0.0, 0.0, 6.0)),
        ];

        for (side, expected) in cases {
            let modifier = OnlyOneEdgeModifier::new(6.0, side);
            assert_eq!(modifier.calculate_radius(&rect), expected, "{side:?}");
        }
    }
}
