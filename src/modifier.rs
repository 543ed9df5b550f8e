//! Shape modifiers decide the corner radii of a procedural image.
//!
//! A modifier is asked for a [`CornerRadii`] every time the image's rectangle changes. It
//! must only look at the rectangle's size and its own configuration, so the same modifier
//! behaves identically wherever the element is placed.
//!
//! Every modifier type carries a short human readable identifier. The identifier exists for
//! selection lists and for [`ModifierRegistry`]; it never takes part in dispatch, which is
//! plain trait-object dispatch on [`ShapeModifier::calculate_radius`].
//!
//! # Examples
//!
//! ```rust
//! use procedural_image::{CornerRadii, Rect, RoundModifier, ShapeModifier};
//!
//! let modifier = RoundModifier;
//! let radius = modifier.calculate_radius(&Rect::from_size(100.0, 40.0));
//! assert_eq!(radius, CornerRadii::all(20.0));
//! assert_eq!(modifier.id(), "Round");
//! ```

mod free;
mod one_edge;
mod registry;
mod round;
mod uniform;

pub use free::FreeModifier;
pub use one_edge::{OnlyOneEdgeModifier, Side};
pub use registry::{ModifierFactory, ModifierRegistry, DEFAULT_MODIFIER_ID};
pub use round::RoundModifier;
pub use uniform::UniformModifier;

use crate::{CornerRadii, Rect};

/// Computes the corner radii of a procedural image from its rectangle.
pub trait ShapeModifier: std::fmt::Debug + Send + Sync {
    /// Stable identifier of the modifier type, e.g. `"Round"`.
    fn id(&self) -> &'static str;

    /// Returns the radii for `rect`, clockwise from the top-left corner, in the same units
    /// as the rectangle.
    fn calculate_radius(&self, rect: &Rect) -> CornerRadii;
}
