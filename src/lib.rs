//! Geometry core for procedural UI images: rectangles whose rounded corners, border and
//! anti-aliased edge are drawn by a shader from a few normalized parameters.
//!
//! - [`ShapeModifier`]s compute the corner radii of an element from its rectangle.
//!   [`ModifierRegistry`] lets hosts create them by name.
//! - [`ShapeInfo`] normalizes the raw parameters of one layout pass.
//! - [`ShapeVertexData`] packs a [`ShapeInfo`] into vertex attributes.
//! - [`ProceduralImage`] ties these together and emits meshes.
//! - [`DefaultSpriteCache`] identifies the placeholder sprite.
//!
//! # Examples
//!
//! ```rust
//! use procedural_image::{CornerRadii, Rect, RoundModifier, ShapeInfo, ShapeModifier};
//!
//! let rect = Rect::from_size(100.0, 40.0);
//! let radius = RoundModifier.calculate_radius(&rect);
//! assert_eq!(radius, CornerRadii::all(20.0));
//!
//! let info = ShapeInfo::new(-100.0, 40.0, -5.0, 2.0, radius, -1.0);
//! assert_eq!(info.width(), 100.0);
//! assert_eq!(info.border_width(), 0.0);
//! ```

mod cache;
mod color;
mod encoding;
mod error;
mod image;
mod info;
mod modifier;
mod radius;
mod rect;
mod sprite;
mod vertex;

pub use cache::TessellationCache;
pub use color::Color;
pub use encoding::{decode_unit_pair, encode_unit_pair, ShapeVertexData};
pub use error::{MeshError, ModifierError};
pub use image::{ProceduralImage, ProceduralImageBuilder, DEFAULT_FALL_OFF_DISTANCE};
pub use info::ShapeInfo;
pub use modifier::{
    FreeModifier, ModifierFactory, ModifierRegistry, OnlyOneEdgeModifier, RoundModifier,
    ShapeModifier, Side, UniformModifier, DEFAULT_MODIFIER_ID,
};
pub use radius::CornerRadii;
pub use rect::Rect;
pub use sprite::{
    global_default_sprite_cache, same_sprite, DefaultSpriteCache, MemoryResourceLoader,
    ResourceLoader, Sprite, SpriteHandle, DEFAULT_SPRITE_NAME,
};
pub use vertex::ProceduralVertex;

pub use lyon::tessellation::VertexBuffers;
