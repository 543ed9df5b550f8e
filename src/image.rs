//! The host-facing procedural image element.
//!
//! A [`ProceduralImage`] combines a [`ShapeModifier`] with the style settings of one UI
//! element. For every layout pass the host hands it the element's current rectangle and
//! receives either:
//!
//! - a textured quad whose vertices carry the encoded shape ([`ProceduralImage::quad`]),
//!   for hosts that run the shape shader, or
//! - a tessellated rounded-rect mesh ([`ProceduralImage::tessellate`]) for hosts that can
//!   only draw plain triangles.
//!
//! # Examples
//!
//! ```rust
//! use procedural_image::{ModifierRegistry, ProceduralImage, Rect};
//!
//! let registry = ModifierRegistry::with_builtin();
//! let image = ProceduralImage::builder()
//!     .modifier_id(&registry, "Round")
//!     .unwrap()
//!     .border_width(2.0)
//!     .build();
//!
//! let info = image.shape_info(&Rect::new(10.0, 10.0, 100.0, 40.0), 1.0);
//! assert_eq!(info.radius().top_left, 20.0);
//!
//! let quad = image.quad(&Rect::new(10.0, 10.0, 100.0, 40.0), 1.0);
//! assert_eq!(quad.vertices.len(), 4);
//! ```

use crate::cache::{outline_cache_key, OutlineBuffers, TessellationCache};
use crate::encoding::ShapeVertexData;
use crate::error::{MeshError, ModifierError};
use crate::sprite::{DefaultSpriteCache, ResourceLoader, SpriteHandle};
use crate::vertex::ProceduralVertex;
use crate::{Color, CornerRadii, FreeModifier, ModifierRegistry, Rect, ShapeInfo, ShapeModifier};
use lyon::path::Winding;
use lyon::tessellation::{
    BuffersBuilder, FillOptions, FillRule, FillTessellator, FillVertex, FillVertexConstructor,
    VertexBuffers,
};

/// Fall-off applied when none is configured: one unit of anti-aliasing.
pub const DEFAULT_FALL_OFF_DISTANCE: f32 = 1.0;

/// A rectangle with procedurally drawn rounded corners and an optional border.
#[derive(Debug)]
pub struct ProceduralImage {
    modifier: Box<dyn ShapeModifier>,
    border_width: f32,
    fall_off_distance: f32,
    color: Color,
    sprite: Option<SpriteHandle>,
}

impl Default for ProceduralImage {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl ProceduralImage {
    /// Starts a [`ProceduralImageBuilder`] with the default configuration.
    pub fn builder() -> ProceduralImageBuilder {
        ProceduralImageBuilder::new()
    }

    /// The modifier that computes corner radii.
    pub fn modifier(&self) -> &dyn ShapeModifier {
        self.modifier.as_ref()
    }

    /// Replaces the modifier, e.g. after the user picked another entry in a selection list.
    pub fn set_modifier(&mut self, modifier: Box<dyn ShapeModifier>) {
        tracing::trace!(
            from = self.modifier.id(),
            to = modifier.id(),
            "procedural image modifier changed"
        );
        self.modifier = modifier;
    }

    /// Border thickness as configured, before normalization.
    pub fn border_width(&self) -> f32 {
        self.border_width
    }

    /// Sets the border thickness. Zero draws a solid shape.
    pub fn set_border_width(&mut self, border_width: f32) {
        self.border_width = border_width;
    }

    /// Width of the anti-aliased edge as configured.
    pub fn fall_off_distance(&self) -> f32 {
        self.fall_off_distance
    }

    /// Sets the width of the anti-aliased edge.
    pub fn set_fall_off_distance(&mut self, fall_off_distance: f32) {
        self.fall_off_distance = fall_off_distance;
    }

    /// Tint applied to every vertex.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Sets the vertex tint.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// The sprite sampled inside the shape, if any.
    pub fn sprite(&self) -> Option<&SpriteHandle> {
        self.sprite.as_ref()
    }

    /// Assigns or clears the sprite.
    pub fn set_sprite(&mut self, sprite: Option<SpriteHandle>) {
        self.sprite = sprite;
    }

    /// Whether the assigned sprite is the placeholder resource.
    ///
    /// An image without any sprite is a different state and reports `false`.
    pub fn uses_default_sprite(
        &self,
        cache: &DefaultSpriteCache,
        loader: &(impl ResourceLoader + ?Sized),
    ) -> bool {
        self.sprite
            .as_ref()
            .is_some_and(|sprite| cache.is_default(sprite, loader))
    }

    /// Radii from the modifier, scaled down to fit `rect`.
    pub fn fitted_radius(&self, rect: &Rect) -> CornerRadii {
        self.modifier.calculate_radius(rect).fit_to(rect)
    }

    /// Normalized shape parameters for `rect`.
    ///
    /// `pixel_size` is the size of one device pixel in layout units; the shader uses it to
    /// keep the fall-off constant on screen.
    pub fn shape_info(&self, rect: &Rect, pixel_size: f32) -> ShapeInfo {
        ShapeInfo::new(
            rect.width,
            rect.height,
            self.fall_off_distance,
            pixel_size,
            self.fitted_radius(rect),
            self.border_width,
        )
    }

    /// A quad covering `rect` whose vertices carry the encoded shape.
    ///
    /// Vertices are emitted clockwise from the top-left corner; the indices form two
    /// triangles. A rectangle with a zero or negative side produces empty buffers, the same
    /// as [`ProceduralImage::tessellate`].
    pub fn quad(&self, rect: &Rect, pixel_size: f32) -> VertexBuffers<ProceduralVertex, u16> {
        if rect.is_empty() {
            return VertexBuffers::new();
        }

        let shape = ShapeVertexData::encode(&self.shape_info(rect, pixel_size));
        let color = self.color.normalize();
        let (min_x, min_y) = rect.min();
        let (max_x, max_y) = rect.max();

        let corners = [
            ([min_x, min_y], [0.0, 0.0]),
            ([max_x, min_y], [1.0, 0.0]),
            ([max_x, max_y], [1.0, 1.0]),
            ([min_x, max_y], [0.0, 1.0]),
        ];

        let mut buffers = VertexBuffers::with_capacity(4, 6);
        buffers
            .vertices
            .extend(corners.map(|(position, tex_coords)| ProceduralVertex {
                position,
                tex_coords,
                color,
                shape,
            }));
        buffers.indices.extend([
            0u16, 1, 2, // first triangle
            2, 3, 0, // second triangle
        ]);
        buffers
    }

    /// Triangulates the rounded outline of the image, with a hole for the border if one is
    /// set.
    ///
    /// Outlines are looked up in `cache` before tessellating. A rectangle with a zero or
    /// negative side produces empty buffers.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::Tessellation`] if the normalized size, radii or border are not
    /// finite, or if lyon rejects the outline. Nothing is cached in that case.
    pub fn tessellate(
        &self,
        rect: &Rect,
        pixel_size: f32,
        cache: &mut TessellationCache,
    ) -> Result<VertexBuffers<ProceduralVertex, u16>, MeshError> {
        if rect.is_empty() {
            return Ok(VertexBuffers::new());
        }

        let info = self.shape_info(rect, pixel_size);
        let size = (info.width(), info.height());
        let cache_key = outline_cache_key(size, &info.radius(), info.border_width());

        if cache.get_outline(&cache_key).is_none() {
            tracing::trace!(cache_key, "outline cache miss");
            let outline = tessellate_outline(&info)?;
            cache.insert_outline(cache_key, outline);
        }

        let shape = ShapeVertexData::encode(&info);
        let color = self.color.normalize();
        let mut buffers = VertexBuffers::new();
        if let Some(outline) = cache.get_outline(&cache_key) {
            buffers
                .vertices
                .extend(outline.vertices.iter().map(|&[x, y]| ProceduralVertex {
                    position: [rect.x + x, rect.y + y],
                    tex_coords: [x / size.0, y / size.1],
                    color,
                    shape,
                }));
            buffers.indices.extend_from_slice(&outline.indices);
        }
        Ok(buffers)
    }
}

struct LocalPosition;

impl FillVertexConstructor<[f32; 2]> for LocalPosition {
    fn new_vertex(&mut self, vertex: FillVertex) -> [f32; 2] {
        vertex.position().to_array()
    }
}

fn is_finite_shape(info: &ShapeInfo) -> bool {
    info.width().is_finite()
        && info.height().is_finite()
        && info.border_width().is_finite()
        && info.radius().to_array().iter().all(|r| r.is_finite())
}

fn tessellation_failed(info: &ShapeInfo, error: MeshError) -> MeshError {
    tracing::warn!(%error, shape = %info, "failed to tessellate procedural image");
    error
}

fn tessellate_outline(info: &ShapeInfo) -> Result<OutlineBuffers, MeshError> {
    // lyon asserts on NaN points in debug builds.
    if !is_finite_shape(info) {
        let error = MeshError::Tessellation("shape geometry is not finite".to_owned());
        return Err(tessellation_failed(info, error));
    }

    let outer = Rect::from_size(info.width(), info.height());
    let radius = info.radius();

    let mut path_builder = lyon::path::Path::builder();
    path_builder.add_rounded_rectangle(&outer.into(), &radius.into(), Winding::Positive);

    let border = info.border_width();
    if border > 0.0 && border * 2.0 < outer.min_side() {
        let inner = Rect::new(
            border,
            border,
            outer.width - border * 2.0,
            outer.height - border * 2.0,
        );
        let inner_radius = CornerRadii::from(radius.to_array().map(|r| (r - border).max(0.0)));
        path_builder.add_rounded_rectangle(&inner.into(), &inner_radius.into(), Winding::Negative);
    }
    let path = path_builder.build();

    let mut outline = OutlineBuffers::new();
    let options = FillOptions::default().with_fill_rule(FillRule::EvenOdd);
    FillTessellator::new()
        .tessellate_path(
            &path,
            &options,
            &mut BuffersBuilder::new(&mut outline, LocalPosition),
        )
        .map_err(|error| tessellation_failed(info, MeshError::from(error)))?;

    Ok(outline)
}

/// Fluent configuration of a [`ProceduralImage`].
///
/// Defaults: a zero-radius [`FreeModifier`], no border, a fall-off of
/// [`DEFAULT_FALL_OFF_DISTANCE`], white tint and no sprite.
#[derive(Debug)]
pub struct ProceduralImageBuilder {
    modifier: Box<dyn ShapeModifier>,
    border_width: f32,
    fall_off_distance: f32,
    color: Color,
    sprite: Option<SpriteHandle>,
}

impl Default for ProceduralImageBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ProceduralImageBuilder {
    /// A builder holding the defaults listed on the type.
    pub fn new() -> Self {
        Self {
            modifier: Box::<FreeModifier>::default(),
            border_width: 0.0,
            fall_off_distance: DEFAULT_FALL_OFF_DISTANCE,
            color: Color::WHITE,
            sprite: None,
        }
    }

    /// Uses `modifier` to compute corner radii.
    pub fn modifier(self, modifier: impl ShapeModifier + 'static) -> Self {
        self.boxed_modifier(Box::new(modifier))
    }

    /// Same as [`ProceduralImageBuilder::modifier`] for an already boxed modifier.
    pub fn boxed_modifier(mut self, modifier: Box<dyn ShapeModifier>) -> Self {
        self.modifier = modifier;
        self
    }

    /// Uses the default configuration of the modifier registered as `id`.
    pub fn modifier_id(self, registry: &ModifierRegistry, id: &str) -> Result<Self, ModifierError> {
        let modifier = registry.create(id)?;
        Ok(self.boxed_modifier(modifier))
    }

    /// Border thickness. Zero draws a solid shape.
    pub fn border_width(mut self, border_width: f32) -> Self {
        self.border_width = border_width;
        self
    }

    /// Width of the anti-aliased edge.
    pub fn fall_off_distance(mut self, fall_off_distance: f32) -> Self {
        self.fall_off_distance = fall_off_distance;
        self
    }

    /// Vertex tint. Defaults to white.
    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.color = color.into();
        self
    }

    /// Sprite sampled inside the shape.
    pub fn sprite(mut self, sprite: SpriteHandle) -> Self {
        self.sprite = Some(sprite);
        self
    }

    /// Finishes the configuration.
    pub fn build(self) -> ProceduralImage {
        ProceduralImage {
            modifier: self.modifier,
            border_width: self.border_width,
            fall_off_distance: self.fall_off_distance,
            color: self.color,
            sprite: self.sprite,
        }
    }
}
