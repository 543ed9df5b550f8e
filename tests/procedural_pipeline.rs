use procedural_image::{
    global_default_sprite_cache, same_sprite, CornerRadii, MemoryResourceLoader,
    ModifierRegistry, ProceduralImage, Rect, RoundModifier, ShapeInfo, ShapeModifier,
    ShapeVertexData, Sprite, TessellationCache, DEFAULT_SPRITE_NAME,
};
use std::sync::Arc;

#[test]
fn round_modifier_feeds_normalized_shape_info() {
    let radius = RoundModifier.calculate_radius(&Rect::from_size(100.0, 40.0));
    assert_eq!(radius, CornerRadii::new(20.0, 20.0, 20.0, 20.0));

    let info = ShapeInfo::new(-100.0, 40.0, -5.0, 2.0, radius, -1.0);
    assert_eq!(info.width(), 100.0);
    assert_eq!(info.height(), 40.0);
    assert_eq!(info.fall_off_distance(), 0.0);
    assert_eq!(info.pixel_size(), 2.0);
    assert_eq!(info.radius(), CornerRadii::all(20.0));
    assert_eq!(info.border_width(), 0.0);
}

#[test]
fn image_built_from_registry_produces_encoded_quad() {
    let registry = ModifierRegistry::with_builtin();
    let image = ProceduralImage::builder()
        .modifier_id(&registry, "Round")
        .unwrap()
        .border_width(4.0)
        .build();

    let rect = Rect::new(20.0, 20.0, 100.0, 40.0);
    let quad = image.quad(&rect, 1.0);
    let shape = quad.vertices[0].shape;

    assert_eq!(shape, ShapeVertexData::encode(&image.shape_info(&rect, 1.0)));
    assert_eq!(shape.size, [100.0, 40.0]);
    assert_eq!(shape.style[0], 0.1);
    for radius in shape.decode_radii() {
        assert!((radius - 20.0).abs() <= 40.0 / 4095.0, "{radius}");
    }

    let mut cache = TessellationCache::default();
    let mesh = image.tessellate(&rect, 1.0, &mut cache).unwrap();
    assert!(!mesh.indices.is_empty());
}

// The only test in this binary touching the process-wide cache.
#[test]
fn global_default_sprite_cache_lifecycle() {
    let cache = global_default_sprite_cache();
    cache.reset();

    let loader = MemoryResourceLoader::new();
    assert!(cache.get_or_load(&loader).is_none());

    let placeholder = loader.insert(DEFAULT_SPRITE_NAME, Sprite::white_pixel("placeholder"));
    let loaded = cache.get_or_load(&loader).unwrap();
    assert!(same_sprite(&loaded, &placeholder));

    // Replacing the resource does not affect the cached handle until reset.
    let replacement = loader.insert(DEFAULT_SPRITE_NAME, Sprite::white_pixel("placeholder"));
    assert!(cache.is_default(&placeholder, &loader));
    assert!(!cache.is_default(&replacement, &loader));

    cache.reset();
    assert!(cache.is_default(&replacement, &loader));

    let image = ProceduralImage::builder().sprite(Arc::clone(&replacement)).build();
    assert!(image.uses_default_sprite(cache, &loader));
    cache.reset();
}
