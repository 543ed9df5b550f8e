use criterion::{black_box, criterion_group, criterion_main, Criterion};
use procedural_image::{
    ModifierRegistry, ProceduralImage, Rect, ShapeVertexData, TessellationCache,
};

fn rects() -> Vec<Rect> {
    (0..256)
        .map(|i| {
            let i = i as f32;
            Rect::new(i, i * 0.5, 20.0 + i, 10.0 + (i * 7.0) % 90.0)
        })
        .collect()
}

fn bench_layout_pass(c: &mut Criterion) {
    let registry = ModifierRegistry::with_builtin();
    let image = ProceduralImage::builder()
        .modifier_id(&registry, "Round")
        .expect("builtin modifier")
        .border_width(2.0)
        .build();
    let rects = rects();

    c.bench_function("shape_info_and_encode_256", |b| {
        b.iter(|| {
            for rect in &rects {
                let info = image.shape_info(black_box(rect), 1.0);
                black_box(ShapeVertexData::encode(&info));
            }
        })
    });

    c.bench_function("quad_256", |b| {
        b.iter(|| {
            for rect in &rects {
                black_box(image.quad(black_box(rect), 1.0));
            }
        })
    });

    c.bench_function("tessellate_cached_256", |b| {
        let mut cache = TessellationCache::default();
        b.iter(|| {
            for rect in &rects {
                black_box(image.tessellate(black_box(rect), 1.0, &mut cache).ok());
            }
        })
    });
}

criterion_group!(benches, bench_layout_pass);
criterion_main!(benches);
