use crate::encoding::ShapeVertexData;

/// A vertex of a procedural image mesh.
///
/// The layout is `#[repr(C)]` and free of padding so a slice of vertices can be handed to
/// the GPU with `bytemuck::cast_slice`.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ProceduralVertex {
    pub position: [f32; 2],
    /// Sprite coordinates, `[0, 1]` across the shape's bounding box.
    pub tex_coords: [f32; 2],
    pub color: [f32; 4],
    pub shape: ShapeVertexData,
}
