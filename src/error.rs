use thiserror::Error;

/// Errors returned by [`ModifierRegistry`](crate::ModifierRegistry).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModifierError {
    /// No modifier was registered under this identifier.
    #[error("no shape modifier registered as `{0}`")]
    UnknownId(String),
    /// A modifier is already registered under this identifier.
    #[error("shape modifier `{0}` is already registered")]
    DuplicateId(&'static str),
}

/// Errors that can occur while building geometry for a procedural image.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// The outline could not be filled, either because its geometry is not finite or
    /// because lyon rejected it. Contains a description of the cause.
    #[error("failed to tessellate shape outline: {0}")]
    Tessellation(String),
}

impl From<lyon::tessellation::TessellationError> for MeshError {
    fn from(value: lyon::tessellation::TessellationError) -> Self {
        MeshError::Tessellation(format!("{value:?}"))
    }
}
