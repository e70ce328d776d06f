use std::io;

use thiserror::Error;

/// Failures while turning a scene description into intersectable primitives.
///
/// The intersection kernel itself never fails; a miss is not an error.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("failed to read scene file: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse scene json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("material {0} not present in material list")]
    UnknownMaterial(String),
    #[error("face {face} references vertex {index} but mesh only has {len} vertices")]
    IndexOutOfRange { face: usize, index: usize, len: usize },
    #[error("mesh has {positions} positions but {normals} normals")]
    NormalCountMismatch { positions: usize, normals: usize },
    #[error("vertex normal {index} has zero length or is not finite")]
    DegenerateNormal { index: usize },
    #[error("sphere radius must be positive and finite, got {0}")]
    DegenerateSphere(f32),
}
