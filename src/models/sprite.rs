//! Composed sprite records.

use serde::{Deserialize, Serialize};

use super::matrix::{ColorTransform, TransformMatrix};

/// One placed texture inside a composed sprite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpriteLayer {
    /// Library item name of the placed texture (an `image/...` reference)
    pub texture_name: String,
    /// Placement transform for this layer
    pub transform: TransformMatrix,
    /// Per-channel color multiplier, `"default"` when identity
    pub color: ColorTransform,
}

/// A composed sprite: an ordered stack of placed textures.
///
/// Layer order follows the source document's authored order. Source layers
/// with no placed element contribute nothing (no placeholder entries).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpriteTexture {
    pub layers: Vec<SpriteLayer>,
}
