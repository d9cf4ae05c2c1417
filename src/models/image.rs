//! Raster image record.

use serde::{Deserialize, Serialize};

use super::matrix::TransformMatrix;

/// A raster reference reduced to its media path plus placement transform.
///
/// Keyed in the output by the sub-document's declared timeline name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawImage {
    /// Path of the raw media asset (a `media/...` library item name)
    pub image_path: String,
    /// Placement transform applied to the asset
    pub transform: TransformMatrix,
}
