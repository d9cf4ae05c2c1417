//! The assembled output document.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::animation::SpriteAnimationMap;
use super::header::AnimationHeader;
use super::image::RawImage;
use super::sprite::SpriteTexture;

/// The normalized animation descriptor handed to the serializer.
///
/// Keyed stores use ordered maps so that re-deriving the document from the
/// same input is byte-for-byte deterministic across runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationDocument {
    pub header: AnimationHeader,
    pub images: BTreeMap<String, RawImage>,
    pub sprites: BTreeMap<String, SpriteTexture>,
    pub animations: SpriteAnimationMap,
}
