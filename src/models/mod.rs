//! Data models for the normalized animation descriptor

mod animation;
mod document;
mod header;
mod image;
mod matrix;
mod sprite;

// Re-export all public types
pub use animation::{total_duration, AnimationFrame, LayerAnimations, SpriteAnimationMap};
pub use document::AnimationDocument;
pub use header::{AnimationHeader, FolderReference, MediaReference, SymbolReference, TimelineReference};
pub use image::RawImage;
pub use matrix::{ColorTransform, TransformMatrix};
pub use sprite::{SpriteLayer, SpriteTexture};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_document_roundtrip() {
        let mut images = BTreeMap::new();
        images.insert(
            "image_leaf".to_string(),
            RawImage {
                image_path: "media/leaf1_x".to_string(),
                transform: TransformMatrix::identity(),
            },
        );

        let doc = AnimationDocument {
            header: AnimationHeader {
                width: "800".to_string(),
                height: "600".to_string(),
                frame_rate: "30".to_string(),
            },
            images,
            sprites: BTreeMap::new(),
            animations: BTreeMap::new(),
        };

        let json = serde_json::to_string(&doc).unwrap();
        let parsed: AnimationDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(doc, parsed);
    }

    #[test]
    fn test_document_field_names() {
        let doc = AnimationDocument {
            header: AnimationHeader {
                width: "800".to_string(),
                height: "600".to_string(),
                frame_rate: "30".to_string(),
            },
            images: BTreeMap::new(),
            sprites: BTreeMap::new(),
            animations: BTreeMap::new(),
        };
        let value = serde_json::to_value(&doc).unwrap();
        assert!(value.get("header").is_some());
        assert!(value.get("images").is_some());
        assert!(value.get("sprites").is_some());
        assert!(value.get("animations").is_some());
        assert_eq!(value["header"]["frame_rate"], "30");
    }
}
