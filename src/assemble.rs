//! Final document assembly.
//!
//! Pure structural merge of the header and the three keyed stores, plus the
//! derivation of the project's output entity name from its first media entry.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::ConvertError;
use crate::models::{
    AnimationDocument, AnimationHeader, RawImage, SpriteAnimationMap, SpriteTexture,
};

/// Merge the header and the three keyed stores into the output document.
pub fn assemble(
    header: AnimationHeader,
    images: BTreeMap<String, RawImage>,
    sprites: BTreeMap<String, SpriteTexture>,
    animations: SpriteAnimationMap,
) -> AnimationDocument {
    AnimationDocument { header, images, sprites, animations }
}

fn name_shape() -> &'static Regex {
    static NAME_SHAPE: OnceLock<Regex> = OnceLock::new();
    NAME_SHAPE.get_or_init(|| {
        Regex::new(r"^media/([A-Za-z]+)\d*_[A-Za-z]$").expect("literal pattern compiles")
    })
}

/// Derive the project's entity name from a media entry name.
///
/// Precondition: `name` matches the `media/<word><digits>?_x` naming
/// convention (a `media/` prefix, an alphabetic entity word, an optional
/// numeric suffix, and a 2-character `_x` tail). The entity word is the
/// result; anything else fails rather than guessing.
pub fn entity_name(name: &str) -> Result<String, ConvertError> {
    name_shape()
        .captures(name)
        .map(|caps| caps[1].to_string())
        .ok_or_else(|| ConvertError::Naming { name: name.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_name_strips_prefix_digits_and_tail() {
        assert_eq!(entity_name("media/zombie1_x").unwrap(), "zombie");
        assert_eq!(entity_name("media/plant_x").unwrap(), "plant");
        assert_eq!(entity_name("media/walker12_a").unwrap(), "walker");
    }

    #[test]
    fn test_entity_name_rejects_off_convention_names() {
        assert_eq!(
            entity_name("zombie1_x").unwrap_err(),
            ConvertError::Naming { name: "zombie1_x".to_string() }
        );
        assert!(entity_name("media/zombie1").is_err());
        assert!(entity_name("media/_x").is_err());
        assert!(entity_name("media/zombie1_x.png").is_err());
    }

    #[test]
    fn test_assemble_is_pure_merge() {
        let header = AnimationHeader {
            width: "800".to_string(),
            height: "600".to_string(),
            frame_rate: "30".to_string(),
        };
        let doc = assemble(header.clone(), BTreeMap::new(), BTreeMap::new(), BTreeMap::new());
        assert_eq!(doc.header, header);
        assert!(doc.images.is_empty());
        assert!(doc.sprites.is_empty());
        assert!(doc.animations.is_empty());
    }
}
