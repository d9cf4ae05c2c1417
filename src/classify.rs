//! Symbol classification by filename convention.
//!
//! Every symbol reference resolves to exactly one `SymbolKind`; downstream
//! consumers match exhaustively, so there is no silent fallthrough.

/// Semantic kind of a referenced sub-document, derived from its href.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    /// Raster reference (`image...`)
    Image,
    /// Composed sprite (`sprite...`)
    Sprite,
    /// Timed animation (`label...`)
    Animation,
    /// The reserved `main_sprite.xml` entry; carries no current data
    Ignored,
    /// No known convention matched; reported as a classification error
    Unknown,
}

impl std::fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SymbolKind::Image => write!(f, "image"),
            SymbolKind::Sprite => write!(f, "sprite"),
            SymbolKind::Animation => write!(f, "animation"),
            SymbolKind::Ignored => write!(f, "ignored"),
            SymbolKind::Unknown => write!(f, "unknown"),
        }
    }
}

/// Classify a symbol reference by its href.
pub fn classify(href: &str) -> SymbolKind {
    if href == "main_sprite.xml" {
        SymbolKind::Ignored
    } else if href.starts_with("image") {
        SymbolKind::Image
    } else if href.starts_with("sprite") {
        SymbolKind::Sprite
    } else if href.starts_with("label") {
        SymbolKind::Animation
    } else {
        SymbolKind::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_table() {
        assert_eq!(classify("image_leaf.xml"), SymbolKind::Image);
        assert_eq!(classify("sprite_plant.xml"), SymbolKind::Sprite);
        assert_eq!(classify("label_walk.xml"), SymbolKind::Animation);
        assert_eq!(classify("main_sprite.xml"), SymbolKind::Ignored);
        assert_eq!(classify("backdrop.xml"), SymbolKind::Unknown);
        assert_eq!(classify(""), SymbolKind::Unknown);
    }

    #[test]
    fn test_prefix_match_not_exact_match() {
        assert_eq!(classify("images_extra.xml"), SymbolKind::Image);
        assert_eq!(classify("spriteX.xml"), SymbolKind::Sprite);
        // The reserved name wins over prefix rules
        assert_eq!(classify("main_sprite.xml"), SymbolKind::Ignored);
    }
}
