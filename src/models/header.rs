//! Root-document records: header and the four reference lists.

use serde::{Deserialize, Serialize};

/// Top-level animation attributes read once from the root document.
///
/// All three fields are numeric strings preserved exactly as authored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationHeader {
    pub width: String,
    pub height: String,
    pub frame_rate: String,
}

/// One entry from the root document's folders section.
#[derive(Debug, Clone, PartialEq)]
pub struct FolderReference {
    pub name: String,
}

/// One entry from the root document's media section.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaReference {
    pub name: String,
    pub item_id: Option<String>,
    pub href: Option<String>,
    pub frame_right: Option<String>,
    pub frame_bottom: Option<String>,
}

/// One entry from the root document's symbols section.
///
/// Consumed by classification and extraction; never retained in the output.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolReference {
    pub href: String,
    pub item_id: Option<String>,
}

/// One frame entry from the root document's timelines section.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineReference {
    pub animation_name: Option<String>,
    pub animation_index: Option<String>,
    pub animation_duration: Option<String>,
}
