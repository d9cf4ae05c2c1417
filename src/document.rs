//! Root document loading.
//!
//! Extracts the animation header plus the four reference lists (folders,
//! media, symbols, timelines) from `DOMDocument.xml`. Sections are located
//! by tag name, not child position, and a missing section is a structural
//! error. Within a section, entries whose tag is not the expected one are
//! skipped: sections may legitimately contain other element kinds.

use roxmltree::{Document, Node};

use crate::error::ConvertError;
use crate::models::{
    AnimationHeader, FolderReference, MediaReference, SymbolReference, TimelineReference,
};
use crate::xml::{element_children, required_attr, required_child};

/// Expected entry tags per root-document section.
const FOLDER_ENTRY_TAG: &str = "DOMFolderItem";
const MEDIA_ENTRY_TAG: &str = "DOMBitmapItem";
const SYMBOL_ENTRY_TAG: &str = "Include";
const TIMELINE_ENTRY_TAG: &str = "DOMFrame";

/// Everything the pipeline needs from the root document.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectDocument {
    pub header: AnimationHeader,
    pub folders: Vec<FolderReference>,
    pub media: Vec<MediaReference>,
    pub symbols: Vec<SymbolReference>,
    pub timeline_frames: Vec<TimelineReference>,
}

/// Load header and reference lists from a parsed root document.
pub fn load_project(doc: &Document) -> Result<ProjectDocument, ConvertError> {
    let root = doc.root_element();

    let header = AnimationHeader {
        width: required_attr(root, "width", "root document")?,
        height: required_attr(root, "height", "root document")?,
        frame_rate: required_attr(root, "frameRate", "root document")?,
    };

    let folders = section_entries(root, "folders", FOLDER_ENTRY_TAG)?
        .map(|entry| {
            Ok(FolderReference { name: required_attr(entry, "name", FOLDER_ENTRY_TAG)? })
        })
        .collect::<Result<Vec<_>, ConvertError>>()?;

    let media = section_entries(root, "media", MEDIA_ENTRY_TAG)?
        .map(|entry| {
            Ok(MediaReference {
                name: required_attr(entry, "name", MEDIA_ENTRY_TAG)?,
                item_id: entry.attribute("itemID").map(str::to_string),
                href: entry.attribute("href").map(str::to_string),
                frame_right: entry.attribute("frameRight").map(str::to_string),
                frame_bottom: entry.attribute("frameBottom").map(str::to_string),
            })
        })
        .collect::<Result<Vec<_>, ConvertError>>()?;

    let symbols = section_entries(root, "symbols", SYMBOL_ENTRY_TAG)?
        .map(|entry| {
            Ok(SymbolReference {
                href: required_attr(entry, "href", SYMBOL_ENTRY_TAG)?,
                item_id: entry.attribute("itemID").map(str::to_string),
            })
        })
        .collect::<Result<Vec<_>, ConvertError>>()?;

    let timeline_frames = timeline_entries(root)?;

    Ok(ProjectDocument { header, folders, media, symbols, timeline_frames })
}

/// Iterate a root section's entries, filtered to the expected entry tag.
fn section_entries<'a, 'input>(
    root: Node<'a, 'input>,
    section: &str,
    entry_tag: &'a str,
) -> Result<impl Iterator<Item = Node<'a, 'input>>, ConvertError> {
    let section = required_child(root, section, "root document")?;
    Ok(element_children(section).filter(move |n| n.tag_name().name() == entry_tag))
}

/// Extract the frame entries of the root timeline.
///
/// The root's timelines section holds one timeline whose first layer carries
/// the per-animation frame labels: timelines > DOMTimeline > layers >
/// DOMLayer > frames > DOMFrame.
fn timeline_entries(root: Node) -> Result<Vec<TimelineReference>, ConvertError> {
    let timelines = required_child(root, "timelines", "root document")?;
    let timeline = required_child(timelines, "DOMTimeline", "timelines section")?;
    let layers = required_child(timeline, "layers", "root timeline")?;
    let layer = required_child(layers, "DOMLayer", "root timeline layers")?;
    let frames = required_child(layer, "frames", "root timeline layer")?;

    Ok(element_children(frames)
        .filter(|n| n.tag_name().name() == TIMELINE_ENTRY_TAG)
        .map(|entry| TimelineReference {
            animation_name: entry.attribute("name").map(str::to_string),
            animation_index: entry.attribute("index").map(str::to_string),
            animation_duration: entry.attribute("duration").map(str::to_string),
        })
        .collect())
}
