//! Raster reference extraction.

use roxmltree::Document;

use crate::error::ConvertError;
use crate::models::RawImage;
use crate::xml::{matrix_record, required_attr};

use super::{frame_elements, layer_frames, symbol_timeline};

/// Reduce an image sub-document to its media path plus placement transform.
///
/// A raster reference holds exactly one layer with exactly one frame; any
/// other shape fails with the offending counts. The frame's placed element
/// names the media asset via `libraryItemName`.
pub fn extract_image(doc: &Document) -> Result<(String, RawImage), ConvertError> {
    let (name, layers) = symbol_timeline(doc)?;

    let frames = match layers.first() {
        Some(layer) => layer_frames(*layer, "image layer")?,
        None => Vec::new(),
    };
    if layers.len() != 1 || frames.len() != 1 {
        return Err(ConvertError::UnexpectedStructure {
            name,
            layers: layers.len(),
            frames: frames.len(),
        });
    }

    let elements = frame_elements(frames[0]);
    let instance = elements.first().ok_or_else(|| {
        ConvertError::structural(format!("image '{}' frame has no placed element", name))
    })?;

    let image_path = required_attr(*instance, "libraryItemName", "placed bitmap element")?;
    let transform = matrix_record(*instance);

    Ok((name, RawImage { image_path, transform }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image_doc(layers: &str) -> String {
        format!(
            r#"<DOMSymbolItem xmlns="http://ns.adobe.com/xfl/2008/" name="image_leaf">
                <timeline>
                    <DOMTimeline name="image_leaf">
                        <layers>{}</layers>
                    </DOMTimeline>
                </timeline>
            </DOMSymbolItem>"#,
            layers
        )
    }

    #[test]
    fn test_extract_image() {
        let xml = image_doc(
            r#"<DOMLayer name="1">
                <frames>
                    <DOMFrame index="0" duration="1">
                        <elements>
                            <DOMBitmapInstance libraryItemName="media/leaf1_x">
                                <matrix><Matrix tx="10" ty="20"/></matrix>
                            </DOMBitmapInstance>
                        </elements>
                    </DOMFrame>
                </frames>
            </DOMLayer>"#,
        );
        let doc = roxmltree::Document::parse(&xml).unwrap();
        let (name, image) = extract_image(&doc).unwrap();

        assert_eq!(name, "image_leaf");
        assert_eq!(image.image_path, "media/leaf1_x");
        assert_eq!(
            image.transform.elements(),
            &["1", "0", "0", "1", "10", "20"].map(String::from)
        );
        assert!(image.transform.is_numeric());
    }

    #[test]
    fn test_extra_layers_fail_with_counts() {
        let xml = image_doc(
            r#"<DOMLayer name="1">
                <frames>
                    <DOMFrame index="0" duration="1"><elements/></DOMFrame>
                    <DOMFrame index="1" duration="1"><elements/></DOMFrame>
                </frames>
            </DOMLayer>
            <DOMLayer name="2"><frames/></DOMLayer>"#,
        );
        let doc = roxmltree::Document::parse(&xml).unwrap();
        let err = extract_image(&doc).unwrap_err();
        assert_eq!(
            err,
            ConvertError::UnexpectedStructure {
                name: "image_leaf".to_string(),
                layers: 2,
                frames: 2
            }
        );
    }

    #[test]
    fn test_missing_placed_element_is_structural() {
        let xml = image_doc(
            r#"<DOMLayer name="1">
                <frames><DOMFrame index="0" duration="1"><elements/></DOMFrame></frames>
            </DOMLayer>"#,
        );
        let doc = roxmltree::Document::parse(&xml).unwrap();
        assert_eq!(extract_image(&doc).unwrap_err().kind(), "structural");
    }
}
