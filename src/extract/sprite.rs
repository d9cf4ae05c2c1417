//! Composed sprite extraction.

use roxmltree::Document;

use crate::error::ConvertError;
use crate::models::{SpriteLayer, SpriteTexture};
use crate::xml::{color_record, matrix_record, required_attr};

use super::{frame_elements, layer_frames, symbol_timeline};

/// Reduce a sprite sub-document to its ordered layer stack.
///
/// Layers are enumerated in authored order; a layer whose single frame has
/// no placed element contributes nothing. An element without a color record
/// gets the `"default"` sentinel, same as an explicit identity color.
pub fn extract_sprite(doc: &Document) -> Result<(String, SpriteTexture), ConvertError> {
    let (name, layers) = symbol_timeline(doc)?;

    let mut stack = Vec::new();
    for layer in layers {
        let frames = layer_frames(layer, "sprite layer")?;
        let frame = match frames.first() {
            Some(frame) => *frame,
            None => continue,
        };
        let elements = frame_elements(frame);
        let instance = match elements.first() {
            Some(instance) => *instance,
            None => continue,
        };

        stack.push(SpriteLayer {
            texture_name: required_attr(instance, "libraryItemName", "placed sprite element")?,
            transform: matrix_record(instance),
            color: color_record(instance),
        });
    }

    Ok((name, SpriteTexture { layers: stack }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ColorTransform;

    const TWO_LAYERS: &str = r#"
        <DOMSymbolItem xmlns="http://ns.adobe.com/xfl/2008/" name="sprite_plant">
            <timeline>
                <DOMTimeline name="sprite_plant">
                    <layers>
                        <DOMLayer name="0">
                            <frames>
                                <DOMFrame index="0" duration="1">
                                    <elements>
                                        <DOMSymbolInstance libraryItemName="leaf">
                                            <matrix><Matrix tx="10" ty="20"/></matrix>
                                        </DOMSymbolInstance>
                                    </elements>
                                </DOMFrame>
                            </frames>
                        </DOMLayer>
                        <DOMLayer name="1">
                            <frames>
                                <DOMFrame index="0" duration="1"><elements/></DOMFrame>
                            </frames>
                        </DOMLayer>
                    </layers>
                </DOMTimeline>
            </timeline>
        </DOMSymbolItem>
    "#;

    #[test]
    fn test_empty_layer_is_omitted_not_placeholder() {
        let doc = roxmltree::Document::parse(TWO_LAYERS).unwrap();
        let (name, texture) = extract_sprite(&doc).unwrap();

        assert_eq!(name, "sprite_plant");
        assert_eq!(texture.layers.len(), 1);

        let layer = &texture.layers[0];
        assert_eq!(layer.texture_name, "leaf");
        assert_eq!(
            layer.transform.elements(),
            &["1", "0", "0", "1", "10", "20"].map(String::from)
        );
        // No color record: the sentinel, not an omitted field
        assert_eq!(layer.color, ColorTransform::Default);
    }

    #[test]
    fn test_explicit_color_is_kept_unless_identity() {
        let xml = r#"
            <DOMSymbolItem name="sprite_glow">
                <timeline>
                    <DOMTimeline name="sprite_glow">
                        <layers>
                            <DOMLayer name="0">
                                <frames>
                                    <DOMFrame index="0" duration="1">
                                        <elements>
                                            <DOMSymbolInstance libraryItemName="halo">
                                                <color>
                                                    <Color redMultiplier="0.5" greenMultiplier="0.5"
                                                           blueMultiplier="0.5" alphaMultiplier="1.000000"/>
                                                </color>
                                            </DOMSymbolInstance>
                                        </elements>
                                    </DOMFrame>
                                </frames>
                            </DOMLayer>
                        </layers>
                    </DOMTimeline>
                </timeline>
            </DOMSymbolItem>
        "#;
        let doc = roxmltree::Document::parse(xml).unwrap();
        let (_, texture) = extract_sprite(&doc).unwrap();
        assert_eq!(
            texture.layers[0].color,
            ColorTransform::Multipliers(
                ["0.5", "0.5", "0.5", "1.000000"].map(String::from)
            )
        );
    }

    #[test]
    fn test_layer_order_follows_document() {
        let xml = r#"
            <DOMSymbolItem name="sprite_stack">
                <timeline>
                    <DOMTimeline name="sprite_stack">
                        <layers>
                            <DOMLayer name="0">
                                <frames><DOMFrame index="0" duration="1">
                                    <elements><DOMSymbolInstance libraryItemName="top"/></elements>
                                </DOMFrame></frames>
                            </DOMLayer>
                            <DOMLayer name="1">
                                <frames><DOMFrame index="0" duration="1">
                                    <elements><DOMSymbolInstance libraryItemName="bottom"/></elements>
                                </DOMFrame></frames>
                            </DOMLayer>
                        </layers>
                    </DOMTimeline>
                </timeline>
            </DOMSymbolItem>
        "#;
        let doc = roxmltree::Document::parse(xml).unwrap();
        let (_, texture) = extract_sprite(&doc).unwrap();
        let names: Vec<_> = texture.layers.iter().map(|l| l.texture_name.as_str()).collect();
        assert_eq!(names, ["top", "bottom"]);
    }
}
