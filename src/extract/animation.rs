//! Timed animation extraction.

use std::collections::BTreeMap;

use roxmltree::{Document, Node};

use crate::error::ConvertError;
use crate::models::{AnimationFrame, LayerAnimations};
use crate::xml::{color_record, matrix_record, required_attr};

use super::{frame_elements, layer_frames, symbol_timeline};

/// An animation reduced to per-layer frame sequences, plus any warnings.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationExtraction {
    /// The animation's declared timeline name
    pub name: String,
    /// layer index -> referenced sprite -> frame sequence
    pub layers: LayerAnimations,
    /// Non-fatal observations (e.g. declared vs counted layer mismatch)
    pub warnings: Vec<String>,
}

/// Reduce an animation sub-document to per-layer, per-sprite frame sequences.
///
/// The layer count is read from the first layer's `name` attribute, not by
/// counting layer entities. The source format authors it that way; when the
/// two disagree a warning is recorded so the discrepancy is visible.
pub fn extract_animation(doc: &Document) -> Result<AnimationExtraction, ConvertError> {
    let (name, layers) = symbol_timeline(doc)?;

    let first_layer = layers.first().ok_or_else(|| {
        ConvertError::structural(format!("animation '{}' has no layers", name))
    })?;
    let declared = required_attr(*first_layer, "name", "first animation layer")?;
    let layer_count: usize = declared.parse().map_err(|_| {
        ConvertError::structural(format!(
            "animation '{}': first layer name '{}' is not a layer count",
            name, declared
        ))
    })?;

    let mut warnings = Vec::new();
    if layer_count != layers.len() {
        warnings.push(format!(
            "animation '{}': declared layer count {} differs from counted layers {}",
            name,
            layer_count,
            layers.len()
        ));
    }

    let mut extracted: LayerAnimations = BTreeMap::new();
    for layer_idx in 0..layer_count {
        let layer = layers.get(layer_idx).copied().ok_or_else(|| {
            ConvertError::structural(format!(
                "animation '{}': declared layer count {} exceeds available layers {}",
                name,
                layer_count,
                layers.len()
            ))
        })?;

        let frames = layer_frames(layer, "animation layer")?;
        let referenced_sprite = referenced_sprite(&name, layer_idx, &frames)?;

        let mut sequence = Vec::with_capacity(frames.len());
        for (frame_idx, frame) in frames.iter().enumerate() {
            sequence.push(build_frame(&name, layer_idx, frame_idx, *frame)?);
        }

        extracted
            .entry(layer_idx as u32)
            .or_default()
            .insert(referenced_sprite, sequence);
    }

    Ok(AnimationExtraction { name, layers: extracted, warnings })
}

/// Resolve the sprite a layer references, from its first non-empty frame.
///
/// The source format guarantees no two consecutive frames are both empty at
/// the head of a layer, so only the first two frames are consulted.
fn referenced_sprite(
    animation: &str,
    layer_idx: usize,
    frames: &[Node],
) -> Result<String, ConvertError> {
    for frame in frames.iter().take(2) {
        if let Some(instance) = frame_elements(*frame).first() {
            return required_attr(*instance, "libraryItemName", "placed animation element");
        }
    }
    Err(ConvertError::structural(format!(
        "animation '{}' layer {}: no referenced sprite in the first two frames",
        animation, layer_idx
    )))
}

/// Build one frame record from a frame entity.
fn build_frame(
    animation: &str,
    layer_idx: usize,
    frame_idx: usize,
    frame: Node,
) -> Result<AnimationFrame, ConvertError> {
    let malformed = || ConvertError::MalformedFrame {
        animation: animation.to_string(),
        layer: layer_idx,
        frame: frame_idx,
    };

    let frame_index: u32 = frame
        .attribute("index")
        .and_then(|v| v.parse().ok())
        .ok_or_else(malformed)?;
    let frame_duration: u32 = frame
        .attribute("duration")
        .and_then(|v| v.parse().ok())
        .ok_or_else(malformed)?;

    let elements = frame_elements(frame);
    match elements.first() {
        None => Ok(AnimationFrame::invisible(frame_index, frame_duration)),
        Some(instance) => Ok(AnimationFrame::visible(
            frame_index,
            frame_duration,
            matrix_record(*instance),
            color_record(*instance),
        )),
    }
}
