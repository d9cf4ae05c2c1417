//! Timed animation records.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::matrix::{ColorTransform, TransformMatrix};

/// One frame of a sprite animation layer.
///
/// `transform` and `color` are `None` exactly when `visible` is false (an
/// empty keyframe); they are never partially absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationFrame {
    /// Whether the referenced sprite is drawn during this frame
    pub visible: bool,
    /// Timeline position where this frame starts
    pub frame_index: u32,
    /// Number of timeline positions this frame spans
    pub frame_duration: u32,
    /// Placement transform, absent on invisible frames
    pub transform: Option<TransformMatrix>,
    /// Color multiplier, absent on invisible frames
    pub color: Option<ColorTransform>,
}

impl AnimationFrame {
    /// An empty keyframe: nothing drawn, no transform or color.
    pub fn invisible(frame_index: u32, frame_duration: u32) -> Self {
        Self { visible: false, frame_index, frame_duration, transform: None, color: None }
    }

    /// A placed keyframe carrying both records.
    pub fn visible(
        frame_index: u32,
        frame_duration: u32,
        transform: TransformMatrix,
        color: ColorTransform,
    ) -> Self {
        Self {
            visible: true,
            frame_index,
            frame_duration,
            transform: Some(transform),
            color: Some(color),
        }
    }
}

/// Frames grouped by layer index, then by the sprite that layer references.
///
/// Each layer references at most one sprite across its lifetime, resolved
/// once from the first non-empty frame.
pub type LayerAnimations = BTreeMap<u32, BTreeMap<String, Vec<AnimationFrame>>>;

/// All animations keyed by animation name.
pub type SpriteAnimationMap = BTreeMap<String, LayerAnimations>;

/// Total timeline span of a frame sequence.
///
/// An animation's true span is `frame_index + frame_duration` of its last
/// frame; it is derived, never stored.
pub fn total_duration(frames: &[AnimationFrame]) -> u32 {
    frames.last().map(|f| f.frame_index + f.frame_duration).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invisible_frame_has_no_records() {
        let frame = AnimationFrame::invisible(0, 5);
        assert!(!frame.visible);
        assert!(frame.transform.is_none());
        assert!(frame.color.is_none());

        // Invisible frames serialize with explicit nulls, not omitted fields
        let value = serde_json::to_value(&frame).unwrap();
        assert!(value["transform"].is_null());
        assert!(value["color"].is_null());
    }

    #[test]
    fn test_visible_frame_has_both_records() {
        let frame =
            AnimationFrame::visible(5, 10, TransformMatrix::identity(), ColorTransform::Default);
        assert!(frame.visible);
        assert!(frame.transform.is_some());
        assert!(frame.color.is_some());
    }

    #[test]
    fn test_total_duration_from_last_frame() {
        let frames = vec![
            AnimationFrame::invisible(0, 5),
            AnimationFrame::visible(5, 10, TransformMatrix::identity(), ColorTransform::Default),
            AnimationFrame::visible(15, 5, TransformMatrix::identity(), ColorTransform::Default),
        ];
        assert_eq!(total_duration(&frames), 20);
        assert_eq!(total_duration(&[]), 0);
    }
}
