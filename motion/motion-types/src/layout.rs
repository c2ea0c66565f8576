//! Frame layouts: which grid slots carry which channels.
//!
//! Each bone owns a run of consecutive slots starting at its base index,
//! one slot per channel it lists. Channel semantics are fixed by index:
//!
//! | Channels | Meaning                                   |
//! |----------|-------------------------------------------|
//! | 0–2      | muscle axes x, y, z                       |
//! | 3–5      | reserved high-precision axes (skipped)    |
//! | 6–8      | root translation x, y, z                  |
//! | 9–11     | root up-axis components                   |
//! | 12–14    | root forward-axis components              |
//!
//! Blend shapes are addressed separately by [`ShapeChannel`].

use crate::error::{MotionError, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Highest valid channel index.
pub const MAX_CHANNEL: u8 = 14;

/// Decoded meaning of a channel index. The payload is the axis (0..3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelKind {
    /// Muscle angle on one bone axis.
    Muscle(usize),
    /// High-precision muscle extension. Not implemented; always skipped.
    Reserved(usize),
    /// Root translation component.
    RootTranslation(usize),
    /// Root up-vector component.
    RootUp(usize),
    /// Root forward-vector component.
    RootForward(usize),
}

impl ChannelKind {
    /// Classifies a channel index, or `None` if it is above [`MAX_CHANNEL`].
    ///
    /// # Example
    ///
    /// ```
    /// use motion_types::ChannelKind;
    ///
    /// assert_eq!(ChannelKind::from_index(7), Some(ChannelKind::RootTranslation(1)));
    /// assert_eq!(ChannelKind::from_index(15), None);
    /// ```
    #[must_use]
    pub const fn from_index(channel: u8) -> Option<Self> {
        let axis = (channel % 3) as usize;
        match channel {
            0..=2 => Some(Self::Muscle(axis)),
            3..=5 => Some(Self::Reserved(axis)),
            6..=8 => Some(Self::RootTranslation(axis)),
            9..=11 => Some(Self::RootUp(axis)),
            12..=14 => Some(Self::RootForward(axis)),
            _ => None,
        }
    }
}

/// Slot assignment for one bone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoneSlots {
    /// First grid slot of this bone.
    pub base_index: usize,
    /// Channels present, in slot order.
    pub channels: Vec<u8>,
}

impl BoneSlots {
    /// Creates a slot assignment.
    #[must_use]
    pub fn new(base_index: usize, channels: Vec<u8>) -> Self {
        Self {
            base_index,
            channels,
        }
    }

    /// Iterates over `(slot, channel)` pairs.
    pub fn slots(&self) -> impl Iterator<Item = (usize, u8)> + '_ {
        self.channels
            .iter()
            .enumerate()
            .map(|(k, &channel)| (self.base_index + k, channel))
    }
}

/// A grid slot driving one named blend shape.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ShapeChannel {
    /// Blend shape name on the target mesh.
    pub shape: String,
    /// Grid slot holding the sample.
    pub index: usize,
    /// Multiplier applied to the sample.
    pub weight: f32,
}

impl ShapeChannel {
    /// Creates a shape channel.
    #[must_use]
    pub fn new(shape: impl Into<String>, index: usize, weight: f32) -> Self {
        Self {
            shape: shape.into(),
            index,
            weight,
        }
    }
}

/// The complete slot assignment of one encoding scheme.
///
/// # Example
///
/// ```
/// use motion_types::{BoneSlots, FrameLayout};
///
/// let layout = FrameLayout::new(vec![BoneSlots::new(0, vec![6, 7, 8, 9, 10, 11, 12, 13, 14])]);
/// assert!(layout.validate(40, 45, 1).is_ok());
/// assert!(layout.validate(2, 2, 1).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FrameLayout {
    /// Per-bone slots, indexed like the armature's bones.
    pub bones: Vec<BoneSlots>,
    /// Blend shape channels, in no particular order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub shapes: Vec<ShapeChannel>,
}

impl FrameLayout {
    /// Creates a layout without blend shapes.
    #[must_use]
    pub fn new(bones: Vec<BoneSlots>) -> Self {
        Self {
            bones,
            shapes: Vec::new(),
        }
    }

    /// Adds blend shape channels.
    #[must_use]
    pub fn with_shapes(mut self, shapes: Vec<ShapeChannel>) -> Self {
        self.shapes = shapes;
        self
    }

    /// Returns true if any blend shape channels are present.
    #[must_use]
    pub fn has_shapes(&self) -> bool {
        !self.shapes.is_empty()
    }

    /// Checks the layout against a grid size and bone count.
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer bone entries than `bone_count`,
    /// a channel index is above [`MAX_CHANNEL`], or any bone or shape slot
    /// falls outside a `width x height` grid.
    pub fn validate(&self, width: usize, height: usize, bone_count: usize) -> Result<()> {
        if self.bones.len() < bone_count {
            return Err(MotionError::LayoutBoneMismatch {
                layout: self.bones.len(),
                armature: bone_count,
            });
        }

        let capacity = width * height;
        for (bone, slots) in self.bones.iter().enumerate().take(bone_count) {
            for (slot, channel) in slots.slots() {
                if channel > MAX_CHANNEL {
                    return Err(MotionError::InvalidChannel { bone, channel });
                }
                if slot >= capacity {
                    return Err(MotionError::slot_out_of_range(
                        slot,
                        capacity,
                        format!("bone {bone} channel {channel}"),
                    ));
                }
            }
        }

        for shape in &self.shapes {
            if shape.index >= capacity {
                return Err(MotionError::slot_out_of_range(
                    shape.index,
                    capacity,
                    format!("shape {}", shape.shape),
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn channel_kinds() {
        assert_eq!(ChannelKind::from_index(0), Some(ChannelKind::Muscle(0)));
        assert_eq!(ChannelKind::from_index(2), Some(ChannelKind::Muscle(2)));
        assert_eq!(ChannelKind::from_index(4), Some(ChannelKind::Reserved(1)));
        assert_eq!(ChannelKind::from_index(9), Some(ChannelKind::RootUp(0)));
        assert_eq!(ChannelKind::from_index(14), Some(ChannelKind::RootForward(2)));
        assert_eq!(ChannelKind::from_index(200), None);
    }

    #[test]
    fn slots_are_consecutive() {
        let slots = BoneSlots::new(10, vec![0, 2, 7]);
        let pairs: Vec<_> = slots.slots().collect();
        assert_eq!(pairs, vec![(10, 0), (11, 2), (12, 7)]);
    }

    #[test]
    fn validate_accepts_in_range() {
        let layout = FrameLayout::new(vec![BoneSlots::new(0, vec![0, 1, 2]), BoneSlots::new(3, vec![0])])
            .with_shapes(vec![ShapeChannel::new("blink", 5, 1.0)]);
        assert!(layout.validate(2, 3, 2).is_ok());
        assert!(layout.has_shapes());
    }

    #[test]
    fn validate_rejects_bad_channel() {
        let layout = FrameLayout::new(vec![BoneSlots::new(0, vec![0, 15])]);
        assert_eq!(
            layout.validate(40, 45, 1),
            Err(MotionError::InvalidChannel {
                bone: 0,
                channel: 15
            })
        );
    }

    #[test]
    fn validate_rejects_last_slot_overflow() {
        // Base fits, but the third channel spills past the grid.
        let layout = FrameLayout::new(vec![BoneSlots::new(2, vec![0, 1, 2])]);
        let err = layout.validate(2, 2, 1).unwrap_err();
        assert!(matches!(err, MotionError::SlotOutOfRange { slot: 4, .. }));
    }

    #[test]
    fn validate_rejects_shape_overflow() {
        let layout = FrameLayout::default().with_shapes(vec![ShapeChannel::new("smile", 4, 1.0)]);
        assert!(matches!(
            layout.validate(2, 2, 0),
            Err(MotionError::SlotOutOfRange { slot: 4, .. })
        ));
    }

    #[test]
    fn validate_rejects_short_layout() {
        let layout = FrameLayout::new(vec![BoneSlots::default()]);
        assert_eq!(
            layout.validate(40, 45, 2),
            Err(MotionError::LayoutBoneMismatch {
                layout: 1,
                armature: 2
            })
        );
    }

    #[test]
    fn bones_without_channels_are_fine() {
        // A bone with an out-of-range base but no channels consumes nothing.
        let layout = FrameLayout::new(vec![BoneSlots::new(9999, Vec::new())]);
        assert!(layout.validate(2, 2, 1).is_ok());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn layout_json_round_trip() {
        let json = r#"{"bones":[{"base_index":0,"channels":[6,7,8]}],
            "shapes":[{"shape":"vrc.v_aa","index":3,"weight":0.5}]}"#;
        let layout: FrameLayout = serde_json::from_str(json).unwrap();
        assert_eq!(layout.bones[0].channels, vec![6, 7, 8]);
        assert_eq!(layout.shapes[0].shape, "vrc.v_aa");

        let text = serde_json::to_string(&layout).unwrap();
        let back: FrameLayout = serde_json::from_str(&text).unwrap();
        assert_eq!(back, layout);
    }
}
