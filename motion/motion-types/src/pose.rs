//! Decoded frames and canonical human poses.

use glam::{Quat, Vec3};

use crate::muscle::MUSCLE_COUNT;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Everything decoded from one sample grid.
///
/// Recomputed in full on every decode; nothing carries over between frames.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedFrame {
    /// Root orientation.
    pub root_rotation: Quat,
    /// Root translation in encoding units.
    pub root_translation: Vec3,
    /// Muscle angles in degrees, one `(x, y, z)` triple per armature bone.
    pub muscles: Vec<Vec3>,
    /// Raw sample of each layout shape channel, in layout order.
    pub shape_samples: Vec<f32>,
}

impl DecodedFrame {
    /// Creates a rest frame for `bone_count` bones and `shape_count` shape channels.
    ///
    /// The rest frame has identity rotation, the root one unit above the
    /// origin, and all muscles at zero.
    #[must_use]
    pub fn new(bone_count: usize, shape_count: usize) -> Self {
        Self {
            root_rotation: Quat::IDENTITY,
            root_translation: Vec3::Y,
            muscles: vec![Vec3::ZERO; bone_count],
            shape_samples: vec![0.0; shape_count],
        }
    }

    /// Number of bones in the frame.
    #[must_use]
    pub fn bone_count(&self) -> usize {
        self.muscles.len()
    }
}

/// Canonical humanoid pose: root transform plus normalised muscles.
///
/// Every entry of `muscles` is a channel of the humanoid standard; values in
/// `[-1, 1]` lie within the channel's default limits.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HumanPose {
    /// Body (hips) position.
    pub body_position: Vec3,
    /// Body (hips) orientation.
    pub body_rotation: Quat,
    /// Normalised muscle values, [`MUSCLE_COUNT`] entries.
    pub muscles: Vec<f32>,
}

impl Default for HumanPose {
    fn default() -> Self {
        Self {
            body_position: Vec3::ZERO,
            body_rotation: Quat::IDENTITY,
            muscles: vec![0.0; MUSCLE_COUNT],
        }
    }
}

impl HumanPose {
    /// Returns true if the muscle vector has the standard length.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.muscles.len() == MUSCLE_COUNT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rest_frame() {
        let frame = DecodedFrame::new(3, 2);
        assert_eq!(frame.bone_count(), 3);
        assert_eq!(frame.root_translation, Vec3::Y);
        assert_eq!(frame.root_rotation, Quat::IDENTITY);
        assert!(frame.muscles.iter().all(|m| *m == Vec3::ZERO));
        assert_eq!(frame.shape_samples.len(), 2);
    }

    #[test]
    fn default_pose_is_complete() {
        let pose = HumanPose::default();
        assert!(pose.is_complete());
        assert_eq!(pose.muscles.len(), MUSCLE_COUNT);
    }
}
