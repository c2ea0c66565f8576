//! Armatures: a host skeleton bound to humanoid bones.
//!
//! An armature lists, per encoded bone, the host joint it drives (if the
//! skeleton has one), the humanoid bone it stands for, and the axis
//! correction needed to go from the encoding's muscle frame to the joint's
//! native orientation.

use glam::{Quat, Vec3};

use crate::bone::HumanBone;
use crate::error::{MotionError, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Opaque handle to a joint of the host skeleton.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct JointId(pub usize);

/// Axis correction for one bone.
///
/// A joint rotation is reconstructed as `pre_q * R(sign * muscle) * post_q⁻¹`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoneAxes {
    /// Per-axis sign applied to muscle angles, each component ±1.
    pub sign: Vec3,
    /// Rotation from the parent's native frame into the muscle frame.
    pub pre_q: Quat,
    /// Rotation from the joint's native frame into the muscle frame.
    pub post_q: Quat,
}

impl Default for BoneAxes {
    fn default() -> Self {
        Self::identity()
    }
}

impl BoneAxes {
    /// No correction: positive signs and identity rotations.
    #[must_use]
    pub const fn identity() -> Self {
        Self {
            sign: Vec3::ONE,
            pre_q: Quat::IDENTITY,
            post_q: Quat::IDENTITY,
        }
    }

    /// Creates an axis correction.
    #[must_use]
    pub const fn new(sign: Vec3, pre_q: Quat, post_q: Quat) -> Self {
        Self {
            sign,
            pre_q,
            post_q,
        }
    }

    #[allow(clippy::float_cmp)]
    fn has_unit_signs(&self) -> bool {
        self.sign.to_array().iter().all(|s| s.abs() == 1.0)
    }
}

/// One encoded bone of an armature.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ArmatureBone {
    /// Host joint, or `None` when the skeleton lacks this bone.
    pub joint: Option<JointId>,
    /// Humanoid bone this entry stands for.
    pub human_bone: HumanBone,
    /// Axis correction.
    pub axes: BoneAxes,
}

impl ArmatureBone {
    /// Creates a bone bound to a host joint.
    #[must_use]
    pub const fn new(joint: JointId, human_bone: HumanBone, axes: BoneAxes) -> Self {
        Self {
            joint: Some(joint),
            human_bone,
            axes,
        }
    }

    /// Creates a bone the host skeleton does not have.
    #[must_use]
    pub const fn missing(human_bone: HumanBone) -> Self {
        Self {
            joint: None,
            human_bone,
            axes: BoneAxes::identity(),
        }
    }
}

/// A host skeleton bound to the encoding.
///
/// Exactly one bone is the root ([`HumanBone::Hips`]).
///
/// # Example
///
/// ```
/// use motion_types::{Armature, ArmatureBone, BoneAxes, HumanBone, JointId};
///
/// let armature = Armature::new(
///     vec![
///         ArmatureBone::new(JointId(0), HumanBone::Hips, BoneAxes::identity()),
///         ArmatureBone::missing(HumanBone::Spine),
///     ],
///     1.0,
/// )
/// .unwrap();
/// assert_eq!(armature.root_index(), 0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Armature {
    bones: Vec<ArmatureBone>,
    scale: f32,
    root: usize,
}

impl Armature {
    /// Binds a list of bones with a root scale factor.
    ///
    /// # Errors
    ///
    /// Returns [`MotionError::InvalidArmature`] unless exactly one bone is the
    /// hips, `scale` is finite and positive, and every sign component is ±1.
    pub fn new(bones: Vec<ArmatureBone>, scale: f32) -> Result<Self> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(MotionError::invalid_armature(format!(
                "scale must be positive and finite, got {scale}"
            )));
        }

        let mut roots = bones
            .iter()
            .enumerate()
            .filter(|(_, b)| b.human_bone.is_root())
            .map(|(i, _)| i);
        let root = match (roots.next(), roots.next()) {
            (Some(root), None) => root,
            (None, _) => return Err(MotionError::invalid_armature("no hips bone")),
            (Some(_), Some(_)) => {
                return Err(MotionError::invalid_armature("more than one hips bone"));
            }
        };

        if let Some((i, bone)) = bones
            .iter()
            .enumerate()
            .find(|(_, b)| !b.axes.has_unit_signs())
        {
            return Err(MotionError::invalid_armature(format!(
                "bone {i} ({}) has non-unit sign {}",
                bone.human_bone, bone.axes.sign
            )));
        }

        Ok(Self { bones, scale, root })
    }

    /// Bones in encoding order.
    #[must_use]
    pub fn bones(&self) -> &[ArmatureBone] {
        &self.bones
    }

    /// Number of encoded bones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bones.len()
    }

    /// Returns true if the armature has no bones. Never true once validated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bones.is_empty()
    }

    /// Index of the hips bone.
    #[must_use]
    pub const fn root_index(&self) -> usize {
        self.root
    }

    /// Uniform scale applied to decoded root translation.
    #[must_use]
    pub const fn scale(&self) -> f32 {
        self.scale
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn bone(joint: usize, human_bone: HumanBone) -> ArmatureBone {
        ArmatureBone::new(JointId(joint), human_bone, BoneAxes::identity())
    }

    #[test]
    fn finds_root() {
        let armature = Armature::new(
            vec![bone(0, HumanBone::Spine), bone(1, HumanBone::Hips)],
            0.5,
        )
        .unwrap();
        assert_eq!(armature.root_index(), 1);
        assert_eq!(armature.len(), 2);
        assert!((armature.scale() - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn rejects_missing_root() {
        let err = Armature::new(vec![bone(0, HumanBone::Spine)], 1.0).unwrap_err();
        assert!(err.to_string().contains("no hips"));
    }

    #[test]
    fn rejects_duplicate_root() {
        let err = Armature::new(
            vec![bone(0, HumanBone::Hips), ArmatureBone::missing(HumanBone::Hips)],
            1.0,
        )
        .unwrap_err();
        assert!(err.to_string().contains("more than one"));
    }

    #[test]
    fn rejects_bad_scale() {
        assert!(Armature::new(vec![bone(0, HumanBone::Hips)], 0.0).is_err());
        assert!(Armature::new(vec![bone(0, HumanBone::Hips)], f32::NAN).is_err());
    }

    #[test]
    fn rejects_non_unit_sign() {
        let mut hips = bone(0, HumanBone::Hips);
        hips.axes.sign = Vec3::new(1.0, 0.5, -1.0);
        assert!(Armature::new(vec![hips], 1.0).is_err());
    }

    #[test]
    fn mirrored_signs_accepted() {
        let mut arm = bone(1, HumanBone::LeftUpperArm);
        arm.axes.sign = Vec3::new(-1.0, 1.0, -1.0);
        assert!(Armature::new(vec![bone(0, HumanBone::Hips), arm], 1.0).is_ok());
    }

    #[test]
    fn missing_bone_has_no_joint() {
        let b = ArmatureBone::missing(HumanBone::Jaw);
        assert_eq!(b.joint, None);
        assert_eq!(b.axes, BoneAxes::default());
    }
}
