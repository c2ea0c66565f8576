//! Canonical pose construction for pose-driven animation systems.
//!
//! Raw per-bone muscle angles are summed into the standard muscle channels
//! through the bone-muscle map, then normalised by each channel's limits.

use motion_types::{
    Armature, BoneMuscleMap, DecodedFrame, HumanPose, MUSCLE_COUNT, MuscleLimit, Result,
};

/// External animation system that accepts canonical poses.
pub trait PoseSink {
    /// Drives the host skeleton from a canonical pose.
    ///
    /// # Errors
    ///
    /// Implementations may return
    /// [`MotionError::PoseLengthMismatch`](motion_types::MotionError::PoseLengthMismatch)
    /// when the muscle vector does not match their skeleton.
    fn set_human_pose(&mut self, pose: &HumanPose) -> Result<()>;
}

/// Builds the canonical pose for one decoded frame.
///
/// # Example
///
/// ```
/// use motion_player::to_canonical_pose;
/// use motion_types::{
///     Armature, ArmatureBone, BoneAxes, DecodedFrame, HumanBone, JointId, bone_muscle_map,
///     muscle_from_bone, muscle_limits,
/// };
///
/// let armature = Armature::new(
///     vec![
///         ArmatureBone::new(JointId(0), HumanBone::Hips, BoneAxes::identity()),
///         ArmatureBone::new(JointId(1), HumanBone::Spine, BoneAxes::identity()),
///     ],
///     1.0,
/// )
/// .unwrap();
/// let mut frame = DecodedFrame::new(2, 0);
/// frame.muscles[1].z = 20.0;
///
/// let pose = to_canonical_pose(&frame, &armature, bone_muscle_map(), muscle_limits());
/// let front_back = muscle_from_bone(HumanBone::Spine, 2).unwrap();
/// assert_eq!(pose.muscles[front_back], 0.5);
/// ```
#[must_use]
pub fn to_canonical_pose(
    frame: &DecodedFrame,
    armature: &Armature,
    map: &BoneMuscleMap,
    limits: &[MuscleLimit; MUSCLE_COUNT],
) -> HumanPose {
    let mut pose = HumanPose::default();
    fill_canonical_pose(&mut pose, frame, armature, map, limits);
    pose
}

/// Builds the canonical pose into an existing buffer.
///
/// The muscle vector is resized to [`MUSCLE_COUNT`] and fully overwritten.
pub fn fill_canonical_pose(
    pose: &mut HumanPose,
    frame: &DecodedFrame,
    armature: &Armature,
    map: &BoneMuscleMap,
    limits: &[MuscleLimit; MUSCLE_COUNT],
) {
    pose.body_position = frame.root_translation;
    pose.body_rotation = frame.root_rotation;

    pose.muscles.clear();
    pose.muscles.resize(MUSCLE_COUNT, 0.0);

    for (bone, muscle) in armature.bones().iter().zip(&frame.muscles) {
        for axis in 0..3 {
            if let Some(channel) = map.get(bone.human_bone, axis) {
                pose.muscles[channel] += muscle[axis];
            }
        }
    }

    for (value, limit) in pose.muscles.iter_mut().zip(limits) {
        *value = limit.normalize(*value);
    }
}

/// Builds the canonical pose and hands it to `sink`.
///
/// # Errors
///
/// Propagates any error returned by the sink.
pub fn normalize_pose<P: PoseSink + ?Sized>(
    frame: &DecodedFrame,
    armature: &Armature,
    map: &BoneMuscleMap,
    limits: &[MuscleLimit; MUSCLE_COUNT],
    sink: &mut P,
) -> Result<()> {
    let pose = to_canonical_pose(frame, armature, map, limits);
    sink.set_human_pose(&pose)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::{Quat, Vec3};
    use motion_types::{
        ArmatureBone, BoneAxes, HumanBone, JointId, MotionError, bone_muscle_map,
        muscle_from_bone, muscle_limits,
    };

    fn armature(bones: &[HumanBone]) -> Armature {
        let bones = bones
            .iter()
            .enumerate()
            .map(|(i, &b)| ArmatureBone::new(JointId(i), b, BoneAxes::identity()))
            .collect();
        Armature::new(bones, 1.0).unwrap()
    }

    fn custom_limits(channel: usize, limit: MuscleLimit) -> [MuscleLimit; MUSCLE_COUNT] {
        let mut limits = *muscle_limits();
        limits[channel] = limit;
        limits
    }

    #[test]
    fn root_copied_from_frame() {
        let armature = armature(&[HumanBone::Hips]);
        let mut frame = DecodedFrame::new(1, 0);
        frame.root_translation = Vec3::new(1.0, 2.0, 3.0);
        frame.root_rotation = Quat::from_rotation_y(1.0);

        let pose = to_canonical_pose(&frame, &armature, bone_muscle_map(), muscle_limits());
        assert_eq!(pose.body_position, frame.root_translation);
        assert_eq!(pose.body_rotation, frame.root_rotation);
        assert!(pose.muscles.iter().all(|&m| m == 0.0));
    }

    #[test]
    fn normalization_law() {
        let channel = muscle_from_bone(HumanBone::Chest, 2).unwrap();
        let limits = custom_limits(channel, MuscleLimit::new(-1.0, 2.0));
        let armature = armature(&[HumanBone::Hips, HumanBone::Chest]);
        let mut frame = DecodedFrame::new(2, 0);

        frame.muscles[1].z = 1.0;
        let pose = to_canonical_pose(&frame, &armature, bone_muscle_map(), &limits);
        assert_relative_eq!(pose.muscles[channel], 0.5);

        frame.muscles[1].z = -0.5;
        let pose = to_canonical_pose(&frame, &armature, bone_muscle_map(), &limits);
        assert_relative_eq!(pose.muscles[channel], 0.5);
    }

    #[test]
    fn fallback_channels_accumulate() {
        // Shoulder twist falls back to the upper arm twist and sums with it.
        let twist = muscle_from_bone(HumanBone::LeftUpperArm, 0).unwrap();
        let limits = custom_limits(twist, MuscleLimit::new(-100.0, 100.0));
        let armature = armature(&[HumanBone::Hips, HumanBone::LeftShoulder, HumanBone::LeftUpperArm]);
        let mut frame = DecodedFrame::new(3, 0);
        frame.muscles[1].x = 20.0;
        frame.muscles[2].x = 30.0;

        let pose = to_canonical_pose(&frame, &armature, bone_muscle_map(), &limits);
        assert_relative_eq!(pose.muscles[twist], 0.5);
    }

    #[test]
    fn unmapped_axes_are_dropped() {
        let armature = armature(&[HumanBone::Hips, HumanBone::Jaw]);
        let mut frame = DecodedFrame::new(2, 0);
        frame.muscles[0] = Vec3::splat(45.0);
        frame.muscles[1].x = 45.0;

        let pose = to_canonical_pose(&frame, &armature, bone_muscle_map(), muscle_limits());
        assert!(pose.muscles.iter().all(|&m| m == 0.0));
    }

    #[test]
    fn fill_reuses_and_resizes_buffer() {
        let armature = armature(&[HumanBone::Hips]);
        let frame = DecodedFrame::new(1, 0);
        let mut pose = HumanPose {
            muscles: vec![7.0; 3],
            ..HumanPose::default()
        };
        fill_canonical_pose(&mut pose, &frame, &armature, bone_muscle_map(), muscle_limits());
        assert!(pose.is_complete());
        assert!(pose.muscles.iter().all(|&m| m == 0.0));
    }

    struct FixedSink {
        expected: usize,
        received: Vec<HumanPose>,
    }

    impl PoseSink for FixedSink {
        fn set_human_pose(&mut self, pose: &HumanPose) -> Result<()> {
            if pose.muscles.len() != self.expected {
                return Err(MotionError::pose_length_mismatch(
                    self.expected,
                    pose.muscles.len(),
                ));
            }
            self.received.push(pose.clone());
            Ok(())
        }
    }

    #[test]
    fn sink_receives_pose() {
        let armature = armature(&[HumanBone::Hips]);
        let frame = DecodedFrame::new(1, 0);
        let mut sink = FixedSink {
            expected: MUSCLE_COUNT,
            received: Vec::new(),
        };
        normalize_pose(&frame, &armature, bone_muscle_map(), muscle_limits(), &mut sink).unwrap();
        assert_eq!(sink.received.len(), 1);
    }

    #[test]
    fn sink_failure_propagates() {
        let armature = armature(&[HumanBone::Hips]);
        let frame = DecodedFrame::new(1, 0);
        let mut sink = FixedSink {
            expected: 90,
            received: Vec::new(),
        };
        let err =
            normalize_pose(&frame, &armature, bone_muscle_map(), muscle_limits(), &mut sink)
                .unwrap_err();
        assert_eq!(err, MotionError::pose_length_mismatch(90, MUSCLE_COUNT));
    }
}
