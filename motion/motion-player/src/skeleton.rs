//! Applying decoded frames to a host skeleton.

use glam::{Quat, Vec3};
use motion_types::{Armature, DecodedFrame, JointId};
use tracing::trace;

use crate::rotation::{RigTransform, muscle_to_rotation};

/// Host skeleton the player writes joint transforms into.
pub trait SkeletonSink {
    /// Current world transform of the rig root.
    fn root_transform(&self) -> RigTransform;

    /// Sets a joint's rotation relative to its parent.
    fn set_local_rotation(&mut self, joint: JointId, rotation: Quat);

    /// Sets a joint's world position and rotation.
    fn set_world_position_and_rotation(&mut self, joint: JointId, position: Vec3, rotation: Quat);
}

/// Writes one decoded frame into the skeleton.
///
/// The hips are placed in world space relative to the rig root; every other
/// joint gets a local rotation rebuilt from its muscles and axis correction.
/// Bones without a host joint are skipped.
pub fn apply_skeleton<S: SkeletonSink + ?Sized>(
    frame: &DecodedFrame,
    armature: &Armature,
    sink: &mut S,
) {
    let root = sink.root_transform();

    for (i, (bone, muscle)) in armature.bones().iter().zip(&frame.muscles).enumerate() {
        let Some(joint) = bone.joint else {
            trace!(bone = %bone.human_bone, "No joint bound, skipping");
            continue;
        };
        let axes = &bone.axes;

        if i == armature.root_index() {
            let position = root.transform_point(frame.root_translation * armature.scale());
            let rotation = root.rotation * frame.root_rotation * axes.post_q.inverse();
            sink.set_world_position_and_rotation(joint, position, rotation);
        } else {
            let rotation =
                axes.pre_q * muscle_to_rotation(axes.sign * *muscle) * axes.post_q.inverse();
            sink.set_local_rotation(joint, rotation);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use motion_types::{ArmatureBone, BoneAxes, HumanBone};
    use std::collections::HashMap;
    use std::f32::consts::FRAC_PI_2;

    #[derive(Default)]
    struct RecordingSkeleton {
        root: RigTransform,
        local: HashMap<JointId, Quat>,
        world: HashMap<JointId, (Vec3, Quat)>,
    }

    impl SkeletonSink for RecordingSkeleton {
        fn root_transform(&self) -> RigTransform {
            self.root
        }

        fn set_local_rotation(&mut self, joint: JointId, rotation: Quat) {
            self.local.insert(joint, rotation);
        }

        fn set_world_position_and_rotation(
            &mut self,
            joint: JointId,
            position: Vec3,
            rotation: Quat,
        ) {
            self.world.insert(joint, (position, rotation));
        }
    }

    fn armature(bones: Vec<ArmatureBone>, scale: f32) -> Armature {
        Armature::new(bones, scale).unwrap()
    }

    #[test]
    fn root_placed_relative_to_rig() {
        let armature = armature(
            vec![ArmatureBone::new(JointId(7), HumanBone::Hips, BoneAxes::identity())],
            0.5,
        );
        let mut frame = DecodedFrame::new(1, 0);
        frame.root_translation = Vec3::new(2.0, 2.0, 0.0);
        frame.root_rotation = Quat::from_rotation_y(FRAC_PI_2);

        let mut sink = RecordingSkeleton {
            root: RigTransform::from_translation(Vec3::new(0.0, 0.0, 10.0)),
            ..Default::default()
        };
        apply_skeleton(&frame, &armature, &mut sink);

        let (position, rotation) = sink.world[&JointId(7)];
        assert!(position.abs_diff_eq(Vec3::new(1.0, 1.0, 10.0), 1e-6));
        assert!(rotation.abs_diff_eq(Quat::from_rotation_y(FRAC_PI_2), 1e-6));
        assert!(sink.local.is_empty());
    }

    #[test]
    fn root_rotation_removes_post_rotation() {
        let post_q = Quat::from_rotation_x(0.3);
        let armature = armature(
            vec![ArmatureBone::new(
                JointId(0),
                HumanBone::Hips,
                BoneAxes::new(Vec3::ONE, Quat::IDENTITY, post_q),
            )],
            1.0,
        );
        let frame = DecodedFrame::new(1, 0);
        let mut sink = RecordingSkeleton {
            root: RigTransform::from_rotation(Quat::from_rotation_z(0.2)),
            ..Default::default()
        };
        apply_skeleton(&frame, &armature, &mut sink);

        let (_, rotation) = sink.world[&JointId(0)];
        let expected = Quat::from_rotation_z(0.2) * post_q.inverse();
        assert!(rotation.abs_diff_eq(expected, 1e-6));
    }

    #[test]
    fn child_uses_signed_muscles_and_axes() {
        let pre_q = Quat::from_rotation_y(0.4);
        let post_q = Quat::from_rotation_z(-0.1);
        let armature = armature(
            vec![
                ArmatureBone::new(JointId(0), HumanBone::Hips, BoneAxes::identity()),
                ArmatureBone::new(
                    JointId(1),
                    HumanBone::LeftUpperArm,
                    BoneAxes::new(Vec3::new(-1.0, 1.0, -1.0), pre_q, post_q),
                ),
            ],
            1.0,
        );
        let mut frame = DecodedFrame::new(2, 0);
        frame.muscles[1] = Vec3::new(30.0, 10.0, 20.0);

        let mut sink = RecordingSkeleton::default();
        apply_skeleton(&frame, &armature, &mut sink);

        let expected =
            pre_q * muscle_to_rotation(Vec3::new(-30.0, 10.0, -20.0)) * post_q.inverse();
        assert!(sink.local[&JointId(1)].abs_diff_eq(expected, 1e-6));
    }

    #[test]
    fn missing_joints_are_skipped() {
        let armature = armature(
            vec![
                ArmatureBone::missing(HumanBone::Hips),
                ArmatureBone::missing(HumanBone::Spine),
                ArmatureBone::new(JointId(2), HumanBone::Chest, BoneAxes::identity()),
            ],
            1.0,
        );
        let frame = DecodedFrame::new(3, 0);
        let mut sink = RecordingSkeleton::default();
        apply_skeleton(&frame, &armature, &mut sink);

        assert!(sink.world.is_empty());
        assert_eq!(sink.local.len(), 1);
        assert!(sink.local[&JointId(2)].abs_diff_eq(Quat::IDENTITY, 1e-6));
    }
}
