//! Standard humanoid bones and their fixed hierarchy.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of standard humanoid bones.
pub const BONE_COUNT: usize = 55;

/// A bone of the standard humanoid skeleton.
///
/// Discriminants follow the standard bone order, so `bone as usize` is the
/// row index into per-bone tables. [`HumanBone::Hips`] is the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
#[allow(missing_docs)]
pub enum HumanBone {
    Hips = 0,
    LeftUpperLeg,
    RightUpperLeg,
    LeftLowerLeg,
    RightLowerLeg,
    LeftFoot,
    RightFoot,
    Spine,
    Chest,
    Neck,
    Head,
    LeftShoulder,
    RightShoulder,
    LeftUpperArm,
    RightUpperArm,
    LeftLowerArm,
    RightLowerArm,
    LeftHand,
    RightHand,
    LeftToes,
    RightToes,
    LeftEye,
    RightEye,
    Jaw,
    LeftThumbProximal,
    LeftThumbIntermediate,
    LeftThumbDistal,
    LeftIndexProximal,
    LeftIndexIntermediate,
    LeftIndexDistal,
    LeftMiddleProximal,
    LeftMiddleIntermediate,
    LeftMiddleDistal,
    LeftRingProximal,
    LeftRingIntermediate,
    LeftRingDistal,
    LeftLittleProximal,
    LeftLittleIntermediate,
    LeftLittleDistal,
    RightThumbProximal,
    RightThumbIntermediate,
    RightThumbDistal,
    RightIndexProximal,
    RightIndexIntermediate,
    RightIndexDistal,
    RightMiddleProximal,
    RightMiddleIntermediate,
    RightMiddleDistal,
    RightRingProximal,
    RightRingIntermediate,
    RightRingDistal,
    RightLittleProximal,
    RightLittleIntermediate,
    RightLittleDistal,
    UpperChest,
}

impl HumanBone {
    /// Every bone, in standard order.
    pub const ALL: [Self; BONE_COUNT] = [
        Self::Hips,
        Self::LeftUpperLeg,
        Self::RightUpperLeg,
        Self::LeftLowerLeg,
        Self::RightLowerLeg,
        Self::LeftFoot,
        Self::RightFoot,
        Self::Spine,
        Self::Chest,
        Self::Neck,
        Self::Head,
        Self::LeftShoulder,
        Self::RightShoulder,
        Self::LeftUpperArm,
        Self::RightUpperArm,
        Self::LeftLowerArm,
        Self::RightLowerArm,
        Self::LeftHand,
        Self::RightHand,
        Self::LeftToes,
        Self::RightToes,
        Self::LeftEye,
        Self::RightEye,
        Self::Jaw,
        Self::LeftThumbProximal,
        Self::LeftThumbIntermediate,
        Self::LeftThumbDistal,
        Self::LeftIndexProximal,
        Self::LeftIndexIntermediate,
        Self::LeftIndexDistal,
        Self::LeftMiddleProximal,
        Self::LeftMiddleIntermediate,
        Self::LeftMiddleDistal,
        Self::LeftRingProximal,
        Self::LeftRingIntermediate,
        Self::LeftRingDistal,
        Self::LeftLittleProximal,
        Self::LeftLittleIntermediate,
        Self::LeftLittleDistal,
        Self::RightThumbProximal,
        Self::RightThumbIntermediate,
        Self::RightThumbDistal,
        Self::RightIndexProximal,
        Self::RightIndexIntermediate,
        Self::RightIndexDistal,
        Self::RightMiddleProximal,
        Self::RightMiddleIntermediate,
        Self::RightMiddleDistal,
        Self::RightRingProximal,
        Self::RightRingIntermediate,
        Self::RightRingDistal,
        Self::RightLittleProximal,
        Self::RightLittleIntermediate,
        Self::RightLittleDistal,
        Self::UpperChest,
    ];

    /// Row index of this bone in per-bone tables.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Looks up a bone by its standard index.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Returns true for the root bone.
    #[must_use]
    pub const fn is_root(self) -> bool {
        matches!(self, Self::Hips)
    }

    /// Parent bone in the humanoid hierarchy. The hips have none.
    ///
    /// # Example
    ///
    /// ```
    /// use motion_types::HumanBone;
    ///
    /// assert_eq!(HumanBone::LeftHand.parent(), Some(HumanBone::LeftLowerArm));
    /// assert_eq!(HumanBone::Hips.parent(), None);
    /// ```
    #[must_use]
    pub const fn parent(self) -> Option<Self> {
        use HumanBone::{
            Chest, Head, Hips, Jaw, LeftEye, LeftFoot, LeftHand, LeftIndexDistal,
            LeftIndexIntermediate, LeftIndexProximal, LeftLittleDistal, LeftLittleIntermediate,
            LeftLittleProximal, LeftLowerArm, LeftLowerLeg, LeftMiddleDistal,
            LeftMiddleIntermediate, LeftMiddleProximal, LeftRingDistal, LeftRingIntermediate,
            LeftRingProximal, LeftShoulder, LeftThumbDistal, LeftThumbIntermediate,
            LeftThumbProximal, LeftToes, LeftUpperArm, LeftUpperLeg, Neck, RightEye, RightFoot,
            RightHand, RightIndexDistal, RightIndexIntermediate, RightIndexProximal,
            RightLittleDistal, RightLittleIntermediate, RightLittleProximal, RightLowerArm,
            RightLowerLeg, RightMiddleDistal, RightMiddleIntermediate, RightMiddleProximal,
            RightRingDistal, RightRingIntermediate, RightRingProximal, RightShoulder,
            RightThumbDistal, RightThumbIntermediate, RightThumbProximal, RightToes,
            RightUpperArm, RightUpperLeg, Spine, UpperChest,
        };

        let parent = match self {
            Hips => return None,
            LeftUpperLeg | RightUpperLeg | Spine => Hips,
            LeftLowerLeg => LeftUpperLeg,
            RightLowerLeg => RightUpperLeg,
            LeftFoot => LeftLowerLeg,
            RightFoot => RightLowerLeg,
            LeftToes => LeftFoot,
            RightToes => RightFoot,
            Chest => Spine,
            UpperChest => Chest,
            Neck | LeftShoulder | RightShoulder => UpperChest,
            Head => Neck,
            LeftEye | RightEye | Jaw => Head,
            LeftUpperArm => LeftShoulder,
            RightUpperArm => RightShoulder,
            LeftLowerArm => LeftUpperArm,
            RightLowerArm => RightUpperArm,
            LeftHand => LeftLowerArm,
            RightHand => RightLowerArm,
            LeftThumbProximal | LeftIndexProximal | LeftMiddleProximal | LeftRingProximal
            | LeftLittleProximal => LeftHand,
            RightThumbProximal | RightIndexProximal | RightMiddleProximal | RightRingProximal
            | RightLittleProximal => RightHand,
            LeftThumbIntermediate => LeftThumbProximal,
            LeftThumbDistal => LeftThumbIntermediate,
            LeftIndexIntermediate => LeftIndexProximal,
            LeftIndexDistal => LeftIndexIntermediate,
            LeftMiddleIntermediate => LeftMiddleProximal,
            LeftMiddleDistal => LeftMiddleIntermediate,
            LeftRingIntermediate => LeftRingProximal,
            LeftRingDistal => LeftRingIntermediate,
            LeftLittleIntermediate => LeftLittleProximal,
            LeftLittleDistal => LeftLittleIntermediate,
            RightThumbIntermediate => RightThumbProximal,
            RightThumbDistal => RightThumbIntermediate,
            RightIndexIntermediate => RightIndexProximal,
            RightIndexDistal => RightIndexIntermediate,
            RightMiddleIntermediate => RightMiddleProximal,
            RightMiddleDistal => RightMiddleIntermediate,
            RightRingIntermediate => RightRingProximal,
            RightRingDistal => RightRingIntermediate,
            RightLittleIntermediate => RightLittleProximal,
            RightLittleDistal => RightLittleIntermediate,
        };
        Some(parent)
    }

    /// Standard display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        BONE_NAMES[self as usize]
    }
}

impl std::fmt::Display for HumanBone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

const BONE_NAMES: [&str; BONE_COUNT] = [
    "Hips",
    "LeftUpperLeg",
    "RightUpperLeg",
    "LeftLowerLeg",
    "RightLowerLeg",
    "LeftFoot",
    "RightFoot",
    "Spine",
    "Chest",
    "Neck",
    "Head",
    "LeftShoulder",
    "RightShoulder",
    "LeftUpperArm",
    "RightUpperArm",
    "LeftLowerArm",
    "RightLowerArm",
    "LeftHand",
    "RightHand",
    "LeftToes",
    "RightToes",
    "LeftEye",
    "RightEye",
    "Jaw",
    "Left Thumb Proximal",
    "Left Thumb Intermediate",
    "Left Thumb Distal",
    "Left Index Proximal",
    "Left Index Intermediate",
    "Left Index Distal",
    "Left Middle Proximal",
    "Left Middle Intermediate",
    "Left Middle Distal",
    "Left Ring Proximal",
    "Left Ring Intermediate",
    "Left Ring Distal",
    "Left Little Proximal",
    "Left Little Intermediate",
    "Left Little Distal",
    "Right Thumb Proximal",
    "Right Thumb Intermediate",
    "Right Thumb Distal",
    "Right Index Proximal",
    "Right Index Intermediate",
    "Right Index Distal",
    "Right Middle Proximal",
    "Right Middle Intermediate",
    "Right Middle Distal",
    "Right Ring Proximal",
    "Right Ring Intermediate",
    "Right Ring Distal",
    "Right Little Proximal",
    "Right Little Intermediate",
    "Right Little Distal",
    "UpperChest",
];
