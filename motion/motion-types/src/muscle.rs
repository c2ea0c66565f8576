//! Canonical humanoid muscle channels.
//!
//! A muscle is one rotational degree of freedom of one bone. The standard
//! defines [`MUSCLE_COUNT`] of them in a fixed order, each with default
//! range limits in degrees. Per bone, axis 0 is the twist about the bone's
//! local x-axis and axes 1 and 2 are the y and z swing components.

use crate::bone::{BONE_COUNT, HumanBone};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of canonical muscle channels.
pub const MUSCLE_COUNT: usize = 95;

/// Default range of one muscle, in degrees.
///
/// `min` is negative and `max` positive for every standard channel, so a raw
/// angle can be normalised into `[-1, 1]` by dividing by `max` or `-min`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MuscleLimit {
    /// Lower bound in degrees.
    pub min: f32,
    /// Upper bound in degrees.
    pub max: f32,
}

impl MuscleLimit {
    /// Creates a limit from its bounds.
    #[must_use]
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Maps a raw angle onto the normalised `[-1, 1]` convention.
    ///
    /// Non-negative values are divided by `max`, negative values by `-min`.
    /// Values outside the range are not clamped.
    ///
    /// # Example
    ///
    /// ```
    /// use motion_types::MuscleLimit;
    ///
    /// let limit = MuscleLimit::new(-1.0, 2.0);
    /// assert_eq!(limit.normalize(1.0), 0.5);
    /// assert_eq!(limit.normalize(-0.5), 0.5);
    /// ```
    #[must_use]
    pub fn normalize(&self, value: f32) -> f32 {
        if value >= 0.0 {
            value / self.max
        } else {
            value / -self.min
        }
    }
}

/// Default limits of every canonical muscle.
#[must_use]
pub fn muscle_limits() -> &'static [MuscleLimit; MUSCLE_COUNT] {
    &MUSCLE_LIMITS
}

/// Display name of a muscle channel.
#[must_use]
pub fn muscle_name(muscle: usize) -> Option<&'static str> {
    MUSCLE_NAMES.get(muscle).copied()
}

/// Direct muscle lookup for one bone axis, without any fallback.
///
/// Returns `None` when the bone has no muscle on that axis or `axis > 2`.
///
/// # Example
///
/// ```
/// use motion_types::{HumanBone, muscle_from_bone, muscle_name};
///
/// let twist = muscle_from_bone(HumanBone::LeftUpperArm, 0);
/// assert_eq!(twist.and_then(muscle_name), Some("Left Arm Twist In-Out"));
/// assert_eq!(muscle_from_bone(HumanBone::LeftShoulder, 0), None);
/// ```
#[must_use]
pub fn muscle_from_bone(bone: HumanBone, axis: usize) -> Option<usize> {
    BONE_MUSCLES[bone.index()]
        .get(axis)
        .copied()
        .flatten()
        .map(usize::from)
}

const N: Option<u8> = None;

const fn m(index: u8) -> Option<u8> {
    Some(index)
}

/// Per bone: muscle on axis (twist x, swing y, swing z).
const BONE_MUSCLES: [[Option<u8>; 3]; BONE_COUNT] = [
    [N, N, N],             // Hips
    [m(23), m(22), m(21)], // LeftUpperLeg
    [m(31), m(30), m(29)], // RightUpperLeg
    [m(25), N, m(24)],     // LeftLowerLeg
    [m(33), N, m(32)],     // RightLowerLeg
    [N, m(27), m(26)],     // LeftFoot
    [N, m(35), m(34)],     // RightFoot
    [m(2), m(1), m(0)],    // Spine
    [m(5), m(4), m(3)],    // Chest
    [m(11), m(10), m(9)],  // Neck
    [m(14), m(13), m(12)], // Head
    [N, m(38), m(37)],     // LeftShoulder
    [N, m(47), m(46)],     // RightShoulder
    [m(41), m(40), m(39)], // LeftUpperArm
    [m(50), m(49), m(48)], // RightUpperArm
    [m(43), N, m(42)],     // LeftLowerArm
    [m(52), N, m(51)],     // RightLowerArm
    [N, m(45), m(44)],     // LeftHand
    [N, m(54), m(53)],     // RightHand
    [N, N, m(28)],         // LeftToes
    [N, N, m(36)],         // RightToes
    [N, m(16), m(15)],     // LeftEye
    [N, m(18), m(17)],     // RightEye
    [N, m(20), m(19)],     // Jaw
    [N, m(56), m(55)],     // LeftThumbProximal
    [N, N, m(57)],
    [N, N, m(58)],
    [N, m(60), m(59)], // LeftIndexProximal
    [N, N, m(61)],
    [N, N, m(62)],
    [N, m(64), m(63)], // LeftMiddleProximal
    [N, N, m(65)],
    [N, N, m(66)],
    [N, m(68), m(67)], // LeftRingProximal
    [N, N, m(69)],
    [N, N, m(70)],
    [N, m(72), m(71)], // LeftLittleProximal
    [N, N, m(73)],
    [N, N, m(74)],
    [N, m(76), m(75)], // RightThumbProximal
    [N, N, m(77)],
    [N, N, m(78)],
    [N, m(80), m(79)], // RightIndexProximal
    [N, N, m(81)],
    [N, N, m(82)],
    [N, m(84), m(83)], // RightMiddleProximal
    [N, N, m(85)],
    [N, N, m(86)],
    [N, m(88), m(87)], // RightRingProximal
    [N, N, m(89)],
    [N, N, m(90)],
    [N, m(92), m(91)], // RightLittleProximal
    [N, N, m(93)],
    [N, N, m(94)],
    [m(8), m(7), m(6)], // UpperChest
];

const MUSCLE_NAMES: [&str; MUSCLE_COUNT] = [
    "Spine Front-Back",
    "Spine Left-Right",
    "Spine Twist Left-Right",
    "Chest Front-Back",
    "Chest Left-Right",
    "Chest Twist Left-Right",
    "UpperChest Front-Back",
    "UpperChest Left-Right",
    "UpperChest Twist Left-Right",
    "Neck Nod Down-Up",
    "Neck Tilt Left-Right",
    "Neck Turn Left-Right",
    "Head Nod Down-Up",
    "Head Tilt Left-Right",
    "Head Turn Left-Right",
    "Left Eye Down-Up",
    "Left Eye In-Out",
    "Right Eye Down-Up",
    "Right Eye In-Out",
    "Jaw Close",
    "Jaw Left-Right",
    "Left Upper Leg Front-Back",
    "Left Upper Leg In-Out",
    "Left Upper Leg Twist In-Out",
    "Left Lower Leg Stretch",
    "Left Lower Leg Twist In-Out",
    "Left Foot Up-Down",
    "Left Foot Twist In-Out",
    "Left Toes Up-Down",
    "Right Upper Leg Front-Back",
    "Right Upper Leg In-Out",
    "Right Upper Leg Twist In-Out",
    "Right Lower Leg Stretch",
    "Right Lower Leg Twist In-Out",
    "Right Foot Up-Down",
    "Right Foot Twist In-Out",
    "Right Toes Up-Down",
    "Left Shoulder Down-Up",
    "Left Shoulder Front-Back",
    "Left Arm Down-Up",
    "Left Arm Front-Back",
    "Left Arm Twist In-Out",
    "Left Forearm Stretch",
    "Left Forearm Twist In-Out",
    "Left Hand Down-Up",
    "Left Hand In-Out",
    "Right Shoulder Down-Up",
    "Right Shoulder Front-Back",
    "Right Arm Down-Up",
    "Right Arm Front-Back",
    "Right Arm Twist In-Out",
    "Right Forearm Stretch",
    "Right Forearm Twist In-Out",
    "Right Hand Down-Up",
    "Right Hand In-Out",
    "LeftHand.Thumb.1 Stretched",
    "LeftHand.Thumb.Spread",
    "LeftHand.Thumb.2 Stretched",
    "LeftHand.Thumb.3 Stretched",
    "LeftHand.Index.1 Stretched",
    "LeftHand.Index.Spread",
    "LeftHand.Index.2 Stretched",
    "LeftHand.Index.3 Stretched",
    "LeftHand.Middle.1 Stretched",
    "LeftHand.Middle.Spread",
    "LeftHand.Middle.2 Stretched",
    "LeftHand.Middle.3 Stretched",
    "LeftHand.Ring.1 Stretched",
    "LeftHand.Ring.Spread",
    "LeftHand.Ring.2 Stretched",
    "LeftHand.Ring.3 Stretched",
    "LeftHand.Little.1 Stretched",
    "LeftHand.Little.Spread",
    "LeftHand.Little.2 Stretched",
    "LeftHand.Little.3 Stretched",
    "RightHand.Thumb.1 Stretched",
    "RightHand.Thumb.Spread",
    "RightHand.Thumb.2 Stretched",
    "RightHand.Thumb.3 Stretched",
    "RightHand.Index.1 Stretched",
    "RightHand.Index.Spread",
    "RightHand.Index.2 Stretched",
    "RightHand.Index.3 Stretched",
    "RightHand.Middle.1 Stretched",
    "RightHand.Middle.Spread",
    "RightHand.Middle.2 Stretched",
    "RightHand.Middle.3 Stretched",
    "RightHand.Ring.1 Stretched",
    "RightHand.Ring.Spread",
    "RightHand.Ring.2 Stretched",
    "RightHand.Ring.3 Stretched",
    "RightHand.Little.1 Stretched",
    "RightHand.Little.Spread",
    "RightHand.Little.2 Stretched",
    "RightHand.Little.3 Stretched",
];

const fn lim(min: f32, max: f32) -> MuscleLimit {
    MuscleLimit::new(min, max)
}

static MUSCLE_LIMITS: [MuscleLimit; MUSCLE_COUNT] = [
    // Spine, Chest
    lim(-40.0, 40.0),
    lim(-40.0, 40.0),
    lim(-40.0, 40.0),
    lim(-40.0, 40.0),
    lim(-40.0, 40.0),
    lim(-40.0, 40.0),
    // UpperChest
    lim(-20.0, 20.0),
    lim(-20.0, 20.0),
    lim(-20.0, 20.0),
    // Neck, Head
    lim(-40.0, 40.0),
    lim(-40.0, 40.0),
    lim(-40.0, 40.0),
    lim(-40.0, 40.0),
    lim(-40.0, 40.0),
    lim(-40.0, 40.0),
    // Eyes
    lim(-10.0, 15.0),
    lim(-20.0, 20.0),
    lim(-10.0, 15.0),
    lim(-20.0, 20.0),
    // Jaw
    lim(-10.0, 10.0),
    lim(-10.0, 10.0),
    // Left leg
    lim(-90.0, 50.0),
    lim(-60.0, 60.0),
    lim(-60.0, 60.0),
    lim(-80.0, 80.0),
    lim(-90.0, 90.0),
    lim(-50.0, 50.0),
    lim(-30.0, 30.0),
    lim(-50.0, 50.0),
    // Right leg
    lim(-90.0, 50.0),
    lim(-60.0, 60.0),
    lim(-60.0, 60.0),
    lim(-80.0, 80.0),
    lim(-90.0, 90.0),
    lim(-50.0, 50.0),
    lim(-30.0, 30.0),
    lim(-50.0, 50.0),
    // Left arm
    lim(-15.0, 30.0),
    lim(-15.0, 15.0),
    lim(-60.0, 100.0),
    lim(-100.0, 100.0),
    lim(-90.0, 90.0),
    lim(-80.0, 80.0),
    lim(-90.0, 90.0),
    lim(-80.0, 80.0),
    lim(-40.0, 40.0),
    // Right arm
    lim(-15.0, 30.0),
    lim(-15.0, 15.0),
    lim(-60.0, 100.0),
    lim(-100.0, 100.0),
    lim(-90.0, 90.0),
    lim(-80.0, 80.0),
    lim(-90.0, 90.0),
    lim(-80.0, 80.0),
    lim(-40.0, 40.0),
    // Left fingers: thumb, index, middle, ring, little
    lim(-20.0, 20.0),
    lim(-25.0, 25.0),
    lim(-40.0, 35.0),
    lim(-40.0, 35.0),
    lim(-50.0, 50.0),
    lim(-20.0, 20.0),
    lim(-45.0, 45.0),
    lim(-45.0, 45.0),
    lim(-50.0, 50.0),
    lim(-7.5, 7.5),
    lim(-45.0, 45.0),
    lim(-45.0, 45.0),
    lim(-50.0, 50.0),
    lim(-7.5, 7.5),
    lim(-45.0, 45.0),
    lim(-45.0, 45.0),
    lim(-50.0, 50.0),
    lim(-20.0, 20.0),
    lim(-45.0, 45.0),
    lim(-45.0, 45.0),
    // Right fingers
    lim(-20.0, 20.0),
    lim(-25.0, 25.0),
    lim(-40.0, 35.0),
    lim(-40.0, 35.0),
    lim(-50.0, 50.0),
    lim(-20.0, 20.0),
    lim(-45.0, 45.0),
    lim(-45.0, 45.0),
    lim(-50.0, 50.0),
    lim(-7.5, 7.5),
    lim(-45.0, 45.0),
    lim(-45.0, 45.0),
    lim(-50.0, 50.0),
    lim(-7.5, 7.5),
    lim(-45.0, 45.0),
    lim(-45.0, 45.0),
    lim(-50.0, 50.0),
    lim(-20.0, 20.0),
    lim(-45.0, 45.0),
    lim(-45.0, 45.0),
];
