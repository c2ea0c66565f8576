//! Rotation reconstruction: look rotations, muscle swing/twist and rig transforms.

use glam::{Mat3, Quat, Vec3};
use tracing::trace;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Squared length below which a direction is treated as zero.
const DEGENERATE_EPSILON: f32 = 1e-12;

/// World transform of the rig root (the object the skeleton hangs from).
///
/// Points are mapped as `rotation * (scale * p) + translation`.
///
/// # Example
///
/// ```
/// use motion_player::RigTransform;
/// use glam::Vec3;
///
/// let t = RigTransform::from_translation(Vec3::new(10.0, 0.0, 0.0));
/// let p = t.transform_point(Vec3::ZERO);
/// assert!((p.x - 10.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RigTransform {
    /// Rotation component.
    pub rotation: Quat,
    /// Translation component.
    pub translation: Vec3,
    /// Per-axis scale.
    pub scale: Vec3,
}

impl Default for RigTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl RigTransform {
    /// Creates an identity transform.
    #[must_use]
    pub const fn identity() -> Self {
        Self {
            rotation: Quat::IDENTITY,
            translation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }

    /// Creates a transform with only translation.
    #[must_use]
    pub const fn from_translation(translation: Vec3) -> Self {
        Self {
            rotation: Quat::IDENTITY,
            translation,
            scale: Vec3::ONE,
        }
    }

    /// Creates a transform with only rotation.
    #[must_use]
    pub const fn from_rotation(rotation: Quat) -> Self {
        Self {
            rotation,
            translation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }

    /// Creates a rigid transform from rotation and translation.
    #[must_use]
    pub const fn new(rotation: Quat, translation: Vec3) -> Self {
        Self {
            rotation,
            translation,
            scale: Vec3::ONE,
        }
    }

    /// Sets the scale.
    #[must_use]
    pub const fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Maps a point from rig-local space to world space.
    #[must_use]
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        self.rotation * (self.scale * point) + self.translation
    }
}

/// Rotation whose local +Z points along `forward` and whose local +Y is as
/// close to `up` as possible.
///
/// `up` is re-orthogonalised against `forward`; neither needs to be unit
/// length. Degenerate inputs resolve deterministically:
///
/// - `forward` (near) zero or non-finite: identity;
/// - `up` parallel to `forward`, or zero: the shortest-arc rotation taking
///   +Z onto `forward`.
///
/// # Example
///
/// ```
/// use motion_player::look_rotation;
/// use glam::{Quat, Vec3};
///
/// let q = look_rotation(Vec3::Z, Vec3::Y);
/// assert!(q.abs_diff_eq(Quat::IDENTITY, 1e-6));
/// ```
#[must_use]
pub fn look_rotation(forward: Vec3, up: Vec3) -> Quat {
    if !forward.is_finite() || forward.length_squared() < DEGENERATE_EPSILON {
        trace!(?forward, "Zero forward vector, using identity rotation");
        return Quat::IDENTITY;
    }
    let z = forward.normalize();

    let x = up.cross(z);
    if !x.is_finite() || x.length_squared() < DEGENERATE_EPSILON {
        trace!(?forward, ?up, "Up parallel to forward, using shortest arc");
        return Quat::from_rotation_arc(Vec3::Z, z);
    }
    let x = x.normalize();
    let y = z.cross(x);

    Quat::from_mat3(&Mat3::from_cols(x, y, z)).normalize()
}

/// Converts a muscle triple in degrees to a rotation.
///
/// `x` is a twist about the local x-axis; `(y, z)` is a swing whose angle is
/// the length of `(0, y, z)` and whose axis is its direction. The swing is
/// applied outside the twist: `swing * twist`.
///
/// # Example
///
/// ```
/// use motion_player::muscle_to_rotation;
/// use glam::{Quat, Vec3};
///
/// assert_eq!(muscle_to_rotation(Vec3::ZERO), Quat::IDENTITY);
/// ```
#[must_use]
pub fn muscle_to_rotation(muscle: Vec3) -> Quat {
    let swing_axis = Vec3::new(0.0, muscle.y, muscle.z);
    let swing_angle = swing_axis.length();
    let swing = if swing_angle > 0.0 {
        Quat::from_axis_angle(swing_axis / swing_angle, swing_angle.to_radians())
    } else {
        Quat::IDENTITY
    };
    swing * Quat::from_rotation_x(muscle.x.to_radians())
}
