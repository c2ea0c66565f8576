//! Bone-axis to muscle-channel mapping with fallback substitution.
//!
//! Not every bone axis carries its own muscle. The mapping table resolves
//! such axes by substituting a related bone once: shoulders borrow from the
//! upper arm, the jaw keeps itself, and every other bone borrows from its
//! parent. The table is built on first use and shared process-wide.

use std::sync::OnceLock;

use tracing::debug;

use crate::bone::{BONE_COUNT, HumanBone};
use crate::muscle::muscle_from_bone;

static BONE_MUSCLE_MAP: OnceLock<BoneMuscleMap> = OnceLock::new();

/// Resolved muscle channel for every (bone, axis) pair.
///
/// Immutable once built; see [`bone_muscle_map`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoneMuscleMap {
    entries: [[Option<usize>; 3]; BONE_COUNT],
}

/// Returns the process-wide mapping table, building it on first access.
///
/// # Example
///
/// ```
/// use motion_types::{HumanBone, bone_muscle_map, muscle_from_bone};
///
/// let map = bone_muscle_map();
/// // The shoulder has no twist muscle and borrows the upper arm's.
/// assert_eq!(
///     map.get(HumanBone::LeftShoulder, 0),
///     muscle_from_bone(HumanBone::LeftUpperArm, 0),
/// );
/// ```
pub fn bone_muscle_map() -> &'static BoneMuscleMap {
    BONE_MUSCLE_MAP.get_or_init(BoneMuscleMap::build)
}

impl BoneMuscleMap {
    /// Builds a fresh table. Prefer [`bone_muscle_map`], which builds once.
    #[must_use]
    pub fn build() -> Self {
        let mut entries = [[None; 3]; BONE_COUNT];
        let mut unresolved = 0_usize;

        for bone in HumanBone::ALL {
            for (axis, entry) in entries[bone.index()].iter_mut().enumerate() {
                let muscle = muscle_from_bone(bone, axis)
                    .or_else(|| fallback_bone(bone).and_then(|b| muscle_from_bone(b, axis)));
                if muscle.is_none() {
                    unresolved += 1;
                }
                *entry = muscle;
            }
        }

        debug!(
            resolved = BONE_COUNT * 3 - unresolved,
            unresolved, "Built bone muscle map"
        );

        Self { entries }
    }

    /// Muscle channel driven by `axis` of `bone`, if any.
    ///
    /// Axes beyond 2 resolve to `None`.
    #[must_use]
    pub fn get(&self, bone: HumanBone, axis: usize) -> Option<usize> {
        self.entries[bone.index()].get(axis).copied().flatten()
    }

    /// Iterates over every `(bone, axis, muscle)` entry.
    pub fn iter(&self) -> impl Iterator<Item = (HumanBone, usize, Option<usize>)> + '_ {
        HumanBone::ALL.into_iter().flat_map(move |bone| {
            self.entries[bone.index()]
                .iter()
                .enumerate()
                .map(move |(axis, muscle)| (bone, axis, *muscle))
        })
    }
}

/// Single substitution step used when a bone axis has no muscle of its own.
fn fallback_bone(bone: HumanBone) -> Option<HumanBone> {
    match bone {
        HumanBone::LeftShoulder => Some(HumanBone::LeftUpperArm),
        HumanBone::RightShoulder => Some(HumanBone::RightUpperArm),
        HumanBone::Jaw => Some(HumanBone::Jaw),
        other => other.parent(),
    }
}
