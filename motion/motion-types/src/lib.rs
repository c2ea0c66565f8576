//! Humanoid motion data types for motion texture playback.
//!
//! This crate provides the data model shared by everything that decodes
//! humanoid poses from a grid of samples:
//!
//! # Humanoid Standard
//!
//! - [`HumanBone`] - The 55 standard bones and their fixed hierarchy
//! - [`muscle_from_bone`] - Direct per-bone muscle lookup
//! - [`muscle_limits`] - Default per-muscle range in degrees
//! - [`bone_muscle_map`] - Bone-axis to muscle table with fallback substitution
//!
//! # Encoding
//!
//! - [`GridSource`] / [`SampleGrid`] - Scalar sample buffers
//! - [`sample_slot`] - Column-major, vertically flipped slot addressing
//! - [`FrameLayout`] - Which slots carry which bone, root and shape channels
//!
//! # Binding
//!
//! - [`Armature`] - Host skeleton joints plus per-bone axis correction
//! - [`DecodedFrame`] - Root transform and per-bone muscles of one frame
//! - [`HumanPose`] - Canonical normalised pose
//!
//! # Layer 0 Crate
//!
//! This crate has no engine dependencies. The host skeleton, mesh and pose
//! system are reached only through handles and traits.
//!
//! # Example
//!
//! ```
//! use motion_types::{BoneSlots, FrameLayout, SampleGrid, sample_slot};
//!
//! let mut grid = SampleGrid::zeros(40, 45);
//! grid.set_slot(3, 0.5);
//! assert_eq!(sample_slot(&grid, 3), 0.5);
//!
//! let layout = FrameLayout::new(vec![BoneSlots::new(0, vec![6, 7, 8])]);
//! assert!(layout.validate(40, 45, 1).is_ok());
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss, clippy::module_name_repetitions)]

mod armature;
mod bone;
mod error;
mod grid;
mod layout;
mod mapping;
mod muscle;
mod pose;

pub use armature::{Armature, ArmatureBone, BoneAxes, JointId};
pub use bone::{BONE_COUNT, HumanBone};
pub use error::{MotionError, Result};
pub use grid::{
    DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, GridSource, SampleGrid, sample_slot, slot_position,
    try_sample_slot,
};
pub use layout::{BoneSlots, ChannelKind, FrameLayout, MAX_CHANNEL, ShapeChannel};
pub use mapping::{BoneMuscleMap, bone_muscle_map};
pub use muscle::{MUSCLE_COUNT, MuscleLimit, muscle_from_bone, muscle_limits, muscle_name};
pub use pose::{DecodedFrame, HumanPose};
