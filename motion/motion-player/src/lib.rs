//! Motion texture playback for humanoid rigs.
//!
//! This crate decodes one frame of humanoid motion from a sample grid and
//! applies it to the outside world:
//!
//! # Decoding
//!
//! - [`decode`] / [`decode_into`] - Grid samples to root transform and muscles
//! - [`look_rotation`] - Root orientation from forward and up vectors
//! - [`muscle_to_rotation`] - Swing-twist rotation from a muscle triple
//!
//! # Applying
//!
//! - [`apply_skeleton`] / [`SkeletonSink`] - Joint rotations and root placement
//! - [`to_canonical_pose`] / [`PoseSink`] - Normalised muscle pose
//! - [`apply_blend_shapes`] / [`ShapeSink`] - Blend shape weights
//!
//! # Session
//!
//! - [`MotionPlayer`] - Validates a binding once and reuses its buffers
//! - [`PlayerConfig`] - Grid size and sample scales
//!
//! # Layer 0 Crate
//!
//! The host skeleton, animation system and mesh are reached only through the
//! sink traits, so this crate carries no engine dependencies.
//!
//! # Example
//!
//! ```
//! use motion_player::{MotionPlayer, PlayerConfig};
//! use motion_types::{
//!     Armature, ArmatureBone, BoneAxes, BoneSlots, FrameLayout, HumanBone, JointId, SampleGrid,
//! };
//!
//! let armature = Armature::new(
//!     vec![ArmatureBone::new(JointId(0), HumanBone::Hips, BoneAxes::identity())],
//!     1.0,
//! )
//! .unwrap();
//! let layout = FrameLayout::new(vec![BoneSlots::new(0, (6..=14).collect())]);
//! let mut player = MotionPlayer::new(armature, layout, PlayerConfig::default()).unwrap();
//!
//! let frame = player.update(&SampleGrid::zeros(40, 45)).unwrap();
//! // All-zero up and forward vectors fall back to the identity rotation.
//! assert_eq!(frame.root_rotation, glam::Quat::IDENTITY);
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod config;
mod decode;
mod normalize;
mod player;
mod rotation;
mod shape;
mod skeleton;

// Re-export configuration
pub use config::PlayerConfig;

// Re-export decoding
pub use decode::{decode, decode_into};
pub use rotation::{RigTransform, look_rotation, muscle_to_rotation};

// Re-export appliers
pub use normalize::{PoseSink, fill_canonical_pose, normalize_pose, to_canonical_pose};
pub use shape::{ShapeSink, apply_blend_shapes};
pub use skeleton::{SkeletonSink, apply_skeleton};

// Re-export the player
pub use player::MotionPlayer;

// Re-export error types
pub use motion_types::{MotionError, Result};

/// Prelude for convenient imports.
pub mod prelude {
    pub use super::{
        MotionError, MotionPlayer, PlayerConfig, PoseSink, RigTransform, ShapeSink, SkeletonSink,
    };
    pub use motion_types::{
        Armature, ArmatureBone, BoneAxes, BoneSlots, DecodedFrame, FrameLayout, GridSource,
        HumanBone, HumanPose, JointId, SampleGrid, ShapeChannel,
    };
}
