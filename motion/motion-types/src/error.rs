//! Error types for motion decoding.

use thiserror::Error;

/// Errors that can occur when building or driving a motion player.
///
/// Almost all of these are configuration errors raised while validating a
/// layout, armature or grid before any frame is decoded. Missing joints and
/// missing blend shapes are not errors; they are skipped.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MotionError {
    /// A layout references a channel index outside `0..=14`.
    #[error("invalid channel {channel} for bone {bone}: channels must be in 0..=14")]
    InvalidChannel {
        /// Bone index in the layout.
        bone: usize,
        /// The offending channel index.
        channel: u8,
    },

    /// A layout slot falls outside the sample grid.
    #[error("slot {slot} out of range: grid holds {capacity} slots ({context})")]
    SlotOutOfRange {
        /// The offending slot index.
        slot: usize,
        /// Number of slots in the grid (`width * height`).
        capacity: usize,
        /// What referenced the slot.
        context: String,
    },

    /// The layout describes fewer bones than the armature has.
    #[error("layout describes {layout} bones but the armature has {armature}")]
    LayoutBoneMismatch {
        /// Bone entries in the layout.
        layout: usize,
        /// Bones in the armature.
        armature: usize,
    },

    /// The armature violates one of its invariants.
    #[error("invalid armature: {0}")]
    InvalidArmature(String),

    /// Invalid player configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A sample buffer does not match its declared dimensions.
    #[error("buffer size mismatch: expected {expected}, got {actual}")]
    BufferSizeMismatch {
        /// Expected number of samples.
        expected: usize,
        /// Actual number of samples.
        actual: usize,
    },

    /// A grid handed to the player does not have the configured dimensions.
    #[error("grid size mismatch: expected {expected_width}x{expected_height}, got {width}x{height}")]
    GridSizeMismatch {
        /// Configured width.
        expected_width: usize,
        /// Configured height.
        expected_height: usize,
        /// Actual width.
        width: usize,
        /// Actual height.
        height: usize,
    },

    /// A pose sink rejected a muscle vector of the wrong length.
    #[error("pose length mismatch: sink expects {expected} muscles, got {actual}")]
    PoseLengthMismatch {
        /// Muscle count the sink expects.
        expected: usize,
        /// Muscle count that was provided.
        actual: usize,
    },
}

impl MotionError {
    /// Creates a slot out of range error.
    #[must_use]
    pub fn slot_out_of_range(slot: usize, capacity: usize, context: impl Into<String>) -> Self {
        Self::SlotOutOfRange {
            slot,
            capacity,
            context: context.into(),
        }
    }

    /// Creates an invalid armature error.
    #[must_use]
    pub fn invalid_armature(reason: impl Into<String>) -> Self {
        Self::InvalidArmature(reason.into())
    }

    /// Creates an invalid configuration error.
    #[must_use]
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig(reason.into())
    }

    /// Creates a buffer size mismatch error.
    #[must_use]
    pub const fn buffer_mismatch(expected: usize, actual: usize) -> Self {
        Self::BufferSizeMismatch { expected, actual }
    }

    /// Creates a pose length mismatch error.
    #[must_use]
    pub const fn pose_length_mismatch(expected: usize, actual: usize) -> Self {
        Self::PoseLengthMismatch { expected, actual }
    }

    /// Returns true for errors caused by a malformed layout, armature or config.
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        !matches!(self, Self::PoseLengthMismatch { .. })
    }
}

/// Result type for motion operations.
pub type Result<T> = std::result::Result<T, MotionError>;
