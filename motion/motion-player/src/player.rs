//! Per-session player binding one armature and one layout.

use motion_types::{
    Armature, DecodedFrame, FrameLayout, GridSource, HumanPose, MotionError, Result,
    bone_muscle_map, muscle_limits,
};
use tracing::{debug, trace};

use crate::config::PlayerConfig;
use crate::decode::decode_into;
use crate::normalize::{PoseSink, fill_canonical_pose};
use crate::shape::{ShapeSink, apply_blend_shapes};
use crate::skeleton::{SkeletonSink, apply_skeleton};

/// Decodes motion grids and drives skeletons, pose systems and meshes.
///
/// Layout, armature and config are validated once in [`MotionPlayer::new`];
/// afterwards decoding cannot fail except on a grid of the wrong size.
/// Frame, pose and weight buffers are owned and reused across updates.
///
/// # Example
///
/// ```
/// use motion_player::{MotionPlayer, PlayerConfig};
/// use motion_types::{
///     Armature, ArmatureBone, BoneAxes, BoneSlots, FrameLayout, HumanBone, JointId, SampleGrid,
/// };
///
/// let armature = Armature::new(
///     vec![ArmatureBone::new(JointId(0), HumanBone::Hips, BoneAxes::identity())],
///     1.0,
/// )
/// .unwrap();
/// let layout = FrameLayout::new(vec![BoneSlots::new(0, vec![6, 7, 8])]);
/// let mut player = MotionPlayer::new(armature, layout, PlayerConfig::default()).unwrap();
///
/// let mut grid = SampleGrid::zeros(40, 45);
/// grid.set_slot(1, 0.5);
/// let frame = player.update(&grid).unwrap();
/// assert_eq!(frame.root_translation.y, 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct MotionPlayer {
    armature: Armature,
    layout: FrameLayout,
    config: PlayerConfig,
    frame: DecodedFrame,
    pose: HumanPose,
    shape_weights: Vec<f32>,
}

impl MotionPlayer {
    /// Creates a player after validating config and layout.
    ///
    /// # Errors
    ///
    /// Returns [`MotionError::InvalidConfig`] for a bad config, or the
    /// layout validation error if the layout does not fit the configured
    /// grid or describes fewer bones than the armature.
    pub fn new(armature: Armature, layout: FrameLayout, config: PlayerConfig) -> Result<Self> {
        config.validate()?;
        layout.validate(config.grid_width, config.grid_height, armature.len())?;

        debug!(
            bones = armature.len(),
            shapes = layout.shapes.len(),
            width = config.grid_width,
            height = config.grid_height,
            "Created motion player"
        );

        let frame = DecodedFrame::new(armature.len(), layout.shapes.len());
        Ok(Self {
            armature,
            layout,
            config,
            frame,
            pose: HumanPose::default(),
            shape_weights: Vec::new(),
        })
    }

    /// Decodes `grid` into the player's frame buffer.
    ///
    /// # Errors
    ///
    /// Returns [`MotionError::GridSizeMismatch`] if the grid does not have
    /// the configured dimensions.
    pub fn update<G: GridSource + ?Sized>(&mut self, grid: &G) -> Result<&DecodedFrame> {
        if grid.width() != self.config.grid_width || grid.height() != self.config.grid_height {
            return Err(MotionError::GridSizeMismatch {
                expected_width: self.config.grid_width,
                expected_height: self.config.grid_height,
                width: grid.width(),
                height: grid.height(),
            });
        }

        decode_into(&mut self.frame, grid, &self.layout, &self.config);
        trace!(
            root = ?self.frame.root_translation,
            "Decoded frame"
        );
        Ok(&self.frame)
    }

    /// Most recently decoded frame. Rest pose before the first update.
    #[must_use]
    pub fn frame(&self) -> &DecodedFrame {
        &self.frame
    }

    /// Writes the current frame into a host skeleton.
    pub fn apply_transform<S: SkeletonSink + ?Sized>(&self, sink: &mut S) {
        apply_skeleton(&self.frame, &self.armature, sink);
    }

    /// Builds the canonical pose of the current frame and hands it to `sink`.
    ///
    /// # Errors
    ///
    /// Propagates any error returned by the sink.
    pub fn apply_human_pose<P: PoseSink + ?Sized>(&mut self, sink: &mut P) -> Result<()> {
        fill_canonical_pose(
            &mut self.pose,
            &self.frame,
            &self.armature,
            bone_muscle_map(),
            muscle_limits(),
        );
        sink.set_human_pose(&self.pose)
    }

    /// Writes the current frame's blend shape weights into `sink`.
    ///
    /// Does nothing when the layout has no shape channels.
    pub fn apply_blend_shape<S: ShapeSink + ?Sized>(&mut self, sink: &mut S) {
        if !self.layout.has_shapes() {
            return;
        }
        apply_blend_shapes(&self.frame, &self.layout, sink, &mut self.shape_weights);
    }

    /// Canonical pose computed by the last [`apply_human_pose`](Self::apply_human_pose).
    #[must_use]
    pub fn pose(&self) -> &HumanPose {
        &self.pose
    }

    /// Bound armature.
    #[must_use]
    pub fn armature(&self) -> &Armature {
        &self.armature
    }

    /// Bound layout.
    #[must_use]
    pub fn layout(&self) -> &FrameLayout {
        &self.layout
    }

    /// Player configuration.
    #[must_use]
    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }
}
