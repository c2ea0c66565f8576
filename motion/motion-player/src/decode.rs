//! Frame decoding: sample grid to root transform and per-bone muscles.

use glam::Vec3;
use motion_types::{ChannelKind, DecodedFrame, FrameLayout, GridSource, MAX_CHANNEL, sample_slot};

use crate::config::PlayerConfig;
use crate::rotation::look_rotation;

/// Decodes one frame.
///
/// The layout must already have been validated against the grid size and
/// `bone_count` (see [`FrameLayout::validate`]); an unvalidated layout with
/// out-of-range slots panics.
///
/// # Example
///
/// ```
/// use motion_player::{PlayerConfig, decode};
/// use motion_types::{BoneSlots, FrameLayout, SampleGrid};
///
/// let mut grid = SampleGrid::zeros(40, 45);
/// grid.set_slot(0, 0.5);
/// let layout = FrameLayout::new(vec![BoneSlots::new(0, vec![0])]);
///
/// let frame = decode(&grid, &layout, 1, &PlayerConfig::default());
/// assert_eq!(frame.muscles[0].x, 90.0);
/// ```
#[must_use]
pub fn decode<G: GridSource + ?Sized>(
    grid: &G,
    layout: &FrameLayout,
    bone_count: usize,
    config: &PlayerConfig,
) -> DecodedFrame {
    let mut frame = DecodedFrame::new(bone_count, layout.shapes.len());
    decode_into(&mut frame, grid, layout, config);
    frame
}

/// Decodes one frame into an existing buffer, reusing its allocations.
///
/// The frame's bone count is kept; every field is overwritten.
pub fn decode_into<G: GridSource + ?Sized>(
    frame: &mut DecodedFrame,
    grid: &G,
    layout: &FrameLayout,
    config: &PlayerConfig,
) {
    let mut root_translation = Vec3::Y;
    let mut up = Vec3::Y;
    let mut forward = Vec3::Z;

    frame.muscles.fill(Vec3::ZERO);

    for (muscle, slots) in frame.muscles.iter_mut().zip(&layout.bones) {
        for (slot, channel) in slots.slots() {
            let value = sample_slot(grid, slot);
            match ChannelKind::from_index(channel) {
                Some(ChannelKind::Muscle(axis)) => muscle[axis] = value * config.rotation_scale,
                // High-precision channels are not implemented yet.
                Some(ChannelKind::Reserved(_)) => {}
                Some(ChannelKind::RootTranslation(axis)) => {
                    root_translation[axis] = value * config.translation_scale;
                }
                Some(ChannelKind::RootUp(axis)) => up[axis] = value,
                Some(ChannelKind::RootForward(axis)) => forward[axis] = value,
                None => debug_assert!(channel <= MAX_CHANNEL, "unvalidated channel {channel}"),
            }
        }
    }

    frame.root_translation = root_translation;
    frame.root_rotation = look_rotation(forward, up);

    frame.shape_samples.clear();
    frame
        .shape_samples
        .extend(layout.shapes.iter().map(|shape| sample_slot(grid, shape.index)));
}
