//! Blend shape application.
//!
//! Several shape channels may target the same blend shape; their
//! contributions are summed. Shapes no channel touches are never written.

use motion_types::{DecodedFrame, FrameLayout};
use tracing::{trace, warn};

/// Mesh renderer that exposes blend shapes.
pub trait ShapeSink {
    /// Number of blend shapes on the mesh.
    fn shape_count(&self) -> usize;

    /// Index of the named blend shape, if the mesh has one.
    fn shape_index(&self, name: &str) -> Option<usize>;

    /// Weight of the last keyframe of the blend shape at `index`.
    fn max_keyframe_weight(&self, index: usize) -> f32;

    /// Sets the weight of the blend shape at `index`.
    fn set_shape_weight(&mut self, index: usize, weight: f32);
}

/// Writes the frame's shape samples into `sink`.
///
/// `weights` is scratch space reused between calls; it is resized to the
/// sink's shape count and reset to the NaN sentinel before accumulation.
/// Channels naming a shape the mesh lacks are skipped.
pub fn apply_blend_shapes<S: ShapeSink + ?Sized>(
    frame: &DecodedFrame,
    layout: &FrameLayout,
    sink: &mut S,
    weights: &mut Vec<f32>,
) {
    let count = sink.shape_count();
    weights.clear();
    weights.resize(count, f32::NAN);

    for (channel, sample) in layout.shapes.iter().zip(&frame.shape_samples) {
        let Some(index) = sink.shape_index(&channel.shape) else {
            trace!(shape = %channel.shape, "No such blend shape, skipping");
            continue;
        };
        let Some(weight) = weights.get_mut(index) else {
            warn!(
                shape = %channel.shape,
                index,
                count,
                "Blend shape index out of range, skipping"
            );
            continue;
        };
        let contribution = sample * channel.weight;
        *weight = if weight.is_nan() {
            contribution
        } else {
            *weight + contribution
        };
    }

    for (index, weight) in weights.iter().enumerate() {
        if !weight.is_nan() {
            let scale = sink.max_keyframe_weight(index);
            sink.set_shape_weight(index, weight * scale);
        }
    }
}
