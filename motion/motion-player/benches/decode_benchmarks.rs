//! Benchmarks for motion-player decoding and application.
//!
//! Run with: cargo bench -p motion-player
//!
//! To compare against baseline:
//! 1. First run: cargo bench -p motion-player -- --save-baseline main
//! 2. After changes: cargo bench -p motion-player -- --baseline main

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use glam::{Quat, Vec3};
use motion_player::{
    MotionPlayer, PlayerConfig, PoseSink, RigTransform, SkeletonSink, decode, to_canonical_pose,
};
use motion_types::{
    Armature, ArmatureBone, BoneAxes, BoneSlots, FrameLayout, HumanBone, HumanPose, JointId,
    SampleGrid, bone_muscle_map, muscle_from_bone, muscle_limits,
};

// =============================================================================
// Rig Generation
// =============================================================================

/// Full humanoid rig with every muscle channel packed from slot 0.
fn full_rig() -> (Armature, FrameLayout) {
    let mut bones = Vec::new();
    let mut slots = Vec::new();
    let mut next = 0;

    for bone in HumanBone::ALL {
        let channels: Vec<u8> = if bone.is_root() {
            (6..=14).collect()
        } else {
            (0u8..3)
                .filter(|&axis| muscle_from_bone(bone, usize::from(axis)).is_some())
                .collect()
        };
        let len = channels.len();
        bones.push(ArmatureBone::new(
            JointId(bone.index()),
            bone,
            BoneAxes::new(
                Vec3::new(1.0, -1.0, 1.0),
                Quat::from_rotation_y(0.1),
                Quat::from_rotation_x(-0.2),
            ),
        ));
        slots.push(BoneSlots::new(next, channels));
        next += len;
    }

    match Armature::new(bones, 1.0) {
        Ok(armature) => (armature, FrameLayout::new(slots)),
        Err(e) => panic!("benchmark rig is invalid: {e}"),
    }
}

/// A grid filled with a smooth, non-degenerate pattern.
fn create_grid(width: usize, height: usize) -> SampleGrid {
    let mut grid = SampleGrid::zeros(width, height);
    for slot in 0..width * height {
        grid.set_slot(slot, ((slot as f32) * 0.37).sin() * 0.5);
    }
    grid
}

struct NullSkeleton;

impl SkeletonSink for NullSkeleton {
    fn root_transform(&self) -> RigTransform {
        RigTransform::identity()
    }

    fn set_local_rotation(&mut self, _joint: JointId, rotation: Quat) {
        black_box(rotation);
    }

    fn set_world_position_and_rotation(&mut self, _joint: JointId, position: Vec3, rotation: Quat) {
        black_box((position, rotation));
    }
}

struct NullAnimator;

impl PoseSink for NullAnimator {
    fn set_human_pose(&mut self, pose: &HumanPose) -> motion_player::Result<()> {
        black_box(pose);
        Ok(())
    }
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("Decode");
    let (armature, layout) = full_rig();
    let config = PlayerConfig::default();
    let grid = create_grid(config.grid_width, config.grid_height);

    group.throughput(Throughput::Elements(armature.len() as u64));
    group.bench_function("full_rig", |b| {
        b.iter(|| decode(black_box(&grid), &layout, armature.len(), &config));
    });

    for bone_count in [1usize, 16, 55] {
        group.bench_with_input(
            BenchmarkId::new("bones", bone_count),
            &bone_count,
            |b, &count| {
                b.iter(|| decode(black_box(&grid), &layout, count, &config));
            },
        );
    }

    group.finish();
}

fn bench_apply(c: &mut Criterion) {
    let mut group = c.benchmark_group("Apply");
    let (armature, layout) = full_rig();
    let config = PlayerConfig::default();
    let grid = create_grid(config.grid_width, config.grid_height);
    let frame = decode(&grid, &layout, armature.len(), &config);

    group.bench_function("canonical_pose", |b| {
        b.iter(|| {
            to_canonical_pose(
                black_box(&frame),
                &armature,
                bone_muscle_map(),
                muscle_limits(),
            )
        });
    });

    let Ok(mut player) = MotionPlayer::new(armature, layout, config) else {
        panic!("benchmark player is invalid");
    };
    group.bench_function("update_and_apply", |b| {
        b.iter(|| {
            if player.update(black_box(&grid)).is_ok() {
                player.apply_transform(&mut NullSkeleton);
                let _ = player.apply_human_pose(&mut NullAnimator);
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_decode, bench_apply);
criterion_main!(benches);
