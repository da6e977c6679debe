use glam::Vec3;
use rand::Rng;
use scene_kernel::SceneGraph;
use tracing::instrument;

use crate::leaf::attach_leaf;
use crate::segment::{build_segment, Segment};
use crate::types::{GenError, BRANCH_SCALE};

/// Recursively fan branch segments out of `parent`'s pivot list.
///
/// `ramification` is the depth budget: each call spends one unit for all
/// the recursive calls it makes, so depth is bounded by the initial value.
/// `level` is the width counter: the call spawns one child per value from
/// `level` down to 1, attaching successive siblings at successively lower
/// parent pivots, and each child is built with a pivot list sized to the
/// `level` it was spawned at (deeper generations taper).
///
/// Node count grows combinatorially in both parameters; callers bound
/// them.
#[instrument(skip(scene, rng, parent))]
pub fn grow(
    scene: &mut SceneGraph,
    rng: &mut impl Rng,
    parent: &Segment,
    level: u32,
    ramification: u32,
) -> Result<(), GenError> {
    if ramification == 0 || parent.pivots.is_empty() {
        return Ok(());
    }
    let ramification = ramification - 1;

    let mut level = level;
    while level > 0 {
        let seg = build_segment(scene, rng, level)?;
        scene.set_parent(seg.node, parent.node)?;
        attach_leaf(scene, &seg)?;

        // The trunk always has more pivots than the starting level, so the
        // clamp only engages on branch parents, whose pivot lists are
        // exactly `level` long when their own first child attaches.
        let idx = (level as usize).min(parent.pivots.len() - 1);
        scene.set_translation(seg.node, parent.pivots[idx])?;

        let yaw: f32 = rng.random_range(-180.0..=180.0);
        let pitch: f32 = rng.random_range(40.0..=70.0);
        scene.set_rotation_deg(seg.node, Vec3::new(pitch, yaw, 0.0))?;
        // Absolute, not cumulative: shrinkage compounds through the
        // hierarchical transform chain.
        scene.set_scale(seg.node, Vec3::splat(BRANCH_SCALE))?;

        grow(scene, rng, &seg, level, ramification)?;
        level -= 1;
    }
    Ok(())
}
