use rand::Rng;
use scene_kernel::{KernelError, NodeId, SceneGraph};

/// Randomize a tree's horizontal position: X and Z are drawn independently
/// from `uniform(min..=max)`; Y is left for the ground snapper.
///
/// The inclusive range makes `min == max` a valid degenerate fixed point.
/// The orchestrator validates `min <= max` before any tree is placed.
pub fn place(
    scene: &mut SceneGraph,
    rng: &mut impl Rng,
    tree: NodeId,
    min: f32,
    max: f32,
) -> Result<(), KernelError> {
    let mut t = scene.translation(tree)?;
    t.x = rng.random_range(min..=max);
    t.z = rng.random_range(min..=max);
    scene.set_translation(tree, t)
}
