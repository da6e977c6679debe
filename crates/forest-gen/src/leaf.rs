use glam::Vec3;
use scene_kernel::{create_sphere, KernelError, NodeId, SceneGraph, SphereSpec};
use tracing::instrument;

use crate::segment::Segment;
use crate::types::{FOLIAGE_COLOR, LEAF_SCALE};

/// Attach a leaf sphere at the owner segment's last pivot.
///
/// The leaf is foliage-colored, uniformly scaled by [`LEAF_SCALE`], and
/// parented under the owner so it follows the segment's transform.
#[instrument(skip(scene, owner))]
pub fn attach_leaf(scene: &mut SceneGraph, owner: &Segment) -> Result<NodeId, KernelError> {
    let leaf = create_sphere(scene, SphereSpec::default());
    let mesh = scene
        .node(leaf)?
        .mesh
        .ok_or(KernelError::NotAMesh { id: leaf })?;
    scene.mesh_mut(mesh)?.set_vertex_colors(FOLIAGE_COLOR);

    let tip = owner.pivots.last().copied().unwrap_or(Vec3::ZERO);
    scene.set_translation(leaf, tip)?;
    scene.set_scale(leaf, Vec3::splat(LEAF_SCALE))?;
    scene.set_parent(leaf, owner.node)?;
    Ok(leaf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::build_segment;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn leaf_sits_at_segment_tip_under_owner() {
        let mut scene = SceneGraph::new();
        let mut rng = StdRng::seed_from_u64(5);
        let seg = build_segment(&mut scene, &mut rng, 8).unwrap();
        let leaf = attach_leaf(&mut scene, &seg).unwrap();

        let node = scene.node(leaf).unwrap();
        assert_eq!(node.parent, Some(seg.node));
        assert_eq!(node.local.translation, *seg.pivots.last().unwrap());
        assert_eq!(node.local.scale, Vec3::splat(LEAF_SCALE));
    }

    #[test]
    fn leaf_mesh_is_foliage_colored() {
        let mut scene = SceneGraph::new();
        let mut rng = StdRng::seed_from_u64(5);
        let seg = build_segment(&mut scene, &mut rng, 8).unwrap();
        let leaf = attach_leaf(&mut scene, &seg).unwrap();
        let mesh_id = scene.node(leaf).unwrap().mesh.unwrap();
        let mesh = scene.mesh(mesh_id).unwrap();
        assert!(mesh.colors.iter().all(|&c| c == FOLIAGE_COLOR));
    }
}
