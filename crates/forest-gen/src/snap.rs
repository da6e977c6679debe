use glam::Vec3;
use scene_kernel::{raycast, NodeId, SceneGraph};
use tracing::{debug, instrument};

use crate::types::SnapError;

/// Snap a tree's vertical position onto the named ground surface.
///
/// Casts a ray from the tree's world position straight down, then straight
/// up if nothing was hit. On success the tree's local translate-Y is set
/// to the Y of the nearest hit point and that Y is returned; X and Z are
/// never touched. The forest group carries an identity transform, so the
/// local coordinate equals the world coordinate.
#[instrument(skip(scene))]
pub fn snap_to_ground(
    scene: &mut SceneGraph,
    tree: NodeId,
    ground_name: &str,
) -> Result<f32, SnapError> {
    let ground = *scene
        .find_nodes_by_name(ground_name)
        .first()
        .ok_or_else(|| SnapError::MissingGround {
            name: ground_name.to_owned(),
        })?;

    let origin = scene.world_position(tree).map_err(SnapError::Kernel)?;

    let mut hit = raycast(scene, ground, origin, Vec3::NEG_Y)?;
    if !hit.hit {
        hit = raycast(scene, ground, origin, Vec3::Y)?;
    }
    if !hit.hit {
        return Err(SnapError::NoIntersection);
    }

    let y = hit.points[0].y;
    let mut t = scene.translation(tree)?;
    t.y = y;
    scene.set_translation(tree, t)?;
    debug!(?tree, y, "snapped tree to ground");
    Ok(y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use scene_kernel::{Mesh, PolyFace};

    fn ground_quad(scene: &mut SceneGraph, name: &str, h: f32, half: f32) -> NodeId {
        let mesh = Mesh {
            positions: vec![
                Vec3::new(-half, h, -half),
                Vec3::new(half, h, -half),
                Vec3::new(half, h, half),
                Vec3::new(-half, h, half),
            ],
            colors: vec![Vec3::ONE; 4],
            faces: vec![PolyFace {
                verts: vec![0, 1, 2, 3],
            }],
        };
        let mesh = scene.insert_mesh(mesh);
        let node = scene.create_mesh_node("plane", mesh);
        scene.rename(node, name).unwrap();
        node
    }

    #[test]
    fn snaps_down_onto_ground_below() {
        let mut scene = SceneGraph::new();
        ground_quad(&mut scene, "terrain", -3.0, 50.0);
        let tree = scene.create_group("trunk0");
        scene
            .set_translation(tree, Vec3::new(2.0, 0.0, -4.0))
            .unwrap();

        let y = snap_to_ground(&mut scene, tree, "terrain").unwrap();
        assert_relative_eq!(y, -3.0, epsilon = 1e-4);
        let t = scene.translation(tree).unwrap();
        assert_relative_eq!(t.y, -3.0, epsilon = 1e-4);
        assert_eq!(t.x, 2.0);
        assert_eq!(t.z, -4.0);
    }

    #[test]
    fn falls_back_to_upward_ray_for_ground_above() {
        let mut scene = SceneGraph::new();
        ground_quad(&mut scene, "terrain", 2.5, 50.0);
        let tree = scene.create_group("trunk0");

        let y = snap_to_ground(&mut scene, tree, "terrain").unwrap();
        assert_relative_eq!(y, 2.5, epsilon = 1e-4);
    }

    #[test]
    fn missing_ground_name_is_reported() {
        let mut scene = SceneGraph::new();
        let tree = scene.create_group("trunk0");
        let err = snap_to_ground(&mut scene, tree, "terrain").unwrap_err();
        assert!(matches!(err, SnapError::MissingGround { name } if name == "terrain"));
    }

    #[test]
    fn miss_in_both_directions_leaves_y_unchanged() {
        let mut scene = SceneGraph::new();
        // Tiny ground far from the tree column.
        ground_quad(&mut scene, "terrain", -3.0, 0.5);
        let tree = scene.create_group("trunk0");
        scene
            .set_translation(tree, Vec3::new(20.0, 1.25, 20.0))
            .unwrap();

        let err = snap_to_ground(&mut scene, tree, "terrain").unwrap_err();
        assert!(matches!(err, SnapError::NoIntersection));
        assert_eq!(scene.translation(tree).unwrap().y, 1.25);
    }
}
