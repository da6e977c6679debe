use glam::Vec3;
use tracing::debug;

use crate::scene::SceneGraph;
use crate::types::{KernelError, NodeId, RayHit};

/// Minimum ray parameter for a hit to count; rejects self-intersections
/// at the ray origin.
const T_MIN: f32 = 1e-5;

/// Barycentric slack so rays grazing a shared fan edge still register.
const BARY_EPS: f32 = 1e-6;

/// Cast a world-space ray against the mesh attached to `node`.
///
/// The node's composed world transform is applied to the mesh, every
/// polygon face is fan-triangulated, and intersections are collected
/// two-sided (back faces hit too, matching the host query this replaces).
/// Hits are returned nearest-first.
pub fn raycast(
    scene: &SceneGraph,
    node: NodeId,
    origin: Vec3,
    direction: Vec3,
) -> Result<RayHit, KernelError> {
    let n = scene.node(node)?;
    let mesh_id = n.mesh.ok_or(KernelError::NotAMesh { id: node })?;
    let mesh = scene.mesh(mesh_id)?;
    let world = scene.world_transform(node)?;

    let dir = direction.normalize_or_zero();
    if dir == Vec3::ZERO {
        return Ok(RayHit::miss());
    }

    let mut hits: Vec<(f32, Vec3, usize)> = Vec::new();
    for (fi, face) in mesh.faces.iter().enumerate() {
        if face.verts.len() < 3 {
            continue;
        }
        let p0 = world.transform_point3(mesh.positions[face.verts[0] as usize]);
        for i in 1..face.verts.len() - 1 {
            let p1 = world.transform_point3(mesh.positions[face.verts[i] as usize]);
            let p2 = world.transform_point3(mesh.positions[face.verts[i + 1] as usize]);
            if let Some(t) = ray_triangle(origin, dir, p0, p1, p2) {
                hits.push((t, origin + dir * t, fi));
                // A ray crosses a convex planar face at most once.
                break;
            }
        }
    }
    hits.sort_by(|a, b| a.0.total_cmp(&b.0));

    debug!(?node, hits = hits.len(), "raycast");
    Ok(RayHit {
        hit: !hits.is_empty(),
        points: hits.iter().map(|h| h.1).collect(),
        faces: hits.iter().map(|h| h.2).collect(),
    })
}

/// Möller–Trumbore, two-sided.
fn ray_triangle(origin: Vec3, dir: Vec3, a: Vec3, b: Vec3, c: Vec3) -> Option<f32> {
    let e1 = b - a;
    let e2 = c - a;
    let p = dir.cross(e2);
    let det = e1.dot(p);
    if det.abs() < 1e-12 {
        return None; // parallel
    }
    let inv = 1.0 / det;
    let tv = origin - a;
    let u = tv.dot(p) * inv;
    if u < -BARY_EPS || u > 1.0 + BARY_EPS {
        return None;
    }
    let q = tv.cross(e1);
    let v = dir.dot(q) * inv;
    if v < -BARY_EPS || u + v > 1.0 + BARY_EPS {
        return None;
    }
    let t = e2.dot(q) * inv;
    if t > T_MIN {
        Some(t)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::{Mesh, PolyFace};
    use approx::assert_relative_eq;

    fn quad_at_height(scene: &mut SceneGraph, h: f32, half: f32) -> NodeId {
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
        scene.create_mesh_node("ground", mesh)
    }

    #[test]
    fn downward_ray_hits_plane_below() {
        let mut scene = SceneGraph::new();
        let ground = quad_at_height(&mut scene, -3.0, 10.0);
        let hit = raycast(&scene, ground, Vec3::new(1.0, 0.0, 2.0), Vec3::NEG_Y).unwrap();
        assert!(hit.hit);
        assert_relative_eq!(hit.points[0].y, -3.0, epsilon = 1e-5);
        assert_eq!(hit.faces, vec![0]);
    }

    #[test]
    fn upward_ray_hits_backface_of_plane_above() {
        let mut scene = SceneGraph::new();
        let ground = quad_at_height(&mut scene, 2.5, 10.0);
        let down = raycast(&scene, ground, Vec3::ZERO, Vec3::NEG_Y).unwrap();
        assert!(!down.hit);
        let up = raycast(&scene, ground, Vec3::ZERO, Vec3::Y).unwrap();
        assert!(up.hit);
        assert_relative_eq!(up.points[0].y, 2.5, epsilon = 1e-5);
    }

    #[test]
    fn ray_outside_quad_misses() {
        let mut scene = SceneGraph::new();
        let ground = quad_at_height(&mut scene, 0.0, 1.0);
        let hit = raycast(&scene, ground, Vec3::new(5.0, 1.0, 5.0), Vec3::NEG_Y).unwrap();
        assert!(!hit.hit);
        assert!(hit.points.is_empty());
    }

    #[test]
    fn ray_through_fan_diagonal_hits_once() {
        let mut scene = SceneGraph::new();
        let ground = quad_at_height(&mut scene, 0.0, 1.0);
        // The fan diagonal of the quad runs through the origin column.
        let hit = raycast(&scene, ground, Vec3::new(0.0, 1.0, 0.0), Vec3::NEG_Y).unwrap();
        assert!(hit.hit);
        assert_eq!(hit.points.len(), 1);
    }

    #[test]
    fn hits_are_sorted_nearest_first() {
        let mut scene = SceneGraph::new();
        let mesh = Mesh {
            positions: vec![
                // Two stacked quads, at y = -1 and y = -4.
                Vec3::new(-5.0, -1.0, -5.0),
                Vec3::new(5.0, -1.0, -5.0),
                Vec3::new(5.0, -1.0, 5.0),
                Vec3::new(-5.0, -1.0, 5.0),
                Vec3::new(-5.0, -4.0, -5.0),
                Vec3::new(5.0, -4.0, -5.0),
                Vec3::new(5.0, -4.0, 5.0),
                Vec3::new(-5.0, -4.0, 5.0),
            ],
            colors: vec![Vec3::ONE; 8],
            faces: vec![
                PolyFace {
                    verts: vec![4, 5, 6, 7],
                },
                PolyFace {
                    verts: vec![0, 1, 2, 3],
                },
            ],
        };
        let mesh = scene.insert_mesh(mesh);
        let node = scene.create_mesh_node("slab", mesh);
        let hit = raycast(&scene, node, Vec3::new(1.0, 0.0, 1.0), Vec3::NEG_Y).unwrap();
        assert_eq!(hit.points.len(), 2);
        assert!(hit.points[0].y > hit.points[1].y);
        assert_eq!(hit.faces, vec![1, 0]);
    }

    #[test]
    fn raycast_honors_node_transform() {
        let mut scene = SceneGraph::new();
        let ground = quad_at_height(&mut scene, 0.0, 10.0);
        scene
            .set_translation(ground, Vec3::new(0.0, -7.0, 0.0))
            .unwrap();
        let hit = raycast(&scene, ground, Vec3::ZERO, Vec3::NEG_Y).unwrap();
        assert!(hit.hit);
        assert_relative_eq!(hit.points[0].y, -7.0, epsilon = 1e-5);
    }

    #[test]
    fn raycast_on_group_node_is_an_error() {
        let mut scene = SceneGraph::new();
        let g = scene.create_group("grp");
        let err = raycast(&scene, g, Vec3::ZERO, Vec3::NEG_Y).unwrap_err();
        assert!(matches!(err, KernelError::NotAMesh { .. }));
    }
}
