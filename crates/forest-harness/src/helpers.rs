//! Helper functions: ground construction and forest node census.

use glam::Vec3;
use scene_kernel::{Mesh, NodeId, PolyFace, SceneGraph};

/// Build a flat square ground plane (single quad) at the given height.
pub fn flat_ground(scene: &mut SceneGraph, name: &str, height: f32, half_extent: f32) -> NodeId {
    let mesh = Mesh {
        positions: vec![
            Vec3::new(-half_extent, height, -half_extent),
            Vec3::new(half_extent, height, -half_extent),
            Vec3::new(half_extent, height, half_extent),
            Vec3::new(-half_extent, height, half_extent),
        ],
        colors: vec![Vec3::ONE; 4],
        faces: vec![PolyFace {
            verts: vec![0, 1, 2, 3],
        }],
    };
    let mesh = scene.insert_mesh(mesh);
    let node = scene.create_mesh_node("plane", mesh);
    // Ground lookup is by exact name.
    let _ = scene.rename(node, name);
    node
}

/// Node counts under one forest group.
///
/// Every segment owns a leaf, so within a tree's subtree the segments are
/// exactly the nodes that still have children and the leaves are the
/// childless ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForestCensus {
    /// Direct children of the group: one per tree.
    pub trees: usize,
    /// Branch segments (trunks excluded).
    pub branches: usize,
    /// Leaf spheres, trunk leaves included.
    pub leaves: usize,
}

/// Count trees, branches, and leaves under a forest group.
pub fn census(scene: &SceneGraph, group: NodeId) -> ForestCensus {
    let trunks = match scene.node(group) {
        Ok(n) => n.children.clone(),
        Err(_) => Vec::new(),
    };
    let mut branches = 0;
    let mut leaves = 0;
    for &trunk in &trunks {
        for n in scene.descendants(trunk).unwrap_or_default() {
            match scene.node(n) {
                Ok(node) if node.children.is_empty() => leaves += 1,
                Ok(_) => branches += 1,
                Err(_) => {}
            }
        }
    }
    ForestCensus {
        trees: trunks.len(),
        branches,
        leaves,
    }
}

/// Branch count one `grow` call produces:
/// `N(l, 0) = 0`, `N(l, r) = sum over k in 1..=l of (1 + N(k, r - 1))`.
pub fn expected_branch_count(level: u32, ramification: u32) -> u64 {
    if ramification == 0 {
        return 0;
    }
    (1..=level)
        .map(|k| 1 + expected_branch_count(k, ramification - 1))
        .sum()
}
