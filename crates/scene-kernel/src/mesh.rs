use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A polygon face: ordered vertex indices, counter-clockwise around the
/// face normal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolyFace {
    pub verts: Vec<u32>,
}

/// A polygonal mesh with flat per-vertex colors.
///
/// Faces may be arbitrary n-gons; queries that need triangles
/// fan-triangulate on the fly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Mesh {
    pub positions: Vec<Vec3>,
    /// Per-vertex base color, parallel to `positions`.
    pub colors: Vec<Vec3>,
    pub faces: Vec<PolyFace>,
}

impl Mesh {
    /// Average of the face's vertex positions.
    pub fn face_centroid(&self, face: usize) -> Vec3 {
        let f = &self.faces[face];
        let sum: Vec3 = f
            .verts
            .iter()
            .map(|&v| self.positions[v as usize])
            .sum();
        sum / f.verts.len() as f32
    }

    /// Face normal via Newell's method (robust for near-planar n-gons).
    pub fn face_normal(&self, face: usize) -> Vec3 {
        let f = &self.faces[face];
        let mut n = Vec3::ZERO;
        for i in 0..f.verts.len() {
            let p = self.positions[f.verts[i] as usize];
            let q = self.positions[f.verts[(i + 1) % f.verts.len()] as usize];
            n.x += (p.y - q.y) * (p.z + q.z);
            n.y += (p.z - q.z) * (p.x + q.x);
            n.z += (p.x - q.x) * (p.y + q.y);
        }
        n.normalize_or_zero()
    }

    /// Assign the same color to every vertex.
    pub fn set_vertex_colors(&mut self, color: Vec3) {
        for c in &mut self.colors {
            *c = color;
        }
    }
}
