use std::f32::consts::TAU;

use glam::Vec3;
use tracing::{info, instrument};

use crate::mesh::{Mesh, PolyFace};
use crate::scene::SceneGraph;
use crate::types::{DiscSpec, MeshId, NodeId, SphereSpec};

/// Handles returned by [`create_disc`]: the scene node, its mesh, and the
/// index of the cap face the extrusion loop starts from.
#[derive(Debug, Clone, Copy)]
pub struct Disc {
    pub node: NodeId,
    pub mesh: MeshId,
    pub cap: usize,
}

/// Build a flat disc in the XZ plane at the origin: `sectors` rim vertices
/// and a single n-gon cap face whose normal is +Y.
#[instrument(skip(scene))]
pub fn create_disc(scene: &mut SceneGraph, spec: DiscSpec) -> Disc {
    info!(radius = spec.radius, sectors = spec.sectors, "creating disc primitive");
    let n = spec.sectors.max(3);
    let mut positions = Vec::with_capacity(n as usize);
    for i in 0..n {
        let theta = i as f32 * TAU / n as f32;
        // Negative Z so the 0..n winding reads counter-clockwise from +Y.
        positions.push(Vec3::new(
            spec.radius * theta.cos(),
            0.0,
            -spec.radius * theta.sin(),
        ));
    }
    let mesh = Mesh {
        colors: vec![Vec3::ONE; positions.len()],
        positions,
        faces: vec![PolyFace {
            verts: (0..n).collect(),
        }],
    };
    let mesh = scene.insert_mesh(mesh);
    let node = scene.create_mesh_node("disc", mesh);
    Disc { node, mesh, cap: 0 }
}

/// Build a UV sphere centered at the origin.
#[instrument(skip(scene))]
pub fn create_sphere(scene: &mut SceneGraph, spec: SphereSpec) -> NodeId {
    info!(radius = spec.radius, "creating sphere primitive");
    let segs = spec.segments.max(3);
    let rings = spec.rings.max(2);

    let mut positions = Vec::new();
    positions.push(Vec3::new(0.0, spec.radius, 0.0)); // north pole
    for ring in 1..rings {
        let phi = ring as f32 * std::f32::consts::PI / rings as f32;
        let y = spec.radius * phi.cos();
        let r = spec.radius * phi.sin();
        for s in 0..segs {
            let theta = s as f32 * TAU / segs as f32;
            positions.push(Vec3::new(r * theta.cos(), y, -r * theta.sin()));
        }
    }
    positions.push(Vec3::new(0.0, -spec.radius, 0.0)); // south pole

    let south = (positions.len() - 1) as u32;
    let ring_start = |ring: u32| 1 + (ring - 1) * segs;

    let mut faces = Vec::new();
    // Pole caps as triangles, inner bands as quads.
    for s in 0..segs {
        let a = ring_start(1) + s;
        let b = ring_start(1) + (s + 1) % segs;
        faces.push(PolyFace { verts: vec![0, b, a] });
    }
    for ring in 1..rings - 1 {
        for s in 0..segs {
            let a = ring_start(ring) + s;
            let b = ring_start(ring) + (s + 1) % segs;
            let c = ring_start(ring + 1) + (s + 1) % segs;
            let d = ring_start(ring + 1) + s;
            faces.push(PolyFace {
                verts: vec![a, b, c, d],
            });
        }
    }
    for s in 0..segs {
        let a = ring_start(rings - 1) + s;
        let b = ring_start(rings - 1) + (s + 1) % segs;
        faces.push(PolyFace {
            verts: vec![a, b, south],
        });
    }

    let mesh = Mesh {
        colors: vec![Vec3::ONE; positions.len()],
        positions,
        faces,
    };
    let mesh = scene.insert_mesh(mesh);
    scene.create_mesh_node("sphere", mesh)
}
