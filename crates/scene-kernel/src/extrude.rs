use glam::{EulerRot, Quat, Vec3};
use tracing::{debug, instrument};

use crate::scene::SceneGraph;
use crate::types::{KernelError, MeshId};

/// Orthonormal frame of a face at extrusion time: origin at the cap
/// centroid, +Z along the cap normal.
#[derive(Debug, Clone, Copy)]
struct Frame {
    origin: Vec3,
    x: Vec3,
    y: Vec3,
    z: Vec3,
}

impl Frame {
    fn to_object(&self, p: Vec3) -> Vec3 {
        self.origin + self.x * p.x + self.y * p.y + self.z * p.z
    }

    fn to_local(&self, p: Vec3) -> Vec3 {
        let d = p - self.origin;
        Vec3::new(d.dot(self.x), d.dot(self.y), d.dot(self.z))
    }
}

/// Explicit handle to one face extrusion.
///
/// Holds the cap's local frame and the attribute values applied to it.
/// Every operation that used to depend on the host's hidden "current
/// selection" state goes through one of these instead.
#[derive(Debug, Clone)]
pub struct ExtrudeStep {
    mesh: MeshId,
    cap: usize,
    /// Indices of the duplicated cap-ring vertices.
    ring: Vec<u32>,
    /// Cap vertex coordinates in frame space, captured at extrusion time.
    base_local: Vec<Vec3>,
    frame: Frame,
    translate: Vec3,
    rotate_deg: Vec3,
    scale: Vec3,
}

impl ExtrudeStep {
    /// Face index of the (moved) cap; extrude this again to keep growing.
    pub fn cap_face(&self) -> usize {
        self.cap
    }

    /// The transformed cap centroid in object space. This is the pivot
    /// recorded after each extrusion step and exposed to children.
    pub fn pivot(&self) -> Vec3 {
        self.frame.to_object(self.translate)
    }
}

/// Extrude a polygon face: duplicate its vertex ring, stitch side quads
/// between old and new rings, and re-point the face at the new ring.
///
/// The returned handle starts with identity attributes, so until a setter
/// is called the new ring coincides with the old one.
#[instrument(skip(scene))]
pub fn extrude_face(
    scene: &mut SceneGraph,
    mesh: MeshId,
    face: usize,
) -> Result<ExtrudeStep, KernelError> {
    let m = scene.mesh(mesh)?;
    if face >= m.faces.len() {
        return Err(KernelError::FaceOutOfRange {
            face,
            count: m.faces.len(),
        });
    }
    if m.faces[face].verts.len() < 3 {
        return Err(KernelError::DegenerateFace { face });
    }

    let origin = m.face_centroid(face);
    let z = m.face_normal(face);
    let old_ring = m.faces[face].verts.clone();

    // X axis: first edge direction, orthogonalized against the normal.
    let p0 = m.positions[old_ring[0] as usize];
    let p1 = m.positions[old_ring[1] as usize];
    let mut x = (p1 - p0) - z * (p1 - p0).dot(z);
    x = x.normalize_or_zero();
    if x == Vec3::ZERO {
        x = z.any_orthonormal_vector();
    }
    let frame = Frame {
        origin,
        x,
        y: z.cross(x),
        z,
    };

    let m = scene.mesh_mut(mesh)?;
    let base = m.positions.len() as u32;
    let mut ring = Vec::with_capacity(old_ring.len());
    let mut base_local = Vec::with_capacity(old_ring.len());
    for &v in &old_ring {
        let p = m.positions[v as usize];
        let c = m.colors[v as usize];
        ring.push(m.positions.len() as u32);
        m.positions.push(p);
        m.colors.push(c);
        base_local.push(frame.to_local(p));
    }

    // Side quads wound so their normals point radially outward.
    let n = old_ring.len();
    for i in 0..n {
        let a = old_ring[i];
        let b = old_ring[(i + 1) % n];
        m.faces.push(crate::mesh::PolyFace {
            verts: vec![a, b, base + ((i + 1) % n) as u32, base + i as u32],
        });
    }
    m.faces[face].verts = ring.clone();

    debug!(?mesh, face, verts = n, "extruded face");
    Ok(ExtrudeStep {
        mesh,
        cap: face,
        ring,
        base_local,
        frame,
        translate: Vec3::ZERO,
        rotate_deg: Vec3::ZERO,
        scale: Vec3::ONE,
    })
}

/// Set the cap's local translation (frame space; +Z is along the cap
/// normal at extrusion time). Replaces any previous value.
pub fn set_local_translate(
    scene: &mut SceneGraph,
    step: &mut ExtrudeStep,
    v: Vec3,
) -> Result<(), KernelError> {
    step.translate = v;
    apply(scene, step)
}

/// Set the cap's local rotation (XYZ Euler, degrees, about the frame
/// origin). Replaces any previous value.
pub fn set_local_rotate(
    scene: &mut SceneGraph,
    step: &mut ExtrudeStep,
    deg: Vec3,
) -> Result<(), KernelError> {
    step.rotate_deg = deg;
    apply(scene, step)
}

/// Set the cap's local scale about the frame origin. Replaces any
/// previous value.
pub fn set_local_scale(
    scene: &mut SceneGraph,
    step: &mut ExtrudeStep,
    s: Vec3,
) -> Result<(), KernelError> {
    step.scale = s;
    apply(scene, step)
}

/// Recompute the cap ring from the base positions and the current
/// attribute values: `frame · (T + R · (S ∘ p))`.
fn apply(scene: &mut SceneGraph, step: &ExtrudeStep) -> Result<(), KernelError> {
    let rot = Quat::from_euler(
        EulerRot::XYZ,
        step.rotate_deg.x.to_radians(),
        step.rotate_deg.y.to_radians(),
        step.rotate_deg.z.to_radians(),
    );
    let m = scene.mesh_mut(step.mesh)?;
    for (k, &v) in step.ring.iter().enumerate() {
        let q = rot * (step.scale * step.base_local[k]) + step.translate;
        m.positions[v as usize] = step.frame.to_object(q);
    }
    Ok(())
}
