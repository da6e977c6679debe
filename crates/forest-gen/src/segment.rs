use glam::Vec3;
use rand::Rng;
use scene_kernel::{
    create_disc, extrude_face, set_local_rotate, set_local_scale, set_local_translate, DiscSpec,
    KernelError, MeshId, NodeId, SceneGraph,
};
use tracing::{debug, instrument};

use crate::types::{BARK_COLOR, SEGMENT_RADIUS, SEGMENT_SECTORS};

/// One trunk or branch: its scene node, its mesh, and the ordered pivots
/// recorded after each extrusion step. Children attach at these pivots.
#[derive(Debug, Clone)]
pub struct Segment {
    pub node: NodeId,
    pub mesh: MeshId,
    /// Local-space tip positions, one per extrusion step.
    pub pivots: Vec<Vec3>,
}

/// Draw the trunk step count: a random integer in `[8, 12]`.
pub fn trunk_steps(rng: &mut impl Rng) -> u32 {
    rng.random_range(8..=12)
}

/// Build one segment by `steps` face extrusions of a bark-colored disc.
///
/// Each step pushes the cap outward by `uniform(0.7, 0.9)`, tilts it by a
/// single `uniform(-5, 5)` degree sample applied to both the X and Z axes,
/// shrinks it by a uniform `uniform(0.5, 0.9)` scale, and records the
/// resulting cap pivot.
#[instrument(skip(scene, rng))]
pub fn build_segment(
    scene: &mut SceneGraph,
    rng: &mut impl Rng,
    steps: u32,
) -> Result<Segment, KernelError> {
    let disc = create_disc(
        scene,
        DiscSpec {
            radius: SEGMENT_RADIUS,
            sectors: SEGMENT_SECTORS,
            rings: 1,
            smooth: true,
        },
    );
    scene.mesh_mut(disc.mesh)?.set_vertex_colors(BARK_COLOR);

    let mut pivots = Vec::with_capacity(steps as usize);
    let mut face = disc.cap;
    for _ in 0..steps {
        let tilt: f32 = rng.random_range(-5.0..=5.0);
        let push: f32 = rng.random_range(0.7..=0.9);
        let shrink: f32 = rng.random_range(0.5..=0.9);

        let mut step = extrude_face(scene, disc.mesh, face)?;
        set_local_translate(scene, &mut step, Vec3::new(0.0, 0.0, push))?;
        set_local_rotate(scene, &mut step, Vec3::new(tilt, 0.0, tilt))?;
        set_local_scale(scene, &mut step, Vec3::splat(shrink))?;

        pivots.push(step.pivot());
        face = step.cap_face();
    }

    debug!(node = ?disc.node, steps, "built segment");
    Ok(Segment {
        node: disc.node,
        mesh: disc.mesh,
        pivots,
    })
}
