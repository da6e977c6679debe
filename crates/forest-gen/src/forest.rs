use rand::Rng;
use scene_kernel::{NodeId, SceneGraph};
use tracing::{info, instrument, warn};

use crate::branch::grow;
use crate::leaf::attach_leaf;
use crate::placement::place;
use crate::segment::{build_segment, trunk_steps};
use crate::snap::snap_to_ground;
use crate::types::{GenError, GenerateParams, SnapError, BRANCH_LEVEL, FOREST_GROUP};

/// Per-tree facts recorded during generation, so callers and tests can
/// inspect a run without re-walking the scene.
#[derive(Debug, Clone)]
pub struct PlantedTree {
    /// The trunk node (named `trunk{index}`).
    pub root: NodeId,
    /// The trunk's own leaf node (named `leaf{index}`).
    pub leaf: NodeId,
    /// Number of extrusion steps the trunk was built with.
    pub pivot_count: usize,
    /// World Y the tree was snapped to, when snapping ran and hit.
    pub snapped_y: Option<f32>,
}

/// Outcome of one generation run.
#[derive(Debug, Clone)]
pub struct ForestReport {
    pub group: NodeId,
    pub trees: Vec<PlantedTree>,
}

/// Generate a forest: remove any prior run's group, build a fresh one,
/// and plant `params.count` trees under it.
///
/// A missing ground name aborts the remaining batch; trees generated
/// before the failure stay in the scene. A ray that misses the ground in
/// both directions only logs a warning and leaves that tree unsnapped.
#[instrument(skip(scene, rng))]
pub fn generate(
    scene: &mut SceneGraph,
    rng: &mut impl Rng,
    params: &GenerateParams,
) -> Result<ForestReport, GenError> {
    if params.min_pos > params.max_pos {
        return Err(GenError::InvalidRange {
            min: params.min_pos,
            max: params.max_pos,
        });
    }

    clean(scene);
    info!(
        count = params.count,
        ramification = params.ramification,
        "generating forest"
    );

    let group = scene.create_group(FOREST_GROUP);
    let mut trees = Vec::with_capacity(params.count as usize);

    for index in 0..params.count {
        let steps = trunk_steps(rng);
        let trunk = build_segment(scene, rng, steps)?;
        scene.rename(trunk.node, format!("trunk{index}"))?;

        let leaf = attach_leaf(scene, &trunk)?;
        scene.rename(leaf, format!("leaf{index}"))?;

        scene.set_parent(trunk.node, group)?;

        grow(scene, rng, &trunk, BRANCH_LEVEL, params.ramification)?;

        place(scene, rng, trunk.node, params.min_pos, params.max_pos)?;

        let mut snapped_y = None;
        if params.snap_enabled {
            match snap_to_ground(scene, trunk.node, &params.ground_name) {
                Ok(y) => snapped_y = Some(y),
                Err(SnapError::NoIntersection) => {
                    warn!(tree = index, "no ground below or above tree, leaving unsnapped");
                }
                Err(SnapError::MissingGround { name }) => {
                    warn!(ground = %name, "ground node does not exist, aborting generation");
                    return Err(GenError::MissingGround { name });
                }
                Err(SnapError::Kernel(e)) => return Err(e.into()),
            }
        }

        trees.push(PlantedTree {
            root: trunk.node,
            leaf,
            pivot_count: trunk.pivots.len(),
            snapped_y,
        });
    }

    info!(trees = trees.len(), "forest generation complete");
    Ok(ForestReport { group, trees })
}

/// Remove the forest group and everything under it, if one exists.
#[instrument(skip(scene))]
pub fn clean(scene: &mut SceneGraph) {
    for id in scene.find_nodes_by_name(&format!("{FOREST_GROUP}*")) {
        // Deletion can only fail for an already-removed id.
        let _ = scene.delete(id);
    }
}
