use glam::Vec3;
use serde::{Deserialize, Serialize};
use scene_kernel::KernelError;

/// Per-vertex color of trunk and branch segments (dark bark brown).
pub const BARK_COLOR: Vec3 = Vec3::new(0.23, 0.13, 0.05);

/// Per-vertex color of leaf spheres (muted green).
pub const FOLIAGE_COLOR: Vec3 = Vec3::new(0.12, 0.40, 0.12);

/// Width counter passed to the branching engine for every trunk.
pub const BRANCH_LEVEL: u32 = 7;

/// Absolute per-branch uniform scale; net shrinkage compounds through the
/// node hierarchy, not through this constant.
pub const BRANCH_SCALE: f32 = 0.6;

/// Uniform scale of every leaf sphere.
pub const LEAF_SCALE: f32 = 1.5;

/// Name of the group every generation run builds under; `clean` removes
/// all nodes matching `tree_grp*`.
pub const FOREST_GROUP: &str = "tree_grp";

/// Base radius of every segment disc.
pub const SEGMENT_RADIUS: f32 = 1.0;

/// Rim vertex count of every segment disc.
pub const SEGMENT_SECTORS: u32 = 15;

/// User-facing configuration of one generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateParams {
    /// Number of trees to generate.
    pub count: u32,
    /// Recursion depth budget for branching.
    pub ramification: u32,
    /// Whether to snap each tree onto the ground surface.
    pub snap_enabled: bool,
    /// Lower bound of the X/Z placement range.
    pub min_pos: f32,
    /// Upper bound of the X/Z placement range.
    pub max_pos: f32,
    /// Name of the ground node to snap onto; only read when
    /// `snap_enabled` is true.
    pub ground_name: String,
}

/// Errors from a generation run. Kernel failures are fatal to the run.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GenError {
    /// The named ground node was not found. Aborts the remaining batch;
    /// trees generated before the failure stay in the scene.
    #[error("ground node not found: {name}")]
    MissingGround { name: String },

    #[error("invalid placement range: min {min} > max {max}")]
    InvalidRange { min: f32, max: f32 },

    #[error("kernel error: {0}")]
    Kernel(#[from] KernelError),
}

/// Errors from the ground snapper.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SnapError {
    #[error("ground node not found: {name}")]
    MissingGround { name: String },

    /// The ray missed the ground both downward and upward. Non-fatal:
    /// the affected tree keeps its vertical position.
    #[error("no ground intersection below or above the tree")]
    NoIntersection,

    #[error("kernel error: {0}")]
    Kernel(#[from] KernelError),
}
