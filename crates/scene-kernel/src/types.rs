use glam::Vec3;
use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

new_key_type! {
    /// Key of a transform node in a [`crate::scene::SceneGraph`].
    pub struct NodeId;
    /// Key of a mesh in a [`crate::scene::SceneGraph`].
    pub struct MeshId;
}

/// Errors from kernel operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum KernelError {
    #[error("node not found: {id:?}")]
    NodeNotFound { id: NodeId },

    #[error("mesh not found: {id:?}")]
    MeshNotFound { id: MeshId },

    #[error("node {id:?} has no mesh attached")]
    NotAMesh { id: NodeId },

    #[error("face index {face} out of range (mesh has {count} faces)")]
    FaceOutOfRange { face: usize, count: usize },

    #[error("face {face} is degenerate (fewer than 3 vertices)")]
    DegenerateFace { face: usize },

    #[error("parenting {child:?} under {parent:?} would create a cycle")]
    ParentCycle { child: NodeId, parent: NodeId },
}

/// Result of a world-space ray query against one mesh node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RayHit {
    /// Whether at least one intersection was found.
    pub hit: bool,
    /// Intersection points in world space, nearest first.
    pub points: Vec<Vec3>,
    /// Indices of the polygon faces hit, parallel to `points`.
    pub faces: Vec<usize>,
}

impl RayHit {
    pub fn miss() -> Self {
        Self {
            hit: false,
            points: Vec::new(),
            faces: Vec::new(),
        }
    }
}

/// Parameters for a disc primitive.
///
/// `rings` and `smooth` mirror the host-application call signature this
/// kernel replaces; the cap is always a single n-gon with `sectors` rim
/// vertices, which is what the extrusion loop operates on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DiscSpec {
    pub radius: f32,
    /// Number of rim vertices (radial subdivisions).
    pub sectors: u32,
    /// Lengthwise subdivisions; carried for call-site fidelity.
    pub rings: u32,
    /// Subdivision smoothing flag; carried for call-site fidelity.
    pub smooth: bool,
}

impl Default for DiscSpec {
    fn default() -> Self {
        Self {
            radius: 1.0,
            sectors: 20,
            rings: 1,
            smooth: true,
        }
    }
}

/// Parameters for a UV-sphere primitive.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SphereSpec {
    pub radius: f32,
    /// Longitudinal segment count.
    pub segments: u32,
    /// Latitudinal ring count (pole to pole).
    pub rings: u32,
}

impl Default for SphereSpec {
    fn default() -> Self {
        // Deliberately coarse: leaves are stylized low-poly blobs.
        Self {
            radius: 1.0,
            segments: 12,
            rings: 8,
        }
    }
}
