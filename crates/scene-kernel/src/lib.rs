//! Polygon-mesh scene kernel for procedural generation.
//!
//! Main components:
//! - [`scene`] — the [`SceneGraph`] arena: transform nodes, parenting,
//!   naming, deletion, world-transform composition.
//! - [`mesh`] — polygonal meshes with per-vertex colors.
//! - [`primitives`] — disc and sphere builders.
//! - [`extrude`] — face extrusion driven by explicit [`ExtrudeStep`] handles.
//! - [`raycast`] — world-space ray-mesh intersection queries.
//! - [`types`] — ids, errors, and parameter structs.

pub mod extrude;
pub mod mesh;
pub mod primitives;
pub mod raycast;
pub mod scene;
pub mod types;

pub use extrude::{extrude_face, set_local_rotate, set_local_scale, set_local_translate, ExtrudeStep};
pub use mesh::{Mesh, PolyFace};
pub use primitives::{create_disc, create_sphere, Disc};
pub use raycast::raycast;
pub use scene::{Node, SceneGraph, Trs};
pub use types::{DiscSpec, KernelError, MeshId, NodeId, RayHit, SphereSpec};
