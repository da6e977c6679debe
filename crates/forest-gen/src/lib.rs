//! Randomized low-poly tree and forest generation over a
//! [`scene_kernel::SceneGraph`].
//!
//! Main components:
//! - [`segment`] — one trunk-or-branch segment by repeated face extrusion.
//! - [`leaf`] — leaf spheres at segment tips.
//! - [`branch`] — the recursive branching engine.
//! - [`placement`] — randomized horizontal tree placement.
//! - [`snap`] — ground snapping via two-pass ray casting.
//! - [`forest`] — the top-level `generate` / `clean` driver.
//! - [`types`] — parameters, constants, and error enums.
//!
//! All randomness is drawn from an injected `rand::Rng`, so runs are
//! reproducible from a seed.

pub mod branch;
pub mod forest;
pub mod leaf;
pub mod placement;
pub mod segment;
pub mod snap;
pub mod types;

pub use branch::grow;
pub use forest::{clean, generate, ForestReport, PlantedTree};
pub use leaf::attach_leaf;
pub use placement::place;
pub use segment::{build_segment, trunk_steps, Segment};
pub use snap::snap_to_ground;
pub use types::{GenError, GenerateParams, SnapError};
