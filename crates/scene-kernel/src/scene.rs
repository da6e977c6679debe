use glam::{EulerRot, Mat4, Quat, Vec3};
use slotmap::SlotMap;

use crate::mesh::Mesh;
use crate::types::{KernelError, MeshId, NodeId};

/// Local translate/rotate/scale of a scene node.
///
/// Rotation is XYZ Euler in degrees, matching the attribute convention of
/// the host application this kernel replaces.
#[derive(Debug, Clone, Copy)]
pub struct Trs {
    pub translation: Vec3,
    pub rotation_deg: Vec3,
    pub scale: Vec3,
}

impl Default for Trs {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation_deg: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Trs {
    pub fn matrix(&self) -> Mat4 {
        let rot = Quat::from_euler(
            EulerRot::XYZ,
            self.rotation_deg.x.to_radians(),
            self.rotation_deg.y.to_radians(),
            self.rotation_deg.z.to_radians(),
        );
        Mat4::from_scale_rotation_translation(self.scale, rot, self.translation)
    }
}

/// A transform node: a name, a local TRS, optional mesh, and index-based
/// parent/child links into the owning [`SceneGraph`].
#[derive(Debug, Clone)]
pub struct Node {
    pub name: String,
    /// Creation order; used for deterministic name-lookup ordering.
    pub serial: u64,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    pub local: Trs,
    pub mesh: Option<MeshId>,
}

/// Arena-based scene context: every builder and orchestrator call takes
/// this explicitly, there is no ambient global scene.
#[derive(Debug, Default)]
pub struct SceneGraph {
    nodes: SlotMap<NodeId, Node>,
    meshes: SlotMap<MeshId, Mesh>,
    next_serial: u64,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn mesh_count(&self) -> usize {
        self.meshes.len()
    }

    pub fn node(&self, id: NodeId) -> Result<&Node, KernelError> {
        self.nodes.get(id).ok_or(KernelError::NodeNotFound { id })
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut Node, KernelError> {
        self.nodes
            .get_mut(id)
            .ok_or(KernelError::NodeNotFound { id })
    }

    pub fn mesh(&self, id: MeshId) -> Result<&Mesh, KernelError> {
        self.meshes.get(id).ok_or(KernelError::MeshNotFound { id })
    }

    pub fn mesh_mut(&mut self, id: MeshId) -> Result<&mut Mesh, KernelError> {
        self.meshes
            .get_mut(id)
            .ok_or(KernelError::MeshNotFound { id })
    }

    pub fn insert_mesh(&mut self, mesh: Mesh) -> MeshId {
        self.meshes.insert(mesh)
    }

    /// Create a mesh-less transform node with the given exact name.
    pub fn create_group(&mut self, name: &str) -> NodeId {
        let serial = self.bump_serial();
        self.nodes.insert(Node {
            name: name.to_owned(),
            serial,
            parent: None,
            children: Vec::new(),
            local: Trs::default(),
            mesh: None,
        })
    }

    /// Create a node carrying a mesh, named `{prefix}{serial}` so names are
    /// sequential and collision-free within one scene.
    pub fn create_mesh_node(&mut self, prefix: &str, mesh: MeshId) -> NodeId {
        let serial = self.bump_serial();
        self.nodes.insert(Node {
            name: format!("{prefix}{serial}"),
            serial,
            parent: None,
            children: Vec::new(),
            local: Trs::default(),
            mesh: Some(mesh),
        })
    }

    fn bump_serial(&mut self) -> u64 {
        let s = self.next_serial;
        self.next_serial += 1;
        s
    }

    pub fn rename(&mut self, id: NodeId, name: impl Into<String>) -> Result<(), KernelError> {
        self.node_mut(id)?.name = name.into();
        Ok(())
    }

    /// Reparent `child` under `parent`, keeping the child's local transform
    /// (no world-space compensation). Rejects ancestry cycles.
    pub fn set_parent(&mut self, child: NodeId, parent: NodeId) -> Result<(), KernelError> {
        if !self.nodes.contains_key(child) {
            return Err(KernelError::NodeNotFound { id: child });
        }
        if !self.nodes.contains_key(parent) {
            return Err(KernelError::NodeNotFound { id: parent });
        }
        // Walk up from the new parent; finding `child` means a cycle.
        let mut cursor = Some(parent);
        while let Some(id) = cursor {
            if id == child {
                return Err(KernelError::ParentCycle { child, parent });
            }
            cursor = self.nodes[id].parent;
        }
        self.detach(child);
        self.nodes[child].parent = Some(parent);
        self.nodes[parent].children.push(child);
        Ok(())
    }

    fn detach(&mut self, id: NodeId) {
        if let Some(old) = self.nodes[id].parent.take() {
            self.nodes[old].children.retain(|&c| c != id);
        }
    }

    /// Delete a node, its whole subtree, and their meshes.
    pub fn delete(&mut self, id: NodeId) -> Result<(), KernelError> {
        if !self.nodes.contains_key(id) {
            return Err(KernelError::NodeNotFound { id });
        }
        self.detach(id);
        let mut doomed = vec![id];
        let mut i = 0;
        while i < doomed.len() {
            let n = doomed[i];
            doomed.extend(self.nodes[n].children.iter().copied());
            i += 1;
        }
        for n in doomed {
            if let Some(node) = self.nodes.remove(n) {
                if let Some(m) = node.mesh {
                    self.meshes.remove(m);
                }
            }
        }
        Ok(())
    }

    /// All nodes in the subtree rooted at `id`, excluding `id` itself.
    pub fn descendants(&self, id: NodeId) -> Result<Vec<NodeId>, KernelError> {
        let root = self.node(id)?;
        let mut out: Vec<NodeId> = root.children.clone();
        let mut i = 0;
        while i < out.len() {
            let n = out[i];
            out.extend(self.nodes[n].children.iter().copied());
            i += 1;
        }
        Ok(out)
    }

    /// Find nodes by exact name, or by prefix when the pattern ends in `*`.
    /// Results are ordered by creation serial.
    pub fn find_nodes_by_name(&self, pattern: &str) -> Vec<NodeId> {
        let mut found: Vec<(u64, NodeId)> = match pattern.strip_suffix('*') {
            Some(prefix) => self
                .nodes
                .iter()
                .filter(|(_, n)| n.name.starts_with(prefix))
                .map(|(id, n)| (n.serial, id))
                .collect(),
            None => self
                .nodes
                .iter()
                .filter(|(_, n)| n.name == pattern)
                .map(|(id, n)| (n.serial, id))
                .collect(),
        };
        found.sort_by_key(|&(serial, _)| serial);
        found.into_iter().map(|(_, id)| id).collect()
    }

    pub fn translation(&self, id: NodeId) -> Result<Vec3, KernelError> {
        Ok(self.node(id)?.local.translation)
    }

    pub fn set_translation(&mut self, id: NodeId, t: Vec3) -> Result<(), KernelError> {
        self.node_mut(id)?.local.translation = t;
        Ok(())
    }

    pub fn rotation_deg(&self, id: NodeId) -> Result<Vec3, KernelError> {
        Ok(self.node(id)?.local.rotation_deg)
    }

    pub fn set_rotation_deg(&mut self, id: NodeId, r: Vec3) -> Result<(), KernelError> {
        self.node_mut(id)?.local.rotation_deg = r;
        Ok(())
    }

    pub fn scale(&self, id: NodeId) -> Result<Vec3, KernelError> {
        Ok(self.node(id)?.local.scale)
    }

    pub fn set_scale(&mut self, id: NodeId, s: Vec3) -> Result<(), KernelError> {
        self.node_mut(id)?.local.scale = s;
        Ok(())
    }

    /// Object-to-world matrix, composed down the parent chain.
    pub fn world_transform(&self, id: NodeId) -> Result<Mat4, KernelError> {
        let mut m = self.node(id)?.local.matrix();
        let mut cursor = self.node(id)?.parent;
        while let Some(p) = cursor {
            let node = self.node(p)?;
            m = node.local.matrix() * m;
            cursor = node.parent;
        }
        Ok(m)
    }

    /// World-space position of the node's origin.
    pub fn world_position(&self, id: NodeId) -> Result<Vec3, KernelError> {
        Ok(self.world_transform(id)?.transform_point3(Vec3::ZERO))
    }
}
