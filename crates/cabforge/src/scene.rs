//! Named scene hierarchy produced by a cabinet build.
//!
//! Nodes live in an arena owned by [`Scene`] and refer to their parent by
//! [`NodeId`]. A node is attached when it is created and never moves, so the
//! hierarchy is acyclic by construction; [`Scene::validate`] re-checks the
//! invariants before a scene leaves the assembler.

use std::collections::HashSet;

use cabforge_kernel_math::{Placement, Transform};
use cabforge_kernel_mesh::Mesh;
use thiserror::Error;

use crate::catalog;

/// Handle to a node within its [`Scene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in creation order.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Scene graph consistency errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SceneError {
    /// Two nodes would share a name.
    #[error("duplicate node name `{0}`")]
    DuplicateName(String),
    /// A node id does not belong to this scene.
    #[error("unknown node {0:?}")]
    UnknownNode(NodeId),
    /// No node is parentless.
    #[error("scene has no root node")]
    NoRoot,
    /// More than one node is parentless.
    #[error("scene has {0} root nodes")]
    MultipleRoots(usize),
    /// A node's parent chain does not reach the root.
    #[error("node `{0}` is not reachable from the root")]
    Detached(String),
}

/// One named element of the hierarchy.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    name: String,
    mesh: Option<Mesh>,
    placement: Placement,
    parent: Option<NodeId>,
}

impl SceneNode {
    /// Unique name within the scene.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Geometry owned by this node, if any.
    pub fn mesh(&self) -> Option<&Mesh> {
        self.mesh.as_ref()
    }

    /// Transform relative to the parent.
    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    /// Parent node; `None` only for the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }
}

/// A cabinet's node hierarchy, rooted at `cabinet-root`.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    nodes: Vec<SceneNode>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// A scene holding only the empty root node.
    pub fn new() -> Self {
        Self {
            nodes: vec![SceneNode {
                name: catalog::ROOT.to_string(),
                mesh: None,
                placement: Placement::identity(),
                parent: None,
            }],
        }
    }

    /// The root node.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Create a node under `parent`.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::UnknownNode`] if `parent` is not in this scene
    /// and [`SceneError::DuplicateName`] if `name` is taken.
    pub fn add_child(
        &mut self,
        parent: NodeId,
        name: impl Into<String>,
        mesh: Option<Mesh>,
        placement: Placement,
    ) -> Result<NodeId, SceneError> {
        if parent.0 >= self.nodes.len() {
            return Err(SceneError::UnknownNode(parent));
        }
        let name = name.into();
        if self.find(&name).is_some() {
            return Err(SceneError::DuplicateName(name));
        }
        self.nodes.push(SceneNode {
            name,
            mesh,
            placement,
            parent: Some(parent),
        });
        Ok(NodeId(self.nodes.len() - 1))
    }

    /// Look up a node.
    pub fn node(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(id.0)
    }

    /// Find a node by name.
    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.nodes.iter().position(|n| n.name == name).map(NodeId)
    }

    /// Find a node by name and return it.
    pub fn get(&self, name: &str) -> Option<&SceneNode> {
        self.find(name).and_then(|id| self.node(id))
    }

    /// All nodes in creation order. Parents always precede their children.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &SceneNode)> + '_ {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    /// Number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false; the root is created with the scene.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Direct children of `id`, in creation order.
    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        self.nodes()
            .filter(|(_, n)| n.parent == Some(id))
            .map(|(child, _)| child)
            .collect()
    }

    /// Composite transform from `id`'s local space to world space.
    pub fn world_transform(&self, id: NodeId) -> Result<Transform, SceneError> {
        let mut chain = Vec::new();
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            let node = self.node(current).ok_or(SceneError::UnknownNode(current))?;
            if chain.len() > self.nodes.len() {
                return Err(SceneError::Detached(node.name.clone()));
            }
            chain.push(node.placement.to_transform());
            cursor = node.parent;
        }
        Ok(chain
            .iter()
            .rev()
            .fold(Transform::identity(), |acc, local| acc.then(local)))
    }

    /// Check that exactly one node is parentless, that every node's chain
    /// reaches it, and that names are unique.
    pub fn validate(&self) -> Result<(), SceneError> {
        let roots: Vec<usize> = (0..self.nodes.len())
            .filter(|&i| self.nodes[i].parent.is_none())
            .collect();
        let root = match roots.as_slice() {
            [] => return Err(SceneError::NoRoot),
            [only] => *only,
            many => return Err(SceneError::MultipleRoots(many.len())),
        };

        let mut names = HashSet::with_capacity(self.nodes.len());
        for (i, node) in self.nodes.iter().enumerate() {
            if !names.insert(node.name.as_str()) {
                return Err(SceneError::DuplicateName(node.name.clone()));
            }
            let mut cursor = i;
            let mut steps = 0;
            while cursor != root {
                let parent = self.nodes[cursor]
                    .parent
                    .filter(|p| p.0 < self.nodes.len())
                    .ok_or_else(|| SceneError::Detached(node.name.clone()))?;
                cursor = parent.0;
                steps += 1;
                if steps > self.nodes.len() {
                    return Err(SceneError::Detached(node.name.clone()));
                }
            }
        }
        Ok(())
    }
}
