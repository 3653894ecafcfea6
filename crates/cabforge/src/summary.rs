//! Serializable per-node report of a built scene.

use serde::Serialize;

use crate::{CabinetError, Scene};

/// One row of the parts report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeSummary {
    /// Node name.
    pub name: String,
    /// Parent node name; `None` for the root.
    pub parent: Option<String>,
    /// Vertex count of the node's mesh.
    pub vertices: usize,
    /// Face count of the node's mesh.
    pub faces: usize,
    /// World-space `[min, max]` corners, when the node has geometry.
    pub bounds: Option<[[f64; 3]; 2]>,
}

/// Summarize every node of `scene` in creation order.
pub fn summarize(scene: &Scene) -> Result<Vec<NodeSummary>, CabinetError> {
    scene
        .nodes()
        .map(|(id, node)| -> Result<NodeSummary, CabinetError> {
            let parent = node
                .parent()
                .and_then(|p| scene.node(p))
                .map(|p| p.name().to_string());
            let (vertices, faces, bounds) = match node.mesh() {
                Some(mesh) => {
                    let world = mesh.transformed(&scene.world_transform(id)?);
                    let bounds = world
                        .bounds()
                        .map(|(lo, hi)| [[lo.x, lo.y, lo.z], [hi.x, hi.y, hi.z]]);
                    (mesh.num_vertices(), mesh.num_faces(), bounds)
                }
                None => (0, 0, None),
            };
            Ok(NodeSummary {
                name: node.name().to_string(),
                parent,
                vertices,
                faces,
                bounds,
            })
        })
        .collect()
}
