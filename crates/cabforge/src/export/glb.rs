//! Binary glTF (`.glb`) export.
//!
//! Every scene node becomes a glTF node with the same name and the same
//! parent/child links, in the same order. World transforms are baked into
//! the vertex positions, so exported nodes carry no transform of their own.
//! All geometry shares one binary buffer: per mesh, a `VEC3`/`f32` position
//! view followed by a `u32` index view.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use gltf::binary::{Glb, Header};
use gltf::json::{self, validation::Checked::Valid, validation::USize64, Index};
use log::{debug, info};

use crate::{CabinetError, Scene};

/// Encode `scene` as a GLB byte buffer.
pub fn to_glb_bytes(scene: &Scene) -> Result<Vec<u8>, CabinetError> {
    scene.validate()?;

    let mut root = json::Root::default();
    let mut bin: Vec<u8> = Vec::new();
    let mut meshes: Vec<Option<Index<json::Mesh>>> = Vec::with_capacity(scene.len());

    // the only buffer; pushed once its length is known
    let buffer: Index<json::Buffer> = Index::new(0);

    for (id, node) in scene.nodes() {
        let Some(mesh) = node.mesh() else {
            meshes.push(None);
            continue;
        };
        let world = scene.world_transform(id)?;
        let tri = mesh.transformed(&world).triangulate();
        let Some((min, max)) = tri.bounds() else {
            meshes.push(None);
            continue;
        };
        if tri.num_triangles() == 0 {
            meshes.push(None);
            continue;
        }

        let positions_view = push_view(
            &mut root,
            &mut bin,
            buffer,
            tri.vertices.iter().flat_map(|v| v.to_le_bytes()),
            json::buffer::Target::ArrayBuffer,
        );
        let positions = root.push(json::Accessor {
            buffer_view: Some(positions_view),
            byte_offset: Some(USize64(0)),
            count: USize64::from(tri.num_vertices()),
            component_type: Valid(json::accessor::GenericComponentType(
                json::accessor::ComponentType::F32,
            )),
            extensions: Default::default(),
            extras: Default::default(),
            type_: Valid(json::accessor::Type::Vec3),
            min: Some(json::Value::from(min.to_vec())),
            max: Some(json::Value::from(max.to_vec())),
            name: None,
            normalized: false,
            sparse: None,
        });

        let indices_view = push_view(
            &mut root,
            &mut bin,
            buffer,
            tri.indices.iter().flat_map(|i| i.to_le_bytes()),
            json::buffer::Target::ElementArrayBuffer,
        );
        let indices = root.push(json::Accessor {
            buffer_view: Some(indices_view),
            byte_offset: Some(USize64(0)),
            count: USize64::from(tri.indices.len()),
            component_type: Valid(json::accessor::GenericComponentType(
                json::accessor::ComponentType::U32,
            )),
            extensions: Default::default(),
            extras: Default::default(),
            type_: Valid(json::accessor::Type::Scalar),
            min: None,
            max: None,
            name: None,
            normalized: false,
            sparse: None,
        });

        let primitive = json::mesh::Primitive {
            attributes: BTreeMap::from([(Valid(json::mesh::Semantic::Positions), positions)]),
            extensions: Default::default(),
            extras: Default::default(),
            indices: Some(indices),
            material: None,
            mode: Valid(json::mesh::Mode::Triangles),
            targets: None,
        };
        meshes.push(Some(root.push(json::Mesh {
            extensions: Default::default(),
            extras: Default::default(),
            name: Some(node.name().to_string()),
            primitives: vec![primitive],
            weights: None,
        })));
        debug!("{}: {} triangles", node.name(), tri.num_triangles());
    }

    root.push(json::Buffer {
        byte_length: USize64::from(bin.len()),
        extensions: Default::default(),
        extras: Default::default(),
        name: None,
        uri: None,
    });

    for ((id, node), mesh) in scene.nodes().zip(meshes) {
        let children = scene
            .children(id)
            .into_iter()
            .map(|child| node_index(child.index()))
            .collect::<Result<Vec<_>, _>>()?;
        root.push(json::Node {
            children: (!children.is_empty()).then_some(children),
            mesh,
            name: Some(node.name().to_string()),
            ..Default::default()
        });
    }
    let scene_index = root.push(json::Scene {
        extensions: Default::default(),
        extras: Default::default(),
        name: None,
        nodes: vec![node_index(scene.root().index())?],
    });
    root.scene = Some(scene_index);

    let json_string =
        json::serialize::to_string(&root).map_err(|e| CabinetError::Export(e.to_string()))?;
    let mut length = GLB_HEADER + CHUNK_HEADER + padded(json_string.len());
    if !bin.is_empty() {
        length += CHUNK_HEADER + padded(bin.len());
    }
    let length = u32::try_from(length)
        .map_err(|_| CabinetError::Export(format!("{length} bytes exceeds the GLB limit")))?;
    let glb = Glb {
        header: Header {
            magic: *b"glTF",
            version: 2,
            length,
        },
        bin: (!bin.is_empty()).then_some(Cow::Owned(bin)),
        json: Cow::Owned(json_string.into_bytes()),
    };
    glb.to_vec().map_err(|e| CabinetError::Export(e.to_string()))
}

/// glTF node indices are `u32`; scene node `i` becomes glTF node `i`.
fn node_index(index: usize) -> Result<Index<json::Node>, CabinetError> {
    u32::try_from(index)
        .map(Index::new)
        .map_err(|_| CabinetError::Export(format!("node index {index} exceeds the glTF limit")))
}

const GLB_HEADER: usize = 12;
const CHUNK_HEADER: usize = 8;

fn padded(len: usize) -> usize {
    len.div_ceil(4) * 4
}

/// Append `bytes` to the shared buffer and register a view over them.
fn push_view(
    root: &mut json::Root,
    bin: &mut Vec<u8>,
    buffer: Index<json::Buffer>,
    bytes: impl Iterator<Item = u8>,
    target: json::buffer::Target,
) -> Index<json::buffer::View> {
    let offset = bin.len();
    bin.extend(bytes);
    root.push(json::buffer::View {
        buffer,
        byte_length: USize64::from(bin.len() - offset),
        byte_offset: Some(USize64::from(offset)),
        byte_stride: None,
        extensions: Default::default(),
        extras: Default::default(),
        name: None,
        target: Some(Valid(target)),
    })
}

/// Write `scene` to `path` as GLB.
///
/// The bytes go to a sibling temporary file that is renamed over `path`, so
/// a failed export never leaves a partial file behind.
pub fn write_glb(scene: &Scene, path: impl AsRef<Path>) -> Result<(), CabinetError> {
    let path = path.as_ref();
    let bytes = to_glb_bytes(scene)?;
    let tmp = temp_sibling(path);
    let result = fs::write(&tmp, &bytes).and_then(|()| fs::rename(&tmp, path));
    if let Err(e) = result {
        let _ = fs::remove_file(&tmp);
        return Err(e.into());
    }
    info!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}
