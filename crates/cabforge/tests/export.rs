#![cfg(feature = "gltf")]

use std::path::PathBuf;

use cabforge::{build, to_glb_bytes, write_glb, BuildOptions, CabinetError, Variant};

fn temp_path(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!("cabforge-{tag}-{}.glb", std::process::id()))
}

#[test]
fn test_glb_magic_and_version() {
    for variant in Variant::ALL {
        let scene = build(variant, &BuildOptions::default()).unwrap();
        let bytes = to_glb_bytes(&scene).unwrap();
        assert_eq!(&bytes[..4], b"glTF", "{variant}");
        assert_eq!(u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]), 2);
    }
}

#[test]
fn test_glb_round_trip_keeps_every_name() {
    for variant in Variant::ALL {
        let scene = build(variant, &BuildOptions::default()).unwrap();
        let bytes = to_glb_bytes(&scene).unwrap();
        let gltf = gltf::Gltf::from_slice(&bytes).unwrap();

        let exported: Vec<_> = gltf.nodes().map(|n| n.name().unwrap_or("").to_string()).collect();
        let expected: Vec<_> = scene.nodes().map(|(_, n)| n.name().to_string()).collect();
        assert_eq!(exported, expected, "{variant}");

        let default_scene = gltf.default_scene().unwrap();
        let roots: Vec<_> = default_scene.nodes().filter_map(|n| n.name()).collect();
        assert_eq!(roots, ["cabinet-root"]);

        let root = gltf.nodes().next().unwrap();
        assert_eq!(root.children().count(), scene.len() - 1);
        for node in gltf.nodes() {
            let (t, r, s) = node.transform().decomposed();
            assert_eq!((t, r, s), ([0.0; 3], [0.0, 0.0, 0.0, 1.0], [1.0; 3]));
        }
    }
}

#[test]
fn test_write_glb_creates_file() {
    let scene = build(Variant::Cocktail, &BuildOptions::default()).unwrap();
    let path = temp_path("cocktail");
    write_glb(&scene, &path).unwrap();

    let written = std::fs::read(&path).unwrap();
    assert_eq!(written, to_glb_bytes(&scene).unwrap());
    let mut tmp = path.clone().into_os_string();
    tmp.push(".tmp");
    assert!(!PathBuf::from(tmp).exists());
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_failed_write_leaves_no_file() {
    let scene = build(Variant::Upright, &BuildOptions::default()).unwrap();
    let path = std::env::temp_dir()
        .join(format!("cabforge-missing-{}", std::process::id()))
        .join("arcade.glb");
    let err = write_glb(&scene, &path).unwrap_err();
    assert!(matches!(err, CabinetError::Io(_)));
    assert!(!path.exists());
}
