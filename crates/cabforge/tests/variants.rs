use std::collections::HashSet;

use cabforge::catalog::{self, required_parts};
use cabforge::{build, BuildOptions, Scene, Variant};
use cabforge_kernel_math::Point3;

fn built(variant: Variant) -> Scene {
    build(variant, &BuildOptions::default()).unwrap()
}

fn face_count(scene: &Scene, name: &str) -> usize {
    scene.get(name).and_then(|n| n.mesh()).map_or(0, |m| m.num_faces())
}

#[test]
fn test_every_variant_has_single_root() {
    for variant in Variant::ALL {
        let scene = built(variant);
        let roots: Vec<_> = scene
            .nodes()
            .filter(|(_, n)| n.parent().is_none())
            .map(|(_, n)| n.name().to_string())
            .collect();
        assert_eq!(roots, [catalog::ROOT], "{variant}");
        scene.validate().unwrap();
    }
}

#[test]
fn test_every_chain_reaches_root() {
    for variant in Variant::ALL {
        let scene = built(variant);
        for (id, node) in scene.nodes() {
            let mut cursor = id;
            let mut hops = 0;
            while let Some(parent) = scene.node(cursor).and_then(|n| n.parent()) {
                cursor = parent;
                hops += 1;
                assert!(hops <= scene.len(), "{} loops", node.name());
            }
            assert_eq!(cursor, scene.root(), "{variant}: {}", node.name());
        }
    }
}

#[test]
fn test_catalog_names_present() {
    for variant in Variant::ALL {
        let scene = built(variant);
        let names: HashSet<_> = scene.nodes().map(|(_, n)| n.name().to_string()).collect();
        for name in required_parts(variant) {
            assert!(names.contains(name), "{variant} is missing {name}");
        }
        // every part node carries geometry
        for (id, node) in scene.nodes() {
            if id != scene.root() {
                assert!(node.mesh().is_some_and(|m| m.num_faces() > 0), "{}", node.name());
            }
        }
    }
}

#[test]
fn test_builds_are_deterministic() {
    for variant in Variant::ALL {
        let a = built(variant);
        let b = built(variant);
        assert_eq!(a.len(), b.len());
        for ((_, na), (_, nb)) in a.nodes().zip(b.nodes()) {
            assert_eq!(na.name(), nb.name());
            assert_eq!(na.placement(), nb.placement());
            let (ma, mb) = (na.mesh(), nb.mesh());
            assert_eq!(ma.map(|m| m.vertices()), mb.map(|m| m.vertices()));
            assert_eq!(ma.map(|m| m.faces()), mb.map(|m| m.faces()));
        }
    }
}

#[test]
fn test_upright_parts() {
    let scene = built(Variant::Upright);
    for name in [
        "left",
        "right",
        "bezel",
        "screen-mock-horizontal",
        "screen-mock-vertical",
        "cp-shell",
    ] {
        assert!(scene.find(name).is_some(), "{name}");
    }
    assert_eq!(face_count(&scene, "bezel"), 16);
    // 15-point side profile
    assert_eq!(face_count(&scene, "left"), 17);
    assert_eq!(scene.get("left").unwrap().mesh().unwrap().num_vertices(), 30);
}

/// Extents of `points` along world X, Y and Z.
fn extents<'a>(points: impl IntoIterator<Item = &'a Point3>) -> [f64; 3] {
    let mut lo = [f64::INFINITY; 3];
    let mut hi = [f64::NEG_INFINITY; 3];
    for p in points {
        for k in 0..3 {
            lo[k] = lo[k].min(p[k]);
            hi[k] = hi[k].max(p[k]);
        }
    }
    [hi[0] - lo[0], hi[1] - lo[1], hi[2] - lo[2]]
}

#[test]
fn test_bezel_frame_dimensions() {
    // (variant, outer w × h, opening w × h, thickness, axes of width/height/thickness)
    let cases = [
        (Variant::Upright, (0.45, 0.40), (0.35, 0.28), 0.01, [0, 2, 1]),
        (Variant::Cocktail, (0.70, 0.55), (0.45, 0.35), 0.01, [0, 1, 2]),
        (Variant::Driving, (0.90, 0.55), (0.75, 0.45), 0.02, [0, 2, 1]),
        (Variant::LightGun, (0.75, 0.55), (0.60, 0.42), 0.015, [0, 2, 1]),
    ];
    for (variant, (ow, oh), (iw, ih), t, [w, h, d]) in cases {
        let scene = built(variant);
        let mesh = scene.get(catalog::BEZEL).and_then(|n| n.mesh()).unwrap();
        let verts = mesh.vertices();
        assert_eq!(verts.len(), 16, "{variant}");

        let outer = extents(verts);
        assert!((outer[w] - ow).abs() < 1e-9, "{variant}: outer width {}", outer[w]);
        assert!((outer[h] - oh).abs() < 1e-9, "{variant}: outer height {}", outer[h]);
        assert!((outer[d] - t).abs() < 1e-9, "{variant}: thickness {}", outer[d]);

        // inner front ring is vertices 4..8
        let opening = extents(&verts[4..8]);
        assert!((opening[w] - iw).abs() < 1e-9, "{variant}: opening width {}", opening[w]);
        assert!((opening[h] - ih).abs() < 1e-9, "{variant}: opening height {}", opening[h]);
        assert!(opening[d].abs() < 1e-9, "{variant}");
    }
}

#[test]
fn test_cocktail_parts() {
    let scene = built(Variant::Cocktail);
    for name in ["joystick", "joystick-2", "leg-1", "leg-2", "leg-3", "leg-4"] {
        assert!(scene.find(name).is_some(), "{name}");
    }
    assert_eq!(face_count(&scene, "bezel"), 16);
    // four-sided trim loop of 32-sided beads
    assert_eq!(face_count(&scene, "t-molding"), 4 * 34);
}

#[test]
fn test_driving_parts() {
    let scene = built(Variant::Driving);
    for name in ["steering-wheel", "seat", "gas-pedal", "brake-pedal", "gear-shifter"] {
        assert!(scene.find(name).is_some(), "{name}");
    }
    // 13-point wraparound profile
    assert_eq!(face_count(&scene, "right"), 15);
}

#[test]
fn test_lightgun_parts() {
    let scene = built(Variant::LightGun);
    assert!(scene.find("gun").is_some());
    assert!(scene.find("gun2").is_some());
    for absent in ["steering-wheel", "gas-pedal", "brake-pedal", "seat"] {
        assert!(scene.find(absent).is_none(), "{absent}");
    }
    // shelf loop (6 segments) and marquee loop (4 segments)
    assert_eq!(face_count(&scene, "t-molding"), 10 * 34);
}

#[test]
fn test_side_panels_mirror_each_other() {
    for variant in [Variant::Upright, Variant::Driving, Variant::LightGun] {
        let scene = built(variant);
        let summary = cabforge::summarize(&scene).unwrap();
        let bounds = |name: &str| {
            summary
                .iter()
                .find(|row| row.name == name)
                .and_then(|row| row.bounds)
                .unwrap()
        };
        let [llo, lhi] = bounds("left");
        let [rlo, rhi] = bounds("right");
        assert!((llo[1] + rhi[1]).abs() < 1e-9, "{variant}");
        assert!((lhi[1] + rlo[1]).abs() < 1e-9, "{variant}");
        assert!((llo[2] - rlo[2]).abs() < 1e-9 && (lhi[2] - rhi[2]).abs() < 1e-9);
    }
}

#[test]
fn test_coarse_options_reduce_density_only() {
    let coarse = BuildOptions {
        round_segments: 8,
        ..BuildOptions::default()
    };
    let fine = built(Variant::Cocktail);
    let rough = build(Variant::Cocktail, &coarse).unwrap();
    assert_eq!(face_count(&rough, "t-molding"), 4 * 10);
    assert_eq!(
        fine.get("bezel").unwrap().mesh(),
        rough.get("bezel").unwrap().mesh()
    );
}
