//! Turns a variant's part table into a validated scene.

use std::collections::HashSet;

use log::{debug, info, warn};

use crate::catalog::{self, Category};
use crate::part::PartSpec;
use crate::{BuildOptions, CabinetError, Scene, Variant};

/// Build every part of `parts` and hang it under `cabinet-root`.
///
/// Trim whose every segment is degenerate is left out with a warning. Any
/// other failure aborts the build and names the offending part.
pub fn assemble(
    variant: Variant,
    parts: &[PartSpec],
    options: &BuildOptions,
) -> Result<Scene, CabinetError> {
    options.validate()?;
    info!("Building {variant} cabinet ({} parts)", parts.len());

    let mut scene = Scene::new();
    let root = scene.root();
    let mut announced: HashSet<Category> = HashSet::new();

    for part in parts {
        if announced.insert(part.category) {
            info!("Creating {}...", part.category);
        }
        let mesh = part
            .shape
            .build(options)
            .map_err(|e| e.in_part(part.name))?;
        // only trim can come back empty
        let Some(mesh) = mesh else {
            warn!("`{}` has no usable segments, omitting it", part.name);
            continue;
        };
        debug!(
            "{}: {} vertices, {} faces",
            part.name,
            mesh.num_vertices(),
            mesh.num_faces()
        );
        scene
            .add_child(root, part.name, Some(mesh), part.placement)
            .map_err(|e| CabinetError::from(e).in_part(part.name))?;
    }

    for name in catalog::required_parts(variant) {
        if scene.find(name).is_none() {
            warn!("{variant} cabinet is missing `{name}`");
        }
    }

    scene.validate()?;
    info!("{variant} cabinet complete: {} nodes", scene.len());
    Ok(scene)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::part::{cuboid_part, PartShape, TrimSection};

    const STUB: &[(f64, f64, f64)] = &[(0.0, 0.0, 1.0), (0.0, 0.0, 1.0)];

    #[test]
    fn test_degenerate_trim_is_omitted() {
        let parts = vec![
            cuboid_part("left", Category::Structure, 0.02, 0.5, 1.0),
            PartSpec::new(
                "t-molding",
                Category::Trim,
                PartShape::Trim {
                    paths: vec![STUB],
                    section: TrimSection::Round { radius: 0.006 },
                },
            ),
        ];
        let scene = assemble(Variant::Upright, &parts, &BuildOptions::default()).unwrap();
        assert_eq!(scene.len(), 2);
        assert!(scene.find("left").is_some());
        assert!(scene.find("t-molding").is_none());
    }

    #[test]
    fn test_failure_names_the_part() {
        const LINE: &[(f64, f64)] = &[(0.0, 0.0), (1.0, 0.0)];
        let parts = vec![PartSpec::new(
            "left",
            Category::Structure,
            PartShape::Slab {
                profile: LINE,
                thickness: 0.02,
                side: cabforge_kernel_sketch::PanelSide::Left,
            },
        )];
        let err = assemble(Variant::Upright, &parts, &BuildOptions::default()).unwrap_err();
        assert!(matches!(&err, CabinetError::Part { part, .. } if part == "left"));
    }

    #[test]
    fn test_duplicate_part_aborts() {
        let parts = vec![
            cuboid_part("top", Category::Structure, 0.3, 0.5, 0.02),
            cuboid_part("top", Category::Structure, 0.3, 0.5, 0.02),
        ];
        let err = assemble(Variant::Upright, &parts, &BuildOptions::default()).unwrap_err();
        assert!(err.to_string().contains("duplicate node name `top`"));
    }

    #[test]
    fn test_invalid_options_rejected_before_building() {
        let options = BuildOptions {
            round_segments: 2,
            ..BuildOptions::default()
        };
        assert!(matches!(
            assemble(Variant::Driving, &[], &options),
            Err(CabinetError::Config(_))
        ));
    }
}
