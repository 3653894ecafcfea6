//! Tall two-player light-gun cabinet.

use std::f64::consts::FRAC_PI_2;

use cabforge_kernel_sketch::{CutoutSpec, PanelSide, SketchPlane};

use crate::catalog::{self, Category};
use crate::part::{cuboid_part, plane_part, PartShape, PartSpec, TrimSection};
use crate::variants::Fitting;

/// Side silhouette in `(x, z)` with a recessed gun shelf.
const SIDE_PROFILE: &[(f64, f64)] = &[
    (0.0, 0.0),
    (0.0, 0.20),
    (-0.10, 0.30),
    (-0.10, 0.90),
    (-0.15, 1.00),
    (-0.12, 1.50),
    (-0.08, 1.80),
    (-0.05, 1.95),
    (-0.05, 2.10),
    (0.0, 2.15),
    (-0.50, 2.15),
    (-0.55, 2.00),
    (-0.55, 0.0),
];

const PANEL_THICKNESS: f64 = 0.02;
const PANEL_OFFSET: f64 = 0.40;

const BEZEL: CutoutSpec = CutoutSpec {
    outer_width: 0.75,
    outer_height: 0.55,
    inner_width: 0.60,
    inner_height: 0.42,
    thickness: 0.015,
};

const SCREEN_CENTRE: (f64, f64, f64) = (-0.12, 0.0, 1.25);
const SCREEN_TILT: f64 = -0.15;

const TRIM_SHELF: &[(f64, f64, f64)] = &[
    (-0.10, -0.40, 0.30),
    (-0.10, 0.40, 0.30),
    (-0.10, 0.40, 0.90),
    (-0.15, 0.40, 1.00),
    (-0.15, -0.40, 1.00),
    (-0.10, -0.40, 0.90),
    (-0.10, -0.40, 0.30),
];
const TRIM_MARQUEE: &[(f64, f64, f64)] = &[
    (-0.05, -0.40, 1.95),
    (-0.05, 0.40, 1.95),
    (-0.05, 0.40, 2.10),
    (-0.05, -0.40, 2.10),
    (-0.05, -0.40, 1.95),
];

pub(crate) fn parts() -> Vec<PartSpec> {
    use Category::*;
    let (sx, sy, sz) = SCREEN_CENTRE;
    let side_panel = |name, side: PanelSide| {
        PartSpec::new(
            name,
            Structure,
            PartShape::Slab {
                profile: SIDE_PROFILE,
                thickness: PANEL_THICKNESS,
                side,
            },
        )
        .at(0.0, side.sign() * PANEL_OFFSET, 0.0)
    };

    vec![
        side_panel(catalog::LEFT, PanelSide::Left),
        side_panel(catalog::RIGHT, PanelSide::Right),
        cuboid_part(catalog::BACK, Structure, 0.02, 0.78, 2.00).at(-0.54, 0.0, 1.00),
        cuboid_part(catalog::TOP, Structure, 0.50, 0.78, 0.02).at(-0.27, 0.0, 2.14),
        cuboid_part(catalog::BOTTOM, Structure, 0.55, 0.78, 0.02).at(-0.27, 0.0, 0.01),
        cuboid_part(catalog::FRONT, Structure, 0.02, 0.78, 0.50).at(-0.14, 0.0, 1.25),
        cuboid_part(catalog::FRONT_LOWER, Structure, 0.02, 0.78, 0.55).at(-0.09, 0.0, 0.60),
        cuboid_part(catalog::MARQUEE_BOX, Marquee, 0.10, 0.78, 0.15).at(-0.08, 0.0, 2.02),
        plane_part(catalog::MARQUEE, Marquee, 0.75, 0.12)
            .at(-0.04, 0.0, 2.02)
            .rotated(FRAC_PI_2, -0.1, 0.0),
        PartSpec::new(
            catalog::BEZEL,
            Display,
            PartShape::Cutout {
                spec: BEZEL,
                plane: SketchPlane::xz(),
            },
        )
        .at(-0.13, 0.0, 1.25)
        .rotated(0.0, SCREEN_TILT, 0.0),
        plane_part(catalog::SCREEN, Display, 0.56, 0.40)
            .at(sx, sy, sz)
            .rotated(FRAC_PI_2, SCREEN_TILT, 0.0),
        cuboid_part(catalog::GUN_SHELF, Controls, 0.12, 0.78, 0.02).at(-0.10, 0.0, 0.90),
        PartSpec::new(catalog::GUN, Controls, PartShape::Fitting(Fitting::LightGun))
            .at(-0.08, -0.18, 0.85),
        PartSpec::new(catalog::GUN_2, Controls, PartShape::Fitting(Fitting::LightGun))
            .at(-0.08, 0.18, 0.85),
        cuboid_part(catalog::PEDAL, Controls, 0.15, 0.25, 0.03).at(0.15, 0.0, 0.015),
        cuboid_part(catalog::COIN_DOOR, Hardware, 0.02, 0.15, 0.12).at(-0.08, 0.0, 0.25),
        cuboid_part(catalog::SPEAKER, Hardware, 0.02, 0.40, 0.08).at(-0.08, 0.0, 1.85),
        PartSpec::new(
            catalog::T_MOLDING,
            Trim,
            PartShape::Trim {
                paths: vec![TRIM_SHELF, TRIM_MARQUEE],
                section: TrimSection::Round { radius: 0.008 },
            },
        ),
        super::screen_mock(catalog::SCREEN_MOCK_HORIZONTAL)
            .at(sx, sy, sz)
            .scaled(0.01, 0.56, 0.40),
        super::screen_mock(catalog::SCREEN_MOCK_VERTICAL)
            .at(sx, sy, sz)
            .scaled(0.01, 0.40, 0.56),
    ]
}
