//! Classic stand-up cabinet.

use std::f64::consts::FRAC_PI_2;

use cabforge_kernel_sketch::{CutoutSpec, PanelSide, SketchPlane};

use crate::catalog::{self, Category};
use crate::part::{cuboid_part, flat_panel, plane_part, PartShape, PartSpec, TrimSection};
use crate::variants::Fitting;

/// Side silhouette in `(x, z)`, player side toward +X.
const SIDE_PROFILE: &[(f64, f64)] = &[
    (0.0, 0.0),
    (0.0, 0.15),
    (-0.05, 0.20),
    (-0.05, 0.70),
    (-0.15, 0.85),
    (-0.15, 1.10),
    (-0.10, 1.20),
    (-0.05, 1.50),
    (-0.08, 1.65),
    (-0.10, 1.75),
    (-0.10, 1.90),
    (-0.05, 1.95),
    (-0.35, 1.95),
    (-0.40, 1.85),
    (-0.40, 0.0),
];

const PANEL_THICKNESS: f64 = 0.02;
const PANEL_OFFSET: f64 = 0.25;

const BEZEL: CutoutSpec = CutoutSpec {
    outer_width: 0.45,
    outer_height: 0.40,
    inner_width: 0.35,
    inner_height: 0.28,
    thickness: 0.01,
};

const TRIM_LEFT: &[(f64, f64, f64)] = &[(-0.04, -0.26, 0.02), (-0.04, -0.26, 1.90)];
const TRIM_RIGHT: &[(f64, f64, f64)] = &[(-0.04, 0.26, 0.02), (-0.04, 0.26, 1.90)];
const TRIM_BOTTOM: &[(f64, f64, f64)] = &[(-0.04, -0.26, 0.02), (-0.04, 0.26, 0.02)];
const TRIM_TOP: &[(f64, f64, f64)] = &[(-0.08, -0.26, 1.90), (-0.08, 0.26, 1.90)];
const TRIM_CONTROL_PANEL: &[(f64, f64, f64)] = &[(-0.04, -0.26, 0.70), (-0.04, 0.26, 0.70)];

const SCREEN_CENTRE: (f64, f64, f64) = (-0.06, 0.0, 1.35);

pub(crate) fn parts() -> Vec<PartSpec> {
    use Category::*;
    let (sx, sy, sz) = SCREEN_CENTRE;

    vec![
        PartSpec::new(
            catalog::LEFT,
            Structure,
            PartShape::Slab {
                profile: SIDE_PROFILE,
                thickness: PANEL_THICKNESS,
                side: PanelSide::Left,
            },
        )
        .at(0.0, -PANEL_OFFSET, 0.0),
        PartSpec::new(
            catalog::RIGHT,
            Structure,
            PartShape::Slab {
                profile: SIDE_PROFILE,
                thickness: PANEL_THICKNESS,
                side: PanelSide::Right,
            },
        )
        .at(0.0, PANEL_OFFSET, 0.0),
        flat_panel(catalog::BACK, Structure, 0.50, 1.85, 0.02).at(-0.39, 0.0, 0.925),
        cuboid_part(catalog::TOP, Structure, 0.30, 0.50, 0.02).at(-0.22, 0.0, 1.94),
        cuboid_part(catalog::BOTTOM, Structure, 0.40, 0.50, 0.02).at(-0.20, 0.0, 0.01),
        flat_panel(catalog::FRONT_KICK, Structure, 0.50, 0.18, 0.02).at(-0.04, 0.0, 0.09),
        flat_panel(catalog::MARQUEE_BOX, Marquee, 0.50, 0.12, 0.10).at(-0.12, 0.0, 1.82),
        plane_part(catalog::MARQUEE, Marquee, 0.48, 0.10)
            .at(-0.06, 0.0, 1.82)
            .rotated(FRAC_PI_2, -0.1, 0.0),
        PartSpec::new(
            catalog::BEZEL,
            Display,
            PartShape::Cutout {
                spec: BEZEL,
                plane: SketchPlane::xz(),
            },
        )
        .at(-0.07, 0.0, 1.35)
        .rotated(0.0, -0.25, 0.0),
        plane_part(catalog::SCREEN, Display, 0.32, 0.26)
            .at(sx, sy, sz)
            .rotated(FRAC_PI_2, -0.25, 0.0),
        PartSpec::new(
            catalog::CP_SHELL,
            Controls,
            PartShape::Fitting(Fitting::ControlPanelShell),
        ),
        plane_part(catalog::JOYSTICK, Controls, 0.48, 0.18)
            .at(-0.08, 0.0, 0.85)
            .rotated(FRAC_PI_2 + 0.3, 0.0, 0.0),
        flat_panel(catalog::COIN_DOOR, Hardware, 0.20, 0.15, 0.02).at(-0.04, 0.0, 0.35),
        flat_panel(catalog::SPEAKER, Hardware, 0.50, 0.08, 0.02).at(-0.04, 0.0, 0.55),
        PartSpec::new(
            catalog::T_MOLDING,
            Trim,
            PartShape::Trim {
                paths: vec![
                    TRIM_LEFT,
                    TRIM_RIGHT,
                    TRIM_BOTTOM,
                    TRIM_TOP,
                    TRIM_CONTROL_PANEL,
                ],
                section: TrimSection::Box {
                    width: 0.012,
                    depth: 0.008,
                },
            },
        ),
        super::screen_mock(catalog::SCREEN_MOCK_VERTICAL)
            .at(sx, sy, sz)
            .scaled(0.01, 0.26, 0.32),
        super::screen_mock(catalog::SCREEN_MOCK_HORIZONTAL)
            .at(sx, sy, sz)
            .scaled(0.01, 0.32, 0.26),
    ]
}
