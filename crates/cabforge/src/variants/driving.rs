//! Sit-down driving cabinet with wheel, pedals, shifter and seat.

use std::f64::consts::FRAC_PI_2;

use cabforge_kernel_sketch::{CutoutSpec, PanelSide, SketchPlane};

use crate::catalog::{self, Category};
use crate::part::{cuboid_part, plane_part, PartShape, PartSpec, TrimSection};
use crate::variants::Fitting;

/// Side silhouette in `(x, z)`: deep base for the seat, tall screen hood.
const SIDE_PROFILE: &[(f64, f64)] = &[
    (0.0, 0.0),
    (0.0, 0.40),
    (-0.20, 0.50),
    (-0.30, 0.80),
    (-0.35, 1.10),
    (-0.30, 1.50),
    (-0.25, 1.70),
    (-0.20, 1.85),
    (-0.15, 1.95),
    (-0.80, 1.95),
    (-0.85, 1.80),
    (-0.85, 0.35),
    (-0.80, 0.0),
];

const PANEL_THICKNESS: f64 = 0.02;
const PANEL_OFFSET: f64 = 0.49;

const BEZEL: CutoutSpec = CutoutSpec {
    outer_width: 0.90,
    outer_height: 0.55,
    inner_width: 0.75,
    inner_height: 0.45,
    thickness: 0.02,
};

const SCREEN_CENTRE: (f64, f64, f64) = (-0.31, 0.0, 1.30);
const SCREEN_TILT: f64 = -0.25;

const TRIM_EDGE: &[(f64, f64, f64)] = &[
    (-0.20, -0.50, 0.50),
    (-0.20, -0.50, 1.70),
    (-0.15, -0.50, 1.95),
    (-0.15, 0.50, 1.95),
    (-0.20, 0.50, 1.70),
    (-0.20, 0.50, 0.50),
];

fn side_panel(name: &'static str, side: PanelSide) -> PartSpec {
    PartSpec::new(
        name,
        Category::Structure,
        PartShape::Slab {
            profile: SIDE_PROFILE,
            thickness: PANEL_THICKNESS,
            side,
        },
    )
    .at(0.0, side.sign() * PANEL_OFFSET, 0.0)
}

pub(crate) fn parts() -> Vec<PartSpec> {
    use Category::*;
    let (sx, sy, sz) = SCREEN_CENTRE;

    vec![
        side_panel(catalog::LEFT, PanelSide::Left),
        side_panel(catalog::RIGHT, PanelSide::Right),
        cuboid_part(catalog::BACK, Structure, 0.02, 0.98, 1.60).at(-0.84, 0.0, 0.90),
        cuboid_part(catalog::TOP, Structure, 0.70, 0.98, 0.02).at(-0.47, 0.0, 1.94),
        cuboid_part(catalog::BOTTOM, Structure, 0.85, 0.98, 0.02).at(-0.42, 0.0, 0.01),
        cuboid_part(catalog::FRONT_KICK, Structure, 0.15, 0.60, 0.02)
            .at(-0.07, 0.0, 0.25)
            .rotated(1.2, 0.0, 0.0),
        cuboid_part(catalog::MARQUEE_BOX, Marquee, 0.12, 0.98, 0.15).at(-0.19, 0.0, 1.87),
        plane_part(catalog::MARQUEE, Marquee, 0.90, 0.12)
            .at(-0.17, 0.0, 1.90)
            .rotated(FRAC_PI_2, -0.15, 0.0),
        PartSpec::new(
            catalog::BEZEL,
            Display,
            PartShape::Cutout {
                spec: BEZEL,
                plane: SketchPlane::xz(),
            },
        )
        .at(-0.32, 0.0, 1.30)
        .rotated(0.0, SCREEN_TILT, 0.0),
        plane_part(catalog::SCREEN, Display, 0.72, 0.42)
            .at(sx, sy, sz)
            .rotated(FRAC_PI_2, SCREEN_TILT, 0.0),
        cuboid_part(catalog::DASHBOARD, Controls, 0.25, 0.70, 0.02)
            .at(-0.27, 0.0, 0.72)
            .rotated(0.8, 0.0, 0.0),
        PartSpec::new(
            catalog::STEERING_WHEEL,
            Controls,
            PartShape::Fitting(Fitting::SteeringWheel),
        )
        .at(-0.15, 0.0, 0.85),
        cuboid_part(catalog::STEERING_COLUMN, Controls, 0.08, 0.10, 0.25)
            .at(-0.20, 0.0, 0.70)
            .rotated(0.5, 0.0, 0.0),
        cuboid_part(catalog::GAS_PEDAL, Controls, 0.08, 0.12, 0.02)
            .at(-0.05, 0.15, 0.05)
            .rotated(0.6, 0.0, 0.0),
        cuboid_part(catalog::BRAKE_PEDAL, Controls, 0.10, 0.15, 0.02)
            .at(-0.05, -0.10, 0.05)
            .rotated(0.6, 0.0, 0.0),
        PartSpec::new(
            catalog::GEAR_SHIFTER,
            Controls,
            PartShape::Fitting(Fitting::GearShifter),
        )
        .at(-0.25, 0.25, 0.55),
        PartSpec::new(catalog::SEAT, Controls, PartShape::Fitting(Fitting::Seat))
            .at(-0.55, 0.0, 0.30),
        cuboid_part(catalog::COIN_DOOR, Hardware, 0.02, 0.15, 0.10).at(-0.05, 0.30, 0.35),
        cuboid_part(catalog::SPEAKER, Hardware, 0.02, 0.30, 0.08).at(-0.22, 0.0, 1.65),
        PartSpec::new(
            catalog::T_MOLDING,
            Trim,
            PartShape::Trim {
                paths: vec![TRIM_EDGE],
                section: TrimSection::Round { radius: 0.008 },
            },
        ),
        super::screen_mock(catalog::SCREEN_MOCK_HORIZONTAL)
            .at(sx, sy, sz)
            .scaled(0.01, 0.72, 0.42),
        super::screen_mock(catalog::SCREEN_MOCK_VERTICAL)
            .at(sx, sy, sz)
            .scaled(0.01, 0.42, 0.72),
    ]
}
