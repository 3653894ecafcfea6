//! Sit-down table cabinet with the screen under glass and players facing each other.

use std::f64::consts::{FRAC_PI_2, PI};

use cabforge_kernel_sketch::{CutoutSpec, SketchPlane};

use crate::catalog::{self, Category};
use crate::part::{cuboid_part, plane_part, PartShape, PartSpec, TrimSection};

const TABLE_WIDTH: f64 = 0.70;
const TABLE_DEPTH: f64 = 0.55;
const TABLE_HEIGHT: f64 = 0.70;
const LEG_HEIGHT: f64 = 0.60;
const PANEL_THICKNESS: f64 = 0.02;

const HALF_WIDTH: f64 = TABLE_WIDTH / 2.0;
const HALF_DEPTH: f64 = TABLE_DEPTH / 2.0;
const APRON_HEIGHT: f64 = TABLE_HEIGHT - LEG_HEIGHT;
const APRON_Z: f64 = (TABLE_HEIGHT + LEG_HEIGHT) / 2.0;
// The front apron is cut 0.12 shorter for the control area. With a 0.10
// apron that leaves a 0.02 sliver, which is modelled at positive height.
const FRONT_HEIGHT: f64 = 0.12 - APRON_HEIGHT;
const SCREEN_Z: f64 = TABLE_HEIGHT - 0.01;
const PANEL_Z: f64 = TABLE_HEIGHT - 0.05;

const GLASS: CutoutSpec = CutoutSpec {
    outer_width: TABLE_WIDTH,
    outer_height: TABLE_DEPTH,
    inner_width: 0.45,
    inner_height: 0.35,
    thickness: 0.01,
};

const LEG_INSET: f64 = 0.03;
const LEG_POSITIONS: [(f64, f64); 4] = [
    (HALF_WIDTH - LEG_INSET, HALF_DEPTH - LEG_INSET),
    (-HALF_WIDTH + LEG_INSET, HALF_DEPTH - LEG_INSET),
    (HALF_WIDTH - LEG_INSET, -HALF_DEPTH + LEG_INSET),
    (-HALF_WIDTH + LEG_INSET, -HALF_DEPTH + LEG_INSET),
];

const TRIM_LOOP: &[(f64, f64, f64)] = &[
    (HALF_WIDTH, -HALF_DEPTH, TABLE_HEIGHT),
    (HALF_WIDTH, HALF_DEPTH, TABLE_HEIGHT),
    (-HALF_WIDTH, HALF_DEPTH, TABLE_HEIGHT),
    (-HALF_WIDTH, -HALF_DEPTH, TABLE_HEIGHT),
    (HALF_WIDTH, -HALF_DEPTH, TABLE_HEIGHT),
];

pub(crate) fn parts() -> Vec<PartSpec> {
    use Category::*;

    let mut parts = vec![
        cuboid_part(catalog::LEFT, Structure, PANEL_THICKNESS, TABLE_DEPTH, APRON_HEIGHT)
            .at(-HALF_WIDTH, 0.0, APRON_Z),
        cuboid_part(catalog::RIGHT, Structure, PANEL_THICKNESS, TABLE_DEPTH, APRON_HEIGHT)
            .at(HALF_WIDTH, 0.0, APRON_Z),
        cuboid_part(catalog::BACK, Structure, TABLE_WIDTH, PANEL_THICKNESS, APRON_HEIGHT)
            .at(0.0, HALF_DEPTH, APRON_Z),
        cuboid_part(catalog::FRONT, Structure, TABLE_WIDTH, PANEL_THICKNESS, FRONT_HEIGHT)
            .at(0.0, -HALF_DEPTH, APRON_Z + 0.06),
        cuboid_part(
            catalog::TOP,
            Structure,
            TABLE_WIDTH - 0.02,
            TABLE_DEPTH - 0.02,
            PANEL_THICKNESS,
        )
        .at(0.0, 0.0, TABLE_HEIGHT - 0.015),
        cuboid_part(
            catalog::BOTTOM,
            Structure,
            TABLE_WIDTH - 0.04,
            TABLE_DEPTH - 0.04,
            PANEL_THICKNESS,
        )
        .at(0.0, 0.0, LEG_HEIGHT + 0.01),
    ];

    parts.extend(LEG_POSITIONS.iter().zip(catalog::LEGS).map(|(&(x, y), name)| {
        cuboid_part(name, Structure, 0.04, 0.04, LEG_HEIGHT).at(x, y, LEG_HEIGHT / 2.0)
    }));

    parts.extend([
        plane_part(catalog::MARQUEE, Marquee, 0.15, 0.08)
            .at(HALF_WIDTH + 0.005, 0.0, PANEL_Z)
            .rotated(0.0, FRAC_PI_2, 0.0),
        PartSpec::new(
            catalog::BEZEL,
            Display,
            PartShape::Cutout {
                spec: GLASS,
                plane: SketchPlane::xy(),
            },
        )
        .at(0.0, 0.0, TABLE_HEIGHT + 0.005),
        plane_part(catalog::SCREEN, Display, 0.42, 0.32).at(0.0, 0.0, SCREEN_Z),
        plane_part(catalog::JOYSTICK, Controls, 0.30, 0.08)
            .at(0.0, -HALF_DEPTH + 0.06, PANEL_Z)
            .rotated(0.4, 0.0, 0.0),
        plane_part(catalog::JOYSTICK_2, Controls, 0.30, 0.08)
            .at(0.0, HALF_DEPTH - 0.06, PANEL_Z)
            .rotated(PI - 0.4, 0.0, 0.0),
        cuboid_part(catalog::COIN_DOOR, Hardware, 0.08, PANEL_THICKNESS + 0.005, 0.06)
            .at(0.15, -HALF_DEPTH - 0.002, LEG_HEIGHT + 0.10),
        cuboid_part(catalog::SPEAKER, Hardware, 0.15, PANEL_THICKNESS, 0.08)
            .at(0.0, -HALF_DEPTH, LEG_HEIGHT + 0.06),
        PartSpec::new(
            catalog::T_MOLDING,
            Trim,
            PartShape::Trim {
                paths: vec![TRIM_LOOP],
                section: TrimSection::Round { radius: 0.006 },
            },
        ),
        super::screen_mock(catalog::SCREEN_MOCK_HORIZONTAL)
            .at(0.0, 0.0, SCREEN_Z)
            .scaled(0.42, 0.32, 0.01),
        super::screen_mock(catalog::SCREEN_MOCK_VERTICAL)
            .at(0.0, 0.0, SCREEN_Z)
            .scaled(0.32, 0.42, 0.01),
    ]);
    parts
}
