//! Multi-primitive parts assembled in their own local space.
//!
//! Each fitting is a handful of primitives placed relative to the part
//! origin and concatenated into one mesh; the part's placement then puts
//! the whole fitting into the cabinet.

use std::f64::consts::{FRAC_PI_2, TAU};

use cabforge_kernel_math::{Point3, Transform};
use cabforge_kernel_mesh::{cuboid, cylinder, torus, uv_sphere, Mesh, MeshBuilder, MeshError};

use crate::BuildOptions;

/// Composite part shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fitting {
    /// Wedge-shaped upright control panel housing, modelled in cabinet space.
    ControlPanelShell,
    /// Rim, hub and three spokes, tilted toward the player.
    SteeringWheel,
    /// Base, shaft and ball knob.
    GearShifter,
    /// Cushion with a raked backrest.
    Seat,
    /// Body, barrel and handle.
    LightGun,
}

impl Fitting {
    /// Build the fitting's mesh at the given tessellation density.
    pub fn build(self, options: &BuildOptions) -> Result<Mesh, MeshError> {
        match self {
            Fitting::ControlPanelShell => control_panel_shell(),
            Fitting::SteeringWheel => steering_wheel(options),
            Fitting::GearShifter => gear_shifter(options),
            Fitting::Seat => seat(),
            Fitting::LightGun => light_gun(options),
        }
    }
}

// Tilt of the wheel plane away from vertical.
const WHEEL_TILT: f64 = FRAC_PI_2 - 0.5;

fn control_panel_shell() -> Result<Mesh, MeshError> {
    const HALF_WIDTH: f64 = 0.25;
    const FRONT_X: f64 = -0.04;
    const BACK_X: f64 = -0.22;
    const FRONT_Z: f64 = 0.90;
    const BACK_Z: f64 = 0.75;
    const THICKNESS: f64 = 0.03;

    let mut b = MeshBuilder::with_capacity(8, 6);
    let top = b.add_vertices([
        Point3::new(FRONT_X, -HALF_WIDTH, FRONT_Z),
        Point3::new(FRONT_X, HALF_WIDTH, FRONT_Z),
        Point3::new(BACK_X, HALF_WIDTH, BACK_Z),
        Point3::new(BACK_X, -HALF_WIDTH, BACK_Z),
    ]);
    let bottom = b.add_vertices(
        [
            (FRONT_X, -HALF_WIDTH, FRONT_Z),
            (FRONT_X, HALF_WIDTH, FRONT_Z),
            (BACK_X, HALF_WIDTH, BACK_Z),
            (BACK_X, -HALF_WIDTH, BACK_Z),
        ]
        .map(|(x, y, z)| Point3::new(x, y, z - THICKNESS)),
    );
    let (t, u) = (&top, &bottom);
    b.add_face(&[t[0], t[1], t[2], t[3]])?;
    b.add_face(&[u[3], u[2], u[1], u[0]])?;
    b.add_face(&[t[0], u[0], u[1], t[1]])?;
    b.add_face(&[t[2], u[2], u[3], t[3]])?;
    b.add_face(&[t[0], t[3], u[3], u[0]])?;
    b.add_face(&[t[1], u[1], u[2], t[2]])?;
    Ok(b.finish())
}

fn steering_wheel(options: &BuildOptions) -> Result<Mesh, MeshError> {
    let tilt = Transform::rotation_x(WHEEL_TILT);
    let rim = torus(
        0.15,
        0.015,
        options.torus_major_segments,
        options.torus_minor_segments,
    )?
    .transformed(&tilt);
    let hub = cylinder(0.04, 0.03, options.round_segments)?.transformed(&tilt);
    let spokes = (0..3)
        .map(|i| -> Result<Mesh, MeshError> {
            let angle = i as f64 * TAU / 3.0;
            let spin = Transform::rotation_xyz(WHEEL_TILT, 0.0, angle);
            Ok(cuboid(0.12, 0.015, 0.01)?.transformed(&spin))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Mesh::merge([&rim, &hub].into_iter().chain(&spokes)))
}

fn gear_shifter(options: &BuildOptions) -> Result<Mesh, MeshError> {
    let base = cylinder(0.025, 0.03, options.round_segments)?;
    let shaft = cylinder(0.012, 0.13, options.round_segments)?
        .transformed(&Transform::translation(0.0, 0.0, 0.08));
    let knob = uv_sphere(0.025, options.sphere_segments, options.sphere_rings)?
        .transformed(&Transform::translation(0.0, 0.0, 0.15));
    Ok(Mesh::merge([&base, &shaft, &knob]))
}

fn seat() -> Result<Mesh, MeshError> {
    const HALF_WIDTH: f64 = 0.20;
    const HALF_DEPTH: f64 = 0.20;
    const CUSHION: f64 = 0.08;
    const BACK_HEIGHT: f64 = 0.50;

    let cushion = cuboid(2.0 * HALF_WIDTH, 2.0 * HALF_DEPTH, CUSHION)?
        .transformed(&Transform::translation(0.0, 0.0, CUSHION * 0.5));

    // Backrest rises from the rear edge of the cushion and narrows slightly.
    let (sw, sd, sh) = (HALF_WIDTH, HALF_DEPTH, CUSHION);
    let top_z = sh + BACK_HEIGHT;
    let tw = sw * 0.9;
    let mut b = MeshBuilder::with_capacity(8, 5);
    let v = b.add_vertices([
        Point3::new(-sw, sd - 0.05, sh),
        Point3::new(sw, sd - 0.05, sh),
        Point3::new(sw, sd, sh),
        Point3::new(-sw, sd, sh),
        Point3::new(-tw, sd - 0.08, top_z),
        Point3::new(tw, sd - 0.08, top_z),
        Point3::new(tw, sd - 0.02, top_z),
        Point3::new(-tw, sd - 0.02, top_z),
    ]);
    b.add_face(&[v[0], v[1], v[5], v[4]])?;
    b.add_face(&[v[2], v[3], v[7], v[6]])?;
    b.add_face(&[v[1], v[2], v[6], v[5]])?;
    b.add_face(&[v[3], v[0], v[4], v[7]])?;
    b.add_face(&[v[4], v[5], v[6], v[7]])?;
    let backrest = b.finish();

    Ok(Mesh::merge([&cushion, &backrest]))
}

fn light_gun(options: &BuildOptions) -> Result<Mesh, MeshError> {
    let body = cuboid(0.03, 0.15, 0.04)?;
    let barrel = cylinder(0.012, 0.08, options.round_segments)?.transformed(
        &Transform::translation(0.0, 0.11, 0.0).then(&Transform::rotation_x(FRAC_PI_2)),
    );
    let handle = cuboid(0.02, 0.04, 0.06)?.transformed(
        &Transform::translation(0.0, -0.02, -0.05).then(&Transform::rotation_x(0.3)),
    );
    Ok(Mesh::merge([&body, &barrel, &handle]))
}
