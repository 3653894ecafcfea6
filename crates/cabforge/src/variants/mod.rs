//! Cabinet variants and their part tables.
//!
//! Each variant module exposes a single `parts()` table. The tables only
//! describe geometry; [`crate::assemble`] turns them into a scene.

mod cocktail;
mod driving;
mod fittings;
mod lightgun;
mod upright;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::Category;
use crate::part::{PartShape, PartSpec};

pub use fittings::Fitting;

/// The four cabinet styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Stand-up cabinet with a single control panel.
    Upright,
    /// Table with the screen facing up and players on both sides.
    Cocktail,
    /// Sit-down cabinet with wheel, pedals and seat.
    Driving,
    /// Two-player light-gun cabinet.
    #[serde(alias = "light-gun")]
    LightGun,
}

impl Variant {
    /// Every variant, in CLI order.
    pub const ALL: [Variant; 4] = [
        Variant::Upright,
        Variant::Cocktail,
        Variant::Driving,
        Variant::LightGun,
    ];

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Variant::Upright => "upright",
            Variant::Cocktail => "cocktail",
            Variant::Driving => "driving",
            Variant::LightGun => "lightgun",
        }
    }

    /// Where the CLI writes this variant when no output path is given.
    pub fn default_output(self) -> &'static str {
        match self {
            Variant::Upright => "/tmp/arcade_cabinet_template.glb",
            Variant::Cocktail => "/tmp/cocktail_cabinet_template.glb",
            Variant::Driving => "/tmp/driving_cabinet_template.glb",
            Variant::LightGun => "/tmp/lightgun_cabinet_template.glb",
        }
    }

    /// The variant's part table, in build order.
    pub fn parts(self) -> Vec<PartSpec> {
        match self {
            Variant::Upright => upright::parts(),
            Variant::Cocktail => cocktail::parts(),
            Variant::Driving => driving::parts(),
            Variant::LightGun => lightgun::parts(),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string names no variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown cabinet variant `{0}` (expected upright, cocktail, driving or lightgun)")]
pub struct ParseVariantError(String);

impl FromStr for Variant {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "upright" => Ok(Variant::Upright),
            "cocktail" => Ok(Variant::Cocktail),
            "driving" => Ok(Variant::Driving),
            "lightgun" | "light-gun" => Ok(Variant::LightGun),
            _ => Err(ParseVariantError(s.to_string())),
        }
    }
}

/// Orientation marker: a 0.01 cube the placement scale stretches to size.
pub(crate) fn screen_mock(name: &'static str) -> PartSpec {
    PartSpec::new(
        name,
        Category::ScreenMocks,
        PartShape::Cuboid { size: [0.01; 3] },
    )
}
