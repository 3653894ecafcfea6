//! The part-naming contract shared with cabinet consumers.
//!
//! Names are exact strings. Renaming any of them breaks downstream tools
//! that look parts up by name, so they only ever change with a version bump.

use std::fmt;

use serde::Serialize;

use crate::Variant;

/// Name of the parentless node every part hangs from.
pub const ROOT: &str = "cabinet-root";

/// Left side panel.
pub const LEFT: &str = "left";
/// Right side panel.
pub const RIGHT: &str = "right";
/// Back panel.
pub const BACK: &str = "back";
/// Top panel.
pub const TOP: &str = "top";
/// Bottom panel.
pub const BOTTOM: &str = "bottom";
/// Monitor bezel with the screen opening.
pub const BEZEL: &str = "bezel";
/// Screen surface used for video playback.
pub const SCREEN: &str = "screen";
/// Landscape orientation marker.
pub const SCREEN_MOCK_HORIZONTAL: &str = "screen-mock-horizontal";
/// Portrait orientation marker.
pub const SCREEN_MOCK_VERTICAL: &str = "screen-mock-vertical";
/// Marquee artwork surface.
pub const MARQUEE: &str = "marquee";
/// Coin door area.
pub const COIN_DOOR: &str = "coin-door";
/// Speaker panel.
pub const SPEAKER: &str = "speaker";
/// Edge trim.
pub const T_MOLDING: &str = "t-molding";

/// Front kick plate.
pub const FRONT_KICK: &str = "front-kick";
/// Marquee housing.
pub const MARQUEE_BOX: &str = "marquee-box";
/// Control panel shell.
pub const CP_SHELL: &str = "cp-shell";
/// Control panel overlay (player one on a cocktail table).
pub const JOYSTICK: &str = "joystick";
/// Second player's control panel on a cocktail table.
pub const JOYSTICK_2: &str = "joystick-2";
/// Front apron panel.
pub const FRONT: &str = "front";
/// Lower front panel.
pub const FRONT_LOWER: &str = "front-lower";
/// Table legs.
pub const LEGS: [&str; 4] = ["leg-1", "leg-2", "leg-3", "leg-4"];
/// Driving dashboard.
pub const DASHBOARD: &str = "dashboard";
/// Steering wheel assembly.
pub const STEERING_WHEEL: &str = "steering-wheel";
/// Steering column.
pub const STEERING_COLUMN: &str = "steering-column";
/// Accelerator pedal.
pub const GAS_PEDAL: &str = "gas-pedal";
/// Brake pedal.
pub const BRAKE_PEDAL: &str = "brake-pedal";
/// Gear shifter assembly.
pub const GEAR_SHIFTER: &str = "gear-shifter";
/// Bucket seat.
pub const SEAT: &str = "seat";
/// Player one light gun.
pub const GUN: &str = "gun";
/// Player two light gun.
pub const GUN_2: &str = "gun2";
/// Shelf the guns rest on.
pub const GUN_SHELF: &str = "gun-shelf";
/// Foot pedal.
pub const PEDAL: &str = "pedal";

/// Parts present in every variant.
pub const COMMON: [&str; 13] = [
    LEFT,
    RIGHT,
    BACK,
    TOP,
    BOTTOM,
    BEZEL,
    SCREEN,
    SCREEN_MOCK_HORIZONTAL,
    SCREEN_MOCK_VERTICAL,
    MARQUEE,
    COIN_DOOR,
    SPEAKER,
    T_MOLDING,
];

const UPRIGHT: &[&str] = &[FRONT_KICK, MARQUEE_BOX, CP_SHELL, JOYSTICK];
const COCKTAIL: &[&str] = &[
    FRONT, JOYSTICK, JOYSTICK_2, LEGS[0], LEGS[1], LEGS[2], LEGS[3],
];
const DRIVING: &[&str] = &[
    DASHBOARD,
    MARQUEE_BOX,
    STEERING_WHEEL,
    STEERING_COLUMN,
    GAS_PEDAL,
    BRAKE_PEDAL,
    GEAR_SHIFTER,
    SEAT,
    FRONT_KICK,
];
const LIGHTGUN: &[&str] = &[FRONT, FRONT_LOWER, MARQUEE_BOX, GUN, GUN_2, GUN_SHELF, PEDAL];

/// Every part name a variant must provide, common parts first.
pub fn required_parts(variant: Variant) -> Vec<&'static str> {
    let extra = match variant {
        Variant::Upright => UPRIGHT,
        Variant::Cocktail => COCKTAIL,
        Variant::Driving => DRIVING,
        Variant::LightGun => LIGHTGUN,
    };
    COMMON.iter().chain(extra).copied().collect()
}

/// Progress group a part is built under; one log line per group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Side, back, top and bottom panels, legs and aprons.
    Structure,
    /// Marquee surface and housing.
    Marquee,
    /// Bezel and screen.
    Display,
    /// Control panels, wheels, pedals, guns and seating.
    Controls,
    /// Coin door and speaker.
    Hardware,
    /// Edge trim.
    Trim,
    /// Orientation markers.
    ScreenMocks,
}

impl Category {
    /// Human-readable label used in progress output.
    pub fn label(self) -> &'static str {
        match self {
            Category::Structure => "cabinet panels",
            Category::Marquee => "marquee",
            Category::Display => "bezel and screen",
            Category::Controls => "controls",
            Category::Hardware => "coin door and speaker",
            Category::Trim => "T-molding",
            Category::ScreenMocks => "screen mocks",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
