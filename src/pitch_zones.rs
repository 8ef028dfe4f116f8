use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Pitch dimensions in meters, centered at the halfway spot.
pub const PITCH_X_MAX: f64 = 52.5;
pub const PITCH_Y_MAX: f64 = 34.0;

/// The attacking third starts here for every team (both attack toward +x).
pub const FINAL_THIRD_X: f64 = 17.5;

/// Penalty box of the defended goal at x = PITCH_X_MAX.
pub const BOX_X_MIN: f64 = 36.0;
pub const BOX_Y_HALF: f64 = 20.16;

/// Lateral boundary splitting the pitch into left/center/right bands.
pub const WIDE_Y: f64 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ZoneName {
    LeftProgression,
    CenterProgression,
    RightProgression,
    LeftFinalThird,
    CenterFinalThird,
    RightFinalThird,
    /// Sentinel for anything the six zones do not cover (defensive third,
    /// off-pitch coordinates).
    BuildUp,
}

impl ZoneName {
    pub fn as_str(&self) -> &'static str {
        match self {
            ZoneName::LeftProgression => "left_progression",
            ZoneName::CenterProgression => "center_progression",
            ZoneName::RightProgression => "right_progression",
            ZoneName::LeftFinalThird => "left_final_third",
            ZoneName::CenterFinalThird => "center_final_third",
            ZoneName::RightFinalThird => "right_final_third",
            ZoneName::BuildUp => "build_up_zone",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneRect {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ZoneRect {
    pub const fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Bounds are inclusive on all sides; adjacent zones share exactly one
    /// edge value and the first match in table order wins.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x_min && x <= self.x_max && y >= self.y_min && y <= self.y_max
    }
}

/// The named zone table: middle third split into three progression lanes,
/// final third split the same way. Built once, never mutated; lookup order
/// is the declaration order below and is part of the contract.
#[derive(Debug, Clone)]
pub struct PitchZones {
    zones: Vec<(ZoneName, ZoneRect)>,
}

pub static STANDARD_ZONES: Lazy<PitchZones> = Lazy::new(PitchZones::standard);

impl PitchZones {
    pub fn standard() -> Self {
        let zones = vec![
            (
                ZoneName::LeftProgression,
                ZoneRect::new(-FINAL_THIRD_X, FINAL_THIRD_X, WIDE_Y, PITCH_Y_MAX),
            ),
            (
                ZoneName::CenterProgression,
                ZoneRect::new(-FINAL_THIRD_X, FINAL_THIRD_X, -WIDE_Y, WIDE_Y),
            ),
            (
                ZoneName::RightProgression,
                ZoneRect::new(-FINAL_THIRD_X, FINAL_THIRD_X, -PITCH_Y_MAX, -WIDE_Y),
            ),
            (
                ZoneName::LeftFinalThird,
                ZoneRect::new(FINAL_THIRD_X, PITCH_X_MAX, WIDE_Y, PITCH_Y_MAX),
            ),
            (
                ZoneName::CenterFinalThird,
                ZoneRect::new(FINAL_THIRD_X, PITCH_X_MAX, -WIDE_Y, WIDE_Y),
            ),
            (
                ZoneName::RightFinalThird,
                ZoneRect::new(FINAL_THIRD_X, PITCH_X_MAX, -PITCH_Y_MAX, -WIDE_Y),
            ),
        ];
        Self { zones }
    }

    pub fn iter(&self) -> impl Iterator<Item = &(ZoneName, ZoneRect)> {
        self.zones.iter()
    }

    pub fn boundaries(&self, name: ZoneName) -> Option<ZoneRect> {
        self.zones
            .iter()
            .find(|(zone, _)| *zone == name)
            .map(|(_, rect)| *rect)
    }

    /// Total lookup: the first zone containing the point, else `BuildUp`.
    /// Off-pitch or NaN coordinates degrade to the sentinel, never an error.
    pub fn classify(&self, x: f64, y: f64) -> ZoneName {
        for (name, rect) in &self.zones {
            if rect.contains(x, y) {
                return *name;
            }
        }
        ZoneName::BuildUp
    }
}

/// True when the point is inside the penalty box of the attacked goal.
pub fn in_box(x: f64, y: f64) -> bool {
    x >= BOX_X_MIN && x <= PITCH_X_MAX && y >= -BOX_Y_HALF && y <= BOX_Y_HALF
}
