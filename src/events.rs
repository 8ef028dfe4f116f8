use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Result code the provider uses for a successful action (goal, completed
/// pass, won duel, ...).
pub const RESULT_SUCCESSFUL: i64 = 1;

/// Base types that count as on-ball possession when measuring ball share
/// and territory.
pub const POSSESSION_TYPES: &[&str] = &["PASS", "DRIBBLE", "TAKE_ON", "CARRY", "TOUCH"];

/// Base types that count as defensive actions for pressing metrics.
pub const DEFENSIVE_ACTIONS: &[&str] = &[
    "TACKLE",
    "CHALLENGE",
    "INTERCEPTION",
    "RECOVERY",
    "FOUL",
    "BLOCKED_PASS",
];

/// Per-event model metrics embedded by the provider. Only the values the
/// analyses read are modeled; unknown keys are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventMetrics {
    #[serde(default, rename = "xG")]
    pub xg: Option<f64>,
    #[serde(default, rename = "xA")]
    pub xa: Option<f64>,
}

/// One ball-involving action from the match event export.
///
/// Coordinates are pitch-centered meters, x in [-52.5, 52.5] and y in
/// [-34, 34], with each team attacking toward +x. Positions can be absent
/// for administrative events (substitutions, period markers); the accessor
/// methods surface those as NaN so that range comparisons simply fail, the
/// same way the upstream exports behave.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub event_id: i64,
    pub sequence_id: i64,
    /// Match clock in milliseconds.
    pub timestamp: i64,
    pub team_name: String,
    pub base_type_name: String,
    #[serde(default)]
    pub sub_type_name: Option<String>,
    #[serde(default)]
    pub result_id: Option<i64>,
    #[serde(default)]
    pub result_name: Option<String>,
    #[serde(default, rename = "startPosXM")]
    pub start_pos_x: Option<f64>,
    #[serde(default, rename = "startPosYM")]
    pub start_pos_y: Option<f64>,
    #[serde(default, rename = "endPosXM")]
    pub end_pos_x: Option<f64>,
    #[serde(default, rename = "endPosYM")]
    pub end_pos_y: Option<f64>,
    #[serde(default)]
    pub start_time_ms: Option<i64>,
    #[serde(default)]
    pub end_time_ms: Option<i64>,
    #[serde(default)]
    pub player_id: Option<i64>,
    #[serde(default)]
    pub receiver_id: Option<i64>,
    #[serde(default)]
    pub possession_type_name: Option<String>,
    #[serde(default)]
    pub shot_type_name: Option<String>,
    #[serde(default)]
    pub metrics: Option<EventMetrics>,
}

impl Event {
    pub fn is_successful(&self) -> bool {
        self.result_id == Some(RESULT_SUCCESSFUL)
    }

    pub fn start_x(&self) -> f64 {
        self.start_pos_x.unwrap_or(f64::NAN)
    }

    pub fn start_y(&self) -> f64 {
        self.start_pos_y.unwrap_or(f64::NAN)
    }

    pub fn end_x(&self) -> f64 {
        self.end_pos_x.unwrap_or(f64::NAN)
    }

    pub fn end_y(&self) -> f64 {
        self.end_pos_y.unwrap_or(f64::NAN)
    }

    /// Expected-goals value of a shot, 0 when the provider attached none.
    pub fn xg(&self) -> f64 {
        self.metrics.as_ref().and_then(|m| m.xg).unwrap_or(0.0)
    }

    /// Expected-assists value of a pass, 0 when the provider attached none.
    pub fn xa(&self) -> f64 {
        self.metrics.as_ref().and_then(|m| m.xa).unwrap_or(0.0)
    }

    /// Duration the ball was live during this event, in milliseconds.
    pub fn duration_ms(&self) -> i64 {
        match (self.start_time_ms, self.end_time_ms) {
            (Some(start), Some(end)) if end >= start => end - start,
            _ => 0,
        }
    }

    pub fn is_possession_type(&self) -> bool {
        POSSESSION_TYPES.contains(&self.base_type_name.as_str())
    }

    pub fn is_defensive_action(&self) -> bool {
        DEFENSIVE_ACTIONS.contains(&self.base_type_name.as_str())
    }
}

/// Roster row from the match export.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub player_id: i64,
    #[serde(default)]
    pub player_name: Option<String>,
    #[serde(default)]
    pub team_name: Option<String>,
    #[serde(default)]
    pub shirt_number: Option<u32>,
}

/// Lookup from player id to shirt number, used by the passing network.
pub fn shirt_numbers(players: &[Player]) -> HashMap<i64, u32> {
    players
        .iter()
        .filter_map(|p| p.shirt_number.map(|shirt| (p.player_id, shirt)))
        .collect()
}
