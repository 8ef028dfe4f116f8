use serde::{Deserialize, Serialize};

use crate::events::Event;
use crate::pitch_zones::{FINAL_THIRD_X, WIDE_Y};

/// Lateral lane an entry arrives in, split on end-y alone at y = ±12.
///
/// The sign convention follows the provider's frame: negative y is the
/// right wing. This 3-way split is deliberately independent of the 6-zone
/// pitch table; the two must not be conflated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EntryZone {
    Left,
    Center,
    Right,
}

impl EntryZone {
    pub fn from_end_y(y: f64) -> Self {
        if y < -WIDE_Y {
            EntryZone::Right
        } else if y > WIDE_Y {
            EntryZone::Left
        } else {
            EntryZone::Center
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EntryZone::Left => "left",
            EntryZone::Center => "center",
            EntryZone::Right => "right",
        }
    }
}

/// True for a completed pass or dribble that crossed into the attacking
/// third: started short of x = 17.5 and ended at or beyond it.
pub fn is_final_third_entry(event: &Event) -> bool {
    matches!(event.base_type_name.as_str(), "PASS" | "DRIBBLE")
        && event.is_successful()
        && event.start_x() < FINAL_THIRD_X
        && event.end_x() >= FINAL_THIRD_X
}

/// All final-third entries in the match, both teams, in table order.
/// Events that never reach x = 17.5 are dropped entirely, not labeled.
pub fn final_third_entries<'a>(events: &'a [Event]) -> Vec<&'a Event> {
    events.iter().filter(|e| is_final_third_entry(e)).collect()
}
