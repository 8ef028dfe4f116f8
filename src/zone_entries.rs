use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::events::Event;
use crate::final_third::EntryZone;
use crate::pitch_zones::{FINAL_THIRD_X, in_box};

/// Lookahead applied after an entry when tracing what the possession
/// produced, in milliseconds.
pub const DEFAULT_OUTCOME_WINDOW_MS: i64 = 15_000;

/// What a possession produced in the window after a final-third entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SequenceOutcome {
    pub box_entry: bool,
    pub box_entry_count: u32,
    pub shot: bool,
    pub shot_count: u32,
    pub goal: bool,
    pub goal_count: u32,
    pub total_xg: f64,
    /// The defending team intercepted or cleared inside the window.
    pub turnover: bool,
    /// The ball left the final third and re-entered inside the window.
    pub recycled: bool,
}

/// One final-third entry with its lane and traced outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneEntry {
    pub event_id: i64,
    pub sequence_id: i64,
    pub timestamp: i64,
    pub team_name: String,
    pub entry_zone: EntryZone,
    pub xa: f64,
    pub outcome: SequenceOutcome,
}

/// True when the ball moved from outside the penalty box to inside it.
/// Both the x and y range must hold at the end position; an event that
/// already started inside the box does not count.
pub fn is_box_entry(event: &Event) -> bool {
    let started_inside = in_box(event.start_x(), event.start_y());
    let ended_inside = in_box(event.end_x(), event.end_y());
    !started_inside && ended_inside
}

/// Trace the outcome of the possession sequence after an entry.
///
/// Scans events of the same sequence inside the lookahead window, sorted by
/// timestamp. If any later event re-crosses the final-third line the
/// possession was recycled and scanning stops before it; a defending-team
/// interception or clearance is a turnover and ends the scan immediately.
/// Shots and box
/// entries are recorded without stopping, so several of each can land in
/// one window. Pure function of its inputs: an empty window yields the
/// default (all-false) outcome.
pub fn trace_sequence_outcome(
    events: &[Event],
    team_name: &str,
    sequence_id: i64,
    entry_event_id: i64,
    entry_timestamp: i64,
    window_ms: i64,
) -> SequenceOutcome {
    let mut outcome = SequenceOutcome::default();

    let mut window: Vec<&Event> = events
        .iter()
        .filter(|e| {
            e.sequence_id == sequence_id
                && e.timestamp >= entry_timestamp
                && e.timestamp <= entry_timestamp + window_ms
        })
        .collect();
    window.sort_by_key(|e| e.timestamp);

    // Any later event crossing the final-third line means the ball dropped
    // out and came back: count the outcome only up to that re-crossing.
    // The raw crossing is what matters here, regardless of event type,
    // result or team, so a carry or a failed pass recycles too.
    let recycled_at = window
        .iter()
        .filter(|e| {
            e.event_id != entry_event_id
                && e.start_x() < FINAL_THIRD_X
                && e.end_x() >= FINAL_THIRD_X
        })
        .map(|e| e.timestamp)
        .min();
    if let Some(cutoff) = recycled_at {
        outcome.recycled = true;
        window.retain(|e| e.timestamp < cutoff);
    }

    for event in window {
        // Turnover first: nothing after it is scanned regardless of type.
        if matches!(event.base_type_name.as_str(), "INTERCEPTION" | "CLEARANCE")
            && event.team_name != team_name
        {
            outcome.turnover = true;
            break;
        }

        if is_box_entry(event) {
            outcome.box_entry = true;
            outcome.box_entry_count += 1;
        }

        if event.base_type_name == "SHOT" {
            outcome.shot = true;
            outcome.shot_count += 1;
            outcome.total_xg += event.xg();
            if event.is_successful() {
                outcome.goal = true;
                outcome.goal_count += 1;
            }
        }
    }

    outcome
}

/// Build the zone-entry table for one team: its final-third entries with
/// the lane classified from the end position and the traced outcome.
pub fn zone_entries(
    events: &[Event],
    entries: &[&Event],
    team_name: &str,
    window_ms: i64,
) -> Vec<ZoneEntry> {
    let rows: Vec<ZoneEntry> = entries
        .iter()
        .filter(|e| e.team_name == team_name)
        .map(|entry| ZoneEntry {
            event_id: entry.event_id,
            sequence_id: entry.sequence_id,
            timestamp: entry.timestamp,
            team_name: entry.team_name.clone(),
            entry_zone: EntryZone::from_end_y(entry.end_y()),
            xa: entry.xa(),
            outcome: trace_sequence_outcome(
                events,
                team_name,
                entry.sequence_id,
                entry.event_id,
                entry.timestamp,
                window_ms,
            ),
        })
        .collect();

    debug!(team = team_name, entries = rows.len(), "zone entries traced");
    rows
}
