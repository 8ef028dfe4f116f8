use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AnalysisError;
use crate::events::Event;
use crate::final_third::is_final_third_entry;
use crate::pitch_zones::{FINAL_THIRD_X, in_box};

/// Both teams attack toward +x, so 60% of the 105 m length measured from a
/// side's own goal line ends at x = 10.5 in that side's frame.
const BUILD_UP_MAX_X: f64 = 10.5;
const PRESS_MIN_X: f64 = -10.5;

const PROGRESSIVE_GAIN_M: f64 = 10.0;
const PROGRESSIVE_GAIN_FINAL_THIRD_M: f64 = 5.0;

/// Flat per-team dominance record for the match summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMetrics {
    pub team_name: String,
    pub possession_pct: f64,
    pub field_tilt_pct: f64,
    pub xg: f64,
    pub total_shots: u32,
    pub on_target_shots: u32,
    pub blocked_shots: u32,
    pub successful_passes: u32,
    pub final_third_entries: u32,
    pub box_touches: u32,
    pub progressive_passes: u32,
    pub ppda: f64,
}

/// Compute the full dominance comparison for both teams.
///
/// Zero-denominator cases (no possession events, no final-third passes, no
/// defensive actions in the pressing area) fail with
/// `AnalysisError::Computation` rather than producing NaN.
pub fn dominance_metrics(
    events: &[Event],
    team1_name: &str,
    team2_name: &str,
) -> Result<(TeamMetrics, TeamMetrics), AnalysisError> {
    let (poss1, poss2) = possession_pct(events, team1_name, team2_name)?;
    let (tilt1, tilt2) = field_tilt_pct(events, team1_name, team2_name)?;

    let team1 = team_metrics(events, team1_name, team2_name, poss1, tilt1)?;
    let team2 = team_metrics(events, team2_name, team1_name, poss2, tilt2)?;
    Ok((team1, team2))
}

fn team_metrics(
    events: &[Event],
    team_name: &str,
    opponent_name: &str,
    possession_pct: f64,
    field_tilt_pct: f64,
) -> Result<TeamMetrics, AnalysisError> {
    let mut xg = 0.0;
    let mut total_shots = 0u32;
    let mut on_target_shots = 0u32;
    let mut blocked_shots = 0u32;
    let mut successful_passes = 0u32;
    let mut final_third_entries = 0u32;
    let mut box_touches = 0u32;
    let mut progressive_passes = 0u32;

    for event in events.iter().filter(|e| e.team_name == team_name) {
        match event.base_type_name.as_str() {
            "SHOT" => {
                total_shots += 1;
                xg += event.xg();
                match event.shot_type_name.as_deref() {
                    Some("ON_TARGET") => on_target_shots += 1,
                    Some("BLOCKED") => blocked_shots += 1,
                    _ => {}
                }
            }
            "PASS" if event.is_successful() => {
                successful_passes += 1;
                if is_progressive_pass(event) {
                    progressive_passes += 1;
                }
            }
            _ => {}
        }
        if is_final_third_entry(event) {
            final_third_entries += 1;
        }
        if event.is_possession_type() && in_box(event.start_x(), event.start_y()) {
            box_touches += 1;
        }
    }

    let ppda = ppda(events, team_name, opponent_name)?;
    debug!(
        team = team_name,
        possession_pct, field_tilt_pct, xg, total_shots, ppda, "dominance metrics"
    );

    Ok(TeamMetrics {
        team_name: team_name.to_string(),
        possession_pct,
        field_tilt_pct,
        xg,
        total_shots,
        on_target_shots,
        blocked_shots,
        successful_passes,
        final_third_entries,
        box_touches,
        progressive_passes,
        ppda,
    })
}

/// Ball-share from event durations over the on-ball possession types,
/// as a percentage of both teams' combined duration.
pub fn possession_pct(
    events: &[Event],
    team1_name: &str,
    team2_name: &str,
) -> Result<(f64, f64), AnalysisError> {
    let mut team1_ms = 0i64;
    let mut team2_ms = 0i64;

    for event in events.iter().filter(|e| e.is_possession_type()) {
        if event.team_name == team1_name {
            team1_ms += event.duration_ms();
        } else if event.team_name == team2_name {
            team2_ms += event.duration_ms();
        }
    }

    let total = team1_ms + team2_ms;
    if total == 0 {
        return Err(AnalysisError::computation(
            "possession: no possession-event duration for either team",
        ));
    }
    Ok((
        team1_ms as f64 / total as f64 * 100.0,
        team2_ms as f64 / total as f64 * 100.0,
    ))
}

/// Share of passes played from inside the attacking third, per team, as a
/// percentage of both teams' final-third passes.
pub fn field_tilt_pct(
    events: &[Event],
    team1_name: &str,
    team2_name: &str,
) -> Result<(f64, f64), AnalysisError> {
    let mut team1_passes = 0u32;
    let mut team2_passes = 0u32;

    for event in events
        .iter()
        .filter(|e| e.base_type_name == "PASS" && e.start_x() >= FINAL_THIRD_X)
    {
        if event.team_name == team1_name {
            team1_passes += 1;
        } else if event.team_name == team2_name {
            team2_passes += 1;
        }
    }

    let total = team1_passes + team2_passes;
    if total == 0 {
        return Err(AnalysisError::computation(
            "field tilt: no final-third passes in the match",
        ));
    }
    Ok((
        f64::from(team1_passes) / f64::from(total) * 100.0,
        f64::from(team2_passes) / f64::from(total) * 100.0,
    ))
}

/// A successful pass that moves the ball forward far enough: 10 m when it
/// ends short of the final third, 5 m when it ends inside it. The two
/// thresholds partition all passes by end position, so exactly one applies.
pub fn is_progressive_pass(event: &Event) -> bool {
    if event.base_type_name != "PASS" || !event.is_successful() {
        return false;
    }
    let gain = event.end_x() - event.start_x();
    if event.end_x() >= FINAL_THIRD_X {
        gain >= PROGRESSIVE_GAIN_FINAL_THIRD_M
    } else {
        gain >= PROGRESSIVE_GAIN_M
    }
}

/// Passes allowed per defensive action: opponent passes and clearances
/// completed out of their own build-up area, divided by this team's
/// defensive actions in its pressing area.
pub fn ppda(
    events: &[Event],
    team_name: &str,
    opponent_name: &str,
) -> Result<f64, AnalysisError> {
    let buildup_passes = events
        .iter()
        .filter(|e| e.team_name == opponent_name)
        .filter(|e| {
            (e.base_type_name == "PASS" && e.is_successful()) || e.base_type_name == "CLEARANCE"
        })
        .filter(|e| e.start_x() <= BUILD_UP_MAX_X)
        .count();

    let defensive_actions = events
        .iter()
        .filter(|e| e.team_name == team_name && e.is_defensive_action())
        .filter(|e| e.start_x() >= PRESS_MIN_X)
        .count();

    if defensive_actions == 0 {
        return Err(AnalysisError::computation(format!(
            "ppda: no defensive actions in the pressing area for {team_name}"
        )));
    }
    Ok(buildup_passes as f64 / defensive_actions as f64)
}
