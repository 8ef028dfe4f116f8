use serde::{Deserialize, Serialize};

use crate::events::Event;

/// Possession-event start positions for one team, in the first team's
/// attacking frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerritoryPoints {
    pub team_name: String,
    pub points: Vec<(f64, f64)>,
}

/// Start positions of both teams' possession events for territorial
/// rendering. Events carry team-relative coordinates, so the second team's
/// points are mirrored on both axes into the first team's frame. Events
/// without a position are dropped.
pub fn territorial_possession(
    events: &[Event],
    team1_name: &str,
    team2_name: &str,
) -> (TerritoryPoints, TerritoryPoints) {
    let collect = |team: &str, flip: bool| TerritoryPoints {
        team_name: team.to_string(),
        points: events
            .iter()
            .filter(|e| e.team_name == team && e.is_possession_type())
            .filter_map(|e| {
                let (x, y) = (e.start_pos_x?, e.start_pos_y?);
                Some(if flip { (-x, -y) } else { (x, y) })
            })
            .collect(),
    };

    (collect(team1_name, false), collect(team2_name, true))
}
