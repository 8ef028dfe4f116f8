use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::events::{Event, Player, shirt_numbers};

/// Pairs with this many completed passes or fewer are left off the network.
const EDGE_PASS_THRESHOLD: u32 = 2;

/// One player node: mean involvement position and passes made.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkNode {
    pub shirt_number: u32,
    pub x: f64,
    pub y: f64,
    pub pass_count: u32,
}

/// Unordered pair of players and the passes they exchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkEdge {
    pub shirt_a: u32,
    pub shirt_b: u32,
    pub pass_count: u32,
}

/// Build passing-network data for one team: completed open-play passes with
/// a known receiver, cut off at the team's first substitution so the graph
/// reflects a stable eleven. Node positions average each player's pass
/// origins and reception points.
pub fn passing_network(
    events: &[Event],
    players: &[Player],
    team_name: &str,
) -> (Vec<NetworkNode>, Vec<NetworkEdge>) {
    let shirts = shirt_numbers(players);
    let sub_time = events
        .iter()
        .find(|e| e.base_type_name == "SUBSTITUTE" && e.team_name == team_name)
        .map(|e| e.timestamp)
        .unwrap_or(i64::MAX);

    struct PassRow {
        passer: u32,
        receiver: u32,
        start: (f64, f64),
        end: (f64, f64),
    }

    let passes: Vec<PassRow> = events
        .iter()
        .filter(|e| {
            e.timestamp < sub_time
                && e.team_name == team_name
                && e.base_type_name == "PASS"
                && e.sub_type_name.as_deref() != Some("THROW_IN")
                && e.is_successful()
                && e.receiver_id.is_some_and(|id| id != -1)
        })
        .filter_map(|e| {
            let passer = *shirts.get(&e.player_id?)?;
            let receiver = *shirts.get(&e.receiver_id?)?;
            Some(PassRow {
                passer,
                receiver,
                start: (e.start_x(), e.start_y()),
                end: (e.end_x(), e.end_y()),
            })
        })
        .collect();

    // shirt -> (sum x, sum y, touches, passes made)
    let mut involvement: BTreeMap<u32, (f64, f64, u32, u32)> = BTreeMap::new();
    let mut pairs: HashMap<(u32, u32), u32> = HashMap::new();

    for pass in &passes {
        let made = involvement.entry(pass.passer).or_default();
        made.0 += pass.start.0;
        made.1 += pass.start.1;
        made.2 += 1;
        made.3 += 1;

        let received = involvement.entry(pass.receiver).or_default();
        received.0 += pass.end.0;
        received.1 += pass.end.1;
        received.2 += 1;

        let key = (
            pass.passer.min(pass.receiver),
            pass.passer.max(pass.receiver),
        );
        *pairs.entry(key).or_insert(0) += 1;
    }

    let nodes: Vec<NetworkNode> = involvement
        .into_iter()
        .map(|(shirt, (sx, sy, touches, made))| NetworkNode {
            shirt_number: shirt,
            x: sx / f64::from(touches),
            y: sy / f64::from(touches),
            pass_count: made,
        })
        .collect();

    let mut edges: Vec<NetworkEdge> = pairs
        .into_iter()
        .filter(|(_, count)| *count > EDGE_PASS_THRESHOLD)
        .map(|((a, b), count)| NetworkEdge {
            shirt_a: a,
            shirt_b: b,
            pass_count: count,
        })
        .collect();
    edges.sort_by_key(|e| (e.shirt_a, e.shirt_b));

    debug!(
        team = team_name,
        nodes = nodes.len(),
        edges = edges.len(),
        "passing network"
    );
    (nodes, edges)
}
