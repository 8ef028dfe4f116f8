use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::pitch_zones::{PITCH_X_MAX, PitchZones, ZoneName};
use crate::tracking::{FRAME_SAMPLE_STEP, TrackingRow, frames_index, possession_frames, sample_frames};

/// Mean position of one defender over the frames of a zone bucket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerAvgPosition {
    pub shirt_number: u32,
    pub x: f64,
    pub y: f64,
}

/// Shape of the defending block while the ball sits in one pitch zone.
///
/// Positions are in the frame where the defended goal is at x = 52.5, so
/// `defensive_line_distance` reads as meters from the defended goal line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockAnalysis {
    pub zone: ZoneName,
    pub frames_sampled: u32,
    pub avg_positions: Vec<PlayerAvgPosition>,
    pub defensive_line_distance: f64,
    pub vertical_spread: f64,
    pub horizontal_spread: f64,
    pub hull_area: f64,
}

#[derive(Debug, Default)]
struct ZoneAccum {
    frames: u32,
    line_sum: f64,
    vertical_sum: f64,
    horizontal_sum: f64,
    hull_sum: f64,
    // shirt -> (sum x, sum y, samples)
    positions: BTreeMap<u32, (f64, f64, u32)>,
}

/// Bucket the attacker's possession frames by the ball's pitch zone and
/// reduce each bucket to the defending team's average block shape. Frames
/// with the ball outside the six zones (build-up) are skipped, as are
/// frames without a ball row; zones that never saw the ball produce no row.
pub fn analyze_block_by_ball_position(
    rows: &[TrackingRow],
    zones: &PitchZones,
    defending_team: &str,
    attacking_team: &str,
) -> Vec<BlockAnalysis> {
    let frames = sample_frames(&possession_frames(rows, attacking_team), FRAME_SAMPLE_STEP);
    let index = frames_index(rows);
    let mut buckets: BTreeMap<ZoneName, ZoneAccum> = BTreeMap::new();

    for frame_id in frames {
        let Some(frame_rows) = index.get(&frame_id) else {
            continue;
        };
        let Some(ball) = frame_rows.iter().find(|r| r.is_ball()) else {
            continue;
        };
        let zone = zones.classify(ball.x, ball.y);
        if zone == ZoneName::BuildUp {
            continue;
        }

        let defenders: Vec<&&TrackingRow> = frame_rows
            .iter()
            .filter(|r| r.team_name == defending_team)
            .collect();
        if defenders.len() < 2 {
            continue;
        }

        let mut xs: Vec<f64> = defenders.iter().map(|r| r.x).collect();
        xs.sort_by(|a, b| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));
        // The deepest player is the keeper; the line is the next one back.
        let line = xs.get(1).copied().unwrap_or(xs[0]);

        let ys: Vec<f64> = defenders.iter().map(|r| r.y).collect();
        let x_min = xs.iter().copied().fold(f64::INFINITY, f64::min);
        let x_max = xs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let y_min = ys.iter().copied().fold(f64::INFINITY, f64::min);
        let y_max = ys.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        let points: Vec<(f64, f64)> = defenders.iter().map(|r| (r.x, r.y)).collect();

        let acc = buckets.entry(zone).or_default();
        acc.frames += 1;
        acc.line_sum += PITCH_X_MAX - line;
        acc.vertical_sum += x_max - x_min;
        acc.horizontal_sum += y_max - y_min;
        acc.hull_sum += convex_hull_area(&points);
        for defender in &defenders {
            let slot = acc.positions.entry(defender.shirt_number).or_default();
            slot.0 += defender.x;
            slot.1 += defender.y;
            slot.2 += 1;
        }
    }

    let analyses: Vec<BlockAnalysis> = buckets
        .into_iter()
        .map(|(zone, acc)| {
            let n = f64::from(acc.frames);
            BlockAnalysis {
                zone,
                frames_sampled: acc.frames,
                avg_positions: acc
                    .positions
                    .into_iter()
                    .map(|(shirt, (sx, sy, count))| PlayerAvgPosition {
                        shirt_number: shirt,
                        x: sx / f64::from(count),
                        y: sy / f64::from(count),
                    })
                    .collect(),
                defensive_line_distance: acc.line_sum / n,
                vertical_spread: acc.vertical_sum / n,
                horizontal_spread: acc.horizontal_sum / n,
                hull_area: acc.hull_sum / n,
            }
        })
        .collect();

    debug!(
        defending = defending_team,
        attacking = attacking_team,
        zones = analyses.len(),
        "defensive block analysis"
    );
    analyses
}

/// Area of the convex hull of a point set (monotone chain + shoelace).
/// Fewer than three points span no area.
pub fn convex_hull_area(points: &[(f64, f64)]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let mut pts = points.to_vec();
    pts.sort_by(|a, b| {
        a.0.partial_cmp(&b.0)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
    });
    pts.dedup();
    if pts.len() < 3 {
        return 0.0;
    }

    let cross = |o: (f64, f64), a: (f64, f64), b: (f64, f64)| {
        (a.0 - o.0) * (b.1 - o.1) - (a.1 - o.1) * (b.0 - o.0)
    };

    let mut lower: Vec<(f64, f64)> = Vec::new();
    for &p in &pts {
        while lower.len() >= 2 && cross(lower[lower.len() - 2], lower[lower.len() - 1], p) <= 0.0 {
            lower.pop();
        }
        lower.push(p);
    }
    let mut upper: Vec<(f64, f64)> = Vec::new();
    for &p in pts.iter().rev() {
        while upper.len() >= 2 && cross(upper[upper.len() - 2], upper[upper.len() - 1], p) <= 0.0 {
            upper.pop();
        }
        upper.push(p);
    }
    lower.pop();
    upper.pop();
    let hull: Vec<(f64, f64)> = lower.into_iter().chain(upper).collect();
    if hull.len() < 3 {
        return 0.0;
    }

    let mut area = 0.0;
    for i in 0..hull.len() {
        let (x1, y1) = hull[i];
        let (x2, y2) = hull[(i + 1) % hull.len()];
        area += x1 * y2 - x2 * y1;
    }
    area.abs() / 2.0
}
