use std::collections::{BTreeMap, HashMap, HashSet};
use std::fs::File;
use std::path::Path;

use parquet::file::reader::{FileReader, SerializedFileReader};
use parquet::record::{Field, Row};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::AnalysisError;

/// Tracking data is 25 Hz; every 10th frame is plenty for positional
/// aggregates and bounds the per-frame scan cost.
pub const FRAME_SAMPLE_STEP: usize = 10;

/// Synthetic team label for the ball rows of the long-format table.
pub const BALL_TEAM: &str = "ball";

/// One player (or ball) position in one frame, long format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackingRow {
    pub frame_id: i64,
    pub period_id: i64,
    pub timestamp: i64,
    pub team_name: String,
    pub shirt_number: u32,
    pub x: f64,
    pub y: f64,
    pub speed: f64,
    /// Which team last touched the ball, resolved to a team name.
    pub last_touch: Option<String>,
}

impl TrackingRow {
    pub fn is_ball(&self) -> bool {
        self.team_name == BALL_TEAM
    }
}

/// Maps the provider's home/away side codes to team names.
#[derive(Debug, Clone)]
pub struct SideNames {
    pub home: String,
    pub away: String,
}

impl SideNames {
    fn resolve(&self, side: &str) -> Option<String> {
        match side {
            "home" => Some(self.home.clone()),
            "away" => Some(self.away.clone()),
            _ => None,
        }
    }
}

/// Load a tracking parquet file into long-format rows.
///
/// Accepts either layout the provider exports: the long table (one row per
/// player per frame) is read directly; the wide table (one row per frame,
/// `<side>_<shirt>_<prop>` columns plus `ball_*` columns) is melted the
/// same way the long export is produced upstream, dropping players who are
/// off the pitch in a frame.
pub fn load_tracking(path: &Path, sides: &SideNames) -> Result<Vec<TrackingRow>, AnalysisError> {
    if !path.exists() {
        return Err(AnalysisError::MissingInput {
            path: path.to_path_buf(),
        });
    }
    let file = File::open(path).map_err(|source| AnalysisError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = SerializedFileReader::new(file).map_err(|source| AnalysisError::Tracking {
        path: path.to_path_buf(),
        source,
    })?;
    let iter = reader
        .get_row_iter(None)
        .map_err(|source| AnalysisError::Tracking {
            path: path.to_path_buf(),
            source,
        })?;

    let mut rows = Vec::new();
    let mut wide = None;
    for row in iter {
        let row = row.map_err(|source| AnalysisError::Tracking {
            path: path.to_path_buf(),
            source,
        })?;
        let is_wide = *wide.get_or_insert_with(|| row_is_wide(&row));
        if is_wide {
            melt_wide_row(&row, sides, &mut rows);
        } else if let Some(parsed) = parse_long_row(&row) {
            rows.push(parsed);
        }
    }

    if rows.is_empty() {
        return Err(AnalysisError::empty(format!(
            "tracking file {} holds no frames",
            path.display()
        )));
    }
    info!(rows = rows.len(), path = %path.display(), "loaded tracking data");
    Ok(rows)
}

fn row_is_wide(row: &Row) -> bool {
    row.get_column_iter().any(|(name, _)| name == "ball_x")
}

fn parse_long_row(row: &Row) -> Option<TrackingRow> {
    let mut fields: HashMap<&str, &Field> = HashMap::new();
    for (name, field) in row.get_column_iter() {
        fields.insert(name.as_str(), field);
    }

    Some(TrackingRow {
        frame_id: field_i64(fields.get("frame_id")?)?,
        period_id: fields.get("period_id").and_then(|f| field_i64(f)).unwrap_or(0),
        timestamp: fields.get("timestamp").and_then(|f| field_i64(f)).unwrap_or(0),
        team_name: field_str(fields.get("team_name")?)?,
        shirt_number: fields
            .get("shirt_number")
            .and_then(|f| field_i64(f))
            .unwrap_or(0) as u32,
        x: field_f64(fields.get("x")?)?,
        y: field_f64(fields.get("y")?)?,
        speed: fields.get("speed").and_then(|f| field_f64(f)).unwrap_or(0.0),
        last_touch: fields.get("last_touch").and_then(|f| field_str(f)),
    })
}

fn melt_wide_row(row: &Row, sides: &SideNames, out: &mut Vec<TrackingRow>) {
    let mut frame_id = 0i64;
    let mut period_id = 0i64;
    let mut timestamp = 0i64;
    let mut last_touch = None;
    let mut ball = (None, None, None);
    // (side, shirt) -> partial x/y/speed triple
    let mut players: BTreeMap<(String, u32), (Option<f64>, Option<f64>, Option<f64>)> =
        BTreeMap::new();

    for (name, field) in row.get_column_iter() {
        match name.as_str() {
            "frame_id" => frame_id = field_i64(field).unwrap_or(0),
            "period_id" => period_id = field_i64(field).unwrap_or(0),
            "timestamp" => timestamp = field_i64(field).unwrap_or(0),
            "last_touch" => last_touch = field_str(field).and_then(|s| sides.resolve(&s)),
            "ball_x" => ball.0 = field_f64(field),
            "ball_y" => ball.1 = field_f64(field),
            "ball_speed" => ball.2 = field_f64(field),
            "wall_clock" | "ball_status" | "ball_z" => {}
            other => {
                // Player columns are "<side>_<shirt>_<prop>".
                let Some((side_shirt, prop)) = other.rsplit_once('_') else {
                    continue;
                };
                let Some((side, shirt)) = side_shirt.split_once('_') else {
                    continue;
                };
                let Ok(shirt) = shirt.parse::<u32>() else {
                    continue;
                };
                let slot = players.entry((side.to_string(), shirt)).or_default();
                match prop {
                    "x" => slot.0 = field_f64(field),
                    "y" => slot.1 = field_f64(field),
                    "speed" => slot.2 = field_f64(field),
                    _ => {}
                }
            }
        }
    }

    for ((side, shirt), (x, y, speed)) in players {
        // A null position means the player is not on the pitch this frame.
        let (Some(x), Some(y)) = (x, y) else { continue };
        let Some(team_name) = sides.resolve(&side) else {
            continue;
        };
        out.push(TrackingRow {
            frame_id,
            period_id,
            timestamp,
            team_name,
            shirt_number: shirt,
            x,
            y,
            speed: speed.unwrap_or(0.0),
            last_touch: last_touch.clone(),
        });
    }

    if let (Some(x), Some(y)) = (ball.0, ball.1) {
        out.push(TrackingRow {
            frame_id,
            period_id,
            timestamp,
            team_name: BALL_TEAM.to_string(),
            shirt_number: 0,
            x,
            y,
            speed: ball.2.unwrap_or(0.0),
            last_touch,
        });
    }
}

/// Unique frame ids where the given team last touched the ball, in frame
/// order.
pub fn possession_frames(rows: &[TrackingRow], team_name: &str) -> Vec<i64> {
    let mut seen = HashSet::new();
    let mut frames = Vec::new();
    for row in rows {
        if row.last_touch.as_deref() == Some(team_name) && seen.insert(row.frame_id) {
            frames.push(row.frame_id);
        }
    }
    debug!(
        team = team_name,
        frames = frames.len(),
        "possession frames"
    );
    frames
}

/// Every `step`-th frame id, the precomputation that bounds per-frame
/// aggregation cost.
pub fn sample_frames(frame_ids: &[i64], step: usize) -> Vec<i64> {
    frame_ids
        .iter()
        .step_by(step.max(1))
        .copied()
        .collect()
}

/// Index rows by frame id for per-frame scans.
pub fn frames_index<'a>(rows: &'a [TrackingRow]) -> BTreeMap<i64, Vec<&'a TrackingRow>> {
    let mut index: BTreeMap<i64, Vec<&TrackingRow>> = BTreeMap::new();
    for row in rows {
        index.entry(row.frame_id).or_default().push(row);
    }
    index
}

fn field_f64(field: &Field) -> Option<f64> {
    match field {
        Field::Double(v) => Some(*v),
        Field::Float(v) => Some(f64::from(*v)),
        Field::Int(v) => Some(f64::from(*v)),
        Field::Long(v) => Some(*v as f64),
        _ => None,
    }
}

fn field_i64(field: &Field) -> Option<i64> {
    match field {
        Field::Long(v) => Some(*v),
        Field::Int(v) => Some(i64::from(*v)),
        Field::Short(v) => Some(i64::from(*v)),
        Field::Double(v) if v.fract() == 0.0 => Some(*v as i64),
        _ => None,
    }
}

fn field_str(field: &Field) -> Option<String> {
    match field {
        Field::Str(v) => Some(v.clone()),
        _ => None,
    }
}
