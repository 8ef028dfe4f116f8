use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{error, info};

use crate::errors::AnalysisError;
use crate::events::{Event, Player};
use crate::tracking::{SideNames, TrackingRow, load_tracking};

const EVENTS_FILE: &str = "events.json";
const TRACKING_FILE: &str = "tracking.parquet";

#[derive(Debug, Deserialize)]
struct MatchFile {
    data: Vec<Event>,
    #[serde(default)]
    players: Vec<Player>,
}

/// Loads one game directory's exports: the event/roster JSON and the
/// optional tracking-frame parquet. All tables are read-only snapshots for
/// the duration of one run.
#[derive(Debug, Clone)]
pub struct MatchLoader {
    game_dir: PathBuf,
}

impl MatchLoader {
    pub fn new(game_dir: impl Into<PathBuf>) -> Self {
        Self {
            game_dir: game_dir.into(),
        }
    }

    pub fn game_dir(&self) -> &Path {
        &self.game_dir
    }

    /// Load `events.json` into the event and roster tables.
    pub fn load_events(&self) -> Result<(Vec<Event>, Vec<Player>), AnalysisError> {
        let path = self.game_dir.join(EVENTS_FILE);
        let result = self.read_events(&path);
        if let Err(err) = &result {
            error!(path = %path.display(), %err, "failed to load event data");
        }
        result
    }

    fn read_events(&self, path: &Path) -> Result<(Vec<Event>, Vec<Player>), AnalysisError> {
        if !path.exists() {
            return Err(AnalysisError::MissingInput {
                path: path.to_path_buf(),
            });
        }
        let raw = fs::read_to_string(path).map_err(|source| AnalysisError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file: MatchFile =
            serde_json::from_str(&raw).map_err(|source| AnalysisError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        if file.data.is_empty() {
            return Err(AnalysisError::empty(format!(
                "{} holds no event records",
                path.display()
            )));
        }
        info!(
            events = file.data.len(),
            players = file.players.len(),
            path = %path.display(),
            "loaded match data"
        );
        Ok((file.data, file.players))
    }

    pub fn tracking_path(&self) -> PathBuf {
        self.game_dir.join(TRACKING_FILE)
    }

    pub fn has_tracking(&self) -> bool {
        self.tracking_path().exists()
    }

    /// Load the tracking parquet, resolving home/away side codes to the
    /// given team names.
    pub fn load_tracking(&self, sides: &SideNames) -> Result<Vec<TrackingRow>, AnalysisError> {
        let path = self.tracking_path();
        let result = load_tracking(&path, sides);
        if let Err(err) = &result {
            error!(path = %path.display(), %err, "failed to load tracking data");
        }
        result
    }
}

/// The two team names present in the event table, in first-appearance
/// order. A match export names exactly two teams.
pub fn team_names(events: &[Event]) -> Result<(String, String), AnalysisError> {
    let mut names: Vec<&str> = Vec::new();
    for event in events {
        if !names.contains(&event.team_name.as_str()) {
            names.push(&event.team_name);
        }
    }
    match names.as_slice() {
        [first, second] => Ok((first.to_string(), second.to_string())),
        [] => Err(AnalysisError::empty("event table names no teams")),
        other => Err(AnalysisError::computation(format!(
            "expected exactly two teams in the event table, found {}",
            other.len()
        ))),
    }
}
