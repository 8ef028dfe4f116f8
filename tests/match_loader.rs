use std::fs;
use std::path::PathBuf;

use pitchlens::errors::AnalysisError;
use pitchlens::match_loader::{MatchLoader, team_names};

fn temp_game_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("pitchlens-test-{tag}-{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

const EVENTS_JSON: &str = r#"{
  "data": [
    {
      "eventId": 1, "sequenceId": 1, "timestamp": 1000,
      "teamName": "Belgium", "baseTypeName": "PASS",
      "resultId": 1, "startPosXM": 10.0, "startPosYM": 0.0,
      "endPosXM": 25.0, "endPosYM": 3.0,
      "metrics": {"xA": 0.08}
    },
    {
      "eventId": 2, "sequenceId": 2, "timestamp": 5000,
      "teamName": "North Macedonia", "baseTypeName": "SHOT",
      "resultId": 0, "startPosXM": 40.0, "startPosYM": -2.0,
      "metrics": {"xG": 0.12}
    }
  ],
  "players": [
    {"playerId": 100, "playerName": "K. De Bruyne", "teamName": "Belgium", "shirtNumber": 7}
  ]
}"#;

#[test]
fn loads_events_and_players_from_json() {
    let dir = temp_game_dir("load");
    fs::write(dir.join("events.json"), EVENTS_JSON).unwrap();

    let (events, players) = MatchLoader::new(&dir).load_events().unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(players.len(), 1);

    assert_eq!(events[0].team_name, "Belgium");
    assert!(events[0].is_successful());
    assert!((events[0].xa() - 0.08).abs() < 1e-9);
    // Missing end position surfaces as NaN, not a panic.
    assert!(events[1].end_x().is_nan());
    assert!((events[1].xg() - 0.12).abs() < 1e-9);
    assert_eq!(players[0].shirt_number, Some(7));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn missing_events_file_is_missing_input() {
    let dir = temp_game_dir("missing");
    let err = MatchLoader::new(&dir).load_events().unwrap_err();
    assert!(matches!(err, AnalysisError::MissingInput { .. }));
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn empty_data_array_is_empty_input() {
    let dir = temp_game_dir("empty");
    fs::write(dir.join("events.json"), r#"{"data": [], "players": []}"#).unwrap();
    let err = MatchLoader::new(&dir).load_events().unwrap_err();
    assert!(matches!(err, AnalysisError::EmptyInput { .. }));
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn team_names_come_out_in_first_appearance_order() {
    let dir = temp_game_dir("teams");
    fs::write(dir.join("events.json"), EVENTS_JSON).unwrap();
    let (events, _) = MatchLoader::new(&dir).load_events().unwrap();

    let (team1, team2) = team_names(&events).unwrap();
    assert_eq!(team1, "Belgium");
    assert_eq!(team2, "North Macedonia");
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn one_team_in_the_table_is_rejected() {
    let events = {
        let dir = temp_game_dir("oneteam");
        fs::write(dir.join("events.json"), EVENTS_JSON).unwrap();
        let (mut events, _) = MatchLoader::new(&dir).load_events().unwrap();
        let _ = fs::remove_dir_all(&dir);
        events.truncate(1);
        events
    };
    assert!(matches!(
        team_names(&events),
        Err(AnalysisError::Computation { .. })
    ));
}
