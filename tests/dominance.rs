use pitchlens::dominance::{
    dominance_metrics, field_tilt_pct, is_progressive_pass, possession_pct, ppda,
};
use pitchlens::events::Event;

const TEAM1: &str = "Belgium";
const TEAM2: &str = "North Macedonia";

fn ev(team: &str, base: &str) -> Event {
    Event {
        event_id: 0,
        sequence_id: 0,
        timestamp: 0,
        team_name: team.to_string(),
        base_type_name: base.to_string(),
        sub_type_name: None,
        result_id: Some(1),
        result_name: None,
        start_pos_x: Some(0.0),
        start_pos_y: Some(0.0),
        end_pos_x: Some(5.0),
        end_pos_y: Some(0.0),
        start_time_ms: Some(0),
        end_time_ms: Some(1000),
        player_id: None,
        receiver_id: None,
        possession_type_name: None,
        shot_type_name: None,
        metrics: None,
    }
}

fn pass_between(team: &str, start_x: f64, end_x: f64) -> Event {
    let mut e = ev(team, "PASS");
    e.start_pos_x = Some(start_x);
    e.end_pos_x = Some(end_x);
    e
}

#[test]
fn possession_percentages_sum_to_100() {
    let mut long_touch = ev(TEAM1, "CARRY");
    long_touch.end_time_ms = Some(3000);
    let events = vec![long_touch, ev(TEAM2, "PASS"), ev(TEAM2, "TOUCH")];

    let (p1, p2) = possession_pct(&events, TEAM1, TEAM2).unwrap();
    assert!((p1 + p2 - 100.0).abs() < 1e-9);
    assert_eq!(p1, 60.0);
}

#[test]
fn non_possession_events_do_not_count_toward_possession() {
    let events = vec![ev(TEAM1, "PASS"), ev(TEAM2, "TACKLE")];
    let (p1, p2) = possession_pct(&events, TEAM1, TEAM2).unwrap();
    assert_eq!(p1, 100.0);
    assert_eq!(p2, 0.0);
}

#[test]
fn possession_with_no_events_is_a_computation_error() {
    let events = vec![ev(TEAM1, "TACKLE")];
    assert!(possession_pct(&events, TEAM1, TEAM2).is_err());
}

#[test]
fn field_tilt_counts_final_third_passes_only() {
    let events = vec![
        pass_between(TEAM1, 20.0, 30.0),
        pass_between(TEAM1, 18.0, 25.0),
        pass_between(TEAM1, 10.0, 30.0), // starts short of the third
        pass_between(TEAM2, 22.0, 28.0),
    ];
    let (t1, t2) = field_tilt_pct(&events, TEAM1, TEAM2).unwrap();
    assert!((t1 + t2 - 100.0).abs() < 1e-9);
    assert!((t1 - 200.0 / 3.0).abs() < 1e-9);
}

#[test]
fn field_tilt_without_final_third_passes_is_an_error() {
    let events = vec![pass_between(TEAM1, 0.0, 10.0)];
    assert!(field_tilt_pct(&events, TEAM1, TEAM2).is_err());
}

#[test]
fn progressive_pass_thresholds_split_on_end_position() {
    // Ends short of the final third: needs 10 m.
    assert!(is_progressive_pass(&pass_between(TEAM1, 0.0, 10.0)));
    assert!(!is_progressive_pass(&pass_between(TEAM1, 0.0, 9.9)));
    // Ends inside the final third: 5 m suffices.
    assert!(is_progressive_pass(&pass_between(TEAM1, 14.0, 19.0)));
    assert!(!is_progressive_pass(&pass_between(TEAM1, 14.5, 19.0)));

    // Failed passes never qualify.
    let mut failed = pass_between(TEAM1, 0.0, 20.0);
    failed.result_id = Some(0);
    assert!(!is_progressive_pass(&failed));
}

#[test]
fn ppda_divides_buildup_passes_by_press_actions() {
    let mut events = Vec::new();
    // Opponent build-up: four successful passes and a clearance deep in
    // their own 60%.
    for _ in 0..4 {
        events.push(pass_between(TEAM2, -20.0, -10.0));
    }
    let mut clearance = ev(TEAM2, "CLEARANCE");
    clearance.start_pos_x = Some(-30.0);
    events.push(clearance);
    // Build-up past the 60% line does not count.
    events.push(pass_between(TEAM2, 15.0, 25.0));

    // Two pressing actions in the counting area, one too deep.
    let mut tackle = ev(TEAM1, "TACKLE");
    tackle.start_pos_x = Some(0.0);
    events.push(tackle);
    let mut interception = ev(TEAM1, "INTERCEPTION");
    interception.start_pos_x = Some(-5.0);
    events.push(interception);
    let mut deep_recovery = ev(TEAM1, "RECOVERY");
    deep_recovery.start_pos_x = Some(-30.0);
    events.push(deep_recovery);

    let value = ppda(&events, TEAM1, TEAM2).unwrap();
    assert!((value - 2.5).abs() < 1e-9);
}

#[test]
fn ppda_without_defensive_actions_is_an_error() {
    let events = vec![pass_between(TEAM2, -20.0, -10.0)];
    assert!(ppda(&events, TEAM1, TEAM2).is_err());
}

#[test]
fn dominance_metrics_cover_both_teams() {
    let mut shot = ev(TEAM1, "SHOT");
    shot.shot_type_name = Some("ON_TARGET".to_string());
    shot.start_pos_x = Some(40.0);

    let mut box_touch = ev(TEAM2, "TOUCH");
    box_touch.start_pos_x = Some(45.0);
    box_touch.start_pos_y = Some(2.0);

    let events = vec![
        pass_between(TEAM1, 10.0, 25.0), // entry and progressive
        pass_between(TEAM1, 20.0, 26.0),
        pass_between(TEAM2, 18.0, 24.0),
        shot,
        box_touch,
        {
            let mut t = ev(TEAM1, "TACKLE");
            t.start_pos_x = Some(5.0);
            t
        },
        {
            let mut t = ev(TEAM2, "TACKLE");
            t.start_pos_x = Some(5.0);
            t
        },
    ];

    let (team1, team2) = dominance_metrics(&events, TEAM1, TEAM2).unwrap();
    assert_eq!(team1.team_name, TEAM1);
    assert_eq!(team1.total_shots, 1);
    assert_eq!(team1.on_target_shots, 1);
    assert_eq!(team1.final_third_entries, 1);
    assert_eq!(team1.progressive_passes, 2);
    assert_eq!(team2.box_touches, 1);
    assert!((team1.possession_pct + team2.possession_pct - 100.0).abs() < 1e-9);
    assert!((team1.field_tilt_pct + team2.field_tilt_pct - 100.0).abs() < 1e-9);
}
