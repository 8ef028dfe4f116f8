use pitchlens::events::Event;
use pitchlens::territory::territorial_possession;

fn touch(team: &str, x: Option<f64>, y: Option<f64>) -> Event {
    Event {
        event_id: 0,
        sequence_id: 0,
        timestamp: 0,
        team_name: team.to_string(),
        base_type_name: "TOUCH".to_string(),
        sub_type_name: None,
        result_id: Some(1),
        result_name: None,
        start_pos_x: x,
        start_pos_y: y,
        end_pos_x: None,
        end_pos_y: None,
        start_time_ms: None,
        end_time_ms: None,
        player_id: None,
        receiver_id: None,
        possession_type_name: None,
        shot_type_name: None,
        metrics: None,
    }
}

#[test]
fn second_team_points_are_mirrored_into_the_first_frame() {
    let events = vec![
        touch("Belgium", Some(10.0), Some(5.0)),
        touch("North Macedonia", Some(20.0), Some(-8.0)),
    ];
    let (first, second) = territorial_possession(&events, "Belgium", "North Macedonia");

    assert_eq!(first.points, vec![(10.0, 5.0)]);
    assert_eq!(second.points, vec![(-20.0, 8.0)]);
}

#[test]
fn only_possession_events_with_positions_are_kept() {
    let mut tackle = touch("Belgium", Some(0.0), Some(0.0));
    tackle.base_type_name = "TACKLE".to_string();
    let events = vec![
        tackle,
        touch("Belgium", None, Some(1.0)),
        touch("Belgium", Some(3.0), Some(4.0)),
    ];
    let (first, second) = territorial_possession(&events, "Belgium", "North Macedonia");
    assert_eq!(first.points, vec![(3.0, 4.0)]);
    assert!(second.points.is_empty());
}
