use pitchlens::pitch_zones::{PitchZones, ZoneName, in_box};

#[test]
fn interior_points_classify_to_their_zone() {
    let zones = PitchZones::standard();
    let cases = [
        (0.0, 20.0, ZoneName::LeftProgression),
        (0.0, 0.0, ZoneName::CenterProgression),
        (0.0, -20.0, ZoneName::RightProgression),
        (30.0, 20.0, ZoneName::LeftFinalThird),
        (30.0, 0.0, ZoneName::CenterFinalThird),
        (30.0, -20.0, ZoneName::RightFinalThird),
    ];
    for (x, y, expected) in cases {
        assert_eq!(zones.classify(x, y), expected, "at ({x}, {y})");
    }
}

#[test]
fn uncovered_points_fall_to_build_up() {
    let zones = PitchZones::standard();
    // Defensive third.
    assert_eq!(zones.classify(-40.0, 0.0), ZoneName::BuildUp);
    // Off the pitch entirely.
    assert_eq!(zones.classify(80.0, 0.0), ZoneName::BuildUp);
    assert_eq!(zones.classify(0.0, 50.0), ZoneName::BuildUp);
    // NaN coordinates degrade to the sentinel, no panic.
    assert_eq!(zones.classify(f64::NAN, 0.0), ZoneName::BuildUp);
}

#[test]
fn shared_edges_resolve_first_match_in_table_order() {
    let zones = PitchZones::standard();
    // x = 17.5 belongs to both thirds; the progression zones come first.
    assert_eq!(zones.classify(17.5, 0.0), ZoneName::CenterProgression);
    // y = 12 belongs to left and center bands; left is declared first.
    assert_eq!(zones.classify(0.0, 12.0), ZoneName::LeftProgression);
    // y = -12 belongs to center and right; center is declared first.
    assert_eq!(zones.classify(0.0, -12.0), ZoneName::CenterProgression);
}

#[test]
fn six_zones_partition_the_front_two_thirds() {
    let zones = PitchZones::standard();
    // Dense grid over the covered x range: every point lands in a zone.
    let mut x = -17.5;
    while x <= 52.5 {
        let mut y = -34.0;
        while y <= 34.0 {
            assert_ne!(
                zones.classify(x, y),
                ZoneName::BuildUp,
                "gap in zone table at ({x}, {y})"
            );
            y += 0.5;
        }
        x += 0.5;
    }
}

#[test]
fn adjacent_zones_share_exactly_one_edge() {
    let zones = PitchZones::standard();
    let rect = |name| zones.boundaries(name).unwrap();

    // y-bands tile the width.
    assert_eq!(rect(ZoneName::RightProgression).y_max, rect(ZoneName::CenterProgression).y_min);
    assert_eq!(rect(ZoneName::CenterProgression).y_max, rect(ZoneName::LeftProgression).y_min);
    assert_eq!(rect(ZoneName::LeftProgression).y_max, 34.0);
    assert_eq!(rect(ZoneName::RightProgression).y_min, -34.0);

    // The two x-bands meet at the final-third line.
    assert_eq!(rect(ZoneName::CenterProgression).x_max, rect(ZoneName::CenterFinalThird).x_min);
}

#[test]
fn box_membership_is_inclusive_on_all_sides() {
    assert!(in_box(36.0, 20.16));
    assert!(in_box(52.5, -20.16));
    assert!(in_box(40.0, 0.0));
    assert!(!in_box(35.9, 0.0));
    assert!(!in_box(40.0, 20.2));
}
