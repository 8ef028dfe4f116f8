use std::env;
use std::fs;
use std::io::IsTerminal;

use anyhow::{Context, Result};
use chrono::Local;
use tracing::{info, warn};

use pitchlens::config::AnalysisConfig;
use pitchlens::defensive_block::analyze_block_by_ball_position;
use pitchlens::dominance::{TeamMetrics, dominance_metrics};
use pitchlens::entry_zone_stats::{ZoneStatsRow, entry_zone_stats};
use pitchlens::export::{export_match_report, report_path};
use pitchlens::final_third::final_third_entries;
use pitchlens::match_loader::{MatchLoader, team_names};
use pitchlens::passing_network::passing_network;
use pitchlens::pitch_zones::STANDARD_ZONES;
use pitchlens::tracking::{SideNames, TrackingRow};
use pitchlens::zone_entries::zone_entries;

fn main() -> Result<()> {
    init_tracing()?;

    let args: Vec<String> = env::args().skip(1).collect();
    let cfg = AnalysisConfig::from_args(&args)?;

    let loader = MatchLoader::new(&cfg.game_dir);
    let (events, players) = loader.load_events()?;
    let (team1, team2) = team_names(&events)?;
    info!(%team1, %team2, "analyzing match");
    println!("{team1} vs {team2}");

    let entries = final_third_entries(&events);
    let team1_entries = zone_entries(&events, &entries, &team1, cfg.window_ms);
    let team2_entries = zone_entries(&events, &entries, &team2, cfg.window_ms);
    let team1_zones = entry_zone_stats(&team1_entries);
    let team2_zones = entry_zone_stats(&team2_entries);

    print_zone_table(&team1, &team1_zones);
    print_zone_table(&team2, &team2_zones);

    let metrics = dominance_metrics(&events, &team1, &team2)?;
    print_dominance(&metrics.0, &metrics.1);

    for team in [&team1, &team2] {
        let (nodes, edges) = passing_network(&events, &players, team);
        println!(
            "Passing network {team}: {} players, {} pairs over threshold",
            nodes.len(),
            edges.len()
        );
    }

    if loader.has_tracking() {
        // The tracking export labels sides home/away without naming them.
        // First-appearing team is assumed home unless --home says otherwise.
        if let Some(home) = cfg.home_team.as_deref()
            && home != team1
            && home != team2
        {
            warn!(home, "home override matches neither team, keeping table order");
        }
        let (home, away) = if cfg.home_team.as_deref() == Some(team2.as_str()) {
            (team2.clone(), team1.clone())
        } else {
            (team1.clone(), team2.clone())
        };
        let sides = SideNames { home, away };
        let rows = loader.load_tracking(&sides)?;
        print_blocks(&team2, &team1, &rows);
        print_blocks(&team1, &team2, &rows);
    }

    if cfg.export {
        fs::create_dir_all(&cfg.output_dir)
            .with_context(|| format!("create output dir {}", cfg.output_dir.display()))?;
        let path = report_path(&cfg.output_dir, &team1, &team2);
        export_match_report(&path, &metrics, &team1_zones, &team2_zones)?;
        println!("Report written to {}", path.display());
    }

    Ok(())
}

fn print_zone_table(team_name: &str, rows: &[ZoneStatsRow]) {
    println!();
    println!("Final third entries: {team_name}");
    println!(
        "{:<8} {:>8} {:>6} {:>9} {:>8} {:>9} {:>9} {:>10} {:>9}",
        "zone", "entries", "shots", "shot%", "xG", "xG/entry", "box%", "turnover%", "recycle%"
    );
    for row in rows {
        println!(
            "{:<8} {:>8} {:>6} {:>8.1}% {:>8.2} {:>9.3} {:>8.1}% {:>9.1}% {:>8.1}%",
            row.entry_zone.as_str(),
            row.total_entries,
            row.total_shots,
            row.shot_rate,
            row.total_xg,
            row.xg_per_entry,
            row.box_entry_rate,
            row.turnover_rate,
            row.recycle_rate,
        );
    }
}

fn print_dominance(team1: &TeamMetrics, team2: &TeamMetrics) {
    println!();
    println!(
        "{:<22} {:>14} {:>14}",
        "metric", team1.team_name, team2.team_name
    );
    let rows: Vec<(&str, String, String)> = vec![
        (
            "Possession %",
            format!("{:.1}", team1.possession_pct),
            format!("{:.1}", team2.possession_pct),
        ),
        (
            "Field tilt %",
            format!("{:.1}", team1.field_tilt_pct),
            format!("{:.1}", team2.field_tilt_pct),
        ),
        ("xG", format!("{:.2}", team1.xg), format!("{:.2}", team2.xg)),
        (
            "Shots",
            team1.total_shots.to_string(),
            team2.total_shots.to_string(),
        ),
        (
            "On target",
            team1.on_target_shots.to_string(),
            team2.on_target_shots.to_string(),
        ),
        (
            "Successful passes",
            team1.successful_passes.to_string(),
            team2.successful_passes.to_string(),
        ),
        (
            "Final third entries",
            team1.final_third_entries.to_string(),
            team2.final_third_entries.to_string(),
        ),
        (
            "Box touches",
            team1.box_touches.to_string(),
            team2.box_touches.to_string(),
        ),
        (
            "Progressive passes",
            team1.progressive_passes.to_string(),
            team2.progressive_passes.to_string(),
        ),
        (
            "PPDA",
            format!("{:.2}", team1.ppda),
            format!("{:.2}", team2.ppda),
        ),
    ];
    for (name, a, b) in rows {
        println!("{name:<22} {a:>14} {b:>14}");
    }
}

fn print_blocks(defending_team: &str, attacking_team: &str, rows: &[TrackingRow]) {
    let blocks =
        analyze_block_by_ball_position(rows, &STANDARD_ZONES, defending_team, attacking_team);
    if blocks.is_empty() {
        return;
    }
    println!();
    println!("{defending_team} block shape vs {attacking_team} possession zones");
    println!(
        "{:<22} {:>7} {:>10} {:>10} {:>10} {:>10}",
        "ball zone", "frames", "line (m)", "vert (m)", "horiz (m)", "hull (m2)"
    );
    for block in blocks {
        println!(
            "{:<22} {:>7} {:>10.1} {:>10.1} {:>10.1} {:>10.1}",
            block.zone.as_str(),
            block.frames_sampled,
            block.defensive_line_distance,
            block.vertical_spread,
            block.horizontal_spread,
            block.hull_area,
        );
    }
}

/// Log to stderr and a date-stamped file under logs/.
fn init_tracing() -> Result<()> {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::fmt;
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let log_dir = env::current_dir()?.join("logs");
    fs::create_dir_all(&log_dir)?;
    let log_name = format!("pitchlens_{}.log", Local::now().format("%Y%m%d"));
    let log_file = std::sync::Arc::new(fs::File::create(log_dir.join(log_name))?);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pitchlens=info,warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(log_file)
                .with_ansi(false)
                .with_target(true),
        )
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .without_time(),
        )
        .try_init()
        .context("failed to set tracing subscriber")?;
    Ok(())
}
