use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use rust_xlsxwriter::{Workbook, Worksheet};
use tracing::info;

use crate::dominance::TeamMetrics;
use crate::entry_zone_stats::ZoneStatsRow;

/// Report path named by the two teams and today's date, the convention the
/// chart outputs follow as well.
pub fn report_path(output_dir: &Path, team1_name: &str, team2_name: &str) -> PathBuf {
    let date = Local::now().format("%Y-%m-%d");
    output_dir.join(format!(
        "{}-{}-{date}.xlsx",
        slug(team1_name),
        slug(team2_name)
    ))
}

fn slug(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}

/// Write the match report workbook: one dominance-comparison sheet and one
/// zone-entry sheet per team.
pub fn export_match_report(
    path: &Path,
    metrics: &(TeamMetrics, TeamMetrics),
    team1_zones: &[ZoneStatsRow],
    team2_zones: &[ZoneStatsRow],
) -> Result<()> {
    let (team1, team2) = metrics;

    let mut workbook = Workbook::new();
    {
        let sheet = workbook.add_worksheet();
        sheet.set_name("Dominance")?;
        write_rows(sheet, &dominance_rows(team1, team2))?;
    }
    {
        let sheet = workbook.add_worksheet();
        sheet.set_name(&sheet_name(&team1.team_name))?;
        write_rows(sheet, &zone_rows(team1_zones))?;
    }
    {
        let sheet = workbook.add_worksheet();
        sheet.set_name(&sheet_name(&team2.team_name))?;
        write_rows(sheet, &zone_rows(team2_zones))?;
    }

    workbook
        .save(path)
        .with_context(|| format!("failed writing workbook to {}", path.display()))?;
    info!(path = %path.display(), "wrote match report");
    Ok(())
}

// Excel caps sheet names at 31 chars.
fn sheet_name(team_name: &str) -> String {
    let mut name = format!("Entries {team_name}");
    name.truncate(31);
    name
}

fn dominance_rows(team1: &TeamMetrics, team2: &TeamMetrics) -> Vec<Vec<String>> {
    let pct = |v: f64| format!("{v:.2}");
    let rows: Vec<(&str, String, String)> = vec![
        ("Possession %", pct(team1.possession_pct), pct(team2.possession_pct)),
        ("Field tilt %", pct(team1.field_tilt_pct), pct(team2.field_tilt_pct)),
        ("xG", pct(team1.xg), pct(team2.xg)),
        ("Total shots", team1.total_shots.to_string(), team2.total_shots.to_string()),
        (
            "On target shots",
            team1.on_target_shots.to_string(),
            team2.on_target_shots.to_string(),
        ),
        (
            "Blocked shots",
            team1.blocked_shots.to_string(),
            team2.blocked_shots.to_string(),
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
        ("Box touches", team1.box_touches.to_string(), team2.box_touches.to_string()),
        (
            "Progressive passes",
            team1.progressive_passes.to_string(),
            team2.progressive_passes.to_string(),
        ),
        ("PPDA", pct(team1.ppda), pct(team2.ppda)),
    ];

    let mut out = vec![vec![
        "Metric".to_string(),
        team1.team_name.clone(),
        team2.team_name.clone(),
    ]];
    out.extend(
        rows.into_iter()
            .map(|(metric, a, b)| vec![metric.to_string(), a, b]),
    );
    out
}

fn zone_rows(rows: &[ZoneStatsRow]) -> Vec<Vec<String>> {
    let mut out = vec![
        [
            "Zone",
            "Entries",
            "Entries w/ shot",
            "Shots",
            "Shot rate %",
            "Total xG",
            "xG per entry",
            "xG per shot",
            "Entries w/ box entry",
            "Box entries",
            "Box entry rate %",
            "Turnovers",
            "Turnover rate %",
            "Recycles",
            "Recycle rate %",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>(),
    ];

    for row in rows {
        out.push(vec![
            row.entry_zone.as_str().to_string(),
            row.total_entries.to_string(),
            row.entries_with_shot.to_string(),
            row.total_shots.to_string(),
            format!("{:.1}", row.shot_rate),
            format!("{:.2}", row.total_xg),
            format!("{:.3}", row.xg_per_entry),
            if row.xg_per_shot.is_nan() {
                "n/a".to_string()
            } else {
                format!("{:.3}", row.xg_per_shot)
            },
            row.entries_with_box_entry.to_string(),
            row.total_box_entries.to_string(),
            format!("{:.1}", row.box_entry_rate),
            row.total_turnovers.to_string(),
            format!("{:.1}", row.turnover_rate),
            row.total_recycles.to_string(),
            format!("{:.1}", row.recycle_rate),
        ]);
    }
    out
}

fn write_rows(worksheet: &mut Worksheet, rows: &[Vec<String>]) -> Result<()> {
    for (row_idx, row) in rows.iter().enumerate() {
        for (col_idx, value) in row.iter().enumerate() {
            worksheet
                .write_string(row_idx as u32, col_idx as u16, value)
                .with_context(|| format!("write cell ({row_idx},{col_idx})"))?;
        }
    }
    Ok(())
}
