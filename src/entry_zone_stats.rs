use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::final_third::EntryZone;
use crate::zone_entries::ZoneEntry;

/// Per-lane summary of what final-third entries produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneStatsRow {
    pub entry_zone: EntryZone,
    pub total_entries: u32,
    pub entries_with_shot: u32,
    pub total_shots: u32,
    pub shot_rate: f64,
    pub total_xg: f64,
    pub xg_per_entry: f64,
    /// NaN when the zone produced no shots; the one place a zero
    /// denominator is tolerated instead of raised.
    pub xg_per_shot: f64,
    pub entries_with_box_entry: u32,
    pub total_box_entries: u32,
    pub box_entry_rate: f64,
    pub total_turnovers: u32,
    pub turnover_rate: f64,
    pub total_recycles: u32,
    pub recycle_rate: f64,
}

#[derive(Debug, Clone, Copy, Default)]
struct ZoneAccum {
    entries: u32,
    entries_with_shot: u32,
    shots: u32,
    entries_with_box_entry: u32,
    box_entries: u32,
    xg: f64,
    turnovers: u32,
    recycles: u32,
}

/// Group entries by lane and reduce to rate statistics. Rates are
/// percentages of the lane's entry count; lanes with no entries produce no
/// row.
pub fn entry_zone_stats(entries: &[ZoneEntry]) -> Vec<ZoneStatsRow> {
    let mut groups: BTreeMap<EntryZone, ZoneAccum> = BTreeMap::new();

    for entry in entries {
        let acc = groups.entry(entry.entry_zone).or_default();
        acc.entries += 1;
        acc.entries_with_shot += u32::from(entry.outcome.shot);
        acc.shots += entry.outcome.shot_count;
        acc.entries_with_box_entry += u32::from(entry.outcome.box_entry);
        acc.box_entries += entry.outcome.box_entry_count;
        acc.xg += entry.outcome.total_xg;
        acc.turnovers += u32::from(entry.outcome.turnover);
        acc.recycles += u32::from(entry.outcome.recycled);
    }

    groups
        .into_iter()
        .map(|(zone, acc)| {
            let total = f64::from(acc.entries);
            let xg_per_shot = if acc.shots == 0 {
                f64::NAN
            } else {
                acc.xg / f64::from(acc.shots)
            };
            ZoneStatsRow {
                entry_zone: zone,
                total_entries: acc.entries,
                entries_with_shot: acc.entries_with_shot,
                total_shots: acc.shots,
                shot_rate: f64::from(acc.entries_with_shot) / total * 100.0,
                total_xg: acc.xg,
                xg_per_entry: acc.xg / total,
                xg_per_shot,
                entries_with_box_entry: acc.entries_with_box_entry,
                total_box_entries: acc.box_entries,
                box_entry_rate: f64::from(acc.entries_with_box_entry) / total * 100.0,
                total_turnovers: acc.turnovers,
                turnover_rate: f64::from(acc.turnovers) / total * 100.0,
                total_recycles: acc.recycles,
                recycle_rate: f64::from(acc.recycles) / total * 100.0,
            }
        })
        .collect()
}
