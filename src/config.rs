use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};

use crate::zone_entries::DEFAULT_OUTCOME_WINDOW_MS;

/// Run configuration: where the game exports live and how far the outcome
/// tracer looks ahead. Resolved once at startup from the command line with
/// environment fallbacks, then read-only.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    pub game_dir: PathBuf,
    pub output_dir: PathBuf,
    pub window_ms: i64,
    pub export: bool,
    /// Which team the tracking file's "home" side refers to. Without it the
    /// first-appearing team in the event table is assumed to be home.
    pub home_team: Option<String>,
}

impl AnalysisConfig {
    /// Parse `pitchlens <game-dir> [--export] [--window-ms N] [--out DIR]
    /// [--home TEAM]`. The game directory can also come from
    /// `PITCHLENS_GAME_DIR`.
    pub fn from_args(args: &[String]) -> Result<Self> {
        let mut game_dir: Option<PathBuf> = env::var("PITCHLENS_GAME_DIR").ok().map(PathBuf::from);
        let mut output_dir: Option<PathBuf> =
            env::var("PITCHLENS_OUTPUT_DIR").ok().map(PathBuf::from);
        let mut window_ms = env::var("PITCHLENS_WINDOW_MS")
            .ok()
            .and_then(|val| val.parse::<i64>().ok())
            .unwrap_or(DEFAULT_OUTCOME_WINDOW_MS);
        let mut home_team = env::var("PITCHLENS_HOME_TEAM").ok();
        let mut export = false;

        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--export" => export = true,
                "--window-ms" => {
                    let val = iter
                        .next()
                        .ok_or_else(|| anyhow!("--window-ms needs a value"))?;
                    window_ms = val
                        .parse::<i64>()
                        .map_err(|_| anyhow!("invalid --window-ms value: {val}"))?;
                }
                "--out" => {
                    let val = iter.next().ok_or_else(|| anyhow!("--out needs a value"))?;
                    output_dir = Some(PathBuf::from(val));
                }
                "--home" => {
                    let val = iter.next().ok_or_else(|| anyhow!("--home needs a value"))?;
                    home_team = Some(val.clone());
                }
                other if !other.starts_with("--") => game_dir = Some(PathBuf::from(other)),
                other => return Err(anyhow!("unknown flag: {other}")),
            }
        }

        let game_dir = game_dir.ok_or_else(|| {
            anyhow!("usage: pitchlens <game-dir> [--export] [--window-ms N] [--out DIR] [--home TEAM]")
        })?;
        if window_ms <= 0 {
            return Err(anyhow!("--window-ms must be positive"));
        }
        Ok(Self {
            game_dir,
            output_dir: output_dir.unwrap_or_else(|| PathBuf::from("outputs")),
            window_ms,
            export,
            home_team,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::AnalysisConfig;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_dir_and_flags() {
        let cfg =
            AnalysisConfig::from_args(&args(&["data/game1", "--export", "--window-ms", "10000"]))
                .unwrap();
        assert_eq!(cfg.game_dir.to_str(), Some("data/game1"));
        assert!(cfg.export);
        assert_eq!(cfg.window_ms, 10_000);
    }

    #[test]
    fn home_side_override_is_optional() {
        let cfg = AnalysisConfig::from_args(&args(&["data/game1"])).unwrap();
        assert_eq!(cfg.home_team, None);

        let cfg =
            AnalysisConfig::from_args(&args(&["data/game1", "--home", "North Macedonia"])).unwrap();
        assert_eq!(cfg.home_team.as_deref(), Some("North Macedonia"));
    }

    #[test]
    fn rejects_unknown_flags_and_bad_window() {
        assert!(AnalysisConfig::from_args(&args(&["dir", "--bogus"])).is_err());
        assert!(AnalysisConfig::from_args(&args(&["dir", "--window-ms", "-5"])).is_err());
    }
}
