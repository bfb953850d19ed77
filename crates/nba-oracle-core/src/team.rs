// Build one team entry per prediction-season row.

use crate::classify::Classified;
use crate::model::{PlayoffStatus, TeamRecord, TeamStats};
use crate::record::SeasonRow;
use crate::round1;
use tracing::debug;

/// Multiplier of the placeholder efficiency metric.
pub const EFFICIENCY_FACTOR: f64 = 0.8;

/// A team still inside the pipeline.
///
/// `raw_prob` drives ordering and is dropped when the entry is finalized;
/// `TeamRecord` itself has no place for it.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamEntry {
    pub record: TeamRecord,
    pub raw_prob: f64,
}

impl TeamEntry {
    /// Discard pipeline-only data and return the emitted record.
    pub fn into_record(self) -> TeamRecord {
        self.record
    }
}

fn stats_for(row: &SeasonRow) -> TeamStats {
    TeamStats {
        win_pct: row.win_pct,
        off_rating: row.off_rating,
        def_rating: row.def_rating,
        net_rating: round1(row.off_rating - row.def_rating),
        efficiency_pct: row.efficiency_win_pct * EFFICIENCY_FACTOR,
    }
}

/// Build a `TeamEntry` for every current-season row of one division.
///
/// History is copied from the index and sorted by season label; teams with
/// no prior rows get an empty history.
pub fn build_teams(classified: &Classified) -> Vec<TeamEntry> {
    classified
        .current
        .iter()
        .map(|row| {
            let playoff_status = PlayoffStatus::from_probability(row.predicted_proba);
            if row.predicted_playoffs != (row.predicted_proba > 0.5) {
                debug!(
                    "{}: predicted flag {} disagrees with probability {:.3}",
                    row.team, row.predicted_playoffs, row.predicted_proba
                );
            }

            let mut historical = classified.history.get(&row.team).to_vec();
            historical.sort_by(|a, b| a.season.cmp(&b.season));

            TeamEntry {
                record: TeamRecord {
                    team: row.team.clone(),
                    season: row.season.clone(),
                    stats: stats_for(row),
                    playoff_status,
                    historical,
                    normalized_scores: None,
                },
                raw_prob: row.predicted_proba,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify;

    fn row(team: &str, season: &str, off: f64, def: f64, prob: f64) -> SeasonRow {
        SeasonRow {
            team: team.into(),
            season: season.into(),
            win_pct: 0.6,
            off_rating: off,
            def_rating: def,
            made_playoffs: true,
            predicted_proba: prob,
            predicted_playoffs: prob > 0.5,
            efficiency_win_pct: 0.6,
        }
    }

    #[test]
    fn stats_are_derived() {
        let c = classify(vec![row("MIL", "2025-26", 115.37, 112.21, 0.55)], "2025-26");
        let teams = build_teams(&c);
        assert_eq!(teams.len(), 1);
        let stats = &teams[0].record.stats;
        assert!((stats.net_rating - 3.2).abs() < 1e-9);
        assert!((stats.efficiency_pct - 0.48).abs() < 1e-9);
        assert_eq!(teams[0].record.playoff_status, PlayoffStatus::Contender);
        assert!((teams[0].raw_prob - 0.55).abs() < f64::EPSILON);
        assert!(teams[0].record.normalized_scores.is_none());
    }

    #[test]
    fn missing_win_pct_uses_heuristic_default_for_efficiency() {
        let mut r = row("CHI", "2025-26", 110.0, 112.0, 0.3);
        r.win_pct = 0.0;
        r.efficiency_win_pct = 0.5;
        let teams = build_teams(&classify(vec![r], "2025-26"));
        assert_eq!(teams[0].record.stats.win_pct, 0.0);
        assert!((teams[0].record.stats.efficiency_pct - 0.4).abs() < 1e-9);
    }

    #[test]
    fn history_is_sorted_and_excludes_target() {
        let rows = vec![
            row("CLE", "2023-24", 114.0, 110.0, 0.9),
            row("CLE", "2025-26", 121.0, 108.0, 0.97),
            row("CLE", "2019-20", 104.0, 114.0, 0.1),
            row("CLE", "2021-22", 111.0, 109.0, 0.6),
        ];
        let teams = build_teams(&classify(rows, "2025-26"));
        let seasons: Vec<&str> = teams[0]
            .record
            .historical
            .iter()
            .map(|h| h.season.as_str())
            .collect();
        assert_eq!(seasons, vec!["2019-20", "2021-22", "2023-24"]);
        assert!(teams[0].record.historical.iter().all(|h| h.season != "2025-26"));
        assert_eq!(teams[0].record.playoff_status, PlayoffStatus::Clinched);
    }

    #[test]
    fn team_without_history_gets_empty_series() {
        let rows = vec![
            row("DET", "2025-26", 112.0, 113.0, 0.15),
            row("IND", "2024-25", 116.0, 114.0, 0.5),
        ];
        let teams = build_teams(&classify(rows, "2025-26"));
        assert_eq!(teams.len(), 1);
        assert!(teams[0].record.historical.is_empty());
        assert_eq!(teams[0].record.playoff_status, PlayoffStatus::Eliminated);
    }

    #[test]
    fn into_record_keeps_team_data() {
        let teams = build_teams(&classify(vec![row("ORL", "2025-26", 111.0, 107.0, 0.7)], "2025-26"));
        let record = teams.into_iter().next().unwrap().into_record();
        assert_eq!(record.team, "ORL");
        assert_eq!(record.season, "2025-26");
    }
}
