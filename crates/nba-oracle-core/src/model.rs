// Report document types.
//
// Everything here serializes straight into the output JSON. Field order is
// the order a reader of the document sees.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// ---------------------------------------------------------------------------
// Enumerations
// ---------------------------------------------------------------------------

/// Conference a division belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Conference {
    Eastern,
    Western,
}

impl fmt::Display for Conference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Conference::Eastern => write!(f, "Eastern"),
            Conference::Western => write!(f, "Western"),
        }
    }
}

/// Coarse playoff outlook derived from the predicted probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayoffStatus {
    Clinched,
    Contender,
    Eliminated,
}

/// Probability strictly above this is "clinched".
pub const CLINCHED_THRESHOLD: f64 = 0.8;
/// Probability strictly below this is "eliminated".
pub const ELIMINATED_THRESHOLD: f64 = 0.2;

impl PlayoffStatus {
    /// Classify a predicted playoff probability.
    ///
    /// Both thresholds are strict, so exactly 0.8 and exactly 0.2 are
    /// contenders.
    pub fn from_probability(p: f64) -> Self {
        if p > CLINCHED_THRESHOLD {
            PlayoffStatus::Clinched
        } else if p < ELIMINATED_THRESHOLD {
            PlayoffStatus::Eliminated
        } else {
            PlayoffStatus::Contender
        }
    }
}

// ---------------------------------------------------------------------------
// Per-team types
// ---------------------------------------------------------------------------

/// One prior season for a team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalEntry {
    pub season: String,
    pub win_pct: f64,
    pub off_rating: f64,
    pub def_rating: f64,
    pub made_playoffs: bool,
}

/// Current-season stat line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamStats {
    pub win_pct: f64,
    pub off_rating: f64,
    pub def_rating: f64,
    /// `off_rating - def_rating`, rounded to one decimal.
    pub net_rating: f64,
    /// Placeholder: `0.8 * win_pct`. Not a real efficiency statistic; it
    /// stands in until the model exports one.
    pub efficiency_pct: f64,
}

/// 0-100 scores relative to the league-wide bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedScores {
    pub offensive_score: f64,
    pub defensive_score: f64,
    pub win_pct_score: f64,
    pub overall_rating: f64,
}

/// A team in the prediction target season.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub team: String,
    pub season: String,
    pub stats: TeamStats,
    pub playoff_status: PlayoffStatus,
    pub historical: Vec<HistoricalEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normalized_scores: Option<NormalizedScores>,
}

// ---------------------------------------------------------------------------
// Division and report
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DivisionAnalytics {
    pub strongest_team: String,
    pub weakest_team: String,
    /// Number of clinched teams.
    pub playoff_teams: usize,
    pub average_off_rating: f64,
    pub average_def_rating: f64,
    pub average_win_pct: f64,
    pub best_offense: String,
    pub best_defense: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DivisionSection {
    pub name: String,
    pub conference: Conference,
    /// Ordered by predicted probability, best first.
    pub teams: Vec<TeamRecord>,
    pub division_analytics: DivisionAnalytics,
}

/// Descriptive header of the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportMeta {
    pub model: String,
    pub version: String,
    pub last_updated: NaiveDate,
    pub dataset_seasons: Vec<String>,
    pub prediction_target: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub meta: ReportMeta,
    pub divisions: BTreeMap<String, DivisionSection>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn playoff_status_thresholds_are_strict() {
        assert_eq!(PlayoffStatus::from_probability(0.8), PlayoffStatus::Contender);
        assert_eq!(PlayoffStatus::from_probability(0.8000001), PlayoffStatus::Clinched);
        assert_eq!(PlayoffStatus::from_probability(0.2), PlayoffStatus::Contender);
        assert_eq!(PlayoffStatus::from_probability(0.1999999), PlayoffStatus::Eliminated);
        assert_eq!(PlayoffStatus::from_probability(0.0), PlayoffStatus::Eliminated);
        assert_eq!(PlayoffStatus::from_probability(1.0), PlayoffStatus::Clinched);
    }

    #[test]
    fn playoff_status_serializes_lowercase() {
        let json = serde_json::to_string(&PlayoffStatus::Clinched).unwrap();
        assert_eq!(json, "\"clinched\"");
        let json = serde_json::to_string(&PlayoffStatus::Contender).unwrap();
        assert_eq!(json, "\"contender\"");
    }

    #[test]
    fn conference_serializes_capitalized() {
        assert_eq!(serde_json::to_string(&Conference::Western).unwrap(), "\"Western\"");
        assert_eq!(Conference::Eastern.to_string(), "Eastern");
    }

    #[test]
    fn missing_normalized_scores_not_serialized() {
        let team = TeamRecord {
            team: "BOS".into(),
            season: "2025-26".into(),
            stats: TeamStats {
                win_pct: 0.7,
                off_rating: 118.0,
                def_rating: 110.0,
                net_rating: 8.0,
                efficiency_pct: 0.56,
            },
            playoff_status: PlayoffStatus::Clinched,
            historical: vec![],
            normalized_scores: None,
        };
        let value = serde_json::to_value(&team).unwrap();
        assert!(value.get("normalized_scores").is_none());
        assert_eq!(value["playoff_status"], "clinched");
    }

    #[test]
    fn meta_date_serializes_iso() {
        let meta = ReportMeta {
            model: "Azure ML Ensemble v2.1".into(),
            version: "2.1".into(),
            last_updated: NaiveDate::from_ymd_opt(2026, 2, 14).unwrap(),
            dataset_seasons: vec!["2024-25".into(), "2025-26".into()],
            prediction_target: "2025-26".into(),
        };
        let value = serde_json::to_value(&meta).unwrap();
        assert_eq!(value["last_updated"], "2026-02-14");
    }
}
