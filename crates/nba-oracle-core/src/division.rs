// Per-division summary analytics and normalized team scores.

use crate::bounds::GlobalBounds;
use crate::model::{
    Conference, DivisionAnalytics, DivisionSection, NormalizedScores, PlayoffStatus, TeamRecord,
    TeamStats,
};
use crate::team::TeamEntry;
use crate::{round1, round3};

// ---------------------------------------------------------------------------
// Composite weights
// ---------------------------------------------------------------------------

pub const OFFENSE_WEIGHT: f64 = 0.4;
pub const DEFENSE_WEIGHT: f64 = 0.4;
pub const WIN_PCT_WEIGHT: f64 = 0.2;

/// "atlantic" -> "Atlantic Division".
pub fn division_name(key: &str) -> String {
    let mut chars = key.chars();
    let capitalized: String = match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    };
    format!("{capitalized} Division")
}

/// Score a stat line against the league-wide bounds.
///
/// Defense is inverted so the lowest rating scores 100. The composite is
/// weighted from the unrounded sub-scores and rounded last.
pub fn score_team(stats: &TeamStats, bounds: &GlobalBounds) -> NormalizedScores {
    let offensive = bounds.off_rating.score(stats.off_rating);
    let defensive = bounds.def_rating.inverted_score(stats.def_rating);
    let win = bounds.win_pct.score(stats.win_pct);
    let overall = offensive * OFFENSE_WEIGHT + defensive * DEFENSE_WEIGHT + win * WIN_PCT_WEIGHT;

    NormalizedScores {
        offensive_score: round1(offensive),
        defensive_score: round1(defensive),
        win_pct_score: round1(win),
        overall_rating: round1(overall),
    }
}

/// Order teams best-first by predicted probability. Ties keep input order.
pub fn sort_by_probability(teams: &mut [TeamEntry]) {
    teams.sort_by(|a, b| b.raw_prob.total_cmp(&a.raw_prob));
}

/// First team holding the extreme value of `metric` under `better`.
fn leader<F, B>(teams: &[TeamEntry], metric: F, better: B) -> Option<&TeamEntry>
where
    F: Fn(&TeamStats) -> f64,
    B: Fn(f64, f64) -> bool,
{
    teams.iter().fold(None, |best: Option<&TeamEntry>, team| match best {
        Some(current) if !better(metric(&team.record.stats), metric(&current.record.stats)) => {
            Some(current)
        }
        _ => Some(team),
    })
}

/// Summary analytics over an already sorted, non-empty division.
///
/// Returns `None` for an empty slice.
pub fn compute_analytics(teams: &[TeamEntry]) -> Option<DivisionAnalytics> {
    let strongest = teams.first()?;
    let weakest = teams.last()?;
    let n = teams.len() as f64;
    let mean = |f: fn(&TeamStats) -> f64| teams.iter().map(|t| f(&t.record.stats)).sum::<f64>() / n;

    let best_offense = leader(teams, |s| s.off_rating, |a, b| a > b)?;
    let best_defense = leader(teams, |s| s.def_rating, |a, b| a < b)?;

    Some(DivisionAnalytics {
        strongest_team: strongest.record.team.clone(),
        weakest_team: weakest.record.team.clone(),
        playoff_teams: teams
            .iter()
            .filter(|t| t.record.playoff_status == PlayoffStatus::Clinched)
            .count(),
        average_off_rating: round1(mean(|s| s.off_rating)),
        average_def_rating: round1(mean(|s| s.def_rating)),
        average_win_pct: round3(mean(|s| s.win_pct)),
        best_offense: best_offense.record.team.clone(),
        best_defense: best_defense.record.team.clone(),
    })
}

/// Sort, summarize, and score one division. `None` if it has no teams.
pub fn assemble_division(
    key: &str,
    conference: Conference,
    mut teams: Vec<TeamEntry>,
    bounds: &GlobalBounds,
) -> Option<DivisionSection> {
    sort_by_probability(&mut teams);
    let division_analytics = compute_analytics(&teams)?;

    let teams: Vec<TeamRecord> = teams
        .into_iter()
        .map(|entry| {
            let mut record = entry.into_record();
            record.normalized_scores = Some(score_team(&record.stats, bounds));
            record
        })
        .collect();

    Some(DivisionSection {
        name: division_name(key),
        conference,
        teams,
        division_analytics,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bounds::compute_bounds;
    use crate::normalize::Bounds;

    fn entry(team: &str, off: f64, def: f64, win: f64, prob: f64) -> TeamEntry {
        TeamEntry {
            record: TeamRecord {
                team: team.into(),
                season: "2025-26".into(),
                stats: TeamStats {
                    win_pct: win,
                    off_rating: off,
                    def_rating: def,
                    net_rating: round1(off - def),
                    efficiency_pct: win * 0.8,
                },
                playoff_status: PlayoffStatus::from_probability(prob),
                historical: vec![],
                normalized_scores: None,
            },
            raw_prob: prob,
        }
    }

    #[test]
    fn names_are_capitalized() {
        assert_eq!(division_name("atlantic"), "Atlantic Division");
        assert_eq!(division_name("NORTHWEST"), "Northwest Division");
        assert_eq!(division_name(""), " Division");
    }

    #[test]
    fn two_team_scores() {
        let teams = vec![
            entry("A", 100.0, 105.0, 0.4, 0.3),
            entry("B", 110.0, 95.0, 0.6, 0.9),
        ];
        let bounds = compute_bounds(&teams).unwrap();
        let section = assemble_division("central", Conference::Eastern, teams, &bounds).unwrap();

        let b = section.teams[0].normalized_scores.unwrap();
        assert_eq!(section.teams[0].team, "B");
        assert_eq!(b.offensive_score, 100.0);
        assert_eq!(b.defensive_score, 100.0);
        assert_eq!(b.win_pct_score, 100.0);
        assert_eq!(b.overall_rating, 100.0);

        let a = section.teams[1].normalized_scores.unwrap();
        assert_eq!(a.offensive_score, 0.0);
        assert_eq!(a.defensive_score, 0.0);
        assert_eq!(a.overall_rating, 0.0);
    }

    #[test]
    fn degenerate_bounds_score_fifty() {
        let teams = vec![entry("Solo", 112.0, 108.0, 0.55, 0.5)];
        let bounds = compute_bounds(&teams).unwrap();
        let scores = score_team(&teams[0].record.stats, &bounds);
        assert_eq!(scores.offensive_score, 50.0);
        assert_eq!(scores.defensive_score, 50.0);
        assert_eq!(scores.win_pct_score, 50.0);
        assert_eq!(scores.overall_rating, 50.0);
    }

    #[test]
    fn composite_uses_weights() {
        let bounds = GlobalBounds {
            off_rating: Bounds::new(100.0, 120.0),
            def_rating: Bounds::new(100.0, 120.0),
            win_pct: Bounds::new(0.0, 1.0),
        };
        let stats = entry("X", 115.0, 110.0, 0.25, 0.5).record.stats;
        let s = score_team(&stats, &bounds);
        assert_eq!(s.offensive_score, 75.0);
        assert_eq!(s.defensive_score, 50.0);
        assert_eq!(s.win_pct_score, 25.0);
        assert!((s.overall_rating - 55.0).abs() < 1e-9);
    }

    #[test]
    fn stable_descending_sort() {
        let mut teams = vec![
            entry("low", 100.0, 100.0, 0.5, 0.1),
            entry("tie1", 100.0, 100.0, 0.5, 0.6),
            entry("high", 100.0, 100.0, 0.5, 0.9),
            entry("tie2", 100.0, 100.0, 0.5, 0.6),
        ];
        sort_by_probability(&mut teams);
        let order: Vec<&str> = teams.iter().map(|t| t.record.team.as_str()).collect();
        assert_eq!(order, vec!["high", "tie1", "tie2", "low"]);
    }

    #[test]
    fn analytics_over_division() {
        let mut teams = vec![
            entry("NYK", 117.0, 111.0, 0.62, 0.85),
            entry("BOS", 121.0, 108.0, 0.74, 0.95),
            entry("WAS", 106.0, 119.0, 0.20, 0.05),
            entry("TOR", 110.0, 116.0, 0.40, 0.30),
        ];
        sort_by_probability(&mut teams);
        let a = compute_analytics(&teams).unwrap();
        assert_eq!(a.strongest_team, "BOS");
        assert_eq!(a.weakest_team, "WAS");
        assert_eq!(a.playoff_teams, 2);
        assert!((a.average_off_rating - 113.5).abs() < 1e-9);
        assert!((a.average_def_rating - 113.5).abs() < 1e-9);
        assert!((a.average_win_pct - 0.49).abs() < 1e-9);
        assert_eq!(a.best_offense, "BOS");
        assert_eq!(a.best_defense, "BOS");
    }

    #[test]
    fn averages_round_from_exact_mean() {
        let teams = vec![
            entry("hi", 100.7, 110.0, 0.013, 0.6),
            entry("lo", 100.0, 110.0, 0.0, 0.4),
        ];
        let a = compute_analytics(&teams).unwrap();
        assert_eq!(a.average_off_rating, 100.3);
        assert_eq!(a.average_win_pct, 0.006);
    }

    #[test]
    fn leader_ties_go_to_first_in_order() {
        let teams = vec![
            entry("first", 115.0, 105.0, 0.5, 0.9),
            entry("second", 115.0, 105.0, 0.5, 0.8),
        ];
        let a = compute_analytics(&teams).unwrap();
        assert_eq!(a.best_offense, "first");
        assert_eq!(a.best_defense, "first");
    }

    #[test]
    fn single_team_division() {
        let teams = vec![entry("Solo", 112.0, 108.0, 0.55, 0.5)];
        let bounds = compute_bounds(&teams).unwrap();
        let s = assemble_division("pacific", Conference::Western, teams, &bounds).unwrap();
        let a = &s.division_analytics;
        assert_eq!(a.strongest_team, a.weakest_team);
        assert!((a.average_off_rating - 112.0).abs() < 1e-9);
        assert!((a.average_win_pct - 0.55).abs() < 1e-9);
        assert_eq!(s.name, "Pacific Division");
        assert_eq!(s.conference, Conference::Western);
    }

    #[test]
    fn empty_division_yields_none() {
        let bounds = GlobalBounds {
            off_rating: Bounds::new(0.0, 1.0),
            def_rating: Bounds::new(0.0, 1.0),
            win_pct: Bounds::new(0.0, 1.0),
        };
        assert!(assemble_division("atlantic", Conference::Eastern, vec![], &bounds).is_none());
        assert!(compute_analytics(&[]).is_none());
    }
}
