// Split a division's rows into the prediction season and prior seasons.

use crate::model::HistoricalEntry;
use crate::record::SeasonRow;
use std::collections::HashMap;

/// Prior-season entries grouped by team, in first-seen team order.
#[derive(Debug, Clone, Default)]
pub struct HistoryIndex {
    groups: Vec<(String, Vec<HistoricalEntry>)>,
    positions: HashMap<String, usize>,
}

impl HistoryIndex {
    fn push(&mut self, team: &str, entry: HistoricalEntry) {
        let idx = match self.positions.get(team) {
            Some(&idx) => idx,
            None => {
                self.groups.push((team.to_string(), Vec::new()));
                self.positions.insert(team.to_string(), self.groups.len() - 1);
                self.groups.len() - 1
            }
        };
        self.groups[idx].1.push(entry);
    }

    /// Entries for `team` in input order. Unknown teams have none.
    pub fn get(&self, team: &str) -> &[HistoricalEntry] {
        self.positions
            .get(team)
            .map(|&idx| self.groups[idx].1.as_slice())
            .unwrap_or(&[])
    }

    pub fn teams(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(team, _)| team.as_str())
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Result of partitioning one division.
#[derive(Debug, Clone, Default)]
pub struct Classified {
    /// Rows whose season equals the prediction target, in input order.
    pub current: Vec<SeasonRow>,
    pub history: HistoryIndex,
}

/// Partition rows by season label against `target_season`.
///
/// Every row lands in exactly one side.
pub fn classify(rows: Vec<SeasonRow>, target_season: &str) -> Classified {
    let mut out = Classified::default();
    for row in rows {
        if row.season == target_season {
            out.current.push(row);
        } else {
            out.history.push(
                &row.team,
                HistoricalEntry {
                    season: row.season,
                    win_pct: row.win_pct,
                    off_rating: row.off_rating,
                    def_rating: row.def_rating,
                    made_playoffs: row.made_playoffs,
                },
            );
        }
    }
    out
}
