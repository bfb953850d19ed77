// Two-pass report construction.
//
// Pass 1 turns each division's rows into team entries. The bounds are then
// taken over the union of all divisions. Pass 2 scores and summarizes each
// division against those shared bounds.

use crate::bounds::compute_bounds;
use crate::classify::classify;
use crate::division::assemble_division;
use crate::model::{Conference, Report, ReportMeta};
use crate::record::{RawRecord, SeasonRow};
use crate::team::{build_teams, TeamEntry};
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("no prediction-season teams found in any division")]
    EmptyDataset,
}

/// Raw rows for one division whose source was found.
#[derive(Debug, Clone)]
pub struct DivisionInput {
    pub key: String,
    pub conference: Conference,
    pub records: Vec<RawRecord>,
}

/// Teams of one division after pass 1.
#[derive(Debug, Clone)]
pub struct DivisionTeams {
    pub key: String,
    pub conference: Conference,
    pub teams: Vec<TeamEntry>,
}

/// Pass 1: parse, classify, and aggregate every division.
///
/// Divisions without any prediction-season row are dropped here.
pub fn collect_teams(inputs: Vec<DivisionInput>, target_season: &str) -> Vec<DivisionTeams> {
    let mut out = Vec::with_capacity(inputs.len());
    for input in inputs {
        let rows: Vec<SeasonRow> = input.records.iter().map(SeasonRow::from_raw).collect();
        let classified = classify(rows, target_season);
        debug!(
            "{}: {} current rows, history for [{}]",
            input.key,
            classified.current.len(),
            classified.history.teams().collect::<Vec<_>>().join(", ")
        );

        let teams = build_teams(&classified);
        if teams.is_empty() {
            warn!("{}: no {} rows, omitting division", input.key, target_season);
            continue;
        }
        info!("{}: {} teams", input.key, teams.len());
        out.push(DivisionTeams {
            key: input.key,
            conference: input.conference,
            teams,
        });
    }
    out
}

/// Build the full report.
///
/// Fails only with `PipelineError::EmptyDataset`, before anything is scored.
pub fn build_report(meta: ReportMeta, inputs: Vec<DivisionInput>) -> Result<Report, PipelineError> {
    let collected = collect_teams(inputs, &meta.prediction_target);

    let bounds = compute_bounds(collected.iter().flat_map(|d| d.teams.iter()))?;
    debug!("global bounds: {:?}", bounds);

    let mut divisions = BTreeMap::new();
    for DivisionTeams { key, conference, teams } in collected {
        if let Some(section) = assemble_division(&key, conference, teams, &bounds) {
            divisions.insert(key, section);
        }
    }

    Ok(Report { meta, divisions })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
