// One batch run: read every division, build the report, write it out.

use crate::config::Config;
use crate::ingest::read_division;
use crate::output::write_report;
use anyhow::Context;
use nba_oracle_core::pipeline::{build_report, DivisionInput};
use std::path::PathBuf;
use tracing::{info, warn};

/// What a completed run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub output: PathBuf,
    /// Division keys present in the report.
    pub divisions: Vec<String>,
    pub teams: usize,
    /// Division keys whose source was missing or unreadable.
    pub skipped: Vec<String>,
}

/// Read every configured division. Missing or unreadable sources are
/// skipped and reported by key.
pub fn load_inputs(config: &Config) -> (Vec<DivisionInput>, Vec<String>) {
    let mut inputs = Vec::new();
    let mut skipped = Vec::new();

    for division in &config.divisions {
        let path = config.division_path(division);
        match read_division(&path) {
            Ok(Some(records)) => {
                info!("{}: read {} rows from {}", division.key, records.len(), path.display());
                inputs.push(DivisionInput {
                    key: division.key.clone(),
                    conference: division.conference,
                    records,
                });
            }
            Ok(None) => {
                warn!("{}: file not found: {}", division.key, path.display());
                skipped.push(division.key.clone());
            }
            Err(e) => {
                warn!("{}: skipping division: {}", division.key, e);
                skipped.push(division.key.clone());
            }
        }
    }

    (inputs, skipped)
}

/// Run the whole transformation once.
///
/// When the pipeline fails nothing is written.
pub fn execute(config: &Config) -> anyhow::Result<RunSummary> {
    let (inputs, skipped) = load_inputs(config);

    let report = build_report(config.meta.clone(), inputs).context("failed to build report")?;

    let output = config.output_path();
    write_report(&output, &report)
        .with_context(|| format!("failed to write report to {}", output.display()))?;

    let teams = report.divisions.values().map(|d| d.teams.len()).sum();
    let divisions: Vec<String> = report.divisions.keys().cloned().collect();
    info!(
        "Wrote {} teams in {} divisions to {}",
        teams,
        divisions.len(),
        output.display()
    );

    Ok(RunSummary {
        output,
        divisions,
        teams,
        skipped,
    })
}
