// League-wide bounds for the normalized metrics.

use crate::normalize::Bounds;
use crate::pipeline::PipelineError;
use crate::team::TeamEntry;

/// Min/max of each normalized metric across every team in every division.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalBounds {
    pub off_rating: Bounds,
    pub def_rating: Bounds,
    pub win_pct: Bounds,
}

/// Scan all teams once. An empty set is `PipelineError::EmptyDataset`.
pub fn compute_bounds<'a, I>(teams: I) -> Result<GlobalBounds, PipelineError>
where
    I: IntoIterator<Item = &'a TeamEntry>,
{
    let mut iter = teams.into_iter();
    let first = iter.next().ok_or(PipelineError::EmptyDataset)?;
    let stats = &first.record.stats;
    let seed = GlobalBounds {
        off_rating: Bounds::new(stats.off_rating, stats.off_rating),
        def_rating: Bounds::new(stats.def_rating, stats.def_rating),
        win_pct: Bounds::new(stats.win_pct, stats.win_pct),
    };

    Ok(iter.fold(seed, |acc, team| {
        let s = &team.record.stats;
        GlobalBounds {
            off_rating: acc.off_rating.include(s.off_rating),
            def_rating: acc.def_rating.include(s.def_rating),
            win_pct: acc.win_pct.include(s.win_pct),
        }
    }))
}
