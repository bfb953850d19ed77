// Library root: the season-prediction aggregation pipeline.
//
// Raw per-division rows go in, a `Report` comes out. No I/O happens here;
// reading CSVs and writing JSON live in `nba-oracle-app`.

pub mod bounds;
pub mod classify;
pub mod division;
pub mod model;
pub mod normalize;
pub mod pipeline;
pub mod record;
pub mod team;

/// Round to one decimal place (ratings, scores).
pub(crate) fn round1(value: f64) -> f64 {
    round_to(value, 1)
}

/// Round to three decimal places (win percentage averages).
pub(crate) fn round3(value: f64) -> f64 {
    round_to(value, 3)
}

// Rounds from the exact stored value. Scaling by 10^n first can push a
// value just below a .5 boundary onto it.
fn round_to(value: f64, places: usize) -> f64 {
    format!("{value:.places$}").parse().unwrap_or(value)
}
