// Min-max scaling onto a 0-100 range.

/// Score returned when the bound carries no spread.
pub const DEGENERATE_SCORE: f64 = 50.0;

/// Observed minimum and maximum of one metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    pub fn new(min: f64, max: f64) -> Self {
        Bounds { min, max }
    }

    /// Widen the bound to include `value`.
    pub fn include(self, value: f64) -> Self {
        Bounds {
            min: self.min.min(value),
            max: self.max.max(value),
        }
    }

    pub fn score(&self, value: f64) -> f64 {
        normalize(value, self.min, self.max)
    }

    /// Score for metrics where lower is better.
    pub fn inverted_score(&self, value: f64) -> f64 {
        100.0 - normalize(value, self.min, self.max)
    }
}

/// Linearly map `value` from `[min, max]` onto `[0, 100]`.
///
/// Returns 50 when `min == max`. The result is not clamped; values drawn
/// from the sample the bound was computed over always land in range.
pub fn normalize(value: f64, min: f64, max: f64) -> f64 {
    if max == min {
        return DEGENERATE_SCORE;
    }
    (value - min) / (max - min) * 100.0
}
