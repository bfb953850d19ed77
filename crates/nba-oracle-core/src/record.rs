// Raw tabular rows and the field-default table applied at parse time.
//
// Input rows arrive as column-name -> string maps. Every field is resolved
// here exactly once, so downstream stages never see a missing value.

use std::collections::HashMap;
use tracing::debug;

/// One input row: column name to raw cell text.
pub type RawRecord = HashMap<String, String>;

// ---------------------------------------------------------------------------
// Field table
// ---------------------------------------------------------------------------

/// Logical fields read from a prediction row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Team,
    Season,
    WinPct,
    OffRating,
    DefRating,
    MadePlayoffs,
    PredictedProba,
    PredictedPlayoffs,
}

/// Value substituted when a field is missing or unusable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldDefault {
    Text(&'static str),
    Number(f64),
    Flag(bool),
}

/// Column name and default for every field.
pub static FIELD_TABLE: [(Field, &str, FieldDefault); 8] = [
    (Field::Team, "Team_orig", FieldDefault::Text("")),
    (Field::Season, "Season_orig", FieldDefault::Text("")),
    (Field::WinPct, "Win_Pct_orig", FieldDefault::Number(0.0)),
    (Field::OffRating, "Off_Rating_orig", FieldDefault::Number(0.0)),
    (Field::DefRating, "Def_Rating_orig", FieldDefault::Number(0.0)),
    (Field::MadePlayoffs, "MadePlayoffs_orig", FieldDefault::Flag(false)),
    (Field::PredictedProba, "1_predicted_proba", FieldDefault::Number(0.0)),
    (Field::PredictedPlayoffs, "MadePlayoffs_predicted", FieldDefault::Flag(false)),
];

/// Win percentage assumed by the efficiency heuristic when the column is
/// missing. Differs from the 0.0 used for the stat itself.
pub const EFFICIENCY_WIN_PCT_DEFAULT: f64 = 0.5;

impl Field {
    // FIELD_TABLE is listed in declaration order.
    fn entry(self) -> &'static (Field, &'static str, FieldDefault) {
        &FIELD_TABLE[self as usize]
    }

    /// CSV column header for this field.
    pub fn column(self) -> &'static str {
        self.entry().1
    }

    pub fn default_value(self) -> FieldDefault {
        self.entry().2
    }
}

// ---------------------------------------------------------------------------
// Typed lookups
// ---------------------------------------------------------------------------

/// Non-empty, trimmed cell text for `field`, if present.
fn cell(raw: &RawRecord, field: Field) -> Option<&str> {
    raw.get(field.column())
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
}

fn text(raw: &RawRecord, field: Field) -> String {
    match (cell(raw, field), field.default_value()) {
        (Some(v), _) => v.to_string(),
        (None, FieldDefault::Text(d)) => d.to_string(),
        (None, _) => String::new(),
    }
}

/// Parse a finite number, or `None` when missing/unparseable/non-finite.
fn parse_number(raw: &RawRecord, field: Field) -> Option<f64> {
    let value = cell(raw, field)?;
    match value.parse::<f64>() {
        Ok(n) if n.is_finite() => Some(n),
        _ => {
            debug!("unusable value '{}' in column {}", value, field.column());
            None
        }
    }
}

fn number(raw: &RawRecord, field: Field) -> f64 {
    parse_number(raw, field).unwrap_or(match field.default_value() {
        FieldDefault::Number(d) => d,
        _ => 0.0,
    })
}

fn flag(raw: &RawRecord, field: Field) -> bool {
    match cell(raw, field) {
        Some(v) => matches!(
            v.to_ascii_lowercase().as_str(),
            "1" | "1.0" | "true" | "yes"
        ),
        None => matches!(field.default_value(), FieldDefault::Flag(true)),
    }
}

// ---------------------------------------------------------------------------
// Parsed row
// ---------------------------------------------------------------------------

/// A row with every field resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonRow {
    pub team: String,
    pub season: String,
    pub win_pct: f64,
    pub off_rating: f64,
    pub def_rating: f64,
    pub made_playoffs: bool,
    pub predicted_proba: f64,
    pub predicted_playoffs: bool,
    /// Win percentage fed to the efficiency heuristic.
    pub efficiency_win_pct: f64,
}

impl SeasonRow {
    pub fn from_raw(raw: &RawRecord) -> Self {
        SeasonRow {
            team: text(raw, Field::Team),
            season: text(raw, Field::Season),
            win_pct: number(raw, Field::WinPct),
            off_rating: number(raw, Field::OffRating),
            def_rating: number(raw, Field::DefRating),
            made_playoffs: flag(raw, Field::MadePlayoffs),
            predicted_proba: number(raw, Field::PredictedProba),
            predicted_playoffs: flag(raw, Field::PredictedPlayoffs),
            efficiency_win_pct: parse_number(raw, Field::WinPct)
                .unwrap_or(EFFICIENCY_WIN_PCT_DEFAULT),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
