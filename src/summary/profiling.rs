//! Per-column type inference and descriptive statistics.
//!
//! Cells arrive as text. A column's kind is decided from its non-blank cells only:
//! integers first, then finite floats, then boolean-like words, falling back to
//! text. Numeric columns get count/mean/std/min/quartiles/max computed with
//! polars; everything else gets count/distinct/most-frequent.

use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnKind {
    Integer,
    Float,
    Boolean,
    Text,
}

impl ColumnKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Integer => "Integer",
            Self::Float => "Float",
            Self::Boolean => "Boolean",
            Self::Text => "Text",
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer | Self::Float)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NumericStats {
    pub count: usize,
    pub mean: Option<f64>,
    pub std_dev: Option<f64>,
    pub min: Option<f64>,
    pub q1: Option<f64>,
    pub median: Option<f64>,
    pub q3: Option<f64>,
    pub max: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStats {
    pub count: usize,
    pub distinct: usize,
    pub top: Option<String>,
    pub top_freq: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ColumnStats {
    Numeric(NumericStats),
    Text(TextStats),
}

impl ColumnStats {
    /// Non-blank cells the statistics were computed over.
    pub fn count(&self) -> usize {
        match self {
            Self::Numeric(s) => s.count,
            Self::Text(s) => s.count,
        }
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn parse_float(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn is_boolean_word(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "true" | "false" | "yes" | "no"
    )
}

pub fn infer_kind(values: &[String]) -> ColumnKind {
    let mut present = values.iter().filter(|v| !is_blank(v)).peekable();
    if present.peek().is_none() {
        return ColumnKind::Text;
    }

    let present: Vec<&String> = present.collect();
    if present.iter().all(|v| v.trim().parse::<i64>().is_ok()) {
        ColumnKind::Integer
    } else if present.iter().all(|v| parse_float(v).is_some()) {
        ColumnKind::Float
    } else if present.iter().all(|v| is_boolean_word(v)) {
        ColumnKind::Boolean
    } else {
        ColumnKind::Text
    }
}

pub fn analyse_numeric(name: &str, values: &[String]) -> NumericStats {
    let parsed: Vec<f64> = values.iter().filter_map(|v| parse_float(v)).collect();
    let count = parsed.len();
    let series = Series::new(name.into(), parsed);

    let Ok(ca) = series.f64() else {
        return NumericStats {
            count,
            mean: None,
            std_dev: None,
            min: None,
            q1: None,
            median: None,
            q3: None,
            max: None,
        };
    };

    NumericStats {
        count,
        mean: ca.mean(),
        std_dev: ca.std(1),
        min: ca.min(),
        q1: ca.quantile(0.25, QuantileMethod::Linear).unwrap_or(None),
        median: ca.median(),
        q3: ca.quantile(0.75, QuantileMethod::Linear).unwrap_or(None),
        max: ca.max(),
    }
}

pub fn analyse_text(values: &[String]) -> TextStats {
    let mut freq: HashMap<&str, (usize, usize)> = HashMap::new();
    let mut count = 0;
    for (pos, value) in values.iter().enumerate() {
        if is_blank(value) {
            continue;
        }
        count += 1;
        freq.entry(value.as_str()).or_insert((0, pos)).0 += 1;
    }

    // Ties go to the value seen first
    let top = freq
        .iter()
        .max_by(|a, b| a.1.0.cmp(&b.1.0).then(b.1.1.cmp(&a.1.1)))
        .map(|(value, (n, _))| ((*value).to_owned(), *n));

    TextStats {
        count,
        distinct: freq.len(),
        top_freq: top.as_ref().map_or(0, |(_, n)| *n),
        top: top.map(|(value, _)| value),
    }
}

/// Kind, blank count and statistics for one column.
pub fn analyse_column(name: &str, values: &[String]) -> (ColumnKind, usize, ColumnStats) {
    let kind = infer_kind(values);
    let missing = values.iter().filter(|v| is_blank(v)).count();
    let stats = if kind.is_numeric() {
        ColumnStats::Numeric(analyse_numeric(name, values))
    } else {
        ColumnStats::Text(analyse_text(values))
    };
    (kind, missing, stats)
}
