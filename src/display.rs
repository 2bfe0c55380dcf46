//! Headless text rendering for tick results
//!
//! The dashboard's visual surface is deliberately out of scope here;
//! this adapter turns observations into labeled, column-aligned rows
//! that any surface (or a terminal) can show. Errors render as a
//! visible but non-fatal "N/A" so a bad tick degrades instead of
//! crashing the refresh loop.

use rdash_core::{HistoryBuffer, Observation};
use rdash_types::{find_variable, TypedValue};

/// One rendered metric line.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricRow {
    pub label: String,
    pub value: String,
    /// Signed change since the previous tick, when one exists
    pub delta: Option<String>,
    /// Degradation cause when the value is an error
    pub note: Option<String>,
}

/// Render one observation as a metric row.
///
/// Numeric values get two decimals and the registry unit when one is
/// known; the variable name itself is used as the label for anything
/// not in the registry.
pub fn metric_row(variable: &str, observation: &Observation) -> MetricRow {
    let meta = find_variable(variable);
    let label = meta.map(|m| m.label.to_string()).unwrap_or_else(|| variable.to_string());

    let value = match (&observation.value, meta.and_then(|m| m.unit)) {
        (TypedValue::Numeric(_), Some(unit)) => {
            format!("{} {}", observation.value.display_text(), unit)
        }
        _ => observation.value.display_text(),
    };

    MetricRow {
        label,
        value,
        delta: observation.delta.map(format_delta),
        note: observation.value.as_error().map(|e| e.message.clone()),
    }
}

/// Format a delta with an explicit sign, e.g. `+2.50` / `-1.10`.
pub fn format_delta(delta: f64) -> String {
    format!("{delta:+.2}")
}

/// One-line status for a boolean flag.
pub fn boolean_status(variable: &str, value: &TypedValue) -> String {
    let label = find_variable(variable)
        .map(|m| m.label.to_string())
        .unwrap_or_else(|| variable.to_string());

    match value {
        TypedValue::Boolean(true) => format!("{label}: [ ON]"),
        TypedValue::Boolean(false) => format!("{label}: [OFF]"),
        TypedValue::Error(e) => format!("{label}: [ ? ] ({})", e.message),
        other => format!("{label}: [ ? ] (unexpected value '{other}')"),
    }
}

/// Render rows as a column-aligned table, one metric per line.
pub fn render_table(rows: &[MetricRow]) -> String {
    // Width in chars, not bytes: units like "°C" are multibyte
    let label_width = rows.iter().map(|r| r.label.chars().count()).max().unwrap_or(0);
    let value_width = rows.iter().map(|r| r.value.chars().count()).max().unwrap_or(0);

    let mut out = String::new();
    for row in rows {
        out.push_str(&format!(
            "{:<label_width$}  {:>value_width$}",
            row.label, row.value
        ));
        if let Some(delta) = &row.delta {
            out.push_str(&format!("  {delta}"));
        }
        if let Some(note) = &row.note {
            out.push_str(&format!("  ({note})"));
        }
        out.push('\n');
    }
    out
}

/// One-line trend summary for a variable's recorded history.
pub fn history_summary(variable: &str, history: &HistoryBuffer) -> Option<String> {
    let latest = history.latest()?;
    let min = history.min()?;
    let max = history.max()?;
    let label = find_variable(variable)
        .map(|m| m.label.to_string())
        .unwrap_or_else(|| variable.to_string());

    Some(format!(
        "{label}: last {:.2}  min {:.2}  max {:.2}  ({} samples)",
        latest.value,
        min,
        max,
        history.len()
    ))
}
