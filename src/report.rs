//! Timed scan results and their text / JSON renderings.

use std::time::Instant;

use anyhow::Result;
use serde::Serialize;

use crate::scan::result_capacity_hint;
use crate::strategy::{scan_into, StrategySelection};
use crate::Candidate;

/// Outcome of one timed scan.
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub bound: Candidate,
    pub selection: StrategySelection,
    pub count: usize,
    pub highest: Option<Candidate>,
    pub elapsed_ms: f64,
    pub results: Vec<Candidate>,
}

impl ScanReport {
    /// Run the selected strategy over `[2, bound]` and time it.
    pub fn run(bound: Candidate, selection: &StrategySelection) -> Self {
        let mut results = Vec::with_capacity(result_capacity_hint(bound, selection));
        let start = Instant::now();
        scan_into(bound, selection, &mut results);
        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
        ScanReport {
            bound,
            selection: *selection,
            count: results.len(),
            highest: results.last().copied(),
            elapsed_ms,
            results,
        }
    }

    /// `<bound> => {<values>} <count> <noun> in <ms> ms`
    ///
    /// With `highest_only`, the braces hold just the largest value.
    pub fn render_text(&self, highest_only: bool) -> String {
        let values = if highest_only {
            self.highest.map(|h| h.to_string()).unwrap_or_default()
        } else {
            join_csv(&self.results)
        };
        format!(
            "{} => {{{}}} {} {} in {:.4} ms",
            self.bound,
            values,
            self.count,
            self.selection.digit_shape.noun(),
            self.elapsed_ms
        )
    }

    /// JSON object; `highest_only` drops the full result list.
    pub fn render_json(&self, highest_only: bool) -> Result<String> {
        if highest_only {
            let summary = ScanReport {
                results: Vec::new(),
                ..self.clone()
            };
            Ok(serde_json::to_string(&summary)?)
        } else {
            Ok(serde_json::to_string(self)?)
        }
    }
}

/// Comma-separated values without spaces.
pub fn join_csv(values: &[Candidate]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
