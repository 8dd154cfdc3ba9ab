//! JSON output formatting
//!
//! One `SearchReport` per run. Big integers (coefficients and roots) are
//! written as decimal strings so values beyond 64 bits survive any JSON
//! reader.

use crate::coordinator::SearchOutcome;
use crate::polynomial::Polynomial;
use crate::stats::WorkerStats;
use crate::util::time::{calculate_rate, format_duration};
use crate::Result;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Duration;

/// Duration with both microseconds and human-readable format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonDuration {
    pub micros: u64,
    pub human: String,
}

impl JsonDuration {
    pub fn from_duration(d: Duration) -> Self {
        Self {
            micros: d.as_micros() as u64,
            human: format_duration(d),
        }
    }
}

/// Per-worker section of a report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonWorker {
    pub worker_id: usize,
    pub candidates_tested: u64,
    pub roots_found: u64,
    pub elapsed: JsonDuration,
}

impl From<&WorkerStats> for JsonWorker {
    fn from(stats: &WorkerStats) -> Self {
        Self {
            worker_id: stats.worker_id,
            candidates_tested: stats.candidates_tested(),
            roots_found: stats.roots_found(),
            elapsed: JsonDuration::from_duration(stats.elapsed()),
        }
    }
}

/// Report for a single search run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchReport {
    pub polynomial: String,
    pub label: String,
    pub coefficients: Vec<String>,
    pub degree: usize,
    pub target: usize,
    pub workers: usize,
    /// Roots in ascending order
    pub roots: Vec<String>,
    pub completed: bool,
    pub elapsed: JsonDuration,
    pub candidates_tested: u64,
    pub evaluations_per_sec: f64,
    pub per_worker: Vec<JsonWorker>,
}

impl SearchReport {
    pub fn from_outcome(label: &str, polynomial: &Polynomial, outcome: &SearchOutcome) -> Self {
        let total = outcome.stats.aggregate();
        Self {
            polynomial: polynomial.to_string(),
            label: label.to_string(),
            coefficients: polynomial.coefficients().iter().map(|c| c.to_string()).collect(),
            degree: polynomial.degree(),
            target: outcome.target,
            workers: outcome.workers,
            roots: outcome.sorted_roots().iter().map(|r| r.to_string()).collect(),
            completed: outcome.completed,
            elapsed: JsonDuration::from_duration(outcome.elapsed),
            candidates_tested: total.candidates_tested(),
            evaluations_per_sec: calculate_rate(total.candidates_tested(), outcome.elapsed),
            per_worker: outcome.stats.per_worker().iter().map(JsonWorker::from).collect(),
        }
    }
}

/// Write all reports from one invocation as a JSON array
pub fn write_json_report(output_path: &Path, reports: &[SearchReport], pretty: bool) -> Result<()> {
    let file = File::create(output_path)
        .with_context(|| format!("Failed to create JSON report: {}", output_path.display()))?;
    let mut writer = BufWriter::new(file);

    if pretty {
        serde_json::to_writer_pretty(&mut writer, reports)?;
    } else {
        serde_json::to_writer(&mut writer, reports)?;
    }

    writer.flush()?;
    Ok(())
}
