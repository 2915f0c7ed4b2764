use std::time::{Duration, Instant};

use crate::error::{BenchError, Result};
use crate::workload::Workload;

/// Outcome of one fixed-iteration timed trial against a single engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrialResult {
    pub label: &'static str,
    pub iterations: u32,
    pub total_elapsed: Duration,
    /// `total_elapsed / iterations`, truncated to whole nanoseconds.
    pub mean_per_call: Duration,
}

impl TrialResult {
    /// Mean per-call latency in milliseconds, computed in `f64` from the
    /// total so display rounding is not limited by `Duration` granularity.
    pub fn mean_millis(&self) -> f64 {
        self.total_elapsed.as_secs_f64() * 1_000.0 / f64::from(self.iterations)
    }
}

/// Runs one timed trial: `iterations` strictly sequential calls of
/// `matcher_test` against the workload, bracketed by a single monotonic
/// clock reading on each side. Individual call results are discarded; only
/// the elapsed total matters.
///
/// There is no warm-up pass: the first call pays any lazy-compilation or
/// cache-population cost inside the timed region. That matches one-shot
/// usage at the price of skewing the mean for engines with expensive first
/// calls.
///
/// A failing call aborts the trial immediately. The returned error names
/// the engine and the 1-based index of the failing call; no partial result
/// is produced, since a timing over fewer calls than requested would not be
/// comparable.
pub fn run<F>(
    label: &'static str,
    mut matcher_test: F,
    workload: &Workload,
    iterations: u32,
) -> Result<TrialResult>
where
    F: FnMut(&str) -> Result<bool>,
{
    if iterations == 0 {
        return Err(BenchError::InvalidArgument(
            "trial iteration count must be positive".to_string(),
        ));
    }

    tracing::debug!(
        label,
        iterations,
        subject_len = workload.len(),
        "starting timed trial"
    );

    let start = Instant::now();
    for call in 0..iterations {
        if let Err(err) = matcher_test(workload.as_str()) {
            let message = match err {
                BenchError::MatchEngine { message, .. } => message,
                other => other.to_string(),
            };
            return Err(BenchError::MatchEngine {
                engine: label,
                call_index: Some(call as usize + 1),
                message,
            });
        }
    }
    let total_elapsed = start.elapsed();

    let mean_per_call = total_elapsed / iterations;
    tracing::debug!(label, ?total_elapsed, ?mean_per_call, "completed timed trial");
    Ok(TrialResult {
        label,
        iterations,
        total_elapsed,
        mean_per_call,
    })
}
