use crate::engine::Engine;
use crate::error::{BenchError, Result};
use crate::scenario::Scenario;
use crate::trial::{self, TrialResult};
use crate::workload::Workload;

/// Benchmarks every engine in `engines` against one shared workload.
///
/// The workload is built once, and the same pattern text and iteration
/// count are used for every engine, so the reported means are directly
/// comparable. Results preserve registration order.
///
/// An engine whose pattern fails to compile is skipped with a warning;
/// benchmarking continues with the remaining engines. A fault inside a
/// timed loop aborts the whole comparison instead: timings from a broken
/// matcher would be misleading, and engines not yet reached are not run.
pub fn compare(engines: &[Box<dyn Engine>], scenario: &Scenario) -> Result<Vec<TrialResult>> {
    let workload = Workload::build(scenario.base, scenario.repeat_count)?;

    let mut results = Vec::with_capacity(engines.len());
    for engine in engines {
        let matcher = match engine.compile(scenario.pattern) {
            Ok(matcher) => matcher,
            Err(err @ BenchError::Compile { .. }) => {
                tracing::warn!(
                    engine = engine.label(),
                    %err,
                    "skipping engine: pattern failed to compile"
                );
                continue;
            }
            Err(err) => return Err(err),
        };
        let result = trial::run(
            engine.label(),
            |subject| matcher.test(subject),
            &workload,
            scenario.iterations,
        )?;
        results.push(result);
    }
    Ok(results)
}
