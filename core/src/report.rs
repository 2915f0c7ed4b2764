use crate::trial::TrialResult;

/// One human-readable line per engine, mean per-call latency in
/// milliseconds with four decimal places.
pub fn format_line(result: &TrialResult) -> String {
    format!("{} took: {:.4}ms", result.label, result.mean_millis())
}

/// Prints one line per result to stdout, in the order the trials ran.
pub fn print_report(results: &[TrialResult]) {
    for result in results {
        println!("{}", format_line(result));
    }
}
