//! Canonical comparison inputs.
//!
//! Configuration is compile-time constants rather than flags or environment
//! variables: a comparison is only meaningful when every engine in it saw
//! the same pattern, workload, and iteration count, so the knobs live here
//! where they cannot drift between engines.

/// Base text repeated to form the workload subject: quoted titles followed
/// by parenthesized four-digit years, resembling a real extraction input.
pub const DEFAULT_BASE: &str = "'Citizen Kane' (1941), 'The Wizard of Oz' (1939), 'M' (1931). ";

/// Large enough that per-call matching cost dominates call dispatch
/// overhead.
pub const DEFAULT_REPEAT_COUNT: usize = 10_000;

/// Timed calls per engine.
pub const DEFAULT_ITERATIONS: u32 = 1_000;

/// Quoted title followed by a four-digit parenthesized year. All bundled
/// engines accept this named-group syntax, so the same text is handed to
/// every compile step.
pub const DEFAULT_PATTERN: &str = r"'(?P<title>[^']+)'\s+\((?P<year>\d{4})\)";

/// Everything one comparison run needs, shared by every engine in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub pattern: &'static str,
    pub base: &'static str,
    pub repeat_count: usize,
    pub iterations: u32,
}

impl Default for Scenario {
    fn default() -> Self {
        Scenario {
            pattern: DEFAULT_PATTERN,
            base: DEFAULT_BASE,
            repeat_count: DEFAULT_REPEAT_COUNT,
            iterations: DEFAULT_ITERATIONS,
        }
    }
}
