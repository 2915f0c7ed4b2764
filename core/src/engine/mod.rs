//! Engine capability boundary.
//!
//! The harness only needs two operations from a matching engine: compile a
//! pattern, and test a subject against the compiled form. Each operation is
//! one trait method, so adding an engine never touches the trial runner or
//! the comparison driver.

mod fancy;
mod lite;
mod rust_regex;

pub use fancy::FancyRegexEngine;
pub use lite::RegexLiteEngine;
pub use rust_regex::RustRegexEngine;

use crate::error::Result;

/// A compiled, engine-specific form of a pattern. Owned by a single engine;
/// never shared across engines.
pub trait Matcher {
    /// Reports whether `subject` matches. Must be free of side effects and
    /// idempotent; fails only on an unrecoverable engine-internal fault.
    fn test(&self, subject: &str) -> Result<bool>;
}

/// One engine under comparison.
pub trait Engine {
    fn label(&self) -> &'static str;

    /// Compiles `pattern` into this engine's matcher representation.
    fn compile(&self, pattern: &str) -> Result<Box<dyn Matcher>>;
}

/// The engines compared by default, in registration order. Comparison
/// output preserves this order.
pub fn default_engines() -> Vec<Box<dyn Engine>> {
    vec![
        Box::new(RustRegexEngine),
        Box::new(RegexLiteEngine),
        Box::new(FancyRegexEngine),
    ]
}
