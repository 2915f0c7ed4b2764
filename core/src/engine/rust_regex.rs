use regex::Regex;

use crate::engine::{Engine, Matcher};
use crate::error::{BenchError, Result};

/// The `regex` crate: finite-automata engine (lazy DFA with NFA fallback).
pub struct RustRegexEngine;

impl Engine for RustRegexEngine {
    fn label(&self) -> &'static str {
        "Rust Regex"
    }

    fn compile(&self, pattern: &str) -> Result<Box<dyn Matcher>> {
        let regex = Regex::new(pattern).map_err(|err| BenchError::Compile {
            engine: self.label(),
            message: err.to_string(),
        })?;
        Ok(Box::new(RustRegexMatcher { regex }))
    }
}

struct RustRegexMatcher {
    regex: Regex,
}

impl Matcher for RustRegexMatcher {
    fn test(&self, subject: &str) -> Result<bool> {
        // regex's is_match cannot fail once the pattern compiled.
        Ok(self.regex.is_match(subject))
    }
}
