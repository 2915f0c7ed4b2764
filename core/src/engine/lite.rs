use regex_lite::Regex;

use crate::engine::{Engine, Matcher};
use crate::error::{BenchError, Result};

/// The `regex-lite` crate: size-optimized NFA interpreter, no lazy DFA.
pub struct RegexLiteEngine;

impl Engine for RegexLiteEngine {
    fn label(&self) -> &'static str {
        "Regex Lite"
    }

    fn compile(&self, pattern: &str) -> Result<Box<dyn Matcher>> {
        let regex = Regex::new(pattern).map_err(|err| BenchError::Compile {
            engine: self.label(),
            message: err.to_string(),
        })?;
        Ok(Box::new(RegexLiteMatcher { regex }))
    }
}

struct RegexLiteMatcher {
    regex: Regex,
}

impl Matcher for RegexLiteMatcher {
    fn test(&self, subject: &str) -> Result<bool> {
        Ok(self.regex.is_match(subject))
    }
}
