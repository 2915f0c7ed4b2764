use fancy_regex::Regex;

use crate::engine::{Engine, Matcher};
use crate::error::{BenchError, Result};

/// The `fancy-regex` crate: backtracking engine with lookaround support.
/// Unlike the automata engines, its `is_match` is fallible (backtrack
/// limit), so it exercises the match-fault path for real.
pub struct FancyRegexEngine;

impl Engine for FancyRegexEngine {
    fn label(&self) -> &'static str {
        "Fancy Regex"
    }

    fn compile(&self, pattern: &str) -> Result<Box<dyn Matcher>> {
        let regex = Regex::new(pattern).map_err(|err| BenchError::Compile {
            engine: self.label(),
            message: err.to_string(),
        })?;
        Ok(Box::new(FancyRegexMatcher { regex }))
    }
}

struct FancyRegexMatcher {
    regex: Regex,
}

impl Matcher for FancyRegexMatcher {
    fn test(&self, subject: &str) -> Result<bool> {
        self.regex
            .is_match(subject)
            .map_err(|err| BenchError::MatchEngine {
                engine: "Fancy Regex",
                call_index: None,
                message: err.to_string(),
            })
    }
}
