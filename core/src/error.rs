use std::fmt;

pub type Result<T> = std::result::Result<T, BenchError>;

/// Errors raised by the harness, one variant per failure phase.
///
/// `Compile` and `MatchEngine` carry the label of the engine that failed so
/// the operator can tell which comparison entry is at fault. `MatchEngine`
/// additionally carries the 1-based index of the failing call once the fault
/// has passed through the trial runner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BenchError {
    InvalidArgument(String),
    Compile {
        engine: &'static str,
        message: String,
    },
    MatchEngine {
        engine: &'static str,
        call_index: Option<usize>,
        message: String,
    },
}

impl fmt::Display for BenchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BenchError::InvalidArgument(message) => {
                write!(f, "invalid argument: {}", message)
            }
            BenchError::Compile { engine, message } => {
                write!(f, "{}: pattern failed to compile: {}", engine, message)
            }
            BenchError::MatchEngine {
                engine,
                call_index,
                message,
            } => {
                write!(f, "{}: match engine fault", engine)?;
                if let Some(call) = call_index {
                    write!(f, " on call {}", call)?;
                }
                write!(f, ": {}", message)
            }
        }
    }
}

impl std::error::Error for BenchError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_display() {
        let err = BenchError::InvalidArgument("repeat count must be positive".to_string());
        assert_eq!(err.to_string(), "invalid argument: repeat count must be positive");
    }

    #[test]
    fn compile_display_names_engine() {
        let err = BenchError::Compile {
            engine: "Rust Regex",
            message: "unclosed group".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Rust Regex: pattern failed to compile: unclosed group"
        );
    }

    #[test]
    fn match_engine_display_includes_call_index_when_known() {
        let bare = BenchError::MatchEngine {
            engine: "Fancy Regex",
            call_index: None,
            message: "backtrack limit exceeded".to_string(),
        };
        assert_eq!(
            bare.to_string(),
            "Fancy Regex: match engine fault: backtrack limit exceeded"
        );

        let indexed = BenchError::MatchEngine {
            engine: "Fancy Regex",
            call_index: Some(7),
            message: "backtrack limit exceeded".to_string(),
        };
        assert_eq!(
            indexed.to_string(),
            "Fancy Regex: match engine fault on call 7: backtrack limit exceeded"
        );
    }
}
