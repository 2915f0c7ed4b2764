use crate::error::{BenchError, Result};

/// The subject string every engine in one comparison run is tested against.
///
/// Built once per run by repeating a base text, then shared read-only across
/// all trials so every engine sees byte-identical input of identical size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workload {
    subject: String,
    base_len: usize,
    repeat_count: usize,
}

impl Workload {
    /// Builds the subject by concatenating `base` exactly `repeat_count`
    /// times with no separator.
    ///
    /// `base` must be non-empty and `repeat_count` positive; otherwise the
    /// subject would be empty and matching it would measure nothing.
    pub fn build(base: &str, repeat_count: usize) -> Result<Workload> {
        if base.is_empty() {
            return Err(BenchError::InvalidArgument(
                "workload base text must not be empty".to_string(),
            ));
        }
        if repeat_count == 0 {
            return Err(BenchError::InvalidArgument(
                "workload repeat count must be positive".to_string(),
            ));
        }

        let subject = base.repeat(repeat_count);
        tracing::debug!(
            base_len = base.len(),
            repeat_count,
            subject_len = subject.len(),
            "built workload subject"
        );
        Ok(Workload {
            subject,
            base_len: base.len(),
            repeat_count,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.subject
    }

    /// Subject length in bytes; always `base_len() * repeat_count()`.
    pub fn len(&self) -> usize {
        self.subject.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subject.is_empty()
    }

    pub fn base_len(&self) -> usize {
        self.base_len
    }

    pub fn repeat_count(&self) -> usize {
        self.repeat_count
    }
}
