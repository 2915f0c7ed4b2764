pub mod compare;
pub mod engine;
pub mod error;
pub mod report;
pub mod scenario;
pub mod trial;
pub mod workload;

pub use error::{BenchError, Result};
pub use trial::TrialResult;
pub use workload::Workload;

#[cfg(test)]
mod workload_test;
