//! Benchmark harness: random graph generation and timed algorithm runs
//!
//! The report is plain data (serde `Serialize`) for external plotting.

pub mod generator;
pub mod harness;

pub use generator::ErdosRenyi;
pub use harness::{
    benchmark, run_benchmark, AlgorithmSummary, BenchmarkConfig, BenchmarkReport, RunMetrics,
};
