//! Benchmark runner and report
//!
//! For every configured vertex count the harness generates `repetitions`
//! random graphs, runs each configured algorithm that accepts the graph's
//! kind, and records wall-clock time per run. Graphs are independent, so
//! with `parallel = true` they are processed on the rayon pool.

use super::generator::ErdosRenyi;
use crate::algorithms::{run, AlgorithmKind, AlgorithmResult, RunContext};
use crate::storage::{Graph, GraphKind};
use anyhow::{ensure, Context, Result};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Benchmark settings, loadable from TOML
///
/// Missing keys take their default values:
///
/// ```
/// use trueno_graph_algos::bench::BenchmarkConfig;
///
/// let config = BenchmarkConfig::from_toml_str(r#"
///     vertex_counts = [8, 16]
///     edge_probability = 0.25
///     algorithms = ["bfs", "dijkstra"]
/// "#).unwrap();
///
/// assert_eq!(config.vertex_counts, vec![8, 16]);
/// assert_eq!(config.repetitions, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchmarkConfig {
    /// Graph sizes to generate
    pub vertex_counts: Vec<usize>,
    /// Probability of each candidate edge
    pub edge_probability: f64,
    /// Inclusive `(low, high)` range of generated weights
    pub weight_range: (f64, f64),
    /// Graphs generated per vertex count
    pub repetitions: usize,
    /// Base seed; graph `i` uses `seed + i`
    pub seed: u64,
    /// Kind of the generated graphs
    pub graph_kind: GraphKind,
    /// Algorithms to run; those that reject `graph_kind` are skipped
    pub algorithms: Vec<AlgorithmKind>,
    /// Process graphs on the rayon thread pool
    pub parallel: bool,
    /// Per-run time limit in milliseconds
    pub deadline_ms: Option<u64>,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            vertex_counts: vec![10, 50, 100],
            edge_probability: 0.1,
            weight_range: (1.0, 10.0),
            repetitions: 3,
            seed: 42,
            graph_kind: GraphKind::Undirected,
            algorithms: AlgorithmKind::ALL.to_vec(),
            parallel: false,
            deadline_ms: None,
        }
    }
}

impl BenchmarkConfig {
    /// Parse and validate a TOML document
    ///
    /// # Errors
    ///
    /// Returns an error if the document does not parse or fails [`validate`](Self::validate)
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source).context("Failed to parse benchmark config")?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or its contents are invalid
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml_str(&source).with_context(|| format!("Invalid config {}", path.display()))
    }

    /// Check the settings are usable
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid setting
    pub fn validate(&self) -> Result<()> {
        ensure!(!self.vertex_counts.is_empty(), "vertex_counts must not be empty");
        ensure!(
            (0.0..=1.0).contains(&self.edge_probability),
            "edge_probability {} outside [0, 1]",
            self.edge_probability
        );
        let (low, high) = self.weight_range;
        ensure!(
            low.is_finite() && high.is_finite() && low <= high,
            "invalid weight_range [{low}, {high}]"
        );
        ensure!(
            low >= 0.0 || !self.algorithms.contains(&AlgorithmKind::Dijkstra),
            "dijkstra needs non-negative weights, weight_range starts at {low}"
        );
        ensure!(self.repetitions > 0, "repetitions must be at least 1");
        Ok(())
    }

    fn run_context(&self) -> RunContext {
        match self.deadline_ms {
            Some(ms) => RunContext::unbounded().with_timeout(Duration::from_millis(ms)),
            None => RunContext::unbounded(),
        }
    }
}

/// One timed algorithm run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunMetrics {
    /// Vertices in the input graph
    pub vertex_count: usize,
    /// Logical edges in the input graph
    pub edge_count: usize,
    /// Wall-clock duration of the run
    pub elapsed: Duration,
    /// Vertices (or edges) the algorithm processed
    pub processed: usize,
}

/// Aggregate timings for one algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AlgorithmSummary {
    /// Completed runs
    pub runs: usize,
    /// Mean elapsed time
    pub mean: Duration,
    /// Fastest run
    pub best: Duration,
    /// Slowest run
    pub worst: Duration,
}

/// Per-algorithm run metrics, keyed by algorithm name
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BenchmarkReport {
    /// Runs in generation order
    pub runs: BTreeMap<String, Vec<RunMetrics>>,
    /// Runs stopped by the configured deadline
    pub interrupted: usize,
}

impl BenchmarkReport {
    /// Metrics recorded for `algorithm`
    #[must_use]
    pub fn runs_for(&self, algorithm: AlgorithmKind) -> &[RunMetrics] {
        self.runs
            .get(algorithm.name())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Total completed runs across all algorithms
    #[must_use]
    pub fn total_runs(&self) -> usize {
        self.runs.values().map(Vec::len).sum()
    }

    /// Mean, best and worst elapsed time per algorithm
    #[must_use]
    pub fn summary(&self) -> BTreeMap<String, AlgorithmSummary> {
        self.runs
            .iter()
            .filter(|(_, runs)| !runs.is_empty())
            .map(|(name, runs)| {
                let total: Duration = runs.iter().map(|r| r.elapsed).sum();
                let mean = u32::try_from(runs.len()).map_or(Duration::ZERO, |n| total / n);
                let best = runs.iter().map(|r| r.elapsed).min().unwrap_or_default();
                let worst = runs.iter().map(|r| r.elapsed).max().unwrap_or_default();
                (
                    name.clone(),
                    AlgorithmSummary {
                        runs: runs.len(),
                        mean,
                        best,
                        worst,
                    },
                )
            })
            .collect()
    }
}

enum Outcome {
    Completed(AlgorithmKind, RunMetrics),
    Interrupted,
}

/// Run every configured algorithm over freshly generated graphs
///
/// # Errors
///
/// Returns an error if the config is invalid or an algorithm fails for a
/// reason other than its deadline
pub fn run_benchmark(config: &BenchmarkConfig) -> Result<BenchmarkReport> {
    config.validate()?;

    let jobs: Vec<(usize, u64)> = config
        .vertex_counts
        .iter()
        .flat_map(|&n| std::iter::repeat(n).take(config.repetitions))
        .zip(0u64..)
        .map(|(n, i)| (n, config.seed.wrapping_add(i)))
        .collect();

    let outcomes: Vec<Vec<Outcome>> = if config.parallel {
        jobs.par_iter()
            .map(|&(n, seed)| run_graph(config, n, seed))
            .collect::<Result<_>>()?
    } else {
        jobs.iter()
            .map(|&(n, seed)| run_graph(config, n, seed))
            .collect::<Result<_>>()?
    };

    let mut report = BenchmarkReport::default();
    for outcome in outcomes.into_iter().flatten() {
        match outcome {
            Outcome::Completed(kind, metrics) => report
                .runs
                .entry(kind.name().to_string())
                .or_default()
                .push(metrics),
            Outcome::Interrupted => report.interrupted += 1,
        }
    }

    info!(
        graphs = jobs.len(),
        runs = report.total_runs(),
        interrupted = report.interrupted,
        "benchmark finished"
    );
    Ok(report)
}

/// Benchmark all algorithms with default settings
///
/// # Errors
///
/// Returns an error if `edge_probability` is outside `[0, 1]` or
/// `vertex_counts` is empty
///
/// # Example
///
/// ```
/// use trueno_graph_algos::bench::benchmark;
///
/// let report = benchmark(&[5, 10], 0.5).unwrap();
/// assert_eq!(report.runs["bfs"].len(), 6);
/// assert!(report.runs.get("topological_sort").is_none());
/// ```
pub fn benchmark(vertex_counts: &[usize], edge_probability: f64) -> Result<BenchmarkReport> {
    run_benchmark(&BenchmarkConfig {
        vertex_counts: vertex_counts.to_vec(),
        edge_probability,
        ..BenchmarkConfig::default()
    })
}

fn run_graph(config: &BenchmarkConfig, vertices: usize, seed: u64) -> Result<Vec<Outcome>> {
    let (low, high) = config.weight_range;
    let graph = ErdosRenyi::new(vertices)
        .probability(config.edge_probability)
        .weights(low, high)
        .kind(config.graph_kind)
        .seed(seed)
        .generate();

    config
        .algorithms
        .iter()
        .filter(|kind| kind.supports(graph.kind()))
        .map(|&kind| time_run(config, &graph, kind))
        .collect()
}

fn time_run(config: &BenchmarkConfig, graph: &Graph, kind: AlgorithmKind) -> Result<Outcome> {
    let ctx = config.run_context();
    let started = Instant::now();

    match run(graph, kind, None, &ctx) {
        Ok(output) => {
            let metrics = RunMetrics {
                vertex_count: graph.vertex_count(),
                edge_count: graph.edge_count(),
                elapsed: started.elapsed(),
                processed: output.processed(),
            };
            info!(
                algorithm = kind.name(),
                vertices = metrics.vertex_count,
                edges = metrics.edge_count,
                elapsed_us = metrics.elapsed.as_micros(),
                "benchmark run"
            );
            Ok(Outcome::Completed(kind, metrics))
        }
        Err(err) if err.is_interrupted() => {
            warn!(
                algorithm = kind.name(),
                vertices = graph.vertex_count(),
                "benchmark run interrupted: {err}"
            );
            Ok(Outcome::Interrupted)
        }
        Err(err) => Err(err).with_context(|| {
            format!("{kind} failed on a graph with {} vertices", graph.vertex_count())
        }),
    }
}
