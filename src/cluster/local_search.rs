//! Greedy local search minimizing the line index.
//!
//! Strict hill-climbing over single-node moves: propose moving one
//! random node to a random other cluster, keep the move only if the
//! full line index strictly improves. No annealing, no restarts inside
//! a run — a run is deterministic given its seed, so multi-restart is
//! just many independent runs reduced to the best
//! ([`LocalSearch::optimize_restarts`]).

use super::line_index::{LineIndex, LineIndexScore};
use super::traits::Partitioner;
use crate::error::{Error, Result};
use crate::graph::SignedGraph;
use rand::prelude::*;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A clustering together with its line-index score.
#[derive(Debug, Clone)]
pub struct Partition {
    /// Cluster id per node, indexed by node index.
    pub assignment: Vec<usize>,
    /// Line index of the assignment.
    pub score: LineIndexScore,
}

/// Uniform random assignment of `n_nodes` nodes to `k` clusters.
///
/// The baseline the optimizer starts from, public so callers can report
/// random-vs-optimized comparisons.
///
/// # Panics
///
/// Panics if `k` is zero.
pub fn random_partition(n_nodes: usize, k: usize, rng: &mut impl Rng) -> Vec<usize> {
    (0..n_nodes).map(|_| rng.random_range(0..k)).collect()
}

/// Line-index minimization by seeded greedy local search.
///
/// Can get trapped in local optima; that is the documented behavior of
/// greedy search, not an error. Callers wanting better solutions raise
/// the iteration budget or run several seeds.
#[derive(Debug, Clone)]
pub struct LocalSearch {
    /// Number of clusters.
    n_clusters: usize,
    /// Single-node move proposals per run.
    iterations: usize,
    /// Positive-frustration weight of the objective.
    alpha: f64,
    /// Random seed; `None` draws from the thread RNG.
    seed: Option<u64>,
}

impl LocalSearch {
    /// Create an optimizer targeting `n_clusters` clusters.
    pub fn new(n_clusters: usize) -> Self {
        Self {
            n_clusters,
            iterations: 2000,
            alpha: 0.5,
            seed: None,
        }
    }

    /// Set the iteration budget.
    ///
    /// With a fixed seed the best cost is monotonically non-increasing
    /// in the budget: a proposal is only ever accepted on strict
    /// improvement.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the objective's positive-frustration weight.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Set the random seed for a reproducible run.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Run one local search and return the best clustering seen.
    pub fn optimize<N>(&self, graph: &SignedGraph<N>) -> Result<Partition> {
        let n = graph.node_count();
        if self.n_clusters < 1 {
            return Err(Error::InvalidClusterCount {
                requested: self.n_clusters,
                n_items: n,
            });
        }

        let scorer = LineIndex::new().with_alpha(self.alpha);
        if n == 0 {
            let assignment = Vec::new();
            let score = scorer.score(graph, &assignment)?;
            return Ok(Partition { assignment, score });
        }

        let mut rng: Box<dyn RngCore> = match self.seed {
            Some(s) => Box::new(StdRng::seed_from_u64(s)),
            None => Box::new(rand::rng()),
        };

        let mut assignment = random_partition(n, self.n_clusters, &mut rng);
        let mut best = scorer.score(graph, &assignment)?;

        // With one cluster no distinct proposal exists.
        if self.n_clusters > 1 {
            for _ in 0..self.iterations {
                let node = rng.random_range(0..n);
                let old = assignment[node];

                // Uniform over the k-1 clusters other than the current one.
                let mut proposal = rng.random_range(0..self.n_clusters - 1);
                if proposal >= old {
                    proposal += 1;
                }

                assignment[node] = proposal;
                let candidate = scorer.score(graph, &assignment)?;
                if candidate.value < best.value {
                    best = candidate;
                } else {
                    assignment[node] = old;
                }
            }
        }

        Ok(Partition {
            assignment,
            score: best,
        })
    }

    /// One independent run per seed; the lowest-cost result wins.
    ///
    /// Runs in parallel: each run owns its clustering state and reads
    /// the graph immutably, so there is nothing to coordinate. Ties go
    /// to the earliest seed.
    #[cfg(feature = "parallel")]
    pub fn optimize_restarts<N: Sync>(
        &self,
        graph: &SignedGraph<N>,
        seeds: &[u64],
    ) -> Result<Partition> {
        if seeds.is_empty() {
            return self.optimize(graph);
        }
        let runs: Vec<Partition> = seeds
            .par_iter()
            .map(|&seed| self.clone().with_seed(seed).optimize(graph))
            .collect::<Result<_>>()?;
        Ok(best_of(runs))
    }

    /// One independent run per seed; the lowest-cost result wins.
    ///
    /// Serial fallback; enable the `parallel` feature to fan the runs
    /// out over a thread pool. Ties go to the earliest seed.
    #[cfg(not(feature = "parallel"))]
    pub fn optimize_restarts<N>(&self, graph: &SignedGraph<N>, seeds: &[u64]) -> Result<Partition> {
        if seeds.is_empty() {
            return self.optimize(graph);
        }
        let runs: Vec<Partition> = seeds
            .iter()
            .map(|&seed| self.clone().with_seed(seed).optimize(graph))
            .collect::<Result<_>>()?;
        Ok(best_of(runs))
    }
}

/// Lowest-cost partition of a non-empty batch, first occurrence on ties.
fn best_of(mut runs: Vec<Partition>) -> Partition {
    let mut best = runs.remove(0);
    for candidate in runs {
        if candidate.score.value < best.score.value {
            best = candidate;
        }
    }
    best
}

impl Partitioner for LocalSearch {
    fn partition<N>(&self, graph: &SignedGraph<N>) -> Result<Vec<usize>> {
        Ok(self.optimize(graph)?.assignment)
    }
}
