//! Steady-state calculators for Markovian queueing models.
//!
//! Two pure, single-shot solvers: [`solve_mm1`] for the single-server queue
//! and [`solve_mmc`] for the multi-server (Erlang-C) queue. Each takes the
//! arrival rate λ, per-server service rate μ, (for M/M/c) the server count,
//! and a cutoff for the occupancy series, and returns a [`QueueMetrics`]
//! record or a [`SolveError`] when the system has no steady state.

mod error;
mod model;
mod solver;

pub use error::{SolveError, SolveResult};
pub use model::{QueueMetrics, QueueModel, QueueReport, TimeUnit};
pub use solver::{solve_mm1, solve_mmc};
