use crate::error::{SolveError, SolveResult};
use crate::model::QueueMetrics;

/// Compute steady-state metrics for a single-server Markovian queue.
///
/// `lambda` is the mean arrival rate, `mu` the mean service rate, both
/// strictly positive and finite (caller-enforced). `n_max` bounds the
/// occupancy series: the result carries `P(0)..=P(n_max)`.
///
/// Returns [`SolveError::Unstable`] when `lambda >= mu`, since the queue
/// then grows without bound.
pub fn solve_mm1(lambda: f64, mu: f64, n_max: u32) -> SolveResult<QueueMetrics> {
    debug_assert!(lambda.is_finite() && lambda > 0.0);
    debug_assert!(mu.is_finite() && mu > 0.0);

    if lambda >= mu {
        return Err(SolveError::Unstable {
            offered: lambda,
            capacity: mu,
        });
    }

    let rho = lambda / mu;
    let p_empty = 1.0 - rho;
    let mean_in_system = rho / (1.0 - rho);

    // Geometric occupancy: P(k) = (1 - ρ)·ρᵏ.
    let occupancy = (0..=n_max)
        .scan(p_empty, |p, _| {
            let current = *p;
            *p *= rho;
            Some(current)
        })
        .collect();

    Ok(QueueMetrics {
        utilization: rho,
        mean_in_system,
        mean_in_queue: mean_in_system - rho,
        mean_time_in_system: 1.0 / (mu - lambda),
        mean_time_in_queue: rho / (mu - lambda),
        mean_busy_servers: None,
        p_empty,
        occupancy,
    })
}
