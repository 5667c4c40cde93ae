use crate::error::{SolveError, SolveResult};
use crate::model::QueueMetrics;

/// Compute steady-state metrics for a Markovian queue with `servers`
/// identical parallel servers (Erlang-C).
///
/// `lambda` and `mu` are the mean arrival rate and per-server service rate,
/// strictly positive and finite; `servers >= 1` (caller-enforced). `n_max`
/// bounds the occupancy series.
///
/// Returns [`SolveError::Unstable`] when `lambda >= servers·mu`.
pub fn solve_mmc(lambda: f64, mu: f64, servers: u32, n_max: u32) -> SolveResult<QueueMetrics> {
    debug_assert!(lambda.is_finite() && lambda > 0.0);
    debug_assert!(mu.is_finite() && mu > 0.0);
    debug_assert!(servers >= 1);

    let capacity = servers as f64 * mu;
    let rho = lambda / capacity;
    if rho >= 1.0 {
        return Err(SolveError::Unstable {
            offered: lambda,
            capacity,
        });
    }

    // Offered load in Erlangs.
    let r = lambda / mu;

    // Accumulate rᵏ/k! by ratio multiplication; neither c! nor rᶜ is ever
    // materialized, so the intermediate terms stay finite far past the
    // c ≈ 170 point where a bare factorial overflows f64.
    let mut term = 1.0;
    let mut below_capacity_sum = 0.0;
    for k in 0..servers {
        below_capacity_sum += term;
        term *= r / (k + 1) as f64;
    }
    // `term` is now rᶜ/c!.
    let p_empty = 1.0 / (below_capacity_sum + term / (1.0 - rho));

    let mean_in_queue = p_empty * term * rho / ((1.0 - rho) * (1.0 - rho));
    let mean_in_system = mean_in_queue + r;
    let mean_time_in_queue = mean_in_queue / lambda;
    let mean_time_in_system = mean_time_in_queue + 1.0 / mu;

    Ok(QueueMetrics {
        utilization: rho,
        mean_in_system,
        mean_in_queue,
        mean_time_in_system,
        mean_time_in_queue,
        mean_busy_servers: Some(r),
        p_empty,
        occupancy: occupancy_distribution(r, servers, p_empty, n_max),
    })
}

/// Birth-death stationary probabilities P(0)..=P(n_max).
///
/// Below capacity each extra customer scales the previous term by r/n; at
/// and above capacity all servers are busy and the ratio settles at r/c.
fn occupancy_distribution(r: f64, servers: u32, p_empty: f64, n_max: u32) -> Vec<f64> {
    let c = servers as f64;
    let mut probabilities = Vec::with_capacity(n_max as usize + 1);
    let mut p = p_empty;
    for n in 0..=n_max {
        probabilities.push(p);
        let ratio = if n < servers { r / (n + 1) as f64 } else { r / c };
        p *= ratio;
    }
    probabilities
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::solve_mm1;

    const TOL: f64 = 1e-9;

    #[test]
    fn three_server_case() {
        // λ=4, μ=2, c=3: r=2, ρ=2/3, P0=1/9, Lq=8/9.
        let m = solve_mmc(4.0, 2.0, 3, 4).unwrap();
        assert!((m.utilization - 2.0 / 3.0).abs() < TOL);
        assert!((m.p_empty - 1.0 / 9.0).abs() < TOL);
        assert!((m.mean_in_queue - 8.0 / 9.0).abs() < TOL);
        assert!((m.mean_in_system - 26.0 / 9.0).abs() < TOL);
        assert!((m.mean_time_in_queue - 2.0 / 9.0).abs() < TOL);
        assert!((m.mean_time_in_system - 13.0 / 18.0).abs() < TOL);
        assert_eq!(m.mean_busy_servers, Some(2.0));
    }

    #[test]
    fn three_server_occupancy_terms() {
        // P(k) = (rᵏ/k!)·P0 below capacity, (rᵏ/(c!·c^{k-c}))·P0 above.
        let m = solve_mmc(4.0, 2.0, 3, 5).unwrap();
        let p0 = 1.0 / 9.0;
        let expected = [
            p0,                    // k=0
            2.0 * p0,              // k=1: r/1
            2.0 * p0,              // k=2: r²/2!
            4.0 / 3.0 * p0,        // k=3: r³/3!
            8.0 / 9.0 * p0,        // k=4: r⁴/(3!·3)
            16.0 / 27.0 * p0,      // k=5: r⁵/(3!·3²)
        ];
        for (got, want) in m.occupancy.iter().zip(expected) {
            assert!((got - want).abs() < TOL, "got {got}, want {want}");
        }
    }

    #[test]
    fn single_server_matches_mm1() {
        for (lambda, mu) in [(2.0, 5.0), (0.3, 0.4), (7.0, 7.5)] {
            let one = solve_mmc(lambda, mu, 1, 12).unwrap();
            let reference = solve_mm1(lambda, mu, 12).unwrap();
            assert!((one.utilization - reference.utilization).abs() < TOL);
            assert!((one.mean_in_system - reference.mean_in_system).abs() < TOL);
            assert!((one.mean_in_queue - reference.mean_in_queue).abs() < TOL);
            assert!((one.mean_time_in_system - reference.mean_time_in_system).abs() < TOL);
            assert!((one.mean_time_in_queue - reference.mean_time_in_queue).abs() < TOL);
            assert!((one.p_empty - reference.p_empty).abs() < TOL);
            for (a, b) in one.occupancy.iter().zip(&reference.occupancy) {
                assert!((a - b).abs() < TOL);
            }
        }
    }

    #[test]
    fn saturated_is_unstable() {
        // ρ = 1 exactly and ρ > 1.
        assert!(matches!(
            solve_mmc(6.0, 2.0, 3, 2),
            Err(SolveError::Unstable { .. })
        ));
        assert!(matches!(
            solve_mmc(10.0, 2.0, 3, 2),
            Err(SolveError::Unstable { .. })
        ));
    }

    #[test]
    fn more_servers_shorten_the_queue() {
        let mut previous_lq = f64::INFINITY;
        let mut previous_wq = f64::INFINITY;
        for servers in 2..10 {
            let m = solve_mmc(4.0, 2.0, servers, 0).unwrap();
            assert!(m.mean_in_queue < previous_lq);
            assert!(m.mean_time_in_queue < previous_wq);
            previous_lq = m.mean_in_queue;
            previous_wq = m.mean_time_in_queue;
        }
    }

    #[test]
    fn occupancy_mass_bounded_and_converging() {
        let short: f64 = solve_mmc(4.0, 2.0, 3, 5).unwrap().occupancy.iter().sum();
        let long: f64 = solve_mmc(4.0, 2.0, 3, 60).unwrap().occupancy.iter().sum();
        assert!(short <= 1.0 + TOL);
        assert!(long <= 1.0 + TOL);
        assert!(long > short);
        assert!(long > 0.999999);
    }

    #[test]
    fn large_server_counts_stay_finite() {
        // c! alone would overflow f64 here; the ratio accumulation must not.
        let m = solve_mmc(150.0, 1.0, 200, 250).unwrap();
        assert!(m.p_empty.is_finite() && m.p_empty > 0.0);
        assert!(m.mean_in_queue.is_finite() && m.mean_in_queue >= 0.0);
        assert!(m.occupancy.iter().all(|p| p.is_finite() && *p >= 0.0));
        let mass: f64 = m.occupancy.iter().sum();
        assert!(mass <= 1.0 + TOL);
    }

    #[test]
    fn zero_cutoff_yields_single_term() {
        let m = solve_mmc(4.0, 2.0, 3, 0).unwrap();
        assert_eq!(m.occupancy, vec![m.p_empty]);
    }
}
