use thiserror::Error;

/// An error from evaluating a queueing model.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SolveError {
    /// The offered load meets or exceeds the service capacity, so the queue
    /// grows without bound and no steady state exists.
    ///
    /// Unrecoverable for the given parameters; the caller must lower λ or
    /// raise μ (or c).
    #[error("system unstable: offered load {offered} meets or exceeds capacity {capacity}")]
    Unstable {
        /// Arrival rate λ.
        offered: f64,
        /// Total service capacity (μ for one server, c·μ otherwise).
        capacity: f64,
    },
}

pub type SolveResult<T> = std::result::Result<T, SolveError>;
