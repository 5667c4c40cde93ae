//! Closed-form steady-state solvers for Markovian queues.
//!
//! Both solvers are pure: no I/O, no shared state, deterministic for a given
//! input. Concurrent callers need no synchronization.

mod mm1;
mod mmc;

pub use mm1::solve_mm1;
pub use mmc::solve_mmc;
