use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum QueueModel {
    /// Single-server Markovian queue
    Mm1,
    /// Multi-server Markovian queue (Erlang-C)
    Mmc,
}

impl QueueModel {
    /// Conventional Kendall notation for display.
    pub fn notation(self) -> &'static str {
        match self {
            QueueModel::Mm1 => "M/M/1",
            QueueModel::Mmc => "M/M/c",
        }
    }
}

/// Time unit the caller's rates are expressed in. Labels only; the
/// calculators are unit-agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Hours,
    Minutes,
}

impl TimeUnit {
    pub fn singular(self) -> &'static str {
        match self {
            TimeUnit::Hours => "hour",
            TimeUnit::Minutes => "minute",
        }
    }

    pub fn plural(self) -> &'static str {
        match self {
            TimeUnit::Hours => "hours",
            TimeUnit::Minutes => "minutes",
        }
    }
}

/// Steady-state metrics for a stable queue.
///
/// `occupancy[k]` is the stationary probability of exactly `k` customers in
/// the system, for `k = 0..=n_max`. The partial series always sums to at
/// most 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueueMetrics {
    /// Utilization ρ, in [0, 1).
    pub utilization: f64,
    /// Expected number of customers in the system (Ls).
    pub mean_in_system: f64,
    /// Expected number of customers waiting in the queue (Lq).
    pub mean_in_queue: f64,
    /// Expected time a customer spends in the system (Ws).
    pub mean_time_in_system: f64,
    /// Expected time a customer spends waiting (Wq).
    pub mean_time_in_queue: f64,
    /// Mean number of busy servers (c̄ = λ/μ). Multi-server model only.
    #[serde(default)]
    pub mean_busy_servers: Option<f64>,
    /// Probability the system is empty (P0).
    pub p_empty: f64,
    /// Stationary occupancy probabilities P(0)..=P(n_max).
    pub occupancy: Vec<f64>,
}

/// A solved run: the inputs together with the metrics they produced.
/// This is what the JSON output mode serializes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueueReport {
    pub model: QueueModel,
    pub unit: TimeUnit,
    pub arrival_rate: f64,
    pub service_rate: f64,
    #[serde(default)]
    pub servers: Option<u32>,
    pub n_max: u32,
    pub metrics: QueueMetrics,
}
