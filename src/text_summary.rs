//! Text summary builder for CLI output.
//!
//! Formats a solved report as human-readable lines: one aligned row per
//! metric, then the occupancy series with an optional proportional bar per
//! row.

use markov_queue::{QueueModel, QueueReport};

const BAR_WIDTH: usize = 30;

/// Pre-formatted lines for text output.
pub(crate) struct TextSummary {
    pub lines: Vec<String>,
}

/// Build a text summary from a solved report.
pub(crate) fn build_text_summary(report: &QueueReport, chart: bool) -> TextSummary {
    let mut lines = Vec::new();
    let unit = report.unit;
    let m = &report.metrics;

    lines.push(format!(
        "Model: {} (rates per {})",
        report.model.notation(),
        unit.singular()
    ));
    match report.model {
        QueueModel::Mm1 => lines.push(format!(
            "λ = {} /{unit}, μ = {} /{unit}",
            report.arrival_rate,
            report.service_rate,
            unit = unit.singular()
        )),
        QueueModel::Mmc => lines.push(format!(
            "λ = {} /{unit}, μ = {} /{unit}, c = {}",
            report.arrival_rate,
            report.service_rate,
            report.servers.unwrap_or(1),
            unit = unit.singular()
        )),
    }
    lines.push(String::new());

    lines.push(metric_row("Utilization (ρ)", m.utilization, ""));
    lines.push(metric_row("Expected in system (Ls)", m.mean_in_system, "customers"));
    lines.push(metric_row("Expected in queue (Lq)", m.mean_in_queue, "customers"));
    lines.push(metric_row(
        "Expected time in system (Ws)",
        m.mean_time_in_system,
        unit.plural(),
    ));
    lines.push(metric_row(
        "Expected time in queue (Wq)",
        m.mean_time_in_queue,
        unit.plural(),
    ));
    if let Some(busy) = m.mean_busy_servers {
        lines.push(metric_row("Mean busy servers (c̄)", busy, "servers"));
    }
    lines.push(metric_row("Empty-system probability (P0)", m.p_empty, ""));

    lines.push(String::new());
    lines.push(format!("Occupancy probabilities up to n = {}:", report.n_max));

    // Bars are scaled against the largest probability in the series so the
    // widest row always spans the full width.
    let peak = m.occupancy.iter().cloned().fold(f64::MIN, f64::max);
    let index_width = report.n_max.to_string().len();
    for (n, p) in m.occupancy.iter().enumerate() {
        let mut row = format!(
            "  P({n:>index_width$}) = {p:.4} ({:>6.2}%)",
            p * 100.0
        );
        if chart {
            row.push_str("  ");
            row.push_str(&bar(*p, peak));
        }
        lines.push(row);
    }

    TextSummary { lines }
}

fn metric_row(label: &str, value: f64, unit: &str) -> String {
    let row = format!("{label:<32} {value:>10.4}");
    if unit.is_empty() {
        row
    } else {
        format!("{row} {unit}")
    }
}

fn bar(value: f64, peak: f64) -> String {
    if peak <= 0.0 {
        return String::new();
    }
    let cells = ((value / peak) * BAR_WIDTH as f64).round() as usize;
    "█".repeat(cells)
}
