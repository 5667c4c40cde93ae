use anyhow::Result;
use clap::Parser;
use markov_queue::{solve_mm1, solve_mmc, QueueModel, QueueReport, TimeUnit};

#[derive(Debug, Parser, Clone)]
#[command(
    name = "markov-queue-cli",
    version,
    about = "Steady-state metrics for M/M/1 and M/M/c queues"
)]
pub struct Cli {
    /// Queueing model to evaluate
    #[arg(long, value_enum)]
    pub model: QueueModel,

    /// Mean arrival rate λ (customers per time unit)
    #[arg(long, allow_negative_numbers = true)]
    pub arrival_rate: f64,

    /// Mean service rate μ per server (customers per time unit)
    #[arg(long, allow_negative_numbers = true)]
    pub service_rate: f64,

    /// Number of parallel servers (M/M/c only)
    #[arg(long)]
    pub servers: Option<u32>,

    /// Highest occupancy n to include in the P(n) series
    #[arg(long, default_value_t = 10)]
    pub n_max: u32,

    /// Time unit the rates are expressed in (labels only)
    #[arg(long, value_enum, default_value = "hours")]
    pub unit: TimeUnit,

    /// Print the report as JSON and exit (no text summary)
    #[arg(long)]
    pub json: bool,

    /// Use --chart true or --chart false to toggle the occupancy bar chart
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub chart: bool,
}

pub fn run(args: Cli) -> Result<()> {
    let report = evaluate(&args)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let summary = crate::text_summary::build_text_summary(&report, args.chart);
    for line in summary.lines {
        println!("{line}");
    }
    Ok(())
}

/// Validate the inputs and run the selected solver.
pub fn evaluate(args: &Cli) -> Result<QueueReport> {
    validate(args)?;

    let metrics = match args.model {
        QueueModel::Mm1 => solve_mm1(args.arrival_rate, args.service_rate, args.n_max)?,
        QueueModel::Mmc => {
            // validate() guarantees the server count is present here.
            let servers = args.servers.unwrap_or(1);
            solve_mmc(args.arrival_rate, args.service_rate, servers, args.n_max)?
        }
    };

    Ok(QueueReport {
        model: args.model,
        unit: args.unit,
        arrival_rate: args.arrival_rate,
        service_rate: args.service_rate,
        servers: args.servers,
        n_max: args.n_max,
        metrics,
    })
}

/// Reject out-of-domain inputs before the solvers run. The solvers assume
/// positive finite rates and document that assumption; this is the caller
/// that enforces it.
fn validate(args: &Cli) -> Result<()> {
    if !args.arrival_rate.is_finite() || args.arrival_rate <= 0.0 {
        return Err(anyhow::anyhow!(
            "arrival rate (λ) must be a positive, finite number, got {}",
            args.arrival_rate
        ));
    }
    if !args.service_rate.is_finite() || args.service_rate <= 0.0 {
        return Err(anyhow::anyhow!(
            "service rate (μ) must be a positive, finite number, got {}",
            args.service_rate
        ));
    }

    match (args.model, args.servers) {
        (QueueModel::Mmc, None) => Err(anyhow::anyhow!(
            "--servers is required for --model mmc"
        )),
        (QueueModel::Mmc, Some(0)) => {
            Err(anyhow::anyhow!("server count must be at least 1"))
        }
        (QueueModel::Mm1, Some(_)) => Err(anyhow::anyhow!(
            "--servers only applies to --model mmc"
        )),
        _ => Ok(()),
    }
}
