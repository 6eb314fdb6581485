use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use toll_sim::simulation::{
    run_simulation, Highway, HighwayConfig, TrafficConfig, TrafficGenerator,
};

#[derive(Parser)]
#[command(name = "toll_sim")]
#[command(about = "Discrete-time highway toll plaza simulation")]
struct Cli {
    /// Minimum number of toll queues kept active
    #[arg(long, default_value = "2")]
    min_queues: usize,

    /// Vehicles a queue holds before it counts as saturated
    #[arg(long, default_value = "5")]
    max_per_queue: usize,

    /// Cap on the total number of queues ever opened
    #[arg(long)]
    max_queues: Option<usize>,

    /// Number of simulation ticks to run
    #[arg(long, default_value = "100")]
    ticks: u64,

    /// Probability that each arrival slot produces a vehicle
    #[arg(long, default_value = "0.5")]
    arrival_probability: f64,

    /// Maximum vehicles arriving in a single tick
    #[arg(long, default_value = "3")]
    max_arrivals: usize,

    /// Print a report every N ticks (0 disables periodic reports)
    #[arg(long, default_value = "10")]
    report_every: u64,

    /// Seed for reproducible arrivals
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn,toll_sim=info"),
    )
    .init();

    let cli = Cli::parse();
    run_headless(&cli)
}

fn run_headless(cli: &Cli) -> Result<()> {
    let config = HighwayConfig {
        min_activated_queues: cli.min_queues,
        max_vehicles_per_queue: cli.max_per_queue,
        max_queues: cli.max_queues,
    };
    let mut highway = Highway::with_config(config).context("Invalid highway configuration")?;

    let traffic = TrafficConfig {
        max_arrivals_per_tick: cli.max_arrivals,
        arrival_probability: cli.arrival_probability,
    };
    let mut generator = match cli.seed {
        Some(seed) => TrafficGenerator::new_with_seed(traffic, seed),
        None => TrafficGenerator::new(traffic),
    }
    .context("Invalid traffic configuration")?;

    println!("Running toll simulation for {} ticks...", cli.ticks);
    println!();
    println!("Initial state:");
    print!("{}", highway);
    println!();

    let report_every = cli.report_every;
    run_simulation(&mut highway, &mut generator, cli.ticks, |highway| {
        if report_every > 0 && highway.elapsed_time() % report_every == 0 {
            println!("--- After tick {} ---", highway.elapsed_time());
            print!("{}", highway.stats());
            println!();
        }
    })
    .context("Simulation aborted")?;

    println!("=== Final State ===");
    print!("{}", highway);

    let stats = highway.stats();
    stats.log_summary();
    info!("Open queues at end: {}", highway.queue_count());
    Ok(())
}
