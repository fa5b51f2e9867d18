mod content;
mod dashboard;
mod report;
mod sample;
mod stats;
mod ui;

use std::io::{self, Write};

use anyhow::{Context, Result};
use argh::FromArgs;
use dashboard::Dashboard;
use sample::{generate_samples, humidities, sample_rng, temperatures, DEFAULT_COUNT};
use stats::compute_statistics;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(FromArgs, Debug)]
/// Descriptive statistics over synthetic temperature and humidity readings
struct Args {
    #[argh(subcommand)]
    command: Command,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand)]
enum Command {
    Sample(SampleArgs),
    Stats(StatsArgs),
    Describe(DescribeArgs),
    View(ViewArgs),
}

#[derive(FromArgs, Debug)]
/// print a generated sample of hourly readings
#[argh(subcommand, name = "sample")]
struct SampleArgs {
    /// number of hourly readings to generate
    #[argh(option, short = 'n', default = "DEFAULT_COUNT")]
    count: usize,

    /// seed for reproducible readings
    #[argh(option, short = 's')]
    seed: Option<u64>,

    /// print json instead of a table
    #[argh(switch)]
    json: bool,
}

#[derive(FromArgs, Debug)]
/// summarize temperature and humidity of a generated sample
#[argh(subcommand, name = "stats")]
struct StatsArgs {
    /// number of hourly readings to generate
    #[argh(option, short = 'n', default = "DEFAULT_COUNT")]
    count: usize,

    /// seed for reproducible readings
    #[argh(option, short = 's')]
    seed: Option<u64>,

    /// print json instead of a table
    #[argh(switch)]
    json: bool,
}

#[derive(FromArgs, Debug)]
/// summarize values given on the command line
#[argh(subcommand, name = "describe")]
struct DescribeArgs {
    /// print json instead of a table
    #[argh(switch)]
    json: bool,

    /// values to summarize, pass `--` before negative numbers
    #[argh(positional)]
    values: Vec<f64>,
}

#[derive(FromArgs, Debug)]
/// open the interactive dashboard
#[argh(subcommand, name = "view")]
struct ViewArgs {
    /// number of hourly readings to generate
    #[argh(option, short = 'n', default = "DEFAULT_COUNT")]
    count: usize,

    /// seed for reproducible readings
    #[argh(option, short = 's')]
    seed: Option<u64>,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let args: Args = argh::from_env();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.command {
        Command::Sample(args) => {
            let readings = generate_samples(args.count, &mut sample_rng(args.seed));
            if args.json {
                report::write_json(&mut out, &readings)?;
            } else {
                report::write_samples(&mut out, &readings)?;
            }
        }
        Command::Stats(args) => {
            let readings = generate_samples(args.count, &mut sample_rng(args.seed));
            let temperature = compute_statistics(&temperatures(&readings))
                .context("unable to summarize temperature")?;
            let humidity = compute_statistics(&humidities(&readings))
                .context("unable to summarize humidity")?;
            if args.json {
                report::write_statistics_json(&mut out, &temperature, &humidity)?;
            } else {
                report::write_statistics(&mut out, &temperature, &humidity)?;
            }
        }
        Command::Describe(args) => {
            let stats = compute_statistics(&args.values).context("unable to describe values")?;
            if args.json {
                report::write_json(&mut out, &stats)?;
            } else {
                report::write_summary(&mut out, "values", &stats)?;
            }
        }
        Command::View(args) => {
            drop(out);
            let mut dashboard = Dashboard::new(args.count, sample_rng(args.seed))
                .context("unable to build dashboard")?;
            ui::Tui::new()?.run(&mut dashboard)?;
            info!("dashboard closed");
            return Ok(());
        }
    }

    out.flush()?;
    Ok(())
}
