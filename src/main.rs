use std::{
    fs::{self, File},
    io::BufWriter,
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cpusim::{
    Algorithm, SimConfig, dispatch,
    sim::{Summary, WorkloadParams, bernoulli_workload, format_workload, parse_workload, write_report},
};
use log::info;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate a workload file and write the completion report
    Run {
        /// Workload file, one `pid arrival burst priority` record per line
        input: PathBuf,

        /// Report file, one `pid arrival finish waiting` line per process
        output: PathBuf,

        #[arg(value_enum, ignore_case = true)]
        algorithm: Algorithm,

        /// Time slice length (RR only)
        #[arg(short, long, allow_negative_numbers = true)]
        quantum: Option<i64>,

        /// Import at most this many records (0 imports all)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print every scheduling event
        #[arg(long)]
        trace: bool,
    },
    /// Write a random workload file
    Generate {
        output: PathBuf,

        /// Number of ticks during which processes may arrive
        #[arg(long, default_value_t = 100)]
        ticks: u64,

        #[arg(long, default_value_t = 0.3)]
        p_arrival: f64,

        #[arg(long, default_value_t = 0.3)]
        p_short: f64,

        #[arg(long, default_value_t = 2)]
        short_burst: u64,

        #[arg(long, default_value_t = 6)]
        long_burst: u64,

        #[arg(long, default_value_t = 4)]
        max_priority: i32,

        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            input,
            output,
            algorithm,
            quantum,
            limit,
            trace,
        } => {
            let config = SimConfig {
                algorithm,
                quantum,
                limit,
            };
            // Reject a bad configuration before touching any file
            config.validate()?;

            let text = fs::read_to_string(&input)
                .with_context(|| format!("failed to read workload {}", input.display()))?;
            let descriptors = parse_workload(&text, config.import_limit())
                .with_context(|| format!("failed to parse workload {}", input.display()))?;
            info!("Imported {} records from {}", descriptors.len(), input.display());

            let outcome = dispatch(descriptors, &config)?;

            if trace {
                for event in &outcome.events {
                    println!("{event}");
                }
            }

            let file = File::create(&output)
                .with_context(|| format!("failed to create report {}", output.display()))?;
            write_report(BufWriter::new(file), &outcome.completed)
                .with_context(|| format!("failed to write report {}", output.display()))?;

            println!("{}", Summary::from_completed(&outcome.completed));
        }
        Commands::Generate {
            output,
            ticks,
            p_arrival,
            p_short,
            short_burst,
            long_burst,
            max_priority,
            seed,
        } => {
            let params = WorkloadParams {
                ticks,
                p_arrival,
                p_short,
                short_burst,
                long_burst,
                max_priority,
            };
            let workload = bernoulli_workload(&params, seed);
            fs::write(&output, format_workload(&workload))
                .with_context(|| format!("failed to write workload {}", output.display()))?;

            println!("Wrote {} processes to {}", workload.len(), output.display());
        }
    }

    Ok(())
}
