//! Sorts a batch of random dates with whichever strategy the policy picks.
//!
//! Usage:
//!   cargo run --features demo --bin datesort -- --count 25 --seed 7
//!   RUST_LOG=datesort=debug cargo run --features demo --bin datesort

use anyhow::{bail, Result};
use chrono::{Duration, NaiveDate};
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use datesort::{Context, Date, Policy};

#[derive(Parser, Debug)]
#[command(name = "datesort")]
#[command(about = "Sort random dates with a size-selected strategy")]
struct Args {
    /// Number of random dates to generate
    #[arg(long, default_value = "10")]
    count: usize,

    /// Earliest date that may be generated (inclusive)
    #[arg(long, default_value = "2016-01-01")]
    from: NaiveDate,

    /// Latest date that may be generated (inclusive)
    #[arg(long, default_value = "2018-12-31")]
    to: NaiveDate,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

/// Draws `count` dates uniformly from `[from, to]`.
fn random_dates<R: Rng>(rng: &mut R, count: usize, from: Date, to: Date) -> Result<Vec<Date>> {
    if from > to {
        bail!("--from ({from}) must not be after --to ({to})");
    }

    let span = (to - from).num_days();
    Ok((0..count)
        .map(|_| from + Duration::days(rng.gen_range(0..=span)))
        .collect())
}

fn print_dates(header: &str, dates: &[Date]) {
    println!("{header}");
    for date in dates {
        println!("  {}", date.format("%Y-%m-%d"));
    }
}

fn main() -> Result<()> {
    // RUST_LOG wins when set, otherwise fall back to info.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let args = Args::parse();

    let dates = match args.seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            random_dates(&mut rng, args.count, args.from, args.to)?
        }
        None => random_dates(&mut rand::thread_rng(), args.count, args.from, args.to)?,
    };
    print_dates("Unsorted:", &dates);

    let mut context = Context::new();
    context.set_dates(dates);

    let mut policy = Policy::new(&mut context);
    policy.configure();

    let strategy = context.sort_algorithm().map_or("none", |s| s.name());
    info!(count = args.count, strategy, "Sorting");
    context.sort();

    print_dates("Sorted:", context.dates().unwrap_or_default());
    Ok(())
}
