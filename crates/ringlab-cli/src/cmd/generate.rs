// crates/ringlab-cli/src/cmd/generate.rs

use anyhow::Context;
use clap::{Args, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;

use ringlab_core::light::LightSource;
use ringlab_core::{Config, Sampler};

use crate::io::{json, table};

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum OutFmt {
    /// Observation tables plus the final result block
    Table,
    /// Pretty JSON: {"config":..., "result":...}
    Json,
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Instrument least count in cm
    #[arg(long, default_value_t = 0.005)]
    pub least_count: f64,

    /// Lens radius of curvature in cm (display metadata)
    #[arg(long, default_value_t = 50.0)]
    pub radius: f64,

    /// Light source (sodium|neon|helium|mercury|hydrogen)
    #[arg(long, default_value = "sodium", value_parser = parse_light)]
    pub light: LightSource,

    /// RNG seed; omit for OS entropy
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutFmt::Table)]
    pub fmt: OutFmt,

    /// Print rejection-loop tallies to stderr
    #[arg(long)]
    pub stats: bool,
}

fn parse_light(s: &str) -> Result<LightSource, String> {
    s.parse()
}

pub fn run(args: GenerateArgs) -> anyhow::Result<()> {
    let cfg = Config {
        least_count: args.least_count,
        radius_of_curvature: args.radius,
        light: args.light,
    };

    // Config is validated here, before any sampling.
    let mut sampler = Sampler::new(cfg)?;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    // A failed run stays a failure; it is never displayed as a number.
    let result = sampler.run(&mut rng).context("generation failed")?;

    match args.fmt {
        OutFmt::Table => table::write_result_stdout(&cfg, &result),
        OutFmt::Json => json::write_result_stdout(&cfg, &result)?,
    }

    if args.stats {
        let st = sampler.stats;
        eprintln!(
            "generate ok: attempts={} mu_rejects={} overlap_rejects={} accepted={}",
            st.attempts, st.mu_rejects, st.overlap_rejects, st.accepted
        );
    }

    Ok(())
}
