// crates/ringlab-cli/src/cmd/sweep.rs

use clap::Args;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use ringlab_core::{default_config, Config, Sampler};

#[derive(Args, Debug)]
pub struct SweepArgs {
    /// Number of seeded runs
    #[arg(long, default_value_t = 100)]
    pub runs: u64,

    /// Instrument least count in cm
    #[arg(long, default_value_t = 0.005)]
    pub least_count: f64,

    /// Base seed; run i uses base + i
    #[arg(long, default_value_t = 1)]
    pub seed: u64,
}

pub fn run(args: SweepArgs) -> anyhow::Result<()> {
    if args.runs == 0 {
        anyhow::bail!("--runs must be at least 1");
    }

    let cfg = Config {
        least_count: args.least_count,
        ..default_config()
    };

    let mut ok = 0u64;
    let mut failed = 0u64;
    let mut attempts = 0u64;
    let mut mu_rejects = 0u64;
    let mut overlap_rejects = 0u64;
    let mut mu_min = f64::INFINITY;
    let mut mu_max = f64::NEG_INFINITY;

    for i in 0..args.runs {
        let mut rng = ChaCha8Rng::seed_from_u64(args.seed.wrapping_add(i));
        let mut sampler = Sampler::new(cfg)?;

        match sampler.run(&mut rng) {
            Ok(result) => {
                ok += 1;
                mu_min = mu_min.min(result.mu);
                mu_max = mu_max.max(result.mu);
            }
            Err(e) => {
                failed += 1;
                eprintln!("run {i} failed: {e}");
            }
        }

        attempts += sampler.stats.attempts;
        mu_rejects += sampler.stats.mu_rejects;
        overlap_rejects += sampler.stats.overlap_rejects;
    }

    eprintln!("--- sweep ---");
    eprintln!("runs: {} ok={} failed={}", args.runs, ok, failed);
    if ok > 0 {
        eprintln!("mu range: {mu_min:.5}..{mu_max:.5}");
    }
    eprintln!(
        "attempts: total={} mean_per_order={:.1} mu_rejects={} overlap_rejects={}",
        attempts,
        attempts as f64 / (2.0 * args.runs as f64),
        mu_rejects,
        overlap_rejects
    );

    Ok(())
}
