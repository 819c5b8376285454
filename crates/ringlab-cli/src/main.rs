// crates/ringlab-cli/src/main.rs

use clap::{Parser, Subcommand};

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "ringlab-cli")]
#[command(about = "Newton's rings reading synthesizer CLI", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Synthesize a full observation set (orders 2 and 4) and derive mu
    Generate(cmd::generate::GenerateArgs),

    /// Quantize one scale position into an MSR/VSR reading
    Quantize(cmd::quantize::QuantizeArgs),

    /// Run many seeded generations and report acceptance statistics
    Sweep(cmd::sweep::SweepArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.cmd {
        Commands::Generate(args) => cmd::generate::run(args),
        Commands::Quantize(args) => cmd::quantize::run(args),
        Commands::Sweep(args) => cmd::sweep::run(args),
    }
}
