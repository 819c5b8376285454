use clap::Args;

use ringlab_core::scale::quantize::quantize;
use ringlab_core::validate::validate_least_count;

#[derive(Args, Debug)]
pub struct QuantizeArgs {
    /// Absolute scale position in cm
    pub position: f64,

    /// Instrument least count in cm
    #[arg(long, default_value_t = 0.005)]
    pub least_count: f64,
}

pub fn run(args: QuantizeArgs) -> anyhow::Result<()> {
    validate_least_count(args.least_count)?;
    if !args.position.is_finite() || args.position < 0.0 {
        anyhow::bail!("position must be a non-negative number");
    }

    let r = quantize(args.position, args.least_count);
    println!("msr={} vsr={} total={}", r.msr, r.vsr, r.total);
    Ok(())
}
