use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use ringlab_core::sampling::entropy::Entropy;
use ringlab_core::sampling::order::Order;
use ringlab_core::sampling::result::OrderReading;
use ringlab_core::scale::quantize::{decimals_of, round_to};
use ringlab_core::{default_config, Config, Sampler};

fn config(least_count: f64) -> Config {
    Config {
        least_count,
        ..default_config()
    }
}

fn check_order(o: &OrderReading, least_count: f64) {
    let decimals = decimals_of(least_count);

    // Every reading reconstructs from its parts at display precision.
    for r in [&o.liquid.left, &o.liquid.right, &o.air.left, &o.air.right] {
        let rebuilt = round_to(r.msr + r.vsr as f64 * least_count, decimals);
        assert!(
            (rebuilt - r.total).abs() < 1e-12,
            "total {} does not reconstruct from msr {} vsr {}",
            r.total,
            r.msr,
            r.vsr
        );
    }

    assert!(o.liquid.d_squared >= 0.0);
    assert!(o.air.d_squared >= 0.0);

    // Accepted ratios display as 1.38xxx.
    assert!(
        format!("{:.5}", o.mu).starts_with("1.38"),
        "mu {} outside the target band",
        o.mu
    );

    // The two media never share a graduation on the same rim.
    assert_ne!(o.liquid.left.graduation(), o.air.left.graduation());
    assert_ne!(o.liquid.right.graduation(), o.air.right.graduation());
}

#[test]
fn accepted_runs_hold_every_invariant() {
    for &least_count in &[0.005, 0.002, 0.001] {
        for seed in 0..20u64 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut sampler = Sampler::new(config(least_count)).unwrap();
            let result = sampler.run(&mut rng).unwrap();

            check_order(&result.order2, least_count);
            check_order(&result.order4, least_count);
            assert_eq!(result.order2.order.n(), 2);
            assert_eq!(result.order4.order.n(), 4);

            let mean = round_to((result.order2.mu + result.order4.mu) / 2.0, 5);
            assert!((result.mu - mean).abs() < 1e-12);
        }
    }
}

/// Scripted entropy: cycles through a fixed list of uniform draws.
struct Seq {
    vals: Vec<f64>,
    at: usize,
}

impl Seq {
    fn new(vals: Vec<f64>) -> Self {
        Seq { vals, at: 0 }
    }
}

impl Entropy for Seq {
    fn uniform(&mut self) -> f64 {
        let v = self.vals[self.at % self.vals.len()];
        self.at += 1;
        v
    }
}

/// Pins the whole quantization chain for one hand-computed attempt.
///
/// Draws: jitter 0.52 -> liquid diameter 0.352; both centers at midpoint ->
/// liquid center 10.25, air center 10.45. Air diameter snaps to 0.414 and
/// the candidate ratio displays as 1.38330, so the first attempt is
/// accepted.
#[test]
fn scripted_draws_reproduce_the_hand_computed_chain() {
    let mut entropy = Seq::new(vec![0.52, 0.5, 0.5]);
    let mut sampler = Sampler::new(config(0.001)).unwrap();

    let o = sampler.generate_order(Order::Two, &mut entropy).unwrap();
    assert_eq!(sampler.stats.attempts, 1);

    let near = |a: f64, b: f64| (a - b).abs() < 1e-9;

    assert!(near(o.liquid.left.msr, 10.40));
    assert_eq!(o.liquid.left.vsr, 26);
    assert!(near(o.liquid.left.total, 10.426));

    assert!(near(o.liquid.right.msr, 10.05));
    assert_eq!(o.liquid.right.vsr, 24);
    assert!(near(o.liquid.right.total, 10.074));

    assert!(near(o.air.left.msr, 10.65));
    assert_eq!(o.air.left.vsr, 7);
    assert!(near(o.air.left.total, 10.657));

    assert!(near(o.air.right.msr, 10.20));
    assert_eq!(o.air.right.vsr, 43);
    assert!(near(o.air.right.total, 10.243));

    // D^2 and mu come from the display-rounded totals.
    assert!(near(o.liquid.d_squared, 0.12390));
    assert!(near(o.air.d_squared, 0.17140));
    assert!(near(o.mu, 1.38337));
}
