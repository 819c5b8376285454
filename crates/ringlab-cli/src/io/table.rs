use ringlab_core::sampling::result::{ExperimentResult, OrderReading, RingMeasurement};
use ringlab_core::Config;

/// Plain-text observation tables: one per order, MSR/VSR/total per rim and
/// D^2 per medium, then the final mean block.
pub fn write_result_stdout(cfg: &Config, result: &ExperimentResult) {
    println!("Newton's rings - refractive index of the liquid film");
    println!(
        "LC = {} cm   R = {} cm   lamp = {} ({} A, {})",
        cfg.least_count,
        cfg.radius_of_curvature,
        cfg.light.name(),
        cfg.light.wavelength_angstrom(),
        cfg.light.color()
    );
    println!();

    write_order(&result.order2);
    write_order(&result.order4);

    println!(
        "mean mu = ({:.5} + {:.5}) / 2 = {:.5}",
        result.order2.mu, result.order4.mu, result.mu
    );
}

fn write_order(o: &OrderReading) {
    println!("observation table, order n = {}", o.order);
    println!(
        "{:<8} {:>9} {:>5} {:>10} {:>9} {:>5} {:>10} {:>10}",
        "medium", "left msr", "vsr", "total", "right msr", "vsr", "total", "D^2"
    );
    write_row("liquid", &o.liquid);
    write_row("air", &o.air);
    println!("mu (order {}) = {:.5}", o.order, o.mu);
    println!();
}

fn write_row(label: &str, m: &RingMeasurement) {
    println!(
        "{:<8} {:>9.3} {:>5} {:>10.3} {:>9.3} {:>5} {:>10.3} {:>10.5}",
        label,
        m.left.msr,
        m.left.vsr,
        m.left.total,
        m.right.msr,
        m.right.vsr,
        m.right.total,
        m.d_squared
    );
}
