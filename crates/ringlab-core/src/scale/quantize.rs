use crate::scale::reading::ScaleReading;

/// Main-scale graduation width in cm.
pub const MAIN_SCALE_DIV: f64 = 0.05;

/// Deterministic vernier quantization (round-to-nearest on the vernier step).
///
/// Splits an absolute scale position into a main-scale reading (floor to the
/// 0.05 cm graduation) and a vernier count (remainder over the least count,
/// rounded half away from zero).
/// - Guarantees `msr` is a multiple of the graduation
/// - Clamps a negative vernier count to zero (the remainder is non-negative
///   by construction; the clamp guards float edge cases near a graduation)
pub fn quantize(position: f64, least_count: f64) -> ScaleReading {
    debug_assert!(least_count > 0.0);

    let decimals = decimals_of(least_count);

    let msr = (position / MAIN_SCALE_DIV).floor() * MAIN_SCALE_DIV;
    let remainder = position - msr;

    let vsr = (remainder / least_count).round();
    let vsr = if vsr < 0.0 { 0 } else { vsr as u32 };

    // Graduation multiples carry at most two fractional digits; rounding to
    // three only strips binary-float fuzz.
    let msr = round_to(msr, 3);
    let total = round_to(msr + vsr as f64 * least_count, decimals);

    ScaleReading { msr, vsr, total }
}

/// Nearest multiple of `step`, half away from zero.
pub fn snap_to_step(value: f64, step: f64) -> f64 {
    debug_assert!(step > 0.0);
    (value / step).round() * step
}

/// Display rounding to `decimals` fractional digits, half away from zero.
pub fn round_to(value: f64, decimals: usize) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}

/// Fractional digits of the least count, read off its shortest decimal form.
/// Falls back to 3 when there are none to count (whole-number least counts).
pub fn decimals_of(least_count: f64) -> usize {
    let text = format!("{least_count}");
    match text.split_once('.') {
        Some((_, frac)) if !frac.is_empty() => frac.len(),
        _ => 3,
    }
}
