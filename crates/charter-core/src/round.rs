//! Fixed-decimal rounding.
//!
//! Display values (prices, plot coordinates) are rounded to a fixed number of
//! decimals so output is stable across platforms. Halves round away from zero.

/// Round `value` to `decimals` places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    round_to(value, 2)
}
