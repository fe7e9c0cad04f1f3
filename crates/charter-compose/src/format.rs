//! Label formatting.

/// Price with two decimals.
pub fn format_price(price: f64) -> String {
    format!("{:.2}", price)
}

/// Volume with a K/M/B suffix and two decimals; plain integer below 1000.
pub fn format_volume(volume: f64) -> String {
    let abs = volume.abs();
    if abs >= 1_000_000_000.0 {
        format!("{:.2}B", volume / 1_000_000_000.0)
    } else if abs >= 1_000_000.0 {
        format!("{:.2}M", volume / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("{:.2}K", volume / 1_000.0)
    } else {
        format!("{:.0}", volume)
    }
}

/// Signed percentage with two decimals, e.g. `+1.25%`.
pub fn format_percent(percent: f64) -> String {
    format!("{:+.2}%", percent)
}
