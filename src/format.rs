//! Display Formatting
//!
//! Text helpers for cards and the stats line.

use wishlist_core::Stats;

/// Group the integer part with `.` every three digits: 15000000 -> "15.000.000".
/// Fractions are rounded; rupiah prices have no cents.
pub fn format_rupiah(amount: f64) -> String {
    let digits = format!("{:.0}", amount.max(0.0));
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// Price as shown on a card; zero means "not set"
pub fn price_label(price: f64) -> String {
    if price > 0.0 {
        format!("Rp {}", format_rupiah(price))
    } else {
        "-".to_string()
    }
}

pub fn stats_line(stats: Stats) -> String {
    let noun = if stats.total == 1 { "item" } else { "items" };
    format!("{} {} • {} bought", stats.total, noun, stats.bought)
}

/// Parse the price input. Blank means zero; anything else must be a
/// number and is checked by the store.
pub fn parse_price(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Some(0.0);
    }
    raw.parse::<f64>().ok()
}
