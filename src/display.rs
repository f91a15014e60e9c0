//! Presentation formatting for valuation output
//!
//! Pure string rendering, applied after all value computation. Balances
//! render at the fixed precision of their decimal convention; fiat amounts
//! render with the 2-decimal, thousands-grouped convention. An invalid
//! wallet renders the bare zero fallback (`"0"` / `"$0"`) rather than a
//! formatted zero amount.

use crate::types::tokens::{DecimalConvention, NormalizedBalance, UsdPrice, UsdValue};

/// Render a balance for display.
pub fn format_balance(
    balance: NormalizedBalance,
    convention: DecimalConvention,
    wallet_valid: bool,
) -> String {
    if !wallet_valid {
        return "0".to_string();
    }
    format!(
        "{:.precision$}",
        balance.as_f64(),
        precision = convention.display_precision()
    )
}

/// Render a per-token USD quote for display.
///
/// Prices render from the real quote regardless of wallet validity.
pub fn format_price(price: UsdPrice) -> String {
    format!("${}", group_thousands(price.as_f64()))
}

/// Render a per-token USD value for display.
pub fn format_value(value: UsdValue, wallet_valid: bool) -> String {
    if !wallet_valid {
        return "$0".to_string();
    }
    format!("${}", group_thousands(value.as_f64()))
}

/// Render the portfolio total line.
pub fn format_total(total: UsdValue, wallet_valid: bool) -> String {
    if !wallet_valid {
        return "Total Value = $0".to_string();
    }
    format!("Total Value = ${}", group_thousands(total.as_f64()))
}

/// Fixed 2-decimal rendering with comma-grouped thousands.
fn group_thousands(value: f64) -> String {
    let fixed = format!("{value:.2}");
    let (int_part, frac_part) = fixed
        .split_once('.')
        .expect("fixed-precision format always has a fraction");
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!("{sign}{grouped}.{frac_part}")
}
