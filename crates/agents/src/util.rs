use rust_decimal::{Decimal, RoundingStrategy};

/// Inserts thousands separators into an integer, e.g. `12500` -> `"12,500"`.
pub fn format_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let grouped = group_digits(&digits);
    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Formats a dollar amount with separators and cents, e.g. `$51,000.00`.
pub fn format_usd(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let mut cents_scaled = rounded.abs();
    cents_scaled.rescale(2);
    let text = cents_scaled.to_string();
    let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    format!("{}${}.{}", sign, group_digits(whole), cents)
}

fn group_digits(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
