const CURRENCY_SYMBOL: &str = "$";

/// Formats an amount of money the way the game displays it:
/// `$2.00B`, `$1.50M`, `$1.0K` or `$500`.
///
/// Scaling is decided on the magnitude, so negative amounts keep their sign
/// after the currency symbol (`$-1.50M`). Rounding is half-up on the exact
/// integer value, no floating point involved.
pub fn format_currency(amount: i64) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    let magnitude = amount.unsigned_abs();

    let body = if magnitude >= 1_000_000_000 {
        scaled(magnitude, 1_000_000_000, 2) + "B"
    } else if magnitude >= 1_000_000 {
        scaled(magnitude, 1_000_000, 2) + "M"
    } else if magnitude >= 1_000 {
        scaled(magnitude, 1_000, 1) + "K"
    } else {
        group_digits(magnitude)
    };

    format!("{}{}{}", CURRENCY_SYMBOL, sign, body)
}

// magnitude / unit rendered with `decimals` fractional digits
fn scaled(magnitude: u64, unit: u64, decimals: u32) -> String {
    let step = unit / 10u64.pow(decimals);
    let units = (magnitude as u128 + step as u128 / 2) / step as u128;
    let precision = 10u128.pow(decimals);
    format!(
        "{}.{:0width$}",
        units / precision,
        units % precision,
        width = decimals as usize
    )
}

/// Renders an integer with `,` between groups of three digits. Takes any
/// signed or unsigned width up to 64 bits.
pub fn group_digits(n: impl Into<i128>) -> String {
    let n: i128 = n.into();
    let digits = n.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        grouped.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Grouped number with an explicit `+` for zero and positive values.
pub fn signed_grouped(n: i64) -> String {
    if n >= 0 {
        format!("+{}", group_digits(n))
    } else {
        group_digits(n)
    }
}
