//! Number formatting for table cells and header totals

/// Currency sign used for every amount on the page (Philippine peso)
pub const CURRENCY_SIGN: &str = "₱";

/// Shown when an amount is missing or is not a number
pub const AMOUNT_FALLBACK: &str = "—";

/// Formats a number with a thousands separator and a fixed number of decimals,
/// e.g. `1234.567` with 2 decimals and `,` gives `1,234.57`
pub fn format_number_with_decimals(value: f64, decimals: u8, separator: char) -> String {
    let formatted = format!("{:.prec$}", value.abs(), prec = decimals as usize);

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((int, dec)) => (int, Some(dec)),
        None => (formatted.as_str(), None),
    };

    // Insert the separator every 3 digits from the right
    let mut result = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(separator);
        }
        result.push(c);
    }
    let formatted_integer = result.chars().rev().collect::<String>();

    let sign = if value < 0.0 && formatted.chars().any(|c| c != '0' && c != '.') {
        "-"
    } else {
        ""
    };

    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, formatted_integer, d),
        None => format!("{}{}", sign, formatted_integer),
    }
}

/// Formats an amount as `₱1,234.50` (en-US grouping, two decimals)
///
/// Never panics: a missing or non-finite amount renders as [`AMOUNT_FALLBACK`].
pub fn format_currency(amount: Option<f64>) -> String {
    match amount {
        Some(v) if v.is_finite() => {
            let digits = format_number_with_decimals(v.abs(), 2, ',');
            if v < 0.0 && digits != "0.00" {
                format!("-{}{}", CURRENCY_SIGN, digits)
            } else {
                format!("{}{}", CURRENCY_SIGN, digits)
            }
        }
        _ => AMOUNT_FALLBACK.to_string(),
    }
}

/// Left-pads an id with zeros up to `width`; longer ids are kept whole
pub fn zero_pad(n: i64, width: usize) -> String {
    format!("{:0width$}", n, width = width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0, ','), "1,235");
        assert_eq!(format_number_with_decimals(1234.567, 1, ','), "1,234.6");
        assert_eq!(format_number_with_decimals(1234.567, 2, ' '), "1 234.57");
        assert_eq!(format_number_with_decimals(1234567.891, 3, ','), "1,234,567.891");
        assert_eq!(format_number_with_decimals(-1234.5, 2, ','), "-1,234.50");
        assert_eq!(format_number_with_decimals(0.0, 2, ','), "0.00");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(Some(1234.5)), "₱1,234.50");
        assert_eq!(format_currency(Some(0.0)), "₱0.00");
        assert_eq!(format_currency(Some(999.999)), "₱1,000.00");
        assert_eq!(format_currency(Some(1_000_000.0)), "₱1,000,000.00");
        assert_eq!(format_currency(Some(-20.0)), "-₱20.00");
    }

    #[test]
    fn test_format_currency_fallback() {
        assert_eq!(format_currency(None), "—");
        assert_eq!(format_currency(Some(f64::NAN)), "—");
        assert_eq!(format_currency(Some(f64::INFINITY)), "—");
    }

    #[test]
    fn test_zero_pad() {
        assert_eq!(zero_pad(7, 6), "000007");
        assert_eq!(zero_pad(123456, 6), "123456");
        assert_eq!(zero_pad(1234567, 6), "1234567");
        assert_eq!(zero_pad(0, 6), "000000");
    }
}
