use std::fmt;

/// Money is represented as integer cents to avoid floating-point precision issues.
/// $50.00 = 5000 cents.
pub type Cents = i64;

/// Format cents as a two-decimal amount without a currency symbol.
/// Example: 5000 -> "50.00", 1 -> "0.01"
pub fn format_cents(cents: Cents) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.abs();
    format!("{}{}.{:02}", sign, abs / 100, abs % 100)
}

/// Parse a decimal string into cents.
/// Example: "50.00" -> 5000, "12.5" -> 1250, "100" -> 10000
///
/// Anything beyond two decimal places is truncated. The sign is kept so that
/// callers can reject negative amounts with their own message.
pub fn parse_cents(input: &str) -> Result<Cents, ParseAmountError> {
    let input = input.trim();
    let (negative, digits) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input),
    };

    let (units_part, cents_part) = match digits.split_once('.') {
        Some((units, cents)) => (units, cents),
        None => (digits, ""),
    };
    // "50." and ".50" are fine, "." and "" are not
    if units_part.is_empty() && cents_part.is_empty() {
        return Err(ParseAmountError);
    }
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(units_part) || !all_digits(cents_part) {
        return Err(ParseAmountError);
    }

    let units: i64 = if units_part.is_empty() {
        0
    } else {
        units_part.parse().map_err(|_| ParseAmountError)?
    };
    let cents: i64 = match cents_part.len() {
        0 => 0,
        // a single digit like "5" means 50 cents
        1 => cents_part.parse::<i64>().map_err(|_| ParseAmountError)? * 10,
        _ => cents_part[..2].parse().map_err(|_| ParseAmountError)?,
    };

    let total = units * 100 + cents;
    Ok(if negative { -total } else { total })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseAmountError;

impl fmt::Display for ParseAmountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid amount format")
    }
}

impl std::error::Error for ParseAmountError {}
