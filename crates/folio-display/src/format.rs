//! Cell formatters for the dashboard.
//!
//! Every formatter takes the raw sheet text and never fails: unreadable input
//! comes back unchanged or as a placeholder.

use chrono::NaiveDate;
use strum::{AsRefStr, Display, EnumString};

use crate::number::{
    floor_grouped, format_grouped, is_plain_decimal, parse_currency, parse_float_prefix,
    round_half_up, to_fixed,
};

const EMPTY: &str = "-";
const NO_DISTRIBUTION: &str = "/";

fn is_blank(value: &str) -> bool {
    value.is_empty() || value == EMPTY
}

/// How an unlock column is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum UnlockKind {
    Days,
    DaysFull,
    Currency,
}

/// Currency of an outstanding distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum DistributionCurrency {
    USDC,
    ETH,
    SOL,
}

/// `"$1,234.9"` → `"$1,234"`. Truncates, never rounds.
pub fn format_tokens_received(value: &str) -> String {
    if is_blank(value) {
        return EMPTY.to_owned();
    }
    match parse_currency(value) {
        Some(number) => format!("${}", floor_grouped(number)),
        None => value.to_owned(),
    }
}

/// Compact currency in thousands: `"$4,817,417,522"` → `"$4,817,417"`.
///
/// The last three integer digits are dropped only when there are more than
/// three of them; smaller amounts render as whole dollars.
pub fn format_currency_thousands(value: &str) -> String {
    if is_blank(value) {
        return EMPTY.to_owned();
    }
    let Some(number) = parse_currency(value) else {
        return value.to_owned();
    };

    let whole = number.floor();
    let digits = to_fixed(whole, 0);
    if digits.len() <= 3 {
        return format!("${}", format_grouped(whole, 0, 0));
    }
    let head = &digits[..digits.len() - 3];
    match head.parse::<f64>() {
        Ok(thousands) => format!("${}", format_grouped(thousands, 0, 0)),
        // a lone sign left over, e.g. "-123" has four characters
        Err(_) => format!("${}", format_grouped(whole, 0, 0)),
    }
}

/// Whole dollars with the sign in front of the currency: `-2500.4` → `"-$2,500"`.
pub fn format_signed_dollars(value: f64) -> String {
    let whole = format_grouped(round_half_up(value.abs()), 0, 0);
    if value >= 0.0 {
        format!("${whole}")
    } else {
        format!("-${whole}")
    }
}

/// Decimal fraction to percentage: `"0.6142"` → `"61.4%"`.
pub fn format_percentage(value: &str) -> String {
    if is_blank(value) {
        return EMPTY.to_owned();
    }
    if value.contains('%') {
        return value.to_owned();
    }
    match parse_float_prefix(value) {
        Some(number) => format!("{}%", to_fixed(number * 100.0, 1)),
        None => value.to_owned(),
    }
}

/// `"1.456x"` → `"1.46x"`.
pub fn format_roi(value: &str) -> String {
    if is_blank(value) {
        return EMPTY.to_owned();
    }
    let cleaned: String = value.chars().filter(|c| !matches!(c, 'x' | 'X')).collect();
    match parse_float_prefix(&cleaned) {
        Some(number) => format!("{}x", to_fixed(number, 2)),
        None => value.to_owned(),
    }
}

/// Tokens-received multiple: strips one trailing `x`, two decimals.
pub fn format_tokens_roi(value: &str) -> String {
    if is_blank(value) {
        return EMPTY.to_owned();
    }
    let cleaned = value.strip_suffix(['x', 'X']).unwrap_or(value);
    match parse_float_prefix(cleaned) {
        Some(number) => format!("{}x", to_fixed(number, 2)),
        None => value.to_owned(),
    }
}

/// Token price with three decimals: `"1.0344"` → `"$1.034"`.
pub fn format_price(value: &str) -> String {
    if is_blank(value) {
        return EMPTY.to_owned();
    }
    match parse_currency(value) {
        Some(number) => format!("${}", to_fixed(number, 3)),
        None => value.to_owned(),
    }
}

pub fn format_unlock_column(value: &str, kind: UnlockKind) -> String {
    if is_blank(value) || value == NO_DISTRIBUTION {
        return EMPTY.to_owned();
    }
    let lower = value.to_lowercase();
    if ["finished", "exit", "tge"]
        .iter()
        .any(|marker| lower.contains(marker))
    {
        return value.to_owned();
    }

    match kind {
        UnlockKind::Currency => {
            let cleaned: String = value.chars().filter(|c| !matches!(c, '$' | ',')).collect();
            match parse_float_prefix(&cleaned) {
                Some(number) if number < 1.0 => EMPTY.to_owned(),
                Some(number) => format!("${}", floor_grouped(number)),
                None => value.to_owned(),
            }
        }
        UnlockKind::Days | UnlockKind::DaysFull => match parse_float_prefix(value) {
            Some(number) => format!("{} days", to_fixed(round_half_up(number), 0)),
            None => value.to_owned(),
        },
    }
}

/// Outstanding distribution with its currency suffix. `/` marks "none owed".
pub fn format_outstanding_distribution(value: &str, currency: DistributionCurrency) -> String {
    if value.is_empty() || value == NO_DISTRIBUTION {
        return NO_DISTRIBUTION.to_owned();
    }
    let cleaned: String = value
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect();
    let Some(number) = parse_float_prefix(&cleaned) else {
        return value.to_owned();
    };

    let amount = match currency {
        DistributionCurrency::USDC => format_grouped(number, 2, 2),
        DistributionCurrency::ETH | DistributionCurrency::SOL => format_grouped(number, 0, 6),
    };
    format!("{amount} {currency}")
}

/// Generic table cell.
///
/// Values that already carry a unit (`%`, `$`, a trailing multiple like
/// `2.5x`) are shown as-is; plain decimals get grouping and at most two
/// decimals.
pub fn format_cell(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    let ends_with_multiple = {
        let mut tail = value.chars().rev();
        matches!(tail.next(), Some('x' | 'X')) && tail.next().is_some_and(|c| c.is_ascii_digit())
    };
    if value.contains(['%', '$']) || ends_with_multiple {
        return value.to_owned();
    }
    if is_plain_decimal(value) {
        if let Ok(number) = value.parse::<f64>() {
            return format_grouped(number, 0, 2);
        }
    }
    value.to_owned()
}

/// `"2025-03"` → `"Mar 2025"`.
pub fn format_month(month: &str) -> String {
    let parsed = month.split_once('-').and_then(|(year, month_of_year)| {
        let year = year.trim().parse::<i32>().ok()?;
        let month_of_year = month_of_year.trim().parse::<u32>().ok()?;
        NaiveDate::from_ymd_opt(year, month_of_year, 1)
    });
    parsed.map_or_else(|| month.to_owned(), |date| date.format("%b %Y").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_tokens_received() {
        assert_eq!(format_tokens_received("$1234.9"), "$1,234");
        assert_eq!(format_tokens_received("1,234,567.99"), "$1,234,567");
        assert_eq!(format_tokens_received("999"), "$999");
        assert_eq!(format_tokens_received(""), "-");
        assert_eq!(format_tokens_received("-"), "-");
        assert_eq!(format_tokens_received("pending"), "pending");
    }

    #[test]
    fn test_negative_currency_text_is_kept() {
        assert_eq!(format_tokens_received("-$1,234.50"), "-$1,234.50");
        assert_eq!(format_currency_thousands("-$1,234,567"), "-$1,234,567");
        assert_eq!(format_price("-$0.5"), "-$0.5");
        assert_eq!(format_tokens_received("-1234.5"), "$-1,235");
    }

    #[test]
    fn test_format_signed_dollars() {
        assert_eq!(format_signed_dollars(1234.5), "$1,235");
        assert_eq!(format_signed_dollars(-2500.4), "-$2,500");
        assert_eq!(format_signed_dollars(0.0), "$0");
        assert_eq!(format_signed_dollars(-0.3), "-$0");
    }

    #[test]
    fn test_format_currency_thousands() {
        assert_eq!(format_currency_thousands("$4,817,417,522"), "$4,817,417");
        assert_eq!(format_currency_thousands("415826486"), "$415,826");
        assert_eq!(format_currency_thousands("$950.75"), "$950");
        assert_eq!(format_currency_thousands("-"), "-");
        assert_eq!(format_currency_thousands("n/a"), "n/a");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage("0.6142"), "61.4%");
        assert_eq!(format_percentage("1"), "100.0%");
        assert_eq!(format_percentage("45%"), "45%");
        assert_eq!(format_percentage(""), "-");
        assert_eq!(format_percentage("soon"), "soon");
    }

    #[test]
    fn test_format_roi() {
        assert_eq!(format_roi("1.456x"), "1.46x");
        assert_eq!(format_roi("2X"), "2.00x");
        assert_eq!(format_roi("0.5"), "0.50x");
        assert_eq!(format_roi("-"), "-");
        assert_eq!(format_roi("n/a"), "n/a");
    }

    #[test]
    fn test_format_tokens_roi() {
        assert_eq!(format_tokens_roi("1.8x"), "1.80x");
        assert_eq!(format_tokens_roi("3.14159"), "3.14x");
        assert_eq!(format_tokens_roi(""), "-");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price("1.0344"), "$1.034");
        assert_eq!(format_price("$0.5"), "$0.500");
        assert_eq!(format_price("-"), "-");
        assert_eq!(format_price("TBA"), "TBA");
    }

    #[test]
    fn test_format_unlock_column() {
        assert_eq!(format_unlock_column("/", UnlockKind::Days), "-");
        assert_eq!(format_unlock_column("", UnlockKind::Currency), "-");
        assert_eq!(format_unlock_column("Finished", UnlockKind::Days), "Finished");
        assert_eq!(format_unlock_column("Post-TGE", UnlockKind::Currency), "Post-TGE");
        assert_eq!(format_unlock_column("Exit", UnlockKind::DaysFull), "Exit");
        assert_eq!(format_unlock_column("$12,345.67", UnlockKind::Currency), "$12,345");
        assert_eq!(format_unlock_column("$0.40", UnlockKind::Currency), "-");
        assert_eq!(format_unlock_column("44.5", UnlockKind::Days), "45 days");
        assert_eq!(format_unlock_column("12", UnlockKind::DaysFull), "12 days");
        assert_eq!(format_unlock_column("Q3", UnlockKind::Days), "Q3");
    }

    #[test]
    fn test_format_outstanding_distribution() {
        assert_eq!(
            format_outstanding_distribution("1234.5", DistributionCurrency::USDC),
            "1,234.50 USDC"
        );
        assert_eq!(
            format_outstanding_distribution("0.12345678", DistributionCurrency::ETH),
            "0.123457 ETH"
        );
        assert_eq!(
            format_outstanding_distribution("2", DistributionCurrency::SOL),
            "2 SOL"
        );
        assert_eq!(
            format_outstanding_distribution("/", DistributionCurrency::USDC),
            "/"
        );
        assert_eq!(
            format_outstanding_distribution("", DistributionCurrency::ETH),
            "/"
        );
        assert_eq!(
            format_outstanding_distribution("pending", DistributionCurrency::SOL),
            "pending"
        );
    }

    #[test]
    fn test_format_cell() {
        assert_eq!(format_cell(""), "");
        assert_eq!(format_cell("12%"), "12%");
        assert_eq!(format_cell("$1,000"), "$1,000");
        assert_eq!(format_cell("2.5x"), "2.5x");
        assert_eq!(format_cell("1234567.891"), "1,234,567.89");
        assert_eq!(format_cell("-12"), "-12");
        assert_eq!(format_cell("Linear 24m"), "Linear 24m");
        assert_eq!(format_cell("max"), "max");
    }

    #[test]
    fn test_format_month() {
        assert_eq!(format_month("2025-03"), "Mar 2025");
        assert_eq!(format_month("2024-12"), "Dec 2024");
        assert_eq!(format_month("2025-13"), "2025-13");
        assert_eq!(format_month("soon"), "soon");
    }

    #[test]
    fn test_strum_names() {
        assert_eq!(DistributionCurrency::ETH.to_string(), "ETH");
        assert_eq!("usdc".parse::<DistributionCurrency>().unwrap(), DistributionCurrency::USDC);
        assert_eq!(UnlockKind::DaysFull.as_ref(), "days-full");
    }

    #[test]
    fn test_formatted_values_parse_back() {
        use crate::number::parse_number_like;

        let cases = [
            (format_tokens_received("$1234.9"), 1234.0),
            (format_roi("1.456x"), 1.46),
            (format_cell("98765.4321"), 98765.43),
            (format_percentage("0.5"), 50.0),
        ];
        for (formatted, expected) in cases {
            let parsed = parse_number_like(&formatted);
            assert!((parsed - expected).abs() < 0.01, "{formatted} parsed as {parsed}");
        }
    }
}
