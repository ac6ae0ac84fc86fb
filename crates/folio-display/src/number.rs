//! Number parsing and en-US rendering of spreadsheet values.

/// Characters the sheet leaves around amounts: currency sign, thousands
/// separators, and the mis-decoded halves of a narrow no-break space.
fn is_noise(c: char) -> bool {
    matches!(c, '$' | ',' | '\u{00e2}' | '\u{00af}') || c.is_whitespace()
}

/// Reads the longest leading decimal literal, ignoring leading whitespace.
///
/// Mirrors `parseFloat`: `"12.5abc"` reads as `12.5`, `"abc"` reads as nothing.
pub fn parse_float_prefix(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_digits = digits_from(end);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits_from(end + 1);
        end += 1 + frac_digits;
    }
    if int_digits + frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = digits_from(exp_end);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse().ok()
}

/// Loose amount parsing used by formatters and rankings.
///
/// Strips `$`, commas and all whitespace (including U+00A0 and U+202F), then
/// reads a numeric prefix.
pub fn parse_loose(value: &str) -> Option<f64> {
    let cleaned: String = value.chars().filter(|c| !is_noise(*c)).collect();
    parse_float_prefix(&cleaned)
}

/// Currency amount parsing used by the cell formatters.
///
/// Only a leading `$` is a currency sign, so `"-$1,234.50"` reads as nothing
/// and the formatter shows the sheet text unchanged.
pub fn parse_currency(value: &str) -> Option<f64> {
    let unsigned = value.strip_prefix('$').unwrap_or(value);
    let cleaned: String = unsigned
        .chars()
        .filter(|c| *c == '$' || !is_noise(*c))
        .collect();
    parse_float_prefix(&cleaned)
}

/// `^-?\d+(\.\d+)?$`
pub fn is_plain_decimal(s: &str) -> bool {
    let unsigned = s.strip_prefix('-').unwrap_or(s);
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };
    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    all_digits(int_part) && frac_part.is_none_or(all_digits)
}

/// Whole-string numeric parse. Rejects anything that is not a plain decimal
/// or exponent literal.
fn strict_number(s: &str) -> Option<f64> {
    if s.is_empty()
        || !s
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'-' | b'+' | b'e' | b'E'))
    {
        return None;
    }
    s.parse().ok()
}

/// Sort key for a table cell.
///
/// Placeholders (`""`, `"-"`, `"n/a"`, `"TGE soon"`) and anything unreadable map
/// to `-∞` so they sink to the bottom of a descending sort.
pub fn parse_number_like(value: &str) -> f64 {
    let trimmed = value.trim();
    if trimmed.is_empty()
        || trimmed
            .chars()
            .all(|c| c.is_ascii_alphabetic() || matches!(c, '/' | ' ' | '-'))
    {
        return f64::NEG_INFINITY;
    }

    let s: String = trimmed
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '$' | ','))
        .collect();

    // "$" or "," alone leaves nothing to read and sorts as a placeholder
    let parsed = if let Some(multiple) = s.strip_suffix(['x', 'X']).filter(|n| is_plain_decimal(n))
    {
        strict_number(multiple)
    } else if let Some(percent) = s.strip_suffix('%').filter(|n| is_plain_decimal(n)) {
        strict_number(percent)
    } else if s.len() >= 2 && s.starts_with('(') && s.ends_with(')') {
        let inner: String = s.chars().filter(|c| !matches!(c, '(' | ')')).collect();
        strict_number(&inner).map(|n| -n)
    } else {
        strict_number(&s)
    };

    parsed
        .filter(|n| !n.is_nan())
        .unwrap_or(f64::NEG_INFINITY)
}

/// Inserts `,` every three digits of an unsigned integer literal.
pub fn group_digits(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Renders `value` the way `toLocaleString("en-US", { minimumFractionDigits,
/// maximumFractionDigits })` does.
pub fn format_grouped(value: f64, min_fraction: usize, max_fraction: usize) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_owned();
    }

    let fixed = format!("{:.*}", max_fraction, value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let mut fraction = frac_part.trim_end_matches('0').to_owned();
    while fraction.len() < min_fraction {
        fraction.push('0');
    }

    let is_zero = int_part.bytes().chain(fraction.bytes()).all(|b| b == b'0');
    let mut out = String::new();
    if value.is_sign_negative() && !is_zero {
        out.push('-');
    }
    out.push_str(&group_digits(int_part));
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(&fraction);
    }
    out
}

/// Fixed decimals without grouping, like `Number.prototype.toFixed`.
pub fn to_fixed(value: f64, decimals: usize) -> String {
    // -0 prints without its sign
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value:.decimals$}")
}

/// Integer part with thousands grouping, truncated toward `-∞`.
pub fn floor_grouped(value: f64) -> String {
    format_grouped(value.floor(), 0, 0)
}

/// Rounds half up, like `Math.round`.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}
