//! Decimal parsing and locale-aware formatting
//!
//! Accepts the French input conventions (comma decimal separator, spaces
//! as thousands separators) and renders back with non-breaking-space
//! grouping and a comma separator.

/// Non-breaking space used as the thousands separator on output
pub const GROUP_SEPARATOR: char = '\u{a0}';

/// Default digits pattern: at least one integer digit, up to three
/// fraction digits
pub const DEFAULT_DIGITS: &str = "1.0-3";

/// Parse a locale-formatted decimal string.
///
/// Commas become decimal points and all whitespace (including NBSP group
/// separators) is stripped. Blank or unparseable input yields `None`.
pub fn parse_decimal(value: &str) -> Option<f64> {
    if value.trim().is_empty() {
        return None;
    }

    let normalized: String = value
        .replace(',', ".")
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    normalized.parse().ok()
}

/// Digits pattern in the `minInt.minFrac-maxFrac` form (e.g. `1.2-2`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitsInfo {
    pub min_int: usize,
    pub min_frac: usize,
    pub max_frac: usize,
}

impl DigitsInfo {
    /// Parse a digits pattern; `None` when malformed
    pub fn parse(pattern: &str) -> Option<Self> {
        let (min_int, frac) = pattern.split_once('.')?;
        let (min_frac, max_frac) = frac.split_once('-')?;
        let info = Self {
            min_int: min_int.trim().parse().ok()?,
            min_frac: min_frac.trim().parse().ok()?,
            max_frac: max_frac.trim().parse().ok()?,
        };
        (info.min_frac <= info.max_frac).then_some(info)
    }
}

/// Normalize a locale-formatted decimal string and re-render it with
/// French grouping, optionally under an explicit digits pattern.
/// `None` when the input or the pattern cannot be parsed.
pub fn format_decimal(text: &str, digits: Option<&str>) -> Option<String> {
    let value = parse_decimal(text)?;
    let info = DigitsInfo::parse(digits.unwrap_or(DEFAULT_DIGITS))?;
    Some(render(value, info))
}

fn render(value: f64, info: DigitsInfo) -> String {
    let rounded = format!("{:.*}", info.max_frac, value.abs());
    let is_zero = rounded.chars().all(|c| c == '0' || c == '.');
    let negative = value < 0.0 && !is_zero;

    let (int_part, frac_part) = match rounded.split_once('.') {
        Some((i, f)) => (i.to_string(), f.to_string()),
        None => (rounded, String::new()),
    };

    // Trailing zeros shrink back to the minimum fraction width
    let mut frac = frac_part.trim_end_matches('0').to_string();
    while frac.len() < info.min_frac {
        frac.push('0');
    }

    let mut int_digits = int_part;
    while int_digits.len() < info.min_int {
        int_digits.insert(0, '0');
    }

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&group_thousands(&int_digits));
    if !frac.is_empty() {
        out.push(',');
        out.push_str(&frac);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let bytes = digits.as_bytes();
    let mut out = String::with_capacity(bytes.len() + bytes.len() / 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(*b as char);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_comma_and_spaces() {
        assert_eq!(parse_decimal("1 000,5"), Some(1000.5));
        assert_eq!(parse_decimal("12,25"), Some(12.25));
        assert_eq!(parse_decimal("3"), Some(3.0));
    }

    #[test]
    fn test_parse_nbsp_group_separator() {
        assert_eq!(parse_decimal("1\u{a0}234,75"), Some(1234.75));
        assert_eq!(parse_decimal("1\u{202f}234"), Some(1234.0));
    }

    #[test]
    fn test_parse_blank_is_none() {
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("   "), None);
    }

    #[test]
    fn test_parse_garbage_is_none() {
        assert_eq!(parse_decimal("12,5 GB"), None);
    }

    #[test]
    fn test_digits_info_parse() {
        assert_eq!(
            DigitsInfo::parse("1.2-2"),
            Some(DigitsInfo {
                min_int: 1,
                min_frac: 2,
                max_frac: 2
            })
        );
        assert_eq!(DigitsInfo::parse("1.3-2"), None);
        assert_eq!(DigitsInfo::parse("bogus"), None);
    }

    #[test]
    fn test_format_groups_thousands() {
        assert_eq!(
            format_decimal("1234,5", None),
            Some("1\u{a0}234,5".to_string())
        );
        assert_eq!(
            format_decimal("1234567", None),
            Some("1\u{a0}234\u{a0}567".to_string())
        );
    }

    #[test]
    fn test_format_pads_to_min_fraction() {
        assert_eq!(
            format_decimal("1 000", Some("1.2-2")),
            Some("1\u{a0}000,00".to_string())
        );
    }

    #[test]
    fn test_format_caps_at_max_fraction() {
        assert_eq!(
            format_decimal("0,123456", Some("1.0-3")),
            Some("0,123".to_string())
        );
    }

    #[test]
    fn test_format_negative() {
        assert_eq!(
            format_decimal("-1234,5", None),
            Some("-1\u{a0}234,5".to_string())
        );
    }

    #[test]
    fn test_format_blank_is_none() {
        assert_eq!(format_decimal("", None), None);
        assert_eq!(format_decimal("12", Some("nope")), None);
    }
}
