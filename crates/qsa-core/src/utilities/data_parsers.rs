//! Data parsing helpers.
//!
//! Low-level string scanners for dates and tenors.  They only check shape;
//! calendar validity is the job of the `Date` and `Tenor` constructors.

/// Parse a strict ISO 8601 date string (`yyyy-MM-dd`).
///
/// Exactly four year digits, two month digits and two day digits separated by
/// `-`; no surrounding whitespace, signs, or time component.
///
/// Returns `(year, month, day)` on success.
pub fn parse_iso_date(s: &str) -> Option<(u16, u8, u8)> {
    let bytes = s.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    let digits = |range: std::ops::Range<usize>| -> Option<u32> {
        bytes[range].iter().try_fold(0u32, |acc, &b| {
            b.is_ascii_digit().then(|| acc * 10 + u32::from(b - b'0'))
        })
    };
    let year = digits(0..4)? as u16;
    let month = digits(5..7)? as u8;
    let day = digits(8..10)? as u8;
    Some((year, month, day))
}

/// Parse a compound tenor string like `"1Y1M"`, `"3M"`, `"2W"`, `"10D"`.
///
/// Grammar: `{N}Y{N}M{N}W{N}D`, every group optional but at least one
/// present, groups in that order, each unit at most once.  Unit letters are
/// case-insensitive.
///
/// Returns `(years, months, weeks, days)` on success.
pub fn parse_tenor_string(s: &str) -> Option<(u32, u32, u32, u32)> {
    const UNITS: [char; 4] = ['Y', 'M', 'W', 'D'];
    let mut parts = [0u32; 4];
    let mut next_unit = 0usize;
    let mut number: Option<u32> = None;
    let mut seen_any = false;

    for c in s.chars() {
        if let Some(d) = c.to_digit(10) {
            number = Some(number.unwrap_or(0).checked_mul(10)?.checked_add(d)?);
            continue;
        }
        let unit = c.to_ascii_uppercase();
        let pos = UNITS.iter().position(|&u| u == unit)?;
        // Units must appear in Y, M, W, D order and at most once.
        if pos < next_unit {
            return None;
        }
        parts[pos] = number.take()?;
        next_unit = pos + 1;
        seen_any = true;
    }

    // Trailing digits without a unit are rejected.
    if number.is_some() || !seen_any {
        return None;
    }
    Some((parts[0], parts[1], parts[2], parts[3]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tenor() {
        assert_eq!(parse_tenor_string("1Y1M"), Some((1, 1, 0, 0)));
        assert_eq!(parse_tenor_string("3M"), Some((0, 3, 0, 0)));
        assert_eq!(parse_tenor_string("2W"), Some((0, 0, 2, 0)));
        assert_eq!(parse_tenor_string("10D"), Some((0, 0, 0, 10)));
        assert_eq!(parse_tenor_string("2y6m"), Some((2, 6, 0, 0)));
        assert_eq!(parse_tenor_string("1Y2M3W4D"), Some((1, 2, 3, 4)));
    }

    #[test]
    fn test_parse_tenor_rejects_bad_shapes() {
        assert_eq!(parse_tenor_string(""), None);
        assert_eq!(parse_tenor_string("abc"), None);
        assert_eq!(parse_tenor_string("M"), None);
        assert_eq!(parse_tenor_string("3"), None);
        assert_eq!(parse_tenor_string("1M1Y"), None);
        assert_eq!(parse_tenor_string("1M2M"), None);
        assert_eq!(parse_tenor_string("1Y 1M"), None);
        assert_eq!(parse_tenor_string("-1M"), None);
    }

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(parse_iso_date("2023-06-15"), Some((2023, 6, 15)));
        assert_eq!(parse_iso_date("2008-02-30"), Some((2008, 2, 30)));
        assert_eq!(parse_iso_date("bad"), None);
        assert_eq!(parse_iso_date("2023-6-15"), None);
        assert_eq!(parse_iso_date("15/06/2023"), None);
        assert_eq!(parse_iso_date(" 2023-06-15"), None);
        assert_eq!(parse_iso_date("2023-06-15T00:00"), None);
        assert_eq!(parse_iso_date("+023-06-15"), None);
    }
}
