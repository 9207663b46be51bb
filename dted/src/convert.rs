//! Scalar converters for fixed-width DTED fields.
//!
//! Every converter is a pure function from the raw field text (or, for
//! elevation samples, the raw 16-bit word) to a typed value. Text fields are
//! decoded with [`text`] first and then handed to a domain converter.

use crate::error::ConversionError;

/// Raw sample word marking "no data" in an elevation block.
pub const NO_DATA: u16 = 0xFFFF;

/// Sign bit of a sign-magnitude elevation sample.
const SIGN_BIT: u16 = 0x8000;

fn parse_error(value: &str, expected: &'static str) -> ConversionError {
    ConversionError::Parse {
        value: value.to_string(),
        expected,
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Decode raw field bytes as text.
pub fn text(raw: &[u8]) -> Result<&str, ConversionError> {
    std::str::from_utf8(raw).map_err(|_| ConversionError::Utf8)
}

/// Parse a sexagesimal coordinate such as `0100000E` or `424242.42`.
///
/// The trailing hemisphere letter is optional; `S` and `W` negate the result.
/// Seconds are the two digits before the decimal point (plus any fraction),
/// or the last two characters when there is no decimal point. Minutes are the
/// two characters before the seconds and degrees are whatever precedes them.
///
/// # Examples
///
/// ```
/// use dted::convert::degrees;
///
/// assert!((degrees("0505959W").unwrap() + 50.99972222).abs() < 1e-6);
/// assert!((degrees("424242.42").unwrap() - 42.71178333).abs() < 1e-6);
/// ```
pub fn degrees(value: &str) -> Result<f64, ConversionError> {
    let (body, sign) = match value.as_bytes().last() {
        Some(b'N' | b'E') => (&value[..value.len() - 1], 1.0),
        Some(b'S' | b'W') => (&value[..value.len() - 1], -1.0),
        _ => (value, 1.0),
    };

    if !body.is_ascii() {
        return Err(parse_error(value, "sexagesimal degrees"));
    }

    let seconds_at = match body.find('.') {
        Some(dot) => dot.checked_sub(2),
        None => body.len().checked_sub(2),
    };
    let minutes_at = seconds_at
        .and_then(|s| s.checked_sub(2))
        .filter(|&m| m > 0)
        .ok_or_else(|| ConversionError::Domain {
            value: value.to_string(),
            reason: "too short to hold degrees, minutes and seconds",
        })?;
    let seconds_at = minutes_at + 2;

    let (deg, min, sec) = (
        &body[..minutes_at],
        &body[minutes_at..seconds_at],
        &body[seconds_at..],
    );
    let sec_is_numeric = sec.bytes().any(|b| b.is_ascii_digit())
        && sec.bytes().all(|b| b.is_ascii_digit() || b == b'.');
    if !is_digits(deg) || !is_digits(min) || !sec_is_numeric {
        return Err(parse_error(value, "sexagesimal degrees"));
    }

    let deg: f64 = deg
        .parse()
        .map_err(|_| parse_error(value, "sexagesimal degrees"))?;
    let min: f64 = min
        .parse()
        .map_err(|_| parse_error(value, "sexagesimal degrees"))?;
    let sec: f64 = sec
        .parse()
        .map_err(|_| parse_error(value, "sexagesimal degrees"))?;

    Ok(sign * (deg + min / 60.0 + sec / 3600.0))
}

/// Parse a whitespace-padded integer.
pub fn integer(value: &str) -> Result<i64, ConversionError> {
    value
        .trim()
        .parse()
        .map_err(|_| parse_error(value, "integer"))
}

/// Parse a whitespace-padded decimal number.
pub fn float(value: &str) -> Result<f64, ConversionError> {
    let trimmed = value.trim();
    let numeric = trimmed
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'+' | b'-'));
    if !numeric {
        return Err(parse_error(value, "decimal number"));
    }
    trimmed
        .parse()
        .map_err(|_| parse_error(value, "decimal number"))
}

/// Parse a zero/non-zero flag digit.
pub fn flag(value: &str) -> Result<bool, ConversionError> {
    integer(value).map(|v| v != 0)
}

/// Parse an integer that may be the literal `NA` (not available).
pub fn na_or_int(value: &str) -> Result<Option<i64>, ConversionError> {
    if value.trim() == "NA" {
        return Ok(None);
    }
    integer(value).map(Some)
}

/// Parse an integer that may be left blank.
pub fn empty_or_int(value: &str) -> Result<Option<i64>, ConversionError> {
    if value.trim().is_empty() {
        return Ok(None);
    }
    integer(value).map(Some)
}

/// Parse a four digit field with one implied decimal place.
///
/// The first three digits are the integer part and the last digit is tenths,
/// so `"0200"` is 20.0 and `"0020"` is 2.0.
pub fn four_digit_single_decimal(value: &str) -> Result<f64, ConversionError> {
    if value.len() != 4 || !is_digits(value) {
        return Err(parse_error(value, "four digit decimal"));
    }
    let tenths: u16 = value
        .parse()
        .map_err(|_| parse_error(value, "four digit decimal"))?;
    Ok(f64::from(tenths) / 10.0)
}

/// Decode a sign-magnitude elevation sample.
///
/// Returns `None` for the [`NO_DATA`] word. Words with the high bit set are
/// negative, with the magnitude in the low fifteen bits.
///
/// # Examples
///
/// ```
/// use dted::convert::sign_magnitude;
///
/// assert_eq!(sign_magnitude(0x0002), Some(2));
/// assert_eq!(sign_magnitude(0xFFFE), Some(-32766));
/// assert_eq!(sign_magnitude(0xFFFF), None);
/// ```
pub fn sign_magnitude(raw: u16) -> Option<i16> {
    if raw == NO_DATA {
        return None;
    }
    if raw < SIGN_BIT {
        return Some(raw as i16);
    }
    Some(-((raw & !SIGN_BIT) as i16))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_degrees_hemispheres() {
        assert_close(degrees("1001010E").unwrap(), 100.16944444);
        assert_close(degrees("0505959E").unwrap(), 50.99972222);
        assert_close(degrees("1001010W").unwrap(), -100.16944444);
        assert_close(degrees("0505959W").unwrap(), -50.99972222);
        assert_close(degrees("0505959N").unwrap(), 50.99972222);
        assert_close(degrees("0505959S").unwrap(), -50.99972222);
    }

    #[test]
    fn test_degrees_decimal_seconds() {
        assert_close(degrees("424242.42").unwrap(), 42.71178333);
        assert_close(degrees("590000.0N").unwrap(), 59.0);
        assert_close(degrees("0100000.0E").unwrap(), 10.0);
    }

    #[test]
    fn test_degrees_too_short() {
        assert!(matches!(
            degrees("0000N"),
            Err(ConversionError::Domain { .. })
        ));
        assert!(matches!(degrees(""), Err(ConversionError::Domain { .. })));
        assert!(matches!(degrees("1.5"), Err(ConversionError::Domain { .. })));
    }

    #[test]
    fn test_degrees_non_numeric() {
        assert!(matches!(
            degrees("05A5959N"),
            Err(ConversionError::Parse { .. })
        ));
        assert!(matches!(
            degrees("0505959X"),
            Err(ConversionError::Parse { .. })
        ));
    }

    #[test]
    fn test_na_or_int() {
        assert_eq!(na_or_int("NA  "), Ok(None));
        assert_eq!(na_or_int("341"), Ok(Some(341)));
        assert_eq!(na_or_int("341     "), Ok(Some(341)));
        assert!(na_or_int("N/A ").is_err());
    }

    #[test]
    fn test_empty_or_int() {
        assert_eq!(empty_or_int("   "), Ok(None));
        assert_eq!(empty_or_int(""), Ok(None));
        assert_eq!(empty_or_int("1231   "), Ok(Some(1231)));
        assert!(empty_or_int("12a").is_err());
    }

    #[test]
    fn test_four_digit_single_decimal() {
        assert_eq!(four_digit_single_decimal("0200"), Ok(20.0));
        assert_eq!(four_digit_single_decimal("0020"), Ok(2.0));
        assert_eq!(four_digit_single_decimal("0010"), Ok(1.0));
        assert_eq!(four_digit_single_decimal("0305"), Ok(30.5));
        assert!(four_digit_single_decimal("020").is_err());
        assert!(four_digit_single_decimal("02 0").is_err());
    }

    #[test]
    fn test_sign_magnitude() {
        assert_eq!(sign_magnitude(-1i16 as u16), None);
        assert_eq!(sign_magnitude(-2i16 as u16), Some(-32766));
        assert_eq!(sign_magnitude(2), Some(2));
        assert_eq!(sign_magnitude(32767), Some(32767));
        assert_eq!(sign_magnitude(0x8001), Some(-1));
        assert_eq!(sign_magnitude(0x8000), Some(0));
    }

    #[test]
    fn test_scalar_helpers() {
        assert_eq!(integer(" 3601"), Ok(3601));
        assert_eq!(flag("0"), Ok(false));
        assert_eq!(flag("1"), Ok(true));
        assert_eq!(float("0000000.0"), Ok(0.0));
        assert!(float("inf").is_err());
        assert_eq!(text(b"DTED2"), Ok("DTED2"));
        assert_eq!(text(&[0xFF, 0xFE]), Err(ConversionError::Utf8));
    }
}
