//! # Duration Parsing
//!
//! Parses and renders Go-style duration strings ("1h30m", "1.5h", "300ms").
//!
//! Rotation intervals are written by users and by other controllers in this
//! format, so parsing accepts exactly what Go's `time.ParseDuration` accepts and
//! rendering produces what Go's `Duration.String` produces (e.g. "168h0m0s").

use chrono::TimeDelta;
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

const NANOS_PER_MICRO: u128 = 1_000;
const NANOS_PER_MILLI: u128 = 1_000_000;
const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Fraction digits beyond this cannot change the result at nanosecond precision
const MAX_FRACTION_DIGITS: usize = 18;

// Whole-string shape: optional sign, then one or more <number><unit> components
static DURATION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:(?:\d+\.?\d*|\.\d+)(?:ns|us|µs|μs|ms|s|m|h))+$")
        .expect("duration regex is valid")
});

// A single component; "ms" must be tried before "m"
static COMPONENT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?P<int>\d*)(?:\.(?P<frac>\d*))?(?P<unit>ns|us|µs|μs|ms|s|m|h)")
        .expect("duration component regex is valid")
});

/// Why a duration string could not be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DurationParseError {
    #[error("duration string cannot be empty")]
    Empty,
    #[error("invalid duration {0:?}, expected e.g. \"24h\", \"1h30m\" or \"90s\" (units: ns, us, ms, s, m, h)")]
    Invalid(String),
    #[error("duration {0:?} is out of range")]
    Overflow(String),
}

/// Parse a Go-style duration string
///
/// Accepts an optional sign followed by one or more `<number><unit>` pairs,
/// where the number may carry a decimal fraction. A bare "0" is accepted
/// without a unit. Negative values parse; rejecting them is left to the caller.
///
/// # Errors
///
/// Returns [`DurationParseError`] when the string is empty, malformed, or
/// exceeds the range of a signed 64-bit nanosecond count.
pub fn parse_duration(input: &str) -> Result<TimeDelta, DurationParseError> {
    if input.is_empty() {
        return Err(DurationParseError::Empty);
    }

    let (negative, body) = match input.as_bytes()[0] {
        b'-' => (true, &input[1..]),
        b'+' => (false, &input[1..]),
        _ => (false, input),
    };

    if body == "0" {
        return Ok(TimeDelta::zero());
    }

    if !DURATION_REGEX.is_match(input) {
        return Err(DurationParseError::Invalid(input.to_string()));
    }

    let mut total: u128 = 0;
    for captures in COMPONENT_REGEX.captures_iter(body) {
        let int_digits = captures.name("int").map_or("", |m| m.as_str());
        let frac_digits = captures.name("frac").map_or("", |m| m.as_str());
        let unit = captures
            .name("unit")
            .map(|m| unit_nanos(m.as_str()))
            .ok_or_else(|| DurationParseError::Invalid(input.to_string()))?;

        let whole = if int_digits.is_empty() {
            0
        } else {
            int_digits
                .parse::<u64>()
                .map_err(|_| DurationParseError::Overflow(input.to_string()))?
        };
        total += u128::from(whole) * unit;

        if !frac_digits.is_empty() {
            let digits = &frac_digits[..frac_digits.len().min(MAX_FRACTION_DIGITS)];
            let fraction: u64 = digits
                .parse()
                .map_err(|_| DurationParseError::Invalid(input.to_string()))?;
            let scale = 10u128.pow(u32::try_from(digits.len()).unwrap_or(u32::MAX));
            total += u128::from(fraction) * unit / scale;
        }

        // i64::MIN has no positive counterpart, so the negative side gets one more
        let max = u128::from(i64::MAX.unsigned_abs());
        let limit = if negative { max + 1 } else { max };
        if total > limit {
            return Err(DurationParseError::Overflow(input.to_string()));
        }
    }

    let magnitude = i128::try_from(total)
        .map_err(|_| DurationParseError::Overflow(input.to_string()))?;
    let signed = if negative { -magnitude } else { magnitude };
    let nanos =
        i64::try_from(signed).map_err(|_| DurationParseError::Overflow(input.to_string()))?;

    Ok(TimeDelta::nanoseconds(nanos))
}

fn unit_nanos(unit: &str) -> u128 {
    match unit {
        "ns" => 1,
        "us" | "µs" | "μs" => NANOS_PER_MICRO,
        "ms" => NANOS_PER_MILLI,
        "s" => NANOS_PER_SEC,
        "m" => 60 * NANOS_PER_SEC,
        // "h" is the only remaining unit the component regex can produce
        _ => 3600 * NANOS_PER_SEC,
    }
}

/// Render a duration the way Go's `Duration.String` does
///
/// Zero is "0s". Values under one second use the largest fitting sub-second
/// unit ("1.5ms", "250ns"). Larger values use hours, minutes and seconds,
/// omitting only leading zero units ("1h0m0s", "2m30s", "1.5s").
#[must_use]
pub fn format_duration(duration: TimeDelta) -> String {
    // num_seconds and subsec_nanos always share the sign of the duration
    let magnitude = u128::from(duration.num_seconds().unsigned_abs()) * NANOS_PER_SEC
        + u128::from(duration.subsec_nanos().unsigned_abs());

    if magnitude == 0 {
        return "0s".to_string();
    }

    let body = if magnitude < NANOS_PER_SEC {
        if magnitude < NANOS_PER_MICRO {
            format!("{magnitude}ns")
        } else if magnitude < NANOS_PER_MILLI {
            let (whole, fraction) = split_fraction(magnitude, 3);
            format!("{whole}{fraction}µs")
        } else {
            let (whole, fraction) = split_fraction(magnitude, 6);
            format!("{whole}{fraction}ms")
        }
    } else {
        let (total_secs, fraction) = split_fraction(magnitude, 9);
        let secs = total_secs % 60;
        let total_mins = total_secs / 60;
        if total_mins == 0 {
            format!("{secs}{fraction}s")
        } else {
            let mins = total_mins % 60;
            let hours = total_mins / 60;
            if hours == 0 {
                format!("{mins}m{secs}{fraction}s")
            } else {
                format!("{hours}h{mins}m{secs}{fraction}s")
            }
        }
    };

    if duration < TimeDelta::zero() {
        format!("-{body}")
    } else {
        body
    }
}

/// Split `value` at `precision` decimal digits, returning the whole part and
/// the fraction as ".ddd" with trailing zeros removed (empty when zero)
fn split_fraction(value: u128, precision: u32) -> (u128, String) {
    let scale = 10u128.pow(precision);
    let whole = value / scale;
    let remainder = value % scale;
    if remainder == 0 {
        return (whole, String::new());
    }
    let digits = format!("{remainder:0width$}", width = precision as usize);
    (whole, format!(".{}", digits.trim_end_matches('0')))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_duration_single_units() {
        assert_eq!(parse_duration("1h").unwrap(), TimeDelta::hours(1));
        assert_eq!(parse_duration("30m").unwrap(), TimeDelta::minutes(30));
        assert_eq!(parse_duration("45s").unwrap(), TimeDelta::seconds(45));
        assert_eq!(parse_duration("300ms").unwrap(), TimeDelta::milliseconds(300));
        assert_eq!(parse_duration("2us").unwrap(), TimeDelta::microseconds(2));
        assert_eq!(parse_duration("2µs").unwrap(), TimeDelta::microseconds(2));
        assert_eq!(parse_duration("7ns").unwrap(), TimeDelta::nanoseconds(7));
    }

    #[test]
    fn test_parse_duration_compound_and_fractional() {
        assert_eq!(parse_duration("1h30m").unwrap(), TimeDelta::minutes(90));
        assert_eq!(parse_duration("168h0m0s").unwrap(), TimeDelta::hours(168));
        assert_eq!(parse_duration("1.5h").unwrap(), TimeDelta::minutes(90));
        assert_eq!(parse_duration(".5s").unwrap(), TimeDelta::milliseconds(500));
        assert_eq!(parse_duration("5.s").unwrap(), TimeDelta::seconds(5));
        assert_eq!(parse_duration("1m1.5s").unwrap(), TimeDelta::milliseconds(61_500));
    }

    #[test]
    fn test_parse_duration_signs_and_zero() {
        assert_eq!(parse_duration("0").unwrap(), TimeDelta::zero());
        assert_eq!(parse_duration("-0").unwrap(), TimeDelta::zero());
        assert_eq!(parse_duration("0s").unwrap(), TimeDelta::zero());
        assert_eq!(parse_duration("+2h").unwrap(), TimeDelta::hours(2));
        assert_eq!(parse_duration("-2h").unwrap(), TimeDelta::hours(-2));
    }

    #[test]
    fn test_parse_duration_invalid() {
        assert_eq!(parse_duration(""), Err(DurationParseError::Empty));

        let invalid = ["bad", "1", "00", "1d", "h", ".", ".h", "1h ", " 1h", "1 h", "--1h", "1hh"];
        for input in invalid {
            assert_eq!(
                parse_duration(input),
                Err(DurationParseError::Invalid(input.to_string())),
                "'{input}' should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_duration_overflow() {
        assert!(matches!(
            parse_duration("9999999999999999999999h"),
            Err(DurationParseError::Overflow(_))
        ));
        assert!(matches!(
            parse_duration("2562048h"),
            Err(DurationParseError::Overflow(_))
        ));
        // Largest representable value still parses
        assert_eq!(
            parse_duration("9223372036854775807ns").unwrap(),
            TimeDelta::nanoseconds(i64::MAX)
        );
        assert_eq!(
            parse_duration("-9223372036854775808ns").unwrap(),
            TimeDelta::nanoseconds(i64::MIN)
        );
    }

    #[test]
    fn test_format_duration_matches_go() {
        assert_eq!(format_duration(TimeDelta::zero()), "0s");
        assert_eq!(format_duration(TimeDelta::hours(168)), "168h0m0s");
        assert_eq!(format_duration(TimeDelta::hours(8)), "8h0m0s");
        assert_eq!(format_duration(TimeDelta::seconds(150)), "2m30s");
        assert_eq!(format_duration(TimeDelta::milliseconds(1500)), "1.5s");
        assert_eq!(format_duration(TimeDelta::microseconds(1500)), "1.5ms");
        assert_eq!(format_duration(TimeDelta::nanoseconds(1500)), "1.5µs");
        assert_eq!(format_duration(TimeDelta::nanoseconds(250)), "250ns");
        assert_eq!(format_duration(TimeDelta::hours(-1)), "-1h0m0s");
    }

    #[test]
    fn test_format_then_parse_is_stable() {
        for input in ["1h30m", "90s", "1.5h", "8h", "250ms"] {
            let parsed = parse_duration(input).unwrap();
            assert_eq!(parse_duration(&format_duration(parsed)).unwrap(), parsed);
        }
    }
}
