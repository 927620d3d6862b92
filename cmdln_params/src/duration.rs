use std::str::FromStr;
use thiserror::Error;

const NANOSECOND: u64 = 1;
const MICROSECOND: u64 = 1_000 * NANOSECOND;
const MILLISECOND: u64 = 1_000 * MICROSECOND;
const SECOND: u64 = 1_000 * MILLISECOND;
const MINUTE: u64 = 60 * SECOND;
const HOUR: u64 = 60 * MINUTE;

// Fraction digits beyond this cannot affect a nanosecond count.
const MAXIMUM_FRACTION_DIGITS: usize = 18;

/// A signed span of time, with nanosecond precision.
///
/// Parses from (and displays as) a sequence of decimal numbers with unit suffixes, such as `300ms`, `-1.5h` or
/// `2h45m`.
/// Valid units are `ns`, `us` (or `µs`), `ms`, `s`, `m` and `h`.
///
/// ### Example
/// ```
/// # use cmdln_params as cmdln;
/// use cmdln::Duration;
///
/// let duration: Duration = "1h30m".parse().unwrap();
/// assert_eq!(duration, Duration::from_secs(90 * 60));
/// assert_eq!(duration.to_string(), "1h30m0s");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Duration(i64);

impl Duration {
    /// The empty span.
    pub const ZERO: Duration = Duration(0);

    /// A span of `nanos` nanoseconds.
    pub const fn from_nanos(nanos: i64) -> Self {
        Duration(nanos)
    }

    /// A span of `millis` milliseconds, saturating at the bounds.
    pub const fn from_millis(millis: i64) -> Self {
        Duration(millis.saturating_mul(MILLISECOND as i64))
    }

    /// A span of `secs` seconds, saturating at the bounds.
    pub const fn from_secs(secs: i64) -> Self {
        Duration(secs.saturating_mul(SECOND as i64))
    }

    /// The number of nanoseconds in this span.
    pub const fn as_nanos(&self) -> i64 {
        self.0
    }

    /// Whether this span is negative.
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Convert to a [`std::time::Duration`], if this span is not negative.
    pub fn to_std(&self) -> Option<std::time::Duration> {
        u64::try_from(self.0)
            .ok()
            .map(std::time::Duration::from_nanos)
    }
}

/// An error parsing a [`Duration`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DurationError {
    /// The input is not a duration.
    #[error("invalid duration '{0}'")]
    Invalid(String),

    /// A number is not followed by a unit.
    #[error("missing unit in duration '{0}'")]
    MissingUnit(String),

    /// A number is followed by an unrecognized unit.
    #[error("unknown unit '{unit}' in duration '{input}'")]
    UnknownUnit {
        /// The unrecognized unit.
        unit: String,
        /// The complete input.
        input: String,
    },

    /// The duration does not fit in 64 bits of nanoseconds.
    #[error("duration '{0}' out of range")]
    Overflow(String),
}

fn unit_nanos(unit: &str) -> Option<u64> {
    match unit {
        "ns" => Some(NANOSECOND),
        "us" | "µs" | "μs" => Some(MICROSECOND),
        "ms" => Some(MILLISECOND),
        "s" => Some(SECOND),
        "m" => Some(MINUTE),
        "h" => Some(HOUR),
        _ => None,
    }
}

fn split_digits(text: &str) -> (&str, &str) {
    let end = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    text.split_at(end)
}

impl FromStr for Duration {
    type Err = DurationError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let (negative, mut rest) = if let Some(rest) = input.strip_prefix('-') {
            (true, rest)
        } else if let Some(rest) = input.strip_prefix('+') {
            (false, rest)
        } else {
            (false, input)
        };

        if rest == "0" {
            return Ok(Duration::ZERO);
        }

        if rest.is_empty() {
            return Err(DurationError::Invalid(input.to_string()));
        }

        let overflow = || DurationError::Overflow(input.to_string());
        // One past i64::MAX, reachable only by a negative duration.
        let limit = i64::MAX as u128 + 1;
        let mut total: u128 = 0;

        while !rest.is_empty() {
            let (whole, tail) = split_digits(rest);
            let (fraction, tail) = match tail.strip_prefix('.') {
                Some(tail) => split_digits(tail),
                None => ("", tail),
            };

            if whole.is_empty() && fraction.is_empty() {
                return Err(DurationError::Invalid(input.to_string()));
            }

            let unit_end = tail
                .find(|c: char| c == '.' || c.is_ascii_digit())
                .unwrap_or(tail.len());
            let (unit, tail) = tail.split_at(unit_end);

            if unit.is_empty() {
                return Err(DurationError::MissingUnit(input.to_string()));
            }

            let scale = unit_nanos(unit).ok_or_else(|| DurationError::UnknownUnit {
                unit: unit.to_string(),
                input: input.to_string(),
            })? as u128;

            let whole: u128 = if whole.is_empty() {
                0
            } else {
                whole.parse().map_err(|_| overflow())?
            };
            let mut nanos = whole.checked_mul(scale).ok_or_else(overflow)?;

            if !fraction.is_empty() {
                let digits = &fraction[..std::cmp::min(fraction.len(), MAXIMUM_FRACTION_DIGITS)];
                let numerator: u128 = digits.parse().map_err(|_| overflow())?;
                let denominator = 10u128.pow(digits.len() as u32);
                nanos += numerator * scale / denominator;
            }

            total = total.checked_add(nanos).ok_or_else(overflow)?;

            if total > limit {
                return Err(overflow());
            }

            rest = tail;
        }

        if negative {
            Ok(Duration((-(total as i128)) as i64))
        } else if total < limit {
            Ok(Duration(total as i64))
        } else {
            Err(overflow())
        }
    }
}

// Split `value` into its whole part and its decimal fraction (without trailing zeros) at `precision` digits.
fn fraction(value: u64, precision: u32) -> (u64, String) {
    let scale = 10u64.pow(precision);
    let remainder = value % scale;

    if remainder == 0 {
        return (value / scale, String::default());
    }

    let digits = format!("{:0width$}", remainder, width = precision as usize);
    (value / scale, format!(".{}", digits.trim_end_matches('0')))
}

impl std::fmt::Display for Duration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        let nanos = self.0.unsigned_abs();

        if nanos == 0 {
            write!(f, "0s")
        } else if nanos < MICROSECOND {
            write!(f, "{sign}{nanos}ns")
        } else if nanos < MILLISECOND {
            let (whole, fraction) = fraction(nanos, 3);
            write!(f, "{sign}{whole}{fraction}µs")
        } else if nanos < SECOND {
            let (whole, fraction) = fraction(nanos, 6);
            write!(f, "{sign}{whole}{fraction}ms")
        } else {
            let (seconds, fraction) = fraction(nanos, 9);
            let hours = seconds / 3600;
            let minutes = (seconds / 60) % 60;
            let seconds = seconds % 60;

            if hours > 0 {
                write!(f, "{sign}{hours}h{minutes}m{seconds}{fraction}s")
            } else if minutes > 0 {
                write!(f, "{sign}{minutes}m{seconds}{fraction}s")
            } else {
                write!(f, "{sign}{seconds}{fraction}s")
            }
        }
    }
}
