use std::num::ParseIntError;
use std::str::FromStr;
use thiserror::Error;

/// A `bool` which also parses the short forms `1`, `0`, `t` and `f`.
///
/// Accepts `1`, `t`, `T`, `TRUE`, `true`, `True`, `0`, `f`, `F`, `FALSE`, `false` and `False`.
///
/// ### Example
/// ```
/// # use cmdln_params as cmdln;
/// use cmdln::{Boolean, List};
///
/// let mut switches: Vec<Boolean> = Vec::default();
/// List::new(&mut switches).set(&["true", "1", "0", "F"]).unwrap();
/// assert_eq!(switches, vec![Boolean(true), Boolean(true), Boolean(false), Boolean(false)]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Boolean(pub bool);

/// An integer which also parses the radix prefixes `0x`, `0o`, `0b` and a leading `0` (octal).
///
/// Underscores may separate digits (ex: `0x_ff`, `1_000`).
///
/// ### Example
/// ```
/// # use cmdln_params as cmdln;
/// use cmdln::{Integer, Scalar};
///
/// let mut mask: Integer<u32> = Integer::default();
/// Scalar::new(&mut mask).set("0xff").unwrap();
/// assert_eq!(mask.0, 255);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Integer<T>(pub T);

/// An error parsing a [`Boolean`] or an [`Integer`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValueError {
    /// The input is not a boolean.
    #[error("invalid boolean '{0}'")]
    Boolean(String),

    /// The input is not well formed for an integer.
    #[error("invalid integer syntax '{0}'")]
    Syntax(String),

    /// The digits do not form an integer of the target width.
    #[error("invalid integer '{token}': {source}")]
    Integer {
        /// The complete input.
        token: String,
        /// The underlying error.
        #[source]
        source: ParseIntError,
    },
}

impl FromStr for Boolean {
    type Err = ValueError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(Boolean(true)),
            "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(Boolean(false)),
            _ => Err(ValueError::Boolean(token.to_string())),
        }
    }
}

impl std::fmt::Display for Boolean {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Boolean> for bool {
    fn from(value: Boolean) -> Self {
        value.0
    }
}

/// Primitive integers which [`Integer`] can parse.
pub trait RadixInteger: Sized {
    /// Whether the type accepts a sign.
    const SIGNED: bool;

    /// Parse `digits` (with an optional leading `-`) in `radix`.
    fn from_str_radix(digits: &str, radix: u32) -> Result<Self, ParseIntError>;
}

macro_rules! radix_integer {
    ($signed:literal, $($t:ty),*) => {
        $(
            impl RadixInteger for $t {
                const SIGNED: bool = $signed;

                fn from_str_radix(digits: &str, radix: u32) -> Result<Self, ParseIntError> {
                    <$t>::from_str_radix(digits, radix)
                }
            }
        )*
    };
}

radix_integer!(true, i8, i16, i32, i64, i128, isize);
radix_integer!(false, u8, u16, u32, u64, u128, usize);

// Split off the radix prefix, returning the radix and whether a prefix was present.
fn radix(magnitude: &str) -> (u32, &str, bool) {
    let bytes = magnitude.as_bytes();

    if bytes.len() < 2 || bytes[0] != b'0' {
        return (10, magnitude, false);
    }

    match bytes[1] {
        b'x' | b'X' => (16, &magnitude[2..], true),
        b'o' | b'O' => (8, &magnitude[2..], true),
        b'b' | b'B' => (2, &magnitude[2..], true),
        _ => (8, &magnitude[1..], true),
    }
}

// Each underscore must follow a digit (or the prefix) and precede a digit.
fn underscores_ok(digits: &str, prefixed: bool) -> bool {
    let mut after_digit = prefixed;
    let mut chars = digits.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '_' {
            if !after_digit || matches!(chars.peek(), None | Some('_')) {
                return false;
            }

            after_digit = false;
        } else {
            after_digit = true;
        }
    }

    true
}

impl<T: RadixInteger> FromStr for Integer<T> {
    type Err = ValueError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let syntax = || ValueError::Syntax(token.to_string());
        let (negative, magnitude) = match token.as_bytes().first() {
            Some(b'-') | Some(b'+') if !T::SIGNED => return Err(syntax()),
            Some(b'-') => (true, &token[1..]),
            Some(b'+') => (false, &token[1..]),
            _ => (false, token),
        };

        let (radix, digits, prefixed) = radix(magnitude);

        if !underscores_ok(digits, prefixed) {
            return Err(syntax());
        }

        let digits = digits.replace('_', "");

        if digits.is_empty() || digits.starts_with(|c| c == '+' || c == '-') {
            return Err(syntax());
        }

        let signed = if negative {
            format!("-{digits}")
        } else {
            digits
        };

        T::from_str_radix(&signed, radix)
            .map(Integer)
            .map_err(|source| ValueError::Integer {
                token: token.to_string(),
                source,
            })
    }
}

impl<T: std::fmt::Display> std::fmt::Display for Integer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1", true)]
    #[case("t", true)]
    #[case("T", true)]
    #[case("TRUE", true)]
    #[case("true", true)]
    #[case("True", true)]
    #[case("0", false)]
    #[case("f", false)]
    #[case("F", false)]
    #[case("FALSE", false)]
    #[case("false", false)]
    #[case("False", false)]
    fn boolean(#[case] token: &str, #[case] expected: bool) {
        assert_eq!(Boolean::from_str(token).unwrap(), Boolean(expected));
    }

    #[rstest]
    #[case("")]
    #[case("yes")]
    #[case("tRUE")]
    #[case("2")]
    fn boolean_invalid(#[case] token: &str) {
        assert_eq!(
            Boolean::from_str(token).unwrap_err(),
            ValueError::Boolean(token.to_string())
        );
    }

    #[rstest]
    #[case("0", 0)]
    #[case("123", 123)]
    #[case("-654", -654)]
    #[case("+7", 7)]
    #[case("0x10", 16)]
    #[case("0X1f", 31)]
    #[case("-0x10", -16)]
    #[case("0o17", 15)]
    #[case("017", 15)]
    #[case("0b101", 5)]
    #[case("1_000", 1_000)]
    #[case("0x_ff", 255)]
    #[case("0_7", 7)]
    #[case("-9223372036854775808", i64::MIN)]
    fn integer_i64(#[case] token: &str, #[case] expected: i64) {
        assert_eq!(Integer::<i64>::from_str(token).unwrap(), Integer(expected));
    }

    #[rstest]
    #[case("")]
    #[case("-")]
    #[case("0x")]
    #[case("--1")]
    #[case("-+1")]
    #[case("1__0")]
    #[case("_1")]
    #[case("1_")]
    #[case("abc")]
    fn integer_syntax(#[case] token: &str) {
        assert_matches!(
            Integer::<i64>::from_str(token),
            Err(ValueError::Syntax(_)) | Err(ValueError::Integer { .. })
        );
    }

    #[rstest]
    #[case("089")]
    #[case("0b102")]
    #[case("9223372036854775808")]
    fn integer_digits(#[case] token: &str) {
        assert_matches!(
            Integer::<i64>::from_str(token),
            Err(ValueError::Integer { token: t, .. }) if t == token
        );
    }

    #[rstest]
    #[case("0x10", 16)]
    #[case("18446744073709551615", u64::MAX)]
    #[case("0b1", 1)]
    fn integer_u64(#[case] token: &str, #[case] expected: u64) {
        assert_eq!(Integer::<u64>::from_str(token).unwrap(), Integer(expected));
    }

    #[rstest]
    #[case("-1")]
    #[case("+1")]
    fn integer_unsigned_sign(#[case] token: &str) {
        assert_eq!(
            Integer::<u64>::from_str(token).unwrap_err(),
            ValueError::Syntax(token.to_string())
        );
    }

    #[test]
    fn display() {
        assert_eq!(Boolean(true).to_string(), "true");
        assert_eq!(Integer(-16i64).to_string(), "-16");
        assert_eq!(Integer(usize::MAX).to_string(), usize::MAX.to_string());
    }
}
