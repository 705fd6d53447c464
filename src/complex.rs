use std::{fmt, str::FromStr};

use thiserror::Error;

/// A complex number with real and imaginary parts of type `T`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Complex<T> {
    pub re: T,
    pub im: T,
}

/// Single precision complex number.
pub type Complex64 = Complex<f32>;
/// Double precision complex number.
pub type Complex128 = Complex<f64>;

impl<T> Complex<T> {
    pub fn new(re: T, im: T) -> Self {
        Complex { re, im }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid complex number syntax")]
pub struct ParseComplexError;

impl<T: FromStr> FromStr for Complex<T> {
    type Err = ParseComplexError;

    /// Accepts `re+imi` or `(re+imi)`, with either sign between the parts.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let body = s
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(s);
        let body = body.strip_suffix('i').ok_or(ParseComplexError)?;

        // the imaginary part starts at the last sign that is not an exponent sign
        let bytes = body.as_bytes();
        let split = (1..bytes.len())
            .rev()
            .find(|&i| matches!(bytes[i], b'+' | b'-') && !matches!(bytes[i - 1], b'e' | b'E'))
            .ok_or(ParseComplexError)?;

        let (re, im) = body.split_at(split);
        Ok(Complex {
            re: re.parse().map_err(|_| ParseComplexError)?,
            im: im.parse().map_err(|_| ParseComplexError)?,
        })
    }
}

impl<T: fmt::Display> fmt::Display for Complex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // a negative imaginary part (including -0) carries its own sign
        let im = self.im.to_string();
        if im.starts_with('-') {
            write!(f, "({}{}i)", self.re, im)
        } else {
            write!(f, "({}+{}i)", self.re, im)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1+2i", 1.0, 2.0)]
    #[case("(1+2i)", 1.0, 2.0)]
    #[case("-1.5-0.25i", -1.5, -0.25)]
    #[case("(+3-4i)", 3.0, -4.0)]
    #[case("1e3+2.5E-2i", 1000.0, 0.025)]
    #[case("1e+3-1e-3i", 1000.0, -0.001)]
    fn parses_valid_syntax(#[case] input: &str, #[case] re: f64, #[case] im: f64) {
        assert_eq!(input.parse::<Complex128>(), Ok(Complex::new(re, im)));
    }

    #[rstest]
    #[case("")]
    #[case("i")]
    #[case("1")]
    #[case("2i")]
    #[case("1+i")]
    #[case("(1+2i")]
    #[case("1+2j")]
    #[case("a+bi")]
    fn rejects_invalid_syntax(#[case] input: &str) {
        assert_eq!(input.parse::<Complex64>(), Err(ParseComplexError));
    }

    #[test]
    fn displays_with_parentheses() {
        assert_eq!(Complex::new(1.5f64, 2.0).to_string(), "(1.5+2i)");
        assert_eq!(Complex::new(0.0f32, -3.0).to_string(), "(0-3i)");
        assert_eq!(Complex::new(1.0f64, -0.0).to_string(), "(1-0i)");
        assert_eq!(Complex::new(1.0f64, f64::NAN).to_string(), "(1+NaNi)");
    }

    #[rstest]
    #[case(Complex::new(1.0, -0.0))]
    #[case(Complex::new(-0.0, 0.0))]
    #[case(Complex::new(-2.5, 1e-7))]
    #[case(Complex::new(f64::INFINITY, f64::NEG_INFINITY))]
    fn display_parses_back(#[case] value: Complex128) {
        let parsed: Complex128 = value.to_string().parse().unwrap();
        assert_eq!(parsed, value);
        assert_eq!(parsed.re.is_sign_negative(), value.re.is_sign_negative());
        assert_eq!(parsed.im.is_sign_negative(), value.im.is_sign_negative());
    }

    #[test]
    fn nan_parts_parse_back() {
        let parsed: Complex128 = Complex::new(f64::NAN, f64::NAN).to_string().parse().unwrap();
        assert!(parsed.re.is_nan());
        assert!(parsed.im.is_nan());
    }
}
