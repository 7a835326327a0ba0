use bigdecimal::BigDecimal;
use log::warn;
use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{char as char_func, digit0, digit1, one_of};
use nom::combinator::{all_consuming, opt, recognize};
use nom::sequence::{pair, tuple};
use nom::IResult;
use num_bigint::BigInt;
use oxsdatatypes::{Double, Float};
use std::str::FromStr;

// The host float parser also takes "inf", "infinity" and "nan" in any case, and
// the decimal grammar has no exponent, so every lexical form is checked here first.

pub fn parse_integer(lexical: &str) -> Option<BigInt> {
    all_consuming(integer_lexical)(lexical).ok()?;
    match BigInt::from_str(lexical) {
        Ok(i) => Some(i),
        Err(e) => {
            warn!("xsd:integer {lexical} could not be read: {e}");
            None
        }
    }
}

pub fn parse_decimal(lexical: &str) -> Option<BigDecimal> {
    all_consuming(decimal_lexical)(lexical).ok()?;
    match BigDecimal::from_str(lexical) {
        Ok(d) => Some(d),
        Err(e) => {
            warn!("xsd:decimal {lexical} could not be read: {e}");
            None
        }
    }
}

pub fn parse_float(lexical: &str) -> Option<Float> {
    all_consuming(floating_point_lexical)(lexical).ok()?;
    let f = match lexical {
        "INF" | "+INF" => f32::INFINITY,
        "-INF" => f32::NEG_INFINITY,
        "NaN" => f32::NAN,
        _ => f32::from_str(lexical).ok()?,
    };
    Some(Float::from(f))
}

pub fn parse_double(lexical: &str) -> Option<Double> {
    all_consuming(floating_point_lexical)(lexical).ok()?;
    let d = match lexical {
        "INF" | "+INF" => f64::INFINITY,
        "-INF" => f64::NEG_INFINITY,
        "NaN" => f64::NAN,
        _ => f64::from_str(lexical).ok()?,
    };
    Some(Double::from(d))
}

fn sign(s: &str) -> IResult<&str, Option<char>> {
    opt(one_of("+-"))(s)
}

fn integer_lexical(i: &str) -> IResult<&str, &str> {
    recognize(pair(sign, digit1))(i)
}

fn unsigned_decimal(d: &str) -> IResult<&str, &str> {
    alt((
        recognize(pair(digit1, opt(pair(char_func('.'), digit0)))),
        recognize(pair(char_func('.'), digit1)),
    ))(d)
}

fn decimal_lexical(d: &str) -> IResult<&str, &str> {
    recognize(pair(sign, unsigned_decimal))(d)
}

fn exponent(e: &str) -> IResult<&str, &str> {
    recognize(tuple((one_of("eE"), sign, digit1)))(e)
}

fn floating_point_lexical(f: &str) -> IResult<&str, &str> {
    alt((
        recognize(tuple((sign, unsigned_decimal, opt(exponent)))),
        recognize(pair(sign, tag("INF"))),
        tag("NaN"),
    ))(f)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_grammar() {
        assert_eq!(parse_integer("11"), Some(BigInt::from(11)));
        assert_eq!(parse_integer("+011"), Some(BigInt::from(11)));
        assert_eq!(parse_integer("-0"), Some(BigInt::from(0)));
        for invalid in ["", "+", "1.0", "1e3", " 1", "1 ", "apple", "0x10", "1_000"] {
            assert_eq!(parse_integer(invalid), None, "{invalid}");
        }
    }

    #[test]
    fn test_integer_beyond_64_bits() {
        assert_eq!(
            parse_integer("18446744073709551615"),
            Some(BigInt::from(u64::MAX))
        );
        assert_eq!(
            parse_integer("-99999999999999999999"),
            BigInt::from_str("-99999999999999999999").ok()
        );
    }

    #[test]
    fn test_decimal_grammar() {
        assert_eq!(parse_decimal("1.00"), Some(BigDecimal::from(1)));
        assert_eq!(parse_decimal("-.5"), BigDecimal::from_str("-0.5").ok());
        assert_eq!(parse_decimal("+.5"), BigDecimal::from_str("0.5").ok());
        assert_eq!(parse_decimal("5."), Some(BigDecimal::from(5)));
        for invalid in ["", ".", "-", "1e3", "1.0E1", "INF", "NaN", "1.2.3"] {
            assert_eq!(parse_decimal(invalid), None, "{invalid}");
        }
    }

    #[test]
    fn test_decimal_keeps_every_digit() {
        let pi = parse_decimal("3.14159265358979323846").unwrap();
        assert_eq!(
            pi.as_bigint_and_exponent(),
            (BigInt::from_str("314159265358979323846").unwrap(), 20)
        );
        assert_ne!(pi, BigDecimal::from_str("3.1415926535897932384").unwrap());
        assert!(parse_decimal("123456789012345678901234567890.5").is_some());
    }

    #[test]
    fn test_floating_point_grammar() {
        assert_eq!(parse_double("1e3"), Some(Double::from(1000.0_f64)));
        assert_eq!(parse_double("-1.5E-1"), Some(Double::from(-0.15_f64)));
        assert_eq!(parse_double(".5"), Some(Double::from(0.5_f64)));
        assert_eq!(parse_float("11"), Some(Float::from(11.0_f32)));
        assert_eq!(parse_double("INF"), Some(Double::from(f64::INFINITY)));
        assert_eq!(parse_double("+INF"), Some(Double::from(f64::INFINITY)));
        assert_eq!(parse_float("-INF"), Some(Float::from(f32::NEG_INFINITY)));
        assert!(parse_double("NaN").is_some_and(|x| f64::from(x).is_nan()));
        for invalid in ["", "inf", "Infinity", "nan", "-NaN", "1e", "e3", "1.0 ", "apple"] {
            assert_eq!(parse_double(invalid), None, "{invalid}");
            assert_eq!(parse_float(invalid), None, "{invalid}");
        }
    }

    #[test]
    fn test_float_overflow_is_infinite() {
        assert_eq!(parse_float("1e50"), Some(Float::from(f32::INFINITY)));
    }
}
