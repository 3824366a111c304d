//! Parses toolkit version segments, for example 0b2pre or 5+
//!
//! A segment is read as four consecutive runs: digits and minus signs,
//! anything else, digits and minus signs again, then the remainder. Every
//! run may be empty, so parsing never fails.
use super::common::VResult;
use nom::{
    bytes::complete::take_while,
    character::complete::{char, digit1},
    combinator::{opt, rest},
    sequence::{pair, tuple},
};

use crate::models::version::{PartNumber, VersionPart};

pub fn version_part(input: &str) -> VersionPart {
    if input == "*" {
        return VersionPart::wildcard();
    }

    // All four runs accept empty input, there is no failing branch
    let Ok((_, (num_a, str_b, num_c, extra_d))) = segment(input) else {
        return VersionPart::default();
    };

    let mut part = VersionPart {
        num_a: run_number(num_a),
        str_b: str_b.to_string(),
        num_c: run_number(num_c),
        extra_d: extra_d.to_string(),
    };

    // 1.0+ is shorthand for 1.1pre
    if part.str_b == "+" {
        part.num_a = part.num_a.increment();
        part.str_b = "pre".to_string();
    }

    part
}

fn is_numeric_char(c: char) -> bool {
    c.is_ascii_digit() || c == '-'
}

fn numeric_run(input: &str) -> VResult<&str> {
    take_while(is_numeric_char)(input)
}

fn qualifier_run(input: &str) -> VResult<&str> {
    take_while(|c: char| !is_numeric_char(c))(input)
}

fn segment(input: &str) -> VResult<(&str, &str, &str, &str)> {
    tuple((numeric_run, qualifier_run, numeric_run, rest))(input)
}

/// An optional minus followed by digits, stopping at the first non-digit.
/// Overlong runs saturate rather than wrap.
fn leading_int(input: &str) -> VResult<i64> {
    let (rest, (sign, digits)) = pair(opt(char('-')), digit1)(input)?;
    let negative = sign.is_some();

    let n = digits.bytes().fold(0i64, |acc, d| {
        let digit = i64::from(d - b'0');
        if negative {
            acc.saturating_mul(10).saturating_sub(digit)
        } else {
            acc.saturating_mul(10).saturating_add(digit)
        }
    });

    Ok((rest, n))
}

/// Runs which don't start with a number, like "" or "--1", count as zero
fn run_number(run: &str) -> PartNumber {
    match leading_int(run) {
        Ok((_, n)) => PartNumber::Finite(n),
        Err(_) => PartNumber::ZERO,
    }
}
