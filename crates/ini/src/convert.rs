//! String-to-value conversion for the typed lookups.

use std::num::IntErrorKind;

use crate::error::{Error, Result};

const INT: &str = "an integer";
const UINT: &str = "an unsigned integer";
const FLOAT: &str = "a float";
const BOOL: &str = "a bool";

/// Splits an optional sign and a conventional base prefix (`0x`, `0o`,
/// `0b`) off a trimmed literal.
fn int_parts(literal: &str) -> (bool, u32, &str) {
    let (negative, rest) = match literal.as_bytes().first() {
        Some(b'-') => (true, &literal[1..]),
        Some(b'+') => (false, &literal[1..]),
        _ => (false, literal),
    };
    match rest.get(..2) {
        Some("0x") | Some("0X") => (negative, 16, &rest[2..]),
        Some("0o") | Some("0O") => (negative, 8, &rest[2..]),
        Some("0b") | Some("0B") => (negative, 2, &rest[2..]),
        _ => (negative, 10, rest),
    }
}

pub(crate) fn parse_i64(value: &str) -> Result<i64> {
    let literal = value.trim();
    let (negative, radix, digits) = int_parts(literal);
    let magnitude = u64::from_str_radix(digits, radix).map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow if negative => too_small(literal, INT),
        IntErrorKind::PosOverflow => too_large(literal, INT),
        _ => unconvertible(literal, INT),
    })?;
    if negative {
        if magnitude > i64::MAX as u64 + 1 {
            return Err(too_small(literal, INT));
        }
        // magnitude == 2^63 maps exactly to i64::MIN
        Ok((magnitude as i64).wrapping_neg())
    } else {
        if magnitude > i64::MAX as u64 {
            return Err(too_large(literal, INT));
        }
        Ok(magnitude as i64)
    }
}

pub(crate) fn parse_u64(value: &str) -> Result<u64> {
    let literal = value.trim();
    let (negative, radix, digits) = int_parts(literal);
    let magnitude = u64::from_str_radix(digits, radix).map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow => too_large(literal, UINT),
        _ => unconvertible(literal, UINT),
    })?;
    if negative && magnitude != 0 {
        return Err(too_small(literal, UINT));
    }
    Ok(magnitude)
}

pub(crate) fn parse_f64(value: &str) -> Result<f64> {
    let literal = value.trim();
    let parsed: f64 = literal
        .parse()
        .map_err(|_| unconvertible(literal, FLOAT))?;
    if parsed.is_infinite() && !is_infinity_literal(literal) {
        if parsed.is_sign_positive() {
            return Err(too_large(literal, FLOAT));
        }
        return Err(too_small(literal, FLOAT));
    }
    Ok(parsed)
}

fn is_infinity_literal(literal: &str) -> bool {
    let body = literal.trim_start_matches(['+', '-']);
    body.eq_ignore_ascii_case("inf") || body.eq_ignore_ascii_case("infinity")
}

/// Numeric truthiness first (any integer: nonzero is true), then the
/// literals `true`/`false`. Literal matching ignores ASCII case no matter
/// the document's case option.
pub(crate) fn parse_bool(value: &str) -> Result<bool> {
    if let Ok(n) = parse_i64(value) {
        return Ok(n != 0);
    }
    let literal = value.trim();
    if literal.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if literal.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(unconvertible(literal, BOOL))
    }
}

fn too_large(value: &str, target: &'static str) -> Error {
    Error::TooLarge {
        value: value.to_string(),
        target,
    }
}

fn too_small(value: &str, target: &'static str) -> Error {
    Error::TooSmall {
        value: value.to_string(),
        target,
    }
}

fn unconvertible(value: &str, target: &'static str) -> Error {
    Error::Unconvertible {
        value: value.to_string(),
        target,
    }
}
