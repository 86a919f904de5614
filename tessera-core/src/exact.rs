//! Exact decimal normalization
//!
//! Every range or fractional check in the coercion layer routes through a
//! precision-lossless `DBig` intermediate, so the outcome is independent
//! of the source representation. No f64 intermediate appears anywhere in
//! this module: string sources are parsed digit-exact and float sources
//! are expanded from their binary representation.

use dashu_float::DBig;
use dashu_int::IBig;

/// Parse a decimal string exactly, plain or scientific notation.
///
/// Accepts forms like `"123"`, `"-42.5"`, `".5"`, `"1.5e10"`,
/// `"123123E-100"`. The mantissa digits become the significand and the
/// written exponent is adjusted by the fraction length, so no rounding
/// ever occurs. Returns `None` for anything else, including NaN/infinity
/// spellings and hex or malformed input.
pub fn parse_decimal(text: &str) -> Option<DBig> {
    let s = text.trim();
    if s.is_empty() {
        return None;
    }

    let (mantissa, exp10) = match s.find(['e', 'E']) {
        Some(pos) => (&s[..pos], s[pos + 1..].parse::<isize>().ok()?),
        None => (s, 0),
    };

    let (int_part, frac_part) = match mantissa.find('.') {
        Some(pos) => (&mantissa[..pos], &mantissa[pos + 1..]),
        None => (mantissa, ""),
    };
    // A second dot or a sign inside the fraction is malformed.
    if frac_part.contains(['+', '-', '.']) {
        return None;
    }

    // The sign lives on the integer part only, and only once: strip it
    // before concatenating so "+-5" cannot collapse into "-5".
    let (sign, int_digits) = match int_part.strip_prefix(['+', '-']) {
        Some(rest) if int_part.starts_with('-') => ("-", rest),
        Some(rest) => ("", rest),
        None => ("", int_part),
    };
    if int_digits.contains(['+', '-']) {
        return None;
    }

    let digits = format!("{sign}{int_digits}{frac_part}");
    let significand: IBig = digits.parse().ok()?;

    Some(DBig::from_parts(
        significand,
        exp10 - frac_part.len() as isize,
    ))
}

/// Expand an `f64` to its exact decimal value.
///
/// Decomposes the binary representation into `m * 2^e`; for negative `e`
/// this becomes `m * 5^-e * 10^e`, which is always a finite decimal. This
/// is the exact value of the float, not its shortest printed form:
/// `decimal_from_f64(0.1)` ends in `...55511151231257827021181583404541015625`.
///
/// Returns `None` for NaN and infinities. `f32` sources widen to `f64`
/// first, which is exact.
pub fn decimal_from_f64(value: f64) -> Option<DBig> {
    if !value.is_finite() {
        return None;
    }
    if value == 0.0 {
        return Some(DBig::ZERO);
    }

    let bits = value.to_bits();
    let negative = bits >> 63 == 1;
    let exp_bits = ((bits >> 52) & 0x7ff) as i64;
    let fraction = bits & ((1u64 << 52) - 1);

    // Subnormals have no implicit leading bit.
    let (mantissa, exp2) = if exp_bits == 0 {
        (fraction, -1074i64)
    } else {
        (fraction | (1u64 << 52), exp_bits - 1075)
    };

    let mut significand = IBig::from(mantissa);
    if negative {
        significand = -significand;
    }

    let (significand, exp10) = if exp2 >= 0 {
        (significand << (exp2 as usize), 0isize)
    } else {
        let scale = IBig::from(5).pow((-exp2) as usize);
        (significand * scale, exp2 as isize)
    };

    Some(DBig::from_parts(significand, exp10))
}

/// Extract the exact integer value, or `None` when a non-zero fractional
/// part is present.
///
/// The fractional check runs on canonical parts, so a tiny value with a
/// huge negative exponent is rejected without ever building its scale
/// factor. Only actual integers get materialized.
pub fn to_integral(value: &DBig) -> Option<IBig> {
    let (significand, exponent) = canonical_parts(value);
    // Canonical significands carry no factor of 10, so a negative
    // exponent means a non-zero fractional part.
    if exponent < 0 {
        return None;
    }
    Some(significand * IBig::from(10).pow(exponent as usize))
}

/// Number of decimal digits in the magnitude. Zero counts as one digit.
pub fn digit_count(value: &IBig) -> usize {
    let rendered = value.to_string();
    rendered.len() - usize::from(rendered.starts_with('-'))
}

/// Trailing-zero-free (significand, exponent) pair.
///
/// Two exact decimals are numerically equal iff their canonical parts
/// match, which makes this the basis for representation-independent
/// hashing. Zero canonicalizes to `(0, 0)`.
pub fn canonical_parts(value: &DBig) -> (IBig, isize) {
    let (mut significand, mut exponent) = value.clone().into_repr().into_parts();
    if significand == IBig::ZERO {
        return (significand, 0);
    }
    let ten = IBig::from(10);
    loop {
        let remainder = &significand % &ten;
        if remainder != IBig::ZERO {
            break;
        }
        significand = &significand / &ten;
        exponent += 1;
    }
    (significand, exponent)
}

/// Render the canonical decimal form of an exact value.
///
/// Plain notation for moderate magnitudes, scientific (`1.23123e-95`)
/// otherwise.
pub fn format_canonical(value: &DBig) -> String {
    let (significand, exponent) = canonical_parts(value);
    if significand == IBig::ZERO {
        return "0".to_string();
    }

    let negative = significand < IBig::ZERO;
    let digits = if negative {
        (-significand).to_string()
    } else {
        significand.to_string()
    };
    let sign = if negative { "-" } else { "" };

    // Position of the decimal point relative to the digit string, and the
    // exponent a scientific rendering would use.
    let point = digits.len() as isize + exponent;
    let adjusted = point - 1;

    if exponent >= 0 && point <= 21 {
        let zeros = "0".repeat(exponent as usize);
        format!("{sign}{digits}{zeros}")
    } else if exponent < 0 && (-6..=21).contains(&point) {
        if point > 0 {
            let (head, tail) = digits.split_at(point as usize);
            format!("{sign}{head}.{tail}")
        } else {
            let zeros = "0".repeat((-point) as usize);
            format!("{sign}0.{zeros}{digits}")
        }
    } else {
        let (head, tail) = digits.split_at(1);
        if tail.is_empty() {
            format!("{sign}{head}e{adjusted}")
        } else {
            format!("{sign}{head}.{tail}e{adjusted}")
        }
    }
}
