//! Tagged numeric representation
//!
//! A `Number` remembers the concrete representation it was built from
//! (i8 through f64, plus arbitrary-precision integer and decimal), but
//! every narrowing, comparison, and hash routes through the exact decimal
//! normalization in [`crate::exact`], so two Numbers holding the same
//! logical value behave identically regardless of representation.

use crate::error::{targets, CoercionError};
use crate::exact;
use dashu_float::DBig;
use dashu_int::IBig;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::hash::{Hash, Hasher};

/// A number with its concrete source representation.
#[derive(Debug, Clone)]
pub enum Number {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    BigInt(IBig),
    BigDecimal(DBig),
}

impl Number {
    /// Representation name, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Number::Byte(_) => targets::BYTE,
            Number::Short(_) => targets::SHORT,
            Number::Int(_) => targets::INTEGER,
            Number::Long(_) => targets::LONG,
            Number::Float(_) => targets::FLOAT,
            Number::Double(_) => targets::DOUBLE,
            Number::BigInt(_) => targets::BIG_INTEGER,
            Number::BigDecimal(_) => targets::BIG_DECIMAL,
        }
    }

    /// Exact decimal value, or `None` for NaN and infinities.
    pub fn exact(&self) -> Option<DBig> {
        match self {
            Number::Byte(v) => Some(DBig::from(*v as i64)),
            Number::Short(v) => Some(DBig::from(*v as i64)),
            Number::Int(v) => Some(DBig::from(*v as i64)),
            Number::Long(v) => Some(DBig::from(*v)),
            Number::Float(v) => exact::decimal_from_f64(f64::from(*v)),
            Number::Double(v) => exact::decimal_from_f64(*v),
            Number::BigInt(v) => Some(DBig::from_parts(v.clone(), 0)),
            Number::BigDecimal(v) => Some(v.clone()),
        }
    }

    /// True when the exact value has no fractional part.
    pub fn is_integral(&self) -> bool {
        match self.exact() {
            Some(dec) => exact::canonical_parts(&dec).1 >= 0,
            None => false,
        }
    }

    fn integral(&self, target: &'static str) -> Result<IBig, CoercionError> {
        let dec = self
            .exact()
            .ok_or_else(|| CoercionError::not_finite(self.to_string(), target))?;
        exact::to_integral(&dec)
            .ok_or_else(|| CoercionError::non_integral(self.to_string(), target))
    }

    fn narrow_int<T: TryFrom<IBig>>(
        &self,
        target: &'static str,
        min: i128,
        max: i128,
    ) -> Result<T, CoercionError> {
        let dec = self
            .exact()
            .ok_or_else(|| CoercionError::not_finite(self.to_string(), target))?;
        let out_of_range = || {
            CoercionError::out_of_range(self.to_string(), target, min.to_string(), max.to_string())
        };

        let (significand, exponent) = exact::canonical_parts(&dec);
        if exponent < 0 {
            return Err(CoercionError::non_integral(self.to_string(), target));
        }
        // Width check before scaling: no primitive target holds more
        // decimal digits than i128, so wider values are out of range and
        // the scaled integer never needs to exist.
        const I128_DIGITS: isize = 39;
        if significand != IBig::ZERO
            && exact::digit_count(&significand) as isize + exponent > I128_DIGITS
        {
            return Err(out_of_range());
        }

        let value = significand * IBig::from(10).pow(exponent as usize);
        T::try_from(value).map_err(|_| out_of_range())
    }

    // ========== Integer targets (exact-only) ==========

    pub fn to_i8(&self) -> Result<i8, CoercionError> {
        self.narrow_int(targets::BYTE, i8::MIN as i128, i8::MAX as i128)
    }

    pub fn to_i16(&self) -> Result<i16, CoercionError> {
        self.narrow_int(targets::SHORT, i16::MIN as i128, i16::MAX as i128)
    }

    pub fn to_i32(&self) -> Result<i32, CoercionError> {
        self.narrow_int(targets::INTEGER, i32::MIN as i128, i32::MAX as i128)
    }

    pub fn to_i64(&self) -> Result<i64, CoercionError> {
        self.narrow_int(targets::LONG, i64::MIN as i128, i64::MAX as i128)
    }

    // ========== Float targets (lossy by design) ==========

    /// Nearest-representable `f32`. Same-kind sources pass through,
    /// preserving NaN and infinities; out-of-range magnitudes become
    /// infinite. Never fails: f32 is a lossy target by design.
    pub fn to_f32(&self) -> f32 {
        match self {
            Number::Byte(v) => *v as f32,
            Number::Short(v) => *v as f32,
            Number::Int(v) => *v as f32,
            Number::Long(v) => *v as f32,
            Number::Float(v) => *v,
            Number::Double(v) => *v as f32,
            Number::BigInt(v) => DBig::from_parts(v.clone(), 0).to_f32().value(),
            Number::BigDecimal(v) => v.to_f32().value(),
        }
    }

    /// Nearest-representable `f64`. Same rules as [`Number::to_f32`].
    pub fn to_f64(&self) -> f64 {
        match self {
            Number::Byte(v) => *v as f64,
            Number::Short(v) => *v as f64,
            Number::Int(v) => *v as f64,
            Number::Long(v) => *v as f64,
            Number::Float(v) => f64::from(*v),
            Number::Double(v) => *v,
            Number::BigInt(v) => DBig::from_parts(v.clone(), 0).to_f64().value(),
            Number::BigDecimal(v) => v.to_f64().value(),
        }
    }

    // ========== Arbitrary-precision targets ==========

    /// Exact integer reconstruction; rejects non-integral values.
    pub fn to_big_int(&self) -> Result<IBig, CoercionError> {
        self.integral(targets::BIG_INTEGER)
    }

    /// Exact decimal reconstruction; rejects NaN and infinities.
    pub fn to_big_decimal(&self) -> Result<DBig, CoercionError> {
        self.exact()
            .ok_or_else(|| CoercionError::not_finite(self.to_string(), targets::BIG_DECIMAL))
    }

    // None unless this is a non-finite float: 0 NaN, 1 +inf, -1 -inf.
    fn nonfinite_class(&self) -> Option<i8> {
        let v = match self {
            Number::Float(v) => f64::from(*v),
            Number::Double(v) => *v,
            _ => return None,
        };
        if v.is_nan() {
            Some(0)
        } else if v == f64::INFINITY {
            Some(1)
        } else if v == f64::NEG_INFINITY {
            Some(-1)
        } else {
            None
        }
    }
}

// ========== Equality and hashing (representation-independent) ==========

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self.exact(), other.exact()) {
            (Some(a), Some(b)) => a == b,
            (None, None) => self.nonfinite_class() == other.nonfinite_class(),
            _ => false,
        }
    }
}

// NaN equals NaN here, so equality is reflexive.
impl Eq for Number {}

impl Hash for Number {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self.exact() {
            Some(dec) => {
                let (significand, exponent) = exact::canonical_parts(&dec);
                significand.hash(state);
                exponent.hash(state);
            }
            None => {
                state.write_u8(0xff);
                self.nonfinite_class().unwrap_or(0).hash(state);
            }
        }
    }
}

// ========== Display and serde ==========

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Number::Byte(v) => write!(f, "{v}"),
            Number::Short(v) => write!(f, "{v}"),
            Number::Int(v) => write!(f, "{v}"),
            Number::Long(v) => write!(f, "{v}"),
            Number::Float(v) => write!(f, "{v}"),
            Number::Double(v) => write!(f, "{v}"),
            Number::BigInt(v) => write!(f, "{v}"),
            Number::BigDecimal(v) => write!(f, "{}", exact::format_canonical(v)),
        }
    }
}

impl Number {
    /// Parse a decimal string into a Number. Recognizes the non-finite
    /// spellings produced by [`Number::to_string`].
    pub fn parse(text: &str) -> Result<Self, CoercionError> {
        match text {
            "NaN" => Ok(Number::Double(f64::NAN)),
            "inf" => Ok(Number::Double(f64::INFINITY)),
            "-inf" => Ok(Number::Double(f64::NEG_INFINITY)),
            _ => exact::parse_decimal(text)
                .map(Number::BigDecimal)
                .ok_or_else(|| CoercionError::unparseable(text, targets::BIG_DECIMAL)),
        }
    }
}

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Number {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Number::parse(&s).map_err(serde::de::Error::custom)
    }
}

// ========== From implementations ==========

impl From<i8> for Number {
    fn from(v: i8) -> Self {
        Number::Byte(v)
    }
}

impl From<i16> for Number {
    fn from(v: i16) -> Self {
        Number::Short(v)
    }
}

impl From<i32> for Number {
    fn from(v: i32) -> Self {
        Number::Int(v)
    }
}

impl From<i64> for Number {
    fn from(v: i64) -> Self {
        Number::Long(v)
    }
}

impl From<f32> for Number {
    fn from(v: f32) -> Self {
        Number::Float(v)
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Number::Double(v)
    }
}

impl From<IBig> for Number {
    fn from(v: IBig) -> Self {
        Number::BigInt(v)
    }
}

impl From<DBig> for Number {
    fn from(v: DBig) -> Self {
        Number::BigDecimal(v)
    }
}
