//! Numeric adapters
//!
//! One stateless adapter per target numeric type, each total over the
//! [`Native`] domain and deterministic across every representation of the
//! same logical number. Integer targets are exact-only: non-integral or
//! out-of-range sources fail. Float targets round to the nearest
//! representable value and never fail on magnitude. The arbitrary
//! precision targets reconstruct the source exactly.
//!
//! The adapters hold no state, so the registry is a fixed set of `const`
//! singletons: `BYTE`, `SHORT`, `INTEGER`, `LONG`, `FLOAT`, `DOUBLE`,
//! `BIG_INTEGER`, `BIG_DECIMAL`.

use crate::error::CoercionError;
use crate::exact;
use crate::native::Native;
use crate::number::Number;
use dashu_float::DBig;
use dashu_int::IBig;

/// A stateless converter from heterogeneous host values to one target
/// numeric type.
pub trait Adapter {
    type Target;

    /// Convert an already-wrapped host value.
    fn adapt_native(&self, source: &Native) -> Result<Self::Target, CoercionError>;

    /// Convert anything that wraps into a [`Native`].
    fn adapt<S: Into<Native>>(&self, source: S) -> Result<Self::Target, CoercionError> {
        self.adapt_native(&source.into())
    }
}

/// Normalize a source to its numeric representation. Strings parse
/// digit-exact; null and structural kinds fail here, before any target
/// specific logic runs.
fn numeric_source(source: &Native, target: &'static str) -> Result<Number, CoercionError> {
    match source {
        Native::Null => Err(CoercionError::null_source(target)),
        Native::Byte(v) => Ok(Number::Byte(*v)),
        Native::Short(v) => Ok(Number::Short(*v)),
        Native::Int(v) => Ok(Number::Int(*v)),
        Native::Long(v) => Ok(Number::Long(*v)),
        Native::Float(v) => Ok(Number::Float(*v)),
        Native::Double(v) => Ok(Number::Double(*v)),
        Native::BigInt(v) => Ok(Number::BigInt(v.clone())),
        Native::BigDecimal(v) => Ok(Number::BigDecimal(v.clone())),
        Native::Text(s) => exact::parse_decimal(s)
            .map(Number::BigDecimal)
            .ok_or_else(|| CoercionError::unparseable(s.clone(), target)),
        Native::Bool(_) | Native::List(_) | Native::Map(_) => {
            Err(CoercionError::unsupported_kind(source.kind(), target))
        }
    }
}

/// Adapts any numeric source to `i8`, exactly.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByteAdapter;

impl Adapter for ByteAdapter {
    type Target = i8;

    fn adapt_native(&self, source: &Native) -> Result<i8, CoercionError> {
        numeric_source(source, crate::error::targets::BYTE)?.to_i8()
    }
}

/// Adapts any numeric source to `i16`, exactly.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortAdapter;

impl Adapter for ShortAdapter {
    type Target = i16;

    fn adapt_native(&self, source: &Native) -> Result<i16, CoercionError> {
        numeric_source(source, crate::error::targets::SHORT)?.to_i16()
    }
}

/// Adapts any numeric source to `i32`, exactly.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntegerAdapter;

impl Adapter for IntegerAdapter {
    type Target = i32;

    fn adapt_native(&self, source: &Native) -> Result<i32, CoercionError> {
        numeric_source(source, crate::error::targets::INTEGER)?.to_i32()
    }
}

/// Adapts any numeric source to `i64`, exactly.
#[derive(Debug, Clone, Copy, Default)]
pub struct LongAdapter;

impl Adapter for LongAdapter {
    type Target = i64;

    fn adapt_native(&self, source: &Native) -> Result<i64, CoercionError> {
        numeric_source(source, crate::error::targets::LONG)?.to_i64()
    }
}

/// Adapts any numeric source to `f32` with IEEE nearest rounding.
#[derive(Debug, Clone, Copy, Default)]
pub struct FloatAdapter;

impl Adapter for FloatAdapter {
    type Target = f32;

    fn adapt_native(&self, source: &Native) -> Result<f32, CoercionError> {
        Ok(numeric_source(source, crate::error::targets::FLOAT)?.to_f32())
    }
}

/// Adapts any numeric source to `f64` with IEEE nearest rounding.
#[derive(Debug, Clone, Copy, Default)]
pub struct DoubleAdapter;

impl Adapter for DoubleAdapter {
    type Target = f64;

    fn adapt_native(&self, source: &Native) -> Result<f64, CoercionError> {
        Ok(numeric_source(source, crate::error::targets::DOUBLE)?.to_f64())
    }
}

/// Adapts any numeric source to an arbitrary-precision integer, exactly.
#[derive(Debug, Clone, Copy, Default)]
pub struct BigIntegerAdapter;

impl Adapter for BigIntegerAdapter {
    type Target = IBig;

    fn adapt_native(&self, source: &Native) -> Result<IBig, CoercionError> {
        numeric_source(source, crate::error::targets::BIG_INTEGER)?.to_big_int()
    }
}

/// Adapts any numeric source to an arbitrary-precision decimal, exactly.
#[derive(Debug, Clone, Copy, Default)]
pub struct BigDecimalAdapter;

impl Adapter for BigDecimalAdapter {
    type Target = DBig;

    fn adapt_native(&self, source: &Native) -> Result<DBig, CoercionError> {
        numeric_source(source, crate::error::targets::BIG_DECIMAL)?.to_big_decimal()
    }
}

// ========== Registry ==========

pub const BYTE: ByteAdapter = ByteAdapter;
pub const SHORT: ShortAdapter = ShortAdapter;
pub const INTEGER: IntegerAdapter = IntegerAdapter;
pub const LONG: LongAdapter = LongAdapter;
pub const FLOAT: FloatAdapter = FloatAdapter;
pub const DOUBLE: DoubleAdapter = DoubleAdapter;
pub const BIG_INTEGER: BigIntegerAdapter = BigIntegerAdapter;
pub const BIG_DECIMAL: BigDecimalAdapter = BigDecimalAdapter;
