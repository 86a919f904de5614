//! Host-value sum type
//!
//! `Native` closes the "arbitrary host object" domain the adapters accept:
//! nulls, booleans, numbers of any width, arbitrary-precision numbers,
//! strings, and nested lists/maps. `From` impls cover the primitive
//! widths, atomics (read their current value), and `Option` (None maps to
//! Null), so call sites pass plain Rust values.

use crate::number::Number;
use dashu_float::DBig;
use dashu_int::IBig;
use indexmap::IndexMap;
use std::sync::atomic::{AtomicI32, AtomicI64, Ordering};

/// A dynamically-typed host value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Native {
    #[default]
    Null,
    Bool(bool),
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    BigInt(IBig),
    BigDecimal(DBig),
    Text(String),
    List(Vec<Native>),
    Map(IndexMap<String, Native>),
}

impl Native {
    /// Structural kind name, used in coercion error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Native::Null => "null",
            Native::Bool(_) => "bool",
            Native::Byte(_) => "i8",
            Native::Short(_) => "i16",
            Native::Int(_) => "i32",
            Native::Long(_) => "i64",
            Native::Float(_) => "f32",
            Native::Double(_) => "f64",
            Native::BigInt(_) => "big integer",
            Native::BigDecimal(_) => "big decimal",
            Native::Text(_) => "string",
            Native::List(_) => "List",
            Native::Map(_) => "Map",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Native::Null)
    }

    /// True for any numeric variant.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            Native::Byte(_)
                | Native::Short(_)
                | Native::Int(_)
                | Native::Long(_)
                | Native::Float(_)
                | Native::Double(_)
                | Native::BigInt(_)
                | Native::BigDecimal(_)
        )
    }
}

// ========== Primitive conversions ==========

impl From<bool> for Native {
    fn from(v: bool) -> Self {
        Native::Bool(v)
    }
}

impl From<i8> for Native {
    fn from(v: i8) -> Self {
        Native::Byte(v)
    }
}

impl From<i16> for Native {
    fn from(v: i16) -> Self {
        Native::Short(v)
    }
}

impl From<i32> for Native {
    fn from(v: i32) -> Self {
        Native::Int(v)
    }
}

impl From<i64> for Native {
    fn from(v: i64) -> Self {
        Native::Long(v)
    }
}

impl From<i128> for Native {
    fn from(v: i128) -> Self {
        match i64::try_from(v) {
            Ok(v) => Native::Long(v),
            Err(_) => Native::BigInt(IBig::from(v)),
        }
    }
}

// Unsigned widths map to the narrowest signed variant that holds them.

impl From<u8> for Native {
    fn from(v: u8) -> Self {
        Native::Short(v as i16)
    }
}

impl From<u16> for Native {
    fn from(v: u16) -> Self {
        Native::Int(v as i32)
    }
}

impl From<u32> for Native {
    fn from(v: u32) -> Self {
        Native::Long(v as i64)
    }
}

impl From<u64> for Native {
    fn from(v: u64) -> Self {
        match i64::try_from(v) {
            Ok(v) => Native::Long(v),
            Err(_) => Native::BigInt(IBig::from(v)),
        }
    }
}

impl From<u128> for Native {
    fn from(v: u128) -> Self {
        match i64::try_from(v) {
            Ok(v) => Native::Long(v),
            Err(_) => Native::BigInt(IBig::from(v)),
        }
    }
}

impl From<f32> for Native {
    fn from(v: f32) -> Self {
        Native::Float(v)
    }
}

impl From<f64> for Native {
    fn from(v: f64) -> Self {
        Native::Double(v)
    }
}

impl From<IBig> for Native {
    fn from(v: IBig) -> Self {
        Native::BigInt(v)
    }
}

impl From<DBig> for Native {
    fn from(v: DBig) -> Self {
        Native::BigDecimal(v)
    }
}

impl From<&str> for Native {
    fn from(v: &str) -> Self {
        Native::Text(v.to_string())
    }
}

impl From<String> for Native {
    fn from(v: String) -> Self {
        Native::Text(v)
    }
}

// ========== Atomic sources ==========

impl From<&AtomicI32> for Native {
    fn from(v: &AtomicI32) -> Self {
        Native::Int(v.load(Ordering::SeqCst))
    }
}

impl From<&AtomicI64> for Native {
    fn from(v: &AtomicI64) -> Self {
        Native::Long(v.load(Ordering::SeqCst))
    }
}

// ========== Composite conversions ==========

impl<T: Into<Native>> From<Option<T>> for Native {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Native::Null,
        }
    }
}

impl<T: Into<Native>> From<Vec<T>> for Native {
    fn from(v: Vec<T>) -> Self {
        Native::List(v.into_iter().map(Into::into).collect())
    }
}

impl From<IndexMap<String, Native>> for Native {
    fn from(v: IndexMap<String, Native>) -> Self {
        Native::Map(v)
    }
}

impl From<Number> for Native {
    fn from(n: Number) -> Self {
        match n {
            Number::Byte(v) => Native::Byte(v),
            Number::Short(v) => Native::Short(v),
            Number::Int(v) => Native::Int(v),
            Number::Long(v) => Native::Long(v),
            Number::Float(v) => Native::Float(v),
            Number::Double(v) => Native::Double(v),
            Number::BigInt(v) => Native::BigInt(v),
            Number::BigDecimal(v) => Native::BigDecimal(v),
        }
    }
}

impl From<&Number> for Native {
    fn from(n: &Number) -> Self {
        n.clone().into()
    }
}
