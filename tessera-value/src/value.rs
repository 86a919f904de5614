//! Tagged-union value node
//!
//! `Value` is the document-model node: Null, Bool, Number, Text, Map, or
//! List. Every capability of the model is a match arm here. Scalar
//! getters route through the exact coercion layer in `tessera-core`,
//! container getters demand the matching variant, and `get_object`
//! unwraps back to the host representation.
//!
//! Null policy: numeric, boolean, and string getters on Null yield
//! `Ok(None)` (logical null coerces to null); container getters on Null
//! fail. Wrong-type coercion always fails. Absence is represented here,
//! one level above the adapters, which is why the adapters themselves
//! reject null.

use crate::{ValueList, ValueMap};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use tessera_core::{exact, targets, CoercionError, DBig, IBig, Native, Number};

/// The Null value, shared by missing-key lookups.
pub(crate) static NULL: Value = Value::Null;

/// A node in the dynamically-typed value model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    Text(String),
    Map(ValueMap),
    List(ValueList),
}

impl Value {
    /// Wrap any supported host value into its tagged form.
    pub fn of(native: impl Into<Native>) -> Value {
        native.into().into()
    }

    /// Structural kind name for error messages. Numbers report their
    /// concrete representation.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(n) => n.kind(),
            Value::Text(_) => "string",
            Value::Map(_) => "Map",
            Value::List(_) => "List",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    // ========== Safe accessors (no coercion) ==========

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Value::Number(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&ValueMap> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_map_mut(&mut self) -> Option<&mut ValueMap> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&ValueList> {
        match self {
            Value::List(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_list_mut(&mut self) -> Option<&mut ValueList> {
        match self {
            Value::List(l) => Some(l),
            _ => None,
        }
    }

    // ========== Typed getters (coercing) ==========

    // Shared numeric path: Null is logical null, numbers narrow through
    // the exact layer, text parses digit-exact, everything else is a
    // kind mismatch.
    fn number_getter<T>(
        &self,
        target: &'static str,
        narrow: impl Fn(&Number) -> Result<T, CoercionError>,
    ) -> Result<Option<T>, CoercionError> {
        match self {
            Value::Null => Ok(None),
            Value::Number(n) => narrow(n).map(Some),
            Value::Text(s) => {
                let dec = exact::parse_decimal(s)
                    .ok_or_else(|| CoercionError::unparseable(s.clone(), target))?;
                narrow(&Number::BigDecimal(dec)).map(Some)
            }
            _ => Err(CoercionError::unsupported_kind(self.kind(), target)),
        }
    }

    pub fn get_boolean(&self) -> Result<Option<bool>, CoercionError> {
        match self {
            Value::Null => Ok(None),
            Value::Bool(b) => Ok(Some(*b)),
            Value::Text(s) if s.eq_ignore_ascii_case("true") => Ok(Some(true)),
            Value::Text(s) if s.eq_ignore_ascii_case("false") => Ok(Some(false)),
            Value::Text(s) => Err(CoercionError::unparseable(s.clone(), targets::BOOLEAN)),
            _ => Err(CoercionError::unsupported_kind(self.kind(), targets::BOOLEAN)),
        }
    }

    pub fn get_byte(&self) -> Result<Option<i8>, CoercionError> {
        self.number_getter(targets::BYTE, Number::to_i8)
    }

    pub fn get_short(&self) -> Result<Option<i16>, CoercionError> {
        self.number_getter(targets::SHORT, Number::to_i16)
    }

    pub fn get_int(&self) -> Result<Option<i32>, CoercionError> {
        self.number_getter(targets::INTEGER, Number::to_i32)
    }

    pub fn get_long(&self) -> Result<Option<i64>, CoercionError> {
        self.number_getter(targets::LONG, Number::to_i64)
    }

    pub fn get_float(&self) -> Result<Option<f32>, CoercionError> {
        self.number_getter(targets::FLOAT, |n| Ok(n.to_f32()))
    }

    pub fn get_double(&self) -> Result<Option<f64>, CoercionError> {
        self.number_getter(targets::DOUBLE, |n| Ok(n.to_f64()))
    }

    pub fn get_big_integer(&self) -> Result<Option<IBig>, CoercionError> {
        self.number_getter(targets::BIG_INTEGER, Number::to_big_int)
    }

    pub fn get_big_decimal(&self) -> Result<Option<DBig>, CoercionError> {
        self.number_getter(targets::BIG_DECIMAL, Number::to_big_decimal)
    }

    pub fn get_string(&self) -> Result<Option<String>, CoercionError> {
        match self {
            Value::Null => Ok(None),
            Value::Text(s) => Ok(Some(s.clone())),
            Value::Bool(b) => Ok(Some(b.to_string())),
            Value::Number(n) => Ok(Some(n.to_string())),
            Value::Map(_) | Value::List(_) => {
                Err(CoercionError::unsupported_kind(self.kind(), targets::STRING))
            }
        }
    }

    pub fn get_map(&self) -> Result<&ValueMap, CoercionError> {
        match self {
            Value::Map(m) => Ok(m),
            Value::Null => Err(CoercionError::null_source(targets::MAP)),
            _ => Err(CoercionError::unsupported_kind(self.kind(), targets::MAP)),
        }
    }

    pub fn get_list(&self) -> Result<&ValueList, CoercionError> {
        match self {
            Value::List(l) => Ok(l),
            Value::Null => Err(CoercionError::null_source(targets::LIST)),
            _ => Err(CoercionError::unsupported_kind(self.kind(), targets::LIST)),
        }
    }

    /// Materialize the recursively-unwrapped host value. Values inside
    /// maps and lists are unwrapped too, so
    /// `Value::of(x).get_object()` reproduces `x` structurally.
    pub fn get_object(&self) -> Native {
        match self {
            Value::Null => Native::Null,
            Value::Bool(b) => Native::Bool(*b),
            Value::Number(n) => Native::from(n),
            Value::Text(s) => Native::Text(s.clone()),
            Value::Map(m) => Native::Map(
                m.iter()
                    .map(|(k, v)| (k.to_string(), v.get_object()))
                    .collect(),
            ),
            Value::List(l) => Native::List(l.iter().map(Value::get_object).collect()),
        }
    }
}

// ========== Construction ==========

impl From<Native> for Value {
    fn from(native: Native) -> Self {
        match native {
            Native::Null => Value::Null,
            Native::Bool(b) => Value::Bool(b),
            Native::Byte(v) => Value::Number(Number::Byte(v)),
            Native::Short(v) => Value::Number(Number::Short(v)),
            Native::Int(v) => Value::Number(Number::Int(v)),
            Native::Long(v) => Value::Number(Number::Long(v)),
            Native::Float(v) => Value::Number(Number::Float(v)),
            Native::Double(v) => Value::Number(Number::Double(v)),
            Native::BigInt(v) => Value::Number(Number::BigInt(v)),
            Native::BigDecimal(v) => Value::Number(Number::BigDecimal(v)),
            Native::Text(s) => Value::Text(s),
            Native::List(items) => Value::List(items.into_iter().map(Value::from).collect()),
            Native::Map(entries) => Value::Map(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i8> for Value {
    fn from(v: i8) -> Self {
        Value::Number(Number::Byte(v))
    }
}

impl From<i16> for Value {
    fn from(v: i16) -> Self {
        Value::Number(Number::Short(v))
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Number(Number::Int(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Number(Number::Long(v))
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Number(Number::Float(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Number(Number::Double(v))
    }
}

impl From<IBig> for Value {
    fn from(v: IBig) -> Self {
        Value::Number(Number::BigInt(v))
    }
}

impl From<DBig> for Value {
    fn from(v: DBig) -> Self {
        Value::Number(Number::BigDecimal(v))
    }
}

impl From<Number> for Value {
    fn from(v: Number) -> Self {
        Value::Number(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<ValueMap> for Value {
    fn from(v: ValueMap) -> Self {
        Value::Map(v)
    }
}

impl From<ValueList> for Value {
    fn from(v: ValueList) -> Self {
        Value::List(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

// ========== Hash and display ==========

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Value::Null => state.write_u8(0),
            Value::Bool(b) => {
                state.write_u8(1);
                b.hash(state);
            }
            Value::Number(n) => {
                state.write_u8(2);
                n.hash(state);
            }
            Value::Text(s) => {
                state.write_u8(3);
                s.hash(state);
            }
            Value::Map(m) => {
                state.write_u8(4);
                m.hash(state);
            }
            Value::List(l) => {
                state.write_u8(5);
                l.hash(state);
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::Text(s) => write!(f, "{s}"),
            Value::Map(m) => {
                write!(f, "{{")?;
                for (i, (key, value)) in m.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key:?}: {value}")?;
                }
                write!(f, "}}")
            }
            Value::List(l) => {
                write!(f, "[")?;
                for (i, value) in l.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{value}")?;
                }
                write!(f, "]")
            }
        }
    }
}
