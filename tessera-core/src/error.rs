//! Coercion failures
//!
//! A coercion either fully succeeds or fully fails. Errors carry the
//! attempted value and the target type name, propagate synchronously to
//! the caller, and are never caught internally.

use thiserror::Error;

/// Canonical names of coercion targets, as they appear in error messages.
pub mod targets {
    pub const BYTE: &str = "i8";
    pub const SHORT: &str = "i16";
    pub const INTEGER: &str = "i32";
    pub const LONG: &str = "i64";
    pub const FLOAT: &str = "f32";
    pub const DOUBLE: &str = "f64";
    pub const BIG_INTEGER: &str = "big integer";
    pub const BIG_DECIMAL: &str = "big decimal";
    pub const BOOLEAN: &str = "bool";
    pub const STRING: &str = "string";
    pub const MAP: &str = "Map";
    pub const LIST: &str = "List";
}

/// Error raised when a requested target type cannot be exactly
/// reconstructed from the source value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoercionError {
    #[error("cannot coerce {value} to {target}: out of range {min}..={max}")]
    OutOfRange {
        value: String,
        target: &'static str,
        min: String,
        max: String,
    },

    #[error("cannot coerce {value} to {target}: non-integral value")]
    NonIntegral { value: String, target: &'static str },

    #[error("cannot coerce {value} to {target}: not a finite number")]
    NotFinite { value: String, target: &'static str },

    #[error("cannot parse {text:?} as {target}")]
    Unparseable { text: String, target: &'static str },

    #[error("cannot coerce null to {target}")]
    NullSource { target: &'static str },

    #[error("cannot cast {kind} to {target}")]
    UnsupportedKind {
        kind: &'static str,
        target: &'static str,
    },
}

impl CoercionError {
    fn traced(self) -> Self {
        tracing::trace!(error = %self, "coercion failed");
        self
    }

    pub fn out_of_range(
        value: impl Into<String>,
        target: &'static str,
        min: impl Into<String>,
        max: impl Into<String>,
    ) -> Self {
        Self::OutOfRange {
            value: value.into(),
            target,
            min: min.into(),
            max: max.into(),
        }
        .traced()
    }

    pub fn non_integral(value: impl Into<String>, target: &'static str) -> Self {
        Self::NonIntegral {
            value: value.into(),
            target,
        }
        .traced()
    }

    pub fn not_finite(value: impl Into<String>, target: &'static str) -> Self {
        Self::NotFinite {
            value: value.into(),
            target,
        }
        .traced()
    }

    pub fn unparseable(text: impl Into<String>, target: &'static str) -> Self {
        Self::Unparseable {
            text: text.into(),
            target,
        }
        .traced()
    }

    pub fn null_source(target: &'static str) -> Self {
        Self::NullSource { target }.traced()
    }

    pub fn unsupported_kind(kind: &'static str, target: &'static str) -> Self {
        Self::UnsupportedKind { kind, target }.traced()
    }

    /// Target type name the failed coercion was aiming for.
    pub fn target(&self) -> &'static str {
        match self {
            Self::OutOfRange { target, .. }
            | Self::NonIntegral { target, .. }
            | Self::NotFinite { target, .. }
            | Self::Unparseable { target, .. }
            | Self::NullSource { target }
            | Self::UnsupportedKind { target, .. } => target,
        }
    }
}
