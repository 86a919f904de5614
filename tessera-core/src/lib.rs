//! Tessera Core - Exact numeric coercion
//!
//! This crate provides the coercion subsystem backing the Tessera value
//! model:
//! - `Native`: closed sum type over the host values callers hold
//! - `Number`: tagged numeric representation with exact semantics
//! - Adapters: one stateless converter per target numeric type
//! - `CoercionError`: the single failure kind of the whole layer
//!
//! The design invariant is exactness: every range and fractional check
//! routes through a precision-lossless decimal intermediate (`exact`
//! module), so adapting `"42"`, `42i64`, `42.0f64`, and `IBig::from(42)`
//! are indistinguishable. Float targets are the one deliberate exception:
//! they round to nearest and never fail on magnitude.

mod adapters;
mod error;
pub mod exact;
mod native;
mod number;

pub use adapters::{
    Adapter, BigDecimalAdapter, BigIntegerAdapter, ByteAdapter, DoubleAdapter, FloatAdapter,
    IntegerAdapter, LongAdapter, ShortAdapter, BIG_DECIMAL, BIG_INTEGER, BYTE, DOUBLE, FLOAT,
    INTEGER, LONG, SHORT,
};
pub use error::{targets, CoercionError};
pub use native::Native;
pub use number::Number;

// Re-export the arbitrary precision backing types.
pub use dashu_float::DBig;
pub use dashu_int::IBig;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Adapter, CoercionError, DBig, IBig, Native, Number};
    pub use crate::{BIG_DECIMAL, BIG_INTEGER, BYTE, DOUBLE, FLOAT, INTEGER, LONG, SHORT};
}

#[cfg(test)]
mod tests {
    use super::*;

    mod exact_tests {
        use super::*;

        #[test]
        fn test_parse_plain() {
            assert_eq!(exact::parse_decimal("123").unwrap(), DBig::from(123i64));
            assert_eq!(exact::parse_decimal("-42").unwrap(), DBig::from(-42i64));
            assert_eq!(exact::parse_decimal("+7").unwrap(), DBig::from(7i64));
            assert_eq!(exact::parse_decimal(" 55 ").unwrap(), DBig::from(55i64));
        }

        #[test]
        fn test_parse_fractional() {
            let half = DBig::from_parts(IBig::from(5), -1);
            assert_eq!(exact::parse_decimal("0.5").unwrap(), half);
            assert_eq!(exact::parse_decimal(".5").unwrap(), half);
            assert_eq!(exact::parse_decimal("-.5").unwrap(), -half);
            assert_eq!(exact::parse_decimal("5.").unwrap(), DBig::from(5i64));
        }

        #[test]
        fn test_parse_scientific() {
            // Integer mantissa keeps full precision, no float intermediary
            let avogadro = exact::parse_decimal("602214076e15").unwrap();
            assert_eq!(
                avogadro,
                exact::parse_decimal("602214076000000000000000").unwrap()
            );

            let tiny = exact::parse_decimal("123123E-100").unwrap();
            assert_eq!(tiny, DBig::from_parts(IBig::from(123123), -100));

            let n = exact::parse_decimal("1.5e2").unwrap();
            assert_eq!(n, DBig::from(150i64));

            let n = exact::parse_decimal("2.5e-1").unwrap();
            assert_eq!(n, DBig::from_parts(IBig::from(25), -2));
        }

        #[test]
        fn test_parse_rejects_garbage() {
            for bad in ["", "  ", "abc", "1.2.3", "1e", "e5", ".", "-", "0x10", "NaN", "inf", "1..2", "1.-2"] {
                assert!(exact::parse_decimal(bad).is_none(), "should reject {bad:?}");
            }
        }

        #[test]
        fn test_parse_rejects_doubled_signs() {
            // A stray sign must not collapse into a valid negative parse.
            for bad in ["+-5", "-+5", "--5", "++5", "5-", "5+", "1e+-5"] {
                assert!(exact::parse_decimal(bad).is_none(), "should reject {bad:?}");
            }
            assert_eq!(exact::parse_decimal("+.5").unwrap(), exact::parse_decimal("0.5").unwrap());
            assert_eq!(exact::parse_decimal("1e+5").unwrap(), exact::parse_decimal("100000").unwrap());
        }

        #[test]
        fn test_decimal_from_f64_exact_values() {
            assert_eq!(exact::decimal_from_f64(2.0).unwrap(), DBig::from(2i64));
            assert_eq!(exact::decimal_from_f64(-128.0).unwrap(), DBig::from(-128i64));
            assert_eq!(
                exact::decimal_from_f64(0.5).unwrap(),
                DBig::from_parts(IBig::from(5), -1)
            );
            assert_eq!(exact::decimal_from_f64(0.0).unwrap(), DBig::ZERO);
        }

        #[test]
        fn test_decimal_from_f64_is_binary_exact() {
            // 0.1 as a double is not one tenth; the expansion must keep
            // the full binary tail rather than the printed form.
            let tenth = exact::decimal_from_f64(0.1).unwrap();
            assert_ne!(tenth, exact::parse_decimal("0.1").unwrap());
            assert!(exact::to_integral(&tenth).is_none());
            let rendered = exact::format_canonical(&tenth);
            assert!(rendered.starts_with("0.1000000000000000055511151231257827"), "got {rendered}");
        }

        #[test]
        fn test_decimal_from_f64_nonfinite() {
            assert!(exact::decimal_from_f64(f64::NAN).is_none());
            assert!(exact::decimal_from_f64(f64::INFINITY).is_none());
            assert!(exact::decimal_from_f64(f64::NEG_INFINITY).is_none());
        }

        #[test]
        fn test_to_integral() {
            let n = exact::parse_decimal("150.00").unwrap();
            assert_eq!(exact::to_integral(&n).unwrap(), IBig::from(150));

            let n = exact::parse_decimal("1.5e2").unwrap();
            assert_eq!(exact::to_integral(&n).unwrap(), IBig::from(150));

            let n = exact::parse_decimal("150.01").unwrap();
            assert!(exact::to_integral(&n).is_none());

            let n = exact::parse_decimal("-0.5").unwrap();
            assert!(exact::to_integral(&n).is_none());
        }

        #[test]
        fn test_to_integral_huge_negative_exponent_is_cheap() {
            // The fractional check must not build a 10^100000000 scale.
            let tiny = exact::parse_decimal("1e-100000000").unwrap();
            assert!(exact::to_integral(&tiny).is_none());
        }

        #[test]
        fn test_digit_count() {
            assert_eq!(exact::digit_count(&IBig::ZERO), 1);
            assert_eq!(exact::digit_count(&IBig::from(7)), 1);
            assert_eq!(exact::digit_count(&IBig::from(-1000)), 4);
        }

        #[test]
        fn test_canonical_parts() {
            let n = exact::parse_decimal("1500").unwrap();
            assert_eq!(exact::canonical_parts(&n), (IBig::from(15), 2));

            let n = exact::parse_decimal("1.50").unwrap();
            assert_eq!(exact::canonical_parts(&n), (IBig::from(15), -1));

            let n = exact::parse_decimal("0").unwrap();
            assert_eq!(exact::canonical_parts(&n), (IBig::ZERO, 0));
        }

        #[test]
        fn test_format_canonical() {
            let fmt = |s: &str| exact::format_canonical(&exact::parse_decimal(s).unwrap());
            assert_eq!(fmt("1500"), "1500");
            assert_eq!(fmt("0.25"), "0.25");
            assert_eq!(fmt("-0.5"), "-0.5");
            assert_eq!(fmt("0"), "0");
            assert_eq!(fmt("0.000"), "0");
            assert_eq!(fmt("123123E-100"), "1.23123e-95");
            assert_eq!(fmt("5e30"), "5e30");
            assert_eq!(fmt("-1.5e40"), "-1.5e40");
        }
    }

    mod number_tests {
        use super::*;

        #[test]
        fn test_integer_narrowing() {
            assert_eq!(Number::Long(42).to_i8().unwrap(), 42i8);
            assert_eq!(Number::Long(-128).to_i8().unwrap(), i8::MIN);
            assert_eq!(Number::Long(127).to_i8().unwrap(), i8::MAX);
            assert!(Number::Long(128).to_i8().is_err());
            assert!(Number::Long(-129).to_i8().is_err());
        }

        #[test]
        fn test_fractional_rejected_by_integer_targets() {
            let err = Number::Double(3.5).to_i32().unwrap_err();
            assert!(matches!(err, CoercionError::NonIntegral { .. }));

            // 0.1 is non-integral even though it prints as "0.1"
            assert!(Number::Double(0.1).to_i64().is_err());

            // 2.0 is exactly integral
            assert_eq!(Number::Double(2.0).to_i64().unwrap(), 2);
        }

        #[test]
        fn test_nonfinite_rejected_by_exact_targets() {
            assert!(matches!(
                Number::Double(f64::NAN).to_i32().unwrap_err(),
                CoercionError::NotFinite { .. }
            ));
            assert!(Number::Double(f64::INFINITY).to_big_decimal().is_err());
            assert!(Number::Float(f32::NAN).to_big_int().is_err());
        }

        #[test]
        fn test_float_targets_never_fail() {
            assert_eq!(Number::Long(i64::MAX).to_f64(), i64::MAX as f64);
            assert!(Number::Double(f64::NAN).to_f64().is_nan());
            assert_eq!(Number::Double(f64::INFINITY).to_f32(), f32::INFINITY);

            // Magnitudes beyond the target's finite range become infinite
            let huge = Number::BigDecimal(exact::parse_decimal("1e400").unwrap());
            assert_eq!(huge.to_f64(), f64::INFINITY);
            let huge_neg = Number::BigDecimal(exact::parse_decimal("-1e400").unwrap());
            assert_eq!(huge_neg.to_f64(), f64::NEG_INFINITY);
        }

        #[test]
        fn test_big_targets() {
            let n = Number::BigDecimal(exact::parse_decimal("1.5e2").unwrap());
            assert_eq!(n.to_big_int().unwrap(), IBig::from(150));

            let n = Number::BigDecimal(exact::parse_decimal("1.55e1").unwrap());
            assert!(n.to_big_int().is_err());

            let n = Number::Long(7);
            assert_eq!(n.to_big_decimal().unwrap(), DBig::from(7i64));
        }

        #[test]
        fn test_equality_is_representation_independent() {
            assert_eq!(Number::Int(7), Number::Long(7));
            assert_eq!(Number::Byte(7), Number::BigInt(IBig::from(7)));
            assert_eq!(
                Number::Double(0.5),
                Number::BigDecimal(exact::parse_decimal("0.5").unwrap())
            );
            // The double 0.1 is not the decimal 0.1
            assert_ne!(
                Number::Double(0.1),
                Number::BigDecimal(exact::parse_decimal("0.1").unwrap())
            );
            assert_ne!(Number::Int(7), Number::Int(8));
        }

        #[test]
        fn test_nan_equals_nan() {
            assert_eq!(Number::Double(f64::NAN), Number::Double(f64::NAN));
            assert_eq!(Number::Float(f32::NAN), Number::Double(f64::NAN));
            assert_ne!(Number::Double(f64::NAN), Number::Double(f64::INFINITY));
            assert_ne!(Number::Double(f64::INFINITY), Number::Double(f64::NEG_INFINITY));
        }

        #[test]
        fn test_hash_consistent_with_equality() {
            use std::collections::hash_map::DefaultHasher;
            use std::hash::{Hash, Hasher};

            let hash_of = |n: &Number| {
                let mut h = DefaultHasher::new();
                n.hash(&mut h);
                h.finish()
            };

            let a = Number::Int(7);
            let b = Number::BigDecimal(exact::parse_decimal("7.0").unwrap());
            assert_eq!(a, b);
            assert_eq!(hash_of(&a), hash_of(&b));

            let c = Number::Double(f64::NAN);
            let d = Number::Float(f32::NAN);
            assert_eq!(hash_of(&c), hash_of(&d));
        }

        #[test]
        fn test_display() {
            assert_eq!(Number::Int(42).to_string(), "42");
            assert_eq!(Number::Double(0.1).to_string(), "0.1");
            assert_eq!(
                Number::BigDecimal(exact::parse_decimal("123123E-100").unwrap()).to_string(),
                "1.23123e-95"
            );
            assert_eq!(Number::BigInt(IBig::from(-5)).to_string(), "-5");
        }

        #[test]
        fn test_parse_nonfinite_spellings() {
            assert!(Number::parse("NaN").unwrap().to_f64().is_nan());
            assert_eq!(Number::parse("inf").unwrap().to_f64(), f64::INFINITY);
            assert_eq!(Number::parse("-inf").unwrap().to_f64(), f64::NEG_INFINITY);
            assert!(Number::parse("wat").is_err());
        }
    }

    mod adapter_tests {
        use super::*;
        use std::fmt::Debug;
        use std::sync::atomic::{AtomicI32, AtomicI64};

        // Adapt the same logical value through every accepted source
        // representation and expect the same result.
        fn assert_adapts_everywhere<A>(adapter: &A, value: i64, expected: A::Target)
        where
            A: Adapter,
            A::Target: PartialEq + Debug,
        {
            assert_eq!(adapter.adapt(value.to_string().as_str()).unwrap(), expected);
            assert_eq!(adapter.adapt(value).unwrap(), expected);
            assert_eq!(adapter.adapt(IBig::from(value)).unwrap(), expected);
            assert_eq!(adapter.adapt(DBig::from(value)).unwrap(), expected);
            assert_eq!(adapter.adapt(&AtomicI64::new(value)).unwrap(), expected);
            if value.unsigned_abs() <= 1 << 53 {
                assert_eq!(adapter.adapt(value as f64).unwrap(), expected);
            }
            if value.unsigned_abs() <= 1 << 24 {
                assert_eq!(adapter.adapt(value as f32).unwrap(), expected);
            }
            if let Ok(v) = i32::try_from(value) {
                assert_eq!(adapter.adapt(v).unwrap(), expected);
                assert_eq!(adapter.adapt(&AtomicI32::new(v)).unwrap(), expected);
            }
            if let Ok(v) = i16::try_from(value) {
                assert_eq!(adapter.adapt(v).unwrap(), expected);
            }
            if let Ok(v) = i8::try_from(value) {
                assert_eq!(adapter.adapt(v).unwrap(), expected);
            }
        }

        fn assert_fails_everywhere<A>(adapter: &A, value: i64)
        where
            A: Adapter,
            A::Target: Debug,
        {
            assert!(adapter.adapt(value.to_string().as_str()).is_err());
            assert!(adapter.adapt(value).is_err());
            assert!(adapter.adapt(IBig::from(value)).is_err());
            assert!(adapter.adapt(DBig::from(value)).is_err());
            assert!(adapter.adapt(&AtomicI64::new(value)).is_err());
            if value.unsigned_abs() <= 1 << 53 {
                assert!(adapter.adapt(value as f64).is_err());
            }
        }

        #[test]
        fn test_byte_adapter() {
            assert_adapts_everywhere(&BYTE, i8::MIN as i64, i8::MIN);
            assert_adapts_everywhere(&BYTE, i8::MAX as i64, i8::MAX);
            assert_adapts_everywhere(&BYTE, 0, 0i8);
            assert_fails_everywhere(&BYTE, -500);
        }

        #[test]
        fn test_short_adapter() {
            assert_adapts_everywhere(&SHORT, i16::MIN as i64, i16::MIN);
            assert_adapts_everywhere(&SHORT, i16::MAX as i64, i16::MAX);
            assert_adapts_everywhere(&SHORT, 0, 0i16);
            assert_fails_everywhere(&SHORT, -500_000);
        }

        #[test]
        fn test_integer_adapter() {
            assert_adapts_everywhere(&INTEGER, i32::MIN as i64, i32::MIN);
            assert_adapts_everywhere(&INTEGER, i32::MAX as i64, i32::MAX);
            assert_adapts_everywhere(&INTEGER, 0, 0i32);
            assert_fails_everywhere(&INTEGER, i64::MIN);
        }

        #[test]
        fn test_long_adapter() {
            assert_adapts_everywhere(&LONG, i64::MIN, i64::MIN);
            assert_adapts_everywhere(&LONG, i64::MAX, i64::MAX);
            assert_adapts_everywhere(&LONG, 0, 0i64);

            // One past i64::MAX, expressible only beyond the primitive widths
            let over = IBig::from(i64::MAX) + IBig::from(1);
            assert!(LONG.adapt(over.clone()).is_err());
            assert!(LONG.adapt(over.to_string().as_str()).is_err());
            assert!(LONG.adapt(DBig::from_parts(over, 0)).is_err());
        }

        #[test]
        fn test_float_adapter() {
            assert_eq!(FLOAT.adapt(i64::MIN as f32).unwrap(), i64::MIN as f32);
            assert_eq!(FLOAT.adapt(i64::MAX as f32).unwrap(), i64::MAX as f32);
            assert_eq!(FLOAT.adapt(0f32).unwrap(), 0f32);

            // Beyond i64: still fine, float is the lossy target by design
            let over = IBig::from(i64::MAX) + IBig::from(1);
            let adapted = FLOAT.adapt(over).unwrap();
            assert_eq!(adapted, 9_223_372_036_854_775_808f32);
        }

        #[test]
        fn test_double_adapter() {
            assert_eq!(DOUBLE.adapt(i64::MIN as f64).unwrap(), i64::MIN as f64);
            assert_eq!(DOUBLE.adapt(i64::MAX as f64).unwrap(), i64::MAX as f64);
            assert_eq!(DOUBLE.adapt(0f64).unwrap(), 0f64);

            let over = IBig::from(i64::MAX) + IBig::from(1);
            let adapted = DOUBLE.adapt(over).unwrap();
            assert_eq!(adapted, 9_223_372_036_854_775_808f64);
        }

        #[test]
        fn test_big_decimal_adapter() {
            let one = DBig::ONE;
            assert_eq!(BIG_DECIMAL.adapt("1").unwrap(), one);
            assert_eq!(BIG_DECIMAL.adapt(1i64).unwrap(), one);
            assert_eq!(BIG_DECIMAL.adapt(1.0f64).unwrap(), one);
            assert_eq!(BIG_DECIMAL.adapt(IBig::from(1)).unwrap(), one);
            assert_eq!(BIG_DECIMAL.adapt(DBig::ZERO).unwrap(), DBig::ZERO);
            assert_eq!(BIG_DECIMAL.adapt(-1i32).unwrap(), -DBig::ONE);
        }

        #[test]
        fn test_big_integer_adapter() {
            assert_eq!(BIG_INTEGER.adapt("1").unwrap(), IBig::from(1));
            assert_eq!(BIG_INTEGER.adapt(-1i64).unwrap(), IBig::from(-1));
            assert_eq!(BIG_INTEGER.adapt(0.0f64).unwrap(), IBig::ZERO);
            assert!(BIG_INTEGER.adapt("1.5").is_err());
        }

        #[test]
        fn test_huge_exponents_rejected_without_scaling() {
            // Width is checked on canonical parts, so a short spelling of
            // an astronomically large value fails fast instead of
            // materializing the scaled integer.
            let started = std::time::Instant::now();
            assert!(matches!(
                LONG.adapt("1e100000000").unwrap_err(),
                CoercionError::OutOfRange { .. }
            ));
            assert!(matches!(
                BYTE.adapt("-1e100000000").unwrap_err(),
                CoercionError::OutOfRange { .. }
            ));
            assert!(matches!(
                LONG.adapt("1e-100000000").unwrap_err(),
                CoercionError::NonIntegral { .. }
            ));
            assert!(started.elapsed() < std::time::Duration::from_secs(1));
        }

        #[test]
        fn test_scientific_notation_scenario() {
            // "123123E-100" is exactly 1.23123e-95 as a decimal
            let dec = BIG_DECIMAL.adapt("123123E-100").unwrap();
            assert_eq!(dec, DBig::from_parts(IBig::from(123123), -100));

            // As a double it rounds to the nearest representable value
            let dbl = DOUBLE.adapt("123123E-100").unwrap();
            assert_eq!(dbl, 1.23123e-95);

            // As a long it is non-integral
            assert!(matches!(
                LONG.adapt("123123E-100").unwrap_err(),
                CoercionError::NonIntegral { .. }
            ));
        }

        #[test]
        fn test_null_and_structural_sources_fail() {
            assert!(matches!(
                INTEGER.adapt(Native::Null).unwrap_err(),
                CoercionError::NullSource { .. }
            ));
            assert!(matches!(
                INTEGER.adapt(true).unwrap_err(),
                CoercionError::UnsupportedKind { .. }
            ));
            assert!(matches!(
                DOUBLE.adapt(Native::List(vec![])).unwrap_err(),
                CoercionError::UnsupportedKind { .. }
            ));
            // None maps to the null source, one level above the adapters
            assert!(BYTE.adapt(None::<i64>).is_err());
        }

        #[test]
        fn test_unparseable_text_fails() {
            let err = INTEGER.adapt("twelve").unwrap_err();
            assert!(matches!(err, CoercionError::Unparseable { .. }));
            assert_eq!(err.target(), targets::INTEGER);
        }

        #[test]
        fn test_atomics_read_current_value() {
            let cell = AtomicI64::new(41);
            cell.store(42, std::sync::atomic::Ordering::SeqCst);
            assert_eq!(LONG.adapt(&cell).unwrap(), 42);
            assert_eq!(BYTE.adapt(&cell).unwrap(), 42i8);
        }
    }

    mod serde_tests {
        use super::*;

        #[test]
        fn test_number_serializes_as_canonical_string() {
            assert_eq!(serde_json::to_string(&Number::Int(42)).unwrap(), r#""42""#);
            assert_eq!(
                serde_json::to_string(&Number::BigInt(IBig::from(-5))).unwrap(),
                r#""-5""#
            );
            let tiny = Number::BigDecimal(exact::parse_decimal("123123E-100").unwrap());
            assert_eq!(serde_json::to_string(&tiny).unwrap(), r#""1.23123e-95""#);
        }

        #[test]
        fn test_number_round_trip() {
            // Values whose canonical spelling is their exact value come
            // back equal; equality is representation-independent, so the
            // deserialized decimal matches the primitive original.
            for n in [
                Number::Long(-7),
                Number::Double(0.5),
                Number::BigInt(IBig::from(10).pow(40)),
                Number::Double(f64::NAN),
                Number::Double(f64::NEG_INFINITY),
            ] {
                let json = serde_json::to_string(&n).unwrap();
                let back: Number = serde_json::from_str(&json).unwrap();
                assert_eq!(back, n, "round trip of {n:?}");
            }
            assert!(serde_json::from_str::<Number>(r#""wat""#).is_err());
        }
    }

    mod error_tests {
        use super::*;

        #[test]
        fn test_messages_name_value_and_target() {
            let err = BYTE.adapt(-500i64).unwrap_err();
            let text = err.to_string();
            assert!(text.contains("-500"), "got: {text}");
            assert!(text.contains("i8"), "got: {text}");
            assert!(text.contains("-128..=127"), "got: {text}");
        }

        #[test]
        fn test_null_message() {
            let err = CoercionError::null_source(targets::MAP);
            assert_eq!(err.to_string(), "cannot coerce null to Map");
        }

        #[test]
        fn test_target_accessor() {
            assert_eq!(CoercionError::null_source(targets::LIST).target(), "List");
            assert_eq!(
                CoercionError::unsupported_kind("Map", targets::INTEGER).target(),
                "i32"
            );
        }
    }

    mod prop_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn integer_adaptation_is_representation_independent(v in any::<i32>()) {
                let from_text = INTEGER.adapt(v.to_string().as_str()).unwrap();
                let from_long = INTEGER.adapt(v as i64).unwrap();
                let from_double = INTEGER.adapt(v as f64).unwrap();
                let from_big_int = INTEGER.adapt(IBig::from(v)).unwrap();
                let from_big_dec = INTEGER.adapt(DBig::from(v as i64)).unwrap();
                prop_assert_eq!(from_text, v);
                prop_assert_eq!(from_long, v);
                prop_assert_eq!(from_double, v);
                prop_assert_eq!(from_big_int, v);
                prop_assert_eq!(from_big_dec, v);
            }

            #[test]
            fn fractional_values_never_narrow(v in -1_000_000i64..1_000_000, digit in 1i64..=9) {
                // v.d with a non-zero trailing digit is always fractional
                let mantissa = v * 10 + if v < 0 { -digit } else { digit };
                let dec = DBig::from_parts(IBig::from(mantissa), -1);
                prop_assert!(INTEGER.adapt(dec.clone()).is_err());
                prop_assert!(LONG.adapt(dec.clone()).is_err());
                prop_assert!(BIG_INTEGER.adapt(dec).is_err());
            }

            #[test]
            fn out_of_byte_range_fails_from_every_representation(
                v in any::<i64>().prop_filter("outside i8", |v| *v < i8::MIN as i64 || *v > i8::MAX as i64)
            ) {
                prop_assert!(BYTE.adapt(v).is_err());
                prop_assert!(BYTE.adapt(v.to_string().as_str()).is_err());
                prop_assert!(BYTE.adapt(IBig::from(v)).is_err());
                if v.unsigned_abs() <= 1 << 53 {
                    prop_assert!(BYTE.adapt(v as f64).is_err());
                }
            }

            #[test]
            fn long_boundaries_are_inclusive(v in any::<i64>()) {
                prop_assert_eq!(LONG.adapt(v).unwrap(), v);
                prop_assert_eq!(LONG.adapt(v.to_string().as_str()).unwrap(), v);
            }
        }
    }
}
