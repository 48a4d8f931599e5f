//! Property-based tests for the comparator and arithmetic

use std::cmp::Ordering;

use dynval_value::{BinaryOp, TypedValue, Value, ValueOrdering};
use proptest::prelude::*;

fn any_number() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<u64>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        any::<bool>().prop_map(Value::from),
        prop::num::f64::NORMAL.prop_map(Value::from),
    ]
}

fn any_operand() -> impl Strategy<Value = Value> {
    prop_oneof![
        any_number(),
        "[a-z0-9.]{0,6}".prop_map(Value::utf8),
        Just(Value::Null),
        Just(Value::from(f64::NAN)),
    ]
}

// ===== COMPARATOR =====

proptest! {
    #[test]
    fn compare_is_antisymmetric(a in any_operand(), b in any_operand(), treat in any::<bool>()) {
        prop_assert_eq!(a.compare(&b, treat), b.compare(&a, treat).reverse());
    }

    #[test]
    fn compare_numbers_reflexive(a in any_number()) {
        prop_assert_eq!(a.compare(&a, false), ValueOrdering::Equivalent);
    }

    #[test]
    fn compare_unsigned_signed_exact(a in any::<u64>(), b in any::<i64>()) {
        let expected = i128::from(a).cmp(&i128::from(b));
        prop_assert_eq!(
            Value::from(a).compare(&Value::from(b), false),
            ValueOrdering::from(expected)
        );
    }

    #[test]
    fn compare_number_with_its_text(a in any::<i64>()) {
        prop_assert_eq!(
            Value::from(a).compare(&Value::utf8(a.to_string()), false),
            ValueOrdering::Equivalent
        );
    }

    #[test]
    fn compare_integral_float_with_integer(a in -(1_i64 << 53)..(1_i64 << 53)) {
        prop_assert_eq!(
            Value::from(a as f64).compare(&Value::from(a), false),
            ValueOrdering::Equivalent
        );
    }

    #[test]
    fn nan_is_unordered_unless_treated(b in any_operand()) {
        let nan = Value::from(f64::NAN);
        prop_assert_eq!(nan.compare(&b, false), ValueOrdering::Unordered);
    }
}

// ===== ARITHMETIC =====

proptest! {
    #[test]
    fn unsigned_add_matches_checked(a in any::<u64>(), b in any::<u64>()) {
        let result = TypedValue::unsigned64(a) + TypedValue::unsigned64(b);
        match a.checked_add(b) {
            Some(sum) => prop_assert_eq!(result, TypedValue::unsigned64(sum)),
            None => prop_assert!(result.is_null()),
        }
    }

    #[test]
    fn signed_mul_matches_checked(a in any::<i64>(), b in any::<i64>()) {
        let result = TypedValue::signed64(a) * TypedValue::signed64(b);
        match a.checked_mul(b) {
            Some(product) => prop_assert_eq!(result, TypedValue::signed64(product)),
            None => prop_assert!(result.is_null()),
        }
    }

    #[test]
    fn mixed_signedness_matches_i128(a in any::<u64>(), b in any::<i64>()) {
        let unsigned = Value::from(a);
        let signed = Value::from(b);
        let (wide_a, wide_b) = (i128::from(a), i128::from(b));
        let cases = [
            (BinaryOp::Add, &unsigned, &signed, wide_a.checked_add(wide_b)),
            (BinaryOp::Sub, &unsigned, &signed, wide_a.checked_sub(wide_b)),
            (BinaryOp::Sub, &signed, &unsigned, wide_b.checked_sub(wide_a)),
            (BinaryOp::Mul, &unsigned, &signed, wide_a.checked_mul(wide_b)),
        ];
        for (op, lhs, rhs, exact) in cases {
            let result = lhs.apply(op, rhs);
            let rejected = b < 0 && a > i64::MAX as u64;
            let expected = match exact {
                _ if rejected => Value::Null,
                Some(r) if r >= 0 => u64::try_from(r).map_or(Value::Null, Value::from),
                Some(r) => i64::try_from(r).map_or(Value::Null, Value::from),
                None => Value::Null,
            };
            prop_assert_eq!(result, expected, "{} {} {}", lhs, op, rhs);
        }
    }

    #[test]
    fn add_and_mul_commute(a in any_number(), b in any_number()) {
        for op in [BinaryOp::Add, BinaryOp::Mul] {
            let ab = a.apply(op, &b);
            let ba = b.apply(op, &a);
            prop_assert!(ab == ba || (ab.float64().is_nan() && ba.float64().is_nan()));
        }
    }

    #[test]
    fn integer_division_by_zero_is_null(a in any_number()) {
        for zero in [Value::from(0_u64), Value::from(0_i64), Value::from(false)] {
            if a.kind().is_integral() {
                prop_assert!(a.apply(BinaryOp::Div, &zero).is_null());
                prop_assert!(a.apply(BinaryOp::Rem, &zero).is_null());
            }
        }
    }

    #[test]
    fn bitwise_results_are_unsigned(a in any::<u64>(), b in any::<u64>()) {
        let or = TypedValue::unsigned64(a) | TypedValue::unsigned64(b);
        let and = TypedValue::unsigned64(a) & TypedValue::unsigned64(b);
        let xor = TypedValue::unsigned64(a) ^ TypedValue::unsigned64(b);
        prop_assert_eq!(or.as_unsigned64(), Some(a | b));
        prop_assert_eq!(and.as_unsigned64(), Some(a & b));
        prop_assert_eq!(xor.as_unsigned64(), Some(a ^ b));
    }

    #[test]
    fn strict_ordering_matches_native(a in any::<i64>(), b in any::<i64>()) {
        prop_assert_eq!(
            Value::from(a).partial_cmp(&Value::from(b)),
            Some(a.cmp(&b))
        );
        prop_assert_eq!(Value::from(a).partial_cmp(&Value::from(b as u64)), None::<Ordering>);
    }
}
