//! Table tests for literal inference and arithmetic promotion

use dynval_value::{BinaryOp, TypedValue, Value, ValueKind, best_number_type};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case("true", Value::from(true))]
#[case("false", Value::from(false))]
#[case("  42\t", Value::from(42_u64))]
#[case("-42", Value::from(-42_i64))]
#[case("1k", Value::from(1_u64))]
#[case("1.2k", Value::from(1.2))]
#[case("2.5e3", Value::from(2500.0))]
#[case("0x1F", Value::from(31_u64))]
#[case("0xE5", Value::from(0xe5_u64))]
#[case("inf", Value::from(f64::INFINITY))]
#[case("-infinity", Value::from(f64::NEG_INFINITY))]
#[case("99999999999999999999", Value::from(1e20))]
#[case("", Value::Null)]
#[case("hello", Value::Null)]
#[case("#12", Value::Null)]
fn infers_best_number_type(#[case] text: &str, #[case] expected: Value) {
    assert_eq!(best_number_type(text, false), TypedValue::new(expected));
}

#[rstest]
#[case("3.0", ValueKind::Unsigned64)]
#[case("-3.0", ValueKind::Signed64)]
#[case("3.5", ValueKind::Float64)]
#[case("1e300", ValueKind::Float64)]
#[case("inf", ValueKind::Float64)]
#[case("7", ValueKind::Unsigned64)]
fn collapses_integral_floats(#[case] text: &str, #[case] kind: ValueKind) {
    assert_eq!(best_number_type(text, true).kind(), kind);
}

#[test]
fn nan_literals_infer_nan() {
    for text in ["nan", "NaN", "NAN"] {
        let inferred = best_number_type(text, false);
        assert_eq!(inferred.kind(), ValueKind::Float64);
        assert!(inferred.float64().is_nan());
    }
}

#[rstest]
#[case(Value::from(3_u64), Value::from(4_u64), Value::from(7_u64))]
#[case(Value::from(-3_i64), Value::from(4_i64), Value::from(1_i64))]
#[case(Value::from(-3_i64), Value::from(4_u64), Value::from(1_u64))]
#[case(Value::from(3_i64), Value::from(4_u64), Value::from(7_u64))]
#[case(Value::from(true), Value::from(4_u64), Value::from(5_u64))]
#[case(Value::from(true), Value::from(-4_i64), Value::from(-3_i64))]
#[case(Value::from(1.5), Value::from(1_u64), Value::from(2.5))]
#[case(Value::from(1.5), Value::from(true), Value::from(2.5))]
#[case(Value::utf8("10"), Value::utf8("5"), Value::from(15_u64))]
#[case(Value::from(u64::MAX), Value::from(-1_i64), Value::Null)]
#[case(Value::from(i64::MAX), Value::from(1_i64), Value::Null)]
#[case(Value::utf8("x"), Value::from(1_u64), Value::Null)]
fn add_promotes(#[case] lhs: Value, #[case] rhs: Value, #[case] expected: Value) {
    assert_eq!(lhs.apply(BinaryOp::Add, &rhs), expected);
}

#[rstest]
#[case(Value::from(1_i64), BinaryOp::Sub, Value::from(2_u64), Value::from(-1_i64))]
#[case(Value::from(2_u64), BinaryOp::Sub, Value::from(5_i64), Value::from(-3_i64))]
#[case(Value::from(-1_i64), BinaryOp::Sub, Value::from(2_u64), Value::from(-3_i64))]
#[case(Value::from(5_i64), BinaryOp::Sub, Value::from(2_u64), Value::from(3_u64))]
#[case(Value::from(-2_i64), BinaryOp::Mul, Value::from(-3_i64), Value::from(6_i64))]
#[case(Value::from(-2_i64), BinaryOp::Mul, Value::from(3_u64), Value::from(-6_i64))]
#[case(Value::from(3_i64), BinaryOp::Mul, Value::from(u64::MAX), Value::Null)]
#[case(Value::from(-1_i64), BinaryOp::Mul, Value::from(u64::MAX), Value::Null)]
#[case(Value::from(i64::MIN), BinaryOp::Sub, Value::from(1_u64), Value::Null)]
#[case(Value::from(-9_i64), BinaryOp::Div, Value::from(2_u64), Value::from(-4_i64))]
fn mixed_signedness_is_exact(
    #[case] lhs: Value,
    #[case] op: BinaryOp,
    #[case] rhs: Value,
    #[case] expected: Value,
) {
    assert_eq!(lhs.apply(op, &rhs), expected);
}

#[rstest]
#[case(BinaryOp::Add, true, false, Some(true))]
#[case(BinaryOp::Sub, true, true, Some(false))]
#[case(BinaryOp::Sub, true, false, Some(true))]
#[case(BinaryOp::Mul, true, false, Some(false))]
#[case(BinaryOp::Div, true, true, Some(true))]
#[case(BinaryOp::Div, false, false, None)]
#[case(BinaryOp::Rem, true, true, Some(true))]
#[case(BinaryOp::BitOr, false, true, Some(true))]
#[case(BinaryOp::BitAnd, true, true, Some(true))]
#[case(BinaryOp::BitXor, true, true, Some(false))]
fn boolean_logic(
    #[case] op: BinaryOp,
    #[case] lhs: bool,
    #[case] rhs: bool,
    #[case] expected: Option<bool>,
) {
    let result = Value::from(lhs).apply(op, &Value::from(rhs));
    assert_eq!(result, Value::from(expected));
}
