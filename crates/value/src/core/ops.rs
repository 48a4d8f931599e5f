//! Arithmetic, bitwise and concatenation operators
//!
//! Operators never fail loudly: overflow, division by zero and operands that
//! cannot be read as numbers all produce `Null`.
//!
//! Promotion rules:
//! - Boolean with Boolean is logical (`+` is OR, `-` XOR, `*` AND)
//! - a floating operand promotes both sides to `f64`
//! - unsigned with unsigned stays in `u64`, signed with signed in `i64`
//! - mixed signedness is exact: non-negative results are `u64`, negative
//!   ones `i64`; a negative operand with an unsigned one above `i64::MAX`
//!   is `Null`

use std::fmt;
use std::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Not, Rem, Sub};

use crate::core::kind::ValueKind;
use crate::core::typed_value::TypedValue;
use crate::core::value::Value;
use crate::scalar::Number;

/// Binary operator applied by [`Value::apply`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    BitOr,
    BitAnd,
    BitXor,
    Concat,
}

impl BinaryOp {
    pub const ALL: [BinaryOp; 9] = [
        Self::Add,
        Self::Sub,
        Self::Mul,
        Self::Div,
        Self::Rem,
        Self::BitOr,
        Self::BitAnd,
        Self::BitXor,
        Self::Concat,
    ];

    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Rem => "%",
            Self::BitOr => "|",
            Self::BitAnd => "&",
            Self::BitXor => "^",
            Self::Concat => "++",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Mul => "mul",
            Self::Div => "div",
            Self::Rem => "rem",
            Self::BitOr => "bit_or",
            Self::BitAnd => "bit_and",
            Self::BitXor => "bit_xor",
            Self::Concat => "concat",
        }
    }

    /// Accepts the symbol or the name
    pub fn from_symbol(text: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|op| op.symbol() == text || op.name() == text)
    }

    const fn is_bitwise(self) -> bool {
        matches!(self, Self::BitOr | Self::BitAnd | Self::BitXor)
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl Value {
    /// Apply `op` to `self` and `rhs`
    pub fn apply(&self, op: BinaryOp, rhs: &Value) -> Value {
        let result = match op {
            BinaryOp::Concat => Some(self.concat(rhs)),
            _ if self.kind() == ValueKind::Boolean && rhs.kind() == ValueKind::Boolean => {
                boolean_op(op, self.boolean(), rhs.boolean())
            }
            _ if op.is_bitwise() => bitwise_op(op, self, rhs),
            _ => arithmetic_op(op, self, rhs),
        };
        result.unwrap_or_else(|| {
            tracing::trace!(
                op = op.name(),
                lhs = %self.kind(),
                rhs = %rhs.kind(),
                "operation produced null"
            );
            Value::Null
        })
    }

    /// Bytes with Bytes joins the buffers; anything else joins text forms
    pub fn concat(&self, rhs: &Value) -> Value {
        match (self, rhs) {
            (Value::Bytes(a), Value::Bytes(b)) => Value::Bytes(a.concat(b)),
            _ => Value::utf8(format!("{self}{rhs}")),
        }
    }
}

fn boolean_op(op: BinaryOp, a: bool, b: bool) -> Option<Value> {
    let result = match op {
        BinaryOp::Add | BinaryOp::BitOr => a | b,
        BinaryOp::Sub | BinaryOp::BitXor => a ^ b,
        BinaryOp::Mul | BinaryOp::BitAnd => a & b,
        BinaryOp::Div | BinaryOp::Rem if b => a,
        BinaryOp::Div | BinaryOp::Rem | BinaryOp::Concat => return None,
    };
    Some(Value::from(result))
}

fn bitwise_op(op: BinaryOp, lhs: &Value, rhs: &Value) -> Option<Value> {
    let a = lhs.as_unsigned64()?;
    let b = rhs.as_unsigned64()?;
    let result = match op {
        BinaryOp::BitOr => a | b,
        BinaryOp::BitAnd => a & b,
        BinaryOp::BitXor => a ^ b,
        _ => return None,
    };
    Some(Value::from(result))
}

fn arithmetic_op(op: BinaryOp, lhs: &Value, rhs: &Value) -> Option<Value> {
    let a = lhs.resolve_number()?;
    let b = rhs.resolve_number()?;
    if a.is_float() || b.is_float() {
        return float_op(op, a.to_f64(), b.to_f64()).map(Value::from);
    }
    match (a, b) {
        (Number::Unsigned(x), Number::Unsigned(y)) => unsigned_op(op, x, y),
        (Number::Signed(x), Number::Signed(y)) => signed_op(op, x, y),
        (Number::Unsigned(x), Number::Signed(y)) => mixed_op(op, x.into(), y.into()),
        (Number::Signed(x), Number::Unsigned(y)) => mixed_op(op, x.into(), y.into()),
        _ => None,
    }
}

/// One signed and one unsigned operand, computed exactly in `i128`.
///
/// A negative operand paired with an unsigned one above `i64::MAX` is Null.
/// Non-negative results are Unsigned64, negative ones Signed64.
fn mixed_op(op: BinaryOp, a: i128, b: i128) -> Option<Value> {
    let (low, high) = (a.min(b), a.max(b));
    if low < 0 && high > i128::from(i64::MAX) {
        return None;
    }
    let result = match op {
        BinaryOp::Add => a.checked_add(b),
        BinaryOp::Sub => a.checked_sub(b),
        BinaryOp::Mul => a.checked_mul(b),
        BinaryOp::Div => a.checked_div(b),
        BinaryOp::Rem => a.checked_rem(b),
        _ => None,
    }?;
    match u64::try_from(result) {
        Ok(unsigned) => Some(Value::from(unsigned)),
        Err(_) => i64::try_from(result).ok().map(Value::from),
    }
}

fn float_op(op: BinaryOp, a: f64, b: f64) -> Option<f64> {
    match op {
        BinaryOp::Add => Some(a + b),
        BinaryOp::Sub => Some(a - b),
        BinaryOp::Mul => Some(a * b),
        BinaryOp::Div => Some(a / b),
        BinaryOp::Rem => Some(a % b),
        _ => None,
    }
}

fn unsigned_op(op: BinaryOp, a: u64, b: u64) -> Option<Value> {
    let result = match op {
        BinaryOp::Add => a.checked_add(b),
        BinaryOp::Sub => a.checked_sub(b),
        BinaryOp::Mul => a.checked_mul(b),
        BinaryOp::Div => a.checked_div(b),
        BinaryOp::Rem => a.checked_rem(b),
        _ => None,
    };
    result.map(Value::from)
}

fn signed_op(op: BinaryOp, a: i64, b: i64) -> Option<Value> {
    let result = match op {
        BinaryOp::Add => a.checked_add(b),
        BinaryOp::Sub => a.checked_sub(b),
        BinaryOp::Mul => a.checked_mul(b),
        BinaryOp::Div => a.checked_div(b),
        BinaryOp::Rem => a.checked_rem(b),
        _ => None,
    };
    result.map(Value::from)
}

// ==================== std operator traits ====================

macro_rules! typed_value_op {
    ($($trait:ident :: $method:ident => $op:ident),+ $(,)?) => {
        $(
            impl $trait<&TypedValue> for &TypedValue {
                type Output = TypedValue;

                fn $method(self, rhs: &TypedValue) -> TypedValue {
                    TypedValue::new(self.value().apply(BinaryOp::$op, rhs.value()))
                }
            }

            impl $trait for TypedValue {
                type Output = TypedValue;

                fn $method(self, rhs: TypedValue) -> TypedValue {
                    $trait::$method(&self, &rhs)
                }
            }
        )+
    };
}

typed_value_op!(
    Add::add => Add,
    Sub::sub => Sub,
    Mul::mul => Mul,
    Div::div => Div,
    Rem::rem => Rem,
    BitOr::bitor => BitOr,
    BitAnd::bitand => BitAnd,
    BitXor::bitxor => BitXor,
);

impl Not for &TypedValue {
    type Output = bool;

    /// `!value` is the falsy test
    fn not(self) -> bool {
        self.is_falsy()
    }
}

impl Not for TypedValue {
    type Output = bool;

    fn not(self) -> bool {
        self.is_falsy()
    }
}
