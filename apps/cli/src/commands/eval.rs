//! The `eval` command - apply a binary operator.

use anyhow::{Result, anyhow};
use dynval_value::{BinaryOp, TypedValue};

use super::{Context, operand};
use crate::cli::EvalArgs;

pub fn run(args: EvalArgs, ctx: &Context) -> Result<String> {
    let op = BinaryOp::from_symbol(args.op.trim())
        .ok_or_else(|| anyhow!("unknown operator '{}'", args.op))?;
    let lhs = operand(&args.lhs, ctx)?;
    let rhs = operand(&args.rhs, ctx)?;
    let result = TypedValue::new(lhs.apply(op, &rhs));
    tracing::debug!(op = op.name(), kind = %result.kind(), "evaluated");
    Ok(result.to_etv())
}
