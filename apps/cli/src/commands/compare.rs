//! The `compare` command - numeric-first comparison of two operands.

use anyhow::Result;
use dynval_value::CompareOptions;

use super::{Context, operand};
use crate::cli::CompareArgs;

pub fn run(args: CompareArgs, ctx: &Context) -> Result<String> {
    let lhs = operand(&args.lhs, ctx)?;
    let rhs = operand(&args.rhs, ctx)?;
    let ordering = lhs.compare_with(&rhs, CompareOptions::new(args.nan_as_empty));
    Ok(ordering.to_string())
}
