//! The `decode` command - print the kind and text form of an ETV value.

use anyhow::{Context as _, Result};
use dynval_value::TypedValue;

use super::Context;
use crate::cli::DecodeArgs;

pub fn run(args: DecodeArgs, ctx: &Context) -> Result<String> {
    let value = TypedValue::from_etv_with_limits(&args.etv, &ctx.limits)
        .with_context(|| format!("cannot decode '{}'", args.etv))?;
    Ok(format!("{}\t{}", value.kind(), value))
}
