//! The `to-json` and `from-json` commands - the foreign value bridge.

use anyhow::{Context as _, Result};
use dynval_value::TypedValue;

use super::Context;
use crate::cli::{FromJsonArgs, ToJsonArgs};

pub fn to_json(args: ToJsonArgs, ctx: &Context) -> Result<String> {
    let value = TypedValue::from_etv_with_limits(&args.etv, &ctx.limits)
        .with_context(|| format!("cannot decode '{}'", args.etv))?;
    let json = value.as_foreign();
    let text = if args.pretty {
        serde_json::to_string_pretty(&json)?
    } else {
        serde_json::to_string(&json)?
    };
    Ok(text)
}

pub fn from_json(args: FromJsonArgs) -> Result<String> {
    let json: serde_json::Value =
        serde_json::from_str(&args.json).context("input is not valid JSON")?;
    Ok(TypedValue::from_foreign(json).to_etv())
}
