//! Command implementations.
//!
//! Each subcommand has its own module with a `run` function returning the
//! line to print.

pub mod compare;
pub mod decode;
pub mod encode;
pub mod eval;
pub mod infer;
pub mod json;

use anyhow::{Context as _, Result};
use dynval_value::{TypedValue, ValueLimits, best_number_type};

/// State shared by every command
#[derive(Debug, Clone, Copy)]
pub struct Context {
    pub limits: ValueLimits,
}

/// Inferred number or boolean, otherwise the text itself
pub fn literal(text: &str, collapse_integral: bool) -> TypedValue {
    let inferred = best_number_type(text, collapse_integral);
    if inferred.is_null() {
        TypedValue::utf8(text)
    } else {
        inferred
    }
}

/// Decode `text` as ETV; malformed ETV falls back to [`literal`]
pub fn operand(text: &str, ctx: &Context) -> Result<TypedValue> {
    match TypedValue::from_etv_with_limits(text, &ctx.limits) {
        Ok(value) => Ok(value),
        Err(err) if err.is_syntax_error() && !looks_like_etv(text) => {
            tracing::debug!(code = err.code(), text, "operand is not ETV, reading as literal");
            Ok(literal(text, false))
        }
        Err(err) => Err(err).with_context(|| format!("invalid ETV operand '{text}'")),
    }
}

/// `code{...}` with a known-looking shape or a quoted string
fn looks_like_etv(text: &str) -> bool {
    let text = text.trim();
    if text.starts_with('"') {
        return true;
    }
    match text.split_once('{') {
        Some((code, _)) => {
            !code.is_empty()
                && code.bytes().all(|b| b.is_ascii_alphanumeric())
                && text.ends_with('}')
        }
        None => false,
    }
}
