//! The `infer` command - classify a literal as a number kind.

use dynval_value::InferOptions;

use crate::cli::InferArgs;

pub fn run(args: InferArgs) -> String {
    let value = InferOptions::new()
        .collapse_integral(args.collapse)
        .infer(&args.text);
    format!("{}\t{}", value.kind(), value.to_etv())
}
