//! Command-line interface definitions.
//!
//! Only clap structs live here; the commands are in `commands`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// dynval - dynamically typed values and the ETV text format
#[derive(Parser, Debug)]
#[command(name = "dynval", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Config file (defaults to ./dynval.toml when present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log filter directive, e.g. `debug` or `dynval_value=trace`
    #[arg(long, global = true, value_name = "FILTER")]
    pub log_level: Option<String>,

    /// Log output format
    #[arg(long, global = true)]
    pub log_format: Option<LogFormat>,

    /// ETV decode limits preset
    #[arg(long, global = true, value_name = "PRESET")]
    pub limits: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Infer a literal and print it as ETV
    Encode(EncodeArgs),

    /// Decode ETV and print `kind<TAB>text`
    Decode(DecodeArgs),

    /// Infer the best number kind for a literal
    Infer(InferArgs),

    /// Compare two operands with the numeric-first comparator
    Compare(CompareArgs),

    /// Apply a binary operator and print the result as ETV
    Eval(EvalArgs),

    /// Decode ETV and print its JSON form
    ToJson(ToJsonArgs),

    /// Read JSON and print it as ETV
    FromJson(FromJsonArgs),
}

/// Arguments for the `encode` command.
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Literal text; numbers and booleans are inferred, anything else is utf8
    pub literal: String,

    /// Convert to this kind before encoding (e.g. `float64`, `point`, `bytes`)
    #[arg(long = "as", value_name = "KIND")]
    pub kind: Option<String>,

    /// Report integral floats as integers
    #[arg(long)]
    pub collapse: bool,
}

/// Arguments for the `decode` command.
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// ETV text
    pub etv: String,
}

/// Arguments for the `infer` command.
#[derive(Args, Debug)]
pub struct InferArgs {
    /// Text to classify
    pub text: String,

    /// Report integral floats as integers
    #[arg(long)]
    pub collapse: bool,
}

/// Arguments for the `compare` command.
#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Left operand, ETV or plain text
    pub lhs: String,

    /// Right operand, ETV or plain text
    pub rhs: String,

    /// Treat null and NaN as the empty string
    #[arg(long)]
    pub nan_as_empty: bool,
}

/// Arguments for the `eval` command.
#[derive(Args, Debug)]
pub struct EvalArgs {
    /// Left operand, ETV or literal
    #[arg(allow_hyphen_values = true)]
    pub lhs: String,

    /// Operator: + - * / % | & ^ ++ (or add, sub, ...)
    #[arg(allow_hyphen_values = true)]
    pub op: String,

    /// Right operand, ETV or literal
    #[arg(allow_hyphen_values = true)]
    pub rhs: String,
}

/// Arguments for the `to-json` command.
#[derive(Args, Debug)]
pub struct ToJsonArgs {
    /// ETV text
    pub etv: String,

    /// Pretty-print the JSON
    #[arg(long)]
    pub pretty: bool,
}

/// Arguments for the `from-json` command.
#[derive(Args, Debug)]
pub struct FromJsonArgs {
    /// JSON document
    pub json: String,
}

/// Log format flag.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl From<LogFormat> for dynval_log::Format {
    fn from(format: LogFormat) -> Self {
        match format {
            LogFormat::Compact => Self::Compact,
            LogFormat::Pretty => Self::Pretty,
            LogFormat::Json => Self::Json,
        }
    }
}
