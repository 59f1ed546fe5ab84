//! `json-with`: get or create a container in a document read from stdin.
//!
//! ```text
//! json-with <object|array> <pointer> [--mode none|nulls|all] [--no-prefer-index] [--merge <json>]
//! ```
//!
//! The whole resulting document is printed, pretty-printed. With `--merge`,
//! the given JSON is written into the container: object members are inserted
//! into an object; into an array, an array value is appended element-wise and
//! any other value is pushed.

use json_nav::{
    with_array_opts, with_object_opts, ContainerKind, JsonPointer, OverwriteMode, ParseModeError,
    PointerError, WithError, WithOptions,
};
use serde_json::Value;
use thiserror::Error;

pub const USAGE: &str = "usage: json-with <object|array> <pointer> [--mode none|nulls|all] [--no-prefer-index] [--merge <json>]";

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Pointer(#[from] PointerError),
    #[error(transparent)]
    Mode(#[from] ParseModeError),
    #[error(transparent)]
    With(#[from] WithError),
}

/// Parsed command line of `json-with`.
#[derive(Debug, Clone, PartialEq)]
pub struct WithArgs {
    pub kind: ContainerKind,
    pub pointer: JsonPointer,
    pub options: WithOptions,
    pub merge: Option<Value>,
}

/// Parse the arguments following the program name.
pub fn parse_args<I>(args: I) -> Result<WithArgs, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let kind = match args.next().as_deref() {
        Some("object") => ContainerKind::Object,
        Some("array") => ContainerKind::Array,
        Some(other) => {
            return Err(CliError::Usage(format!(
                "unknown container kind \"{other}\"\n{USAGE}"
            )))
        }
        None => return Err(CliError::Usage(USAGE.to_string())),
    };
    let pointer = match args.next() {
        Some(expr) => JsonPointer::compile(&expr)?,
        None => {
            return Err(CliError::Usage(format!(
                "second argument must be a JSON Pointer\n{USAGE}"
            )))
        }
    };

    let mut options = WithOptions::default();
    let mut merge = None;
    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--mode" => {
                let value = args
                    .next()
                    .ok_or_else(|| CliError::Usage("--mode needs a value".to_string()))?;
                options.mode = value.parse::<OverwriteMode>()?;
            }
            "--no-prefer-index" => options.prefer_index = false,
            "--merge" => {
                let value = args
                    .next()
                    .ok_or_else(|| CliError::Usage("--merge needs a JSON value".to_string()))?;
                merge = Some(serde_json::from_str(&value)?);
            }
            other => return Err(CliError::Usage(format!("unknown flag \"{other}\"\n{USAGE}"))),
        }
    }

    Ok(WithArgs {
        kind,
        pointer,
        options,
        merge,
    })
}

/// Apply `args` to the document in `doc_json` and return the pretty-printed
/// result.
pub fn run_with(doc_json: &str, args: &WithArgs) -> Result<String, CliError> {
    let mut doc: Value = serde_json::from_str(doc_json)?;
    match args.kind {
        ContainerKind::Object => {
            let target = with_object_opts(&mut doc, &args.pointer, &args.options)?;
            match &args.merge {
                Some(Value::Object(members)) => {
                    for (key, value) in members {
                        target.insert(key.clone(), value.clone());
                    }
                }
                Some(other) => {
                    return Err(CliError::Usage(format!(
                        "--merge into an object needs a JSON object, got {other}"
                    )))
                }
                None => {}
            }
        }
        ContainerKind::Array => {
            let target = with_array_opts(&mut doc, &args.pointer, &args.options)?;
            match &args.merge {
                Some(Value::Array(items)) => target.extend(items.iter().cloned()),
                Some(value) => target.push(value.clone()),
                None => {}
            }
        }
    }
    Ok(serde_json::to_string_pretty(&doc)?)
}
