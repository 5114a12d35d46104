//! The `string-slice-checker` family: checks over lists of strings.
//!
//! This family leans hardest on checker-typed arguments: `Length` embeds
//! an int check, `SliceAny`/`SliceAll`/`SliceByPos` embed string checks,
//! and `Not`/`And`/`Or` embed checks from this family itself.

use super::int::INT_CHECKER;
use super::string::STRING_CHECKER;
use super::unknown_function;
use crate::bind;
use crate::check::CheckFn;
use crate::checks;
use crate::errors::MakeError;
use crate::maker::{Invocation, Maker};
use crate::registry::Registry;
use std::collections::HashMap;

/// Family name for checks over `Vec<String>` values.
pub const STRING_SLICE_CHECKER: &str = "string-slice-checker";

const NO_ARGS: &[&str] = &[];
const INT_CHECKER_ARG: &[&str] = &[INT_CHECKER];
const STRING_CHECKER_AND_DESC: &[&str] = &[STRING_CHECKER, "string"];
const STRING_CHECKER_ARG: &[&str] = &[STRING_CHECKER];
const VARIADIC_STRING_CHECKERS: &[&str] = &["string-checker ..."];
const CHECKER_AND_DESC: &[&str] = &[STRING_SLICE_CHECKER, "string"];
const VARIADIC_CHECKERS: &[&str] = &["string-slice-checker ..."];

pub(crate) fn makers() -> HashMap<&'static str, Maker<Vec<String>>> {
    let mut makers = HashMap::new();
    for name in ["OK", "NoDups"] {
        makers.insert(name, Maker { args: NO_ARGS, make: no_args });
    }
    makers.insert("Length", Maker { args: INT_CHECKER_ARG, make: length });
    makers.insert("Not", Maker { args: CHECKER_AND_DESC, make: negate });
    makers.insert(
        "SliceAny",
        Maker { args: STRING_CHECKER_AND_DESC, make: slice_any },
    );
    makers.insert(
        "SliceAll",
        Maker { args: STRING_CHECKER_ARG, make: slice_all },
    );
    makers.insert(
        "SliceByPos",
        Maker { args: VARIADIC_STRING_CHECKERS, make: slice_by_pos },
    );
    for name in ["And", "Or"] {
        makers.insert(name, Maker { args: VARIADIC_CHECKERS, make: combine });
    }
    makers
}

fn no_args(_: &Registry, invocation: Invocation<'_>) -> Result<CheckFn<Vec<String>>, MakeError> {
    invocation.require_args(0)?;
    match invocation.name {
        "OK" => Ok(checks::ok()),
        "NoDups" => Ok(checks::no_dups()),
        other => Err(unknown_function(other)),
    }
}

fn length(
    registry: &Registry,
    invocation: Invocation<'_>,
) -> Result<CheckFn<Vec<String>>, MakeError> {
    let args = invocation.require_args(1)?;
    let inner = bind::check_arg::<i32>(registry, args, 0, INT_CHECKER)?;
    match invocation.name {
        "Length" => Ok(checks::slice_length(inner)),
        other => Err(unknown_function(other)),
    }
}

fn negate(
    registry: &Registry,
    invocation: Invocation<'_>,
) -> Result<CheckFn<Vec<String>>, MakeError> {
    let args = invocation.require_args(2)?;
    let inner = bind::check_arg::<Vec<String>>(registry, args, 0, STRING_SLICE_CHECKER)?;
    let desc = bind::str_arg(args, 1)?;
    match invocation.name {
        "Not" => Ok(checks::not(inner, desc)),
        other => Err(unknown_function(other)),
    }
}

fn slice_any(
    registry: &Registry,
    invocation: Invocation<'_>,
) -> Result<CheckFn<Vec<String>>, MakeError> {
    let args = invocation.require_args(2)?;
    let inner = bind::check_arg::<String>(registry, args, 0, STRING_CHECKER)?;
    let desc = bind::str_arg(args, 1)?;
    match invocation.name {
        "SliceAny" => Ok(checks::slice_any(inner, desc)),
        other => Err(unknown_function(other)),
    }
}

fn slice_all(
    registry: &Registry,
    invocation: Invocation<'_>,
) -> Result<CheckFn<Vec<String>>, MakeError> {
    let args = invocation.require_args(1)?;
    let inner = bind::check_arg::<String>(registry, args, 0, STRING_CHECKER)?;
    match invocation.name {
        "SliceAll" => Ok(checks::slice_all(inner)),
        other => Err(unknown_function(other)),
    }
}

fn slice_by_pos(
    registry: &Registry,
    invocation: Invocation<'_>,
) -> Result<CheckFn<Vec<String>>, MakeError> {
    let args = invocation.variadic_args(1)?;
    let inners = bind::check_args::<String>(registry, args, STRING_CHECKER)?;
    match invocation.name {
        "SliceByPos" => Ok(checks::slice_by_pos(inners)),
        other => Err(unknown_function(other)),
    }
}

fn combine(
    registry: &Registry,
    invocation: Invocation<'_>,
) -> Result<CheckFn<Vec<String>>, MakeError> {
    let args = invocation.variadic_args(1)?;
    let inners = bind::check_args::<Vec<String>>(registry, args, STRING_SLICE_CHECKER)?;
    match invocation.name {
        "And" => Ok(checks::and(inners)),
        "Or" => Ok(checks::or(inners)),
        other => Err(unknown_function(other)),
    }
}
