//! The `int64-checker` family: checks over 64-bit integers.

use super::unknown_function;
use crate::bind;
use crate::check::CheckFn;
use crate::checks;
use crate::errors::MakeError;
use crate::maker::{Invocation, Maker};
use crate::registry::Registry;
use std::collections::HashMap;

/// Family name for checks over `i64` values.
pub const INT64_CHECKER: &str = "int64-checker";

const NO_ARGS: &[&str] = &[];
const ONE_INT: &[&str] = &["int"];
const TWO_INTS: &[&str] = &["int", "int"];
const CHECKER_AND_DESC: &[&str] = &[INT64_CHECKER, "string"];
const VARIADIC_CHECKERS: &[&str] = &["int64-checker ..."];

pub(crate) fn makers() -> HashMap<&'static str, Maker<i64>> {
    let mut makers = HashMap::new();
    makers.insert("OK", Maker { args: NO_ARGS, make: no_args });
    for name in ["EQ", "GT", "GE", "LT", "LE", "Divides", "IsAMultiple"] {
        makers.insert(name, Maker { args: ONE_INT, make: one_int });
    }
    makers.insert("Between", Maker { args: TWO_INTS, make: two_ints });
    makers.insert("Not", Maker { args: CHECKER_AND_DESC, make: negate });
    for name in ["And", "Or"] {
        makers.insert(name, Maker { args: VARIADIC_CHECKERS, make: combine });
    }
    makers
}

fn no_args(_: &Registry, invocation: Invocation<'_>) -> Result<CheckFn<i64>, MakeError> {
    invocation.require_args(0)?;
    match invocation.name {
        "OK" => Ok(checks::ok()),
        other => Err(unknown_function(other)),
    }
}

fn one_int(_: &Registry, invocation: Invocation<'_>) -> Result<CheckFn<i64>, MakeError> {
    let args = invocation.require_args(1)?;
    let limit = bind::i64_arg(args, 0)?;
    match invocation.name {
        "EQ" => Ok(checks::eq(limit)),
        "GT" => Ok(checks::gt(limit)),
        "GE" => Ok(checks::ge(limit)),
        "LT" => Ok(checks::lt(limit)),
        "LE" => Ok(checks::le(limit)),
        "Divides" => Ok(checks::divides(limit)),
        "IsAMultiple" => Ok(checks::is_a_multiple(limit)?),
        other => Err(unknown_function(other)),
    }
}

fn two_ints(_: &Registry, invocation: Invocation<'_>) -> Result<CheckFn<i64>, MakeError> {
    let args = invocation.require_args(2)?;
    let lower = bind::i64_arg(args, 0)?;
    let upper = bind::i64_arg(args, 1)?;
    match invocation.name {
        "Between" => Ok(checks::between(lower, upper)?),
        other => Err(unknown_function(other)),
    }
}

fn negate(registry: &Registry, invocation: Invocation<'_>) -> Result<CheckFn<i64>, MakeError> {
    let args = invocation.require_args(2)?;
    let inner = bind::check_arg::<i64>(registry, args, 0, INT64_CHECKER)?;
    let desc = bind::str_arg(args, 1)?;
    match invocation.name {
        "Not" => Ok(checks::not(inner, desc)),
        other => Err(unknown_function(other)),
    }
}

fn combine(registry: &Registry, invocation: Invocation<'_>) -> Result<CheckFn<i64>, MakeError> {
    let args = invocation.variadic_args(1)?;
    let inners = bind::check_args::<i64>(registry, args, INT64_CHECKER)?;
    match invocation.name {
        "And" => Ok(checks::and(inners)),
        "Or" => Ok(checks::or(inners)),
        other => Err(unknown_function(other)),
    }
}
