//! The `float64-checker` family: checks over 64-bit floats.

use super::unknown_function;
use crate::bind;
use crate::check::CheckFn;
use crate::checks;
use crate::errors::MakeError;
use crate::maker::{Invocation, Maker};
use crate::registry::Registry;
use std::collections::HashMap;

/// Family name for checks over `f64` values.
pub const FLOAT64_CHECKER: &str = "float64-checker";

const NO_ARGS: &[&str] = &[];
const ONE_FLOAT: &[&str] = &["float"];
const TWO_FLOATS: &[&str] = &["float", "float"];
const CHECKER_AND_DESC: &[&str] = &[FLOAT64_CHECKER, "string"];
const VARIADIC_CHECKERS: &[&str] = &["float64-checker ..."];

pub(crate) fn makers() -> HashMap<&'static str, Maker<f64>> {
    let mut makers = HashMap::new();
    makers.insert("OK", Maker { args: NO_ARGS, make: no_args });
    for name in ["GT", "GE", "LT", "LE"] {
        makers.insert(name, Maker { args: ONE_FLOAT, make: one_float });
    }
    makers.insert("Between", Maker { args: TWO_FLOATS, make: two_floats });
    makers.insert("Not", Maker { args: CHECKER_AND_DESC, make: negate });
    for name in ["And", "Or"] {
        makers.insert(name, Maker { args: VARIADIC_CHECKERS, make: combine });
    }
    makers
}

fn no_args(_: &Registry, invocation: Invocation<'_>) -> Result<CheckFn<f64>, MakeError> {
    invocation.require_args(0)?;
    match invocation.name {
        "OK" => Ok(checks::ok()),
        other => Err(unknown_function(other)),
    }
}

fn one_float(_: &Registry, invocation: Invocation<'_>) -> Result<CheckFn<f64>, MakeError> {
    let args = invocation.require_args(1)?;
    let limit = bind::f64_arg(args, 0)?;
    match invocation.name {
        "GT" => Ok(checks::gt(limit)),
        "GE" => Ok(checks::ge(limit)),
        "LT" => Ok(checks::lt(limit)),
        "LE" => Ok(checks::le(limit)),
        other => Err(unknown_function(other)),
    }
}

fn two_floats(_: &Registry, invocation: Invocation<'_>) -> Result<CheckFn<f64>, MakeError> {
    let args = invocation.require_args(2)?;
    let lower = bind::f64_arg(args, 0)?;
    let upper = bind::f64_arg(args, 1)?;
    match invocation.name {
        "Between" => Ok(checks::between(lower, upper)?),
        other => Err(unknown_function(other)),
    }
}

fn negate(registry: &Registry, invocation: Invocation<'_>) -> Result<CheckFn<f64>, MakeError> {
    let args = invocation.require_args(2)?;
    let inner = bind::check_arg::<f64>(registry, args, 0, FLOAT64_CHECKER)?;
    let desc = bind::str_arg(args, 1)?;
    match invocation.name {
        "Not" => Ok(checks::not(inner, desc)),
        other => Err(unknown_function(other)),
    }
}

fn combine(registry: &Registry, invocation: Invocation<'_>) -> Result<CheckFn<f64>, MakeError> {
    let args = invocation.variadic_args(1)?;
    let inners = bind::check_args::<f64>(registry, args, FLOAT64_CHECKER)?;
    match invocation.name {
        "And" => Ok(checks::and(inners)),
        "Or" => Ok(checks::or(inners)),
        other => Err(unknown_function(other)),
    }
}
