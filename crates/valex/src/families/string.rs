//! The `string-checker` family: checks over strings.

use super::int::INT_CHECKER;
use super::unknown_function;
use crate::bind;
use crate::check::CheckFn;
use crate::checks::{self, ConstructionError};
use crate::errors::MakeError;
use crate::maker::{Invocation, Maker};
use crate::registry::Registry;
use regex::Regex;
use std::collections::HashMap;

/// Family name for checks over `String` values.
pub const STRING_CHECKER: &str = "string-checker";

const NO_ARGS: &[&str] = &[];
const ONE_STRING: &[&str] = &["string"];
const INT_CHECKER_ARG: &[&str] = &[INT_CHECKER];
const REGEXP_AND_DESC: &[&str] = &["regexp", "string"];
const CHECKER_AND_DESC: &[&str] = &[STRING_CHECKER, "string"];
const VARIADIC_CHECKERS: &[&str] = &["string-checker ..."];

pub(crate) fn makers() -> HashMap<&'static str, Maker<String>> {
    let mut makers = HashMap::new();
    makers.insert("OK", Maker { args: NO_ARGS, make: no_args });
    for name in ["EQ", "GT", "GE", "LT", "LE", "HasPrefix", "HasSuffix"] {
        makers.insert(name, Maker { args: ONE_STRING, make: one_string });
    }
    makers.insert("Length", Maker { args: INT_CHECKER_ARG, make: length });
    makers.insert(
        "MatchesPattern",
        Maker { args: REGEXP_AND_DESC, make: matches_pattern },
    );
    makers.insert("Not", Maker { args: CHECKER_AND_DESC, make: negate });
    for name in ["And", "Or"] {
        makers.insert(name, Maker { args: VARIADIC_CHECKERS, make: combine });
    }
    makers
}

fn no_args(_: &Registry, invocation: Invocation<'_>) -> Result<CheckFn<String>, MakeError> {
    invocation.require_args(0)?;
    match invocation.name {
        "OK" => Ok(checks::ok()),
        other => Err(unknown_function(other)),
    }
}

fn one_string(_: &Registry, invocation: Invocation<'_>) -> Result<CheckFn<String>, MakeError> {
    let args = invocation.require_args(1)?;
    let limit = bind::str_arg(args, 0)?;
    match invocation.name {
        "EQ" => Ok(checks::eq(limit)),
        "GT" => Ok(checks::gt(limit)),
        "GE" => Ok(checks::ge(limit)),
        "LT" => Ok(checks::lt(limit)),
        "LE" => Ok(checks::le(limit)),
        "HasPrefix" => Ok(checks::has_prefix(limit)),
        "HasSuffix" => Ok(checks::has_suffix(limit)),
        other => Err(unknown_function(other)),
    }
}

fn length(registry: &Registry, invocation: Invocation<'_>) -> Result<CheckFn<String>, MakeError> {
    let args = invocation.require_args(1)?;
    let inner = bind::check_arg::<i32>(registry, args, 0, INT_CHECKER)?;
    match invocation.name {
        "Length" => Ok(checks::string_length(inner)),
        other => Err(unknown_function(other)),
    }
}

fn matches_pattern(
    _: &Registry,
    invocation: Invocation<'_>,
) -> Result<CheckFn<String>, MakeError> {
    let args = invocation.require_args(2)?;
    let pattern_text = bind::str_arg(args, 0)?;
    let pattern = Regex::new(&pattern_text).map_err(ConstructionError::from)?;
    let desc = bind::str_arg(args, 1)?;
    match invocation.name {
        "MatchesPattern" => Ok(checks::matches_pattern(pattern, desc)),
        other => Err(unknown_function(other)),
    }
}

fn negate(registry: &Registry, invocation: Invocation<'_>) -> Result<CheckFn<String>, MakeError> {
    let args = invocation.require_args(2)?;
    let inner = bind::check_arg::<String>(registry, args, 0, STRING_CHECKER)?;
    let desc = bind::str_arg(args, 1)?;
    match invocation.name {
        "Not" => Ok(checks::not(inner, desc)),
        other => Err(unknown_function(other)),
    }
}

fn combine(registry: &Registry, invocation: Invocation<'_>) -> Result<CheckFn<String>, MakeError> {
    let args = invocation.variadic_args(1)?;
    let inners = bind::check_args::<String>(registry, args, STRING_CHECKER)?;
    match invocation.name {
        "And" => Ok(checks::and(inners)),
        "Or" => Ok(checks::or(inners)),
        other => Err(unknown_function(other)),
    }
}
