//! Argument binding: pulling typed values and nested check functions out
//! of a call's argument list on behalf of maker bodies.

use crate::check::CheckFn;
use crate::errors::MakeError;
use crate::registry::Registry;
use valex_syntax::{ExprNode, read_float, read_int, read_str};

pub(crate) fn arg<'a>(args: &'a [ExprNode], index: usize) -> Result<&'a ExprNode, MakeError> {
    args.get(index).ok_or(MakeError::MissingArgument { index })
}

pub(crate) fn i64_arg(args: &[ExprNode], index: usize) -> Result<i64, MakeError> {
    Ok(read_int(arg(args, index)?)?)
}

/// Read an INT literal and narrow it to the `int-checker` value type,
/// range-checked.
pub(crate) fn i32_arg(args: &[ExprNode], index: usize) -> Result<i32, MakeError> {
    let node = arg(args, index)?;
    let wide = read_int(node)?;
    i32::try_from(wide).map_err(|_| MakeError::IntRange {
        text: match node {
            ExprNode::Literal(lit) => lit.text.clone(),
            _ => wide.to_string(),
        },
    })
}

pub(crate) fn f64_arg(args: &[ExprNode], index: usize) -> Result<f64, MakeError> {
    Ok(read_float(arg(args, index)?)?)
}

pub(crate) fn str_arg(args: &[ExprNode], index: usize) -> Result<String, MakeError> {
    Ok(read_str(arg(args, index)?)?)
}

/// Bind argument `index` as a nested check function of the named family.
///
/// The sub-node must itself be an identifier or call; it is dispatched
/// through the referenced family's parser, and any failure is wrapped with
/// the argument index and target family so the error path stays traceable.
pub(crate) fn check_arg<U: 'static>(
    registry: &Registry,
    args: &[ExprNode],
    index: usize,
    family: &'static str,
) -> Result<CheckFn<U>, MakeError> {
    let node = arg(args, index)?;
    let parser = registry.find::<U>(family)?;
    parser
        .parse_entry(registry, node)
        .map_err(|source| MakeError::Nested {
            index,
            family,
            source: Box::new(source),
        })
}

/// Bind every argument as a nested check function of the named family.
pub(crate) fn check_args<U: 'static>(
    registry: &Registry,
    args: &[ExprNode],
    family: &'static str,
) -> Result<Vec<CheckFn<U>>, MakeError> {
    let parser = registry.find::<U>(family)?;
    let mut checks = Vec::with_capacity(args.len());
    for (index, node) in args.iter().enumerate() {
        let check = parser
            .parse_entry(registry, node)
            .map_err(|source| MakeError::Nested {
                index,
                family,
                source: Box::new(source),
            })?;
        checks.push(check);
    }
    Ok(checks)
}
