//! Maker records: named constructors that build one check function from a
//! parsed entry's arguments.

use crate::check::CheckFn;
use crate::errors::MakeError;
use crate::registry::Registry;
use valex_syntax::ExprNode;

/// The function a [`Maker`] runs to build one check function.
///
/// The registry is passed through so makers with checker-typed argument
/// positions can resolve the referenced family; lookup is the only use a
/// maker has for it.
pub type MakerFn<T> = fn(&Registry, Invocation<'_>) -> Result<CheckFn<T>, MakeError>;

/// One named constructor for a family of check functions.
///
/// `args` is the canonical description of the expected arguments, one
/// descriptor per position (`"int"`, `"string"`, a family name for a
/// checker-typed position, or `"<family> ..."` for a variadic tail). The
/// descriptors are documentation for the allowed-values output; the maker
/// body remains the single source of truth for count-checking, because one
/// body may serve several differently named functions.
#[derive(Debug)]
pub struct Maker<T> {
    /// Canonical argument descriptors for this maker.
    pub args: &'static [&'static str],
    /// The constructor invoked by the dispatcher.
    pub make: MakerFn<T>,
}

impl<T> Clone for Maker<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Maker<T> {}

/// One dispatched entry: the function name and, for call entries, the
/// parsed argument list. An identifier entry carries `args: None`.
#[derive(Debug, Clone, Copy)]
pub struct Invocation<'a> {
    /// The function name being invoked.
    pub name: &'a str,
    /// The call's arguments; `None` when the entry was a bare identifier.
    pub args: Option<&'a [ExprNode]>,
}

impl<'a> Invocation<'a> {
    /// Require exactly `expected` arguments. A bare identifier satisfies a
    /// zero-argument requirement.
    ///
    /// # Errors
    ///
    /// Returns [`MakeError::ArgCount`] when the count differs.
    pub fn require_args(&self, expected: usize) -> Result<&'a [ExprNode], MakeError> {
        match self.args {
            None if expected == 0 => Ok(&[]),
            None => Err(MakeError::ArgCount {
                actual: 0,
                expected,
            }),
            Some(args) if args.len() == expected => Ok(args),
            Some(args) => Err(MakeError::ArgCount {
                actual: args.len(),
                expected,
            }),
        }
    }

    /// Require at least `min` arguments for a variadic position.
    ///
    /// # Errors
    ///
    /// Returns [`MakeError::ArgCountAtLeast`] when fewer are present.
    pub fn variadic_args(&self, min: usize) -> Result<&'a [ExprNode], MakeError> {
        let args = self.args.unwrap_or(&[]);
        if args.len() < min {
            Err(MakeError::ArgCountAtLeast {
                actual: args.len(),
                min,
            })
        } else {
            Ok(args)
        }
    }
}
