//! Error types for maker dispatch and parsing.
//!
//! Every layer wraps the error it receives with just enough context
//! (function name, expected shape, argument index, family name) to make a
//! multi-level nested failure diagnosable without re-parsing. No layer
//! drops or rewrites an inner message.

use crate::checks::ConstructionError;
use crate::registry::RegistryError;
use thiserror::Error;
use valex_syntax::{LiteralError, NodeKind, SyntaxError};

/// Errors surfaced while constructing one check function from one entry.
#[derive(Debug, Error)]
pub enum MakeError {
    /// The entry named a function the family does not provide.
    #[error("`{name}` is an unknown function")]
    UnknownFunction {
        /// The unrecognised function name.
        name: String,
    },
    /// The call carried the wrong number of arguments.
    #[error("the call has {actual} arguments, it should have {expected}")]
    ArgCount {
        /// How many arguments the call carried.
        actual: usize,
        /// How many the maker requires.
        expected: usize,
    },
    /// A variadic call carried fewer arguments than the position allows.
    #[error("the call has {actual} arguments, it should have at least {min}")]
    ArgCountAtLeast {
        /// How many arguments the call carried.
        actual: usize,
        /// The minimum the maker requires.
        min: usize,
    },
    /// An argument index beyond the argument list was requested.
    #[error("couldn't get argument {index}, too few arguments in the call")]
    MissingArgument {
        /// The requested argument index.
        index: usize,
    },
    /// A top-level element was neither an identifier nor a call.
    #[error("unexpected type: {kind}")]
    UnexpectedNode {
        /// The structural kind of the offending node.
        kind: NodeKind,
    },
    /// An integer literal was out of range of the family's value type.
    #[error("couldn't make an int from `{text}`: the value is out of range of an i32")]
    IntRange {
        /// The offending literal text.
        text: String,
    },
    /// A literal argument failed to convert.
    #[error(transparent)]
    Literal(#[from] LiteralError),
    /// A registry lookup for a checker-typed argument failed.
    #[error(transparent)]
    Registry(#[from] RegistryError),
    /// The check-function constructor rejected its well-typed arguments.
    #[error(transparent)]
    Construction(#[from] ConstructionError),
    /// A checker-typed argument failed to build.
    #[error("can't convert argument {index} to {family}: {source}")]
    Nested {
        /// The argument index that failed.
        index: usize,
        /// The family the argument was being converted to.
        family: &'static str,
        /// The underlying failure.
        source: Box<MakeError>,
    },
    /// A maker failure wrapped with the call's name and expected shape.
    #[error("{name}({shape}): {source}")]
    InCall {
        /// The function name that was being built.
        name: String,
        /// The canonical rendering of the maker's expected arguments.
        shape: String,
        /// The underlying failure.
        source: Box<MakeError>,
    },
    /// A fault inside a maker body, recovered at the dispatch boundary.
    #[error("can't create the {family} func: {message}")]
    Internal {
        /// The family whose maker faulted.
        family: &'static str,
        /// The formatted panic payload.
        message: String,
    },
}

/// Errors surfaced by [`Parser::parse`](crate::Parser::parse).
#[derive(Debug, Error)]
pub enum ParseError {
    /// The expression text did not fit the grammar.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    /// One entry failed to build, wrapped with the family name.
    #[error("can't make {family} function: {source}")]
    Make {
        /// The family whose parse failed.
        family: String,
        /// The underlying failure.
        source: MakeError,
    },
}
