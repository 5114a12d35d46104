//! Typed parsers: named collections of makers producing check functions
//! over one value type.

use crate::check::CheckFn;
use crate::errors::{MakeError, ParseError};
use crate::maker::{Invocation, Maker};
use crate::panic::panic_message;
use crate::registry::Registry;
use std::collections::HashMap;
use std::panic::{AssertUnwindSafe, catch_unwind};
use thiserror::Error;
use valex_syntax::{ExprNode, read};

/// Error returned when a maker name is looked up that the family does not
/// define.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown maker: `{name}`")]
pub struct UnknownMaker {
    /// The unrecognised maker name.
    pub name: String,
}

/// A typed, named collection of makers that all produce check functions
/// over the same value type.
///
/// Parsers are created through [`Registry::register`] and retrieved with
/// [`Registry::find`]; they are immutable for the life of the registry.
#[derive(Debug)]
pub struct Parser<T> {
    family: &'static str,
    makers: HashMap<&'static str, Maker<T>>,
}

impl<T: 'static> Parser<T> {
    pub(crate) fn new(family: &'static str, makers: HashMap<&'static str, Maker<T>>) -> Self {
        Self { family, makers }
    }

    /// The family name this parser was registered under.
    #[must_use]
    pub fn family_name(&self) -> &'static str {
        self.family
    }

    /// The names of the available makers, in alphabetical order.
    #[must_use]
    pub fn maker_names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.makers.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// The argument descriptors the named maker expects.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownMaker`] when the family does not define `name`.
    pub fn maker_args(&self, name: &str) -> Result<&'static [&'static str], UnknownMaker> {
        self.makers
            .get(name)
            .map(|maker| maker.args)
            .ok_or_else(|| UnknownMaker {
                name: name.to_owned(),
            })
    }

    /// Every maker name paired with its argument descriptors, sorted by
    /// name. This is the metadata the allowed-values output renders.
    #[must_use]
    pub fn maker_shapes(&self) -> Vec<(&'static str, &'static [&'static str])> {
        let mut shapes: Vec<(&'static str, &'static [&'static str])> = self
            .makers
            .iter()
            .map(|(name, maker)| (*name, maker.args))
            .collect();
        shapes.sort_unstable_by_key(|(name, _)| *name);
        shapes
    }

    /// Parse expression text into one check function per top-level entry.
    ///
    /// Parsing stops at the first failing entry; the failure is wrapped
    /// with this family's name. A successful parse of N entries always
    /// yields exactly N check functions.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Syntax`] when the text does not fit the
    /// grammar and [`ParseError::Make`] when an entry fails to build.
    pub fn parse(&self, registry: &Registry, text: &str) -> Result<Vec<CheckFn<T>>, ParseError> {
        let entries = read(text)?;
        let mut checks = Vec::with_capacity(entries.len());
        for entry in &entries {
            let check = self
                .parse_entry(registry, entry)
                .map_err(|source| ParseError::Make {
                    family: self.family.to_owned(),
                    source,
                })?;
            checks.push(check);
        }
        Ok(checks)
    }

    /// Build one check function from one parsed entry.
    ///
    /// A panic inside the maker body is recovered here and converted into
    /// [`MakeError::Internal`], so a single faulty nested call cannot abort
    /// the rest of the process. You should only need this when writing
    /// your own maker bodies.
    ///
    /// # Errors
    ///
    /// Returns [`MakeError`] when the entry is not an identifier or call,
    /// names an unknown function, or its maker rejects the arguments.
    pub fn parse_entry(
        &self,
        registry: &Registry,
        node: &ExprNode,
    ) -> Result<CheckFn<T>, MakeError> {
        match catch_unwind(AssertUnwindSafe(|| self.dispatch(registry, node))) {
            Ok(outcome) => outcome,
            Err(payload) => Err(MakeError::Internal {
                family: self.family,
                message: panic_message(payload.as_ref()),
            }),
        }
    }

    fn dispatch(&self, registry: &Registry, node: &ExprNode) -> Result<CheckFn<T>, MakeError> {
        match node {
            ExprNode::Ident(name) => self.run_maker(registry, Invocation { name, args: None }),
            ExprNode::Call { name, args } => self.run_maker(
                registry,
                Invocation {
                    name,
                    args: Some(args),
                },
            ),
            ExprNode::Literal(_) => Err(MakeError::UnexpectedNode { kind: node.kind() }),
        }
    }

    fn run_maker(
        &self,
        registry: &Registry,
        invocation: Invocation<'_>,
    ) -> Result<CheckFn<T>, MakeError> {
        let Some(maker) = self.makers.get(invocation.name) else {
            return Err(MakeError::UnknownFunction {
                name: invocation.name.to_owned(),
            });
        };
        let name = invocation.name.to_owned();
        (maker.make)(registry, invocation).map_err(|source| MakeError::InCall {
            name,
            shape: maker.args.join(", "),
            source: Box::new(source),
        })
    }
}
