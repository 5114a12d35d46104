//! The registry: a type-erased map from family name to typed parser.
//!
//! The registry is an explicit value owned by the embedding application,
//! constructed once during startup and read-only from then on. Lookup
//! recovers the typed parser through a checked downcast, never an
//! unchecked cast.

use crate::check::CheckFn;
use crate::errors::ParseError;
use crate::families;
use crate::maker::Maker;
use crate::parser::Parser;
use std::any::Any;
use std::collections::HashMap;
use thiserror::Error;

/// Errors raised by registry configuration and lookup.
///
/// Duplicate registration and type mismatches are programming errors meant
/// to be caught in development, not recovered from under user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A family was registered twice.
    #[error("a parser for `{family}` already exists")]
    DuplicateFamily {
        /// The family name registered twice.
        family: &'static str,
    },
    /// A lookup named a family nothing has registered.
    #[error("there is no parser registered for `{family}`")]
    UnknownFamily {
        /// The family name that was looked up.
        family: String,
    },
    /// A lookup requested a different value type than the family was
    /// registered with.
    #[error("the parser for `{family}` is of the wrong type ({actual})")]
    WrongValueType {
        /// The family name that was looked up.
        family: String,
        /// The type the family is actually registered with.
        actual: &'static str,
    },
}

/// The type-independent surface of a [`Parser`], used for storage and for
/// the introspection paths that never need the value type.
pub(crate) trait ErasedParser: Send + Sync {
    fn family_name(&self) -> &'static str;
    fn maker_shapes(&self) -> Vec<(&'static str, &'static [&'static str])>;
    fn value_type_name(&self) -> &'static str;
    fn as_any(&self) -> &dyn Any;
}

impl<T: 'static> ErasedParser for Parser<T> {
    fn family_name(&self) -> &'static str {
        Self::family_name(self)
    }

    fn maker_shapes(&self) -> Vec<(&'static str, &'static [&'static str])> {
        Self::maker_shapes(self)
    }

    fn value_type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A map from family name to type-erased parser.
#[derive(Default)]
pub struct Registry {
    parsers: HashMap<&'static str, Box<dyn ErasedParser>>,
}

impl Registry {
    /// An empty registry with no families.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with the five standard families pre-registered:
    /// [`INT_CHECKER`](crate::INT_CHECKER),
    /// [`INT64_CHECKER`](crate::INT64_CHECKER),
    /// [`FLOAT64_CHECKER`](crate::FLOAT64_CHECKER),
    /// [`STRING_CHECKER`](crate::STRING_CHECKER), and
    /// [`STRING_SLICE_CHECKER`](crate::STRING_SLICE_CHECKER).
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        families::register_builtins(&mut registry)
            .unwrap_or_else(|err| unreachable!("builtin registration on a fresh registry: {err}"));
        registry
    }

    /// Register a family of makers producing check functions over `T`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateFamily`] when the name is taken;
    /// a second registration is a configuration error, so this fails fast
    /// rather than replacing the existing parser.
    pub fn register<T: 'static>(
        &mut self,
        family: &'static str,
        makers: HashMap<&'static str, Maker<T>>,
    ) -> Result<(), RegistryError> {
        if self.parsers.contains_key(family) {
            return Err(RegistryError::DuplicateFamily { family });
        }
        log::debug!("registering check family `{family}`");
        self.parsers.insert(family, Box::new(Parser::new(family, makers)));
        Ok(())
    }

    /// Look up the parser registered for `family` with value type `T`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownFamily`] when nothing is registered
    /// under the name and [`RegistryError::WrongValueType`] when the
    /// registered parser produces a different value type.
    pub fn find<T: 'static>(&self, family: &str) -> Result<&Parser<T>, RegistryError> {
        let erased = self
            .parsers
            .get(family)
            .ok_or_else(|| RegistryError::UnknownFamily {
                family: family.to_owned(),
            })?;
        erased.as_any().downcast_ref::<Parser<T>>().ok_or_else(|| {
            log::warn!(
                "parser for `{family}` requested with the wrong value type; it is {}",
                erased.value_type_name()
            );
            RegistryError::WrongValueType {
                family: family.to_owned(),
                actual: erased.value_type_name(),
            }
        })
    }

    /// Like [`find`](Self::find), for call sites that treat absence as a
    /// programming error.
    ///
    /// # Panics
    ///
    /// Panics when the family is not registered or is registered with a
    /// different value type.
    #[must_use]
    pub fn find_or_panic<T: 'static>(&self, family: &str) -> &Parser<T> {
        self.find::<T>(family)
            .unwrap_or_else(|err| panic!("{err}"))
    }

    /// Parse `text` against the named family.
    ///
    /// Convenience for [`find`](Self::find) followed by
    /// [`Parser::parse`].
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] for lookup, syntax, and construction
    /// failures alike.
    pub fn parse<T: 'static>(&self, family: &str, text: &str) -> Result<Vec<CheckFn<T>>, ParseError> {
        let parser = self.find::<T>(family).map_err(|err| ParseError::Make {
            family: family.to_owned(),
            source: err.into(),
        })?;
        parser.parse(self, text)
    }

    /// Whether a family is registered under `family`.
    #[must_use]
    pub fn contains(&self, family: &str) -> bool {
        self.parsers.contains_key(family)
    }

    /// The registered family names, in alphabetical order.
    #[must_use]
    pub fn families(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.parsers.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Maker shapes for the named family, sorted by maker name.
    pub(crate) fn shapes_for(
        &self,
        family: &str,
    ) -> Option<Vec<(&'static str, &'static [&'static str])>> {
        self.parsers.get(family).map(|parser| parser.maker_shapes())
    }

    /// Every registered parser's erased surface, sorted by family name.
    #[cfg(feature = "diagnostics")]
    pub(crate) fn erased_sorted(&self) -> Vec<&dyn ErasedParser> {
        let mut parsers: Vec<&dyn ErasedParser> =
            self.parsers.values().map(|parser| parser.as_ref()).collect();
        parsers.sort_unstable_by_key(|parser| parser.family_name());
        parsers
    }
}
