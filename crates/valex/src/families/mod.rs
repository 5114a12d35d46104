//! The five standard check-function families.
//!
//! Each module defines one family: its name constant, its maker table, and
//! the maker bodies. Bodies are shared across every function name with the
//! same argument shape, matching on the invoked name, so each body
//! re-validates its own argument count regardless of what the dispatcher
//! implies.

pub(crate) mod float64;
pub(crate) mod int;
pub(crate) mod int64;
pub(crate) mod string;
pub(crate) mod string_slice;

pub use float64::FLOAT64_CHECKER;
pub use int::INT_CHECKER;
pub use int64::INT64_CHECKER;
pub use string::STRING_CHECKER;
pub use string_slice::STRING_SLICE_CHECKER;

use crate::errors::MakeError;
use crate::registry::{Registry, RegistryError};

pub(crate) fn register_builtins(registry: &mut Registry) -> Result<(), RegistryError> {
    registry.register(INT_CHECKER, int::makers())?;
    registry.register(INT64_CHECKER, int64::makers())?;
    registry.register(FLOAT64_CHECKER, float64::makers())?;
    registry.register(STRING_CHECKER, string::makers())?;
    registry.register(STRING_SLICE_CHECKER, string_slice::makers())?;
    Ok(())
}

/// A maker body was invoked under a name outside its own table. The maker
/// map and the body must agree; this covers the body's side of the check.
pub(crate) fn unknown_function(name: &str) -> MakeError {
    MakeError::UnknownFunction {
        name: name.to_owned(),
    }
}
