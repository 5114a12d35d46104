//! Constructors for the concrete check functions and the generic
//! composition combinators.
//!
//! Everything here returns a [`CheckFn`]; constructors whose arguments can
//! be rejected outright (ordered limits, a zero divisor, a regular
//! expression that does not compile) return a `Result` so a bad argument
//! surfaces as a [`ConstructionError`] instead of a fault at check time.

use crate::check::{CheckFailure, CheckFn};
use regex::Regex;
use std::fmt::Display;
use std::ops::Rem;
use std::sync::Arc;
use thiserror::Error;

/// Errors raised by a check-function constructor rejecting its own,
/// already well-typed, arguments.
#[derive(Debug, Error)]
pub enum ConstructionError {
    /// `between` requires the lower limit to be strictly below the upper.
    #[error("the lower limit ({lower}) must be less than the upper limit ({upper})")]
    LimitsOutOfOrder {
        /// The rendered lower limit.
        lower: String,
        /// The rendered upper limit.
        upper: String,
    },
    /// `is_a_multiple` cannot test divisibility by zero.
    #[error("the divisor must not be zero")]
    ZeroDivisor,
    /// `matches_pattern` was given a pattern that does not compile.
    #[error("the regexp doesn't compile: {0}")]
    BadPattern(#[from] regex::Error),
}

/// A check that accepts every value.
#[must_use]
pub fn ok<T: 'static>() -> CheckFn<T> {
    Arc::new(|_| Ok(()))
}

/// The value must equal `limit`.
pub fn eq<T>(limit: T) -> CheckFn<T>
where
    T: PartialOrd + Display + Send + Sync + 'static,
{
    Arc::new(move |v: &T| {
        if *v == limit {
            Ok(())
        } else {
            Err(CheckFailure::new(format!(
                "the value ({v}) must equal {limit}"
            )))
        }
    })
}

/// The value must be strictly greater than `limit`.
pub fn gt<T>(limit: T) -> CheckFn<T>
where
    T: PartialOrd + Display + Send + Sync + 'static,
{
    Arc::new(move |v: &T| {
        if *v > limit {
            Ok(())
        } else {
            Err(CheckFailure::new(format!(
                "the value ({v}) must be greater than {limit}"
            )))
        }
    })
}

/// The value must be greater than or equal to `limit`.
pub fn ge<T>(limit: T) -> CheckFn<T>
where
    T: PartialOrd + Display + Send + Sync + 'static,
{
    Arc::new(move |v: &T| {
        if *v >= limit {
            Ok(())
        } else {
            Err(CheckFailure::new(format!(
                "the value ({v}) must be greater than or equal to {limit}"
            )))
        }
    })
}

/// The value must be strictly less than `limit`.
pub fn lt<T>(limit: T) -> CheckFn<T>
where
    T: PartialOrd + Display + Send + Sync + 'static,
{
    Arc::new(move |v: &T| {
        if *v < limit {
            Ok(())
        } else {
            Err(CheckFailure::new(format!(
                "the value ({v}) must be less than {limit}"
            )))
        }
    })
}

/// The value must be less than or equal to `limit`.
pub fn le<T>(limit: T) -> CheckFn<T>
where
    T: PartialOrd + Display + Send + Sync + 'static,
{
    Arc::new(move |v: &T| {
        if *v <= limit {
            Ok(())
        } else {
            Err(CheckFailure::new(format!(
                "the value ({v}) must be less than or equal to {limit}"
            )))
        }
    })
}

/// The value must be between `lower` and `upper`, inclusive at both ends.
///
/// # Errors
///
/// Returns [`ConstructionError::LimitsOutOfOrder`] when `lower >= upper`.
pub fn between<T>(lower: T, upper: T) -> Result<CheckFn<T>, ConstructionError>
where
    T: PartialOrd + Display + Send + Sync + 'static,
{
    if lower >= upper {
        return Err(ConstructionError::LimitsOutOfOrder {
            lower: lower.to_string(),
            upper: upper.to_string(),
        });
    }
    Ok(Arc::new(move |v: &T| {
        if *v >= lower && *v <= upper {
            Ok(())
        } else {
            Err(CheckFailure::new(format!(
                "the value ({v}) must be between {lower} and {upper}"
            )))
        }
    }))
}

/// The value must be a divisor of `dividend`. A zero value is rejected at
/// check time since nothing but zero is divisible by it.
#[expect(
    clippy::integer_division_remainder_used,
    reason = "divisibility is the property being checked"
)]
pub fn divides<T>(dividend: T) -> CheckFn<T>
where
    T: Copy + Default + PartialEq + Rem<Output = T> + Display + Send + Sync + 'static,
{
    Arc::new(move |v: &T| {
        let zero = T::default();
        if *v == zero {
            return Err(CheckFailure::new(format!(
                "the value ({v}) cannot divide {dividend}"
            )));
        }
        if dividend % *v == zero {
            Ok(())
        } else {
            Err(CheckFailure::new(format!(
                "the value ({v}) must be a divisor of {dividend}"
            )))
        }
    })
}

/// The value must be a multiple of `divisor`.
///
/// # Errors
///
/// Returns [`ConstructionError::ZeroDivisor`] when `divisor` is zero.
#[expect(
    clippy::integer_division_remainder_used,
    reason = "divisibility is the property being checked"
)]
pub fn is_a_multiple<T>(divisor: T) -> Result<CheckFn<T>, ConstructionError>
where
    T: Copy + Default + PartialEq + Rem<Output = T> + Display + Send + Sync + 'static,
{
    if divisor == T::default() {
        return Err(ConstructionError::ZeroDivisor);
    }
    Ok(Arc::new(move |v: &T| {
        if *v % divisor == T::default() {
            Ok(())
        } else {
            Err(CheckFailure::new(format!(
                "the value ({v}) must be a multiple of {divisor}"
            )))
        }
    }))
}

/// The string must start with `prefix`.
#[must_use]
pub fn has_prefix(prefix: String) -> CheckFn<String> {
    Arc::new(move |v: &String| {
        if v.starts_with(&prefix) {
            Ok(())
        } else {
            Err(CheckFailure::new(format!(
                "the value (\"{v}\") must have the prefix \"{prefix}\""
            )))
        }
    })
}

/// The string must end with `suffix`.
#[must_use]
pub fn has_suffix(suffix: String) -> CheckFn<String> {
    Arc::new(move |v: &String| {
        if v.ends_with(&suffix) {
            Ok(())
        } else {
            Err(CheckFailure::new(format!(
                "the value (\"{v}\") must have the suffix \"{suffix}\""
            )))
        }
    })
}

/// The string must match `pattern`. The failure quotes `desc`, the
/// user-supplied description of the pattern, not the raw regex.
#[must_use]
pub fn matches_pattern(pattern: Regex, desc: String) -> CheckFn<String> {
    Arc::new(move |v: &String| {
        if pattern.is_match(v) {
            Ok(())
        } else {
            Err(CheckFailure::new(format!(
                "the value (\"{v}\") must match the pattern: {desc}"
            )))
        }
    })
}

/// The string's byte length must pass `inner`.
#[must_use]
pub fn string_length(inner: CheckFn<i32>) -> CheckFn<String> {
    Arc::new(move |v: &String| {
        let len = i32::try_from(v.len()).map_err(|_| {
            CheckFailure::new(format!("the length of the value ({}) is out of range", v.len()))
        })?;
        inner(&len).map_err(|err| {
            CheckFailure::new(format!("the length of the value ({len}) is incorrect: {err}"))
        })
    })
}

/// The list's entry count must pass `inner`.
#[must_use]
pub fn slice_length(inner: CheckFn<i32>) -> CheckFn<Vec<String>> {
    Arc::new(move |v: &Vec<String>| {
        let len = i32::try_from(v.len()).map_err(|_| {
            CheckFailure::new(format!("the length of the list ({}) is out of range", v.len()))
        })?;
        inner(&len).map_err(|err| {
            CheckFailure::new(format!("the length of the list ({len}) is incorrect: {err}"))
        })
    })
}

/// Every entry in the list must be distinct.
#[must_use]
pub fn no_dups() -> CheckFn<Vec<String>> {
    Arc::new(|v: &Vec<String>| {
        for (later, value) in v.iter().enumerate() {
            let Some(earlier) = v.iter().take(later).position(|other| other == value) else {
                continue;
            };
            return Err(CheckFailure::new(format!(
                "list entries must be unique, entry {later} (\"{value}\") is a duplicate of entry {earlier}"
            )));
        }
        Ok(())
    })
}

/// At least one entry must pass `inner`. The failure quotes `desc`, the
/// user-supplied description of the condition.
#[must_use]
pub fn slice_any(inner: CheckFn<String>, desc: String) -> CheckFn<Vec<String>> {
    Arc::new(move |v: &Vec<String>| {
        if v.iter().any(|entry| inner(entry).is_ok()) {
            Ok(())
        } else {
            Err(CheckFailure::new(format!(
                "no entry passes the check: {desc}"
            )))
        }
    })
}

/// Every entry must pass `inner`.
#[must_use]
pub fn slice_all(inner: CheckFn<String>) -> CheckFn<Vec<String>> {
    Arc::new(move |v: &Vec<String>| {
        for (idx, entry) in v.iter().enumerate() {
            inner(entry).map_err(|err| {
                CheckFailure::new(format!("entry {idx} (\"{entry}\") fails: {err}"))
            })?;
        }
        Ok(())
    })
}

/// Entry *i* must pass check *i*. Entries beyond the last check are left
/// unchecked.
#[must_use]
pub fn slice_by_pos(checks: Vec<CheckFn<String>>) -> CheckFn<Vec<String>> {
    Arc::new(move |v: &Vec<String>| {
        for (idx, (entry, check)) in v.iter().zip(checks.iter()).enumerate() {
            check(entry).map_err(|err| {
                CheckFailure::new(format!("entry {idx} (\"{entry}\") fails: {err}"))
            })?;
        }
        Ok(())
    })
}

/// Invert `inner`: the combined check passes exactly when `inner` fails.
/// On failure the user-authored `desc` is the message, so the author's
/// explanation of what should not hold reaches the end user verbatim.
pub fn not<T: 'static>(inner: CheckFn<T>, desc: impl Into<String>) -> CheckFn<T> {
    let desc = desc.into();
    Arc::new(move |v: &T| match inner(v) {
        Ok(()) => Err(CheckFailure::new(desc.clone())),
        Err(_) => Ok(()),
    })
}

/// Every inner check must pass. Fails fast with the first inner failure.
#[must_use]
pub fn and<T: 'static>(checks: Vec<CheckFn<T>>) -> CheckFn<T> {
    Arc::new(move |v: &T| {
        for check in &checks {
            check(v)?;
        }
        Ok(())
    })
}

/// At least one inner check must pass. On total failure every inner
/// failure message is reported, joined by " or ", so the user sees every
/// alternative that was tried. An empty check set rejects everything.
#[must_use]
pub fn or<T: 'static>(checks: Vec<CheckFn<T>>) -> CheckFn<T> {
    Arc::new(move |v: &T| {
        let mut failures = Vec::with_capacity(checks.len());
        for check in &checks {
            match check(v) {
                Ok(()) => return Ok(()),
                Err(err) => failures.push(err.to_string()),
            }
        }
        Err(CheckFailure::new(failures.join(" or ")))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fails<T>(check: &CheckFn<T>, value: &T) -> String {
        match check(value) {
            Ok(()) => panic!("check unexpectedly passed"),
            Err(err) => err.to_string(),
        }
    }

    #[test]
    fn comparisons_reference_the_bound() {
        let check = gt(5);
        assert!(check(&6).is_ok());
        let message = fails(&check, &5);
        assert!(message.contains('5'), "message should name the bound: {message}");
    }

    #[test]
    fn between_is_inclusive() {
        let check = match between(5, 9) {
            Ok(check) => check,
            Err(err) => panic!("construction failed: {err}"),
        };
        assert!(check(&5).is_ok());
        assert!(check(&9).is_ok());
        assert!(check(&4).is_err());
        assert!(check(&10).is_err());
    }

    #[test]
    fn between_rejects_misordered_limits() {
        let Err(err) = between(12, 10) else {
            panic!("expected a construction error");
        };
        assert_eq!(
            err.to_string(),
            "the lower limit (12) must be less than the upper limit (10)"
        );
    }

    #[test]
    fn divides_handles_zero_values() {
        let check = divides(60);
        assert!(check(&6).is_ok());
        assert!(check(&7).is_err());
        assert!(check(&0).is_err());
    }

    #[test]
    fn is_a_multiple_rejects_a_zero_divisor() {
        let Err(err) = is_a_multiple(0) else {
            panic!("expected a construction error");
        };
        assert_eq!(err.to_string(), "the divisor must not be zero");
        let check = match is_a_multiple(3) {
            Ok(check) => check,
            Err(err) => panic!("construction failed: {err}"),
        };
        assert!(check(&9).is_ok());
        assert!(check(&10).is_err());
    }

    #[test]
    fn not_surfaces_the_description() {
        let check = not(eq(String::from("A")), "must not be A");
        assert!(check(&String::from("B")).is_ok());
        assert_eq!(fails(&check, &String::from("A")), "must not be A");
    }

    #[test]
    fn and_accepts_iff_all_accept() {
        let check = and(vec![gt(2), lt(8)]);
        assert!(check(&5).is_ok());
        assert!(check(&1).is_err());
        assert!(check(&9).is_err());
    }

    #[test]
    fn or_reports_every_alternative() {
        let check = or(vec![lt(2), gt(8)]);
        assert!(check(&1).is_ok());
        assert!(check(&9).is_ok());
        let message = fails(&check, &5);
        assert!(message.contains(" or "), "alternatives joined: {message}");
        assert!(message.contains("less than 2"));
        assert!(message.contains("greater than 8"));
    }

    #[test]
    fn no_dups_names_both_positions() {
        let check = no_dups();
        assert!(check(&vec!["a".into(), "b".into(), "c".into()]).is_ok());
        let message = fails(&check, &vec!["a".into(), "a".into(), "b".into()]);
        assert!(message.contains("entry 1"), "{message}");
        assert!(message.contains("entry 0"), "{message}");
    }

    #[test]
    fn slice_by_pos_leaves_excess_entries_unchecked() {
        let check = slice_by_pos(vec![eq(String::from("a"))]);
        assert!(check(&vec!["a".into(), "anything".into()]).is_ok());
        assert!(check(&vec!["b".into()]).is_err());
    }

    #[test]
    fn string_length_wraps_the_inner_failure() {
        let check = string_length(le(3));
        assert!(check(&String::from("abc")).is_ok());
        let message = fails(&check, &String::from("abcd"));
        assert!(message.starts_with("the length of the value (4)"), "{message}");
    }

    #[test]
    fn matches_pattern_quotes_the_description() {
        let pattern = match Regex::new(r"^\d+$") {
            Ok(pattern) => pattern,
            Err(err) => panic!("regex failed: {err}"),
        };
        let check = matches_pattern(pattern, String::from("digits only"));
        assert!(check(&String::from("123")).is_ok());
        let message = fails(&check, &String::from("12a"));
        assert!(message.contains("digits only"), "{message}");
    }
}
