//! Ready-made predicates and combinators.
//!
//! Everything here returns a boxed [`Predicate`] suitable for
//! [`Selector::builder`](crate::Selector::builder). Typical selectors combine
//! a type check with a comparison, e.g. `vec![is_number(), gt(5)]`.
//!
//! Numeric comparisons treat `Int` and `Float` uniformly (integers widen to
//! `f64`) and fail for every non-numeric value, including numeric-looking
//! strings. Absent fields reach predicates as [`Value::Null`].

use regex::Regex;

use crate::error::SelectorError;
use crate::selector::Predicate;
use crate::value::Value;

/// Matches values deeply equal to `expected`.
pub fn eq(expected: impl Into<Value>) -> Predicate {
    let expected = expected.into();
    Box::new(move |value| *value == expected)
}

/// Matches `Null` (including absent fields).
#[must_use]
pub fn is_null() -> Predicate {
    Box::new(Value::is_null)
}

/// Matches any non-`Null` value.
#[must_use]
pub fn present() -> Predicate {
    Box::new(|value| !value.is_null())
}

/// Matches booleans.
#[must_use]
pub fn is_bool() -> Predicate {
    Box::new(Value::is_bool)
}

/// Matches integers.
#[must_use]
pub fn is_int() -> Predicate {
    Box::new(Value::is_int)
}

/// Matches floats.
#[must_use]
pub fn is_float() -> Predicate {
    Box::new(Value::is_float)
}

/// Matches integers and floats.
#[must_use]
pub fn is_number() -> Predicate {
    Box::new(Value::is_number)
}

/// Matches strings.
#[must_use]
pub fn is_string() -> Predicate {
    Box::new(Value::is_string)
}

/// Matches sequences.
#[must_use]
pub fn is_seq() -> Predicate {
    Box::new(Value::is_seq)
}

/// Matches nested maps.
#[must_use]
pub fn is_map() -> Predicate {
    Box::new(Value::is_map)
}

/// Matches numbers strictly greater than `threshold`.
pub fn gt(threshold: impl Into<f64>) -> Predicate {
    let threshold = threshold.into();
    Box::new(move |value| value.as_float().is_some_and(|v| v > threshold))
}

/// Matches numbers strictly less than `threshold`.
pub fn lt(threshold: impl Into<f64>) -> Predicate {
    let threshold = threshold.into();
    Box::new(move |value| value.as_float().is_some_and(|v| v < threshold))
}

/// Matches numbers greater than or equal to `threshold`.
pub fn at_least(threshold: impl Into<f64>) -> Predicate {
    let threshold = threshold.into();
    Box::new(move |value| value.as_float().is_some_and(|v| v >= threshold))
}

/// Matches numbers less than or equal to `threshold`.
pub fn at_most(threshold: impl Into<f64>) -> Predicate {
    let threshold = threshold.into();
    Box::new(move |value| value.as_float().is_some_and(|v| v <= threshold))
}

/// Matches values equal to any member of `allowed`.
pub fn one_of<T: Into<Value>>(allowed: Vec<T>) -> Predicate {
    let allowed: Vec<Value> = allowed.into_iter().map(Into::into).collect();
    Box::new(move |value| allowed.contains(value))
}

/// Matches strings containing a match for `pattern`.
///
/// The pattern is compiled once, up front. Non-string values never match.
///
/// # Errors
///
/// Returns [`SelectorError::InvalidRegex`] when `pattern` does not compile.
pub fn regex_match(pattern: &str) -> Result<Predicate, SelectorError> {
    let regex = Regex::new(pattern)?;
    Ok(Box::new(move |value| {
        value.as_string().is_some_and(|s| regex.is_match(s))
    }))
}

/// Inverts a predicate.
#[must_use]
pub fn not(predicate: Predicate) -> Predicate {
    Box::new(move |value| !predicate(value))
}

/// Matches when every predicate matches. Vacuously true for an empty list.
#[must_use]
pub fn all_of(predicates: Vec<Predicate>) -> Predicate {
    Box::new(move |value| predicates.iter().all(|predicate| predicate(value)))
}

/// Matches when at least one predicate matches.
#[must_use]
pub fn any_of(predicates: Vec<Predicate>) -> Predicate {
    Box::new(move |value| predicates.iter().any(|predicate| predicate(value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eq_is_deep() {
        let p = eq(Value::Seq(vec![Value::Int(1), Value::Int(2)]));
        assert!(p(&Value::Seq(vec![Value::Int(1), Value::Int(2)])));
        assert!(!p(&Value::Seq(vec![Value::Int(1)])));
        assert!(!p(&Value::Null));
    }

    #[test]
    fn test_type_checks() {
        assert!(is_string()(&Value::String("x".into())));
        assert!(!is_string()(&Value::Int(1)));
        assert!(is_number()(&Value::Int(1)));
        assert!(is_number()(&Value::Float(1.5)));
        assert!(!is_number()(&Value::String("6".into())));
        assert!(is_null()(&Value::Null));
        assert!(present()(&Value::Bool(false)));
        assert!(!present()(&Value::Null));
    }

    #[test]
    fn test_numeric_comparisons() {
        assert!(gt(5)(&Value::Int(6)));
        assert!(!gt(5)(&Value::Int(5)));
        assert!(gt(5)(&Value::Float(5.1)));
        assert!(!gt(5)(&Value::String("6".into())));

        assert!(lt(5)(&Value::Int(4)));
        assert!(at_least(5)(&Value::Int(5)));
        assert!(at_most(5)(&Value::Int(5)));
        assert!(!at_most(5)(&Value::Float(5.1)));
    }

    #[test]
    fn test_one_of() {
        let p = one_of(vec!["red", "green"]);
        assert!(p(&Value::String("red".into())));
        assert!(!p(&Value::String("blue".into())));
        assert!(!p(&Value::Null));
    }

    #[test]
    fn test_regex_match() {
        let p = regex_match(r"^v\d+\.\d+$").unwrap();
        assert!(p(&Value::String("v1.2".into())));
        assert!(!p(&Value::String("1.2".into())));
        assert!(!p(&Value::Int(12)));
    }

    #[test]
    fn test_regex_match_rejects_bad_pattern() {
        assert!(matches!(
            regex_match("(unclosed"),
            Err(SelectorError::InvalidRegex(_))
        ));
    }

    #[test]
    fn test_combinators() {
        let p = all_of(vec![is_number(), gt(5)]);
        assert!(p(&Value::Int(6)));
        assert!(!p(&Value::Int(4)));
        assert!(!p(&Value::String("6".into())));

        let p = any_of(vec![is_null(), is_string()]);
        assert!(p(&Value::Null));
        assert!(p(&Value::String("x".into())));
        assert!(!p(&Value::Int(1)));

        let p = not(is_null());
        assert!(p(&Value::Int(1)));
        assert!(!p(&Value::Null));
    }
}
