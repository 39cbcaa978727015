//! Field selectors: declarative per-field predicates over a state.
//!
//! A [`Selector`] maps top-level field names to an ordered sequence of
//! [`Predicate`]s, all of which must hold (logical AND) for that field. The
//! overall selector matches when every declared field passes. Selectors are
//! normalized at construction: a lone predicate is stored as a one-element
//! sequence, so matching never branches on the entry's shape.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::SelectorError;
use crate::value::{State, Value};

/// A pure boolean test over a single field value.
///
/// Predicates must be side-effect free. A panicking predicate is a
/// precondition violation and is not caught.
pub type Predicate = Box<dyn Fn(&Value) -> bool>;

/// Stand-in value for fields absent from the state.
///
/// Absent fields are evaluated as [`Value::Null`]; the selector performs no
/// implicit presence check, so predicates must handle absence themselves.
static ABSENT: Value = Value::Null;

/// An immutable set of per-field predicates.
///
/// Built once via [`Selector::builder`] and fixed for the lifetime of any
/// watcher that holds it. An empty selector matches every state vacuously.
///
/// # Examples
///
/// ```
/// use statewatch::predicates::{eq, gt, is_number, is_string};
/// use statewatch::Selector;
///
/// let selector = Selector::builder()
///     .field("foo", is_string())
///     .field("active", eq(true))
///     .field_all("count", vec![is_number(), gt(5)])
///     .build()
///     .unwrap();
///
/// assert_eq!(selector.len(), 3);
/// ```
pub struct Selector {
    fields: BTreeMap<String, Vec<Predicate>>,
}

impl Selector {
    /// Starts building a selector.
    #[must_use]
    pub fn builder() -> SelectorBuilder {
        SelectorBuilder {
            fields: BTreeMap::new(),
        }
    }

    /// Returns the number of declared fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if no fields are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the declared field names.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Returns true if every declared field passes all of its predicates.
    ///
    /// Fields absent from `state` are evaluated as [`Value::Null`]. An empty
    /// selector matches any state.
    #[must_use]
    pub fn matches(&self, state: &State) -> bool {
        self.fields.iter().all(|(field, predicates)| {
            let value = state.get(field).unwrap_or(&ABSENT);
            predicates.iter().all(|predicate| predicate(value))
        })
    }

    /// Extracts the matched subset: one entry per declared field.
    ///
    /// The result is freshly allocated and shares nothing with `state`. Its
    /// key set is exactly the selector's field set regardless of which keys
    /// exist in `state`; absent fields are captured as [`Value::Null`].
    #[must_use]
    pub fn capture(&self, state: &State) -> State {
        self.fields
            .keys()
            .map(|field| {
                let value = state.get(field).cloned().unwrap_or(Value::Null);
                (field.clone(), value)
            })
            .collect()
    }

    /// Evaluates the selector and, on a full match, invokes `handler` exactly
    /// once with the matched subset.
    ///
    /// Returns whether the handler fired. `state` is never mutated.
    pub fn apply<F>(&self, state: &State, handler: &mut F) -> bool
    where
        F: FnMut(State),
    {
        if !self.matches(state) {
            return false;
        }
        handler(self.capture(state));
        true
    }
}

impl fmt::Debug for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (field, predicates) in &self.fields {
            map.entry(field, &format_args!("<{} predicates>", predicates.len()));
        }
        map.finish()
    }
}

/// Builder for [`Selector`].
///
/// Validation is eager: [`build`](SelectorBuilder::build) rejects empty field
/// names and fields declared with zero predicates, so a constructed selector
/// can never fail at match time.
pub struct SelectorBuilder {
    fields: BTreeMap<String, Vec<Predicate>>,
}

impl SelectorBuilder {
    /// Declares a predicate for `field`.
    ///
    /// Declaring the same field again appends to its sequence (logical AND).
    #[must_use]
    pub fn field(mut self, field: impl Into<String>, predicate: Predicate) -> Self {
        self.fields.entry(field.into()).or_default().push(predicate);
        self
    }

    /// Declares an ordered sequence of predicates for `field`, all of which
    /// must hold.
    #[must_use]
    pub fn field_all(mut self, field: impl Into<String>, predicates: Vec<Predicate>) -> Self {
        self.fields.entry(field.into()).or_default().extend(predicates);
        self
    }

    /// Finalizes the selector.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::EmptyField`] for an empty or whitespace-only
    /// field name, and [`SelectorError::NoPredicates`] for a field declared
    /// with an empty predicate sequence.
    pub fn build(self) -> Result<Selector, SelectorError> {
        for (field, predicates) in &self.fields {
            if field.trim().is_empty() {
                return Err(SelectorError::EmptyField);
            }
            if predicates.is_empty() {
                return Err(SelectorError::NoPredicates {
                    field: field.clone(),
                });
            }
        }
        Ok(Selector {
            fields: self.fields,
        })
    }
}
