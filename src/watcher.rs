//! The change gate: selector matching behind change detection.
//!
//! A [`Watcher`] owns a [`Selector`], a handler, and the snapshot of the
//! previously accepted state. Feeding it successive snapshots via
//! [`notify`](Watcher::notify) invokes the handler only when the state
//! actually changed and the selector fully matches.

use crate::selector::Selector;
use crate::value::State;

/// Watches successive state snapshots and conditionally invokes a handler.
///
/// The handler receives the matched subset (see [`Selector::capture`]) and
/// fires at most once per notification: zero times when the state is deeply
/// equal to the previous accepted snapshot (with change detection on) or
/// when the selector does not fully match.
///
/// The previous-state snapshot starts out empty, so an initial empty state
/// is treated as unchanged. All state is owned by the watcher itself; calls
/// are strictly sequential (`notify` takes `&mut self`).
///
/// # Examples
///
/// ```
/// use statewatch::predicates::{eq, gt, is_number, is_string};
/// use statewatch::{state_from_json, Selector, Watcher};
///
/// let selector = Selector::builder()
///     .field("foo", is_string())
///     .field("active", eq(true))
///     .field_all("count", vec![is_number(), gt(5)])
///     .build()
///     .unwrap();
///
/// let mut seen = 0;
/// let mut watcher = Watcher::new(selector, |_matched| seen += 1);
///
/// let state = state_from_json(serde_json::json!({
///     "foo": "foobar", "active": true, "count": 6,
/// }))
/// .unwrap();
///
/// watcher.notify(&state);
/// watcher.notify(&state); // unchanged, deduplicated
/// drop(watcher);
/// assert_eq!(seen, 1);
/// ```
pub struct Watcher<F> {
    selector: Selector,
    handler: F,
    needs_change: bool,
    previous: State,
}

impl<F: FnMut(State)> Watcher<F> {
    /// Creates a watcher with change detection enabled (the default).
    #[must_use]
    pub fn new(selector: Selector, handler: F) -> Self {
        Self::with_change_detection(selector, handler, true)
    }

    /// Creates a watcher with explicit change-detection behavior.
    ///
    /// With `needs_change` set to false every notification runs the selector,
    /// even when the state is identical to the previous one.
    #[must_use]
    pub fn with_change_detection(selector: Selector, handler: F, needs_change: bool) -> Self {
        Self {
            selector,
            handler,
            needs_change,
            previous: State::new(),
        }
    }

    /// Returns the selector this watcher evaluates.
    #[must_use]
    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    /// Returns whether change detection is enabled.
    #[must_use]
    pub const fn needs_change(&self) -> bool {
        self.needs_change
    }

    /// Feeds the watcher a new state snapshot.
    ///
    /// When change detection is on and `state` is deeply equal to the
    /// previously accepted snapshot, this is a no-op: no selector
    /// evaluation, no handler call, no snapshot update. Otherwise the
    /// snapshot is replaced wholesale (even if the selector then fails) and
    /// the selector runs, invoking the handler with the matched subset on a
    /// full match.
    ///
    /// Always returns the reference it was given, so the call can be spliced
    /// into a notification chain as a pass-through.
    pub fn notify<'a>(&mut self, state: &'a State) -> &'a State {
        if self.needs_change && self.previous == *state {
            return state;
        }
        self.previous = state.clone();
        self.selector.apply(state, &mut self.handler);
        state
    }
}
