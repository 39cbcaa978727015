//! # statewatch - Conditional state callbacks
//!
//! statewatch decouples "is this state interesting" from the code that reacts
//! to it. A [`Watcher`] is fed full state snapshots on every tick (from a
//! store, an event emitter, a polling loop) and invokes its handler only when
//! the state changed since the last accepted snapshot and a declared
//! [`Selector`] fully matches the new state.
//!
//! ## Core Concepts
//!
//! - **State**: a flat mapping from field name to [`Value`], compared with
//!   deep structural equality
//! - **Selector**: per-field predicates, all of which must hold for the
//!   handler to fire; the handler receives only the selected fields
//! - **Watcher**: the change gate wrapping a selector, owning the
//!   previous-state snapshot and deduplicating equal states
//!
//! ## Usage
//!
//! ```rust
//! use statewatch::predicates::{eq, gt, is_number, is_string};
//! use statewatch::{state_from_json, Selector, Watcher};
//!
//! let selector = Selector::builder()
//!     .field("foo", is_string())
//!     .field("active", eq(true))
//!     .field_all("count", vec![is_number(), gt(5)])
//!     .build()
//!     .unwrap();
//!
//! let mut watcher = Watcher::new(selector, |matched| {
//!     println!("count is now {}", matched["count"]);
//! });
//!
//! let tick = state_from_json(serde_json::json!({
//!     "foo": "foobar", "active": true, "count": 6, "unrelated": "ignored",
//! }))
//! .unwrap();
//! watcher.notify(&tick);
//! ```
//!
//! Notification is synchronous and single-threaded: the handler runs inside
//! the `notify` call, and `notify` always returns the state reference it was
//! given.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod predicates;
pub mod selector;
pub mod value;
pub mod watcher;

pub use error::SelectorError;
pub use selector::{Predicate, Selector, SelectorBuilder};
pub use value::{state_from_json, State, Value};
pub use watcher::Watcher;
