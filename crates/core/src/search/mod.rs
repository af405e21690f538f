//! Incremental movie search.
//!
//! This module provides the [`SearchController`]: it turns a rapidly
//! changing free-text query into a rate-limited sequence of catalog
//! lookups, exposing the latest result set and a loading flag to any
//! number of observers.
//!
//! Behavior:
//! - each query update restarts a debounce window (500ms by default);
//! - a whitespace-only query clears the results synchronously and never
//!   dispatches a lookup;
//! - when the window elapses, the lookup runs joined with a minimum
//!   visible-loading floor (1000ms by default) so the loading state does
//!   not flash on fast backends;
//! - every dispatch carries a generation token, and a completion whose
//!   token is no longer current is discarded, so a slow stale lookup can
//!   never clobber newer state;
//! - lookup failures are logged and collapse to an empty result set,
//!   indistinguishable from "no matches" for the consumer.

mod controller;

pub use controller::{SearchController, SearchSnapshot};
