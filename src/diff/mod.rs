//! Diff module for reconciling two record sets
//!
//! This module provides the core reconciliation algorithm. Both sides are
//! indexed by a composite primary key, then the key sets are compared to
//! classify each affected record as added, removed, or modified.

mod engine;

pub use engine::{composite_key, reconcile};
