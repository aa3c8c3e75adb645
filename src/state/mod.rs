//! Explicit report-view state and its transitions.
//!
//! The whole view state is one immutable [`DashboardState`] value. Every user
//! action is an [`Action`] and [`reduce`] is the only way to get the next
//! state, so each transition can be tested in isolation.

pub mod model;
pub mod reducer;

// Re-export key types
pub use model::{DashboardState, GeneratedReport, Phase};
pub use reducer::{Action, reduce};
