//! Search orchestration.
//!
//! Wires a [`QueryPayload`](crate::filter::QueryPayload) to a
//! [`RestaurantSource`](crate::finder::RestaurantSource), tracks the
//! loading / success / failure state of each search, and exposes the
//! current page of results.
//!
//! Overlapping searches are resolved by ticket: only the most recently
//! issued search may replace the result set.

mod notification;
mod orchestrator;
mod session;

#[cfg(test)]
mod orchestrator_tests;

pub use notification::{Notification, Severity};
pub use orchestrator::Orchestrator;
pub use session::{
    Outcome, PageNav, PageView, SearchPhase, SearchSession, SearchTicket, Settled,
};
