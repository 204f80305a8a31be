//! Domain types for the restaurant finder.
//!
//! The option catalogs the form offers, the budget buckets, and the
//! restaurant rows the remote API returns.

mod budget;
pub mod catalog;
mod restaurant;

pub use budget::{BUDGET_RANGES, BudgetRange};
pub use restaurant::RestaurantRecord;
