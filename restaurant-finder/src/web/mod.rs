//! Web layer for the restaurant finder.
//!
//! Serves the filter form, runs searches, and renders pages of the
//! results table.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
