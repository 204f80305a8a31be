//! Filter selection and query normalization.
//!
//! A [`FilterSelection`] mirrors the search form. [`build_query`] turns it
//! into the [`QueryPayload`] the remote API expects, mapping every "any"
//! choice to `null` so the API applies no constraint for it.

mod query;
mod selection;

pub use query::{QueryPayload, build_query};
pub use selection::FilterSelection;
