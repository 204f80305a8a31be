//! Restaurant filter API client.
//!
//! The filter API is an external service: it takes a [`QueryPayload`] and
//! answers with every matching restaurant as one JSON array. This module
//! provides the HTTP client for it, a file-backed mock for offline
//! development, and the [`RestaurantSource`] trait the search orchestrator
//! is written against.

mod client;
mod error;
mod mock;

use futures::future::BoxFuture;

use crate::domain::RestaurantRecord;
use crate::filter::QueryPayload;

pub use client::{DEFAULT_BASE_URL, FinderClient, FinderConfig};
pub use error::FinderError;
pub use mock::MockFinderClient;

/// Something that can answer a restaurant query.
pub trait RestaurantSource: Send + Sync {
    /// Fetch every restaurant matching `payload`.
    fn search<'a>(
        &'a self,
        payload: &'a QueryPayload,
    ) -> BoxFuture<'a, Result<Vec<RestaurantRecord>, FinderError>>;
}
