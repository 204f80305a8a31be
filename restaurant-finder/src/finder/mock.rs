//! Mock finder client for development without the hosted API.
//!
//! Loads a JSON array of restaurants from disk and answers queries from it
//! as if it were the remote API.

use std::path::Path;
use std::sync::Arc;

use futures::future::BoxFuture;

use crate::domain::RestaurantRecord;
use crate::filter::QueryPayload;

use super::RestaurantSource;
use super::error::FinderError;

/// Mock finder client that serves data from a JSON file.
///
/// Matching is deliberately simple: restaurant type must be equal, food
/// type must be one of the requested ones, and the restaurant's budget must
/// overlap the requested bounds. Runner type is accepted but not used.
#[derive(Debug, Clone)]
pub struct MockFinderClient {
    restaurants: Arc<Vec<RestaurantRecord>>,
}

impl MockFinderClient {
    /// Create a mock client over an in-memory list.
    pub fn new(restaurants: Vec<RestaurantRecord>) -> Self {
        Self {
            restaurants: Arc::new(restaurants),
        }
    }

    /// Create a mock client by loading a JSON array of restaurants.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, FinderError> {
        let path = path.as_ref();

        let json = std::fs::read_to_string(path)
            .map_err(|e| FinderError::MockData(format!("failed to read {path:?}: {e}")))?;

        let restaurants: Vec<RestaurantRecord> = serde_json::from_str(&json)
            .map_err(|e| FinderError::MockData(format!("failed to parse {path:?}: {e}")))?;

        Ok(Self::new(restaurants))
    }

    /// Number of restaurants in the mock data.
    pub fn len(&self) -> usize {
        self.restaurants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.restaurants.is_empty()
    }

    /// Restaurants matching `payload`, in file order.
    pub fn filter(&self, payload: &QueryPayload) -> Vec<RestaurantRecord> {
        self.restaurants
            .iter()
            .filter(|r| {
                payload
                    .restaurant_type
                    .as_ref()
                    .is_none_or(|t| *t == r.restaurant_type)
            })
            .filter(|r| {
                payload
                    .food_types
                    .as_ref()
                    .is_none_or(|types| types.contains(&r.food_type))
            })
            .filter(|r| payload.budget_overlaps(r.clean_min_budget, r.clean_max_budget))
            .cloned()
            .collect()
    }
}

impl RestaurantSource for MockFinderClient {
    fn search<'a>(
        &'a self,
        payload: &'a QueryPayload,
    ) -> BoxFuture<'a, Result<Vec<RestaurantRecord>, FinderError>> {
        let matches = self.filter(payload);
        Box::pin(async move { Ok(matches) })
    }
}
