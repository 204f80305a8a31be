//! Normalization of a selection into the API query payload.

use serde::{Deserialize, Serialize};

use crate::domain::BudgetRange;
use crate::domain::catalog::{ANY_RESTAURANT_TYPE, ANY_RUNNER};

use super::selection::FilterSelection;

/// Body of the remote filter request.
///
/// Every field is always present on the wire; `null` means "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryPayload {
    pub runner_type: Option<String>,
    pub budget_min: Option<u32>,
    pub budget_max: Option<u32>,
    pub restaurant_type: Option<String>,
    pub food_types: Option<Vec<String>>,
}

impl QueryPayload {
    /// Whether a restaurant's `[min, max]` budget overlaps the requested
    /// bounds. Missing bounds are open-ended.
    pub fn budget_overlaps(&self, min: f64, max: f64) -> bool {
        let above_floor = self.budget_min.is_none_or(|lo| max >= f64::from(lo));
        let below_ceiling = self.budget_max.is_none_or(|hi| min <= f64::from(hi));
        above_floor && below_ceiling
    }
}

/// Build the query payload for a selection.
///
/// "Any" sentinels and empty values become `None`. An unknown budget label
/// yields no budget bounds rather than an error. Food types are taken from
/// the [normalized](FilterSelection::normalized) selection.
pub fn build_query(selection: &FilterSelection) -> QueryPayload {
    let selection = selection.normalized();
    let budget = selection.budget.as_deref().and_then(BudgetRange::find);

    QueryPayload {
        runner_type: non_sentinel(selection.runner_type.as_deref(), ANY_RUNNER),
        budget_min: budget.and_then(|b| b.min),
        budget_max: budget.and_then(|b| b.max),
        restaurant_type: non_sentinel(selection.restaurant_type.as_deref(), ANY_RESTAURANT_TYPE),
        food_types: if selection.food_types.is_empty() {
            None
        } else {
            Some(selection.food_types)
        },
    }
}

fn non_sentinel(value: Option<&str>, sentinel: &str) -> Option<String> {
    value
        .filter(|v| !v.is_empty() && *v != sentinel)
        .map(str::to_string)
}
