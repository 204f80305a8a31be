//! The user's current filter selection.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::FOOD_TYPES;

/// What the user has picked in the search form.
///
/// Single-select fields hold the raw option value (or nothing if the user
/// never touched them). Food types keep the order in which they were
/// ticked, without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterSelection {
    /// Selected runner type, e.g. "Marathon" or "Any".
    pub runner_type: Option<String>,
    /// Label of the selected budget bucket.
    pub budget: Option<String>,
    /// Selected restaurant type, e.g. "Kiosk_Type" or "Any Type".
    pub restaurant_type: Option<String>,
    /// Ticked food types, in selection order.
    pub food_types: Vec<String>,
    /// State of the "Select All" checkbox.
    pub select_all: bool,
}

impl FilterSelection {
    /// An empty selection: nothing picked, nothing ticked.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the runner type.
    pub fn with_runner_type(mut self, runner_type: impl Into<String>) -> Self {
        self.runner_type = Some(runner_type.into());
        self
    }

    /// Set the budget bucket by label.
    pub fn with_budget(mut self, label: impl Into<String>) -> Self {
        self.budget = Some(label.into());
        self
    }

    /// Set the restaurant type.
    pub fn with_restaurant_type(mut self, restaurant_type: impl Into<String>) -> Self {
        self.restaurant_type = Some(restaurant_type.into());
        self
    }

    /// Tick each of the given food types, in order.
    pub fn with_food_types<I, S>(mut self, food_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for food_type in food_types {
            self.toggle_food_type(food_type, true);
        }
        self
    }

    /// Tick or untick a single food type.
    ///
    /// Ticking appends the type unless it is already selected. Unticking
    /// removes it and lowers the "Select All" indicator; the other
    /// selections stay as they are.
    pub fn toggle_food_type(&mut self, food_type: impl Into<String>, checked: bool) {
        let food_type = food_type.into();
        if checked {
            if !self.food_types.contains(&food_type) {
                self.food_types.push(food_type);
            }
        } else {
            self.food_types.retain(|t| *t != food_type);
            self.select_all = false;
        }
    }

    /// Flip the "Select All" checkbox.
    ///
    /// Checking it selects the whole catalog in catalog order; unchecking it
    /// clears every food type.
    pub fn set_select_all(&mut self, checked: bool) {
        self.select_all = checked;
        self.food_types = if checked {
            FOOD_TYPES.iter().map(|t| (*t).to_string()).collect()
        } else {
            Vec::new()
        };
    }

    /// Untick every food type.
    pub fn clear_food_types(&mut self) {
        self.food_types.clear();
        self.select_all = false;
    }

    /// The same selection with the food-type rules applied.
    ///
    /// A raised "Select All" indicator means the whole catalog; otherwise
    /// the ticked types are kept in order with repeats dropped. Submitted
    /// JSON does not go through the toggles, so this is applied before a
    /// query is built.
    pub fn normalized(&self) -> Self {
        let mut normalized = self.clone();
        normalized.clear_food_types();
        if self.select_all {
            normalized.set_select_all(true);
        } else {
            for food_type in &self.food_types {
                normalized.toggle_food_type(food_type.as_str(), true);
            }
        }
        normalized
    }
}
