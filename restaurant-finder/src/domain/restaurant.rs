//! Restaurant records returned by the finder API.

use serde::{Deserialize, Serialize};

/// One restaurant row as returned by the remote filter endpoint.
///
/// Field names follow the API's wire format. Records are never modified
/// after they are fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantRecord {
    pub restaurant_name: String,
    pub restaurant_type: String,
    pub food_type: String,
    #[serde(default)]
    pub restaurant_nationality: String,
    pub clean_min_budget: f64,
    pub clean_max_budget: f64,
    #[serde(default)]
    pub district: String,
    #[serde(default)]
    pub carbohydrates: String,
    #[serde(default)]
    pub protein: String,
    #[serde(default)]
    pub fat: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_wire_format() {
        let json = r#"{
            "restaurant_name": "Somtum Der",
            "restaurant_type": "Casual_Dining_Type",
            "food_type": "OneDishMeal_Type",
            "restaurant_nationality": "Thai",
            "clean_min_budget": 150,
            "clean_max_budget": 400.5,
            "district": "Bang Rak",
            "carbohydrates": "High",
            "protein": "Medium",
            "fat": "Low"
        }"#;

        let record: RestaurantRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.restaurant_name, "Somtum Der");
        assert_eq!(record.clean_min_budget, 150.0);
        assert_eq!(record.clean_max_budget, 400.5);
        assert_eq!(record.fat, "Low");
    }

    #[test]
    fn optional_text_fields_default_to_empty() {
        let json = r#"{
            "restaurant_name": "Kiosk 7",
            "restaurant_type": "Kiosk_Type",
            "food_type": "DrinksJuice_Type",
            "clean_min_budget": 20,
            "clean_max_budget": 60
        }"#;

        let record: RestaurantRecord = serde_json::from_str(json).unwrap();
        assert!(record.district.is_empty());
        assert!(record.protein.is_empty());
    }

    #[test]
    fn missing_budget_is_rejected() {
        let json = r#"{
            "restaurant_name": "Kiosk 7",
            "restaurant_type": "Kiosk_Type",
            "food_type": "DrinksJuice_Type"
        }"#;

        assert!(serde_json::from_str::<RestaurantRecord>(json).is_err());
    }
}
