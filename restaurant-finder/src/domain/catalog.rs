//! Fixed option catalogs offered by the search form.

/// Runner value that means "no runner constraint".
pub const ANY_RUNNER: &str = "Any";

/// Restaurant type value that means "no restaurant type constraint".
pub const ANY_RESTAURANT_TYPE: &str = "Any Type";

/// Runner types, in display order.
pub const RUNNER_TYPES: [&str; 4] = ["Fun Run", "Mini Marathon", "Half Marathon", "Marathon"];

/// Restaurant types, in display order. The first entry is the "any" sentinel.
pub const RESTAURANT_TYPES: [&str; 5] = [
    ANY_RESTAURANT_TYPE,
    "Kiosk_Type",
    "Fast_Dining_Type",
    "Casual_Dining_Type",
    "Fine_Dining_Type",
];

/// Food type identifiers, in display order.
///
/// These are the identifiers the remote API understands; use
/// [`display_label`] for what the user sees.
pub const FOOD_TYPES: [&str; 25] = [
    "ALaCarte_Type",
    "Bakery_Cake_Type",
    "Breakfast_Type",
    "BubbleMilkTea_Type",
    "Buffet_Type",
    "CleanFood_Salad_Type",
    "Dessert_Type",
    "Dimsum_Type",
    "DrinksJuice_Type",
    "FastFood_Type",
    "Grill_Type",
    "GrilledPork_Type",
    "IceCream_Type",
    "Noodles_Type",
    "Omakase_Type",
    "OneDishMeal_Type",
    "Pizza_Type",
    "Ramen_Type",
    "Seafood_Type",
    "Shabu_Sukiyaki_Type",
    "Steak_Type",
    "Sushi_Type",
    "VegatarianFood_Type",
    "Vegatarian_Jay_Type",
    "Burger_Type",
];

/// Human-readable label for a catalog identifier, e.g. `"Shabu_Sukiyaki_Type"`
/// becomes `"Shabu Sukiyaki Type"`.
pub fn display_label(id: &str) -> String {
    id.replace('_', " ")
}
