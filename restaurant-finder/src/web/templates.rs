//! Askama templates for the web frontend.

use askama::Template;

use crate::domain::catalog::{self, FOOD_TYPES, RESTAURANT_TYPES, RUNNER_TYPES};
use crate::domain::{BUDGET_RANGES, RestaurantRecord};
use crate::search::{Notification, Outcome, PageView, Severity};

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Home page with the filter form.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub runner_types: Vec<OptionView>,
    pub budget_ranges: Vec<OptionView>,
    pub restaurant_types: Vec<OptionView>,
    pub food_types: Vec<OptionView>,
}

impl IndexTemplate {
    /// The form with every catalog option.
    pub fn new() -> Self {
        Self {
            runner_types: RUNNER_TYPES.iter().map(|t| OptionView::plain(t)).collect(),
            budget_ranges: BUDGET_RANGES
                .iter()
                .map(|r| OptionView::plain(r.label))
                .collect(),
            restaurant_types: RESTAURANT_TYPES.iter().map(|t| OptionView::plain(t)).collect(),
            food_types: FOOD_TYPES.iter().map(|t| OptionView::labelled(t)).collect(),
        }
    }
}

impl Default for IndexTemplate {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Fragment Templates (AJAX responses, no base.html)
// ============================================================================

/// Results table with notification and pagination controls.
#[derive(Template)]
#[template(path = "results.html")]
pub struct ResultsTemplate {
    pub notice: Option<NoticeView>,
    pub has_results: bool,
    /// Placeholder shown instead of the table when there are no rows
    pub empty_message: &'static str,
    pub rows: Vec<RowView>,
    pub buttons: Vec<PageButtonView>,
    pub can_go_back: bool,
    pub can_go_forward: bool,
    pub caption: String,
}

impl ResultsTemplate {
    /// Build the fragment for a page, with an optional notification on top.
    pub fn new(page: &PageView, notification: Option<&Notification>) -> Self {
        Self {
            notice: notification.map(NoticeView::from_notification),
            has_results: page.total_results > 0,
            empty_message: match page.outcome {
                Some(Outcome::Failed) => "Results could not be loaded",
                Some(Outcome::Found(_) | Outcome::Empty) | None => "No results to display",
            },
            rows: page.rows.iter().map(RowView::from_record).collect(),
            buttons: page
                .visible_pages
                .iter()
                .map(|&number| PageButtonView {
                    number,
                    active: number == page.current_page,
                })
                .collect(),
            can_go_back: page.can_go_back,
            can_go_forward: page.can_go_forward,
            caption: page.caption.clone(),
        }
    }
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// A `<select>` option or checkbox.
#[derive(Debug, Clone)]
pub struct OptionView {
    pub value: String,
    pub label: String,
}

impl OptionView {
    fn plain(value: &str) -> Self {
        Self {
            value: value.to_string(),
            label: value.to_string(),
        }
    }

    fn labelled(value: &str) -> Self {
        Self {
            value: value.to_string(),
            label: catalog::display_label(value),
        }
    }
}

/// Notification banner.
#[derive(Debug, Clone)]
pub struct NoticeView {
    /// CSS modifier: "success", "info" or "error"
    pub kind: &'static str,
    pub title: String,
    pub description: String,
}

impl NoticeView {
    pub fn from_notification(notification: &Notification) -> Self {
        let kind = match notification.severity {
            Severity::Success => "success",
            Severity::Info => "info",
            Severity::Error => "error",
        };
        Self {
            kind,
            title: notification.title.clone(),
            description: notification.description.clone(),
        }
    }
}

/// One table row; the column order matches the table header.
#[derive(Debug, Clone)]
pub struct RowView {
    pub name: String,
    pub food_type: String,
    pub restaurant_type: String,
    pub nationality: String,
    pub min_budget: String,
    pub max_budget: String,
    pub district: String,
    pub carbohydrates: String,
    pub protein: String,
    pub fat: String,
}

impl RowView {
    pub fn from_record(record: &RestaurantRecord) -> Self {
        Self {
            name: record.restaurant_name.clone(),
            food_type: record.food_type.clone(),
            restaurant_type: record.restaurant_type.clone(),
            nationality: record.restaurant_nationality.clone(),
            min_budget: record.clean_min_budget.to_string(),
            max_budget: record.clean_max_budget.to_string(),
            district: record.district.clone(),
            carbohydrates: record.carbohydrates.clone(),
            protein: record.protein.clone(),
            fat: record.fat.clone(),
        }
    }
}

/// A page-number button.
#[derive(Debug, Clone)]
pub struct PageButtonView {
    pub number: usize,
    pub active: bool,
}
