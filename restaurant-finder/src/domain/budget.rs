//! Budget buckets.

use std::fmt;

/// A labelled budget range in Thai Baht.
///
/// Budgets are chosen from a fixed list of buckets rather than typed in.
/// The "Any Budget" bucket has no bounds, so the remote API applies no
/// budget constraint at all.
///
/// # Examples
///
/// ```
/// use restaurant_finder::domain::BudgetRange;
///
/// let range = BudgetRange::find("301 - 600 Baht").unwrap();
/// assert_eq!(range.min, Some(301));
/// assert_eq!(range.max, Some(600));
///
/// let any = BudgetRange::find("Any Budget").unwrap();
/// assert_eq!((any.min, any.max), (None, None));
/// assert!(BudgetRange::find("cheap").is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetRange {
    /// Label shown in the form and used to look the bucket up.
    pub label: &'static str,
    /// Inclusive lower bound, if any.
    pub min: Option<u32>,
    /// Inclusive upper bound, if any.
    pub max: Option<u32>,
}

/// Every bucket the form offers, in display order.
pub static BUDGET_RANGES: [BudgetRange; 9] = [
    BudgetRange::unbounded("Any Budget"),
    BudgetRange::bounded("0 - 300 Baht", 0, 300),
    BudgetRange::bounded("301 - 600 Baht", 301, 600),
    BudgetRange::bounded("601 - 900 Baht", 601, 900),
    BudgetRange::bounded("901 - 1200 Baht", 901, 1200),
    BudgetRange::bounded("1201 - 1500 Baht", 1201, 1500),
    BudgetRange::bounded("1501 - 1800 Baht", 1501, 1800),
    BudgetRange::bounded("1801 - 2100 Baht", 1801, 2100),
    BudgetRange::bounded("More than 2100 Baht", 2101, 999_999),
];

impl BudgetRange {
    const fn unbounded(label: &'static str) -> Self {
        Self {
            label,
            min: None,
            max: None,
        }
    }

    const fn bounded(label: &'static str, min: u32, max: u32) -> Self {
        Self {
            label,
            min: Some(min),
            max: Some(max),
        }
    }

    /// Look up a bucket by its exact label.
    pub fn find(label: &str) -> Option<&'static BudgetRange> {
        BUDGET_RANGES.iter().find(|range| range.label == label)
    }
}

impl fmt::Display for BudgetRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label)
    }
}
