//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::search::{Notification, PageNav, PageView};

/// Page-control action named in a query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavAction {
    First,
    Prev,
    Next,
    Last,
}

/// Query for `GET /results`.
///
/// Either `page` (a page number) or `nav` (a relative move) may be given;
/// `page` wins if both are. Neither just re-renders the current page.
#[derive(Debug, Default, Deserialize)]
pub struct PageRequest {
    pub page: Option<usize>,
    pub nav: Option<NavAction>,
}

impl PageRequest {
    /// The navigation this request asks for, if any.
    pub fn to_nav(&self) -> Result<Option<PageNav>, String> {
        if let Some(page) = self.page {
            if page == 0 {
                return Err("page numbers start at 1".to_string());
            }
            return Ok(Some(PageNav::To(page)));
        }

        Ok(self.nav.map(|nav| match nav {
            NavAction::First => PageNav::First,
            NavAction::Prev => PageNav::Prev,
            NavAction::Next => PageNav::Next,
            NavAction::Last => PageNav::Last,
        }))
    }
}

/// Response for `POST /search`.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    /// Notification for the user; absent if a newer search superseded this one
    pub notification: Option<Notification>,

    /// Whether a newer search superseded this one
    pub stale: bool,

    /// The page now on display
    pub page: PageView,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
