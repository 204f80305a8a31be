//! Search session state and its transitions.
//!
//! All mutable state of a search lives in [`SearchSession`]. It is changed
//! only through [`SearchSession::begin`], [`SearchSession::settle`] and
//! [`SearchSession::navigate`], so every transition can be exercised without
//! a network or a browser.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::domain::RestaurantRecord;
use crate::finder::FinderError;
use crate::pagination::{ITEMS_PER_PAGE, PageState};

use super::notification::Notification;

/// Whether a search is outstanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchPhase {
    Idle,
    Loading,
}

/// The kind of the most recently applied outcome.
///
/// Tells the results view whether an empty table means "nothing matched"
/// or "the search failed".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "count")]
pub enum Outcome {
    Found(usize),
    Empty,
    Failed,
}

/// Identifies one issued search. Later tickets compare greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SearchTicket(u64);

/// What happened when a search settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settled {
    /// The outcome replaced the result set.
    Applied(Notification),
    /// A newer search was issued meanwhile; the outcome was dropped.
    Stale,
}

impl Settled {
    pub fn notification(&self) -> Option<&Notification> {
        match self {
            Settled::Applied(notification) => Some(notification),
            Settled::Stale => None,
        }
    }
}

/// A page-control action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageNav {
    First,
    Prev,
    Next,
    Last,
    To(usize),
}

/// Everything needed to render the results table for the current page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageView {
    pub rows: Vec<RestaurantRecord>,
    pub current_page: usize,
    pub total_pages: usize,
    pub total_results: usize,
    pub visible_pages: Vec<usize>,
    pub can_go_back: bool,
    pub can_go_forward: bool,
    pub caption: String,
    pub loading: bool,
    /// Outcome of the last applied search; `None` before the first one.
    pub outcome: Option<Outcome>,
}

/// Result set, page position and request bookkeeping for one user.
#[derive(Debug, Clone)]
pub struct SearchSession {
    results: Vec<RestaurantRecord>,
    page: PageState,
    issued: u64,
    in_flight: usize,
    last_outcome: Option<Outcome>,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new(ITEMS_PER_PAGE)
    }
}

impl SearchSession {
    pub fn new(items_per_page: usize) -> Self {
        Self {
            results: Vec::new(),
            page: PageState::new(items_per_page),
            issued: 0,
            in_flight: 0,
            last_outcome: None,
        }
    }

    /// Start a search. Previous results stay in place until it settles.
    pub fn begin(&mut self) -> SearchTicket {
        self.issued += 1;
        self.in_flight += 1;
        debug!(ticket = self.issued, in_flight = self.in_flight, "search started");
        SearchTicket(self.issued)
    }

    /// Give up on a search that will never settle.
    ///
    /// Only the in-flight count changes; the result set and page stay as
    /// they were.
    pub fn abandon(&mut self, ticket: SearchTicket) {
        self.in_flight = self.in_flight.saturating_sub(1);
        debug!(ticket = ticket.0, in_flight = self.in_flight, "search abandoned");
    }

    /// Apply the outcome of the search identified by `ticket`.
    ///
    /// Only the most recently issued search may change the result set;
    /// anything older is dropped. Failures clear the results.
    pub fn settle(
        &mut self,
        ticket: SearchTicket,
        result: Result<Vec<RestaurantRecord>, FinderError>,
    ) -> Settled {
        self.in_flight = self.in_flight.saturating_sub(1);

        if ticket.0 != self.issued {
            debug!(
                ticket = ticket.0,
                latest = self.issued,
                "dropping outcome of superseded search"
            );
            return Settled::Stale;
        }

        let (outcome, notification) = match result {
            Ok(records) if records.is_empty() => {
                info!("search matched no restaurants");
                self.results = records;
                (Outcome::Empty, Notification::no_results())
            }
            Ok(records) => {
                let count = records.len();
                info!(count, "search matched restaurants");
                self.results = records;
                (Outcome::Found(count), Notification::found(count))
            }
            Err(e) => {
                warn!(error = %e, "search failed");
                self.results.clear();
                (Outcome::Failed, Notification::fetch_failed())
            }
        };

        self.page.reset();
        self.last_outcome = Some(outcome);
        Settled::Applied(notification)
    }

    pub fn phase(&self) -> SearchPhase {
        if self.in_flight > 0 {
            SearchPhase::Loading
        } else {
            SearchPhase::Idle
        }
    }

    pub fn total_pages(&self) -> usize {
        self.page.total_pages(self.results.len())
    }

    /// Move between pages of the current result set.
    pub fn navigate(&mut self, nav: PageNav) {
        let total = self.total_pages();
        match nav {
            PageNav::First => self.page.first(),
            PageNav::Prev => self.page.prev(),
            PageNav::Next => self.page.next(total),
            PageNav::Last => self.page.last(total),
            PageNav::To(n) => self.page.go_to(n),
        }
    }

    /// Snapshot of the current page.
    pub fn view(&self) -> PageView {
        let total_pages = self.total_pages();
        PageView {
            rows: self.page.slice(&self.results).to_vec(),
            current_page: self.page.current_page(),
            total_pages,
            total_results: self.results.len(),
            visible_pages: self.page.visible_pages(total_pages),
            can_go_back: self.page.can_go_back(),
            can_go_forward: self.page.can_go_forward(total_pages),
            caption: self.page.caption(total_pages),
            loading: self.phase() == SearchPhase::Loading,
            outcome: self.last_outcome,
        }
    }
}
