//! Runs searches against a restaurant source and keeps the session current.

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::Mutex;
use tracing::warn;

use crate::filter::QueryPayload;
use crate::finder::RestaurantSource;

use super::session::{PageNav, PageView, SearchPhase, SearchSession, SearchTicket, Settled};

/// Owns the search session and the source it queries.
///
/// The session lock is never held across the network call, so navigation
/// and further submissions stay responsive while a search is outstanding.
pub struct Orchestrator {
    source: Arc<dyn RestaurantSource>,
    session: Arc<Mutex<SearchSession>>,
}

impl Orchestrator {
    pub fn new(source: Arc<dyn RestaurantSource>) -> Self {
        Self {
            source,
            session: Arc::new(Mutex::new(SearchSession::default())),
        }
    }

    /// Query the source and apply the outcome.
    ///
    /// Errors never escape: a failed fetch becomes an error notification
    /// and the session returns to idle, ready for the next submission.
    /// If this future is dropped mid-flight the search is abandoned instead.
    pub async fn run_search(&self, payload: &QueryPayload) -> Settled {
        let ticket = self.session.lock().await.begin();
        let pending = PendingSearch {
            session: self.session.clone(),
            ticket: Some(ticket),
        };

        let result = self.source.search(payload).await;

        let mut session = self.session.lock().await;
        pending.disarm();
        session.settle(ticket, result)
    }

    pub async fn phase(&self) -> SearchPhase {
        self.session.lock().await.phase()
    }

    /// Snapshot of the current page.
    pub async fn page_view(&self) -> PageView {
        self.session.lock().await.view()
    }

    /// Apply a page-control action and return the resulting page.
    pub async fn navigate(&self, nav: PageNav) -> PageView {
        let mut session = self.session.lock().await;
        session.navigate(nav);
        session.view()
    }
}

/// An issued ticket that has not settled yet.
///
/// Dropping it while armed abandons the ticket, so a cancelled request
/// cannot leave the session loading forever.
struct PendingSearch {
    session: Arc<Mutex<SearchSession>>,
    ticket: Option<SearchTicket>,
}

impl PendingSearch {
    fn disarm(mut self) {
        self.ticket = None;
    }
}

impl Drop for PendingSearch {
    fn drop(&mut self) {
        let Some(ticket) = self.ticket.take() else {
            return;
        };

        warn!(?ticket, "search dropped before it settled");
        match self.session.try_lock() {
            Ok(mut session) => session.abandon(ticket),
            Err(_) => {
                // Contended: finish the bookkeeping once the lock frees up.
                let session = self.session.clone();
                if let Ok(handle) = Handle::try_current() {
                    handle.spawn(async move { session.lock().await.abandon(ticket) });
                }
            }
        }
    }
}
