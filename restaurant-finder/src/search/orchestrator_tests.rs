//! Tests for the search orchestrator against scripted and HTTP sources.

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::Router;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use futures::future::BoxFuture;
use tokio::sync::oneshot;

use super::*;
use crate::domain::RestaurantRecord;
use crate::filter::{FilterSelection, QueryPayload, build_query};
use crate::finder::{FinderClient, FinderConfig, FinderError, MockFinderClient, RestaurantSource};

type Response = Result<Vec<RestaurantRecord>, FinderError>;

fn records(n: usize) -> Vec<RestaurantRecord> {
    (0..n)
        .map(|i| RestaurantRecord {
            restaurant_name: format!("Restaurant {i}"),
            restaurant_type: "Fast_Dining_Type".to_string(),
            food_type: "Burger_Type".to_string(),
            restaurant_nationality: "American".to_string(),
            clean_min_budget: 150.0,
            clean_max_budget: 350.0,
            district: "Watthana".to_string(),
            carbohydrates: "High".to_string(),
            protein: "High".to_string(),
            fat: "High".to_string(),
        })
        .collect()
}

fn payload() -> QueryPayload {
    build_query(&FilterSelection::new().with_food_types(["Burger_Type"]))
}

/// Source whose responses are released by the test, one per call.
struct GatedSource {
    gates: std::sync::Mutex<VecDeque<oneshot::Receiver<Response>>>,
    calls: AtomicUsize,
}

impl GatedSource {
    fn new(n: usize) -> (Arc<Self>, Vec<oneshot::Sender<Response>>) {
        let (senders, receivers): (Vec<_>, VecDeque<_>) = (0..n).map(|_| oneshot::channel()).unzip();
        let source = Arc::new(Self {
            gates: std::sync::Mutex::new(receivers),
            calls: AtomicUsize::new(0),
        });
        (source, senders)
    }

    async fn wait_for_calls(&self, n: usize) {
        while self.calls.load(Ordering::SeqCst) < n {
            tokio::task::yield_now().await;
        }
    }
}

impl RestaurantSource for GatedSource {
    fn search<'a>(&'a self, _payload: &'a QueryPayload) -> BoxFuture<'a, Response> {
        let gate = self.gates.lock().unwrap().pop_front();
        self.calls.fetch_add(1, Ordering::SeqCst);
        Box::pin(async move {
            match gate {
                Some(rx) => rx
                    .await
                    .unwrap_or_else(|_| Err(FinderError::MockData("gate dropped".into()))),
                None => Err(FinderError::MockData("no response scripted".into())),
            }
        })
    }
}

/// Serve a fake filter API on an ephemeral port and return its base URL.
async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn http_orchestrator(base_url: &str) -> Orchestrator {
    let client = FinderClient::new(FinderConfig::default().with_base_url(base_url)).unwrap();
    Orchestrator::new(Arc::new(client))
}

#[tokio::test]
async fn found_results_start_on_page_one() {
    let orchestrator = Orchestrator::new(Arc::new(MockFinderClient::new(records(25))));

    let settled = orchestrator.run_search(&payload()).await;
    assert_eq!(settled, Settled::Applied(Notification::found(25)));

    let view = orchestrator.page_view().await;
    assert_eq!(view.current_page, 1);
    assert_eq!(view.total_pages, 3);
    assert_eq!(view.rows.len(), 10);
    assert_eq!(orchestrator.phase().await, SearchPhase::Idle);
}

#[tokio::test]
async fn navigation_after_search() {
    let orchestrator = Orchestrator::new(Arc::new(MockFinderClient::new(records(25))));
    orchestrator.run_search(&payload()).await;

    let view = orchestrator.navigate(PageNav::Last).await;
    assert_eq!(view.current_page, 3);
    assert_eq!(view.rows.len(), 5);

    let view = orchestrator.navigate(PageNav::Prev).await;
    assert_eq!(view.current_page, 2);
    assert_eq!(view.rows[0].restaurant_name, "Restaurant 10");

    // A new search goes back to the first page.
    orchestrator.run_search(&payload()).await;
    assert_eq!(orchestrator.page_view().await.current_page, 1);
}

#[tokio::test]
async fn empty_array_is_no_results() {
    let router = Router::new().route(
        "/api/restaurants/filter",
        post(|| async { axum::Json(serde_json::json!([])) }),
    );
    let orchestrator = http_orchestrator(&serve(router).await);

    let settled = orchestrator.run_search(&payload()).await;
    let notification = settled.notification().unwrap();
    assert_eq!(notification.severity, Severity::Info);
    assert!(!notification.is_error());

    let view = orchestrator.page_view().await;
    assert_eq!(view.current_page, 1);
    assert_eq!(view.total_results, 0);
    assert!(view.rows.is_empty());
}

#[tokio::test]
async fn error_status_then_recovery() {
    let calls = Arc::new(AtomicUsize::new(0));
    let router = Router::new().route(
        "/api/restaurants/filter",
        post(move || {
            let calls = calls.clone();
            async move {
                if calls.fetch_add(1, Ordering::SeqCst) == 0 {
                    (StatusCode::INTERNAL_SERVER_ERROR, "database unavailable").into_response()
                } else {
                    axum::Json(records(12)).into_response()
                }
            }
        }),
    );
    let orchestrator = http_orchestrator(&serve(router).await);

    let settled = orchestrator.run_search(&payload()).await;
    assert!(settled.notification().unwrap().is_error());
    assert_eq!(orchestrator.page_view().await.total_results, 0);
    assert_eq!(orchestrator.phase().await, SearchPhase::Idle);

    let settled = orchestrator.run_search(&payload()).await;
    assert_eq!(settled, Settled::Applied(Notification::found(12)));
    let view = orchestrator.page_view().await;
    assert_eq!(view.total_results, 12);
    assert_eq!(view.total_pages, 2);
}

#[tokio::test]
async fn failure_clears_previous_results() {
    let (source, mut gates) = GatedSource::new(2);
    let orchestrator = Arc::new(Orchestrator::new(source.clone()));

    gates.remove(0).send(Ok(records(8))).unwrap();
    orchestrator.run_search(&payload()).await;
    assert_eq!(orchestrator.page_view().await.total_results, 8);

    gates
        .remove(0)
        .send(Err(FinderError::Json {
            message: "expected a sequence".into(),
            body: None,
        }))
        .unwrap();
    let settled = orchestrator.run_search(&payload()).await;

    assert!(settled.notification().unwrap().is_error());
    assert_eq!(orchestrator.page_view().await.total_results, 0);
}

#[tokio::test]
async fn previous_results_visible_while_loading() {
    let (source, mut gates) = GatedSource::new(2);
    let orchestrator = Arc::new(Orchestrator::new(source.clone()));

    gates.remove(0).send(Ok(records(8))).unwrap();
    orchestrator.run_search(&payload()).await;

    let pending = tokio::spawn({
        let orchestrator = orchestrator.clone();
        async move { orchestrator.run_search(&payload()).await }
    });
    source.wait_for_calls(2).await;

    let view = orchestrator.page_view().await;
    assert!(view.loading);
    assert_eq!(view.total_results, 8);

    gates.remove(0).send(Ok(records(3))).unwrap();
    pending.await.unwrap();

    let view = orchestrator.page_view().await;
    assert!(!view.loading);
    assert_eq!(view.total_results, 3);
}

#[tokio::test]
async fn only_the_latest_search_is_applied() {
    let (source, mut gates) = GatedSource::new(2);
    let orchestrator = Arc::new(Orchestrator::new(source.clone()));

    let first = tokio::spawn({
        let orchestrator = orchestrator.clone();
        async move { orchestrator.run_search(&payload()).await }
    });
    source.wait_for_calls(1).await;

    let second = tokio::spawn({
        let orchestrator = orchestrator.clone();
        async move { orchestrator.run_search(&payload()).await }
    });
    source.wait_for_calls(2).await;

    let first_gate = gates.remove(0);
    let second_gate = gates.remove(0);

    // The newer search answers first, the older one straggles in after.
    second_gate.send(Ok(records(3))).unwrap();
    assert!(matches!(second.await.unwrap(), Settled::Applied(_)));

    first_gate.send(Ok(records(30))).unwrap();
    assert_eq!(first.await.unwrap(), Settled::Stale);

    let view = orchestrator.page_view().await;
    assert_eq!(view.total_results, 3);
    assert!(!view.loading);
}

#[tokio::test]
async fn aborted_search_does_not_stay_loading() {
    let (source, mut gates) = GatedSource::new(2);
    let orchestrator = Arc::new(Orchestrator::new(source.clone()));

    let abandoned = tokio::spawn({
        let orchestrator = orchestrator.clone();
        async move { orchestrator.run_search(&payload()).await }
    });
    source.wait_for_calls(1).await;
    assert!(orchestrator.page_view().await.loading);

    // The client goes away while the source is still working.
    abandoned.abort();
    assert!(abandoned.await.unwrap_err().is_cancelled());
    let _held_open = gates.remove(0);

    assert_eq!(orchestrator.phase().await, SearchPhase::Idle);

    gates.remove(0).send(Ok(records(3))).unwrap();
    let settled = orchestrator.run_search(&payload()).await;
    assert_eq!(settled, Settled::Applied(Notification::found(3)));

    let view = orchestrator.page_view().await;
    assert!(!view.loading);
    assert_eq!(view.total_results, 3);
    assert_eq!(orchestrator.phase().await, SearchPhase::Idle);
}
