use crate::infra::{AppState, SessionStore};
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{delete, get, post};
use axum::{Extension, Json, Router};
use mindful_market::error::AppError;
use mindful_market::footprint::{
    list_locations, list_product_categories, EstimateError, EstimateResult, ImpactBreakdown,
    Location, ProductCategory,
};
use mindful_market::session::{
    Badge, EcoSession, EcoStanding, LedgerSummary, MascotMood, PurchaseRecord, PurchaseRequest,
    EMPTY_HISTORY_HINT,
};
use serde::Serialize;
use serde_json::json;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub(crate) struct LocationView {
    pub(crate) name: &'static str,
    pub(crate) latitude: f64,
    pub(crate) longitude: f64,
    pub(crate) sub_locations: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub(crate) struct ProductView {
    pub(crate) name: String,
    pub(crate) emission_factor: f64,
}

#[derive(Debug, Serialize)]
pub(crate) struct EstimateResponse {
    #[serde(flatten)]
    pub(crate) estimate: EstimateResult,
    pub(crate) breakdown: ImpactBreakdown,
}

#[derive(Debug, Serialize)]
pub(crate) struct SessionCreated {
    pub(crate) session_id: Uuid,
}

#[derive(Debug, Serialize)]
pub(crate) struct PurchaseResponse {
    pub(crate) record: PurchaseRecord,
    pub(crate) breakdown: ImpactBreakdown,
    pub(crate) standing: StandingView,
}

#[derive(Debug, Serialize)]
pub(crate) struct HistoryView {
    pub(crate) records: Vec<PurchaseRecord>,
    pub(crate) summary: LedgerSummary,
}

#[derive(Debug, Serialize)]
pub(crate) struct BadgeView {
    pub(crate) badge: Badge,
    pub(crate) label: &'static str,
}

#[derive(Debug, Serialize)]
pub(crate) struct StandingView {
    pub(crate) score: f64,
    pub(crate) badges: Vec<BadgeView>,
    pub(crate) mascot: MascotMood,
    pub(crate) mascot_message: &'static str,
    pub(crate) gauge_tone: &'static str,
    pub(crate) suggestions: Vec<&'static str>,
    pub(crate) summary: LedgerSummary,
}

impl StandingView {
    fn for_session(session: &EcoSession) -> Self {
        let EcoStanding {
            score,
            badges,
            mascot,
        } = session.current_score_and_badges();

        let suggestions = if session.list_history().is_empty() {
            vec![EMPTY_HISTORY_HINT]
        } else {
            session
                .latest_suggestions()
                .into_iter()
                .map(|suggestion| suggestion.message())
                .collect()
        };

        Self {
            score,
            badges: badges
                .into_iter()
                .map(|badge| BadgeView {
                    badge,
                    label: badge.label(),
                })
                .collect(),
            mascot,
            mascot_message: mascot.message(),
            gauge_tone: mascot.gauge_tone(),
            suggestions,
            summary: session.summary(),
        }
    }
}

pub(crate) fn with_market_routes(store: SessionStore) -> Router {
    Router::new()
        .route("/api/v1/locations", get(locations_endpoint))
        .route(
            "/api/v1/locations/:location/sub-locations",
            get(sub_locations_endpoint),
        )
        .route("/api/v1/products", get(products_endpoint))
        .route("/api/v1/estimate", post(estimate_endpoint))
        .route("/api/v1/sessions", post(create_session_endpoint))
        .route("/api/v1/sessions/:session_id", delete(end_session_endpoint))
        .route(
            "/api/v1/sessions/:session_id/purchases",
            post(add_purchase_endpoint),
        )
        .route(
            "/api/v1/sessions/:session_id/history",
            get(history_endpoint).delete(clear_history_endpoint),
        )
        .route(
            "/api/v1/sessions/:session_id/standing",
            get(standing_endpoint),
        )
        .with_state(store)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn locations_endpoint() -> Json<Vec<LocationView>> {
    let views = list_locations()
        .into_iter()
        .map(|location| {
            let coordinate = location.coordinate();
            LocationView {
                name: location.label(),
                latitude: coordinate.latitude,
                longitude: coordinate.longitude,
                sub_locations: location.sub_locations(),
            }
        })
        .collect();
    Json(views)
}

pub(crate) async fn sub_locations_endpoint(
    Path(location): Path<String>,
) -> Result<Json<&'static [&'static str]>, AppError> {
    let location: Location = location.parse().map_err(EstimateError::from)?;
    Ok(Json(location.sub_locations()))
}

pub(crate) async fn products_endpoint() -> Json<Vec<ProductView>> {
    let views = list_product_categories()
        .into_iter()
        .map(|category| ProductView {
            name: category.label().to_string(),
            emission_factor: category.emission_factor(),
        })
        .collect();
    Json(views)
}

pub(crate) async fn estimate_endpoint(
    Json(request): Json<PurchaseRequest>,
) -> Result<Json<EstimateResponse>, AppError> {
    let estimate = EcoSession::new().estimate(
        &request.product,
        request.price,
        &request.buyer,
        &request.shipper,
    )?;
    let breakdown = ImpactBreakdown::from_parts(
        &ProductCategory::from_name(&request.product),
        request.price,
        estimate.distance_km,
        estimate.impact_kg,
    );

    Ok(Json(EstimateResponse {
        estimate,
        breakdown,
    }))
}

pub(crate) async fn create_session_endpoint(
    State(store): State<SessionStore>,
) -> Result<(StatusCode, Json<SessionCreated>), AppError> {
    let session_id = store.create()?;
    Ok((StatusCode::CREATED, Json(SessionCreated { session_id })))
}

pub(crate) async fn end_session_endpoint(
    State(store): State<SessionStore>,
    Path(session_id): Path<String>,
) -> Result<StatusCode, AppError> {
    store.remove(&session_id)?;
    Ok(StatusCode::NO_CONTENT)
}

pub(crate) async fn add_purchase_endpoint(
    State(store): State<SessionStore>,
    Path(session_id): Path<String>,
    Json(request): Json<PurchaseRequest>,
) -> Result<(StatusCode, Json<PurchaseResponse>), AppError> {
    let response = store.with_session(&session_id, |session| {
        let record = session.submit_purchase(&request)?;
        Ok::<_, AppError>(PurchaseResponse {
            breakdown: session.explain(&record),
            record,
            standing: StandingView::for_session(session),
        })
    })??;

    Ok((StatusCode::CREATED, Json(response)))
}

pub(crate) async fn history_endpoint(
    State(store): State<SessionStore>,
    Path(session_id): Path<String>,
) -> Result<Json<HistoryView>, AppError> {
    let view = store.with_session(&session_id, |session| HistoryView {
        records: session.list_history().to_vec(),
        summary: session.summary(),
    })?;
    Ok(Json(view))
}

pub(crate) async fn clear_history_endpoint(
    State(store): State<SessionStore>,
    Path(session_id): Path<String>,
) -> Result<StatusCode, AppError> {
    store.with_session(&session_id, EcoSession::clear_history)?;
    Ok(StatusCode::NO_CONTENT)
}

pub(crate) async fn standing_endpoint(
    State(store): State<SessionStore>,
    Path(session_id): Path<String>,
) -> Result<Json<StandingView>, AppError> {
    let view = store.with_session(&session_id, |session| StandingView::for_session(session))?;
    Ok(Json(view))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use mindful_market::config::SessionConfig;
    use serde_json::Value;
    use tower::ServiceExt;

    async fn send(
        router: Router,
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(payload) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("request builds");

        let response = router.oneshot(request).await.expect("router responds");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("json body")
        };
        (status, value)
    }

    fn purchase(product: &str, price: f64, buyer: &str, shipper: &str) -> Value {
        json!({ "product": product, "price": price, "buyer": buyer, "shipper": shipper })
    }

    #[tokio::test]
    async fn lists_locations_and_products() {
        let router = with_market_routes(SessionStore::default());

        let (status, locations) = send(router.clone(), "GET", "/api/v1/locations", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(locations.as_array().map(Vec::len), Some(8));
        assert_eq!(locations[1]["name"], "United States");

        let (status, subs) = send(
            router.clone(),
            "GET",
            "/api/v1/locations/Japan/sub-locations",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(subs[0], "Tokyo");

        let (_, products) = send(router, "GET", "/api/v1/products", None).await;
        assert_eq!(products[2]["name"], "Electronics");
        assert_eq!(products[2]["emission_factor"], 2.8);
    }

    #[tokio::test]
    async fn estimate_returns_flattened_result_with_breakdown() {
        let router = with_market_routes(SessionStore::default());
        let (status, body) = send(
            router,
            "POST",
            "/api/v1/estimate",
            Some(purchase("Groceries", 100.0, "India", "India")),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["impact_kg"], 33.0);
        assert_eq!(body["eco_friendly"], true);
        assert_eq!(body["breakdown"]["material_factor"], 0.33);
    }

    #[tokio::test]
    async fn estimate_rejects_unknown_location() {
        let router = with_market_routes(SessionStore::default());
        let (status, body) = send(
            router,
            "POST",
            "/api/v1/estimate",
            Some(purchase("Groceries", 100.0, "India", "Gondor")),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "invalid location 'Gondor'");
    }

    #[tokio::test]
    async fn session_lifecycle_tracks_standing() {
        let store = SessionStore::default();
        let router = with_market_routes(store.clone());

        let (status, created) = send(router.clone(), "POST", "/api/v1/sessions", None).await;
        assert_eq!(status, StatusCode::CREATED);
        let id = created["session_id"].as_str().expect("id string").to_string();

        let (_, standing) = send(
            router.clone(),
            "GET",
            &format!("/api/v1/sessions/{id}/standing"),
            None,
        )
        .await;
        assert_eq!(standing["score"], 100.0);
        assert_eq!(standing["suggestions"][0], EMPTY_HISTORY_HINT);

        let (status, added) = send(
            router.clone(),
            "POST",
            &format!("/api/v1/sessions/{id}/purchases"),
            Some(purchase("Groceries", 100.0, "India", "India")),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(added["record"]["eco_friendly"], true);
        assert_eq!(added["standing"]["score"], 75.0);
        assert_eq!(added["standing"]["badges"][0]["label"], "Eco Starter");
        assert_eq!(added["standing"]["mascot"], "celebratory");

        let (_, history) = send(
            router.clone(),
            "GET",
            &format!("/api/v1/sessions/{id}/history"),
            None,
        )
        .await;
        assert_eq!(history["summary"]["purchases"], 1);

        let (status, _) = send(
            router.clone(),
            "DELETE",
            &format!("/api/v1/sessions/{id}/history"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (_, standing) = send(
            router,
            "GET",
            &format!("/api/v1/sessions/{id}/standing"),
            None,
        )
        .await;
        assert_eq!(standing["score"], 100.0);
        assert_eq!(standing["badges"].as_array().map(Vec::len), Some(0));
    }

    #[tokio::test]
    async fn rejected_purchase_leaves_session_untouched() {
        let store = SessionStore::default();
        let router = with_market_routes(store.clone());
        let id = store.create().expect("room for a session");

        let (status, _) = send(
            router,
            "POST",
            &format!("/api/v1/sessions/{id}/purchases"),
            Some(purchase("Shoes", 0.0, "France", "France")),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let len = store
            .with_session(&id.to_string(), |session| session.list_history().len())
            .expect("session exists");
        assert_eq!(len, 0);
    }

    #[tokio::test]
    async fn ended_session_is_gone() {
        let store = SessionStore::default();
        let router = with_market_routes(store.clone());
        let id = store.create().expect("room for a session");
        store
            .with_session(&id.to_string(), |session| {
                session.submit_purchase(&PurchaseRequest {
                    product: "Groceries".to_string(),
                    price: 40.0,
                    buyer: "Japan".to_string(),
                    shipper: "Japan".to_string(),
                })
            })
            .expect("session exists")
            .expect("valid purchase");

        let (status, _) = send(
            router.clone(),
            "DELETE",
            &format!("/api/v1/sessions/{id}"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert_eq!(store.len(), 0);

        let (status, _) = send(
            router.clone(),
            "GET",
            &format!("/api/v1/sessions/{id}/standing"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(
            router,
            "DELETE",
            &format!("/api/v1/sessions/{id}"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn session_creation_stops_at_the_limit() {
        let store = SessionStore::new(SessionConfig::new(1).expect("positive limit"));
        let router = with_market_routes(store);

        let (status, _) = send(router.clone(), "POST", "/api/v1/sessions", None).await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) = send(router, "POST", "/api/v1/sessions", None).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"], "session limit of 1 reached, end a session first");
    }

    #[tokio::test]
    async fn unknown_session_is_not_found() {
        let router = with_market_routes(SessionStore::default());
        let (status, body) = send(
            router,
            "GET",
            "/api/v1/sessions/00000000-0000-4000-8000-000000000000/standing",
            None,
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"].as_str().unwrap_or_default().contains("not found"));
    }
}
