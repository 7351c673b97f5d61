use axum::extract::{Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use ipo_screener_data::ListingFilter;
use ipo_screener_domain::entities::{OfferingProfile, OutcomePrediction};
use ipo_screener_domain::value_objects::SimulationResult;
use ipo_screener_simulation::SimulationRequest;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::error::ApiError;
use crate::models::{HealthResponse, ListListingsResponse, ListingView, ListingsQuery};
use crate::state::AppState;

/// Builds the full API router over the shared state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/health", get(health))
        .route("/api/v1/listings", get(list_listings))
        .route("/api/v1/simulations", post(run_simulation))
        .route("/api/v1/predictions", post(predict))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

async fn list_listings(
    State(state): State<AppState>,
    Query(query): Query<ListingsQuery>,
) -> Json<ListListingsResponse> {
    let filter = ListingFilter {
        search: query.search,
        sector: query.sector,
    };
    let listings: Vec<ListingView> = state
        .listings
        .filter(&filter)
        .into_iter()
        .map(ListingView::from)
        .collect();
    Json(ListListingsResponse {
        total: listings.len(),
        listings,
    })
}

async fn run_simulation(
    State(state): State<AppState>,
    Json(request): Json<SimulationRequest>,
) -> Result<Json<SimulationResult>, ApiError> {
    let result = state.simulator.run(&request)?;
    Ok(Json(result))
}

async fn predict(
    State(state): State<AppState>,
    Json(offering): Json<OfferingProfile>,
) -> Result<Json<OutcomePrediction>, ApiError> {
    let prediction = state.predictor.predict(&offering).await?;
    Ok(Json(prediction))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use ipo_screener_data::{FixedPredictionProvider, ListingStore, parse_prediction_payload};
    use ipo_screener_simulation::Simulator;
    use serde_json::{Value, json};
    use std::sync::Arc;
    use tower::util::ServiceExt;

    const SHEET: &str = "\
Ticker Code,Company Name,Sector,Final Price (Rp),Listing Date,Return D1,Underwriter(s)
SUPA,Superior Prima Sukses,Basic Materials,635,2024-10-08,0.25,\"CC,LG\"
AADI,Adaro Andalan,Energy,5550,2024-12-05,0.1982,YP
";

    const PREDICTION_BODY: &str = r#"{
        "status": "success",
        "prediction": "Positive Profit",
        "probabilities": {"loss": 0.21, "profit": 0.54, "ara": 0.25},
        "metrics": {"size_billion": 2794.0, "price_pos": 0.6875}
    }"#;

    fn test_router() -> Router {
        let listings = ListingStore::from_reader(SHEET.as_bytes()).unwrap();
        let canned = parse_prediction_payload(PREDICTION_BODY).unwrap();
        let state = AppState::new(
            Simulator::idx(),
            listings,
            Arc::new(FixedPredictionProvider::new(canned)),
        );
        router(state)
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn health_answers_ok() {
        let response = test_router()
            .oneshot(Request::get("/api/v1/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn simulation_round_trips() {
        let request = post_json(
            "/api/v1/simulations",
            json!({"reference_price": 635, "lot_size": 4, "horizon_days": 3}),
        );
        let response = test_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["initial_capital"], 254_000);
        assert_eq!(body["up_path"].as_array().unwrap().len(), 3);
        assert_eq!(body["up_path"][0]["price"], 793);
        assert_eq!(body["down_path"][0]["pnl"], -63_600);
    }

    #[tokio::test]
    async fn invalid_simulation_input_is_unprocessable() {
        let request = post_json(
            "/api/v1/simulations",
            json!({"reference_price": 635, "lot_size": 0, "horizon_days": 3}),
        );
        let response = test_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = body_json(response).await;
        assert!(body["error"].as_str().unwrap().contains("lot size"));
    }

    #[tokio::test]
    async fn listings_filter_by_search_term() {
        let response = test_router()
            .oneshot(
                Request::get("/api/v1/listings?search=adaro")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["total"], 1);
        assert_eq!(body["listings"][0]["ticker"], "AADI");
        assert_eq!(body["listings"][0]["lead_underwriter"], "YP");
        assert_eq!(body["listings"][0]["d1_close_price"], 6650);
    }

    #[tokio::test]
    async fn predictions_are_forwarded() {
        let request = post_json(
            "/api/v1/predictions",
            json!({
                "ticker": "SUPA",
                "final_price": 635,
                "shares_offered": 4400000000u64,
                "low_price": 525,
                "high_price": 695,
                "has_warrant": false,
                "lead_underwriter": "CC",
                "sector": "Financials",
                "is_oversubscribed": true
            }),
        );
        let response = test_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["label"], "Positive Profit");
        assert_eq!(body["probabilities"]["band_up"], 0.25);
    }
}
