//! Application route configuration.

use axum::{extract::State, http::StatusCode, response::Json, routing::get, Router};
use serde::Serialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{catalog_routes, comment_routes, favorite_routes, user_routes};
use super::openapi::ApiDoc;
use super::AppState;

/// Every public endpoint, as listed by the sitemap.
const ENDPOINTS: &[(&str, &str)] = &[
    ("GET", "/people"),
    ("POST", "/people"),
    ("GET", "/people/{id}"),
    ("PUT", "/people/{id}"),
    ("DELETE", "/people/{id}"),
    ("GET", "/planets"),
    ("POST", "/planets"),
    ("GET", "/planets/{id}"),
    ("PUT", "/planets/{id}"),
    ("DELETE", "/planets/{id}"),
    ("GET", "/starships"),
    ("POST", "/starships"),
    ("GET", "/starships/{id}"),
    ("PUT", "/starships/{id}"),
    ("DELETE", "/starships/{id}"),
    ("POST", "/user"),
    ("GET", "/users"),
    ("GET", "/users/{user_id}/favorites"),
    ("GET", "/users/{user_id}/comments"),
    ("POST", "/favorites/user/{user_id}/planet/{planet_id}"),
    ("POST", "/favorites/user/{user_id}/people/{people_id}"),
    ("POST", "/favorites/user/{user_id}/starship/{starship_id}"),
    ("DELETE", "/favorite/planet/{planet_id}"),
    ("DELETE", "/favorites/people/{people_id}"),
    ("DELETE", "/favorites/starship/{starship_id}"),
    ("POST", "/comment/planet/{planet_id}"),
    ("POST", "/comments/people/{people_id}"),
    ("POST", "/comments/starship/{starship_id}"),
    ("GET", "/health"),
    ("GET", "/swagger-ui"),
];

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(sitemap))
        .route("/health", get(health))
        // OpenAPI Swagger UI documentation
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(catalog_routes())
        .merge(user_routes())
        .merge(favorite_routes())
        .merge(comment_routes())
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// One sitemap line
#[derive(Serialize)]
struct Endpoint {
    method: &'static str,
    path: &'static str,
}

/// Root endpoint: every route the API serves
async fn sitemap() -> Json<Vec<Endpoint>> {
    Json(
        ENDPOINTS
            .iter()
            .map(|&(method, path)| Endpoint { method, path })
            .collect(),
    )
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    services: ServiceHealth,
}

/// Individual service health status
#[derive(Serialize)]
struct ServiceHealth {
    database: ServiceStatus,
}

/// Service status
#[derive(Serialize)]
struct ServiceStatus {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Health check endpoint with database connectivity check
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let db_status = match state.database.ping().await {
        Ok(_) => ServiceStatus {
            status: "healthy",
            error: None,
        },
        Err(e) => {
            tracing::warn!("Database health check failed: {}", e);
            ServiceStatus {
                status: "unhealthy",
                error: Some(e.to_string()),
            }
        }
    };

    let healthy = db_status.error.is_none();

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" },
        services: ServiceHealth {
            database: db_status,
        },
    };

    let status_code = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status_code, Json(response))
}
