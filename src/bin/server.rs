//! REST API server for card number classification.
//!
//! # Usage
//!
//! ```bash
//! # Start server
//! cardcheck-server
//!
//! # With custom port
//! cardcheck-server --port 8080
//! ```
//!
//! # Swagger UI
//!
//! Visit http://localhost:3000/swagger-ui/ for interactive API documentation.

use axum::{
    http::{header, Method, StatusCode},
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

use card_classifier::{check_normalized, mask::mask, normalize, InputError};

const DEFAULT_PORT: u16 = 3000;
const MAX_BATCH: usize = 1000;

// ============================================================================
// OpenAPI Documentation
// ============================================================================

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Card Classifier API",
        version = "0.1.0",
        description = "Classifies card numbers by brand and estimates whether they could be real (Luhn checksum + known prefix). No issuer lookups, nothing stored.",
        license(name = "MIT")
    ),
    tags(
        (name = "Classification", description = "Card number classification endpoints"),
        (name = "System", description = "Health and status endpoints")
    ),
    paths(classify_card, classify_batch, health),
    components(schemas(
        ClassifyRequest,
        ClassifyResponse,
        BatchClassifyRequest,
        BatchClassifyResponse,
        BatchSummary,
        HealthResponse,
    ))
)]
struct ApiDoc;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Deserialize, ToSchema)]
#[schema(example = json!({"card_number": "4111 1111 1111 1111"}))]
struct ClassifyRequest {
    /// Raw card number text. Every non-digit character is ignored.
    card_number: String,
}

#[derive(Serialize, ToSchema)]
#[schema(example = json!({
    "message": "Brand: Visa. This sequence belongs to a real card.",
    "brand": "Visa",
    "luhn_valid": true,
    "is_probably_real": true
}))]
struct ClassifyResponse {
    /// Human-readable verdict, or the reason the input was rejected
    message: String,
    /// Detected brand. One of: American Express, MasterCard, Discover, HiperCard, Elo, Visa, Unknown
    #[serde(skip_serializing_if = "Option::is_none")]
    brand: Option<String>,
    /// Whether the Luhn checksum passed
    #[serde(skip_serializing_if = "Option::is_none")]
    luhn_valid: Option<bool>,
    /// Whether the number passes the checksum and matches a known brand
    #[serde(skip_serializing_if = "Option::is_none")]
    is_probably_real: Option<bool>,
    /// Error code when the input was rejected: empty_input or invalid_length
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl ClassifyResponse {
    fn from_input(raw: &str) -> Self {
        let digits = normalize(raw);
        let outcome = check_normalized(&digits);

        match &outcome {
            Ok(r) => tracing::debug!(
                number = %mask(&digits),
                brand = %r.brand(),
                real = r.is_probably_real(),
                "classified"
            ),
            Err(e) => tracing::debug!(number = %mask(&digits), error = e.code(), "rejected"),
        }

        outcome.map_or_else(Self::rejected, |r| Self {
            message: r.message().to_string(),
            brand: Some(r.brand().name().to_string()),
            luhn_valid: Some(r.luhn_valid()),
            is_probably_real: Some(r.is_probably_real()),
            error: None,
        })
    }

    fn rejected(e: InputError) -> Self {
        Self {
            message: e.to_string(),
            brand: None,
            luhn_valid: None,
            is_probably_real: None,
            error: Some(e.code().to_string()),
        }
    }
}

#[derive(Deserialize, ToSchema)]
#[schema(example = json!({"card_numbers": ["4111111111111111", "4111111111111112", "abc"]}))]
struct BatchClassifyRequest {
    /// List of raw card numbers (at most 1000).
    card_numbers: Vec<String>,
}

#[derive(Serialize, ToSchema)]
struct BatchClassifyResponse {
    /// Classification results in request order
    results: Vec<ClassifyResponse>,
    /// Summary statistics
    summary: BatchSummary,
}

#[derive(Serialize, ToSchema)]
struct BatchSummary {
    /// Total inputs processed
    total: usize,
    /// Inputs judged probably real
    real: usize,
    /// Inputs judged fake
    fake: usize,
    /// Inputs rejected before classification
    rejected: usize,
}

#[derive(Serialize, ToSchema)]
struct HealthResponse {
    /// Service status
    status: String,
    /// API version
    version: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// Classify a card number
#[utoipa::path(
    post,
    path = "/classify",
    request_body = ClassifyRequest,
    responses(
        (status = 200, description = "Classification result", body = ClassifyResponse)
    ),
    tag = "Classification"
)]
async fn classify_card(Json(req): Json<ClassifyRequest>) -> Json<ClassifyResponse> {
    Json(ClassifyResponse::from_input(&req.card_number))
}

/// Classify multiple card numbers
#[utoipa::path(
    post,
    path = "/classify/batch",
    request_body = BatchClassifyRequest,
    responses(
        (status = 200, description = "Batch classification results", body = BatchClassifyResponse),
        (status = 413, description = "More than 1000 card numbers in one request")
    ),
    tag = "Classification"
)]
async fn classify_batch(
    Json(req): Json<BatchClassifyRequest>,
) -> Result<Json<BatchClassifyResponse>, (StatusCode, String)> {
    if req.card_numbers.len() > MAX_BATCH {
        tracing::debug!(count = req.card_numbers.len(), "batch too large");
        return Err((
            StatusCode::PAYLOAD_TOO_LARGE,
            format!(
                "Batch of {} card numbers exceeds the limit of {}",
                req.card_numbers.len(),
                MAX_BATCH
            ),
        ));
    }

    let results: Vec<ClassifyResponse> = req
        .card_numbers
        .iter()
        .map(|n| ClassifyResponse::from_input(n))
        .collect();

    let real = results
        .iter()
        .filter(|r| r.is_probably_real == Some(true))
        .count();
    let rejected = results.iter().filter(|r| r.error.is_some()).count();

    Ok(Json(BatchClassifyResponse {
        summary: BatchSummary {
            total: results.len(),
            real,
            fake: results.len() - real - rejected,
            rejected,
        },
        results,
    }))
}

/// Health check
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "System"
)]
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// ============================================================================
// Main
// ============================================================================

fn app() -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_origin(Any);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/classify", post(classify_card))
        .route("/classify/batch", post(classify_batch))
        .route("/health", get(health))
        .layer(cors)
        .layer(tower_http::trace::TraceLayer::new_for_http())
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let port: u16 = std::env::args()
        .skip_while(|a| a != "--port")
        .nth(1)
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Starting server on http://{}", addr);
    tracing::info!("Swagger UI available at http://localhost:{}/swagger-ui/", port);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app()).await
}
