use crate::config::Config;
use crate::errors::{AppError, ResultExt};
use crate::models::{Lead, LeadStatus, LeadType, NewLead, SubmitLeadRequest, UpdateLeadStatusRequest};
use crate::store::LeadStore;
use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};

/// Shared application state injected into handlers.
pub struct AppState {
    /// Active lead store, selected at startup.
    pub store: Arc<dyn LeadStore>,
    /// Application configuration.
    pub config: Config,
}

/// Builds the application router. Exposed so integration tests can run
/// the exact routing and middleware stack the binary serves.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/leads",
            get(list_leads).post(submit_lead).patch(update_lead_status),
        )
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                // Form payloads are tiny; 1MB is generous headroom.
                .layer(RequestBodyLimitLayer::new(1024 * 1024))
                .layer(TraceLayer::new_for_http()),
        )
        .layer(CorsLayer::permissive())
}

/// Health check endpoint.
///
/// Reports the service identity plus the runtime mode and storage backend
/// the process was started with, so a deployment can be sanity-checked
/// from the outside.
pub async fn health(State(state): State<Arc<AppState>>) -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": "amplera-leads",
            "version": env!("CARGO_PKG_VERSION"),
            "mode": state.config.mode.to_string(),
            "storage": state.config.storage_backend.to_string()
        })),
    )
}

/// Returns `Some` with the trimmed value when present and non-blank.
/// Blank strings count as absent, matching the presence-only validation
/// contract of the form.
fn required(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Normalizes an optional field: blank input becomes `None`.
fn optional(field: Option<String>) -> Option<String> {
    field.filter(|s| !s.trim().is_empty())
}

/// Validates a raw submit payload into a [`NewLead`].
///
/// `type`, `name` and `email` must be present and non-blank; anything
/// else is a validation error detected before any store call. Optional
/// fields arriving blank are normalized to null.
pub fn validate_submit(payload: SubmitLeadRequest) -> Result<NewLead, AppError> {
    let (lead_type, name, email) = match (
        required(&payload.lead_type),
        required(&payload.name),
        required(&payload.email),
    ) {
        (Some(t), Some(n), Some(e)) => (t.to_string(), n.to_string(), e.to_string()),
        _ => {
            return Err(AppError::BadRequest(
                "Missing required fields: type, name, email".to_string(),
            ))
        }
    };

    let lead_type: LeadType = lead_type.parse().map_err(AppError::BadRequest)?;

    Ok(NewLead {
        lead_type,
        name,
        email,
        company: optional(payload.company),
        app_name: optional(payload.app_name),
        budget: optional(payload.budget),
        mau: optional(payload.mau),
    })
}

/// GET /leads
///
/// Lists every lead, newest first. A store failure degrades to an empty
/// list rather than surfacing a 5xx to the caller; the form UI only ever
/// renders what it gets back.
pub async fn list_leads(State(state): State<Arc<AppState>>) -> Json<Vec<Lead>> {
    match state.store.list_leads().await {
        Ok(leads) => Json(leads),
        Err(e) => {
            tracing::warn!("Lead listing degraded to empty response: {}", e);
            Json(Vec::new())
        }
    }
}

/// POST /leads
///
/// Validates and stores a contact-form submission.
///
/// # Returns
///
/// * `201` with the created lead, `400` on missing required fields,
///   `500` on storage failure.
pub async fn submit_lead(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SubmitLeadRequest>,
) -> Result<(StatusCode, Json<Lead>), AppError> {
    let input = validate_submit(payload)?;

    tracing::info!(
        lead_type = %input.lead_type,
        name = %input.name,
        email = %input.email,
        company = ?input.company,
        app_name = ?input.app_name,
        budget = ?input.budget,
        mau = ?input.mau,
        timestamp = %chrono::Utc::now().to_rfc3339(),
        "New lead received"
    );

    let lead = state
        .store
        .create_lead(input)
        .await
        .context("storing submitted lead")?;
    tracing::info!("Lead {} saved with status '{}'", lead.id, lead.status);

    Ok((StatusCode::CREATED, Json(lead)))
}

/// PATCH /leads
///
/// Updates the follow-up status of an existing lead.
///
/// # Returns
///
/// * `200` with the updated lead, `400` on missing fields, `404` when no
///   lead matches the id, `500` on storage failure.
pub async fn update_lead_status(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<UpdateLeadStatusRequest>,
) -> Result<Json<Lead>, AppError> {
    let (id, status) = match (payload.id, required(&payload.status)) {
        (Some(id), Some(status)) => (id, status.to_string()),
        _ => {
            return Err(AppError::BadRequest(
                "Missing required fields: id, status".to_string(),
            ))
        }
    };

    let status: LeadStatus = status.parse().map_err(AppError::BadRequest)?;

    let lead = state
        .store
        .update_lead_status(id, status)
        .await
        .context("updating lead status")?
        .ok_or_else(|| AppError::NotFound("Lead not found".to_string()))?;

    Ok(Json(lead))
}
