use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::warn;

use super::clock::Clock;
use super::domain::{CompanyFacts, EligibilityError, FundingRoundFacts};
use super::evaluation::EligibilityChecker;

/// Request body shared by the check and documents endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityRequest {
    pub company: CompanyFacts,
    pub round: FundingRoundFacts,
}

/// Router exposing the checker over HTTP.
pub fn eligibility_router<C>(checker: Arc<EligibilityChecker<C>>) -> Router
where
    C: Clock + 'static,
{
    Router::new()
        .route("/api/v1/eligibility/check", post(check_handler::<C>))
        .route("/api/v1/eligibility/documents", post(documents_handler::<C>))
        .with_state(checker)
}

pub(crate) async fn check_handler<C>(
    State(checker): State<Arc<EligibilityChecker<C>>>,
    Json(request): Json<EligibilityRequest>,
) -> Response
where
    C: Clock + 'static,
{
    match checker.check_eligibility(&request.company, &request.round) {
        Ok(verdict) => (StatusCode::OK, Json(verdict)).into_response(),
        Err(error) => invalid_request(error),
    }
}

pub(crate) async fn documents_handler<C>(
    State(checker): State<Arc<EligibilityChecker<C>>>,
    Json(request): Json<EligibilityRequest>,
) -> Response
where
    C: Clock + 'static,
{
    match checker.required_documents(&request.company, &request.round) {
        Ok(documents) => (StatusCode::OK, Json(json!({ "documents": documents }))).into_response(),
        Err(error) => invalid_request(error),
    }
}

fn invalid_request(error: EligibilityError) -> Response {
    warn!(%error, "rejected eligibility request");
    let payload = json!({ "error": error.to_string() });
    (StatusCode::BAD_REQUEST, Json(payload)).into_response()
}
