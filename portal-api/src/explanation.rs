use axum::Json;
use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};

use crate::AppState;
use crate::error::ApiError;

/// Structured record returned by the explanation service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MedicalExplanation {
    pub term: String,
    pub simple_explanation: String,
    pub signs: Vec<String>,
    pub care_tips: Vec<String>,
    pub when_to_consult: String,
    #[serde(default)]
    pub conversational_hints: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ExplanationQuery {
    pub term: Option<String>,
}

/// Proxy a free-text term to the upstream explanation service. Single
/// attempt, no retry; the caller falls back to local handling on failure.
pub async fn medical_explanation(
    State(state): State<AppState>,
    Query(query): Query<ExplanationQuery>,
) -> Result<Json<MedicalExplanation>, ApiError> {
    let term = query
        .term
        .as_deref()
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .ok_or(ApiError::MissingTerm)?;

    let response = state
        .http
        .get(format!("{}/medical-explanation", state.upstream))
        .query(&[("term", term)])
        .send()
        .await
        .map_err(|err| {
            tracing::error!(%err, term, "explanation request failed");
            ApiError::ExplanationUnavailable
        })?;

    let status = response.status();
    if !status.is_success() {
        tracing::error!(%status, term, "explanation service returned an error");
        return Err(ApiError::ExplanationUnavailable);
    }

    let explanation = response.json::<MedicalExplanation>().await.map_err(|err| {
        tracing::error!(%err, term, "explanation payload did not parse");
        ApiError::ExplanationUnavailable
    })?;

    Ok(Json(explanation))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::{AppState, router};

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");
        serde_json::from_slice(&bytes).expect("body is json")
    }

    #[tokio::test]
    async fn missing_term_is_rejected_before_the_upstream_call() {
        let app = router(AppState::new("http://127.0.0.1:9".into()));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/medical-explanation")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Medical term is required");
    }

    #[tokio::test]
    async fn blank_term_counts_as_missing() {
        let app = router(AppState::new("http://127.0.0.1:9".into()));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/medical-explanation?term=%20%20")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn upstream_failure_collapses_to_one_generic_error() {
        // Nothing listens on the discard port, so the request fails fast.
        let app = router(AppState::new("http://127.0.0.1:9".into()));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/medical-explanation?term=anxiety")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Unable to retrieve medical explanation");
    }
}
