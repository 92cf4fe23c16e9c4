//! HTTP routes and handlers.
//!
//! The classify endpoint mirrors the engine contract one-to-one: the
//! form field `text` goes in, the engine's `ClassificationResult` comes
//! back as JSON with `codes` in engine order and `reasoning` keyed
//! exactly by `codes`. A missing `text` field is rejected by the form
//! extractor (422); blank text reaches the engine and yields the empty
//! result, which the page renders as "no codes matched" rather than an
//! error.

use std::sync::Arc;

use axum::extract::{Form, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use ecare_engine::{ClassificationResult, Classifier};

/// Shared application state: the classifier built once at startup.
///
/// Cheap to clone (Arc internals). The classifier is immutable, so
/// concurrent requests need no locking.
#[derive(Clone)]
pub struct AppState {
    classifier: Arc<Classifier>,
}

impl AppState {
    /// Wrap a classifier for sharing across request handlers.
    pub fn new(classifier: Classifier) -> Self {
        Self {
            classifier: Arc::new(classifier),
        }
    }

    /// The shared classifier.
    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }
}

/// Body of a classify request.
#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    /// The free-form text to classify.
    pub text: String,
}

/// Body of a health response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always `"ok"` once the server is up.
    pub status: &'static str,
    /// Number of codes in the loaded taxonomy table.
    pub taxonomy_codes: usize,
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/classify", post(classify))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// `POST /classify` — classify form-encoded text.
pub async fn classify(
    State(state): State<AppState>,
    Form(request): Form<ClassifyRequest>,
) -> Json<ClassificationResult> {
    let result = state.classifier.classify(&request.text);
    tracing::info!(
        input_chars = request.text.len(),
        codes = result.len(),
        "classified request"
    );
    Json(result)
}

/// `GET /healthz` — liveness probe.
pub async fn healthz(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        taxonomy_codes: state.classifier.taxonomy().len(),
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use ecare_taxonomy::{Taxonomy, TaxonomyEntry};

    fn test_state() -> AppState {
        let taxonomy = Taxonomy::from_entries(vec![
            TaxonomyEntry::new("E1.", ["energy", "solar"]),
            TaxonomyEntry::new("C2.", ["care", "elderly"]),
        ])
        .unwrap();
        AppState::new(Classifier::new(taxonomy))
    }

    #[tokio::test]
    async fn test_classify_returns_matched_codes() {
        let Json(result) = classify(
            State(test_state()),
            Form(ClassifyRequest {
                text: "Solar energy for elderly care communities".to_string(),
            }),
        )
        .await;

        assert_eq!(result.codes, vec!["E1.", "C2."]);
        assert_eq!(result.codes.len(), result.reasoning.len());
    }

    #[tokio::test]
    async fn test_classify_blank_text_is_empty_result_not_error() {
        let Json(result) = classify(
            State(test_state()),
            Form(ClassifyRequest {
                text: "   ".to_string(),
            }),
        )
        .await;

        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn test_classify_wire_contract() {
        let Json(result) = classify(
            State(test_state()),
            Form(ClassifyRequest {
                text: "solar powered".to_string(),
            }),
        )
        .await;

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["codes"], serde_json::json!(["E1."]));
        let reasoning = json["reasoning"].as_object().unwrap();
        assert_eq!(reasoning.len(), 1);
        assert!(reasoning.contains_key("E1."));
    }

    #[tokio::test]
    async fn test_healthz_reports_table_size() {
        let Json(health) = healthz(State(test_state())).await;
        assert_eq!(health.status, "ok");
        assert_eq!(health.taxonomy_codes, 2);
    }

    #[test]
    fn test_state_is_cheap_to_clone_and_shared() {
        let state = test_state();
        let clone = state.clone();
        assert_eq!(
            state.classifier().taxonomy().len(),
            clone.classifier().taxonomy().len()
        );
    }
}
