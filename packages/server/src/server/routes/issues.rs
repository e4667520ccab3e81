use axum::{
    extract::{rejection::JsonRejection, Extension},
    http::HeaderValue,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{info, Instrument};
use uuid::Uuid;

use crate::domains::issues::IssueRequest;
use crate::server::app::AppState;
use crate::server::error::ApiError;

/// Response header naming the classifier that answered (`ai` or `keyword`).
pub const CLASSIFICATION_SOURCE_HEADER: &str = "x-classification-source";

/// Classify a civic issue and suggest NGOs.
pub async fn analyze_issue_handler(
    Extension(state): Extension<AppState>,
    payload: Result<Json<IssueRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(request) = payload?;

    let analysis_id = Uuid::new_v4();
    let span = tracing::info_span!("analyze_issue", %analysis_id);

    async move {
        info!(location = %request.location, "Analyzing issue");

        let classification = state.engine.handle(&request).await?;
        let source = classification.source();

        let mut response = Json(classification.into_response()).into_response();
        response.headers_mut().insert(
            CLASSIFICATION_SOURCE_HEADER,
            HeaderValue::from_static(source.as_str()),
        );

        Ok::<_, ApiError>(response)
    }
    .instrument(span)
    .await
}
