// src/presentation/http/controllers/submissions.rs
use crate::application::{
    commands::submissions::SubmitResponseCommand, dto::SubmissionDto,
    queries::submissions::ListSubmissionsQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, MaybeAuthenticated};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use serde_json::Value;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SubmitResponseRequest {
    /// Answers keyed by question id.
    #[serde(alias = "response")]
    #[schema(value_type = Object)]
    pub answers: Value,
}

#[utoipa::path(
    post,
    path = "/api/v1/forms/{slug}/responses",
    params(("slug" = String, Path, description = "Form slug")),
    request_body = SubmitResponseRequest,
    responses(
        (status = 201, description = "Response stored.", body = SubmissionDto),
        (status = 400, description = "Answers do not fit the form.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Form not found.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Form is not accepting responses.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security((), ("bearerAuth" = [])),
    tag = "Responses"
)]
pub async fn submit_response(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path(slug): Path<String>,
    Json(payload): Json<SubmitResponseRequest>,
) -> HttpResult<(StatusCode, Json<SubmissionDto>)> {
    let command = SubmitResponseCommand {
        slug,
        answers: payload.answers,
    };

    state
        .services
        .submission_commands
        .submit_response(actor.0.as_ref(), command)
        .await
        .into_http()
        .map(|stored| (StatusCode::CREATED, Json(stored)))
}

#[utoipa::path(
    get,
    path = "/api/v1/forms/{slug}/responses",
    params(("slug" = String, Path, description = "Form slug")),
    responses(
        (status = 200, description = "Responses, oldest first.", body = [SubmissionDto]),
        (status = 403, description = "Caller does not own the form.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Form not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Responses"
)]
pub async fn list_submissions(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<Vec<SubmissionDto>>> {
    state
        .services
        .submission_queries
        .list_submissions(&user, ListSubmissionsQuery { slug })
        .await
        .into_http()
        .map(Json)
}
