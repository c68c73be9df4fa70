// src/presentation/http/controllers/forms.rs
use crate::application::{
    commands::forms::{CreateFormCommand, DeleteFormCommand, SetPublishStateCommand},
    dto::{CreateFormResultDto, FormDto, QuestionDto},
    error::ApplicationError,
    queries::forms::GetFormBySlugQuery,
};
use crate::domain::form::FormStatus;
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, MaybeAuthenticated};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateFormRequest {
    #[serde(default)]
    pub form_id: Option<Uuid>,
    pub form_name: String,
    /// Explicit slug; derived from `form_name` when omitted or blank.
    #[serde(default)]
    pub form_slug: Option<String>,
    #[serde(default)]
    pub questions: Vec<QuestionDto>,
    /// `draft` (default) or `published`.
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct PublishRequest {
    pub publish: bool,
}

#[utoipa::path(
    post,
    path = "/api/v1/forms",
    request_body = CreateFormRequest,
    responses(
        (status = 201, description = "Form created.", body = CreateFormResultDto),
        (status = 400, description = "Invalid form definition.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Slug or id already in use.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Forms"
)]
pub async fn create_form(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateFormRequest>,
) -> HttpResult<(StatusCode, Json<CreateFormResultDto>)> {
    let status = payload
        .status
        .as_deref()
        .map(str::parse::<FormStatus>)
        .transpose()
        .map_err(|err| HttpError::from_error(ApplicationError::from(err)))?
        .unwrap_or_default();

    let command = CreateFormCommand {
        form_id: payload.form_id,
        name: payload.form_name,
        slug: payload.form_slug,
        questions: payload.questions.into_iter().map(Into::into).collect(),
        publish: status == FormStatus::Published,
    };

    state
        .services
        .form_commands
        .create_form(&user, command)
        .await
        .into_http()
        .map(|created| (StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get,
    path = "/api/v1/forms",
    responses(
        (status = 200, description = "Forms created by the caller, newest first.", body = [FormDto]),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Forms"
)]
pub async fn list_my_forms(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<Vec<FormDto>>> {
    state
        .services
        .form_queries
        .list_my_forms(&user)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/forms/{slug}",
    params(("slug" = String, Path, description = "Form slug")),
    responses(
        (status = 200, description = "The form.", body = FormDto),
        (status = 404, description = "No visible form with this slug.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security((), ("bearerAuth" = [])),
    tag = "Forms"
)]
pub async fn get_form(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<FormDto>> {
    state
        .services
        .form_queries
        .get_form_by_slug(actor.0.as_ref(), GetFormBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/forms/{slug}/publish",
    params(("slug" = String, Path, description = "Form slug")),
    request_body = PublishRequest,
    responses(
        (status = 200, description = "Updated form.", body = FormDto),
        (status = 400, description = "Form cannot be published.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Caller does not own the form.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Form not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Forms"
)]
pub async fn set_publish_state(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(slug): Path<String>,
    Json(payload): Json<PublishRequest>,
) -> HttpResult<Json<FormDto>> {
    let command = SetPublishStateCommand {
        slug,
        publish: payload.publish,
    };

    state
        .services
        .form_commands
        .set_publish_state(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/forms/{slug}",
    params(("slug" = String, Path, description = "Form slug")),
    responses(
        (status = 200, description = "Form and its responses deleted."),
        (status = 403, description = "Caller does not own the form.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Form not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Forms"
)]
pub async fn delete_form(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .form_commands
        .delete_form(&user, DeleteFormCommand { slug })
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "deleted" })))
}
