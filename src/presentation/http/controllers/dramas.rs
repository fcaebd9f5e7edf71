// src/presentation/http/controllers/dramas.rs
use crate::application::{
    commands::dramas::{CreateDramaCommand, JoinDramaCommand},
    dto::{DramaDto, MembershipColorDto, MembershipDto},
    queries::dramas::{GetDramaBySlugQuery, MembershipColorQuery},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{
        Path, Query,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct MembershipParams {
    #[serde(default)]
    pub user_id: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateDramaRequest {
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JoinDramaRequest {
    pub user_id: String,
    pub color: String,
}

#[utoipa::path(
    get,
    path = "/api/v1/dramas",
    responses((status = 200, description = "All dramas by slug.", body = Vec<DramaDto>)),
    tag = "Dramas"
)]
pub async fn list_dramas(Extension(state): Extension<HttpState>) -> HttpResult<Json<Vec<DramaDto>>> {
    state
        .services
        .drama_queries
        .list_dramas()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/dramas",
    request_body = CreateDramaRequest,
    responses(
        (status = 201, description = "Drama created.", body = DramaDto),
        (status = 400, description = "Invalid title or slug.", body = ErrorResponse),
        (status = 409, description = "Slug taken.", body = ErrorResponse)
    ),
    tag = "Dramas"
)]
pub async fn create_drama(
    Extension(state): Extension<HttpState>,
    payload: Result<Json<CreateDramaRequest>, JsonRejection>,
) -> HttpResult<(StatusCode, Json<DramaDto>)> {
    let Json(payload) = payload?;
    let created = state
        .services
        .drama_commands
        .create_drama(CreateDramaCommand {
            title: payload.title,
            slug: payload.slug,
        })
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get,
    path = "/api/v1/dramas/{slug}",
    params(("slug" = String, Path, description = "Drama slug")),
    responses(
        (status = 200, description = "The drama.", body = DramaDto),
        (status = 404, description = "No such drama.", body = ErrorResponse)
    ),
    tag = "Dramas"
)]
pub async fn get_drama(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<DramaDto>> {
    state
        .services
        .drama_queries
        .get_drama_by_slug(GetDramaBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/dramas/{slug}/membership",
    params(("slug" = String, Path, description = "Drama slug"), MembershipParams),
    responses(
        (status = 200, description = "The member's display color.", body = MembershipColorDto),
        (status = 400, description = "Missing user id.", body = ErrorResponse),
        (status = 404, description = "User is not a member.", body = ErrorResponse)
    ),
    tag = "Dramas"
)]
pub async fn get_membership(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
    params: Result<Query<MembershipParams>, QueryRejection>,
) -> HttpResult<Json<MembershipColorDto>> {
    let Query(params) = params?;
    state
        .services
        .drama_queries
        .membership_color(MembershipColorQuery {
            slug,
            user_id: params.user_id,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/dramas/{slug}/membership",
    params(("slug" = String, Path, description = "Drama slug")),
    request_body = JoinDramaRequest,
    responses(
        (status = 200, description = "Membership stored.", body = MembershipDto),
        (status = 400, description = "Invalid user id or color.", body = ErrorResponse),
        (status = 404, description = "No such drama.", body = ErrorResponse)
    ),
    tag = "Dramas"
)]
pub async fn join_drama(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
    payload: Result<Json<JoinDramaRequest>, JsonRejection>,
) -> HttpResult<Json<MembershipDto>> {
    let Json(payload) = payload?;
    state
        .services
        .drama_commands
        .join_drama(JoinDramaCommand {
            slug,
            user_id: payload.user_id,
            color: payload.color,
        })
        .await
        .into_http()
        .map(Json)
}
