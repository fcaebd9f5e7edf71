// src/presentation/http/controllers/posts.rs
use crate::application::{
    commands::posts::{CastVoteCommand, CreatePostCommand, DeletePostCommand, UpdatePostCommand},
    dto::PostDto,
    queries::posts::{GetPostByIdQuery, ListPostsQuery},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::openapi::StatusResponse;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{
        Path, Query,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PostListParams {
    /// Only posts written by this user.
    #[serde(default)]
    pub user_id: Option<String>,
    /// Only posts in this drama.
    #[serde(default)]
    pub drama_slug: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    pub author_id: String,
    pub author_username: String,
    pub drama_slug: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdatePostRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VoteRequest {
    pub post_id: String,
    pub user_id: String,
    /// `1`, `-1`, or `null` to retract.
    #[serde(default)]
    pub vote: Option<i64>,
}

#[utoipa::path(
    get,
    path = "/api/v1/posts",
    params(PostListParams),
    responses(
        (status = 200, description = "Posts, newest first.", body = Vec<PostDto>),
        (status = 400, description = "Malformed filter.", body = ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn list_posts(
    Extension(state): Extension<HttpState>,
    params: Result<Query<PostListParams>, QueryRejection>,
) -> HttpResult<Json<Vec<PostDto>>> {
    let Query(params) = params?;
    state
        .services
        .post_queries
        .list_posts(ListPostsQuery {
            user_id: params.user_id,
            drama_slug: params.drama_slug,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/posts",
    request_body = CreatePostRequest,
    responses(
        (status = 201, description = "Post created.", body = PostDto),
        (status = 400, description = "Invalid payload.", body = ErrorResponse),
        (status = 404, description = "Unknown drama.", body = ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn create_post(
    Extension(state): Extension<HttpState>,
    payload: Result<Json<CreatePostRequest>, JsonRejection>,
) -> HttpResult<(StatusCode, Json<PostDto>)> {
    let Json(payload) = payload?;
    let command = CreatePostCommand {
        title: payload.title,
        content: payload.content,
        author_id: payload.author_id,
        author_username: payload.author_username,
        drama_slug: payload.drama_slug,
    };

    let created = state
        .services
        .post_commands
        .create_post(command)
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get,
    path = "/api/v1/posts/{id}",
    params(("id" = String, Path, description = "Post id (UUID)")),
    responses(
        (status = 200, description = "The post.", body = PostDto),
        (status = 400, description = "Malformed id.", body = ErrorResponse),
        (status = 404, description = "No such post.", body = ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn get_post(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<PostDto>> {
    state
        .services
        .post_queries
        .get_post_by_id(GetPostByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/posts/{id}",
    params(("id" = String, Path, description = "Post id (UUID)")),
    request_body = UpdatePostRequest,
    responses(
        (status = 200, description = "Post updated.", body = PostDto),
        (status = 400, description = "Empty title or content.", body = ErrorResponse),
        (status = 404, description = "No such post.", body = ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn update_post(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdatePostRequest>, JsonRejection>,
) -> HttpResult<Json<PostDto>> {
    let Json(payload) = payload?;
    let command = UpdatePostCommand {
        id,
        title: payload.title,
        content: payload.content,
    };

    state
        .services
        .post_commands
        .update_post(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/posts/{id}",
    params(("id" = String, Path, description = "Post id (UUID)")),
    responses(
        (status = 200, description = "Post deleted.", body = StatusResponse),
        (status = 404, description = "No such post.", body = ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn delete_post(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<StatusResponse>> {
    state
        .services
        .post_commands
        .delete_post(DeletePostCommand { id })
        .await
        .into_http()?;

    Ok(Json(StatusResponse {
        status: "deleted".into(),
    }))
}

#[utoipa::path(
    post,
    path = "/api/v1/posts/vote",
    request_body = VoteRequest,
    responses(
        (status = 200, description = "Vote applied; the post as stored.", body = PostDto),
        (status = 400, description = "Vote outside {1, -1, null} or missing ids.", body = ErrorResponse),
        (status = 404, description = "No such post.", body = ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn vote_post(
    Extension(state): Extension<HttpState>,
    payload: Result<Json<VoteRequest>, JsonRejection>,
) -> HttpResult<Json<PostDto>> {
    let Json(payload) = payload?;
    let command = CastVoteCommand {
        post_id: payload.post_id,
        user_id: payload.user_id,
        vote: payload.vote,
    };

    state
        .services
        .post_commands
        .cast_vote(command)
        .await
        .into_http()
        .map(Json)
}
