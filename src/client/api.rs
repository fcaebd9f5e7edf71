// src/client/api.rs
use crate::application::dto::{MembershipColorDto, PostDto};
use crate::client::error::{ClientError, ClientResult};
use crate::domain::post::VoteValue;
use crate::presentation::http::error::ErrorResponse;
use async_trait::async_trait;
use reqwest::Response;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::json;
use url::Url;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drama_slug: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VotePayload {
    pub post_id: String,
    pub user_id: String,
    /// Serialised as `null` when retracting.
    pub vote: Option<VoteValue>,
}

/// The endpoints the list view uses.
#[async_trait]
pub trait ForumApi: Send + Sync {
    async fn list_posts(&self, query: &PostQuery) -> ClientResult<Vec<PostDto>>;
    async fn vote(&self, payload: &VotePayload) -> ClientResult<PostDto>;
    async fn update_post(&self, id: &str, title: &str, content: &str) -> ClientResult<PostDto>;
    async fn delete_post(&self, id: &str) -> ClientResult<()>;
    async fn membership_color(&self, drama_slug: &str, user_id: &str) -> ClientResult<String>;
}

#[derive(Clone)]
pub struct HttpForumApi {
    client: reqwest::Client,
    base: Url,
}

impl HttpForumApi {
    pub fn new(base_url: &str) -> ClientResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("dramaboard/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_client(client, Url::parse(base_url)?))
    }

    pub fn with_client(client: reqwest::Client, base: Url) -> Self {
        Self { client, base }
    }

    fn endpoint(&self, segments: &[&str]) -> ClientResult<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| ClientError::InvalidUrl(self.base.to_string()))?
            .pop_if_empty()
            .extend(["api", "v1"])
            .extend(segments);
        Ok(url)
    }
}

async fn check(response: Response) -> ClientResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorResponse>(&text)
        .map(|body| body.message)
        .unwrap_or_else(|_| {
            if text.is_empty() {
                status.canonical_reason().unwrap_or("error").to_string()
            } else {
                text
            }
        });
    Err(ClientError::Status {
        status: status.as_u16(),
        message,
    })
}

async fn decode<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
    Ok(check(response).await?.json::<T>().await?)
}

#[async_trait]
impl ForumApi for HttpForumApi {
    async fn list_posts(&self, query: &PostQuery) -> ClientResult<Vec<PostDto>> {
        let url = self.endpoint(&["posts"])?;
        let response = self.client.get(url).query(query).send().await?;
        decode(response).await
    }

    async fn vote(&self, payload: &VotePayload) -> ClientResult<PostDto> {
        let url = self.endpoint(&["posts", "vote"])?;
        let response = self.client.post(url).json(payload).send().await?;
        decode(response).await
    }

    async fn update_post(&self, id: &str, title: &str, content: &str) -> ClientResult<PostDto> {
        let url = self.endpoint(&["posts", id])?;
        let body = json!({ "title": title, "content": content });
        let response = self.client.put(url).json(&body).send().await?;
        decode(response).await
    }

    async fn delete_post(&self, id: &str) -> ClientResult<()> {
        let url = self.endpoint(&["posts", id])?;
        let response = self.client.delete(url).send().await?;
        check(response).await?;
        Ok(())
    }

    async fn membership_color(&self, drama_slug: &str, user_id: &str) -> ClientResult<String> {
        let url = self.endpoint(&["dramas", drama_slug, "membership"])?;
        let response = self
            .client
            .get(url)
            .query(&[("userId", user_id)])
            .send()
            .await?;
        let body: MembershipColorDto = decode(response).await?;
        Ok(body.color)
    }
}
