// tests/support/mocks/api.rs
use async_trait::async_trait;
use dramaboard::application::dto::{PostDto, VoterDto};
use dramaboard::client::{ClientError, ClientResult, ForumApi, PostQuery, VotePayload};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

fn failure(status: u16, message: &str) -> ClientError {
    ClientError::Status {
        status,
        message: message.to_string(),
    }
}

/// メモリ上の投稿一覧に対して応答する ForumApi。
/// 失敗の注入と呼び出しの記録ができる。
#[derive(Default)]
pub struct ScriptedForumApi {
    posts: Mutex<Vec<PostDto>>,
    colors: Mutex<HashMap<String, String>>,
    failing_colors: Mutex<HashSet<String>>,
    fail_lists: AtomicBool,
    fail_votes: AtomicBool,
    fail_updates: AtomicBool,
    fail_deletes: AtomicBool,
    vote_gate: Mutex<Option<Arc<Notify>>>,
    /// 投票リクエストが到着するたびに通知される
    pub vote_started: Notify,
    list_gate: Mutex<Option<Arc<Notify>>>,
    /// 保留中の一覧リクエストが到着するたびに通知される
    pub list_started: Notify,
    list_queries: Mutex<Vec<PostQuery>>,
    votes: Mutex<Vec<VotePayload>>,
    updates: Mutex<Vec<(String, String, String)>>,
    deletes: Mutex<Vec<String>>,
    color_lookups: Mutex<Vec<(String, String)>>,
}

impl ScriptedForumApi {
    pub fn with_posts(posts: Vec<PostDto>) -> Self {
        let api = Self::default();
        *api.posts.lock().unwrap() = posts;
        api
    }

    pub fn set_color(&self, slug: &str, color: &str) {
        self.colors
            .lock()
            .unwrap()
            .insert(slug.to_string(), color.to_string());
    }

    pub fn fail_color(&self, slug: &str) {
        self.failing_colors.lock().unwrap().insert(slug.to_string());
    }

    pub fn fail_lists(&self, fail: bool) {
        self.fail_lists.store(fail, Ordering::SeqCst);
    }

    pub fn fail_votes(&self, fail: bool) {
        self.fail_votes.store(fail, Ordering::SeqCst);
    }

    pub fn fail_updates(&self, fail: bool) {
        self.fail_updates.store(fail, Ordering::SeqCst);
    }

    pub fn fail_deletes(&self, fail: bool) {
        self.fail_deletes.store(fail, Ordering::SeqCst);
    }

    /// 以降の投票リクエストを `gate` が通知されるまで保留する
    pub fn hold_votes(&self, gate: Arc<Notify>) {
        *self.vote_gate.lock().unwrap() = Some(gate);
    }

    /// 以降の一覧リクエストを、その時点の内容を確定させたうえで
    /// `gate` が通知されるまで保留する
    pub fn hold_lists(&self, gate: Arc<Notify>) {
        *self.list_gate.lock().unwrap() = Some(gate);
    }

    /// 以降の一覧リクエストは保留しない（保留中のものはそのまま）
    pub fn release_lists(&self) {
        *self.list_gate.lock().unwrap() = None;
    }

    pub fn push_post(&self, post: PostDto) {
        self.posts.lock().unwrap().push(post);
    }

    pub fn posts(&self) -> Vec<PostDto> {
        self.posts.lock().unwrap().clone()
    }

    pub fn list_queries(&self) -> Vec<PostQuery> {
        self.list_queries.lock().unwrap().clone()
    }

    pub fn votes(&self) -> Vec<VotePayload> {
        self.votes.lock().unwrap().clone()
    }

    pub fn updates(&self) -> Vec<(String, String, String)> {
        self.updates.lock().unwrap().clone()
    }

    pub fn deletes(&self) -> Vec<String> {
        self.deletes.lock().unwrap().clone()
    }

    pub fn color_lookups(&self) -> Vec<(String, String)> {
        self.color_lookups.lock().unwrap().clone()
    }
}

#[async_trait]
impl ForumApi for ScriptedForumApi {
    async fn list_posts(&self, query: &PostQuery) -> ClientResult<Vec<PostDto>> {
        self.list_queries.lock().unwrap().push(query.clone());
        if self.fail_lists.load(Ordering::SeqCst) {
            return Err(failure(500, "list unavailable"));
        }
        let snapshot: Vec<PostDto> = self
            .posts
            .lock()
            .unwrap()
            .iter()
            .filter(|post| {
                query
                    .user_id
                    .as_ref()
                    .is_none_or(|user| &post.author.id == user)
            })
            .filter(|post| {
                query
                    .drama_slug
                    .as_ref()
                    .is_none_or(|slug| &post.drama.slug == slug)
            })
            .cloned()
            .collect();
        let gate = self.list_gate.lock().unwrap().clone();
        if let Some(gate) = gate {
            self.list_started.notify_one();
            gate.notified().await;
        }
        Ok(snapshot)
    }

    async fn vote(&self, payload: &VotePayload) -> ClientResult<PostDto> {
        self.votes.lock().unwrap().push(payload.clone());
        self.vote_started.notify_one();
        let gate = self.vote_gate.lock().unwrap().clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        if self.fail_votes.load(Ordering::SeqCst) {
            return Err(failure(500, "vote rejected"));
        }

        let mut posts = self.posts.lock().unwrap();
        let post = posts
            .iter_mut()
            .find(|post| post.id == payload.post_id)
            .ok_or_else(|| failure(404, "post not found"))?;
        post.voters.retain(|voter| voter.user_id != payload.user_id);
        if let Some(vote) = payload.vote {
            post.voters.push(VoterDto {
                user_id: payload.user_id.clone(),
                vote: vote.into(),
            });
        }
        post.votes = post.voters.iter().map(|voter| i64::from(voter.vote)).sum();
        Ok(post.clone())
    }

    async fn update_post(&self, id: &str, title: &str, content: &str) -> ClientResult<PostDto> {
        self.updates
            .lock()
            .unwrap()
            .push((id.to_string(), title.to_string(), content.to_string()));
        if self.fail_updates.load(Ordering::SeqCst) {
            return Err(failure(400, "title cannot be empty"));
        }
        let mut posts = self.posts.lock().unwrap();
        let post = posts
            .iter_mut()
            .find(|post| post.id == id)
            .ok_or_else(|| failure(404, "post not found"))?;
        post.title = title.to_string();
        post.content = content.to_string();
        Ok(post.clone())
    }

    async fn delete_post(&self, id: &str) -> ClientResult<()> {
        self.deletes.lock().unwrap().push(id.to_string());
        if self.fail_deletes.load(Ordering::SeqCst) {
            return Err(failure(500, "delete failed"));
        }
        let mut posts = self.posts.lock().unwrap();
        let before = posts.len();
        posts.retain(|post| post.id != id);
        if posts.len() == before {
            return Err(failure(404, "post not found"));
        }
        Ok(())
    }

    async fn membership_color(&self, drama_slug: &str, user_id: &str) -> ClientResult<String> {
        self.color_lookups
            .lock()
            .unwrap()
            .push((drama_slug.to_string(), user_id.to_string()));
        if self.failing_colors.lock().unwrap().contains(drama_slug) {
            return Err(failure(500, "internal server error"));
        }
        self.colors
            .lock()
            .unwrap()
            .get(drama_slug)
            .cloned()
            .ok_or_else(|| failure(404, "membership not found"))
    }
}
