// tests/support/builders.rs
use dramaboard::application::dto::{AuthorDto, DramaRefDto, PostDto, VoterDto};
use serde_json::{Value, json};

use super::mocks::fixed_now;

/// クライアント側テスト用の PostDto ビルダー
pub struct PostDtoBuilder {
    id: String,
    title: String,
    content: String,
    author_id: String,
    author_username: String,
    drama_slug: String,
    drama_title: String,
    voters: Vec<VoterDto>,
}

impl PostDtoBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.into(),
            title: "Test Post".into(),
            content: "Test body".into(),
            author_id: "author-1".into(),
            author_username: "alice".into(),
            drama_slug: "gossip".into(),
            drama_title: "Gossip".into(),
            voters: Vec::new(),
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = title.into();
        self
    }

    pub fn content(mut self, content: &str) -> Self {
        self.content = content.into();
        self
    }

    pub fn author(mut self, id: &str, username: &str) -> Self {
        self.author_id = id.into();
        self.author_username = username.into();
        self
    }

    pub fn drama(mut self, slug: &str, title: &str) -> Self {
        self.drama_slug = slug.into();
        self.drama_title = title.into();
        self
    }

    pub fn voter(mut self, user_id: &str, vote: i8) -> Self {
        self.voters.push(VoterDto {
            user_id: user_id.into(),
            vote,
        });
        self
    }

    pub fn build(self) -> PostDto {
        let votes = self.voters.iter().map(|voter| i64::from(voter.vote)).sum();
        PostDto {
            id: self.id,
            title: self.title,
            content: self.content,
            author: AuthorDto {
                id: self.author_id,
                username: self.author_username,
            },
            drama: DramaRefDto {
                slug: self.drama_slug,
                title: self.drama_title,
            },
            votes,
            voters: self.voters,
            created_at: fixed_now(),
            edited_at: None,
        }
    }
}

/// `POST /api/v1/posts` のリクエストボディ
pub fn create_post_body(title: &str, author_id: &str, drama_slug: &str) -> Value {
    json!({
        "title": title,
        "content": format!("{title} body"),
        "authorId": author_id,
        "authorUsername": format!("{author_id}-name"),
        "dramaSlug": drama_slug,
    })
}

/// `POST /api/v1/posts/vote` のリクエストボディ
pub fn vote_body(post_id: &str, user_id: &str, vote: Value) -> Value {
    json!({ "postId": post_id, "userId": user_id, "vote": vote })
}
