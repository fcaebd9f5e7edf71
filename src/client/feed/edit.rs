use super::PostFeed;

/// Local, unsaved edit of one post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDraft {
    pub post_id: String,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    Failed,
    NoDraft,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Failed,
    Cancelled,
}

impl PostFeed {
    /// Opens a draft seeded from the post. Returns `false` when the post is
    /// not in the list.
    pub fn begin_edit(&self, post_id: &str) -> bool {
        let mut state = self.state();
        let Some(post) = state.posts.iter().find(|post| post.id == post_id) else {
            return false;
        };
        let draft = EditDraft {
            post_id: post.id.clone(),
            title: post.title.clone(),
            content: post.content.clone(),
        };
        state.draft = Some(draft);
        true
    }

    pub fn draft(&self) -> Option<EditDraft> {
        self.state().draft.clone()
    }

    pub fn set_draft_title(&self, title: impl Into<String>) {
        if let Some(draft) = self.state().draft.as_mut() {
            draft.title = title.into();
        }
    }

    pub fn set_draft_content(&self, content: impl Into<String>) {
        if let Some(draft) = self.state().draft.as_mut() {
            draft.content = content.into();
        }
    }

    pub fn cancel_edit(&self) {
        self.state().draft = None;
    }

    /// Sends the draft. Success closes it and re-fetches; failure alerts and
    /// keeps it open.
    pub async fn save_edit(&self) -> SaveOutcome {
        let Some(draft) = self.draft() else {
            return SaveOutcome::NoDraft;
        };

        match self
            .api
            .update_post(&draft.post_id, &draft.title, &draft.content)
            .await
        {
            Ok(_) => {
                {
                    let mut state = self.state();
                    if state.draft.as_ref().map(|d| &d.post_id) == Some(&draft.post_id) {
                        state.draft = None;
                    }
                }
                self.refresh().await;
                SaveOutcome::Saved
            }
            Err(err) => {
                tracing::error!(post_id = %draft.post_id, error = %err, "failed to update post");
                self.prompt.alert(&format!("Failed to update post: {err}"));
                SaveOutcome::Failed
            }
        }
    }

    /// Asks for confirmation, then deletes and re-fetches.
    pub async fn delete_post(&self, post_id: &str) -> DeleteOutcome {
        if !self
            .prompt
            .confirm("Are you sure you want to delete this post?")
        {
            return DeleteOutcome::Cancelled;
        }

        match self.api.delete_post(post_id).await {
            Ok(()) => {
                self.refresh().await;
                DeleteOutcome::Deleted
            }
            Err(err) => {
                tracing::error!(post_id, error = %err, "failed to delete post");
                self.prompt.alert(&format!("Failed to delete post: {err}"));
                DeleteOutcome::Failed
            }
        }
    }
}
