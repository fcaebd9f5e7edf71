/// Blocking user interaction the feed needs: delete confirmation and
/// alerts for failed edits and deletes.
pub trait UserPrompt: Send + Sync {
    fn confirm(&self, message: &str) -> bool;
    fn alert(&self, message: &str);
}
