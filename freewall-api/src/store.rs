use async_trait::async_trait;

use crate::{Comment, CommentId, ImageUpload, NewComment, SortOrder};

/// Remote record collection and object storage holding the wall
///
/// Futures are not required to be `Send`, so that browser-side
/// implementations can be used.
#[async_trait(?Send)]
pub trait Store {
    /// Every comment and reply, in `order`
    async fn fetch_comments(&self, order: SortOrder) -> anyhow::Result<Vec<Comment>>;

    /// Returns the comment as recorded, with its server-assigned fields
    async fn insert_comment(&self, comment: &NewComment) -> anyhow::Result<Comment>;

    /// Deleting an unknown id is not an error
    async fn delete_comment(&self, id: CommentId) -> anyhow::Result<()>;

    /// Atomic, server-side `likes = likes + 1`
    async fn increment_likes(&self, id: CommentId) -> anyhow::Result<()>;

    async fn upload_image(&self, name: &str, image: &ImageUpload) -> anyhow::Result<()>;

    /// Durable public URL of an object uploaded under `name`
    fn public_url(&self, name: &str) -> String;
}
