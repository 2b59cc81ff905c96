use async_trait::async_trait;

use crate::api::Comment;

pub fn share_text(message: &str) -> String {
    format!("Check out this comment on Freedom Wall:\n\n\"{message}\"")
}

/// Platform-level ways of handing text over to the user
#[async_trait(?Send)]
pub trait Sharer {
    /// Whether a native share capability exists and accepts `text`
    fn can_share(&self, text: &str) -> bool;

    async fn share(&self, text: &str) -> anyhow::Result<()>;

    async fn copy_to_clipboard(&self, text: &str) -> anyhow::Result<()>;
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ShareOutcome {
    Shared,
    Copied,
}

/// Shares natively if possible, copies to the clipboard otherwise, and retries
/// with a clipboard copy once if that first attempt fails
pub async fn share_comment<S: Sharer + ?Sized>(
    sharer: &S,
    comment: &Comment,
) -> anyhow::Result<ShareOutcome> {
    let text = share_text(&comment.message);
    let first = match sharer.can_share(&text) {
        true => sharer.share(&text).await.map(|()| ShareOutcome::Shared),
        false => sharer
            .copy_to_clipboard(&text)
            .await
            .map(|()| ShareOutcome::Copied),
    };
    match first {
        Ok(outcome) => Ok(outcome),
        Err(err) => {
            tracing::debug!(?err, id = %comment.id, "sharing failed, falling back to clipboard");
            match sharer.copy_to_clipboard(&text).await {
                Ok(()) => Ok(ShareOutcome::Copied),
                Err(clipboard_err) => {
                    tracing::error!(?err, ?clipboard_err, "error sharing comment");
                    Err(err)
                }
            }
        }
    }
}
