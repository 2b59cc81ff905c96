use std::fmt;

use crate::{api, Error, ShareOutcome};

/// Short message shown to the user after an operation
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Notice {
    Posted,
    PostFailed,
    EmptyMessage,
    MessageTooLong,
    InvalidImage,
    LoadFailed,
    Deleted,
    DeleteFailed,
    LikeFailed,
    Shared,
    Copied,
    ShareFailed,
}

impl Notice {
    pub fn text(&self) -> &'static str {
        match self {
            Notice::Posted => "Comment posted successfully!",
            Notice::PostFailed => "Failed to post comment. Please try again.",
            Notice::EmptyMessage => "Please enter a message",
            Notice::MessageTooLong => "Message cannot exceed 500 characters",
            Notice::InvalidImage => "Please select a valid image file (JPEG or PNG)",
            Notice::LoadFailed => "Failed to load comments",
            Notice::Deleted => "Comment deleted successfully",
            Notice::DeleteFailed => "Failed to delete comment",
            Notice::LikeFailed => "Failed to like comment",
            Notice::Shared => "Comment shared successfully!",
            Notice::Copied => "Comment copied to clipboard!",
            Notice::ShareFailed => "Failed to share comment",
        }
    }

    pub fn is_failure(&self) -> bool {
        !matches!(
            self,
            Notice::Posted | Notice::Deleted | Notice::Shared | Notice::Copied
        )
    }

    pub fn for_validation(e: &api::Error) -> Notice {
        match e {
            api::Error::EmptyMessage => Notice::EmptyMessage,
            api::Error::MessageTooLong(_) => Notice::MessageTooLong,
            api::Error::InvalidImageType(_) => Notice::InvalidImage,
        }
    }

    pub fn for_post(res: &Result<api::Comment, Error>) -> Notice {
        match res {
            Ok(_) => Notice::Posted,
            Err(Error::Validation(e)) => Notice::for_validation(e),
            Err(Error::Remote(_)) => Notice::PostFailed,
        }
    }

    pub fn for_share(res: &anyhow::Result<ShareOutcome>) -> Notice {
        match res {
            Ok(ShareOutcome::Shared) => Notice::Shared,
            Ok(ShareOutcome::Copied) => Notice::Copied,
            Err(_) => Notice::ShareFailed,
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn post_notices() {
        assert_eq!(
            Notice::for_post(&Err(Error::Validation(api::Error::MessageTooLong(501)))),
            Notice::MessageTooLong
        );
        assert_eq!(
            Notice::for_post(&Err(Error::Validation(api::Error::EmptyMessage))),
            Notice::EmptyMessage
        );
        assert_eq!(
            Notice::for_post(&Err(Error::Remote(anyhow!("connection reset")))),
            Notice::PostFailed
        );
        assert!(Notice::PostFailed.is_failure());
        assert!(!Notice::Posted.is_failure());
    }

    #[test]
    fn share_notices() {
        assert_eq!(Notice::for_share(&Ok(ShareOutcome::Copied)), Notice::Copied);
        assert_eq!(
            Notice::for_share(&Err(anyhow!("denied"))).to_string(),
            "Failed to share comment"
        );
    }
}
