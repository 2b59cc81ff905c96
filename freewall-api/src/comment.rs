use std::{fmt, num::ParseIntError, str::FromStr};

use serde::Deserialize;

use crate::{Error, Time};

pub const MAX_MESSAGE_CHARS: usize = 500;

#[derive(
    Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
#[serde(transparent)]
pub struct CommentId(pub i64);

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl FromStr for CommentId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<CommentId, ParseIntError> {
        s.strip_prefix('#').unwrap_or(s).parse().map(CommentId)
    }
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Comment {
    pub id: CommentId,
    pub created_at: Time,
    pub message: String,

    #[serde(default)]
    pub image_url: Option<String>,

    /// Set iff this comment is a reply, always to a top-level comment
    #[serde(default)]
    pub parent_id: Option<CommentId>,

    #[serde(default, deserialize_with = "null_as_zero")]
    pub likes: i64,
}

impl Comment {
    pub fn is_reply(&self) -> bool {
        self.parent_id.is_some()
    }

    /// `needle` must already be lowercase
    pub fn mentions(&self, needle: &str) -> bool {
        self.message.to_lowercase().contains(needle)
    }
}

fn null_as_zero<'de, D>(d: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<i64>::deserialize(d)?.unwrap_or(0))
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct NewComment {
    pub message: String,
    pub image_url: Option<String>,
    pub parent_id: Option<CommentId>,
}

impl NewComment {
    pub fn new(message: String) -> NewComment {
        NewComment {
            message,
            image_url: None,
            parent_id: None,
        }
    }

    pub fn reply(parent_id: CommentId, message: String) -> NewComment {
        NewComment {
            message,
            image_url: None,
            parent_id: Some(parent_id),
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        validate_message(&self.message)
    }
}

/// Checks a message as typed: it must have some non-whitespace content, and the
/// whole text (whitespace included) must fit in `MAX_MESSAGE_CHARS` characters
pub fn validate_message(message: &str) -> Result<(), Error> {
    if message.trim().is_empty() {
        return Err(Error::EmptyMessage);
    }
    let len = message.chars().count();
    if len > MAX_MESSAGE_CHARS {
        return Err(Error::MessageTooLong(len));
    }
    Ok(())
}
