use std::{cmp::Reverse, fmt, str::FromStr};

use anyhow::anyhow;

use crate::Comment;

/// Order in which comments are fetched from the store
///
/// Every order ends with the comment id, so that two comments never compare
/// equal and the resulting list is deterministic.
#[derive(
    Clone, Copy, Debug, Default, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
    MostLiked,
}

impl SortOrder {
    pub const ALL: [SortOrder; 3] = [SortOrder::Newest, SortOrder::Oldest, SortOrder::MostLiked];

    /// Value of the `order` query parameter of a record select
    pub fn to_postgrest(&self) -> &'static str {
        match self {
            SortOrder::Newest => "created_at.desc,id.desc",
            SortOrder::Oldest => "created_at.asc,id.asc",
            SortOrder::MostLiked => "likes.desc,id.asc",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Newest => "Newest First",
            SortOrder::Oldest => "Oldest First",
            SortOrder::MostLiked => "Most Liked",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Newest => "newest",
            SortOrder::Oldest => "oldest",
            SortOrder::MostLiked => "most_liked",
        }
    }

    /// Sorts the same way the store does for `to_postgrest`
    pub fn sort(&self, comments: &mut [Comment]) {
        match self {
            SortOrder::Newest => comments.sort_unstable_by_key(|c| Reverse((c.created_at, c.id))),
            SortOrder::Oldest => comments.sort_unstable_by_key(|c| (c.created_at, c.id)),
            SortOrder::MostLiked => comments.sort_unstable_by_key(|c| (Reverse(c.likes), c.id)),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<SortOrder> {
        SortOrder::ALL
            .into_iter()
            .find(|o| o.as_str() == s)
            .ok_or_else(|| anyhow!("unknown sort order {s:?}, expected newest, oldest or most_liked"))
    }
}
