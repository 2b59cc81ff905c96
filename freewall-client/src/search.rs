use crate::Thread;

/// Case-insensitive substring search over threads
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Search {
    // None if the search is blank, lowercase otherwise
    needle: Option<String>,
}

impl Search {
    pub fn new(query: &str) -> Search {
        Search {
            needle: (!query.trim().is_empty()).then(|| query.to_lowercase()),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.needle.is_none()
    }

    /// A thread matches if its own message or any of its replies' does
    pub fn matches(&self, t: &Thread) -> bool {
        match &self.needle {
            None => true,
            Some(n) => t.comment.mentions(n) || t.replies.iter().any(|r| r.mentions(n)),
        }
    }

    pub fn filter<'a>(&self, threads: &'a [Thread]) -> Vec<&'a Thread> {
        threads.iter().filter(|t| self.matches(t)).collect()
    }
}
