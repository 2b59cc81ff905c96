use std::collections::HashMap;

use crate::api::{Comment, CommentId};

/// A top-level comment along with its direct replies
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Thread {
    pub comment: Comment,

    /// In the order the store returned them
    pub replies: Vec<Comment>,
}

impl Thread {
    pub fn id(&self) -> CommentId {
        self.comment.id
    }

    pub fn find_in<'a>(threads: &'a mut [Thread], id: CommentId) -> Option<&'a mut Comment> {
        for t in threads.iter_mut() {
            if t.comment.id == id {
                return Some(&mut t.comment);
            }
            if let Some(r) = t.replies.iter_mut().find(|r| r.id == id) {
                return Some(r);
            }
        }
        None
    }
}

/// Groups a flat, already-sorted comment list into threads
///
/// Top-level comments keep their relative order, and so do the replies of
/// each. Replies whose parent is not a top-level comment of `comments` are
/// dropped.
pub fn build_threads(comments: Vec<Comment>) -> Vec<Thread> {
    let (top, replies): (Vec<Comment>, Vec<Comment>) =
        comments.into_iter().partition(|c| c.parent_id.is_none());
    let mut by_parent: HashMap<CommentId, Vec<Comment>> = HashMap::new();
    for r in replies {
        if let Some(parent) = r.parent_id {
            by_parent.entry(parent).or_default().push(r);
        }
    }
    let threads = top
        .into_iter()
        .map(|comment| Thread {
            replies: by_parent.remove(&comment.id).unwrap_or_default(),
            comment,
        })
        .collect::<Vec<_>>();
    if !by_parent.is_empty() {
        tracing::debug!(
            num_orphans = by_parent.values().map(|v| v.len()).sum::<usize>(),
            "dropping replies without a top-level parent"
        );
    }
    threads
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Time;
    use chrono::TimeZone;

    fn at(secs: i64) -> Time {
        chrono::Utc.timestamp_opt(secs, 0).unwrap()
    }

    fn comment(id: i64, parent: Option<i64>, message: &str) -> Comment {
        Comment {
            id: CommentId(id),
            created_at: at(id),
            message: String::from(message),
            image_url: None,
            parent_id: parent.map(CommentId),
            likes: 0,
        }
    }

    #[test]
    fn empty() {
        assert_eq!(build_threads(Vec::new()), Vec::new());
    }

    #[test]
    fn parent_and_child() {
        let threads = build_threads(vec![
            comment(2, Some(1), "Child"),
            comment(1, None, "Parent"),
        ]);
        assert_eq!(threads.len(), 1);
        assert_eq!(threads[0].id(), CommentId(1));
        assert_eq!(threads[0].comment.message, "Parent");
        assert_eq!(threads[0].replies, vec![comment(2, Some(1), "Child")]);
    }

    #[test]
    fn orphans_are_dropped() {
        let threads = build_threads(vec![
            comment(1, None, "a"),
            comment(2, Some(99), "orphan"),
            comment(3, Some(1), "reply"),
            // reply to a reply: its parent is not top-level
            comment(4, Some(3), "nested"),
        ]);
        assert_eq!(threads.len(), 1);
        assert_eq!(threads[0].replies.len(), 1);
        assert_eq!(threads[0].replies[0].id, CommentId(3));
    }

    #[test]
    fn order_is_preserved() {
        let threads = build_threads(vec![
            comment(5, None, "e"),
            comment(7, Some(2), "g"),
            comment(2, None, "b"),
            comment(6, Some(5), "f"),
            comment(3, Some(2), "c"),
            comment(9, None, "i"),
        ]);
        let shape = threads
            .iter()
            .map(|t| (t.id().0, t.replies.iter().map(|r| r.id.0).collect::<Vec<_>>()))
            .collect::<Vec<_>>();
        assert_eq!(shape, vec![(5, vec![6]), (2, vec![7, 3]), (9, vec![])]);
    }

    #[test]
    fn find_in_looks_into_replies() {
        let mut threads = build_threads(vec![
            comment(1, None, "a"),
            comment(2, Some(1), "b"),
            comment(3, None, "c"),
        ]);
        assert_eq!(Thread::find_in(&mut threads, CommentId(2)).unwrap().message, "b");
        assert_eq!(Thread::find_in(&mut threads, CommentId(3)).unwrap().message, "c");
        assert!(Thread::find_in(&mut threads, CommentId(4)).is_none());
    }

    #[test]
    fn partition_property() {
        // (is_top_level, parent index) pairs, ids being positions in the list
        bolero::check!()
            .with_type::<Vec<(bool, u8)>>()
            .cloned()
            .for_each(|v| {
                let comments = v
                    .iter()
                    .enumerate()
                    .map(|(i, (top, parent))| {
                        let parent = (!top).then(|| *parent as i64 % (v.len() as i64 + 2));
                        comment(i as i64, parent, "x")
                    })
                    .collect::<Vec<_>>();
                let threads = build_threads(comments.clone());

                let top = comments
                    .iter()
                    .filter(|c| c.parent_id.is_none())
                    .cloned()
                    .collect::<Vec<_>>();
                assert_eq!(threads.iter().map(|t| t.comment.clone()).collect::<Vec<_>>(), top);

                for t in &threads {
                    let children = comments
                        .iter()
                        .filter(|c| c.parent_id == Some(t.id()))
                        .cloned()
                        .collect::<Vec<_>>();
                    assert_eq!(t.replies, children);
                }

                let kept = threads.len() + threads.iter().map(|t| t.replies.len()).sum::<usize>();
                let orphans = comments
                    .iter()
                    .filter(|c| match c.parent_id {
                        None => false,
                        Some(p) => !top.iter().any(|t| t.id == p),
                    })
                    .count();
                assert_eq!(kept + orphans, comments.len());
            })
    }
}
