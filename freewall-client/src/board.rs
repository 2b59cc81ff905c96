use crate::{
    api::{Comment, CommentId, SortOrder, Store},
    build_threads, ops, Error, Search, Thread,
};

/// What the comment list area currently shows
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BoardStatus {
    Loading,
    /// Nothing on the wall at all
    Empty,
    /// Nothing matches a non-blank search
    NoMatch,
    Showing(usize),
}

impl BoardStatus {
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            BoardStatus::Loading => None,
            BoardStatus::Empty => Some("No comments yet. Be the first to share your thoughts!"),
            BoardStatus::NoMatch => Some("No comments match your search"),
            BoardStatus::Showing(_) => None,
        }
    }
}

/// Session view state: the last fetched snapshot and how to look at it
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Board {
    threads: Vec<Thread>,
    loaded: bool,
    pub order: SortOrder,
    pub search: String,

    /// Top-level comment whose reply form is open
    pub replying_to: Option<CommentId>,
}

impl Board {
    pub fn new(order: SortOrder) -> Board {
        Board {
            order,
            ..Board::default()
        }
    }

    pub fn threads(&self) -> &[Thread] {
        &self.threads
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Replaces the snapshot with a freshly fetched comment list
    pub fn replace(&mut self, comments: Vec<Comment>) {
        self.threads = build_threads(comments);
        self.loaded = true;
    }

    /// Applies a snapshot fetched for `order`, unless the order changed since
    /// the fetch was started
    pub fn replace_for(&mut self, order: SortOrder, comments: Vec<Comment>) -> bool {
        if order != self.order {
            tracing::debug!(%order, current = %self.order, "dropping stale snapshot");
            return false;
        }
        self.replace(comments);
        true
    }

    /// Closes the reply form if the comment just posted was a reply made in it
    pub fn posted(&mut self, parent_id: Option<CommentId>) {
        if parent_id.is_some() && self.replying_to == parent_id {
            self.replying_to = None;
        }
    }

    /// Marks the first load as over even though it failed
    pub fn finish_loading(&mut self) {
        self.loaded = true;
    }

    pub fn visible(&self) -> Vec<&Thread> {
        Search::new(&self.search).filter(&self.threads)
    }

    pub fn status(&self) -> BoardStatus {
        if !self.loaded {
            return BoardStatus::Loading;
        }
        match self.visible().len() {
            0 if Search::new(&self.search).is_blank() => BoardStatus::Empty,
            0 => BoardStatus::NoMatch,
            n => BoardStatus::Showing(n),
        }
    }

    pub fn find(&self, id: CommentId) -> Option<&Comment> {
        self.threads.iter().find_map(|t| {
            if t.comment.id == id {
                Some(&t.comment)
            } else {
                t.replies.iter().find(|r| r.id == id)
            }
        })
    }

    /// Reflects a like accepted by the store, returns whether `id` was shown
    pub fn apply_like(&mut self, id: CommentId) -> bool {
        match Thread::find_in(&mut self.threads, id) {
            Some(c) => {
                c.likes += 1;
                true
            }
            None => false,
        }
    }

    /// Reflects a delete accepted by the store, returns whether `id` was shown
    ///
    /// A top-level comment goes away along with its thread, a reply is only
    /// taken out of its parent's reply list.
    pub fn apply_delete(&mut self, id: CommentId) -> bool {
        let before = self.threads.len();
        self.threads.retain(|t| t.comment.id != id);
        if self.threads.len() != before {
            if self.replying_to == Some(id) {
                self.replying_to = None;
            }
            return true;
        }
        for t in self.threads.iter_mut() {
            if let Some(pos) = t.replies.iter().position(|r| r.id == id) {
                t.replies.remove(pos);
                return true;
            }
        }
        false
    }

    /// Opens the reply form under `id`, or closes it if it was already open
    pub fn toggle_reply(&mut self, id: CommentId) {
        self.replying_to = match self.replying_to {
            Some(current) if current == id => None,
            _ if self.threads.iter().any(|t| t.comment.id == id) => Some(id),
            _ => None,
        };
    }

    pub async fn refresh<S: Store + ?Sized>(&mut self, store: &S) -> Result<(), Error> {
        let order = self.order;
        match ops::fetch(store, order).await {
            Ok(comments) => {
                self.replace_for(order, comments);
                Ok(())
            }
            Err(e) => {
                self.finish_loading();
                Err(e)
            }
        }
    }

    pub async fn set_order<S: Store + ?Sized>(
        &mut self,
        store: &S,
        order: SortOrder,
    ) -> Result<(), Error> {
        self.order = order;
        self.refresh(store).await
    }

    pub async fn like<S: Store + ?Sized>(&mut self, store: &S, id: CommentId) -> Result<(), Error> {
        let id = ops::like(store, id).await?;
        if !self.apply_like(id) {
            tracing::warn!(%id, "liked a comment that is not displayed");
        }
        Ok(())
    }

    pub async fn delete<S: Store + ?Sized>(
        &mut self,
        store: &S,
        id: CommentId,
    ) -> Result<(), Error> {
        let id = ops::delete(store, id).await?;
        self.apply_delete(id);
        Ok(())
    }
}
