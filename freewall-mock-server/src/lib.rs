use std::{collections::BTreeMap, sync::Mutex};

use anyhow::anyhow;
use async_trait::async_trait;
use chrono::{Duration, Utc};
use freewall_api::{
    Comment, CommentId, ImageUpload, NewComment, SortOrder, Store, Time, DEFAULT_IMAGE_BUCKET,
};

/// In-memory `Store`, behaving like the hosted one down to foreign-key cascades
pub struct MockServer(Mutex<MockDb>);

#[derive(Debug)]
struct MockDb {
    bucket: String,
    comments: Vec<Comment>,
    next_id: i64,
    last_time: Option<Time>,
    objects: BTreeMap<String, ImageUpload>,
    offline: bool,
    num_requests: usize,
}

impl MockDb {
    /// Counts the request, failing it if the server is set offline
    fn request(&mut self, what: &str) -> anyhow::Result<()> {
        self.num_requests += 1;
        match self.offline {
            true => Err(anyhow!("mock server is offline, rejecting {what}")),
            false => Ok(()),
        }
    }

    /// Strictly increasing creation times, even within one clock tick
    fn now(&mut self) -> Time {
        let mut now = Utc::now();
        if let Some(last) = self.last_time {
            if now <= last {
                now = last + Duration::milliseconds(1);
            }
        }
        self.last_time = Some(now);
        now
    }
}

impl MockServer {
    pub fn new() -> MockServer {
        MockServer::with_bucket(DEFAULT_IMAGE_BUCKET)
    }

    pub fn with_bucket(bucket: &str) -> MockServer {
        MockServer(Mutex::new(MockDb {
            bucket: String::from(bucket),
            comments: Vec::new(),
            next_id: 1,
            last_time: None,
            objects: BTreeMap::new(),
            offline: false,
            num_requests: 0,
        }))
    }

    fn db(&self) -> std::sync::MutexGuard<'_, MockDb> {
        self.0.lock().expect("mock server lock poisoned")
    }

    /// While offline, every request fails without changing anything
    pub fn set_offline(&self, offline: bool) {
        self.db().offline = offline;
    }

    /// Number of requests received so far, failed ones included
    pub fn num_requests(&self) -> usize {
        self.db().num_requests
    }

    pub fn num_objects(&self) -> usize {
        self.db().objects.len()
    }

    pub fn object(&self, name: &str) -> Option<ImageUpload> {
        self.db().objects.get(name).cloned()
    }

    /// Stores `c` as is, bypassing id and time assignment
    pub fn test_insert_raw(&self, c: Comment) {
        let mut db = self.db();
        db.next_id = db.next_id.max(c.id.0 + 1);
        db.comments.push(c);
    }
}

impl Default for MockServer {
    fn default() -> MockServer {
        MockServer::new()
    }
}

#[async_trait(?Send)]
impl Store for MockServer {
    async fn fetch_comments(&self, order: SortOrder) -> anyhow::Result<Vec<Comment>> {
        let mut db = self.db();
        db.request("select")?;
        let mut res = db.comments.clone();
        order.sort(&mut res);
        Ok(res)
    }

    async fn insert_comment(&self, comment: &NewComment) -> anyhow::Result<Comment> {
        let mut db = self.db();
        db.request("insert")?;
        if let Some(parent) = comment.parent_id {
            if !db.comments.iter().any(|c| c.id == parent) {
                return Err(anyhow!(
                    "insert on comments violates foreign key: parent {parent} does not exist"
                ));
            }
        }
        let c = Comment {
            id: CommentId(db.next_id),
            created_at: db.now(),
            message: comment.message.clone(),
            image_url: comment.image_url.clone(),
            parent_id: comment.parent_id,
            likes: 0,
        };
        db.next_id += 1;
        db.comments.push(c.clone());
        tracing::trace!(id = %c.id, "mock server inserted comment");
        Ok(c)
    }

    async fn delete_comment(&self, id: CommentId) -> anyhow::Result<()> {
        let mut db = self.db();
        db.request("delete")?;
        db.comments
            .retain(|c| c.id != id && c.parent_id != Some(id));
        Ok(())
    }

    async fn increment_likes(&self, id: CommentId) -> anyhow::Result<()> {
        let mut db = self.db();
        db.request("increment_likes")?;
        if let Some(c) = db.comments.iter_mut().find(|c| c.id == id) {
            c.likes += 1;
        }
        Ok(())
    }

    async fn upload_image(&self, name: &str, image: &ImageUpload) -> anyhow::Result<()> {
        let mut db = self.db();
        db.request("upload")?;
        if db.objects.contains_key(name) {
            return Err(anyhow!("object {name:?} already exists"));
        }
        db.objects.insert(String::from(name), image.clone());
        Ok(())
    }

    fn public_url(&self, name: &str) -> String {
        format!("mock://{}/{}", self.db().bucket, name)
    }
}
