use anyhow::{anyhow, Context};
use async_trait::async_trait;

use crate::{
    api::{
        Comment, CommentId, ImageUpload, NewComment, SortOrder, Store, StoreError,
        COMMENTS_TABLE, INCREMENT_LIKES_RPC,
    },
    Config,
};

/// `Store` reached over the PostgREST and object storage HTTP interfaces
#[derive(Clone, Debug)]
pub struct RestStore {
    client: reqwest::Client,
    config: Config,
}

impl RestStore {
    pub fn new(config: Config) -> RestStore {
        RestStore {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn rest_url(&self, path: &str) -> String {
        format!("{}/rest/v1/{}", self.config.url, path)
    }

    fn object_url(&self, name: &str) -> String {
        format!(
            "{}/storage/v1/object/{}/{}",
            self.config.url, self.config.bucket, name
        )
    }

    fn authed(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        req.header("apikey", &self.config.anon_key)
            .bearer_auth(&self.config.anon_key)
    }

    fn select_request(&self, order: SortOrder) -> reqwest::RequestBuilder {
        let url = self.rest_url(&format!(
            "{COMMENTS_TABLE}?select=*&order={}",
            order.to_postgrest()
        ));
        self.authed(self.client.get(url))
    }

    fn insert_request(&self, comment: &NewComment) -> reqwest::RequestBuilder {
        self.authed(self.client.post(self.rest_url(COMMENTS_TABLE)))
            .header("Prefer", "return=representation")
            .json(&[comment])
    }

    fn delete_request(&self, id: CommentId) -> reqwest::RequestBuilder {
        let url = self.rest_url(&format!("{COMMENTS_TABLE}?id=eq.{}", id.0));
        self.authed(self.client.delete(url))
    }

    fn like_request(&self, id: CommentId) -> reqwest::RequestBuilder {
        let url = self.rest_url(&format!("rpc/{INCREMENT_LIKES_RPC}"));
        self.authed(self.client.post(url))
            .json(&serde_json::json!({ "comment_id": id }))
    }

    fn upload_request(&self, name: &str, image: &ImageUpload) -> reqwest::RequestBuilder {
        self.authed(self.client.post(self.object_url(name)))
            .header(reqwest::header::CONTENT_TYPE, &image.content_type)
            .body(image.bytes.clone())
    }
}

/// Turns non-success responses into errors, decoding the store's error body
/// when there is one
async fn check(resp: reqwest::Response) -> anyhow::Result<reqwest::Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.bytes().await.context("reading error response body")?;
    Err(match StoreError::parse(&body) {
        Ok(err) => anyhow::Error::new(err).context(format!("store answered {status}")),
        Err(_) => anyhow!(
            "store answered {status}: {}",
            String::from_utf8_lossy(&body)
        ),
    })
}

#[async_trait(?Send)]
impl Store for RestStore {
    async fn fetch_comments(&self, order: SortOrder) -> anyhow::Result<Vec<Comment>> {
        let resp = self
            .select_request(order)
            .send()
            .await
            .context("sending select request")?;
        check(resp)
            .await?
            .json()
            .await
            .context("parsing comment list")
    }

    async fn insert_comment(&self, comment: &NewComment) -> anyhow::Result<Comment> {
        let resp = self
            .insert_request(comment)
            .send()
            .await
            .context("sending insert request")?;
        let inserted: Vec<Comment> = check(resp)
            .await?
            .json()
            .await
            .context("parsing inserted comment")?;
        inserted
            .into_iter()
            .next()
            .ok_or_else(|| anyhow!("store did not return the inserted comment"))
    }

    async fn delete_comment(&self, id: CommentId) -> anyhow::Result<()> {
        let resp = self
            .delete_request(id)
            .send()
            .await
            .context("sending delete request")?;
        check(resp).await?;
        Ok(())
    }

    async fn increment_likes(&self, id: CommentId) -> anyhow::Result<()> {
        let resp = self
            .like_request(id)
            .send()
            .await
            .context("sending like request")?;
        check(resp).await?;
        Ok(())
    }

    async fn upload_image(&self, name: &str, image: &ImageUpload) -> anyhow::Result<()> {
        let resp = self
            .upload_request(name, image)
            .send()
            .await
            .with_context(|| format!("uploading {:?}", image.file_name))?;
        check(resp).await?;
        Ok(())
    }

    fn public_url(&self, name: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.config.url, self.config.bucket, name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> RestStore {
        RestStore::new(Config::new(Some("https://abc.supabase.co"), Some("k")))
    }

    fn build(req: reqwest::RequestBuilder) -> reqwest::Request {
        req.build().expect("building request")
    }

    fn header<'a>(req: &'a reqwest::Request, name: &str) -> Option<&'a str> {
        req.headers().get(name).and_then(|v| v.to_str().ok())
    }

    fn json_body(req: &reqwest::Request) -> serde_json::Value {
        let bytes = req
            .body()
            .and_then(|b| b.as_bytes())
            .expect("request has an in-memory body");
        serde_json::from_slice(bytes).expect("body is json")
    }

    fn assert_authed(req: &reqwest::Request) {
        assert_eq!(header(req, "apikey"), Some("k"));
        assert_eq!(header(req, "authorization"), Some("Bearer k"));
    }

    #[test]
    fn select_request() {
        let s = store();
        for (order, expected) in [
            (SortOrder::Newest, "created_at.desc,id.desc"),
            (SortOrder::Oldest, "created_at.asc,id.asc"),
            (SortOrder::MostLiked, "likes.desc,id.asc"),
        ] {
            let req = build(s.select_request(order));
            assert_eq!(*req.method(), reqwest::Method::GET);
            assert_eq!(req.url().path(), "/rest/v1/comments");
            let query: Vec<(String, String)> = req.url().query_pairs().into_owned().collect();
            assert_eq!(
                query,
                vec![
                    (String::from("select"), String::from("*")),
                    (String::from("order"), String::from(expected)),
                ]
            );
            assert_authed(&req);
        }
    }

    #[test]
    fn insert_request() {
        let req = build(store().insert_request(&NewComment::reply(CommentId(3), String::from("hi"))));
        assert_eq!(*req.method(), reqwest::Method::POST);
        assert_eq!(req.url().as_str(), "https://abc.supabase.co/rest/v1/comments");
        assert_eq!(header(&req, "prefer"), Some("return=representation"));
        assert_authed(&req);
        assert_eq!(
            json_body(&req),
            serde_json::json!([{ "message": "hi", "image_url": null, "parent_id": 3 }])
        );
    }

    #[test]
    fn delete_request() {
        let req = build(store().delete_request(CommentId(42)));
        assert_eq!(*req.method(), reqwest::Method::DELETE);
        assert_eq!(
            req.url().as_str(),
            "https://abc.supabase.co/rest/v1/comments?id=eq.42"
        );
        assert!(req.body().is_none());
        assert_authed(&req);
    }

    #[test]
    fn like_request() {
        let req = build(store().like_request(CommentId(7)));
        assert_eq!(*req.method(), reqwest::Method::POST);
        assert_eq!(
            req.url().as_str(),
            "https://abc.supabase.co/rest/v1/rpc/increment_likes"
        );
        assert_authed(&req);
        assert_eq!(json_body(&req), serde_json::json!({ "comment_id": 7 }));
    }

    #[test]
    fn upload_request() {
        let image = ImageUpload {
            file_name: String::from("cat.png"),
            content_type: String::from("image/png"),
            bytes: vec![0x89, b'P', b'N', b'G'],
        };
        let req = build(store().upload_request("12.png", &image));
        assert_eq!(*req.method(), reqwest::Method::POST);
        assert_eq!(
            req.url().as_str(),
            "https://abc.supabase.co/storage/v1/object/freedom-wall-images/12.png"
        );
        assert_eq!(header(&req, "content-type"), Some("image/png"));
        assert_authed(&req);
        assert_eq!(
            req.body().and_then(|b| b.as_bytes()),
            Some(&[0x89, b'P', b'N', b'G'][..])
        );
    }

    #[test]
    fn urls() {
        let s = RestStore::new(Config::new(Some("https://abc.supabase.co"), Some("k")));
        assert_eq!(
            s.rest_url("comments"),
            "https://abc.supabase.co/rest/v1/comments"
        );
        assert_eq!(
            s.object_url("1.png"),
            "https://abc.supabase.co/storage/v1/object/freedom-wall-images/1.png"
        );
        assert_eq!(
            s.public_url("1.png"),
            "https://abc.supabase.co/storage/v1/object/public/freedom-wall-images/1.png"
        );
    }
}
