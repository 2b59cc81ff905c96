use chrono::Utc;

mod comment;
pub use comment::{validate_message, Comment, CommentId, NewComment, MAX_MESSAGE_CHARS};

mod error;
pub use error::{Error, StoreError};

mod image;
pub use image::{ImageUpload, ALLOWED_IMAGE_TYPES};

mod order;
pub use order::SortOrder;

mod store;
pub use store::Store;

pub type Time = chrono::DateTime<Utc>;

/// Name of the record collection holding every comment and reply
pub const COMMENTS_TABLE: &str = "comments";

/// Name of the server-side function atomically bumping a comment's like count
pub const INCREMENT_LIKES_RPC: &str = "increment_likes";

/// Bucket images attached to comments are uploaded into, unless configured otherwise
pub const DEFAULT_IMAGE_BUCKET: &str = "freedom-wall-images";
