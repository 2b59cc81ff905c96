mod board;
pub use board::{Board, BoardStatus};

mod config;
pub use config::Config;

mod draft;
pub use draft::Draft;

mod error;
pub use error::Error;

mod format;
pub use format::time_ago;

mod notice;
pub use notice::Notice;

mod ops;
pub use ops::{delete, fetch, like, post};

mod rest;
pub use rest::RestStore;

mod search;
pub use search::Search;

mod share;
pub use share::{share_comment, share_text, ShareOutcome, Sharer};

mod thread;
pub use thread::{build_threads, Thread};

pub mod api {
    pub use freewall_api::*;
}
