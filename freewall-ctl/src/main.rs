use std::path::PathBuf;

use anyhow::{anyhow, Context};
use async_trait::async_trait;
use freewall_client::{
    api::{Comment, CommentId, ImageUpload, SortOrder},
    share_comment, time_ago, Board, BoardStatus, Config, Draft, Notice, RestStore, Sharer,
};
use tracing_subscriber::EnvFilter;

#[derive(structopt::StructOpt)]
struct Opt {
    /// Base URL of the hosted store
    #[structopt(long, env = "FREEWALL_URL")]
    url: Option<String>,

    /// Anonymous API key of the hosted store
    #[structopt(long, env = "FREEWALL_ANON_KEY", hide_env_values = true)]
    anon_key: Option<String>,

    /// Bucket images are uploaded into
    #[structopt(long, env = "FREEWALL_BUCKET")]
    bucket: Option<String>,

    #[structopt(subcommand)]
    cmd: Command,
}

#[derive(structopt::StructOpt)]
enum Command {
    /// Show the wall, replies under their comment
    List {
        /// newest, oldest or most_liked
        #[structopt(short, long, default_value = "newest")]
        sort: SortOrder,

        /// Only show threads mentioning this text
        #[structopt(long)]
        search: Option<String>,
    },

    /// Post a new comment, or a reply with --reply-to
    Post {
        message: String,

        /// JPEG or PNG file to attach
        #[structopt(long, parse(from_os_str))]
        image: Option<PathBuf>,

        /// Top-level comment to reply to
        #[structopt(long)]
        reply_to: Option<CommentId>,
    },

    /// Like a comment
    Like { id: CommentId },

    /// Delete a comment
    Delete { id: CommentId },

    /// Print a shareable text for a comment
    Share { id: CommentId },
}

/// A terminal can only share by printing
struct StdoutSharer;

#[async_trait(?Send)]
impl Sharer for StdoutSharer {
    fn can_share(&self, _text: &str) -> bool {
        true
    }

    async fn share(&self, text: &str) -> anyhow::Result<()> {
        println!("{text}");
        Ok(())
    }

    async fn copy_to_clipboard(&self, _text: &str) -> anyhow::Result<()> {
        Err(anyhow!("no clipboard is available from a terminal"))
    }
}

fn print_comment(c: &Comment, indent: &str, now: chrono::DateTime<chrono::Utc>) {
    println!(
        "{indent}{} · {} · {} like{}",
        c.id,
        time_ago(c.created_at, now),
        c.likes,
        if c.likes == 1 { "" } else { "s" },
    );
    for line in c.message.lines() {
        println!("{indent}  {line}");
    }
    if let Some(url) = &c.image_url {
        println!("{indent}  [image] {url}");
    }
}

async fn read_image(path: PathBuf) -> anyhow::Result<ImageUpload> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| anyhow!("image path {path:?} has no usable file name"))?
        .to_string();
    let content_type = ImageUpload::guess_content_type(&file_name)
        .unwrap_or("application/octet-stream")
        .to_string();
    let bytes = tokio::fs::read(&path)
        .await
        .with_context(|| format!("reading image {path:?}"))?;
    Ok(ImageUpload {
        file_name,
        content_type,
        bytes,
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let opt = <Opt as structopt::StructOpt>::from_args();

    let mut config = Config::new(opt.url.as_deref(), opt.anon_key.as_deref());
    if let Some(bucket) = opt.bucket {
        config = config.with_bucket(bucket);
    }
    tracing::debug!(url = %config.url, bucket = %config.bucket, dev = config.is_dev(), "using store");
    let store = RestStore::new(config);

    match opt.cmd {
        Command::List { sort, search } => {
            let mut board = Board::new(sort);
            board.search = search.unwrap_or_default();
            board.refresh(&store).await.context(Notice::LoadFailed)?;
            let now = chrono::Utc::now();
            match board.status() {
                BoardStatus::Showing(_) => {
                    for t in board.visible() {
                        print_comment(&t.comment, "", now);
                        for r in &t.replies {
                            print_comment(r, "    ↳ ", now);
                        }
                        println!();
                    }
                }
                status => {
                    if let Some(text) = status.placeholder() {
                        println!("{text}");
                    }
                }
            }
        }
        Command::Post {
            message,
            image,
            reply_to,
        } => {
            let mut draft = Draft::new(reply_to);
            draft.message = message;
            if let Some(path) = image {
                let image = read_image(path).await?;
                if let Err(e) = draft.set_image(image) {
                    return Err(anyhow::Error::new(e).context(Notice::InvalidImage));
                }
            }
            let res = freewall_client::post(&store, &draft).await;
            let notice = Notice::for_post(&res);
            let comment = res.context(notice)?;
            println!("{notice} ({})", comment.id);
        }
        Command::Like { id } => {
            freewall_client::like(&store, id)
                .await
                .context(Notice::LikeFailed)?;
        }
        Command::Delete { id } => {
            freewall_client::delete(&store, id)
                .await
                .context(Notice::DeleteFailed)?;
            println!("{}", Notice::Deleted);
        }
        Command::Share { id } => {
            let mut board = Board::default();
            board.refresh(&store).await.context(Notice::LoadFailed)?;
            let comment = board
                .find(id)
                .ok_or_else(|| anyhow!("comment {id} is not on the wall"))?;
            share_comment(&StdoutSharer, comment)
                .await
                .context(Notice::ShareFailed)?;
        }
    }

    Ok(())
}
