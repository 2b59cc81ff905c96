//! Remote operations, each logging its failure where it happens
//!
//! None of them touch local state: callers apply the outcome to their
//! `Board` once the store has answered.

use anyhow::Context;

use crate::{
    api::{Comment, CommentId, NewComment, SortOrder, Store},
    Draft, Error,
};

pub async fn fetch<S: Store + ?Sized>(store: &S, order: SortOrder) -> Result<Vec<Comment>, Error> {
    let res = store
        .fetch_comments(order)
        .await
        .with_context(|| format!("fetching comments ordered by {order}"));
    if let Err(err) = &res {
        tracing::error!(?err, "error fetching comments");
    }
    Ok(res?)
}

/// Validates the draft, uploads its image if any, then inserts the comment
pub async fn post<S: Store + ?Sized>(store: &S, draft: &Draft) -> Result<Comment, Error> {
    draft.validate()?;
    let res: anyhow::Result<Comment> = async {
        let image_url = match draft.image() {
            None => None,
            Some(image) => {
                let name = image.storage_name(rand::random());
                store
                    .upload_image(&name, image)
                    .await
                    .with_context(|| format!("uploading image as {name:?}"))?;
                Some(store.public_url(&name))
            }
        };
        let comment = NewComment {
            message: draft.message.clone(),
            image_url,
            parent_id: draft.parent_id,
        };
        store
            .insert_comment(&comment)
            .await
            .context("inserting comment")
    }
    .await;
    match &res {
        Ok(c) => tracing::debug!(id = %c.id, "posted comment"),
        Err(err) => tracing::error!(?err, "error posting comment"),
    }
    Ok(res?)
}

pub async fn like<S: Store + ?Sized>(store: &S, id: CommentId) -> Result<CommentId, Error> {
    let res = store
        .increment_likes(id)
        .await
        .with_context(|| format!("liking comment {id}"));
    if let Err(err) = &res {
        tracing::error!(?err, "error liking comment");
    }
    res?;
    Ok(id)
}

/// Only deletes `id` itself, replies of a top-level comment are left to the store
pub async fn delete<S: Store + ?Sized>(store: &S, id: CommentId) -> Result<CommentId, Error> {
    let res = store
        .delete_comment(id)
        .await
        .with_context(|| format!("deleting comment {id}"));
    if let Err(err) = &res {
        tracing::error!(?err, "error deleting comment");
    }
    res?;
    Ok(id)
}
