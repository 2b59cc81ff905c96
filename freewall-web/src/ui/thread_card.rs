use freewall_client::{
    api::{Comment, CommentId, Time},
    time_ago, Notice, Thread,
};
use yew::prelude::*;

use crate::ui::{self, StoreHandle};

#[derive(Clone, PartialEq, Properties)]
pub struct ThreadCardProps {
    pub thread: Thread,
    pub replying: bool,
    pub store: StoreHandle,
    pub now: Time,
    pub on_like: Callback<CommentId>,
    pub on_delete: Callback<CommentId>,
    pub on_share: Callback<CommentId>,
    pub on_reply: Callback<CommentId>,
    pub on_notice: Callback<Notice>,
    pub on_posted: Callback<Option<CommentId>>,
}

fn comment_card(p: &ThreadCardProps, c: &Comment, is_reply: bool) -> Html {
    let id = c.id;
    let reply_button = (!is_reply).then(|| {
        html! {
            <button
                type="button"
                class={ classes!("reply-button", p.replying.then(|| "active")) }
                onclick={ p.on_reply.reform(move |_| id) }
            >
                { "Reply" }
            </button>
        }
    });
    html! {
        <article class={ classes!("comment", is_reply.then(|| "reply")) }>
            <div class="comment-header">
                <p class="comment-message">{ &c.message }</p>
                <button
                    type="button"
                    class="delete-button"
                    title="Delete"
                    onclick={ p.on_delete.reform(move |_| id) }
                >
                    { "🗑" }
                </button>
            </div>
            { for c.image_url.as_ref().map(|url| html! {
                <img class="comment-image" src={ url.clone() } alt="Comment image" loading="lazy" />
            }) }
            <div class="comment-footer">
                <span class="comment-time">{ time_ago(c.created_at, p.now) }</span>
                <div class="comment-actions">
                    <button
                        type="button"
                        class="like-button"
                        title="Like"
                        onclick={ p.on_like.reform(move |_| id) }
                    >
                        { format!("♥ {}", c.likes) }
                    </button>
                    <button
                        type="button"
                        class="share-button"
                        title="Share"
                        onclick={ p.on_share.reform(move |_| id) }
                    >
                        { "Share" }
                    </button>
                    { for reply_button }
                </div>
            </div>
        </article>
    }
}

/// A top-level comment and its replies, which are never nested further
#[function_component(ThreadCard)]
pub fn thread_card(p: &ThreadCardProps) -> Html {
    let parent = p.thread.id();
    html! {
        <div class="thread">
            { comment_card(p, &p.thread.comment, false) }
            if p.replying {
                <div class="reply-form">
                    <ui::CommentForm
                        store={ p.store.clone() }
                        parent_id={ Some(parent) }
                        on_notice={ p.on_notice.clone() }
                        on_posted={ p.on_posted.clone() }
                        on_cancel={ Some(p.on_reply.reform(move |()| parent)) }
                    />
                </div>
            }
            if !p.thread.replies.is_empty() {
                <div class="replies">
                    { for p.thread.replies.iter().map(|r| html! {
                        <div key={ r.id.0 }>{ comment_card(p, r, true) }</div>
                    }) }
                </div>
            }
        </div>
    }
}
