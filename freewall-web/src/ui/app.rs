use std::{rc::Rc, time::Duration};

use freewall_client::{
    api::{Comment, CommentId, SortOrder},
    share_comment, Board, BoardStatus, Error, Notice, RestStore,
};
use gloo_storage::{LocalStorage, Storage};
use yew::prelude::*;

use crate::{share::BrowserSharer, ui, ui::StoreHandle};

const KEY_DARK_MODE: &str = "dark-mode";
const KEY_SORT_ORDER: &str = "sort-order";

const NOTICE_DURATION: Duration = Duration::from_secs(3);

pub enum AppMsg {
    Fetched(SortOrder, Result<Vec<Comment>, Error>),

    SetOrder(SortOrder),
    SetSearch(String),
    ToggleReply(CommentId),
    ToggleDarkMode,

    Like(CommentId),
    Liked(Result<CommentId, Error>),
    Delete(CommentId),
    Deleted(Result<CommentId, Error>),
    Share(CommentId),

    Posted(Option<CommentId>),
    Notify(Notice),
    Dismiss(u64),
}

pub struct App {
    store: StoreHandle,
    board: Board,
    dark_mode: bool,
    notices: Vec<(u64, Notice)>, // push, remove on dismiss
    next_notice: u64,
}

fn save<T: serde::Serialize>(key: &str, value: &T) {
    if let Err(err) = LocalStorage::set(key, value) {
        tracing::warn!(?err, key, "failed saving preference to local storage");
    }
}

impl App {
    fn fetch(&self, ctx: &Context<Self>) {
        let store = self.store.clone();
        let order = self.board.order;
        ctx.link().send_future(async move {
            AppMsg::Fetched(order, freewall_client::fetch(&*store.0, order).await)
        });
    }

    fn notify(&mut self, ctx: &Context<Self>, notice: Notice) {
        let id = self.next_notice;
        self.next_notice += 1;
        self.notices.push((id, notice));
        ctx.link().send_future(async move {
            let _ = wasm_timer::Delay::new(NOTICE_DURATION).await;
            AppMsg::Dismiss(id)
        });
    }
}

impl Component for App {
    type Message = AppMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let order = LocalStorage::get(KEY_SORT_ORDER).unwrap_or_default();
        let dark_mode = LocalStorage::get(KEY_DARK_MODE).unwrap_or(false);
        let this = App {
            store: StoreHandle(Rc::new(RestStore::new(crate::config()))),
            board: Board::new(order),
            dark_mode,
            notices: Vec::new(),
            next_notice: 0,
        };
        this.fetch(ctx);
        this
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            AppMsg::Fetched(order, Ok(comments)) => {
                return self.board.replace_for(order, comments);
            }
            AppMsg::Fetched(order, Err(_)) if order != self.board.order => return false,
            AppMsg::Fetched(_, Err(_)) => {
                self.board.finish_loading();
                self.notify(ctx, Notice::LoadFailed);
            }
            AppMsg::SetOrder(order) => {
                self.board.order = order;
                save(KEY_SORT_ORDER, &order);
                self.fetch(ctx);
            }
            AppMsg::SetSearch(search) => self.board.search = search,
            AppMsg::ToggleReply(id) => self.board.toggle_reply(id),
            AppMsg::ToggleDarkMode => {
                self.dark_mode = !self.dark_mode;
                save(KEY_DARK_MODE, &self.dark_mode);
            }
            AppMsg::Like(id) => {
                let store = self.store.clone();
                ctx.link().send_future(async move {
                    AppMsg::Liked(freewall_client::like(&*store.0, id).await)
                });
                return false;
            }
            AppMsg::Liked(Ok(id)) => {
                if !self.board.apply_like(id) {
                    tracing::debug!(%id, "liked comment is no longer displayed");
                }
            }
            AppMsg::Liked(Err(_)) => self.notify(ctx, Notice::LikeFailed),
            AppMsg::Delete(id) => {
                let store = self.store.clone();
                ctx.link().send_future(async move {
                    AppMsg::Deleted(freewall_client::delete(&*store.0, id).await)
                });
                return false;
            }
            AppMsg::Deleted(Ok(id)) => {
                self.board.apply_delete(id);
                self.notify(ctx, Notice::Deleted);
            }
            AppMsg::Deleted(Err(_)) => self.notify(ctx, Notice::DeleteFailed),
            AppMsg::Share(id) => {
                let comment = match self.board.find(id) {
                    Some(c) => c.clone(),
                    None => {
                        tracing::warn!(%id, "asked to share a comment that is not displayed");
                        return false;
                    }
                };
                ctx.link().send_future(async move {
                    let res = share_comment(&BrowserSharer, &comment).await;
                    AppMsg::Notify(Notice::for_share(&res))
                });
                return false;
            }
            AppMsg::Posted(parent_id) => {
                self.board.posted(parent_id);
                self.fetch(ctx);
                self.notify(ctx, Notice::Posted);
            }
            AppMsg::Notify(notice) => self.notify(ctx, notice),
            AppMsg::Dismiss(id) => self.notices.retain(|(n, _)| *n != id),
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let now = chrono::Utc::now();
        let on_notice = ctx.link().callback(AppMsg::Notify);
        let on_posted = ctx.link().callback(AppMsg::Posted);
        let list = match self.board.status() {
            BoardStatus::Loading => html! {
                <div class="comment-list-loading">
                    <div class="spinner" role="status"></div>
                </div>
            },
            BoardStatus::Showing(_) => self
                .board
                .visible()
                .into_iter()
                .map(|t| {
                    html! {
                        <ui::ThreadCard
                            key={ t.id().0 }
                            thread={ t.clone() }
                            replying={ self.board.replying_to == Some(t.id()) }
                            store={ self.store.clone() }
                            { now }
                            on_like={ ctx.link().callback(AppMsg::Like) }
                            on_delete={ ctx.link().callback(AppMsg::Delete) }
                            on_share={ ctx.link().callback(AppMsg::Share) }
                            on_reply={ ctx.link().callback(AppMsg::ToggleReply) }
                            on_notice={ on_notice.clone() }
                            on_posted={ on_posted.clone() }
                        />
                    }
                })
                .collect(),
            status => html! {
                <div class="comment-list-placeholder">{ status.placeholder().unwrap_or_default() }</div>
            },
        };

        html! {
            <div class={ classes!("freedom-wall", self.dark_mode.then(|| "dark")) }>
                <header class="wall-header">
                    <h1>{ "Freedom Wall" }</h1>
                    <button
                        type="button"
                        class="dark-mode-toggle"
                        title={ if self.dark_mode { "Light mode" } else { "Dark mode" } }
                        onclick={ ctx.link().callback(|_| AppMsg::ToggleDarkMode) }
                    >
                        { if self.dark_mode { "☀" } else { "☾" } }
                    </button>
                </header>
                <main>
                    <ui::CommentForm
                        store={ self.store.clone() }
                        parent_id={ None }
                        on_notice={ on_notice.clone() }
                        on_posted={ on_posted.clone() }
                    />
                    <section class="comment-list">
                        <div class="comment-list-header">
                            <h2>{ "Comments" }</h2>
                            <ui::Toolbar
                                order={ self.board.order }
                                search={ self.board.search.clone() }
                                on_order_change={ ctx.link().callback(AppMsg::SetOrder) }
                                on_search_change={ ctx.link().callback(AppMsg::SetSearch) }
                            />
                        </div>
                        { list }
                    </section>
                </main>
                <ui::Toaster
                    notices={ self.notices.clone() }
                    on_dismiss={ ctx.link().callback(AppMsg::Dismiss) }
                />
            </div>
        }
    }
}
