use std::rc::Rc;

use freewall_client::RestStore;

mod app;
pub use app::{App, AppMsg};

mod comment_form;
pub use comment_form::CommentForm;

mod thread_card;
pub use thread_card::ThreadCard;

mod toaster;
pub use toaster::Toaster;

mod toolbar;
pub use toolbar::Toolbar;

/// Shared handle on the remote store, compared by identity for props
#[derive(Clone)]
pub struct StoreHandle(pub Rc<RestStore>);

impl PartialEq for StoreHandle {
    fn eq(&self, other: &StoreHandle) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
