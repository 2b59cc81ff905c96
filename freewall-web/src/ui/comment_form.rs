use freewall_client::{
    api::{CommentId, ImageUpload},
    Draft, Notice,
};
use wasm_bindgen_futures::JsFuture;
use yew::prelude::*;

use crate::ui::StoreHandle;

#[derive(Clone, PartialEq, Properties)]
pub struct CommentFormProps {
    pub store: StoreHandle,
    pub parent_id: Option<CommentId>,
    pub on_notice: Callback<Notice>,
    pub on_posted: Callback<Option<CommentId>>,

    #[prop_or_default]
    pub on_cancel: Option<Callback<()>>,
}

pub enum CommentFormMsg {
    SetMessage(String),
    PickFile(web_sys::File),
    ImageLoaded(ImageUpload, String),
    ClearImage,
    TogglePreview,
    Submit,
    Submitted(Notice),
}

pub struct CommentForm {
    draft: Draft,
    preview_url: Option<String>,
    previewing: bool,
    submitting: bool,
    file_input: NodeRef,
}

impl CommentForm {
    fn drop_preview_url(&mut self) {
        if let Some(url) = self.preview_url.take() {
            if let Err(err) = web_sys::Url::revoke_object_url(&url) {
                tracing::debug!(?err, "failed revoking image object url");
            }
        }
    }

    fn clear_file_input(&self) {
        if let Some(input) = self.file_input.cast::<web_sys::HtmlInputElement>() {
            input.set_value("");
        }
    }
}

async fn read_file(file: web_sys::File) -> Option<(ImageUpload, String)> {
    let buffer = match JsFuture::from(file.array_buffer()).await {
        Ok(b) => b,
        Err(err) => {
            tracing::error!(?err, name = %file.name(), "failed reading picked file");
            return None;
        }
    };
    let preview_url = match web_sys::Url::create_object_url_with_blob(&file) {
        Ok(u) => u,
        Err(err) => {
            tracing::error!(?err, "failed creating object url for preview");
            return None;
        }
    };
    let image = ImageUpload {
        file_name: file.name(),
        content_type: file.type_(),
        bytes: js_sys::Uint8Array::new(&buffer).to_vec(),
    };
    Some((image, preview_url))
}

impl Component for CommentForm {
    type Message = CommentFormMsg;
    type Properties = CommentFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        CommentForm {
            draft: Draft::new(ctx.props().parent_id),
            preview_url: None,
            previewing: false,
            submitting: false,
            file_input: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            CommentFormMsg::SetMessage(m) => self.draft.message = m,
            CommentFormMsg::PickFile(file) => {
                // Check the type before reading the whole file in
                let picked = ImageUpload {
                    file_name: file.name(),
                    content_type: file.type_(),
                    bytes: Vec::new(),
                };
                if picked.validate().is_err() {
                    self.clear_file_input();
                    ctx.props().on_notice.emit(Notice::InvalidImage);
                    return false;
                }
                ctx.link().send_future(async move {
                    match read_file(file).await {
                        Some((image, url)) => CommentFormMsg::ImageLoaded(image, url),
                        None => CommentFormMsg::ClearImage,
                    }
                });
                return false;
            }
            CommentFormMsg::ImageLoaded(image, url) => match self.draft.set_image(image) {
                Ok(()) => {
                    self.drop_preview_url();
                    self.preview_url = Some(url);
                }
                Err(_) => {
                    if let Err(err) = web_sys::Url::revoke_object_url(&url) {
                        tracing::debug!(?err, "failed revoking image object url");
                    }
                    ctx.props().on_notice.emit(Notice::InvalidImage);
                }
            },
            CommentFormMsg::ClearImage => {
                self.draft.clear_image();
                self.drop_preview_url();
                self.clear_file_input();
            }
            CommentFormMsg::TogglePreview => self.previewing = !self.previewing,
            CommentFormMsg::Submit => {
                if self.submitting {
                    return false;
                }
                if let Err(e) = self.draft.validate() {
                    ctx.props().on_notice.emit(Notice::for_validation(&e));
                    return false;
                }
                self.submitting = true;
                let store = ctx.props().store.clone();
                let draft = self.draft.clone();
                ctx.link().send_future(async move {
                    let res = freewall_client::post(&*store.0, &draft).await;
                    CommentFormMsg::Submitted(Notice::for_post(&res))
                });
            }
            CommentFormMsg::Submitted(notice) => {
                self.submitting = false;
                if notice != Notice::Posted {
                    ctx.props().on_notice.emit(notice);
                    return true;
                }
                self.draft.reset();
                self.drop_preview_url();
                self.clear_file_input();
                self.previewing = false;
                ctx.props().on_posted.emit(ctx.props().parent_id);
            }
        }
        true
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.drop_preview_url();
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let is_reply = ctx.props().parent_id.is_some();
        let remaining = self.draft.chars_remaining();
        let over_limit = self.draft.is_over_limit();

        let on_input = ctx.link().callback(|e: InputEvent| {
            let elt: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
            CommentFormMsg::SetMessage(elt.value())
        });
        let on_file = ctx.link().batch_callback(|e: Event| {
            let elt: web_sys::HtmlInputElement = e.target_unchecked_into();
            elt.files()
                .and_then(|l| l.get(0))
                .map(CommentFormMsg::PickFile)
        });
        let on_submit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            CommentFormMsg::Submit
        });

        let preview = self.previewing.then(|| {
            html! {
                <div class="comment-preview">
                    <h3>{ "Preview" }</h3>
                    <div class="comment-preview-text">{ self.draft.preview().to_string() }</div>
                    { for self.preview_url.as_ref().map(|url| html! {
                        <img class="comment-image" src={ url.clone() } alt="Preview" />
                    }) }
                </div>
            }
        });
        let image_chip = self.preview_url.as_ref().map(|url| {
            html! {
                <div class="image-chip">
                    <img src={ url.clone() } alt="Selected image" />
                    <button
                        type="button"
                        title="Remove image"
                        onclick={ ctx.link().callback(|_| CommentFormMsg::ClearImage) }
                    >
                        { "✕" }
                    </button>
                </div>
            }
        });
        let cancel = ctx.props().on_cancel.clone().map(|on_cancel| {
            html! {
                <button type="button" class="cancel-button" onclick={ on_cancel.reform(|_| ()) }>
                    { "Cancel" }
                </button>
            }
        });
        let submit_label = match (self.submitting, is_reply) {
            (true, _) => "Posting...",
            (false, true) => "Reply",
            (false, false) => "Post",
        };

        html! {
            <form class="comment-form" onsubmit={ on_submit }>
                <textarea
                    class={ classes!(over_limit.then(|| "over-limit")) }
                    placeholder={ if is_reply { "Write a reply..." } else { "Share your thoughts..." } }
                    value={ self.draft.message.clone() }
                    oninput={ on_input }
                    disabled={ self.submitting }
                />
                <div class={ classes!("char-counter", over_limit.then(|| "over-limit")) }>
                    { format!("{remaining} characters remaining") }
                </div>
                { for image_chip }
                <div class="comment-form-actions">
                    <label class="image-picker">
                        { "Add Image" }
                        <input
                            ref={ self.file_input.clone() }
                            type="file"
                            accept="image/jpeg,image/png"
                            hidden=true
                            onchange={ on_file }
                        />
                    </label>
                    <button
                        type="button"
                        class="preview-button"
                        onclick={ ctx.link().callback(|_| CommentFormMsg::TogglePreview) }
                    >
                        { if self.previewing { "Hide Preview" } else { "Preview" } }
                    </button>
                    { for cancel }
                    <button type="submit" class="submit-button" disabled={ self.submitting || over_limit }>
                        { submit_label }
                    </button>
                </div>
                { for preview }
            </form>
        }
    }
}
