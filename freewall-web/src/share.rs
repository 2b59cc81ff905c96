use anyhow::anyhow;
use async_trait::async_trait;
use freewall_client::Sharer;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

#[wasm_bindgen(inline_js = "
    export function can_share(text) {
        try {
            return navigator.share !== undefined
                && navigator.canShare !== undefined
                && navigator.canShare({ text });
        } catch {
            return false;
        }
    }
    export function share(text) {
        return navigator.share({ text });
    }
    export function write_clipboard(text) {
        return navigator.clipboard.writeText(text);
    }
")]
extern "C" {
    fn can_share(text: &str) -> bool;
    #[wasm_bindgen(catch)]
    fn share(text: &str) -> Result<js_sys::Promise, JsValue>;
    #[wasm_bindgen(catch)]
    fn write_clipboard(text: &str) -> Result<js_sys::Promise, JsValue>;
}

async fn await_promise(p: Result<js_sys::Promise, JsValue>) -> anyhow::Result<()> {
    let p = p.map_err(|e| anyhow!("{e:?}"))?;
    JsFuture::from(p).await.map_err(|e| anyhow!("{e:?}"))?;
    Ok(())
}

/// Web Share API, with the async clipboard as fallback
pub struct BrowserSharer;

#[async_trait(?Send)]
impl Sharer for BrowserSharer {
    fn can_share(&self, text: &str) -> bool {
        can_share(text)
    }

    async fn share(&self, text: &str) -> anyhow::Result<()> {
        await_promise(share(text)).await
    }

    async fn copy_to_clipboard(&self, text: &str) -> anyhow::Result<()> {
        await_promise(write_clipboard(text)).await
    }
}
