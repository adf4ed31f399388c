use crate::{log, terminal::DownloadSource};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, Blob, BlobPropertyBag, Document, HtmlAnchorElement, Url};

fn document() -> Result<Document, JsValue> {
    window()
        .ok_or("No window")?
        .document()
        .ok_or_else(|| "No document".into())
}

fn click_link(href: &str, file_name: &str) -> Result<(), JsValue> {
    let anchor: HtmlAnchorElement = document()?.create_element("a")?.dyn_into()?;
    anchor.set_href(href);
    anchor.set_download(file_name);
    anchor.click();
    Ok(())
}

const REVOKE_DELAY_MS: i32 = 1000;

/// Blob URLs must outlive the click or some browsers cancel the download.
fn revoke_later(url: String) -> Result<(), JsValue> {
    let revoke = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        if let Err(e) = Url::revoke_object_url(&url) {
            log::warn(&format!("failed to revoke {}: {:?}", url, e));
        }
    }) as Box<dyn FnMut()>);
    window()
        .ok_or("No window")?
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            revoke.as_ref().unchecked_ref(),
            REVOKE_DELAY_MS,
        )?;
    revoke.forget();
    Ok(())
}

/// Starts a browser download, either of a served asset or of inline text
/// wrapped in a blob.
pub fn trigger_download(file_name: &str, source: &DownloadSource) -> Result<(), JsValue> {
    match source {
        DownloadSource::Url(url) => click_link(url, file_name),
        DownloadSource::Inline(content) => {
            let parts = js_sys::Array::of1(&JsValue::from_str(content));
            let opts = BlobPropertyBag::new();
            opts.set_type("text/plain");
            let blob = Blob::new_with_str_sequence_and_options(&parts, &opts)?;
            let url = Url::create_object_url_with_blob(&blob)?;
            let clicked = click_link(&url, file_name);
            revoke_later(url)?;
            clicked
        }
    }
}
