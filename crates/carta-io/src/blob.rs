//! Blob object-URL creation for crop previews.
//!
//! Implements the sans-IO [`BlobUrls`] seam from `carta-core` over
//! the Web APIs: encoded bytes become a `Blob`, the `Blob` becomes an
//! object URL usable as an `<img src>`. Revocation is wired to
//! preview-handle drop by `carta-core`; this side only executes it.
//!
//! Requires a browser environment (`wasm32-unknown-unknown` target).

use carta_core::preview::{BlobUrls, PreviewError};
use wasm_bindgen::JsValue;
use web_sys::BlobPropertyBag;

/// The browser-backed URL factory.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserBlobUrls;

fn js_error(value: &JsValue) -> PreviewError {
    PreviewError::UrlCreate(format!("{value:?}"))
}

impl BlobUrls for BrowserBlobUrls {
    fn create(&self, bytes: &[u8], mime: &str) -> Result<String, PreviewError> {
        // 1. Wrap the bytes in a Uint8Array sequence.
        let uint8_array = js_sys::Uint8Array::from(bytes);
        let parts = js_sys::Array::new();
        parts.push(&uint8_array);

        // 2. Create a Blob carrying the MIME type.
        let opts = BlobPropertyBag::new();
        opts.set_type(mime);
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &opts)
            .map_err(|e| js_error(&e))?;

        // 3. Generate the object URL.
        web_sys::Url::create_object_url_with_blob(&blob).map_err(|e| js_error(&e))
    }

    fn revoke(&self, url: &str) {
        // Revocation of an already-released URL is harmless.
        let _ = web_sys::Url::revoke_object_url(url);
    }
}
