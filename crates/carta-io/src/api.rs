//! HTTP boundary to the restaurant backend.
//!
//! Wraps the browser `fetch` API behind typed request helpers. The
//! backend is an opaque collaborator: this module only knows the
//! endpoint shapes and the JSON/multipart bodies they accept.
//!
//! All functions require a browser environment
//! (`wasm32-unknown-unknown` target).

use carta_core::restaurant::{RestaurantDetails, RestaurantRecord, RestaurantSummary};
use carta_submit::{BannerSubmission, CreatePackage, FilePart, TextPart};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{BlobPropertyBag, FormData, Request, RequestInit, Response};

/// Errors from talking to the backend.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, a
    /// browser API failure).
    #[error("network error: {0}")]
    Network(String),

    /// The identifier does not resolve (HTTP 404).
    #[error("menu identifier not found")]
    NotFound,

    /// Any other non-success status.
    #[error("server returned HTTP {status}")]
    Http { status: u16 },

    /// The response body was not the expected JSON shape.
    #[error("failed to decode server response: {0}")]
    Decode(String),
}

impl From<JsValue> for ApiError {
    fn from(value: JsValue) -> Self {
        Self::Network(format!("{value:?}"))
    }
}

/// Typed client for the restaurant endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// A client rooted at `base_url` (empty for same-origin paths).
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Fetch the ordered list of restaurants for slot-source
    /// selection.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on network failure, non-success
    /// status, or an undecodable body.
    #[allow(clippy::future_not_send)] // WASM is single-threaded; fetch types are !Send
    pub async fn list(&self) -> Result<Vec<RestaurantSummary>, ApiError> {
        let response = self.send("GET", "/api/restaurants", None).await?;
        decode_json(&response).await
    }

    /// Fetch one restaurant record by slug.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] when the slug does not resolve,
    /// other [`ApiError`] variants as for [`list`](Self::list).
    #[allow(clippy::future_not_send)]
    pub async fn restaurant(&self, slug: &str) -> Result<RestaurantRecord, ApiError> {
        let path = format!("/api/restaurants/{slug}");
        let response = self.send("GET", &path, None).await?;
        decode_json(&response).await
    }

    /// Atomically persist a banner submission for `slug`.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`] here means the save failed as a whole; the
    /// caller must not assume partial application.
    #[allow(clippy::future_not_send)]
    pub async fn update_banners(
        &self,
        slug: &str,
        submission: &BannerSubmission,
    ) -> Result<(), ApiError> {
        let form = to_form_data(&submission.texts, &submission.files)?;
        let path = format!("/api/restaurants/update-banners/{slug}");
        self.send("PUT", &path, Some(Body::Form(form))).await?;
        Ok(())
    }

    /// Replace the full metadata object for a restaurant.
    ///
    /// # Errors
    ///
    /// As for [`update_banners`](Self::update_banners).
    #[allow(clippy::future_not_send)]
    pub async fn update_details(
        &self,
        id: &str,
        details: &RestaurantDetails,
    ) -> Result<(), ApiError> {
        let json = serde_json::to_string(details).map_err(|e| ApiError::Decode(e.to_string()))?;
        let path = format!("/api/restaurants/update-details/{id}");
        self.send("PUT", &path, Some(Body::Json(json))).await?;
        Ok(())
    }

    /// Flip a restaurant's active flag.
    ///
    /// # Errors
    ///
    /// As for [`update_banners`](Self::update_banners).
    #[allow(clippy::future_not_send)]
    pub async fn toggle_status(&self, slug: &str) -> Result<(), ApiError> {
        let path = format!("/api/restaurants/{slug}/toggle-status");
        self.send("PUT", &path, None).await?;
        Ok(())
    }

    /// Create a restaurant from its initial asset set and return the
    /// stored record.
    ///
    /// # Errors
    ///
    /// As for [`update_banners`](Self::update_banners).
    #[allow(clippy::future_not_send)]
    pub async fn create(&self, package: CreatePackage) -> Result<RestaurantRecord, ApiError> {
        let (texts, files) = package.into_parts();
        let form = to_form_data(&texts, &files)?;
        let response = self
            .send("POST", "/api/restaurants/create", Some(Body::Form(form)))
            .await?;
        decode_json(&response).await
    }

    #[allow(clippy::future_not_send)]
    async fn send(
        &self,
        method: &str,
        path: &str,
        body: Option<Body>,
    ) -> Result<Response, ApiError> {
        let opts = RequestInit::new();
        opts.set_method(method);
        let mut json_body = false;
        match body {
            Some(Body::Form(form)) => opts.set_body(&form),
            Some(Body::Json(json)) => {
                json_body = true;
                opts.set_body(&JsValue::from_str(&json));
            }
            None => {}
        }

        let url = format!("{}{path}", self.base_url);
        let request = Request::new_with_str_and_init(&url, &opts)?;
        if json_body {
            request.headers().set("Content-Type", "application/json")?;
        }

        let window =
            web_sys::window().ok_or_else(|| ApiError::Network("no global window".into()))?;
        let response: Response = JsFuture::from(window.fetch_with_request(&request))
            .await?
            .dyn_into()
            .map_err(|_| ApiError::Network("fetch did not return a Response".into()))?;

        match response.status() {
            200..=299 => Ok(response),
            404 => Err(ApiError::NotFound),
            status => Err(ApiError::Http { status }),
        }
    }
}

enum Body {
    Form(FormData),
    Json(String),
}

/// Read a response body and decode it as JSON.
#[allow(clippy::future_not_send)]
async fn decode_json<T: serde::de::DeserializeOwned>(response: &Response) -> Result<T, ApiError> {
    let text = JsFuture::from(response.text()?)
        .await?
        .as_string()
        .ok_or_else(|| ApiError::Decode("response body is not text".into()))?;
    serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Assemble a browser `FormData` from packaged parts.
fn to_form_data(texts: &[TextPart], files: &[FilePart]) -> Result<FormData, ApiError> {
    let form = FormData::new()?;
    for part in texts {
        form.append_with_str(part.name, &part.value)?;
    }
    for file in files {
        let uint8_array = js_sys::Uint8Array::from(file.bytes.as_slice());
        let blob_parts = js_sys::Array::new();
        blob_parts.push(&uint8_array);
        let opts = BlobPropertyBag::new();
        opts.set_type(&file.content_type);
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&blob_parts, &opts)?;
        form.append_with_blob_and_filename(file.name, &blob, &file.filename)?;
    }
    Ok(form)
}
