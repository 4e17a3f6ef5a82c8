//! carta-io: Browser I/O and Dioxus component library.
//!
//! Handles the HTTP boundary to the restaurant backend, Blob
//! object-URL creation for crop previews, and provides the reusable
//! UI components for the carta web application.

pub mod api;
pub mod blob;
pub mod components;

pub use api::{ApiClient, ApiError};
pub use blob::BrowserBlobUrls;
pub use components::{BannerDisplay, BannerEditor, CropDialog, MenuViewer, PageDock};
