//! Dioxus components for the menu viewer and the banner editor.

mod banner_display;
mod banner_editor;
mod cropper;
mod menu_viewer;
mod page_dock;

pub use banner_display::{BannerDisplay, BannerViews, SlotView};
pub use banner_editor::BannerEditor;
pub use cropper::CropDialog;
pub use menu_viewer::MenuViewer;
pub use page_dock::PageDock;
