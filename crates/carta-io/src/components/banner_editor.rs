//! The operator-side banner editor.
//!
//! Owns one editing session: pick a restaurant, edit the three slot
//! forms, crop replacement images, save. The [`AssetDraft`] signal is
//! the single source of truth the forms and the live preview both
//! render from.
//!
//! Every async resume -- record fetch, crop encode, save -- carries
//! the slug captured when the operation started and discards its
//! result silently if the operator has since switched subjects.

use std::rc::Rc;

use dioxus::html::{FileData, HasFileData};
use dioxus::logger::tracing::error;
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use carta_core::banner::{AssetDraft, BannerSlot, SlotField};
use carta_core::crop::{self, CropRect, Dimensions};
use carta_core::preview::{BlobUrls, PreviewHandle};
use carta_core::restaurant::RestaurantSummary;
use carta_submit::{package, JPEG_MIME};

use crate::api::ApiClient;
use crate::blob::BrowserBlobUrls;
use crate::components::banner_display::{BannerDisplay, BannerViews};
use crate::components::cropper::CropDialog;

/// Allowed file extensions for image uploads.
const ALLOWED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "webp"];

/// Check whether a filename has an allowed image extension.
fn has_allowed_extension(name: &str) -> bool {
    name.rsplit_once('.').is_some_and(|(_, ext)| {
        ALLOWED_EXTENSIONS
            .iter()
            .any(|a| a.eq_ignore_ascii_case(ext))
    })
}

/// MIME type for an uploaded filename, by extension.
fn mime_for(name: &str) -> &'static str {
    let ext = name
        .rsplit_once('.')
        .map_or("", |(_, ext)| ext)
        .to_ascii_lowercase();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "bmp" => "image/bmp",
        "webp" => "image/webp",
        _ => "application/octet-stream",
    }
}

/// A dismissable save/load status line.
#[derive(Debug, Clone, PartialEq, Eq)]
struct StatusMessage {
    is_error: bool,
    text: String,
}

impl StatusMessage {
    fn success(text: impl Into<String>) -> Self {
        Self {
            is_error: false,
            text: text.into(),
        }
    }

    fn failure(text: impl Into<String>) -> Self {
        Self {
            is_error: true,
            text: text.into(),
        }
    }
}

/// An open crop dialog: the uploaded source plus the identity it was
/// opened for. Dropping the session releases the source preview URL.
struct CropSession {
    slot: BannerSlot,
    slug: String,
    source: PreviewHandle,
    bytes: Vec<u8>,
    natural: Dimensions,
}

/// The banner editor page.
#[component]
#[allow(clippy::too_many_lines)]
pub fn BannerEditor() -> Element {
    let api = use_hook(ApiClient::default);
    let blob_urls = use_hook(|| Rc::new(BrowserBlobUrls) as Rc<dyn BlobUrls>);

    let mut restaurants = use_signal(Vec::<RestaurantSummary>::new);
    let mut selected = use_signal(|| Option::<String>::None);
    let mut draft = use_signal(AssetDraft::new);
    let mut loading = use_signal(|| false);
    let mut saving = use_signal(|| false);
    let mut status = use_signal(|| Option::<StatusMessage>::None);
    let mut crop_session = use_signal(|| Option::<CropSession>::None);

    // Initial load: the restaurant list for the picker.
    let list_api = api.clone();
    use_future(move || {
        let api = list_api.clone();
        async move {
            match api.list().await {
                Ok(list) => restaurants.set(list),
                Err(e) => error!("failed to load restaurant list: {e}"),
            }
        }
    });

    // Subject selection: fetch the record and merge it over the slot
    // defaults. Any previously pending edits are discarded by the
    // merge, including their preview URLs.
    let select_api = api.clone();
    let on_select = move |evt: FormEvent| {
        let slug = evt.value();
        status.set(None);
        // A save or load still in flight now belongs to the old
        // subject; its completion will see the changed selection and
        // discard itself.
        saving.set(false);
        if slug.is_empty() {
            selected.set(None);
            loading.set(false);
            draft.set(AssetDraft::new());
            return;
        }
        selected.set(Some(slug.clone()));
        loading.set(true);
        let api = select_api.clone();
        spawn(async move {
            let outcome = api.restaurant(&slug).await;
            if selected.peek().as_deref() != Some(slug.as_str()) {
                // The operator moved on; this result is stale.
                return;
            }
            loading.set(false);
            match outcome {
                Ok(record) => draft.write().load_from_server(&record.banners),
                Err(e) => {
                    error!("failed to fetch {slug}: {e}");
                    status.set(Some(StatusMessage::failure(
                        "Failed to load restaurant data.",
                    )));
                }
            }
        });
    };

    // A slot form produced source bytes: size them and open the crop
    // dialog for the slot's target aspect.
    let upload_urls = Rc::clone(&blob_urls);
    let on_upload = use_callback(move |(slot, bytes, name): (BannerSlot, Vec<u8>, String)| {
        let Some(slug) = selected.peek().clone() else {
            return;
        };
        match crop::probe_dimensions(&bytes) {
            Ok(natural) => match PreviewHandle::create(&upload_urls, &bytes, mime_for(&name)) {
                Ok(source) => crop_session.set(Some(CropSession {
                    slot,
                    slug,
                    source,
                    bytes,
                    natural,
                })),
                Err(e) => {
                    error!("source preview failed: {e}");
                    status.set(Some(StatusMessage::failure("Could not preview that file.")));
                }
            },
            Err(e) => {
                error!("upload rejected: {e}");
                status.set(Some(StatusMessage::failure(
                    "Could not read that image. Try a different file.",
                )));
            }
        }
    });

    // Crop confirmed: encode off the current tick, then apply to the
    // draft -- unless the subject changed while encoding.
    let done_urls = Rc::clone(&blob_urls);
    let on_crop_done = move |rect: CropRect| {
        let Some(session) = crop_session.write().take() else {
            return;
        };
        let blob_urls = Rc::clone(&done_urls);
        spawn(async move {
            // Yield so the closed dialog paints before the encode
            // blocks the thread.
            TimeoutFuture::new(0).await;
            let outcome = crop::crop_to_jpeg(&session.bytes, rect);
            if selected.peek().as_deref() != Some(session.slug.as_str()) {
                // Stale: dropping the session revokes its source URL.
                return;
            }
            match outcome {
                Ok(jpeg) => match PreviewHandle::create(&blob_urls, &jpeg, JPEG_MIME) {
                    Ok(preview) => {
                        draft.write().apply_cropped_asset(session.slot, preview, jpeg);
                    }
                    Err(e) => {
                        error!("crop preview failed: {e}");
                        status.set(Some(StatusMessage::failure("Could not preview the crop.")));
                    }
                },
                Err(e) => {
                    // The draft is untouched; the operator can retry
                    // with a different file.
                    error!("crop failed: {e}");
                    status.set(Some(StatusMessage::failure(
                        "Could not process that image. Try a different file.",
                    )));
                }
            }
        });
    };

    // Save: one atomic multipart write of the whole draft.
    let save_api = api.clone();
    let on_save = move |_| {
        let Some(slug) = selected.peek().clone() else {
            return;
        };
        saving.set(true);
        status.set(None);
        let submission = package(&draft.peek());
        let api = save_api.clone();
        spawn(async move {
            let outcome = api.update_banners(&slug, &submission).await;
            if selected.peek().as_deref() != Some(slug.as_str()) {
                // Result belongs to a subject no longer on screen.
                return;
            }
            saving.set(false);
            match outcome {
                Ok(()) => {
                    status.set(Some(StatusMessage::success("Banners updated successfully!")));
                    // Reconcile with the authoritative record after a
                    // successful write; this clears the now-persisted
                    // pending blobs.
                    match api.restaurant(&slug).await {
                        Ok(record) => {
                            if selected.peek().as_deref() == Some(slug.as_str()) {
                                draft.write().load_from_server(&record.banners);
                            }
                        }
                        Err(e) => error!("post-save refresh failed: {e}"),
                    }
                }
                Err(e) => {
                    // The draft -- pending images included -- stays
                    // intact so the operator can retry as-is.
                    error!("banner save failed: {e}");
                    status.set(Some(StatusMessage::failure("Failed to update banners.")));
                }
            }
        });
    };

    let views = BannerViews::from_draft(&draft.read());
    let has_subject = selected.read().is_some();

    rsx! {
        div { class: "p-6 bg-gray-50 min-h-screen",
            div { class: "max-w-7xl mx-auto",

                // Header with the restaurant picker
                div { class: "flex flex-col md:flex-row justify-between items-center mb-8 gap-4",
                    h1 { class: "text-3xl font-black text-gray-800", "Banner Editor" }
                    select {
                        class: "w-72 bg-white border border-gray-300 px-4 py-3 rounded-xl shadow-sm
                                font-bold text-gray-700 cursor-pointer",
                        onchange: on_select,
                        option { value: "", "-- Select a Restaurant --" }
                        for restaurant in restaurants() {
                            option { value: "{restaurant.slug}", "{restaurant.name}" }
                        }
                    }
                }

                if loading() {
                    div { class: "text-center py-10 text-gray-500", "Loading Data..." }
                } else {
                    div { class: "grid lg:grid-cols-3 gap-8",

                        // Editing forms
                        div { class: "lg:col-span-1 space-y-6",
                            for slot in BannerSlot::ALL {
                                SlotForm {
                                    slot,
                                    draft,
                                    on_upload,
                                }
                            }

                            button {
                                class: "w-full py-4 bg-gray-900 text-white font-bold rounded-xl
                                        hover:bg-black transition-all disabled:opacity-50 shadow-xl",
                                disabled: saving() || !has_subject,
                                onclick: on_save,
                                if saving() { "Saving..." } else { "Save Updates" }
                            }

                            if let Some(message) = status() {
                                div {
                                    class: if message.is_error {
                                        "p-3 rounded-lg text-center font-bold bg-red-100 text-red-700"
                                    } else {
                                        "p-3 rounded-lg text-center font-bold bg-green-100 text-green-700"
                                    },
                                    "{message.text}"
                                }
                            }
                        }

                        // Live preview
                        div { class: "lg:col-span-2",
                            div { class: "bg-white p-4 rounded-3xl shadow-sm border border-gray-200",
                                h2 { class: "text-gray-400 font-bold uppercase text-xs tracking-wider mb-4 border-b pb-2",
                                    "Live Preview"
                                }
                                BannerDisplay { views }
                            }
                        }
                    }
                }
            }

            if let Some(session) = crop_session.read().as_ref() {
                CropDialog {
                    image_url: session.source.url().to_owned(),
                    natural: session.natural,
                    aspect: session.slot.aspect(),
                    on_done: on_crop_done,
                    on_cancel: move |()| crop_session.set(None),
                }
            }
        }
    }
}

/// Props for one slot's editing form.
#[derive(Props, Clone, PartialEq)]
struct SlotFormProps {
    slot: BannerSlot,
    draft: Signal<AssetDraft>,
    /// Fired with `(slot, bytes, filename)` once an uploaded file has
    /// been read.
    on_upload: EventHandler<(BannerSlot, Vec<u8>, String)>,
}

/// Text, color, and image-upload fields for one banner slot.
#[component]
fn SlotForm(props: SlotFormProps) -> Element {
    let slot = props.slot;
    let mut draft = props.draft;
    let mut file_error = use_signal(|| Option::<String>::None);

    let (title, subtitle, price, bg_color) = {
        let d = draft.read();
        let s = d.slot(slot);
        (
            s.title().to_owned(),
            s.subtitle().to_owned(),
            s.price().map(str::to_owned),
            s.bg_color().to_owned(),
        )
    };

    let on_file = move |evt: FormEvent| async move {
        let files: Vec<FileData> = evt.files();
        let Some(file) = files.first() else {
            return;
        };
        let name = file.name();
        if !has_allowed_extension(&name) {
            file_error.set(Some(format!("Unsupported file type: {name}")));
            return;
        }
        match file.read_bytes().await {
            Ok(bytes) => {
                file_error.set(None);
                props.on_upload.call((slot, bytes.to_vec(), name));
            }
            Err(e) => {
                file_error.set(Some(format!("Failed to read file: {e}")));
            }
        }
    };

    rsx! {
        div { class: "bg-white p-6 rounded-2xl shadow-sm border-l-4 border-orange-500",
            h3 { class: "font-bold text-lg mb-4 text-gray-800", "{slot.label()}" }
            div { class: "space-y-4",

                label { class: "block",
                    span { class: "block text-xs font-bold text-gray-400 uppercase mb-1", "Title" }
                    input {
                        r#type: "text",
                        class: "w-full border border-gray-200 rounded-lg p-2",
                        value: "{title}",
                        oninput: move |evt| {
                            draft.write().set_field(slot, SlotField::Title, evt.value());
                        },
                    }
                }

                label { class: "block",
                    span { class: "block text-xs font-bold text-gray-400 uppercase mb-1", "Subtitle" }
                    input {
                        r#type: "text",
                        class: "w-full border border-gray-200 rounded-lg p-2",
                        value: "{subtitle}",
                        oninput: move |evt| {
                            draft.write().set_field(slot, SlotField::Subtitle, evt.value());
                        },
                    }
                }

                if let Some(price) = price {
                    label { class: "block",
                        span { class: "block text-xs font-bold text-gray-400 uppercase mb-1", "Price" }
                        input {
                            r#type: "text",
                            class: "w-full border border-gray-200 rounded-lg p-2",
                            value: "{price}",
                            oninput: move |evt| {
                                draft.write().set_field(slot, SlotField::Price, evt.value());
                            },
                        }
                    }
                }

                label { class: "flex items-center justify-between border border-gray-200 rounded-lg p-2",
                    span { class: "text-xs font-bold text-gray-400 uppercase", "Background Color" }
                    div { class: "flex items-center gap-2",
                        span { class: "text-xs font-mono", "{bg_color}" }
                        input {
                            r#type: "color",
                            value: "{bg_color}",
                            class: "w-8 h-8 rounded cursor-pointer border-none",
                            oninput: move |evt| {
                                draft.write().set_field(slot, SlotField::BgColor, evt.value());
                            },
                        }
                    }
                }

                label {
                    class: "block w-full cursor-pointer bg-gray-100 hover:bg-gray-200 text-gray-600
                            text-sm font-bold py-3 px-4 rounded-lg text-center border border-dashed
                            border-gray-300",
                    "Upload Image"
                    input {
                        r#type: "file",
                        accept: "image/*",
                        class: "hidden",
                        onchange: on_file,
                    }
                }

                if let Some(err) = file_error() {
                    p { class: "text-red-600 text-sm", "{err}" }
                }
            }
        }
    }
}
