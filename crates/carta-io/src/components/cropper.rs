//! Modal crop dialog.
//!
//! Shows the uploaded source image behind an aspect-locked frame.
//! Dragging pans the selection, the slider zooms it (1x to 3x), and
//! "Done" resolves the interactive state into a pixel-exact
//! [`CropRect`] via [`CropViewport::selection`]. The dialog never
//! touches the draft itself; the editor applies the result.

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdX;
use dioxus_free_icons::Icon;

use carta_core::crop::{AspectRatio, CropRect, CropViewport, Dimensions, MAX_ZOOM, MIN_ZOOM};

/// Pointer travel (in CSS pixels) that pans the selection across its
/// whole slack range.
const PAN_RANGE_PX: f32 = 480.0;

/// Props for the [`CropDialog`] component.
#[derive(Props, Clone, PartialEq)]
pub struct CropDialogProps {
    /// Object URL of the source image.
    image_url: String,
    /// The source image's natural dimensions.
    natural: Dimensions,
    /// Target aspect ratio of the slot being edited.
    aspect: AspectRatio,
    /// Fired with the resolved pixel rectangle on "Done".
    on_done: EventHandler<CropRect>,
    /// Fired when the dialog is dismissed without cropping.
    on_cancel: EventHandler<()>,
}

/// Full-screen crop modal.
#[component]
pub fn CropDialog(props: CropDialogProps) -> Element {
    let mut viewport = use_signal(CropViewport::new);
    let mut drag_from = use_signal(|| Option::<(f64, f64)>::None);

    let on_pointer_down = move |evt: PointerEvent| {
        let point = evt.client_coordinates();
        drag_from.set(Some((point.x, point.y)));
    };

    let on_pointer_move = move |evt: PointerEvent| {
        let Some((from_x, from_y)) = *drag_from.peek() else {
            return;
        };
        let point = evt.client_coordinates();
        #[allow(clippy::cast_possible_truncation)]
        let (dx, dy) = (
            (point.x - from_x) as f32 / PAN_RANGE_PX,
            (point.y - from_y) as f32 / PAN_RANGE_PX,
        );
        // Dragging the image right moves the selection left.
        viewport.write().pan_by(-dx, -dy);
        drag_from.set(Some((point.x, point.y)));
    };

    let on_pointer_up = move |_| {
        drag_from.set(None);
    };

    let on_zoom = move |evt: FormEvent| {
        if let Ok(zoom) = evt.value().parse::<f32>() {
            viewport.write().set_zoom(zoom);
        }
    };

    let zoom = viewport.read().zoom();
    let frame_ratio = format!("{} / {}", props.aspect.w, props.aspect.h);

    rsx! {
        div { class: "fixed inset-0 z-50 bg-black/80 flex items-center justify-center p-4",
            div { class: "bg-white rounded-2xl w-full max-w-2xl overflow-hidden relative flex flex-col",

                // Header
                div { class: "p-4 border-b flex justify-between items-center bg-gray-50",
                    h3 { class: "font-bold text-lg", "Crop Image" }
                    button {
                        class: "text-gray-500 hover:text-red-500",
                        aria_label: "Close crop dialog",
                        onclick: move |_| props.on_cancel.call(()),
                        Icon { icon: LdX, width: 20, height: 20 }
                    }
                }

                // Aspect-locked stage
                div {
                    class: "relative bg-gray-900 overflow-hidden cursor-move touch-none w-full",
                    style: "aspect-ratio: {frame_ratio}",
                    onpointerdown: on_pointer_down,
                    onpointermove: on_pointer_move,
                    onpointerup: on_pointer_up,
                    onpointercancel: on_pointer_up,

                    img {
                        src: "{props.image_url}",
                        alt: "Crop source",
                        draggable: false,
                        class: "w-full h-full object-cover origin-center",
                        style: "transform: scale({zoom})",
                    }
                }

                // Zoom control + confirm
                div { class: "p-6 bg-white flex items-center gap-4",
                    span { class: "text-sm font-bold text-gray-500", "Zoom" }
                    input {
                        r#type: "range",
                        min: "{MIN_ZOOM}",
                        max: "{MAX_ZOOM}",
                        step: "0.1",
                        value: "{zoom}",
                        aria_label: "Zoom",
                        class: "flex-1",
                        oninput: on_zoom,
                    }
                    button {
                        class: "bg-black text-white px-6 py-2 rounded-lg font-bold hover:bg-gray-800",
                        onclick: move |_| {
                            let rect = viewport
                                .peek()
                                .selection(props.natural, props.aspect);
                            props.on_done.call(rect);
                        },
                        "Done"
                    }
                }
            }
        }
    }
}
