//! The swipeable, autoplaying page carousel.
//!
//! The carousel keeps its own track index -- the slide actually on
//! screen -- as its source of truth. Every movement it originates
//! (swipe, autoplay) is reported to the shared [`PagePosition`] as a
//! settle; every dock-originated movement arrives as a slide command
//! the carousel consumes exactly once, animates, and then settles
//! like any of its own. Because settles never enqueue commands, the
//! two surfaces cannot feed back into each other.

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use carta_core::pager::PagePosition;

/// Milliseconds between autoplay advances.
const AUTOPLAY_MS: u32 = 5000;

/// Minimum horizontal pointer travel (in CSS pixels) for a swipe.
const SWIPE_THRESHOLD: f64 = 40.0;

/// Props for the [`MenuViewer`] component.
#[derive(Props, Clone, PartialEq)]
pub struct MenuViewerProps {
    /// Page image URLs in display order.
    pages: Vec<String>,
    /// Shared page state, owned by the menu view.
    position: Signal<PagePosition>,
}

/// Full-height slider over the menu pages.
#[component]
pub fn MenuViewer(props: MenuViewerProps) -> Element {
    let mut position = props.position;
    let page_count = props.pages.len();

    // The carousel's own source of truth: the slide on screen.
    let mut track = use_signal(|| 0usize);
    // Pointer-press x coordinate while a drag is in progress. Autoplay
    // holds off while this is set.
    let mut pressed_at = use_signal(|| Option::<f64>::None);

    // Consume pending dock commands. Re-runs whenever the shared
    // state changes; the inner write only happens when a command is
    // actually queued, so the re-run it triggers settles immediately.
    use_effect(move || {
        let has_command = position.read().has_command();
        if has_command {
            let command = position.write().take_command();
            if let Some(command) = command {
                track.set(command.index);
                position.write().settle_from_carousel(command.index);
            }
        }
    });

    // Autoplay tick. Reads the shared state through `peek` so the
    // loop itself never subscribes to anything.
    use_future(move || async move {
        loop {
            TimeoutFuture::new(AUTOPLAY_MS).await;
            if pressed_at.peek().is_some() {
                continue;
            }
            let (count, current) = {
                let pos = position.peek();
                (pos.count(), pos.current())
            };
            if count < 2 {
                continue;
            }
            let next = (current + 1) % count;
            track.set(next);
            position.write().settle_from_carousel(next);
        }
    });

    let on_pointer_down = move |evt: PointerEvent| {
        pressed_at.set(Some(evt.client_coordinates().x));
    };

    let on_pointer_up = move |evt: PointerEvent| {
        let start = *pressed_at.peek();
        pressed_at.set(None);
        let Some(start_x) = start else {
            return;
        };
        let delta = evt.client_coordinates().x - start_x;
        let landed = *track.peek();
        let target = if delta <= -SWIPE_THRESHOLD && landed + 1 < page_count {
            landed + 1
        } else if delta >= SWIPE_THRESHOLD && landed > 0 {
            landed - 1
        } else {
            landed
        };
        if target != landed {
            track.set(target);
        }
        // The gesture has settled; the carousel reports where it
        // landed even when it did not move.
        position.write().settle_from_carousel(target);
    };

    let on_pointer_cancel = move |_| {
        pressed_at.set(None);
    };

    let offset = track() * 100;

    rsx! {
        div {
            class: "w-full h-full overflow-hidden touch-pan-y select-none",
            onpointerdown: on_pointer_down,
            onpointerup: on_pointer_up,
            onpointercancel: on_pointer_cancel,

            div {
                class: "flex h-full transition-transform duration-500 ease-out",
                style: "transform: translateX(-{offset}%)",

                for url in props.pages.iter() {
                    div { class: "w-full h-full shrink-0 flex items-center justify-center p-2",
                        img {
                            src: "{url}",
                            alt: "Menu page",
                            draggable: false,
                            class: "max-h-full max-w-full object-contain shadow-2xl rounded-lg",
                        }
                    }
                }
            }
        }
    }
}
