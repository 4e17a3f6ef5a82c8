//! The page navigation dock.
//!
//! One button per page, rendered from the same shared [`PagePosition`]
//! the carousel renders from. Clicking a button routes through
//! `select_from_dock`, which decides whether the carousel needs a
//! corrective slide command.

use dioxus::prelude::*;

use carta_core::pager::{PagePosition, PageSet};

/// Props for the [`PageDock`] component.
#[derive(Props, Clone, PartialEq)]
pub struct PageDockProps {
    /// The page set the dock navigates.
    pages: PageSet,
    /// Shared page state, owned by the menu view.
    position: Signal<PagePosition>,
}

/// Horizontal pill of page buttons pinned above the bottom edge.
#[component]
pub fn PageDock(props: PageDockProps) -> Element {
    let mut position = props.position;
    let current = position.read().current();

    rsx! {
        div {
            class: "flex items-center gap-2 bg-black/40 backdrop-blur-md border border-white/10
                    p-2 rounded-full shadow-2xl overflow-x-auto max-w-[90%]",

            for (index, label) in (0..props.pages.len()).map(|i| (i, props.pages.label(i))) {
                button {
                    class: if index == current {
                        "w-10 h-10 md:w-12 md:h-12 flex items-center justify-center rounded-full
                         font-bold text-xs shrink-0 transition-all duration-300
                         bg-[#FF4F18] text-white shadow-lg scale-110"
                    } else {
                        "w-10 h-10 md:w-12 md:h-12 flex items-center justify-center rounded-full
                         font-bold text-xs shrink-0 transition-all duration-300
                         bg-white/10 text-white/70 hover:bg-white/20 hover:text-white"
                    },
                    onclick: move |_| {
                        position.write().select_from_dock(index);
                    },
                    "{label}"
                }
            }
        }
    }
}
