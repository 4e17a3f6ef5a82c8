//! The three-slot banner layout, shared by the public menu page and
//! the editor's live preview.
//!
//! Rendering goes through [`SlotView`], a plain view model built
//! either from a fetched record (menu page) or from the editing draft
//! (live preview). Both constructors apply the per-slot defaults, so
//! a record missing a whole slot still renders its documented color
//! and placeholder text.

use dioxus::prelude::*;

use carta_core::banner::{AssetDraft, BannerSlot, SlotDraft};
use carta_core::restaurant::{BannerRecord, BannerSet};

/// Display-ready state of one slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotView {
    pub title: String,
    pub subtitle: String,
    /// `None` for slots without a price field.
    pub price: Option<String>,
    pub bg_color: String,
    pub image: Option<String>,
}

impl SlotView {
    /// Build from a stored record, falling back to slot defaults for
    /// anything missing -- including the whole record.
    #[must_use]
    pub fn from_record(slot: BannerSlot, record: Option<&BannerRecord>) -> Self {
        let field = |value: Option<&String>| value.cloned().unwrap_or_default();
        Self {
            title: record.map_or_else(String::new, |r| field(r.title.as_ref())),
            subtitle: record.map_or_else(String::new, |r| field(r.subtitle.as_ref())),
            price: slot
                .has_price()
                .then(|| record.map_or_else(String::new, |r| field(r.price.as_ref()))),
            bg_color: record
                .and_then(|r| r.bg_color.clone())
                .unwrap_or_else(|| slot.default_bg_color().to_owned()),
            image: record.and_then(|r| r.image.clone()),
        }
    }

    /// Build from the editing draft (live preview wins over the
    /// remote image).
    #[must_use]
    pub fn from_draft(draft: &SlotDraft) -> Self {
        Self {
            title: draft.title().to_owned(),
            subtitle: draft.subtitle().to_owned(),
            price: draft.price().map(str::to_owned),
            bg_color: draft.bg_color().to_owned(),
            image: draft.display_image().map(str::to_owned),
        }
    }
}

/// All three slots, display-ready.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerViews {
    pub main: SlotView,
    pub side_top: SlotView,
    pub side_bottom: SlotView,
}

impl BannerViews {
    /// View of a fetched (possibly partial, possibly absent) banner
    /// set.
    #[must_use]
    pub fn from_record(banners: Option<&BannerSet>) -> Self {
        let slot = |s: BannerSlot, record: Option<&BannerRecord>| SlotView::from_record(s, record);
        Self {
            main: slot(BannerSlot::Main, banners.and_then(|b| b.main.as_ref())),
            side_top: slot(BannerSlot::SideTop, banners.and_then(|b| b.side_top.as_ref())),
            side_bottom: slot(
                BannerSlot::SideBottom,
                banners.and_then(|b| b.side_bottom.as_ref()),
            ),
        }
    }

    /// View of the current editing draft.
    #[must_use]
    pub fn from_draft(draft: &AssetDraft) -> Self {
        Self {
            main: SlotView::from_draft(draft.slot(BannerSlot::Main)),
            side_top: SlotView::from_draft(draft.slot(BannerSlot::SideTop)),
            side_bottom: SlotView::from_draft(draft.slot(BannerSlot::SideBottom)),
        }
    }
}

/// Props for the [`BannerDisplay`] component.
#[derive(Props, Clone, PartialEq)]
pub struct BannerDisplayProps {
    views: BannerViews,
}

/// The special-offers banner grid: one large 16:9 banner on the left,
/// two stacked 4:3 cards on the right.
#[component]
pub fn BannerDisplay(props: BannerDisplayProps) -> Element {
    let main = &props.views.main;
    let side_top = &props.views.side_top;
    let side_bottom = &props.views.side_bottom;

    let or_placeholder = |value: &str, placeholder: &str| {
        if value.is_empty() {
            placeholder.to_owned()
        } else {
            value.to_owned()
        }
    };

    rsx! {
        div { class: "grid grid-cols-1 md:grid-cols-3 gap-6 w-full",

            // Main banner
            div {
                class: "col-span-1 md:col-span-2 rounded-[2.5rem] relative overflow-hidden
                        shadow-xl flex items-center min-h-[300px]",
                style: "background-color: {main.bg_color}",

                div { class: "relative z-10 p-8 md:p-12 flex flex-col items-start justify-center w-1/2",
                    span { class: "text-red-600 font-bold text-lg mb-2",
                        {or_placeholder(&main.subtitle, "Subtitle")}
                    }
                    h3 { class: "text-4xl md:text-6xl font-black text-white uppercase leading-[0.9] mb-4 whitespace-pre-line",
                        {or_placeholder(&main.title, "Main Title Here")}
                    }
                }
                div { class: "absolute right-[-5%] top-1/2 -translate-y-1/2 w-[60%] h-[80%]",
                    {slot_image(main.image.as_deref(), "Main banner")}
                }
            }

            // Side column
            div { class: "col-span-1 flex flex-col gap-6",

                div {
                    class: "flex-1 rounded-[2.5rem] relative overflow-hidden shadow-lg p-6
                            flex items-center min-h-[200px]",
                    style: "background-color: {side_top.bg_color}",

                    div { class: "w-1/2 z-10",
                        span { class: "text-white/80 text-xs font-bold uppercase mb-1 block",
                            {or_placeholder(&side_top.subtitle, "Subtitle")}
                        }
                        h4 { class: "text-2xl font-black text-white leading-tight mb-4",
                            {or_placeholder(&side_top.title, "Title")}
                        }
                        span { class: "text-[#FFD700] font-black text-2xl",
                            {or_placeholder(side_top.price.as_deref().unwrap_or(""), "$0.00")}
                        }
                    }
                    div { class: "absolute right-[-20px] bottom-[-20px] w-[60%]",
                        {slot_image(side_top.image.as_deref(), "Top side card")}
                    }
                }

                div {
                    class: "flex-1 rounded-[2.5rem] relative overflow-hidden shadow-lg p-8
                            flex flex-col justify-center min-h-[200px]",
                    style: "background-color: {side_bottom.bg_color}",

                    div { class: "relative z-10",
                        h4 { class: "text-3xl font-black text-[#FFE4C4] leading-tight whitespace-pre-line",
                            {or_placeholder(&side_bottom.title, "Delicious Food")}
                        }
                        span { class: "text-[#FF4F18] font-bold mt-2 block",
                            "{side_bottom.subtitle}"
                        }
                    }
                    div { class: "absolute bottom-[-40px] right-[-20px] w-[60%]",
                        {slot_image(side_bottom.image.as_deref(), "Bottom side card")}
                    }
                }
            }
        }
    }
}

/// An image fill, or the dashed "NO IMAGE" placeholder.
fn slot_image(url: Option<&str>, alt: &str) -> Element {
    match url {
        Some(url) => rsx! {
            img {
                src: "{url}",
                alt: "{alt}",
                class: "w-full h-full object-contain drop-shadow-2xl",
            }
        },
        None => rsx! {
            div {
                class: "w-full h-full min-h-24 flex items-center justify-center text-white/20
                        font-black text-2xl border-2 border-dashed border-white/20 rounded-xl",
                "NO IMAGE"
            }
        },
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn missing_slot_renders_documented_defaults() {
        // A record with no sideTop at all.
        let banners: BannerSet =
            serde_json::from_str(r#"{"main": {"title": "Tacos"}}"#).unwrap();
        let views = BannerViews::from_record(Some(&banners));

        assert_eq!(views.side_top.bg_color, "#D97746");
        assert!(views.side_top.title.is_empty());
        assert_eq!(views.side_top.price.as_deref(), Some(""));
        assert!(views.side_top.image.is_none());
        assert_eq!(views.main.title, "Tacos");
    }

    #[test]
    fn absent_banner_set_renders_all_defaults() {
        let views = BannerViews::from_record(None);
        assert_eq!(views.main.bg_color, "#EAB308");
        assert_eq!(views.side_bottom.bg_color, "#2D1A16");
        assert!(views.main.price.is_none());
    }

    #[test]
    fn draft_view_prefers_the_live_preview() {
        use carta_core::banner::SlotField;
        let mut draft = AssetDraft::new();
        draft.set_field(BannerSlot::Main, SlotField::Title, "From draft");
        let views = BannerViews::from_draft(&draft);
        assert_eq!(views.main.title, "From draft");
        assert_eq!(views.main.bg_color, "#EAB308");
    }
}
