//! Banner slots and the editing-session draft store.
//!
//! [`AssetDraft`] is the single mutable source of truth for the three
//! banner slots while the operator edits one restaurant. Server state
//! is merged over built-in per-slot defaults, so a partial record
//! never produces a blank visual state, and local edits -- text,
//! colors, cropped images -- accumulate here until packaged for
//! submission.

use crate::crop::AspectRatio;
use crate::preview::PreviewHandle;
use crate::restaurant::{BannerRecord, BannerSet};

/// One of the three fixed banner positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BannerSlot {
    /// The large left banner (16:9).
    Main,
    /// The upper right card (4:3), the only slot with a price.
    SideTop,
    /// The lower right card (4:3).
    SideBottom,
}

impl BannerSlot {
    /// All slots in display order.
    pub const ALL: [Self; 3] = [Self::Main, Self::SideTop, Self::SideBottom];

    /// The slot's fixed target aspect ratio.
    #[must_use]
    pub const fn aspect(self) -> AspectRatio {
        match self {
            Self::Main => AspectRatio::WIDE,
            Self::SideTop | Self::SideBottom => AspectRatio::CARD,
        }
    }

    /// The slot's built-in background color.
    #[must_use]
    pub const fn default_bg_color(self) -> &'static str {
        match self {
            Self::Main => "#EAB308",
            Self::SideTop => "#D97746",
            Self::SideBottom => "#2D1A16",
        }
    }

    /// Whether the slot carries a price field.
    #[must_use]
    pub const fn has_price(self) -> bool {
        matches!(self, Self::SideTop)
    }

    /// Form heading for the editor.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Main => "Main Banner",
            Self::SideTop => "Top Side Card",
            Self::SideBottom => "Bottom Side Card",
        }
    }

    /// Multipart field name for the slot's image upload.
    #[must_use]
    pub const fn upload_field(self) -> &'static str {
        match self {
            Self::Main => "mainImage",
            Self::SideTop => "sideTopImage",
            Self::SideBottom => "sideBottomImage",
        }
    }

    /// Filename attached to the slot's image upload.
    #[must_use]
    pub const fn upload_filename(self) -> &'static str {
        match self {
            Self::Main => "main.jpg",
            Self::SideTop => "top.jpg",
            Self::SideBottom => "bottom.jpg",
        }
    }
}

/// An editable text or color field of a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotField {
    Title,
    Subtitle,
    Price,
    BgColor,
}

/// The current edit state of one slot.
#[derive(Debug)]
pub struct SlotDraft {
    title: String,
    subtitle: String,
    price: Option<String>,
    bg_color: String,
    remote_url: Option<String>,
    preview: Option<PreviewHandle>,
    pending: Option<Vec<u8>>,
}

impl SlotDraft {
    fn new(slot: BannerSlot) -> Self {
        Self {
            title: String::new(),
            subtitle: String::new(),
            price: slot.has_price().then(String::new),
            bg_color: slot.default_bg_color().to_owned(),
            remote_url: None,
            preview: None,
            pending: None,
        }
    }

    /// Merge a server record over the slot defaults.
    fn from_record(slot: BannerSlot, record: Option<&BannerRecord>) -> Self {
        let mut draft = Self::new(slot);
        let Some(record) = record else {
            return draft;
        };
        if let Some(title) = &record.title {
            draft.title.clone_from(title);
        }
        if let Some(subtitle) = &record.subtitle {
            draft.subtitle.clone_from(subtitle);
        }
        if slot.has_price() {
            if let Some(price) = &record.price {
                draft.price = Some(price.clone());
            }
        }
        if let Some(bg) = &record.bg_color {
            draft.bg_color.clone_from(bg);
        }
        draft.remote_url.clone_from(&record.image);
        draft
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn subtitle(&self) -> &str {
        &self.subtitle
    }

    /// `None` for slots without a price field.
    #[must_use]
    pub fn price(&self) -> Option<&str> {
        self.price.as_deref()
    }

    #[must_use]
    pub fn bg_color(&self) -> &str {
        &self.bg_color
    }

    /// The server-side image URL, kept as a fallback record even when
    /// a local preview supersedes it for display.
    #[must_use]
    pub fn remote_url(&self) -> Option<&str> {
        self.remote_url.as_deref()
    }

    /// The URL to display: the live preview when one exists, else the
    /// remote URL.
    #[must_use]
    pub fn display_image(&self) -> Option<&str> {
        self.preview
            .as_ref()
            .map(PreviewHandle::url)
            .or(self.remote_url.as_deref())
    }

    /// Whether a replacement image awaits submission.
    #[must_use]
    pub const fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// The encoded bytes awaiting submission, if any.
    #[must_use]
    pub fn pending(&self) -> Option<&[u8]> {
        self.pending.as_deref()
    }
}

/// The complete, locally-held, not-yet-submitted state of all three
/// slots for one editing session.
#[derive(Debug)]
pub struct AssetDraft {
    main: SlotDraft,
    side_top: SlotDraft,
    side_bottom: SlotDraft,
}

impl Default for AssetDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl AssetDraft {
    /// A draft with every slot at its built-in defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            main: SlotDraft::new(BannerSlot::Main),
            side_top: SlotDraft::new(BannerSlot::SideTop),
            side_bottom: SlotDraft::new(BannerSlot::SideBottom),
        }
    }

    /// Replace the draft with server state merged over the defaults.
    ///
    /// Switching the subject of editing always discards unsent local
    /// edits: pending blobs are cleared and live previews dropped
    /// (which revokes their URLs).
    pub fn load_from_server(&mut self, banners: &BannerSet) {
        self.main = SlotDraft::from_record(BannerSlot::Main, banners.main.as_ref());
        self.side_top = SlotDraft::from_record(BannerSlot::SideTop, banners.side_top.as_ref());
        self.side_bottom =
            SlotDraft::from_record(BannerSlot::SideBottom, banners.side_bottom.as_ref());
    }

    /// Update a text or color field. A [`SlotField::Price`] write to a
    /// priceless slot is ignored.
    pub fn set_field(&mut self, slot: BannerSlot, field: SlotField, value: impl Into<String>) {
        let draft = self.slot_mut(slot);
        match field {
            SlotField::Title => draft.title = value.into(),
            SlotField::Subtitle => draft.subtitle = value.into(),
            SlotField::Price => {
                if draft.price.is_some() {
                    draft.price = Some(value.into());
                }
            }
            SlotField::BgColor => draft.bg_color = value.into(),
        }
    }

    /// Record a freshly cropped asset for `slot`.
    ///
    /// The preview handle replaces any previous one (revoking it) and
    /// `bytes` become the slot's pending submission payload. Text
    /// fields and the remote URL are untouched.
    pub fn apply_cropped_asset(&mut self, slot: BannerSlot, preview: PreviewHandle, bytes: Vec<u8>) {
        let draft = self.slot_mut(slot);
        draft.preview = Some(preview);
        draft.pending = Some(bytes);
    }

    /// Read access to one slot.
    #[must_use]
    pub const fn slot(&self, slot: BannerSlot) -> &SlotDraft {
        match slot {
            BannerSlot::Main => &self.main,
            BannerSlot::SideTop => &self.side_top,
            BannerSlot::SideBottom => &self.side_bottom,
        }
    }

    const fn slot_mut(&mut self, slot: BannerSlot) -> &mut SlotDraft {
        match slot {
            BannerSlot::Main => &mut self.main,
            BannerSlot::SideTop => &mut self.side_top,
            BannerSlot::SideBottom => &mut self.side_bottom,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::preview::tests::CountingUrls;
    use crate::preview::BlobUrls;
    use crate::restaurant::BannerSet;

    fn handle(urls: &Rc<dyn BlobUrls>) -> PreviewHandle {
        PreviewHandle::create(urls, &[0xD8], "image/jpeg").unwrap()
    }

    #[test]
    fn fresh_draft_uses_slot_defaults() {
        let draft = AssetDraft::new();
        for slot in BannerSlot::ALL {
            let s = draft.slot(slot);
            assert_eq!(s.bg_color(), slot.default_bg_color());
            assert!(s.title().is_empty());
            assert!(s.display_image().is_none());
            assert!(!s.has_pending());
        }
        assert_eq!(draft.slot(BannerSlot::SideTop).price(), Some(""));
        assert_eq!(draft.slot(BannerSlot::Main).price(), None);
    }

    #[test]
    fn partial_server_record_merges_over_defaults() {
        // sideTop missing entirely: its documented default color and
        // empty text must apply, never an error.
        let banners: BannerSet = serde_json::from_str(
            r#"{"main": {"title": "Tacos", "image": "https://cdn/main.jpg"}}"#,
        )
        .unwrap();
        let mut draft = AssetDraft::new();
        draft.load_from_server(&banners);

        assert_eq!(draft.slot(BannerSlot::Main).title(), "Tacos");
        assert_eq!(
            draft.slot(BannerSlot::Main).bg_color(),
            BannerSlot::Main.default_bg_color()
        );
        let side_top = draft.slot(BannerSlot::SideTop);
        assert_eq!(side_top.bg_color(), "#D97746");
        assert!(side_top.title().is_empty());
        assert_eq!(side_top.price(), Some(""));
    }

    #[test]
    fn price_writes_only_apply_to_the_price_bearing_slot() {
        let mut draft = AssetDraft::new();
        draft.set_field(BannerSlot::SideTop, SlotField::Price, "$12.50");
        draft.set_field(BannerSlot::Main, SlotField::Price, "$99");
        assert_eq!(draft.slot(BannerSlot::SideTop).price(), Some("$12.50"));
        assert_eq!(draft.slot(BannerSlot::Main).price(), None);
    }

    #[test]
    fn preview_supersedes_remote_url_without_deleting_it() {
        let counting = Rc::new(CountingUrls::default());
        let urls: Rc<dyn BlobUrls> = Rc::<CountingUrls>::clone(&counting);

        let banners: BannerSet =
            serde_json::from_str(r#"{"main": {"image": "https://cdn/old.jpg"}}"#).unwrap();
        let mut draft = AssetDraft::new();
        draft.load_from_server(&banners);
        assert_eq!(
            draft.slot(BannerSlot::Main).display_image(),
            Some("https://cdn/old.jpg")
        );

        draft.apply_cropped_asset(BannerSlot::Main, handle(&urls), vec![1, 2]);
        let slot = draft.slot(BannerSlot::Main);
        assert_eq!(slot.display_image(), Some("blob:image/jpeg/0"));
        assert_eq!(slot.remote_url(), Some("https://cdn/old.jpg"));
        assert_eq!(slot.pending(), Some([1, 2].as_slice()));
    }

    #[test]
    fn reapplying_a_crop_revokes_the_superseded_preview() {
        let counting = Rc::new(CountingUrls::default());
        let urls: Rc<dyn BlobUrls> = Rc::<CountingUrls>::clone(&counting);

        let mut draft = AssetDraft::new();
        draft.apply_cropped_asset(BannerSlot::SideBottom, handle(&urls), vec![1]);
        draft.apply_cropped_asset(BannerSlot::SideBottom, handle(&urls), vec![2]);
        assert_eq!(counting.revoked.get(), 1);
        assert_eq!(draft.slot(BannerSlot::SideBottom).pending(), Some([2].as_slice()));

        drop(draft);
        assert_eq!(counting.created.get(), counting.revoked.get());
    }

    #[test]
    fn switching_subjects_discards_pending_edits() {
        let counting = Rc::new(CountingUrls::default());
        let urls: Rc<dyn BlobUrls> = Rc::<CountingUrls>::clone(&counting);

        let mut draft = AssetDraft::new();
        draft.set_field(BannerSlot::Main, SlotField::Title, "Old subject");
        draft.apply_cropped_asset(BannerSlot::Main, handle(&urls), vec![9]);

        // A different restaurant is selected.
        draft.load_from_server(&BannerSet::default());

        assert!(!draft.slot(BannerSlot::Main).has_pending());
        assert!(draft.slot(BannerSlot::Main).title().is_empty());
        // The orphaned preview was released, not leaked.
        assert_eq!(counting.created.get(), 1);
        assert_eq!(counting.revoked.get(), 1);
    }
}
