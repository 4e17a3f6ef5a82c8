//! Page set assembly and the two-surface page position reducer.
//!
//! The menu book is shown by two independently rendered surfaces: the
//! swipeable carousel and the button dock. [`PagePosition`] is the one
//! shared truth both render from, with transition rules that make the
//! carousel/dock feedback loop structurally impossible: a carousel
//! settle never produces a carousel command, and a dock selection
//! commands the carousel only when the carousel's *last report*
//! disagrees with the requested index.

use crate::restaurant::MenuBook;

/// The ordered image URLs of one menu book.
///
/// Built by concatenating the optional cover, the body pages in their
/// given order, and the optional back cover. Immutable once computed;
/// rebuild it when the source restaurant record changes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageSet(Vec<String>);

impl PageSet {
    /// Assemble the page sequence from a restaurant's book record.
    #[must_use]
    pub fn from_book(book: &MenuBook) -> Self {
        let mut urls = Vec::with_capacity(book.pages.len() + 2);
        if let Some(cover) = &book.cover_url {
            urls.push(cover.clone());
        }
        urls.extend(book.pages.iter().cloned());
        if let Some(back) = &book.back_url {
            urls.push(back.clone());
        }
        Self(urls)
    }

    /// Number of pages.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the book has no pages at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The page URLs in display order.
    #[must_use]
    pub fn urls(&self) -> &[String] {
        &self.0
    }

    /// Dock label for a page: "Cover" for the first page, 1-based
    /// numbers for the rest.
    #[must_use]
    pub fn label(&self, index: usize) -> String {
        if index == 0 {
            "Cover".to_owned()
        } else {
            (index + 1).to_string()
        }
    }
}

/// An instruction for the carousel to animate to a slide.
///
/// `seq` distinguishes repeated commands to the same index so the
/// consumer can observe each one exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideCommand {
    pub seq: u64,
    pub index: usize,
}

/// Shared page state coordinated between the carousel and the dock.
///
/// Owned by the menu view for as long as it is mounted. All mutation
/// goes through the three transition methods below; there is exactly
/// one writer per event, so updates are serialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagePosition {
    current: usize,
    carousel: usize,
    count: usize,
    updates: u64,
    command: Option<SlideCommand>,
    command_seq: u64,
}

impl PagePosition {
    /// Initial state: index 0 (the cover), carousel assumed at 0.
    #[must_use]
    pub const fn new(count: usize) -> Self {
        Self {
            current: 0,
            carousel: 0,
            count,
            updates: 0,
            command: None,
            command_seq: 0,
        }
    }

    /// The shared current page index.
    #[must_use]
    pub const fn current(&self) -> usize {
        self.current
    }

    /// Number of pages the position ranges over.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Observable update counter; bumped once per effective
    /// [`set_page`](Self::set_page).
    #[must_use]
    pub const fn updates(&self) -> u64 {
        self.updates
    }

    /// Sequence number of the most recent slide command. Observers can
    /// subscribe to this to learn a new command was enqueued.
    #[must_use]
    pub const fn command_seq(&self) -> u64 {
        self.command_seq
    }

    /// Whether a slide command is waiting to be consumed.
    #[must_use]
    pub const fn has_command(&self) -> bool {
        self.command.is_some()
    }

    /// The page set was recomputed: adopt the new count and clamp the
    /// indices into range. A zero count returns to the initial state.
    pub fn set_count(&mut self, count: usize) {
        self.count = count;
        if count == 0 {
            self.current = 0;
            self.carousel = 0;
            self.command = None;
            return;
        }
        self.current = self.current.min(count - 1);
        self.carousel = self.carousel.min(count - 1);
    }

    /// Set the shared page index.
    ///
    /// Clamps into `[0, count)`. A no-op -- including any call while
    /// the page set is empty -- produces no observable update.
    /// Returns whether the index changed.
    pub fn set_page(&mut self, index: usize) -> bool {
        let Some(clamped) = self.clamp(index) else {
            return false;
        };
        if clamped == self.current {
            return false;
        }
        self.current = clamped;
        self.updates += 1;
        true
    }

    /// The carousel's gesture or autoplay settled on `index`.
    ///
    /// The carousel is its own source of truth for where it landed, so
    /// the settle updates the shared index *from* the carousel and
    /// never enqueues a command back at it.
    pub fn settle_from_carousel(&mut self, index: usize) -> bool {
        if let Some(clamped) = self.clamp(index) {
            self.carousel = clamped;
        }
        self.set_page(index)
    }

    /// The dock's button for `index` was pressed.
    ///
    /// Updates the shared index, and enqueues a carousel command iff
    /// the carousel's last-reported slide differs from the target --
    /// compared against the last report, not the shared state, so a
    /// value the carousel itself just produced is never echoed back.
    pub fn select_from_dock(&mut self, index: usize) -> bool {
        let changed = self.set_page(index);
        if let Some(clamped) = self.clamp(index) {
            if clamped != self.carousel {
                self.command_seq += 1;
                self.command = Some(SlideCommand {
                    seq: self.command_seq,
                    index: clamped,
                });
            }
        }
        changed
    }

    /// Consume the pending slide command, if any.
    ///
    /// The carousel calls this when it observes a new
    /// [`command_seq`](Self::command_seq); each command is delivered
    /// exactly once.
    pub fn take_command(&mut self) -> Option<SlideCommand> {
        self.command.take()
    }

    const fn clamp(&self, index: usize) -> Option<usize> {
        if self.count == 0 {
            return None;
        }
        if index >= self.count {
            Some(self.count - 1)
        } else {
            Some(index)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::restaurant::MenuBook;

    fn book(cover: Option<&str>, pages: &[&str], back: Option<&str>) -> MenuBook {
        MenuBook {
            cover_url: cover.map(str::to_owned),
            back_url: back.map(str::to_owned),
            pages: pages.iter().map(|p| (*p).to_owned()).collect(),
        }
    }

    #[test]
    fn page_set_orders_cover_body_back() {
        let set = PageSet::from_book(&book(Some("c"), &["p1", "p2"], Some("b")));
        assert_eq!(set.urls(), ["c", "p1", "p2", "b"]);
    }

    #[test]
    fn page_set_tolerates_missing_covers() {
        assert_eq!(
            PageSet::from_book(&book(None, &["p1"], Some("b"))).urls(),
            ["p1", "b"]
        );
        assert_eq!(
            PageSet::from_book(&book(Some("c"), &[], None)).urls(),
            ["c"]
        );
        assert!(PageSet::from_book(&book(None, &[], None)).is_empty());
    }

    #[test]
    fn dock_labels_match_the_original_scheme() {
        let set = PageSet::from_book(&book(Some("c"), &["p1", "p2"], Some("b")));
        assert_eq!(set.label(0), "Cover");
        assert_eq!(set.label(1), "2");
        assert_eq!(set.label(3), "4");
    }

    #[test]
    fn set_page_clamps_and_is_idempotent() {
        let mut pos = PagePosition::new(4);
        assert!(pos.set_page(2));
        assert_eq!(pos.current(), 2);
        assert_eq!(pos.updates(), 1);

        // Second identical call: no observable update.
        assert!(!pos.set_page(2));
        assert_eq!(pos.updates(), 1);

        // Out of range clamps to the last page.
        assert!(pos.set_page(99));
        assert_eq!(pos.current(), 3);
    }

    #[test]
    fn empty_page_set_makes_every_mutation_a_no_op() {
        let mut pos = PagePosition::new(0);
        assert!(!pos.set_page(1));
        assert!(!pos.settle_from_carousel(1));
        assert!(!pos.select_from_dock(1));
        assert!(!pos.has_command());
        assert_eq!(pos.updates(), 0);
    }

    #[test]
    fn carousel_settle_never_commands_the_carousel() {
        let mut pos = PagePosition::new(4);
        assert!(pos.settle_from_carousel(3));
        assert_eq!(pos.current(), 3);
        assert!(!pos.has_command());
    }

    #[test]
    fn dock_select_commands_a_lagging_carousel() {
        // End-to-end: [cover, p1, p2, back], carousel last reported 0.
        let mut pos = PagePosition::new(4);
        assert!(pos.select_from_dock(2));
        assert_eq!(pos.current(), 2);
        let cmd = pos.take_command().unwrap();
        assert_eq!(cmd.index, 2);
        // Delivered exactly once.
        assert!(pos.take_command().is_none());
    }

    #[test]
    fn dock_select_skips_the_command_when_the_carousel_is_already_there() {
        let mut pos = PagePosition::new(4);
        // Carousel swiped to 2 on its own.
        assert!(pos.settle_from_carousel(2));
        // Dock re-selects the same slide: shared state is already 2 and
        // the carousel already reported 2, so nothing moves.
        assert!(!pos.select_from_dock(2));
        assert!(!pos.has_command());
    }

    #[test]
    fn alternating_surfaces_converge_without_looping() {
        let mut pos = PagePosition::new(5);
        for (from_dock, index) in [(true, 4), (false, 1), (true, 3), (true, 0), (false, 2)] {
            if from_dock {
                pos.select_from_dock(index);
                // At most one corrective command per external event.
                if let Some(cmd) = pos.take_command() {
                    // The carousel obeys and settles; that settle must
                    // not produce a follow-up command.
                    pos.settle_from_carousel(cmd.index);
                }
            } else {
                pos.settle_from_carousel(index);
            }
            assert!(!pos.has_command(), "loop after event ({from_dock}, {index})");
            assert_eq!(pos.current(), index);
        }
    }

    #[test]
    fn recomputed_page_set_clamps_the_position() {
        let mut pos = PagePosition::new(6);
        pos.set_page(5);
        pos.set_count(3);
        assert_eq!(pos.current(), 2);
        pos.set_count(0);
        assert_eq!(pos.current(), 0);
        assert!(!pos.set_page(1));
    }
}
