//! Slide navigation.
//!
//! The index wraps in both directions. Rendering marks exactly one panel
//! active, sets the progress width and hides the previous/next buttons at
//! the ends of the deck.

use tracing::trace;

use crate::constants::dom::{NEXT_BUTTON, PREV_BUTTON, PROGRESS_BAR, SLIDE_CLASS};
use crate::document::{Document, Selector};

/// Owns the current slide index of a document.
#[derive(Debug)]
pub struct Navigator<N> {
    slides: Vec<N>,
    index: usize,
    prev: Option<N>,
    next: Option<N>,
    progress: Option<N>,
}

impl<N: Copy + Eq + std::fmt::Debug> Navigator<N> {
    /// Collect the panels and controls of `doc`. Starts at the first slide;
    /// call [`Navigator::render`] once to sync the document.
    pub fn attach<D: Document<Node = N>>(doc: &D) -> Self {
        Self {
            slides: doc.find_all(Selector::Class(SLIDE_CLASS)),
            index: 0,
            prev: doc.find_by_id(PREV_BUTTON),
            next: doc.find_by_id(NEXT_BUTTON),
            progress: doc.find_by_id(PROGRESS_BAR),
        }
    }

    /// Index of the visible slide.
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Number of slides.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Handle of the visible slide.
    pub fn current(&self) -> Option<N> {
        self.slides.get(self.index).copied()
    }

    /// Move to the next slide, wrapping after the last one.
    pub fn advance<D: Document<Node = N>>(&mut self, doc: &mut D) {
        let count = self.slides.len();
        if count == 0 {
            return;
        }
        self.index = (self.index + 1) % count;
        self.render(doc);
    }

    /// Move to the previous slide, wrapping before the first one.
    pub fn retreat<D: Document<Node = N>>(&mut self, doc: &mut D) {
        let count = self.slides.len();
        if count == 0 {
            return;
        }
        self.index = (self.index + count - 1) % count;
        self.render(doc);
    }

    /// Sync panel flags, progress width and button visibility with the index.
    pub fn render<D: Document<Node = N>>(&self, doc: &mut D) {
        for (i, slide) in self.slides.iter().enumerate() {
            doc.set_active(*slide, i == self.index);
        }

        let count = self.slides.len();
        if let Some(bar) = self.progress {
            doc.set_progress(bar, progress_percent(self.index, count));
        }
        if let Some(prev) = self.prev {
            doc.set_visible(prev, count > 0 && self.index != 0);
        }
        if let Some(next) = self.next {
            doc.set_visible(next, count > 0 && self.index != count - 1);
        }
        trace!(index = self.index, count, "rendered slide");
    }
}

/// Progress bar width for slide `index` of `count`, in percent.
#[allow(clippy::cast_precision_loss)]
pub fn progress_percent(index: usize, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    (index + 1) as f64 / count as f64 * 100.0
}
