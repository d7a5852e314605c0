//! View controller.
//!
//! Owns all mutable view state (slide index, language, drag in progress,
//! pending timers) and exposes the hooks input adapters call. Every hook
//! runs to completion against the document it is handed.

use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::constants::dom::{LOADER, SWIPE_HINT};
use crate::document::Document;
use crate::gesture::SwipeTracker;
use crate::navigator::Navigator;
use crate::prompt::PromptForm;
use crate::timers::{TimerAction, Timers};
use crate::translator::Translator;
use crate::types::{Language, NavCommand};

/// Startup behavior of a [`ViewController`].
#[derive(Debug, Clone, Copy)]
pub struct ViewSettings {
    /// Language applied right after mounting.
    pub start_language: Language,
    /// Delay before the loading indicator is removed.
    pub loader_delay: Duration,
    /// Delay before the swipe hint is hidden.
    pub hint_delay: Duration,
}

impl Default for ViewSettings {
    fn default() -> Self {
        use crate::constants::timing::{DEFAULT_HINT_MS, DEFAULT_LOADER_MS};
        Self {
            start_language: Language::English,
            loader_delay: Duration::from_millis(DEFAULT_LOADER_MS),
            hint_delay: Duration::from_millis(DEFAULT_HINT_MS),
        }
    }
}

/// Navigator, translator and prompt form bound to one document.
#[derive(Debug)]
pub struct ViewController<N> {
    navigator: Navigator<N>,
    translator: Translator<N>,
    prompt: PromptForm<N>,
    swipe: SwipeTracker,
    timers: Timers,
}

impl<N: Copy + Eq + std::fmt::Debug> ViewController<N> {
    /// Bind to `doc`, render the first slide and schedule the startup timers.
    pub fn mount<D: Document<Node = N>>(doc: &mut D, settings: &ViewSettings, now: Instant) -> Self {
        let mut controller = Self {
            navigator: Navigator::attach(doc),
            translator: Translator::attach(doc),
            prompt: PromptForm::attach(doc),
            swipe: SwipeTracker::new(),
            timers: Timers::new(),
        };
        controller.navigator.render(doc);
        controller.prompt.refresh(doc);
        if settings.start_language != controller.translator.language() {
            controller.translator.toggle(doc);
        }
        controller.timers.schedule(now, settings.loader_delay, TimerAction::RemoveLoader);
        controller.timers.schedule(now, settings.hint_delay, TimerAction::HideSwipeHint);
        info!(
            slides = controller.navigator.slide_count(),
            language = %controller.translator.language(),
            "view mounted"
        );
        controller
    }

    /// Index of the visible slide.
    pub const fn slide_index(&self) -> usize {
        self.navigator.index()
    }

    /// Number of slides.
    pub fn slide_count(&self) -> usize {
        self.navigator.slide_count()
    }

    /// Handle of the visible slide.
    pub fn current_slide(&self) -> Option<N> {
        self.navigator.current()
    }

    /// Current document language.
    pub const fn language(&self) -> Language {
        self.translator.language()
    }

    /// Next-button or forward key.
    pub fn on_advance<D: Document<Node = N>>(&mut self, doc: &mut D) {
        self.navigator.advance(doc);
        debug!(index = self.navigator.index(), "advanced");
    }

    /// Previous-button or backward key.
    pub fn on_retreat<D: Document<Node = N>>(&mut self, doc: &mut D) {
        self.navigator.retreat(doc);
        debug!(index = self.navigator.index(), "retreated");
    }

    /// Translate button or key.
    pub fn on_toggle_language<D: Document<Node = N>>(&mut self, doc: &mut D) {
        self.translator.toggle(doc);
    }

    /// Any prompt-builder select changed.
    pub fn on_prompt_change<D: Document<Node = N>>(&mut self, doc: &mut D) {
        self.prompt.refresh(doc);
    }

    /// Route a command to its hook.
    pub fn dispatch<D: Document<Node = N>>(&mut self, command: NavCommand, doc: &mut D) {
        match command {
            NavCommand::Advance => self.on_advance(doc),
            NavCommand::Retreat => self.on_retreat(doc),
            NavCommand::ToggleLanguage => self.on_toggle_language(doc),
        }
    }

    /// Pointer pressed at gesture coordinates `(x, y)`.
    pub fn on_pointer_down(&mut self, x: f64, y: f64) {
        self.swipe.begin(x, y);
    }

    /// Pointer dragged. Returns whether default scrolling should be suppressed.
    pub fn on_pointer_move(&self, x: f64, y: f64) -> bool {
        self.swipe.motion(x, y)
    }

    /// Pointer released. Returns the command the swipe triggered, if any.
    pub fn on_pointer_up<D: Document<Node = N>>(&mut self, x: f64, y: f64, doc: &mut D) -> Option<NavCommand> {
        let command = self.swipe.end(x, y)?;
        self.dispatch(command, doc);
        Some(command)
    }

    /// Apply timers that have come due.
    pub fn tick<D: Document<Node = N>>(&mut self, doc: &mut D, now: Instant) {
        for action in self.timers.fire_due(now) {
            debug!(?action, "timer fired");
            match action {
                TimerAction::RemoveLoader => {
                    if let Some(loader) = doc.find_by_id(LOADER) {
                        doc.remove(loader);
                    }
                }
                TimerAction::HideSwipeHint => {
                    if let Some(hint) = doc.find_by_id(SWIPE_HINT) {
                        doc.set_visible(hint, false);
                    }
                }
            }
        }
    }
}
