//! Terminal application state.
//!
//! Glues crossterm input to the view controller and keeps the bits of state
//! that only the terminal front end needs (mode, focused prompt field,
//! clickable areas of the last frame).

use std::path::Path;
use std::time::Instant;

use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tracing::{debug, info, trace};

use crate::config::Config;
use crate::constants::dom::{PROMPT_OUTPUT, VALUE_ATTR};
use crate::controller::ViewController;
use crate::deck::Deck;
use crate::document::{Document, MemoryDocument, NodeId};
use crate::error::Result;
use crate::input::{dispatch_key, AppMode, InputContext, InputResult};
use crate::preload::{preload_images, PreloadReport};
use crate::prompt::PromptField;
use crate::types::NavCommand;

/// Screen areas that act like buttons, recorded while drawing.
#[derive(Debug, Default, Clone, Copy)]
pub struct HitAreas {
    /// Previous-slide button.
    pub prev: Option<Rect>,
    /// Next-slide button.
    pub next: Option<Rect>,
    /// Language toggle button.
    pub translate: Option<Rect>,
}

impl HitAreas {
    fn command_at(&self, column: u16, row: u16) -> Option<NavCommand> {
        let inside = |r: &Rect| {
            column >= r.x && column < r.x + r.width && row >= r.y && row < r.y + r.height
        };
        if self.prev.as_ref().is_some_and(inside) {
            Some(NavCommand::Retreat)
        } else if self.next.as_ref().is_some_and(inside) {
            Some(NavCommand::Advance)
        } else if self.translate.as_ref().is_some_and(inside) {
            Some(NavCommand::ToggleLanguage)
        } else {
            None
        }
    }
}

/// The running viewer.
pub struct App {
    /// Deck markup, mutated by the controller.
    pub doc: MemoryDocument,
    /// Navigation, translation and prompt state.
    pub controller: ViewController<NodeId>,
    /// Loaded configuration.
    pub config: Config,
    /// Current input mode.
    pub mode: AppMode,
    /// Index into [`PromptField::ALL`] of the focused select.
    pub prompt_field: usize,
    /// Result of the startup image check.
    pub preload: PreloadReport,
    /// Clickable areas of the last frame.
    pub hit_areas: HitAreas,
    should_quit: bool,
    bell_pending: bool,
}

impl App {
    /// Build the document for `deck` and mount the controller on it.
    pub fn new(config: Config, deck: &Deck, deck_dir: &Path, now: Instant) -> Result<Self> {
        let mut doc = deck.build()?;
        let preload = preload_images(&mut doc, deck_dir);
        if !preload.missing.is_empty() {
            info!("{} image(s) missing: {}", preload.missing.len(), preload.missing.join(", "));
        }
        let controller = ViewController::mount(&mut doc, &config.view_settings(), now);
        Ok(Self {
            doc,
            controller,
            config,
            mode: AppMode::Slides,
            prompt_field: 0,
            preload,
            hit_areas: HitAreas::default(),
            should_quit: false,
            bell_pending: false,
        })
    }

    /// Whether the main loop should exit.
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Take a pending bell request.
    pub fn take_bell(&mut self) -> bool {
        std::mem::take(&mut self.bell_pending)
    }

    /// Whether the visible slide hosts the prompt builder.
    pub fn prompt_on_current_slide(&self) -> bool {
        match (self.controller.current_slide(), self.doc.find_by_id(PROMPT_OUTPUT)) {
            (Some(slide), Some(output)) => self.doc.is_within(slide, output),
            _ => false,
        }
    }

    /// Fire due timers.
    pub fn tick(&mut self, now: Instant) {
        self.controller.tick(&mut self.doc, now);
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctx = InputContext {
            mode: self.mode,
            prompt_on_slide: self.prompt_on_current_slide(),
        };
        match dispatch_key(key, &ctx) {
            InputResult::Quit => self.should_quit = true,
            InputResult::Command(command) => {
                self.controller.dispatch(command, &mut self.doc);
                if !self.prompt_on_current_slide() {
                    self.mode = AppMode::Slides;
                }
            }
            InputResult::ModeChange(mode) => {
                debug!(?mode, "mode change");
                self.mode = mode;
            }
            InputResult::FocusField(delta) => {
                self.prompt_field = wrap_offset(self.prompt_field, delta, PromptField::ALL.len());
            }
            InputResult::CycleOption(delta) => self.cycle_option(delta),
            InputResult::Consumed | InputResult::Ignored => {}
        }
    }

    /// Handle a mouse event. A left-button drag is a swipe; a short click on
    /// a button area presses it.
    #[allow(clippy::cast_lossless)]
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let units = self.config.units_per_cell;
        // Terminal cells are roughly twice as tall as wide.
        let x = f64::from(mouse.column) * units;
        let y = f64::from(mouse.row) * units * 2.0;
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.controller.on_pointer_down(x, y),
            MouseEventKind::Drag(MouseButton::Left) => {
                let suppress = self.controller.on_pointer_move(x, y);
                trace!(suppress, "pointer move");
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if let Some(command) = self.controller.on_pointer_up(x, y, &mut self.doc) {
                    debug!(?command, "swipe");
                    self.bell_pending = self.config.haptic_feedback;
                } else if let Some(command) = self.hit_areas.command_at(mouse.column, mouse.row) {
                    self.controller.dispatch(command, &mut self.doc);
                }
                if !self.prompt_on_current_slide() {
                    self.mode = AppMode::Slides;
                }
            }
            _ => {}
        }
    }

    /// Move the focused select `delta` options along, wrapping around.
    fn cycle_option(&mut self, delta: isize) {
        let field = PromptField::ALL[self.prompt_field % PromptField::ALL.len()];
        let Some(select) = self.doc.find_by_id(field.select_id()) else {
            return;
        };
        let values: Vec<String> = self
            .doc
            .child_elements(select)
            .into_iter()
            .filter_map(|option| self.doc.attribute(option, VALUE_ATTR).map(str::to_owned))
            .collect();
        if values.is_empty() {
            return;
        }
        let current = self.doc.attribute(select, VALUE_ATTR).unwrap_or_default();
        let position = values.iter().position(|v| v == current).unwrap_or(0);
        let value = values[wrap_offset(position, delta, values.len())].clone();
        self.doc.set_attribute(select, VALUE_ATTR, &value);
        self.controller.on_prompt_change(&mut self.doc);
    }
}

fn wrap_offset(index: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let len = len as isize;
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    let wrapped = (index as isize + delta).rem_euclid(len) as usize;
    wrapped
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    const DECK: &str = r#"{
        "title": { "en": "Demo" },
        "slides": [
            { "blocks": [ { "kind": "heading", "en": "One", "zh": "一" } ] },
            { "blocks": [ { "kind": "prompt_builder" } ] },
            { "blocks": [ { "kind": "heading", "en": "Three" } ] }
        ],
        "prompt": { "style": ["a pencil sketch", "an oil painting"] }
    }"#;

    fn app() -> App {
        let deck = Deck::from_json(DECK).unwrap();
        App::new(Config::default(), &deck, Path::new("."), Instant::now()).unwrap()
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::empty()));
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent { kind, column, row, modifiers: KeyModifiers::empty() }
    }

    #[test]
    fn keys_drive_navigation() {
        let mut app = app();
        press(&mut app, KeyCode::Right);
        assert_eq!(app.controller.slide_index(), 1);
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.controller.slide_index(), 2);
    }

    #[test]
    fn prompt_builder_cycles_options() {
        let mut app = app();
        press(&mut app, KeyCode::Right);
        assert!(app.prompt_on_current_slide());
        press(&mut app, KeyCode::Char('p'));
        assert_eq!(app.mode, AppMode::PromptBuilder);

        press(&mut app, KeyCode::Right);
        let output = app.doc.find_by_id(PROMPT_OUTPUT).unwrap();
        assert_eq!(app.doc.text(output), "A a pencil sketch.");

        press(&mut app, KeyCode::Left);
        assert_eq!(app.doc.text(output), crate::prompt::PLACEHOLDER);

        // Wraps backwards from the blank option to the last one.
        press(&mut app, KeyCode::Left);
        assert_eq!(app.doc.text(output), "A an oil painting.");
    }

    #[test]
    fn leaving_the_prompt_slide_resets_mode() {
        let mut app = app();
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Char('p'));
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.mode, AppMode::Slides);
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.controller.slide_index(), 2);
    }

    #[test]
    fn left_drag_is_a_swipe() {
        let mut app = app();
        app.config.haptic_feedback = true;
        // 8 columns at 8 units per column is 64 units.
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 40, 10));
        app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 36, 10));
        app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 32, 10));
        assert_eq!(app.controller.slide_index(), 1);
        assert!(app.take_bell());
        assert!(!app.take_bell());
    }

    #[test]
    fn short_drag_does_not_navigate() {
        let mut app = app();
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 40, 10));
        app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 36, 10));
        assert_eq!(app.controller.slide_index(), 0);
    }

    #[test]
    fn clicking_a_button_area_presses_it() {
        let mut app = app();
        app.hit_areas.next = Some(Rect::new(60, 20, 12, 3));
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 65, 21));
        app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 65, 21));
        assert_eq!(app.controller.slide_index(), 1);
    }

    #[test]
    fn t_translates_the_title() {
        let mut app = app();
        press(&mut app, KeyCode::Char('t'));
        let h2 = app.doc.find_all(crate::document::Selector::Tags(&["h2"]))[0];
        assert_eq!(app.doc.text(h2), "一");
    }

    #[test]
    fn q_quits() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit());
    }

    #[test]
    fn wrap_offset_wraps_both_ways() {
        assert_eq!(wrap_offset(0, -1, 4), 3);
        assert_eq!(wrap_offset(3, 1, 4), 0);
        assert_eq!(wrap_offset(1, 0, 0), 0);
    }
}
