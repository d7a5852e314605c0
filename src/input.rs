//! Input handling abstractions.
//!
//! This module provides traits and types for handling keyboard input
//! in a modular way, allowing mode-specific handlers to be tested independently.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::types::NavCommand;

/// Result of processing an input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputResult {
    /// The input was consumed and handled.
    Consumed,
    /// The input was ignored (not applicable to this handler).
    Ignored,
    /// The application should quit.
    Quit,
    /// The mode should change.
    ModeChange(AppMode),
    /// A navigation or language command.
    Command(NavCommand),
    /// Move the prompt-builder field focus by the given offset.
    FocusField(isize),
    /// Move the focused select to another option by the given offset.
    CycleOption(isize),
}

/// Application modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Slides fill the screen.
    Slides,
    /// The prompt builder panel has keyboard focus.
    PromptBuilder,
}

/// Context passed to input handlers.
pub struct InputContext {
    /// Current application mode.
    pub mode: AppMode,
    /// Whether the visible slide hosts the prompt builder.
    pub prompt_on_slide: bool,
}

/// Trait for handling keyboard input.
///
/// Implementations of this trait handle input for specific modes
/// or input contexts.
pub trait InputHandler {
    /// Handle a key event.
    fn handle(&mut self, key: KeyEvent, ctx: &InputContext) -> InputResult;

    /// Get the name of this handler (for debugging).
    fn name(&self) -> &'static str;
}

/// Handler for global shortcuts (quit, translate).
#[derive(Debug, Default)]
pub struct GlobalHandler;

impl InputHandler for GlobalHandler {
    fn handle(&mut self, key: KeyEvent, _ctx: &InputContext) -> InputResult {
        if key.kind == KeyEventKind::Release {
            return InputResult::Consumed;
        }
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputResult::Quit,
            KeyCode::Char('q') => InputResult::Quit,
            KeyCode::Char('t') => InputResult::Command(NavCommand::ToggleLanguage),
            _ => InputResult::Ignored,
        }
    }

    fn name(&self) -> &'static str {
        "GlobalHandler"
    }
}

/// Handler for slide navigation.
#[derive(Debug, Default)]
pub struct SlideHandler;

impl InputHandler for SlideHandler {
    fn handle(&mut self, key: KeyEvent, ctx: &InputContext) -> InputResult {
        match key.code {
            KeyCode::Right | KeyCode::Char(' ') => InputResult::Command(NavCommand::Advance),
            KeyCode::Left => InputResult::Command(NavCommand::Retreat),
            KeyCode::Char('p') | KeyCode::Enter if ctx.prompt_on_slide => {
                InputResult::ModeChange(AppMode::PromptBuilder)
            }
            _ => InputResult::Ignored,
        }
    }

    fn name(&self) -> &'static str {
        "SlideHandler"
    }
}

/// Handler for the prompt builder panel.
#[derive(Debug, Default)]
pub struct PromptHandler;

impl InputHandler for PromptHandler {
    fn handle(&mut self, key: KeyEvent, _ctx: &InputContext) -> InputResult {
        match key.code {
            KeyCode::Esc | KeyCode::Char('p') => InputResult::ModeChange(AppMode::Slides),
            KeyCode::Up | KeyCode::BackTab => InputResult::FocusField(-1),
            KeyCode::Down | KeyCode::Tab => InputResult::FocusField(1),
            KeyCode::Left => InputResult::CycleOption(-1),
            KeyCode::Right | KeyCode::Char(' ') => InputResult::CycleOption(1),
            _ => InputResult::Ignored,
        }
    }

    fn name(&self) -> &'static str {
        "PromptHandler"
    }
}

/// Run the global handler, then the one for the current mode.
pub fn dispatch_key(key: KeyEvent, ctx: &InputContext) -> InputResult {
    let global = GlobalHandler.handle(key, ctx);
    if global != InputResult::Ignored {
        return global;
    }
    match ctx.mode {
        AppMode::Slides => SlideHandler.handle(key, ctx),
        AppMode::PromptBuilder => PromptHandler.handle(key, ctx),
    }
}
