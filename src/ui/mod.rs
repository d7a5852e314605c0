//! User interface components.
//!
//! Renders the deck document with ratatui: header with the translate
//! button, the active slide, the progress bar and the navigation bar.

mod slide;

pub use slide::draw_slide;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::constants::dom::{
    DECK_TITLE, LOADER, NEXT_BUTTON, PREV_BUTTON, PROGRESS_BAR, SWIPE_HINT, TRANSLATE_BUTTON,
};
use crate::constants::ui::NAV_BUTTON_WIDTH;
use crate::document::Document;
use crate::input::AppMode;

/// Render the full application UI to the terminal frame.
pub fn draw(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(f.size());

    draw_header(f, app, chunks[0]);
    draw_slide(f, app, chunks[1]);
    draw_progress(f, app, chunks[2]);
    draw_nav_bar(f, app, chunks[3]);

    if let Some(hint) = app.doc.find_by_id(SWIPE_HINT) {
        if app.doc.is_visible(hint) {
            draw_swipe_hint(f, &app.doc.text(hint), chunks[1]);
        }
    }

    if let Some(loader) = app.doc.find_by_id(LOADER) {
        draw_loading_indicator(f, &app.doc.text(loader));
    }
}

#[allow(clippy::cast_possible_truncation)]
fn draw_header(f: &mut Frame, app: &mut App, area: Rect) {
    let label = app
        .doc
        .find_by_id(TRANSLATE_BUTTON)
        .map(|b| app.doc.text(b))
        .unwrap_or_default();
    let button_width = (label.width() as u16).saturating_add(4);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(button_width)])
        .split(area);

    let title = app.doc.find_by_id(DECK_TITLE).map(|t| app.doc.text(t)).unwrap_or_default();
    let title = Paragraph::new(Line::from(Span::styled(
        format!(" {title}"),
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    )))
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    f.render_widget(button(&label), chunks[1]);
    app.hit_areas.translate = Some(chunks[1]);
}

fn draw_progress(f: &mut Frame, app: &App, area: Rect) {
    let percent = app
        .doc
        .find_by_id(PROGRESS_BAR)
        .and_then(|bar| app.doc.element(bar))
        .and_then(crate::document::Element::progress)
        .unwrap_or(0.0);
    let label = format!(
        "{}/{}",
        app.controller.slide_index() + 1,
        app.controller.slide_count()
    );
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Black))
        .ratio((percent / 100.0).clamp(0.0, 1.0))
        .label(label);
    f.render_widget(gauge, area);
}

fn draw_nav_bar(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(NAV_BUTTON_WIDTH),
            Constraint::Min(1),
            Constraint::Length(NAV_BUTTON_WIDTH),
        ])
        .split(area);

    app.hit_areas.prev = draw_nav_button(f, app, PREV_BUTTON, chunks[0]);
    app.hit_areas.next = draw_nav_button(f, app, NEXT_BUTTON, chunks[2]);

    let help = match app.mode {
        AppMode::Slides if app.prompt_on_current_slide() => create_help_text(&[
            ("←/→", "Navigate"),
            ("t", "Translate"),
            ("p", "Prompt builder"),
            ("q", "Quit"),
        ]),
        AppMode::Slides => create_help_text(&[
            ("←/→", "Navigate"),
            ("t", "Translate"),
            ("q", "Quit"),
        ]),
        AppMode::PromptBuilder => create_help_text(&[
            ("↑/↓", "Field"),
            ("←/→", "Option"),
            ("t", "Translate"),
            ("Esc", "Back"),
        ]),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    f.render_widget(
        Paragraph::new(Line::from(help))
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center)
            .block(block),
        chunks[1],
    );
}

/// Draw one navigation button if the document shows it; returns its area.
fn draw_nav_button(f: &mut Frame, app: &App, id: &str, area: Rect) -> Option<Rect> {
    let node = app.doc.find_by_id(id)?;
    if !app.doc.is_visible(node) {
        return None;
    }
    f.render_widget(button(&app.doc.text(node)), area);
    Some(area)
}

fn button(label: &str) -> Paragraph<'static> {
    Paragraph::new(label.to_string())
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        )
}

/// Build styled help text spans from key-description pairs for the command bar.
pub fn create_help_text<'a>(commands: &[(&'a str, &'a str)]) -> Vec<Span<'a>> {
    let mut text = Vec::new();

    for (i, (key, description)) in commands.iter().enumerate() {
        text.push(Span::styled(*key, Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)));
        text.push(Span::raw(format!(": {description}")));

        if i < commands.len() - 1 {
            text.push(Span::raw(" | "));
        }
    }

    text
}

fn draw_swipe_hint(f: &mut Frame, hint: &str, slide_area: Rect) {
    if slide_area.height < 3 {
        return;
    }
    let area = Rect {
        x: slide_area.x + 1,
        y: slide_area.bottom().saturating_sub(2),
        width: slide_area.width.saturating_sub(2),
        height: 1,
    };
    let text = Paragraph::new(hint.to_string())
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC));
    f.render_widget(text, area);
}

#[allow(clippy::cast_possible_truncation)]
fn draw_loading_indicator(f: &mut Frame, text: &str) {
    let size = f.size();
    let width = (text.width() as u16 + 6).min(size.width);
    let height = 3.min(size.height);
    let area = Rect {
        x: size.width.saturating_sub(width) / 2,
        y: size.height.saturating_sub(height) / 2,
        width,
        height,
    };
    f.render_widget(Clear, area);
    let indicator = Paragraph::new(text.to_string())
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(indicator, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_text_separates_entries() {
        let spans = create_help_text(&[("a", "One"), ("b", "Two")]);
        let rendered: String = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(rendered, "a: One | b: Two");
    }
}
