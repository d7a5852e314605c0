use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::constants::dom::{PRELOADED_ATTR, PROMPT_OUTPUT, SRC_ATTR, VALUE_ATTR};
use crate::document::{Document, MemoryDocument, NodeId};
use crate::input::AppMode;
use crate::prompt::PromptField;

/// Render the active slide panel.
pub fn draw_slide(f: &mut Frame, app: &App, area: Rect) {
    let focus = match app.mode {
        AppMode::PromptBuilder => {
            let field = PromptField::ALL[app.prompt_field % PromptField::ALL.len()];
            app.doc.find_by_id(field.select_id())
        }
        AppMode::Slides => None,
    };

    let mut lines = Vec::new();
    if let Some(slide) = app.controller.current_slide() {
        for child in app.doc.child_elements(slide) {
            push_element(&app.doc, child, focus, &mut lines);
        }
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            format!(" {} ", app.controller.language()),
            Style::default().fg(Color::Gray),
        ));
    let slide = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    f.render_widget(slide, area);
}

fn icon_glyph(name: &str) -> &'static str {
    match name {
        "sparkles" => "✨ ",
        "lightbulb" => "💡 ",
        "check" => "✔ ",
        "bolt" => "⚡ ",
        "palette" => "🎨 ",
        "camera" => "📷 ",
        "warning" => "⚠ ",
        _ => "• ",
    }
}

fn icon_span(doc: &MemoryDocument, node: NodeId) -> Span<'static> {
    Span::raw(doc.icon(node).map_or("", |i| icon_glyph(&i)))
}

fn push_element(doc: &MemoryDocument, node: NodeId, focus: Option<NodeId>, lines: &mut Vec<Line<'static>>) {
    let Some(el) = doc.element(node) else {
        return;
    };
    match el.tag() {
        "h2" => {
            lines.push(Line::from(vec![
                icon_span(doc, node),
                Span::styled(
                    doc.text(node),
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                ),
            ]));
            lines.push(Line::default());
        }
        "p" if el.id() == Some(PROMPT_OUTPUT) => {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                format!("» {}", doc.text(node)),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )));
        }
        "p" => {
            lines.push(Line::from(vec![icon_span(doc, node), Span::raw(doc.text(node))]));
            lines.push(Line::default());
        }
        "ul" => {
            for item in doc.child_elements(node) {
                let bullet = if doc.icon(item).is_some() { "  " } else { "  • " };
                lines.push(Line::from(vec![
                    Span::raw(bullet),
                    icon_span(doc, item),
                    Span::raw(doc.text(item)),
                ]));
            }
            lines.push(Line::default());
        }
        "pre" => {
            let style = Style::default().fg(Color::Cyan);
            for line in doc.text(node).lines() {
                lines.push(Line::from(Span::styled(format!("  {line}"), style)));
            }
            lines.push(Line::default());
        }
        "figure" => {
            for child in doc.child_elements(node) {
                push_figure_part(doc, child, lines);
            }
            lines.push(Line::default());
        }
        "form" => {
            for row in doc.child_elements(node) {
                push_form_row(doc, row, focus, lines);
            }
        }
        _ => {
            for child in doc.child_elements(node) {
                push_element(doc, child, focus, lines);
            }
        }
    }
}

fn push_figure_part(doc: &MemoryDocument, node: NodeId, lines: &mut Vec<Line<'static>>) {
    let Some(el) = doc.element(node) else {
        return;
    };
    if el.tag() == "img" {
        let src = doc.attribute(node, SRC_ATTR).unwrap_or_default().to_string();
        let status = if doc.attribute(node, PRELOADED_ATTR).is_some() {
            Span::styled(" ✔", Style::default().fg(Color::Green))
        } else {
            Span::styled(" (missing)", Style::default().fg(Color::Red))
        };
        lines.push(Line::from(vec![
            Span::styled(format!("  [image: {src}]"), Style::default().fg(Color::Magenta)),
            status,
        ]));
    } else {
        lines.push(Line::from(Span::styled(
            format!("  {}", doc.text(node)),
            Style::default().add_modifier(Modifier::ITALIC),
        )));
    }
}

fn push_form_row(doc: &MemoryDocument, row: NodeId, focus: Option<NodeId>, lines: &mut Vec<Line<'static>>) {
    let mut label = String::new();
    let mut select = None;
    for child in doc.child_elements(row) {
        match doc.element(child).map(crate::document::Element::tag) {
            Some("label") => label = doc.text(child),
            Some("select") => select = Some(child),
            _ => {}
        }
    }
    let Some(select) = select else {
        return;
    };
    let value = doc.attribute(select, VALUE_ATTR).unwrap_or_default();
    let value = if value.is_empty() { "—".to_string() } else { value.to_string() };

    let focused = focus == Some(select);
    let (marker, style) = if focused {
        ("▸ ", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
    } else {
        ("  ", Style::default())
    };
    lines.push(Line::from(vec![
        Span::styled(format!("{marker}{label}: "), style),
        Span::styled(format!("‹ {value} ›"), style.fg(Color::White)),
    ]));
}
