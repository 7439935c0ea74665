use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};
use textwrap::wrap;
use unicode_width::UnicodeWidthStr;

use crate::domain::InputKind;
use crate::form::{FieldState, FormState};

/// Renders every field of the form as a list: a small title once a field has
/// content, the value (or prompt) over an underline, and the chooser of the
/// focused picker-backed field.
pub fn render_form(frame: &mut Frame<'_>, area: Rect, form: &FormState, title: &str) {
    let content_width = area.width.saturating_sub(4);
    let focused = form.focused_index();

    let items: Vec<ListItem<'_>> = form
        .fields()
        .iter()
        .map(|field| ListItem::new(field_lines(field, content_width)))
        .collect();

    let mut list_state = ListState::default();
    list_state.select(focused);

    let list = List::new(items)
        .block(Block::default().title(title.to_string()).borders(Borders::ALL))
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("» ");

    frame.render_stateful_widget(list, area, &mut list_state);
}

fn field_lines(field: &FieldState, max_width: u16) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let clamp_width = max_width.max(4) as usize;

    if !field.is_empty() || field.is_focused() {
        let mut label = field.def.title.clone();
        if field.def.required {
            label.push_str(" *");
        }
        let label_style = if field.is_focused() {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };
        lines.push(Line::from(Span::styled(label, label_style)));
    }

    let value_style = if field.error.is_some() {
        Style::default().fg(Color::Red)
    } else if field.is_empty() && !field.is_focused() {
        Style::default().fg(Color::DarkGray)
    } else if field.is_focused() {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let value_text = field.display_text();
    let mut underline_width = 0;
    let mut wrapped: Vec<String> = if field.def.config.multiline {
        wrap(&value_text, clamp_width)
            .into_iter()
            .map(|segment| segment.into_owned())
            .collect()
    } else {
        vec![value_text]
    };
    if wrapped.is_empty() {
        wrapped.push(String::new());
    }
    for segment in wrapped {
        underline_width = underline_width.max(UnicodeWidthStr::width(segment.as_str()));
        lines.push(Line::from(Span::styled(format!("  {segment}"), value_style)));
    }

    let underline_style = if field.is_focused() {
        Style::default().fg(Color::Blue)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let underline_width = underline_width.max(8).min(clamp_width.max(8));
    lines.push(Line::from(Span::styled(
        format!("  {}", "─".repeat(underline_width)),
        underline_style,
    )));

    if field.is_focused() && field.def.kind.is_picker_type() {
        lines.extend(picker_lines(field));
    }

    if let Some(error) = &field.error {
        lines.push(Line::from(Span::styled(
            format!("  ✗ {error}"),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
    }

    lines.push(Line::from(" "));
    lines
}

fn picker_lines(field: &FieldState) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    match field.def.kind {
        InputKind::Select => {
            let selected = field.selected_row();
            for (idx, option) in field.candidates().iter().enumerate() {
                let marker = if selected == Some(idx) { "›" } else { " " };
                let style = if selected == Some(idx) {
                    Style::default().fg(Color::Yellow)
                } else {
                    Style::default().fg(Color::Gray)
                };
                lines.push(Line::from(Span::styled(
                    format!("   {marker} {}", option.name),
                    style,
                )));
            }
            if field.candidates().is_empty() {
                lines.push(Line::from(Span::styled(
                    "    (no matches)",
                    Style::default().fg(Color::DarkGray),
                )));
            }
        }
        InputKind::Date => {
            if let Some(date) = field.picker_date() {
                lines.push(Line::from(Span::styled(
                    format!("   ‹ {} ›  (↑/↓ to change)", date.format("%Y-%m-%d")),
                    Style::default().fg(Color::Yellow),
                )));
            }
        }
        _ => {}
    }

    let mut hints = vec!["Reset".to_string(), "Select".to_string()];
    if field.can_create_unique() {
        hints.insert(1, "Create".to_string());
    }
    lines.push(Line::from(Span::styled(
        format!("   [{}]", hints.join("] [")),
        Style::default().fg(Color::Blue),
    )));

    lines
}
