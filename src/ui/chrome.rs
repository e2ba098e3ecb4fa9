//! Header and footer lines.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::layout::LayoutContext;
use super::theme::{COLOR_DIM, COLOR_HEADER, COLOR_SLOT_A, COLOR_SLOT_B};
use crate::app::{App, Focus};

pub fn render_header(frame: &mut Frame, area: Rect, ctx: &LayoutContext) {
    let mut spans = vec![
        Span::styled(
            " side",
            Style::default()
                .fg(COLOR_SLOT_A)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "diff",
            Style::default()
                .fg(COLOR_SLOT_B)
                .add_modifier(Modifier::BOLD),
        ),
    ];
    if !ctx.is_extra_small() {
        spans.push(Span::styled(
            "  compare two texts as you type",
            Style::default().fg(COLOR_DIM),
        ));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().fg(COLOR_HEADER)),
        area,
    );
}

/// Keybind hints for the current state, abbreviated on narrow terminals.
pub fn build_keybinds(app: &App, ctx: &LayoutContext) -> Line<'static> {
    let is_narrow = ctx.is_narrow();
    let mut hints: Vec<(&'static str, &'static str)> = Vec::new();

    if app.current_notice().is_some() {
        hints.push(("Enter", "close"));
    } else if app.file_prompt.is_some() {
        hints.push(("Enter", "load"));
        hints.push(("Esc", "cancel"));
    } else {
        hints.push(("Tab", if is_narrow { "focus" } else { "switch pane" }));
        match app.focus {
            Focus::Diff => {
                hints.push(("f", if app.diff_options.fold_unchanged { "unfold" } else { "fold" }));
                hints.push(("↑↓", "scroll"));
            }
            Focus::EditorA | Focus::EditorB => {
                hints.push(("^O", if is_narrow { "open" } else { "open file" }));
                hints.push(("^Y", "copy"));
            }
        }
        if !ctx.is_extra_small() {
            hints.push(("^L", "clear"));
        }
        hints.push(("^Q", "quit"));
    }

    let mut spans = vec![Span::raw(" ")];
    for (i, (key, action)) in hints.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(COLOR_DIM)));
        }
        spans.push(Span::styled(
            key,
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(format!(" {}", action), Style::default().fg(COLOR_DIM)));
    }
    Line::from(spans)
}

/// Keybind hints on the left, status message on the right.
pub fn render_footer(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    frame.render_widget(Paragraph::new(build_keybinds(app, ctx)), area);

    if let Some(status) = &app.status {
        let status = Line::from(Span::styled(
            format!("{} ", status),
            Style::default().fg(COLOR_DIM),
        ))
        .right_aligned();
        frame.render_widget(Paragraph::new(status), area);
    }
}
