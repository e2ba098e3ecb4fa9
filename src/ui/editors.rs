//! The two text editors.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders},
    Frame,
};

use super::theme::{slot_color, COLOR_BORDER, COLOR_BORDER_FOCUSED, COLOR_DIM};
use crate::app::{App, Focus};
use crate::state::Slot;

/// Render the editor for `slot`. Only the focused editor shows a cursor.
pub fn render_editor(frame: &mut Frame, area: Rect, app: &mut App, slot: Slot) {
    let focused = app.focus == Focus::editor(slot) && app.file_prompt.is_none();
    let count = app.config.count_mode.count(app.text(slot));
    let unit = app.config.count_mode.unit(count);

    let border = if focused {
        COLOR_BORDER_FOCUSED
    } else {
        COLOR_BORDER
    };
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", slot.label()),
            Style::default()
                .fg(slot_color(slot))
                .add_modifier(Modifier::BOLD),
        ))
        .title(
            Line::from(Span::styled(
                format!(" {} {} ", count, unit),
                Style::default().fg(COLOR_DIM),
            ))
            .right_aligned(),
        )
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border));

    let editor = app.editor_mut(slot);
    editor.set_block(block);
    editor.set_cursor_line_style(Style::default());
    editor.set_placeholder_style(Style::default().fg(COLOR_DIM));
    if focused {
        editor.set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));
    } else {
        editor.set_cursor_style(Style::default());
    }

    frame.render_widget(&*editor, area);
}
