//! Character statistics panel.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::theme::{slot_color, COLOR_ADDED_FG, COLOR_BORDER, COLOR_DIM, COLOR_REMOVED_FG};
use crate::state::Slot;
use crate::stats::Stats;

fn lines_noun(count: usize) -> &'static str {
    if count == 1 {
        "line"
    } else {
        "lines"
    }
}

pub fn build_stats_line(stats: &Stats) -> Line<'static> {
    let mut spans = Vec::new();
    for slot in Slot::ALL {
        let slot_stats = stats.for_slot(slot);
        spans.push(Span::styled(
            format!("{}: ", slot.label()),
            Style::default().fg(slot_color(slot)),
        ));
        spans.push(Span::styled(
            slot_stats.characters.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(
                " {} · {} {}   ",
                stats.mode.unit(slot_stats.characters),
                slot_stats.lines,
                lines_noun(slot_stats.lines)
            ),
            Style::default().fg(COLOR_DIM),
        ));
    }

    spans.push(Span::styled(
        format!("+{}", stats.summary.added),
        Style::default().fg(COLOR_ADDED_FG),
    ));
    spans.push(Span::raw(" "));
    spans.push(Span::styled(
        format!("-{}", stats.summary.removed),
        Style::default().fg(COLOR_REMOVED_FG),
    ));
    spans.push(Span::styled(" lines", Style::default().fg(COLOR_DIM)));
    Line::from(spans)
}

pub fn render_stats(frame: &mut Frame, area: Rect, stats: &Stats) {
    let block = Block::default()
        .title(" Stats ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    frame.render_widget(Paragraph::new(build_stats_line(stats)).block(block), area);
}
