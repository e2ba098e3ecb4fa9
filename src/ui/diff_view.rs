//! Split diff panel.
//!
//! Each row of the [`SplitDiff`] becomes one terminal row: line number
//! gutter, change marker and text on each half. Fold rows span both halves.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use super::theme::{
    fold_style, gutter_style, line_style, slot_color, word_style, COLOR_ACTIVE, COLOR_BORDER,
    COLOR_BORDER_FOCUSED, COLOR_DIM, COLOR_HEADER,
};
use crate::app::{App, Focus};
use crate::diff::{LineKind, SideLine, SplitDiff, SplitRow};
use crate::state::Slot;

/// Text shown when there is nothing to compare.
pub const INPUT_REQUIRED_MESSAGE: &str = "Enter text in Text A and Text B to compare";

/// Badge shown in the panel title.
pub fn status_badge(live: bool) -> Span<'static> {
    if live {
        Span::styled(
            " ● live ",
            Style::default()
                .fg(COLOR_ACTIVE)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(" ○ waiting for input ", Style::default().fg(COLOR_DIM))
    }
}

/// Width of the line number column for this diff.
pub fn gutter_width(diff: &SplitDiff) -> usize {
    let max = diff
        .rows
        .iter()
        .flat_map(|row| [row.left(), row.right()])
        .flatten()
        .map(|line| line.number)
        .max()
        .unwrap_or(0);
    max.to_string().len().max(2)
}

/// One half of a row.
pub fn side_line(side: Option<&SideLine>, gutter: usize) -> Line<'static> {
    let Some(line) = side else {
        // The other side has a line here; leave this side blank
        return Line::from(Span::styled(" ".repeat(gutter + 3), gutter_style()))
            .style(gutter_style());
    };

    let (marker, base) = match line.kind {
        LineKind::Unchanged => (' ', line_style(LineKind::Unchanged)),
        LineKind::Removed => ('-', line_style(LineKind::Removed)),
        LineKind::Added => ('+', line_style(LineKind::Added)),
    };

    let mut spans = vec![
        Span::styled(format!("{:>width$} ", line.number, width = gutter), gutter_style()),
        Span::styled(format!("{} ", marker), base),
    ];
    spans.extend(line.segments.iter().map(|segment| {
        let style = if segment.emphasized {
            word_style(line.kind)
        } else {
            base
        };
        Span::styled(segment.text.clone(), style)
    }));
    Line::from(spans).style(base)
}

fn fold_line(hidden: usize) -> Line<'static> {
    let noun = if hidden == 1 { "line" } else { "lines" };
    Line::from(Span::styled(
        format!("  ⋯ {} unchanged {} hidden", hidden, noun),
        fold_style(),
    ))
    .style(fold_style())
}

/// Render the diff panel and record how many rows it shows.
pub fn render_diff(frame: &mut Frame, area: Rect, app: &mut App, diff: &SplitDiff) {
    let focused = app.focus == Focus::Diff && app.file_prompt.is_none();
    let border = if focused {
        COLOR_BORDER_FOCUSED
    } else {
        COLOR_BORDER
    };

    let mut title = vec![Span::styled(
        " Diff ",
        Style::default()
            .fg(COLOR_HEADER)
            .add_modifier(Modifier::BOLD),
    )];
    if diff.summary.has_changes() {
        title.push(Span::styled(
            format!("+{} -{} ", diff.summary.added, diff.summary.removed),
            Style::default().fg(COLOR_DIM),
        ));
    }

    let block = Block::default()
        .title(Line::from(title))
        .title(Line::from(status_badge(app.is_live())).right_aligned())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.input_required() {
        app.diff_viewport = 0;
        app.diff_scroll = 0;
        let y = inner.y + inner.height.saturating_sub(1) / 2;
        let message = Paragraph::new(Line::from(Span::styled(
            INPUT_REQUIRED_MESSAGE,
            Style::default().fg(COLOR_DIM),
        )))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
        let message_area = Rect {
            y,
            height: inner.bottom().saturating_sub(y),
            ..inner
        };
        frame.render_widget(message, message_area);
        return;
    }

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    // First row of each half holds the slot title
    let viewport = inner.height.saturating_sub(1) as usize;
    app.diff_viewport = viewport;
    app.diff_scroll = app
        .diff_scroll
        .min(diff.rows.len().saturating_sub(viewport));

    let gutter = gutter_width(diff);
    for (half, slot) in halves.iter().zip(Slot::ALL) {
        let mut lines = vec![Line::from(Span::styled(
            format!(" {}", slot.label()),
            Style::default()
                .fg(slot_color(slot))
                .add_modifier(Modifier::BOLD),
        ))];
        lines.extend(
            diff.rows
                .iter()
                .skip(app.diff_scroll)
                .take(viewport)
                .map(|row| match row {
                    SplitRow::Fold { hidden } => fold_line(*hidden),
                    SplitRow::Line { left, right } => {
                        let side = match slot {
                            Slot::A => left.as_ref(),
                            Slot::B => right.as_ref(),
                        };
                        side_line(side, gutter)
                    }
                }),
        );
        frame.render_widget(Paragraph::new(lines), *half);
    }
}
