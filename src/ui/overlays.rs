//! Modal overlays: the notice and the file prompt.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Span,
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::components::{dialog_area, render_dialog_frame, DialogFrameConfig};
use super::layout::LayoutContext;
use super::theme::{COLOR_BORDER_FOCUSED, COLOR_DIM, COLOR_ERROR, COLOR_HEADER, COLOR_SUCCESS};
use crate::app::{FilePrompt, Notice, NoticeKind};

/// Estimate the rows `text` needs when wrapped at `width`.
fn wrapped_height(text: &str, width: u16) -> u16 {
    let width = width.max(1) as usize;
    text.split('\n')
        .map(|line| {
            let cols = unicode_width::UnicodeWidthStr::width(line);
            cols.div_ceil(width).max(1)
        })
        .sum::<usize>()
        .min(u16::MAX as usize) as u16
}

/// Rows the message needs inside the frame `config` produces in `area`.
fn notice_height(area: Rect, ctx: &LayoutContext, config: &DialogFrameConfig, message: &str) -> u16 {
    // Borders and one column of padding on each side
    let text_width = dialog_area(area, ctx, config).width.saturating_sub(4);
    wrapped_height(message, text_width)
}

pub fn render_notice(frame: &mut Frame, area: Rect, ctx: &LayoutContext, notice: &Notice) {
    let accent = match notice.kind {
        NoticeKind::Success => COLOR_SUCCESS,
        NoticeKind::Failure => COLOR_ERROR,
    };

    let mut config = DialogFrameConfig::new(notice.title(), 0)
        .accent(accent)
        .hint("Enter", "close");
    config.content_height = notice_height(area, ctx, &config, &notice.message);
    let inner = render_dialog_frame(frame, area, ctx, &config);

    let message = Paragraph::new(notice.message.as_str())
        .style(Style::default().fg(COLOR_HEADER))
        .wrap(Wrap { trim: false });
    frame.render_widget(message, pad(inner));
}

pub fn render_file_prompt(
    frame: &mut Frame,
    area: Rect,
    ctx: &LayoutContext,
    prompt: &FilePrompt,
    extensions: &[String],
) {
    let title = format!("Open file into {}", prompt.slot.label());
    let config = DialogFrameConfig::new(&title, 4)
        .accent(COLOR_BORDER_FOCUSED)
        .hint("Enter", "load")
        .hint("Esc", "cancel")
        .max_width(72);
    let inner = render_dialog_frame(frame, area, ctx, &config);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1); 4])
        .split(inner);

    frame.render_widget(
        Paragraph::new(Span::styled("Path:", Style::default().fg(COLOR_DIM))),
        pad(rows[0]),
    );
    frame.render_widget(&prompt.input, pad(rows[1]));

    let suggested = extensions
        .iter()
        .map(|ext| format!(".{}", ext.trim_start_matches('.')))
        .collect::<Vec<_>>()
        .join(" ");
    frame.render_widget(
        Paragraph::new(Span::styled(suggested, Style::default().fg(COLOR_DIM))),
        pad(rows[3]),
    );
}

/// One column of horizontal padding.
fn pad(area: Rect) -> Rect {
    Rect {
        x: area.x + 1,
        width: area.width.saturating_sub(2),
        ..area
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapped_height() {
        assert_eq!(wrapped_height("", 10), 1);
        assert_eq!(wrapped_height("short", 10), 1);
        assert_eq!(wrapped_height("0123456789abc", 10), 2);
        assert_eq!(wrapped_height("a\n\nb", 10), 3);
    }

    #[test]
    fn test_notice_height_follows_frame_width() {
        let message = "x".repeat(60);
        let config = DialogFrameConfig::new("Error", 0);

        // Extra-small terminal: the frame is the screen width minus margins
        let small = Rect::new(0, 0, 40, 14);
        let ctx = LayoutContext::new(small.width, small.height);
        let width = dialog_area(small, &ctx, &config).width - 4;
        assert_eq!(width, 32);
        assert_eq!(notice_height(small, &ctx, &config, &message), 2);

        // Wide terminal fits the same message on one row
        let wide = Rect::new(0, 0, 160, 40);
        let ctx = LayoutContext::new(wide.width, wide.height);
        assert_eq!(notice_height(wide, &ctx, &config, &message), 1);
    }

    #[test]
    fn test_pad() {
        let area = pad(Rect::new(4, 2, 10, 1));
        assert_eq!(area, Rect::new(5, 2, 8, 1));
    }
}
