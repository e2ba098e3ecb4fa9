//! Modal frame shared by the notice and the file prompt.
//!
//! Clears what is underneath, draws a rounded border in the overlay's accent
//! color and puts the key hint on the bottom border.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear},
    Frame,
};

use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_BORDER, COLOR_DIALOG_BG, COLOR_DIM, COLOR_HEADER};

#[derive(Debug, Clone)]
pub struct DialogFrameConfig<'a> {
    pub title: &'a str,
    /// Rows inside the border
    pub content_height: u16,
    pub accent: Color,
    /// `(key, action)` pairs shown on the bottom border
    pub hints: Vec<(&'a str, &'a str)>,
    pub max_width: u16,
}

impl<'a> DialogFrameConfig<'a> {
    pub fn new(title: &'a str, content_height: u16) -> Self {
        Self {
            title,
            content_height,
            accent: COLOR_BORDER,
            hints: Vec::new(),
            max_width: 64,
        }
    }

    pub fn accent(mut self, color: Color) -> Self {
        self.accent = color;
        self
    }

    pub fn hint(mut self, key: &'a str, action: &'a str) -> Self {
        self.hints.push((key, action));
        self
    }

    pub fn max_width(mut self, width: u16) -> Self {
        self.max_width = width;
        self
    }
}

/// Smallest frame width on normal terminals.
const MIN_FRAME_WIDTH: u16 = 30;

/// Frame width for the terminal size, never wider than `area_width`.
fn frame_width(ctx: &LayoutContext, max_width: u16, area_width: u16) -> u16 {
    let width = if ctx.is_extra_small() {
        area_width.saturating_sub(4).min(max_width)
    } else {
        let percent = if ctx.is_narrow() { 80 } else { 50 };
        ctx.bounded_width(percent, MIN_FRAME_WIDTH, max_width)
    };
    width.min(area_width)
}

/// Where the frame goes, borders included: centered in `area`.
pub(crate) fn dialog_area(area: Rect, ctx: &LayoutContext, config: &DialogFrameConfig) -> Rect {
    let width = frame_width(ctx, config.max_width, area.width);
    let height = (config.content_height + 2).min(area.height);
    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    }
}

fn hint_line<'a>(hints: &[(&'a str, &'a str)]) -> Line<'a> {
    let mut spans = Vec::with_capacity(hints.len() * 2 + 1);
    for (i, (key, action)) in hints.iter().enumerate() {
        let sep = if i == 0 { " " } else { " · " };
        spans.push(Span::styled(sep, Style::default().fg(COLOR_DIM)));
        spans.push(Span::styled(*key, Style::default().add_modifier(Modifier::BOLD)));
        spans.push(Span::styled(format!(" {}", action), Style::default().fg(COLOR_DIM)));
    }
    if !hints.is_empty() {
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

/// Draw the frame and return the area inside the border.
pub fn render_dialog_frame(
    frame: &mut Frame,
    area: Rect,
    ctx: &LayoutContext,
    config: &DialogFrameConfig,
) -> Rect {
    let outer = dialog_area(area, ctx, config);
    frame.render_widget(Clear, outer);

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", config.title),
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ))
        .title_bottom(hint_line(&config.hints).right_aligned())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(config.accent))
        .style(Style::default().bg(COLOR_DIALOG_BG));
    let inner = block.inner(outer);

    frame.render_widget(block, outer);
    inner
}
