//! Responsive Layout System
//!
//! `LayoutContext` wraps the terminal dimensions and answers the sizing
//! questions the render functions ask. [`screen_areas`] splits the screen
//! into the header, stats, editor, diff and footer regions.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

// ============================================================================
// Screen Size Breakpoints
// ============================================================================

/// Terminal width breakpoints for responsive layouts
pub mod breakpoints {
    /// Extra small terminal (< 60 columns)
    pub const XS_WIDTH: u16 = 60;
    /// Small terminal (< 80 columns)
    pub const SM_WIDTH: u16 = 80;

    /// Extra small terminal height (< 16 rows)
    pub const XS_HEIGHT: u16 = 16;
    /// Small terminal height (< 24 rows)
    pub const SM_HEIGHT: u16 = 24;
}

/// Rows taken by the stats panel, borders included.
const STATS_HEIGHT: u16 = 3;

// ============================================================================
// Layout Context
// ============================================================================

/// Layout context holding terminal dimensions for responsive calculations.
///
/// ```ignore
/// let ctx = LayoutContext::new(120, 40);
/// if ctx.should_stack_panels() {
///     // editors above each other
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LayoutContext {
    /// Terminal width in columns
    pub width: u16,
    /// Terminal height in rows
    pub height: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Calculate a width as a percentage of terminal width, minimum 1.
    pub fn percent_width(&self, percentage: u16) -> u16 {
        ((self.width as u32 * percentage as u32) / 100).max(1) as u16
    }

    /// Calculate a height as a percentage of terminal height, minimum 1.
    pub fn percent_height(&self, percentage: u16) -> u16 {
        ((self.height as u32 * percentage as u32) / 100).max(1) as u16
    }

    /// Calculate proportional width with min/max bounds.
    pub fn bounded_width(&self, percentage: u16, min: u16, max: u16) -> u16 {
        self.percent_width(percentage).clamp(min, max)
    }

    /// Calculate proportional height with min/max bounds.
    pub fn bounded_height(&self, percentage: u16, min: u16, max: u16) -> u16 {
        self.percent_height(percentage).clamp(min, max)
    }

    /// Less than 80 columns.
    pub fn is_narrow(&self) -> bool {
        self.width < breakpoints::SM_WIDTH
    }

    /// Less than 24 rows.
    pub fn is_short(&self) -> bool {
        self.height < breakpoints::SM_HEIGHT
    }

    pub fn is_extra_small(&self) -> bool {
        self.width < breakpoints::XS_WIDTH || self.height < breakpoints::XS_HEIGHT
    }

    /// Stack the two editors vertically instead of side by side.
    pub fn should_stack_panels(&self) -> bool {
        self.is_narrow()
    }

    /// Rows given to the editor region (both editors when stacked).
    pub fn editor_region_height(&self) -> u16 {
        if self.should_stack_panels() {
            self.bounded_height(50, 6, 24)
        } else if self.is_short() {
            self.bounded_height(35, 4, 8)
        } else {
            self.bounded_height(40, 6, 20)
        }
    }
}

/// The regions of the main screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    pub header: Rect,
    pub stats: Option<Rect>,
    pub editor_a: Rect,
    pub editor_b: Rect,
    pub diff: Rect,
    pub footer: Rect,
}

/// Split the screen. The stats row is only reserved when `show_stats`.
pub fn screen_areas(area: Rect, ctx: &LayoutContext, show_stats: bool) -> ScreenAreas {
    let stats_height = if show_stats { STATS_HEIGHT } else { 0 };
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(stats_height),
            Constraint::Length(ctx.editor_region_height()),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    let editor_direction = if ctx.should_stack_panels() {
        Direction::Vertical
    } else {
        Direction::Horizontal
    };
    let editors = Layout::default()
        .direction(editor_direction)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[2]);

    ScreenAreas {
        header: rows[0],
        stats: show_stats.then_some(rows[1]),
        editor_a: editors[0],
        editor_b: editors[1],
        diff: rows[3],
        footer: rows[4],
    }
}
