//! Color theme constants for the sidediff UI
//!
//! Chrome uses terminal colors. The diff panel uses a fixed light palette so
//! added and removed lines read the same on any terminal background.

use ratatui::style::{Color, Modifier, Style};

use crate::diff::LineKind;
use crate::state::Slot;

// ============================================================================
// Chrome
// ============================================================================

/// Border color for unfocused panes
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Border color for the focused pane
pub const COLOR_BORDER_FOCUSED: Color = Color::Rgb(59, 130, 246); // blue-500

/// Header text color
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for hints and secondary info
pub const COLOR_DIM: Color = Color::DarkGray;

/// "live" badge
pub const COLOR_ACTIVE: Color = Color::LightGreen;

/// Slot A accent
pub const COLOR_SLOT_A: Color = Color::Rgb(37, 99, 235); // blue-600

/// Slot B accent
pub const COLOR_SLOT_B: Color = Color::Rgb(147, 51, 234); // purple-600

// ============================================================================
// Dialog Colors
// ============================================================================

pub const COLOR_DIALOG_BG: Color = Color::Rgb(10, 15, 35);
pub const COLOR_SUCCESS: Color = Color::Rgb(4, 181, 117); // green #04B575
pub const COLOR_ERROR: Color = Color::Red;

// ============================================================================
// Diff Palette (light)
// ============================================================================

pub const COLOR_UNCHANGED_BG: Color = Color::Rgb(255, 255, 255);
pub const COLOR_UNCHANGED_FG: Color = Color::Rgb(31, 41, 55); // gray-800

pub const COLOR_REMOVED_BG: Color = Color::Rgb(254, 242, 242); // #fef2f2
pub const COLOR_REMOVED_FG: Color = Color::Rgb(220, 38, 38); // #dc2626

pub const COLOR_ADDED_BG: Color = Color::Rgb(240, 253, 244); // #f0fdf4
pub const COLOR_ADDED_FG: Color = Color::Rgb(22, 163, 74); // #16a34a

pub const COLOR_WORD_REMOVED_BG: Color = Color::Rgb(254, 202, 202); // #fecaca
pub const COLOR_WORD_REMOVED_FG: Color = Color::Rgb(153, 27, 27); // #991b1b

pub const COLOR_WORD_ADDED_BG: Color = Color::Rgb(187, 247, 208); // #bbf7d0
pub const COLOR_WORD_ADDED_FG: Color = Color::Rgb(22, 101, 52); // #166534

pub const COLOR_GUTTER_BG: Color = Color::Rgb(249, 250, 251); // #f9fafb
pub const COLOR_GUTTER_FG: Color = Color::Rgb(107, 114, 128); // #6b7280

pub const COLOR_FOLD_BG: Color = Color::Rgb(243, 244, 246); // #f3f4f6

/// Accent color of a slot's title.
pub fn slot_color(slot: Slot) -> Color {
    match slot {
        Slot::A => COLOR_SLOT_A,
        Slot::B => COLOR_SLOT_B,
    }
}

/// Style of a whole diff line.
pub fn line_style(kind: LineKind) -> Style {
    match kind {
        LineKind::Unchanged => Style::default().fg(COLOR_UNCHANGED_FG).bg(COLOR_UNCHANGED_BG),
        LineKind::Removed => Style::default().fg(COLOR_REMOVED_FG).bg(COLOR_REMOVED_BG),
        LineKind::Added => Style::default().fg(COLOR_ADDED_FG).bg(COLOR_ADDED_BG),
    }
}

/// Style of the changed segment inside a paired line.
pub fn word_style(kind: LineKind) -> Style {
    match kind {
        LineKind::Removed => Style::default()
            .fg(COLOR_WORD_REMOVED_FG)
            .bg(COLOR_WORD_REMOVED_BG)
            .add_modifier(Modifier::BOLD),
        LineKind::Added => Style::default()
            .fg(COLOR_WORD_ADDED_FG)
            .bg(COLOR_WORD_ADDED_BG)
            .add_modifier(Modifier::BOLD),
        LineKind::Unchanged => line_style(kind),
    }
}

pub fn gutter_style() -> Style {
    Style::default().fg(COLOR_GUTTER_FG).bg(COLOR_GUTTER_BG)
}

pub fn fold_style() -> Style {
    Style::default()
        .fg(COLOR_GUTTER_FG)
        .bg(COLOR_FOLD_BG)
        .add_modifier(Modifier::ITALIC)
}
