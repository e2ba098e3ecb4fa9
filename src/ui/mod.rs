//! UI rendering for sidediff
//!
//! Screen layout, top to bottom:
//! - Header line
//! - Stats panel (hidden while both slots are empty)
//! - Editors for Text A and Text B, side by side or stacked on narrow
//!   terminals
//! - Split diff panel
//! - Keybind hints and status
//!
//! The file prompt and notices are drawn over everything else. All render
//! functions receive a [`LayoutContext`] for responsive sizing.

mod chrome;
pub mod components;
mod diff_view;
mod editors;
mod layout;
mod overlays;
mod stats_panel;
mod theme;

pub use diff_view::INPUT_REQUIRED_MESSAGE;
pub use layout::{breakpoints, screen_areas, LayoutContext, ScreenAreas};

use ratatui::Frame;

use crate::app::App;
use crate::state::Slot;
use crate::stats::Stats;

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render the whole screen.
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let ctx = LayoutContext::new(area.width, area.height);

    // Diff and stats are recomputed from the slots on every draw
    let diff = app.split_diff();
    let stats = Stats::project(&app.store, app.config.count_mode, diff.summary);
    let areas = screen_areas(area, &ctx, !app.store.both_empty());

    chrome::render_header(frame, areas.header, &ctx);
    if let Some(stats_area) = areas.stats {
        stats_panel::render_stats(frame, stats_area, &stats);
    }
    editors::render_editor(frame, areas.editor_a, app, Slot::A);
    editors::render_editor(frame, areas.editor_b, app, Slot::B);
    diff_view::render_diff(frame, areas.diff, app, &diff);
    chrome::render_footer(frame, areas.footer, app, &ctx);

    if let Some(prompt) = &app.file_prompt {
        overlays::render_file_prompt(frame, area, &ctx, prompt, &app.config.allowed_extensions);
    }
    if let Some(notice) = app.current_notice() {
        overlays::render_notice(frame, area, &ctx, notice);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    use super::*;
    use crate::adapters::MockClipboard;
    use crate::app::Notice;
    use crate::config::Config;

    fn create_test_app() -> App {
        App::with_clipboards(
            Config::default(),
            Arc::new(MockClipboard::new()),
            Box::new(MockClipboard::new()),
        )
    }

    fn draw(app: &mut App, width: u16, height: u16) -> Buffer {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut text = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_empty_state_shows_input_required() {
        let mut app = create_test_app();
        let text = buffer_text(&draw(&mut app, 120, 40));
        assert!(text.contains(INPUT_REQUIRED_MESSAGE));
        assert!(text.contains("waiting for input"));
        assert!(!text.contains("Stats"));
    }

    #[test]
    fn test_filled_state_shows_stats_and_live_badge() {
        let mut app = create_test_app();
        app.set_text(Slot::A, "hello");
        app.set_text(Slot::B, "hallo");
        let text = buffer_text(&draw(&mut app, 120, 40));
        assert!(text.contains("Stats"));
        assert!(text.contains("Text A: 5 chars"));
        assert!(text.contains("Text B: 5 chars"));
        assert!(text.contains("live"));
        assert!(!text.contains(INPUT_REQUIRED_MESSAGE));
    }

    #[test]
    fn test_one_slot_filled_is_not_live() {
        let mut app = create_test_app();
        app.set_text(Slot::A, "only a");
        let text = buffer_text(&draw(&mut app, 120, 40));
        assert!(text.contains("Stats"));
        assert!(text.contains("waiting for input"));
    }

    #[test]
    fn test_notice_overlay_is_drawn() {
        let mut app = create_test_app();
        app.push_notice(Notice::success("Text A copied to clipboard!"));
        let text = buffer_text(&draw(&mut app, 100, 30));
        assert!(text.contains("Text A copied to clipboard!"));
        assert!(text.contains("Done"));
    }

    #[test]
    fn test_file_prompt_overlay_is_drawn() {
        let mut app = create_test_app();
        app.focus = crate::app::Focus::EditorB;
        app.open_file_prompt();
        let text = buffer_text(&draw(&mut app, 100, 30));
        assert!(text.contains("Open file into Text B"));
        assert!(text.contains(".txt"));
    }

    #[test]
    fn test_render_records_diff_viewport() {
        let mut app = create_test_app();
        app.set_text(Slot::A, "a\nb\nc");
        app.set_text(Slot::B, "a\nx\nc");
        draw(&mut app, 120, 40);
        assert!(app.diff_viewport > 0);
    }

    #[test]
    fn test_narrow_terminal_renders() {
        let mut app = create_test_app();
        app.set_text(Slot::A, "left");
        app.set_text(Slot::B, "right");
        let text = buffer_text(&draw(&mut app, 50, 20));
        assert!(text.contains("Text A"));
        assert!(text.contains("Text B"));
    }
}
