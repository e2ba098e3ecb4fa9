//! Common test utilities for integration tests.
//!
//! ```ignore
//! let primary = MockClipboard::failing(ClipboardError::Unavailable("ssh".into()));
//! let mut app = TestAppBuilder::new().with_primary(primary).build();
//! ```

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use ratatui::{backend::TestBackend, Terminal};
use sidediff::adapters::MockClipboard;
use sidediff::app::{App, AppMessage};
use sidediff::config::Config;

/// How long a test waits for a background task before failing.
const MESSAGE_TIMEOUT: Duration = Duration::from_secs(5);

/// Builds an [`App`] wired to mock clipboards.
#[derive(Default)]
pub struct TestAppBuilder {
    config: Config,
    primary: MockClipboard,
    fallback: MockClipboard,
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn with_primary(mut self, primary: MockClipboard) -> Self {
        self.primary = primary;
        self
    }

    pub fn with_fallback(mut self, fallback: MockClipboard) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn build(self) -> App {
        App::with_clipboards(
            self.config,
            Arc::new(self.primary),
            Box::new(self.fallback),
        )
    }
}

/// Wait for the next background message.
pub async fn next_message(app: &mut App) -> AppMessage {
    let rx = app
        .message_rx
        .as_mut()
        .expect("message receiver already taken");
    tokio::time::timeout(MESSAGE_TIMEOUT, rx.recv())
        .await
        .expect("timed out waiting for a background task")
        .expect("message channel closed")
}

/// Wait for the next background message and let the app handle it.
pub async fn settle_one(app: &mut App) {
    let msg = next_message(app).await;
    app.handle_message(msg);
}

/// True when no message is waiting.
pub fn no_pending_messages(app: &mut App) -> bool {
    app.message_rx
        .as_mut()
        .map(|rx| rx.try_recv().is_err())
        .unwrap_or(true)
}

/// Render the app into a test terminal and return the screen as text.
pub fn render_to_string(app: &mut App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| sidediff::ui::render(f, app)).unwrap();
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}
