//! Loading files into slots through the app.

mod common;

use std::fs;

use common::{next_message, settle_one, TestAppBuilder};
use sidediff::app::{AppMessage, NoticeKind};
use sidediff::state::Slot;
use tempfile::TempDir;

#[tokio::test]
async fn test_load_is_verbatim() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("b.txt");
    fs::write(&path, "line1\nline2").unwrap();

    let mut app = TestAppBuilder::new().build();
    app.request_file_load(Slot::B, path);
    settle_one(&mut app).await;

    assert_eq!(app.text(Slot::B), "line1\nline2");
    assert_eq!(app.text(Slot::A), "");
    assert!(app.notices.is_empty());
}

#[tokio::test]
async fn test_unlisted_extension_still_loads() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.csv");
    fs::write(&path, "a,b\n1,2\n").unwrap();

    let mut app = TestAppBuilder::new().build();
    app.request_file_load(Slot::A, path);
    assert!(app
        .status
        .as_deref()
        .is_some_and(|s| s.contains("unexpected extension")));

    settle_one(&mut app).await;
    assert_eq!(app.text(Slot::A), "a,b\n1,2\n");
}

#[tokio::test]
async fn test_non_utf8_file_reports_and_keeps_slot() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("image.txt");
    fs::write(&path, [0x89, b'P', b'N', b'G', 0xFF, 0x00]).unwrap();

    let mut app = TestAppBuilder::new().build();
    app.set_text(Slot::A, "unchanged");
    app.request_file_load(Slot::A, path);
    settle_one(&mut app).await;

    assert_eq!(app.text(Slot::A), "unchanged");
    let notice = app.current_notice().unwrap();
    assert_eq!(notice.kind, NoticeKind::Failure);
    assert!(notice.message.contains("image.txt"));
}

#[tokio::test]
async fn test_missing_file_reports() {
    let dir = TempDir::new().unwrap();
    let mut app = TestAppBuilder::new().build();
    app.request_file_load(Slot::B, dir.path().join("nope.md"));
    settle_one(&mut app).await;

    assert_eq!(app.current_notice().unwrap().kind, NoticeKind::Failure);
    assert_eq!(app.text(Slot::B), "");
}

#[tokio::test]
async fn test_later_completion_wins() {
    let dir = TempDir::new().unwrap();
    let first = dir.path().join("first.txt");
    let second = dir.path().join("second.txt");
    fs::write(&first, "first").unwrap();
    fs::write(&second, "second").unwrap();

    let mut app = TestAppBuilder::new().build();
    let first_id = app.request_file_load(Slot::A, first);
    let second_id = app.request_file_load(Slot::A, second);
    assert!(second_id > first_id);

    // Apply in whatever order the reads completed; the last one applied
    // must be what the slot holds.
    let mut last_text = None;
    for _ in 0..2 {
        let msg = next_message(&mut app).await;
        if let AppMessage::FileLoaded { result: Ok(text), .. } = &msg {
            last_text = Some(text.clone());
        }
        app.handle_message(msg);
    }
    assert_eq!(Some(app.text(Slot::A).to_string()), last_text);
}

#[tokio::test]
async fn test_prompt_submission_loads_into_focused_slot() {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("prompt.md");
    fs::write(&path, "# from prompt").unwrap();

    let mut app = TestAppBuilder::new().build();
    app.handle_key(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE));
    app.handle_key(KeyEvent::new(KeyCode::Char('o'), KeyModifiers::CONTROL));
    app.handle_paste(path.display().to_string());
    app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
    assert!(app.file_prompt.is_none());

    settle_one(&mut app).await;
    assert_eq!(app.text(Slot::B), "# from prompt");
}
