//! Inline (sub-line) highlighting for a pair of changed lines.

use similar::{Algorithm, ChangeTag, TextDiff};

use super::{InlineMethod, Segment};

/// Split `old` and `new` into segments, emphasizing the parts that differ.
///
/// Adjacent runs with the same emphasis are merged, so an unchanged line
/// comes back as a single plain segment.
pub fn inline_segments(old: &str, new: &str, method: InlineMethod) -> (Vec<Segment>, Vec<Segment>) {
    let mut config = TextDiff::configure();
    config.algorithm(Algorithm::Myers);
    let diff = match method {
        InlineMethod::Chars => config.diff_chars(old, new),
        InlineMethod::Words => config.diff_words(old, new),
    };

    let mut left = Vec::new();
    let mut right = Vec::new();
    for change in diff.iter_all_changes() {
        let value = change.value();
        match change.tag() {
            ChangeTag::Equal => {
                push_segment(&mut left, value, false);
                push_segment(&mut right, value, false);
            }
            ChangeTag::Delete => push_segment(&mut left, value, true),
            ChangeTag::Insert => push_segment(&mut right, value, true),
        }
    }
    (left, right)
}

fn push_segment(segments: &mut Vec<Segment>, text: &str, emphasized: bool) {
    if text.is_empty() {
        return;
    }
    match segments.last_mut() {
        Some(last) if last.emphasized == emphasized => last.text.push_str(text),
        _ => segments.push(Segment {
            text: text.to_string(),
            emphasized,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_char_change() {
        let (left, right) = inline_segments("hello", "hallo", InlineMethod::Chars);
        assert_eq!(
            left,
            vec![Segment::plain("h"), Segment::emphasized("e"), Segment::plain("llo")]
        );
        assert_eq!(
            right,
            vec![Segment::plain("h"), Segment::emphasized("a"), Segment::plain("llo")]
        );
    }

    #[test]
    fn test_identical_lines_merge_into_one_segment() {
        let (left, right) = inline_segments("same", "same", InlineMethod::Chars);
        assert_eq!(left, vec![Segment::plain("same")]);
        assert_eq!(right, left);
    }

    #[test]
    fn test_word_method_highlights_whole_word() {
        let (left, right) = inline_segments("the quick fox", "the slow fox", InlineMethod::Words);
        assert!(left.iter().any(|s| s.emphasized && s.text == "quick"));
        assert!(right.iter().any(|s| s.emphasized && s.text == "slow"));
        assert!(!left.iter().any(|s| s.emphasized && s.text.contains("fox")));
    }

    #[test]
    fn test_empty_side() {
        let (left, right) = inline_segments("", "added", InlineMethod::Chars);
        assert!(left.is_empty());
        assert_eq!(right, vec![Segment::emphasized("added")]);
    }

    #[test]
    fn test_segments_rebuild_original_text() {
        let old = "let x = compute(1, 2);";
        let new = "let y = compute(1, 3);";
        let (left, right) = inline_segments(old, new, InlineMethod::Chars);
        let rebuilt_left: String = left.iter().map(|s| s.text.as_str()).collect();
        let rebuilt_right: String = right.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(rebuilt_left, old);
        assert_eq!(rebuilt_right, new);
    }
}
