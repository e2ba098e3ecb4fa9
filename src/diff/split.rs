//! Line-level split diff.

use similar::{capture_diff_slices, Algorithm, DiffOp};

use super::fold::fold_unchanged;
use super::inline::inline_segments;
use super::{DiffOptions, DiffSummary, LineKind, Segment, SideLine, SplitDiff, SplitRow};

/// Split `text` into lines the way the editors and the stats panel count
/// them.
///
/// Each line keeps its `\n` (and any `\r` before it), so a text that lacks
/// a final newline compares as different from one that has it. An empty
/// text has no lines, and a trailing newline does not start a new one.
///
/// ```
/// use sidediff::diff::split_lines;
///
/// assert!(split_lines("").is_empty());
/// assert_eq!(split_lines("a\n"), vec!["a\n"]);
/// assert_eq!(split_lines("a\r\nb"), vec!["a\r\n", "b"]);
/// ```
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split_inclusive('\n').collect()
}

/// Build the split view of `old` (text A) against `new` (text B).
///
/// Lines come from [`split_lines`]; line terminators take part in the
/// comparison but are not displayed.
pub fn split_diff(old: &str, new: &str, options: &DiffOptions) -> SplitDiff {
    let old_lines = split_lines(old);
    let new_lines = split_lines(new);

    let ops = capture_diff_slices(Algorithm::Myers, &old_lines, &new_lines);

    let mut rows = Vec::with_capacity(old_lines.len().max(new_lines.len()));
    let mut summary = DiffSummary::default();

    for op in ops {
        match op {
            DiffOp::Equal {
                old_index,
                new_index,
                len,
            } => {
                for i in 0..len {
                    let text = display_text(old_lines[old_index + i]);
                    rows.push(SplitRow::Line {
                        left: Some(plain_line(old_index + i, LineKind::Unchanged, text)),
                        right: Some(plain_line(
                            new_index + i,
                            LineKind::Unchanged,
                            display_text(new_lines[new_index + i]),
                        )),
                    });
                }
                summary.unchanged += len;
            }
            DiffOp::Delete {
                old_index, old_len, ..
            } => {
                for i in old_index..old_index + old_len {
                    rows.push(SplitRow::Line {
                        left: Some(plain_line(i, LineKind::Removed, display_text(old_lines[i]))),
                        right: None,
                    });
                }
                summary.removed += old_len;
            }
            DiffOp::Insert {
                new_index, new_len, ..
            } => {
                for i in new_index..new_index + new_len {
                    rows.push(SplitRow::Line {
                        left: None,
                        right: Some(plain_line(i, LineKind::Added, display_text(new_lines[i]))),
                    });
                }
                summary.added += new_len;
            }
            DiffOp::Replace {
                old_index,
                old_len,
                new_index,
                new_len,
            } => {
                for i in 0..old_len.max(new_len) {
                    let old_line = (i < old_len).then(|| display_text(old_lines[old_index + i]));
                    let new_line = (i < new_len).then(|| display_text(new_lines[new_index + i]));
                    let (left, right) = match (old_line, new_line) {
                        (Some(o), Some(n)) => {
                            let (left_segments, right_segments) =
                                inline_segments(o, n, options.inline_method);
                            (
                                Some(SideLine {
                                    number: old_index + i + 1,
                                    kind: LineKind::Removed,
                                    segments: left_segments,
                                }),
                                Some(SideLine {
                                    number: new_index + i + 1,
                                    kind: LineKind::Added,
                                    segments: right_segments,
                                }),
                            )
                        }
                        (Some(o), None) => (
                            Some(plain_line(old_index + i, LineKind::Removed, o)),
                            None,
                        ),
                        (None, Some(n)) => (
                            None,
                            Some(plain_line(new_index + i, LineKind::Added, n)),
                        ),
                        (None, None) => (None, None),
                    };
                    rows.push(SplitRow::Line { left, right });
                }
                summary.removed += old_len;
                summary.added += new_len;
            }
        }
    }

    if options.fold_unchanged && summary.has_changes() {
        rows = fold_unchanged(rows, options.context_lines);
    }

    SplitDiff { rows, summary }
}

fn display_text(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

fn plain_line(index: usize, kind: LineKind, text: &str) -> SideLine {
    let segments = if text.is_empty() {
        Vec::new()
    } else {
        vec![Segment::plain(text)]
    };
    SideLine {
        number: index + 1,
        kind,
        segments,
    }
}
