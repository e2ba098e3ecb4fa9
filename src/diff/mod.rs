//! Side-by-side diff model.
//!
//! The line and character diffs themselves come from the `similar` crate.
//! This module arranges the result into rows for a split view: each row
//! has an optional left line (from text A) and an optional right line (from
//! text B). Changed lines that pair up positionally carry inline segments
//! marking which parts differ.
//!
//! ```
//! use sidediff::diff::{split_diff, DiffOptions, LineKind};
//!
//! let diff = split_diff("hello", "hallo", &DiffOptions::default());
//! let left = diff.rows[0].left().unwrap();
//! assert_eq!(left.kind, LineKind::Removed);
//! assert_eq!(left.segments[1].text, "e");
//! assert!(left.segments[1].emphasized);
//! ```

mod fold;
mod inline;
mod split;

pub use fold::fold_unchanged;
pub use inline::inline_segments;
pub use split::{split_diff, split_lines};

use serde::{Deserialize, Serialize};

/// Granularity of the highlight inside a changed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InlineMethod {
    #[default]
    Chars,
    Words,
}

/// Options for building a [`SplitDiff`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffOptions {
    pub inline_method: InlineMethod,
    /// Unchanged lines kept around each change when folding.
    pub context_lines: usize,
    /// Collapse unchanged runs outside the context window.
    pub fold_unchanged: bool,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            inline_method: InlineMethod::Chars,
            context_lines: 3,
            fold_unchanged: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Unchanged,
    Removed,
    Added,
}

/// A run of text inside a line. `emphasized` marks the part that differs
/// from the paired line on the other side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub emphasized: bool,
}

impl Segment {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasized: false,
        }
    }

    pub fn emphasized(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasized: true,
        }
    }
}

/// One line on one side of the split view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SideLine {
    /// 1-based line number in its own text.
    pub number: usize,
    pub kind: LineKind,
    pub segments: Vec<Segment>,
}

impl SideLine {
    /// The full line text without highlighting.
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplitRow {
    Line {
        left: Option<SideLine>,
        right: Option<SideLine>,
    },
    /// A collapsed run of unchanged lines.
    Fold { hidden: usize },
}

impl SplitRow {
    pub fn left(&self) -> Option<&SideLine> {
        match self {
            SplitRow::Line { left, .. } => left.as_ref(),
            SplitRow::Fold { .. } => None,
        }
    }

    pub fn right(&self) -> Option<&SideLine> {
        match self {
            SplitRow::Line { right, .. } => right.as_ref(),
            SplitRow::Fold { .. } => None,
        }
    }

    pub fn is_unchanged(&self) -> bool {
        matches!(
            self,
            SplitRow::Line { left: Some(l), right: Some(r) }
                if l.kind == LineKind::Unchanged && r.kind == LineKind::Unchanged
        )
    }
}

/// Line counts of a diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DiffSummary {
    pub added: usize,
    pub removed: usize,
    pub unchanged: usize,
}

impl DiffSummary {
    pub fn has_changes(&self) -> bool {
        self.added > 0 || self.removed > 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SplitDiff {
    pub rows: Vec<SplitRow>,
    pub summary: DiffSummary,
}
