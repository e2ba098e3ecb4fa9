//! Character statistics for the two slots.
//!
//! Everything here is a pure function of the slot contents and is
//! recomputed on every frame.

use serde::{Deserialize, Serialize};

use crate::diff::{split_lines, DiffSummary};
use crate::state::{Slot, TextStore};

/// How characters are counted.
///
/// `Utf16` counts UTF-16 code units, so a character outside the Basic
/// Multilingual Plane (most emoji) counts as 2. `Chars` counts Unicode scalar
/// values. `Bytes` counts UTF-8 bytes. None of them is a grapheme count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CountMode {
    #[default]
    Utf16,
    Chars,
    Bytes,
}

impl CountMode {
    /// Count the length of `text` under this mode.
    pub fn count(&self, text: &str) -> usize {
        match self {
            CountMode::Utf16 => text.encode_utf16().count(),
            CountMode::Chars => text.chars().count(),
            CountMode::Bytes => text.len(),
        }
    }

    /// Unit name shown next to `count`, singular for exactly one.
    pub fn unit(&self, count: usize) -> &'static str {
        match (self, count) {
            (CountMode::Utf16, 1) => "char",
            (CountMode::Utf16, _) => "chars",
            (CountMode::Chars, 1) => "code point",
            (CountMode::Chars, _) => "code points",
            (CountMode::Bytes, 1) => "byte",
            (CountMode::Bytes, _) => "bytes",
        }
    }
}

/// Counts for one slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotStats {
    pub characters: usize,
    /// Number of lines as the diff panel numbers them: an empty text has
    /// zero, a trailing newline does not start an extra line.
    pub lines: usize,
}

impl SlotStats {
    pub fn of(text: &str, mode: CountMode) -> Self {
        Self {
            characters: mode.count(text),
            lines: split_lines(text).len(),
        }
    }
}

/// Stats for both slots plus the line-level diff summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub a: SlotStats,
    pub b: SlotStats,
    pub mode: CountMode,
    pub summary: DiffSummary,
}

impl Stats {
    /// Project stats from the current store contents.
    pub fn project(store: &TextStore, mode: CountMode, summary: DiffSummary) -> Self {
        Self {
            a: SlotStats::of(store.text(Slot::A), mode),
            b: SlotStats::of(store.text(Slot::B), mode),
            mode,
            summary,
        }
    }

    pub fn for_slot(&self, slot: Slot) -> SlotStats {
        match slot {
            Slot::A => self.a,
            Slot::B => self.b,
        }
    }
}
