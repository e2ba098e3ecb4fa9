//! The two text slots being compared.

use std::fmt;

/// Identity of a text slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    A,
    B,
}

impl Slot {
    pub const ALL: [Slot; 2] = [Slot::A, Slot::B];

    /// Human-readable label used in titles and notices.
    pub fn label(&self) -> &'static str {
        match self {
            Slot::A => "Text A",
            Slot::B => "Text B",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Owns the contents of slots A and B.
///
/// Contents are stored exactly as given: no trimming, no newline
/// normalization, no length cap.
#[derive(Debug, Clone, Default)]
pub struct TextStore {
    a: String,
    b: String,
}

impl TextStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the content of `slot` unconditionally.
    pub fn set_text(&mut self, slot: Slot, value: impl Into<String>) {
        let value = value.into();
        match slot {
            Slot::A => self.a = value,
            Slot::B => self.b = value,
        }
    }

    pub fn text(&self, slot: Slot) -> &str {
        match slot {
            Slot::A => &self.a,
            Slot::B => &self.b,
        }
    }

    /// Empty both slots in one step.
    pub fn clear(&mut self) {
        self.a.clear();
        self.b.clear();
    }

    /// True when both slots are empty.
    pub fn both_empty(&self) -> bool {
        self.a.is_empty() && self.b.is_empty()
    }

    /// True when both slots have content.
    pub fn both_filled(&self) -> bool {
        !self.a.is_empty() && !self.b.is_empty()
    }
}
