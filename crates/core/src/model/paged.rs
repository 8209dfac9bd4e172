//! Forward/back navigation over an ordered list of pages.
//!
//! Chapter readers, flashcard decks and quizzes all step through a fixed list
//! with a bounded cursor; they share this one implementation.

use serde::{Deserialize, Serialize};

use super::progress::ratio_percent;

/// Cursor over a fixed, ordered list of items.
///
/// The cursor stays within `0..len` (or at 0 when empty); moving past either end is a no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagedSession<T> {
    items: Vec<T>,
    index: usize,
}

impl<T> PagedSession<T> {
    #[must_use]
    pub fn new(items: Vec<T>) -> Self {
        Self { items, index: 0 }
    }

    /// Item under the cursor, `None` only when the session is empty.
    #[must_use]
    pub fn current(&self) -> Option<&T> {
        self.items.get(self.index)
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    #[must_use]
    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    /// True when the cursor sits on the final item. Always false for an empty session.
    #[must_use]
    pub fn is_last(&self) -> bool {
        !self.items.is_empty() && self.index == self.items.len() - 1
    }

    /// Move one item forward. Returns false when already on the last item.
    pub fn advance(&mut self) -> bool {
        if self.index + 1 < self.items.len() {
            self.index += 1;
            true
        } else {
            false
        }
    }

    /// Move one item back. Returns false when already on the first item.
    pub fn go_back(&mut self) -> bool {
        if self.index > 0 {
            self.index -= 1;
            true
        } else {
            false
        }
    }

    /// Move straight to `index`, clamped into range. Returns whether the cursor moved.
    pub fn jump_to(&mut self, index: usize) -> bool {
        let target = index.min(self.items.len().saturating_sub(1));
        let moved = target != self.index;
        self.index = target;
        moved
    }

    /// Reading position as a percentage: page `index + 1` of `len`.
    #[must_use]
    pub fn position_percent(&self) -> f64 {
        if self.items.is_empty() {
            return 0.0;
        }
        ratio_percent(self.index + 1, self.items.len())
    }
}

//
// ─── PAGE CONTENT ──────────────────────────────────────────────────────────────
//

/// Two-sided study card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    pub front: String,
    pub back: String,
}

impl Flashcard {
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            front: front.into(),
            back: back.into(),
        }
    }
}

/// One page of a course chapter.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChapterPage {
    pub topic: String,
    pub explain: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub example: String,
}

impl ChapterPage {
    /// Text read aloud for this page.
    #[must_use]
    pub fn narration(&self) -> String {
        let mut text = format!("{}. {}", self.topic, self.explain);
        if !self.example.trim().is_empty() {
            text.push_str(". Here is an example: ");
            text.push_str(&self.example);
        }
        text
    }
}

/// A named chapter of a course and its pages.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CourseChapter {
    pub name: String,
    pub pages: Vec<ChapterPage>,
}

impl CourseChapter {
    /// Start reading this chapter from its first page.
    #[must_use]
    pub fn into_reader(self) -> ChapterReader {
        PagedSession::new(self.pages)
    }
}

pub type FlashcardDeck = PagedSession<Flashcard>;
pub type ChapterReader = PagedSession<ChapterPage>;
