use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::model::ids::CourseId;
use crate::model::progress::CourseProgress;

/// An enrolled course as shown in the course list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseListing {
    pub id: CourseId,
    pub title: String,
    pub category: String,
    pub difficulty: String,
    pub progress: CourseProgress,
    /// Zero-based indices of chapters already completed.
    #[serde(default)]
    pub completed_chapter_indices: Vec<u32>,
}

impl CourseListing {
    fn matches(&self, needle: &str) -> bool {
        [&self.title, &self.category, &self.difficulty]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }

    /// Chapter the learner should continue with, if any remain.
    #[must_use]
    pub fn resume_chapter(&self) -> Option<u32> {
        self.progress
            .next_chapter_index(&self.completed_chapter_indices)
    }
}

/// Ordering applied to the course list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CourseSort {
    /// Keep the order the service returned.
    #[default]
    None,
    ProgressDesc,
    Title,
    Difficulty,
}

impl CourseSort {
    /// The mode the sort toggle switches to next.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::None => Self::ProgressDesc,
            Self::ProgressDesc => Self::Title,
            Self::Title => Self::Difficulty,
            Self::Difficulty => Self::None,
        }
    }

    /// Parse the short names used on the command line.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "none" => Some(Self::None),
            "progress" | "progress_desc" => Some(Self::ProgressDesc),
            "title" => Some(Self::Title),
            "difficulty" => Some(Self::Difficulty),
            _ => None,
        }
    }

    fn compare(self, a: &CourseListing, b: &CourseListing) -> Ordering {
        match self {
            Self::None => Ordering::Equal,
            Self::ProgressDesc => b.progress.percent().total_cmp(&a.progress.percent()),
            Self::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
            Self::Difficulty => a.difficulty.to_lowercase().cmp(&b.difficulty.to_lowercase()),
        }
    }
}

/// Search text plus sort mode for the course list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CourseQuery {
    pub search: String,
    pub sort: CourseSort,
}

impl CourseQuery {
    #[must_use]
    pub fn new(search: impl Into<String>, sort: CourseSort) -> Self {
        Self {
            search: search.into(),
            sort,
        }
    }

    /// Filter by case-insensitive substring on title, category or difficulty, then sort.
    ///
    /// Sorting is stable, so ties keep the service order.
    #[must_use]
    pub fn apply<'a>(&self, courses: &'a [CourseListing]) -> Vec<&'a CourseListing> {
        let needle = self.search.trim().to_lowercase();
        let mut list: Vec<&CourseListing> = if needle.is_empty() {
            courses.iter().collect()
        } else {
            courses.iter().filter(|c| c.matches(&needle)).collect()
        };
        list.sort_by(|a, b| self.sort.compare(a, b));
        list
    }
}
