use serde::{Deserialize, Serialize};

/// `part / whole * 100` as a float. Callers guard `whole == 0`.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn ratio_percent(part: usize, whole: usize) -> f64 {
    part as f64 / whole as f64 * 100.0
}

/// Course completion percentage.
///
/// Returns 0 for a course with no chapters and clamps to 100 when the completed
/// count overshoots the chapter count.
#[must_use]
pub fn percent(chapters_count: u32, completed_chapters: u32) -> f64 {
    if chapters_count == 0 {
        return 0.0;
    }
    let completed = completed_chapters.min(chapters_count);
    ratio_percent(completed as usize, chapters_count as usize)
}

/// Medal shown next to a course, picked from its completion percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProgressBadge {
    Gold,
    Silver,
    Bronze,
}

impl ProgressBadge {
    #[must_use]
    pub fn for_percent(percent: f64) -> Self {
        if percent >= 75.0 {
            Self::Gold
        } else if percent >= 50.0 {
            Self::Silver
        } else {
            Self::Bronze
        }
    }
}

/// Chapter completion state of one enrolled course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CourseProgress {
    pub chapters_count: u32,
    pub completed_chapters: u32,
}

impl CourseProgress {
    #[must_use]
    pub fn new(chapters_count: u32, completed_chapters: u32) -> Self {
        Self {
            chapters_count,
            completed_chapters,
        }
    }

    #[must_use]
    pub fn percent(&self) -> f64 {
        percent(self.chapters_count, self.completed_chapters)
    }

    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn rounded_percent(&self) -> u8 {
        self.percent().round() as u8
    }

    #[must_use]
    pub fn badge(&self) -> ProgressBadge {
        ProgressBadge::for_percent(self.percent())
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.chapters_count > 0 && self.completed_chapters >= self.chapters_count
    }

    /// Chapter to resume from: one past the highest completed chapter index.
    ///
    /// Returns `Some(0)` when nothing is completed and `None` once the next index
    /// would fall past the last chapter.
    #[must_use]
    pub fn next_chapter_index(&self, completed_indices: &[u32]) -> Option<u32> {
        let next = completed_indices
            .iter()
            .max()
            .map_or(0, |last| last.saturating_add(1));
        (next < self.chapters_count).then_some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_chapters_is_zero() {
        assert_eq!(percent(0, 0), 0.0);
        assert_eq!(percent(0, 3), 0.0);
    }

    #[test]
    fn all_completed_is_hundred() {
        for c in 1..=50 {
            assert_eq!(percent(c, c), 100.0, "chapters = {c}");
        }
        assert_eq!(percent(5, 5), 100.0);
    }

    #[test]
    fn overshoot_is_clamped() {
        assert_eq!(percent(4, 9), 100.0);
    }

    #[test]
    fn monotonic_in_completed() {
        for c in 0..=20 {
            let mut previous = percent(c, 0);
            for k in 0..=c + 3 {
                let p = percent(c, k);
                assert!(p >= previous, "percent({c}, {k}) dropped");
                assert!((0.0..=100.0).contains(&p));
                previous = p;
            }
        }
    }

    #[test]
    fn badge_thresholds() {
        assert_eq!(CourseProgress::new(4, 3).badge(), ProgressBadge::Gold);
        assert_eq!(CourseProgress::new(4, 2).badge(), ProgressBadge::Silver);
        assert_eq!(CourseProgress::new(4, 1).badge(), ProgressBadge::Bronze);
        assert_eq!(CourseProgress::new(0, 0).badge(), ProgressBadge::Bronze);
    }

    #[test]
    fn rounded_percent_rounds() {
        assert_eq!(CourseProgress::new(3, 2).rounded_percent(), 67);
        assert_eq!(CourseProgress::new(3, 1).rounded_percent(), 33);
    }

    #[test]
    fn next_chapter_follows_highest_completed() {
        let progress = CourseProgress::new(5, 2);
        assert_eq!(progress.next_chapter_index(&[]), Some(0));
        assert_eq!(progress.next_chapter_index(&[1, 0]), Some(2));
        assert_eq!(progress.next_chapter_index(&[3, 0]), Some(4));
        assert_eq!(progress.next_chapter_index(&[4]), None);
    }

    #[test]
    fn finished_requires_chapters() {
        assert!(!CourseProgress::new(0, 0).is_finished());
        assert!(CourseProgress::new(2, 2).is_finished());
        assert!(!CourseProgress::new(2, 1).is_finished());
    }
}
