use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use quiz_core::model::{
    CourseChapter, CourseId, CourseListing, Flashcard, FlashcardSetId, QuizId, QuizSubmission,
};

use super::{CourseGateway, FlashcardSet, QuizContent, Receipt};
use crate::error::GatewayError;

#[derive(Default)]
struct State {
    quizzes: HashMap<QuizId, QuizContent>,
    courses: Vec<CourseListing>,
    chapters: HashMap<CourseId, Vec<CourseChapter>>,
    flashcard_sets: Vec<(FlashcardSet, Vec<Flashcard>)>,
    submissions: Vec<QuizSubmission>,
}

/// Simple in-memory gateway for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryGateway {
    state: Arc<Mutex<State>>,
}

impl InMemoryGateway {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, State>, GatewayError> {
        self.state
            .lock()
            .map_err(|e| GatewayError::Unavailable(e.to_string()))
    }

    /// Store or replace a quiz.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::Unavailable` if the state lock is poisoned.
    pub fn insert_quiz(&self, quiz: QuizContent) -> Result<(), GatewayError> {
        self.lock()?.quizzes.insert(quiz.id.clone(), quiz);
        Ok(())
    }

    /// Store or replace an enrolled course, keeping first-insert order.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::Unavailable` if the state lock is poisoned.
    pub fn insert_course(&self, course: CourseListing) -> Result<(), GatewayError> {
        let mut guard = self.lock()?;
        match guard.courses.iter_mut().find(|c| c.id == course.id) {
            Some(existing) => *existing = course,
            None => guard.courses.push(course),
        }
        Ok(())
    }

    /// Store or replace the chapter content of a course.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::Unavailable` if the state lock is poisoned.
    pub fn insert_chapters(
        &self,
        course_id: CourseId,
        chapters: Vec<CourseChapter>,
    ) -> Result<(), GatewayError> {
        self.lock()?.chapters.insert(course_id, chapters);
        Ok(())
    }

    /// Store or replace a flashcard set, keeping first-insert order.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::Unavailable` if the state lock is poisoned.
    pub fn insert_flashcards(
        &self,
        set_id: FlashcardSetId,
        course_title: impl Into<String>,
        cards: Vec<Flashcard>,
    ) -> Result<(), GatewayError> {
        let set = FlashcardSet {
            id: set_id,
            course_title: course_title.into(),
            cards_count: u32::try_from(cards.len()).unwrap_or(u32::MAX),
        };
        let mut guard = self.lock()?;
        match guard.flashcard_sets.iter_mut().find(|(s, _)| s.id == set.id) {
            Some(existing) => *existing = (set, cards),
            None => guard.flashcard_sets.push((set, cards)),
        }
        Ok(())
    }

    /// Submissions received so far, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::Unavailable` if the state lock is poisoned.
    pub fn submissions(&self) -> Result<Vec<QuizSubmission>, GatewayError> {
        Ok(self.lock()?.submissions.clone())
    }
}

#[async_trait]
impl CourseGateway for InMemoryGateway {
    async fn fetch_quiz(&self, quiz_id: &QuizId) -> Result<QuizContent, GatewayError> {
        self.lock()?
            .quizzes
            .get(quiz_id)
            .cloned()
            .ok_or_else(|| GatewayError::QuizNotFound(quiz_id.clone()))
    }

    async fn submit_quiz(&self, submission: &QuizSubmission) -> Result<Receipt, GatewayError> {
        let mut guard = self.lock()?;
        if !guard.quizzes.contains_key(&submission.quiz_id) {
            return Err(GatewayError::QuizNotFound(submission.quiz_id.clone()));
        }
        guard.submissions.push(submission.clone());
        Ok(Receipt {
            message: Some("Quiz submitted".to_string()),
        })
    }

    async fn list_enrolled_courses(&self) -> Result<Vec<CourseListing>, GatewayError> {
        Ok(self.lock()?.courses.clone())
    }

    async fn complete_chapter(
        &self,
        course_id: &CourseId,
        chapter_index: u32,
    ) -> Result<Receipt, GatewayError> {
        let mut guard = self.lock()?;
        let course = guard
            .courses
            .iter_mut()
            .find(|c| &c.id == course_id)
            .ok_or_else(|| GatewayError::CourseNotFound(course_id.clone()))?;

        if !course.completed_chapter_indices.contains(&chapter_index) {
            course.completed_chapter_indices.push(chapter_index);
            let progress = &mut course.progress;
            progress.completed_chapters = progress
                .completed_chapters
                .saturating_add(1)
                .min(progress.chapters_count);
        }

        Ok(Receipt {
            message: Some("Chapter completed".to_string()),
        })
    }

    async fn fetch_course_chapters(
        &self,
        course_id: &CourseId,
    ) -> Result<Vec<CourseChapter>, GatewayError> {
        self.lock()?
            .chapters
            .get(course_id)
            .cloned()
            .ok_or_else(|| GatewayError::CourseNotFound(course_id.clone()))
    }

    async fn list_flashcard_sets(&self) -> Result<Vec<FlashcardSet>, GatewayError> {
        Ok(self
            .lock()?
            .flashcard_sets
            .iter()
            .map(|(set, _)| set.clone())
            .collect())
    }

    async fn fetch_flashcards(
        &self,
        set_id: &FlashcardSetId,
    ) -> Result<Vec<Flashcard>, GatewayError> {
        self.lock()?
            .flashcard_sets
            .iter()
            .find(|(set, _)| &set.id == set_id)
            .map(|(_, cards)| cards.clone())
            .ok_or_else(|| GatewayError::FlashcardSetNotFound(set_id.clone()))
    }
}
