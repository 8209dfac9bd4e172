//! Boundary to the remote course service.
//!
//! The quiz core never talks to the network; services fetch content through a
//! `CourseGateway` before a session starts and hand summaries back to it afterwards.

mod http;
mod memory;
mod wire;

use async_trait::async_trait;

use quiz_core::model::{
    CourseChapter, CourseId, CourseListing, Flashcard, FlashcardSetId, QuestionDraft, QuizId,
    QuizSubmission,
};

use crate::error::GatewayError;

pub use http::HttpCourseGateway;
pub use memory::InMemoryGateway;

/// Questions for one quiz, as delivered by the course service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizContent {
    pub id: QuizId,
    pub course_title: String,
    pub questions: Vec<QuestionDraft>,
}

/// A flashcard set as listed by the course service, without its cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashcardSet {
    pub id: FlashcardSetId,
    pub course_title: String,
    pub cards_count: u32,
}

/// Acknowledgement returned by write endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Receipt {
    pub message: Option<String>,
}

/// Contract for fetching course content and recording results.
#[async_trait]
pub trait CourseGateway: Send + Sync {
    /// Fetch the questions of a quiz.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::QuizNotFound` if the quiz is unknown, or transport errors.
    async fn fetch_quiz(&self, quiz_id: &QuizId) -> Result<QuizContent, GatewayError>;

    /// Record a finished quiz attempt.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError` if the service rejects or cannot receive the submission.
    async fn submit_quiz(&self, submission: &QuizSubmission) -> Result<Receipt, GatewayError>;

    /// Courses the current user is enrolled in, in service order.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError` on transport or decoding failures.
    async fn list_enrolled_courses(&self) -> Result<Vec<CourseListing>, GatewayError>;

    /// Mark a chapter of a course as completed.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::CourseNotFound` if the course is unknown, or transport errors.
    async fn complete_chapter(
        &self,
        course_id: &CourseId,
        chapter_index: u32,
    ) -> Result<Receipt, GatewayError>;

    /// Chapters of a course with their page content, in course order.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::CourseNotFound` if the course is unknown, or transport errors.
    async fn fetch_course_chapters(
        &self,
        course_id: &CourseId,
    ) -> Result<Vec<CourseChapter>, GatewayError>;

    /// Flashcard sets available to the current user.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError` on transport or decoding failures.
    async fn list_flashcard_sets(&self) -> Result<Vec<FlashcardSet>, GatewayError>;

    /// Cards of one flashcard set, in service order.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::FlashcardSetNotFound` if the set is unknown, or transport errors.
    async fn fetch_flashcards(
        &self,
        set_id: &FlashcardSetId,
    ) -> Result<Vec<Flashcard>, GatewayError>;
}
