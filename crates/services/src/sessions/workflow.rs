use std::sync::Arc;

use tracing::{debug, info};

use quiz_core::Shuffle;
use quiz_core::model::{AnswerRecord, QuizId, QuizSession, SessionSummary};

use super::progress::QuizProgress;
use crate::error::QuizServiceError;
use crate::gateway::{CourseGateway, Receipt};

/// A quiz in progress together with where it came from.
#[derive(Debug, Clone)]
pub struct ActiveQuiz {
    quiz_id: QuizId,
    course_title: String,
    session: QuizSession,
}

impl ActiveQuiz {
    #[must_use]
    pub fn quiz_id(&self) -> &QuizId {
        &self.quiz_id
    }

    #[must_use]
    pub fn course_title(&self) -> &str {
        &self.course_title
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        QuizProgress::of(&self.session)
    }
}

/// Result of answering the current question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizAnswerResult {
    pub answer: AnswerRecord,
    pub progress: QuizProgress,
}

/// Result of moving the cursor. `moved` is false at either end of the quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizStep {
    pub moved: bool,
    pub progress: QuizProgress,
}

/// A quiz that has been scored and accepted by the course service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedQuiz {
    pub quiz_id: QuizId,
    pub summary: SessionSummary,
    pub receipt: Receipt,
}

/// Orchestrates fetching a quiz, running it, and submitting the result.
#[derive(Clone)]
pub struct QuizLoopService {
    gateway: Arc<dyn CourseGateway>,
    shuffle: Shuffle,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(gateway: Arc<dyn CourseGateway>) -> Self {
        Self {
            gateway,
            shuffle: Shuffle::Random,
        }
    }

    #[must_use]
    pub fn with_shuffle(mut self, shuffle: Shuffle) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Fetch a quiz and start a session over its questions.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Gateway` if the quiz cannot be fetched, or
    /// `QuizServiceError::Quiz` if any of its questions is malformed.
    pub async fn start_quiz(&self, quiz_id: &QuizId) -> Result<ActiveQuiz, QuizServiceError> {
        let content = self.gateway.fetch_quiz(quiz_id).await?;
        let session = QuizSession::start(content.questions, &self.shuffle)?;
        debug!(%quiz_id, questions = session.len(), "quiz started");

        Ok(ActiveQuiz {
            quiz_id: content.id,
            course_title: content.course_title,
            session,
        })
    }

    /// Record `option` for the current question.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Quiz` when the session has no current question.
    pub fn answer_current(
        &self,
        quiz: &mut ActiveQuiz,
        option: &str,
    ) -> Result<QuizAnswerResult, QuizServiceError> {
        let answer = quiz.session.submit_answer(option)?.clone();
        Ok(QuizAnswerResult {
            answer,
            progress: quiz.progress(),
        })
    }

    /// Move to the next question.
    pub fn next(&self, quiz: &mut ActiveQuiz) -> QuizStep {
        let moved = quiz.session.advance();
        QuizStep {
            moved,
            progress: quiz.progress(),
        }
    }

    /// Move to the previous question.
    pub fn back(&self, quiz: &mut ActiveQuiz) -> QuizStep {
        let moved = quiz.session.go_back();
        QuizStep {
            moved,
            progress: quiz.progress(),
        }
    }

    /// Score the quiz and post it to the course service.
    ///
    /// The session is left untouched, so a failed post can be retried.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::NothingToSubmit` for a quiz without questions,
    /// `QuizServiceError::Quiz` if some question is unanswered, or
    /// `QuizServiceError::Gateway` if the service rejects the submission.
    pub async fn submit(&self, quiz: &ActiveQuiz) -> Result<SubmittedQuiz, QuizServiceError> {
        if quiz.session.is_empty() {
            return Err(QuizServiceError::NothingToSubmit);
        }
        let summary = quiz.session.summarize()?;
        let submission = summary.to_submission(quiz.quiz_id.clone());
        let receipt = self.gateway.submit_quiz(&submission).await?;

        info!(
            quiz_id = %quiz.quiz_id,
            correct = summary.correct_count(),
            total = summary.total_questions(),
            score = summary.score_percent(),
            "quiz submitted"
        );

        Ok(SubmittedQuiz {
            quiz_id: quiz.quiz_id.clone(),
            summary,
            receipt,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use quiz_core::model::{QuestionDraft, QuizError};

    use crate::gateway::{InMemoryGateway, QuizContent};

    fn service_with(questions: Vec<QuestionDraft>) -> (QuizLoopService, InMemoryGateway) {
        let gateway = InMemoryGateway::new();
        gateway
            .insert_quiz(QuizContent {
                id: QuizId::new("quiz-1"),
                course_title: "Rust".into(),
                questions,
            })
            .unwrap();
        let service =
            QuizLoopService::new(Arc::new(gateway.clone())).with_shuffle(Shuffle::Disabled);
        (service, gateway)
    }

    #[tokio::test]
    async fn answer_reports_progress() {
        let (service, _gateway) = service_with(vec![
            QuestionDraft::new("Q1", ["A", "B"], "A"),
            QuestionDraft::new("Q2", ["A", "B"], "B"),
        ]);
        let mut quiz = service.start_quiz(&QuizId::new("quiz-1")).await.unwrap();
        assert_eq!(quiz.course_title(), "Rust");

        let result = service.answer_current(&mut quiz, "A").unwrap();
        assert!(result.answer.is_correct);
        assert_eq!(result.progress.answered, 1);
        assert_eq!(result.progress.remaining, 1);
        assert!(!result.progress.is_last);
        assert!(!result.progress.is_complete);
    }

    #[tokio::test]
    async fn next_and_back_stop_at_the_ends() {
        let (service, _gateway) = service_with(vec![
            QuestionDraft::new("Q1", ["A", "B"], "A"),
            QuestionDraft::new("Q2", ["A", "B"], "B"),
        ]);
        let mut quiz = service.start_quiz(&QuizId::new("quiz-1")).await.unwrap();

        let step = service.back(&mut quiz);
        assert!(!step.moved);
        assert_eq!(step.progress.position, 0);

        let step = service.next(&mut quiz);
        assert!(step.moved);
        assert!(step.progress.is_last);

        let step = service.next(&mut quiz);
        assert!(!step.moved);
        assert_eq!(step.progress.position, 1);
    }

    #[tokio::test]
    async fn early_submit_is_rejected_and_nothing_is_posted() {
        let (service, gateway) = service_with(vec![
            QuestionDraft::new("Q1", ["A", "B"], "A"),
            QuestionDraft::new("Q2", ["A", "B"], "B"),
        ]);
        let mut quiz = service.start_quiz(&QuizId::new("quiz-1")).await.unwrap();
        service.answer_current(&mut quiz, "A").unwrap();

        let err = service.submit(&quiz).await.unwrap_err();
        assert!(matches!(
            err,
            QuizServiceError::Quiz(QuizError::PrematureSummary { .. })
        ));
        assert!(gateway.submissions().unwrap().is_empty());
    }

    #[tokio::test]
    async fn empty_quiz_cannot_be_submitted() {
        let (service, _gateway) = service_with(Vec::new());
        let quiz = service.start_quiz(&QuizId::new("quiz-1")).await.unwrap();
        let err = service.submit(&quiz).await.unwrap_err();
        assert!(matches!(err, QuizServiceError::NothingToSubmit));
    }

    #[tokio::test]
    async fn malformed_quiz_fails_to_start() {
        let (service, _gateway) = service_with(vec![QuestionDraft::new("Q1", ["A"], "B")]);
        let err = service
            .start_quiz(&QuizId::new("quiz-1"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            QuizServiceError::Quiz(QuizError::InvalidQuestion { index: 0, .. })
        ));
    }
}
