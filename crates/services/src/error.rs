//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::{CourseId, FlashcardSetId, QuizError, QuizId};

/// Errors emitted while reading service configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid course service url {raw:?}: {source}")]
    InvalidUrl {
        raw: String,
        #[source]
        source: url::ParseError,
    },
    #[error("course service url must use http or https, got {scheme:?}")]
    UnsupportedScheme { scheme: String },
}

/// Errors emitted by `CourseGateway` implementations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GatewayError {
    #[error("course service returned {status}: {message}")]
    HttpStatus {
        status: reqwest::StatusCode,
        message: String,
    },
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("quiz {0} not found")]
    QuizNotFound(QuizId),
    #[error("course {0} not found")]
    CourseNotFound(CourseId),
    #[error("flashcard set {0} not found")]
    FlashcardSetNotFound(FlashcardSetId),
    #[error("course service unavailable: {0}")]
    Unavailable(String),
}

/// Errors emitted by `QuizLoopService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizServiceError {
    #[error("quiz has no answers to submit")]
    NothingToSubmit,
    #[error(transparent)]
    Quiz(#[from] QuizError),
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

/// Errors emitted by `CourseProgressService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CourseServiceError {
    #[error("chapter {index} is out of range for course {course_id} ({chapters} chapters)")]
    ChapterOutOfRange {
        course_id: CourseId,
        index: u32,
        chapters: u32,
    },
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

/// Errors emitted by `FlashcardService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FlashcardServiceError {
    #[error("flashcard set {set_id} has no cards")]
    EmptyDeck { set_id: FlashcardSetId },
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}
