#![forbid(unsafe_code)]

pub mod config;
pub mod course_service;
pub mod error;
pub mod flashcard_service;
pub mod gateway;
pub mod sessions;

pub use quiz_core::Shuffle;

pub use config::ApiConfig;
pub use course_service::CourseProgressService;
pub use error::{
    ConfigError, CourseServiceError, FlashcardServiceError, GatewayError, QuizServiceError,
};
pub use flashcard_service::FlashcardService;
pub use gateway::{
    CourseGateway, FlashcardSet, HttpCourseGateway, InMemoryGateway, QuizContent, Receipt,
};
pub use sessions::{
    ActiveQuiz, QuizAnswerResult, QuizLoopService, QuizProgress, QuizStep, SubmittedQuiz,
};
