mod progress;
mod workflow;

// Public API of the quiz session subsystem.
pub use crate::error::QuizServiceError;
pub use progress::QuizProgress;
pub use workflow::{ActiveQuiz, QuizAnswerResult, QuizLoopService, QuizStep, SubmittedQuiz};
