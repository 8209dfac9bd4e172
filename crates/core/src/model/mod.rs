mod catalog;
mod ids;
mod paged;
mod progress;
mod question;
mod quiz;
mod summary;

pub use ids::{CourseId, FlashcardSetId, ParseIdError, QuestionId, QuizId};

pub use catalog::{CourseListing, CourseQuery, CourseSort};
pub use paged::{
    ChapterPage, ChapterReader, CourseChapter, Flashcard, FlashcardDeck, PagedSession,
};
pub use progress::{CourseProgress, ProgressBadge, percent};
pub use question::{Question, QuestionDraft, QuestionError};
pub use quiz::{AnswerRecord, QuizError, QuizSession};
pub use summary::{QuizSubmission, SessionSummary, SubmittedAnswer, TranscriptEntry, score_percent};
