use rand::Rng;
use thiserror::Error;

use crate::model::ids::QuestionId;
use crate::model::paged::PagedSession;
use crate::model::progress::ratio_percent;
use crate::model::question::{Question, QuestionDraft, QuestionError};
use crate::model::summary::{SessionSummary, TranscriptEntry};
use crate::shuffle::{Shuffle, shuffle_with};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("no question at index {index} (session has {len})")]
    OutOfRange { index: usize, len: usize },

    #[error("question {index} is invalid: {source}")]
    InvalidQuestion {
        index: usize,
        #[source]
        source: QuestionError,
    },

    #[error("cannot summarize: {answered} of {total} questions answered")]
    PrematureSummary { answered: usize, total: usize },

    #[error("too many questions for a single session: {len}")]
    TooManyQuestions { len: usize },
}

//
// ─── ANSWERS ───────────────────────────────────────────────────────────────────
//

/// The user's choice for one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    pub question_id: QuestionId,
    pub selected_option: String,
    pub is_correct: bool,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// A single quiz attempt.
///
/// Questions are put into presentation order once, at start. The user answers
/// the question under the cursor and steps forward; answering the same question
/// again replaces the earlier choice. The session is discarded after its summary
/// has been handed off.
#[derive(Debug, Clone)]
pub struct QuizSession {
    pages: PagedSession<Question>,
    // answer order; at most one record per question
    answers: Vec<AnswerRecord>,
}

impl QuizSession {
    /// Validate `drafts`, assign index-based ids and order them with `shuffle`.
    ///
    /// An empty list is accepted; every derived percentage of such a session is 0.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidQuestion` for the first draft that fails validation.
    /// Returns `QuizError::TooManyQuestions` if ids cannot be assigned.
    pub fn start(drafts: Vec<QuestionDraft>, shuffle: &Shuffle) -> Result<Self, QuizError> {
        let mut questions = validate_all(drafts)?;
        shuffle.apply(&mut questions);
        Ok(Self::from_ordered(questions))
    }

    /// Like [`QuizSession::start`], drawing the presentation order from `rng`.
    ///
    /// # Errors
    ///
    /// Same as [`QuizSession::start`].
    pub fn start_with_rng<R: Rng + ?Sized>(
        drafts: Vec<QuestionDraft>,
        rng: &mut R,
    ) -> Result<Self, QuizError> {
        let mut questions = validate_all(drafts)?;
        shuffle_with(&mut questions, rng);
        Ok(Self::from_ordered(questions))
    }

    fn from_ordered(questions: Vec<Question>) -> Self {
        Self {
            pages: PagedSession::new(questions),
            answers: Vec::new(),
        }
    }

    /// Questions in presentation order.
    #[must_use]
    pub fn questions(&self) -> &[Question] {
        self.pages.items()
    }

    /// Recorded answers, in the order they were first given.
    #[must_use]
    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }

    #[must_use]
    pub fn answer_for(&self, id: QuestionId) -> Option<&AnswerRecord> {
        self.answers.iter().find(|a| a.question_id == id)
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.pages.index()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// True on the final question; callers show "Submit" instead of "Next".
    #[must_use]
    pub fn is_last(&self) -> bool {
        self.pages.is_last()
    }

    /// # Errors
    ///
    /// Returns `QuizError::OutOfRange` when there is no question under the cursor.
    pub fn current_question(&self) -> Result<&Question, QuizError> {
        self.pages.current().ok_or(QuizError::OutOfRange {
            index: self.pages.index(),
            len: self.pages.len(),
        })
    }

    /// Record `selected` for the current question, replacing any earlier answer.
    ///
    /// The value is not checked against the options; anything that is not the
    /// correct option is simply wrong. The cursor does not move.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::OutOfRange` when there is no current question.
    pub fn submit_answer(
        &mut self,
        selected: impl Into<String>,
    ) -> Result<&AnswerRecord, QuizError> {
        let question = self.current_question()?;
        let selected = selected.into();
        let record = AnswerRecord {
            question_id: question.id(),
            is_correct: question.is_correct(&selected),
            selected_option: selected,
        };

        let slot = match self
            .answers
            .iter()
            .position(|a| a.question_id == record.question_id)
        {
            Some(pos) => {
                self.answers[pos] = record;
                pos
            }
            None => {
                self.answers.push(record);
                self.answers.len() - 1
            }
        };
        Ok(&self.answers[slot])
    }

    /// Step to the next question. Returns false when already on the last one.
    pub fn advance(&mut self) -> bool {
        self.pages.advance()
    }

    /// Step to the previous question. Returns false when already on the first one.
    pub fn go_back(&mut self) -> bool {
        self.pages.go_back()
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    /// Share of questions answered so far, for the progress bar.
    #[must_use]
    pub fn answered_percent(&self) -> f64 {
        if self.pages.is_empty() {
            return 0.0;
        }
        ratio_percent(self.answers.len(), self.pages.len())
    }

    /// On the last question and it has an answer.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.pages.is_last()
            && self
                .pages
                .current()
                .is_some_and(|q| self.answer_for(q.id()).is_some())
    }

    /// Score the attempt and build the review transcript in presentation order.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::PrematureSummary` unless every question has an answer.
    pub fn summarize(&self) -> Result<SessionSummary, QuizError> {
        let total = self.pages.len();
        let mut transcript = Vec::with_capacity(total);
        for question in self.pages.items() {
            let Some(answer) = self.answer_for(question.id()) else {
                return Err(QuizError::PrematureSummary {
                    answered: self.answers.len(),
                    total,
                });
            };
            transcript.push(TranscriptEntry {
                question_id: question.id(),
                prompt: question.prompt().to_owned(),
                selected_option: answer.selected_option.clone(),
                correct_option: question.correct_option().to_owned(),
                is_correct: answer.is_correct,
            });
        }
        Ok(SessionSummary::from_transcript(transcript))
    }
}

fn validate_all(drafts: Vec<QuestionDraft>) -> Result<Vec<Question>, QuizError> {
    let len = drafts.len();
    if u32::try_from(len).is_err() {
        return Err(QuizError::TooManyQuestions { len });
    }

    drafts
        .into_iter()
        .enumerate()
        .map(|(index, draft)| {
            let id = u32::try_from(index)
                .map(QuestionId::new)
                .map_err(|_| QuizError::TooManyQuestions { len })?;
            draft
                .validate(id)
                .map_err(|source| QuizError::InvalidQuestion { index, source })
        })
        .collect()
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
