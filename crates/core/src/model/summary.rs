use serde::{Deserialize, Serialize};

use crate::model::ids::{QuestionId, QuizId};

/// One reviewed question in a finished quiz, in presentation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub question_id: QuestionId,
    pub prompt: String,
    pub selected_option: String,
    pub correct_option: String,
    pub is_correct: bool,
}

/// Score and review transcript of a completed quiz attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    total_questions: u32,
    correct_count: u32,
    transcript: Vec<TranscriptEntry>,
}

impl SessionSummary {
    /// Build a summary from transcript entries; counts are derived, never passed in.
    #[must_use]
    pub fn from_transcript(transcript: Vec<TranscriptEntry>) -> Self {
        let total_questions = u32::try_from(transcript.len()).unwrap_or(u32::MAX);
        let correct = transcript.iter().filter(|e| e.is_correct).count();
        let correct_count = u32::try_from(correct).unwrap_or(u32::MAX);
        Self {
            total_questions,
            correct_count,
            transcript,
        }
    }

    #[must_use]
    pub fn total_questions(&self) -> u32 {
        self.total_questions
    }

    #[must_use]
    pub fn correct_count(&self) -> u32 {
        self.correct_count
    }

    #[must_use]
    pub fn wrong_count(&self) -> u32 {
        self.total_questions.saturating_sub(self.correct_count)
    }

    /// Whole-number score, rounded half up. Zero when there were no questions.
    #[must_use]
    pub fn score_percent(&self) -> u8 {
        score_percent(self.correct_count, self.total_questions)
    }

    #[must_use]
    pub fn transcript(&self) -> &[TranscriptEntry] {
        &self.transcript
    }

    /// Shape posted to the course service when a quiz is submitted.
    #[must_use]
    pub fn to_submission(&self, quiz_id: QuizId) -> QuizSubmission {
        QuizSubmission {
            quiz_id,
            answers: self
                .transcript
                .iter()
                .map(|entry| SubmittedAnswer {
                    question: entry.prompt.clone(),
                    user_answer: entry.selected_option.clone(),
                    correct_answer: entry.correct_option.clone(),
                    is_correct: entry.is_correct,
                })
                .collect(),
            marks: self.correct_count,
        }
    }
}

/// `round(correct / total * 100)` in integer arithmetic.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn score_percent(correct: u32, total: u32) -> u8 {
    if total == 0 {
        return 0;
    }
    let correct = u64::from(correct.min(total));
    let total = u64::from(total);
    ((correct * 200 + total) / (total * 2)) as u8
}

//
// ─── OUTBOUND SHAPE ────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedAnswer {
    pub question: String,
    pub user_answer: String,
    pub correct_answer: String,
    pub is_correct: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizSubmission {
    pub quiz_id: QuizId,
    pub answers: Vec<SubmittedAnswer>,
    pub marks: u32,
}

impl QuizSubmission {
    /// Correct answers counted from the serialized answer list.
    #[must_use]
    pub fn recount_correct(&self) -> u32 {
        let n = self.answers.iter().filter(|a| a.is_correct).count();
        u32::try_from(n).unwrap_or(u32::MAX)
    }
}
