use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::QuestionId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question has no options")]
    NoOptions,

    #[error("correct option {correct:?} is not one of the options")]
    CorrectOptionMissing { correct: String },
}

//
// ─── QUESTION TYPES ────────────────────────────────────────────────────────────
//

/// Unvalidated question as it arrives from the course service.
///
/// Serialized with the service's field names (`question`, `options`, `correctAns`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionDraft {
    #[serde(rename = "question")]
    pub prompt: String,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(rename = "correctAns")]
    pub correct_option: String,
}

impl QuestionDraft {
    pub fn new(
        prompt: impl Into<String>,
        options: impl IntoIterator<Item = impl Into<String>>,
        correct_option: impl Into<String>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            options: options.into_iter().map(Into::into).collect(),
            correct_option: correct_option.into(),
        }
    }

    /// Validate the draft and bind it to `id`.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::NoOptions` when there is nothing to choose from.
    /// Returns `QuestionError::CorrectOptionMissing` when the correct option is not listed,
    /// which would make the question unwinnable.
    pub fn validate(self, id: QuestionId) -> Result<Question, QuestionError> {
        if self.options.is_empty() {
            return Err(QuestionError::NoOptions);
        }
        if !self.options.iter().any(|o| *o == self.correct_option) {
            return Err(QuestionError::CorrectOptionMissing {
                correct: self.correct_option,
            });
        }

        Ok(Question {
            id,
            prompt: self.prompt,
            options: self.options,
            correct_option: self.correct_option,
        })
    }
}

/// A multiple-choice question whose correct option is guaranteed to be among its options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    prompt: String,
    options: Vec<String>,
    correct_option: String,
}

impl Question {
    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct_option(&self) -> &str {
        &self.correct_option
    }

    /// Exact comparison against the correct option; anything else is wrong.
    #[must_use]
    pub fn is_correct(&self, selected: &str) -> bool {
        self.correct_option == selected
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_draft_keeps_fields() {
        let q = QuestionDraft::new("2 + 2?", ["3", "4"], "4")
            .validate(QuestionId::new(0))
            .unwrap();

        assert_eq!(q.id(), QuestionId::new(0));
        assert_eq!(q.prompt(), "2 + 2?");
        assert_eq!(q.options(), ["3".to_string(), "4".to_string()]);
        assert_eq!(q.correct_option(), "4");
    }

    #[test]
    fn draft_reads_service_field_names() {
        let draft: QuestionDraft = serde_json::from_str(
            r#"{"question": "Borrow checker?", "options": ["yes", "no"], "correctAns": "yes"}"#,
        )
        .unwrap();
        assert_eq!(draft, QuestionDraft::new("Borrow checker?", ["yes", "no"], "yes"));

        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["correctAns"], "yes");
        assert_eq!(json["question"], "Borrow checker?");
    }

    #[test]
    fn empty_options_rejected() {
        let err = QuestionDraft::new("?", Vec::<String>::new(), "a")
            .validate(QuestionId::new(0))
            .unwrap_err();
        assert_eq!(err, QuestionError::NoOptions);
    }

    #[test]
    fn correct_option_must_be_listed() {
        let err = QuestionDraft::new("?", ["a", "b"], "c")
            .validate(QuestionId::new(0))
            .unwrap_err();
        assert!(matches!(err, QuestionError::CorrectOptionMissing { correct } if correct == "c"));
    }

    #[test]
    fn matching_is_exact() {
        let q = QuestionDraft::new("?", ["Rust", "Go"], "Rust")
            .validate(QuestionId::new(1))
            .unwrap();
        assert!(q.is_correct("Rust"));
        assert!(!q.is_correct("rust"));
        assert!(!q.is_correct("Rust "));
        assert!(!q.is_correct("not an option"));
    }
}
