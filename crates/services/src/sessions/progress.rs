use quiz_core::model::QuizSession;

/// Aggregated view of quiz progress, useful for UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizProgress {
    pub total: usize,
    pub answered: usize,
    pub remaining: usize,
    pub position: usize,
    pub is_last: bool,
    pub is_complete: bool,
}

impl QuizProgress {
    #[must_use]
    pub fn of(session: &QuizSession) -> Self {
        let total = session.len();
        let answered = session.answered_count();
        Self {
            total,
            answered,
            remaining: total.saturating_sub(answered),
            position: session.current_index(),
            is_last: session.is_last(),
            is_complete: session.is_complete(),
        }
    }
}
