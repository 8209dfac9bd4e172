use std::sync::Arc;

use tracing::debug;

use quiz_core::model::{FlashcardDeck, FlashcardSetId, PagedSession};

use crate::error::FlashcardServiceError;
use crate::gateway::{CourseGateway, FlashcardSet};

/// Flashcard sets and decks on top of a `CourseGateway`.
#[derive(Clone)]
pub struct FlashcardService {
    gateway: Arc<dyn CourseGateway>,
}

impl FlashcardService {
    #[must_use]
    pub fn new(gateway: Arc<dyn CourseGateway>) -> Self {
        Self { gateway }
    }

    /// # Errors
    ///
    /// Returns `FlashcardServiceError::Gateway` if the list cannot be fetched.
    pub async fn list_sets(&self) -> Result<Vec<FlashcardSet>, FlashcardServiceError> {
        Ok(self.gateway.list_flashcard_sets().await?)
    }

    /// Fetch a set and open it as a deck positioned on its first card.
    ///
    /// # Errors
    ///
    /// Returns `FlashcardServiceError::EmptyDeck` for a set without cards, or
    /// `FlashcardServiceError::Gateway` if the set cannot be fetched.
    pub async fn open_deck(
        &self,
        set_id: &FlashcardSetId,
    ) -> Result<FlashcardDeck, FlashcardServiceError> {
        let cards = self.gateway.fetch_flashcards(set_id).await?;
        if cards.is_empty() {
            return Err(FlashcardServiceError::EmptyDeck {
                set_id: set_id.clone(),
            });
        }
        debug!(%set_id, cards = cards.len(), "flashcard deck opened");
        Ok(PagedSession::new(cards))
    }
}
