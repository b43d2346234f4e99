//! Customer reviews.

use lush_petals_core::Review;

use crate::notify::Notifier;
use crate::store::{KeyedListStore, Storage, StorageError, keys};

/// Result of a review submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewSubmission {
    /// Stored; the form can be reset.
    Accepted(Review),
    /// The text was blank. Nothing was stored and the form keeps its input.
    Rejected,
}

/// Appends submitted reviews to storage and lists them newest first.
#[derive(Debug, Clone)]
pub struct ReviewBoard<S> {
    store: KeyedListStore<S>,
}

impl<S: Storage> ReviewBoard<S> {
    #[must_use]
    pub const fn new(store: KeyedListStore<S>) -> Self {
        Self { store }
    }

    /// Stored reviews in display order: the last one stored comes first.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the reviews cannot be read.
    pub async fn load(&self) -> Result<Vec<Review>, StorageError> {
        let mut reviews: Vec<Review> = self.store.get(keys::REVIEWS).await?;
        reviews.reverse();
        Ok(reviews)
    }

    /// Store a review from raw form input.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the reviews cannot be read or written.
    pub async fn submit(
        &self,
        author: &str,
        text: &str,
        notifier: &mut impl Notifier,
    ) -> Result<ReviewSubmission, StorageError> {
        let Some(review) = Review::from_input(author, text) else {
            notifier.error("Please write a review before submitting.");
            return Ok(ReviewSubmission::Rejected);
        };

        let mut reviews: Vec<Review> = self.store.get(keys::REVIEWS).await?;
        reviews.push(review.clone());
        self.store.set(keys::REVIEWS, &reviews).await?;

        tracing::info!(author = %review.author, total = reviews.len(), "Review submitted");
        notifier.success("Your review has been submitted and saved!");
        Ok(ReviewSubmission::Accepted(review))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::notify::{Notice, NoticeLevel};
    use crate::store::MemoryStorage;

    fn board() -> (ReviewBoard<MemoryStorage>, KeyedListStore<MemoryStorage>) {
        let store = KeyedListStore::new(MemoryStorage::new());
        (ReviewBoard::new(store.clone()), store)
    }

    #[tokio::test]
    async fn test_newest_review_listed_first() {
        let (board, store) = board();
        let mut notices: Vec<Notice> = Vec::new();
        board.submit("Asha", "First!", &mut notices).await.unwrap();
        board.submit("Ravi", "Second", &mut notices).await.unwrap();

        let shown: Vec<_> = board
            .load()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.text)
            .collect();
        assert_eq!(shown, vec!["Second", "First!"]);

        // Storage order is submission order.
        let stored: Vec<Review> = store.get(keys::REVIEWS).await.unwrap();
        assert_eq!(stored[0].text, "First!");
        assert_eq!(stored[1].text, "Second");
    }

    #[tokio::test]
    async fn test_blank_text_is_rejected_without_writing() {
        let storage = MemoryStorage::new();
        let board = ReviewBoard::new(KeyedListStore::new(storage.clone()));
        let mut notices: Vec<Notice> = Vec::new();

        let outcome = board.submit("Asha", "   ", &mut notices).await.unwrap();
        assert_eq!(outcome, ReviewSubmission::Rejected);
        assert!(!storage.contains_key(keys::REVIEWS));
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].level, NoticeLevel::Error);
        assert_eq!(notices[0].message, "Please write a review before submitting.");
    }

    #[tokio::test]
    async fn test_blank_text_leaves_existing_reviews() {
        let (board, _) = board();
        let mut notices = Vec::new();
        board.submit("Asha", "Lovely", &mut notices).await.unwrap();
        board.submit("Ravi", "", &mut notices).await.unwrap();

        assert_eq!(board.load().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_anonymous_author() {
        let (board, _) = board();
        let mut notices = Vec::new();
        let outcome = board.submit("", "Fresh flowers", &mut notices).await.unwrap();

        let ReviewSubmission::Accepted(review) = outcome else {
            panic!("review should be accepted");
        };
        assert_eq!(review.author, Review::ANONYMOUS_AUTHOR);
        assert_eq!(notices[0].message, "Your review has been submitted and saved!");
    }

    #[tokio::test]
    async fn test_duplicate_reviews_are_kept() {
        let (board, _) = board();
        let mut notices = Vec::new();
        board.submit("Asha", "Same", &mut notices).await.unwrap();
        board.submit("Asha", "Same", &mut notices).await.unwrap();

        assert_eq!(board.load().await.unwrap().len(), 2);
    }
}
