//! Learning session management for spaced repetition practice.
//! Walks today's queue card by card and feeds grades into the SM-2 scheduler.

use super::{Progress, ReviewRecord, ReviewStore, StudyQueue, VocabularyItem};
use chrono::NaiveDate;

/// What a single grading changed.
#[derive(Clone, Debug, PartialEq)]
pub struct GradeOutcome {
    pub item_id: String,
    pub record: ReviewRecord,
    pub xp_gained: u32,
}

/// Owns the queue and the card on screen. Dropped and rebuilt with the queue.
pub struct LearningSession {
    pub queue: StudyQueue,
    pub current: Option<VocabularyItem>,
    pub show_answer: bool,
    pub graded_count: usize,
    initial_new: usize,
    initial_review: usize,
}

impl LearningSession {
    /// Creates a session and draws its first card.
    pub fn new(queue: StudyQueue) -> Self {
        let initial_new = queue.new.len();
        let initial_review = queue.review.len();
        let mut session = Self {
            queue,
            current: None,
            show_answer: false,
            graded_count: 0,
            initial_new,
            initial_review,
        };
        session.next_card();
        session
    }

    pub fn current_card(&self) -> Option<&VocabularyItem> {
        self.current.as_ref()
    }

    pub fn toggle_answer(&mut self) {
        self.show_answer = !self.show_answer;
    }

    /// Moves to the next card. Returns `None` once both queues are drained.
    pub fn next_card(&mut self) -> Option<&VocabularyItem> {
        self.current = self.queue.pop_next();
        self.show_answer = false;
        self.current.as_ref()
    }

    /// Grades the current card, stores the new record, credits experience and
    /// advances. Does nothing when no card is shown.
    pub fn grade_current_card(
        &mut self,
        quality: u8,
        store: &mut ReviewStore,
        progress: &mut Progress,
        today: NaiveDate,
    ) -> Option<GradeOutcome> {
        let card = self.current.take()?;
        let record = store.grade(&card.id, quality, today).clone();
        let xp_gained = progress.record_grade(quality);
        self.graded_count += 1;

        log::debug!(
            "Graded '{}' with {}: interval {}d, due {}, EF {:.2}",
            card.hanzi,
            quality,
            record.interval_days,
            record.due,
            record.ease_factor
        );

        self.next_card();
        Some(GradeOutcome {
            item_id: card.id,
            record,
            xp_gained,
        })
    }

    /// True when every queued card has been shown and graded.
    pub fn is_completed(&self) -> bool {
        self.current.is_none() && self.queue.is_empty()
    }

    pub fn remaining_count(&self) -> usize {
        self.queue.len() + usize::from(self.current.is_some())
    }

    pub fn total_count(&self) -> usize {
        self.initial_new + self.initial_review
    }

    pub fn phase_message(&self) -> String {
        format!(
            "{} — {} of {} cards done",
            self.queue.info(),
            self.graded_count,
            self.total_count()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::RawEntry;
    use crate::models::{VocabularyCatalog, build_queue};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 8, 1).unwrap()
    }

    fn catalog() -> VocabularyCatalog {
        let entries = vec![
            RawEntry::new("你好", "nǐ hǎo", "hello", &["i"]),
            RawEntry::new("谢谢", "xièxie", "thanks; thank you", &["i"]),
            RawEntry::new("请", "qǐng", "please; to invite", &["v"]),
        ];
        VocabularyCatalog::from_entries(&entries, &mut ChaCha8Rng::seed_from_u64(0))
    }

    #[test]
    fn test_session_grades_every_card_then_completes() {
        let catalog = catalog();
        let mut store = ReviewStore::new();
        let mut progress = Progress::default();
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let queue = build_queue(&catalog, &store, today(), Some(15), 999, &mut rng);

        let mut session = LearningSession::new(queue);
        assert_eq!(session.total_count(), 3);
        assert_eq!(session.remaining_count(), 3);

        while !session.is_completed() {
            let outcome = session
                .grade_current_card(4, &mut store, &mut progress, today())
                .unwrap();
            assert_eq!(outcome.record.repetitions, 1);
            assert_eq!(outcome.xp_gained, 14);
        }

        assert_eq!(store.len(), 3);
        assert_eq!(progress.xp, 42);
        assert_eq!(session.graded_count, 3);
        assert!(session.current_card().is_none());
        assert!(session.grade_current_card(4, &mut store, &mut progress, today()).is_none());
    }

    #[test]
    fn test_empty_queue_is_completed_immediately() {
        let session = LearningSession::new(StudyQueue::default());
        assert!(session.is_completed());
        assert_eq!(session.remaining_count(), 0);
    }

    #[test]
    fn test_toggle_resets_on_next_card() {
        let catalog = catalog();
        let store = ReviewStore::new();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut session =
            LearningSession::new(build_queue(&catalog, &store, today(), Some(2), 0, &mut rng));

        session.toggle_answer();
        assert!(session.show_answer);
        session.next_card();
        assert!(!session.show_answer);
    }
}
