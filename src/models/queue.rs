//! Builds today's study queue from the catalog and the review store.

use super::{ReviewStore, VocabularyCatalog, VocabularyItem};
use chrono::NaiveDate;
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::VecDeque;

/// Transient study order. Never persisted; rebuilt on every queue rebuild.
#[derive(Clone, Debug, Default)]
pub struct StudyQueue {
    pub new: VecDeque<VocabularyItem>,
    pub review: VecDeque<VocabularyItem>,
}

impl StudyQueue {
    /// Next card: reviews drain before new words. `None` means the session is done.
    pub fn pop_next(&mut self) -> Option<VocabularyItem> {
        self.review.pop_front().or_else(|| self.new.pop_front())
    }

    pub fn is_empty(&self) -> bool {
        self.new.is_empty() && self.review.is_empty()
    }

    pub fn len(&self) -> usize {
        self.new.len() + self.review.len()
    }

    pub fn info(&self) -> String {
        format!(
            "Queue — New: {} · Review: {}",
            self.new.len(),
            self.review.len()
        )
    }
}

/// Partitions the catalog into due and unseen words, shuffles each part and caps it.
///
/// `max_new = None` skips unseen words entirely (reviews-only session).
pub fn build_queue<R: Rng + ?Sized>(
    catalog: &VocabularyCatalog,
    store: &ReviewStore,
    today: NaiveDate,
    max_new: Option<usize>,
    max_reviews: usize,
    rng: &mut R,
) -> StudyQueue {
    let mut due: Vec<&VocabularyItem> = catalog
        .items
        .iter()
        .filter(|item| store.get(&item.id).is_some_and(|r| r.is_due(today)))
        .collect();
    due.shuffle(rng);
    due.truncate(max_reviews);

    let new = match max_new {
        Some(limit) => {
            let mut unseen: Vec<&VocabularyItem> = catalog
                .items
                .iter()
                .filter(|item| !store.contains(&item.id))
                .collect();
            unseen.shuffle(rng);
            unseen.truncate(limit);
            unseen.into_iter().cloned().collect()
        }
        None => VecDeque::new(),
    };

    let queue = StudyQueue {
        new,
        review: due.into_iter().cloned().collect(),
    };
    log::debug!("Rebuilt queue for {}: {}", today, queue.info());
    queue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::RawEntry;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    fn catalog(size: usize) -> VocabularyCatalog {
        let entries: Vec<RawEntry> = (0..size)
            .map(|i| RawEntry::new(&format!("字{}", i), &format!("zi{}", i), "char", &["n"]))
            .collect();
        VocabularyCatalog::from_entries(&entries, &mut ChaCha8Rng::seed_from_u64(0))
    }

    #[test]
    fn test_empty_store_gives_capped_distinct_new_queue() {
        let catalog = catalog(20);
        let store = ReviewStore::new();
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        let queue = build_queue(&catalog, &store, day(1), Some(15), 999, &mut rng);

        assert_eq!(queue.new.len(), 15);
        assert!(queue.review.is_empty());
        let ids: HashSet<_> = queue.new.iter().map(|i| i.id.clone()).collect();
        assert_eq!(ids.len(), 15);
    }

    #[test]
    fn test_due_set_is_exactly_items_due_by_today() {
        let catalog = catalog(10);
        let mut store = ReviewStore::new();
        // due day 2
        store.grade(&catalog.items[0].id, 4, day(1));
        store.grade(&catalog.items[1].id, 0, day(1));
        // due day 7
        let id = catalog.items[2].id.clone();
        store.grade(&id, 4, day(1));
        store.grade(&id, 4, day(1));

        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let queue = build_queue(&catalog, &store, day(2), None, 999, &mut rng);

        let due: HashSet<_> = queue.review.iter().map(|i| i.id.clone()).collect();
        let expected: HashSet<_> = [catalog.items[0].id.clone(), catalog.items[1].id.clone()]
            .into_iter()
            .collect();
        assert_eq!(due, expected);
        assert!(queue.new.is_empty());

        let earlier = build_queue(&catalog, &store, day(1), None, 999, &mut rng);
        assert!(earlier.review.is_empty());
    }

    #[test]
    fn test_caps_are_respected() {
        let catalog = catalog(12);
        let mut store = ReviewStore::new();
        for item in &catalog.items[..8] {
            store.grade(&item.id, 1, day(1));
        }

        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let queue = build_queue(&catalog, &store, day(5), Some(3), 5, &mut rng);

        assert_eq!(queue.review.len(), 5);
        assert_eq!(queue.new.len(), 3);
        assert!(queue.new.iter().all(|i| !store.contains(&i.id)));
    }

    #[test]
    fn test_same_seed_same_order() {
        let catalog = catalog(20);
        let store = ReviewStore::new();

        let build = |seed| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            build_queue(&catalog, &store, day(1), Some(10), 0, &mut rng)
        };
        let a = build(11);
        let b = build(11);

        let ids = |q: &StudyQueue| q.new.iter().map(|i| i.id.clone()).collect::<Vec<_>>();
        assert_eq!(ids(&a), ids(&b));
    }

    #[test]
    fn test_pop_drains_reviews_first() {
        let catalog = catalog(4);
        let mut store = ReviewStore::new();
        store.grade(&catalog.items[0].id, 2, day(1));

        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let mut queue = build_queue(&catalog, &store, day(3), Some(10), 10, &mut rng);

        assert_eq!(queue.len(), 4);
        assert_eq!(queue.pop_next().map(|i| i.id), Some(catalog.items[0].id.clone()));
        for _ in 0..3 {
            assert!(queue.pop_next().is_some());
        }
        assert!(queue.pop_next().is_none());
        assert!(queue.is_empty());
    }
}
