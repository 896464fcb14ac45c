//! The normalized, immutable vocabulary set of one dataset load.
use super::VocabularyItem;
use crate::dataset::RawEntry;
use rand::Rng;

#[derive(Clone, Debug, Default)]
pub struct VocabularyCatalog {
    pub items: Vec<VocabularyItem>,
}

impl VocabularyCatalog {
    /// Normalizes raw entries in source order; positions become part of each identity.
    pub fn from_entries<R: Rng + ?Sized>(entries: &[RawEntry], rng: &mut R) -> Self {
        let items = entries
            .iter()
            .enumerate()
            .map(|(idx, entry)| {
                VocabularyItem::new(
                    entry.s.clone(),
                    entry.pinyin(),
                    entry.english(),
                    entry.p.clone(),
                    idx,
                    rng,
                )
            })
            .collect();
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&VocabularyItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Import lookup key: the (written form, pinyin) pair.
    pub fn find_by_hanzi_pinyin(&self, hanzi: &str, pinyin: &str) -> Option<&VocabularyItem> {
        self.items
            .iter()
            .find(|item| item.hanzi == hanzi && item.pinyin == pinyin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn sample_entries() -> Vec<RawEntry> {
        vec![
            RawEntry::new("你好", "nǐ hǎo", "hello", &["i"]),
            RawEntry::new("三", "sān", "three", &["m"]),
            RawEntry::new("你好", "nǐ hǎo", "hello (again)", &["i"]),
        ]
    }

    #[test]
    fn test_identity_includes_position() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let catalog = VocabularyCatalog::from_entries(&sample_entries(), &mut rng);

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.items[0].id, "你好#0");
        assert_eq!(catalog.items[2].id, "你好#2");
        assert_eq!(catalog.get("三#1").map(|i| i.english.as_str()), Some("three"));
    }

    #[test]
    fn test_find_by_hanzi_pinyin_returns_first_match() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let catalog = VocabularyCatalog::from_entries(&sample_entries(), &mut rng);

        let found = catalog.find_by_hanzi_pinyin("你好", "nǐ hǎo").unwrap();
        assert_eq!(found.id, "你好#0");
        assert!(catalog.find_by_hanzi_pinyin("你好", "ni hao").is_none());
    }
}
