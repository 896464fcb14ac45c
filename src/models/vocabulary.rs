//! A single learnable word: written form, pinyin, English gloss, and the
//! derived category and example sentence fixed at normalization time.
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse grammatical grouping used for progress breakdowns and sentence templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    MeasureWord,
    Number,
    Pronoun,
    Verb,
    Adjective,
    Time,
    General,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::MeasureWord,
        Category::Number,
        Category::Pronoun,
        Category::Verb,
        Category::Adjective,
        Category::Time,
        Category::General,
    ];

    /// Derives the category from the first part-of-speech code.
    pub fn from_pos(codes: &[String]) -> Self {
        match codes.first().map(String::as_str).unwrap_or("") {
            "q" => Category::MeasureWord,
            "m" => Category::Number,
            "r" => Category::Pronoun,
            "v" => Category::Verb,
            "a" | "ad" | "an" | "ag" => Category::Adjective,
            "t" => Category::Time,
            _ => Category::General,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::MeasureWord => "measure word",
            Category::Number => "number",
            Category::Pronoun => "pronoun",
            Category::Verb => "verb",
            Category::Adjective => "adjective",
            Category::Time => "time",
            Category::General => "general",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Category::ALL.into_iter().find(|c| c.label() == label)
    }

    /// Example sentence templates; `{w}` is replaced with the written form.
    fn templates(self) -> &'static [&'static str] {
        match self {
            Category::Verb => &["我{w}。", "他在{w}。", "我们现在{w}。"],
            Category::Adjective => &["这个很{w}。", "今天的天气很{w}。"],
            Category::Pronoun => &["{w}在这儿。", "{w}喜欢汉语。"],
            Category::Number => &["我有三{w}书。", "请给我一{w}水。"],
            Category::MeasureWord => &["一{w}人。", "三{w}苹果。"],
            Category::Time => &["我们{w}见。", "他{w}来。"],
            Category::General => &["这是{w}。", "我喜欢{w}。"],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Immutable after creation. `id` is only stable within one dataset load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocabularyItem {
    pub id: String,
    pub hanzi: String,
    pub pinyin: String,
    pub english: String,
    pub pos: Vec<String>,
    pub category: Category,
    pub example: String,
}

impl VocabularyItem {
    /// Builds a normalized item. `index` is the entry's position in the source list.
    pub fn new<R: Rng + ?Sized>(
        hanzi: String,
        pinyin: String,
        english: String,
        pos: Vec<String>,
        index: usize,
        rng: &mut R,
    ) -> Self {
        let category = Category::from_pos(&pos);
        let example = make_example(&hanzi, category, rng);
        Self {
            id: format!("{}#{}", hanzi, index),
            hanzi,
            pinyin,
            english,
            pos,
            category,
            example,
        }
    }

    /// Slash-joined part-of-speech codes, as used in the CSV export.
    pub fn pos_joined(&self) -> String {
        self.pos.join("/")
    }
}

fn make_example<R: Rng + ?Sized>(hanzi: &str, category: Category, rng: &mut R) -> String {
    let template = category.templates().choose(rng).copied().unwrap_or("{w}");
    template.replace("{w}", hanzi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn codes(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_category_from_first_pos_code() {
        assert_eq!(Category::from_pos(&codes(&["q"])), Category::MeasureWord);
        assert_eq!(Category::from_pos(&codes(&["m"])), Category::Number);
        assert_eq!(Category::from_pos(&codes(&["r", "v"])), Category::Pronoun);
        assert_eq!(Category::from_pos(&codes(&["ad"])), Category::Adjective);
        assert_eq!(Category::from_pos(&codes(&["t"])), Category::Time);
        // Only the first code counts
        assert_eq!(Category::from_pos(&codes(&["n", "v"])), Category::General);
        assert_eq!(Category::from_pos(&[]), Category::General);
    }

    #[test]
    fn test_label_roundtrip() {
        for category in Category::ALL {
            assert_eq!(Category::from_label(category.label()), Some(category));
        }
        assert_eq!(Category::from_label("noun"), None);
    }

    #[test]
    fn test_item_identity_and_example() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let item = VocabularyItem::new(
            "请".to_string(),
            "qǐng".to_string(),
            "please; to invite".to_string(),
            codes(&["v"]),
            3,
            &mut rng,
        );

        assert_eq!(item.id, "请#3");
        assert_eq!(item.category, Category::Verb);
        assert!(item.example.contains("请"));
        assert!(Category::Verb.templates().iter().any(|t| t.replace("{w}", "请") == item.example));
    }

    #[test]
    fn test_example_is_deterministic_for_seed() {
        let build = |seed| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            VocabularyItem::new(
                "好".to_string(),
                "hǎo".to_string(),
                "good".to_string(),
                codes(&["a"]),
                0,
                &mut rng,
            )
        };
        assert_eq!(build(42).example, build(42).example);
    }
}
