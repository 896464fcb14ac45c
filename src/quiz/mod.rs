//! Quiz modes drawn from the catalog without regard to review state.
//!
//! Every mode works on a fixed pool of distinct words, keeps a running tally and
//! reports a final score plus the missed words at the end.

pub mod answer;
pub mod choice;
pub mod matching;
pub mod typed;

pub use choice::{ChoiceQuestion, ChoiceQuiz};
pub use matching::{MISMATCH_UNLOCK, MatchResult, MatchingQuiz};
pub use typed::{TypedMode, TypedQuestion, TypedQuiz};

use crate::models::{VocabularyCatalog, VocabularyItem};
use rand::Rng;
use rand::seq::SliceRandom;

pub const QUIZ_POOL_SIZE: usize = 10;
pub const MATCHING_PAIRS: usize = 6;
pub const DISTRACTORS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizKind {
    MultipleChoice,
    Typing,
    Listening,
    Matching,
    Cloze,
}

impl QuizKind {
    pub const ALL: [QuizKind; 5] = [
        QuizKind::MultipleChoice,
        QuizKind::Typing,
        QuizKind::Listening,
        QuizKind::Matching,
        QuizKind::Cloze,
    ];

    pub fn label(self) -> &'static str {
        match self {
            QuizKind::MultipleChoice => "Multiple choice",
            QuizKind::Typing => "Typing",
            QuizKind::Listening => "Listening",
            QuizKind::Matching => "Matching",
            QuizKind::Cloze => "Cloze",
        }
    }
}

/// A quiz in progress, whatever its mode.
pub enum Quiz {
    Choice(ChoiceQuiz),
    Typed(TypedQuiz),
    Matching(MatchingQuiz),
}

impl Quiz {
    pub fn start<R: Rng + ?Sized>(
        kind: QuizKind,
        catalog: &VocabularyCatalog,
        rng: &mut R,
    ) -> Self {
        match kind {
            QuizKind::MultipleChoice => Quiz::Choice(ChoiceQuiz::multiple_choice(catalog, rng)),
            QuizKind::Cloze => Quiz::Choice(ChoiceQuiz::cloze(catalog, rng)),
            QuizKind::Typing => Quiz::Typed(TypedQuiz::new(TypedMode::Typing, catalog, rng)),
            QuizKind::Listening => Quiz::Typed(TypedQuiz::new(TypedMode::Listening, catalog, rng)),
            QuizKind::Matching => Quiz::Matching(MatchingQuiz::new(catalog, rng)),
        }
    }

    pub fn is_finished(&self) -> bool {
        match self {
            Quiz::Choice(q) => q.is_finished(),
            Quiz::Typed(q) => q.is_finished(),
            Quiz::Matching(q) => q.is_finished(),
        }
    }

    pub fn outcome(&self) -> QuizOutcome {
        match self {
            Quiz::Choice(q) => q.outcome(),
            Quiz::Typed(q) => q.outcome(),
            Quiz::Matching(q) => q.outcome(),
        }
    }
}

/// Running score of one quiz.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuizTally {
    pub correct: usize,
    pub missed: Vec<VocabularyItem>,
}

impl QuizTally {
    pub fn record(&mut self, item: &VocabularyItem, correct: bool) {
        if correct {
            self.correct += 1;
        } else {
            self.missed.push(item.clone());
        }
    }

    pub fn outcome(&self, total: usize) -> QuizOutcome {
        QuizOutcome {
            correct: self.correct,
            total,
            missed: self.missed.iter().map(|w| w.hanzi.clone()).collect(),
        }
    }
}

/// Final result of a quiz.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizOutcome {
    pub correct: usize,
    pub total: usize,
    pub missed: Vec<String>,
}

impl QuizOutcome {
    pub fn score(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.correct as f64 / self.total as f64
        }
    }

    pub fn recap(&self) -> String {
        let missed = if self.missed.is_empty() {
            "—".to_string()
        } else {
            self.missed.join("、")
        };
        format!("Score: {}/{}. Mistakes: {}", self.correct, self.total, missed)
    }
}

/// Up to `size` distinct words, uniformly at random.
pub fn draw_pool<R: Rng + ?Sized>(
    catalog: &VocabularyCatalog,
    size: usize,
    rng: &mut R,
) -> Vec<VocabularyItem> {
    let mut pool: Vec<&VocabularyItem> = catalog.items.iter().collect();
    pool.shuffle(rng);
    pool.into_iter().take(size).cloned().collect()
}

/// Up to `n` random words whose written form differs from `target`'s.
pub fn random_others<R: Rng + ?Sized>(
    catalog: &VocabularyCatalog,
    target: &VocabularyItem,
    n: usize,
    rng: &mut R,
) -> Vec<VocabularyItem> {
    let mut others: Vec<&VocabularyItem> = catalog
        .items
        .iter()
        .filter(|w| w.hanzi != target.hanzi)
        .collect();
    others.shuffle(rng);
    others.into_iter().take(n).cloned().collect()
}
