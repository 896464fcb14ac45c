//! Free-text quizzes. Typing: see the word, type its pinyin. Listening: hear the
//! word, type either the characters or the pinyin.

use super::answer::pinyin_matches;
use super::{QUIZ_POOL_SIZE, QuizOutcome, QuizTally, draw_pool};
use crate::audio::AudioCommand;
use crate::models::{VocabularyCatalog, VocabularyItem};
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypedMode {
    Typing,
    Listening,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypedQuestion {
    pub target: VocabularyItem,
    pub prompt: String,
}

pub struct TypedQuiz {
    mode: TypedMode,
    pool: Vec<VocabularyItem>,
    index: usize,
    tally: QuizTally,
}

impl TypedQuiz {
    pub fn new<R: Rng + ?Sized>(mode: TypedMode, catalog: &VocabularyCatalog, rng: &mut R) -> Self {
        Self {
            mode,
            pool: draw_pool(catalog, QUIZ_POOL_SIZE, rng),
            index: 0,
            tally: QuizTally::default(),
        }
    }

    pub fn mode(&self) -> TypedMode {
        self.mode
    }

    pub fn current(&self) -> Option<TypedQuestion> {
        let target = self.pool.get(self.index)?;
        let prompt = match self.mode {
            TypedMode::Typing => format!("{} — type pinyin (with tones)", target.hanzi),
            TypedMode::Listening => "Type what you hear (hanzi or pinyin)".to_string(),
        };
        Some(TypedQuestion {
            target: target.clone(),
            prompt,
        })
    }

    /// Speech request for the current listening question.
    pub fn play(&self) -> Option<AudioCommand> {
        let target = self.pool.get(self.index)?;
        Some(AudioCommand::speak(&target.hanzi, 1.0))
    }

    /// Checks the learner's input and moves on. `None` when the quiz is already over.
    pub fn answer(&mut self, input: &str) -> Option<bool> {
        let target = self.pool.get(self.index)?;
        let input = input.trim();
        let correct = match self.mode {
            TypedMode::Typing => pinyin_matches(input, &target.pinyin),
            TypedMode::Listening => input == target.hanzi || pinyin_matches(input, &target.pinyin),
        };
        self.tally.record(target, correct);
        self.index += 1;
        Some(correct)
    }

    pub fn position(&self) -> (usize, usize) {
        (self.index.min(self.pool.len()), self.pool.len())
    }

    pub fn is_finished(&self) -> bool {
        self.index >= self.pool.len()
    }

    pub fn outcome(&self) -> QuizOutcome {
        self.tally.outcome(self.pool.len())
    }
}
