//! Four-option quizzes: multiple choice (pick the English gloss for a word) and
//! cloze (pick the word that fills the blank in its example sentence).

use super::{DISTRACTORS, QUIZ_POOL_SIZE, QuizOutcome, QuizTally, draw_pool, random_others};
use crate::models::{VocabularyCatalog, VocabularyItem};
use rand::Rng;
use rand::seq::SliceRandom;

pub const CLOZE_BLANK: &str = "____";

#[derive(Debug, Clone, PartialEq)]
pub struct ChoiceQuestion {
    pub target: VocabularyItem,
    pub prompt: String,
    pub options: Vec<String>,
    pub answer: String,
}

pub struct ChoiceQuiz {
    questions: Vec<ChoiceQuestion>,
    index: usize,
    tally: QuizTally,
}

impl ChoiceQuiz {
    /// Prompt is the written form; options are English glosses.
    pub fn multiple_choice<R: Rng + ?Sized>(catalog: &VocabularyCatalog, rng: &mut R) -> Self {
        Self::build(catalog, rng, |target| target.hanzi.clone(), |w| w.english.clone())
    }

    /// Prompt is the example sentence with the word blanked; options are written forms.
    pub fn cloze<R: Rng + ?Sized>(catalog: &VocabularyCatalog, rng: &mut R) -> Self {
        Self::build(
            catalog,
            rng,
            |target| target.example.replacen(&target.hanzi, CLOZE_BLANK, 1),
            |w| w.hanzi.clone(),
        )
    }

    fn build<R, P, O>(catalog: &VocabularyCatalog, rng: &mut R, prompt: P, option: O) -> Self
    where
        R: Rng + ?Sized,
        P: Fn(&VocabularyItem) -> String,
        O: Fn(&VocabularyItem) -> String,
    {
        let questions = draw_pool(catalog, QUIZ_POOL_SIZE, rng)
            .into_iter()
            .map(|target| {
                let mut options: Vec<String> = random_others(catalog, &target, DISTRACTORS, rng)
                    .iter()
                    .map(&option)
                    .collect();
                options.push(option(&target));
                options.shuffle(rng);
                ChoiceQuestion {
                    prompt: prompt(&target),
                    answer: option(&target),
                    options,
                    target,
                }
            })
            .collect();

        Self {
            questions,
            index: 0,
            tally: QuizTally::default(),
        }
    }

    pub fn current(&self) -> Option<&ChoiceQuestion> {
        self.questions.get(self.index)
    }

    /// Scores the picked option and moves on. `None` when the quiz is already over.
    pub fn answer(&mut self, picked: &str) -> Option<bool> {
        let question = self.questions.get(self.index)?;
        let correct = picked == question.answer;
        self.tally.record(&question.target, correct);
        self.index += 1;
        Some(correct)
    }

    pub fn position(&self) -> (usize, usize) {
        (self.index.min(self.questions.len()), self.questions.len())
    }

    pub fn is_finished(&self) -> bool {
        self.index >= self.questions.len()
    }

    pub fn outcome(&self) -> QuizOutcome {
        self.tally.outcome(self.questions.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::test_support::catalog;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    #[test]
    fn test_multiple_choice_options() {
        let catalog = catalog(14);
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let quiz = ChoiceQuiz::multiple_choice(&catalog, &mut rng);

        let question = quiz.current().unwrap();
        assert_eq!(question.prompt, question.target.hanzi);
        assert_eq!(question.answer, question.target.english);
        assert_eq!(question.options.len(), 4);
        assert!(question.options.contains(&question.answer));
        let distinct: HashSet<_> = question.options.iter().collect();
        assert_eq!(distinct.len(), 4);
    }

    #[test]
    fn test_answering_all_questions() {
        let catalog = catalog(14);
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        let mut quiz = ChoiceQuiz::multiple_choice(&catalog, &mut rng);

        let mut expected_missed = Vec::new();
        let mut n = 0;
        while let Some(question) = quiz.current().cloned() {
            if n % 3 == 0 {
                let wrong = question.options.iter().find(|o| **o != question.answer).unwrap();
                assert_eq!(quiz.answer(wrong), Some(false));
                expected_missed.push(question.target.hanzi.clone());
            } else {
                assert_eq!(quiz.answer(&question.answer), Some(true));
            }
            n += 1;
        }

        assert!(quiz.is_finished());
        assert_eq!(quiz.answer("anything"), None);
        let outcome = quiz.outcome();
        assert_eq!(outcome.total, 10);
        assert_eq!(outcome.correct, 6);
        assert_eq!(outcome.missed, expected_missed);
    }

    #[test]
    fn test_cloze_blanks_the_word() {
        let catalog = catalog(14);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut quiz = ChoiceQuiz::cloze(&catalog, &mut rng);

        let question = quiz.current().cloned().unwrap();
        assert!(question.prompt.contains(CLOZE_BLANK));
        assert_eq!(
            question.prompt,
            question.target.example.replacen(&question.target.hanzi, CLOZE_BLANK, 1)
        );
        assert_eq!(question.answer, question.target.hanzi);
        assert_eq!(quiz.answer(&question.target.hanzi), Some(true));
    }

    #[test]
    fn test_small_catalog_degrades_options() {
        let catalog = catalog(2);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let quiz = ChoiceQuiz::multiple_choice(&catalog, &mut rng);

        assert_eq!(quiz.position(), (0, 2));
        assert_eq!(quiz.current().unwrap().options.len(), 2);
    }
}
