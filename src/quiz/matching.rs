//! Matching: six words on the left, their English glosses shuffled on the right.
//! A correct pair locks; a wrong pair stays blocked for `MISMATCH_UNLOCK`, then
//! unlocks again and counts as a mistake for the left word. There is no retry limit.

use super::{MATCHING_PAIRS, QuizOutcome, draw_pool};
use crate::models::{VocabularyCatalog, VocabularyItem};
use rand::Rng;
use rand::seq::SliceRandom;
use std::time::{Duration, Instant};

pub const MISMATCH_UNLOCK: Duration = Duration::from_millis(600);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult {
    Selected,
    Matched,
    Mismatch,
    Ignored,
}

pub struct MatchingQuiz {
    left: Vec<VocabularyItem>,
    right: Vec<String>,
    left_locked: Vec<bool>,
    right_locked: Vec<bool>,
    selected_left: Option<usize>,
    missed: Vec<usize>,
    mismatch: Option<(usize, usize, Instant)>,
}

impl MatchingQuiz {
    pub fn new<R: Rng + ?Sized>(catalog: &VocabularyCatalog, rng: &mut R) -> Self {
        let left = draw_pool(catalog, MATCHING_PAIRS, rng);
        let mut right: Vec<String> = left.iter().map(|w| w.english.clone()).collect();
        right.shuffle(rng);
        Self {
            left_locked: vec![false; left.len()],
            right_locked: vec![false; right.len()],
            left,
            right,
            selected_left: None,
            missed: Vec::new(),
            mismatch: None,
        }
    }

    pub fn left(&self) -> &[VocabularyItem] {
        &self.left
    }

    pub fn right(&self) -> &[String] {
        &self.right
    }

    /// `你好 (nǐ hǎo)`
    pub fn left_label(&self, i: usize) -> Option<String> {
        self.left.get(i).map(|w| format!("{} ({})", w.hanzi, w.pinyin))
    }

    pub fn is_left_locked(&self, i: usize) -> bool {
        self.left_locked.get(i).copied().unwrap_or(true)
    }

    pub fn is_right_locked(&self, j: usize) -> bool {
        self.right_locked.get(j).copied().unwrap_or(true)
    }

    pub fn selected_left(&self) -> Option<usize> {
        self.selected_left
    }

    /// The wrong pair still blocking input at `now`, as (left, right).
    pub fn mismatch(&self, now: Instant) -> Option<(usize, usize)> {
        self.mismatch
            .filter(|&(_, _, at)| now.saturating_duration_since(at) < MISMATCH_UNLOCK)
            .map(|(i, j, _)| (i, j))
    }

    pub fn select_left(&mut self, i: usize, now: Instant) -> MatchResult {
        if self.is_left_locked(i) || self.mismatch(now).is_some() {
            return MatchResult::Ignored;
        }
        self.selected_left = Some(i);
        MatchResult::Selected
    }

    pub fn select_right(&mut self, j: usize, now: Instant) -> MatchResult {
        let Some(i) = self.selected_left else {
            return MatchResult::Ignored;
        };
        if self.is_right_locked(j) || self.mismatch(now).is_some() {
            return MatchResult::Ignored;
        }

        self.selected_left = None;
        if self.right[j] == self.left[i].english {
            self.left_locked[i] = true;
            self.right_locked[j] = true;
            MatchResult::Matched
        } else {
            if !self.missed.contains(&i) {
                self.missed.push(i);
            }
            self.mismatch = Some((i, j, now));
            MatchResult::Mismatch
        }
    }

    pub fn matched_count(&self) -> usize {
        self.left_locked.iter().filter(|locked| **locked).count()
    }

    pub fn is_finished(&self) -> bool {
        self.left_locked.iter().all(|locked| *locked)
    }

    /// A pair counts as correct when it was matched without any mistake.
    pub fn outcome(&self) -> QuizOutcome {
        QuizOutcome {
            correct: self
                .left_locked
                .iter()
                .enumerate()
                .filter(|&(i, locked)| *locked && !self.missed.contains(&i))
                .count(),
            total: self.left.len(),
            missed: self.missed.iter().map(|&i| self.left[i].hanzi.clone()).collect(),
        }
    }
}
