//! Timed guided session: a fixed sequence of study and quiz stages under one countdown.

use crate::quiz::QuizKind;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuidedStage {
    NewCards(usize),
    Reviews,
    Quiz(QuizKind),
}

impl GuidedStage {
    pub fn title(&self) -> &'static str {
        match self {
            GuidedStage::NewCards(_) => "NEW",
            GuidedStage::Reviews => "REVIEW",
            GuidedStage::Quiz(_) => "QUIZ",
        }
    }
}

pub const GUIDED_STAGES: [GuidedStage; 5] = [
    GuidedStage::NewCards(15),
    GuidedStage::Reviews,
    GuidedStage::Quiz(QuizKind::Typing),
    GuidedStage::Quiz(QuizKind::Listening),
    GuidedStage::Quiz(QuizKind::Cloze),
];

pub struct GuidedSession {
    stage_index: Option<usize>,
    ends_at: Instant,
    finished: bool,
}

impl GuidedSession {
    /// Starts the countdown. No stage is active until `next_stage` is called.
    pub fn begin(session_mins: u32, now: Instant) -> Self {
        Self {
            stage_index: None,
            ends_at: now + Duration::from_secs(session_mins as u64 * 60),
            finished: false,
        }
    }

    /// Advances to the next stage; `None` ends the session.
    pub fn next_stage(&mut self) -> Option<GuidedStage> {
        if self.finished {
            return None;
        }
        let next = self.stage_index.map_or(0, |i| i + 1);
        match GUIDED_STAGES.get(next) {
            Some(stage) => {
                self.stage_index = Some(next);
                Some(*stage)
            }
            None => {
                self.finish();
                None
            }
        }
    }

    pub fn current_stage(&self) -> Option<GuidedStage> {
        if self.finished {
            return None;
        }
        self.stage_index.and_then(|i| GUIDED_STAGES.get(i).copied())
    }

    pub fn finish(&mut self) {
        self.finished = true;
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn remaining(&self, now: Instant) -> Duration {
        self.ends_at.saturating_duration_since(now)
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        self.remaining(now).is_zero()
    }

    /// `Stage 2/5 — REVIEW`
    pub fn stage_label(&self) -> String {
        match (self.stage_index, self.current_stage()) {
            (Some(i), Some(stage)) => {
                format!("Stage {}/{} — {}", i + 1, GUIDED_STAGES.len(), stage.title())
            }
            _ => "Not started".to_string(),
        }
    }

    /// `MM:SS` countdown text.
    pub fn timer_text(&self, now: Instant) -> String {
        let secs = self.remaining(now).as_secs();
        format!("{:02}:{:02}", secs / 60, secs % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stages_run_in_order_then_finish() {
        let now = Instant::now();
        let mut guided = GuidedSession::begin(60, now);
        assert_eq!(guided.stage_label(), "Not started");

        assert_eq!(guided.next_stage(), Some(GuidedStage::NewCards(15)));
        assert_eq!(guided.next_stage(), Some(GuidedStage::Reviews));
        assert_eq!(guided.stage_label(), "Stage 2/5 — REVIEW");
        assert_eq!(guided.next_stage(), Some(GuidedStage::Quiz(QuizKind::Typing)));
        assert_eq!(guided.next_stage(), Some(GuidedStage::Quiz(QuizKind::Listening)));
        assert_eq!(guided.next_stage(), Some(GuidedStage::Quiz(QuizKind::Cloze)));
        assert_eq!(guided.next_stage(), None);
        assert!(guided.is_finished());
        assert_eq!(guided.next_stage(), None);
    }

    #[test]
    fn test_countdown() {
        let now = Instant::now();
        let guided = GuidedSession::begin(2, now);

        assert_eq!(guided.timer_text(now), "02:00");
        assert_eq!(guided.timer_text(now + Duration::from_secs(75)), "00:45");
        assert!(!guided.is_expired(now + Duration::from_secs(119)));
        assert!(guided.is_expired(now + Duration::from_secs(121)));
    }

    #[test]
    fn test_remaining_reaches_zero_at_end() {
        let now = Instant::now();
        let guided = GuidedSession::begin(1, now);

        assert_eq!(guided.remaining(now + Duration::from_secs(20)), Duration::from_secs(40));
        assert!(guided.remaining(now + Duration::from_secs(60)).is_zero());
        assert!(guided.remaining(now + Duration::from_secs(600)).is_zero());
    }
}
