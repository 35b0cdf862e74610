// SPDX-License-Identifier: PMPL-1.0-or-later

//! Hero tagline typing effect
//!
//! Driven by explicit timestamps: the owner calls [`TypingEffect::poll`] with
//! the current time and writes the returned text into the tagline.

use std::time::Duration;

pub const TYPE_STEP: Duration = Duration::from_millis(80);
pub const FULL_PAUSE: Duration = Duration::from_millis(2000);
pub const DELETE_STEP: Duration = Duration::from_millis(40);
pub const NEXT_PHRASE_DELAY: Duration = Duration::from_millis(400);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// `next` is the number of characters the coming step will show.
    Typing { next: usize },
    Deleting,
}

#[derive(Debug, Clone)]
pub struct TypingEffect {
    phrases: Vec<Vec<char>>,
    index: usize,
    shown: usize,
    phase: Phase,
    due: Option<Duration>,
    generation: u64,
}

impl Default for TypingEffect {
    fn default() -> Self {
        Self {
            phrases: Vec::new(),
            index: 0,
            shown: 0,
            phase: Phase::Typing { next: 0 },
            due: None,
            generation: 0,
        }
    }
}

impl TypingEffect {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start over with new phrases. Any step scheduled by the previous run is
    /// dropped. Blank phrases are ignored; with none left the effect stays idle.
    pub fn restart(&mut self, phrases: Vec<String>, now: Duration) {
        self.generation += 1;
        self.phrases = phrases
            .into_iter()
            .filter(|p| !p.trim().is_empty())
            .map(|p| p.chars().collect())
            .collect();
        self.index = 0;
        self.shown = 0;
        self.phase = Phase::Typing { next: 0 };
        self.due = if self.phrases.is_empty() {
            None
        } else {
            Some(now)
        };
    }

    pub fn stop(&mut self) {
        self.generation += 1;
        self.due = None;
    }

    /// Incremented on every restart or stop.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_active(&self) -> bool {
        self.due.is_some()
    }

    /// When the next step is scheduled.
    pub fn next_due(&self) -> Option<Duration> {
        self.due
    }

    pub fn text(&self) -> String {
        match self.phrases.get(self.index) {
            Some(phrase) => phrase[..self.shown.min(phrase.len())].iter().collect(),
            None => String::new(),
        }
    }

    /// Run every step due by `now`. Returns the visible text when it changed.
    pub fn poll(&mut self, now: Duration) -> Option<String> {
        let before = self.text();
        let mut stepped = false;
        while let Some(due) = self.due {
            if due > now {
                break;
            }
            let delay = self.step();
            self.due = Some(due + delay);
            stepped = true;
        }
        let after = self.text();
        (stepped && after != before).then_some(after)
    }

    fn step(&mut self) -> Duration {
        let len = self.phrases[self.index].len();
        match self.phase {
            Phase::Typing { next } if next <= len => {
                self.shown = next;
                self.phase = Phase::Typing { next: next + 1 };
                TYPE_STEP
            }
            Phase::Typing { .. } => {
                self.phase = Phase::Deleting;
                FULL_PAUSE
            }
            Phase::Deleting if self.shown > 0 => {
                self.shown -= 1;
                DELETE_STEP
            }
            Phase::Deleting => {
                self.index = (self.index + 1) % self.phrases.len();
                self.phase = Phase::Typing { next: 0 };
                NEXT_PHRASE_DELAY
            }
        }
    }
}
