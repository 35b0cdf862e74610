// SPDX-License-Identifier: PMPL-1.0-or-later

//! Language switch state machine

use crate::i18n::Lang;
use std::time::Duration;

/// Fade-out time before content is swapped.
pub const SWITCH_FADE: Duration = Duration::from_millis(280);
/// Frames after the swap before the switching class is cleared.
pub const SETTLE_FRAMES: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchPhase {
    Idle,
    FadingOut { target: Lang, since: Duration },
    Settling { frames_left: u8 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    AlreadyActive,
    InProgress,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchRequest {
    Started,
    Ignored(IgnoreReason),
}

/// What a frame tick asks the page to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchEvent {
    /// Re-render everything in this language.
    Swap(Lang),
    /// Transition over; clear the switching class.
    Settled,
}

#[derive(Debug, Clone)]
pub struct LanguageSwitch {
    current: Lang,
    phase: SwitchPhase,
}

impl LanguageSwitch {
    pub fn new(current: Lang) -> Self {
        Self {
            current,
            phase: SwitchPhase::Idle,
        }
    }

    pub fn current(&self) -> Lang {
        self.current
    }

    pub fn phase(&self) -> SwitchPhase {
        self.phase
    }

    pub fn is_switching(&self) -> bool {
        self.phase != SwitchPhase::Idle
    }

    /// Language the switch controls should show as active. Moves to the
    /// target as soon as a switch starts.
    pub fn indicator(&self) -> Lang {
        match self.phase {
            SwitchPhase::FadingOut { target, .. } => target,
            _ => self.current,
        }
    }

    pub fn request(&mut self, target: Lang, now: Duration) -> SwitchRequest {
        if self.is_switching() {
            return SwitchRequest::Ignored(IgnoreReason::InProgress);
        }
        if target == self.current {
            return SwitchRequest::Ignored(IgnoreReason::AlreadyActive);
        }
        self.phase = SwitchPhase::FadingOut { target, since: now };
        SwitchRequest::Started
    }

    /// Advance by one frame.
    pub fn tick(&mut self, now: Duration) -> Option<SwitchEvent> {
        match self.phase {
            SwitchPhase::Idle => None,
            SwitchPhase::FadingOut { target, since } => {
                if now.saturating_sub(since) < SWITCH_FADE {
                    return None;
                }
                self.current = target;
                self.phase = SwitchPhase::Settling {
                    frames_left: SETTLE_FRAMES,
                };
                Some(SwitchEvent::Swap(target))
            }
            SwitchPhase::Settling { frames_left } => {
                if frames_left <= 1 {
                    self.phase = SwitchPhase::Idle;
                    Some(SwitchEvent::Settled)
                } else {
                    self.phase = SwitchPhase::Settling {
                        frames_left: frames_left - 1,
                    };
                    None
                }
            }
        }
    }
}
