// SPDX-License-Identifier: PMPL-1.0-or-later

//! Language switching
//!
//! [`Session`] owns the open page. A switch request fades the content out,
//! swaps it after [`SWITCH_FADE`], then clears the switching class once the
//! next frames have been drawn. Time is passed in by the caller.

mod controller;
mod location;
mod session;

pub use controller::{
    IgnoreReason, LanguageSwitch, SwitchEvent, SwitchPhase, SwitchRequest, SETTLE_FRAMES,
    SWITCH_FADE,
};
pub use location::{resume_lang, History, Location};
pub use session::{
    render_page, Page, RenderedPage, Session, ACTIVE_CLASS, INACTIVE_CLASS, SWITCHING_CLASS,
    TYPING_PHRASES_KEY,
};
