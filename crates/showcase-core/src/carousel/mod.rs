//! Testimonial carousel: timed slide transitions, autoplay and input routing.
//!
//! The animator is the only writer of slide and indicator state. At most one
//! transition is in flight; requests that arrive meanwhile are dropped.

mod autoplay;
mod gesture;
mod indicators;
mod registry;

use log::{debug, warn};

pub use autoplay::AutoplayTimer;
pub use gesture::{GestureTracker, Swipe};
pub use indicators::IndicatorSync;
pub use registry::{MAX_SLIDES, SlideRegistry};

use crate::{
    TickResult,
    error::{CapacityError, NavigationError},
    input::{InputEvent, InputProvider, Key},
    media::{MediaPlayer, MediaSlot, start_playback},
    render::{AnimationKind, AnimationSpec, CarouselView, IndicatorView, SlidePhase, SlideView},
    schedule::Deadline,
};

const TRANSITION_MS: u16 = 600;
const AUTOPLAY_INTERVAL_MS: u64 = 8_000;
const SWIPE_THRESHOLD_PX: u32 = 50;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Direction {
    Next,
    Prev,
}

impl Direction {
    const fn animation(self) -> AnimationKind {
        match self {
            Self::Next => AnimationKind::SlideLeft,
            Self::Prev => AnimationKind::SlideRight,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CarouselConfig {
    pub transition_ms: u16,
    pub autoplay_interval_ms: u64,
    pub swipe_threshold_px: u32,
    pub autoplay: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            transition_ms: TRANSITION_MS,
            autoplay_interval_ms: AUTOPLAY_INTERVAL_MS,
            swipe_threshold_px: SWIPE_THRESHOLD_PX,
            autoplay: true,
        }
    }
}

impl CarouselConfig {
    pub const fn with_transition_ms(mut self, transition_ms: u16) -> Self {
        self.transition_ms = transition_ms;
        self
    }

    pub const fn with_autoplay_interval_ms(mut self, autoplay_interval_ms: u64) -> Self {
        self.autoplay_interval_ms = autoplay_interval_ms;
        self
    }

    pub const fn with_swipe_threshold_px(mut self, swipe_threshold_px: u32) -> Self {
        self.swipe_threshold_px = swipe_threshold_px;
        self
    }

    pub const fn with_autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = autoplay;
        self
    }
}

/// A transition accepted by the animator.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Transition {
    pub from: u16,
    pub to: u16,
    pub direction: Direction,
    pub started_ms: u64,
    pub completes_ms: u64,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum AnimatorState {
    Idle,
    Transitioning {
        transition: Transition,
        completion: Deadline,
        resume_autoplay: bool,
    },
}

pub struct Carousel<M, IN>
where
    M: MediaPlayer,
    IN: InputProvider,
{
    media: M,
    input: IN,
    config: CarouselConfig,
    slides: SlideRegistry,
    indicators: IndicatorSync,
    autoplay: AutoplayTimer,
    gestures: GestureTracker,
    animator: AnimatorState,
    visible: bool,
    pending_redraw: bool,
}

include!("transition.rs");
include!("input.rs");
include!("runtime.rs");
include!("view.rs");

#[cfg(test)]
mod tests;
