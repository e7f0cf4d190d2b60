//! View models and animation metadata handed to the host renderer.

use crate::error::FieldError;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AnimationKind {
    /// Incoming content enters from the right.
    SlideLeft,
    /// Incoming content enters from the left.
    SlideRight,
    FadeIn,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AnimationFrame {
    pub kind: AnimationKind,
    /// 0..=100
    pub progress_pct: u8,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AnimationSpec {
    pub kind: AnimationKind,
    pub start_ms: u64,
    pub duration_ms: u16,
}

impl AnimationSpec {
    pub const fn new(kind: AnimationKind, start_ms: u64, duration_ms: u16) -> Self {
        Self {
            kind,
            start_ms,
            duration_ms,
        }
    }

    /// Frame at `now_ms`, or `None` once the animation has run its course.
    pub fn frame(self, now_ms: u64) -> Option<AnimationFrame> {
        let duration = self.duration_ms.max(1) as u64;
        let elapsed = now_ms.saturating_sub(self.start_ms);
        if elapsed >= duration {
            return None;
        }

        let progress = ((elapsed * 100) / duration).min(100) as u8;
        Some(AnimationFrame {
            kind: self.kind,
            progress_pct: progress,
        })
    }
}

/// Visibility state of one carousel slide.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum SlidePhase {
    #[default]
    Hidden,
    Entering,
    Active,
    Leaving,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SlideView {
    pub index: u16,
    pub phase: SlidePhase,
    /// Horizontal offset as a percentage of the slide width, -100..=100.
    pub offset_pct: i16,
    /// 0..=100
    pub opacity_pct: u8,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct IndicatorView {
    pub index: u16,
    pub active: bool,
}

pub struct CarouselView<'a> {
    pub slides: &'a [SlideView],
    pub indicators: &'a [IndicatorView],
    pub current: u16,
    pub autoplaying: bool,
    pub visible: bool,
    pub animation: Option<AnimationFrame>,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct FilterButtonView<'a> {
    pub label: &'a str,
    pub active: bool,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct CardView<'a> {
    pub name: &'a str,
    /// Card takes up layout space.
    pub displayed: bool,
    /// Card is at full opacity and resting position.
    pub revealed: bool,
}

pub struct FilterView<'a> {
    pub buttons: &'a [FilterButtonView<'a>],
    pub cards: &'a [CardView<'a>],
    pub active_filter: &'a str,
}

/// An open modal also implies the page scroll is locked.
pub enum ModalView<'a> {
    Closed,
    Open {
        src: &'a str,
        playing: bool,
        animation: Option<AnimationFrame>,
    },
}

/// Validation display state of one form field.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum FieldStatus {
    /// Never validated, or valid but empty.
    #[default]
    Neutral,
    Valid,
    Invalid(FieldError),
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct FieldView<'a> {
    pub name: &'a str,
    pub status: FieldStatus,
}

pub struct FormView<'a> {
    pub fields: &'a [FieldView<'a>],
    /// Submit button is disabled and shows its loader.
    pub submitting: bool,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ToastView<'a> {
    pub id: u32,
    pub kind: ToastKind,
    pub message: &'a str,
    /// `false` while the toast fades out before removal.
    pub shown: bool,
}
