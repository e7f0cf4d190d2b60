use thiserror::Error;

/// Reasons a carousel navigation request was dropped.
///
/// None of these are fatal: the carousel state is left untouched and input
/// paths simply log and discard them.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum NavigationError {
    /// Target ordinal is outside `0..count`.
    #[error("slide {index} is out of range for {count} slides")]
    InvalidIndex { index: u16, count: u16 },

    /// Target is already the active slide.
    #[error("slide {0} is already active")]
    AlreadyActive(u16),

    /// Another transition is in flight.
    #[error("a transition is already in progress")]
    Busy,

    /// Fewer than two slides; there is nothing to move to.
    #[error("carousel has {0} slide(s), nothing to navigate")]
    NotEnoughSlides(u16),
}

/// Fixed-capacity storage could not hold the requested item count.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
#[error("requested {requested} items but capacity is {capacity}")]
pub struct CapacityError {
    pub requested: usize,
    pub capacity: usize,
}

/// Failures reported by a [`MediaPlayer`](crate::media::MediaPlayer).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum MediaError {
    /// The host refused to start playback (e.g. autoplay policy).
    #[error("playback rejected by host")]
    PlaybackRejected,
}

/// Errors returned when opening the video modal.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum ModalError {
    #[error("video source is empty")]
    EmptySource,

    #[error("video source is {len} bytes, limit is {limit}")]
    SourceTooLong { len: usize, limit: usize },
}

/// Why a single form field failed validation.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum FieldError {
    #[error("This field is required")]
    Required,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    /// Phone numbers need at least ten characters.
    #[error("Please enter a valid phone number")]
    InvalidPhone,
}

/// Reasons a form submission did not start.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum SubmitError {
    #[error("{invalid} field(s) failed validation")]
    Invalid { invalid: usize },

    #[error("a submission is already in flight")]
    InFlight,
}
