//! Input abstraction layer.

pub mod mock;

/// Keys the page widgets react to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Space,
    Escape,
}

/// Logical events delivered by the host page.
///
/// Horizontal positions are in CSS pixels; only deltas matter.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputEvent {
    Key(Key),
    TouchStart { x: i32 },
    TouchEnd { x: i32 },
    PointerDown { x: i32 },
    PointerUp { x: i32 },
    PrevButton,
    NextButton,
    Indicator(u16),
    /// Carousel region entered (`true`) or left (`false`) the viewport.
    Visibility(bool),
    ModalBackdrop,
    ModalClose,
}

/// Polled input provider.
pub trait InputProvider {
    type Error;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error>;
}
