//! Embedded media playback collaborator.

use log::warn;

pub use crate::error::MediaError;

/// Media element addressed by the core.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MediaSlot {
    Slide(u16),
    Modal,
}

/// Host-side media control.
pub trait MediaPlayer {
    /// Points the slot at a new source. An empty `src` unloads it.
    fn load(&mut self, _slot: MediaSlot, _src: &str) {}

    /// Rewinds and starts playback.
    fn play_from_start(&mut self, slot: MediaSlot) -> Result<(), MediaError>;

    fn pause(&mut self, slot: MediaSlot);
}

/// Player for pages without embedded media.
#[derive(Default, Debug, Clone, Copy)]
pub struct NoMedia;

impl MediaPlayer for NoMedia {
    fn play_from_start(&mut self, _slot: MediaSlot) -> Result<(), MediaError> {
        Ok(())
    }

    fn pause(&mut self, _slot: MediaSlot) {}
}

/// Starts playback, downgrading failures to a warning. Returns whether the
/// media is now playing.
pub(crate) fn start_playback<M: MediaPlayer>(player: &mut M, slot: MediaSlot) -> bool {
    match player.play_from_start(slot) {
        Ok(()) => true,
        Err(err) => {
            warn!("media: playback for {:?} failed: {}", slot, err);
            false
        }
    }
}
