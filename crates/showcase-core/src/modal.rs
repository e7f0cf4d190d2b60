//! Full-screen video modal.

use heapless::String;
use log::debug;

use crate::{
    TickResult,
    error::ModalError,
    input::{InputEvent, Key},
    media::{MediaPlayer, MediaSlot, start_playback},
    render::{AnimationKind, AnimationSpec, ModalView},
    schedule::Deadline,
};

pub const MODAL_SRC_BYTES: usize = 256;

const AUTOPLAY_DELAY_MS: u16 = 300;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ModalConfig {
    /// Delay between opening and starting playback; matches the open animation.
    pub autoplay_delay_ms: u16,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            autoplay_delay_ms: AUTOPLAY_DELAY_MS,
        }
    }
}

impl ModalConfig {
    pub const fn with_autoplay_delay_ms(mut self, autoplay_delay_ms: u16) -> Self {
        self.autoplay_delay_ms = autoplay_delay_ms;
        self
    }
}

enum ModalState {
    Closed,
    Open {
        src: String<MODAL_SRC_BYTES>,
        opened_ms: u64,
        autoplay: Deadline,
        /// Set once the host accepted playback.
        playing: bool,
    },
}

pub struct VideoModal<M: MediaPlayer> {
    player: M,
    config: ModalConfig,
    state: ModalState,
    pending_redraw: bool,
}

impl<M: MediaPlayer> VideoModal<M> {
    pub fn new(player: M, config: ModalConfig) -> Self {
        Self {
            player,
            config,
            state: ModalState::Closed,
            pending_redraw: false,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, ModalState::Open { .. })
    }

    /// Page scroll stays locked for as long as the modal is open.
    pub fn scroll_locked(&self) -> bool {
        self.is_open()
    }

    pub fn source(&self) -> Option<&str> {
        match &self.state {
            ModalState::Open { src, .. } => Some(src.as_str()),
            ModalState::Closed => None,
        }
    }

    pub fn is_playing(&self) -> bool {
        matches!(self.state, ModalState::Open { playing: true, .. })
    }

    pub fn player(&self) -> &M {
        &self.player
    }

    /// Loads `src` and schedules playback. Opening again swaps the source.
    pub fn open(&mut self, src: &str, now_ms: u64) -> Result<(), ModalError> {
        if src.is_empty() {
            return Err(ModalError::EmptySource);
        }
        let mut owned = String::new();
        owned.push_str(src).map_err(|_| ModalError::SourceTooLong {
            len: src.len(),
            limit: MODAL_SRC_BYTES,
        })?;

        self.player.load(MediaSlot::Modal, src);
        let mut autoplay = Deadline::idle();
        autoplay.schedule(now_ms, self.config.autoplay_delay_ms as u64);
        self.state = ModalState::Open {
            src: owned,
            opened_ms: now_ms,
            autoplay,
            playing: false,
        };
        self.pending_redraw = true;

        debug!("modal: open src={}", src);
        Ok(())
    }

    /// Returns `false` if the modal was already closed.
    pub fn close(&mut self) -> bool {
        if !self.is_open() {
            return false;
        }

        self.player.pause(MediaSlot::Modal);
        self.player.load(MediaSlot::Modal, "");
        self.state = ModalState::Closed;
        self.pending_redraw = true;

        debug!("modal: closed");
        true
    }

    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::Key(Key::Escape) | InputEvent::ModalBackdrop | InputEvent::ModalClose => {
                self.close();
            }
            _ => {}
        }
    }

    pub fn tick(&mut self, now_ms: u64) -> TickResult {
        if let ModalState::Open {
            autoplay, playing, ..
        } = &mut self.state
            && autoplay.poll(now_ms)
        {
            *playing = start_playback(&mut self.player, MediaSlot::Modal);
            self.pending_redraw = true;
        }

        if self.pending_redraw {
            self.pending_redraw = false;
            return TickResult::RenderRequested;
        }
        if self.animation_spec().and_then(|spec| spec.frame(now_ms)).is_some() {
            TickResult::RenderRequested
        } else {
            TickResult::NoRender
        }
    }

    pub fn with_view<F>(&self, now_ms: u64, f: F)
    where
        F: FnOnce(ModalView<'_>),
    {
        match &self.state {
            ModalState::Closed => f(ModalView::Closed),
            ModalState::Open { src, playing, .. } => f(ModalView::Open {
                src: src.as_str(),
                playing: *playing,
                animation: self.animation_spec().and_then(|spec| spec.frame(now_ms)),
            }),
        }
    }

    fn animation_spec(&self) -> Option<AnimationSpec> {
        match self.state {
            ModalState::Open { opened_ms, .. } => Some(AnimationSpec::new(
                AnimationKind::FadeIn,
                opened_ms,
                self.config.autoplay_delay_ms,
            )),
            ModalState::Closed => None,
        }
    }
}
