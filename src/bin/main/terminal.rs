use std::{cell::RefCell, collections::VecDeque, convert::Infallible, io, rc::Rc};

use log::info;
use showcase_core::{
    input::{InputEvent, InputProvider},
    media::{MediaError, MediaPlayer, MediaSlot},
    render::{CarouselView, FieldStatus, FilterView, FormView, ModalView, SlidePhase, ToastView},
};

/// Shared event queue; the host pushes, the carousel polls.
#[derive(Clone, Debug, Default)]
pub(super) struct QueuedInput {
    events: Rc<RefCell<VecDeque<InputEvent>>>,
}

impl QueuedInput {
    pub(super) fn push(&self, event: InputEvent) {
        self.events.borrow_mut().push_back(event);
    }
}

impl InputProvider for QueuedInput {
    type Error = Infallible;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        Ok(self.events.borrow_mut().pop_front())
    }
}

/// Media player that only logs what a browser would do.
#[derive(Debug)]
pub(super) struct TerminalMedia {
    label: &'static str,
    block_autoplay: bool,
}

impl TerminalMedia {
    pub(super) const fn new(label: &'static str, block_autoplay: bool) -> Self {
        Self {
            label,
            block_autoplay,
        }
    }
}

impl MediaPlayer for TerminalMedia {
    fn load(&mut self, slot: MediaSlot, src: &str) {
        if src.is_empty() {
            info!("{}: unload {:?}", self.label, slot);
        } else {
            info!("{}: load {:?} <- {}", self.label, slot, src);
        }
    }

    fn play_from_start(&mut self, slot: MediaSlot) -> Result<(), MediaError> {
        if self.block_autoplay {
            return Err(MediaError::PlaybackRejected);
        }
        info!("{}: play {:?}", self.label, slot);
        Ok(())
    }

    fn pause(&mut self, slot: MediaSlot) {
        info!("{}: pause {:?}", self.label, slot);
    }
}

pub(super) fn write_carousel<W: io::Write>(
    out: &mut W,
    now_ms: u64,
    view: &CarouselView<'_>,
) -> io::Result<()> {
    write!(out, "[{:>7}ms] slides", now_ms)?;
    for slide in view.slides {
        let marker = match slide.phase {
            SlidePhase::Hidden => continue,
            SlidePhase::Active => "active",
            SlidePhase::Entering => "in",
            SlidePhase::Leaving => "out",
        };
        write!(
            out,
            " #{}:{}({:+}% a{}%)",
            slide.index, marker, slide.offset_pct, slide.opacity_pct
        )?;
    }

    write!(out, " | ")?;
    for indicator in view.indicators {
        write!(out, "{}", if indicator.active { '●' } else { '○' })?;
    }

    let progress = view
        .animation
        .map(|frame| frame.progress_pct)
        .unwrap_or(100);
    writeln!(
        out,
        " | autoplay={} visible={} anim={}%",
        on_off(view.autoplaying),
        on_off(view.visible),
        progress
    )
}

pub(super) fn write_filter<W: io::Write>(out: &mut W, view: &FilterView<'_>) -> io::Result<()> {
    write!(out, "           filter")?;
    for button in view.buttons {
        if button.active {
            write!(out, " [{}]", button.label)?;
        } else {
            write!(out, " {}", button.label)?;
        }
    }

    write!(out, " |")?;
    for card in view.cards.iter().filter(|card| card.displayed) {
        let fade = if card.revealed { "" } else { "~" };
        write!(out, " {}{}", fade, card.name)?;
    }
    writeln!(out)
}

pub(super) fn write_modal<W: io::Write>(out: &mut W, view: &ModalView<'_>) -> io::Result<()> {
    match view {
        ModalView::Closed => Ok(()),
        ModalView::Open { src, playing, .. } => writeln!(
            out,
            "           modal {} ({})",
            src,
            if *playing { "playing" } else { "not playing" }
        ),
    }
}

pub(super) fn write_form<W: io::Write>(out: &mut W, view: &FormView<'_>) -> io::Result<()> {
    write!(out, "           form")?;
    for field in view.fields {
        match field.status {
            FieldStatus::Neutral => write!(out, " {}", field.name)?,
            FieldStatus::Valid => write!(out, " {}:ok", field.name)?,
            FieldStatus::Invalid(err) => write!(out, " {}:\"{}\"", field.name, err)?,
        }
    }
    if view.submitting {
        write!(out, " | sending...")?;
    }
    writeln!(out)
}

pub(super) fn write_toasts<W: io::Write>(out: &mut W, toasts: &[ToastView<'_>]) -> io::Result<()> {
    for toast in toasts {
        let fade = if toast.shown { "" } else { " (closing)" };
        writeln!(
            out,
            "           toast #{} {:?}: {}{}",
            toast.id, toast.kind, toast.message, fade
        )?;
    }
    Ok(())
}

fn on_off(flag: bool) -> &'static str {
    if flag { "on" } else { "off" }
}
