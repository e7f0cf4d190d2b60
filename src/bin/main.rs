//! Terminal host for the showcase widgets.
//!
//! Reads one command per line from stdin, drives every widget on a virtual
//! clock and prints a text frame whenever one of them requests a redraw.

use std::{
    io::{self, BufRead, Write},
    process::ExitCode,
};

use clap::Parser;
use log::{LevelFilter, error, info, warn};
use showcase_core::{
    TickResult,
    carousel::{Carousel, CarouselConfig},
    error::SubmitError,
    filter::{ALL_FILTER, CountriesFilter, CountryCard, FilterConfig},
    form::{ContactForm, FieldKind, FormField},
    input::InputEvent,
    modal::{ModalConfig, VideoModal},
    render::ToastKind,
    schedule::{Clock, Deadline, MockClock},
    toast::{ToastConfig, ToastQueue},
};

use cli::Args;
use commands::Command;
use terminal::{QueuedInput, TerminalMedia};

#[path = "main/cli.rs"]
mod cli;
#[path = "main/commands.rs"]
mod commands;
#[path = "main/terminal.rs"]
mod terminal;

const TITLE: &str = "Showcase";
const TRANSITION_MS: u16 = 600;
const AUTOPLAY_INTERVAL_MS: u64 = 8_000;
const SWIPE_THRESHOLD_PX: u32 = 50;
const FILTER_STAGGER_MS: u16 = 100;
const FILTER_HIDE_MS: u16 = 300;
const MODAL_AUTOPLAY_DELAY_MS: u16 = 300;
const TOAST_DISPLAY_MS: u16 = 5_000;
const TOAST_REMOVE_MS: u16 = 300;
const SUBMIT_LATENCY_MS: u64 = 2_000;
const FRAME_MS: u64 = 50;

const FORM_INVALID_MSG: &str = "Please correct the errors in the form";
const FORM_SENT_MSG: &str = "Message sent successfully! We'll get back to you soon.";

const FILTERS: [&str; 4] = [ALL_FILTER, "europe", "asia", "americas"];
const COUNTRIES: [CountryCard<'static>; 6] = [
    CountryCard {
        name: "France",
        tags: &["europe"],
    },
    CountryCard {
        name: "Malaysia",
        tags: &["asia"],
    },
    CountryCard {
        name: "Canada",
        tags: &["americas"],
    },
    CountryCard {
        name: "Turkey",
        tags: &["europe", "asia"],
    },
    CountryCard {
        name: "Japan",
        tags: &["asia"],
    },
    CountryCard {
        name: "Germany",
        tags: &["europe"],
    },
];

const CONTACT_FIELDS: [FormField<'static>; 4] = [
    FormField {
        name: "name",
        kind: FieldKind::Text,
        required: true,
    },
    FormField {
        name: "email",
        kind: FieldKind::Email,
        required: true,
    },
    FormField {
        name: "phone",
        kind: FieldKind::Tel,
        required: false,
    },
    FormField {
        name: "message",
        kind: FieldKind::Text,
        required: true,
    },
];

type PageCarousel = Carousel<TerminalMedia, QueuedInput>;

struct Page {
    carousel: PageCarousel,
    filter: CountriesFilter<'static>,
    modal: VideoModal<TerminalMedia>,
    form: ContactForm<'static>,
    form_values: Vec<String>,
    /// Simulated backend round trip for an accepted submission.
    submission: Deadline,
    toasts: ToastQueue,
    input: QueuedInput,
}

impl Page {
    fn dispatch(&mut self, event: InputEvent) {
        self.input.push(event);
        self.modal.handle_input(event);
    }

    fn fill(&mut self, field: &str, value: String) {
        let Some(index) = self.form.field_index(field) else {
            warn!("unknown form field `{}`", field);
            return;
        };
        if let Some(Err(err)) = self.form.validate_field(index, &value) {
            info!("form: {}: {}", field, err);
        }
        if let Some(slot) = self.form_values.get_mut(index) {
            *slot = value;
        }
    }

    fn submit(&mut self, now_ms: u64) {
        let values: Vec<&str> = self.form_values.iter().map(String::as_str).collect();
        match self.form.submit(&values) {
            Ok(()) => self.submission.schedule(now_ms, SUBMIT_LATENCY_MS),
            Err(SubmitError::Invalid { .. }) => {
                self.toasts.show(ToastKind::Error, FORM_INVALID_MSG, now_ms);
            }
            Err(err) => warn!("{}", err),
        }
    }

    fn tick(&mut self, now_ms: u64) -> TickResult {
        if self.submission.poll(now_ms) {
            self.form.finish_submit(true);
            self.form_values.iter_mut().for_each(String::clear);
            self.toasts.show(ToastKind::Success, FORM_SENT_MSG, now_ms);
        }

        self.carousel
            .tick(now_ms)
            .merge(self.filter.tick(now_ms))
            .merge(self.modal.tick(now_ms))
            .merge(self.form.tick())
            .merge(self.toasts.tick(now_ms))
    }

    fn render<W: Write>(&self, out: &mut W, now_ms: u64) -> io::Result<()> {
        let mut result = Ok(());
        self.carousel.with_view(now_ms, |view| {
            result = terminal::write_carousel(&mut *out, now_ms, &view);
        });
        result?;

        let mut result = Ok(());
        self.filter.with_view(|view| {
            result = terminal::write_filter(&mut *out, &view);
        });
        result?;

        let mut result = Ok(());
        self.modal.with_view(now_ms, |view| {
            result = terminal::write_modal(&mut *out, &view);
        });
        result?;

        let mut result = Ok(());
        self.form.with_view(|view| {
            result = terminal::write_form(&mut *out, &view);
        });
        result?;

        let mut result = Ok(());
        self.toasts.with_view(|views| {
            result = terminal::write_toasts(&mut *out, views);
        });
        result?;

        out.flush()
    }

    /// Ticks once at the current time and renders if anything asked for it.
    fn frame<W: Write>(&mut self, out: &mut W, now_ms: u64) -> io::Result<()> {
        if self.tick(now_ms).needs_render() {
            self.render(out, now_ms)?;
        }
        Ok(())
    }

    /// Advances the clock by `duration_ms` in fixed frames.
    fn run_for<W: Write>(
        &mut self,
        out: &mut W,
        clock: &MockClock,
        duration_ms: u64,
    ) -> io::Result<()> {
        let target_ms = clock.now_ms().saturating_add(duration_ms);
        while clock.now_ms() < target_ms {
            let step = FRAME_MS.min(target_ms - clock.now_ms());
            let now_ms = clock.advance(step);
            self.frame(out, now_ms)?;
        }
        Ok(())
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging();

    let slide_count = args.slides;
    let block_autoplay = args.block_autoplay;
    let clock = MockClock::new(0);
    let input = QueuedInput::default();

    let carousel_config = CarouselConfig::default()
        .with_transition_ms(TRANSITION_MS)
        .with_autoplay_interval_ms(AUTOPLAY_INTERVAL_MS)
        .with_swipe_threshold_px(SWIPE_THRESHOLD_PX);
    let carousel = match Carousel::new(
        slide_count,
        TerminalMedia::new("carousel", block_autoplay),
        input.clone(),
        carousel_config,
        clock.now_ms(),
    ) {
        Ok(carousel) => carousel,
        Err(err) => {
            error!("carousel setup failed: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let filter_config = FilterConfig::default()
        .with_stagger_ms(FILTER_STAGGER_MS)
        .with_hide_ms(FILTER_HIDE_MS);
    let filter = match CountriesFilter::new(&FILTERS, &COUNTRIES, filter_config) {
        Ok(filter) => filter,
        Err(err) => {
            error!("filter setup failed: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let modal = VideoModal::new(
        TerminalMedia::new("modal", block_autoplay),
        ModalConfig::default().with_autoplay_delay_ms(MODAL_AUTOPLAY_DELAY_MS),
    );

    let form = match ContactForm::new(&CONTACT_FIELDS) {
        Ok(form) => form,
        Err(err) => {
            error!("form setup failed: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let toasts = ToastQueue::new(
        ToastConfig::default()
            .with_display_ms(TOAST_DISPLAY_MS)
            .with_remove_ms(TOAST_REMOVE_MS),
    );

    let mut page = Page {
        carousel,
        filter,
        modal,
        form,
        form_values: vec![String::new(); CONTACT_FIELDS.len()],
        submission: Deadline::idle(),
        toasts,
        input,
    };

    info!(
        "{}: {} slides, {} countries, {} filters, {} form fields",
        TITLE,
        slide_count,
        COUNTRIES.len(),
        FILTERS.len(),
        CONTACT_FIELDS.len()
    );

    let mut out = io::stdout().lock();
    // The page opens with the carousel in view.
    page.dispatch(InputEvent::Visibility(true));
    if let Err(err) = page.frame(&mut out, clock.now_ms()) {
        error!("render failed: {}", err);
        return ExitCode::FAILURE;
    }

    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                error!("stdin read failed: {}", err);
                return ExitCode::FAILURE;
            }
        };

        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                warn!("{}", err);
                continue;
            }
        };

        let now_ms = clock.now_ms();
        let result = match command {
            Command::Quit => break,
            Command::Wait(duration_ms) => page.run_for(&mut out, &clock, duration_ms),
            Command::Status => page.render(&mut out, now_ms),
            Command::Events(events) => {
                for event in events {
                    page.dispatch(event);
                }
                page.frame(&mut out, now_ms)
            }
            Command::Autoplay(engage) => {
                if engage {
                    if !page.carousel.play(now_ms) {
                        warn!("autoplay needs at least two slides");
                    }
                } else {
                    page.carousel.pause();
                }
                page.frame(&mut out, now_ms)
            }
            Command::Filter(name) => {
                match FILTERS.iter().position(|filter| *filter == name) {
                    Some(index) => {
                        page.filter.select(index, now_ms);
                    }
                    None => warn!("unknown filter `{}`", name),
                }
                page.frame(&mut out, now_ms)
            }
            Command::Open(src) => {
                if let Err(err) = page.modal.open(&src, now_ms) {
                    warn!("cannot open video: {}", err);
                }
                page.frame(&mut out, now_ms)
            }
            Command::Fill { field, value } => {
                page.fill(&field, value);
                page.frame(&mut out, now_ms)
            }
            Command::Submit => {
                page.submit(now_ms);
                page.frame(&mut out, now_ms)
            }
            Command::Dismiss(id) => {
                if !page.toasts.dismiss(id, now_ms) {
                    warn!("no open toast #{}", id);
                }
                page.frame(&mut out, now_ms)
            }
        };

        if let Err(err) = result {
            error!("render failed: {}", err);
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}

fn init_logging() {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();
}
