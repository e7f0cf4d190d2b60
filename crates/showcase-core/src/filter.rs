//! Country card filter with staggered reveal and delayed removal.

use heapless::Vec;
use log::debug;

use crate::{
    TickResult,
    error::CapacityError,
    render::{CardView, FilterButtonView, FilterView},
    schedule::Deadline,
};

pub const MAX_CARDS: usize = 64;
pub const MAX_FILTERS: usize = 12;

/// Filter name matching every card.
pub const ALL_FILTER: &str = "all";

const STAGGER_MS: u16 = 100;
const HIDE_MS: u16 = 300;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FilterConfig {
    /// Reveal delay per card position.
    pub stagger_ms: u16,
    /// Time a concealed card keeps its layout slot.
    pub hide_ms: u16,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            stagger_ms: STAGGER_MS,
            hide_ms: HIDE_MS,
        }
    }
}

impl FilterConfig {
    pub const fn with_stagger_ms(mut self, stagger_ms: u16) -> Self {
        self.stagger_ms = stagger_ms;
        self
    }

    pub const fn with_hide_ms(mut self, hide_ms: u16) -> Self {
        self.hide_ms = hide_ms;
        self
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CountryCard<'a> {
    pub name: &'a str,
    pub tags: &'a [&'a str],
}

impl CountryCard<'_> {
    pub fn matches(&self, filter: &str) -> bool {
        filter == ALL_FILTER || self.tags.contains(&filter)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CardPhase {
    Shown,
    /// In layout, waiting for its stagger slot to fade in.
    Revealing,
    /// Faded out, still holding its layout slot.
    Concealing,
    Hidden,
}

#[derive(Clone, Copy, Debug)]
struct CardState {
    phase: CardPhase,
    pending: Deadline,
}

pub struct CountriesFilter<'a> {
    config: FilterConfig,
    filters: &'a [&'a str],
    cards: &'a [CountryCard<'a>],
    states: Vec<CardState, MAX_CARDS>,
    active: &'a str,
    pending_redraw: bool,
}

impl<'a> CountriesFilter<'a> {
    /// All cards start shown and the first filter button starts active.
    pub fn new(
        filters: &'a [&'a str],
        cards: &'a [CountryCard<'a>],
        config: FilterConfig,
    ) -> Result<Self, CapacityError> {
        if filters.len() > MAX_FILTERS {
            return Err(CapacityError {
                requested: filters.len(),
                capacity: MAX_FILTERS,
            });
        }

        let mut states = Vec::new();
        for _ in cards {
            states
                .push(CardState {
                    phase: CardPhase::Shown,
                    pending: Deadline::idle(),
                })
                .map_err(|_| CapacityError {
                    requested: cards.len(),
                    capacity: MAX_CARDS,
                })?;
        }

        Ok(Self {
            config,
            filters,
            cards,
            states,
            active: filters.first().copied().unwrap_or(ALL_FILTER),
            pending_redraw: true,
        })
    }

    pub fn active_filter(&self) -> &'a str {
        self.active
    }

    pub fn card_phase(&self, index: usize) -> Option<CardPhase> {
        self.states.get(index).map(|state| state.phase)
    }

    /// Selects the filter behind button `index`.
    pub fn select(&mut self, index: usize, now_ms: u64) -> bool {
        let Some(filter) = self.filters.get(index).copied() else {
            return false;
        };
        self.set_active_filter(filter, now_ms)
    }

    /// Applies `filter` to every card. Returns `false` if it was already active.
    pub fn set_active_filter(&mut self, filter: &'a str, now_ms: u64) -> bool {
        if self.active == filter {
            return false;
        }
        self.active = filter;
        debug!("filter: active={}", filter);

        let stagger_ms = self.config.stagger_ms as u64;
        let hide_ms = self.config.hide_ms as u64;
        for (index, (card, state)) in self.cards.iter().zip(self.states.iter_mut()).enumerate() {
            if card.matches(filter) {
                show_card(state, now_ms, stagger_ms * index as u64);
            } else {
                hide_card(state, now_ms, hide_ms);
            }
        }

        self.pending_redraw = true;
        true
    }

    pub fn tick(&mut self, now_ms: u64) -> TickResult {
        for state in self.states.iter_mut() {
            if !state.pending.poll(now_ms) {
                continue;
            }
            state.phase = match state.phase {
                CardPhase::Revealing => CardPhase::Shown,
                CardPhase::Concealing => CardPhase::Hidden,
                settled => settled,
            };
            self.pending_redraw = true;
        }

        if self.pending_redraw {
            self.pending_redraw = false;
            TickResult::RenderRequested
        } else {
            TickResult::NoRender
        }
    }

    pub fn with_view<F>(&self, f: F)
    where
        F: FnOnce(FilterView<'_>),
    {
        let mut buttons = [FilterButtonView::default(); MAX_FILTERS];
        for (slot, filter) in buttons.iter_mut().zip(self.filters.iter()) {
            *slot = FilterButtonView {
                label: *filter,
                active: *filter == self.active,
            };
        }

        let mut cards = [CardView::default(); MAX_CARDS];
        for (slot, (card, state)) in cards.iter_mut().zip(self.cards.iter().zip(self.states.iter())) {
            *slot = CardView {
                name: card.name,
                displayed: !matches!(state.phase, CardPhase::Hidden),
                revealed: matches!(state.phase, CardPhase::Shown),
            };
        }

        f(FilterView {
            buttons: &buttons[..self.filters.len()],
            cards: &cards[..self.states.len()],
            active_filter: self.active,
        });
    }
}

fn show_card(state: &mut CardState, now_ms: u64, delay_ms: u64) {
    match state.phase {
        CardPhase::Shown | CardPhase::Revealing => {}
        CardPhase::Concealing | CardPhase::Hidden => {
            state.phase = CardPhase::Revealing;
            state.pending.schedule(now_ms, delay_ms);
        }
    }
}

fn hide_card(state: &mut CardState, now_ms: u64, delay_ms: u64) {
    match state.phase {
        CardPhase::Concealing | CardPhase::Hidden => {}
        CardPhase::Shown | CardPhase::Revealing => {
            state.phase = CardPhase::Concealing;
            state.pending.schedule(now_ms, delay_ms);
        }
    }
}
