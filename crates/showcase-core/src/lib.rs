//! Host-agnostic state core for the showcase page widgets.
//!
//! Every widget is driven by `tick(now_ms)` against a monotonic millisecond
//! clock and hands view models to the host through `with_view` closures.

#![cfg_attr(not(test), no_std)]

pub mod carousel;
pub mod error;
pub mod filter;
pub mod form;
pub mod input;
pub mod media;
pub mod modal;
pub mod render;
pub mod schedule;
pub mod toast;

/// Outcome of a widget tick.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickResult {
    NoRender,
    RenderRequested,
}

impl TickResult {
    pub const fn needs_render(self) -> bool {
        matches!(self, Self::RenderRequested)
    }

    pub const fn merge(self, other: Self) -> Self {
        if self.needs_render() || other.needs_render() {
            Self::RenderRequested
        } else {
            Self::NoRender
        }
    }
}
