//! Ordered slide list and the active ordinal.

use heapless::Vec;

use crate::{error::CapacityError, render::SlidePhase};

pub const MAX_SLIDES: usize = 16;

#[derive(Clone, Debug)]
pub struct SlideRegistry {
    phases: Vec<SlidePhase, MAX_SLIDES>,
    current: u16,
}

impl SlideRegistry {
    /// Registers `count` slides with the first one active.
    pub fn new(count: u16) -> Result<Self, CapacityError> {
        let mut phases = Vec::new();
        for index in 0..count {
            let phase = if index == 0 {
                SlidePhase::Active
            } else {
                SlidePhase::Hidden
            };
            phases.push(phase).map_err(|_| CapacityError {
                requested: count as usize,
                capacity: MAX_SLIDES,
            })?;
        }

        Ok(Self { phases, current: 0 })
    }

    pub fn len(&self) -> u16 {
        self.phases.len() as u16
    }

    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }

    pub fn current(&self) -> u16 {
        self.current
    }

    pub fn contains(&self, index: u16) -> bool {
        (index as usize) < self.phases.len()
    }

    pub fn phase(&self, index: u16) -> Option<SlidePhase> {
        self.phases.get(index as usize).copied()
    }

    pub fn next_index(&self) -> u16 {
        wrap_next(self.current, self.len())
    }

    pub fn prev_index(&self) -> u16 {
        wrap_prev(self.current, self.len())
    }

    pub fn count_in(&self, phase: SlidePhase) -> usize {
        self.phases.iter().filter(|p| **p == phase).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u16, SlidePhase)> + '_ {
        self.phases
            .iter()
            .enumerate()
            .map(|(index, phase)| (index as u16, *phase))
    }

    pub(crate) fn begin(&mut self, from: u16, to: u16) {
        self.set_phase(from, SlidePhase::Leaving);
        self.set_phase(to, SlidePhase::Entering);
    }

    pub(crate) fn settle(&mut self, from: u16, to: u16) {
        self.current = to;
        self.set_phase(from, SlidePhase::Hidden);
        self.set_phase(to, SlidePhase::Active);
    }

    fn set_phase(&mut self, index: u16, phase: SlidePhase) {
        if let Some(slot) = self.phases.get_mut(index as usize) {
            *slot = phase;
        }
    }
}

fn wrap_next(current: u16, total: u16) -> u16 {
    if total == 0 { 0 } else { (current + 1) % total }
}

fn wrap_prev(current: u16, total: u16) -> u16 {
    if total == 0 {
        0
    } else if current == 0 {
        total - 1
    } else {
        current - 1
    }
}
