use heapless::Vec;

use super::registry::MAX_SLIDES;
use crate::error::CapacityError;

/// Active flags for the per-slide selector controls.
#[derive(Clone, Debug)]
pub struct IndicatorSync {
    flags: Vec<bool, MAX_SLIDES>,
}

impl IndicatorSync {
    pub fn new(count: u16) -> Result<Self, CapacityError> {
        let mut flags = Vec::new();
        for index in 0..count {
            flags.push(index == 0).map_err(|_| CapacityError {
                requested: count as usize,
                capacity: MAX_SLIDES,
            })?;
        }
        Ok(Self { flags })
    }

    /// Marks `index` active and every other indicator inactive.
    ///
    /// Returns whether any flag changed.
    pub fn set_active(&mut self, index: u16) -> bool {
        let mut changed = false;
        for (ordinal, flag) in self.flags.iter_mut().enumerate() {
            let active = ordinal == index as usize;
            if *flag != active {
                *flag = active;
                changed = true;
            }
        }
        changed
    }

    pub fn is_active(&self, index: u16) -> bool {
        self.flags.get(index as usize).copied().unwrap_or(false)
    }

    pub fn active_index(&self) -> Option<u16> {
        self.flags.iter().position(|flag| *flag).map(|i| i as u16)
    }

    pub fn active_count(&self) -> usize {
        self.flags.iter().filter(|flag| **flag).count()
    }

    pub fn len(&self) -> u16 {
        self.flags.len() as u16
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}
