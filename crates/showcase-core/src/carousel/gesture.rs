/// Navigation intent recognised from a horizontal gesture.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Swipe {
    Advance,
    Retreat,
}

/// Tracks touch and pointer drags independently.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GestureTracker {
    threshold_px: u32,
    touch_start_x: Option<i32>,
    pointer_start_x: Option<i32>,
}

impl GestureTracker {
    pub const fn new(threshold_px: u32) -> Self {
        Self {
            threshold_px,
            touch_start_x: None,
            pointer_start_x: None,
        }
    }

    pub fn touch_start(&mut self, x: i32) {
        self.touch_start_x = Some(x);
    }

    pub fn touch_end(&mut self, x: i32) -> Option<Swipe> {
        let start = self.touch_start_x.take()?;
        self.classify(start, x)
    }

    pub fn pointer_down(&mut self, x: i32) {
        self.pointer_start_x = Some(x);
    }

    pub fn pointer_up(&mut self, x: i32) -> Option<Swipe> {
        let start = self.pointer_start_x.take()?;
        self.classify(start, x)
    }

    pub const fn is_dragging(&self) -> bool {
        self.pointer_start_x.is_some()
    }

    fn classify(&self, start_x: i32, end_x: i32) -> Option<Swipe> {
        let delta = start_x as i64 - end_x as i64;
        if delta.unsigned_abs() <= self.threshold_px as u64 {
            return None;
        }

        // Content follows the finger: a leftward drag reveals the next slide.
        if delta > 0 {
            Some(Swipe::Advance)
        } else {
            Some(Swipe::Retreat)
        }
    }
}
