impl<M, IN> Carousel<M, IN>
where
    M: MediaPlayer,
    IN: InputProvider,
{
    /// Moves to `index`, animating in the direction implied by the ordinals.
    pub fn go_to(&mut self, index: u16, now_ms: u64) -> Result<Transition, NavigationError> {
        self.request_transition(index, None, now_ms)
    }

    /// Moves to the following slide, wrapping to the first. Always animates `Next`.
    pub fn advance(&mut self, now_ms: u64) -> Result<Transition, NavigationError> {
        self.ensure_navigable()?;
        let target = self.slides.next_index();
        self.request_transition(target, Some(Direction::Next), now_ms)
    }

    /// Moves to the preceding slide, wrapping to the last. Always animates `Prev`.
    pub fn retreat(&mut self, now_ms: u64) -> Result<Transition, NavigationError> {
        self.ensure_navigable()?;
        let target = self.slides.prev_index();
        self.request_transition(target, Some(Direction::Prev), now_ms)
    }

    /// `advance` for a positive delta, `retreat` otherwise.
    pub fn step(&mut self, delta: i32, now_ms: u64) -> Result<Transition, NavigationError> {
        if delta > 0 {
            self.advance(now_ms)
        } else {
            self.retreat(now_ms)
        }
    }

    fn ensure_navigable(&self) -> Result<(), NavigationError> {
        let count = self.slides.len();
        if count < 2 {
            return Err(NavigationError::NotEnoughSlides(count));
        }
        Ok(())
    }

    fn request_transition(
        &mut self,
        index: u16,
        direction: Option<Direction>,
        now_ms: u64,
    ) -> Result<Transition, NavigationError> {
        let count = self.slides.len();
        if !self.slides.contains(index) {
            return Err(NavigationError::InvalidIndex { index, count });
        }

        let current = self.slides.current();
        if index == current {
            return Err(NavigationError::AlreadyActive(index));
        }
        if self.is_transitioning() {
            return Err(NavigationError::Busy);
        }

        let direction = direction.unwrap_or(if index > current {
            Direction::Next
        } else {
            Direction::Prev
        });
        let duration_ms = self.config.transition_ms as u64;
        let transition = Transition {
            from: current,
            to: index,
            direction,
            started_ms: now_ms,
            completes_ms: now_ms.saturating_add(duration_ms),
        };

        let resume_autoplay = self.autoplay.stop();
        let mut completion = Deadline::idle();
        completion.schedule(now_ms, duration_ms);

        self.slides.begin(current, index);
        self.animator = AnimatorState::Transitioning {
            transition,
            completion,
            resume_autoplay,
        };
        self.pending_redraw = true;

        debug!(
            "carousel: transition {} -> {} ({:?}) until {}",
            current, index, direction, transition.completes_ms
        );
        Ok(transition)
    }

    fn complete_due_transition(&mut self, now_ms: u64) -> Option<Transition> {
        let AnimatorState::Transitioning {
            transition,
            mut completion,
            resume_autoplay,
        } = self.animator
        else {
            return None;
        };
        if !completion.poll(now_ms) {
            return None;
        }

        self.slides.settle(transition.from, transition.to);
        self.indicators.set_active(transition.to);
        self.media.pause(MediaSlot::Slide(transition.from));
        if self.visible {
            start_playback(&mut self.media, MediaSlot::Slide(transition.to));
        }

        self.animator = AnimatorState::Idle;
        if resume_autoplay {
            self.autoplay.start(now_ms);
        }
        self.pending_redraw = true;

        debug!(
            "carousel: settled on {} (autoplay={})",
            transition.to,
            self.autoplay.is_running()
        );
        Some(transition)
    }

    fn log_rejected(&self, source: &str, result: Result<Transition, NavigationError>) {
        if let Err(err) = result {
            debug!("carousel: {} request dropped: {}", source, err);
        }
    }
}
