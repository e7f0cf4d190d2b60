impl<M, IN> Carousel<M, IN>
where
    M: MediaPlayer,
    IN: InputProvider,
{
    /// Builds a carousel over `slide_count` slides with slide 0 active.
    ///
    /// The region starts out not visible; hosts report visibility through
    /// [`InputEvent::Visibility`].
    pub fn new(
        slide_count: u16,
        media: M,
        input: IN,
        config: CarouselConfig,
        now_ms: u64,
    ) -> Result<Self, CapacityError> {
        let slides = SlideRegistry::new(slide_count)?;
        let indicators = IndicatorSync::new(slide_count)?;

        let mut carousel = Self {
            media,
            input,
            config,
            slides,
            indicators,
            autoplay: AutoplayTimer::new(config.autoplay_interval_ms),
            gestures: GestureTracker::new(config.swipe_threshold_px),
            animator: AnimatorState::Idle,
            visible: false,
            pending_redraw: true,
        };
        if config.autoplay {
            carousel.play(now_ms);
        }

        debug!(
            "carousel: init slides={} autoplay={}",
            slide_count,
            carousel.autoplay.is_running()
        );
        Ok(carousel)
    }

    pub fn tick(&mut self, now_ms: u64) -> TickResult {
        self.complete_due_transition(now_ms);
        self.process_inputs(now_ms);

        if self
            .autoplay
            .poll(now_ms, self.visible, self.is_transitioning())
        {
            let result = self.advance(now_ms);
            self.log_rejected("autoplay", result);
        }

        if self.pending_redraw {
            self.pending_redraw = false;
            return TickResult::RenderRequested;
        }
        if self.is_transitioning() {
            TickResult::RenderRequested
        } else {
            TickResult::NoRender
        }
    }

    pub fn current_index(&self) -> u16 {
        self.slides.current()
    }

    pub fn slide_count(&self) -> u16 {
        self.slides.len()
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self.animator, AnimatorState::Transitioning { .. })
    }

    /// Whether autoplay is engaged, including a resume pending on the
    /// in-flight transition.
    pub fn is_autoplaying(&self) -> bool {
        self.autoplay.is_running()
            || matches!(
                self.animator,
                AnimatorState::Transitioning {
                    resume_autoplay: true,
                    ..
                }
            )
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn transition(&self) -> Option<Transition> {
        match self.animator {
            AnimatorState::Idle => None,
            AnimatorState::Transitioning { transition, .. } => Some(transition),
        }
    }

    pub fn slides(&self) -> &SlideRegistry {
        &self.slides
    }

    pub fn indicators(&self) -> &IndicatorSync {
        &self.indicators
    }

    pub fn autoplay_timer(&self) -> &AutoplayTimer {
        &self.autoplay
    }

    pub fn config(&self) -> CarouselConfig {
        self.config
    }

    pub fn media(&self) -> &M {
        &self.media
    }

    pub fn media_mut(&mut self) -> &mut M {
        &mut self.media
    }

    /// Engages autoplay. Returns `false` when there is nothing to cycle.
    ///
    /// During a transition the timer is armed once the transition settles.
    pub fn play(&mut self, now_ms: u64) -> bool {
        if self.slides.len() <= 1 {
            return false;
        }

        match &mut self.animator {
            AnimatorState::Transitioning {
                resume_autoplay, ..
            } => *resume_autoplay = true,
            AnimatorState::Idle => {
                self.autoplay.start(now_ms);
            }
        }
        self.pending_redraw = true;
        true
    }

    /// Disengages autoplay, including any pending resume.
    pub fn pause(&mut self) {
        self.autoplay.stop();
        if let AnimatorState::Transitioning {
            resume_autoplay, ..
        } = &mut self.animator
        {
            *resume_autoplay = false;
        }
        self.pending_redraw = true;
    }

    /// Flips autoplay and returns the new engaged state.
    pub fn toggle_autoplay(&mut self, now_ms: u64) -> bool {
        if self.is_autoplaying() {
            self.pause();
            false
        } else {
            self.play(now_ms)
        }
    }

    fn set_visible(&mut self, visible: bool, now_ms: u64) {
        if self.visible == visible {
            return;
        }
        self.visible = visible;
        debug!("carousel: visible={}", visible);

        let current = MediaSlot::Slide(self.slides.current());
        let has_slides = !self.slides.is_empty();
        if visible {
            if self.config.autoplay {
                self.play(now_ms);
            }
            if has_slides {
                start_playback(&mut self.media, current);
            }
        } else {
            self.pause();
            if has_slides {
                self.media.pause(current);
            }
        }
        self.pending_redraw = true;
    }
}
