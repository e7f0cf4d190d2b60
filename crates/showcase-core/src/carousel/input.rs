impl<M, IN> Carousel<M, IN>
where
    M: MediaPlayer,
    IN: InputProvider,
{
    fn process_inputs(&mut self, now_ms: u64) {
        loop {
            match self.input.poll_event() {
                Ok(Some(event)) => self.handle_input(event, now_ms),
                Ok(None) => break,
                Err(_) => {
                    warn!("carousel: input provider failed, skipping remaining events");
                    break;
                }
            }
        }
    }

    /// Routes one host event into the carousel.
    pub fn handle_input(&mut self, event: InputEvent, now_ms: u64) {
        match event {
            InputEvent::Key(key) => self.apply_key(key, now_ms),
            InputEvent::TouchStart { x } => self.gestures.touch_start(x),
            InputEvent::TouchEnd { x } => {
                if let Some(swipe) = self.gestures.touch_end(x) {
                    self.apply_swipe(swipe, "swipe", now_ms);
                }
            }
            InputEvent::PointerDown { x } => self.gestures.pointer_down(x),
            InputEvent::PointerUp { x } => {
                if let Some(swipe) = self.gestures.pointer_up(x) {
                    self.apply_swipe(swipe, "drag", now_ms);
                }
            }
            InputEvent::PrevButton => {
                let result = self.retreat(now_ms);
                self.log_rejected("prev button", result);
            }
            InputEvent::NextButton => {
                let result = self.advance(now_ms);
                self.log_rejected("next button", result);
            }
            InputEvent::Indicator(index) => {
                let result = self.go_to(index, now_ms);
                self.log_rejected("indicator", result);
            }
            InputEvent::Visibility(visible) => self.set_visible(visible, now_ms),
            InputEvent::ModalBackdrop | InputEvent::ModalClose => {}
        }
    }

    fn apply_key(&mut self, key: Key, now_ms: u64) {
        if !self.visible {
            return;
        }

        match key {
            Key::ArrowLeft => {
                let result = self.retreat(now_ms);
                self.log_rejected("arrow key", result);
            }
            Key::ArrowRight => {
                let result = self.advance(now_ms);
                self.log_rejected("arrow key", result);
            }
            Key::Space => {
                let engaged = self.toggle_autoplay(now_ms);
                debug!("carousel: autoplay toggled, engaged={}", engaged);
                self.pending_redraw = true;
            }
            Key::Escape => {}
        }
    }

    fn apply_swipe(&mut self, swipe: Swipe, source: &str, now_ms: u64) {
        let result = match swipe {
            Swipe::Advance => self.advance(now_ms),
            Swipe::Retreat => self.retreat(now_ms),
        };
        self.log_rejected(source, result);
    }
}
