impl<M, IN> Carousel<M, IN>
where
    M: MediaPlayer,
    IN: InputProvider,
{
    pub fn with_view<F>(&self, now_ms: u64, f: F)
    where
        F: FnOnce(CarouselView<'_>),
    {
        let transition = self.transition();
        let animation = transition.and_then(|t| {
            AnimationSpec::new(t.direction.animation(), t.started_ms, self.config.transition_ms)
                .frame(now_ms)
        });
        // Past the animation end but not yet ticked: draw the final frame.
        let progress = animation.map_or(100, |frame| frame.progress_pct);
        let direction = transition.map(|t| t.direction);

        let mut slides = [SlideView::default(); MAX_SLIDES];
        let mut slide_count = 0usize;
        for (index, phase) in self.slides.iter() {
            slides[slide_count] = slide_view(index, phase, direction, progress);
            slide_count += 1;
        }

        let mut indicators = [IndicatorView::default(); MAX_SLIDES];
        let indicator_count = self.indicators.len();
        for index in 0..indicator_count {
            indicators[index as usize] = IndicatorView {
                index,
                active: self.indicators.is_active(index),
            };
        }

        f(CarouselView {
            slides: &slides[..slide_count],
            indicators: &indicators[..indicator_count as usize],
            current: self.slides.current(),
            autoplaying: self.is_autoplaying(),
            visible: self.visible,
            animation,
        });
    }
}

fn slide_view(
    index: u16,
    phase: SlidePhase,
    direction: Option<Direction>,
    progress_pct: u8,
) -> SlideView {
    let progress = progress_pct.min(100) as i16;
    // `Next` brings the incoming slide in from the right.
    let sign: i16 = match direction {
        Some(Direction::Prev) => -1,
        _ => 1,
    };

    let (offset_pct, opacity_pct) = match phase {
        SlidePhase::Hidden => (0, 0),
        SlidePhase::Active => (0, 100),
        SlidePhase::Entering => (sign * (100 - progress), progress as u8),
        SlidePhase::Leaving => (-sign * progress, (100 - progress) as u8),
    };

    SlideView {
        index,
        phase,
        offset_pct,
        opacity_pct,
    }
}
