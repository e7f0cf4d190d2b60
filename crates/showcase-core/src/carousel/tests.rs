use super::*;
use crate::{
    error::MediaError,
    input::mock::{MockInput, ScriptedInput},
    schedule::{Clock, MockClock},
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum MediaCall {
    Play(MediaSlot),
    Pause(MediaSlot),
}

#[derive(Default)]
struct RecordingMedia {
    calls: Vec<MediaCall>,
    reject: bool,
}

impl MediaPlayer for RecordingMedia {
    fn play_from_start(&mut self, slot: MediaSlot) -> Result<(), MediaError> {
        self.calls.push(MediaCall::Play(slot));
        if self.reject {
            Err(MediaError::PlaybackRejected)
        } else {
            Ok(())
        }
    }

    fn pause(&mut self, slot: MediaSlot) {
        self.calls.push(MediaCall::Pause(slot));
    }
}

fn carousel(count: u16) -> Carousel<RecordingMedia, MockInput> {
    Carousel::new(
        count,
        RecordingMedia::default(),
        MockInput::new(),
        CarouselConfig::default(),
        0,
    )
    .unwrap()
}

fn settle<M: MediaPlayer, IN: InputProvider>(carousel: &mut Carousel<M, IN>, clock: &MockClock) {
    clock.advance(TRANSITION_MS as u64);
    carousel.tick(clock.now_ms());
}

fn assert_settled_on<M: MediaPlayer, IN: InputProvider>(carousel: &Carousel<M, IN>, index: u16) {
    assert!(!carousel.is_transitioning());
    assert_eq!(carousel.current_index(), index);
    assert_eq!(carousel.slides().count_in(SlidePhase::Active), 1);
    assert_eq!(carousel.slides().phase(index), Some(SlidePhase::Active));
    assert_eq!(carousel.indicators().active_count(), 1);
    assert_eq!(carousel.indicators().active_index(), Some(index));
}

#[test]
fn advance_cycles_forward_and_wraps_as_next() {
    let clock = MockClock::new(0);
    let mut carousel = carousel(3);

    for (from, to) in [(0, 1), (1, 2), (2, 0)] {
        let transition = carousel.advance(clock.now_ms()).unwrap();
        assert_eq!((transition.from, transition.to), (from, to));
        assert_eq!(transition.direction, Direction::Next);
        settle(&mut carousel, &clock);
        assert_settled_on(&carousel, to);
    }
}

#[test]
fn retreat_from_first_slide_wraps_as_prev() {
    let mut carousel = carousel(3);

    let transition = carousel.retreat(0).unwrap();
    assert_eq!(transition.to, 2);
    assert_eq!(transition.direction, Direction::Prev);
}

#[test]
fn go_to_derives_direction_from_ordinals() {
    let clock = MockClock::new(0);
    let mut carousel = carousel(3);

    assert_eq!(carousel.go_to(2, 0).unwrap().direction, Direction::Next);
    settle(&mut carousel, &clock);

    // Indicator navigation does not apply the wrap rule.
    assert_eq!(
        carousel.go_to(0, clock.now_ms()).unwrap().direction,
        Direction::Prev
    );
}

#[test]
fn requests_during_transition_are_dropped() {
    let clock = MockClock::new(0);
    let mut carousel = carousel(4);
    let first = carousel.go_to(1, 0).unwrap();

    clock.advance(100);
    assert_eq!(
        carousel.advance(clock.now_ms()),
        Err(NavigationError::Busy)
    );
    assert_eq!(carousel.go_to(3, clock.now_ms()), Err(NavigationError::Busy));
    assert_eq!(carousel.retreat(clock.now_ms()), Err(NavigationError::Busy));

    assert_eq!(carousel.transition(), Some(first));
    assert_eq!(carousel.current_index(), 0);

    clock.set(first.completes_ms);
    carousel.tick(clock.now_ms());
    assert_settled_on(&carousel, 1);
}

#[test]
fn completion_lands_exactly_at_duration() {
    let mut carousel = carousel(2);
    let transition = carousel.advance(1_000).unwrap();
    assert_eq!(transition.completes_ms, 1_600);

    carousel.tick(1_599);
    assert!(carousel.is_transitioning());
    assert_eq!(carousel.current_index(), 0);

    carousel.tick(1_600);
    assert_settled_on(&carousel, 1);
}

#[test]
fn indicators_follow_only_on_completion() {
    let mut carousel = carousel(3);
    carousel.go_to(2, 0).unwrap();

    carousel.tick(300);
    assert_eq!(carousel.indicators().active_index(), Some(0));

    carousel.tick(600);
    assert_eq!(carousel.indicators().active_index(), Some(2));
}

#[test]
fn single_slide_never_transitions() {
    let mut carousel = carousel(1);

    assert_eq!(carousel.advance(0), Err(NavigationError::NotEnoughSlides(1)));
    assert_eq!(carousel.retreat(0), Err(NavigationError::NotEnoughSlides(1)));
    assert_eq!(carousel.go_to(0, 0), Err(NavigationError::AlreadyActive(0)));
    assert!(!carousel.play(0));

    for now in [0, 8_000, 16_000, 24_000] {
        carousel.tick(now);
        assert!(!carousel.is_transitioning());
    }
}

#[test]
fn empty_carousel_is_inert() {
    let mut carousel = carousel(0);
    assert_eq!(carousel.advance(0), Err(NavigationError::NotEnoughSlides(0)));
    assert_eq!(
        carousel.go_to(0, 0),
        Err(NavigationError::InvalidIndex { index: 0, count: 0 })
    );
    carousel.handle_input(InputEvent::Visibility(true), 0);
    assert!(carousel.media().calls.is_empty());
}

#[test]
fn out_of_range_target_is_rejected() {
    let mut carousel = carousel(3);
    assert_eq!(
        carousel.go_to(5, 0),
        Err(NavigationError::InvalidIndex { index: 5, count: 3 })
    );
    assert!(!carousel.is_transitioning());
    assert_eq!(carousel.current_index(), 0);
}

#[test]
fn current_target_is_noop_even_mid_transition() {
    let mut carousel = carousel(3);
    carousel.go_to(1, 0).unwrap();
    assert_eq!(carousel.go_to(0, 10), Err(NavigationError::AlreadyActive(0)));
}

#[test]
fn oversized_carousel_is_rejected() {
    let result = Carousel::new(
        MAX_SLIDES as u16 + 1,
        RecordingMedia::default(),
        MockInput::new(),
        CarouselConfig::default(),
        0,
    );
    assert!(result.is_err());
}

#[test]
fn autoplay_advances_only_while_visible() {
    let mut carousel = carousel(3);
    assert!(carousel.is_autoplaying());

    carousel.tick(8_000);
    assert!(!carousel.is_transitioning());

    carousel.handle_input(InputEvent::Visibility(true), 8_100);
    carousel.tick(16_000);
    let transition = carousel.transition().unwrap();
    assert_eq!((transition.from, transition.to), (0, 1));
    assert_eq!(transition.direction, Direction::Next);
}

#[test]
fn manual_transition_suspends_autoplay_until_settle() {
    let mut carousel = carousel(3);
    carousel.handle_input(InputEvent::Visibility(true), 0);
    assert_eq!(carousel.autoplay_timer().next_tick_ms(), Some(8_000));

    let manual = carousel.advance(7_900).unwrap();
    assert!(!carousel.autoplay_timer().is_running());
    assert!(carousel.is_autoplaying());

    // The 8000 ms tick no longer exists, so nothing replaces the manual move.
    carousel.tick(8_000);
    assert_eq!(carousel.transition(), Some(manual));

    carousel.tick(8_500);
    assert_settled_on(&carousel, 1);
    assert_eq!(carousel.autoplay_timer().next_tick_ms(), Some(16_500));

    carousel.tick(16_500);
    assert_eq!(carousel.transition().map(|t| t.to), Some(2));
}

#[test]
fn paused_autoplay_stays_paused_after_manual_navigation() {
    let mut carousel = carousel(3);
    carousel.pause();
    carousel.advance(0).unwrap();
    carousel.tick(600);

    assert!(!carousel.is_autoplaying());
}

#[test]
fn play_during_transition_resumes_on_settle() {
    let mut carousel = carousel(3);
    carousel.pause();
    carousel.advance(0).unwrap();

    assert!(carousel.play(100));
    assert!(carousel.is_autoplaying());
    assert!(!carousel.autoplay_timer().is_running());

    carousel.tick(600);
    assert!(carousel.autoplay_timer().is_running());
}

#[test]
fn hiding_stops_autoplay_and_pauses_media() {
    let mut carousel = carousel(3);
    carousel.handle_input(InputEvent::Visibility(true), 0);
    carousel.handle_input(InputEvent::Visibility(false), 10);

    assert!(!carousel.is_autoplaying());
    assert_eq!(
        carousel.media().calls,
        [
            MediaCall::Play(MediaSlot::Slide(0)),
            MediaCall::Pause(MediaSlot::Slide(0)),
        ]
    );
}

#[test]
fn hiding_mid_transition_settles_without_playback_or_autoplay() {
    let mut carousel = carousel(3);
    carousel.handle_input(InputEvent::Visibility(true), 0);
    carousel.advance(1_000).unwrap();
    carousel.media_mut().calls.clear();

    carousel.handle_input(InputEvent::Visibility(false), 1_200);
    assert!(!carousel.is_autoplaying());
    assert_eq!(carousel.media().calls, [MediaCall::Pause(MediaSlot::Slide(0))]);
    carousel.media_mut().calls.clear();

    carousel.tick(1_600);
    assert_settled_on(&carousel, 1);
    assert_eq!(carousel.media().calls, [MediaCall::Pause(MediaSlot::Slide(0))]);
    assert!(!carousel.autoplay_timer().is_running());
    assert!(!carousel.is_autoplaying());
}

#[test]
fn showing_mid_transition_resumes_autoplay_on_settle() {
    let mut carousel = carousel(3);
    carousel.pause();
    carousel.advance(1_000).unwrap();

    carousel.handle_input(InputEvent::Visibility(true), 1_100);
    assert!(carousel.is_autoplaying());
    assert!(!carousel.autoplay_timer().is_running());

    carousel.tick(1_600);
    assert_settled_on(&carousel, 1);
    assert_eq!(carousel.autoplay_timer().next_tick_ms(), Some(9_600));
    assert_eq!(
        carousel.media().calls,
        [
            MediaCall::Play(MediaSlot::Slide(0)),
            MediaCall::Pause(MediaSlot::Slide(0)),
            MediaCall::Play(MediaSlot::Slide(1)),
        ]
    );

    carousel.tick(9_600);
    assert_eq!(carousel.transition().map(|t| t.to), Some(2));
}

#[test]
fn settling_swaps_media_playback() {
    let mut carousel = carousel(2);
    carousel.handle_input(InputEvent::Visibility(true), 0);
    carousel.media_mut().calls.clear();

    carousel.advance(0).unwrap();
    assert!(carousel.media().calls.is_empty());

    carousel.tick(600);
    assert_eq!(
        carousel.media().calls,
        [
            MediaCall::Pause(MediaSlot::Slide(0)),
            MediaCall::Play(MediaSlot::Slide(1)),
        ]
    );
}

#[test]
fn rejected_playback_does_not_disturb_state() {
    let mut carousel = carousel(2);
    carousel.media_mut().reject = true;
    carousel.handle_input(InputEvent::Visibility(true), 0);

    carousel.advance(0).unwrap();
    carousel.tick(600);
    assert_settled_on(&carousel, 1);
}

#[test]
fn keys_are_ignored_out_of_view() {
    let events = [
        InputEvent::Key(Key::ArrowRight),
        InputEvent::Key(Key::Space),
    ];
    let mut carousel = Carousel::new(
        3,
        RecordingMedia::default(),
        ScriptedInput::new(&events),
        CarouselConfig::default(),
        0,
    )
    .unwrap();

    carousel.tick(0);
    assert!(!carousel.is_transitioning());
    assert!(carousel.is_autoplaying());
}

#[test]
fn scripted_keys_route_to_navigation() {
    let events = [
        InputEvent::Visibility(true),
        InputEvent::Key(Key::ArrowLeft),
        InputEvent::Key(Key::ArrowRight),
    ];
    let mut carousel = Carousel::new(
        3,
        RecordingMedia::default(),
        ScriptedInput::new(&events),
        CarouselConfig::default(),
        0,
    )
    .unwrap();

    assert_eq!(carousel.tick(0), TickResult::RenderRequested);
    let transition = carousel.transition().unwrap();
    assert_eq!(transition.to, 2);
    assert_eq!(transition.direction, Direction::Prev);
}

#[test]
fn space_toggles_autoplay() {
    let mut carousel = carousel(3);
    carousel.handle_input(InputEvent::Visibility(true), 0);

    carousel.handle_input(InputEvent::Key(Key::Space), 10);
    assert!(!carousel.is_autoplaying());
    carousel.handle_input(InputEvent::Key(Key::Space), 20);
    assert!(carousel.is_autoplaying());
}

#[test]
fn swipes_and_drags_share_the_threshold() {
    let clock = MockClock::new(0);
    let mut carousel = carousel(3);

    carousel.handle_input(InputEvent::TouchStart { x: 300 }, 0);
    carousel.handle_input(InputEvent::TouchEnd { x: 250 }, 0);
    assert!(!carousel.is_transitioning());

    carousel.handle_input(InputEvent::TouchStart { x: 300 }, 0);
    carousel.handle_input(InputEvent::TouchEnd { x: 200 }, 0);
    assert_eq!(carousel.transition().map(|t| t.to), Some(1));
    settle(&mut carousel, &clock);

    carousel.handle_input(InputEvent::PointerDown { x: 100 }, clock.now_ms());
    carousel.handle_input(InputEvent::PointerUp { x: 400 }, clock.now_ms());
    let transition = carousel.transition().unwrap();
    assert_eq!((transition.from, transition.to), (1, 0));
    assert_eq!(transition.direction, Direction::Prev);
}

#[test]
fn buttons_and_indicators_route_to_navigation() {
    let clock = MockClock::new(0);
    let mut carousel = carousel(4);

    carousel.handle_input(InputEvent::Indicator(3), 0);
    assert_eq!(carousel.transition().map(|t| t.to), Some(3));
    settle(&mut carousel, &clock);

    carousel.handle_input(InputEvent::NextButton, clock.now_ms());
    assert_eq!(carousel.transition().map(|t| t.to), Some(0));
    settle(&mut carousel, &clock);

    carousel.handle_input(InputEvent::PrevButton, clock.now_ms());
    assert_eq!(carousel.transition().map(|t| t.to), Some(3));

    carousel.handle_input(InputEvent::Indicator(9), clock.now_ms());
    assert_eq!(carousel.transition().map(|t| t.to), Some(3));
}

#[test]
fn step_maps_sign_to_direction() {
    let mut carousel = carousel(3);
    assert_eq!(carousel.step(1, 0).unwrap().to, 1);

    let mut carousel = self::carousel(3);
    assert_eq!(carousel.step(-1, 0).unwrap().to, 2);
}

#[test]
fn view_reports_mid_transition_offsets() {
    let mut carousel = carousel(3);
    carousel.advance(0).unwrap();

    carousel.with_view(300, |view| {
        assert_eq!(view.current, 0);
        assert_eq!(view.animation.map(|frame| frame.progress_pct), Some(50));
        assert_eq!(view.slides[0].phase, SlidePhase::Leaving);
        assert_eq!(view.slides[0].offset_pct, -50);
        assert_eq!(view.slides[1].phase, SlidePhase::Entering);
        assert_eq!(view.slides[1].offset_pct, 50);
        assert_eq!(view.slides[1].opacity_pct, 50);
        assert_eq!(view.slides[2].opacity_pct, 0);
        assert!(view.indicators[0].active);
    });
}

#[test]
fn tick_requests_render_only_when_needed() {
    let mut carousel = carousel(2);
    assert_eq!(carousel.tick(0), TickResult::RenderRequested);
    assert_eq!(carousel.tick(1), TickResult::NoRender);

    carousel.advance(2).unwrap();
    assert_eq!(carousel.tick(3), TickResult::RenderRequested);
    assert_eq!(carousel.tick(300), TickResult::RenderRequested);
    assert_eq!(carousel.tick(602), TickResult::RenderRequested);
    assert_eq!(carousel.tick(603), TickResult::NoRender);
}
