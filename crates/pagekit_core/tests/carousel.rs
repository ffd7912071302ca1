use pagekit_core::{
    CarouselConfig, CarouselController, CarouselError, CarouselEvent, NavKey, Scheduler, Slide,
    SlideSet, VirtualScheduler,
};
use std::time::Duration;

const INTERVAL: Duration = Duration::from_millis(5000);

fn autoplay_off() -> CarouselConfig {
    CarouselConfig {
        autoplay: false,
        ..CarouselConfig::default()
    }
}

/// Advances virtual time and feeds every due tick back into the controller.
fn run_for(
    controller: &mut CarouselController<&VirtualScheduler>,
    scheduler: &VirtualScheduler,
    by: Duration,
) -> usize {
    let ticks = scheduler.advance(by);
    let mut advanced = 0;
    for tick in ticks {
        if controller.on_tick(tick) {
            advanced += 1;
        }
    }
    advanced
}

#[test]
fn starts_on_first_slide_with_one_autoplay_timer() {
    let scheduler = VirtualScheduler::new();
    let controller =
        CarouselController::new(SlideSet::demo(), &scheduler, CarouselConfig::default());

    assert_eq!(controller.current_index(), 0);
    assert_eq!(controller.current_slide().title, "Слайд 1");
    assert!(controller.is_autoplay_enabled());
    assert_eq!(scheduler.active_timers(), 1);
}

#[test]
fn disabled_autoplay_config_starts_no_timer() {
    let scheduler = VirtualScheduler::new();
    let controller = CarouselController::new(SlideSet::demo(), &scheduler, autoplay_off());

    assert!(!controller.is_autoplay_enabled());
    assert!(controller.active_timer().is_none());
    assert_eq!(scheduler.active_timers(), 0);
}

#[test]
fn navigation_wraps_in_both_directions() {
    let scheduler = VirtualScheduler::new();
    let mut controller = CarouselController::new(SlideSet::demo(), &scheduler, autoplay_off());

    controller.prev();
    assert_eq!(controller.current_index(), 3);
    controller.next();
    assert_eq!(controller.current_index(), 0);
}

#[test]
fn full_cycle_and_prev_after_next_return_to_start() {
    let scheduler = VirtualScheduler::new();
    let mut controller = CarouselController::new(SlideSet::demo(), &scheduler, autoplay_off());
    let len = controller.slide_count();

    for start in 0..len {
        controller.go_to(start).unwrap();
        for _ in 0..len {
            controller.next();
        }
        assert_eq!(controller.current_index(), start);

        controller.next();
        controller.prev();
        assert_eq!(controller.current_index(), start);
    }
}

#[test]
fn single_slide_set_stays_put() {
    let scheduler = VirtualScheduler::new();
    let slides = SlideSet::new(vec![Slide::new("only", "slide")]).unwrap();
    let mut controller = CarouselController::new(slides, &scheduler, autoplay_off());

    controller.next();
    controller.prev();
    assert_eq!(controller.current_index(), 0);
    assert_eq!(controller.progress(), (1, 1));
    assert_eq!(controller.slide_count(), 1);
    assert!(!controller.slides().is_empty());
}

#[test]
fn enabling_autoplay_twice_keeps_one_timer() {
    let scheduler = VirtualScheduler::new();
    let mut controller = CarouselController::new(SlideSet::demo(), &scheduler, autoplay_off());

    controller.set_autoplay(true);
    controller.set_autoplay(true);
    assert_eq!(scheduler.active_timers(), 1);

    assert_eq!(run_for(&mut controller, &scheduler, INTERVAL), 1);
    assert_eq!(controller.current_index(), 1);
    assert_eq!(
        run_for(&mut controller, &scheduler, Duration::from_millis(4999)),
        0
    );
    assert_eq!(
        run_for(&mut controller, &scheduler, Duration::from_millis(1)),
        1
    );
    assert_eq!(controller.current_index(), 2);
    assert_eq!(scheduler.active_timers(), 1);
}

#[test]
fn autoplay_wraps_after_last_slide() {
    let scheduler = VirtualScheduler::new();
    let mut controller =
        CarouselController::new(SlideSet::demo(), &scheduler, CarouselConfig::default());

    for _ in 0..controller.slide_count() {
        run_for(&mut controller, &scheduler, INTERVAL);
    }
    assert_eq!(controller.current_index(), 0);
}

#[test]
fn disabling_autoplay_cancels_timer() {
    let scheduler = VirtualScheduler::new();
    let mut controller =
        CarouselController::new(SlideSet::demo(), &scheduler, CarouselConfig::default());

    controller.set_autoplay(false);
    assert_eq!(scheduler.active_timers(), 0);
    assert_eq!(run_for(&mut controller, &scheduler, INTERVAL * 4), 0);
    assert_eq!(controller.current_index(), 0);
}

#[test]
fn manual_navigation_restarts_countdown() {
    let scheduler = VirtualScheduler::new();
    let mut controller =
        CarouselController::new(SlideSet::demo(), &scheduler, CarouselConfig::default());

    run_for(&mut controller, &scheduler, Duration::from_millis(4000));
    controller.go_to(2).unwrap();
    assert_eq!(
        run_for(&mut controller, &scheduler, Duration::from_millis(4000)),
        0
    );
    assert_eq!(controller.current_index(), 2);
    assert_eq!(
        run_for(&mut controller, &scheduler, Duration::from_millis(1000)),
        1
    );
    assert_eq!(controller.current_index(), 3);
}

#[test]
fn stale_tick_does_not_advance() {
    let scheduler = VirtualScheduler::new();
    let mut controller =
        CarouselController::new(SlideSet::demo(), &scheduler, CarouselConfig::default());
    let old_timer = controller.active_timer().expect("autoplay timer");

    controller.next();
    assert_ne!(controller.active_timer(), Some(old_timer));
    assert!(!scheduler.is_active(old_timer));
    assert!(!controller.on_tick(old_timer));
    assert_eq!(controller.current_index(), 1);
}

#[test]
fn pause_keeps_flag_and_resume_restarts() {
    let scheduler = VirtualScheduler::new();
    let mut controller =
        CarouselController::new(SlideSet::demo(), &scheduler, CarouselConfig::default());

    controller.pause();
    assert!(controller.is_paused());
    assert!(controller.is_autoplay_enabled());
    assert_eq!(scheduler.active_timers(), 0);
    assert_eq!(run_for(&mut controller, &scheduler, INTERVAL * 2), 0);

    controller.resume();
    assert!(!controller.is_paused());
    assert_eq!(scheduler.active_timers(), 1);
    assert_eq!(run_for(&mut controller, &scheduler, INTERVAL), 1);
    assert_eq!(controller.current_index(), 1);
}

#[test]
fn navigation_while_paused_restarts_autoplay_timer() {
    let scheduler = VirtualScheduler::new();
    let mut controller =
        CarouselController::new(SlideSet::demo(), &scheduler, CarouselConfig::default());

    controller.pause();
    controller.go_to(2).unwrap();
    assert!(controller.is_autoplay_enabled());
    assert_eq!(scheduler.active_timers(), 1);

    controller.next();
    assert_eq!(scheduler.active_timers(), 1);
    assert_eq!(run_for(&mut controller, &scheduler, INTERVAL), 1);
    assert_eq!(controller.current_index(), 0);
}

#[test]
fn enabling_autoplay_while_paused_starts_timer() {
    let scheduler = VirtualScheduler::new();
    let mut controller = CarouselController::new(SlideSet::demo(), &scheduler, autoplay_off());

    controller.pause();
    controller.set_autoplay(true);
    assert!(controller.is_paused());
    assert_eq!(scheduler.active_timers(), 1);
    assert!(controller.active_timer().is_some());

    controller.resume();
    assert_eq!(scheduler.active_timers(), 1);
}

#[test]
fn resume_after_autoplay_disabled_starts_nothing() {
    let scheduler = VirtualScheduler::new();
    let mut controller =
        CarouselController::new(SlideSet::demo(), &scheduler, CarouselConfig::default());

    controller.pause();
    controller.set_autoplay(false);
    controller.resume();
    assert_eq!(scheduler.active_timers(), 0);
    assert!(controller.active_timer().is_none());
}

#[test]
fn go_to_rejects_out_of_range_index() {
    let scheduler = VirtualScheduler::new();
    let mut controller = CarouselController::new(SlideSet::demo(), &scheduler, autoplay_off());
    controller.go_to(1).unwrap();

    let err = controller.go_to(4).unwrap_err();
    assert_eq!(err, CarouselError::IndexOutOfRange { index: 4, len: 4 });
    assert_eq!(controller.current_index(), 1);
}

#[test]
fn events_map_to_operations() {
    let scheduler = VirtualScheduler::new();
    let mut controller = CarouselController::new(SlideSet::demo(), &scheduler, autoplay_off());

    controller.handle(CarouselEvent::NextClicked).unwrap();
    controller
        .handle(CarouselEvent::KeyPressed(NavKey::ArrowRight))
        .unwrap();
    assert_eq!(controller.current_index(), 2);

    controller.handle(CarouselEvent::PrevClicked).unwrap();
    controller
        .handle(CarouselEvent::KeyPressed(NavKey::ArrowLeft))
        .unwrap();
    assert_eq!(controller.current_index(), 0);

    controller.handle(CarouselEvent::DotClicked(3)).unwrap();
    assert_eq!(controller.current_index(), 3);
    assert!(controller.handle(CarouselEvent::DotClicked(9)).is_err());

    controller
        .handle(CarouselEvent::AutoplayToggled(true))
        .unwrap();
    controller.handle(CarouselEvent::PointerEnter).unwrap();
    assert_eq!(scheduler.active_timers(), 0);
    controller.handle(CarouselEvent::PointerLeave).unwrap();
    let timer = controller.active_timer().expect("timer after pointer leave");

    scheduler.advance(INTERVAL);
    controller.handle(CarouselEvent::Tick(timer)).unwrap();
    assert_eq!(controller.current_index(), 0);
}

#[test]
fn key_names_map_to_navigation_keys() {
    assert_eq!(NavKey::from_key_name("ArrowLeft"), Some(NavKey::ArrowLeft));
    assert_eq!(NavKey::from_key_name("ArrowRight"), Some(NavKey::ArrowRight));
    assert_eq!(NavKey::from_key_name("Enter"), None);
}

#[test]
fn status_line_reports_autoplay_and_position() {
    let scheduler = VirtualScheduler::new();
    let mut controller =
        CarouselController::new(SlideSet::demo(), &scheduler, CarouselConfig::default());
    controller.next();

    assert_eq!(controller.progress(), (2, 4));
    assert_eq!(
        controller.status_line(),
        "Автопрокрутка включена. Текущий слайд: 2 из 4"
    );
}

#[test]
fn custom_interval_is_used_for_timer() {
    let scheduler = VirtualScheduler::new();
    let config = CarouselConfig {
        interval_ms: 1000,
        autoplay: true,
    };
    let mut controller = CarouselController::new(SlideSet::demo(), &scheduler, config);

    assert_eq!(
        run_for(&mut controller, &scheduler, Duration::from_millis(1000)),
        1
    );
    assert_eq!(controller.current_index(), 1);
}

#[test]
fn dropping_controller_cancels_its_timer() {
    let scheduler = VirtualScheduler::new();
    {
        let _controller =
            CarouselController::new(SlideSet::demo(), &scheduler, CarouselConfig::default());
        assert_eq!(scheduler.active_timers(), 1);
    }
    assert_eq!(scheduler.active_timers(), 0);
    let orphan = scheduler.start_repeating(INTERVAL);
    assert!(scheduler.is_active(orphan));
}
