use std::time::{Duration, Instant};

use egg_timer::state::{
    parse_duration_or_zero, AppState, CountdownTimer, InputPolicy, Phase, Progress, Wake,
};

fn secs(s: u64) -> Duration {
    Duration::from_secs(s)
}

#[test]
fn ten_second_boil() {
    let t0 = Instant::now();
    let mut timer = CountdownTimer::new(t0);
    timer.start(t0, secs(10));

    let half = timer.progress(t0 + secs(5));
    assert!(half.active);
    assert!((half.fraction - 0.5).abs() < 1e-6);
    assert_eq!(timer.progress(t0 + secs(10)), Progress::INACTIVE);
}

#[test]
fn unparseable_input_finishes_at_once() {
    let t0 = Instant::now();
    let requested = parse_duration_or_zero("abc");
    assert_eq!(requested, Duration::ZERO);

    let mut timer = CountdownTimer::new(t0);
    assert_eq!(timer.start(t0, requested), Wake::Now);
    assert_eq!(timer.progress(t0), Progress::INACTIVE);
}

#[test]
fn restart_after_stop_starts_fresh() {
    let t0 = Instant::now();
    let mut timer = CountdownTimer::new(t0);
    timer.start(t0, secs(3));
    timer.stop();
    assert_eq!(timer.progress(t0 + secs(1)), Progress::INACTIVE);

    timer.start(t0 + secs(1), secs(3));
    let p = timer.progress(t0 + secs(2));
    assert!(p.active);
    assert!((p.fraction - 1.0 / 3.0).abs() < 1e-4);
}

#[test]
fn button_presses_drive_a_full_boil() {
    let t0 = Instant::now();
    let frame = Duration::from_millis(40);
    let mut state = AppState::new(t0, " 4 ", InputPolicy::Reject);

    assert_eq!(state.view(t0).button_label, "Start");
    assert_eq!(state.toggle(t0), Some(Wake::Now));

    let mut now = t0;
    let mut last = 0.0;
    while let Some(Wake::At(at)) = state.next_wake(now, frame) {
        assert!(at > now);
        now = at;
        state.observe(now);
        state.sync_input(now);
        let view = state.view(now);
        assert!(view.fraction >= last);
        last = view.fraction;
    }

    assert_eq!(now, t0 + secs(4));
    let done = state.view(now);
    assert_eq!(done.phase, Phase::Finished);
    assert_eq!(done.status, Some("Finished"));
    assert_eq!(state.input, "4.0");
}
