mod tests {
    use biowearables::signal::MIN_BREATH_DURATION;
    use biowearables::{
        BreathSignal, Duration, FrameScheduler, Instant, MatrixFrame, MatrixTarget, SceneId,
        SignalSink, simulate_breath,
    };

    #[derive(Default)]
    struct Recorder {
        values: Vec<f32>,
    }

    impl SignalSink for Recorder {
        fn render_value(&mut self, value: f32) {
            self.values.push(value);
        }
    }

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 0.01
    }

    #[test]
    fn test_breath_shape() {
        assert!(close(simulate_breath(Duration::from_millis(0), 5.0), 0.0));
        assert!(close(simulate_breath(Duration::from_millis(1250), 5.0), 50.0));
        assert!(close(simulate_breath(Duration::from_millis(2500), 5.0), 100.0));
        assert!(close(simulate_breath(Duration::from_millis(5000), 5.0), 0.0));
        assert!(close(simulate_breath(Duration::from_millis(8000), 8.0), 0.0));
        assert!(close(simulate_breath(Duration::from_millis(4000), 8.0), 100.0));
    }

    #[test]
    fn test_breath_stays_in_range_over_long_runs() {
        for seconds in [0, 7, 3_600, 86_400, 604_800] {
            for offset in 0..50 {
                let elapsed = Duration::from_secs(seconds) + Duration::from_millis(offset * 97);
                let value = simulate_breath(elapsed, 6.0);
                assert!((0.0..=100.0).contains(&value));
            }
        }
    }

    #[test]
    fn test_breath_duration_is_clamped() {
        let elapsed = Duration::from_millis(1800);
        let expected = simulate_breath(elapsed, MIN_BREATH_DURATION);
        assert!(close(simulate_breath(elapsed, 1.0), expected));
        assert!(close(simulate_breath(elapsed, -3.0), expected));
        assert!(close(simulate_breath(elapsed, f32::NAN), expected));
    }

    #[test]
    fn test_breath_signal_origin() {
        let signal = BreathSignal::new(Instant::from_millis(10_000), 5.0);
        assert!(close(signal.sample(Instant::from_millis(500)), 0.0));
        assert!(close(signal.sample(Instant::from_millis(12_500)), 100.0));
        assert_eq!(signal.duration(), 5.0);
    }

    #[test]
    fn test_scheduler_paces_frames() {
        let signal = BreathSignal::new(Instant::from_millis(0), 5.0);
        let mut scheduler =
            FrameScheduler::with_frame_duration(Recorder::default(), signal, Duration::from_millis(20));

        let first = scheduler.tick(Instant::from_millis(0));
        assert_eq!(first.next_deadline, Instant::from_millis(20));
        assert_eq!(first.sleep_duration, Duration::from_millis(20));

        let second = scheduler.tick(Instant::from_millis(25));
        assert_eq!(second.next_deadline, Instant::from_millis(40));
        assert_eq!(second.sleep_duration, Duration::from_millis(15));

        let third = scheduler.tick(Instant::from_millis(2_500));
        assert_eq!(third.next_deadline, Instant::from_millis(2_520));
        assert!(close(third.value, 100.0));

        assert_eq!(scheduler.sink().values.len(), 3);
    }

    #[test]
    fn test_scheduler_drives_matrix() {
        let target = MatrixTarget::new(MatrixFrame::new(), SceneId::Spiral.to_scene());
        let signal = BreathSignal::new(Instant::from_millis(0), 5.0);
        let mut scheduler = FrameScheduler::new(target, signal);

        scheduler.tick(Instant::from_millis(0));
        assert_eq!(scheduler.sink().matrix().lit_count(), 0);

        scheduler.tick(Instant::from_millis(2_500));
        assert_eq!(scheduler.sink().matrix().lit_count(), 25);

        scheduler.sink_mut().set_scene(SceneId::Bar.to_scene());
        scheduler.tick(Instant::from_millis(2_520));
        assert_eq!(scheduler.sink().matrix().lit_count(), 15);
    }
}
