mod tests {
    use biowearables::color::{OFF, colors::INDIGO};
    use biowearables::strip::{draw_spiral, draw_spiral_on};
    use biowearables::{OutputDriver, Rgb, RotationDir, StripBuffer, StripDriver, StripLayout, scale};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Call {
        Clear,
        Brightness(u8),
        Pixel(usize, Rgb),
        Show,
    }

    #[derive(Default)]
    struct RecordingStrip {
        calls: Vec<Call>,
    }

    impl RecordingStrip {
        fn pixels(&self) -> Vec<usize> {
            self.calls
                .iter()
                .filter_map(|call| match call {
                    Call::Pixel(index, _) => Some(*index),
                    _ => None,
                })
                .collect()
        }
    }

    impl StripDriver for RecordingStrip {
        fn clear(&mut self) {
            self.calls.push(Call::Clear);
        }

        fn set_brightness(&mut self, brightness: u8) {
            self.calls.push(Call::Brightness(brightness));
        }

        fn set_pixel_color(&mut self, index: usize, color: Rgb) {
            self.calls.push(Call::Pixel(index, color));
        }

        fn show(&mut self) {
            self.calls.push(Call::Show);
        }
    }

    #[derive(Default)]
    struct CapturingOutput {
        frames: Vec<Vec<Rgb>>,
    }

    impl OutputDriver for CapturingOutput {
        fn write(&mut self, colors: &[Rgb]) {
            self.frames.push(colors.to_vec());
        }
    }

    #[test]
    fn test_missing_strip_is_noop() {
        draw_spiral::<RecordingStrip>(None, 50.0, INDIGO, 50.0, RotationDir::Clockwise);
    }

    #[test]
    fn test_zero_length_clears_and_shows() {
        let mut strip = RecordingStrip::default();
        draw_spiral(Some(&mut strip), 0.0, INDIGO, 10.0, RotationDir::Clockwise);
        assert_eq!(
            strip.calls,
            [Call::Clear, Call::Brightness(25), Call::Show]
        );
    }

    #[test]
    fn test_pixel_count_follows_scale() {
        for length in [0.0, 1.0, 12.5, 33.0, 50.0, 99.9, 100.0, 180.0] {
            let mut strip = RecordingStrip::default();
            draw_spiral(Some(&mut strip), length, INDIGO, 100.0, RotationDir::CounterClockwise);
            assert_eq!(strip.pixels().len(), usize::from(scale(length, 64)));
            assert_eq!(strip.calls.iter().filter(|c| **c == Call::Show).count(), 1);
            assert_eq!(strip.calls.last(), Some(&Call::Show));
        }
    }

    #[test]
    fn test_clockwise_order() {
        let mut strip = RecordingStrip::default();
        draw_spiral(Some(&mut strip), 15.5, INDIGO, 5.0, RotationDir::Clockwise);
        assert_eq!(strip.pixels(), [36, 35, 27, 28, 29, 37, 45, 44, 43, 42]);
    }

    #[test]
    fn test_counter_clockwise_order() {
        let mut strip = RecordingStrip::default();
        draw_spiral(
            Some(&mut strip),
            15.5,
            INDIGO,
            5.0,
            RotationDir::CounterClockwise,
        );
        assert_eq!(strip.pixels(), [36, 28, 27, 35, 43, 44, 45, 37, 29, 21]);
    }

    #[test]
    fn test_full_spiral_never_repeats() {
        let mut strip = RecordingStrip::default();
        draw_spiral(Some(&mut strip), 100.0, INDIGO, 5.0, RotationDir::Clockwise);
        let mut pixels = strip.pixels();
        assert_eq!(pixels.len(), 64);
        pixels.sort_unstable();
        pixels.dedup();
        assert_eq!(pixels.len(), 64);
    }

    #[test]
    fn test_color_is_passed_through() {
        let color = Rgb::new(1, 2, 3);
        let mut strip = RecordingStrip::default();
        draw_spiral(Some(&mut strip), 100.0, color, 5.0, RotationDir::Clockwise);
        assert!(strip.calls.iter().all(|call| match call {
            Call::Pixel(_, c) => *c == color,
            _ => true,
        }));
    }

    #[test]
    fn test_custom_layout() {
        let layout = StripLayout {
            center: 4,
            stride: 3,
            length: 9,
        };
        let mut strip = RecordingStrip::default();
        draw_spiral_on(&layout, Some(&mut strip), 100.0, INDIGO, 100.0, RotationDir::Clockwise);
        assert_eq!(strip.pixels(), [4, 3, 0, 1, 2, 5, 8, 7, 6]);
    }

    #[test]
    fn test_strip_buffer_show_applies_brightness() {
        let mut strip: StripBuffer<CapturingOutput, 64> = StripBuffer::new(CapturingOutput::default());
        let white = Rgb::new(255, 255, 255);
        draw_spiral(Some(&mut strip), 50.0, white, 50.0, RotationDir::Clockwise);

        assert_eq!(strip.brightness(), 128);
        assert_eq!(strip.lit_count(), 32);
        assert_eq!(strip.pixels()[36], white);

        let frames = &strip.output().frames;
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].len(), 64);
        assert_eq!(frames[0][36], Rgb::new(128, 128, 128));
        assert_eq!(frames[0].iter().filter(|p| **p != OFF).count(), 32);
    }

    #[test]
    fn test_strip_buffer_redraw_is_idempotent() {
        let mut strip: StripBuffer<CapturingOutput, 64> = StripBuffer::new(CapturingOutput::default());
        draw_spiral(Some(&mut strip), 80.0, INDIGO, 20.0, RotationDir::Clockwise);
        draw_spiral(Some(&mut strip), 20.0, INDIGO, 20.0, RotationDir::Clockwise);
        draw_spiral(Some(&mut strip), 20.0, INDIGO, 20.0, RotationDir::Clockwise);

        let frames = &strip.output().frames;
        assert_eq!(frames[1], frames[2]);
        assert_eq!(strip.lit_count(), usize::from(scale(20.0, 64)));
    }

    #[test]
    fn test_strip_buffer_ignores_out_of_range() {
        let mut strip: StripBuffer<CapturingOutput, 4> = StripBuffer::new(CapturingOutput::default());
        strip.set_pixel_color(10, INDIGO);
        assert_eq!(strip.lit_count(), 0);
    }
}
