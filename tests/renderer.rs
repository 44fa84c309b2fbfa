mod common;

mod tests {
    use std::time::{Duration, Instant};

    use super::common::{MinRandom, RecordingOutput};
    use lamp_effects::{
        COLS, Effect, EffectId, FireEffect, RainbowEffect, Renderer, Rgb, StarfieldEffect,
        frame_scheduler::frame_duration, grid::index,
    };

    #[test]
    fn test_frame_duration() {
        assert_eq!(frame_duration(30).as_millis(), 33);
        assert_eq!(frame_duration(10).as_millis(), 100);
        assert_eq!(frame_duration(60).as_millis(), 16);
        assert_eq!(frame_duration(2).as_millis(), 500);
        assert_eq!(frame_duration(0).as_millis(), 1000);
    }

    #[test]
    fn test_fire_renders_before_advancing() {
        let mut renderer = Renderer::new(RecordingOutput::default());
        let mut fire = FireEffect::new(MinRandom);

        renderer.update(&mut fire);

        let output = renderer.output();
        assert_eq!(output.frames.len(), 1);
        assert_eq!(output.rates, vec![30]);
        // Written frame shows the initial dark state.
        assert!(output.frames[0].iter().all(|c| *c == Rgb::new(0x05, 0, 0)));
        for col in 0..COLS {
            let bottom = fire.heat(0, col);
            assert!((32..144).contains(&bottom));
        }
    }

    #[test]
    fn test_fire_second_frame_shows_sparks() {
        let mut renderer = Renderer::new(RecordingOutput::default());
        let mut fire = FireEffect::new(MinRandom);

        renderer.update(&mut fire);
        renderer.update(&mut fire);

        let frames = &renderer.output().frames;
        let spark = frames[1][index(0, 3)];
        // Ember 0x20 sits exactly on the third fire palette stop.
        assert_eq!(spark, Rgb::new(0xFE, 0xAE, 0x01));
        assert_eq!(frames[1][index(1, 3)], Rgb::new(0x05, 0, 0));
        assert_eq!(renderer.frame().get(0, 3), spark);
    }

    #[test]
    fn test_update_is_paced() {
        let mut renderer = Renderer::new(RecordingOutput::default());
        let mut stars = StarfieldEffect::with_seed(1);

        let start = Instant::now();
        for _ in 0..3 {
            renderer.update(&mut stars);
        }
        assert!(start.elapsed() >= Duration::from_millis(3 * 16));
        assert_eq!(renderer.output().rates, vec![60, 60, 60]);
    }

    #[test]
    fn test_rainbow_update() {
        let mut renderer = Renderer::new(RecordingOutput::default());
        let mut rainbow = RainbowEffect::new();

        renderer.update(&mut rainbow);

        assert_eq!(rainbow.hue_index(), 1);
        let output = renderer.into_output();
        assert_eq!(output.rates, vec![RainbowEffect::FPS]);
        assert!(output.frames[0].iter().all(|c| *c == Rgb::new(255, 0, 0)));
    }

    #[test]
    fn test_slot_update() {
        let mut renderer = Renderer::new(RecordingOutput::default());
        let mut slot = EffectId::Fire.to_slot(MinRandom);

        slot.update(&mut renderer);
        slot.update(&mut renderer);

        assert_eq!(renderer.frame().get(0, 0), Rgb::new(0xFE, 0xAE, 0x01));
        assert_eq!(renderer.output().rates, vec![30, 30]);
    }
}
