mod tests {
    use defy_palette::color::Color;
    use defy_palette::effect::{EffectKind, Pipeline, overrides};

    const RED: Color = Color::new(255, 0, 0);
    const GREEN: Color = Color::new(0, 255, 0);

    #[test]
    fn test_effect_lookup_by_name() {
        assert_eq!(EffectKind::from_name("pastelize"), EffectKind::Pastelize);
        assert_eq!(EffectKind::from_name("soften"), EffectKind::Soften);
        assert_eq!(EffectKind::from_name("luminize"), EffectKind::Luminize);
        assert_eq!(EffectKind::from_name("none"), EffectKind::None);
        // unrecognized names silently fall back to none
        assert_eq!(EffectKind::from_name("sparkle"), EffectKind::None);
        assert_eq!(EffectKind::from_name(""), EffectKind::None);
    }

    #[test]
    fn test_effect_names_round_trip() {
        for effect in [
            EffectKind::None,
            EffectKind::Pastelize,
            EffectKind::Soften,
            EffectKind::Luminize,
        ] {
            assert_eq!(EffectKind::from_name(effect.name()), effect);
        }
    }

    #[test]
    fn test_default_pipeline_is_identity() {
        let mut palette = vec![RED, GREEN, Color::BLACK];
        Pipeline::default().apply(&mut palette);
        assert_eq!(palette, vec![RED, GREEN, Color::BLACK]);
    }

    #[test]
    fn test_effect_applies_before_intensity() {
        let mut palette = vec![Color::BLACK];
        let pipeline = Pipeline {
            effect: EffectKind::Pastelize,
            intensity: 0.5,
            overrides: Vec::new(),
        };
        pipeline.apply(&mut palette);
        // pastelized black is (125, 125, 120), halved toward black afterwards
        assert_eq!(palette, vec![Color::new(63, 63, 60)]);
    }

    #[test]
    fn test_full_intensity_blacks_out_the_palette() {
        let mut palette = vec![RED, GREEN];
        let pipeline = Pipeline {
            intensity: 1.0,
            ..Pipeline::default()
        };
        pipeline.apply(&mut palette);
        assert_eq!(palette, vec![Color::BLACK, Color::BLACK]);
    }

    #[test]
    fn test_overrides_bypass_effect_and_intensity() {
        let mut palette = vec![RED, GREEN, RED];
        let pipeline = Pipeline {
            effect: EffectKind::Pastelize,
            intensity: 0.9,
            overrides: vec![(2, Color::BLACK)],
        };
        pipeline.apply(&mut palette);
        assert_eq!(palette[2], Color::BLACK);
        assert_ne!(palette[0], RED);
    }

    #[test]
    fn test_out_of_range_override_is_ignored() {
        let mut palette = vec![RED, GREEN, RED];
        let pipeline = Pipeline {
            overrides: vec![(9, Color::WHITE)],
            ..Pipeline::default()
        };
        pipeline.apply(&mut palette);
        // the palette is never grown to satisfy an override
        assert_eq!(palette, vec![RED, GREEN, RED]);
    }

    #[test]
    fn test_later_override_for_the_same_index_wins() {
        let mut palette = vec![RED, GREEN];
        let pipeline = Pipeline {
            overrides: vec![(0, Color::WHITE), (0, Color::BLACK)],
            ..Pipeline::default()
        };
        pipeline.apply(&mut palette);
        assert_eq!(palette[0], Color::BLACK);
    }

    #[test]
    fn test_override_parsing() {
        assert_eq!(overrides::parse("2=000000"), vec![(2, Color::BLACK)]);
        assert_eq!(
            overrides::parse("0=#ff0000  3=00ff00"),
            vec![(0, RED), (3, GREEN)]
        );
        assert_eq!(overrides::parse(""), Vec::new());
    }

    #[test]
    fn test_malformed_override_tokens_are_skipped() {
        // only the well-formed token survives
        assert_eq!(overrides::parse("abc 1=00ff00"), vec![(1, GREEN)]);
        assert_eq!(overrides::parse("x=ff0000 3=zzzzzz 4 ="), Vec::new());
        assert_eq!(overrides::parse("1="), Vec::new());
        assert_eq!(overrides::parse("=ff0000"), Vec::new());
    }
}
