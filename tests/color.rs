mod tests {
    use defy_palette::color::{Color, ParseColorError};

    const RED: Color = Color::new(255, 0, 0);
    const BLUE: Color = Color::new(0, 0, 255);

    #[test]
    fn test_parse_hex() {
        assert_eq!("#a916e2".parse(), Ok(Color::new(169, 22, 226)));
        assert_eq!("A916E2".parse(), Ok(Color::new(169, 22, 226)));
        assert_eq!("#000000".parse(), Ok(Color::BLACK));
        assert_eq!("ffffff".parse(), Ok(Color::WHITE));
    }

    #[test]
    fn test_parse_rejects_malformed_specs() {
        assert_eq!(
            "#fff".parse::<Color>(),
            Err(ParseColorError("#fff".to_string()))
        );
        assert!("zzzzzz".parse::<Color>().is_err());
        assert!("".parse::<Color>().is_err());
        assert!("#a916e2ff".parse::<Color>().is_err());
    }

    #[test]
    fn test_rgbw_wire_order() {
        assert_eq!(Color::new(169, 22, 226).to_rgbw(), [169, 22, 226, 0]);
        assert_eq!(Color::from_rgbw(1, 2, 3, 4).to_rgbw(), [1, 2, 3, 4]);
    }

    #[test]
    fn test_blend() {
        assert_eq!(RED.blend(BLUE, 0.0), RED);
        assert_eq!(RED.blend(BLUE, 1.0), BLUE);
        assert_eq!(RED.blend(BLUE, 0.5), Color::new(128, 0, 128));
        // amounts outside [0, 1] clamp
        assert_eq!(RED.blend(BLUE, -3.0), RED);
        assert_eq!(RED.blend(BLUE, 7.0), BLUE);
    }

    #[test]
    fn test_pastelize() {
        assert_eq!(
            Color::new(169, 22, 226).pastelize(),
            Color::new(210, 136, 233)
        );
        assert_eq!(Color::new(250, 250, 240).pastelize(), Color::new(250, 250, 240));
    }

    #[test]
    fn test_soften_is_milder_than_pastelize() {
        let color = Color::new(169, 22, 226);
        assert_eq!(color.soften(), Color::new(189, 79, 230));

        let softened = color.soften();
        let pastelized = color.pastelize();
        assert!(softened.g < pastelized.g);
        assert!(softened.r < pastelized.r);
    }

    #[test]
    fn test_intensify() {
        let color = Color::from_rgbw(200, 100, 0, 40);
        assert_eq!(color.intensify(0.0), color);
        assert_eq!(color.intensify(0.5), Color::from_rgbw(100, 50, 0, 20));
        assert_eq!(color.intensify(1.0), Color::from_rgbw(0, 0, 0, 0));
        assert_eq!(color.intensify(2.0), color.intensify(1.0));
        assert_eq!(color.intensify(-1.0), color);
    }

    #[test]
    fn test_luminance() {
        assert!(Color::BLACK.luminance().abs() < 1e-9);
        assert!((Color::WHITE.luminance() - 1.0).abs() < 1e-9);
        assert!(RED.luminance() < Color::new(0, 255, 0).luminance());
    }

    #[test]
    fn test_luminize() {
        // white scaled down and black lifted both land on the same gray
        assert_eq!(Color::WHITE.luminize(0.5), Color::new(188, 188, 188));
        assert_eq!(Color::BLACK.luminize(0.5), Color::new(188, 188, 188));

        // luminizing to the current luminance is an identity
        assert_eq!(RED.luminize(RED.luminance()), RED);

        // hue survives: a red stays red, only its level moves
        let luminized = RED.luminize(0.1);
        assert!(luminized.g == 0 && luminized.b == 0);

        // white channel is untouched
        assert_eq!(Color::from_rgbw(10, 10, 10, 77).luminize(0.5).w, 77);
    }
}
