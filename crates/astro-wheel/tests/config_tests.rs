use astro_wheel::aspects::{AspectKind, OrbPreset};
use astro_wheel::catalog::BodyId;
use astro_wheel::config::{default_display, WheelConfig};
use astro_wheel::error::ConfigError;
use astro_wheel::rendering::ThemeKind;

#[test]
fn test_empty_document_gives_defaults() {
    let config = WheelConfig::from_toml_str("").unwrap();
    assert_eq!(config, WheelConfig::default());
    assert_eq!(config.canvas.width, 600.0);
    assert_eq!(config.canvas.height(), 600.0);
    assert_eq!(config.chart.outer_min_degree, 8.0);
    assert_eq!(config.chart.inner_min_degree, 9.0);
    assert_eq!(config.theme, ThemeKind::Dark);
    assert_eq!(config.display, default_display());
}

#[test]
fn test_full_document() {
    let text = r##"
        theme = "light"
        display = ["sun", "moon", "asc", "chiron"]

        [canvas]
        width = 800
        height = 700

        [chart]
        stroke_width = 2.0
        outer_min_degree = 6.0

        [palette]
        fire = "#ff0000"

        [aspects]
        preset = "all"

        [aspects.orbs]
        trine = 9.0

        [aspects.enabled]
        semisextile = false

        [aspects.body_orbs]
        sun = 1.5
    "##;
    let config = WheelConfig::from_toml_str(text).unwrap();

    assert_eq!(config.theme, ThemeKind::Light);
    assert_eq!(config.canvas.height(), 700.0);
    assert_eq!(config.chart.stroke_width, 2.0);
    assert_eq!(config.chart.outer_min_degree, 6.0);
    // Unset fields keep their defaults
    assert_eq!(config.chart.inner_min_degree, 9.0);
    assert_eq!(config.display.len(), 4);
    assert!(config.display.contains(&BodyId::Chiron));
    assert!(config.display.contains(&BodyId::Ascendant));

    assert!(config.aspects.is_enabled(AspectKind::Semisquare));
    assert!(!config.aspects.is_enabled(AspectKind::Semisextile));
    assert_eq!(config.aspects.orbs.get(&AspectKind::Trine), Some(&9.0));
    assert_eq!(config.aspects.body_orbs.get(&BodyId::Sun), Some(&1.5));

    let theme = config.resolved_theme().unwrap();
    assert_eq!(theme.fire.to_hex(), "#ff0000");
}

#[test]
fn test_major_only_preset() {
    let config = WheelConfig::from_toml_str("[aspects]\npreset = \"major_only\"").unwrap();
    assert!(!config.aspects.is_enabled(AspectKind::Quincunx));
    assert!(config.aspects.is_enabled(AspectKind::Square));
    assert_eq!(OrbPreset::default(), OrbPreset::Default);
}

#[test]
fn test_unknown_aspect_is_rejected() {
    let result = WheelConfig::from_toml_str("[aspects.orbs]\nquintile = 2.0");
    assert_eq!(result, Err(ConfigError::UnknownAspect("quintile".to_string())));
}

#[test]
fn test_unknown_display_body_is_rejected() {
    let result = WheelConfig::from_toml_str("display = [\"sun\", \"vulcan\"]");
    assert_eq!(result, Err(ConfigError::UnknownBody("vulcan".to_string())));
}

#[test]
fn test_bad_color_is_rejected() {
    let result = WheelConfig::from_toml_str("[palette]\nwater = \"blue\"");
    assert_eq!(
        result,
        Err(ConfigError::InvalidColor {
            key: "palette.water".to_string(),
            value: "blue".to_string(),
        })
    );
}

#[test]
fn test_out_of_range_values_are_rejected() {
    assert!(matches!(
        WheelConfig::from_toml_str("[chart]\nring_thickness_fraction = 0.3"),
        Err(ConfigError::InvalidFraction { .. })
    ));
    assert!(matches!(
        WheelConfig::from_toml_str("[chart]\nouter_min_degree = 200.0"),
        Err(ConfigError::InvalidSeparation { .. })
    ));
    assert!(matches!(
        WheelConfig::from_toml_str("[aspects.orbs]\nsquare = -1.0"),
        Err(ConfigError::InvalidOrb { .. })
    ));
    assert!(matches!(
        WheelConfig::from_toml_str("[canvas]\nwidth = 0"),
        Err(ConfigError::InvalidValue { .. })
    ));
}

#[test]
fn test_malformed_toml_is_a_parse_error() {
    assert!(matches!(
        WheelConfig::from_toml_str("[canvas\nwidth = 1"),
        Err(ConfigError::Parse(_))
    ));
}
