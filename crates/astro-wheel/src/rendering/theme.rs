use crate::aspects::AspectKind;
use crate::catalog::Classification;
use crate::error::ConfigError;
use crate::rendering::primitives::Color;
use serde::{Deserialize, Serialize};

/// Built-in palettes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeKind {
    Light,
    #[default]
    Dark,
    Mono,
}

impl ThemeKind {
    pub fn palette(self) -> Theme {
        match self {
            ThemeKind::Light => Theme::light(),
            ThemeKind::Dark => Theme::dark(),
            ThemeKind::Mono => Theme::mono(),
        }
    }
}

/// Colors for each classification plus the chrome of the wheel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub fire: Color,
    pub earth: Color,
    pub air: Color,
    pub water: Color,
    pub points: Color,
    pub asteroids: Color,
    pub angle: Color,
    pub others: Color,
    pub foreground: Color,
    pub background: Color,
    pub dim: Color,
    /// Fill opacity of sign and house sectors
    pub sector_opacity: f64,
}

fn hex(value: &str) -> Color {
    Color::from_hex(value).unwrap_or(Color::WHITE)
}

impl Theme {
    pub fn light() -> Self {
        Self {
            fire: hex("#ef476f"),
            earth: hex("#ffd166"),
            air: hex("#06d6a0"),
            water: hex("#81bce7"),
            points: hex("#118ab2"),
            asteroids: hex("#aa96da"),
            angle: hex("#758492"),
            others: hex("#ffa500"),
            foreground: hex("#758492"),
            background: hex("#fffdf1"),
            dim: hex("#a4bacd"),
            sector_opacity: 0.3,
        }
    }

    pub fn dark() -> Self {
        Self {
            angle: hex("#f7f3f0"),
            foreground: hex("#f7f3f0"),
            background: hex("#343a40"),
            dim: hex("#515860"),
            ..Self::light()
        }
    }

    pub fn mono() -> Self {
        let grey = hex("#888888");
        Self {
            fire: grey,
            earth: grey,
            air: grey,
            water: grey,
            points: grey,
            asteroids: grey,
            angle: grey,
            others: grey,
            foreground: grey,
            background: hex("#ffffff"),
            dim: grey,
            sector_opacity: 0.3,
        }
    }

    /// Table lookup by classification
    pub fn color_for(&self, classification: Classification) -> Color {
        match classification {
            Classification::Fire => self.fire,
            Classification::Earth => self.earth,
            Classification::Air => self.air,
            Classification::Water => self.water,
            Classification::Points => self.points,
            Classification::Asteroids => self.asteroids,
            Classification::Angle => self.angle,
            Classification::Others => self.others,
        }
    }

    /// Aspect lines borrow the element palette
    pub fn aspect_color(&self, kind: AspectKind) -> Color {
        self.color_for(aspect_classification(kind))
    }
}

pub fn aspect_classification(kind: AspectKind) -> Classification {
    match kind {
        AspectKind::Conjunction => Classification::Others,
        AspectKind::Opposition => Classification::Water,
        AspectKind::Trine => Classification::Air,
        AspectKind::Square | AspectKind::Semisquare | AspectKind::Sesquisquare => {
            Classification::Fire
        }
        AspectKind::Sextile | AspectKind::Semisextile => Classification::Points,
        AspectKind::Quincunx => Classification::Asteroids,
    }
}

impl Default for Theme {
    fn default() -> Self {
        ThemeKind::default().palette()
    }
}

/// Optional per-color overrides read from config, as hex strings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteOverrides {
    pub fire: Option<String>,
    pub earth: Option<String>,
    pub air: Option<String>,
    pub water: Option<String>,
    pub points: Option<String>,
    pub asteroids: Option<String>,
    pub angle: Option<String>,
    pub others: Option<String>,
    pub foreground: Option<String>,
    pub background: Option<String>,
    pub dim: Option<String>,
    pub sector_opacity: Option<f64>,
}

impl PaletteOverrides {
    fn entries(&self) -> [(&'static str, &Option<String>); 11] {
        [
            ("fire", &self.fire),
            ("earth", &self.earth),
            ("air", &self.air),
            ("water", &self.water),
            ("points", &self.points),
            ("asteroids", &self.asteroids),
            ("angle", &self.angle),
            ("others", &self.others),
            ("foreground", &self.foreground),
            ("background", &self.background),
            ("dim", &self.dim),
        ]
    }

    /// Every override must be `#RRGGBB` or `#RRGGBBAA`
    pub fn validate(&self) -> Result<(), ConfigError> {
        let color_regex = regex::Regex::new(r"^#[0-9A-Fa-f]{6}([0-9A-Fa-f]{2})?$")
            .map_err(|e| ConfigError::Parse(format!("color pattern: {e}")))?;

        for (key, value) in self.entries() {
            if let Some(value) = value {
                if !color_regex.is_match(value) {
                    return Err(ConfigError::InvalidColor {
                        key: format!("palette.{}", key),
                        value: value.clone(),
                    });
                }
            }
        }
        if let Some(opacity) = self.sector_opacity {
            if !(0.0..=1.0).contains(&opacity) {
                return Err(ConfigError::InvalidValue {
                    key: "palette.sector_opacity".to_string(),
                    value: opacity,
                });
            }
        }
        Ok(())
    }

    /// Apply overrides on top of a base theme
    pub fn apply(&self, base: Theme) -> Result<Theme, ConfigError> {
        self.validate()?;
        let mut theme = base;
        let slots: [(&Option<String>, &mut Color); 11] = [
            (&self.fire, &mut theme.fire),
            (&self.earth, &mut theme.earth),
            (&self.air, &mut theme.air),
            (&self.water, &mut theme.water),
            (&self.points, &mut theme.points),
            (&self.asteroids, &mut theme.asteroids),
            (&self.angle, &mut theme.angle),
            (&self.others, &mut theme.others),
            (&self.foreground, &mut theme.foreground),
            (&self.background, &mut theme.background),
            (&self.dim, &mut theme.dim),
        ];
        for (value, slot) in slots {
            if let Some(color) = value.as_deref().and_then(Color::from_hex) {
                *slot = color;
            }
        }
        if let Some(opacity) = self.sector_opacity {
            theme.sector_opacity = opacity;
        }
        Ok(theme)
    }
}
