//! Render configuration and its TOML representation.

use crate::aspects::{AspectKind, OrbPolicy, OrbPreset};
use crate::catalog::BodyId;
use crate::error::ConfigError;
use crate::rendering::theme::{PaletteOverrides, Theme, ThemeKind};
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};

/// Canvas size in user units
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: f64,
    /// Defaults to `width`
    pub height: Option<f64>,
}

impl CanvasConfig {
    pub fn height(&self) -> f64 {
        self.height.unwrap_or(self.width)
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: None,
        }
    }
}

/// Stroke, font and layout proportions of the wheel
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChartLayoutConfig {
    pub stroke_width: f64,
    pub stroke_opacity: f64,
    pub font: String,
    /// Font size as a fraction of ring thickness
    pub font_size_fraction: f64,
    /// Minimum symbol separation on the inner body ring, in degrees
    pub inner_min_degree: f64,
    /// Minimum symbol separation on the outer body ring, in degrees
    pub outer_min_degree: f64,
    /// Margin as a fraction of the smaller canvas side
    pub margin_factor: f64,
    /// Ring thickness as a fraction of the outer radius
    pub ring_thickness_fraction: f64,
    pub pos_adj_factor: f64,
}

impl Default for ChartLayoutConfig {
    fn default() -> Self {
        Self {
            stroke_width: 1.0,
            stroke_opacity: 1.0,
            font: "sans-serif".to_string(),
            font_size_fraction: 0.55,
            inner_min_degree: 9.0,
            outer_min_degree: 8.0,
            margin_factor: 0.04,
            ring_thickness_fraction: 0.15,
            pos_adj_factor: 2.2,
        }
    }
}

/// Bodies drawn when the config does not list any
pub fn default_display() -> BTreeSet<BodyId> {
    [
        BodyId::Sun,
        BodyId::Moon,
        BodyId::Mercury,
        BodyId::Venus,
        BodyId::Mars,
        BodyId::Jupiter,
        BodyId::Saturn,
        BodyId::Uranus,
        BodyId::Neptune,
        BodyId::Pluto,
        BodyId::NorthNode,
        BodyId::Ascendant,
        BodyId::Midheaven,
    ]
    .into_iter()
    .collect()
}

/// Complete configuration consumed by the renderer
#[derive(Debug, Clone, PartialEq)]
pub struct WheelConfig {
    pub canvas: CanvasConfig,
    pub chart: ChartLayoutConfig,
    pub theme: ThemeKind,
    pub palette: PaletteOverrides,
    pub aspects: OrbPolicy,
    pub display: BTreeSet<BodyId>,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            canvas: CanvasConfig::default(),
            chart: ChartLayoutConfig::default(),
            theme: ThemeKind::default(),
            palette: PaletteOverrides::default(),
            aspects: OrbPolicy::default(),
            display: default_display(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct AspectsToml {
    preset: OrbPreset,
    orbs: BTreeMap<String, f64>,
    enabled: BTreeMap<String, bool>,
    body_orbs: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct WheelConfigToml {
    canvas: CanvasConfig,
    chart: ChartLayoutConfig,
    theme: ThemeKind,
    palette: PaletteOverrides,
    aspects: AspectsToml,
    display: Option<Vec<String>>,
}

fn parse_aspect(name: &str) -> Result<AspectKind, ConfigError> {
    name.parse::<AspectKind>()
        .map_err(|_| ConfigError::UnknownAspect(name.to_string()))
}

fn parse_body(name: &str) -> Result<BodyId, ConfigError> {
    name.parse::<BodyId>()
        .map_err(|_| ConfigError::UnknownBody(name.to_string()))
}

impl WheelConfig {
    /// Parse and validate a TOML document. Missing tables take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let raw: WheelConfigToml =
            toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;

        let mut aspects = OrbPolicy::from_preset(raw.aspects.preset);
        for (name, orb) in &raw.aspects.orbs {
            aspects.set_orb(parse_aspect(name)?, *orb);
        }
        for (name, enabled) in &raw.aspects.enabled {
            aspects.set_enabled(parse_aspect(name)?, *enabled);
        }
        for (name, adjustment) in &raw.aspects.body_orbs {
            aspects.body_orbs.insert(parse_body(name)?, *adjustment);
        }

        let display = match raw.display {
            Some(names) => names
                .iter()
                .map(|n| parse_body(n))
                .collect::<Result<BTreeSet<_>, _>>()?,
            None => default_display(),
        };

        let config = Self {
            canvas: raw.canvas,
            chart: raw.chart,
            theme: raw.theme,
            palette: raw.palette,
            aspects,
            display,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check ranges and colors. Runs before any render output is produced.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let canvas = [("canvas.width", self.canvas.width), ("canvas.height", self.canvas.height())];
        for (key, value) in canvas {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidValue {
                    key: key.to_string(),
                    value,
                });
            }
        }

        let chart = &self.chart;
        for (key, value) in [
            ("chart.margin_factor", chart.margin_factor),
            ("chart.ring_thickness_fraction", chart.ring_thickness_fraction),
        ] {
            if !(value > 0.0 && value < 1.0) {
                return Err(ConfigError::InvalidFraction {
                    key: key.to_string(),
                    value,
                });
            }
        }
        // the four body/aspect rings must fit inside the outer radius
        if chart.ring_thickness_fraction * 4.0 >= 1.0 {
            return Err(ConfigError::InvalidFraction {
                key: "chart.ring_thickness_fraction".to_string(),
                value: chart.ring_thickness_fraction,
            });
        }
        for (key, value) in [
            ("chart.stroke_width", chart.stroke_width),
            ("chart.font_size_fraction", chart.font_size_fraction),
            ("chart.pos_adj_factor", chart.pos_adj_factor),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidValue {
                    key: key.to_string(),
                    value,
                });
            }
        }
        if !(0.0..=1.0).contains(&chart.stroke_opacity) {
            return Err(ConfigError::InvalidValue {
                key: "chart.stroke_opacity".to_string(),
                value: chart.stroke_opacity,
            });
        }
        for (key, value) in [
            ("chart.inner_min_degree", chart.inner_min_degree),
            ("chart.outer_min_degree", chart.outer_min_degree),
        ] {
            if !(0.0..180.0).contains(&value) {
                return Err(ConfigError::InvalidSeparation {
                    key: key.to_string(),
                    value,
                });
            }
        }

        for (kind, orb) in &self.aspects.orbs {
            if !(orb.is_finite() && *orb >= 0.0) {
                return Err(ConfigError::InvalidOrb {
                    aspect: kind.to_string(),
                    value: *orb,
                });
            }
        }
        for (body, adjustment) in &self.aspects.body_orbs {
            if !adjustment.is_finite() {
                return Err(ConfigError::InvalidValue {
                    key: format!("aspects.body_orbs.{}", body.key()),
                    value: *adjustment,
                });
            }
        }
        for kind in AspectKind::ALL {
            if self.aspects.is_enabled(kind) && self.aspects.orbs.get(&kind) == Some(&0.0) {
                log::warn!("aspect {} is enabled with a zero orb and will never match", kind);
            }
        }

        self.palette.validate()?;
        Ok(())
    }

    /// Selected theme with palette overrides applied
    pub fn resolved_theme(&self) -> Result<Theme, ConfigError> {
        self.palette.apply(self.theme.palette())
    }
}
