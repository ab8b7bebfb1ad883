//! End-to-end render: raw positions in, SVG plus reusable chart facts out.

use crate::aspects::{AspectCalculator, AspectCatalog, AspectSet};
use crate::catalog::{BodyId, Dignity, Sign};
use crate::chart::{find_stelliums, ChartData, CompositeCalculator, Stellium};
use crate::config::WheelConfig;
use crate::ephemeris::ChartPositions;
use crate::error::ChartError;
use crate::houses::HouseCusp;
use crate::layout::{ChartGeometry, WheelAssembler};
use crate::rendering::{ChartSpecGenerator, SvgWriter, Theme};
use serde::{Deserialize, Serialize};
use std::fmt;

/// What the wheel shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WheelKind {
    #[default]
    Natal,
    /// Midpoint chart of two sources, drawn as a single chart
    Composite,
    Synastry,
    Transit,
}

impl WheelKind {
    pub fn key(self) -> &'static str {
        match self {
            WheelKind::Natal => "natal",
            WheelKind::Composite => "composite",
            WheelKind::Synastry => "synastry",
            WheelKind::Transit => "transit",
        }
    }

    pub fn needs_second_chart(self) -> bool {
        !matches!(self, WheelKind::Natal)
    }
}

impl fmt::Display for WheelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for WheelKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "natal" | "radix" => Ok(WheelKind::Natal),
            "composite" => Ok(WheelKind::Composite),
            "synastry" => Ok(WheelKind::Synastry),
            "transit" | "transits" => Ok(WheelKind::Transit),
            other => Err(format!("unknown wheel kind: {}", other)),
        }
    }
}

/// One render request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WheelRequest {
    pub kind: WheelKind,
    pub primary: ChartPositions,
    pub secondary: Option<ChartPositions>,
}

impl WheelRequest {
    pub fn natal(chart: ChartPositions) -> Self {
        Self {
            kind: WheelKind::Natal,
            primary: chart,
            secondary: None,
        }
    }

    pub fn with_second(kind: WheelKind, primary: ChartPositions, secondary: ChartPositions) -> Self {
        Self {
            kind,
            primary,
            secondary: Some(secondary),
        }
    }
}

/// Where a displayed body landed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyPlacement {
    pub chart: String,
    pub body: BodyId,
    pub longitude: f64,
    pub sign: Sign,
    pub degree: u8,
    pub minute: u8,
    pub house: u8,
    pub retrograde: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dignity: Option<Dignity>,
}

/// Cusps of one chart with the sign and ruler of each
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartHouses {
    pub chart: String,
    pub cusps: Vec<HouseCusp>,
}

/// Result of a render
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WheelOutput {
    #[serde(skip)]
    pub svg: String,
    pub aspects: AspectSet,
    pub placements: Vec<BodyPlacement>,
    pub houses: Vec<ChartHouses>,
    pub stelliums: Vec<Stellium>,
}

/// Renders wheels with one validated configuration
#[derive(Debug, Clone)]
pub struct WheelRenderer<'c> {
    config: WheelConfig,
    theme: Theme,
    catalog: &'c AspectCatalog,
}

impl WheelRenderer<'static> {
    /// Validates `config` up front so every later render sees a consistent setup
    pub fn new(config: WheelConfig) -> Result<Self, ChartError> {
        Self::with_catalog(config, AspectCatalog::standard())
    }
}

impl<'c> WheelRenderer<'c> {
    pub fn with_catalog(config: WheelConfig, catalog: &'c AspectCatalog) -> Result<Self, ChartError> {
        config.validate()?;
        let theme = config.resolved_theme()?;
        Ok(Self {
            config,
            theme,
            catalog,
        })
    }

    pub fn config(&self) -> &WheelConfig {
        &self.config
    }

    /// Render a request. Either the whole wheel is produced or an error is returned.
    pub fn render(&self, request: &WheelRequest) -> Result<WheelOutput, ChartError> {
        let secondary = match (&request.secondary, request.kind.needs_second_chart()) {
            (Some(chart), true) => Some(chart),
            (None, true) => return Err(ChartError::MissingSecondChart(request.kind.to_string())),
            (_, false) => None,
        };
        let display = &self.config.display;
        let calculator = AspectCalculator::new(self.catalog, self.config.aspects.clone());

        let (primary, secondary) = match (request.kind, secondary) {
            (WheelKind::Composite, Some(other)) => {
                let composite = CompositeCalculator::composite(&request.primary, other)?;
                (ChartData::from_positions(&composite, display)?, None)
            }
            (_, Some(other)) => (
                ChartData::from_positions(&request.primary, display)?,
                Some(ChartData::from_positions(other, display)?),
            ),
            (_, None) => (ChartData::from_positions(&request.primary, display)?, None),
        };

        let aspects = match &secondary {
            Some(other) => calculator.inter_chart(&primary, other),
            None => calculator.intra_chart(&primary),
        };

        let canvas = &self.config.canvas;
        let geometry = ChartGeometry::new(canvas.width, canvas.height, &self.config.chart)?;
        let name = wheel_name(request.kind, &primary, secondary.as_ref());
        let wheel = WheelAssembler::build_wheel(
            &name,
            &primary,
            secondary.as_ref(),
            &aspects,
            geometry,
            &self.config.chart,
        );

        let spec = ChartSpecGenerator::new(self.theme, self.config.chart.clone()).generate(&wheel);
        let svg = SvgWriter::write(&spec);

        let charts: Vec<&ChartData> = std::iter::once(&primary).chain(secondary.as_ref()).collect();
        let placements = charts.iter().flat_map(|c| placements_of(c)).collect();
        let houses = charts
            .iter()
            .map(|c| ChartHouses {
                chart: c.label.clone(),
                cusps: c.houses.cusps(),
            })
            .collect();
        let stelliums = charts
            .iter()
            .flat_map(|c| find_stelliums(&c.label, &c.bodies))
            .collect();

        log::info!(
            "rendered {} wheel '{}': {} aspects, {} shapes",
            request.kind,
            name,
            aspects.len(),
            spec.shape_count()
        );

        Ok(WheelOutput {
            svg,
            aspects,
            placements,
            houses,
            stelliums,
        })
    }
}

fn wheel_name(kind: WheelKind, primary: &ChartData, secondary: Option<&ChartData>) -> String {
    let label = match secondary {
        Some(other) => format!("{} / {}", primary.label, other.label),
        None => primary.label.clone(),
    };
    if label.trim().trim_matches('/').trim().is_empty() {
        kind.key().to_string()
    } else {
        format!("{} {}", label, kind)
    }
}

fn placements_of(chart: &ChartData) -> Vec<BodyPlacement> {
    chart
        .bodies
        .iter()
        .map(|b| BodyPlacement {
            chart: chart.label.clone(),
            body: b.id,
            longitude: b.longitude,
            sign: b.sign,
            degree: b.degree,
            minute: b.minute,
            house: b.house,
            retrograde: b.retrograde,
            dignity: b.dignity(),
        })
        .collect()
}
